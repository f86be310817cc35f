use curve::{Pick, PressOutcome, Vec2};
use js_sys::{Float32Array, Object, Reflect};
use wasm_bindgen::JsValue;

pub fn new_obj() -> Object { Object::new() }

pub fn set_kv(obj: &Object, key: &str, val: &JsValue) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), val);
}

pub fn arr_f32(data: &[f32]) -> Float32Array { Float32Array::from(data) }

/// Points as an interleaved x,y Float32Array.
pub fn points_f32(points: &[Vec2]) -> Float32Array { arr_f32(&curve::flatten_xy(points)) }

pub fn vec2_obj(p: Vec2) -> JsValue {
    let o = new_obj();
    set_kv(&o, "x", &JsValue::from_f64(p.x as f64));
    set_kv(&o, "y", &JsValue::from_f64(p.y as f64));
    o.into()
}

pub fn pick_obj(p: Pick) -> JsValue {
    let o = new_obj();
    set_kv(&o, "index", &JsValue::from_f64(p.index as f64));
    set_kv(&o, "dist", &JsValue::from_f64(p.dist as f64));
    o.into()
}

// { kind: 'selected'|'created'|'rejected', index? }
pub fn press_obj(outcome: PressOutcome) -> JsValue {
    let o = new_obj();
    let kind = match outcome {
        PressOutcome::Selected(_) => "selected",
        PressOutcome::Created(_) => "created",
        PressOutcome::Rejected => "rejected",
    };
    set_kv(&o, "kind", &JsValue::from_str(kind));
    if let Some(i) = outcome.index() {
        set_kv(&o, "index", &JsValue::from_f64(i as f64));
    }
    o.into()
}
