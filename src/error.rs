use curve::CurveError;
use crate::interop::{new_obj, set_kv};
use wasm_bindgen::JsValue;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn non_finite(param: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "param", &JsValue::from_str(param));
    err("non_finite", format!("parameter '{}' must be finite", param), Some(d.into()))
}

#[inline]
pub fn out_of_range(param: &str, min: f32, max: f32, got: f32) -> JsValue {
    let d = new_obj();
    set_kv(&d, "param", &JsValue::from_str(param));
    set_kv(&d, "min", &JsValue::from_f64(min as f64));
    set_kv(&d, "max", &JsValue::from_f64(max as f64));
    set_kv(&d, "got", &JsValue::from_f64(got as f64));
    err("out_of_range", format!("parameter '{}' out of range", param), Some(d.into()))
}

/// Typed error object for a core failure; codes come from `CurveError::code`.
pub fn curve_err(e: &CurveError) -> JsValue {
    let d = new_obj();
    match e {
        CurveError::InvalidDegree { len } => {
            set_kv(&d, "len", &JsValue::from_f64(*len as f64));
        }
        CurveError::IndexOutOfRange { index, len } => {
            set_kv(&d, "param", &JsValue::from_str("index"));
            set_kv(&d, "got", &JsValue::from_f64(*index as f64));
            set_kv(&d, "len", &JsValue::from_f64(*len as f64));
        }
        CurveError::CapacityExceeded { capacity } => {
            set_kv(&d, "capacity", &JsValue::from_f64(*capacity as f64));
        }
        CurveError::NonFinite { param } => {
            set_kv(&d, "param", &JsValue::from_str(param));
        }
        CurveError::InvalidSteps { steps } => {
            set_kv(&d, "got", &JsValue::from_f64(*steps as f64));
        }
        CurveError::InvalidConfig(_) => {}
    }
    err(e.code(), e.to_string(), Some(d.into()))
}

/// Turn a core result into `{ ok, value }` / `{ ok: false, error }`.
pub fn from_result<T>(r: curve::Result<T>, to_js: impl FnOnce(T) -> JsValue) -> JsValue {
    match r {
        Ok(v) => ok(to_js(v)),
        Err(e) => {
            log::debug!("rejected: {}", e);
            curve_err(&e)
        }
    }
}
