use bezier_editor_wasm::Editor;
use js_sys::Reflect;
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Deserialize, Debug, PartialEq)]
struct Xy {
    x: f32,
    y: f32,
}

fn get_f64(v: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(v, &JsValue::from_str(key)).ok().and_then(|x| x.as_f64())
}

fn get_str(v: &JsValue, key: &str) -> Option<String> {
    Reflect::get(v, &JsValue::from_str(key)).ok().and_then(|x| x.as_string())
}

#[wasm_bindgen_test]
fn default_editor_draws_default_cubic() {
    let ed = Editor::new();
    assert_eq!(ed.point_count(), 4);
    assert_eq!(ed.degree(), Some(3));
    assert_eq!(ed.get_points().length(), 8);
    let poly = ed.curve_polyline().to_vec();
    assert_eq!(poly.len(), 202);
    assert_eq!(&poly[..2], &[-0.7, -0.5]);
    assert_eq!(&poly[200..], &[0.7, -0.5]);
}

#[wasm_bindgen_test]
fn points_and_evaluation() {
    let mut ed = Editor::new();
    ed.clear();
    assert!(ed.append_point(0.0, 0.0));
    assert!(ed.append_point(1.0, 2.0));
    assert!(ed.append_point(2.0, 0.0));
    let r = ed.evaluate_res(0.5);
    let value = Reflect::get(&r, &JsValue::from_str("value")).unwrap();
    let p: Xy = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(p, Xy { x: 1.0, y: 1.0 });

    assert!(ed.move_point(1, 1.0, 4.0));
    let p: Xy = serde_wasm_bindgen::from_value(ed.get_point(1)).unwrap();
    assert_eq!(p, Xy { x: 1.0, y: 4.0 });
    assert!(ed.remove_point(0));
    assert_eq!(ed.point_count(), 2);
    assert!(ed.get_point(2).is_null());
    assert_eq!(ed.sample_polyline(10).length(), 22);
}

#[wasm_bindgen_test]
fn pick_uses_configured_radius() {
    let ed = Editor::new();
    let hit = ed.pick(-0.69, -0.5);
    assert_eq!(get_f64(&hit, "index"), Some(0.0));
    assert!(ed.pick(0.0, 0.0).is_null());
    let r = ed.pick_res(0.0, 0.0, 1.0);
    let value = Reflect::get(&r, &JsValue::from_str("value")).unwrap();
    assert!(get_f64(&value, "index").is_some());
}

#[wasm_bindgen_test]
fn press_drag_release_cycle() {
    let mut ed = Editor::new();
    let out = ed.press(0.0, 0.9);
    assert_eq!(get_str(&out, "kind").as_deref(), Some("created"));
    assert_eq!(get_f64(&out, "index"), Some(4.0));
    assert!(ed.is_dragging());
    assert!(ed.drag(0.1, 0.8));
    ed.release();
    assert_eq!(ed.selected(), None);
    let p: Xy = serde_wasm_bindgen::from_value(ed.get_point(4)).unwrap();
    assert_eq!(p, Xy { x: 0.1, y: 0.8 });

    let out = ed.press(0.7, -0.5);
    assert_eq!(get_str(&out, "kind").as_deref(), Some("selected"));
    ed.release();
    assert_eq!(ed.secondary_press(0.7, -0.5), Some(3));
    assert_eq!(ed.point_count(), 4);
}

#[wasm_bindgen_test]
fn screen_events_go_through_viewport() {
    let mut ed = Editor::new();
    assert!(ed.set_viewport(600, 600, 1.0));
    assert!(!ed.set_viewport(600, 600, 0.0));
    let w: Xy = serde_wasm_bindgen::from_value(ed.screen_to_world(300.0, 0.0)).unwrap();
    assert_eq!(w, Xy { x: 0.0, y: 1.0 });
    // (-0.7, -0.5) sits at pixel (90, 450)
    let out = ed.press_screen(90.0, 450.0);
    assert_eq!(get_str(&out, "kind").as_deref(), Some("selected"));
    assert!(ed.drag_screen(300.0, 300.0));
    ed.release();
    let p: Xy = serde_wasm_bindgen::from_value(ed.get_point(0)).unwrap();
    assert_eq!(p, Xy { x: 0.0, y: 0.0 });
    assert_eq!(ed.secondary_press_screen(300.0, 300.0), Some(0));
}

#[wasm_bindgen_test]
fn config_object_is_applied() {
    let cfg = js_sys::Object::new();
    Reflect::set(&cfg, &JsValue::from_str("sample_steps"), &JsValue::from_f64(10.0)).unwrap();
    Reflect::set(&cfg, &JsValue::from_str("max_points"), &JsValue::NULL).unwrap();
    let mut ed = Editor::with_config(cfg.into()).unwrap();
    assert_eq!(ed.curve_polyline().length(), 22);
    for i in 0..40 {
        assert!(ed.append_point(i as f32, 3.0));
    }
    assert_eq!(ed.point_count(), 44);
}
