use crate::Editor;
use js_sys::Float32Array;
use wasm_bindgen::prelude::*;
type JsValue = wasm_bindgen::JsValue;
use crate::error;
use crate::interop;
use curve::geometry::limits::PICK_RADIUS_MAX;
use curve::{EditorConfig, Vec2};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Editor {
        crate::Editor::rs_new()
    }
    /// `{ pick_radius?, sample_steps?, max_points? }`; throws a typed error object.
    pub fn with_config(config: JsValue) -> Result<Editor, JsValue> {
        let cfg: EditorConfig = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| {
                error::curve_err(&curve::CurveError::InvalidConfig(e.to_string()))
            })?
        };
        crate::Editor::rs_with_config(cfg).map_err(|e| error::curve_err(&e))
    }
    pub fn version(&self) -> u64 {
        self.session.points().version()
    }

    // Points
    pub fn point_count(&self) -> u32 {
        self.session.points().len() as u32
    }
    pub fn degree(&self) -> Option<u32> {
        self.session.points().degree().map(|d| d as u32)
    }
    pub fn get_points(&self) -> Float32Array {
        interop::points_f32(self.session.control_polygon())
    }
    pub fn get_point(&self, index: u32) -> JsValue {
        match self.session.points().get(index as usize) {
            Some(p) => interop::vec2_obj(p),
            None => JsValue::NULL,
        }
    }
    pub fn append_point(&mut self, x: f32, y: f32) -> bool {
        self.session.points_mut().append(Vec2::new(x, y)).is_ok()
    }
    pub fn append_point_res(&mut self, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        let r = self.session.points_mut().append(Vec2::new(x, y));
        error::from_result(r, |i| JsValue::from_f64(i as f64))
    }
    pub fn move_point(&mut self, index: u32, x: f32, y: f32) -> bool {
        self.session.points_mut().move_point(index as usize, Vec2::new(x, y)).is_ok()
    }
    pub fn move_point_res(&mut self, index: u32, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        let r = self.session.points_mut().move_point(index as usize, Vec2::new(x, y));
        error::from_result(r, interop::vec2_obj)
    }
    pub fn remove_point(&mut self, index: u32) -> bool {
        self.session.remove_point(index as usize).is_ok()
    }
    pub fn remove_point_res(&mut self, index: u32) -> JsValue {
        let r = self.session.remove_point(index as usize);
        error::from_result(r, interop::vec2_obj)
    }
    pub fn clear(&mut self) {
        self.session.clear();
    }
    pub fn reset(&mut self) -> bool {
        self.session.reset_to_default().is_ok()
    }

    // Picking, with the configured radius
    pub fn pick(&self, x: f32, y: f32) -> JsValue {
        let radius = self.session.config().pick_radius;
        match self.session.points().pick_nearest(radius, Vec2::new(x, y)) {
            Some(p) => interop::pick_obj(p),
            None => JsValue::NULL,
        }
    }
    pub fn pick_res(&self, x: f32, y: f32, radius: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        if !radius.is_finite() {
            return error::non_finite("radius");
        }
        if radius <= 0.0 || radius > PICK_RADIUS_MAX {
            return error::out_of_range("radius", 0.0, PICK_RADIUS_MAX, radius);
        }
        match self.session.points().pick_nearest(radius, Vec2::new(x, y)) {
            Some(p) => error::ok(interop::pick_obj(p)),
            None => error::ok(JsValue::NULL),
        }
    }

    // Curve
    pub fn evaluate_res(&self, t: f32) -> JsValue {
        if !t.is_finite() {
            return error::non_finite("t");
        }
        error::from_result(self.session.points().evaluate(t), interop::vec2_obj)
    }
    pub fn sample_polyline(&self, steps: u32) -> Float32Array {
        match self.session.points().sample(steps) {
            Ok(pts) => interop::points_f32(&pts),
            Err(_) => interop::arr_f32(&[]),
        }
    }
    pub fn sample_polyline_res(&self, steps: u32) -> JsValue {
        let r = self.session.points().sample(steps);
        error::from_result(r, |pts| interop::points_f32(&pts).into())
    }
    /// Curve at the configured resolution, empty below 2 points.
    pub fn curve_polyline(&self) -> Float32Array {
        interop::points_f32(&self.session.curve_polyline())
    }

    // Pointer events in world space
    pub fn press(&mut self, x: f32, y: f32) -> JsValue {
        interop::press_obj(self.session.primary_press(Vec2::new(x, y)))
    }
    pub fn drag(&mut self, x: f32, y: f32) -> bool {
        self.session.drag_to(Vec2::new(x, y))
    }
    pub fn release(&mut self) {
        self.session.release();
    }
    pub fn secondary_press(&mut self, x: f32, y: f32) -> Option<u32> {
        self.session.secondary_press(Vec2::new(x, y)).map(|(i, _)| i as u32)
    }
    pub fn selected(&self) -> Option<u32> {
        self.session.selected().map(|i| i as u32)
    }
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    // Pointer events in canvas pixels
    pub fn set_viewport(&mut self, width: u32, height: u32, world_size: f32) -> bool {
        if !world_size.is_finite() || world_size <= 0.0 {
            return false;
        }
        self.viewport = curve::Viewport::new(width, height, world_size);
        true
    }
    pub fn screen_to_world(&self, sx: f32, sy: f32) -> JsValue {
        interop::vec2_obj(self.viewport.screen_to_world(sx, sy))
    }
    pub fn press_screen(&mut self, sx: f32, sy: f32) -> JsValue {
        let p = self.viewport.screen_to_world(sx, sy);
        interop::press_obj(self.session.primary_press(p))
    }
    pub fn drag_screen(&mut self, sx: f32, sy: f32) -> bool {
        let p = self.viewport.screen_to_world(sx, sy);
        self.session.drag_to(p)
    }
    pub fn secondary_press_screen(&mut self, sx: f32, sy: f32) -> Option<u32> {
        let p = self.viewport.screen_to_world(sx, sy);
        self.session.secondary_press(p).map(|(i, _)| i as u32)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
