use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;
mod logging;

pub use logging::init_logging;

#[wasm_bindgen]
pub struct Editor {
    pub(crate) session: curve::EditorSession,
    pub(crate) viewport: curve::Viewport,
}

impl Editor {
    pub fn rs_new() -> Editor {
        Editor { session: curve::EditorSession::default(), viewport: curve::Viewport::default() }
    }
    pub fn rs_with_config(config: curve::EditorConfig) -> curve::Result<Editor> {
        Ok(Editor { session: curve::EditorSession::new(config)?, viewport: curve::Viewport::default() })
    }
}
