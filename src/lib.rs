#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Page enhancements for a static blog.
//!
//! The portable modules below hold the math and state for each effect and
//! build on every target so they can be tested on the host. The browser glue
//! that binds them to the live document only compiles for wasm32.

pub mod config;
pub mod error;
pub mod filter;
pub mod particles;
pub mod post;
pub mod progress;
pub mod reveal;
pub mod theme;
pub mod tilt;

pub use config::Config;
pub use error::{Error, Result};

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Window};

    use crate::config::Config;

    pub mod anchors;
    pub mod back_to_top;
    pub mod dom;
    pub mod filter;
    pub mod progress;
    pub mod render;
    pub mod reveal;
    pub mod share;
    pub mod theme;
    pub mod tilt;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        // a second init (e.g. in a test harness) is harmless
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        if document.ready_state() == "loading" {
            let target = document.clone();
            dom::listen(&target, "DOMContentLoaded", move |_| {
                enhance(&window, &document, &Config::default());
            })?;
        } else {
            enhance(&window, &document, &Config::default());
        }
        Ok(())
    }

    /// Run every initializer once. A failing component is logged and does not
    /// stop the others.
    pub fn enhance(window: &Window, document: &Document, cfg: &Config) {
        let theme = theme::init(window, document, &cfg.theme);

        report("legacy reveal", reveal::init_legacy(window, document, &cfg.reveal));
        report("reveal", reveal::init(document, &cfg.reveal));
        report("reading progress", progress::init(window, document, &cfg.progress));
        report("back to top", back_to_top::init(window, document, &cfg.back_to_top));
        report("category filter", filter::init(document, cfg));
        report("card tilt", tilt::init(document, &cfg.tilt));
        report("share", share::init(window, document, &cfg.share));
        report("smooth scroll", anchors::init(document, &cfg.scroll));
        report("particles", render::start(window, document, &cfg.particles, &theme).map(drop));
    }

    fn report(component: &str, result: Result<(), JsValue>) {
        if let Err(err) = result {
            log::error!("{component} failed to initialize: {err:?}");
        }
    }
}
