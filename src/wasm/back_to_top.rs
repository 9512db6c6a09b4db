use wasm_bindgen::JsValue;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use super::dom;
use crate::config::BackToTopConfig;
use crate::progress::back_to_top_visible;

pub fn init(window: &Window, document: &Document, cfg: &BackToTopConfig) -> Result<(), JsValue> {
    let Some(button) = dom::by_id(document, cfg.button_id) else {
        log::debug!("back to top: no #{}", cfg.button_id);
        return Ok(());
    };

    let win = window.clone();
    dom::listen(&button, "click", move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    })?;

    let win = window.clone();
    let threshold = cfg.threshold_px;
    let visible_class = cfg.visible_class;
    let toggle = move || -> Result<(), JsValue> {
        let visible = back_to_top_visible(win.scroll_y()?, threshold);
        button.class_list().toggle_with_force(visible_class, visible)?;
        Ok(())
    };

    toggle()?;
    dom::listen_passive(window, "scroll", move |_| {
        if let Err(err) = toggle() {
            log::warn!("back to top: {err:?}");
        }
    })
}
