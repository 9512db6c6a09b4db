use wasm_bindgen::JsValue;
use web_sys::Document;

use super::dom;
use crate::config::ScrollConfig;

/// Smooth-scroll same-page anchors and the hero's scroll-down control.
pub fn init(document: &Document, cfg: &ScrollConfig) -> Result<(), JsValue> {
    for anchor in dom::query_all(document, cfg.anchor_selector)? {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else { return };
            let Some(id) = target_id(&href) else { return };
            if let Some(target) = doc.get_element_by_id(id) {
                event.prevent_default();
                dom::smooth_scroll_to(&target);
            }
        })?;
    }

    if let Some(hero_down) = dom::by_id(document, cfg.hero_down_id) {
        let doc = document.clone();
        let posts_id = cfg.posts_id;
        dom::listen(&hero_down, "click", move |_| {
            if let Some(posts) = doc.get_element_by_id(posts_id) {
                dom::smooth_scroll_to(&posts);
            }
        })?;
    }
    Ok(())
}

/// Element id a same-page link points at; `None` for a bare `#`.
fn target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
