use std::cell::Cell;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use super::dom;
use crate::config::ProgressConfig;
use crate::progress::{bar_width, ProgressSpan};

pub fn init(window: &Window, document: &Document, cfg: &ProgressConfig) -> Result<(), JsValue> {
    let Some(bar) = dom::by_id(document, cfg.bar_id) else {
        log::debug!("reading progress: no #{}", cfg.bar_id);
        return Ok(());
    };
    let Some(article) = document
        .query_selector(cfg.content_selector)?
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("reading progress: no `{}`", cfg.content_selector);
        return Ok(());
    };

    let win = window.clone();
    let warned = Cell::new(false);
    let update = move || -> Result<(), JsValue> {
        let span = ProgressSpan::new(
            f64::from(article.offset_top()),
            f64::from(article.offset_height()),
            dom::viewport_height(&win)?,
        );
        match span.fraction(win.scroll_y()?) {
            Ok(fraction) => bar.style().set_property("width", &bar_width(fraction))?,
            // bar keeps its last width
            Err(err) if !warned.replace(true) => log::warn!("reading progress: {err}"),
            Err(_) => {}
        }
        Ok(())
    };

    update()?;
    dom::listen_passive(window, "scroll", move |_| {
        if let Err(err) = update() {
            log::warn!("reading progress: {err:?}");
        }
    })
}
