use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Clipboard, Document, Window};

use super::dom;
use crate::config::ShareConfig;

/// Copy the page URL on click and briefly show a confirmation in place of
/// the control's label.
pub fn init(window: &Window, document: &Document, cfg: &ShareConfig) -> Result<(), JsValue> {
    let Some(container) = dom::by_id(document, cfg.container_id) else {
        log::debug!("share: no #{}", cfg.container_id);
        return Ok(());
    };
    let Some(copy) = dom::first_in(&container, cfg.copy_selector)? else {
        log::debug!("share: no `{}`", cfg.copy_selector);
        return Ok(());
    };

    // restoring to the pristine label keeps rapid double clicks from
    // leaving the confirmation in place
    let label = copy.inner_html();
    let ShareConfig { feedback_html, feedback_ms, .. } = *cfg;
    let window = window.clone();
    let control = copy.clone();

    dom::listen(&copy, "click", move |event| {
        event.prevent_default();
        let window = window.clone();
        let control = control.clone();
        let label = label.clone();
        spawn_local(async move {
            match copy_page_url(&window).await {
                Ok(()) => {
                    control.set_inner_html(feedback_html);
                    Timeout::new(feedback_ms, move || control.set_inner_html(&label)).forget();
                }
                Err(err) => log::warn!("share: clipboard write failed: {err:?}"),
            }
        });
    })
}

async fn copy_page_url(window: &Window) -> Result<(), JsValue> {
    let href = window.location().href()?;
    // navigator.clipboard is undefined outside secure contexts
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err("clipboard API unavailable".into());
    }
    let clipboard: Clipboard = clipboard.unchecked_into();
    JsFuture::from(clipboard.write_text(&href)).await?;
    Ok(())
}
