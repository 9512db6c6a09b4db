//! Small helpers over `web_sys` shared by the components.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

/// All `HtmlElement`s matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id).and_then(|e| e.dyn_into().ok())
}

pub fn first_in(root: &Element, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(root.query_selector(selector)?.and_then(|e| e.dyn_into().ok()))
}

/// Attach `handler` for `event` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], but registered passive so scroll is never blocked.
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

pub fn viewport_height(window: &Window) -> Result<f64, JsValue> {
    window.inner_height()?.as_f64().ok_or_else(|| "innerHeight is not a number".into())
}

/// Animated scroll that aligns `target` with the top of the viewport.
pub fn smooth_scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
