use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Node, Window,
};

use super::dom;
use crate::config::RevealConfig;
use crate::reveal::{past_reveal_point, stagger_delay, RevealLatch};

/// Stagger the reveal targets and mark each one revealed the first time it
/// intersects the viewport.
pub fn init(document: &Document, cfg: &RevealConfig) -> Result<(), JsValue> {
    let elements = dom::query_all(document, cfg.selector)?;
    if elements.is_empty() {
        log::debug!("reveal: nothing matches `{}`", cfg.selector);
        return Ok(());
    }

    for (i, el) in elements.iter().enumerate() {
        el.class_list().add_1(cfg.pending_class)?;
        el.style().set_property("transition-delay", &stagger_delay(i, cfg.stagger_secs))?;
    }

    let latch = RefCell::new(RevealLatch::new(elements.len()));
    let revealed_class = cfg.revealed_class;
    let targets: Rc<Vec<HtmlElement>> = Rc::new(elements);
    let observed = Rc::clone(&targets);

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            let node: &Node = &target;
            let index = observed.iter().position(|el| el.is_same_node(Some(node)));
            if let Some(i) = index {
                if latch.borrow_mut().reveal(i) {
                    if let Err(err) = target.class_list().add_1(revealed_class) {
                        log::warn!("reveal: {err:?}");
                    }
                }
            }
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(cfg.threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for el in targets.iter() {
        observer.observe(el);
    }
    callback.forget();

    log::info!("reveal: observing {} elements", targets.len());
    Ok(())
}

/// Activate elements pre-marked with the legacy reveal class once their top
/// edge scrolls above the activation line. Must run before [`init`] so only
/// markup-authored elements are picked up.
pub fn init_legacy(window: &Window, document: &Document, cfg: &RevealConfig) -> Result<(), JsValue> {
    let elements = dom::query_all(document, cfg.legacy_selector)?;
    if elements.is_empty() {
        return Ok(());
    }

    let window_for_scroll = window.clone();
    let active_class = cfg.legacy_active_class;
    let offset = cfg.legacy_offset_px;
    let check = move || -> Result<(), JsValue> {
        let viewport = dom::viewport_height(&window_for_scroll)?;
        for el in &elements {
            if past_reveal_point(el.get_bounding_client_rect().top(), viewport, offset) {
                el.class_list().add_1(active_class)?;
            }
        }
        Ok(())
    };

    check()?;
    dom::listen_passive(window, "scroll", move |_| {
        if let Err(err) = check() {
            log::warn!("legacy reveal: {err:?}");
        }
    })
}
