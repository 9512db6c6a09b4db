use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Storage, Window};

use super::dom;
use crate::config::ThemeConfig;
use crate::theme::{MemoryStore, PreferenceStore, Theme, ThemeState};

pub type SharedTheme = Rc<RefCell<ThemeState<Box<dyn PreferenceStore>>>>;

/// `localStorage`, scoped to the page's origin.
struct LocalStorage(Storage);

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = self.0.set_item(key, value) {
            log::warn!("theme: could not persist preference: {err:?}");
        }
    }
}

/// Load the stored theme, apply it to the document and wire the toggle
/// control when the page has one.
pub fn init(window: &Window, document: &Document, cfg: &ThemeConfig) -> SharedTheme {
    let store: Box<dyn PreferenceStore> = match window.local_storage() {
        Ok(Some(storage)) => Box::new(LocalStorage(storage)),
        _ => {
            log::warn!("theme: localStorage unavailable, preference will not persist");
            Box::new(MemoryStore::default())
        }
    };
    let state: SharedTheme = Rc::new(RefCell::new(ThemeState::load(store, cfg.storage_key)));

    if let Some(root) = document.document_element() {
        let attribute = cfg.attribute;
        state.borrow_mut().subscribe(move |theme| {
            if let Err(err) = root.set_attribute(attribute, theme.as_str()) {
                log::error!("theme: {err:?}");
            }
        });
    }

    let Some(toggle) = dom::by_id(document, cfg.toggle_id) else {
        log::debug!("theme: no #{}", cfg.toggle_id);
        return state;
    };

    if let Ok(Some(icon)) = toggle.query_selector(cfg.icon_selector) {
        let ThemeConfig { dark_icon_class, light_icon_class, .. } = *cfg;
        state.borrow_mut().subscribe(move |theme| {
            icon.set_class_name(match theme {
                Theme::Dark => dark_icon_class,
                Theme::Light => light_icon_class,
            });
        });
    }

    let shared = Rc::clone(&state);
    let wired = dom::listen(&toggle, "click", move |_| {
        let next = shared.borrow_mut().toggle();
        log::info!("theme: switched to {next}");
    });
    if let Err(err) = wired {
        log::error!("theme: toggle not wired: {err:?}");
    }

    log::info!("theme: {}", state.borrow().current());
    state
}
