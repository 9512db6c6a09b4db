use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use super::dom;
use crate::config::Config;
use crate::filter::CategoryFilter;

struct FilterView {
    state: RefCell<CategoryFilter>,
    pills: Vec<HtmlElement>,
    cards: Vec<HtmlElement>,
    active_class: &'static str,
    revealed_class: &'static str,
}

impl FilterView {
    fn select(&self, index: usize) -> Result<(), JsValue> {
        let mut state = self.state.borrow_mut();
        if !state.select(index) {
            return Ok(());
        }
        for (i, pill) in self.pills.iter().enumerate() {
            pill.class_list().toggle_with_force(self.active_class, state.is_active(i))?;
        }
        for (i, card) in self.cards.iter().enumerate() {
            if state.shows(i) {
                card.style().remove_property("display")?;
                card.class_list().add_1(self.revealed_class)?;
            } else {
                card.style().set_property("display", "none")?;
            }
        }
        log::debug!("category filter: {}", state.selected_label());
        Ok(())
    }
}

/// Build one pill per category inside the filter container and wire each to
/// show only the matching cards.
pub fn init(document: &Document, cfg: &Config) -> Result<(), JsValue> {
    let fc = &cfg.filter;
    let Some(container) = dom::by_id(document, fc.container_id) else {
        log::debug!("category filter: no #{}", fc.container_id);
        return Ok(());
    };
    let cards = dom::query_all(document, fc.card_selector)?;
    if cards.is_empty() {
        log::debug!("category filter: no cards");
        return Ok(());
    }

    let state = CategoryFilter::new(fc.all_label, cards.iter().map(|c| c.get_attribute(fc.category_attr)));

    let mut pills = Vec::with_capacity(state.categories().len());
    for (i, label) in state.categories().iter().enumerate() {
        let pill: HtmlElement = document.create_element("button")?.dyn_into()?;
        pill.set_class_name(fc.pill_class);
        if state.is_active(i) {
            pill.class_list().add_1(fc.active_class)?;
        }
        pill.set_text_content(Some(label.as_str()));
        container.append_child(&pill)?;
        pills.push(pill);
    }

    let count = pills.len();
    let view = Rc::new(FilterView {
        state: RefCell::new(state),
        pills,
        cards,
        active_class: fc.active_class,
        revealed_class: cfg.reveal.revealed_class,
    });

    for (i, pill) in view.pills.iter().enumerate() {
        let view = Rc::clone(&view);
        dom::listen(pill, "click", move |_| {
            if let Err(err) = view.select(i) {
                log::warn!("category filter: {err:?}");
            }
        })?;
    }

    log::info!("category filter: {count} categories");
    Ok(())
}
