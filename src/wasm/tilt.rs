use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, MouseEvent};

use super::dom;
use crate::config::TiltConfig;
use crate::tilt::{rest_transform, Tilt};

pub fn init(document: &Document, cfg: &TiltConfig) -> Result<(), JsValue> {
    let cards = dom::query_all(document, cfg.card_selector)?;

    for card in cards {
        let TiltConfig { divisor, perspective_px, lift_px, .. } = *cfg;

        let target = card.clone();
        dom::listen(&card, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else { return };
            let rect = target.get_bounding_client_rect();
            let tilt = Tilt::at(
                f64::from(event.client_x()) - rect.left(),
                f64::from(event.client_y()) - rect.top(),
                rect.width(),
                rect.height(),
                divisor,
            );
            if let Err(err) = target.style().set_property("transform", &tilt.transform(perspective_px, lift_px)) {
                log::warn!("card tilt: {err:?}");
            }
        })?;

        let target = card.clone();
        dom::listen(&card, "mouseleave", move |_| {
            if let Err(err) = target.style().set_property("transform", &rest_transform(perspective_px)) {
                log::warn!("card tilt: {err:?}");
            }
        })?;
    }
    Ok(())
}
