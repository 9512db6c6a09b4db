//! Hero particle background.
//!
//! This is the only place that touches the hero's 2D context. The field
//! itself lives in [`crate::particles`]; here it is sized to the hero,
//! redrawn every animation frame and torn down on unload.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, Window};

use super::dom;
use super::theme::SharedTheme;
use crate::config::{ParticleConfig, Rgb};
use crate::particles::{color_for, Painter, ParticleField};

struct CanvasPainter<'a>(&'a CanvasRenderingContext2d);

impl Painter for CanvasPainter<'_> {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) {
        self.0.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, style: &str) -> Result<(), JsValue> {
        self.0.begin_path();
        self.0.arc(x, y, radius, 0.0, std::f64::consts::TAU)?;
        self.0.set_fill_style_str(style);
        self.0.fill();
        Ok(())
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, style: &str) {
        self.0.begin_path();
        self.0.set_stroke_style_str(style);
        self.0.set_line_width(width);
        self.0.move_to(from.0, from.1);
        self.0.line_to(to.0, to.1);
        self.0.stroke();
    }
}

/// Animation loop state. Unload moves it to `Stopped` for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Loop {
    Running { frame: Option<i32> },
    Stopped,
}

struct LoopInner {
    window: Window,
    state: Cell<Loop>,
    frame_cb: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// Handle to a running particle loop.
#[derive(Clone)]
pub struct ParticleLoop {
    inner: Rc<LoopInner>,
}

impl ParticleLoop {
    pub fn is_running(&self) -> bool {
        self.inner.state.get() != Loop::Stopped
    }

    /// Cancel the pending frame and release the frame closure. Idempotent.
    pub fn stop(&self) {
        if let Loop::Running { frame: Some(id) } = self.inner.state.replace(Loop::Stopped) {
            if let Err(err) = self.inner.window.cancel_animation_frame(id) {
                log::warn!("particles: cancel failed: {err:?}");
            }
        }
        self.inner.frame_cb.borrow_mut().take();
    }

    fn schedule(&self) {
        let next = self
            .inner
            .frame_cb
            .borrow()
            .as_ref()
            .map(|cb| self.inner.window.request_animation_frame(cb.as_ref().unchecked_ref()));
        match next {
            Some(Ok(id)) => self.inner.state.set(Loop::Running { frame: Some(id) }),
            Some(Err(err)) => {
                log::error!("particles: could not schedule frame: {err:?}");
                self.inner.state.set(Loop::Stopped);
            }
            None => self.inner.state.set(Loop::Stopped),
        }
    }
}

/// Size the canvas to the hero's box and return the new dimensions.
fn fit(canvas: &HtmlCanvasElement, hero: &HtmlElement) -> (f64, f64) {
    let (w, h) = (hero.offset_width().max(0), hero.offset_height().max(0));
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    (f64::from(w), f64::from(h))
}

fn find_hero(document: &Document, canvas: &HtmlCanvasElement, cfg: &ParticleConfig) -> Result<Option<HtmlElement>, JsValue> {
    if let Some(hero) = dom::by_id(document, cfg.hero_id) {
        return Ok(Some(hero));
    }
    Ok(canvas.closest(cfg.hero_overlay_selector)?.and_then(|e| e.dyn_into().ok()))
}

/// Start the particle loop inside the hero banner. Returns `None` when the
/// page has no hero canvas.
pub fn start(
    window: &Window,
    document: &Document,
    cfg: &ParticleConfig,
    theme: &SharedTheme,
) -> Result<Option<ParticleLoop>, JsValue> {
    let Some(canvas) = document
        .get_element_by_id(cfg.canvas_id)
        .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
    else {
        log::debug!("particles: no #{}", cfg.canvas_id);
        return Ok(None);
    };
    let Some(hero) = find_hero(document, &canvas, cfg)? else {
        log::debug!("particles: canvas has no hero container");
        return Ok(None);
    };
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or("2d canvas not supported")?
        .dyn_into()?;

    let (width, height) = fit(&canvas, &hero);
    let field = Rc::new(RefCell::new(ParticleField::new(cfg.clone(), width, height, &mut js_sys::Math::random)));
    let seeded = field.borrow().particles().len();

    // theme changes push a new color; frames never look at the document
    let color: Rc<Cell<Rgb>> = Rc::new(Cell::new(cfg.dark_color));
    {
        let color = Rc::clone(&color);
        let cfg = cfg.clone();
        theme.borrow_mut().subscribe(move |t| color.set(color_for(&cfg, t)));
    }

    // Resize: re-measure and regenerate the whole field
    {
        let field = Rc::clone(&field);
        dom::listen(window, "resize", move |_| {
            let (w, h) = fit(&canvas, &hero);
            field.borrow_mut().resize(w, h, &mut js_sys::Math::random);
        })?;
    }

    // Animation loop
    // `frame_cb` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself. `stop` takes it out, breaking the cycle.
    let handle = ParticleLoop {
        inner: Rc::new(LoopInner {
            window: window.clone(),
            state: Cell::new(Loop::Running { frame: None }),
            frame_cb: RefCell::new(None),
        }),
    };
    {
        let this = handle.clone();
        *handle.inner.frame_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !this.is_running() {
                return;
            }
            if let Err(err) = field.borrow_mut().frame(&mut CanvasPainter(&ctx), color.get()) {
                log::warn!("particles: draw failed: {err:?}");
            }
            // schedule next
            this.schedule();
        }) as Box<dyn FnMut()>));
    }
    handle.schedule();

    // Unload: cancel the pending frame and release the loop closure
    {
        let this = handle.clone();
        dom::listen(window, "beforeunload", move |_| {
            this.stop();
            log::debug!("particles: stopped");
        })?;
    }

    log::info!("particles: {seeded} in {width}x{height}");
    Ok(Some(handle))
}
