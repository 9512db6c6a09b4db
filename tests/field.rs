use std::cell::RefCell;
use std::rc::Rc;

use blogfx::config::ParticleConfig;
use blogfx::particles::{color_for, rgba, Painter, ParticleField};
use blogfx::theme::{MemoryStore, Theme, ThemeState};

#[derive(Debug, PartialEq)]
enum Call {
    Clear(f64, f64),
    Circle { x: f64, y: f64, style: String },
    Line { style: String },
}

#[derive(Default)]
struct Recorder(Vec<Call>);

impl Painter for Recorder {
    type Error = ();

    fn clear(&mut self, width: f64, height: f64) {
        self.0.push(Call::Clear(width, height));
    }

    fn fill_circle(&mut self, x: f64, y: f64, _radius: f64, style: &str) -> Result<(), ()> {
        self.0.push(Call::Circle { x, y, style: style.to_owned() });
        Ok(())
    }

    fn stroke_line(&mut self, _from: (f64, f64), _to: (f64, f64), _width: f64, style: &str) {
        self.0.push(Call::Line { style: style.to_owned() });
    }
}

/// Two particles side by side, 30px apart, drifting right.
fn pair() -> ParticleField {
    let mut field = ParticleField::new(ParticleConfig::default(), 24.0, 24.0, &mut || 0.5);
    let ps = field.particles_mut();
    ps[0].x = 0.0;
    ps[1].x = 30.0;
    for p in ps.iter_mut() {
        p.y = 10.0;
        p.vx = 0.2;
        p.vy = 0.0;
        p.opacity = 0.5;
    }
    field
}

#[test]
fn frame_draws_then_moves_then_links() {
    let mut field = pair();
    let mut rec = Recorder::default();
    field.frame(&mut rec, (1, 2, 3)).unwrap();

    assert_eq!(rec.0[0], Call::Clear(24.0, 24.0));
    assert_eq!(rec.0[1], Call::Circle { x: 0.0, y: 10.0, style: "rgba(1, 2, 3, 0.5)".into() });
    assert_eq!(rec.0[2], Call::Circle { x: 30.0, y: 10.0, style: "rgba(1, 2, 3, 0.5)".into() });
    let link = field.links()[0];
    assert!((link.opacity - 0.42).abs() < 1e-9);
    assert_eq!(rec.0[3], Call::Line { style: rgba((1, 2, 3), link.opacity) });
    assert_eq!(rec.0.len(), 4);

    assert_eq!(field.particles()[0].x, 0.2);
    // second particle was already past the right edge and turns around
    assert_eq!(field.particles()[1].vx, -0.2);
}

#[test]
fn particle_color_follows_theme_subscription() {
    let cfg = ParticleConfig::default();
    let color = Rc::new(RefCell::new((0, 0, 0)));
    let mut theme = ThemeState::load(MemoryStore::default(), "theme");
    {
        let color = Rc::clone(&color);
        let cfg = cfg.clone();
        theme.subscribe(move |t| *color.borrow_mut() = color_for(&cfg, t));
    }
    assert_eq!(*color.borrow(), (96, 165, 250));

    theme.toggle();
    assert_eq!(theme.current(), Theme::Light);

    let mut field = pair();
    let mut rec = Recorder::default();
    field.frame(&mut rec, *color.borrow()).unwrap();
    assert_eq!(rec.0[1], Call::Circle { x: 0.0, y: 10.0, style: "rgba(13, 53, 128, 0.5)".into() });
}

#[test]
fn empty_container_draws_nothing_but_clear() {
    let mut field = ParticleField::new(ParticleConfig::default(), 0.0, 300.0, &mut || 0.5);
    let mut rec = Recorder::default();
    field.frame(&mut rec, (0, 0, 0)).unwrap();
    assert_eq!(rec.0, [Call::Clear(0.0, 300.0)]);
}
