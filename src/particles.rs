//! Particle field simulation for the hero background.
//!
//! The field knows nothing about canvases: a frame is emitted through the
//! [`Painter`] trait, which the browser glue implements on top of a 2D
//! context and tests implement by recording calls.

use crate::config::{ParticleConfig, Rgb};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    /// Advance one frame and reflect velocity on any axis that left the
    /// `[0, width] x [0, height]` box. Position is not clamped.
    pub fn step(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}

/// A connecting line between two particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f64,
}

/// Drawing surface for one frame.
pub trait Painter {
    type Error;

    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, style: &str) -> Result<(), Self::Error>;
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, style: &str);
}

pub fn rgba((r, g, b): Rgb, alpha: f64) -> String {
    format!("rgba({r}, {g}, {b}, {alpha})")
}

pub fn color_for(cfg: &ParticleConfig, theme: Theme) -> Rgb {
    match theme {
        Theme::Dark => cfg.dark_color,
        Theme::Light => cfg.light_color,
    }
}

/// Number of particles seeded for a container `width` pixels wide.
pub fn count_for(width: f64, spacing: f64) -> usize {
    if width <= 0.0 || spacing <= 0.0 {
        return 0;
    }
    (width / spacing).floor() as usize
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    cfg: ParticleConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Seed a field sized to the container. `rand` yields values in `[0, 1)`.
    pub fn new(cfg: ParticleConfig, width: f64, height: f64, rand: &mut impl FnMut() -> f64) -> Self {
        let mut field = Self { cfg, width, height, particles: Vec::new() };
        field.seed(rand);
        field
    }

    /// Adopt new container dimensions and regenerate every particle.
    pub fn resize(&mut self, width: f64, height: f64, rand: &mut impl FnMut() -> f64) {
        self.width = width;
        self.height = height;
        self.seed(rand);
    }

    fn seed(&mut self, rand: &mut impl FnMut() -> f64) {
        let cfg = &self.cfg;
        let count = count_for(self.width, cfg.spacing_px);
        self.particles = (0..count)
            .map(|_| Particle {
                x: rand() * self.width,
                y: rand() * self.height,
                vx: (rand() - 0.5) * cfg.speed,
                vy: (rand() - 0.5) * cfg.speed,
                radius: rand() * cfg.radius_spread + cfg.min_radius,
                opacity: rand() * cfg.opacity_spread + cfg.min_opacity,
            })
            .collect();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.step(w, h);
        }
    }

    /// Every unordered pair closer than the link distance, with opacity
    /// falling linearly to zero at that distance.
    pub fn links(&self) -> Vec<Link> {
        let max = self.cfg.link_distance;
        let mut out = Vec::new();
        for (i, p1) in self.particles.iter().enumerate() {
            for (j, p2) in self.particles.iter().enumerate().skip(i + 1) {
                let dist = (p1.x - p2.x).hypot(p1.y - p2.y);
                if dist < max {
                    out.push(Link { a: i, b: j, opacity: self.cfg.link_opacity * (1.0 - dist / max) });
                }
            }
        }
        out
    }

    /// Draw one frame: every particle at its current position, then advance
    /// the simulation, then the links between the moved particles.
    pub fn frame<P: Painter>(&mut self, painter: &mut P, color: Rgb) -> Result<(), P::Error> {
        painter.clear(self.width, self.height);
        for p in &self.particles {
            painter.fill_circle(p.x, p.y, p.radius, &rgba(color, p.opacity))?;
        }
        self.step();
        for link in self.links() {
            let (a, b) = (self.particles[link.a], self.particles[link.b]);
            painter.stroke_line((a.x, a.y), (b.x, b.y), self.cfg.line_width, &rgba(color, link.opacity));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(v: f64) -> impl FnMut() -> f64 {
        move || v
    }

    #[test]
    fn count_scales_with_width() {
        assert_eq!(count_for(1200.0, 12.0), 100);
        assert_eq!(count_for(23.9, 12.0), 1);
        assert_eq!(count_for(0.0, 12.0), 0);
    }

    #[test]
    fn seeded_values_in_range() {
        let mut n = 0u32;
        let mut rand = move || {
            n = (n * 7 + 3) % 10;
            f64::from(n) / 10.0
        };
        let field = ParticleField::new(ParticleConfig::default(), 600.0, 300.0, &mut rand);
        assert_eq!(field.particles().len(), 50);
        for p in field.particles() {
            assert!((0.0..600.0).contains(&p.x));
            assert!((0.0..300.0).contains(&p.y));
            assert!(p.vx.abs() <= 0.2 && p.vy.abs() <= 0.2);
            assert!((1.5..=3.5).contains(&p.radius));
            assert!((0.4..=0.65).contains(&p.opacity));
        }
    }

    #[test]
    fn bounce_flips_on_exit_only() {
        let mut p = Particle { x: 9.9, y: 5.0, vx: 0.2, vy: 0.1, radius: 1.0, opacity: 1.0 };
        p.step(10.0, 10.0);
        assert!(p.x > 10.0);
        assert_eq!(p.vx, -0.2);
        assert_eq!(p.vy, 0.1);
        p.step(10.0, 10.0);
        assert!(p.x <= 10.0);
        assert_eq!(p.vx, -0.2);
    }

    #[test]
    fn resize_regenerates() {
        let mut field = ParticleField::new(ParticleConfig::default(), 120.0, 100.0, &mut fixed(0.5));
        assert_eq!(field.particles().len(), 10);
        field.resize(240.0, 50.0, &mut fixed(0.25));
        assert_eq!(field.particles().len(), 20);
        assert!(field.particles().iter().all(|p| p.x == 60.0 && p.y == 12.5));
    }

    #[test]
    fn link_opacity_decays() {
        let mut field = ParticleField::new(ParticleConfig::default(), 24.0, 10.0, &mut fixed(0.0));
        let ps = field.particles_mut();
        ps[0].x = 0.0;
        ps[1].x = 50.0;
        let links = field.links();
        assert_eq!(links.len(), 1);
        assert!((links[0].opacity - 0.3).abs() < 1e-12);

        field.particles_mut()[1].x = 100.0;
        assert!(field.links().is_empty());
    }
}
