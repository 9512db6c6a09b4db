//! The markup contract and tunables.
//!
//! Every element id, class and selector the enhancement layer looks up lives
//! here, together with the numeric constants that shape each effect. The page
//! templates own the markup; this struct is the only place that names it.

/// Particle color as an `r, g, b` triple, formatted into `rgba(...)` strings.
pub type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub selector: &'static str,
    /// Transition delay added per element index, in seconds.
    pub stagger_secs: f64,
    pub threshold: f64,
    pub pending_class: &'static str,
    pub revealed_class: &'static str,
    /// Elements pre-marked in markup and activated by scroll position.
    pub legacy_selector: &'static str,
    pub legacy_active_class: &'static str,
    /// Distance from the viewport bottom an element's top must cross.
    pub legacy_offset_px: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressConfig {
    pub bar_id: &'static str,
    pub content_selector: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackToTopConfig {
    pub button_id: &'static str,
    pub threshold_px: f64,
    pub visible_class: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    pub container_id: &'static str,
    pub card_selector: &'static str,
    pub category_attr: &'static str,
    pub all_label: &'static str,
    pub pill_class: &'static str,
    pub active_class: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TiltConfig {
    pub card_selector: &'static str,
    pub divisor: f64,
    pub perspective_px: f64,
    pub lift_px: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShareConfig {
    pub container_id: &'static str,
    pub copy_selector: &'static str,
    pub feedback_html: &'static str,
    pub feedback_ms: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollConfig {
    pub anchor_selector: &'static str,
    pub hero_down_id: &'static str,
    pub posts_id: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    pub canvas_id: &'static str,
    pub hero_id: &'static str,
    pub hero_overlay_selector: &'static str,
    /// Container width per particle.
    pub spacing_px: f64,
    /// Each velocity component is drawn from `(r - 0.5) * speed`.
    pub speed: f64,
    pub min_radius: f64,
    pub radius_spread: f64,
    pub min_opacity: f64,
    pub opacity_spread: f64,
    pub link_distance: f64,
    pub link_opacity: f64,
    pub line_width: f64,
    pub dark_color: Rgb,
    pub light_color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    pub toggle_id: &'static str,
    pub storage_key: &'static str,
    pub attribute: &'static str,
    pub icon_selector: &'static str,
    /// Shown while dark is active: clicking goes to light.
    pub dark_icon_class: &'static str,
    pub light_icon_class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub reveal: RevealConfig,
    pub progress: ProgressConfig,
    pub back_to_top: BackToTopConfig,
    pub filter: FilterConfig,
    pub tilt: TiltConfig,
    pub share: ShareConfig,
    pub scroll: ScrollConfig,
    pub particles: ParticleConfig,
    pub theme: ThemeConfig,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".post-card, .section-heading, .section-subtitle, .hero-container",
            stagger_secs: 0.1,
            threshold: 0.1,
            pending_class: "reveal",
            revealed_class: "revealed",
            legacy_selector: ".reveal",
            legacy_active_class: "active",
            legacy_offset_px: 150.0,
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self { bar_id: "reading-progress", content_selector: ".page__content, article" }
    }
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self { button_id: "back-to-top", threshold_px: 500.0, visible_class: "visible" }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            container_id: "category-filters",
            card_selector: ".post-card",
            category_attr: "data-category",
            all_label: "All",
            pill_class: "filter-pill",
            active_class: "active",
        }
    }
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self { card_selector: ".post-card", divisor: 20.0, perspective_px: 1000.0, lift_px: 5.0 }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            container_id: "share-buttons",
            copy_selector: ".share-copy",
            feedback_html: r#"<i class="fas fa-check"></i> Copied!"#,
            feedback_ms: 2000,
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { anchor_selector: r##"a[href^="#"]"##, hero_down_id: "hero-down", posts_id: "posts" }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            canvas_id: "hero-canvas",
            hero_id: "hero",
            hero_overlay_selector: ".page__hero--overlay",
            spacing_px: 12.0,
            speed: 0.4,
            min_radius: 1.5,
            radius_spread: 2.0,
            min_opacity: 0.4,
            opacity_spread: 0.25,
            link_distance: 100.0,
            link_opacity: 0.6,
            line_width: 0.8,
            dark_color: (96, 165, 250),
            light_color: (13, 53, 128),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "theme-toggle",
            storage_key: "theme",
            attribute: "data-theme",
            icon_selector: "i",
            dark_icon_class: "fas fa-sun",
            light_icon_class: "fas fa-moon",
        }
    }
}
