//! Scroll-position math: reading progress and back-to-top visibility.

use crate::error::{Error, Result};

/// Scroll range over which the reading bar fills.
///
/// The bar starts filling when the top of the content reaches the bottom of
/// the viewport and is full when the bottom of the content does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSpan {
    pub start: f64,
    pub end: f64,
}

impl ProgressSpan {
    /// Span for content at `offset_top` of height `height` seen through a
    /// viewport `viewport_height` tall.
    pub fn new(offset_top: f64, height: f64, viewport_height: f64) -> Self {
        Self {
            start: offset_top - viewport_height,
            end: offset_top + height - viewport_height,
        }
    }

    /// Fraction of the span scrolled through, clamped to `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateSpan`] when `start == end`.
    pub fn fraction(&self, scroll_y: f64) -> Result<f64> {
        let len = self.end - self.start;
        if len == 0.0 {
            return Err(Error::DegenerateSpan(self.start));
        }
        Ok(((scroll_y - self.start) / len).clamp(0.0, 1.0))
    }
}

/// CSS width for a progress fraction.
pub fn bar_width(fraction: f64) -> String {
    format!("{}%", fraction * 100.0)
}

/// Back-to-top is shown strictly past the threshold.
pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_bounds() {
        let span = ProgressSpan::new(800.0, 2000.0, 600.0);
        assert_eq!(span.start, 200.0);
        assert_eq!(span.end, 2200.0);
        assert_eq!(span.fraction(200.0).unwrap(), 0.0);
        assert_eq!(span.fraction(2200.0).unwrap(), 1.0);
        assert_eq!(span.fraction(1200.0).unwrap(), 0.5);
    }

    #[test]
    fn clamps_outside_span() {
        let span = ProgressSpan::new(800.0, 2000.0, 600.0);
        assert_eq!(span.fraction(0.0).unwrap(), 0.0);
        assert_eq!(span.fraction(1.0e6).unwrap(), 1.0);
    }

    #[test]
    fn monotonic() {
        let span = ProgressSpan::new(300.0, 1500.0, 900.0);
        let mut last = 0.0;
        for y in (0..3000).step_by(7) {
            let f = span.fraction(f64::from(y)).unwrap();
            assert!((0.0..=1.0).contains(&f));
            assert!(f >= last, "progress went backwards at {y}");
            last = f;
        }
    }

    #[test]
    fn degenerate_span_is_reported() {
        let span = ProgressSpan::new(400.0, 0.0, 700.0);
        assert!(matches!(span.fraction(10.0), Err(Error::DegenerateSpan(s)) if s == -300.0));
    }

    #[test]
    fn back_to_top_edge() {
        assert!(!back_to_top_visible(499.0, 500.0));
        assert!(!back_to_top_visible(500.0, 500.0));
        assert!(back_to_top_visible(500.5, 500.0));
    }

    #[test]
    fn widths() {
        assert_eq!(bar_width(0.0), "0%");
        assert_eq!(bar_width(0.25), "25%");
        assert_eq!(bar_width(1.0), "100%");
    }
}
