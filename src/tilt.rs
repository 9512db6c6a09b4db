//! Pointer-relative 3D tilt for cards.

/// Rotation in degrees for a pointer at (`x`, `y`) relative to a card's top
/// left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn at(x: f64, y: f64, width: f64, height: f64, divisor: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: (y - center_y) / divisor,
            rotate_y: (center_x - x) / divisor,
        }
    }

    pub fn transform(&self, perspective: f64, lift: f64) -> String {
        format!(
            "perspective({perspective}px) rotateX({}deg) rotateY({}deg) translateY(-{lift}px)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Transform applied when the pointer leaves the card.
pub fn rest_transform(perspective: f64) -> String {
    format!("perspective({perspective}px) rotateX(0) rotateY(0) translateY(0)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_flat() {
        let t = Tilt::at(100.0, 50.0, 200.0, 100.0, 20.0);
        assert_eq!(t, Tilt { rotate_x: 0.0, rotate_y: 0.0 });
    }

    #[test]
    fn corners() {
        let t = Tilt::at(0.0, 0.0, 200.0, 100.0, 20.0);
        assert_eq!(t.rotate_x, -2.5);
        assert_eq!(t.rotate_y, 5.0);
        assert_eq!(
            t.transform(1000.0, 5.0),
            "perspective(1000px) rotateX(-2.5deg) rotateY(5deg) translateY(-5px)"
        );
    }

    #[test]
    fn rest() {
        assert_eq!(rest_transform(1000.0), "perspective(1000px) rotateX(0) rotateY(0) translateY(0)");
    }
}
