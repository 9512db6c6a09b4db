//! One-shot reveal bookkeeping.

/// CSS `transition-delay` for the element at `index`.
pub fn stagger_delay(index: usize, stagger_secs: f64) -> String {
    format!("{}s", index as f64 * stagger_secs)
}

/// Whether a legacy `.reveal` element whose top edge sits at `element_top`
/// (viewport coordinates) has crossed the activation line.
pub fn past_reveal_point(element_top: f64, viewport_height: f64, offset: f64) -> bool {
    element_top < viewport_height - offset
}

/// Tracks which observed elements have been revealed.
///
/// An element transitions at most once and never reverts; once every element
/// is revealed there is nothing left to observe.
#[derive(Debug, Clone, Default)]
pub struct RevealLatch {
    revealed: Vec<bool>,
}

impl RevealLatch {
    pub fn new(len: usize) -> Self {
        Self { revealed: vec![false; len] }
    }

    /// Record that element `index` intersected the viewport.
    ///
    /// Returns `true` only on the first call for that element, which is when
    /// the caller should add the revealed class and stop observing it.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    fn pending(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }
}
