//! Category filtering of post cards.

/// Filter state over a fixed list of cards.
///
/// Categories are `all_label` followed by every distinct card category in
/// first-seen order. Exactly one category is selected at a time.
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    categories: Vec<String>,
    cards: Vec<String>,
    selected: usize,
}

impl CategoryFilter {
    /// Build a filter from each card's category attribute. `None` and empty
    /// strings contribute no category but the card still takes part.
    pub fn new<I, S>(all_label: &str, card_categories: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let mut categories = vec![all_label.to_owned()];
        let mut cards = Vec::new();
        for cat in card_categories {
            let cat = cat.map(Into::into).unwrap_or_default();
            if !cat.is_empty() && !categories.contains(&cat) {
                categories.push(cat.clone());
            }
            cards.push(cat);
        }
        Self { categories, cards, selected: 0 }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[cfg(test)]
    fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> &str {
        &self.categories[self.selected]
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.selected
    }

    /// Select the category at `index`. Out-of-range indices leave the
    /// selection unchanged and return `false`.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.categories.len() {
            return false;
        }
        self.selected = index;
        true
    }

    /// Whether card `card` is shown under the current selection.
    pub fn shows(&self, card: usize) -> bool {
        if self.selected == 0 {
            return card < self.cards.len();
        }
        self.cards.get(card).is_some_and(|c| *c == self.categories[self.selected])
    }

    /// Visibility of every card, in card order.
    pub fn visibility(&self) -> Vec<bool> {
        (0..self.cards.len()).map(|i| self.shows(i)).collect()
    }
}
