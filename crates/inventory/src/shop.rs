use crate::category::ItemCategory;
use crate::config::{AgingConfig, ConjuredRule};
use crate::item::Item;

/// A shop's stock and the settings used to age it.
///
/// The shop owns its items: [`Shop::new`] moves the caller's vector in, and
/// [`Shop::update_quality`] mutates that store in place. The returned slice is
/// a view of the same storage. Order and cardinality never change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shop {
    items: Vec<Item>,
    config: AgingConfig,
}

impl Shop {
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_config(items, AgingConfig::default())
    }

    pub fn with_config(items: Vec<Item>, config: AgingConfig) -> Self {
        let shop = Self { items, config };
        shop.note_conjured_fallback();
        shop
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn config(&self) -> &AgingConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Advance every item by one day.
    pub fn update_quality(&mut self) -> &[Item] {
        tracing::debug!(items = self.items.len(), "advancing inventory by one day");
        for item in &mut self.items {
            item.age(&self.config);
        }
        &self.items
    }

    /// Advance every item by `days` days.
    pub fn advance_days(&mut self, days: u32) -> &[Item] {
        for _ in 0..days {
            self.update_quality();
        }
        &self.items
    }

    /// One `name, sell_in, quality` line per item, in stock order.
    pub fn report(&self) -> String {
        self.items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn note_conjured_fallback(&self) {
        if self.config.conjured != ConjuredRule::Standard {
            return;
        }
        let conjured = self
            .items
            .iter()
            .filter(|i| i.category() == ItemCategory::Conjured)
            .count();
        if conjured > 0 {
            tracing::debug!(conjured, "conjured items will age with the standard rule");
        }
    }
}

impl FromIterator<Item> for Shop {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
