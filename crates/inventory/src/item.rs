use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::category::ItemCategory;
use crate::config::AgingConfig;

/// A stock entry: name, days left to sell, and quality.
///
/// Construction never validates: out-of-range quality (e.g. a legendary item
/// above 50) is kept as given. Only [`crate::Shop`] mutates an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ItemRecord")]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: i32,
    category: ItemCategory,
}

/// Wire shape accepted on deserialization. The category may be omitted, in
/// which case it is resolved from the name.
#[derive(Deserialize)]
struct ItemRecord {
    name: String,
    sell_in: i32,
    quality: i32,
    #[serde(default)]
    category: Option<ItemCategory>,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        let category = record
            .category
            .unwrap_or_else(|| ItemCategory::from_name(&record.name));
        Self::with_category(record.name, record.sell_in, record.quality, category)
    }
}

impl Item {
    /// Create an item whose category is resolved from `name`.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = ItemCategory::from_name(&name);
        Self::with_category(name, sell_in, quality, category)
    }

    /// Create an item with an explicit category, bypassing name resolution.
    pub fn with_category(
        name: impl Into<String>,
        sell_in: i32,
        quality: i32,
        category: ItemCategory,
    ) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
            category,
        }
    }

    /// Like [`Item::new`], but rejects blank names.
    pub fn try_new(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self::new(name, sell_in, quality))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub(crate) fn age(&mut self, config: &AgingConfig) {
        let (sell_in, quality) = self.category.age(self.sell_in, self.quality, config);
        tracing::trace!(
            name = %self.name,
            category = ?self.category,
            sell_in_before = self.sell_in,
            quality_before = self.quality,
            sell_in,
            quality,
            "item aged"
        );
        self.sell_in = sell_in;
        self.quality = quality;
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_given_values() {
        let item = Item::new("foo", 5, 10);
        assert_eq!(item.name(), "foo");
        assert_eq!(item.sell_in(), 5);
        assert_eq!(item.quality(), 10);
        assert_eq!(item.category(), ItemCategory::Standard);
    }

    #[test]
    fn new_does_not_correct_out_of_range_quality() {
        let sulfuras = Item::new("Sulfuras, Hand of Ragnaros", 0, 80);
        assert_eq!(sulfuras.quality(), 80);
        assert_eq!(sulfuras.category(), ItemCategory::Legendary);

        let negative = Item::new("foo", -3, -1);
        assert_eq!(negative.sell_in(), -3);
        assert_eq!(negative.quality(), -1);
    }

    #[test]
    fn explicit_category_overrides_name() {
        let item = Item::with_category("House Cheddar", 3, 10, ItemCategory::AgingCheese);
        assert_eq!(item.category(), ItemCategory::AgingCheese);
    }

    #[test]
    fn try_new_rejects_blank_name() {
        let err = Item::try_new("   ", 1, 1).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
        assert!(Item::try_new("Aged Brie", 1, 1).is_ok());
    }

    #[test]
    fn displays_as_report_line() {
        assert_eq!(Item::new("Elixir of the Mongoose", 5, 7).to_string(), "Elixir of the Mongoose, 5, 7");
        assert_eq!(Item::new("foo", -1, 0).to_string(), "foo, -1, 0");
    }

    #[test]
    fn serializes_with_category() {
        let json = serde_json::to_value(Item::new("Aged Brie", 2, 0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Aged Brie",
                "sell_in": 2,
                "quality": 0,
                "category": "aging_cheese",
            })
        );
    }

    #[test]
    fn deserialization_resolves_missing_category_from_name() {
        let item: Item = serde_json::from_str(
            r#"{"name":"Backstage passes to a TAFKAL80ETC concert","sell_in":15,"quality":20}"#,
        )
        .unwrap();
        assert_eq!(item.category(), ItemCategory::EventPass);

        let item: Item = serde_json::from_str(
            r#"{"name":"Backstage passes to a TAFKAL80ETC concert","sell_in":15,"quality":20,"category":"standard"}"#,
        )
        .unwrap();
        assert_eq!(item.category(), ItemCategory::Standard);
    }
}
