//! Item categories and their daily aging rules.

use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

use crate::config::{AgingConfig, ConjuredRule};

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED_PREFIX: &str = "Conjured";

/// Event passes gain +2 at or below this many days before the event.
const PASS_NEAR_DAYS: i32 = 10;
/// Event passes gain +3 at or below this many days before the event.
const PASS_IMMINENT_DAYS: i32 = 5;

/// Closed set of aging behaviors. Resolved once, when an item is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Standard,
    AgingCheese,
    Legendary,
    EventPass,
    Conjured,
}

impl ValueObject for ItemCategory {}

impl ItemCategory {
    /// Resolve the category from an item name. Unknown names are `Standard`.
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_BRIE => Self::AgingCheese,
            SULFURAS => Self::Legendary,
            BACKSTAGE_PASSES => Self::EventPass,
            n if n.starts_with(CONJURED_PREFIX) => Self::Conjured,
            _ => Self::Standard,
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Self::Legendary
    }

    /// One day of aging: `(sell_in, quality) -> (sell_in', quality')`.
    ///
    /// Expiry and event-pass thresholds are read from the sell-in value *before*
    /// this day's decrement.
    pub fn age(self, sell_in: i32, quality: i32, config: &AgingConfig) -> (i32, i32) {
        if self.is_legendary() {
            return (sell_in, quality);
        }

        let expired = sell_in <= 0;
        let next_sell_in = sell_in.saturating_sub(1);

        let next_quality = match self {
            Self::Standard => quality.saturating_sub(standard_loss(expired)),
            Self::Conjured => match config.conjured {
                ConjuredRule::Standard => quality.saturating_sub(standard_loss(expired)),
                ConjuredRule::Double => quality.saturating_sub(2 * standard_loss(expired)),
            },
            Self::AgingCheese => quality.saturating_add(if expired { 2 } else { 1 }),
            Self::EventPass => quality.saturating_add(pass_gain(sell_in)),
            Self::Legendary => quality,
        };
        let mut next_quality = config.clamp(next_quality);

        // The event has passed: the pass is worthless.
        if self == Self::EventPass && next_sell_in < 0 {
            next_quality = config.quality_floor;
        }

        (next_sell_in, next_quality)
    }
}

fn standard_loss(expired: bool) -> i32 {
    if expired { 2 } else { 1 }
}

fn pass_gain(sell_in: i32) -> i32 {
    if sell_in <= PASS_IMMINENT_DAYS {
        3
    } else if sell_in <= PASS_NEAR_DAYS {
        2
    } else {
        1
    }
}
