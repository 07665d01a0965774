//! Inventory aging domain module.
//!
//! This crate contains the daily aging rules for a shop's stock, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod config;
pub mod item;
pub mod shop;

pub use category::{AGED_BRIE, BACKSTAGE_PASSES, CONJURED_PREFIX, ItemCategory, SULFURAS};
pub use config::{AgingConfig, ConjuredRule};
pub use item::Item;
pub use shop::Shop;
