//! Aging settings (quality bounds, conjured rule) and their environment loading.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, ValueObject};

pub const QUALITY_FLOOR_VAR: &str = "GILDED_ROSE_QUALITY_FLOOR";
pub const QUALITY_CEILING_VAR: &str = "GILDED_ROSE_QUALITY_CEILING";
pub const CONJURED_RULE_VAR: &str = "GILDED_ROSE_CONJURED_RULE";

/// How conjured items lose quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConjuredRule {
    /// Age exactly like a standard item. This is the verified behavior.
    Standard,
    /// Lose twice the standard amount (-2 before the sell-by date, -4 after).
    ///
    /// Incomplete: how the doubling composes with post-expiry acceleration has
    /// not been confirmed, so this stays opt-in.
    Double,
}

impl FromStr for ConjuredRule {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "double" => Ok(Self::Double),
            other => Err(DomainError::validation(format!(
                "unknown conjured rule '{other}' (expected 'standard' or 'double')"
            ))),
        }
    }
}

/// Settings applied by a [`crate::Shop`] on every update.
///
/// The default reproduces the documented catalog: quality bounded to `[0, 50]`
/// and conjured items aging like standard ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgingConfig {
    /// Lowest quality a non-legendary item can reach.
    pub quality_floor: i32,
    /// Highest quality a non-legendary item can reach.
    pub quality_ceiling: i32,
    pub conjured: ConjuredRule,
}

impl Default for AgingConfig {
    fn default() -> Self {
        Self {
            quality_floor: 0,
            quality_ceiling: 50,
            conjured: ConjuredRule::Standard,
        }
    }
}

impl ValueObject for AgingConfig {}

impl AgingConfig {
    /// Load settings from `GILDED_ROSE_*` environment variables, falling back
    /// to the defaults for anything unset.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(QUALITY_FLOOR_VAR) {
            config.quality_floor = parse_var(QUALITY_FLOOR_VAR, &raw)?;
        }
        if let Some(raw) = lookup(QUALITY_CEILING_VAR) {
            config.quality_ceiling = parse_var(QUALITY_CEILING_VAR, &raw)?;
        }
        if let Some(raw) = lookup(CONJURED_RULE_VAR) {
            config.conjured = parse_var(CONJURED_RULE_VAR, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_conjured(mut self, conjured: ConjuredRule) -> Self {
        self.conjured = conjured;
        self
    }

    pub fn with_quality_bounds(mut self, floor: i32, ceiling: i32) -> Self {
        self.quality_floor = floor;
        self.quality_ceiling = ceiling;
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.quality_floor > self.quality_ceiling {
            return Err(DomainError::invariant(format!(
                "quality floor ({}) is above quality ceiling ({})",
                self.quality_floor, self.quality_ceiling
            )));
        }
        Ok(())
    }

    /// Bring `quality` into `[quality_floor, quality_ceiling]`.
    ///
    /// Never panics, even on a config that fails [`AgingConfig::validate`]
    /// (the ceiling wins in that case).
    pub fn clamp(&self, quality: i32) -> i32 {
        quality.max(self.quality_floor).min(self.quality_ceiling)
    }
}

fn parse_var<T>(key: &str, raw: &str) -> DomainResult<T>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| DomainError::validation(format!("{key}: {e}")))
}
