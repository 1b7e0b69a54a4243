use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LumenError, Result};

/// Identifier of a body region, e.g. `pancreas`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionKey(String);

impl RegionKey {
    pub const PANCREAS: &'static str = "pancreas";
    pub const LIVER: &'static str = "liver";
    pub const ENERGY: &'static str = "energy";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A body region and its responsiveness to sugar load.
///
/// Sensitivity is always finite and positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyRegion {
    key: RegionKey,
    sensitivity: f64,
}

impl BodyRegion {
    pub fn new(key: impl Into<RegionKey>, sensitivity: f64) -> Result<Self> {
        let key = key.into();
        if !sensitivity.is_finite() || sensitivity <= 0.0 {
            return Err(LumenError::InvalidRegion(format!(
                "sensitivity of '{}' must be a positive number, got {}",
                key, sensitivity
            )));
        }
        Ok(Self { key, sensitivity })
    }

    /// Built-in regions whose sensitivities are compile-time constants.
    pub(crate) fn builtin(key: &'static str, sensitivity: f64) -> Self {
        debug_assert!(sensitivity.is_finite() && sensitivity > 0.0);
        Self {
            key: RegionKey::new(key),
            sensitivity,
        }
    }

    pub fn key(&self) -> &RegionKey {
        &self.key
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }
}

/// Ordered table of body regions. Iteration follows insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionTable {
    regions: Vec<BodyRegion>,
}

impl RegionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and insert a region.
    pub fn with_region(self, key: impl Into<RegionKey>, sensitivity: f64) -> Result<Self> {
        Ok(self.with(BodyRegion::new(key, sensitivity)?))
    }

    /// Insert a region, replacing the sensitivity of an existing key in place.
    pub fn with(mut self, region: BodyRegion) -> Self {
        match self.regions.iter_mut().find(|r| r.key == region.key) {
            Some(existing) => existing.sensitivity = region.sensitivity,
            None => self.regions.push(region),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&BodyRegion> {
        self.regions.iter().find(|r| r.key.as_str() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyRegion> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl FromIterator<BodyRegion> for RegionTable {
    fn from_iter<T: IntoIterator<Item = BodyRegion>>(iter: T) -> Self {
        iter.into_iter().fold(RegionTable::new(), RegionTable::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let table = RegionTable::new()
            .with_region("liver", 1.2)
            .and_then(|t| t.with_region("pancreas", 1.5))
            .and_then(|t| t.with_region("energy", 1.8))
            .unwrap();

        let keys: Vec<&str> = table.iter().map(|r| r.key().as_str()).collect();
        assert_eq!(keys, vec!["liver", "pancreas", "energy"]);
    }

    #[test]
    fn test_duplicate_key_replaces_in_place() {
        let table = RegionTable::new()
            .with_region("liver", 1.2)
            .and_then(|t| t.with_region("energy", 1.8))
            .and_then(|t| t.with_region("liver", 2.0))
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("liver").unwrap().sensitivity(), 2.0);
        assert_eq!(table.iter().next().unwrap().key().as_str(), "liver");
    }

    #[test]
    fn test_rejects_non_positive_sensitivity() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = RegionTable::new().with_region("teeth", bad);
            assert!(
                matches!(result, Err(LumenError::InvalidRegion(_))),
                "accepted sensitivity {}",
                bad
            );
        }
        assert!(BodyRegion::new("teeth", -0.5).is_err());
    }
}
