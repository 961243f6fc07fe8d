//! Crop Catalog and Detail Lookup
//!
//! Holds the immutable per-crop care records and resolves crop identifiers
//! to them. The catalog is an injected, read-only table: callers construct it
//! once (built-in storyboard data, a JSON file, or a test fixture) and only
//! ever read from it afterwards.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Highest legal growth progress, in percent.
pub const PROGRESS_MAX: u8 = 100;

/// Errors surfaced by catalog construction and lookup.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The identifier is absent from the catalog. Non-fatal; callers that
    /// prefer the silent-degrade form use [`CropCatalog::lookup`] instead.
    #[error("crop '{0}' not found in catalog")]
    NotFound(String),

    /// A record carried a progress value outside 0-100.
    #[error("crop '{id}' has invalid progress {progress}% (max {PROGRESS_MAX}%)")]
    InvalidProgress { id: String, progress: u8 },
}

/// Care details for one crop type. Immutable once constructed.
///
/// Care fields are display-ready text, matching the storyboard data they come
/// from; only `start_date` and `progress` are structured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRecord {
    /// Display name shown to the user (e.g. "토마토").
    pub name: String,

    /// Date the planting was started.
    pub start_date: NaiveDate,

    /// Container-size requirement (e.g. "20cm 이상").
    pub container_size: String,

    /// Water volume per watering (e.g. "200ml (큰 컵 1잔)").
    pub water_volume: String,

    /// Watering interval (e.g. "2~3일에 한 번").
    pub watering_interval: String,

    /// Soil mixture (e.g. "배양토 + 퇴비").
    pub soil_mix: String,

    /// Growth progress in percent, 0-100.
    pub progress: u8,
}

impl CropRecord {
    /// Check the progress invariant for a record keyed by `id`.
    fn validate(&self, id: &str) -> Result<(), CatalogError> {
        if self.progress > PROGRESS_MAX {
            return Err(CatalogError::InvalidProgress {
                id: id.to_string(),
                progress: self.progress,
            });
        }
        Ok(())
    }

    /// Progress formatted for display ("70%"). Rendering concern kept off the
    /// record fields themselves.
    pub fn progress_display(&self) -> String {
        format!("{}%", self.progress)
    }
}

/// Read-only map from crop identifier to [`CropRecord`].
#[derive(Debug, Clone, Default)]
pub struct CropCatalog {
    crops: FxHashMap<String, CropRecord>,
}

impl CropCatalog {
    /// Build a catalog from (identifier, record) pairs, enforcing the
    /// progress invariant on every entry.
    pub fn from_records<I>(records: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (String, CropRecord)>,
    {
        let mut crops = FxHashMap::default();
        for (id, record) in records {
            record.validate(&id)?;
            crops.insert(id, record);
        }
        Ok(CropCatalog { crops })
    }

    /// The three-crop storyboard catalog, values carried verbatim from the
    /// prototype data (tomato 70%, lettuce 45%, pepper 10%).
    pub fn builtin() -> Self {
        let records = [
            (
                "tomato",
                CropRecord {
                    name: "토마토".to_string(),
                    start_date: ymd(2025, 5, 1),
                    container_size: "20cm 이상".to_string(),
                    water_volume: "200ml (큰 컵 1잔)".to_string(),
                    watering_interval: "2~3일에 한 번 (흙 마름 확인 후)".to_string(),
                    soil_mix: "배양토 + 퇴비".to_string(),
                    progress: 70,
                },
            ),
            (
                "lettuce",
                CropRecord {
                    name: "상추".to_string(),
                    start_date: ymd(2025, 5, 15),
                    container_size: "15cm 이상".to_string(),
                    water_volume: "100ml (작은 컵 1잔)".to_string(),
                    watering_interval: "매일 (오전)".to_string(),
                    soil_mix: "상토".to_string(),
                    progress: 45,
                },
            ),
            (
                "pepper",
                CropRecord {
                    name: "고추".to_string(),
                    start_date: ymd(2025, 6, 5),
                    container_size: "25cm 이상".to_string(),
                    water_volume: "300ml (큰 컵 1.5잔)".to_string(),
                    watering_interval: "3일에 한 번".to_string(),
                    soil_mix: "배양토 + 마사토".to_string(),
                    progress: 10,
                },
            ),
        ];

        let crops = records
            .into_iter()
            .map(|(id, record)| (id.to_string(), record))
            .collect();

        CropCatalog { crops }
    }

    /// Load a catalog from a JSON file mapping identifier to record.
    ///
    /// The file format mirrors the in-memory shape:
    /// `{"tomato": {"name": "토마토", "start_date": "2025-05-01", ...}}`
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {:?}", path))?;

        let raw: FxHashMap<String, CropRecord> = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse catalog JSON")?;

        let catalog = Self::from_records(raw)
            .with_context(|| format!("Invalid record in catalog file: {:?}", path))?;

        debug!(crops = catalog.len(), path = ?path, "loaded crop catalog");
        Ok(catalog)
    }

    /// Look up a crop, degrading silently on an unknown identifier.
    pub fn lookup(&self, id: &str) -> Option<&CropRecord> {
        self.crops.get(id)
    }

    /// Look up a crop, surfacing an explicit [`CatalogError::NotFound`] on an
    /// unknown identifier. Preferred over [`lookup`](Self::lookup) where the
    /// caller can report errors.
    pub fn get(&self, id: &str) -> Result<&CropRecord, CatalogError> {
        self.crops
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Registered crop identifiers, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.crops.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

/// Literal calendar date for built-in catalog entries.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // Built-in data only; every literal is a valid calendar date.
    NaiveDate::from_ymd_opt(year, month, day).expect("valid built-in date literal")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_three_crops() {
        let catalog = CropCatalog::builtin();
        assert_eq!(catalog.len(), 3);
        for id in ["tomato", "lettuce", "pepper"] {
            assert!(catalog.lookup(id).is_some(), "missing builtin crop: {}", id);
        }
    }

    #[test]
    fn test_builtin_progress_values_match_storyboard() {
        let catalog = CropCatalog::builtin();
        assert_eq!(catalog.get("tomato").unwrap().progress, 70);
        assert_eq!(catalog.get("lettuce").unwrap().progress, 45);
        assert_eq!(catalog.get("pepper").unwrap().progress, 10);
    }

    #[test]
    fn test_progress_invariant_holds_for_builtin() {
        let catalog = CropCatalog::builtin();
        for id in catalog.ids() {
            let record = catalog.lookup(id).unwrap();
            assert!(
                record.progress <= PROGRESS_MAX,
                "{} progress {} out of range",
                id,
                record.progress
            );
        }
    }

    #[test]
    fn test_unknown_id_is_not_found_not_panic() {
        let catalog = CropCatalog::builtin();
        assert!(catalog.lookup("cucumber").is_none());

        let err = catalog.get("cucumber").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(ref id) if id == "cucumber"));
    }

    #[test]
    fn test_from_records_rejects_out_of_range_progress() {
        let mut record = CropCatalog::builtin().get("tomato").unwrap().clone();
        record.progress = 130;

        let err = CropCatalog::from_records([("tomato".to_string(), record)]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidProgress { progress: 130, .. }
        ));
    }

    #[test]
    fn test_fixture_catalog_substitution() {
        // The catalog is injected, so tests can run against a fixture
        // instead of the builtin data.
        let record = CropRecord {
            name: "바질".to_string(),
            start_date: ymd(2025, 7, 1),
            container_size: "10cm 이상".to_string(),
            water_volume: "50ml".to_string(),
            watering_interval: "매일".to_string(),
            soil_mix: "상토".to_string(),
            progress: 5,
        };
        let catalog = CropCatalog::from_records([("basil".to_string(), record)]).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("basil").unwrap().name, "바질");
        assert!(catalog.lookup("tomato").is_none());
    }

    #[test]
    fn test_progress_display_formatting() {
        let catalog = CropCatalog::builtin();
        assert_eq!(catalog.get("tomato").unwrap().progress_display(), "70%");
        assert_eq!(catalog.get("pepper").unwrap().progress_display(), "10%");
    }

    #[test]
    fn test_record_json_round_trip() {
        let original = CropCatalog::builtin().get("lettuce").unwrap().clone();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: CropRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
        assert_eq!(parsed.start_date, ymd(2025, 5, 15));
    }
}
