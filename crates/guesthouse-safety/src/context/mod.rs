//! Live context around a property: weather and emergency facility access.
//!
//! Lookups happen behind the provider traits; the analyzers turn whatever the
//! providers return into risk contributions for the engine.

mod facilities;
mod snapshot;
mod weather;

pub use facilities::{FacilityAccessAnalyzer, FacilityCounts, FacilityRisk};
pub use snapshot::{FacilitySnapshot, SnapshotFacilityProvider, SnapshotWeatherProvider};
pub use weather::{WeatherReading, WeatherRisk, WeatherRiskAnalyzer, WeatherRiskLevel};

use serde::{Deserialize, Serialize};

use crate::assessment::Coordinates;
use crate::config::SafetyThresholds;

/// Search radii used when counting facilities, in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchRadii {
    pub hospital_km: f64,
    pub pharmacy_km: f64,
}

impl SearchRadii {
    pub fn from_thresholds(thresholds: &SafetyThresholds) -> Self {
        Self {
            hospital_km: thresholds.hospital_radius_km,
            pharmacy_km: thresholds.pharmacy_radius_km,
        }
    }
}

impl Default for SearchRadii {
    fn default() -> Self {
        Self::from_thresholds(&SafetyThresholds::default())
    }
}

/// Source of current weather. `Ok(None)` means the provider had no reading.
pub trait WeatherProvider: Send + Sync {
    fn current(&self, location: Coordinates) -> Result<Option<WeatherReading>, ProviderError>;
}

/// Source of nearby hospital and pharmacy counts.
pub trait FacilityProvider: Send + Sync {
    fn nearby(
        &self,
        location: Coordinates,
        radii: SearchRadii,
    ) -> Result<FacilityCounts, ProviderError>;
}

/// Failure reported by an external data provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    #[error("provider returned an unusable response: {0}")]
    InvalidResponse(String),
}
