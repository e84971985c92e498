use serde::{Deserialize, Serialize};

use super::{FacilityCounts, FacilityProvider, ProviderError, SearchRadii};
use super::{WeatherProvider, WeatherReading};
use crate::assessment::Coordinates;

/// Replays a reading the caller already fetched.
#[derive(Debug, Clone, Default)]
pub struct SnapshotWeatherProvider {
    reading: Option<WeatherReading>,
}

impl SnapshotWeatherProvider {
    pub fn new(reading: Option<WeatherReading>) -> Self {
        Self { reading }
    }
}

impl WeatherProvider for SnapshotWeatherProvider {
    fn current(&self, _location: Coordinates) -> Result<Option<WeatherReading>, ProviderError> {
        Ok(self.reading.clone())
    }
}

/// Facility counts the caller already gathered. `radii` records the search
/// that produced them; when omitted the configured radii are reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilitySnapshot {
    pub hospitals: u32,
    pub pharmacies: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radii: Option<SearchRadii>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FacilitySnapshot {
    pub fn new(hospitals: u32, pharmacies: u32) -> Self {
        Self {
            hospitals,
            pharmacies,
            radii: None,
            error: None,
        }
    }

    pub fn within(mut self, radii: SearchRadii) -> Self {
        self.radii = Some(radii);
        self
    }
}

/// Replays a facility snapshot. Without one the lookup fails so the service
/// records the data as unavailable.
#[derive(Debug, Clone, Default)]
pub struct SnapshotFacilityProvider {
    snapshot: Option<FacilitySnapshot>,
}

impl SnapshotFacilityProvider {
    pub fn new(snapshot: Option<FacilitySnapshot>) -> Self {
        Self { snapshot }
    }
}

impl FacilityProvider for SnapshotFacilityProvider {
    fn nearby(
        &self,
        _location: Coordinates,
        radii: SearchRadii,
    ) -> Result<FacilityCounts, ProviderError> {
        match &self.snapshot {
            Some(snapshot) => Ok(FacilityCounts {
                hospitals: snapshot.hospitals,
                pharmacies: snapshot.pharmacies,
                radii: snapshot.radii.unwrap_or(radii),
                error: snapshot.error.clone(),
            }),
            None => Err(ProviderError::Unavailable(
                "no facility snapshot supplied".to_string(),
            )),
        }
    }
}
