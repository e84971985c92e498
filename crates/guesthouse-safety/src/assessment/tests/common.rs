use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::assessment::{AssessmentEngine, BuildingType, Coordinates, PropertyAttributes};
use crate::config::CostConfig;
use crate::context::{
    FacilityCounts, FacilityProvider, ProviderError, SearchRadii, WeatherProvider, WeatherReading,
};

pub(super) fn assessed_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 15).expect("valid date")
}

pub(super) fn engine() -> AssessmentEngine {
    AssessmentEngine::new(CostConfig::default())
}

pub(super) fn shared_engine() -> Arc<AssessmentEngine> {
    Arc::new(engine())
}

/// Single-storey modern house with every check satisfied.
pub(super) fn compliant_property() -> PropertyAttributes {
    PropertyAttributes {
        id: 101,
        name: "Villa Jasmin".to_string(),
        address: Some("Avenue Habib Bourguiba, Hammamet".to_string()),
        latitude: 36.4,
        longitude: 10.61,
        construction_year: 2015,
        number_of_floors: 1,
        number_of_rooms: 3,
        fire_extinguishers: 1,
        smoke_detectors: 2,
        emergency_exits: 2,
        has_first_aid_kit: true,
        has_stair_handrails: true,
        stairs_slip_resistant: true,
        building_type: BuildingType::Modern,
    }
}

/// Two-storey traditional house missing every piece of equipment.
pub(super) fn neglected_property() -> PropertyAttributes {
    PropertyAttributes {
        id: 202,
        name: "Dar Zitouna".to_string(),
        address: Some("Medina, Tunis".to_string()),
        latitude: 36.7975,
        longitude: 10.1707,
        construction_year: 1970,
        number_of_floors: 2,
        number_of_rooms: 4,
        fire_extinguishers: 0,
        smoke_detectors: 0,
        emergency_exits: 0,
        has_first_aid_kit: false,
        has_stair_handrails: false,
        stairs_slip_resistant: false,
        building_type: BuildingType::Traditional,
    }
}

pub(super) fn stormy_heatwave() -> WeatherReading {
    WeatherReading {
        temperature: 40.0,
        precipitation: 5.0,
        rain: 5.0,
        wind_speed: 35.0,
        observed_at: Some("2025-07-15T12:00".to_string()),
    }
}

pub(super) fn mild_day() -> WeatherReading {
    WeatherReading {
        temperature: 24.0,
        precipitation: 0.0,
        rain: 0.0,
        wind_speed: 8.0,
        observed_at: None,
    }
}

pub(super) struct FixedWeather(pub Option<WeatherReading>);

impl WeatherProvider for FixedWeather {
    fn current(&self, _location: Coordinates) -> Result<Option<WeatherReading>, ProviderError> {
        Ok(self.0.clone())
    }
}

pub(super) struct FixedFacilities {
    pub hospitals: u32,
    pub pharmacies: u32,
}

impl FacilityProvider for FixedFacilities {
    fn nearby(
        &self,
        _location: Coordinates,
        radii: SearchRadii,
    ) -> Result<FacilityCounts, ProviderError> {
        Ok(FacilityCounts::confirmed(self.hospitals, self.pharmacies, radii))
    }
}

pub(super) struct OfflineWeather;

impl WeatherProvider for OfflineWeather {
    fn current(&self, _location: Coordinates) -> Result<Option<WeatherReading>, ProviderError> {
        Err(ProviderError::Unavailable("connection timed out".to_string()))
    }
}

pub(super) struct OfflineFacilities;

impl FacilityProvider for OfflineFacilities {
    fn nearby(
        &self,
        _location: Coordinates,
        _radii: SearchRadii,
    ) -> Result<FacilityCounts, ProviderError> {
        Err(ProviderError::InvalidResponse("malformed payload".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
