use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Construction method of the building; drives installation labor pricing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingType {
    Modern,
    #[default]
    Traditional,
    Renovated,
}

impl BuildingType {
    /// Maps free-form input onto a known type. Anything unrecognized, blank or
    /// missing becomes `Traditional`.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
            Some("modern") => Self::Modern,
            Some("renovated") => Self::Renovated,
            _ => Self::Traditional,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Traditional => "traditional",
            Self::Renovated => "renovated",
        }
    }
}

impl fmt::Display for BuildingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BuildingType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::normalize(raw.as_deref()))
    }
}

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Upper bound for floor, room and equipment counts accepted at the boundary.
pub const MAX_COUNT: u32 = 10_000;

/// Static description of a guesthouse as captured by the owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyAttributes {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub construction_year: i32,
    pub number_of_floors: u32,
    pub number_of_rooms: u32,
    #[serde(default)]
    pub fire_extinguishers: u32,
    #[serde(default)]
    pub smoke_detectors: u32,
    #[serde(default)]
    pub emergency_exits: u32,
    #[serde(default)]
    pub has_first_aid_kit: bool,
    #[serde(default)]
    pub has_stair_handrails: bool,
    #[serde(default)]
    pub stairs_slip_resistant: bool,
    #[serde(default)]
    pub building_type: BuildingType,
}

impl PropertyAttributes {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn is_multi_floor(&self) -> bool {
        self.number_of_floors > 1
    }

    /// Boundary check run before a record reaches the engine.
    pub fn validate(&self) -> Result<(), PropertyValidationError> {
        if self.name.trim().is_empty() {
            return Err(PropertyValidationError::MissingName);
        }
        if self.number_of_floors == 0 {
            return Err(PropertyValidationError::NoFloors);
        }
        if self.number_of_rooms == 0 {
            return Err(PropertyValidationError::NoRooms);
        }
        let counts = [
            ("number_of_floors", self.number_of_floors),
            ("number_of_rooms", self.number_of_rooms),
            ("fire_extinguishers", self.fire_extinguishers),
            ("smoke_detectors", self.smoke_detectors),
            ("emergency_exits", self.emergency_exits),
        ];
        if let Some((field, value)) = counts.into_iter().find(|(_, value)| *value > MAX_COUNT) {
            return Err(PropertyValidationError::ExcessiveCount { field, value });
        }
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(PropertyValidationError::Latitude(self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(PropertyValidationError::Longitude(self.longitude));
        }
        Ok(())
    }
}

/// Reasons a property record is refused at the boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropertyValidationError {
    #[error("property name must not be empty")]
    MissingName,
    #[error("number_of_floors must be at least 1")]
    NoFloors,
    #[error("number_of_rooms must be at least 1")]
    NoRooms,
    #[error("{field} of {value} exceeds the limit of {limit}", limit = MAX_COUNT)]
    ExcessiveCount { field: &'static str, value: u32 },
    #[error("latitude {0} is outside -90..=90")]
    Latitude(f64),
    #[error("longitude {0} is outside -180..=180")]
    Longitude(f64),
}
