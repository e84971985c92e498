use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::PropertyImportError;
use crate::assessment::{BuildingType, PropertyAttributes};

/// Reads a headered CSV with one property per row. Error row numbers count
/// data rows from 1, excluding the header.
pub fn parse_properties<R: Read>(
    reader: R,
) -> Result<Vec<PropertyAttributes>, PropertyImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut properties = Vec::new();

    for (index, record) in csv_reader.deserialize::<PropertyRow>().enumerate() {
        let row = index + 1;
        let property = record
            .map_err(|source| PropertyImportError::Csv { row, source })?
            .into_property();
        property
            .validate()
            .map_err(|source| PropertyImportError::Invalid { row, source })?;
        properties.push(property);
    }

    Ok(properties)
}

#[derive(Debug, Deserialize)]
struct PropertyRow {
    id: u64,
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    address: Option<String>,
    latitude: f64,
    longitude: f64,
    construction_year: i32,
    number_of_floors: u32,
    number_of_rooms: u32,
    #[serde(default)]
    fire_extinguishers: Option<u32>,
    #[serde(default)]
    smoke_detectors: Option<u32>,
    #[serde(default)]
    emergency_exits: Option<u32>,
    #[serde(default, deserialize_with = "flag")]
    has_first_aid_kit: bool,
    #[serde(default, deserialize_with = "flag")]
    has_stair_handrails: bool,
    #[serde(default, deserialize_with = "flag")]
    stairs_slip_resistant: bool,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    building_type: Option<String>,
}

impl PropertyRow {
    fn into_property(self) -> PropertyAttributes {
        PropertyAttributes {
            id: self.id,
            name: self.name,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
            construction_year: self.construction_year,
            number_of_floors: self.number_of_floors,
            number_of_rooms: self.number_of_rooms,
            fire_extinguishers: self.fire_extinguishers.unwrap_or(0),
            smoke_detectors: self.smoke_detectors.unwrap_or(0),
            emergency_exits: self.emergency_exits.unwrap_or(0),
            has_first_aid_kit: self.has_first_aid_kit,
            has_stair_handrails: self.has_stair_handrails,
            stairs_slip_resistant: self.stairs_slip_resistant,
            building_type: BuildingType::normalize(self.building_type.as_deref()),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Spreadsheet-style booleans; blank means false.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "n" | "0" => Ok(false),
        "true" | "yes" | "y" | "1" => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "expected a yes/no value, found '{other}'"
        ))),
    }
}
