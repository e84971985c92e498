//! Bulk import of an owner's properties and a baseline overview across them.

mod parser;

pub use parser::parse_properties;

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

use crate::assessment::{AssessmentEngine, PropertyAttributes, PropertyValidationError, RiskLevel};

#[derive(Debug, thiserror::Error)]
pub enum PropertyImportError {
    #[error("failed to read property file: {0}")]
    Io(#[from] std::io::Error),
    #[error("row {row}: invalid CSV data: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("row {row}: {source}")]
    Invalid {
        row: usize,
        #[source]
        source: PropertyValidationError,
    },
}

pub struct PropertyImporter;

impl PropertyImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PropertyAttributes>, PropertyImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PropertyAttributes>, PropertyImportError> {
        parse_properties(reader)
    }
}

/// One line of the portfolio overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioEntry {
    pub property_id: u64,
    pub property_name: String,
    pub baseline_score: u8,
    pub risk_level: RiskLevel,
    pub issue_count: usize,
    pub total_one_time: u32,
    pub annual_maintenance: u32,
}

/// Baseline-only overview, weakest properties first.
pub fn summarize(
    engine: &AssessmentEngine,
    properties: &[PropertyAttributes],
    assessed_on: NaiveDate,
) -> Vec<PortfolioEntry> {
    let mut entries: Vec<PortfolioEntry> = properties
        .iter()
        .map(|property| {
            let baseline = engine.baseline(property, assessed_on);
            PortfolioEntry {
                property_id: property.id,
                property_name: property.name.clone(),
                baseline_score: baseline.baseline_score,
                risk_level: baseline.risk_level,
                issue_count: baseline.deductions.len(),
                total_one_time: baseline.cost_breakdown.total_one_time,
                annual_maintenance: baseline.cost_breakdown.annual_maintenance,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        a.baseline_score
            .cmp(&b.baseline_score)
            .then(a.property_id.cmp(&b.property_id))
    });
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::BuildingType;
    use crate::config::CostConfig;
    use std::io::Cursor;

    const HEADER: &str = "id,name,address,latitude,longitude,construction_year,number_of_floors,number_of_rooms,fire_extinguishers,smoke_detectors,emergency_exits,has_first_aid_kit,has_stair_handrails,stairs_slip_resistant,building_type\n";

    fn import(rows: &str) -> Result<Vec<PropertyAttributes>, PropertyImportError> {
        PropertyImporter::from_reader(Cursor::new(format!("{HEADER}{rows}")))
    }

    #[test]
    fn parses_rows_with_defaults_and_normalization() {
        let properties = import(
            "1,Dar Salma,Rue de la Kasbah,36.79,10.17,1968,2,4,,,,no,,,castle\n\
             2,Villa Nour,,35.82,10.63,2018,1,3,1,2,2,yes,yes,yes,Modern\n",
        )
        .expect("rows import");

        assert_eq!(properties.len(), 2);
        let first = &properties[0];
        assert_eq!(first.address.as_deref(), Some("Rue de la Kasbah"));
        assert_eq!(first.fire_extinguishers, 0);
        assert!(!first.has_first_aid_kit);
        assert_eq!(first.building_type, BuildingType::Traditional);

        let second = &properties[1];
        assert!(second.address.is_none());
        assert!(second.has_first_aid_kit);
        assert_eq!(second.building_type, BuildingType::Modern);
    }

    #[test]
    fn reports_the_offending_row() {
        let err = import(
            "1,Dar Salma,,36.79,10.17,1968,2,4,,,,no,,,\n\
             2,Empty House,,36.79,10.17,1968,0,4,,,,no,,,\n",
        )
        .expect_err("zero floors rejected");

        match err {
            PropertyImportError::Invalid { row, source } => {
                assert_eq!(row, 2);
                assert_eq!(source, PropertyValidationError::NoFloors);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unreadable_flags() {
        let err = import("1,Dar Salma,,36.79,10.17,1968,2,4,,,,maybe,,,\n")
            .expect_err("flag rejected");
        assert!(matches!(err, PropertyImportError::Csv { row: 1, .. }));
    }

    #[test]
    fn summary_lists_weakest_properties_first() {
        let properties = import(
            "1,Villa Nour,,35.82,10.63,2018,1,3,1,2,2,yes,yes,yes,modern\n\
             2,Dar Salma,,36.79,10.17,1968,2,4,0,0,0,no,no,no,traditional\n",
        )
        .expect("rows import");
        let engine = AssessmentEngine::new(CostConfig::default());
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date");

        let entries = summarize(&engine, &properties, today);

        assert_eq!(entries[0].property_id, 2);
        assert_eq!(entries[0].baseline_score, 22);
        assert_eq!(entries[0].issue_count, 7);
        assert_eq!(entries[1].baseline_score, 100);
        assert_eq!(entries[1].total_one_time, 0);
    }
}
