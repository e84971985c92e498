use std::io::Cursor;
use std::sync::Arc;

use chrono::NaiveDate;
use guesthouse_safety::assessment::{AssessmentEngine, AssessmentService, RiskLevel};
use guesthouse_safety::config::CostConfig;
use guesthouse_safety::context::{
    FacilitySnapshot, SnapshotFacilityProvider, SnapshotWeatherProvider, WeatherReading,
};
use guesthouse_safety::portfolio::{self, PropertyImporter};

const PORTFOLIO: &str = "\
id,name,address,latitude,longitude,construction_year,number_of_floors,number_of_rooms,fire_extinguishers,smoke_detectors,emergency_exits,has_first_aid_kit,has_stair_handrails,stairs_slip_resistant,building_type
11,Dar El Bey,Medina de Tunis,36.7992,10.1706,1950,3,9,1,2,1,yes,no,no,traditional
12,Villa Azur,Route de la Corniche,36.8625,10.3333,2016,1,3,1,2,2,yes,yes,yes,modern
13,Maison Kerkennah,,34.7,11.2,1995,2,5,2,4,2,no,yes,no,renovated
";

fn season_opening() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid season opening date")
}

#[test]
fn portfolio_import_ranks_properties_by_baseline() {
    let properties =
        PropertyImporter::from_reader(Cursor::new(PORTFOLIO)).expect("portfolio imports");
    let engine = AssessmentEngine::new(CostConfig::default());

    let entries = portfolio::summarize(&engine, &properties, season_opening());

    let order: Vec<u64> = entries.iter().map(|entry| entry.property_id).collect();
    assert_eq!(order, vec![11, 13, 12], "weakest property should be listed first");

    let dar_el_bey = &entries[0];
    assert_eq!(dar_el_bey.risk_level, RiskLevel::High);
    assert!(dar_el_bey.total_one_time > 0);

    let villa = &entries[2];
    assert_eq!(villa.baseline_score, 100);
    assert_eq!(villa.total_one_time, 0);
    assert_eq!(villa.annual_maintenance, 201);
}

#[test]
fn imported_property_flows_through_full_assessment() {
    let properties =
        PropertyImporter::from_reader(Cursor::new(PORTFOLIO)).expect("portfolio imports");
    let kerkennah = properties
        .iter()
        .find(|property| property.id == 13)
        .expect("Kerkennah property present");

    let reading = WeatherReading {
        temperature: 18.0,
        precipitation: 0.0,
        rain: 0.0,
        wind_speed: 25.0,
        observed_at: None,
    };
    let service = AssessmentService::new(
        Arc::new(AssessmentEngine::new(CostConfig::default())),
        Arc::new(SnapshotWeatherProvider::new(Some(reading))),
        Arc::new(SnapshotFacilityProvider::new(Some(FacilitySnapshot::new(1, 2)))),
    );

    let envelope = service
        .assess(kerkennah, season_opening())
        .expect("assessment succeeds");
    let report = &envelope.report;

    // First aid (8) and slip surface (6) are the only gaps.
    assert_eq!(report.scores.baseline_score, 86);
    assert_eq!(report.scores.weather_risk_score, 10);
    assert_eq!(report.scores.facility_risk_adjustment, 10);
    assert_eq!(report.scores.final_score, 71.0);
    assert_eq!(report.scores.final_risk_level, RiskLevel::Medium);
    assert_eq!(
        report.building_context.installation_complexity,
        "Higher complexity (renovated structure, varied installation requirements)"
    );
    assert!(report
        .recommendations
        .weather_today
        .iter()
        .any(|line| line.starts_with("Moderate winds")));
}
