use super::common::*;
use crate::assessment::{AssessmentEngine, BuildingType, RiskLevel, SafetyFactor, MAX_COUNT};
use crate::config::CostConfig;
use crate::context::{FacilityAccessAnalyzer, FacilityCounts, SearchRadii, WeatherRisk};

#[test]
fn compliant_property_keeps_full_score() {
    let baseline = engine().baseline(&compliant_property(), assessed_on());

    assert_eq!(baseline.baseline_score, 100);
    assert_eq!(baseline.risk_level, RiskLevel::Low);
    assert!(baseline.meets_baseline());
    assert_eq!(baseline.issues, vec!["No major safety issues detected"]);
    assert_eq!(
        baseline.recommendations,
        vec!["Guesthouse meets baseline safety standards"]
    );
    assert!(baseline.remediation.is_empty());
}

#[test]
fn compliant_property_pays_only_maintenance() {
    let costs = engine()
        .baseline(&compliant_property(), assessed_on())
        .cost_breakdown;

    assert_eq!(costs.equipment, 0);
    assert_eq!(costs.installation_labor, 0);
    assert_eq!(costs.compliance_inspection, 0);
    assert_eq!(costs.total_one_time, 0);
    assert_eq!(costs.annual_maintenance, 201);
}

#[test]
fn neglected_property_collects_every_deduction() {
    let baseline = engine().baseline(&neglected_property(), assessed_on());

    let points: Vec<(SafetyFactor, u32)> = baseline
        .deductions
        .iter()
        .map(|deduction| (deduction.factor, deduction.points))
        .collect();
    assert_eq!(
        points,
        vec![
            (SafetyFactor::BuildingAge, 10),
            (SafetyFactor::FireExtinguishers, 10),
            (SafetyFactor::SmokeDetectors, 16),
            (SafetyFactor::EmergencyExits, 20),
            (SafetyFactor::FirstAidKit, 8),
            (SafetyFactor::StairHandrails, 8),
            (SafetyFactor::StairSurface, 6),
        ]
    );
    assert_eq!(baseline.baseline_score, 22);
    assert_eq!(baseline.risk_level, RiskLevel::High);
    assert_eq!(baseline.issues.len(), 7);
    assert_eq!(baseline.issues[0], "Building is 55 years old (built before 1990)");
    assert_eq!(baseline.recommendations.len(), baseline.issues.len());
}

#[test]
fn neglected_property_cost_breakdown() {
    let costs = engine()
        .baseline(&neglected_property(), assessed_on())
        .cost_breakdown;

    assert_eq!(costs.equipment, 1435);
    assert_eq!(costs.installation_labor, 600);
    assert_eq!(costs.compliance_inspection, 350);
    assert_eq!(costs.total_one_time, 2385);
    assert_eq!(costs.annual_maintenance, 252);
}

#[test]
fn building_multiplier_scales_installation_only() {
    let traditional = engine().baseline(&neglected_property(), assessed_on());

    let mut modern_property = neglected_property();
    modern_property.building_type = BuildingType::Modern;
    let modern = engine().baseline(&modern_property, assessed_on());

    let mut renovated_property = neglected_property();
    renovated_property.building_type = BuildingType::Renovated;
    let renovated = engine().baseline(&renovated_property, assessed_on());

    assert_eq!(modern.cost_breakdown.installation_labor, 540);
    assert_eq!(renovated.cost_breakdown.installation_labor, 660);
    for other in [&modern, &renovated] {
        assert_eq!(other.baseline_score, traditional.baseline_score);
        assert_eq!(other.cost_breakdown.equipment, traditional.cost_breakdown.equipment);
        assert_eq!(
            other.cost_breakdown.compliance_inspection,
            traditional.cost_breakdown.compliance_inspection
        );
        assert_eq!(
            other.cost_breakdown.annual_maintenance,
            traditional.cost_breakdown.annual_maintenance
        );
    }
    assert_eq!(modern.cost_breakdown.total_one_time, 2325);
}

#[test]
fn adding_equipment_never_lowers_the_score() {
    let engine = engine();
    let mut property = neglected_property();
    let mut previous = engine.baseline(&property, assessed_on()).baseline_score;

    for _ in 0..4 {
        property.fire_extinguishers += 1;
        property.smoke_detectors += 1;
        property.emergency_exits += 1;
        let score = engine.baseline(&property, assessed_on()).baseline_score;
        assert!(score >= previous, "{score} dropped below {previous}");
        previous = score;
    }

    property.has_first_aid_kit = true;
    property.has_stair_handrails = true;
    property.stairs_slip_resistant = true;
    assert!(engine.baseline(&property, assessed_on()).baseline_score >= previous);
}

#[test]
fn repeated_baselines_are_identical() {
    let engine = engine();
    let first = engine.baseline(&neglected_property(), assessed_on());
    let second = engine.baseline(&neglected_property(), assessed_on());
    assert_eq!(first, second);
}

#[test]
fn optional_improvements_are_advisory() {
    let baseline = engine().baseline(&neglected_property(), assessed_on());

    let items: Vec<&str> = baseline
        .optional_improvements
        .iter()
        .map(|item| item.item.as_str())
        .collect();
    assert_eq!(
        items,
        vec![
            "Fire blanket",
            "Emergency lighting",
            "Carbon monoxide detector",
            "Emergency evacuation plan signage",
            "2 security cameras",
        ]
    );
    assert_eq!(baseline.optional_total(), 1060);
    assert_eq!(baseline.cost_breakdown.total_one_time, 2385);
}

#[test]
fn alternate_cost_table_changes_prices_not_scores() {
    let mut config = CostConfig::default();
    config.equipment.fire_extinguisher = 200;
    config.compliance.annual_inspection = 0;
    let engine = AssessmentEngine::new(config);

    let baseline = engine.baseline(&neglected_property(), assessed_on());

    assert_eq!(baseline.baseline_score, 22);
    assert_eq!(baseline.cost_breakdown.equipment, 1635);
    assert_eq!(baseline.cost_breakdown.annual_maintenance, 152);
}

#[test]
fn old_building_notes_are_added() {
    let baseline = engine().baseline(&neglected_property(), assessed_on());
    assert!(baseline.building_notes[0].starts_with("Traditional construction"));
    assert!(baseline
        .building_notes
        .iter()
        .any(|note| note.starts_with("Pre-1980 construction")));
}

#[test]
fn largest_accepted_property_scores_without_overflow() {
    let mut property = neglected_property();
    property.number_of_floors = MAX_COUNT;
    property.number_of_rooms = MAX_COUNT;
    property.validate().expect("counts at the limit are accepted");

    let baseline = engine().baseline(&property, assessed_on());

    assert_eq!(baseline.baseline_score, 0);
    assert_eq!(baseline.remediation.smoke_detectors, 2 * MAX_COUNT);
    assert_eq!(baseline.remediation.handrail_runs, MAX_COUNT - 1);
    assert!(baseline.cost_breakdown.total_one_time > baseline.cost_breakdown.equipment);
}

#[test]
fn oversized_rates_saturate_instead_of_wrapping() {
    let mut config = CostConfig::default();
    config.maintenance.fire_extinguisher = u32::MAX;
    config.optional_improvements.emergency_lighting = u32::MAX;
    let engine = AssessmentEngine::new(config);

    let mut property = compliant_property();
    property.number_of_floors = 2;
    property.fire_extinguishers = MAX_COUNT;
    property.smoke_detectors = 4;
    property.validate().expect("record is valid");

    let baseline = engine.baseline(&property, assessed_on());
    assert_eq!(baseline.cost_breakdown.annual_maintenance, u32::MAX);
    assert_eq!(baseline.optional_total(), u32::MAX);

    let report = engine.finalize(
        &baseline,
        &WeatherRisk::unavailable(),
        &FacilityAccessAnalyzer::analyze(&FacilityCounts::confirmed(2, 2, SearchRadii::default())),
    );
    let summary = &report.cost_estimates.project_summary;
    assert_eq!(summary.first_year_total, u32::MAX);
    assert_eq!(summary.with_optional_improvements, u32::MAX);
}
