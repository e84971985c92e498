use crate::infra::{build_engine, read_json_file};
use chrono::{Local, NaiveDate};
use clap::Args;
use guesthouse_safety::assessment::{
    AssessmentEngine, AssessmentEnvelope, AssessmentService, BuildingType, PropertyAttributes,
};
use guesthouse_safety::context::{
    FacilitySnapshot, SnapshotFacilityProvider, SnapshotWeatherProvider, WeatherReading,
};
use guesthouse_safety::error::AppError;
use guesthouse_safety::portfolio::{self, PortfolioEntry, PropertyImporter};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file describing the property
    #[arg(long)]
    pub(crate) property: PathBuf,
    /// JSON file with current weather (omit when unavailable)
    #[arg(long)]
    pub(crate) weather: Option<PathBuf>,
    /// JSON file with nearby hospital and pharmacy counts (omit when unavailable)
    #[arg(long)]
    pub(crate) facilities: Option<PathBuf>,
    /// Assessment date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Print the full report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Cost table JSON overriding SAFETY_COST_TABLE
    #[arg(long)]
    pub(crate) cost_table: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct PortfolioArgs {
    /// CSV export with one property per row
    #[arg(long)]
    pub(crate) properties: PathBuf,
    /// Assessment date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Print the ranking as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
    /// Cost table JSON overriding SAFETY_COST_TABLE
    #[arg(long)]
    pub(crate) cost_table: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Assessment date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Cost table JSON overriding SAFETY_COST_TABLE
    #[arg(long)]
    pub(crate) cost_table: Option<PathBuf>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        property,
        weather,
        facilities,
        date,
        json,
        cost_table,
    } = args;

    let property: PropertyAttributes = read_json_file(&property)?;
    let weather: Option<WeatherReading> = weather
        .map(|path| read_json_file(&path))
        .transpose()?;
    let facilities: Option<FacilitySnapshot> = facilities
        .map(|path| read_json_file(&path))
        .transpose()?;

    let envelope = assess_snapshot(
        build_engine(cost_table)?,
        &property,
        weather,
        facilities,
        date.unwrap_or_else(|| Local::now().date_naive()),
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        render_assessment(&envelope);
    }
    Ok(())
}

pub(crate) fn run_portfolio(args: PortfolioArgs) -> Result<(), AppError> {
    let PortfolioArgs {
        properties,
        date,
        json,
        cost_table,
    } = args;

    let engine = build_engine(cost_table)?;
    let imported = PropertyImporter::from_path(&properties)?;
    let today = date.unwrap_or_else(|| Local::now().date_naive());
    let entries = portfolio::summarize(&engine, &imported, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        render_portfolio(&entries, today, &engine.config().currency);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { date, cost_table } = args;
    let today = date.unwrap_or_else(|| Local::now().date_naive());
    let engine = Arc::new(build_engine(cost_table)?);

    println!("Guesthouse safety demo ({today})");
    for (property, weather, facilities) in reference_scenarios() {
        let service = AssessmentService::new(
            engine.clone(),
            Arc::new(SnapshotWeatherProvider::new(weather)),
            Arc::new(SnapshotFacilityProvider::new(Some(facilities))),
        );
        let envelope = service.assess(&property, today)?;
        println!();
        render_assessment(&envelope);
    }
    Ok(())
}

fn assess_snapshot(
    engine: AssessmentEngine,
    property: &PropertyAttributes,
    weather: Option<WeatherReading>,
    facilities: Option<FacilitySnapshot>,
    today: NaiveDate,
) -> Result<AssessmentEnvelope, AppError> {
    let service = AssessmentService::new(
        Arc::new(engine),
        Arc::new(SnapshotWeatherProvider::new(weather)),
        Arc::new(SnapshotFacilityProvider::new(facilities)),
    );
    Ok(service.assess(property, today)?)
}

fn render_assessment(envelope: &AssessmentEnvelope) {
    let report = &envelope.report;
    let scores = &report.scores;
    let costs = &report.cost_estimates;
    let currency = &costs.mandatory_improvements.currency;

    println!(
        "{} (#{}) assessed {}",
        report.property_name, report.property_id, report.assessment_date
    );
    println!(
        "- Final score {:.1}/100 ({:?}) | baseline {} | weather -{} | facilities -{}",
        scores.final_score,
        scores.final_risk_level,
        scores.baseline_score,
        scores.weather_risk_score,
        f64::from(scores.facility_risk_adjustment) / 2.0
    );

    println!("Issues identified:");
    for issue in &report.issues_identified {
        println!("  - {issue}");
    }
    println!("Mandatory improvements:");
    for recommendation in &report.recommendations.mandatory_improvements {
        println!("  - {recommendation}");
    }
    println!("Today:");
    for line in report
        .recommendations
        .weather_today
        .iter()
        .chain(&report.recommendations.facilities_access)
    {
        println!("  - {line}");
    }

    println!(
        "Costs: {} {currency} one-time (equipment {}, labor {}, compliance {}) | {} {currency}/year",
        costs.mandatory_improvements.total_one_time_investment,
        costs.mandatory_improvements.equipment_materials,
        costs.mandatory_improvements.installation_labor,
        costs.mandatory_improvements.compliance_inspections,
        costs.ongoing_costs.annual_maintenance
    );
    if !costs.optional_improvements.items.is_empty() {
        println!(
            "Optional enhancements ({} {currency} if all implemented):",
            costs.optional_improvements.total_if_all_implemented
        );
        for item in &costs.optional_improvements.items {
            println!("  - {}: {} {currency} ({})", item.item, item.cost, item.reason);
        }
    }
    println!(
        "Building: {} | {}",
        report.building_context.building_type, report.building_context.installation_complexity
    );
    println!("\n{}", report.explanation);
}

fn render_portfolio(entries: &[PortfolioEntry], today: NaiveDate, currency: &str) {
    println!("Portfolio baseline ranking ({today}, {} properties)", entries.len());
    println!(
        "{:<6} {:<28} {:>5} {:<7} {:>6} {:>10} {:>10}",
        "ID", "Property", "Score", "Risk", "Issues", "One-time", "Annual"
    );
    for entry in entries {
        println!(
            "{:<6} {:<28} {:>5} {:<7} {:>6} {:>10} {:>10}",
            entry.property_id,
            truncate(&entry.property_name, 28),
            entry.baseline_score,
            format!("{:?}", entry.risk_level),
            entry.issue_count,
            entry.total_one_time,
            entry.annual_maintenance
        );
    }

    let one_time = entries
        .iter()
        .fold(0u32, |total, entry| total.saturating_add(entry.total_one_time));
    let annual = entries
        .iter()
        .fold(0u32, |total, entry| total.saturating_add(entry.annual_maintenance));
    println!("Total: {one_time} {currency} one-time | {annual} {currency}/year");
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let mut short: String = value.chars().take(width.saturating_sub(1)).collect();
        short.push('~');
        short
    }
}

fn reference_scenarios() -> Vec<(PropertyAttributes, Option<WeatherReading>, FacilitySnapshot)> {
    vec![
        (
            PropertyAttributes {
                id: 1,
                name: "Villa Yasmine".to_string(),
                address: Some("Zone Touristique, Hammamet".to_string()),
                latitude: 36.3721,
                longitude: 10.5349,
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
            },
            Some(WeatherReading {
                temperature: 26.0,
                precipitation: 0.0,
                rain: 0.0,
                wind_speed: 12.0,
                observed_at: None,
            }),
            FacilitySnapshot::new(2, 3),
        ),
        (
            PropertyAttributes {
                id: 2,
                name: "Dar Ben Achour".to_string(),
                address: Some("Medina, Tunis".to_string()),
                latitude: 36.7992,
                longitude: 10.1706,
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
            },
            Some(WeatherReading {
                temperature: 40.0,
                precipitation: 5.0,
                rain: 5.0,
                wind_speed: 35.0,
                observed_at: None,
            }),
            FacilitySnapshot::new(0, 0),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use guesthouse_safety::config::CostConfig;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 15).expect("valid date")
    }

    #[test]
    fn reference_scenarios_span_both_extremes() {
        let scores: Vec<f64> = reference_scenarios()
            .into_iter()
            .map(|(property, weather, facilities)| {
                assess_snapshot(
                    AssessmentEngine::new(CostConfig::default()),
                    &property,
                    weather,
                    Some(facilities),
                    today(),
                )
                .expect("assessment succeeds")
                .report
                .scores
                .final_score
            })
            .collect();

        assert_eq!(scores, vec![100.0, 0.0]);
    }

    #[test]
    fn invalid_property_surfaces_as_assessment_error() {
        let (mut property, weather, facilities) = reference_scenarios().remove(0);
        property.name = "  ".to_string();

        let result = assess_snapshot(
            AssessmentEngine::new(CostConfig::default()),
            &property,
            weather,
            Some(facilities),
            today(),
        );

        assert!(matches!(result, Err(AppError::Assessment(_))));
    }

    #[test]
    fn truncate_marks_long_names() {
        assert_eq!(truncate("Dar Zitouna", 28), "Dar Zitouna");
        assert_eq!(truncate("Residence Les Jardins de Carthage", 10), "Residence~");
    }
}
