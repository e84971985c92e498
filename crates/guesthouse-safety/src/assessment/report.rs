use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::advisory::{self, OptionalImprovement};
use super::explanation;
use super::property::BuildingType;
use super::{BaselineResult, RiskLevel};
use crate::context::{FacilityRisk, WeatherRisk, WeatherRiskLevel};

const ONGOING_DESCRIPTION: &str = "Equipment servicing, inspections, and supply restocking";
const OPTIONAL_NOTE: &str = "These are recommended enhancements, not mandatory requirements";

/// Full assessment handed back to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub property_id: u64,
    pub property_name: String,
    pub assessment_date: NaiveDate,
    pub scores: ScoreSummary,
    pub issues_identified: Vec<String>,
    pub recommendations: RecommendationGroups,
    pub cost_estimates: CostEstimates,
    pub building_context: BuildingContext,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub baseline_score: u8,
    pub baseline_risk_level: RiskLevel,
    pub weather_risk_score: u8,
    pub weather_risk_level: WeatherRiskLevel,
    pub facility_risk_adjustment: u8,
    pub final_score: f64,
    pub final_risk_level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationGroups {
    pub mandatory_improvements: Vec<String>,
    pub facilities_access: Vec<String>,
    pub weather_today: Vec<String>,
    pub optional_enhancements: Vec<OptionalImprovement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimates {
    pub mandatory_improvements: MandatoryCosts,
    pub ongoing_costs: OngoingCosts,
    pub optional_improvements: OptionalCosts,
    pub project_summary: ProjectSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandatoryCosts {
    pub equipment_materials: u32,
    pub installation_labor: u32,
    pub compliance_inspections: u32,
    pub total_one_time_investment: u32,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OngoingCosts {
    pub annual_maintenance: u32,
    pub description: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalCosts {
    pub total_if_all_implemented: u32,
    pub items: Vec<OptionalImprovement>,
    pub note: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub minimum_investment: u32,
    pub with_optional_improvements: u32,
    pub first_year_total: u32,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingContext {
    #[serde(rename = "type")]
    pub building_type: BuildingType,
    pub installation_complexity: String,
    pub notes: Vec<String>,
}

pub(crate) fn assemble(
    baseline: &BaselineResult,
    weather: &WeatherRisk,
    facilities: &FacilityRisk,
    final_score: f64,
    currency: &str,
) -> AssessmentReport {
    let costs = &baseline.cost_breakdown;
    let one_time = costs.total_one_time;
    let annual = costs.annual_maintenance;
    let optional_total = baseline.optional_total();

    let explanation = explanation::narrate(baseline, weather, facilities, final_score, currency);

    AssessmentReport {
        property_id: baseline.property_id,
        property_name: baseline.property_name.clone(),
        assessment_date: baseline.assessed_on,
        scores: ScoreSummary {
            baseline_score: baseline.baseline_score,
            baseline_risk_level: baseline.risk_level,
            weather_risk_score: weather.risk_score,
            weather_risk_level: weather.risk_level,
            facility_risk_adjustment: facilities.risk_adjustment,
            final_score,
            final_risk_level: RiskLevel::from_score(final_score),
        },
        issues_identified: baseline.issues.clone(),
        recommendations: RecommendationGroups {
            mandatory_improvements: baseline.recommendations.clone(),
            facilities_access: facilities.recommendations.clone(),
            weather_today: weather.recommendations.clone(),
            optional_enhancements: baseline.optional_improvements.clone(),
        },
        cost_estimates: CostEstimates {
            mandatory_improvements: MandatoryCosts {
                equipment_materials: costs.equipment,
                installation_labor: costs.installation_labor,
                compliance_inspections: costs.compliance_inspection,
                total_one_time_investment: one_time,
                currency: currency.to_string(),
            },
            ongoing_costs: OngoingCosts {
                annual_maintenance: annual,
                description: ONGOING_DESCRIPTION.to_string(),
                currency: currency.to_string(),
            },
            optional_improvements: OptionalCosts {
                total_if_all_implemented: optional_total,
                items: baseline.optional_improvements.clone(),
                note: OPTIONAL_NOTE.to_string(),
                currency: currency.to_string(),
            },
            project_summary: ProjectSummary {
                minimum_investment: one_time,
                with_optional_improvements: one_time.saturating_add(optional_total),
                first_year_total: one_time.saturating_add(annual),
                currency: currency.to_string(),
            },
        },
        building_context: BuildingContext {
            building_type: baseline.building_type,
            installation_complexity: advisory::installation_complexity(
                baseline.building_multiplier,
            )
            .to_string(),
            notes: baseline.building_notes.clone(),
        },
        explanation,
    }
}
