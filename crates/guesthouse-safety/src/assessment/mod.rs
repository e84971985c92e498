//! Baseline scoring, remediation costing and final report assembly.

mod advisory;
mod costs;
mod explanation;
mod property;
pub mod report;
pub mod router;
mod rules;
pub mod service;

#[cfg(test)]
mod tests;

pub use advisory::OptionalImprovement;
pub use costs::CostBreakdown;
pub use property::{
    BuildingType, Coordinates, PropertyAttributes, PropertyValidationError, MAX_COUNT,
};
pub use report::AssessmentReport;
pub use router::assessment_router;
pub use rules::{Deduction, RemediationPlan, SafetyFactor};
pub use service::{AssessmentEnvelope, AssessmentService, AssessmentServiceError, ExternalData};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CostConfig;
use crate::context::{FacilityRisk, WeatherRisk};

/// Qualitative band for a 0..=100 safety score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Low
        } else if score >= 50.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

/// Static-attribute assessment of a property, before weather and facilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineResult {
    pub property_id: u64,
    pub property_name: String,
    pub assessed_on: NaiveDate,
    pub baseline_score: u8,
    pub risk_level: RiskLevel,
    pub deductions: Vec<Deduction>,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub remediation: RemediationPlan,
    pub cost_breakdown: CostBreakdown,
    pub optional_improvements: Vec<OptionalImprovement>,
    pub building_notes: Vec<String>,
    pub building_type: BuildingType,
    pub building_multiplier: f64,
}

impl BaselineResult {
    /// True when no check deducted points.
    pub fn meets_baseline(&self) -> bool {
        self.deductions.is_empty()
    }

    pub fn optional_total(&self) -> u32 {
        self.optional_improvements
            .iter()
            .fold(0, |total, item| total.saturating_add(item.cost))
    }
}

/// Stateless calculator over an immutable cost table.
pub struct AssessmentEngine {
    config: CostConfig,
}

impl AssessmentEngine {
    pub fn new(config: CostConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CostConfig {
        &self.config
    }

    pub fn baseline(
        &self,
        property: &PropertyAttributes,
        assessed_on: NaiveDate,
    ) -> BaselineResult {
        let findings = rules::score_property(property, &self.config.thresholds, assessed_on);
        let building_multiplier = self
            .config
            .building_multipliers
            .for_type(property.building_type);
        let cost_breakdown =
            costs::estimate_costs(property, &findings.plan, &self.config, building_multiplier);

        let (issues, recommendations) = if findings.deductions.is_empty() {
            (
                vec!["No major safety issues detected".to_string()],
                vec!["Guesthouse meets baseline safety standards".to_string()],
            )
        } else {
            findings
                .deductions
                .iter()
                .map(|deduction| (deduction.issue.clone(), deduction.recommendation.clone()))
                .unzip()
        };

        debug!(
            property_id = property.id,
            score = findings.score,
            deductions = findings.deductions.len(),
            one_time = cost_breakdown.total_one_time,
            "computed baseline safety score"
        );

        BaselineResult {
            property_id: property.id,
            property_name: property.name.clone(),
            assessed_on,
            baseline_score: findings.score,
            risk_level: RiskLevel::from_score(f64::from(findings.score)),
            deductions: findings.deductions,
            issues,
            recommendations,
            remediation: findings.plan,
            cost_breakdown,
            optional_improvements: advisory::optional_improvements(
                property,
                &self.config.optional_improvements,
            ),
            building_notes: advisory::building_notes(property),
            building_type: property.building_type,
            building_multiplier,
        }
    }

    /// Blends the baseline with today's weather and facility access.
    pub fn finalize(
        &self,
        baseline: &BaselineResult,
        weather: &WeatherRisk,
        facilities: &FacilityRisk,
    ) -> AssessmentReport {
        let final_score = blended_score(
            baseline.baseline_score,
            weather.risk_score,
            facilities.risk_adjustment,
        );

        debug!(
            property_id = baseline.property_id,
            baseline = baseline.baseline_score,
            weather = weather.risk_score,
            facilities = facilities.risk_adjustment,
            final_score,
            "blended final safety score"
        );

        report::assemble(
            baseline,
            weather,
            facilities,
            final_score,
            &self.config.currency,
        )
    }
}

/// Facility risk counts half; the result is clamped and kept to one decimal.
fn blended_score(baseline: u8, weather_risk: u8, facility_adjustment: u8) -> f64 {
    let raw =
        f64::from(baseline) - f64::from(weather_risk) - f64::from(facility_adjustment) / 2.0;
    (raw.clamp(0.0, 100.0) * 10.0).round() / 10.0
}
