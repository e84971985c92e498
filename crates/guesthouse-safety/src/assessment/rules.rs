use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::property::PropertyAttributes;
use crate::config::SafetyThresholds;

const OLD_BUILDING_PENALTY: u32 = 10;
const EXTINGUISHER_PENALTY: u32 = 5;
const DETECTOR_PENALTY: u32 = 4;
const EXIT_PENALTY: u32 = 10;
const FIRST_AID_PENALTY: u32 = 8;
const HANDRAIL_PENALTY: u32 = 8;
const SLIP_SURFACE_PENALTY: u32 = 6;

/// Safety checks that can cost a property points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyFactor {
    BuildingAge,
    FireExtinguishers,
    SmokeDetectors,
    EmergencyExits,
    FirstAidKit,
    StairHandrails,
    StairSurface,
}

impl SafetyFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::BuildingAge => "Building age",
            Self::FireExtinguishers => "Fire extinguishers",
            Self::SmokeDetectors => "Smoke detectors",
            Self::EmergencyExits => "Emergency exits",
            Self::FirstAidKit => "First aid kit",
            Self::StairHandrails => "Stair handrails",
            Self::StairSurface => "Stair surface",
        }
    }
}

/// A single deduction from the baseline, kept for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deduction {
    pub factor: SafetyFactor,
    pub points: u32,
    pub issue: String,
    pub recommendation: String,
}

/// Units and work items needed to close every deficiency found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationPlan {
    pub fire_extinguishers: u32,
    pub smoke_detectors: u32,
    pub emergency_exits: u32,
    pub first_aid_kit: bool,
    /// Staircases (floors - 1) that need handrails.
    pub handrail_runs: u32,
    pub slip_coating: bool,
}

impl RemediationPlan {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub(crate) struct RuleFindings {
    pub score: u8,
    pub deductions: Vec<Deduction>,
    pub plan: RemediationPlan,
}

pub(crate) fn score_property(
    property: &PropertyAttributes,
    thresholds: &SafetyThresholds,
    assessed_on: NaiveDate,
) -> RuleFindings {
    let mut deductions = Vec::new();
    let mut plan = RemediationPlan::default();
    let floors = property.number_of_floors;

    if property.construction_year < thresholds.old_building_year {
        let age = (assessed_on.year() - property.construction_year).max(0);
        deductions.push(Deduction {
            factor: SafetyFactor::BuildingAge,
            points: OLD_BUILDING_PENALTY,
            issue: format!(
                "Building is {age} years old (built before {})",
                thresholds.old_building_year
            ),
            recommendation: "Consider professional structural inspection for older buildings"
                .to_string(),
        });
    }

    let extinguisher_deficit = floors
        .saturating_mul(thresholds.min_fire_extinguishers_per_floor)
        .saturating_sub(property.fire_extinguishers);
    if extinguisher_deficit > 0 {
        deductions.push(Deduction {
            factor: SafetyFactor::FireExtinguishers,
            points: extinguisher_deficit.saturating_mul(EXTINGUISHER_PENALTY),
            issue: format!("Need {extinguisher_deficit} more fire extinguisher(s)"),
            recommendation: format!(
                "Add {extinguisher_deficit} fire extinguisher(s) (minimum {} per floor)",
                thresholds.min_fire_extinguishers_per_floor
            ),
        });
        plan.fire_extinguishers = extinguisher_deficit;
    }

    let detector_deficit = floors
        .saturating_mul(thresholds.min_smoke_detectors_per_floor)
        .saturating_sub(property.smoke_detectors);
    if detector_deficit > 0 {
        deductions.push(Deduction {
            factor: SafetyFactor::SmokeDetectors,
            points: detector_deficit.saturating_mul(DETECTOR_PENALTY),
            issue: format!("Need {detector_deficit} more smoke detector(s)"),
            recommendation: format!(
                "Install {detector_deficit} smoke detector(s) (minimum {} per floor)",
                thresholds.min_smoke_detectors_per_floor
            ),
        });
        plan.smoke_detectors = detector_deficit;
    }

    let exit_deficit = thresholds
        .min_emergency_exits
        .saturating_sub(property.emergency_exits);
    if exit_deficit > 0 {
        deductions.push(Deduction {
            factor: SafetyFactor::EmergencyExits,
            points: exit_deficit.saturating_mul(EXIT_PENALTY),
            issue: format!("Need {exit_deficit} more emergency exit(s)"),
            recommendation: format!(
                "Add {exit_deficit} clearly marked emergency exit(s) with illuminated signs"
            ),
        });
        plan.emergency_exits = exit_deficit;
    }

    if !property.has_first_aid_kit {
        deductions.push(Deduction {
            factor: SafetyFactor::FirstAidKit,
            points: FIRST_AID_PENALTY,
            issue: "No first aid kit available".to_string(),
            recommendation: "Provide a well-stocked first aid kit in an accessible location"
                .to_string(),
        });
        plan.first_aid_kit = true;
    }

    // Single-storey properties have no staircase to assess.
    if property.is_multi_floor() {
        if !property.has_stair_handrails {
            deductions.push(Deduction {
                factor: SafetyFactor::StairHandrails,
                points: HANDRAIL_PENALTY,
                issue: "Stairs lack handrails".to_string(),
                recommendation: "Install handrails on all staircases".to_string(),
            });
            plan.handrail_runs = floors - 1;
        }

        if !property.stairs_slip_resistant {
            deductions.push(Deduction {
                factor: SafetyFactor::StairSurface,
                points: SLIP_SURFACE_PENALTY,
                issue: "Stairs are not slip-resistant".to_string(),
                recommendation:
                    "Apply slip-resistant coating or install anti-slip strips on stairs"
                        .to_string(),
            });
            plan.slip_coating = true;
        }
    }

    let total_deducted = deductions
        .iter()
        .fold(0u32, |total, deduction| total.saturating_add(deduction.points));
    let score = 100u32.saturating_sub(total_deducted) as u8;

    RuleFindings {
        score,
        deductions,
        plan,
    }
}
