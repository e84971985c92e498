use serde::{Deserialize, Serialize};

use super::property::PropertyAttributes;
use super::rules::RemediationPlan;
use crate::config::{CostConfig, ItemRates};

/// Average handrail length per staircase, in meters.
const HANDRAIL_METERS_PER_RUN: f64 = 3.5;

/// One-time and recurring cost of closing the baseline deficiencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub equipment: u32,
    pub installation_labor: u32,
    pub compliance_inspection: u32,
    pub total_one_time: u32,
    pub annual_maintenance: u32,
}

pub(crate) fn estimate_costs(
    property: &PropertyAttributes,
    plan: &RemediationPlan,
    config: &CostConfig,
    building_multiplier: f64,
) -> CostBreakdown {
    let equipment = remediation_sum(plan, &config.equipment, true);

    // Labor is the only line scaled by construction method.
    let base_installation = remediation_sum(plan, &config.installation, false);
    let installation_labor = to_units(base_installation * building_multiplier);

    let compliance_inspection = if equipment > 0.0 {
        config
            .compliance
            .initial_inspection
            .saturating_add(config.compliance.certification)
    } else {
        0
    };

    let total_one_time =
        to_units(equipment + f64::from(installation_labor) + f64::from(compliance_inspection));

    CostBreakdown {
        equipment: to_units(equipment),
        installation_labor,
        compliance_inspection,
        total_one_time,
        annual_maintenance: annual_maintenance(property, plan, config),
    }
}

fn remediation_sum(plan: &RemediationPlan, rates: &ItemRates, include_first_aid: bool) -> f64 {
    let mut total = f64::from(plan.fire_extinguishers) * f64::from(rates.fire_extinguisher)
        + f64::from(plan.smoke_detectors) * f64::from(rates.smoke_detector)
        + f64::from(plan.emergency_exits) * f64::from(rates.emergency_exit_sign);

    if include_first_aid && plan.first_aid_kit {
        total += f64::from(rates.first_aid_kit);
    }

    if plan.handrail_runs > 0 {
        total += f64::from(plan.handrail_runs)
            * f64::from(rates.stair_handrail)
            * HANDRAIL_METERS_PER_RUN;
    }

    // Coating is priced per staircase when handrails go in at the same time,
    // otherwise as a single flat job.
    if plan.slip_coating {
        total += if plan.handrail_runs > 0 {
            f64::from(plan.handrail_runs) * f64::from(rates.slip_resistant_coating)
        } else {
            f64::from(rates.slip_resistant_coating)
        };
    }

    total
}

fn annual_maintenance(
    property: &PropertyAttributes,
    plan: &RemediationPlan,
    config: &CostConfig,
) -> u32 {
    let rates = &config.maintenance;

    let extinguishers = property
        .fire_extinguishers
        .saturating_add(plan.fire_extinguishers);
    let detectors = property.smoke_detectors.saturating_add(plan.smoke_detectors);
    let exits = property.emergency_exits.saturating_add(plan.emergency_exits);

    let mut total = extinguishers
        .saturating_mul(rates.fire_extinguisher)
        .saturating_add(detectors.saturating_mul(rates.smoke_detector))
        .saturating_add(exits.saturating_mul(rates.emergency_exit_sign));

    if property.has_first_aid_kit || plan.first_aid_kit {
        total = total.saturating_add(rates.first_aid_kit);
    }

    if property.has_stair_handrails || plan.handrail_runs > 0 {
        let staircases = if plan.handrail_runs > 0 {
            plan.handrail_runs
        } else {
            property.number_of_floors.saturating_sub(1)
        };
        total = total.saturating_add(staircases.saturating_mul(rates.stair_handrail));
    }

    total.saturating_add(config.compliance.annual_inspection)
}

/// Rounds half to even, matching how the published estimates were produced.
fn to_units(amount: f64) -> u32 {
    amount.round_ties_even().max(0.0) as u32
}
