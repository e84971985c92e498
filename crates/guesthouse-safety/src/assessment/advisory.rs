use serde::{Deserialize, Serialize};

use super::property::{BuildingType, PropertyAttributes};
use crate::config::OptionalImprovementCosts;

const SECURITY_CAMERA_COUNT: u32 = 2;
const STRUCTURAL_ASSESSMENT_YEAR: i32 = 1980;

/// Advisory enhancement that does not affect the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalImprovement {
    pub item: String,
    pub reason: String,
    pub cost: u32,
}

impl OptionalImprovement {
    fn new(item: impl Into<String>, reason: &str, cost: u32) -> Self {
        Self {
            item: item.into(),
            reason: reason.to_string(),
            cost,
        }
    }
}

pub(crate) fn optional_improvements(
    property: &PropertyAttributes,
    costs: &OptionalImprovementCosts,
) -> Vec<OptionalImprovement> {
    let floors = property.number_of_floors;
    let rooms = property.number_of_rooms;
    let mut items = vec![OptionalImprovement::new(
        "Fire blanket",
        "Kitchen fire suppression",
        costs.fire_blanket,
    )];

    if property.is_multi_floor() {
        items.push(OptionalImprovement::new(
            "Emergency lighting",
            "Battery backup lighting for safe evacuation during power outages",
            costs.emergency_lighting.saturating_mul(floors),
        ));
    }

    items.push(OptionalImprovement::new(
        "Carbon monoxide detector",
        "Detect dangerous gas from cooking appliances or heating",
        costs.carbon_monoxide_detector,
    ));

    if rooms >= 6 {
        items.push(OptionalImprovement::new(
            "Centralized fire alarm system",
            "Comprehensive alert system for larger properties",
            costs.fire_alarm_system,
        ));
    }

    if property.is_multi_floor() || rooms >= 5 {
        items.push(OptionalImprovement::new(
            "Emergency evacuation plan signage",
            "Professional floor plans and evacuation route markers",
            costs.emergency_evacuation_plan,
        ));
    }

    if rooms >= 4 {
        items.push(OptionalImprovement::new(
            format!("{SECURITY_CAMERA_COUNT} security cameras"),
            "Monitor entrance and common areas for guest security",
            costs.security_camera.saturating_mul(SECURITY_CAMERA_COUNT),
        ));
    }

    items
}

pub(crate) fn building_notes(property: &PropertyAttributes) -> Vec<String> {
    let mut notes = vec![match property.building_type {
        BuildingType::Traditional => {
            "Traditional construction: Installation may require specialized techniques for stone/masonry walls"
        }
        BuildingType::Modern => {
            "Modern construction: Standard installation procedures apply, slightly lower labor costs"
        }
        BuildingType::Renovated => {
            "Renovated building: Mixed construction may require varied installation approaches"
        }
    }
    .to_string()];

    if property.construction_year < STRUCTURAL_ASSESSMENT_YEAR {
        notes.push(
            "Pre-1980 construction: Strongly recommend professional structural assessment"
                .to_string(),
        );
    }

    if property.number_of_floors >= 3 {
        notes.push(
            "Multi-floor building: Consider additional fire safety measures and clear evacuation routes"
                .to_string(),
        );
    }

    if property.number_of_rooms >= 8 {
        notes.push("Larger property: May benefit from centralized fire alarm system".to_string());
    }

    notes
}

pub(crate) fn installation_complexity(multiplier: f64) -> &'static str {
    if multiplier < 1.0 {
        "Lower complexity (modern construction, easier installation)"
    } else if multiplier > 1.0 {
        "Higher complexity (renovated structure, varied installation requirements)"
    } else {
        "Standard complexity (traditional construction)"
    }
}
