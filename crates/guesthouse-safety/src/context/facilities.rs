use serde::{Deserialize, Serialize};

use super::SearchRadii;

/// Emergency facilities found around the property.
///
/// When the lookup failed the counts are zero and `error` explains why, which
/// keeps "no data" distinguishable from a confirmed absence of facilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityCounts {
    pub hospitals: u32,
    pub pharmacies: u32,
    #[serde(default)]
    pub radii: SearchRadii,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FacilityCounts {
    pub fn confirmed(hospitals: u32, pharmacies: u32, radii: SearchRadii) -> Self {
        Self {
            hospitals,
            pharmacies,
            radii,
            error: None,
        }
    }

    pub fn unavailable(radii: SearchRadii, reason: impl Into<String>) -> Self {
        Self {
            hospitals: 0,
            pharmacies: 0,
            radii,
            error: Some(reason.into()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.error.is_none()
    }
}

/// Risk adjustment derived from access to hospitals and pharmacies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRisk {
    /// 0..=30 before the engine halves it.
    pub risk_adjustment: u8,
    pub recommendations: Vec<String>,
    pub data_available: bool,
}

pub struct FacilityAccessAnalyzer;

impl FacilityAccessAnalyzer {
    pub fn analyze(counts: &FacilityCounts) -> FacilityRisk {
        let mut risk_adjustment: u8 = 0;
        let mut recommendations = Vec::new();

        if let Some(reason) = &counts.error {
            recommendations.push(format!(
                "Emergency facility data unavailable ({reason}): counts treated as zero"
            ));
        }

        match counts.hospitals {
            0 => {
                risk_adjustment += 20;
                recommendations.push(
                    "No hospitals nearby: Consider providing emergency contact numbers and basic medical training for staff"
                        .to_string(),
                );
            }
            1 => {
                risk_adjustment += 10;
                recommendations.push(
                    "Limited hospital access: Keep emergency contact information readily available"
                        .to_string(),
                );
            }
            _ => recommendations.push("Good hospital access in the area".to_string()),
        }

        match counts.pharmacies {
            0 => {
                risk_adjustment += 10;
                recommendations.push(
                    "No pharmacies nearby: Maintain a well-stocked first aid kit with common medications"
                        .to_string(),
                );
            }
            1 => {
                risk_adjustment += 5;
                recommendations.push(
                    "Limited pharmacy access: Keep basic medical supplies on hand".to_string(),
                );
            }
            _ => recommendations.push("Good pharmacy access in the area".to_string()),
        }

        FacilityRisk {
            risk_adjustment,
            recommendations,
            data_available: counts.is_available(),
        }
    }
}
