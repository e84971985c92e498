use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ConfigError;
use crate::assessment::BuildingType;

/// Cost and threshold table consumed by the assessment engine.
///
/// Monetary amounts are whole currency units. The table is built once at
/// start-up (defaults or a JSON file) and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostConfig {
    pub currency: String,
    pub equipment: ItemRates,
    pub installation: ItemRates,
    pub compliance: ComplianceCosts,
    pub maintenance: ItemRates,
    pub optional_improvements: OptionalImprovementCosts,
    pub building_multipliers: BuildingMultipliers,
    pub thresholds: SafetyThresholds,
}

impl CostConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::CostTableIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: CostConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::CostTableFormat {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let multipliers = [
            ("modern", self.building_multipliers.modern),
            ("traditional", self.building_multipliers.traditional),
            ("renovated", self.building_multipliers.renovated),
        ];
        for (name, value) in multipliers {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidCostTable(format!(
                    "building multiplier for {name} must be a non-negative number"
                )));
            }
        }

        let radii = [
            ("hospital", self.thresholds.hospital_radius_km),
            ("pharmacy", self.thresholds.pharmacy_radius_km),
        ];
        for (name, value) in radii {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidCostTable(format!(
                    "{name} search radius must be a positive number of kilometers"
                )));
            }
        }

        if self.currency.trim().is_empty() {
            return Err(ConfigError::InvalidCostTable(
                "currency label must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            currency: "TND".to_string(),
            equipment: ItemRates {
                fire_extinguisher: 100,
                smoke_detector: 50,
                emergency_exit_sign: 65,
                first_aid_kit: 130,
                stair_handrail: 150,
                slip_resistant_coating: 250,
            },
            installation: ItemRates {
                fire_extinguisher: 20,
                smoke_detector: 15,
                emergency_exit_sign: 35,
                first_aid_kit: 0,
                stair_handrail: 80,
                slip_resistant_coating: 150,
            },
            compliance: ComplianceCosts {
                initial_inspection: 200,
                certification: 150,
                annual_inspection: 100,
            },
            maintenance: ItemRates {
                fire_extinguisher: 15,
                smoke_detector: 8,
                emergency_exit_sign: 10,
                first_aid_kit: 50,
                stair_handrail: 20,
                slip_resistant_coating: 0,
            },
            optional_improvements: OptionalImprovementCosts {
                fire_blanket: 80,
                emergency_lighting: 120,
                carbon_monoxide_detector: 90,
                security_camera: 250,
                fire_alarm_system: 800,
                emergency_evacuation_plan: 150,
            },
            building_multipliers: BuildingMultipliers::default(),
            thresholds: SafetyThresholds::default(),
        }
    }
}

/// Per-item rates shared by the equipment, installation and maintenance tables.
///
/// `stair_handrail` is priced per meter for equipment and installation and per
/// staircase for maintenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRates {
    pub fire_extinguisher: u32,
    pub smoke_detector: u32,
    pub emergency_exit_sign: u32,
    pub first_aid_kit: u32,
    pub stair_handrail: u32,
    pub slip_resistant_coating: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceCosts {
    pub initial_inspection: u32,
    pub certification: u32,
    pub annual_inspection: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalImprovementCosts {
    pub fire_blanket: u32,
    /// Per floor.
    pub emergency_lighting: u32,
    pub carbon_monoxide_detector: u32,
    /// Per camera.
    pub security_camera: u32,
    pub fire_alarm_system: u32,
    pub emergency_evacuation_plan: u32,
}

/// Installation labor multipliers keyed by construction method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingMultipliers {
    pub modern: f64,
    pub traditional: f64,
    pub renovated: f64,
}

impl BuildingMultipliers {
    pub fn for_type(&self, building_type: BuildingType) -> f64 {
        match building_type {
            BuildingType::Modern => self.modern,
            BuildingType::Traditional => self.traditional,
            BuildingType::Renovated => self.renovated,
        }
    }
}

impl Default for BuildingMultipliers {
    fn default() -> Self {
        Self {
            modern: 0.9,
            traditional: 1.0,
            renovated: 1.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetyThresholds {
    pub min_fire_extinguishers_per_floor: u32,
    pub min_smoke_detectors_per_floor: u32,
    pub min_emergency_exits: u32,
    /// Buildings constructed before this year are flagged.
    pub old_building_year: i32,
    pub hospital_radius_km: f64,
    pub pharmacy_radius_km: f64,
}

impl Default for SafetyThresholds {
    fn default() -> Self {
        Self {
            min_fire_extinguishers_per_floor: 1,
            min_smoke_detectors_per_floor: 2,
            min_emergency_exits: 2,
            old_building_year: 1990,
            hospital_radius_km: 5.0,
            pharmacy_radius_km: 2.0,
        }
    }
}
