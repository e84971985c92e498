use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::property::{PropertyAttributes, PropertyValidationError};
use super::report::AssessmentReport;
use super::AssessmentEngine;
use crate::context::{
    FacilityAccessAnalyzer, FacilityCounts, FacilityProvider, SearchRadii, WeatherProvider,
    WeatherReading, WeatherRiskAnalyzer,
};

/// Report plus the raw provider data it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentEnvelope {
    #[serde(flatten)]
    pub report: AssessmentReport,
    pub external_data: ExternalData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalData {
    pub weather: Option<WeatherReading>,
    pub emergency_facilities: FacilityCounts,
}

/// Runs a full assessment: validation, baseline, provider lookups, blending.
pub struct AssessmentService<W, F> {
    engine: Arc<AssessmentEngine>,
    weather: Arc<W>,
    facilities: Arc<F>,
}

impl<W, F> AssessmentService<W, F>
where
    W: WeatherProvider + 'static,
    F: FacilityProvider + 'static,
{
    pub fn new(engine: Arc<AssessmentEngine>, weather: Arc<W>, facilities: Arc<F>) -> Self {
        Self {
            engine,
            weather,
            facilities,
        }
    }

    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    pub fn assess(
        &self,
        property: &PropertyAttributes,
        assessed_on: NaiveDate,
    ) -> Result<AssessmentEnvelope, AssessmentServiceError> {
        property.validate()?;

        let baseline = self.engine.baseline(property, assessed_on);
        let location = property.coordinates();

        let reading = match self.weather.current(location) {
            Ok(reading) => reading,
            Err(error) => {
                warn!(property_id = property.id, %error, "weather lookup failed");
                None
            }
        };
        let weather_risk = WeatherRiskAnalyzer::analyze(reading.as_ref());

        let radii = SearchRadii::from_thresholds(&self.engine.config().thresholds);
        let counts = match self.facilities.nearby(location, radii) {
            Ok(counts) => counts,
            Err(error) => {
                warn!(property_id = property.id, %error, "facility lookup failed");
                FacilityCounts::unavailable(radii, "Unable to fetch facility data")
            }
        };
        let facility_risk = FacilityAccessAnalyzer::analyze(&counts);

        let report = self.engine.finalize(&baseline, &weather_risk, &facility_risk);

        info!(
            property_id = property.id,
            final_score = report.scores.final_score,
            final_risk = ?report.scores.final_risk_level,
            "safety assessment completed"
        );

        Ok(AssessmentEnvelope {
            report,
            external_data: ExternalData {
                weather: reading,
                emergency_facilities: counts,
            },
        })
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Validation(#[from] PropertyValidationError),
}
