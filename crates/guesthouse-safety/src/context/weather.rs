use serde::{Deserialize, Serialize};

/// Current conditions at the property as reported by a weather provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Millimeters.
    #[serde(default)]
    pub precipitation: f64,
    /// Millimeters.
    #[serde(default)]
    pub rain: f64,
    /// Kilometers per hour.
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherRiskLevel {
    Low,
    Medium,
    High,
    /// No reading was available.
    Unknown,
}

impl WeatherRiskLevel {
    fn from_score(score: u8) -> Self {
        if score >= 40 {
            Self::High
        } else if score >= 20 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Unknown => "Unknown",
        }
    }
}

/// Risk points contributed by today's weather.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRisk {
    pub risk_level: WeatherRiskLevel,
    pub risk_score: u8,
    pub recommendations: Vec<String>,
}

impl WeatherRisk {
    pub fn unavailable() -> Self {
        Self {
            risk_level: WeatherRiskLevel::Unknown,
            risk_score: 0,
            recommendations: vec!["Weather data unavailable".to_string()],
        }
    }

    pub fn is_available(&self) -> bool {
        self.risk_level != WeatherRiskLevel::Unknown
    }
}

pub struct WeatherRiskAnalyzer;

impl WeatherRiskAnalyzer {
    pub fn analyze(reading: Option<&WeatherReading>) -> WeatherRisk {
        let Some(reading) = reading else {
            return WeatherRisk::unavailable();
        };

        let mut risk_score: u8 = 0;
        let mut recommendations = Vec::new();

        if reading.temperature > 35.0 {
            risk_score += 15;
            recommendations.push(
                "High temperature: Ensure adequate ventilation and provide water for guests"
                    .to_string(),
            );
        } else if reading.temperature < 5.0 {
            risk_score += 10;
            recommendations.push(
                "Low temperature: Check heating systems and warn guests about cold conditions"
                    .to_string(),
            );
        }

        if reading.rain > 0.0 || reading.precipitation > 0.0 {
            risk_score += 20;
            recommendations.push(
                "Rainy conditions: Place warning signs on stairs, check for water leaks, ensure walkways are dry"
                    .to_string(),
            );
        }

        if reading.wind_speed > 30.0 {
            risk_score += 25;
            recommendations.push(
                "Strong winds: Secure outdoor furniture, close terrace/rooftop areas, warn guests"
                    .to_string(),
            );
        } else if reading.wind_speed > 20.0 {
            risk_score += 10;
            recommendations
                .push("Moderate winds: Check outdoor areas and secure loose items".to_string());
        }

        if recommendations.is_empty() {
            recommendations.push("No weather-related risks detected".to_string());
        }

        WeatherRisk {
            risk_level: WeatherRiskLevel::from_score(risk_score),
            risk_score,
            recommendations,
        }
    }
}
