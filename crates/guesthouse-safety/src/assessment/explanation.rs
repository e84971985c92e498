use super::{BaselineResult, RiskLevel};
use crate::context::{FacilityRisk, WeatherRisk};

/// Facility adjustments above this read as limited access.
const LIMITED_ACCESS_ADJUSTMENT: u8 = 10;

pub(crate) fn narrate(
    baseline: &BaselineResult,
    weather: &WeatherRisk,
    facilities: &FacilityRisk,
    final_score: f64,
    currency: &str,
) -> String {
    let costs = &baseline.cost_breakdown;
    let mut sentences = vec![
        format!(
            "Your guesthouse received a final safety score of {final_score:.1}/100 ({}).",
            RiskLevel::from_score(final_score).label()
        ),
        format!(
            "The baseline safety score is {}/100 based on your building's safety equipment and structure.",
            baseline.baseline_score
        ),
    ];

    if baseline.meets_baseline() {
        sentences.push("Your baseline safety standards are excellent.".to_string());
    } else {
        sentences.push(format!(
            "We identified {} area(s) requiring improvement.",
            baseline.deductions.len()
        ));
    }

    if costs.total_one_time > 0 {
        sentences.push(format!(
            "The total one-time investment for mandatory improvements is {total} {currency}, \
             which includes equipment ({equipment} {currency}), installation labor \
             ({labor} {currency}), and compliance inspections ({compliance} {currency}).",
            total = costs.total_one_time,
            equipment = costs.equipment,
            labor = costs.installation_labor,
            compliance = costs.compliance_inspection,
        ));
    } else {
        sentences.push("No mandatory improvements are needed.".to_string());
    }

    if costs.annual_maintenance > 0 {
        sentences.push(format!(
            "Ongoing annual maintenance costs are estimated at {} {currency} for equipment \
             servicing, inspections, and supply restocking.",
            costs.annual_maintenance
        ));
    }

    if weather.risk_score > 0 {
        sentences.push(format!(
            "Today's weather conditions add {} risk points.",
            weather.risk_score
        ));
    } else if !weather.is_available() {
        sentences
            .push("Weather data was unavailable, so no weather risk was applied.".to_string());
    } else {
        sentences.push("Weather conditions today pose minimal risk.".to_string());
    }

    if !facilities.data_available {
        sentences.push(
            "Emergency facility data was unavailable, so nearby facilities were counted as zero."
                .to_string(),
        );
    }
    if facilities.risk_adjustment > LIMITED_ACCESS_ADJUSTMENT {
        sentences.push(format!(
            "Limited access to emergency facilities adds {} risk points to your daily score.",
            halved_points(facilities.risk_adjustment)
        ));
    } else {
        sentences.push("Good access to emergency facilities in your area.".to_string());
    }

    if !baseline.optional_improvements.is_empty() {
        sentences.push(format!(
            "Additionally, {} optional safety enhancements are recommended to further improve guest safety and comfort.",
            baseline.optional_improvements.len()
        ));
    }

    sentences.join(" ")
}

/// Renders half of the facility adjustment without a trailing ".0".
fn halved_points(adjustment: u8) -> String {
    if adjustment % 2 == 0 {
        (adjustment / 2).to_string()
    } else {
        format!("{:.1}", f64::from(adjustment) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halved_points_keep_the_half() {
        assert_eq!(halved_points(30), "15");
        assert_eq!(halved_points(15), "7.5");
        assert_eq!(halved_points(0), "0");
    }
}
