use std::fmt;

use idealweight_model::{
    prediction::PredictionResult,
    range::{WeightRange, HEALTHY_BMI_MAX, HEALTHY_BMI_MIN},
    recommendation::Recommendation,
};
use serde::Serialize;

const TEXT_BAR_WIDTH: usize = 20;

/// Width in percent of the delta bar: ten percent per kilogram, capped at
/// the full bar.
pub fn indicator_width(delta_kg: f64) -> f64 {
    (delta_kg.abs() * 10.0).min(100.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub range: WeightRange,
    pub prediction: PredictionResult,
    pub recommendation: Recommendation,
    pub indicator_width_pct: f64,
}

impl Report {
    pub fn new(
        range: WeightRange,
        prediction: PredictionResult,
        recommendation: Recommendation,
    ) -> Self {
        let indicator_width_pct = indicator_width(recommendation.delta_kg);
        Self {
            range,
            prediction,
            recommendation,
            indicator_width_pct,
        }
    }

    /// Result card for the web form.
    pub fn to_html(&self) -> String {
        let color = self.recommendation.color_tag;
        format!(
            "<div style='border:2px solid {color}; border-radius:15px; padding:25px; \
background-color:#f0f8ff; box-shadow:3px 3px 15px rgba(0,0,0,0.1); margin-bottom:20px; \
color:#000000; font-weight:500;'>
    <h2 style='color:{color}; text-align:center;'>Result</h2>
    <p><b>Healthy weight (BMI {bmi_min}-{bmi_max}):</b> {min:.1} kg – {max:.1} kg</p>
    <p><b>Personalized target weight:</b> {target:.1} kg</p>
    <p><b>Recommendation:</b> <span style='color:{color}; font-weight:bold;'>{label}</span></p>
    <p><b>Diet plan:</b> {diet}</p>
    <p><b>Exercise plan:</b> {exercise}</p>
    <div style='background-color:#ddd; border-radius:10px; margin-top:15px;'>
        <div style='width:{width:.1}%; background-color:{color}; padding:8px; color:white; \
text-align:center; border-radius:10px; font-weight:bold;'>
            Weight delta: {delta:.1} kg
        </div>
    </div>
</div>",
            bmi_min = HEALTHY_BMI_MIN,
            bmi_max = HEALTHY_BMI_MAX,
            min = self.range.min_kg,
            max = self.range.max_kg,
            target = self.prediction.target_weight_kg,
            label = self.recommendation.category.label(),
            diet = self.recommendation.diet_plan,
            exercise = self.recommendation.exercise_plan,
            width = self.indicator_width_pct,
            delta = self.recommendation.delta_kg,
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = ((self.indicator_width_pct / 100.0) * TEXT_BAR_WIDTH as f64).round() as usize;

        writeln!(
            f,
            "Healthy weight (BMI {}-{}): {:.1} kg - {:.1} kg",
            HEALTHY_BMI_MIN, HEALTHY_BMI_MAX, self.range.min_kg, self.range.max_kg
        )?;
        writeln!(
            f,
            "Personalized target weight: {:.1} kg",
            self.prediction.target_weight_kg
        )?;
        writeln!(
            f,
            "Recommendation: {}",
            self.recommendation.category.label()
        )?;
        writeln!(f, "Diet plan: {}", self.recommendation.diet_plan)?;
        writeln!(f, "Exercise plan: {}", self.recommendation.exercise_plan)?;
        write!(
            f,
            "Weight delta: {:.1} kg [{}{}]",
            self.recommendation.delta_kg,
            "#".repeat(filled),
            ".".repeat(TEXT_BAR_WIDTH - filled)
        )
    }
}
