pub mod cli;
pub mod config;
pub mod report;

use idealweight_model::{
    features::EncodedFeatures, prediction::PredictionResult, profile::UserProfile,
    range::healthy_range, recommendation::recommend, Error, Result,
};
use idealweight_predictor::Predictor;
use log::{debug, error, info};

use crate::report::Report;

/// Immutable handle around the loaded model. Built once at startup and
/// shared read-only by every computation.
pub struct Advisor {
    predictor: Box<dyn Predictor>,
}

impl Advisor {
    pub fn new(predictor: Box<dyn Predictor>) -> Self {
        Self { predictor }
    }

    pub fn advise(&self, profile: &UserProfile) -> Result<Report> {
        let features = EncodedFeatures::from(profile);
        debug!("Encoded features: {:?}", features);

        let target_weight_kg = self.predictor.predict(&features).map_err(|e| {
            error!("Prediction failed: {}", e);
            if let Error::ModelUnavailable(_) = e {
                e
            } else {
                Error::ModelUnavailable(e.to_string())
            }
        })?;
        if !target_weight_kg.is_finite() {
            error!("Model returned a non-finite target weight");
            return Err(Error::ModelUnavailable(format!(
                "model returned {} as target weight",
                target_weight_kg
            )));
        }
        debug!("Predicted target weight: {} kg", target_weight_kg);

        let prediction = PredictionResult::new(target_weight_kg);
        let range = healthy_range(profile.height_cm());
        let recommendation = recommend(profile.current_weight_kg(), prediction.target_weight_kg);

        info!(
            "Advice computed: {:?} (delta {:.1} kg)",
            recommendation.category, recommendation.delta_kg
        );
        Ok(Report::new(range, prediction, recommendation))
    }
}
