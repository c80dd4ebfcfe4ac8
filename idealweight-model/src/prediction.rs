#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PredictionResult {
    pub target_weight_kg: f64,
}

impl PredictionResult {
    pub fn new(target_weight_kg: f64) -> Self {
        Self { target_weight_kg }
    }
}
