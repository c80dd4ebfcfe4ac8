mod linear;

use std::path::Path;

use idealweight_model::{features::EncodedFeatures, Result};
use log::info;

pub use linear::LinearModel;

/// A pre-trained regression returning the personalized target weight in
/// kilograms for the given features.
#[mockall::automock]
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &EncodedFeatures) -> Result<f64>;
}

/// Loads the model artifact at `path`. Called once at startup; the returned
/// handle is never reloaded.
pub fn load(path: &Path) -> Result<Box<dyn Predictor>> {
    let model = LinearModel::from_file(path)?;
    info!("Loaded prediction model from {}", path.display());
    Ok(Box::new(model))
}
