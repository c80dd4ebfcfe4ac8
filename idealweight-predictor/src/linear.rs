use std::{fs, path::Path};

use idealweight_model::{features::EncodedFeatures, Error, Result};
use log::debug;
use serde::Deserialize;

use super::Predictor;

/// Linear regression over the encoded features, stored as RON:
///
/// ```ron
/// LinearModel(
///     intercept: -95.0,
///     age: 0.08,
///     height_cm: 0.9,
///     sex: 5.5,
///     activity: -1.2,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinearModel {
    intercept: f64,
    age: f64,
    height_cm: f64,
    sex: f64,
    activity: f64,
}

impl LinearModel {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::ModelUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_ron(&content)
    }

    pub fn from_ron(content: &str) -> Result<Self> {
        let model: LinearModel = ron::from_str(content)
            .map_err(|e| Error::ModelUnavailable(format!("malformed model artifact: {}", e)))?;

        let coefficients = [
            model.intercept,
            model.age,
            model.height_cm,
            model.sex,
            model.activity,
        ];
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(Error::ModelUnavailable(
                "model artifact contains non-finite coefficients".into(),
            ));
        }

        debug!("Model coefficients: {:?}", model);
        Ok(model)
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &EncodedFeatures) -> Result<f64> {
        Ok(self.intercept
            + self.age * features.age as f64
            + self.height_cm * features.height_cm as f64
            + self.sex * features.sex_code as f64
            + self.activity * features.activity_code as f64)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const MODEL: &str = "LinearModel(
        intercept: -100.0,
        age: 0.5,
        height_cm: 1.0,
        sex: 4.0,
        activity: -2.0,
    )";

    fn features(age: u8, height_cm: u16, sex_code: u8, activity_code: u8) -> EncodedFeatures {
        EncodedFeatures {
            age,
            height_cm,
            sex_code,
            activity_code,
        }
    }

    #[test]
    fn predicts_weighted_sum() {
        let model = LinearModel::from_ron(MODEL).unwrap();
        let test_data = [
            (features(30, 170, 0, 0), 85.0),
            (features(30, 170, 1, 2), 85.0),
            (features(20, 160, 1, 1), 72.0),
        ];

        for (i, (features, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(model.predict(&features), Ok(expected), "Test case #{}", i);
        }
    }

    #[test]
    fn accepts_unnamed_struct() {
        let model =
            LinearModel::from_ron("(intercept: 1.0, age: 0.0, height_cm: 0.0, sex: 0.0, activity: 0.0)")
                .unwrap();
        assert_eq!(model.predict(&features(30, 170, 0, 0)), Ok(1.0));
    }

    #[test]
    fn malformed_artifact_is_unavailable() {
        let test_data = [
            "",
            "LinearModel(intercept: -100.0)",
            "not a model at all",
            "LinearModel(intercept: NaN, age: 0.5, height_cm: 1.0, sex: 4.0, activity: -2.0)",
            "LinearModel(intercept: inf, age: 0.5, height_cm: 1.0, sex: 4.0, activity: -2.0)",
        ];

        for (i, content) in test_data.into_iter().enumerate() {
            assert!(
                matches!(LinearModel::from_ron(content), Err(Error::ModelUnavailable(_))),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let result = LinearModel::from_file(&dir.path().join("missing.ron"));
        assert!(matches!(result, Err(Error::ModelUnavailable(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MODEL.as_bytes()).unwrap();

        let predictor = crate::load(file.path()).unwrap();
        assert_eq!(predictor.predict(&features(30, 170, 0, 0)), Ok(85.0));
    }
}
