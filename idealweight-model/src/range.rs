#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const HEALTHY_BMI_MIN: f64 = 18.5;
pub const HEALTHY_BMI_MAX: f64 = 24.9;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

/// Weights for which the body mass index at the given height stays within
/// the healthy band.
pub fn healthy_range(height_cm: u16) -> WeightRange {
    let height_m = height_cm as f64 / 100.0;
    WeightRange {
        min_kg: HEALTHY_BMI_MIN * height_m.powf(2.0),
        max_kg: HEALTHY_BMI_MAX * height_m.powf(2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_bmi_formula() {
        let test_data = [(140, 36.26, 48.804), (170, 53.465, 71.961), (210, 81.585, 109.809)];

        for (i, (height_cm, min_kg, max_kg)) in test_data.into_iter().enumerate() {
            let range = healthy_range(height_cm);
            assert!((range.min_kg - min_kg).abs() < 1e-9, "Test case #{}", i);
            assert!((range.max_kg - max_kg).abs() < 1e-9, "Test case #{}", i);
        }
    }

    #[test]
    fn lower_bound_below_upper_bound() {
        for height_cm in 140..=210 {
            let range = healthy_range(height_cm);
            assert!(range.min_kg < range.max_kg, "height {}", height_cm);
        }
    }

    #[test]
    fn rounds_to_expected_display_values() {
        let range = healthy_range(170);
        assert_eq!(format!("{:.1}", range.min_kg), "53.5");
        assert_eq!(format!("{:.1}", range.max_kg), "72.0");
    }
}
