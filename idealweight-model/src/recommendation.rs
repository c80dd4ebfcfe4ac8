#[cfg(feature = "serde")]
use serde::Serialize;

/// Half-width of the band around the target weight that counts as stable.
/// Deltas exactly on the band edge are stable.
pub const STABLE_BAND_KG: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Category {
    WeightLoss,
    WeightGain,
    Stable,
}

impl Category {
    pub fn from_delta(delta_kg: f64) -> Self {
        match delta_kg {
            d if d > STABLE_BAND_KG => Category::WeightLoss,
            d if d < -STABLE_BAND_KG => Category::WeightGain,
            _ => Category::Stable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::WeightLoss => "Weight loss",
            Category::WeightGain => "Weight gain",
            Category::Stable => "Stable weight",
        }
    }

    pub fn color_tag(&self) -> &'static str {
        match self {
            Category::WeightLoss => "#E74C3C",
            Category::WeightGain => "#3498DB",
            Category::Stable => "#2ECC71",
        }
    }

    pub fn exercise_plan(&self) -> &'static str {
        match self {
            Category::WeightLoss => "Cardio 4–5x/week + strength training",
            Category::WeightGain => "Strength training 4–5x/week",
            Category::Stable => "Regular moderate activity",
        }
    }

    pub fn diet_plan(&self) -> &'static str {
        match self {
            Category::WeightLoss => "Reduce sugars, increase protein and fiber",
            Category::WeightGain => "Increase healthy calories and protein",
            Category::Stable => "Balanced diet",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Recommendation {
    pub category: Category,
    pub color_tag: &'static str,
    pub exercise_plan: &'static str,
    pub diet_plan: &'static str,
    pub delta_kg: f64,
}

pub fn recommend(current_weight_kg: f64, target_weight_kg: f64) -> Recommendation {
    let delta_kg = current_weight_kg - target_weight_kg;
    let category = Category::from_delta(delta_kg);
    Recommendation {
        category,
        color_tag: category.color_tag(),
        exercise_plan: category.exercise_plan(),
        diet_plan: category.diet_plan(),
        delta_kg,
    }
}
