use std::io::Write;

use idealweight_advisor::Advisor;
use idealweight_model::{
    features::EncodedFeatures,
    profile::{ActivityLevel, Sex, UserProfile},
    recommendation::Category,
};
use idealweight_predictor::MockPredictor;
use mockall::predicate::eq;

fn advisor_returning(features: EncodedFeatures, target_weight_kg: f64) -> Advisor {
    let mut predictor = MockPredictor::new();
    predictor
        .expect_predict()
        .with(eq(features))
        .times(1)
        .returning(move |_| Ok(target_weight_kg));
    Advisor::new(Box::new(predictor))
}

#[test]
fn overweight_profile_gets_weight_loss_advice() {
    let profile = UserProfile::new(30, 170, Sex::Female, ActivityLevel::Sedentary, 70.0).unwrap();
    let advisor = advisor_returning(
        EncodedFeatures {
            age: 30,
            height_cm: 170,
            sex_code: 0,
            activity_code: 0,
        },
        66.0,
    );

    let report = advisor.advise(&profile).unwrap();

    assert_eq!(format!("{:.1}", report.range.min_kg), "53.5");
    assert_eq!(format!("{:.1}", report.range.max_kg), "72.0");
    assert_eq!(report.prediction.target_weight_kg, 66.0);
    assert_eq!(report.recommendation.delta_kg, 4.0);
    assert_eq!(report.recommendation.category, Category::WeightLoss);
    assert_eq!(report.recommendation.color_tag, "#E74C3C");
    assert_eq!(report.indicator_width_pct, 40.0);
}

#[test]
fn profile_on_target_is_stable() {
    let profile = UserProfile::new(45, 165, Sex::Male, ActivityLevel::Active, 60.0).unwrap();
    let advisor = advisor_returning(
        EncodedFeatures {
            age: 45,
            height_cm: 165,
            sex_code: 1,
            activity_code: 2,
        },
        60.0,
    );

    let report = advisor.advise(&profile).unwrap();

    assert_eq!(report.recommendation.delta_kg, 0.0);
    assert_eq!(report.recommendation.category, Category::Stable);
    assert_eq!(report.indicator_width_pct, 0.0);
}

#[test]
fn underweight_profile_gets_weight_gain_advice() {
    let profile = UserProfile::new(22, 185, Sex::Male, ActivityLevel::Moderate, 58.0).unwrap();
    let advisor = advisor_returning(
        EncodedFeatures {
            age: 22,
            height_cm: 185,
            sex_code: 1,
            activity_code: 1,
        },
        75.0,
    );

    let report = advisor.advise(&profile).unwrap();

    assert_eq!(report.recommendation.category, Category::WeightGain);
    assert_eq!(report.recommendation.delta_kg, -17.0);
    assert_eq!(report.indicator_width_pct, 100.0);
}

#[test]
fn model_loaded_from_artifact_drives_advice() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        b"LinearModel(intercept: -100.0, age: 0.0, height_cm: 1.0, sex: 0.0, activity: 0.0)",
    )
    .unwrap();

    let advisor = Advisor::new(idealweight_predictor::load(file.path()).unwrap());
    let profile = UserProfile::new(30, 170, Sex::Female, ActivityLevel::Sedentary, 70.0).unwrap();

    let report = advisor.advise(&profile).unwrap();

    assert_eq!(report.prediction.target_weight_kg, 70.0);
    assert_eq!(report.recommendation.category, Category::Stable);
}

#[test]
fn report_serializes_to_json() {
    let profile = UserProfile::new(30, 170, Sex::Female, ActivityLevel::Sedentary, 70.0).unwrap();
    let advisor = advisor_returning(
        EncodedFeatures {
            age: 30,
            height_cm: 170,
            sex_code: 0,
            activity_code: 0,
        },
        66.0,
    );

    let json = serde_json::to_value(advisor.advise(&profile).unwrap()).unwrap();

    assert_eq!(json["prediction"]["target_weight_kg"], 66.0);
    assert_eq!(json["recommendation"]["category"], "WeightLoss");
    assert_eq!(json["recommendation"]["diet_plan"], "Reduce sugars, increase protein and fiber");
    assert_eq!(json["indicator_width_pct"], 40.0);
}

#[test]
fn profile_json_is_validated() {
    let profile: UserProfile = serde_json::from_str(
        r#"{"age": 30, "height_cm": 170, "sex": "male", "activity": "moderate", "current_weight_kg": 80.5}"#,
    )
    .unwrap();
    assert_eq!(profile.sex(), Sex::Male);
    assert_eq!(profile.activity(), ActivityLevel::Moderate);

    let too_short = serde_json::from_str::<UserProfile>(
        r#"{"age": 30, "height_cm": 120, "sex": "male", "activity": "moderate", "current_weight_kg": 80.5}"#,
    );
    assert!(too_short.is_err());

    let unknown_sex = serde_json::from_str::<UserProfile>(
        r#"{"age": 30, "height_cm": 170, "sex": "robot", "activity": "moderate", "current_weight_kg": 80.5}"#,
    );
    assert!(unknown_sex.is_err());
}
