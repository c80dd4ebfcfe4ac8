use std::{fs::File, io::BufReader};

use idealweight_model::{
    profile::{ActivityLevel, Sex, UserProfile},
    Error,
};

pub const USAGE: &str = "usage: advise <profile.json>
       advise <age> <height_cm> <sex> <activity> <current_weight_kg>";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}", USAGE)]
    Usage,
    #[error("cannot open {path}: {source}")]
    ProfileFile {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid profile: {0}")]
    ProfileJson(#[from] serde_json::Error),
    #[error("{field} must be a number, got \"{value}\"")]
    InvalidNumber { field: &'static str, value: String },
    #[error(transparent)]
    Profile(#[from] Error),
}

fn number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, CliError> {
    value.trim().parse().map_err(|_| CliError::InvalidNumber {
        field,
        value: value.to_owned(),
    })
}

/// Builds the profile from either a JSON file path or the five values in
/// form order.
pub fn read_profile(args: &[String]) -> Result<UserProfile, CliError> {
    match args {
        [path] => {
            let file = File::open(path).map_err(|source| CliError::ProfileFile {
                path: path.clone(),
                source,
            })?;
            Ok(serde_json::from_reader(BufReader::new(file))?)
        }
        [age, height_cm, sex, activity, current_weight_kg] => Ok(UserProfile::new(
            number("age", age)?,
            number("height_cm", height_cm)?,
            Sex::parse_label(sex)?,
            ActivityLevel::parse_label(activity)?,
            number("current_weight_kg", current_weight_kg)?,
        )?),
        _ => Err(CliError::Usage),
    }
}
