#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::profile::{ActivityLevel, Sex, UserProfile};
use crate::{Error, Result};

/// Model input vector, in the column order the regression was trained on:
/// age, height, sex, activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncodedFeatures {
    pub age: u8,
    pub height_cm: u16,
    pub sex_code: u8,
    pub activity_code: u8,
}

impl From<&UserProfile> for EncodedFeatures {
    fn from(profile: &UserProfile) -> Self {
        let (sex_code, activity_code) = encode(profile.sex(), profile.activity());
        Self {
            age: profile.age(),
            height_cm: profile.height_cm(),
            sex_code,
            activity_code,
        }
    }
}

pub fn encode(sex: Sex, activity: ActivityLevel) -> (u8, u8) {
    (sex as u8, activity as u8)
}

pub fn encode_labels(sex: &str, activity: &str) -> Result<(u8, u8)> {
    Ok(encode(
        Sex::parse_label(sex)?,
        ActivityLevel::parse_label(activity)?,
    ))
}

pub fn decode(sex_code: u8, activity_code: u8) -> Result<(Sex, ActivityLevel)> {
    let sex: Sex = num::FromPrimitive::from_u8(sex_code).ok_or(Error::UnknownCategory {
        kind: "sex code",
        value: sex_code.to_string(),
    })?;
    let activity: ActivityLevel =
        num::FromPrimitive::from_u8(activity_code).ok_or(Error::UnknownCategory {
            kind: "activity code",
            value: activity_code.to_string(),
        })?;
    Ok((sex, activity))
}
