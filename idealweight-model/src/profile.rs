use std::ops::RangeInclusive;
use std::str::FromStr;

use num_derive::FromPrimitive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::{Error, Result};

pub const AGE_YEARS: RangeInclusive<i32> = 10..=80;
pub const HEIGHT_CM: RangeInclusive<i32> = 140..=210;
pub const CURRENT_WEIGHT_KG: RangeInclusive<f64> = 30.0..=200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, Display, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(SerializeDisplay, DeserializeFromStr))]
#[strum(serialize_all = "title_case")]
pub enum Sex {
    Female = 0,
    Male = 1,
}

impl Sex {
    pub fn label(&self) -> &'static str {
        self.into()
    }

    pub fn parse_label(label: &str) -> Result<Self> {
        parse_variant("sex", label)
    }
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Sex::parse_label(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, Display, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(SerializeDisplay, DeserializeFromStr))]
#[strum(serialize_all = "title_case")]
pub enum ActivityLevel {
    Sedentary = 0,
    Moderate = 1,
    Active = 2,
}

impl ActivityLevel {
    pub fn label(&self) -> &'static str {
        self.into()
    }

    pub fn parse_label(label: &str) -> Result<Self> {
        parse_variant("activity level", label)
    }
}

impl FromStr for ActivityLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ActivityLevel::parse_label(s)
    }
}

/// Case-insensitive lookup of a variant by its label; surrounding whitespace
/// is ignored.
fn parse_variant<T>(kind: &'static str, label: &str) -> Result<T>
where
    T: IntoEnumIterator + Copy + Into<&'static str>,
{
    T::iter()
        .find(|variant| {
            let name: &'static str = (*variant).into();
            name.eq_ignore_ascii_case(label.trim())
        })
        .ok_or_else(|| Error::UnknownCategory {
            kind,
            value: label.to_owned(),
        })
}

/// Raw, unvalidated values as they arrive from a form, a JSON document or
/// the command line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProfileInput {
    pub age: i32,
    pub height_cm: i32,
    pub sex: Sex,
    pub activity: ActivityLevel,
    pub current_weight_kg: f64,
}

impl Default for ProfileInput {
    fn default() -> Self {
        Self {
            age: 30,
            height_cm: 170,
            sex: Sex::Female,
            activity: ActivityLevel::Sedentary,
            current_weight_kg: 70.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "ProfileInput", into = "ProfileInput")
)]
pub struct UserProfile {
    age: u8,
    height_cm: u16,
    sex: Sex,
    activity: ActivityLevel,
    current_weight_kg: f64,
}

impl UserProfile {
    pub fn new(
        age: i32,
        height_cm: i32,
        sex: Sex,
        activity: ActivityLevel,
        current_weight_kg: f64,
    ) -> Result<Self> {
        let age = check_bound("age", age, &AGE_YEARS)?;
        let height_cm = check_bound("height_cm", height_cm, &HEIGHT_CM)?;
        let current_weight_kg =
            check_bound("current_weight_kg", current_weight_kg, &CURRENT_WEIGHT_KG)?;

        Ok(Self {
            age: age as u8,
            height_cm: height_cm as u16,
            sex,
            activity,
            current_weight_kg,
        })
    }

    pub fn age(&self) -> u8 {
        self.age
    }
    pub fn height_cm(&self) -> u16 {
        self.height_cm
    }
    pub fn height_m(&self) -> f64 {
        self.height_cm as f64 / 100.0
    }
    pub fn sex(&self) -> Sex {
        self.sex
    }
    pub fn activity(&self) -> ActivityLevel {
        self.activity
    }
    pub fn current_weight_kg(&self) -> f64 {
        self.current_weight_kg
    }
}

impl TryFrom<ProfileInput> for UserProfile {
    type Error = Error;

    fn try_from(input: ProfileInput) -> Result<Self> {
        UserProfile::new(
            input.age,
            input.height_cm,
            input.sex,
            input.activity,
            input.current_weight_kg,
        )
    }
}

impl From<UserProfile> for ProfileInput {
    fn from(profile: UserProfile) -> Self {
        Self {
            age: profile.age as i32,
            height_cm: profile.height_cm as i32,
            sex: profile.sex,
            activity: profile.activity,
            current_weight_kg: profile.current_weight_kg,
        }
    }
}

// NaN never satisfies `contains`, so it is rejected together with real
// out-of-range values.
fn check_bound<T>(field: &'static str, value: T, bound: &RangeInclusive<T>) -> Result<T>
where
    T: Into<f64> + PartialOrd + Copy,
{
    if bound.contains(&value) {
        Ok(value)
    } else {
        Err(Error::InputOutOfRange {
            field,
            value: value.into(),
            min: (*bound.start()).into(),
            max: (*bound.end()).into(),
        })
    }
}
