use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Mul},
};

use chrono::{DateTime, Utc};
use derive_more::{Deref, Display, Into};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{CreateError, DeleteError, Exercise, ExerciseID, ReadError, WorkoutID};

pub trait WorkoutSetService {
    fn add_workout_set(
        &self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
        set_number: u32,
        weight: Weight,
        reps: Reps,
        unit: Unit,
    ) -> Result<WorkoutSet, CreateError>;
    /// Returns a workout's sets joined with their exercises, ascending by
    /// set number. Sets whose exercise id does not resolve are skipped.
    fn get_workout_sets(
        &self,
        workout_id: WorkoutID,
    ) -> Result<Vec<(WorkoutSet, Exercise)>, ReadError>;
    fn delete_workout_set(&self, id: WorkoutSetID) -> Result<bool, DeleteError>;
}

pub trait WorkoutSetRepository {
    fn create_workout_set(
        &self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
        set_number: u32,
        weight: Weight,
        reps: Reps,
        unit: Unit,
    ) -> Result<WorkoutSet, CreateError>;
    fn read_workout_sets(&self, workout_id: WorkoutID) -> Result<Vec<WorkoutSet>, ReadError>;
    fn delete_workout_set(&self, id: WorkoutSetID) -> Result<bool, DeleteError>;
}

/// A single logged set. Immutable after creation, deletable individually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSet {
    pub id: WorkoutSetID,
    pub workout_id: WorkoutID,
    pub exercise_id: ExerciseID,
    pub set_number: u32,
    pub weight: Weight,
    pub reps: Reps,
    pub unit: Unit,
    pub completed_at: DateTime<Utc>,
}

impl WorkoutSet {
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.weight * self.reps
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutSetID(Uuid);

impl WorkoutSetID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutSetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutSetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// A weight with a resolution of 0.01, stored as a decimal to keep volume
/// sums exact.
#[derive(Deref, Debug, Default, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Weight(Decimal);

impl Weight {
    pub fn new(value: Decimal) -> Result<Self, WeightError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(WeightError::Negative);
        }

        if value.round_dp(2) != value {
            return Err(WeightError::InvalidResolution);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<Decimal>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

impl Mul<Reps> for Weight {
    type Output = Volume;

    fn mul(self, rhs: Reps) -> Self::Output {
        Volume(self.0 * Decimal::from(rhs.0))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must not be negative")]
    Negative,
    #[error("Weight must be a multiple of 0.01")]
    InvalidResolution,
    #[error("Weight must be a decimal")]
    ParseError,
}

/// Work performed, in weight units: the sum of weight times reps over sets.
#[derive(Deref, Debug, Default, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Volume(Decimal);

impl Volume {
    pub const ZERO: Volume = Volume(Decimal::ZERO);
}

impl Add for Volume {
    type Output = Volume;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Volume {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self(self.0 + rhs.0);
    }
}

impl Sum for Volume {
    fn sum<I: Iterator<Item = Volume>>(iter: I) -> Self {
        Self(iter.map(|v| v.0).sum())
    }
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Unit {
    Lbs,
    Kg,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Unit::Lbs => "lbs",
                Unit::Kg => "kg",
            }
        )
    }
}

impl TryFrom<&str> for Unit {
    type Error = UnitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "lbs" => Ok(Unit::Lbs),
            "kg" => Ok(Unit::Kg),
            _ => Err(UnitError::Invalid(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum UnitError {
    #[error("Invalid weight unit: {0}")]
    Invalid(String),
}
