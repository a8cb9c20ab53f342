use std::fmt;

use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, Name, ReadError, UserID};

pub trait ExerciseService {
    fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    fn get_exercises_by_category(&self, category: Category) -> Result<Vec<Exercise>, ReadError>;
    fn get_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError>;
    fn create_exercise(
        &self,
        name: Name,
        category: Category,
        muscle_groups: Vec<String>,
        is_custom: bool,
        user_id: Option<UserID>,
    ) -> Result<Exercise, CreateError>;
}

pub trait ExerciseRepository {
    fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    fn read_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError>;
    fn create_exercise(
        &self,
        name: Name,
        category: Category,
        muscle_groups: Vec<String>,
        is_custom: bool,
        user_id: Option<UserID>,
    ) -> Result<Exercise, CreateError>;
}

/// An exercise, either seeded from the built-in catalog (`is_custom == false`,
/// no owner) or created by a user (`is_custom == true`, owned via `user_id`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub category: Category,
    pub muscle_groups: Vec<String>,
    pub is_custom: bool,
    pub user_id: Option<UserID>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    UpperBody,
    LowerBody,
    Back,
    Push,
    Pull,
    Legs,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::UpperBody => "upper-body",
                Category::LowerBody => "lower-body",
                Category::Back => "back",
                Category::Push => "push",
                Category::Pull => "pull",
                Category::Legs => "legs",
            }
        )
    }
}

impl TryFrom<&str> for Category {
    type Error = CategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "upper-body" => Ok(Category::UpperBody),
            "lower-body" => Ok(Category::LowerBody),
            "back" => Ok(Category::Back),
            "push" => Ok(Category::Push),
            "pull" => Ok(Category::Pull),
            "legs" => Ok(Category::Legs),
            _ => Err(CategoryError::Invalid(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CategoryError {
    #[error("Invalid exercise category: {0}")]
    Invalid(String),
}
