#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod error;
mod exercise;
mod name;
mod progress;
mod service;
mod statistics;
mod timeframe;
mod user;
mod workout;
mod workout_set;

pub use error::{CreateError, DeleteError, ReadError, UpdateError};
pub use exercise::{
    Category, CategoryError, Exercise, ExerciseID, ExerciseRepository, ExerciseService,
};
pub use name::{Name, NameError};
pub use progress::{ExerciseProgress, ProgressService, Session, sessions};
pub use service::Service;
pub use statistics::{
    ImprovementStrategy, PersonalBest, StatisticsService, UserStats, fixed_improvement, user_stats,
};
pub use timeframe::{Timeframe, TimeframeError};
pub use user::{User, UserID, UserRepository, UserService};
pub use workout::{Workout, WorkoutID, WorkoutRepository, WorkoutService, WorkoutWithSets};
pub use workout_set::{
    Reps, RepsError, Unit, UnitError, Volume, Weight, WeightError, WorkoutSet, WorkoutSetID,
    WorkoutSetRepository, WorkoutSetService,
};
