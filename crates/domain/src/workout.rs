use chrono::{DateTime, Utc};
use derive_more::Deref;
use uuid::Uuid;

use crate::{Category, CreateError, Exercise, Name, ReadError, UpdateError, UserID, WorkoutSet};

pub trait WorkoutService {
    fn create_workout(
        &self,
        user_id: UserID,
        name: Name,
        category: Category,
        start_time: DateTime<Utc>,
    ) -> Result<Workout, CreateError>;
    fn get_workout(&self, id: WorkoutID) -> Result<Workout, ReadError>;
    /// Returns a user's workouts, descending by start time.
    fn get_workouts(&self, user_id: UserID) -> Result<Vec<Workout>, ReadError>;
    fn get_workout_with_sets(&self, id: WorkoutID) -> Result<WorkoutWithSets, ReadError>;
    fn finish_workout(
        &self,
        id: WorkoutID,
        end_time: DateTime<Utc>,
    ) -> Result<Workout, UpdateError>;
}

pub trait WorkoutRepository {
    fn create_workout(
        &self,
        user_id: UserID,
        name: Name,
        category: Category,
        start_time: DateTime<Utc>,
    ) -> Result<Workout, CreateError>;
    fn read_workout(&self, id: WorkoutID) -> Result<Workout, ReadError>;
    fn read_workouts(&self, user_id: UserID) -> Result<Vec<Workout>, ReadError>;
    /// Applies [`Workout::finish`] atomically: `end_time` and `duration`
    /// become visible together.
    fn finish_workout(
        &self,
        id: WorkoutID,
        end_time: DateTime<Utc>,
    ) -> Result<Workout, UpdateError>;
}

/// A workout is open until finished. `end_time` and `duration` are absent
/// together while open and present together once finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: WorkoutID,
    pub user_id: UserID,
    pub name: Name,
    pub category: Category,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: Option<i64>,
}

impl Workout {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }

    /// Sets `end_time` and the elapsed `duration` in whole minutes, rounded
    /// half away from zero. Finishing an already finished workout overwrites
    /// both fields (last write wins).
    pub fn finish(&mut self, end_time: DateTime<Utc>) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let minutes = ((end_time - self.start_time).num_seconds() as f64 / 60.0).round() as i64;
        self.end_time = Some(end_time);
        self.duration = Some(minutes);
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// A workout merged with its resolved sets, ascending by set number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutWithSets {
    pub workout: Workout,
    pub sets: Vec<(WorkoutSet, Exercise)>,
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn workout(start_time: DateTime<Utc>) -> Workout {
        Workout {
            id: WorkoutID::from(1),
            user_id: UserID::from(2),
            name: Name::new("Morning Push").unwrap(),
            category: Category::Push,
            start_time,
            end_time: None,
            duration: None,
        }
    }

    #[rstest]
    #[case::exact_minutes(Duration::minutes(45), 45)]
    #[case::half_minute_rounds_up(Duration::seconds(90), 2)]
    #[case::below_half_minute_rounds_down(Duration::seconds(89), 1)]
    #[case::seconds_only(Duration::seconds(30), 1)]
    #[case::below_half_minute(Duration::seconds(29), 0)]
    #[case::zero(Duration::zero(), 0)]
    fn test_workout_finish_duration(#[case] elapsed: Duration, #[case] expected: i64) {
        let start_time = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let mut workout = workout(start_time);
        assert!(!workout.is_finished());

        workout.finish(start_time + elapsed);

        assert!(workout.is_finished());
        assert_eq!(workout.end_time, Some(start_time + elapsed));
        assert_eq!(workout.duration, Some(expected));
    }

    #[test]
    fn test_workout_refinish_overwrites() {
        let start_time = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let mut workout = workout(start_time);

        workout.finish(start_time + Duration::minutes(45));
        assert_eq!(workout.duration, Some(45));

        workout.finish(start_time + Duration::minutes(60));
        assert_eq!(workout.end_time, Some(start_time + Duration::minutes(60)));
        assert_eq!(workout.duration, Some(60));
    }
}
