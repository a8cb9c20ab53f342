use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{ExerciseID, Name, ReadError, Timeframe, UserID, Volume, Weight, WorkoutSet};

pub trait ProgressService {
    /// Returns the per-session progress timeline of one exercise for one
    /// user. Fails with [`ReadError::NotFound`] if the exercise id is
    /// unknown; an exercise that exists but was never logged yields an empty
    /// session list. The timeframe defaults to [`Timeframe::All`].
    fn get_exercise_progress(
        &self,
        user_id: UserID,
        exercise_id: ExerciseID,
        timeframe: Option<Timeframe>,
    ) -> Result<ExerciseProgress, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseProgress {
    pub exercise_id: ExerciseID,
    pub exercise_name: Name,
    pub sessions: Vec<Session>,
}

/// All sets logged for one exercise on one calendar date, derived from the
/// owning workout's start date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub date: NaiveDate,
    pub max_weight: Weight,
    pub total_volume: Volume,
    pub sets: u32,
}

/// Partitions sets into calendar-day sessions, ascending by date. Each set
/// is paired with the start date of its owning workout.
#[must_use]
pub fn sessions(sets: &[(NaiveDate, WorkoutSet)]) -> Vec<Session> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&WorkoutSet>> = BTreeMap::new();

    for (date, set) in sets {
        by_date.entry(*date).or_default().push(set);
    }

    by_date
        .into_iter()
        .map(|(date, sets)| {
            #[allow(clippy::cast_possible_truncation)]
            let count = sets.len() as u32;
            Session {
                date,
                max_weight: sets.iter().map(|s| s.weight).max().unwrap_or_default(),
                total_volume: sets.iter().map(|s| s.volume()).sum(),
                sets: count,
            }
        })
        .collect()
}
