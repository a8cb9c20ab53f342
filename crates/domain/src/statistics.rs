use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{Exercise, ExerciseID, Name, ReadError, Reps, Timeframe, UserID, Volume, Weight, WorkoutSet};

pub trait StatisticsService {
    /// Computes cross-exercise summary statistics for a user. The timeframe
    /// defaults to [`Timeframe::Month`]. A user with no logged sets yields
    /// all-zero, empty-collection results.
    fn get_user_stats(
        &self,
        user_id: UserID,
        timeframe: Option<Timeframe>,
    ) -> Result<UserStats, ReadError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub total_volume: Volume,
    pub average_improvement: f64,
    pub personal_bests: Vec<PersonalBest>,
    pub most_frequent_exercise: String,
    pub average_reps_per_set: f64,
}

/// The maximum-weight set a user has logged for one exercise. Ties are
/// broken by the earliest `completed_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalBest {
    pub exercise_name: Name,
    pub weight: Weight,
    pub reps: Reps,
    pub date: NaiveDate,
}

/// Computes the typical performance gain over the timeframe, as a percentage.
pub type ImprovementStrategy = fn(&[(WorkoutSet, Exercise)]) -> f64;

/// Placeholder improvement figure carried over from the reference behavior.
/// Not a real computation; swap in an actual formula via
/// [`Service::with_improvement_strategy`](crate::Service::with_improvement_strategy)
/// once one is decided.
#[must_use]
pub fn fixed_improvement(_sets: &[(WorkoutSet, Exercise)]) -> f64 {
    15.0
}

/// Computes summary statistics over a user's resolved sets.
///
/// `personal_bests` holds one entry per distinct exercise, ordered by
/// exercise id. `most_frequent_exercise` ties are broken by the lowest
/// exercise id; it is empty if no sets were logged.
#[must_use]
pub fn user_stats(sets: &[(WorkoutSet, Exercise)], improvement: ImprovementStrategy) -> UserStats {
    let total_volume = sets.iter().map(|(set, _)| set.volume()).sum();

    let average_reps_per_set = if sets.is_empty() {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let average = sets
            .iter()
            .map(|(set, _)| f64::from(u32::from(set.reps)))
            .sum::<f64>()
            / sets.len() as f64;
        average
    };

    let mut bests: BTreeMap<ExerciseID, (&WorkoutSet, &Exercise)> = BTreeMap::new();
    for (set, exercise) in sets {
        let replace = bests.get(&set.exercise_id).is_none_or(|(best, _)| {
            set.weight > best.weight
                || (set.weight == best.weight && set.completed_at < best.completed_at)
        });
        if replace {
            bests.insert(set.exercise_id, (set, exercise));
        }
    }
    let personal_bests = bests
        .values()
        .map(|(set, exercise)| PersonalBest {
            exercise_name: exercise.name.clone(),
            weight: set.weight,
            reps: set.reps,
            date: set.completed_at.date_naive(),
        })
        .collect();

    let mut frequency: BTreeMap<ExerciseID, (u32, &Name)> = BTreeMap::new();
    for (set, exercise) in sets {
        frequency
            .entry(set.exercise_id)
            .or_insert((0, &exercise.name))
            .0 += 1;
    }
    let most_frequent_exercise = frequency
        .values()
        .fold((0, None), |most_frequent, (count, name)| {
            if *count > most_frequent.0 {
                (*count, Some(*name))
            } else {
                most_frequent
            }
        })
        .1
        .map(ToString::to_string)
        .unwrap_or_default();

    UserStats {
        total_volume,
        average_improvement: improvement(sets),
        personal_bests,
        most_frequent_exercise,
        average_reps_per_set,
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use crate::{Category, Unit, WorkoutID, WorkoutSetID};

    use super::*;

    fn exercise(id: u128, name: &str) -> Exercise {
        Exercise {
            id: ExerciseID::from(id),
            name: Name::new(name).unwrap(),
            category: Category::UpperBody,
            muscle_groups: vec!["chest".to_string()],
            is_custom: false,
            user_id: None,
        }
    }

    fn set(
        exercise: &Exercise,
        set_number: u32,
        weight: &str,
        reps: u32,
        completed_at: DateTime<Utc>,
    ) -> (WorkoutSet, Exercise) {
        (
            WorkoutSet {
                id: WorkoutSetID::from(u128::from(set_number)),
                workout_id: WorkoutID::from(1),
                exercise_id: exercise.id,
                set_number,
                weight: Weight::try_from(weight).unwrap(),
                reps: Reps::new(reps).unwrap(),
                unit: Unit::Lbs,
                completed_at,
            },
            exercise.clone(),
        )
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_user_stats_empty() {
        let stats = user_stats(&[], fixed_improvement);

        assert_eq!(stats.total_volume, Volume::ZERO);
        assert_eq!(stats.personal_bests, vec![]);
        assert_eq!(stats.most_frequent_exercise, "");
        assert_approx_eq!(stats.average_reps_per_set, 0.0);
        assert_approx_eq!(stats.average_improvement, 15.0);
    }

    #[test]
    fn test_user_stats_totals() {
        let bench = exercise(1, "Bench Press");
        let sets = vec![
            set(&bench, 1, "185", 8, now()),
            set(&bench, 2, "185", 6, now() + Duration::minutes(5)),
        ];

        let stats = user_stats(&sets, fixed_improvement);

        assert_eq!(
            stats.total_volume,
            Volume::ZERO
                + Weight::try_from("185").unwrap() * Reps::new(8).unwrap()
                + Weight::try_from("185").unwrap() * Reps::new(6).unwrap()
        );
        assert_approx_eq!(stats.average_reps_per_set, 7.0);
        assert_eq!(stats.most_frequent_exercise, "Bench Press");
        assert_eq!(
            stats.personal_bests,
            vec![PersonalBest {
                exercise_name: Name::new("Bench Press").unwrap(),
                weight: Weight::try_from("185").unwrap(),
                reps: Reps::new(8).unwrap(),
                date: now().date_naive(),
            }]
        );
    }

    #[test]
    fn test_personal_best_tie_broken_by_earliest_completion() {
        let bench = exercise(1, "Bench Press");
        let sets = vec![
            set(&bench, 1, "100", 5, now()),
            set(&bench, 2, "120", 3, now() + Duration::minutes(5)),
            set(&bench, 3, "120", 8, now() + Duration::minutes(10)),
        ];

        let stats = user_stats(&sets, fixed_improvement);

        assert_eq!(
            stats.personal_bests,
            vec![PersonalBest {
                exercise_name: Name::new("Bench Press").unwrap(),
                weight: Weight::try_from("120").unwrap(),
                reps: Reps::new(3).unwrap(),
                date: now().date_naive(),
            }]
        );
    }

    #[test]
    fn test_personal_best_tie_break_is_input_order_independent() {
        let bench = exercise(1, "Bench Press");
        let sets = vec![
            set(&bench, 2, "120", 8, now() + Duration::minutes(10)),
            set(&bench, 1, "120", 3, now() + Duration::minutes(5)),
        ];

        let stats = user_stats(&sets, fixed_improvement);

        assert_eq!(stats.personal_bests[0].reps, Reps::new(3).unwrap());
    }

    #[test]
    fn test_one_personal_best_per_exercise() {
        let bench = exercise(1, "Bench Press");
        let squat = exercise(2, "Squats");
        let sets = vec![
            set(&bench, 1, "185", 8, now()),
            set(&squat, 1, "225", 5, now()),
            set(&bench, 2, "190", 5, now() + Duration::minutes(5)),
        ];

        let stats = user_stats(&sets, fixed_improvement);

        assert_eq!(stats.personal_bests.len(), 2);
        assert_eq!(
            stats.personal_bests[0].weight,
            Weight::try_from("190").unwrap()
        );
        assert_eq!(
            stats.personal_bests[1].weight,
            Weight::try_from("225").unwrap()
        );
    }

    #[test]
    fn test_most_frequent_exercise_tie_broken_by_lowest_id() {
        let bench = exercise(1, "Bench Press");
        let squat = exercise(2, "Squats");
        let sets = vec![
            set(&squat, 1, "225", 5, now()),
            set(&squat, 2, "225", 5, now()),
            set(&bench, 1, "185", 8, now()),
            set(&bench, 2, "185", 6, now()),
        ];

        let stats = user_stats(&sets, fixed_improvement);

        assert_eq!(stats.most_frequent_exercise, "Bench Press");
    }

    #[test]
    fn test_custom_improvement_strategy() {
        fn no_improvement(_sets: &[(WorkoutSet, Exercise)]) -> f64 {
            0.0
        }

        let stats = user_stats(&[], no_improvement);
        assert_approx_eq!(stats.average_improvement, 0.0);
    }
}
