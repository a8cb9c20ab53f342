//! A volatile, non-transactional repository backed by in-memory maps.
//!
//! All collections live behind a single mutex, so every operation runs in
//! one critical section and multi-field mutations (workout finish) are
//! never observable half-written. Foreign keys are not validated here;
//! dangling references are handled by the resolving reads in the domain
//! service.

use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use liftlog_domain::{
    Category, CreateError, DeleteError, Exercise, ExerciseID, ExerciseRepository, Name, ReadError,
    Reps, Unit, UpdateError, User, UserID, UserRepository, Weight, Workout, WorkoutID,
    WorkoutRepository, WorkoutSet, WorkoutSetID, WorkoutSetRepository, catalog,
};

pub struct MemoryRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    users: BTreeMap<UserID, User>,
    exercises: BTreeMap<ExerciseID, Exercise>,
    workouts: BTreeMap<WorkoutID, Workout>,
    workout_sets: BTreeMap<WorkoutSetID, WorkoutSet>,
}

impl MemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        let mut state = State::default();
        for exercise in catalog::EXERCISES
            .iter()
            .filter_map(|e| {
                Name::new(e.name).ok().map(|name| Exercise {
                    id: ExerciseID::from(Uuid::new_v4()),
                    name,
                    category: e.category,
                    muscle_groups: e.muscle_groups.iter().map(ToString::to_string).collect(),
                    is_custom: false,
                    user_id: None,
                })
            })
        {
            state.exercises.insert(exercise.id, exercise);
        }
        Self {
            state: Mutex::new(state),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for MemoryRepository {
    fn read_users(&self) -> Result<Vec<User>, ReadError> {
        Ok(self.state().users.values().cloned().collect())
    }

    fn read_user(&self, id: UserID) -> Result<User, ReadError> {
        self.state().users.get(&id).cloned().ok_or(ReadError::NotFound)
    }

    fn read_user_by_name(&self, name: &Name) -> Result<User, ReadError> {
        self.state()
            .users
            .values()
            .find(|u| u.name == *name)
            .cloned()
            .ok_or(ReadError::NotFound)
    }

    fn create_user(&self, name: Name, password: String) -> Result<User, CreateError> {
        let mut state = self.state();
        if state.users.values().any(|u| u.name == name) {
            return Err(CreateError::Conflict);
        }
        let user = User {
            id: UserID::from(Uuid::new_v4()),
            name,
            password,
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }
}

impl ExerciseRepository for MemoryRepository {
    fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        Ok(self.state().exercises.values().cloned().collect())
    }

    fn read_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError> {
        self.state()
            .exercises
            .get(&id)
            .cloned()
            .ok_or(ReadError::NotFound)
    }

    fn create_exercise(
        &self,
        name: Name,
        category: Category,
        muscle_groups: Vec<String>,
        is_custom: bool,
        user_id: Option<UserID>,
    ) -> Result<Exercise, CreateError> {
        let exercise = Exercise {
            id: ExerciseID::from(Uuid::new_v4()),
            name,
            category,
            muscle_groups,
            is_custom,
            user_id,
        };
        self.state().exercises.insert(exercise.id, exercise.clone());
        Ok(exercise)
    }
}

impl WorkoutRepository for MemoryRepository {
    fn create_workout(
        &self,
        user_id: UserID,
        name: Name,
        category: Category,
        start_time: DateTime<Utc>,
    ) -> Result<Workout, CreateError> {
        let workout = Workout {
            id: WorkoutID::from(Uuid::new_v4()),
            user_id,
            name,
            category,
            start_time,
            end_time: None,
            duration: None,
        };
        self.state().workouts.insert(workout.id, workout.clone());
        Ok(workout)
    }

    fn read_workout(&self, id: WorkoutID) -> Result<Workout, ReadError> {
        self.state()
            .workouts
            .get(&id)
            .cloned()
            .ok_or(ReadError::NotFound)
    }

    fn read_workouts(&self, user_id: UserID) -> Result<Vec<Workout>, ReadError> {
        Ok(self
            .state()
            .workouts
            .values()
            .filter(|w| w.user_id == user_id)
            .cloned()
            .collect())
    }

    fn finish_workout(
        &self,
        id: WorkoutID,
        end_time: DateTime<Utc>,
    ) -> Result<Workout, UpdateError> {
        let mut state = self.state();
        let workout = state.workouts.get_mut(&id).ok_or(UpdateError::NotFound)?;
        workout.finish(end_time);
        Ok(workout.clone())
    }
}

impl WorkoutSetRepository for MemoryRepository {
    fn create_workout_set(
        &self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
        set_number: u32,
        weight: Weight,
        reps: Reps,
        unit: Unit,
    ) -> Result<WorkoutSet, CreateError> {
        let workout_set = WorkoutSet {
            id: WorkoutSetID::from(Uuid::new_v4()),
            workout_id,
            exercise_id,
            set_number,
            weight,
            reps,
            unit,
            completed_at: Utc::now(),
        };
        self.state()
            .workout_sets
            .insert(workout_set.id, workout_set.clone());
        Ok(workout_set)
    }

    fn read_workout_sets(&self, workout_id: WorkoutID) -> Result<Vec<WorkoutSet>, ReadError> {
        Ok(self
            .state()
            .workout_sets
            .values()
            .filter(|s| s.workout_id == workout_id)
            .cloned()
            .collect())
    }

    fn delete_workout_set(&self, id: WorkoutSetID) -> Result<bool, DeleteError> {
        Ok(self.state().workout_sets.remove(&id).is_some())
    }
}
