use chrono::{DateTime, Utc};
use log::{debug, error, warn};

use crate::{
    Category, CreateError, DeleteError, Exercise, ExerciseID, ExerciseProgress, ExerciseRepository,
    ExerciseService, ImprovementStrategy, Name, ProgressService, ReadError, Reps,
    StatisticsService, Timeframe, Unit, UpdateError, User, UserID, UserRepository, UserService,
    UserStats, Weight, Workout, WorkoutID, WorkoutRepository, WorkoutService, WorkoutSet,
    WorkoutSetID, WorkoutSetRepository, WorkoutSetService, WorkoutWithSets, fixed_improvement,
    sessions, user_stats,
};

pub struct Service<R> {
    repository: R,
    improvement: ImprovementStrategy,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            improvement: fixed_improvement,
        }
    }

    #[must_use]
    pub fn with_improvement_strategy(mut self, improvement: ImprovementStrategy) -> Self {
        self.improvement = improvement;
        self
    }
}

macro_rules! log_on_error {
    ($func: expr, $quiet: pat, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $quiet => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: UserRepository> UserService for Service<R> {
    fn get_users(&self) -> Result<Vec<User>, ReadError> {
        log_on_error!(
            self.repository.read_users(),
            ReadError::NotFound,
            "get",
            "users"
        )
    }

    fn get_user(&self, id: UserID) -> Result<User, ReadError> {
        log_on_error!(
            self.repository.read_user(id),
            ReadError::NotFound,
            "get",
            "user"
        )
    }

    fn get_user_by_name(&self, name: &Name) -> Result<User, ReadError> {
        log_on_error!(
            self.repository.read_user_by_name(name),
            ReadError::NotFound,
            "get",
            "user"
        )
    }

    fn create_user(&self, name: Name, password: String) -> Result<User, CreateError> {
        log_on_error!(
            self.repository.create_user(name, password),
            CreateError::Conflict,
            "create",
            "user"
        )
    }
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError::NotFound,
            "get",
            "exercises"
        )
    }

    fn get_exercises_by_category(&self, category: Category) -> Result<Vec<Exercise>, ReadError> {
        Ok(self
            .get_exercises()?
            .into_iter()
            .filter(|e| e.category == category)
            .collect())
    }

    fn get_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError> {
        log_on_error!(
            self.repository.read_exercise(id),
            ReadError::NotFound,
            "get",
            "exercise"
        )
    }

    fn create_exercise(
        &self,
        name: Name,
        category: Category,
        muscle_groups: Vec<String>,
        is_custom: bool,
        user_id: Option<UserID>,
    ) -> Result<Exercise, CreateError> {
        log_on_error!(
            self.repository
                .create_exercise(name, category, muscle_groups, is_custom, user_id),
            CreateError::Conflict,
            "create",
            "exercise"
        )
    }
}

impl<R> WorkoutService for Service<R>
where
    R: WorkoutRepository + WorkoutSetRepository + ExerciseRepository,
{
    fn create_workout(
        &self,
        user_id: UserID,
        name: Name,
        category: Category,
        start_time: DateTime<Utc>,
    ) -> Result<Workout, CreateError> {
        log_on_error!(
            self.repository
                .create_workout(user_id, name, category, start_time),
            CreateError::Conflict,
            "create",
            "workout"
        )
    }

    fn get_workout(&self, id: WorkoutID) -> Result<Workout, ReadError> {
        log_on_error!(
            self.repository.read_workout(id),
            ReadError::NotFound,
            "get",
            "workout"
        )
    }

    fn get_workouts(&self, user_id: UserID) -> Result<Vec<Workout>, ReadError> {
        let mut workouts = log_on_error!(
            self.repository.read_workouts(user_id),
            ReadError::NotFound,
            "get",
            "workouts"
        )?;
        workouts.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(workouts)
    }

    fn get_workout_with_sets(&self, id: WorkoutID) -> Result<WorkoutWithSets, ReadError> {
        let workout = self.get_workout(id)?;
        let sets = self.get_workout_sets(id)?;
        Ok(WorkoutWithSets { workout, sets })
    }

    fn finish_workout(
        &self,
        id: WorkoutID,
        end_time: DateTime<Utc>,
    ) -> Result<Workout, UpdateError> {
        log_on_error!(
            self.repository.finish_workout(id, end_time),
            UpdateError::NotFound,
            "finish",
            "workout"
        )
    }
}

impl<R> WorkoutSetService for Service<R>
where
    R: WorkoutSetRepository + ExerciseRepository,
{
    fn add_workout_set(
        &self,
        workout_id: WorkoutID,
        exercise_id: ExerciseID,
        set_number: u32,
        weight: Weight,
        reps: Reps,
        unit: Unit,
    ) -> Result<WorkoutSet, CreateError> {
        log_on_error!(
            self.repository
                .create_workout_set(workout_id, exercise_id, set_number, weight, reps, unit),
            CreateError::Conflict,
            "create",
            "workout set"
        )
    }

    fn get_workout_sets(
        &self,
        workout_id: WorkoutID,
    ) -> Result<Vec<(WorkoutSet, Exercise)>, ReadError> {
        let mut sets = self.repository.read_workout_sets(workout_id)?;
        sets.sort_by_key(|s| s.set_number);

        let mut resolved = Vec::with_capacity(sets.len());
        for set in sets {
            match self.repository.read_exercise(set.exercise_id) {
                Ok(exercise) => resolved.push((set, exercise)),
                // Exercises are never deleted, so a dangling id can only come
                // from an unvalidated create. Tolerate it instead of failing
                // the whole workout.
                Err(ReadError::NotFound) => {
                    warn!(
                        "skipping workout set {}: unknown exercise {}",
                        *set.id, *set.exercise_id
                    );
                }
                Err(err) => return Err(err),
            }
        }
        Ok(resolved)
    }

    fn delete_workout_set(&self, id: WorkoutSetID) -> Result<bool, DeleteError> {
        let result = self.repository.delete_workout_set(id);
        if let Err(ref err) = result {
            error!("failed to delete workout set: {err}");
        }
        result
    }
}

impl<R> ProgressService for Service<R>
where
    R: WorkoutRepository + WorkoutSetRepository + ExerciseRepository,
{
    fn get_exercise_progress(
        &self,
        user_id: UserID,
        exercise_id: ExerciseID,
        timeframe: Option<Timeframe>,
    ) -> Result<ExerciseProgress, ReadError> {
        let exercise = self.get_exercise(exercise_id)?;
        let timeframe = timeframe.unwrap_or(Timeframe::All);
        let now = Utc::now();

        let mut dated_sets = Vec::new();
        for workout in self.repository.read_workouts(user_id)? {
            if !timeframe.contains(now, workout.start_time) {
                continue;
            }
            let date = workout.start_time.date_naive();
            for set in self.repository.read_workout_sets(workout.id)? {
                if set.exercise_id == exercise_id {
                    dated_sets.push((date, set));
                }
            }
        }

        Ok(ExerciseProgress {
            exercise_id,
            exercise_name: exercise.name,
            sessions: sessions(&dated_sets),
        })
    }
}

impl<R> StatisticsService for Service<R>
where
    R: WorkoutRepository + WorkoutSetRepository + ExerciseRepository,
{
    fn get_user_stats(
        &self,
        user_id: UserID,
        timeframe: Option<Timeframe>,
    ) -> Result<UserStats, ReadError> {
        let timeframe = timeframe.unwrap_or(Timeframe::Month);
        let now = Utc::now();

        let mut resolved = Vec::new();
        for workout in self.repository.read_workouts(user_id)? {
            if !timeframe.contains(now, workout.start_time) {
                continue;
            }
            resolved.extend(self.get_workout_sets(workout.id)?);
        }

        Ok(user_stats(&resolved, self.improvement))
    }
}
