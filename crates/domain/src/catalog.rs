//! The built-in, non-custom exercises seeded into every store.

use crate::Category;

pub struct Exercise {
    pub name: &'static str,
    pub category: Category,
    pub muscle_groups: &'static [&'static str],
}

pub static EXERCISES: [Exercise; 13] = [
    Exercise {
        name: "Bench Press",
        category: Category::UpperBody,
        muscle_groups: &["chest", "triceps", "shoulders"],
    },
    Exercise {
        name: "Overhead Press",
        category: Category::UpperBody,
        muscle_groups: &["shoulders", "triceps"],
    },
    Exercise {
        name: "Incline Bench Press",
        category: Category::UpperBody,
        muscle_groups: &["chest", "shoulders"],
    },
    Exercise {
        name: "Dips",
        category: Category::Push,
        muscle_groups: &["triceps", "chest"],
    },
    Exercise {
        name: "Push-ups",
        category: Category::Push,
        muscle_groups: &["chest", "triceps", "shoulders"],
    },
    Exercise {
        name: "Pull-ups",
        category: Category::Pull,
        muscle_groups: &["lats", "biceps"],
    },
    Exercise {
        name: "Rows",
        category: Category::Pull,
        muscle_groups: &["lats", "rhomboids", "biceps"],
    },
    Exercise {
        name: "Lat Pulldowns",
        category: Category::Pull,
        muscle_groups: &["lats", "biceps"],
    },
    Exercise {
        name: "Bicep Curls",
        category: Category::Pull,
        muscle_groups: &["biceps"],
    },
    Exercise {
        name: "Squats",
        category: Category::LowerBody,
        muscle_groups: &["quadriceps", "glutes"],
    },
    Exercise {
        name: "Deadlifts",
        category: Category::LowerBody,
        muscle_groups: &["hamstrings", "glutes", "back"],
    },
    Exercise {
        name: "Lunges",
        category: Category::Legs,
        muscle_groups: &["quadriceps", "glutes"],
    },
    Exercise {
        name: "Calf Raises",
        category: Category::Legs,
        muscle_groups: &["calves"],
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_catalog_category_counts() {
        let count = |category| {
            EXERCISES
                .iter()
                .filter(|e| e.category == category)
                .count()
        };
        assert_eq!(count(Category::UpperBody), 3);
        assert_eq!(count(Category::Push), 2);
        assert_eq!(count(Category::Pull), 4);
        assert_eq!(count(Category::LowerBody), 2);
        assert_eq!(count(Category::Legs), 2);
        assert_eq!(count(Category::Back), 0);
        assert_eq!(EXERCISES.len(), 13);
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let mut names = EXERCISES.iter().map(|e| e.name).collect::<Vec<_>>();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), EXERCISES.len());
    }
}
