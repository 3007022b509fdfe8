//! The fixed weekly training program.
//!
//! One plan per weekday: the scheduled BFT class plus the weight exercises
//! for that day. The program is compiled in and never edited at runtime;
//! everything else in the app is keyed against it by weekday and exercise
//! index.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
/// Weekday: the seven plan slots
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Weekday {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monday" => Ok(Weekday::Monday),
            "Tuesday" => Ok(Weekday::Tuesday),
            "Wednesday" => Ok(Weekday::Wednesday),
            "Thursday" => Ok(Weekday::Thursday),
            "Friday" => Ok(Weekday::Friday),
            "Saturday" => Ok(Weekday::Saturday),
            "Sunday" => Ok(Weekday::Sunday),
            _ => Err(format!("Unknown weekday: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
/// Plan data
// ---------------------------------------------------------------------------

/// One exercise slot: target sets and a free-form rep scheme ("8–10",
/// "AMRAP", a pyramid like "30,25,20,15,10").
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExerciseSpec {
    pub name: &'static str,
    pub sets: u32,
    pub reps: &'static str,
}

/// A weekday's schedule: the BFT class name and the weight exercises, in
/// display order. A rest day has no exercises.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DayPlan {
    pub class_name: &'static str,
    pub exercises: &'static [ExerciseSpec],
}

impl DayPlan {
    pub fn is_rest_day(&self) -> bool {
        self.exercises.is_empty()
    }
}

pub fn day_plan(day: Weekday) -> &'static DayPlan {
    &PROGRAM[day as usize]
}

// Indexed by `Weekday as usize`, Monday first.
static PROGRAM: [DayPlan; 7] = [
    DayPlan {
        class_name: "Upper Body Pump",
        exercises: &[
            ExerciseSpec { name: "Machine Chest Fly", sets: 3, reps: "12–15" },
            ExerciseSpec { name: "Barbell Bench Press", sets: 4, reps: "8–10" },
            ExerciseSpec { name: "Dumbbell Shoulder Press", sets: 3, reps: "10–12" },
            ExerciseSpec { name: "Lateral Raises (Pyramid)", sets: 5, reps: "30,25,20,15,10" },
            ExerciseSpec { name: "Triceps Pushdowns", sets: 3, reps: "12–15" },
        ],
    },
    DayPlan {
        class_name: "Cardio",
        exercises: &[
            ExerciseSpec { name: "Barbell Row", sets: 4, reps: "6–8" },
            ExerciseSpec { name: "Lat Pulldown", sets: 3, reps: "8–12" },
            ExerciseSpec { name: "Face Pulls", sets: 3, reps: "12–15" },
            ExerciseSpec { name: "Bicep Curls", sets: 3, reps: "10–12" },
        ],
    },
    DayPlan {
        class_name: "Lower Body Strength",
        exercises: &[
            ExerciseSpec { name: "Squats", sets: 4, reps: "6–8" },
            ExerciseSpec { name: "Lunges", sets: 3, reps: "10 ea" },
            ExerciseSpec { name: "Romanian Deadlifts", sets: 3, reps: "10–12" },
            ExerciseSpec { name: "Standing Calf Raise (Smith Machine)", sets: 4, reps: "15–20" },
        ],
    },
    DayPlan {
        class_name: "Cardio Summit",
        exercises: &[
            ExerciseSpec { name: "Incline Dumbbell Press", sets: 3, reps: "8–10" },
            ExerciseSpec { name: "Cable Chest Fly", sets: 3, reps: "12–15" },
            ExerciseSpec { name: "Arnold Press", sets: 3, reps: "10–12" },
            ExerciseSpec { name: "Triceps Dips", sets: 3, reps: "AMRAP" },
        ],
    },
    DayPlan {
        class_name: "High Volume Full Body",
        exercises: &[
            ExerciseSpec { name: "Deadlifts", sets: 4, reps: "5" },
            ExerciseSpec { name: "Pull-Ups", sets: 3, reps: "AMRAP" },
            ExerciseSpec { name: "Barbell Curls", sets: 3, reps: "10–12" },
            ExerciseSpec { name: "Hammer Curls", sets: 3, reps: "10–12" },
            ExerciseSpec { name: "Seated Calf Raise (Smith Machine)", sets: 4, reps: "15–20" },
        ],
    },
    DayPlan {
        class_name: "Cardio",
        exercises: &[
            ExerciseSpec { name: "Barbell Shrugs", sets: 4, reps: "12–15" },
            ExerciseSpec { name: "Lateral Raises", sets: 3, reps: "15–20" },
            ExerciseSpec { name: "Push-Ups", sets: 3, reps: "AMRAP" },
        ],
    },
    DayPlan {
        class_name: "Rest",
        exercises: &[],
    },
];

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
