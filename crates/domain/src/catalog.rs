use std::{collections::HashMap, slice::Iter};

use log::debug;

use crate::{
    Category, Equipment, Exercise, ExerciseID, Force, Level, Mechanic, Muscle, Name,
    error::{CatalogError, NotFoundError},
};

/// Read-only collection of exercise records in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
    index: HashMap<ExerciseID, usize>,
}

impl ExerciseCatalog {
    pub fn new(exercises: Vec<Exercise>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(exercises.len());
        let exercises = exercises
            .into_iter()
            .map(Exercise::deduplicated)
            .collect::<Vec<_>>();

        for (i, exercise) in exercises.iter().enumerate() {
            if index.insert(exercise.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateID(exercise.id.clone()));
            }
        }

        debug!("created catalog with {} exercises", exercises.len());

        Ok(Self { exercises, index })
    }

    /// Parses a JSON array of exercise records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn get(&self, id: &ExerciseID) -> Result<&Exercise, NotFoundError> {
        self.index
            .get(id)
            .map(|i| &self.exercises[*i])
            .ok_or_else(|| NotFoundError(id.clone()))
    }

    #[must_use]
    pub fn contains(&self, id: &ExerciseID) -> bool {
        self.index.contains_key(id)
    }

    pub fn list(&self) -> Iter<'_, Exercise> {
        self.exercises.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExerciseCatalog {
    type Item = &'a Exercise;
    type IntoIter = Iter<'a, Exercise>;

    fn into_iter(self) -> Self::IntoIter {
        self.list()
    }
}

/// Catalog of the built-in sample exercises.
pub fn seed() -> Result<ExerciseCatalog, CatalogError> {
    ExerciseCatalog::new(
        SEED_EXERCISES
            .iter()
            .map(Exercise::try_from)
            .collect::<Result<Vec<_>, _>>()?,
    )
}

struct SeedExercise {
    id: &'static str,
    name: &'static str,
    force: Option<Force>,
    level: Option<Level>,
    mechanic: Option<Mechanic>,
    equipment: Option<Equipment>,
    primary_muscles: &'static [Muscle],
    secondary_muscles: &'static [Muscle],
    instructions: &'static [&'static str],
    category: Category,
}

impl TryFrom<&SeedExercise> for Exercise {
    type Error = CatalogError;

    fn try_from(value: &SeedExercise) -> Result<Self, Self::Error> {
        Ok(Exercise {
            id: ExerciseID::new(value.id)?,
            name: Name::new(value.name)?,
            force: value.force,
            level: value.level,
            mechanic: value.mechanic,
            equipment: value.equipment,
            primary_muscles: value.primary_muscles.to_vec(),
            secondary_muscles: value.secondary_muscles.to_vec(),
            instructions: value
                .instructions
                .iter()
                .map(ToString::to_string)
                .collect(),
            category: value.category,
            is_custom: false,
        })
    }
}

const SEED_EXERCISES: [SeedExercise; 3] = [
    SeedExercise {
        id: "1",
        name: "3/4 Sit-Up",
        force: Some(Force::Pull),
        level: Some(Level::Beginner),
        mechanic: Some(Mechanic::Compound),
        equipment: Some(Equipment::BodyOnly),
        primary_muscles: &[Muscle::Abdominals],
        secondary_muscles: &[Muscle::Forearms, Muscle::Biceps],
        instructions: &[
            "Lie down on the floor and secure your feet.",
            "Place your hands behind your head.",
            "Flex your hips and spine to raise your torso.",
            "At the top, your torso should be perpendicular to the ground.",
            "Reverse the motion, going only ¾ of the way down.",
            "Repeat for the recommended reps.",
        ],
        category: Category::Strength,
    },
    SeedExercise {
        id: "2",
        name: "Axle Deadlift",
        force: Some(Force::Pull),
        level: Some(Level::Intermediate),
        mechanic: Some(Mechanic::Compound),
        equipment: Some(Equipment::Other),
        primary_muscles: &[Muscle::LowerBack],
        secondary_muscles: &[
            Muscle::Forearms,
            Muscle::Glutes,
            Muscle::Hamstrings,
            Muscle::MiddleBack,
            Muscle::Quadriceps,
            Muscle::Traps,
        ],
        instructions: &[
            "Approach the bar so that it is centered over your feet. Your feet should be about hip width apart. Bend at the hip to grip the bar at shoulder width, allowing your shoulder blades to protract. Typically, you would use an over/under grip.",
            "With your feet and your grip set, take a big breath and then lower your hips and flex the knees until your shins contact the bar. Look forward with your head, keep your chest up and your back arched, and begin driving through the heels to move the weight upward.",
            "After the bar passes the knees, aggressively pull the bar back, pulling your shoulder blades together as you drive your hips forward into the bar.",
            "Lower the bar by bending at the hips and guiding it to the floor.",
        ],
        category: Category::Strongman,
    },
    SeedExercise {
        id: "3",
        name: "Barbell Shrug",
        force: Some(Force::Pull),
        level: Some(Level::Beginner),
        mechanic: Some(Mechanic::Isolation),
        equipment: Some(Equipment::Barbell),
        primary_muscles: &[Muscle::Traps],
        secondary_muscles: &[],
        instructions: &[
            "Stand up straight with your feet at shoulder width as you hold a barbell with both hands in front of you using a pronated grip (palms facing the thighs). Tip: Your hands should be a little wider than shoulder width apart. You can use wrist wraps for this exercise for a better grip. This will be your starting position.",
            "Raise your shoulders up as far as you can go as you breathe out and hold the contraction for a second. Tip: Refrain from trying to lift the barbell by using your biceps.",
            "Slowly return to the starting position as you breathe in.",
            "Repeat for the recommended amount of repetitions.",
        ],
        category: Category::Strength,
    },
];
