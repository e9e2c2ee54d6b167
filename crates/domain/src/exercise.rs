use std::{collections::HashSet, hash::Hash, slice::Iter};

use derive_more::{AsRef, Display};
use serde::Deserialize;

use crate::Name;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[serde(alias = "_id")]
    pub id: ExerciseID,
    pub name: Name,
    #[serde(default)]
    pub force: Option<Force>,
    #[serde(default)]
    pub level: Option<Level>,
    #[serde(default)]
    pub mechanic: Option<Mechanic>,
    #[serde(default)]
    pub equipment: Option<Equipment>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub primary_muscles: Vec<Muscle>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub secondary_muscles: Vec<Muscle>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub instructions: Vec<String>,
    pub category: Category,
    #[serde(default, rename = "is_custom")]
    pub is_custom: bool,
}

impl Exercise {
    /// Primary muscles followed by secondary muscles.
    pub fn muscles(&self) -> impl Iterator<Item = &Muscle> {
        self.primary_muscles
            .iter()
            .chain(self.secondary_muscles.iter())
    }

    #[must_use]
    pub fn targets(&self, muscle: Muscle) -> bool {
        self.muscles().any(|m| *m == muscle)
    }

    /// Drops muscles repeated within the primary or the secondary list, keeping the first
    /// occurrence. The two lists are independent of each other.
    #[must_use]
    pub(crate) fn deduplicated(mut self) -> Self {
        unique(&mut self.primary_muscles);
        unique(&mut self.secondary_muscles);
        self
    }
}

fn unique(muscles: &mut Vec<Muscle>) {
    let mut seen = HashSet::new();
    muscles.retain(|m| seen.insert(*m));
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(
    AsRef,
    Display,
    Debug,
    Clone,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ExerciseID(String);

impl ExerciseID {
    pub fn new(id: &str) -> Result<Self, ExerciseIDError> {
        if id.trim().is_empty() {
            return Err(ExerciseIDError::Empty);
        }
        Ok(Self(id.to_string()))
    }

    #[must_use]
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }
}

impl TryFrom<String> for ExerciseID {
    type Error = ExerciseIDError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ExerciseID> for String {
    fn from(value: ExerciseID) -> Self {
        value.0
    }
}

impl From<u32> for ExerciseID {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExerciseIDError {
    #[error("Exercise ID must not be empty")]
    Empty,
}

pub trait Property: Clone + Copy + Sized + Into<&'static str> + 'static {
    fn iter() -> Iter<'static, Self>;

    /// Lowercase token as used in forms and records.
    fn name(self) -> &'static str {
        self.into()
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    strum::EnumString,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Muscle {
    Abdominals,
    Abductors,
    Adductors,
    Biceps,
    Calves,
    Chest,
    Forearms,
    Glutes,
    Hamstrings,
    Lats,
    #[strum(serialize = "lower back")]
    #[serde(rename = "lower back")]
    LowerBack,
    #[strum(serialize = "middle back")]
    #[serde(rename = "middle back")]
    MiddleBack,
    Neck,
    Quadriceps,
    Shoulders,
    Traps,
    Triceps,
}

impl Property for Muscle {
    fn iter() -> Iter<'static, Muscle> {
        static MUSCLES: [Muscle; 17] = [
            Muscle::Abdominals,
            Muscle::Abductors,
            Muscle::Adductors,
            Muscle::Biceps,
            Muscle::Calves,
            Muscle::Chest,
            Muscle::Forearms,
            Muscle::Glutes,
            Muscle::Hamstrings,
            Muscle::Lats,
            Muscle::LowerBack,
            Muscle::MiddleBack,
            Muscle::Neck,
            Muscle::Quadriceps,
            Muscle::Shoulders,
            Muscle::Traps,
            Muscle::Triceps,
        ];
        MUSCLES.iter()
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    strum::EnumString,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Force {
    Static,
    Pull,
    Push,
}

impl Property for Force {
    fn iter() -> Iter<'static, Force> {
        static FORCE: [Force; 3] = [Force::Static, Force::Pull, Force::Push];
        FORCE.iter()
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    strum::EnumString,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Expert,
}

impl Property for Level {
    fn iter() -> Iter<'static, Level> {
        static LEVEL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Expert];
        LEVEL.iter()
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    strum::EnumString,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Mechanic {
    Isolation,
    Compound,
}

impl Property for Mechanic {
    fn iter() -> Iter<'static, Mechanic> {
        static MECHANIC: [Mechanic; 2] = [Mechanic::Isolation, Mechanic::Compound];
        MECHANIC.iter()
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    strum::EnumString,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    #[strum(serialize = "medicine ball")]
    #[serde(rename = "medicine ball")]
    MedicineBall,
    Dumbbell,
    #[strum(serialize = "body only")]
    #[serde(rename = "body only")]
    BodyOnly,
    Bands,
    Kettlebells,
    #[strum(serialize = "foam roll")]
    #[serde(rename = "foam roll")]
    FoamRoll,
    Cable,
    Machine,
    Barbell,
    #[strum(serialize = "exercise ball")]
    #[serde(rename = "exercise ball")]
    ExerciseBall,
    #[strum(serialize = "e-z curl bar")]
    #[serde(rename = "e-z curl bar")]
    EZCurlBar,
    Other,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 12] = [
            Equipment::MedicineBall,
            Equipment::Dumbbell,
            Equipment::BodyOnly,
            Equipment::Bands,
            Equipment::Kettlebells,
            Equipment::FoamRoll,
            Equipment::Cable,
            Equipment::Machine,
            Equipment::Barbell,
            Equipment::ExerciseBall,
            Equipment::EZCurlBar,
            Equipment::Other,
        ];
        EQUIPMENT.iter()
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    strum::EnumString,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Powerlifting,
    Strength,
    Stretching,
    Cardio,
    OlympicWeightlifting,
    Strongman,
    Plyometrics,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 7] = [
            Category::Powerlifting,
            Category::Strength,
            Category::Stretching,
            Category::Cardio,
            Category::OlympicWeightlifting,
            Category::Strongman,
            Category::Plyometrics,
        ];
        CATEGORY.iter()
    }
}

/// Selection of catalog records. An empty set accepts every value, `None` in a set selects
/// records where the property is absent.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ExerciseFilter {
    pub name: String,
    pub muscles: HashSet<Option<Muscle>>,
    pub force: HashSet<Option<Force>>,
    pub level: HashSet<Option<Level>>,
    pub mechanic: HashSet<Option<Mechanic>>,
    pub equipment: HashSet<Option<Equipment>>,
    pub category: HashSet<Category>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        let name = self.name.trim().to_lowercase();
        exercises
            .filter(|e| {
                e.name.as_ref().to_lowercase().contains(&name)
                    && (self.muscles.is_empty()
                        || self.muscles.iter().all(|muscle| match muscle {
                            Some(m) => e.targets(*m),
                            None => e.muscles().next().is_none(),
                        }))
                    && (self.force.is_empty() || self.force.contains(&e.force))
                    && (self.level.is_empty() || self.level.contains(&e.level))
                    && (self.mechanic.is_empty() || self.mechanic.contains(&e.mechanic))
                    && (self.equipment.is_empty() || self.equipment.contains(&e.equipment))
                    && (self.category.is_empty() || self.category.contains(&e.category))
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.muscles.is_empty()
            && self.force.is_empty()
            && self.level.is_empty()
            && self.mechanic.is_empty()
            && self.equipment.is_empty()
            && self.category.is_empty()
    }

    #[must_use]
    pub fn muscle_list(&self) -> Vec<(Option<Muscle>, bool)> {
        optional_list(&self.muscles)
    }

    #[must_use]
    pub fn force_list(&self) -> Vec<(Option<Force>, bool)> {
        optional_list(&self.force)
    }

    #[must_use]
    pub fn level_list(&self) -> Vec<(Option<Level>, bool)> {
        optional_list(&self.level)
    }

    #[must_use]
    pub fn mechanic_list(&self) -> Vec<(Option<Mechanic>, bool)> {
        optional_list(&self.mechanic)
    }

    #[must_use]
    pub fn equipment_list(&self) -> Vec<(Option<Equipment>, bool)> {
        optional_list(&self.equipment)
    }

    #[must_use]
    pub fn category_list(&self) -> Vec<(Category, bool)> {
        Category::iter()
            .map(|c| (*c, self.category.contains(c)))
            .collect::<Vec<_>>()
    }

    /// Selecting "no muscles" excludes every specific muscle and vice versa.
    pub fn toggle_muscle(&mut self, muscle: Option<Muscle>) {
        if self.muscles.contains(&muscle) {
            self.muscles.remove(&muscle);
        } else {
            if muscle.is_none() {
                self.muscles.clear();
            } else {
                self.muscles.remove(&None);
            }
            self.muscles.insert(muscle);
        }
    }

    pub fn toggle_force(&mut self, force: Option<Force>) {
        toggle(&mut self.force, force);
    }

    pub fn toggle_level(&mut self, level: Option<Level>) {
        toggle(&mut self.level, level);
    }

    pub fn toggle_mechanic(&mut self, mechanic: Option<Mechanic>) {
        toggle(&mut self.mechanic, mechanic);
    }

    pub fn toggle_equipment(&mut self, equipment: Option<Equipment>) {
        toggle(&mut self.equipment, equipment);
    }

    pub fn toggle_category(&mut self, category: Category) {
        toggle(&mut self.category, category);
    }
}

fn optional_list<T: Property + Eq + Hash>(set: &HashSet<Option<T>>) -> Vec<(Option<T>, bool)> {
    T::iter()
        .map(|v| Some(*v))
        .chain([None])
        .map(|v| (v, set.contains(&v)))
        .collect::<Vec<_>>()
}

fn toggle<T: Eq + Hash>(set: &mut HashSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}
