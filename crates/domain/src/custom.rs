use std::str::FromStr;

use log::debug;

use crate::{Category, Exercise, ExerciseID, Muscle, Name, NameError, Property};

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;

/// Raw values of the custom exercise form. Optional selections use `None`, an empty string or
/// `"none"` for "not specified".
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomExercise {
    pub name: String,
    pub force: Option<String>,
    pub level: Option<String>,
    pub mechanic: Option<String>,
    pub equipment: Option<String>,
    pub primary_muscles: Vec<String>,
    pub secondary_muscles: Vec<String>,
    pub instructions: Vec<String>,
    pub category: Option<String>,
}

impl Default for CustomExercise {
    fn default() -> Self {
        Self {
            name: String::new(),
            force: None,
            level: None,
            mechanic: None,
            equipment: None,
            primary_muscles: vec![],
            secondary_muscles: vec![],
            instructions: vec![],
            category: Some(Category::Strength.name().to_string()),
        }
    }
}

impl CustomExercise {
    pub fn validate(&self) -> Result<Exercise, ValidationError> {
        let len = self.name.trim().chars().count();
        if len < NAME_MIN_LEN {
            return Err(ValidationError::NameTooShort(len));
        }
        if len > NAME_MAX_LEN {
            return Err(ValidationError::NameTooLong(len));
        }
        let name = Name::new(&self.name)?;

        let category = match selection(self.category.as_deref()) {
            Some(category) => Category::from_str(category)
                .map_err(|_| ValidationError::InvalidCategory(category.to_string()))?,
            None => return Err(ValidationError::MissingCategory),
        };

        let exercise = Exercise {
            id: ExerciseID::random(),
            name,
            force: parse(self.force.as_deref(), ValidationError::InvalidForce)?,
            level: parse(self.level.as_deref(), ValidationError::InvalidLevel)?,
            mechanic: parse(self.mechanic.as_deref(), ValidationError::InvalidMechanic)?,
            equipment: parse(self.equipment.as_deref(), ValidationError::InvalidEquipment)?,
            primary_muscles: parse_muscles(&self.primary_muscles)?,
            secondary_muscles: parse_muscles(&self.secondary_muscles)?,
            instructions: self
                .instructions
                .iter()
                .map(|step| step.trim())
                .filter(|step| !step.is_empty())
                .map(ToString::to_string)
                .collect(),
            category,
            is_custom: true,
        }
        .deduplicated();

        debug!("validated custom exercise {}", exercise.name);

        Ok(exercise)
    }
}

fn selection(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("none"))
}

fn parse<T: FromStr>(
    value: Option<&str>,
    error: fn(String) -> ValidationError,
) -> Result<Option<T>, ValidationError> {
    selection(value)
        .map(|v| T::from_str(v).map_err(|_| error(v.to_string())))
        .transpose()
}

fn parse_muscles(values: &[String]) -> Result<Vec<Muscle>, ValidationError> {
    values
        .iter()
        .filter_map(|v| selection(Some(v.as_str())))
        .map(|v| Muscle::from_str(v).map_err(|_| ValidationError::InvalidMuscle(v.to_string())))
        .collect()
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Exercise name must be at least 2 characters ({0} < 2)")]
    NameTooShort(usize),
    #[error("Exercise name cannot be more than 50 characters ({0} > 50)")]
    NameTooLong(usize),
    #[error(transparent)]
    Name(#[from] NameError),
    #[error("Invalid force \"{0}\"")]
    InvalidForce(String),
    #[error("Invalid level \"{0}\"")]
    InvalidLevel(String),
    #[error("Invalid mechanic \"{0}\"")]
    InvalidMechanic(String),
    #[error("Invalid equipment \"{0}\"")]
    InvalidEquipment(String),
    #[error("Invalid muscle \"{0}\"")]
    InvalidMuscle(String),
    #[error("Invalid category \"{0}\"")]
    InvalidCategory(String),
    #[error("Category is required")]
    MissingCategory,
}
