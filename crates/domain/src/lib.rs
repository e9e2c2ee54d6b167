#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod custom;
pub mod error;
pub mod exercise;
pub mod name;
pub mod service;

pub use catalog::ExerciseCatalog;
pub use custom::{CustomExercise, ValidationError};
pub use error::{CatalogError, NotFoundError, ReadError};
pub use exercise::{
    Category, Equipment, Exercise, ExerciseFilter, ExerciseID, ExerciseIDError, Force, Level,
    Mechanic, Muscle, Property,
};
pub use name::{Name, NameError};
pub use service::{CatalogService, ExerciseRepository, Service};
