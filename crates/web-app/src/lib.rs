#![warn(clippy::pedantic)]

pub mod detail;
pub mod log;
pub mod picker;
pub mod settings;
pub mod summary;

pub use detail::{Content, DetailMode, ExerciseDetail, Fact, Step, UNSPECIFIED};
pub use picker::{Model, Msg, OutMsg, SelectionState, update};
pub use settings::{JsonSettings, Settings, SettingsRepository};
pub use summary::ExerciseSummary;
