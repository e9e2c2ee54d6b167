use std::fmt;

use getfit_domain::{self as domain, Property};

use crate::{detail::join_muscles, picker::Msg};

/// Condensed card of an exercise with a "View More" action.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseSummary<'a> {
    exercise: &'a domain::Exercise,
}

impl<'a> ExerciseSummary<'a> {
    #[must_use]
    pub fn new(exercise: &'a domain::Exercise) -> Self {
        Self { exercise }
    }

    #[must_use]
    pub fn id(&self) -> &'a domain::ExerciseID {
        &self.exercise.id
    }

    #[must_use]
    pub fn title(&self) -> &'a str {
        self.exercise.name.as_ref()
    }

    #[must_use]
    pub fn badge(&self) -> &'static str {
        self.exercise.category.name()
    }

    #[must_use]
    pub fn description(&self) -> String {
        let movement = match self.exercise.mechanic {
            Some(mechanic) => {
                let name = mechanic.name();
                format!("{} {name} movement", article(name))
            }
            None => "a movement".to_string(),
        };
        let targets = if self.exercise.primary_muscles.is_empty() {
            format!("{} muscles", join_muscles(&[]))
        } else {
            format!("the {}", join_muscles(&self.exercise.primary_muscles))
        };
        format!(
            "The {}, {movement} that primarily targets {targets}.",
            self.exercise.name
        )
    }

    #[must_use]
    pub fn view_more(&self) -> Msg {
        Msg::ViewMore(self.exercise.id.clone())
    }
}

fn article(word: &str) -> &'static str {
    if word.starts_with(['a', 'e', 'i', 'o', 'u']) {
        "an"
    } else {
        "a"
    }
}

impl fmt::Display for ExerciseSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.title(), self.badge())?;
        writeln!(f, "{}", self.description())?;
        writeln!(f, "[View More]")
    }
}
