use std::fmt;

use getfit_domain::{self as domain, Property};

/// Placeholder for absent optional properties and empty muscle lists.
pub const UNSPECIFIED: &str = "unspecified";

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailMode {
    #[default]
    Summary,
    HowTo,
}

impl DetailMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DetailMode::Summary => "Summary",
            DetailMode::HowTo => "How To",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<'a> {
    pub number: usize,
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content<'a> {
    Empty,
    Summary(Vec<Fact>),
    HowTo(Vec<Step<'a>>),
}

/// Full view of a single exercise, showing either its properties or its instructions.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseDetail<'a> {
    exercise: Option<&'a domain::Exercise>,
    mode: DetailMode,
}

impl<'a> ExerciseDetail<'a> {
    #[must_use]
    pub fn new(exercise: Option<&'a domain::Exercise>, mode: DetailMode) -> Self {
        Self { exercise, mode }
    }

    #[must_use]
    pub fn mode(&self) -> DetailMode {
        self.mode
    }

    #[must_use]
    pub fn title(&self) -> Option<&'a str> {
        self.exercise.map(|e| e.name.as_ref().as_str())
    }

    #[must_use]
    pub fn content(&self) -> Content<'a> {
        let Some(exercise) = self.exercise else {
            return Content::Empty;
        };
        match self.mode {
            DetailMode::Summary => Content::Summary(facts(exercise)),
            DetailMode::HowTo => Content::HowTo(steps(exercise)),
        }
    }
}

fn facts(exercise: &domain::Exercise) -> Vec<Fact> {
    vec![
        Fact {
            label: "Primary Muscles",
            value: join_muscles(&exercise.primary_muscles),
        },
        Fact {
            label: "Secondary Muscles",
            value: join_muscles(&exercise.secondary_muscles),
        },
        Fact {
            label: "Force",
            value: name_or_unspecified(exercise.force),
        },
        Fact {
            label: "Level",
            value: name_or_unspecified(exercise.level),
        },
        Fact {
            label: "Mechanic",
            value: name_or_unspecified(exercise.mechanic),
        },
        Fact {
            label: "Equipment",
            value: name_or_unspecified(exercise.equipment),
        },
        Fact {
            label: "Category",
            value: exercise.category.name().to_string(),
        },
    ]
}

fn steps(exercise: &domain::Exercise) -> Vec<Step<'_>> {
    exercise
        .instructions
        .iter()
        .enumerate()
        .map(|(i, text)| Step {
            number: i + 1,
            text,
        })
        .collect()
}

pub(crate) fn join_muscles(muscles: &[domain::Muscle]) -> String {
    if muscles.is_empty() {
        return UNSPECIFIED.to_string();
    }
    muscles
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn name_or_unspecified<P: Property>(property: Option<P>) -> String {
    property.map_or(UNSPECIFIED, P::name).to_string()
}

impl fmt::Display for ExerciseDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(title) = self.title() else {
            return Ok(());
        };
        writeln!(f, "{title}")?;
        let tabs = [DetailMode::Summary, DetailMode::HowTo]
            .into_iter()
            .map(|mode| {
                if mode == self.mode {
                    format!("[{}]", mode.label())
                } else {
                    mode.label().to_string()
                }
            })
            .collect::<Vec<_>>();
        writeln!(f, "{}", tabs.join(" | "))?;
        match self.content() {
            Content::Empty => {}
            Content::Summary(facts) => {
                for fact in facts {
                    writeln!(f, "{}: {}", fact.label, fact.value)?;
                }
            }
            Content::HowTo(steps) => {
                writeln!(f, "Instructions:")?;
                for step in steps {
                    writeln!(f, "{}. {}", step.number, step.text)?;
                }
            }
        }
        Ok(())
    }
}
