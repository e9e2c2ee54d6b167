use derive_more::{AsRef, Display, Into};

/// Trimmed, non-empty display name. Length limits belong to the forms that create names.
#[derive(
    AsRef, Debug, Display, Into, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        Ok(Name(trimmed_name.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for Name {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Name::new(&value)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("3/4 Sit-Up", Ok(Name("3/4 Sit-Up".to_string())))]
    #[case("  Barbell Shrug  ", Ok(Name("Barbell Shrug".to_string())))]
    #[case("", Err(NameError::Empty))]
    #[case("   ", Err(NameError::Empty))]
    #[case(
        "Dumbbell Alternating Seated Bicep Curl On Exercise Ball With Rotation",
        Ok(Name("Dumbbell Alternating Seated Bicep Curl On Exercise Ball With Rotation".to_string()))
    )]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[test]
    fn test_name_len_counts_chars() {
        assert_eq!(Name::new("¾ Sit-Up").unwrap().len(), 8);
    }

    #[test]
    fn test_name_deserialize() {
        assert_eq!(
            serde_json::from_str::<Name>("\" Axle Deadlift \"").unwrap(),
            Name::new("Axle Deadlift").unwrap()
        );
        assert!(serde_json::from_str::<Name>("\"\"").is_err());
    }
}
