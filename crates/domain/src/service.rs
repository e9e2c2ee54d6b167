use log::{debug, error};

use crate::{
    Exercise, ExerciseCatalog,
    catalog::seed,
    error::{CatalogError, ReadError},
};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait CatalogService {
    async fn get_catalog(&self) -> Result<ExerciseCatalog, ReadError>;
}

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                ReadError::NoConnection => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> Service<R> {
    async fn read_catalog(&self) -> Result<ExerciseCatalog, ReadError> {
        let exercises = self.repository.read_exercises().await?;
        Ok(ExerciseCatalog::new(exercises)?)
    }
}

impl<R: ExerciseRepository> CatalogService for Service<R> {
    async fn get_catalog(&self) -> Result<ExerciseCatalog, ReadError> {
        log_on_error!(self.read_catalog(), "get", "catalog")
    }
}

/// Built-in sample exercises.
pub struct Fixture;

impl ExerciseRepository for Fixture {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        Ok(seed()?.list().cloned().collect())
    }
}

/// Exercises from a JSON array, e.g. an exported data file.
pub struct JsonFixture(pub String);

impl ExerciseRepository for JsonFixture {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        serde_json::from_str(&self.0).map_err(|err| ReadError::Catalog(CatalogError::Json(err)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ExerciseID;

    struct Offline;

    impl ExerciseRepository for Offline {
        async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
            Err(ReadError::NoConnection)
        }
    }

    #[tokio::test]
    async fn test_get_catalog_fixture() {
        let catalog = Service::new(Fixture).get_catalog().await.unwrap();

        assert_eq!(catalog, seed().unwrap());
    }

    #[tokio::test]
    async fn test_get_catalog_json() {
        let service = Service::new(JsonFixture(
            r#"[{"id": "7", "name": "Jump Squat", "category": "plyometrics"}]"#.to_string(),
        ));
        let catalog = service.get_catalog().await.unwrap();

        assert_eq!(
            catalog.get(&ExerciseID::from(7)).unwrap().name.to_string(),
            "Jump Squat"
        );
    }

    #[tokio::test]
    async fn test_get_catalog_duplicate_id() {
        let service = Service::new(JsonFixture(
            r#"[{"id": "1", "name": "A", "category": "cardio"}, {"id": "1", "name": "B", "category": "cardio"}]"#
                .to_string(),
        ));

        assert!(matches!(
            service.get_catalog().await,
            Err(ReadError::Catalog(CatalogError::DuplicateID(_)))
        ));
    }

    #[tokio::test]
    async fn test_get_catalog_no_connection() {
        assert!(matches!(
            Service::new(Offline).get_catalog().await,
            Err(ReadError::NoConnection)
        ));
    }
}
