use getfit_domain as domain;
use log::{debug, warn};

use crate::{
    detail::{DetailMode, ExerciseDetail},
    settings::Settings,
    summary::ExerciseSummary,
};

// ------ ------
//     Model
// ------ ------

/// Exercises page: a filtered list of summaries and at most one open detail dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub filter: domain::ExerciseFilter,
    dialog: Dialog,
    mode: DetailMode,
    default_mode: DetailMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Dialog {
    #[default]
    Hidden,
    ExerciseDetail(domain::ExerciseID),
}

/// Snapshot of the selection for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_id: Option<domain::ExerciseID>,
    pub detail_visible: bool,
}

impl Model {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            filter: domain::ExerciseFilter::default(),
            dialog: Dialog::Hidden,
            mode: settings.default_detail_mode,
            default_mode: settings.default_detail_mode,
        }
    }

    /// Opens the detail dialog for `id`. An unknown `id` leaves the model untouched.
    pub fn select_exercise(
        &mut self,
        catalog: &domain::ExerciseCatalog,
        id: &domain::ExerciseID,
    ) -> Result<(), domain::NotFoundError> {
        catalog.get(id)?;
        debug!("show exercise {id}");
        self.dialog = Dialog::ExerciseDetail(id.clone());
        self.mode = self.default_mode;
        Ok(())
    }

    pub fn close(&mut self) {
        if let Dialog::ExerciseDetail(id) = &self.dialog {
            debug!("close exercise {id}");
            self.dialog = Dialog::Hidden;
        }
    }

    pub fn show_mode(&mut self, mode: DetailMode) {
        self.mode = mode;
    }

    /// Closes the dialog if the selected exercise is not part of `catalog`, e.g. after the
    /// catalog has been reloaded.
    pub fn sync_catalog(&mut self, catalog: &domain::ExerciseCatalog) {
        if let Dialog::ExerciseDetail(id) = &self.dialog {
            if !catalog.contains(id) {
                warn!("selected exercise {id} no longer available");
                self.dialog = Dialog::Hidden;
            }
        }
    }

    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        match &self.dialog {
            Dialog::Hidden => SelectionState {
                selected_id: None,
                detail_visible: false,
            },
            Dialog::ExerciseDetail(id) => SelectionState {
                selected_id: Some(id.clone()),
                detail_visible: true,
            },
        }
    }

    #[must_use]
    pub fn mode(&self) -> DetailMode {
        self.mode
    }

    #[must_use]
    pub fn selected<'a>(
        &self,
        catalog: &'a domain::ExerciseCatalog,
    ) -> Option<&'a domain::Exercise> {
        match &self.dialog {
            Dialog::Hidden => None,
            Dialog::ExerciseDetail(id) => catalog.get(id).ok(),
        }
    }

    #[must_use]
    pub fn summaries<'a>(&self, catalog: &'a domain::ExerciseCatalog) -> Vec<ExerciseSummary<'a>> {
        self.filter
            .exercises(catalog.list())
            .into_iter()
            .map(ExerciseSummary::new)
            .collect()
    }

    #[must_use]
    pub fn detail<'a>(&self, catalog: &'a domain::ExerciseCatalog) -> ExerciseDetail<'a> {
        ExerciseDetail::new(self.selected(catalog), self.mode)
    }
}

// ------ ------
//    Update
// ------ ------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    ViewMore(domain::ExerciseID),
    Close,
    ShowMode(DetailMode),

    SearchTermChanged(String),
    MuscleFilterChanged(Option<domain::Muscle>),
    ForceFilterChanged(Option<domain::Force>),
    LevelFilterChanged(Option<domain::Level>),
    MechanicFilterChanged(Option<domain::Mechanic>),
    EquipmentFilterChanged(Option<domain::Equipment>),
    CategoryFilterChanged(domain::Category),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutMsg {
    None,
    ExerciseUnavailable(domain::ExerciseID),
}

pub fn update(msg: Msg, model: &mut Model, catalog: &domain::ExerciseCatalog) -> OutMsg {
    match msg {
        Msg::ViewMore(id) => match model.select_exercise(catalog, &id) {
            Ok(()) => OutMsg::None,
            Err(err) => {
                warn!("failed to show exercise: {err}");
                OutMsg::ExerciseUnavailable(id)
            }
        },
        Msg::Close => {
            model.close();
            OutMsg::None
        }
        Msg::ShowMode(mode) => {
            model.show_mode(mode);
            OutMsg::None
        }

        Msg::SearchTermChanged(search_term) => {
            model.filter.name = search_term;
            OutMsg::None
        }
        Msg::MuscleFilterChanged(muscle) => {
            model.filter.toggle_muscle(muscle);
            OutMsg::None
        }
        Msg::ForceFilterChanged(force) => {
            model.filter.toggle_force(force);
            OutMsg::None
        }
        Msg::LevelFilterChanged(level) => {
            model.filter.toggle_level(level);
            OutMsg::None
        }
        Msg::MechanicFilterChanged(mechanic) => {
            model.filter.toggle_mechanic(mechanic);
            OutMsg::None
        }
        Msg::EquipmentFilterChanged(equipment) => {
            model.filter.toggle_equipment(equipment);
            OutMsg::None
        }
        Msg::CategoryFilterChanged(category) => {
            model.filter.toggle_category(category);
            OutMsg::None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::detail::Content;

    fn catalog() -> domain::ExerciseCatalog {
        domain::catalog::seed().unwrap()
    }

    fn closed() -> SelectionState {
        SelectionState {
            selected_id: None,
            detail_visible: false,
        }
    }

    fn open(id: u32) -> SelectionState {
        SelectionState {
            selected_id: Some(id.into()),
            detail_visible: true,
        }
    }

    #[test]
    fn test_initial_state() {
        assert_eq!(Model::default().selection_state(), closed());
    }

    #[test]
    fn test_select_and_close() {
        let catalog = catalog();
        let mut model = Model::default();

        model.select_exercise(&catalog, &1.into()).unwrap();

        assert_eq!(model.selection_state(), open(1));
        assert_eq!(
            model.summaries(&catalog)[0].description(),
            "The 3/4 Sit-Up, a compound movement that primarily targets the abdominals."
        );
        assert_eq!(model.detail(&catalog).title(), Some("3/4 Sit-Up"));

        model.close();

        assert_eq!(model.selection_state(), closed());
        assert_eq!(model.detail(&catalog).content(), Content::Empty);
    }

    #[rstest]
    #[case::from_closed(None)]
    #[case::from_same(Some(2))]
    #[case::from_other(Some(3))]
    fn test_select_valid(#[case] previous: Option<u32>) {
        let catalog = catalog();
        let mut model = Model::default();
        if let Some(id) = previous {
            model.select_exercise(&catalog, &id.into()).unwrap();
        }

        assert_eq!(model.select_exercise(&catalog, &2.into()), Ok(()));
        assert_eq!(model.selection_state(), open(2));
        assert_eq!(
            model.selected(&catalog).map(|e| e.name.to_string()),
            Some("Axle Deadlift".to_string())
        );
    }

    #[rstest]
    #[case::from_closed(None)]
    #[case::from_open(Some(1))]
    fn test_select_unknown(#[case] previous: Option<u32>) {
        let catalog = catalog();
        let mut model = Model::default();
        if let Some(id) = previous {
            model.select_exercise(&catalog, &id.into()).unwrap();
        }
        model.show_mode(DetailMode::HowTo);
        let before = model.clone();

        assert_eq!(
            model.select_exercise(&catalog, &999.into()),
            Err(domain::NotFoundError(999.into()))
        );
        assert_eq!(model, before);
    }

    #[test]
    fn test_close_idempotent() {
        let catalog = catalog();
        let mut model = Model::default();
        model.select_exercise(&catalog, &3.into()).unwrap();

        model.close();
        let once = model.clone();
        model.close();

        assert_eq!(model, once);
        assert_eq!(model.selection_state(), closed());
    }

    #[test]
    fn test_close_when_closed() {
        let mut model = Model::default();

        model.close();

        assert_eq!(model, Model::default());
    }

    #[test]
    fn test_select_resets_mode() {
        let catalog = catalog();
        let mut model = Model::new(&Settings {
            default_detail_mode: DetailMode::HowTo,
        });

        model.select_exercise(&catalog, &1.into()).unwrap();
        assert_eq!(model.mode(), DetailMode::HowTo);

        model.show_mode(DetailMode::Summary);
        assert_eq!(model.mode(), DetailMode::Summary);
        assert!(matches!(
            model.detail(&catalog).content(),
            Content::Summary(_)
        ));

        model.select_exercise(&catalog, &2.into()).unwrap();
        assert_eq!(model.mode(), DetailMode::HowTo);
        assert!(matches!(
            model.detail(&catalog).content(),
            Content::HowTo(steps) if steps.len() == 4
        ));
    }

    #[test]
    fn test_sync_catalog() {
        let mut model = Model::default();
        model.select_exercise(&catalog(), &3.into()).unwrap();

        model.sync_catalog(&catalog());
        assert_eq!(model.selection_state(), open(3));

        let reloaded = domain::ExerciseCatalog::new(
            catalog()
                .list()
                .filter(|e| e.id != domain::ExerciseID::from(3))
                .cloned()
                .collect(),
        )
        .unwrap();

        assert_eq!(model.detail(&reloaded).content(), Content::Empty);

        model.sync_catalog(&reloaded);
        assert_eq!(model.selection_state(), closed());
    }

    #[test]
    fn test_update_view_more() {
        let catalog = catalog();
        let mut model = Model::default();
        let summaries = model.summaries(&catalog);
        let msg = summaries[1].view_more();

        assert_eq!(update(msg, &mut model, &catalog), OutMsg::None);
        assert_eq!(model.selection_state(), open(2));

        assert_eq!(update(Msg::Close, &mut model, &catalog), OutMsg::None);
        assert_eq!(model.selection_state(), closed());
    }

    #[test]
    fn test_update_view_more_unknown() {
        let catalog = catalog();
        let mut model = Model::default();
        update(Msg::ViewMore(1.into()), &mut model, &catalog);

        assert_eq!(
            update(Msg::ViewMore(999.into()), &mut model, &catalog),
            OutMsg::ExerciseUnavailable(999.into())
        );
        assert_eq!(model.selection_state(), open(1));
    }

    #[test]
    fn test_update_filter() {
        let catalog = catalog();
        let mut model = Model::default();

        update(
            Msg::CategoryFilterChanged(domain::Category::Strength),
            &mut model,
            &catalog,
        );
        update(
            Msg::MechanicFilterChanged(Some(domain::Mechanic::Isolation)),
            &mut model,
            &catalog,
        );

        assert_eq!(
            model
                .summaries(&catalog)
                .iter()
                .map(ExerciseSummary::title)
                .collect::<Vec<_>>(),
            vec!["Barbell Shrug"]
        );

        update(
            Msg::SearchTermChanged("sit".to_string()),
            &mut model,
            &catalog,
        );

        assert!(model.summaries(&catalog).is_empty());
    }

    #[test]
    fn test_summaries_catalog_order() {
        let catalog = catalog();

        assert_eq!(
            Model::default()
                .summaries(&catalog)
                .iter()
                .map(|s| s.id().to_string())
                .collect::<Vec<_>>(),
            vec!["1", "2", "3"]
        );
    }
}
