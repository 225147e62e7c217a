//! Application state definitions

use super::forms::{Form, FormFocus, RegistrationForm, Submission, ValidationErrors};
use super::options::{sorted_options, ApiOption, OptionKind, OptionList};

/// Where the user is in the fill-and-submit flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowPhase {
    #[default]
    Idle,
    Filling,
    ReadyToSubmit,
    /// Success dialog is showing
    Submitted,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Required fields or selections are still empty
    Disabled,
    Invalid(ValidationErrors),
    Accepted(Submission),
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub phase: FlowPhase,
    pub form: RegistrationForm,
    pub countries: OptionList,
    pub cities: OptionList,
}

impl AppState {
    pub fn option_list(&self, kind: OptionKind) -> &OptionList {
        match kind {
            OptionKind::Countries => &self.countries,
            OptionKind::Cities => &self.cities,
        }
    }

    fn option_list_mut(&mut self, kind: OptionKind) -> &mut OptionList {
        match kind {
            OptionKind::Countries => &mut self.countries,
            OptionKind::Cities => &mut self.cities,
        }
    }

    /// Store a fetch result; failures leave the list unavailable
    pub fn apply_options(&mut self, kind: OptionKind, result: Result<Vec<ApiOption>, String>) {
        let list = match result {
            Ok(items) => OptionList::Loaded(sorted_options(items, kind.value_kind())),
            Err(reason) => OptionList::Unavailable(reason),
        };
        *self.option_list_mut(kind) = list;
    }

    /// Lists that still need a fetch
    pub fn pending_lists(&self) -> Vec<OptionKind> {
        [OptionKind::Countries, OptionKind::Cities]
            .into_iter()
            .filter(|kind| !self.option_list(*kind).is_loaded())
            .collect()
    }

    pub fn focused_list_kind(&self) -> Option<OptionKind> {
        match self.form.focus() {
            FormFocus::Countries => Some(OptionKind::Countries),
            FormFocus::Cities => Some(OptionKind::Cities),
            _ => None,
        }
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.form.is_submit_disabled()
    }

    /// Recompute the phase after an input event
    fn refresh_phase(&mut self) {
        if self.phase == FlowPhase::Submitted {
            return;
        }
        self.phase = if !self.form.is_submit_disabled() {
            FlowPhase::ReadyToSubmit
        } else if self.phase != FlowPhase::Idle || self.form.has_input() {
            FlowPhase::Filling
        } else {
            FlowPhase::Idle
        };
    }

    pub fn next_form_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_form_field(&mut self) {
        self.form.prev_field();
    }

    /// Type a character into the focused text field
    pub fn form_input_char(&mut self, c: char) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.push_char(c);
            self.refresh_phase();
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.pop_char();
            self.refresh_phase();
        }
    }

    pub fn move_option_cursor_up(&mut self) {
        let focus = self.form.focus();
        if let Some(select) = self.form.selection_mut(focus) {
            select.move_up();
        }
    }

    pub fn move_option_cursor_down(&mut self) {
        let Some(kind) = self.focused_list_kind() else {
            return;
        };
        let count = self.option_list(kind).options().len();
        let focus = self.form.focus();
        if let Some(select) = self.form.selection_mut(focus) {
            select.move_down(count);
        }
    }

    /// Toggle the highlighted option of the focused picker
    pub fn toggle_focused_option(&mut self) {
        let Some(kind) = self.focused_list_kind() else {
            return;
        };
        let options = match kind {
            OptionKind::Countries => &self.countries,
            OptionKind::Cities => &self.cities,
        }
        .options();
        let select = match kind {
            OptionKind::Countries => &mut self.form.countries,
            OptionKind::Cities => &mut self.form.cities,
        };
        select.toggle(options);
        self.refresh_phase();
    }

    /// Gate, then validate; only an accepted submission changes the phase
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase == FlowPhase::Submitted || self.form.is_submit_disabled() {
            return SubmitOutcome::Disabled;
        }
        self.form.submit_attempted = true;
        match self.form.inputs().validate() {
            Ok(submission) => {
                self.phase = FlowPhase::Submitted;
                SubmitOutcome::Accepted(submission)
            }
            Err(errors) => SubmitOutcome::Invalid(errors),
        }
    }

    /// Return every field and selection to its initial value.
    ///
    /// Option lists are left alone; a submission requires both to be loaded.
    pub fn reset(&mut self) {
        self.form = RegistrationForm::new();
        self.phase = FlowPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn country(name: &str, name_ptbr: &str) -> ApiOption {
        ApiOption {
            name: name.to_string(),
            name_ptbr: Some(name_ptbr.to_string()),
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.apply_options(
            OptionKind::Countries,
            Ok(vec![country("Zambia", "Zâmbia"), country("Brazil", "Brasil")]),
        );
        state.apply_options(
            OptionKind::Cities,
            Ok(vec![country("Lisbon", "Lisboa"), country("Sao Paulo", "São Paulo")]),
        );
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.form_input_char(c);
        }
    }

    fn fill_scalars(state: &mut AppState, email: &str) {
        type_text(state, "Ana");
        state.next_form_field();
        type_text(state, email);
        state.next_form_field();
        type_text(state, "11987654321");
        state.next_form_field();
        type_text(state, "12345678901");
        state.next_form_field();
    }

    fn pick_first_country_and_city(state: &mut AppState) {
        state.form.set_active_field(4);
        state.toggle_focused_option();
        state.next_form_field();
        state.toggle_focused_option();
        state.next_form_field();
    }

    mod options {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_lists_start_loading() {
            let state = AppState::default();
            assert_eq!(state.countries, OptionList::Loading);
            assert_eq!(state.cities, OptionList::Loading);
            assert_eq!(
                state.pending_lists(),
                vec![OptionKind::Countries, OptionKind::Cities]
            );
        }

        #[test]
        fn test_apply_options_sorts_by_label() {
            let state = loaded_state();
            let labels: Vec<&str> = state.countries.options().iter().map(|o| o.label()).collect();
            assert_eq!(labels, vec!["Brasil", "Zâmbia"]);
        }

        #[test]
        fn test_failed_fetch_is_unavailable() {
            let mut state = AppState::default();
            state.apply_options(OptionKind::Cities, Err("timed out".to_string()));
            assert_eq!(state.cities, OptionList::Unavailable("timed out".to_string()));
            assert_eq!(state.countries, OptionList::Loading);
        }

        #[test]
        fn test_lists_may_arrive_after_typing() {
            let mut state = AppState::default();
            type_text(&mut state, "Ana");
            state.apply_options(OptionKind::Countries, Ok(vec![country("Brazil", "Brasil")]));
            assert_eq!(state.form.name.as_text(), "Ana");
            assert!(state.countries.is_loaded());
        }

        #[test]
        fn test_toggle_on_loading_list_is_noop() {
            let mut state = AppState::default();
            state.form.set_active_field(4);
            state.toggle_focused_option();
            assert!(state.form.countries.is_empty());
        }

        #[test]
        fn test_cursor_moves_within_list() {
            let mut state = loaded_state();
            state.form.set_active_field(4);
            state.move_option_cursor_down();
            state.move_option_cursor_down();
            assert_eq!(state.form.countries.cursor, 1);
            state.toggle_focused_option();
            assert_eq!(state.form.countries.selected, vec!["Zâmbia".to_string()]);
            state.move_option_cursor_up();
            assert_eq!(state.form.countries.cursor, 0);
        }
    }

    mod phases {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_idle() {
            assert_eq!(AppState::default().phase, FlowPhase::Idle);
        }

        #[test]
        fn test_first_input_moves_to_filling() {
            let mut state = AppState::default();
            state.form_input_char('A');
            assert_eq!(state.phase, FlowPhase::Filling);
        }

        #[test]
        fn test_clearing_input_stays_filling() {
            let mut state = AppState::default();
            state.form_input_char('A');
            state.form_backspace();
            assert_eq!(state.phase, FlowPhase::Filling);
        }

        #[test]
        fn test_complete_form_is_ready() {
            let mut state = loaded_state();
            fill_scalars(&mut state, "ana@x.com");
            assert_eq!(state.phase, FlowPhase::Filling);
            pick_first_country_and_city(&mut state);
            assert_eq!(state.phase, FlowPhase::ReadyToSubmit);
            assert!(!state.is_submit_disabled());
        }

        #[test]
        fn test_deselecting_city_leaves_ready() {
            let mut state = loaded_state();
            fill_scalars(&mut state, "ana@x.com");
            pick_first_country_and_city(&mut state);
            state.form.set_active_field(5);
            state.toggle_focused_option();
            assert_eq!(state.phase, FlowPhase::Filling);
            assert!(state.is_submit_disabled());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submit_disabled_without_selections() {
            let mut state = loaded_state();
            fill_scalars(&mut state, "ana@x.com");
            assert_eq!(state.submit(), SubmitOutcome::Disabled);
            assert!(!state.form.submit_attempted);
        }

        #[test]
        fn test_invalid_email_shows_errors() {
            let mut state = loaded_state();
            fill_scalars(&mut state, "ana-at-x");
            pick_first_country_and_city(&mut state);
            let outcome = state.submit();
            assert!(matches!(outcome, SubmitOutcome::Invalid(ref e) if e.email.is_some()));
            assert_eq!(state.phase, FlowPhase::ReadyToSubmit);
            assert!(state.form.visible_errors().email.is_some());
        }

        #[test]
        fn test_valid_submit_moves_to_submitted() {
            let mut state = loaded_state();
            fill_scalars(&mut state, "ana@x.com");
            pick_first_country_and_city(&mut state);
            let SubmitOutcome::Accepted(submission) = state.submit() else {
                panic!("expected accepted submission");
            };
            assert_eq!(state.phase, FlowPhase::Submitted);
            assert_eq!(submission.countries, vec!["Brasil".to_string()]);
            assert_eq!(submission.cities, vec!["Lisbon".to_string()]);
        }

        #[test]
        fn test_second_submit_is_ignored() {
            let mut state = loaded_state();
            fill_scalars(&mut state, "ana@x.com");
            pick_first_country_and_city(&mut state);
            state.submit();
            assert_eq!(state.submit(), SubmitOutcome::Disabled);
        }

        #[test]
        fn test_input_while_submitted_keeps_phase() {
            let mut state = loaded_state();
            fill_scalars(&mut state, "ana@x.com");
            pick_first_country_and_city(&mut state);
            state.submit();
            state.form.set_active_field(0);
            state.form_input_char('x');
            assert_eq!(state.phase, FlowPhase::Submitted);
        }
    }

    mod reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reset_clears_everything() {
            let mut state = loaded_state();
            fill_scalars(&mut state, "ana@x.com");
            pick_first_country_and_city(&mut state);
            state.submit();
            state.reset();

            assert_eq!(state.phase, FlowPhase::Idle);
            assert!(!state.form.has_input());
            assert_eq!(state.form.active_field_index, 0);
            assert!(!state.form.submit_attempted);
            assert!(state.is_submit_disabled());
        }

        #[test]
        fn test_reset_keeps_loaded_lists() {
            let mut state = loaded_state();
            state.reset();
            assert!(state.countries.is_loaded());
            assert!(state.pending_lists().is_empty());
        }

        #[test]
        fn test_reset_after_submit_keeps_options() {
            let mut state = loaded_state();
            let countries = state.countries.clone();
            let cities = state.cities.clone();
            fill_scalars(&mut state, "ana@x.com");
            pick_first_country_and_city(&mut state);
            assert!(matches!(state.submit(), SubmitOutcome::Accepted(_)));

            state.reset();
            assert_eq!(state.countries, countries);
            assert_eq!(state.cities, cities);
            assert!(state.form.countries.is_empty());
            assert!(state.form.cities.is_empty());
        }
    }
}
