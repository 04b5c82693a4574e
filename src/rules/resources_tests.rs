#[cfg(test)]
mod tests {
    use crate::api::ApiError;
    use crate::rules::definitions::{EffectiveDateMode, EmployerMatrixItem, MatrixLogEntry};
    use crate::rules::events::FetchedRuleData;
    use crate::rules::resources::{FetchError, FetchState, LifeEventRulesState, SaveError};

    fn matrix_item(member_change_type_id: &str, benefit_type_name: &str) -> EmployerMatrixItem {
        EmployerMatrixItem {
            id: None,
            employer_id: None,
            member_change_type_id: member_change_type_id.to_string(),
            benefit_type_name: benefit_type_name.to_string(),
            is_enabled: true,
            effective_date_mode: EffectiveDateMode::EventEffectiveDate,
            created_at: None,
            member_change_type_description: None,
        }
    }

    fn fetched_data(matrix: Vec<EmployerMatrixItem>) -> FetchedRuleData {
        FetchedRuleData {
            benefit_types: Vec::new(),
            member_change_types: Vec::new(),
            employer_matrix: matrix,
            matrix_log: MatrixLogEntry::default(),
        }
    }

    fn api_error() -> ApiError {
        ApiError {
            status_code: 502,
            text: "bad gateway".to_string(),
        }
    }

    #[test]
    fn should_fetch_only_when_uninitialized_or_errored() {
        assert!(FetchState::Uninitialized.should_fetch());
        assert!(FetchState::Error.should_fetch());
        assert!(!FetchState::Fetching.should_fetch());
        assert!(!FetchState::Fetched.should_fetch());
    }

    #[test]
    fn successful_fetch_fills_all_slots_and_seeds_the_editable_copy() {
        let mut state = LifeEventRulesState::default();
        state.begin_rules_fetch();
        assert_eq!(state.rules_fetch_state, FetchState::Fetching);
        assert!(state.is_loading());

        state.apply_fetch_success(fetched_data(vec![matrix_item("A", "dental")]));

        assert_eq!(state.rules_fetch_state, FetchState::Fetched);
        assert!(!state.is_loading());
        assert_eq!(state.confirmed_matrix().len(), 1);
        assert_eq!(state.editable_matrix, state.confirmed_matrix());
        assert_eq!(state.matrix_log.fetch_state, FetchState::Fetched);
    }

    #[test]
    fn failed_fetch_discards_partial_success_and_surfaces_one_error() {
        let mut state = LifeEventRulesState::default();
        state.begin_rules_fetch();
        state.apply_fetch_failure(&FetchError::Api(api_error()));

        assert_eq!(state.rules_fetch_state, FetchState::Error);
        assert!(state.fetch_error_message().is_some());
        assert_eq!(state.benefit_types.fetch_state, FetchState::Error);
        assert_eq!(state.employer_matrix.fetch_state, FetchState::Error);
        // Errored requests are eligible for re-fetch.
        assert!(state.rules_fetch_state.should_fetch());
    }

    #[test]
    fn failed_save_keeps_the_prior_confirmed_matrix() {
        let mut state = LifeEventRulesState::default();
        state.apply_fetch_success(fetched_data(vec![matrix_item("A", "dental")]));

        state.editable_matrix = vec![matrix_item("A", "dental"), matrix_item("A", "medical")];
        state.begin_matrix_save();
        assert!(state.is_saving());

        state.apply_save_failure(&SaveError::Api(api_error()));

        assert_eq!(state.employer_matrix.fetch_state, FetchState::Error);
        assert!(state.employer_matrix.error.is_some());
        // The confirmed matrix is untouched; only the flag is set.
        assert_eq!(state.confirmed_matrix().len(), 1);
        assert_eq!(state.editable_matrix.len(), 2);
    }

    #[test]
    fn successful_save_replaces_the_confirmed_matrix() {
        let mut state = LifeEventRulesState::default();
        state.apply_fetch_success(fetched_data(vec![matrix_item("A", "dental")]));

        let edited = vec![matrix_item("A", "dental"), matrix_item("B", "dental")];
        state.editable_matrix = edited.clone();
        state.begin_matrix_save();
        state.apply_save_success(edited.clone());

        assert_eq!(state.confirmed_matrix(), edited.as_slice());
        assert_eq!(state.employer_matrix.fetch_state, FetchState::Fetched);
        assert!(state.employer_matrix.error.is_none());
    }

    #[test]
    fn discard_edits_resets_to_the_confirmed_matrix() {
        let mut state = LifeEventRulesState::default();
        state.apply_fetch_success(fetched_data(vec![matrix_item("A", "dental")]));

        state.editable_matrix.push(matrix_item("B", "dental"));
        state.discard_edits();

        assert_eq!(state.editable_matrix, state.confirmed_matrix());
    }

    #[test]
    fn invalidating_the_log_allows_a_refetch() {
        let mut state = LifeEventRulesState::default();
        state.apply_fetch_success(fetched_data(Vec::new()));
        assert!(!state.matrix_log.fetch_state.should_fetch());

        state.invalidate_matrix_log();
        assert!(state.matrix_log.fetch_state.should_fetch());
    }
}
