// src/rules/systems/logic.rs
// Handler systems that fold results and user edits into
// `LifeEventRulesState`. These are the only writers of that resource.

use bevy::prelude::*;

use crate::rules::edits;
use crate::rules::events::{
    DiscardMatrixEdits, LifeEventRulesFetchResult, MatrixLogFetchResult, RequestFetchMatrixLog,
    RulesOperationFeedback, SaveEmployerMatrixResult, SetBenefitEnabledRequest,
    SetEffectiveDateModeRequest,
};
use crate::rules::resources::{FetchState, LifeEventRulesState};

pub fn handle_fetch_result(
    mut events: EventReader<LifeEventRulesFetchResult>,
    mut state: ResMut<LifeEventRulesState>,
) {
    for event in events.read() {
        match &event.result {
            Ok(data) => {
                info!(
                    "Fetched life event rules: {} benefit type(s), {} member change type(s), {} matrix row(s).",
                    data.benefit_types.len(),
                    data.member_change_types.len(),
                    data.employer_matrix.len()
                );
                state.apply_fetch_success(data.clone());
            }
            Err(error) => {
                error!("Failed to fetch life event rules: {}", error);
                state.apply_fetch_failure(error);
            }
        }
    }
}

pub fn handle_save_result(
    mut events: EventReader<SaveEmployerMatrixResult>,
    mut state: ResMut<LifeEventRulesState>,
    mut log_fetch_writer: EventWriter<RequestFetchMatrixLog>,
    mut feedback_writer: EventWriter<RulesOperationFeedback>,
) {
    for event in events.read() {
        match &event.result {
            Ok(saved_matrix) => {
                info!("Saved {} employer matrix row(s).", saved_matrix.len());
                state.apply_save_success(saved_matrix.clone());
                // The audit log gained a new entry; drop the stale one and
                // re-fetch.
                state.invalidate_matrix_log();
                log_fetch_writer.send(RequestFetchMatrixLog);
                feedback_writer.send(RulesOperationFeedback {
                    message: "Life event rules saved.".to_string(),
                    is_error: false,
                });
            }
            Err(error) => {
                error!("Failed to save employer matrix: {}", error);
                state.apply_save_failure(error);
                feedback_writer.send(RulesOperationFeedback {
                    message: format!("Could not save life event rules: {}", error),
                    is_error: true,
                });
            }
        }
    }
}

pub fn handle_matrix_log_result(
    mut events: EventReader<MatrixLogFetchResult>,
    mut state: ResMut<LifeEventRulesState>,
) {
    for event in events.read() {
        match &event.result {
            Ok(log_entry) => {
                state.matrix_log.data = Some(log_entry.clone());
                state.matrix_log.fetch_state = FetchState::Fetched;
                state.matrix_log.error = None;
            }
            Err(error) => {
                // Non-fatal: the grid stays usable, only the footer is stale.
                warn!("Failed to refresh matrix audit log: {}", error);
                state.matrix_log.fetch_state = FetchState::Error;
                state.matrix_log.error = Some(error.to_string());
            }
        }
    }
}

/// Applies effective-date mode edits to the editable matrix copy. The whole
/// list is replaced, never patched in place.
pub fn handle_set_effective_date_mode(
    mut events: EventReader<SetEffectiveDateModeRequest>,
    mut state: ResMut<LifeEventRulesState>,
) {
    for event in events.read() {
        let updated = edits::with_effective_date_mode(
            &state.editable_matrix,
            &event.member_change_type_id,
            event.effective_date_mode,
        );
        state.editable_matrix = updated;
    }
}

/// Applies benefit checkbox toggles to the editable matrix copy.
pub fn handle_set_benefit_enabled(
    mut events: EventReader<SetBenefitEnabledRequest>,
    mut state: ResMut<LifeEventRulesState>,
) {
    for event in events.read() {
        let updated = edits::with_benefit_enabled(
            &state.editable_matrix,
            &event.member_change_type_id,
            &event.benefit_type_name,
            event.is_enabled,
        );
        state.editable_matrix = updated;
    }
}

pub fn handle_discard_edits(
    mut events: EventReader<DiscardMatrixEdits>,
    mut state: ResMut<LifeEventRulesState>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();
    state.discard_edits();
}
