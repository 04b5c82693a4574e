// src/rules/events.rs

use bevy::prelude::Event;

use crate::api::ApiError;

use super::definitions::{
    BenefitType, EffectiveDateMode, EmployerMatrixItem, MatrixLogEntry, MemberChangeType,
};
use super::resources::{FetchError, SaveError};

/// Event sent to kick off the aggregate fetch of all four rule resources.
/// Sent once at startup and again by the UI after a failed fetch.
/// Handled by systems in `rules::systems::fetch`.
#[derive(Event, Debug, Clone)]
pub struct RequestFetchLifeEventRules;

/// Everything the aggregate fetch produces on success. The matrix arrives
/// already decoded; decode failures fail the whole fetch.
#[derive(Debug, Clone)]
pub struct FetchedRuleData {
    pub benefit_types: Vec<BenefitType>,
    pub member_change_types: Vec<MemberChangeType>,
    pub employer_matrix: Vec<EmployerMatrixItem>,
    pub matrix_log: MatrixLogEntry,
}

/// Result of the aggregate fetch, sent from the background task. Partial
/// success is not preserved: one failed resource fails the batch.
#[derive(Event, Debug, Clone)]
pub struct LifeEventRulesFetchResult {
    pub result: Result<FetchedRuleData, FetchError>,
}

/// Event sent when the user saves the edited matrix.
/// Handled by systems in `rules::systems::fetch`.
#[derive(Event, Debug, Clone)]
pub struct RequestSaveEmployerMatrix;

/// Result of a matrix save. `Ok` carries the rows that were persisted; they
/// become the new confirmed matrix.
#[derive(Event, Debug, Clone)]
pub struct SaveEmployerMatrixResult {
    pub result: Result<Vec<EmployerMatrixItem>, SaveError>,
}

/// Event sent to re-fetch the latest matrix audit log entry on its own,
/// after a successful save.
#[derive(Event, Debug, Clone)]
pub struct RequestFetchMatrixLog;

/// Result of the standalone audit log fetch.
#[derive(Event, Debug, Clone)]
pub struct MatrixLogFetchResult {
    pub result: Result<MatrixLogEntry, ApiError>,
}

/// Event sent when the user picks a different effective-date mode for a
/// rule. Applied to the editable matrix copy only.
#[derive(Event, Debug, Clone)]
pub struct SetEffectiveDateModeRequest {
    pub member_change_type_id: String,
    pub effective_date_mode: EffectiveDateMode,
}

/// Event sent when the user toggles one benefit checkbox of a rule.
/// Applied to the editable matrix copy only.
#[derive(Event, Debug, Clone)]
pub struct SetBenefitEnabledRequest {
    pub member_change_type_id: String,
    pub benefit_type_name: String,
    pub is_enabled: bool,
}

/// Event sent when the user leaves edit mode without saving; resets the
/// editable copy to the confirmed matrix.
#[derive(Event, Debug, Clone)]
pub struct DiscardMatrixEdits;

/// User-facing feedback line for rule operations, mirrored into the UI
/// feedback state.
#[derive(Event, Debug, Clone)]
pub struct RulesOperationFeedback {
    pub message: String,
    pub is_error: bool,
}
