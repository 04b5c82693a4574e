// src/rules/resources.rs

use bevy::prelude::*;
use thiserror::Error;

use crate::api::ApiError;

use super::codec::{DecodeError, EncodeError};
use super::definitions::{
    BenefitType, EmployerMatrixItem, MatrixLogEntry, MemberChangeType,
};
use super::events::FetchedRuleData;

/// Lifecycle of one backend request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Uninitialized,
    Fetching,
    Fetched,
    Error,
}

impl FetchState {
    /// Whether a new request should be issued. This is the sole
    /// de-duplication mechanism: re-requesting while a fetch is in flight or
    /// already satisfied is a no-op.
    pub fn should_fetch(self) -> bool {
        matches!(self, FetchState::Uninitialized | FetchState::Error)
    }
}

/// Why the aggregate fetch failed.
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Why a matrix save failed.
#[derive(Error, Debug, Clone)]
pub enum SaveError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// State of one fetched resource.
#[derive(Debug, Clone)]
pub struct RequestSlot<T> {
    pub fetch_state: FetchState,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for RequestSlot<T> {
    fn default() -> Self {
        Self {
            fetch_state: FetchState::default(),
            data: None,
            error: None,
        }
    }
}

impl<T> RequestSlot<T> {
    fn mark_fetching(&mut self) {
        self.fetch_state = FetchState::Fetching;
    }

    fn accept(&mut self, data: T) {
        self.fetch_state = FetchState::Fetched;
        self.data = Some(data);
        self.error = None;
    }

    /// Records the failure but keeps any previously confirmed data.
    fn fail(&mut self, error: String) {
        self.fetch_state = FetchState::Error;
        self.error = Some(error);
    }
}

/// All client-held state for the life-event rules screen. Mutated only by
/// the handler systems in `rules::systems::logic`, which react to events;
/// the UI reads it and sends events.
#[derive(Resource, Debug, Default)]
pub struct LifeEventRulesState {
    /// Aggregate status of the joint four-resource fetch.
    pub rules_fetch_state: FetchState,
    pub rules_error: Option<String>,

    pub benefit_types: RequestSlot<Vec<BenefitType>>,
    pub member_change_types: RequestSlot<Vec<MemberChangeType>>,
    /// Confirmed matrix as last fetched or saved.
    pub employer_matrix: RequestSlot<Vec<EmployerMatrixItem>>,
    pub matrix_log: RequestSlot<MatrixLogEntry>,

    /// Editable copy of the matrix, replaced wholesale on every edit and
    /// reset from the confirmed matrix when edits are discarded.
    pub editable_matrix: Vec<EmployerMatrixItem>,
}

impl LifeEventRulesState {
    pub fn begin_rules_fetch(&mut self) {
        self.rules_fetch_state = FetchState::Fetching;
        self.rules_error = None;
        self.benefit_types.mark_fetching();
        self.member_change_types.mark_fetching();
        self.employer_matrix.mark_fetching();
        self.matrix_log.mark_fetching();
    }

    pub fn apply_fetch_success(&mut self, data: FetchedRuleData) {
        self.editable_matrix = data.employer_matrix.clone();
        self.benefit_types.accept(data.benefit_types);
        self.member_change_types.accept(data.member_change_types);
        self.employer_matrix.accept(data.employer_matrix);
        self.matrix_log.accept(data.matrix_log);
        self.rules_fetch_state = FetchState::Fetched;
        self.rules_error = None;
    }

    pub fn apply_fetch_failure(&mut self, error: &FetchError) {
        let message = error.to_string();
        self.benefit_types.fail(message.clone());
        self.member_change_types.fail(message.clone());
        self.employer_matrix.fail(message.clone());
        self.matrix_log.fail(message.clone());
        self.rules_fetch_state = FetchState::Error;
        self.rules_error = Some(message);
    }

    pub fn begin_matrix_save(&mut self) {
        self.employer_matrix.mark_fetching();
    }

    pub fn apply_save_success(&mut self, saved_matrix: Vec<EmployerMatrixItem>) {
        self.editable_matrix = saved_matrix.clone();
        self.employer_matrix.accept(saved_matrix);
    }

    pub fn apply_save_failure(&mut self, error: &SaveError) {
        self.employer_matrix.fail(error.to_string());
    }

    /// Drops the stale audit log entry state so the post-save re-fetch
    /// passes the `should_fetch` gate.
    pub fn invalidate_matrix_log(&mut self) {
        self.matrix_log.fetch_state = FetchState::Uninitialized;
    }

    pub fn confirmed_matrix(&self) -> &[EmployerMatrixItem] {
        self.employer_matrix.data.as_deref().unwrap_or(&[])
    }

    pub fn discard_edits(&mut self) {
        self.editable_matrix = self.confirmed_matrix().to_vec();
    }

    pub fn benefit_types(&self) -> &[BenefitType] {
        self.benefit_types.data.as_deref().unwrap_or(&[])
    }

    pub fn member_change_types(&self) -> &[MemberChangeType] {
        self.member_change_types.data.as_deref().unwrap_or(&[])
    }

    /// True while the initial aggregate fetch has not completed yet.
    pub fn is_loading(&self) -> bool {
        matches!(
            self.rules_fetch_state,
            FetchState::Uninitialized | FetchState::Fetching
        )
    }

    /// Blocking error to render instead of the grid, if any.
    pub fn fetch_error_message(&self) -> Option<&str> {
        if self.rules_fetch_state == FetchState::Error {
            self.rules_error.as_deref()
        } else {
            None
        }
    }

    /// True while a save request is in flight.
    pub fn is_saving(&self) -> bool {
        self.rules_fetch_state == FetchState::Fetched
            && self.employer_matrix.fetch_state == FetchState::Fetching
    }
}
