// src/rules/plugin.rs
use bevy::prelude::*;

use super::events::{
    DiscardMatrixEdits, LifeEventRulesFetchResult, MatrixLogFetchResult,
    RequestFetchLifeEventRules, RequestFetchMatrixLog, RequestSaveEmployerMatrix,
    RulesOperationFeedback, SaveEmployerMatrixResult, SetBenefitEnabledRequest,
    SetEffectiveDateModeRequest,
};
use super::resources::LifeEventRulesState;
use super::systems;

// System sets for ordering within a frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
enum RulesSystemSet {
    /// Systems reacting to UI request events (fetch/save kickoffs).
    UserInput,
    /// Systems folding results and edits into the state resource.
    ApplyChanges,
}

/// Plugin owning the life-event rules state and its request/edit handling.
pub struct RulesPlugin;

impl Plugin for RulesPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                RulesSystemSet::UserInput,
                RulesSystemSet::ApplyChanges.after(RulesSystemSet::UserInput),
            ),
        );

        app.init_resource::<LifeEventRulesState>();

        app.add_event::<RequestFetchLifeEventRules>()
            .add_event::<LifeEventRulesFetchResult>()
            .add_event::<RequestSaveEmployerMatrix>()
            .add_event::<SaveEmployerMatrixResult>()
            .add_event::<RequestFetchMatrixLog>()
            .add_event::<MatrixLogFetchResult>()
            .add_event::<SetEffectiveDateModeRequest>()
            .add_event::<SetBenefitEnabledRequest>()
            .add_event::<DiscardMatrixEdits>()
            .add_event::<RulesOperationFeedback>();

        app.add_systems(Startup, systems::fetch::request_initial_fetch);

        app.add_systems(
            Update,
            (
                systems::fetch::handle_fetch_life_event_rules,
                systems::fetch::handle_save_employer_matrix,
                systems::fetch::handle_fetch_matrix_log,
            )
                .in_set(RulesSystemSet::UserInput),
        );
        app.add_systems(
            Update,
            (
                systems::logic::handle_fetch_result,
                systems::logic::handle_save_result,
                systems::logic::handle_matrix_log_result,
                systems::logic::handle_set_effective_date_mode,
                systems::logic::handle_set_benefit_enabled,
                systems::logic::handle_discard_edits,
            )
                .chain()
                .in_set(RulesSystemSet::ApplyChanges),
        );

        info!("RulesPlugin initialized.");
    }
}
