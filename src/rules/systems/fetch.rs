// src/rules/systems/fetch.rs
// Systems that kick off backend work on the tokio runtime. Results are
// handed back to the main thread as events and folded into the state by
// `rules::systems::logic`.

use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::api::ApiClient;
use crate::rules::codec;
use crate::rules::events::{
    FetchedRuleData, LifeEventRulesFetchResult, MatrixLogFetchResult, RequestFetchLifeEventRules,
    RequestFetchMatrixLog, RequestSaveEmployerMatrix, RulesOperationFeedback,
    SaveEmployerMatrixResult,
};
use crate::rules::resources::{FetchError, FetchState, LifeEventRulesState, SaveError};

/// Sends the initial fetch request once the app is up, mirroring the screen
/// fetching its data on mount.
pub fn request_initial_fetch(mut fetch_writer: EventWriter<RequestFetchLifeEventRules>) {
    fetch_writer.send(RequestFetchLifeEventRules);
}

/// Handles `RequestFetchLifeEventRules`: fetches the four rule resources
/// jointly in one background task. Gated by `should_fetch`, so repeated
/// requests while a fetch is in flight or already satisfied are no-ops.
pub fn handle_fetch_life_event_rules(
    mut events: EventReader<RequestFetchLifeEventRules>,
    mut state: ResMut<LifeEventRulesState>,
    api: Res<ApiClient>,
    runtime: Res<TokioTasksRuntime>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    if !state.rules_fetch_state.should_fetch() {
        debug!(
            "Ignoring life event rules fetch request; current state is {:?}.",
            state.rules_fetch_state
        );
        return;
    }

    state.begin_rules_fetch();
    info!("Fetching life event rules.");

    let client = api.clone();
    runtime.spawn_background_task(move |mut ctx| async move {
        let result = fetch_rule_data(&client).await;
        ctx.run_on_main_thread(move |ctx| {
            ctx.world.send_event(LifeEventRulesFetchResult { result });
        })
        .await;
    });
}

/// Joint fetch of the four resources. One failure fails the aggregate;
/// partial success is not preserved. The raw matrix is decoded here so a
/// malformed batch surfaces as a failed fetch, and the per-rule consistency
/// check runs (warning only) after a successful decode.
async fn fetch_rule_data(client: &ApiClient) -> Result<FetchedRuleData, FetchError> {
    let (benefit_types, member_change_types, raw_matrix, matrix_log) = tokio::try_join!(
        client.get_benefit_types(),
        client.get_member_change_types(),
        client.get_employer_matrix(),
        client.get_latest_matrix_log(),
    )?;

    let employer_matrix = codec::decode_employer_matrix(&raw_matrix)?;
    codec::check_effective_date_consistency(&employer_matrix);

    Ok(FetchedRuleData {
        benefit_types,
        member_change_types,
        employer_matrix,
        matrix_log,
    })
}

/// Handles `RequestSaveEmployerMatrix`: re-encodes the editable matrix and
/// replaces the backend copy in a single request.
pub fn handle_save_employer_matrix(
    mut events: EventReader<RequestSaveEmployerMatrix>,
    mut state: ResMut<LifeEventRulesState>,
    api: Res<ApiClient>,
    runtime: Res<TokioTasksRuntime>,
    mut feedback_writer: EventWriter<RulesOperationFeedback>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    if state.is_saving() {
        warn!("Ignoring save request; a save is already in flight.");
        return;
    }

    let matrix_to_save = state.editable_matrix.clone();
    let raw_matrix = match codec::encode_employer_matrix(&matrix_to_save) {
        Ok(raw_matrix) => raw_matrix,
        Err(err) => {
            // Unreachable with a closed mode enum, but handled the same way
            // as a backend failure: prior confirmed state stays visible.
            let error = SaveError::from(err);
            error!("Failed to encode employer matrix: {}", error);
            state.apply_save_failure(&error);
            feedback_writer.send(RulesOperationFeedback {
                message: format!("Could not save life event rules: {}", error),
                is_error: true,
            });
            return;
        }
    };

    state.begin_matrix_save();
    info!("Saving {} employer matrix row(s).", raw_matrix.len());

    let client = api.clone();
    runtime.spawn_background_task(move |mut ctx| async move {
        let result = client
            .put_employer_matrix(&raw_matrix)
            .await
            .map(|_| matrix_to_save)
            .map_err(SaveError::from);
        ctx.run_on_main_thread(move |ctx| {
            ctx.world.send_event(SaveEmployerMatrixResult { result });
        })
        .await;
    });
}

/// Handles `RequestFetchMatrixLog`: standalone re-fetch of the latest audit
/// log entry after a save. Gated by `should_fetch` like every other request.
pub fn handle_fetch_matrix_log(
    mut events: EventReader<RequestFetchMatrixLog>,
    mut state: ResMut<LifeEventRulesState>,
    api: Res<ApiClient>,
    runtime: Res<TokioTasksRuntime>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    if !state.matrix_log.fetch_state.should_fetch() {
        debug!(
            "Ignoring matrix log fetch request; current state is {:?}.",
            state.matrix_log.fetch_state
        );
        return;
    }

    state.matrix_log.fetch_state = FetchState::Fetching;

    let client = api.clone();
    runtime.spawn_background_task(move |mut ctx| async move {
        let result = client.get_latest_matrix_log().await;
        ctx.run_on_main_thread(move |ctx| {
            ctx.world.send_event(MatrixLogFetchResult { result });
        })
        .await;
    });
}
