// src/api/mod.rs
// Client for the benefits administration backend. All network calls run on
// the tokio runtime spawned by bevy_tokio_tasks; results come back to the
// main thread as events.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bevy::log::info;
use bevy::prelude::Resource;

use crate::cli::Cli;
use crate::rules::definitions::{
    BenefitType, EmployerMatrixItemRaw, MatrixLogEntry, MemberChangeType,
};
use crate::sample_data;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_EMPLOYER_ID: &str = "demo-employer";
const BASE_URL_ENV: &str = "RULEBOARD_API_BASE_URL";
const EMPLOYER_ID_ENV: &str = "RULEBOARD_EMPLOYER_ID";

/// Error payload of a failed backend call. `status_code` is 0 when the
/// request never reached the server (connection or decode failure).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("API request failed ({status_code}): {text}")]
pub struct ApiError {
    pub status_code: u16,
    pub text: String,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError {
            status_code: err.status().map(|status| status.as_u16()).unwrap_or(0),
            text: err.to_string(),
        }
    }
}

/// The matrix travels wrapped in an envelope object in both directions.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmployerMatrixEnvelope {
    employer_matrix: Vec<EmployerMatrixItemRaw>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmployerMatrixUpdate<'a> {
    employer_matrix: &'a [EmployerMatrixItemRaw],
}

/// Shared, cheaply clonable handle to the backend. In offline mode all reads
/// serve the bundled sample dataset and writes are logged and dropped, which
/// keeps the editor usable without a running backend.
#[derive(Resource, Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    employer_id: String,
    offline: bool,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn from_cli(args: &Cli) -> Self {
        let base_url = args
            .api_base_url
            .clone()
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let employer_id = args
            .employer_id
            .clone()
            .or_else(|| std::env::var(EMPLOYER_ID_ENV).ok())
            .unwrap_or_else(|| DEFAULT_EMPLOYER_ID.to_string());

        if args.offline {
            info!("ApiClient: offline mode, serving bundled sample data.");
        } else {
            info!(
                "ApiClient: targeting {} for employer '{}'.",
                base_url, employer_id
            );
        }

        Self {
            base_url,
            employer_id,
            offline: args.offline,
            http: reqwest::Client::new(),
        }
    }

    pub async fn get_benefit_types(&self) -> Result<Vec<BenefitType>, ApiError> {
        if self.offline {
            return Ok(sample_data::sample_benefit_types());
        }
        self.get_json("benefit-types").await
    }

    pub async fn get_member_change_types(&self) -> Result<Vec<MemberChangeType>, ApiError> {
        if self.offline {
            return Ok(sample_data::sample_member_change_types());
        }
        self.get_json("member-change-types").await
    }

    pub async fn get_employer_matrix(&self) -> Result<Vec<EmployerMatrixItemRaw>, ApiError> {
        if self.offline {
            return Ok(sample_data::sample_employer_matrix());
        }
        let envelope: EmployerMatrixEnvelope = self.get_json("employer-matrix").await?;
        Ok(envelope.employer_matrix)
    }

    pub async fn get_latest_matrix_log(&self) -> Result<MatrixLogEntry, ApiError> {
        if self.offline {
            return Ok(sample_data::sample_matrix_log());
        }
        self.get_json("employer-matrix-log/latest").await
    }

    /// Replaces the employer matrix wholesale. A single request; the caller
    /// keeps its prior confirmed state when this fails.
    pub async fn put_employer_matrix(
        &self,
        employer_matrix: &[EmployerMatrixItemRaw],
    ) -> Result<(), ApiError> {
        if self.offline {
            info!(
                "ApiClient: offline mode, dropping save of {} matrix row(s).",
                employer_matrix.len()
            );
            return Ok(());
        }

        let url = self.endpoint("employer-matrix");
        let response = self
            .http
            .put(&url)
            .json(&EmployerMatrixUpdate { employer_matrix })
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError {
                status_code: status.as_u16(),
                text,
            });
        }
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/employers/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.employer_id,
            path
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError {
                status_code: status.as_u16(),
                text,
            });
        }
        response.json::<T>().await.map_err(ApiError::from)
    }
}
