// src/rules/codec.rs
// Conversion between the wire representation of the employer matrix
// (basis + day offset) and the editor representation (single mode).

use std::collections::HashMap;

use bevy::log::warn;
use thiserror::Error;

use super::definitions::{
    EffectiveDateBasis, EffectiveDateMode, EmployerMatrixItem, EmployerMatrixItemRaw,
};

/// A raw matrix row carried a basis/offset pair outside the 2x3 grid of
/// recognized combinations. Fatal to the whole decode: the editor has no way
/// to represent a seventh mode, so a single malformed row invalidates the
/// batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "unexpected effective date basis/offset pair: {basis:?} with {offset_days} day(s)"
)]
pub struct DecodeError {
    pub basis: EffectiveDateBasis,
    pub offset_days: u32,
}

/// An editor row carried an effective-date mode with no wire representation.
/// With [`EffectiveDateMode`] being a closed enum this cannot actually be
/// constructed, but the save flow keeps the fallible signature so the error
/// path stays uniform with decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("effective date mode {mode:?} has no wire representation")]
pub struct EncodeError {
    pub mode: EffectiveDateMode,
}

/// Decodes the raw matrix into editor rows, preserving input order.
///
/// The wire `employerMatrixItemId` becomes the client row id. Fails on the
/// first unrecognized basis/offset pair; no partial output is returned.
pub fn decode_employer_matrix(
    raw_items: &[EmployerMatrixItemRaw],
) -> Result<Vec<EmployerMatrixItem>, DecodeError> {
    raw_items
        .iter()
        .map(|raw| {
            let mode = EffectiveDateMode::from_parts(
                raw.effective_date_mode,
                raw.effective_date_offset,
            )
            .ok_or(DecodeError {
                basis: raw.effective_date_mode,
                offset_days: raw.effective_date_offset,
            })?;

            Ok(EmployerMatrixItem {
                id: raw.employer_matrix_item_id.clone(),
                employer_id: raw.employer_id.clone(),
                member_change_type_id: raw.member_change_type_id.clone(),
                benefit_type_name: raw.benefit_type_name.clone(),
                is_enabled: raw.is_enabled,
                effective_date_mode: mode,
                created_at: raw.created_at.clone(),
                member_change_type_description: raw.member_change_type_description.clone(),
            })
        })
        .collect()
}

/// Re-encodes editor rows for persistence. The client row id is carried back
/// as the `employerMatrixItemId` passthrough so the backend can correlate
/// updates.
pub fn encode_employer_matrix(
    items: &[EmployerMatrixItem],
) -> Result<Vec<EmployerMatrixItemRaw>, EncodeError> {
    items
        .iter()
        .map(|item| {
            Ok(EmployerMatrixItemRaw {
                employer_matrix_item_id: item.id.clone(),
                employer_id: item.employer_id.clone(),
                member_change_type_id: item.member_change_type_id.clone(),
                benefit_type_name: item.benefit_type_name.clone(),
                is_enabled: item.is_enabled,
                effective_date_mode: item.effective_date_mode.basis(),
                effective_date_offset: item.effective_date_mode.offset_days(),
                created_at: item.created_at.clone(),
                member_change_type_description: item.member_change_type_description.clone(),
            })
        })
        .collect()
}

/// Logs a warning for every member-change type whose rows disagree on the
/// effective-date mode. All rows of one rule are expected to share a single
/// mode; divergence indicates corrupt upstream data. Never alters the data
/// and never fails.
pub fn check_effective_date_consistency(items: &[EmployerMatrixItem]) {
    let mut seen: HashMap<&str, EffectiveDateMode> = HashMap::new();
    for item in items {
        match seen.get(item.member_change_type_id.as_str()) {
            None => {
                seen.insert(&item.member_change_type_id, item.effective_date_mode);
            }
            Some(first_mode) if *first_mode != item.effective_date_mode => {
                warn!(
                    "Matrix rows for member change type '{}' ({}) carry different \
                     effective date modes. All rows for one member change type must \
                     share the same mode.",
                    item.member_change_type_id,
                    item.member_change_type_description.as_deref().unwrap_or("?"),
                );
            }
            Some(_) => {}
        }
    }
}
