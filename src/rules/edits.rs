// src/rules/edits.rs
// Copy-on-write helpers that apply a single user edit to the editable matrix.
// Each returns a fresh row list; rows that do not match are cloned untouched.

use super::definitions::{EffectiveDateMode, EmployerMatrixItem};

/// Rewrites the effective-date mode of every row belonging to the given
/// member-change type. The mode is a per-rule property, so all benefit rows
/// of the rule move together.
pub fn with_effective_date_mode(
    rows: &[EmployerMatrixItem],
    member_change_type_id: &str,
    effective_date_mode: EffectiveDateMode,
) -> Vec<EmployerMatrixItem> {
    rows.iter()
        .map(|row| {
            if row.member_change_type_id == member_change_type_id {
                let mut updated = row.clone();
                updated.effective_date_mode = effective_date_mode;
                updated
            } else {
                row.clone()
            }
        })
        .collect()
}

/// Rewrites the enabled flag of the single (rule, benefit) row that matches.
/// A no-op when no row matches: toggles only apply to configured rules.
pub fn with_benefit_enabled(
    rows: &[EmployerMatrixItem],
    member_change_type_id: &str,
    benefit_type_name: &str,
    is_enabled: bool,
) -> Vec<EmployerMatrixItem> {
    rows.iter()
        .map(|row| {
            if row.member_change_type_id == member_change_type_id
                && row.benefit_type_name == benefit_type_name
            {
                let mut updated = row.clone();
                updated.is_enabled = is_enabled;
                updated
            } else {
                row.clone()
            }
        })
        .collect()
}
