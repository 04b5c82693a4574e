// src/rules/definitions.rs
// Core data model for the employer life-event rules matrix.

use serde::{Deserialize, Serialize};

/// Coarse date basis carried on the wire. The backend stores a basis plus a
/// separate day offset; the editor works with the combined
/// [`EffectiveDateMode`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectiveDateBasis {
    #[serde(rename = "event_effective_date")]
    EventEffectiveDate,
    #[serde(rename = "first_of_following_month")]
    FirstOfFollowingMonth,
}

/// The six effective-date policies the editor can represent: the two wire
/// bases crossed with the three supported day offsets (0, 30, 60).
///
/// Kept as a closed enum so `match` statements over it stay exhaustive and a
/// seventh mode cannot appear without touching every consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EffectiveDateMode {
    #[default]
    #[serde(rename = "event_effective_date")]
    EventEffectiveDate,
    #[serde(rename = "event_effective_date_plus_30days")]
    EventEffectiveDatePlus30Days,
    #[serde(rename = "event_effective_date_plus_60days")]
    EventEffectiveDatePlus60Days,
    #[serde(rename = "first_of_following_month")]
    FirstOfFollowingMonth,
    #[serde(rename = "first_of_following_month_plus_30days")]
    FirstOfFollowingMonthPlus30Days,
    #[serde(rename = "first_of_following_month_plus_60days")]
    FirstOfFollowingMonthPlus60Days,
}

impl EffectiveDateMode {
    /// All modes in the order they are offered in the editor dropdown.
    pub const ALL: [EffectiveDateMode; 6] = [
        EffectiveDateMode::EventEffectiveDate,
        EffectiveDateMode::EventEffectiveDatePlus30Days,
        EffectiveDateMode::EventEffectiveDatePlus60Days,
        EffectiveDateMode::FirstOfFollowingMonth,
        EffectiveDateMode::FirstOfFollowingMonthPlus30Days,
        EffectiveDateMode::FirstOfFollowingMonthPlus60Days,
    ];

    /// Combines a wire basis and day offset into a mode. Returns `None` for
    /// any pair outside the 2x3 grid.
    pub fn from_parts(basis: EffectiveDateBasis, offset_days: u32) -> Option<Self> {
        match (basis, offset_days) {
            (EffectiveDateBasis::EventEffectiveDate, 0) => {
                Some(EffectiveDateMode::EventEffectiveDate)
            }
            (EffectiveDateBasis::EventEffectiveDate, 30) => {
                Some(EffectiveDateMode::EventEffectiveDatePlus30Days)
            }
            (EffectiveDateBasis::EventEffectiveDate, 60) => {
                Some(EffectiveDateMode::EventEffectiveDatePlus60Days)
            }
            (EffectiveDateBasis::FirstOfFollowingMonth, 0) => {
                Some(EffectiveDateMode::FirstOfFollowingMonth)
            }
            (EffectiveDateBasis::FirstOfFollowingMonth, 30) => {
                Some(EffectiveDateMode::FirstOfFollowingMonthPlus30Days)
            }
            (EffectiveDateBasis::FirstOfFollowingMonth, 60) => {
                Some(EffectiveDateMode::FirstOfFollowingMonthPlus60Days)
            }
            _ => None,
        }
    }

    /// The wire basis this mode collapses back to.
    pub fn basis(self) -> EffectiveDateBasis {
        match self {
            EffectiveDateMode::EventEffectiveDate
            | EffectiveDateMode::EventEffectiveDatePlus30Days
            | EffectiveDateMode::EventEffectiveDatePlus60Days => {
                EffectiveDateBasis::EventEffectiveDate
            }
            EffectiveDateMode::FirstOfFollowingMonth
            | EffectiveDateMode::FirstOfFollowingMonthPlus30Days
            | EffectiveDateMode::FirstOfFollowingMonthPlus60Days => {
                EffectiveDateBasis::FirstOfFollowingMonth
            }
        }
    }

    /// The wire day offset this mode collapses back to.
    pub fn offset_days(self) -> u32 {
        match self {
            EffectiveDateMode::EventEffectiveDate
            | EffectiveDateMode::FirstOfFollowingMonth => 0,
            EffectiveDateMode::EventEffectiveDatePlus30Days
            | EffectiveDateMode::FirstOfFollowingMonthPlus30Days => 30,
            EffectiveDateMode::EventEffectiveDatePlus60Days
            | EffectiveDateMode::FirstOfFollowingMonthPlus60Days => 60,
        }
    }
}

/// Functional grouping of member-change types, used for the editor tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionalCategory {
    EmployeeAdd,
    EmployeeDrop,
    DependentAdd,
    DependentDrop,
    Other,
    NotInMatrix,
}

/// A benefit plan offering that can be toggled per rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitType {
    pub id: String,
    /// Stable key used by matrix rows to reference this benefit.
    #[serde(rename = "type")]
    pub key: String,
    pub name: String,
    /// Column header shown in the editor.
    pub title: String,
}

/// A category of life event (marriage, birth, job loss, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberChangeType {
    pub id: String,
    pub name: String,
    /// Human readable label; matrix rows are grouped under it.
    pub description: String,
    pub functional_category: FunctionalCategory,
}

/// One matrix cell as the backend stores it: basis and offset are separate
/// fields and the row id travels as `employerMatrixItemId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerMatrixItemRaw {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer_matrix_item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employer_id: Option<String>,
    pub member_change_type_id: String,
    pub benefit_type_name: String,
    pub is_enabled: bool,
    pub effective_date_mode: EffectiveDateBasis,
    pub effective_date_offset: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_change_type_description: Option<String>,
}

/// One matrix cell as the editor holds it: the basis/offset pair is folded
/// into a single [`EffectiveDateMode`]. Client-side only, never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployerMatrixItem {
    /// Backend row id, kept for update correlation on save.
    pub id: Option<String>,
    pub employer_id: Option<String>,
    pub member_change_type_id: String,
    pub benefit_type_name: String,
    pub is_enabled: bool,
    pub effective_date_mode: EffectiveDateMode,
    pub created_at: Option<String>,
    pub member_change_type_description: Option<String>,
}

/// Audit trail entry for the employer matrix; either field may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixLogEntry {
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub edited_by: Option<String>,
}
