// src/ui/common.rs
// Display helpers shared by the editor panels.

use crate::rules::definitions::{EffectiveDateMode, FunctionalCategory, MemberChangeType};

/// Tab order of the functional categories; `NotInMatrix` types never get a
/// tab.
pub const FUNCTIONAL_CATEGORY_TAB_ORDER: [FunctionalCategory; 5] = [
    FunctionalCategory::DependentAdd,
    FunctionalCategory::DependentDrop,
    FunctionalCategory::EmployeeAdd,
    FunctionalCategory::EmployeeDrop,
    FunctionalCategory::Other,
];

/// Categories that actually occur in the reference list, in tab order.
pub fn functional_categories(member_change_types: &[MemberChangeType]) -> Vec<FunctionalCategory> {
    FUNCTIONAL_CATEGORY_TAB_ORDER
        .into_iter()
        .filter(|category| {
            member_change_types
                .iter()
                .any(|change_type| change_type.functional_category == *category)
        })
        .collect()
}

pub fn functional_category_label(category: FunctionalCategory) -> &'static str {
    match category {
        FunctionalCategory::DependentAdd => "Add dependent",
        FunctionalCategory::DependentDrop => "Drop dependent",
        FunctionalCategory::EmployeeAdd => "Add employee",
        FunctionalCategory::EmployeeDrop => "Drop employee",
        FunctionalCategory::Other => "Other",
        FunctionalCategory::NotInMatrix => "Not in matrix",
    }
}

pub fn effective_date_mode_label(mode: EffectiveDateMode) -> &'static str {
    match mode {
        EffectiveDateMode::EventEffectiveDate => "Date of life event",
        EffectiveDateMode::EventEffectiveDatePlus30Days => "Date of life event + 30 days",
        EffectiveDateMode::EventEffectiveDatePlus60Days => "Date of life event + 60 days",
        EffectiveDateMode::FirstOfFollowingMonth => {
            "First of month following life event date"
        }
        EffectiveDateMode::FirstOfFollowingMonthPlus30Days => {
            "First of month following life event date + 30 days"
        }
        EffectiveDateMode::FirstOfFollowingMonthPlus60Days => {
            "First of month following life event date + 60 days"
        }
    }
}

/// Renders the audit log timestamp, falling back to the raw string when it
/// is not valid RFC 3339.
pub fn format_log_timestamp(created_at: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(created_at)
        .map(|timestamp| timestamp.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| created_at.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::definitions::FunctionalCategory;

    fn change_type(id: &str, category: FunctionalCategory) -> MemberChangeType {
        MemberChangeType {
            id: id.to_string(),
            name: id.to_string(),
            description: id.to_string(),
            functional_category: category,
        }
    }

    #[test]
    fn categories_come_out_in_tab_order_without_not_in_matrix() {
        let types = [
            change_type("a", FunctionalCategory::Other),
            change_type("b", FunctionalCategory::NotInMatrix),
            change_type("c", FunctionalCategory::DependentAdd),
            change_type("d", FunctionalCategory::DependentAdd),
            change_type("e", FunctionalCategory::EmployeeDrop),
        ];

        assert_eq!(
            functional_categories(&types),
            vec![
                FunctionalCategory::DependentAdd,
                FunctionalCategory::EmployeeDrop,
                FunctionalCategory::Other,
            ]
        );
    }

    #[test]
    fn log_timestamp_falls_back_to_the_raw_string() {
        assert_eq!(
            format_log_timestamp("2024-03-01T09:30:00Z"),
            "2024-03-01 09:30"
        );
        assert_eq!(format_log_timestamp("last tuesday"), "last tuesday");
    }
}
