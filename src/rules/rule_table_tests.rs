#[cfg(test)]
mod tests {
    use crate::rules::definitions::{
        EffectiveDateMode, EmployerMatrixItem, FunctionalCategory, MemberChangeType,
    };
    use crate::rules::rule_table::build_rule_table;

    fn matrix_item(
        member_change_type_id: &str,
        description: &str,
        benefit_type_name: &str,
        is_enabled: bool,
        effective_date_mode: EffectiveDateMode,
    ) -> EmployerMatrixItem {
        EmployerMatrixItem {
            id: None,
            employer_id: None,
            member_change_type_id: member_change_type_id.to_string(),
            benefit_type_name: benefit_type_name.to_string(),
            is_enabled,
            effective_date_mode,
            created_at: None,
            member_change_type_description: Some(description.to_string()),
        }
    }

    fn change_type(id: &str, name: &str, description: &str) -> MemberChangeType {
        MemberChangeType {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            functional_category: FunctionalCategory::DependentAdd,
        }
    }

    #[test]
    fn empty_matrix_builds_an_empty_table() {
        let table = build_rule_table(&[], &[change_type("A", "marriage", "Marriage")]);
        assert!(table.is_empty());
    }

    #[test]
    fn single_row_seeds_a_full_entry() {
        let table = build_rule_table(
            &[matrix_item(
                "A",
                "Marriage",
                "dental",
                true,
                EffectiveDateMode::EventEffectiveDate,
            )],
            &[change_type("A", "marriage", "Marriage")],
        );

        assert_eq!(table.len(), 1);
        let row = &table["Marriage"];
        assert_eq!(row.member_change_type_name, "marriage");
        assert_eq!(row.member_change_type_description, "Marriage");
        assert_eq!(row.effective_date_mode, EffectiveDateMode::EventEffectiveDate);
        assert_eq!(row.benefit_enabled.len(), 1);
        assert_eq!(row.benefit_enabled["dental"], true);
    }

    #[test]
    fn later_rows_only_add_their_own_benefit_key() {
        let reference = [change_type("A", "marriage", "Marriage")];
        let table = build_rule_table(
            &[
                matrix_item(
                    "A",
                    "Marriage",
                    "dental",
                    true,
                    EffectiveDateMode::FirstOfFollowingMonth,
                ),
                // Divergent mode on the second row must not displace the
                // first-seen mode.
                matrix_item(
                    "A",
                    "Marriage",
                    "hsa",
                    false,
                    EffectiveDateMode::EventEffectiveDatePlus30Days,
                ),
            ],
            &reference,
        );

        assert_eq!(table.len(), 1);
        let row = &table["Marriage"];
        assert_eq!(
            row.effective_date_mode,
            EffectiveDateMode::FirstOfFollowingMonth
        );
        assert_eq!(row.benefit_enabled["dental"], true);
        assert_eq!(row.benefit_enabled["hsa"], false);
    }

    #[test]
    fn later_row_overwrites_an_existing_benefit_key() {
        let reference = [change_type("A", "marriage", "Marriage")];
        let table = build_rule_table(
            &[
                matrix_item("A", "Marriage", "dental", true, EffectiveDateMode::default()),
                matrix_item("A", "Marriage", "dental", false, EffectiveDateMode::default()),
            ],
            &reference,
        );

        assert_eq!(table["Marriage"].benefit_enabled["dental"], false);
    }

    #[test]
    fn unresolvable_change_type_id_leaves_the_name_empty() {
        let table = build_rule_table(
            &[matrix_item(
                "unknown-id",
                "Marriage",
                "dental",
                true,
                EffectiveDateMode::default(),
            )],
            &[change_type("A", "marriage", "Marriage")],
        );

        assert_eq!(table["Marriage"].member_change_type_name, "");
    }

    #[test]
    fn distinct_descriptions_get_distinct_entries() {
        let reference = [
            change_type("A", "marriage", "Marriage"),
            change_type("B", "birth", "Birth or adoption"),
        ];
        let table = build_rule_table(
            &[
                matrix_item("A", "Marriage", "dental", true, EffectiveDateMode::default()),
                matrix_item(
                    "B",
                    "Birth or adoption",
                    "dental",
                    false,
                    EffectiveDateMode::FirstOfFollowingMonthPlus60Days,
                ),
            ],
            &reference,
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table["Marriage"].benefit_enabled["dental"], true);
        assert_eq!(table["Birth or adoption"].benefit_enabled["dental"], false);
        assert_eq!(
            table["Birth or adoption"].effective_date_mode,
            EffectiveDateMode::FirstOfFollowingMonthPlus60Days
        );
    }

    #[test]
    fn builder_is_deterministic_over_identical_inputs() {
        let reference = [
            change_type("A", "marriage", "Marriage"),
            change_type("B", "birth", "Birth or adoption"),
        ];
        let matrix = [
            matrix_item("A", "Marriage", "dental", true, EffectiveDateMode::default()),
            matrix_item("A", "Marriage", "hsa", false, EffectiveDateMode::default()),
            matrix_item(
                "B",
                "Birth or adoption",
                "medical",
                true,
                EffectiveDateMode::EventEffectiveDatePlus60Days,
            ),
        ];

        let first = build_rule_table(&matrix, &reference);
        let second = build_rule_table(&matrix, &reference);
        assert_eq!(first, second);
    }
}
