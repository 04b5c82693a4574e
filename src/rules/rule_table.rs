// src/rules/rule_table.rs
// Derived lookup table the matrix grid renders from. Rebuilt from the
// current row list on demand, never persisted or mutated in place.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use super::definitions::{EffectiveDateMode, EmployerMatrixItem, MemberChangeType};

/// Benefit key -> enabled flag for one rule.
pub type BenefitEnabledMap = BTreeMap<String, bool>;

/// One rule of the matrix, grouped under its member-change-type description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTableRow {
    pub member_change_type_name: String,
    pub member_change_type_description: String,
    pub effective_date_mode: EffectiveDateMode,
    pub benefit_enabled: BenefitEnabledMap,
}

/// Member-change-type description -> rule row. A missing key means "no rule
/// configured for this change type"; renderers fall back to
/// [`EffectiveDateMode::EventEffectiveDate`] for such types.
pub type RuleTable = BTreeMap<String, RuleTableRow>;

/// Folds the flat matrix row list into the nested rule table.
///
/// The first row seen for a description seeds the entry (including the rule's
/// effective-date mode); later rows for the same description only add or
/// overwrite the enabled flag for their own benefit key. The member-change
/// type name is resolved by id against the reference list and left empty when
/// the id is unknown.
pub fn build_rule_table(
    employer_matrix: &[EmployerMatrixItem],
    member_change_types: &[MemberChangeType],
) -> RuleTable {
    let mut table = RuleTable::new();

    for item in employer_matrix {
        let description = item
            .member_change_type_description
            .clone()
            .unwrap_or_default();

        match table.entry(description) {
            Entry::Occupied(mut entry) => {
                entry
                    .get_mut()
                    .benefit_enabled
                    .insert(item.benefit_type_name.clone(), item.is_enabled);
            }
            Entry::Vacant(entry) => {
                let member_change_type_name = member_change_types
                    .iter()
                    .find(|change_type| change_type.id == item.member_change_type_id)
                    .map(|change_type| change_type.name.clone())
                    .unwrap_or_default();

                let member_change_type_description = entry.key().clone();
                entry.insert(RuleTableRow {
                    member_change_type_name,
                    member_change_type_description,
                    effective_date_mode: item.effective_date_mode,
                    benefit_enabled: BenefitEnabledMap::from([(
                        item.benefit_type_name.clone(),
                        item.is_enabled,
                    )]),
                });
            }
        }
    }

    table
}
