// src/sample_data.rs
// Bundled dataset served in offline mode so the editor can be exercised
// without a running backend.

use chrono::Utc;

use crate::rules::definitions::{
    BenefitType, EffectiveDateBasis, EmployerMatrixItemRaw, FunctionalCategory, MatrixLogEntry,
    MemberChangeType,
};

const SAMPLE_EMPLOYER_ID: &str = "demo-employer";

pub fn sample_benefit_types() -> Vec<BenefitType> {
    [
        ("bt-medical", "medical", "Medical"),
        ("bt-dental", "dental", "Dental"),
        ("bt-vision", "vision", "Vision"),
        ("bt-hsa", "hsa", "HSA"),
    ]
    .into_iter()
    .map(|(id, key, title)| BenefitType {
        id: id.to_string(),
        key: key.to_string(),
        name: key.to_string(),
        title: title.to_string(),
    })
    .collect()
}

pub fn sample_member_change_types() -> Vec<MemberChangeType> {
    [
        ("mct-marriage", "marriage", "Marriage", FunctionalCategory::DependentAdd),
        ("mct-birth", "birth", "Birth or adoption", FunctionalCategory::DependentAdd),
        ("mct-divorce", "divorce", "Divorce", FunctionalCategory::DependentDrop),
        (
            "mct-dependent-aged-out",
            "dependent_aged_out",
            "Dependent aged out",
            FunctionalCategory::DependentDrop,
        ),
        ("mct-new-hire", "new_hire", "New hire", FunctionalCategory::EmployeeAdd),
        ("mct-rehire", "rehire", "Rehire", FunctionalCategory::EmployeeAdd),
        ("mct-job-loss", "job_loss", "Loss of employment", FunctionalCategory::EmployeeDrop),
        ("mct-relocation", "relocation", "Relocation", FunctionalCategory::Other),
        (
            "mct-retro-adjustment",
            "retro_adjustment",
            "Retroactive adjustment",
            FunctionalCategory::NotInMatrix,
        ),
    ]
    .into_iter()
    .map(|(id, name, description, functional_category)| MemberChangeType {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        functional_category,
    })
    .collect()
}

/// Raw matrix rows as the backend would return them. Every rule keeps a
/// single basis/offset pair across its rows.
pub fn sample_employer_matrix() -> Vec<EmployerMatrixItemRaw> {
    let rules: [(&str, &str, EffectiveDateBasis, u32, &[(&str, bool)]); 6] = [
        (
            "mct-marriage",
            "Marriage",
            EffectiveDateBasis::EventEffectiveDate,
            0,
            &[("medical", true), ("dental", true), ("vision", true), ("hsa", false)],
        ),
        (
            "mct-birth",
            "Birth or adoption",
            EffectiveDateBasis::EventEffectiveDate,
            30,
            &[("medical", true), ("dental", true), ("vision", false)],
        ),
        (
            "mct-divorce",
            "Divorce",
            EffectiveDateBasis::FirstOfFollowingMonth,
            0,
            &[("medical", true), ("dental", false)],
        ),
        (
            "mct-new-hire",
            "New hire",
            EffectiveDateBasis::FirstOfFollowingMonth,
            30,
            &[("medical", true), ("dental", true), ("vision", true), ("hsa", true)],
        ),
        (
            "mct-job-loss",
            "Loss of employment",
            EffectiveDateBasis::EventEffectiveDate,
            60,
            &[("medical", true), ("dental", true)],
        ),
        (
            "mct-relocation",
            "Relocation",
            EffectiveDateBasis::FirstOfFollowingMonth,
            60,
            &[("medical", true)],
        ),
    ];

    let mut matrix = Vec::new();
    for (change_type_id, description, basis, offset_days, benefits) in rules {
        for (benefit_key, is_enabled) in benefits {
            matrix.push(EmployerMatrixItemRaw {
                employer_matrix_item_id: Some(format!("{}--{}", change_type_id, benefit_key)),
                employer_id: Some(SAMPLE_EMPLOYER_ID.to_string()),
                member_change_type_id: change_type_id.to_string(),
                benefit_type_name: benefit_key.to_string(),
                is_enabled: *is_enabled,
                effective_date_mode: basis,
                effective_date_offset: offset_days,
                created_at: Some("2024-03-01T09:30:00Z".to_string()),
                member_change_type_description: Some(description.to_string()),
            });
        }
    }
    matrix
}

pub fn sample_matrix_log() -> MatrixLogEntry {
    MatrixLogEntry {
        created_at: Some(Utc::now().to_rfc3339()),
        edited_by: Some("sample.data@example.com".to_string()),
    }
}
