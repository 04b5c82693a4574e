#[cfg(test)]
mod tests {
    use crate::rules::codec::{
        check_effective_date_consistency, decode_employer_matrix, encode_employer_matrix,
        DecodeError,
    };
    use crate::rules::definitions::{
        EffectiveDateBasis, EffectiveDateMode, EmployerMatrixItemRaw,
    };

    fn raw_item(
        member_change_type_id: &str,
        benefit_type_name: &str,
        basis: EffectiveDateBasis,
        offset_days: u32,
    ) -> EmployerMatrixItemRaw {
        EmployerMatrixItemRaw {
            employer_matrix_item_id: Some(format!(
                "{}-{}",
                member_change_type_id, benefit_type_name
            )),
            employer_id: Some("emp-1".to_string()),
            member_change_type_id: member_change_type_id.to_string(),
            benefit_type_name: benefit_type_name.to_string(),
            is_enabled: true,
            effective_date_mode: basis,
            effective_date_offset: offset_days,
            created_at: Some("2024-03-01T09:30:00Z".to_string()),
            member_change_type_description: Some("Marriage".to_string()),
        }
    }

    #[test]
    fn decode_maps_every_valid_basis_offset_pair() {
        let cases = [
            (
                EffectiveDateBasis::EventEffectiveDate,
                0,
                EffectiveDateMode::EventEffectiveDate,
            ),
            (
                EffectiveDateBasis::EventEffectiveDate,
                30,
                EffectiveDateMode::EventEffectiveDatePlus30Days,
            ),
            (
                EffectiveDateBasis::EventEffectiveDate,
                60,
                EffectiveDateMode::EventEffectiveDatePlus60Days,
            ),
            (
                EffectiveDateBasis::FirstOfFollowingMonth,
                0,
                EffectiveDateMode::FirstOfFollowingMonth,
            ),
            (
                EffectiveDateBasis::FirstOfFollowingMonth,
                30,
                EffectiveDateMode::FirstOfFollowingMonthPlus30Days,
            ),
            (
                EffectiveDateBasis::FirstOfFollowingMonth,
                60,
                EffectiveDateMode::FirstOfFollowingMonthPlus60Days,
            ),
        ];

        for (basis, offset_days, expected_mode) in cases {
            let decoded =
                decode_employer_matrix(&[raw_item("mct-a", "dental", basis, offset_days)])
                    .expect("valid pair must decode");
            assert_eq!(decoded.len(), 1);
            assert_eq!(decoded[0].effective_date_mode, expected_mode);
        }
    }

    #[test]
    fn decode_rejects_offsets_outside_the_grid() {
        for bad_offset in [1, 29, 45, 61, 90] {
            let result = decode_employer_matrix(&[raw_item(
                "mct-a",
                "dental",
                EffectiveDateBasis::EventEffectiveDate,
                bad_offset,
            )]);
            assert_eq!(
                result,
                Err(DecodeError {
                    basis: EffectiveDateBasis::EventEffectiveDate,
                    offset_days: bad_offset,
                })
            );
        }
    }

    #[test]
    fn decode_fails_the_whole_batch_on_one_malformed_row() {
        let rows = vec![
            raw_item("mct-a", "dental", EffectiveDateBasis::EventEffectiveDate, 0),
            raw_item("mct-a", "medical", EffectiveDateBasis::EventEffectiveDate, 45),
        ];
        assert!(decode_employer_matrix(&rows).is_err());
    }

    #[test]
    fn decode_preserves_order_and_passthrough_fields() {
        let rows = vec![
            raw_item("mct-a", "dental", EffectiveDateBasis::EventEffectiveDate, 30),
            raw_item(
                "mct-b",
                "medical",
                EffectiveDateBasis::FirstOfFollowingMonth,
                0,
            ),
        ];
        let decoded = decode_employer_matrix(&rows).unwrap();

        assert_eq!(decoded[0].benefit_type_name, "dental");
        assert_eq!(decoded[1].benefit_type_name, "medical");
        // The wire row id becomes the client id.
        assert_eq!(decoded[0].id.as_deref(), Some("mct-a-dental"));
        assert_eq!(decoded[0].employer_id.as_deref(), Some("emp-1"));
        assert_eq!(
            decoded[0].created_at.as_deref(),
            Some("2024-03-01T09:30:00Z")
        );
        assert_eq!(
            decoded[0].member_change_type_description.as_deref(),
            Some("Marriage")
        );
    }

    #[test]
    fn encode_decode_round_trips_every_mode() {
        for (index, mode) in EffectiveDateMode::ALL.into_iter().enumerate() {
            let raw = raw_item(
                "mct-a",
                &format!("benefit-{}", index),
                mode.basis(),
                mode.offset_days(),
            );
            let decoded = decode_employer_matrix(std::slice::from_ref(&raw)).unwrap();
            assert_eq!(decoded[0].effective_date_mode, mode);

            let re_encoded = encode_employer_matrix(&decoded).unwrap();
            assert_eq!(re_encoded, vec![raw]);

            let re_decoded = decode_employer_matrix(&re_encoded).unwrap();
            assert_eq!(re_decoded[0].effective_date_mode, mode);
        }
    }

    #[test]
    fn encode_carries_client_id_as_matrix_item_id() {
        let decoded = decode_employer_matrix(&[raw_item(
            "mct-a",
            "dental",
            EffectiveDateBasis::EventEffectiveDate,
            0,
        )])
        .unwrap();
        let encoded = encode_employer_matrix(&decoded).unwrap();
        assert_eq!(
            encoded[0].employer_matrix_item_id.as_deref(),
            Some("mct-a-dental")
        );
    }

    #[test]
    fn consistency_check_warns_without_altering_rows() {
        let rows = decode_employer_matrix(&[
            raw_item("mct-a", "dental", EffectiveDateBasis::EventEffectiveDate, 0),
            raw_item(
                "mct-a",
                "medical",
                EffectiveDateBasis::FirstOfFollowingMonth,
                30,
            ),
        ])
        .unwrap();
        let before = rows.clone();

        // Divergent modes for the same member change type: logged, not fatal.
        check_effective_date_consistency(&rows);

        assert_eq!(rows, before);
    }
}
