//! Comprehensive tests for domain_claims

use chrono::TimeZone;
use chrono::Utc;

use core_kernel::{ClaimId, StatusEntryId};
use domain_claims::{current_status, ClaimFilter, ClaimStatus, ClaimSummary, StatusEntry};
use test_utils::ClaimLedgerBuilder;

// ============================================================================
// Current-status derivation
// ============================================================================

mod derivation_tests {
    use super::*;

    #[test]
    fn test_single_entry_is_current() {
        let view = ClaimLedgerBuilder::new()
            .with_entry(ClaimStatus::Ingresado, 0)
            .build();
        assert_eq!(view.current_status(), ClaimStatus::Ingresado);
    }

    #[test]
    fn test_latest_entry_wins() {
        let view = ClaimLedgerBuilder::new()
            .with_entry(ClaimStatus::Ingresado, 0)
            .with_entry(ClaimStatus::EnProceso, 60)
            .with_entry(ClaimStatus::Resuelto, 120)
            .build();
        assert_eq!(view.current_status(), ClaimStatus::Resuelto);
    }

    #[test]
    fn test_tie_resolves_to_highest_entry_id() {
        let view = ClaimLedgerBuilder::new()
            .with_entry_at(10, ClaimStatus::Escalado, 60)
            .with_entry_at(11, ClaimStatus::Rechazado, 60)
            .build();
        assert_eq!(view.current_status(), ClaimStatus::Rechazado);
    }

    #[test]
    fn test_empty_ledger_defaults_to_ingresado() {
        let view = ClaimLedgerBuilder::new().build();
        assert_eq!(view.current_status(), ClaimStatus::Ingresado);
    }

    proptest::proptest! {
        /// The derived status always matches the entry with the maximum
        /// (created_at, id) pair, no matter how the ledger is shuffled.
        #[test]
        fn prop_current_status_is_max_pair(
            offsets in proptest::collection::vec((0i64..3_600, 0usize..7), 1..20)
        ) {
            let entries: Vec<StatusEntry> = offsets
                .iter()
                .enumerate()
                .map(|(idx, (offset, status_idx))| StatusEntry {
                    id: StatusEntryId::new(idx as i64 + 1),
                    claim_id: ClaimId::new(1),
                    status: ClaimStatus::ALL[*status_idx],
                    note: None,
                    handler_email: None,
                    created_at: Utc.timestamp_opt(1_700_000_000 + offset, 0).unwrap(),
                })
                .collect();

            let expected = entries
                .iter()
                .max_by_key(|e| (e.created_at, e.id))
                .map(|e| e.status)
                .unwrap();

            proptest::prop_assert_eq!(current_status(&entries), expected);
        }
    }
}

// ============================================================================
// Filtering
// ============================================================================

mod filter_tests {
    use super::*;

    #[test]
    fn test_status_filter_uses_derived_status() {
        // Created then immediately moved on; must not match Ingresado
        let view = ClaimLedgerBuilder::new()
            .with_entry(ClaimStatus::Ingresado, 0)
            .with_entry(ClaimStatus::EnProceso, 30)
            .build();

        let by_initial = ClaimFilter {
            status: Some(ClaimStatus::Ingresado),
            search: None,
        };
        assert!(!by_initial.matches(&view));

        let by_current = ClaimFilter {
            status: Some(ClaimStatus::EnProceso),
            search: None,
        };
        assert!(by_current.matches(&view));
    }

    #[test]
    fn test_search_is_case_insensitive_over_title() {
        let view = ClaimLedgerBuilder::new()
            .with_title("Leaky Faucet")
            .with_entry(ClaimStatus::Ingresado, 0)
            .build();

        let filter = ClaimFilter {
            status: None,
            search: Some("leaky".to_string()),
        };
        assert!(filter.matches(&view));
    }

    #[test]
    fn test_search_matches_description_and_code() {
        let view = ClaimLedgerBuilder::new()
            .with_description("Kitchen sink")
            .with_code("CLM-9F8E7D6C")
            .with_entry(ClaimStatus::Ingresado, 0)
            .build();

        let by_description = ClaimFilter {
            status: None,
            search: Some("KITCHEN".to_string()),
        };
        assert!(by_description.matches(&view));

        let by_code = ClaimFilter {
            status: None,
            search: Some("9f8e".to_string()),
        };
        assert!(by_code.matches(&view));
    }

    #[test]
    fn test_blank_search_is_no_filter() {
        let view = ClaimLedgerBuilder::new()
            .with_entry(ClaimStatus::Ingresado, 0)
            .build();

        let filter = ClaimFilter {
            status: None,
            search: Some("   ".to_string()),
        };
        assert!(filter.matches(&view));
    }

    #[test]
    fn test_filters_compose_with_and() {
        let view = ClaimLedgerBuilder::new()
            .with_title("Pantalla rota")
            .with_entry(ClaimStatus::Escalado, 0)
            .build();

        let both_match = ClaimFilter {
            status: Some(ClaimStatus::Escalado),
            search: Some("pantalla".to_string()),
        };
        assert!(both_match.matches(&view));

        let status_mismatch = ClaimFilter {
            status: Some(ClaimStatus::Cerrado),
            search: Some("pantalla".to_string()),
        };
        assert!(!status_mismatch.matches(&view));

        let search_mismatch = ClaimFilter {
            status: Some(ClaimStatus::Escalado),
            search: Some("teclado".to_string()),
        };
        assert!(!search_mismatch.matches(&view));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let view = ClaimLedgerBuilder::new()
            .with_entry(ClaimStatus::Cerrado, 0)
            .build();
        assert!(ClaimFilter::default().matches(&view));
    }
}

// ============================================================================
// Views
// ============================================================================

mod view_tests {
    use super::*;

    #[test]
    fn test_summary_carries_derived_status() {
        let view = ClaimLedgerBuilder::new()
            .with_id(3)
            .with_entry(ClaimStatus::Ingresado, 0)
            .with_entry(ClaimStatus::Resuelto, 90)
            .build();

        let summary = ClaimSummary::from_ledger(&view);
        assert_eq!(summary.id, ClaimId::new(3));
        assert_eq!(summary.current_status, ClaimStatus::Resuelto);
        assert_eq!(summary.code, view.claim.code);
    }

    #[test]
    fn test_summary_serializes_symbolic_status() {
        let view = ClaimLedgerBuilder::new()
            .with_entry(ClaimStatus::PendienteInformacion, 0)
            .build();

        let json = serde_json::to_value(ClaimSummary::from_ledger(&view)).unwrap();
        assert_eq!(json["current_status"], "PENDIENTE_INFORMACION");
    }
}
