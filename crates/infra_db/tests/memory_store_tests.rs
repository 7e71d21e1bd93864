//! Tests for the in-memory claim store

use core_kernel::{ClaimId, CustomerId};
use domain_claims::{
    ClaimStatus, ClaimStore, NewAttachmentRecord, NewClaimRecord, NewStatusEntry, StoreError,
};
use infra_db::InMemoryClaimStore;

fn new_claim(code: &str) -> NewClaimRecord {
    NewClaimRecord {
        code: code.to_string(),
        title: "Pantalla rota".to_string(),
        description: "No enciende".to_string(),
        customer_id: CustomerId::new(7),
    }
}

#[tokio::test]
async fn test_create_assigns_ids_and_initial_entry() {
    let store = InMemoryClaimStore::new();

    let (claim, entry) = store
        .create_claim_with_entry(new_claim("CLM-00000001"), ClaimStatus::Ingresado, "alta")
        .await
        .unwrap();

    assert_eq!(claim.id, ClaimId::new(1));
    assert_eq!(claim.created_at, claim.updated_at);
    assert_eq!(entry.claim_id, claim.id);
    assert_eq!(entry.status, ClaimStatus::Ingresado);
    assert_eq!(entry.note.as_deref(), Some("alta"));
}

#[tokio::test]
async fn test_duplicate_code_is_rejected() {
    let store = InMemoryClaimStore::new();
    store
        .create_claim_with_entry(new_claim("CLM-SAME0000"), ClaimStatus::Ingresado, "alta")
        .await
        .unwrap();

    let err = store
        .create_claim_with_entry(new_claim("CLM-SAME0000"), ClaimStatus::Ingresado, "alta")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(_)));
}

#[tokio::test]
async fn test_code_lookups() {
    let store = InMemoryClaimStore::new();
    let (claim, _) = store
        .create_claim_with_entry(new_claim("CLM-12AB34CD"), ClaimStatus::Ingresado, "alta")
        .await
        .unwrap();

    assert!(store.exists_by_code("CLM-12AB34CD").await.unwrap());
    assert!(!store.exists_by_code("CLM-FFFFFFFF").await.unwrap());

    let found = store.find_by_code("CLM-12AB34CD").await.unwrap().unwrap();
    assert_eq!(found.id, claim.id);
    assert!(store.find_by_code("CLM-FFFFFFFF").await.unwrap().is_none());
}

#[tokio::test]
async fn test_append_to_unknown_claim_fails() {
    let store = InMemoryClaimStore::new();
    let err = store
        .append_entry(NewStatusEntry {
            claim_id: ClaimId::new(99),
            status: ClaimStatus::EnProceso,
            note: None,
            handler_email: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn test_entries_keep_insertion_order() {
    let store = InMemoryClaimStore::new();
    let (claim, _) = store
        .create_claim_with_entry(new_claim("CLM-00000002"), ClaimStatus::Ingresado, "alta")
        .await
        .unwrap();

    for status in [ClaimStatus::EnProceso, ClaimStatus::Escalado, ClaimStatus::Resuelto] {
        store
            .append_entry(NewStatusEntry {
                claim_id: claim.id,
                status,
                note: None,
                handler_email: None,
            })
            .await
            .unwrap();
    }

    let entries = store.entries_for(claim.id).await.unwrap();
    let statuses: Vec<ClaimStatus> = entries.iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        vec![
            ClaimStatus::Ingresado,
            ClaimStatus::EnProceso,
            ClaimStatus::Escalado,
            ClaimStatus::Resuelto,
        ]
    );
    // ids ascend in insertion order
    assert!(entries.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[tokio::test]
async fn test_attachment_requires_existing_claim() {
    let store = InMemoryClaimStore::new();
    let err = store
        .add_attachment(
            ClaimId::new(5),
            NewAttachmentRecord {
                file_name: "factura.pdf".to_string(),
                content_type: Some("application/pdf".to_string()),
                size_bytes: 1024,
                location: "/uploads/5/factura.pdf".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn test_find_all_orders_newest_first() {
    let store = InMemoryClaimStore::new();
    for code in ["CLM-0000000A", "CLM-0000000B", "CLM-0000000C"] {
        store
            .create_claim_with_entry(new_claim(code), ClaimStatus::Ingresado, "alta")
            .await
            .unwrap();
    }

    let views = store.find_all_with_entries().await.unwrap();
    assert_eq!(views.len(), 3);
    // Creation timestamps may coincide within clock resolution; the id
    // tie-break keeps newest-first deterministic.
    assert!(views
        .windows(2)
        .all(|pair| (pair[0].claim.created_at, pair[0].claim.id)
            >= (pair[1].claim.created_at, pair[1].claim.id)));
    assert!(views.iter().all(|view| view.entries.len() == 1));
}
