//! # Decryption Protocol Scenarios
//!
//! The asynchronous reveal boundary: request now, plaintexts later, proofs
//! checked on arrival, replays ignored.

#[cfg(test)]
mod tests {
    use crate::integration::TestLedger;
    use uuid::Uuid;
    use vt_ledger::prelude::*;

    fn alice() -> Identity {
        Identity::from_low_u64(0x0A)
    }

    fn bob() -> Identity {
        Identity::from_low_u64(0x0B)
    }

    fn mallory() -> Identity {
        Identity::from_low_u64(0xBAD)
    }

    /// Set up a ledger with one registered product and return its id.
    async fn ledger_with_product() -> (TestLedger, ProductId) {
        let ledger = TestLedger::new();
        let owner = TestLedger::owner();
        ledger
            .service
            .grant_manufacturer(owner, alice())
            .await
            .unwrap();
        ledger.service.grant_tracker(owner, bob()).await.unwrap();
        let batch = ledger.service.create_batch(alice(), 5, 100).await.unwrap();
        let product = ledger
            .service
            .register_product(alice(), 42, 95, 1000, batch, "Electronics".into())
            .await
            .unwrap();
        (ledger, product)
    }

    #[tokio::test]
    async fn test_request_returns_before_reveal_arrives() {
        let (ledger, product) = ledger_with_product().await;

        let request_id = ledger
            .service
            .request_decryption(alice(), product)
            .await
            .unwrap();

        // the request is queued at the store, nothing revealed yet
        assert_eq!(ledger.store.pending_reveal_count(), 1);
        assert_eq!(
            ledger
                .service
                .decryption_result(alice(), request_id)
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_reveal_delivers_registration_inputs() {
        let (ledger, product) = ledger_with_product().await;
        let request_id = ledger
            .service
            .request_decryption(alice(), product)
            .await
            .unwrap();

        let ticket = ledger.store.complete_next_reveal().unwrap();
        ledger.service.process_decryption(ticket).await.unwrap();

        let fields = ledger
            .service
            .decryption_result(alice(), request_id)
            .await
            .unwrap()
            .expect("reveal completed");
        assert_eq!(fields.manufacturer_id, 42);
        assert_eq!(fields.produced_at, TestLedger::START);
        assert_eq!(fields.quality_score, 95);
        assert_eq!(fields.cost, 1000);
    }

    #[tokio::test]
    async fn test_every_authorized_party_may_request() {
        let (ledger, product) = ledger_with_product().await;

        // manufacturer of the product, the owner, and a tracker
        for caller in [alice(), TestLedger::owner(), bob()] {
            ledger
                .service
                .request_decryption(caller, product)
                .await
                .unwrap();
        }
        // an identity with no role and no product is refused
        assert_eq!(
            ledger.service.request_decryption(mallory(), product).await,
            Err(LedgerError::Unauthorized)
        );
        assert_eq!(ledger.store.pending_reveal_count(), 3);
    }

    #[tokio::test]
    async fn test_results_are_private_to_each_requester() {
        let (ledger, product) = ledger_with_product().await;

        let by_alice = ledger
            .service
            .request_decryption(alice(), product)
            .await
            .unwrap();
        let by_bob = ledger
            .service
            .request_decryption(bob(), product)
            .await
            .unwrap();

        while let Some(ticket) = ledger.store.complete_next_reveal() {
            ledger.service.process_decryption(ticket).await.unwrap();
        }

        // each requester reads their own result and nobody else's
        assert!(ledger
            .service
            .decryption_result(alice(), by_alice)
            .await
            .unwrap()
            .is_some());
        assert!(ledger
            .service
            .decryption_result(bob(), by_bob)
            .await
            .unwrap()
            .is_some());
        assert_eq!(
            ledger.service.decryption_result(alice(), by_bob).await,
            Err(LedgerError::Unauthorized)
        );
        assert_eq!(
            ledger.service.decryption_result(mallory(), by_alice).await,
            Err(LedgerError::Unauthorized)
        );
    }

    #[tokio::test]
    async fn test_tampered_ticket_is_rejected() {
        let (ledger, product) = ledger_with_product().await;
        let request_id = ledger
            .service
            .request_decryption(alice(), product)
            .await
            .unwrap();

        let mut ticket = ledger.store.complete_next_reveal().unwrap();
        ticket.values[2] = 100; // inflate the quality score
        assert_eq!(
            ledger.service.process_decryption(ticket).await,
            Err(LedgerError::DecryptionProofInvalid(request_id))
        );

        // the request is still pending and can be completed by an honest
        // delivery later; the handles did not change
        assert_eq!(
            ledger
                .service
                .decryption_result(alice(), request_id)
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_forged_proof_is_rejected() {
        let (ledger, product) = ledger_with_product().await;
        let request_id = ledger
            .service
            .request_decryption(alice(), product)
            .await
            .unwrap();

        let mut ticket = ledger.store.complete_next_reveal().unwrap();
        ticket.proof = RevealProof(vec![0u8; 32]);
        assert_eq!(
            ledger.service.process_decryption(ticket).await,
            Err(LedgerError::DecryptionProofInvalid(request_id))
        );
    }

    #[tokio::test]
    async fn test_replayed_completion_is_harmless() {
        let (ledger, product) = ledger_with_product().await;
        let request_id = ledger
            .service
            .request_decryption(alice(), product)
            .await
            .unwrap();

        let ticket = ledger.store.complete_next_reveal().unwrap();
        ledger
            .service
            .process_decryption(ticket.clone())
            .await
            .unwrap();
        let first = ledger
            .service
            .decryption_result(alice(), request_id)
            .await
            .unwrap();

        // the store redelivers; the ledger shrugs
        ledger.service.process_decryption(ticket).await.unwrap();
        let second = ledger
            .service
            .decryption_result(alice(), request_id)
            .await
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(ledger.service.stats().await.decryptions_completed, 1);
    }

    #[tokio::test]
    async fn test_completion_for_foreign_request_is_ignored() {
        let (ledger, product) = ledger_with_product().await;
        ledger
            .service
            .request_decryption(alice(), product)
            .await
            .unwrap();

        let mut ticket = ledger.store.complete_next_reveal().unwrap();
        ticket.request_id = Uuid::new_v4();
        // unknown correlation id: accepted and dropped, not an error
        ledger.service.process_decryption(ticket).await.unwrap();
        assert_eq!(ledger.service.stats().await.decryptions_completed, 0);
    }
}
