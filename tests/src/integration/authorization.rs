//! # Authorization Scenarios
//!
//! Role gates on every mutation, prospective-only revocation, and the
//! no-id-consumed-on-failure property.

#[cfg(test)]
mod tests {
    use crate::integration::TestLedger;
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

    #[tokio::test]
    async fn test_roles_start_empty_and_owner_is_implicit() {
        let ledger = TestLedger::new();
        let owner = TestLedger::owner();

        assert!(ledger.service.is_owner(owner).await);
        assert!(ledger.service.is_manufacturer(owner).await);
        assert!(ledger.service.is_tracker(owner).await);

        assert!(!ledger.service.is_manufacturer(alice()).await);
        assert!(!ledger.service.is_tracker(alice()).await);
    }

    #[tokio::test]
    async fn test_only_owner_administers_roles() {
        let ledger = TestLedger::new();

        // nobody can self-register
        assert_eq!(
            ledger.service.grant_manufacturer(mallory(), mallory()).await,
            Err(LedgerError::Unauthorized)
        );
        // nor can a role holder promote others
        ledger
            .service
            .grant_manufacturer(TestLedger::owner(), alice())
            .await
            .unwrap();
        assert_eq!(
            ledger.service.grant_manufacturer(alice(), bob()).await,
            Err(LedgerError::Unauthorized)
        );
        assert_eq!(
            ledger.service.revoke_manufacturer(alice(), alice()).await,
            Err(LedgerError::Unauthorized)
        );
        assert!(!ledger.service.is_manufacturer(bob()).await);
    }

    #[tokio::test]
    async fn test_unauthorized_mutations_leave_no_trace() {
        let ledger = TestLedger::new();
        let owner = TestLedger::owner();

        // C was never granted anything: every mutation is refused...
        assert_eq!(
            ledger.service.create_batch(mallory(), 5, 100).await,
            Err(LedgerError::Unauthorized)
        );
        assert_eq!(ledger.service.batch_count().await, 0);

        // ...and no id was consumed: A's first batch is 1, not 2
        ledger
            .service
            .grant_manufacturer(owner, alice())
            .await
            .unwrap();
        let batch = ledger.service.create_batch(alice(), 5, 100).await.unwrap();
        assert_eq!(batch, 1);

        // a rejected registration likewise leaves the event log untouched
        let events_before = ledger.service.take_events().await.len();
        assert!(events_before > 0);
        assert_eq!(
            ledger
                .service
                .register_product(mallory(), 1, 50, 10, batch, "Food".into())
                .await,
            Err(LedgerError::Unauthorized)
        );
        assert!(ledger.service.take_events().await.is_empty());
    }

    #[tokio::test]
    async fn test_revocation_is_immediate_and_prospective() {
        let ledger = TestLedger::new();
        let owner = TestLedger::owner();
        ledger
            .service
            .grant_manufacturer(owner, alice())
            .await
            .unwrap();
        ledger.service.grant_tracker(owner, bob()).await.unwrap();

        let batch = ledger.service.create_batch(alice(), 1, 1).await.unwrap();
        let product = ledger
            .service
            .register_product(alice(), 1, 50, 10, batch, "Food".into())
            .await
            .unwrap();
        ledger
            .service
            .add_trace_record(bob(), product, 1, 1, false, "received".into())
            .await
            .unwrap();

        ledger
            .service
            .revoke_manufacturer(owner, alice())
            .await
            .unwrap();
        ledger.service.revoke_tracker(owner, bob()).await.unwrap();

        // every subsequent role-gated call fails
        assert_eq!(
            ledger.service.create_batch(alice(), 1, 1).await,
            Err(LedgerError::Unauthorized)
        );
        assert_eq!(
            ledger
                .service
                .register_product(alice(), 1, 50, 10, batch, "Food".into())
                .await,
            Err(LedgerError::Unauthorized)
        );
        assert_eq!(
            ledger
                .service
                .add_trace_record(bob(), product, 1, 1, false, "shipped".into())
                .await,
            Err(LedgerError::Unauthorized)
        );

        // but completed work remains valid and queryable
        assert_eq!(
            ledger.service.get_batch_info(batch).await.unwrap().owner,
            alice()
        );
        assert_eq!(
            ledger
                .service
                .get_product_info(product)
                .await
                .unwrap()
                .manufacturer,
            alice()
        );
        assert_eq!(
            ledger.service.get_trace_record_count(product).await.unwrap(),
            1
        );

        // and a re-grant restores the role
        ledger
            .service
            .grant_manufacturer(owner, alice())
            .await
            .unwrap();
        ledger.service.create_batch(alice(), 1, 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_manufacturer_cannot_register_into_foreign_batch() {
        let ledger = TestLedger::new();
        let owner = TestLedger::owner();
        ledger
            .service
            .grant_manufacturer(owner, alice())
            .await
            .unwrap();
        ledger
            .service
            .grant_manufacturer(owner, bob())
            .await
            .unwrap();

        let batch = ledger.service.create_batch(alice(), 1, 1).await.unwrap();
        assert_eq!(
            ledger
                .service
                .register_product(bob(), 1, 50, 10, batch, "Food".into())
                .await,
            Err(LedgerError::NotBatchOwner(batch))
        );
        // sealing someone else's batch is refused the same way
        assert_eq!(
            ledger.service.seal_batch(bob(), batch).await,
            Err(LedgerError::NotBatchOwner(batch))
        );
    }

    #[tokio::test]
    async fn test_roles_are_independent() {
        let ledger = TestLedger::new();
        let owner = TestLedger::owner();
        ledger
            .service
            .grant_manufacturer(owner, alice())
            .await
            .unwrap();
        ledger.service.grant_tracker(owner, bob()).await.unwrap();

        let batch = ledger.service.create_batch(alice(), 1, 1).await.unwrap();
        let product = ledger
            .service
            .register_product(alice(), 1, 50, 10, batch, "Food".into())
            .await
            .unwrap();

        // a tracker cannot manufacture
        assert_eq!(
            ledger.service.create_batch(bob(), 1, 1).await,
            Err(LedgerError::Unauthorized)
        );
        // a manufacturer cannot track
        assert_eq!(
            ledger
                .service
                .add_trace_record(alice(), product, 1, 1, false, "shipped".into())
                .await,
            Err(LedgerError::Unauthorized)
        );
    }
}
