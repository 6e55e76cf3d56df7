//! # Lifecycle Flows
//!
//! The batch → product → trace → seal progression, id sequencing, public
//! reads, and the observable event stream.

#[cfg(test)]
mod tests {
    use crate::integration::TestLedger;
    use std::sync::Arc;
    use vt_ledger::prelude::*;

    fn alice() -> Identity {
        Identity::from_low_u64(0x0A)
    }

    fn bob() -> Identity {
        Identity::from_low_u64(0x0B)
    }

    /// The canonical walkthrough: owner grants roles, A manufactures, B
    /// tracks, A seals.
    #[tokio::test]
    async fn test_full_supply_chain_walkthrough() -> anyhow::Result<()> {
        let ledger = TestLedger::new();
        let owner = TestLedger::owner();

        ledger.service.grant_manufacturer(owner, alice()).await?;
        ledger.service.grant_tracker(owner, bob()).await?;

        // A creates batch 1
        let batch = ledger.service.create_batch(alice(), 5, 100).await?;
        assert_eq!(batch, 1);
        let info = ledger.service.get_batch_info(batch).await?;
        assert!(!info.sealed);
        assert_eq!(info.owner, alice());
        assert_eq!(info.product_count, 0);

        // A registers product 1
        let product = ledger
            .service
            .register_product(alice(), 42, 95, 1000, batch, "Electronics".into())
            .await?;
        assert_eq!(product, 1);
        let info = ledger.service.get_product_info(product).await?;
        assert_eq!(info.manufacturer, alice());
        assert_eq!(info.batch_id, batch);
        assert_eq!(info.category, "Electronics");
        assert_eq!(info.trace_record_count, 0);
        assert!(ledger.service.verify_authenticity(product).await?);

        // B appends a passing quality check
        ledger
            .service
            .add_trace_record(bob(), product, 7, 3, true, "shipped".into())
            .await?;
        assert_eq!(ledger.service.get_trace_record_count(product).await?, 1);
        let trace = ledger.service.get_public_trace_info(product, 0).await?;
        assert_eq!(trace.recorder, bob());
        assert_eq!(trace.event_type, "shipped");

        // A seals the batch; registration under it is now closed for good
        ledger.service.seal_batch(alice(), batch).await?;
        assert_eq!(
            ledger
                .service
                .register_product(alice(), 43, 90, 1100, batch, "Electronics".into())
                .await,
            Err(LedgerError::BatchSealed(batch))
        );
        assert!(ledger.service.get_batch_info(batch).await?.sealed);
        Ok(())
    }

    /// Store that refuses every call, to prove an outage surfaces as an
    /// error without leaving partial ledger state behind.
    struct UnavailableStore;

    #[async_trait::async_trait]
    impl ConfidentialValueStore for UnavailableStore {
        async fn encrypt(&self, _value: PlainWord) -> Result<CipherHandle, StoreError> {
            Err(StoreError::Unavailable)
        }

        async fn grant_access(
            &self,
            _handle: CipherHandle,
            _identity: Identity,
        ) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }

        async fn request_reveal(
            &self,
            _handles: &[CipherHandle],
        ) -> Result<RevealRequestId, StoreError> {
            Err(StoreError::Unavailable)
        }

        async fn verify_reveal(
            &self,
            _request_id: RevealRequestId,
            _values: &[PlainWord],
            _proof: &RevealProof,
        ) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn test_store_outage_surfaces_and_consumes_nothing() {
        let owner = TestLedger::owner();
        let config = LedgerConfig::new(owner, Identity::from_low_u64(0xC0));
        let time = Arc::new(ManualTimeSource::new(TestLedger::START));
        let service = LedgerService::new(config, Arc::new(UnavailableStore), time);
        service.grant_manufacturer(owner, alice()).await.unwrap();

        assert_eq!(
            service.create_batch(alice(), 1, 1).await,
            Err(LedgerError::Store(StoreError::Unavailable))
        );
        // nothing was admitted: no id, no batch, no event
        assert_eq!(service.batch_count().await, 0);
        assert!(service.take_events().await.is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_dense_across_entities() {
        let ledger = TestLedger::new();
        let owner = TestLedger::owner();
        ledger
            .service
            .grant_manufacturer(owner, alice())
            .await
            .unwrap();

        let first = ledger.service.create_batch(alice(), 1, 1).await.unwrap();
        let second = ledger.service.create_batch(alice(), 2, 2).await.unwrap();
        assert_eq!((first, second), (1, 2));

        // product ids are global across batches
        let p1 = ledger
            .service
            .register_product(alice(), 1, 50, 10, first, "Food".into())
            .await
            .unwrap();
        let p2 = ledger
            .service
            .register_product(alice(), 2, 60, 20, second, "Food".into())
            .await
            .unwrap();
        let p3 = ledger
            .service
            .register_product(alice(), 3, 70, 30, first, "Food".into())
            .await
            .unwrap();
        assert_eq!((p1, p2, p3), (1, 2, 3));

        assert_eq!(ledger.service.batch_count().await, 2);
        assert_eq!(ledger.service.product_count().await, 3);
        assert_eq!(
            ledger.service.get_batch_info(first).await.unwrap().product_count,
            2
        );
    }

    #[tokio::test]
    async fn test_trace_history_is_ordered_and_stable() {
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

        let labels = ["received", "inspected", "shipped", "delivered"];
        for (i, label) in labels.iter().enumerate() {
            ledger.time.advance(3600);
            ledger
                .service
                .add_trace_record(bob(), product, i as u64, i as u64, false, (*label).into())
                .await
                .unwrap();
        }

        assert_eq!(
            ledger.service.get_trace_record_count(product).await.unwrap(),
            labels.len() as u64
        );
        for (i, label) in labels.iter().enumerate() {
            let info = ledger
                .service
                .get_public_trace_info(product, i as u64)
                .await
                .unwrap();
            assert_eq!(info.event_type, *label);
            assert_eq!(info.recorder, bob());
        }
        assert!(matches!(
            ledger
                .service
                .get_public_trace_info(product, labels.len() as u64)
                .await,
            Err(LedgerError::IndexOutOfRange { .. })
        ));
    }

    #[tokio::test]
    async fn test_event_stream_matches_admission_order() {
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
            .add_trace_record(bob(), product, 1, 1, true, "inspected".into())
            .await
            .unwrap();
        ledger.service.seal_batch(alice(), batch).await.unwrap();

        let events = ledger.service.take_events().await;
        let expected = [
            LedgerEvent::BatchCreated(BatchCreatedPayload {
                batch_id: batch,
                owner: alice(),
            }),
            LedgerEvent::ProductRegistered(ProductRegisteredPayload {
                product_id: product,
                manufacturer: alice(),
                batch_id: batch,
            }),
            LedgerEvent::TraceRecordAdded(TraceRecordAddedPayload {
                product_id: product,
                recorder: bob(),
                event_type: "inspected".into(),
            }),
            LedgerEvent::QualityCheckPerformed(QualityCheckPerformedPayload {
                product_id: product,
                checker: bob(),
            }),
            LedgerEvent::BatchSealed(BatchSealedPayload { batch_id: batch }),
        ];
        assert_eq!(events, expected);
    }

    /// Public reads expose exactly the plaintext subset; a serialized view
    /// of every public result must not contain a cipher handle.
    #[tokio::test]
    async fn test_public_reads_never_leak_handles() {
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
        ledger
            .service
            .add_trace_record(bob(), product, 7, 3, true, "shipped".into())
            .await
            .unwrap();

        let batch_json =
            serde_json::to_value(ledger.service.get_batch_info(batch).await.unwrap()).unwrap();
        let product_json =
            serde_json::to_value(ledger.service.get_product_info(product).await.unwrap()).unwrap();
        let trace_json = serde_json::to_value(
            ledger
                .service
                .get_public_trace_info(product, 0)
                .await
                .unwrap(),
        )
        .unwrap();

        for view in [&batch_json, &product_json, &trace_json] {
            let text = view.to_string();
            // confidential inputs and their field names are absent
            for needle in [
                "supplier_count",
                "quality_score",
                "cost",
                "handler_id",
                "location_id",
                "secrets",
                "handle",
            ] {
                assert!(
                    !text.contains(needle),
                    "public view leaked `{needle}`: {text}"
                );
            }
        }
    }
}
