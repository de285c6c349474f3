//! Fan-out / merge aggregation across the configured suppliers.
//!
//! Every supplier call runs as its own tokio task. Outcomes are buffered per
//! supplier and merged strictly after all tasks have finished, in the order
//! the suppliers were given, so completion order never affects the result.

use crate::core::merge::{MergeEffect, ResultSet};
use crate::core::supplier_client::SupplierClient;
use crate::domain::model::{AggregationRequest, Offer, Supplier, SupplierFailure, SupplierOutcome};
use crate::domain::ports::Transport;
use std::sync::Arc;

pub struct Aggregator<T: Transport + 'static> {
    client: Arc<SupplierClient<T>>,
}

impl<T: Transport + 'static> Clone for Aggregator<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<T: Transport + 'static> Aggregator<T> {
    pub fn new(client: SupplierClient<T>) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// 聚合所有供應商報價，回傳依價格遞減排序的清單
    ///
    /// Supplier failures only reduce what is returned; when nothing survives
    /// the result is an empty list rather than an error.
    pub async fn aggregate(&self, request: AggregationRequest, suppliers: &[Supplier]) -> Vec<Offer> {
        let outcomes = self.dispatch(request, suppliers).await;

        let mut results = ResultSet::new();
        for (supplier, outcome) in suppliers.iter().zip(outcomes) {
            match outcome {
                SupplierOutcome::Success(offers) => {
                    let effects = results.merge_all(offers, request.passengers);
                    tracing::debug!(
                        "Merged {} offers from {}: {} inserted, {} replaced, {} kept, {} discarded",
                        effects.len(),
                        supplier.name,
                        count(&effects, MergeEffect::Inserted),
                        count(&effects, MergeEffect::Replaced),
                        count(&effects, MergeEffect::Kept),
                        count(&effects, MergeEffect::Discarded),
                    );
                }
                SupplierOutcome::Failure(reason) => {
                    tracing::warn!("⚠️ Supplier {} contributed no offers: {}", supplier.name, reason);
                }
            }
        }

        let offers = results.into_sorted();
        tracing::info!(
            "✅ Aggregated {} offers from {} suppliers for {} passengers",
            offers.len(),
            suppliers.len(),
            request.passengers
        );
        offers
    }

    /// 並行呼叫每個供應商，等待全部結束後依原始順序回傳結果
    pub async fn dispatch(
        &self,
        request: AggregationRequest,
        suppliers: &[Supplier],
    ) -> Vec<SupplierOutcome> {
        let mut handles = Vec::with_capacity(suppliers.len());

        for supplier in suppliers {
            let client = Arc::clone(&self.client);
            let supplier = supplier.clone();

            handles.push(tokio::spawn(async move {
                client.fetch_for(&supplier, &request).await
            }));
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => SupplierOutcome::Failure(SupplierFailure::TaskAborted(e.to_string())),
            };
            outcomes.push(outcome);
        }

        outcomes
    }
}

fn count(effects: &[MergeEffect], wanted: MergeEffect) -> usize {
    effects.iter().filter(|effect| **effect == wanted).count()
}
