use crate::core::retry::{should_retry, AttemptOutcome, MAX_ATTEMPTS};
use crate::domain::model::{
    AggregationRequest, CarType, Coordinates, Offer, Supplier, SupplierFailure, SupplierOutcome,
};
use crate::domain::ports::{RawResponse, Transport, TransportError};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// 參考行為中的每次呼叫逾時
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

const HTTP_OK: u16 = 200;

/// 只要求 options 陣列存在；個別項目逐一檢查
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    options: Vec<Value>,
}

pub struct SupplierClient<T: Transport> {
    transport: T,
    timeout: Duration,
}

impl<T: Transport> SupplierClient<T> {
    pub fn new(transport: T, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    pub fn with_default_timeout(transport: T) -> Self {
        Self::new(transport, Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn fetch_for(
        &self,
        supplier: &Supplier,
        request: &AggregationRequest,
    ) -> SupplierOutcome {
        self.fetch_quotes(supplier, &request.pickup, &request.dropoff)
            .await
    }

    /// Requests quotes from one supplier, retrying at most once on a
    /// server-side failure. Broken supplier output becomes a `Failure`.
    pub async fn fetch_quotes(
        &self,
        supplier: &Supplier,
        pickup: &Coordinates,
        dropoff: &Coordinates,
    ) -> SupplierOutcome {
        let query = [
            ("pickup", pickup.to_string()),
            ("dropoff", dropoff.to_string()),
        ];
        let mut attempt = 1;

        loop {
            tracing::debug!(
                "Requesting quotes from {} (attempt {}/{}): {}",
                supplier.name,
                attempt,
                MAX_ATTEMPTS,
                supplier.endpoint
            );

            let response = match self.send_once(&supplier.endpoint, &query).await {
                Ok(response) => response,
                // 沒有回應時重試策略一律回傳 false，不重試
                Err(err) => return SupplierOutcome::Failure(self.transport_failure(err)),
            };

            tracing::debug!("{} responded with status {}", supplier.name, response.status);

            // 非 JSON 的回應體視為沒有內容
            let body = serde_json::from_str::<Value>(&response.body).ok();

            if attempt < MAX_ATTEMPTS
                && should_retry(&AttemptOutcome::new(Some(response.status), body.as_ref()))
            {
                tracing::info!("🔁 {} reported a server error, retrying once", supplier.name);
                attempt += 1;
                continue;
            }

            return match (response.status, body) {
                (HTTP_OK, Some(body)) => parse_offers(body, &supplier.label),
                (HTTP_OK, None) => SupplierOutcome::Failure(SupplierFailure::MalformedResponse(
                    "body is not valid JSON".to_string(),
                )),
                (status, _) => SupplierOutcome::Failure(SupplierFailure::UnexpectedStatus(status)),
            };
        }
    }

    async fn send_once(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<RawResponse, TransportError> {
        match tokio::time::timeout(self.timeout, self.transport.send(url, query, self.timeout))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout),
        }
    }

    fn transport_failure(&self, err: TransportError) -> SupplierFailure {
        match err {
            TransportError::Timeout => SupplierFailure::Timeout(self.timeout.as_millis() as u64),
            TransportError::Connection(message) => SupplierFailure::TransportError(message),
        }
    }
}

/// 解析 200 回應中的 options 陣列
fn parse_offers(body: Value, supplier_label: &str) -> SupplierOutcome {
    let response: QuoteResponse = match serde_json::from_value(body) {
        Ok(response) => response,
        Err(e) => {
            return SupplierOutcome::Failure(SupplierFailure::MalformedResponse(e.to_string()))
        }
    };

    let offers = response
        .options
        .iter()
        .filter_map(|option| match parse_option(option, supplier_label) {
            Ok(offer) => Some(offer),
            Err(reason) => {
                // 壞掉的項目只略過自己，不影響同一供應商的其他報價
                tracing::warn!("Skipping option from {}: {}", supplier_label, reason);
                None
            }
        })
        .collect();

    SupplierOutcome::Success(offers)
}

fn parse_option(option: &Value, supplier_label: &str) -> std::result::Result<Offer, String> {
    let car_type = option
        .get("car_type")
        .and_then(Value::as_str)
        .ok_or_else(|| format!("missing car_type in {}", option))?
        .parse::<CarType>()?;

    let price = option
        .get("price")
        .and_then(Value::as_u64)
        .ok_or_else(|| format!("price must be a non-negative integer in {}", option))?;

    Ok(Offer::new(car_type, supplier_label, price))
}
