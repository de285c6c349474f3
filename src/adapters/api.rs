//! # HTTP API
//!
//! `GET /api?pickup=<lat,long>&dropoff=<lat,long>&passengers=<1-16>[&pretty]`
//!
//! Answers `{"options":[...]}` with the aggregated offers, or a 400 error
//! body describing the first validation problem. Every other path is a 404.

use crate::core::aggregator::Aggregator;
use crate::domain::model::{Offer, Supplier};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use crate::utils::validation::validate_query;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;

pub const API_PATH: &str = "/api";
const CACHE_CONTROL_VALUE: &str = "private, no-cache, no-store, must-revalidate";
const PRETTY_INDENT: &[u8] = b"   ";

pub struct AppState<T: Transport + 'static> {
    pub aggregator: Aggregator<T>,
    pub suppliers: Arc<Vec<Supplier>>,
}

impl<T: Transport + 'static> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            aggregator: self.aggregator.clone(),
            suppliers: Arc::clone(&self.suppliers),
        }
    }
}

impl<T: Transport + 'static> AppState<T> {
    pub fn new(aggregator: Aggregator<T>, suppliers: Vec<Supplier>) -> Self {
        Self {
            aggregator,
            suppliers: Arc::new(suppliers),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    pub pickup: Option<String>,
    pub dropoff: Option<String>,
    pub passengers: Option<String>,
    pub pretty: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct OptionsResponse {
    pub options: Vec<Offer>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl ErrorResponse {
    fn bad_request(message: String) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            status: StatusCode::BAD_REQUEST.as_u16(),
            error: "Bad Request".to_string(),
            message,
            path: API_PATH.to_string(),
        }
    }
}

pub fn create_router<T: Transport + 'static>(state: AppState<T>) -> Router {
    Router::new()
        .route(API_PATH, get(get_quotes::<T>))
        .with_state(state)
}

pub async fn serve<T: Transport + 'static>(listener: TcpListener, state: AppState<T>) -> Result<()> {
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

async fn get_quotes<T: Transport + 'static>(
    State(state): State<AppState<T>>,
    Query(params): Query<QuoteParams>,
) -> Response {
    let pretty = params.pretty.is_some();

    let request = match validate_query(
        params.pickup.as_deref(),
        params.dropoff.as_deref(),
        params.passengers.as_deref(),
    ) {
        Ok(request) => request,
        Err(e) => {
            tracing::info!("Rejected quote request: {}", e);
            let body = ErrorResponse::bad_request(e.user_friendly_message());
            return json_response(StatusCode::BAD_REQUEST, &body, pretty);
        }
    };

    let options = state.aggregator.aggregate(request, &state.suppliers).await;
    json_response(StatusCode::OK, &OptionsResponse { options }, pretty)
}

fn json_response<S: Serialize>(status: StatusCode, body: &S, pretty: bool) -> Response {
    match to_json(body, pretty) {
        Ok(text) => (
            status,
            [
                (header::CONTENT_TYPE, "application/json"),
                (header::CACHE_CONTROL, CACHE_CONTROL_VALUE),
            ],
            text,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("❌ Failed to encode response: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// pretty 模式縮排三個空白
fn to_json<S: Serialize>(value: &S, pretty: bool) -> serde_json::Result<String> {
    if !pretty {
        return serde_json::to_string(value);
    }

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(PRETTY_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
