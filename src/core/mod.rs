pub mod aggregator;
pub mod merge;
pub mod retry;
pub mod supplier_client;

pub use crate::domain::model::{
    AggregationRequest, CarType, Coordinates, Offer, Supplier, SupplierFailure, SupplierOutcome,
};
pub use crate::domain::ports::{RawResponse, Transport, TransportError};
pub use crate::utils::error::Result;
