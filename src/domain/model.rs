use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 車型分類，也是合併時的鍵
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarType {
    Standard,
    Executive,
    Luxury,
    PeopleCarrier,
    LuxuryPeopleCarrier,
    Minibus,
}

impl CarType {
    pub const ALL: [CarType; 6] = [
        CarType::Standard,
        CarType::Executive,
        CarType::Luxury,
        CarType::PeopleCarrier,
        CarType::LuxuryPeopleCarrier,
        CarType::Minibus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CarType::Standard => "STANDARD",
            CarType::Executive => "EXECUTIVE",
            CarType::Luxury => "LUXURY",
            CarType::PeopleCarrier => "PEOPLE_CARRIER",
            CarType::LuxuryPeopleCarrier => "LUXURY_PEOPLE_CARRIER",
            CarType::Minibus => "MINIBUS",
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CarType::ALL
            .iter()
            .copied()
            .find(|car_type| car_type.as_str() == s)
            .ok_or_else(|| format!("Unknown car type: {}", s))
    }
}

/// 單一供應商對單一車型的報價，建立後不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub car_type: CarType,
    pub supplier: String,
    pub price: u64,
}

impl Offer {
    pub fn new(car_type: CarType, supplier: impl Into<String>, price: u64) -> Self {
        Self {
            car_type,
            supplier: supplier.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Rendered as `lat,long`, the form suppliers expect in the query string.
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// 已驗證的查詢：座標格式正確、乘客數在 1..=16
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregationRequest {
    pub pickup: Coordinates,
    pub dropoff: Coordinates,
    pub passengers: u8,
}

impl AggregationRequest {
    pub fn new(pickup: Coordinates, dropoff: Coordinates, passengers: u8) -> Self {
        Self {
            pickup,
            dropoff,
            passengers,
        }
    }
}

/// A configured supplier backend. `label` is what offers are attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub label: String,
    pub endpoint: String,
}

impl Supplier {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            endpoint: endpoint.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SupplierFailure {
    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    #[error("Unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Supplier task aborted: {0}")]
    TaskAborted(String),
}

/// 每個供應商呼叫的終結狀態，合併步驟只消費一次
#[derive(Debug, Clone, PartialEq)]
pub enum SupplierOutcome {
    Success(Vec<Offer>),
    Failure(SupplierFailure),
}

impl SupplierOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SupplierOutcome::Success(_))
    }

    /// Offers contributed by this outcome; a failure contributes none.
    pub fn into_offers(self) -> Vec<Offer> {
        match self {
            SupplierOutcome::Success(offers) => offers,
            SupplierOutcome::Failure(_) => Vec::new(),
        }
    }
}
