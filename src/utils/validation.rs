use crate::domain::model::{AggregationRequest, Coordinates};
use crate::utils::error::{QuoteError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

pub const MISSING_PARAMETERS: &str =
    "One or more missing parameters: pickup=<lat,long> dropoff=<lat,long> passengers=<1-16>";
pub const INVALID_PASSENGERS: &str = "Passenger number must be within 1 and 16.";
pub const INVALID_COORDINATE_FORMAT: &str = "Invalid coordinates: must be in the format lat,long.";
pub const INVALID_COORDINATE_VALUE: &str =
    "Coordinates must be a valid number, -90<=lat<=90, -180<=long<=180.";

static PASSENGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([1-9]|1[0-6])$").expect("passenger pattern is valid"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 驗證查詢參數：先檢查缺漏，再檢查乘客數，最後檢查座標
pub fn validate_query(
    pickup: Option<&str>,
    dropoff: Option<&str>,
    passengers: Option<&str>,
) -> Result<AggregationRequest> {
    let (Some(pickup), Some(dropoff), Some(passengers)) = (pickup, dropoff, passengers) else {
        return Err(QuoteError::validation(MISSING_PARAMETERS));
    };

    let passengers = parse_passengers(passengers)?;

    if !pickup.contains(',') || !dropoff.contains(',') {
        return Err(QuoteError::validation(INVALID_COORDINATE_FORMAT));
    }

    let pickup = parse_coordinates(pickup)?;
    let dropoff = parse_coordinates(dropoff)?;

    Ok(AggregationRequest::new(pickup, dropoff, passengers))
}

pub fn parse_passengers(raw: &str) -> Result<u8> {
    if !PASSENGER_PATTERN.is_match(raw) {
        return Err(QuoteError::validation(INVALID_PASSENGERS));
    }

    raw.parse::<u8>()
        .map_err(|_| QuoteError::validation(INVALID_PASSENGERS))
}

pub fn parse_coordinates(raw: &str) -> Result<Coordinates> {
    let Some((lat, long)) = raw.split_once(',') else {
        return Err(QuoteError::validation(INVALID_COORDINATE_FORMAT));
    };

    let latitude = parse_bounded(lat, 90.0)?;
    let longitude = parse_bounded(long, 180.0)?;

    Ok(Coordinates::new(latitude, longitude))
}

fn parse_bounded(raw: &str, limit: f64) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && (-limit..=limit).contains(v));

    value.ok_or_else(|| QuoteError::validation(INVALID_COORDINATE_VALUE))
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(QuoteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_names<'a>(
    field_name: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(QuoteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.to_string(),
                reason: "Duplicate name".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<AggregationRequest>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_valid_query() {
        let request =
            validate_query(Some("51.470020,-0.454295"), Some("51.5,-0.1"), Some("4")).unwrap();
        assert_eq!(request.passengers, 4);
        assert_eq!(request.pickup, Coordinates::new(51.47002, -0.454295));
        assert_eq!(request.dropoff, Coordinates::new(51.5, -0.1));
    }

    #[test]
    fn test_missing_parameters() {
        assert_eq!(message(validate_query(None, None, None)), MISSING_PARAMETERS);
        assert_eq!(
            message(validate_query(Some("51.47,-0.45"), None, None)),
            MISSING_PARAMETERS
        );
        assert_eq!(
            message(validate_query(Some("51.47,-0.45"), Some("51.47,-0.45"), None)),
            MISSING_PARAMETERS
        );
    }

    #[test]
    fn test_passengers_checked_before_coordinates() {
        assert_eq!(
            message(validate_query(Some("100000,-0.45"), Some("51.47,-0.45"), Some("200"))),
            INVALID_PASSENGERS
        );
        assert_eq!(
            message(validate_query(Some("100000,-0.45"), Some("51.47,-0.45"), Some("NaN"))),
            INVALID_PASSENGERS
        );
    }

    #[test]
    fn test_passenger_bounds() {
        assert_eq!(parse_passengers("1").unwrap(), 1);
        assert_eq!(parse_passengers("16").unwrap(), 16);
        assert!(parse_passengers("0").is_err());
        assert!(parse_passengers("17").is_err());
        assert!(parse_passengers("05").is_err());
        assert!(parse_passengers("-3").is_err());
    }

    #[test]
    fn test_passenger_pattern_is_reused_across_calls() {
        for _ in 0..3 {
            for count in 1..=16u8 {
                assert_eq!(parse_passengers(&count.to_string()).unwrap(), count);
            }
            let err = parse_passengers("17").unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.to_string(), QuoteError::validation(INVALID_PASSENGERS).to_string());
        }
    }

    #[test]
    fn test_coordinates_without_comma() {
        assert_eq!(
            message(validate_query(
                Some("51.470020-0.454295"),
                Some("51.470020-0.454295"),
                Some("2")
            )),
            INVALID_COORDINATE_FORMAT
        );
    }

    #[test]
    fn test_coordinates_not_a_number_or_out_of_range() {
        assert_eq!(
            message(validate_query(Some("NaN,-0.454295"), Some("51.47,-0.45"), Some("2"))),
            INVALID_COORDINATE_VALUE
        );
        assert_eq!(
            message(validate_query(Some("100000,-0.454295"), Some("51.47,-0.45"), Some("2"))),
            INVALID_COORDINATE_VALUE
        );
        assert_eq!(
            message(validate_query(Some("51.47,-0.45"), Some("51.47,-181"), Some("2"))),
            INVALID_COORDINATE_VALUE
        );
        assert_eq!(
            message(validate_query(Some(",-0.45"), Some("51.47,-0.45"), Some("2"))),
            INVALID_COORDINATE_VALUE
        );
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("suppliers.endpoint", "https://example.com/dave").is_ok());
        assert!(validate_url("suppliers.endpoint", "http://127.0.0.1:8080/eric").is_ok());
        assert!(validate_url("suppliers.endpoint", "").is_err());
        assert!(validate_url("suppliers.endpoint", "invalid-url").is_err());
        assert!(validate_url("suppliers.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_unique_names() {
        assert!(validate_unique_names("suppliers.name", ["Dave", "Eric"]).is_ok());
        assert!(validate_unique_names("suppliers.name", ["Dave", "Dave"]).is_err());
    }
}
