use serde_json::Value;

/// 最多兩次嘗試（一次重試）
pub const MAX_ATTEMPTS: u32 = 2;

const HTTP_OK: u16 = 200;

/// What one completed attempt observed. `status` is `None` when no response
/// arrived at all; `body` is `None` when nothing parseable came back.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttemptOutcome<'a> {
    pub status: Option<u16>,
    pub body: Option<&'a Value>,
}

impl<'a> AttemptOutcome<'a> {
    pub fn new(status: Option<u16>, body: Option<&'a Value>) -> Self {
        Self { status, body }
    }

    pub fn no_response() -> Self {
        Self::default()
    }
}

/// 重試判斷：純函式，不看時間、不含隨機
///
/// A 200 is never retried. Otherwise only a server-side failure is retried,
/// either a 5xx status or a JSON body whose `status` field reports one.
pub fn should_retry(outcome: &AttemptOutcome<'_>) -> bool {
    if outcome.status == Some(HTTP_OK) {
        return false;
    }

    let status_is_server_error = outcome.status.is_some_and(is_server_error);
    let body_reports_server_error = outcome
        .body
        .and_then(|body| body.get("status"))
        .and_then(Value::as_u64)
        .is_some_and(|code| u16::try_from(code).is_ok_and(is_server_error));

    status_is_server_error || body_reports_server_error
}

fn is_server_error(code: u16) -> bool {
    (500..600).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_status_is_never_retried() {
        let body = json!({"status": 500});
        assert!(!should_retry(&AttemptOutcome::new(Some(200), None)));
        assert!(!should_retry(&AttemptOutcome::new(Some(200), Some(&body))));
    }

    #[test]
    fn test_body_reporting_500_is_retried() {
        let body = json!({"status": 500, "error": "Internal Server Error"});
        assert!(should_retry(&AttemptOutcome::new(None, Some(&body))));
    }

    #[test]
    fn test_no_response_and_no_body_is_not_retried() {
        assert!(!should_retry(&AttemptOutcome::no_response()));
    }

    #[test]
    fn test_server_error_status_is_retried() {
        assert!(should_retry(&AttemptOutcome::new(Some(500), None)));
        assert!(should_retry(&AttemptOutcome::new(Some(503), None)));
    }

    #[test]
    fn test_client_errors_are_not_retried() {
        let body = json!({"status": 404});
        assert!(!should_retry(&AttemptOutcome::new(Some(404), Some(&body))));
        assert!(!should_retry(&AttemptOutcome::new(Some(403), None)));
    }

    #[test]
    fn test_body_without_numeric_status_is_not_retried() {
        let body = json!({"status": "broken"});
        assert!(!should_retry(&AttemptOutcome::new(Some(418), Some(&body))));
    }
}
