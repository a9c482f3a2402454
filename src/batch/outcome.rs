//! Per-request results of a drain.

use crate::{Error, Result, NO_RESPONSE_STATUS};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::time::Duration;

/// Outcome of one queued request.
///
/// A failure is data here, never an `Err`: one bad request must not abort
/// the rest of a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    Success { status_code: u16, data: Value },
    Failure { status_code: u16, message: String },
}

impl BatchOutcome {
    pub fn success(status_code: u16, data: Value) -> Self {
        BatchOutcome::Success { status_code, data }
    }

    pub fn failure(status_code: u16, message: impl Into<String>) -> Self {
        BatchOutcome::Failure {
            status_code,
            message: message.into(),
        }
    }

    /// Capture a dispatch error, falling back to the no-response status.
    pub fn from_error(err: &Error) -> Self {
        Self::failure(
            err.status_code().unwrap_or(NO_RESPONSE_STATUS),
            err.to_string(),
        )
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, BatchOutcome::Success { .. })
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            BatchOutcome::Success { data, .. } => Some(data),
            BatchOutcome::Failure { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            BatchOutcome::Success { .. } => None,
            BatchOutcome::Failure { message, .. } => Some(message),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            BatchOutcome::Success { status_code, .. }
            | BatchOutcome::Failure { status_code, .. } => *status_code,
        }
    }

    /// Decode a successful outcome into a typed envelope.
    ///
    /// A failed outcome is turned back into an [`Error::Remote`] carrying its
    /// status and message.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        match self {
            BatchOutcome::Success { data, .. } => Ok(serde_json::from_value(data.clone())?),
            BatchOutcome::Failure {
                status_code,
                message,
            } => Err(Error::Remote {
                status: *status_code,
                message: message.clone(),
            }),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeWire<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    status_code: u16,
}

impl Serialize for BatchOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        OutcomeWire {
            success: self.succeeded(),
            data: self.value(),
            error: self.failure_reason(),
            status_code: self.status_code(),
        }
        .serialize(serializer)
    }
}

/// Ordered outcomes of one executor run plus timing.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub outcomes: Vec<BatchOutcome>,
    pub execution_time: Duration,
}

impl BatchReport {
    pub fn empty() -> Self {
        Self {
            outcomes: Vec::new(),
            execution_time: Duration::ZERO,
        }
    }
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }
    pub fn failure_count(&self) -> usize {
        self.len() - self.success_count()
    }
    pub fn all_succeeded(&self) -> bool {
        self.failure_count() == 0
    }
    pub fn success_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            0.0
        } else {
            self.success_count() as f64 / self.len() as f64
        }
    }
}

impl Default for BatchReport {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exactly_one_side_is_populated() {
        let ok = BatchOutcome::success(200, json!({"ErrorCode": 0}));
        assert!(ok.succeeded());
        assert!(ok.value().is_some());
        assert!(ok.failure_reason().is_none());

        let failed = BatchOutcome::failure(404, "Not Found");
        assert!(!failed.succeeded());
        assert!(failed.value().is_none());
        assert_eq!(failed.failure_reason(), Some("Not Found"));
        assert_eq!(failed.status_code(), 404);
    }

    #[test]
    fn transport_errors_get_sentinel_status() {
        let err = Error::Transport(crate::transport::TransportError::Other(
            "connection refused".into(),
        ));
        let outcome = BatchOutcome::from_error(&err);
        assert_eq!(outcome.status_code(), NO_RESPONSE_STATUS);
        assert!(outcome
            .failure_reason()
            .is_some_and(|m| m.contains("connection refused")));
    }

    #[test]
    fn serializes_to_wire_shape() {
        let ok = serde_json::to_value(BatchOutcome::success(200, json!([1]))).unwrap();
        assert_eq!(ok, json!({"success": true, "data": [1], "statusCode": 200}));

        let failed = serde_json::to_value(BatchOutcome::failure(401, "denied")).unwrap();
        assert_eq!(
            failed,
            json!({"success": false, "error": "denied", "statusCode": 401})
        );
    }

    #[test]
    fn decode_failure_reports_remote_error() {
        let failed = BatchOutcome::failure(403, "Access forbidden");
        let err = failed.decode::<Value>().unwrap_err();
        assert_eq!(err.status_code(), Some(403));
    }

    #[test]
    fn report_counts() {
        let report = BatchReport {
            outcomes: vec![
                BatchOutcome::success(200, Value::Null),
                BatchOutcome::failure(500, "boom"),
                BatchOutcome::success(200, Value::Null),
                BatchOutcome::success(200, Value::Null),
            ],
            execution_time: Duration::from_millis(5),
        };
        assert_eq!(report.success_count(), 3);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.all_succeeded());
        assert!((report.success_rate() - 0.75).abs() < f64::EPSILON);
        assert_eq!(BatchReport::empty().success_rate(), 0.0);
    }
}
