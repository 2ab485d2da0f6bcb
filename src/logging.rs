// src/logging.rs

use crate::errors::{ChatError, ChatResult};
use flexi_logger::{detailed_format, FileSpec, Logger, LoggerHandle};
use std::path::Path;

/// Details of one call to the chat endpoint.
#[derive(Debug)]
pub struct ApiCallLog {
    pub endpoint: String,
    pub request_summary: String,
    /// `None` when no response arrived at all.
    pub response_status: Option<u16>,
    pub response_time_ms: u128,
    pub error: Option<String>,
}

/// Starts file logging. The terminal is the UI, so nothing is ever written to stdout/stderr.
///
/// The returned handle must be kept alive for as long as logging is wanted.
pub fn init_logging(level: &str, dir: &Path) -> ChatResult<LoggerHandle> {
    Logger::try_with_str(level)
        .map_err(|e| ChatError::config_error(format!("Invalid log level {level:?}: {e}")))?
        .log_to_file(FileSpec::default().directory(dir).basename("minichat"))
        .format(detailed_format)
        .start()
        .map_err(|e| ChatError::config_error(format!("Failed to start logger: {e}")))
}

/// One log line per call; the logger adds the timestamp.
pub fn format_api_call(call: &ApiCallLog) -> String {
    let status = call
        .response_status
        .map_or_else(|| "-".to_string(), |s| s.to_string());

    let line = format!(
        "POST {} - {} - Status: {} - Time: {}ms",
        call.endpoint, call.request_summary, status, call.response_time_ms
    );
    match &call.error {
        Some(err) => format!("{} - {}", line, err),
        None => line,
    }
}

/// Logs an API call: a warning when it failed, info otherwise.
pub fn log_api_call(call: &ApiCallLog) {
    let line = format_api_call(call);
    if call.error.is_some() {
        log::warn!("{}", line);
    } else {
        log::info!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(response_status: Option<u16>, error: Option<&str>) -> ApiCallLog {
        ApiCallLog {
            endpoint: "http://127.0.0.1:5000/chat".to_string(),
            request_summary: "5 chars".to_string(),
            response_status,
            response_time_ms: 12,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_format_success_has_no_timestamp_prefix() {
        assert_eq!(
            format_api_call(&call(Some(200), None)),
            "POST http://127.0.0.1:5000/chat - 5 chars - Status: 200 - Time: 12ms"
        );
    }

    #[test]
    fn test_format_failure_without_response() {
        assert_eq!(
            format_api_call(&call(None, Some("Network failure: refused"))),
            "POST http://127.0.0.1:5000/chat - 5 chars - Status: - - Time: 12ms - Network failure: refused"
        );
    }
}
