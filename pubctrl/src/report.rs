use pubcore::{
    error::BackendError,
    report::ErrorReporter,
};

/// Reports every failed request through the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, error: &BackendError) {
        match error.status_code() {
            Some(status) if status.is_client_error() => log::warn!("request rejected: {error}"),
            _ => log::error!("request failed: {error}"),
        }
    }
}
