use crate::error::BackendError;

/// The process-wide error handler.
///
/// Every failed request is handed to the registered reporter before the
/// error is returned to the caller.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &BackendError);
}

impl<F> ErrorReporter for F
where
    F: Fn(&BackendError) + Send + Sync,
{
    fn report(&self, error: &BackendError) {
        self(error)
    }
}
