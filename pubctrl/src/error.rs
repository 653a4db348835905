use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum CtrlError {
    /// Path that does not map onto any view
    #[error("unknown route: {0}")]
    UnknownRoute(String),
}
