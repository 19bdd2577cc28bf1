//! Configuration errors

/// Rejected options. Runtime navigation never fails; only setup does.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlusAsTabError {
    #[error("At least one key code must trigger navigation")]
    NoKeys,

    #[error("Marker {0} must not be empty")]
    EmptyMarker(&'static str),
}
