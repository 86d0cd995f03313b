//! Solver and geometry errors

/// All the ways a solve or a geometry pass can fail
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The cutting parameters violate a constraint or produce a
    /// non-physical mesh (acos out of domain, `cos α' = 0`, non-finite
    /// intermediate). No partial result is returned.
    #[error("invalid cutting parameters: {reason}")]
    InvalidParameters { reason: String },

    /// An iterative routine exhausted its iteration bound.
    #[error("{routine} did not converge within {iterations} iterations")]
    Convergence {
        routine: &'static str,
        iterations: usize,
    },

    /// Geometry generation was invoked without valid solver scalars, or
    /// an export was requested from a result with no geometry.
    #[error("missing mechanism data: {what}")]
    MissingData { what: String },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Error::InvalidParameters {
            reason: reason.into(),
        }
    }

    pub(crate) fn missing(what: impl Into<String>) -> Self {
        Error::MissingData { what: what.into() }
    }
}
