//! Error Types for the Heat-Stress Engine
//!
//! ## Design Philosophy
//!
//! The engine is built for field devices, so errors follow the same rules as
//! the rest of the crate:
//!
//! 1. **Small and `Copy`**: no heap allocation, no `String` payloads.
//! 2. **Locally recoverable**: none of these conditions is fatal. The
//!    session always settles into a well-defined "awaiting input" state
//!    instead of propagating a failure to the process level.
//! 3. **Actionable**: each variant tells the caller what is missing, not
//!    just that something went wrong.
//!
//! ## Taxonomy
//!
//! - Out-of-range inputs (RH outside [0, 100], negative wind) are *not*
//!   errors: they are clamped at the [`crate::reading`] boundary and never
//!   surface here. Non-finite readings gate the whole evaluation into the
//!   awaiting-input state instead of raising an error.
//! - [`EngineError::BaselineUnavailable`] blocks the apply action until a
//!   valid environmental reading has produced a frozen baseline.
//! - [`EngineError::CapacityUnavailable`] marks derived values (HSP, risk)
//!   as *not computed*. Downstream consumers must treat this as a void
//!   state, never as zero.
//! - A failed external data fetch is not represented here at all: the
//!   collaborator contract is "absence of fresh data means no change", see
//!   [`crate::session::AssessmentSession::ingest`].

use thiserror_no_std::Error;

/// Result type for engine actions.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by session actions - kept small for embedded use.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Apply-adjustments was invoked before any environmental reading
    /// produced a frozen baseline WBGT.
    #[error("no frozen baseline WBGT available; set environmental inputs first")]
    BaselineUnavailable,

    /// A derived value (effective WBGT, HSP, risk) was requested but has not
    /// been computed; there is nothing to classify or record yet.
    #[error("cooling capacity and strain not computed; apply adjustments first")]
    CapacityUnavailable,
}
