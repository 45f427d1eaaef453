//! Calibration Constants for HeatGuard
//!
//! Every fixed number the engine uses lives here, split by concern:
//!
//! - [`physics`] — psychrometric formulas and index weightings that come
//!   from published approximations (Stull wet-bulb, ISO-style outdoor WBGT).
//! - [`model`] — the MWL cooling-capacity proxy and exposure-penalty
//!   calibration. These are empirically chosen conservative values, not
//!   derived from a cited physiological model; they are preserved exactly
//!   and must not be re-tuned without field validation.
//! - [`thresholds`] — regulatory WBGT cut-points and wet-bulb physiological
//!   band edges, including the acclimatization shift.
//!
//! Keeping constants out of the computation modules makes the calibration
//! surface auditable in one place and keeps the formulas readable.

pub mod model;
pub mod physics;
pub mod thresholds;
