//! Event cost estimation.
//!
//! Pure functions over an immutable [`Catalog`](crate::catalog::Catalog);
//! every call derives a fresh result from the request.

pub mod calculator;
pub mod models;
pub mod summary;

pub use calculator::{compute_estimate, try_compute_estimate, CostEstimator};
pub use models::{
    AddonLine, EstimateError, EstimateRequest, EstimateResult, RangeFactors, DEFAULT_GUEST_COUNT,
};
pub use summary::{format_inr, render_quote, QUOTE_FILE_NAME};
