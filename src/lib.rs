//! Nigerian tax estimation service.
//!
//! The engine in [`taxes`] is a set of pure functions over Naira amounts:
//! progressive PIT, profit-tiered CIT, threshold-gated VAT, tertiary
//! education tax and the NITDA levy, composed by [`TaxCalculator`]. The
//! remaining modules wrap it in a small actix-web service.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::taxes;
pub use modules::taxes::{compute_tax_summary, TaxCalculator, TaxInput, TaxResult};
