pub mod controllers;
pub mod models;
pub mod services;

pub use models::{TaxInput, TaxRates, TaxResult};
pub use services::{compute_tax_summary, TaxCalculator};
