pub mod company_tax;
pub mod levies;
pub mod progressive;
pub mod tax_calculator;
pub mod vat;

pub use company_tax::calculate_cit;
pub use levies::{calculate_education_tax, calculate_nitda_levy};
pub use progressive::{calculate_progressive_tax, progressive_breakdown};
pub use tax_calculator::{compute_tax_summary, TaxCalculator};
pub use vat::calculate_vat;
