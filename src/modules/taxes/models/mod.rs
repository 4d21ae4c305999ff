pub mod company_size;
pub mod rates;
pub mod tax_bracket;
pub mod tax_input;
pub mod tax_result;

pub use company_size::{CitCategory, CitTier, CompanySize, CIT_TIERS};
pub use tax_bracket::{TaxBracket, PIT_BRACKETS};
pub use rates::TaxRates;
pub use tax_input::TaxInput;
pub use tax_result::{
    BracketShare, BreakdownLine, CitDetail, EducationTaxDetail, NitdaLevyDetail, PayeDetail,
    PitSummary, TaxResult, VatDetail,
};
