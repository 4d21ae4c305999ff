use rust_decimal::Decimal;

use super::company_size::CompanySize;

/// Figures for one tax estimate, already coerced to non-negative amounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxInput {
    pub revenue: Decimal,
    pub expenses: Decimal,
    pub salaries: Decimal,
    pub company_size: CompanySize,
    pub is_vat_registered: bool,
    pub include_paye: bool,
}

impl Default for TaxInput {
    fn default() -> Self {
        Self {
            revenue: Decimal::ZERO,
            expenses: Decimal::ZERO,
            salaries: Decimal::ZERO,
            company_size: CompanySize::Auto,
            is_vat_registered: true,
            include_paye: false,
        }
    }
}

impl TaxInput {
    pub fn new(revenue: Decimal, expenses: Decimal, salaries: Decimal) -> Self {
        Self {
            revenue,
            expenses,
            salaries,
            ..Self::default()
        }
    }

    pub fn with_company_size(mut self, company_size: CompanySize) -> Self {
        self.company_size = company_size;
        self
    }

    pub fn with_vat_registration(mut self, is_vat_registered: bool) -> Self {
        self.is_vat_registered = is_vat_registered;
        self
    }

    pub fn with_paye(mut self, include_paye: bool) -> Self {
        self.include_paye = include_paye;
        self
    }

    /// Revenue less expenses and salaries; negative for a loss.
    ///
    /// Saturates at the `Decimal` range instead of overflowing.
    pub fn profit(&self) -> Decimal {
        self.revenue
            .saturating_sub(self.expenses)
            .saturating_sub(self.salaries)
    }
}
