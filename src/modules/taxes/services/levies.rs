//! Flat-rate charges on profit: tertiary education tax and the NITDA levy.

use rust_decimal::Decimal;

use crate::core::money::{ratio_to_percent, round_naira};
use crate::modules::taxes::models::rates::{
    EDUCATION_TAX_RATE, NITDA_LEVY_RATE, NITDA_LEVY_THRESHOLD,
};
use crate::modules::taxes::models::{EducationTaxDetail, NitdaLevyDetail};

pub fn calculate_education_tax(profit: Decimal) -> EducationTaxDetail {
    let amount = if profit > Decimal::ZERO {
        round_naira(profit * EDUCATION_TAX_RATE)
    } else {
        Decimal::ZERO
    };

    EducationTaxDetail {
        amount,
        rate: ratio_to_percent(EDUCATION_TAX_RATE),
    }
}

/// NITDA levy. Gated on `revenue`, charged on `profit`; a loss under the
/// gate gives a negative amount.
pub fn calculate_nitda_levy(revenue: Decimal, profit: Decimal) -> NitdaLevyDetail {
    let applicable = revenue >= NITDA_LEVY_THRESHOLD;
    let amount = if applicable {
        round_naira(profit * NITDA_LEVY_RATE)
    } else {
        Decimal::ZERO
    };

    NitdaLevyDetail {
        amount,
        applicable,
        rate: ratio_to_percent(NITDA_LEVY_RATE),
    }
}
