use rust_decimal::Decimal;

use crate::core::money::{ratio_to_percent, round_naira};
use crate::modules::taxes::models::rates::{VAT_NOT_APPLICABLE_REASON, VAT_RATE, VAT_THRESHOLD};
use crate::modules::taxes::models::VatDetail;

/// VAT collectable on `revenue`. Applies only to registered businesses at
/// or above the threshold.
pub fn calculate_vat(revenue: Decimal, is_vat_registered: bool) -> VatDetail {
    if !is_vat_registered || revenue < VAT_THRESHOLD {
        return VatDetail {
            vat: Decimal::ZERO,
            applicable: false,
            rate: None,
            reason: Some(VAT_NOT_APPLICABLE_REASON.to_string()),
        };
    }

    VatDetail {
        vat: round_naira(revenue * VAT_RATE),
        applicable: true,
        rate: Some(ratio_to_percent(VAT_RATE)),
        reason: None,
    }
}
