use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A contiguous income band taxed at a single rate.
///
/// `max` of `None` marks the open-ended top band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    pub min: Decimal,
    pub max: Option<Decimal>,
    /// Fraction in `[0, 1]`
    pub rate: Decimal,
}

impl TaxBracket {
    pub const fn new(min: Decimal, max: Option<Decimal>, rate: Decimal) -> Self {
        Self { min, max, rate }
    }

    /// Width of the band, `None` for the unbounded top band
    pub fn width(&self) -> Option<Decimal> {
        self.max.map(|max| max - self.min)
    }
}

/// Personal income tax bands, ascending from zero
pub static PIT_BRACKETS: [TaxBracket; 6] = [
    TaxBracket::new(dec!(0), Some(dec!(300000)), dec!(0.07)),
    TaxBracket::new(dec!(300000), Some(dec!(600000)), dec!(0.11)),
    TaxBracket::new(dec!(600000), Some(dec!(1100000)), dec!(0.15)),
    TaxBracket::new(dec!(1100000), Some(dec!(1600000)), dec!(0.19)),
    TaxBracket::new(dec!(1600000), Some(dec!(3200000)), dec!(0.21)),
    TaxBracket::new(dec!(3200000), None, dec!(0.24)),
];
