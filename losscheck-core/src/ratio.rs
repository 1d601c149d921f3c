use crate::domain::{Ratio, SizeResult};

/// `original / compressed`, or `Ratio::UNDEFINED` when either size is absent
/// or zero. No rounding happens here.
pub fn ratio(original: SizeResult, compressed: SizeResult) -> Ratio {
    match (original, compressed) {
        (Some(o), Some(c)) if o > 0 && c > 0 => Ratio::from_quotient(o as f64 / c as f64),
        _ => Ratio::UNDEFINED,
    }
}
