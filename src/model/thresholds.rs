/// Lower bounds of the performance bands. Each band is left-closed and
/// right-open except the top one, which is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryBoundaries {
    pub developing: f64,
    pub progressing: f64,
    pub meets_expectations: f64,
    pub exemplary: f64,
}

pub const STANDARD_BOUNDARIES: CategoryBoundaries = CategoryBoundaries::standard_v1();

impl CategoryBoundaries {
    pub const fn standard_v1() -> Self {
        Self {
            developing: 1.75,
            progressing: 2.75,
            meets_expectations: 3.5,
            exemplary: 4.5,
        }
    }
}

/// Decimal places kept on every published average.
pub const AVERAGE_DECIMALS: u32 = 2;

/// Width of the rating scale; 0 is reserved for "not observed".
pub const MAX_RATING: i64 = 5;
