#[inline]
const fn divisible_by_four(year: i32) -> bool {
    year % 4 == 0
}

#[inline]
const fn is_century(year: i32) -> bool {
    year % 100 == 0
}

#[inline]
const fn divisible_by_four_hundred(year: i32) -> bool {
    year % 400 == 0
}

/// Gregorian leap-year rule on the proleptic year number.
///
/// Total over `i32`: zero and negative years go through the same
/// arithmetic, and `%` with a positive divisor never overflows.
#[inline]
pub const fn is_leap (year: i32) -> bool {
    divisible_by_four(year) && (!is_century(year) || divisible_by_four_hundred(year))
}
