/// Sum of two 32-bit host integers, widened so it cannot overflow.
#[inline]
pub fn add(a: i32, b: i32) -> i64 {
    a as i64 + b as i64
}
