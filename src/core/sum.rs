//! Indirect summation through the index buffer.
//!
//! Sums accumulate into an `i32` with wrapping arithmetic. Overflow is
//! expected on long runs: the value only exists so the reads cannot be
//! optimized away, and changing the accumulator width would change what is
//! being measured.

/// An element type the benchmark can read and accumulate.
pub trait Element: Copy {
    /// Reinterpret as the signed accumulator type.
    fn to_accumulator(self) -> i32;
}

impl Element for u8 {
    fn to_accumulator(self) -> i32 {
        i32::from(self)
    }
}

impl Element for u32 {
    fn to_accumulator(self) -> i32 {
        self as i32
    }
}

#[inline(always)]
fn sum_indexed<T: Element>(data: &[T], indices: &[usize]) -> i32 {
    indices
        .iter()
        .fold(0i32, |sum, &i| sum.wrapping_add(data[i].to_accumulator()))
}

/// Sum of `narrow[i]` for every `i` in `indices`.
///
/// Kept out of line so a profiler attributes its samples separately from
/// [`sum_wide`].
#[inline(never)]
pub fn sum_narrow(narrow: &[u8], indices: &[usize]) -> i32 {
    sum_indexed(narrow, indices)
}

/// Sum of `wide[i]` for every `i` in `indices`.
#[inline(never)]
pub fn sum_wide(wide: &[u32], indices: &[usize]) -> i32 {
    sum_indexed(wide, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sums_follow_indices() {
        let narrow: Vec<u8> = (0..10).map(|i| i as u8).collect();
        let wide: Vec<u32> = (0..10).collect();
        let indices = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3];

        assert_eq!(sum_narrow(&narrow, &indices), 39);
        assert_eq!(sum_wide(&wide, &indices), 39);
    }

    #[test]
    fn test_sums_are_idempotent() {
        let narrow: Vec<u8> = (0..1000).map(|i| i as u8).collect();
        let wide: Vec<u32> = (0..1000).collect();
        let indices: Vec<usize> = (0..500).map(|i| (i * 997) % 1000).collect();

        assert_eq!(sum_narrow(&narrow, &indices), sum_narrow(&narrow, &indices));
        assert_eq!(sum_wide(&wide, &indices), sum_wide(&wide, &indices));
    }

    #[test]
    fn test_narrow_reads_truncated_values() {
        let narrow: Vec<u8> = (0..300).map(|i| i as u8).collect();
        let wide: Vec<u32> = (0..300).collect();

        assert_eq!(sum_narrow(&narrow, &[256, 299]), 43);
        assert_eq!(sum_wide(&wide, &[256, 299]), 555);
    }

    #[test]
    fn test_accumulator_wraps() {
        let wide = [u32::MAX, i32::MAX as u32];
        // u32::MAX reinterprets as -1.
        assert_eq!(sum_wide(&wide, &[0]), -1);
        assert_eq!(sum_wide(&wide, &[1, 1]), i32::MAX.wrapping_add(i32::MAX));
    }

    #[test]
    fn test_empty_indices() {
        assert_eq!(sum_narrow(&[1, 2, 3], &[]), 0);
        assert_eq!(sum_wide(&[1, 2, 3], &[]), 0);
    }
}
