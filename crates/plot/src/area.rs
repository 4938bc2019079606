//! Size-to-area mapping for marker sizing.

/// Map a trade or quote size to a marker area.
///
/// Small odd-lot sizes get a linear sub-scale so they stay visually
/// distinguishable; round-lot sizes are compressed logarithmically so
/// outliers do not dominate the plot. The breakpoints and the final
/// doubling are calibrated reference values; do not re-derive them.
///
/// - `0` maps to `0`
/// - `1..=99` maps to `2 * ceil(size / 20)` (2, 4, 6, 8, 10)
/// - `>= 100` maps to `floor(2 * (log10(size) + 4))`
pub fn size_to_area(size: u64) -> u32 {
    if size == 0 {
        0
    } else if size < 100 {
        (2 * size.div_ceil(20)) as u32
    } else {
        (2.0 * ((size as f64).log10() + 4.0)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(size_to_area(0), 0);
    }

    #[test]
    fn test_odd_lot_regime() {
        assert_eq!(size_to_area(1), 2);
        assert_eq!(size_to_area(20), 2);
        assert_eq!(size_to_area(21), 4);
        assert_eq!(size_to_area(50), 6);
        assert_eq!(size_to_area(99), 10);
    }

    #[test]
    fn test_round_lot_regime() {
        assert_eq!(size_to_area(100), 12);
        assert_eq!(size_to_area(1_000), 14);
        assert_eq!(size_to_area(10_000), 16);
        assert_eq!(size_to_area(500), 13);
    }

    #[test]
    fn test_non_decreasing_within_each_regime() {
        let mut last = size_to_area(1);
        for size in 2..100 {
            let area = size_to_area(size);
            assert!(area >= last, "regressed at size {size}");
            last = area;
        }
        let mut last = size_to_area(100);
        for size in (100..1_000_000).step_by(97) {
            let area = size_to_area(size);
            assert!(area >= last, "regressed at size {size}");
            last = area;
        }
    }
}
