// THEORY:
// The `median_smoother` is the only module in the crate with real algorithmic
// content. It replaces every vertex of a closed outline by the running median of
// the window of vertices centred on it.
//
// Key principles:
// 1.  **Circularity**: The outline is a ring. A window centred on the first vertex
//     borrows the last vertices, and the other way round (see `padding`).
// 2.  **Per-axis median**: X and Y are collected into separate buffers and their
//     middle elements are selected independently. The result is not a geometric
//     median and need not coincide with any input vertex.
// 3.  **Validate first**: Every window check runs before any work is done and each
//     violation is a distinct `FilterError`. A window of 0 or 1 switches the filter
//     off and returns the outline unchanged.
// 4.  **Purity**: No shared state, no logging. The same input always yields
//     bit-identical output, so independent outlines may be smoothed concurrently.

use crate::core_modules::filter_error::{FilterError, FilterResult};
use crate::core_modules::padding::circular_index;
use crate::core_modules::point::{Outline, Point};

/// Default window of the plugin and of `CircularMedianSmoother::default`.
pub const DEFAULT_WINDOW: i64 = 3;

/// A running median filter with a fixed window, applicable to any number of outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircularMedianSmoother {
    window: i64,
}

impl Default for CircularMedianSmoother {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

impl CircularMedianSmoother {
    pub fn new(window: i64) -> Self {
        Self { window }
    }

    pub fn window(&self) -> i64 {
        self.window
    }

    pub fn smooth(&self, points: &[Point]) -> FilterResult<Vec<Point>> {
        smooth(points, self.window)
    }
}

/// Smooths a closed outline with a running median of `window` points.
///
/// Points must be ordered along the outline (clockwise or anti-clockwise).
/// Returns a new sequence of the same length; `points` is left untouched.
pub fn smooth(points: &[Point], window: i64) -> FilterResult<Vec<Point>> {
    let window = validate_window(points.len(), window)?;
    if window <= 1 {
        return Ok(points.to_vec());
    }

    let outline = Outline::new(points);
    let len = outline.size();
    let half = (window / 2) as isize;
    let mut xs = Vec::with_capacity(window);
    let mut ys = Vec::with_capacity(window);
    let mut smoothed = Vec::with_capacity(len);

    for center in 0..len as isize {
        xs.clear();
        ys.clear();
        for position in (center - half)..=(center + half) {
            let index = circular_index(len, position);
            xs.push(outline.xs()[index]);
            ys.push(outline.ys()[index]);
        }
        smoothed.push(Point {
            x: median_of_odd(&mut xs),
            y: median_of_odd(&mut ys),
        });
    }

    Ok(smoothed)
}

/// Checks `window` against an outline of `len` points and returns it as a usize.
///
/// Windows of 0 and 1 pass unchecked against parity and length: they disable the filter.
/// Length is checked before parity, so any window of `len` or more is `WindowTooLarge`.
pub fn validate_window(len: usize, window: i64) -> FilterResult<usize> {
    if len == 0 {
        return Err(FilterError::EmptyInput);
    }
    if window < 0 {
        return Err(FilterError::InvalidWindowSign { window });
    }
    if window <= 1 {
        return Ok(window as usize);
    }
    let w = match usize::try_from(window) {
        Ok(w) if w < len => w,
        _ => return Err(FilterError::WindowTooLarge { window, len }),
    };
    if w % 2 == 0 {
        return Err(FilterError::InvalidWindowParity { window });
    }
    Ok(w)
}

/// Middle element of an odd-length buffer, in the total order of `f64`.
fn median_of_odd(values: &mut [f64]) -> f64 {
    let middle = values.len() / 2;
    let (_, median, _) = values.select_nth_unstable_by(middle, f64::total_cmp);
    *median
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal(n: usize) -> Vec<Point> {
        (1..=n).map(|i| Point::new(i as f64, i as f64)).collect()
    }

    #[test]
    fn running_median_window_3() {
        let out = smooth(&diagonal(10), 3).expect("valid window");
        let expected = [2.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 9.0];

        assert_eq!(out.len(), 10);
        for (point, want) in out.iter().zip(expected) {
            assert_eq!(point.x, want);
            assert_eq!(point.y, point.x);
        }
    }

    #[test]
    fn running_median_window_5_wraps_both_ends() {
        // Index 0 sees [9, 10, 1, 2, 3], index 9 sees [8, 9, 10, 1, 2].
        let xs: Vec<f64> = smooth(&diagonal(10), 5)
            .unwrap()
            .iter()
            .map(|p| p.x)
            .collect();
        assert_eq!(xs, vec![3.0, 3.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 8.0, 8.0]);
    }

    #[test]
    fn spike_is_removed() {
        let mut points = vec![Point::new(0.0, 0.0); 7];
        points[3] = Point::new(100.0, -50.0);
        let out = smooth(&points, 3).unwrap();
        assert!(out.iter().all(|p| *p == Point::new(0.0, 0.0)));
    }

    #[test]
    fn axes_are_filtered_independently() {
        let ring = vec![
            Point::new(0.0, 5.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 9.0),
            Point::new(3.0, 1.0),
            Point::new(4.0, 2.0),
        ];

        let out = smooth(&ring, 3).unwrap();
        // Centre 1: xs {0,1,2} -> 1, ys {5,0,9} -> 5. (1, 5) is not an input vertex.
        assert_eq!(out[1], Point::new(1.0, 5.0));
        assert!(!ring.contains(&out[1]));
    }

    #[test]
    fn window_one_and_zero_are_identity() {
        let points = diagonal(4);
        assert_eq!(smooth(&points, 1).unwrap(), points);
        assert_eq!(smooth(&points, 0).unwrap(), points);

        let single = vec![Point::new(7.0, 8.0)];
        assert_eq!(smooth(&single, 1).unwrap(), single);
    }

    #[test]
    fn even_window_is_rejected() {
        assert_eq!(
            smooth(&diagonal(10), 4),
            Err(FilterError::InvalidWindowParity { window: 4 })
        );
    }

    #[test]
    fn negative_window_is_rejected() {
        assert_eq!(
            smooth(&diagonal(10), -1),
            Err(FilterError::InvalidWindowSign { window: -1 })
        );
        assert_eq!(
            smooth(&diagonal(10), -2),
            Err(FilterError::InvalidWindowSign { window: -2 })
        );
    }

    #[test]
    fn even_window_equal_to_length_is_too_large() {
        assert_eq!(
            smooth(&diagonal(10), 10),
            Err(FilterError::WindowTooLarge { window: 10, len: 10 })
        );
        assert_eq!(
            smooth(&diagonal(6), 8),
            Err(FilterError::WindowTooLarge { window: 8, len: 6 })
        );
        assert_eq!(
            smooth(&diagonal(5), 4),
            Err(FilterError::InvalidWindowParity { window: 4 })
        );
    }

    #[test]
    fn window_not_shorter_than_outline_is_rejected() {
        let points = diagonal(9);
        assert_eq!(
            smooth(&points, 9),
            Err(FilterError::WindowTooLarge { window: 9, len: 9 })
        );
        assert_eq!(
            smooth(&points, 11),
            Err(FilterError::WindowTooLarge { window: 11, len: 9 })
        );
        assert!(smooth(&points, 7).is_ok());
    }

    #[test]
    fn empty_outline_is_rejected() {
        assert_eq!(smooth(&[], 3), Err(FilterError::EmptyInput));
        assert_eq!(smooth(&[], 1), Err(FilterError::EmptyInput));
    }

    #[test]
    fn smoother_struct_uses_its_window() {
        let smoother = CircularMedianSmoother::default();
        assert_eq!(smoother.window(), DEFAULT_WINDOW);
        assert_eq!(smoother.smooth(&diagonal(10)), smooth(&diagonal(10), 3));
        assert!(CircularMedianSmoother::new(2).smooth(&diagonal(10)).is_err());
    }

    #[test]
    fn median_of_odd_picks_middle() {
        assert_eq!(median_of_odd(&mut [3.0, -1.0, 2.0]), 2.0);
        assert_eq!(median_of_odd(&mut [5.0]), 5.0);
        assert_eq!(median_of_odd(&mut [9.0, 1.0, 8.0, 2.0, 7.0]), 7.0);
    }
}
