use median_snake_filter::{FilterError, Point, smooth};

/// A jagged closed outline: a circle with a deterministic saw-tooth on the radius.
fn jagged_circle(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * std::f64::consts::TAU;
            let radius = 30.0 + ((i * 7) % 5) as f64 - 2.0;
            Point::new(100.0 + radius * angle.cos(), 80.0 + radius * angle.sin())
        })
        .collect()
}

fn rotate(points: &[Point], k: usize) -> Vec<Point> {
    let mut rotated = points.to_vec();
    rotated.rotate_left(k);
    rotated
}

#[test]
fn length_is_preserved() {
    for n in [2, 3, 10, 75, 137] {
        let points = jagged_circle(n);
        for window in (1..n as i64).step_by(2) {
            let out = smooth(&points, window).expect("valid window");
            assert_eq!(out.len(), n, "n={n} window={window}");
        }
    }
}

#[test]
fn window_one_is_identity() {
    let points = jagged_circle(125);
    assert_eq!(smooth(&points, 1).unwrap(), points);
}

#[test]
fn swapping_axes_commutes_with_smoothing() {
    let points = jagged_circle(75);
    let swapped: Vec<Point> = points.iter().map(Point::swapped).collect();

    for window in [3, 5, 9, 15] {
        let direct: Vec<Point> = smooth(&points, window)
            .unwrap()
            .iter()
            .map(Point::swapped)
            .collect();
        assert_eq!(smooth(&swapped, window).unwrap(), direct);
    }
}

#[test]
fn rotating_the_start_point_rotates_the_output() {
    let points = jagged_circle(40);

    for window in [3, 5, 9, 15] {
        let reference = smooth(&points, window).unwrap();
        for k in [1, 7, 20, 39] {
            let out = smooth(&rotate(&points, k), window).unwrap();
            assert_eq!(out, rotate(&reference, k), "window={window} k={k}");
        }
    }
}

#[test]
fn input_is_not_modified() {
    let points = jagged_circle(30);
    let copy = points.clone();
    let _ = smooth(&points, 5).unwrap();
    assert_eq!(points, copy);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let points = jagged_circle(137);
    let first = smooth(&points, 9).unwrap();
    for _ in 0..5 {
        let again = smooth(&points, 9).unwrap();
        assert!(
            first
                .iter()
                .zip(&again)
                .all(|(a, b)| a.x.to_bits() == b.x.to_bits() && a.y.to_bits() == b.y.to_bits())
        );
    }
}

#[test]
fn output_stays_within_window_bounds() {
    let points = jagged_circle(60);
    let window = 7;
    let half = (window / 2) as isize;
    let out = smooth(&points, window).unwrap();

    for (c, p) in out.iter().enumerate() {
        let neighbours: Vec<Point> = (-half..=half)
            .map(|d| points[(c as isize + d).rem_euclid(60) as usize])
            .collect();
        assert!(neighbours.iter().any(|q| q.x == p.x));
        assert!(neighbours.iter().any(|q| q.y == p.y));
    }
}

#[test]
fn monotonic_sequence_window_3() {
    let points: Vec<Point> = (1..=10).map(|i| Point::new(i as f64, i as f64)).collect();
    let out = smooth(&points, 3).unwrap();
    let expected = [2.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 9.0];

    for (p, want) in out.iter().zip(expected) {
        assert_eq!(p.x, want);
        assert_eq!(p.y, want);
    }
}

#[test]
fn invalid_windows_are_rejected_by_name() {
    let points = jagged_circle(10);

    assert_eq!(
        smooth(&points, 4),
        Err(FilterError::InvalidWindowParity { window: 4 })
    );
    assert_eq!(
        smooth(&points, -1),
        Err(FilterError::InvalidWindowSign { window: -1 })
    );
    for window in [10, 11, 13, 101] {
        assert_eq!(
            smooth(&points, window),
            Err(FilterError::WindowTooLarge { window, len: 10 })
        );
    }
    assert_eq!(smooth(&[], 3), Err(FilterError::EmptyInput));
}

#[test]
fn errors_have_readable_messages() {
    let message = smooth(&jagged_circle(10), 4).unwrap_err().to_string();
    assert!(message.contains("uneven"));
    let message = smooth(&jagged_circle(5), 7).unwrap_err().to_string();
    assert!(message.contains('7') && message.contains('5'));
}
