use freehand_canvas::geometry::{Bounds, Point, distance};
use freehand_canvas::stroke::{StrokeBuilder, decimation_threshold};

fn push_all(builder: &mut StrokeBuilder, coords: &[(i32, i32)]) -> Vec<bool> {
    coords
        .iter()
        .map(|&(x, y)| builder.push(Point::new(x, y)))
        .collect()
}

#[test]
fn test_unit_spacing_is_kept_early() {
    let mut builder = StrokeBuilder::new();
    let kept = push_all(&mut builder, &[(0, 0), (0, 1), (0, 2)]);
    assert_eq!(kept, vec![true, true, true]);
    assert_eq!(builder.len(), 3);
}

#[test]
fn test_duplicate_point_is_rejected() {
    let mut builder = StrokeBuilder::new();
    let kept = push_all(&mut builder, &[(0, 0), (0, 1), (0, 1)]);
    assert_eq!(kept, vec![true, true, false]);
    assert_eq!(builder.points(), &[Point::new(0, 0), Point::new(0, 1)]);
}

#[test]
fn test_threshold_coarsens_after_five_points() {
    let mut builder = StrokeBuilder::new();
    push_all(&mut builder, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
    assert_eq!(builder.len(), 5);

    assert!(!builder.push(Point::new(0, 7)), "distance 3 is below 4");
    assert!(builder.push(Point::new(0, 8)), "distance 4 meets the threshold");
    assert_eq!(builder.len(), 6);
}

#[test]
fn test_fractional_distance_truncates_before_comparison() {
    let mut builder = StrokeBuilder::new();
    push_all(&mut builder, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);

    // sqrt(3^2 + 2^2) = 3.6, truncated to 3
    assert!(!builder.push(Point::new(3, 6)));
    // sqrt(3^2 + 3^2) = 4.24, truncated to 4
    assert!(builder.push(Point::new(3, 7)));
}

#[test]
fn test_kept_points_form_decimated_subsequence() {
    // Deterministic jittery walk
    let mut seed: u32 = 0x2545_f491;
    let mut next = move || {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        ((seed >> 16) % 7) as i32 - 3
    };
    let mut input = Vec::new();
    let mut current = Point::new(100, 100);
    for _ in 0..500 {
        current = Point::new(current.x + next(), current.y + next());
        input.push(current);
    }

    let mut builder = StrokeBuilder::new();
    for point in &input {
        builder.push(*point);
    }
    let kept = builder.points();
    assert!(!kept.is_empty());
    assert_eq!(kept[0], input[0]);

    // Order preserved: kept points appear in the input in the same order.
    let mut cursor = input.iter();
    for point in kept {
        assert!(cursor.any(|p| p == point));
    }

    for (count, pair) in kept.windows(2).enumerate() {
        assert!(distance(pair[0], pair[1]) >= decimation_threshold(count + 1));
    }
}

#[test]
fn test_finalize_computes_tight_bounds() {
    let mut builder = StrokeBuilder::new();
    push_all(&mut builder, &[(5, 5), (-3, 10), (12, -4), (0, 0)]);

    let stroke = builder.finalize().unwrap();
    assert_eq!(stroke.bounds(), Bounds::new(-3, -4, 12, 10));
    assert_eq!(stroke.len(), 4);
    assert_eq!(stroke.points()[1], Point::new(-3, 10));
}

#[test]
fn test_builder_forgets_previous_stroke() {
    let mut builder = StrokeBuilder::new();
    push_all(&mut builder, &[(0, 0), (0, 10), (0, 20), (0, 30), (0, 40), (0, 50)]);
    builder.finalize().unwrap();
    assert!(builder.is_empty());

    // A point right next to the old last point is kept: no memory of the prior stroke.
    assert!(builder.push(Point::new(0, 51)));
    assert!(builder.push(Point::new(0, 52)), "fine spacing applies again");

    let stroke = builder.finalize().unwrap();
    assert_eq!(stroke.points(), &[Point::new(0, 51), Point::new(0, 52)]);
    assert_eq!(stroke.bounds(), Bounds::new(0, 51, 0, 52));
}
