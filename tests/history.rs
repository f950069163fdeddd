use freehand_canvas::collection::StrokeCollection;
use freehand_canvas::geometry::Point;
use freehand_canvas::history::{Command, History};
use freehand_canvas::stroke::StrokeBuilder;

fn draw(history: &mut History, builder: &mut StrokeBuilder, start: i32) {
    history.begin_stroke();
    for i in 0..6 {
        builder.push(Point::new(start, start + i * 10));
    }
    assert!(history.commit(builder));
}

fn first_points(collection: &StrokeCollection) -> Vec<Point> {
    collection.iter().map(|s| s.points()[0]).collect()
}

#[test]
fn test_move_last_is_a_transfer() {
    let mut builder = StrokeBuilder::new();
    let mut source = StrokeCollection::new();
    let mut destination = StrokeCollection::new();
    for start in [0, 100] {
        for i in 0..6 {
            builder.push(Point::new(start, i * 10));
        }
        source.append(&mut builder);
    }
    assert_eq!(source.point_count(), 12);

    let moved_ptr = source.last().unwrap().points().as_ptr();
    let moved_points = source.last().unwrap().points().to_vec();

    assert!(StrokeCollection::move_last(&mut source, &mut destination));
    assert_eq!(source.len() + destination.len(), 2);
    assert_eq!(source.point_count(), 6);
    assert_eq!(destination.point_count(), 6);

    let moved = destination.last().unwrap();
    assert_eq!(moved.points(), moved_points.as_slice());
    assert_eq!(moved.points().as_ptr(), moved_ptr, "points were copied");
}

#[test]
fn test_undo_then_redo_restores_canvas() {
    let mut history = History::new();
    let mut builder = StrokeBuilder::new();
    draw(&mut history, &mut builder, 0);
    draw(&mut history, &mut builder, 100);
    draw(&mut history, &mut builder, 200);
    let before = history.canvas().clone();

    assert!(history.apply(Command::HistoryBack));
    assert!(history.apply(Command::HistoryBack));
    assert_eq!(first_points(history.canvas()), vec![Point::new(0, 0)]);
    assert_eq!(
        first_points(history.undo_buffer()),
        vec![Point::new(200, 200), Point::new(100, 100)]
    );

    assert!(history.apply(Command::HistoryForward));
    assert!(history.apply(Command::HistoryForward));
    assert_eq!(history.canvas(), &before);
    assert!(history.undo_buffer().is_empty());
}

#[test]
fn test_new_stroke_discards_redo() {
    let mut history = History::new();
    let mut builder = StrokeBuilder::new();
    draw(&mut history, &mut builder, 0); // A
    draw(&mut history, &mut builder, 100); // B

    assert!(history.back());
    assert_eq!(history.canvas().len(), 1);
    assert_eq!(history.undo_buffer().len(), 1);

    draw(&mut history, &mut builder, 300); // C
    assert_eq!(
        first_points(history.canvas()),
        vec![Point::new(0, 0), Point::new(300, 300)]
    );
    assert!(history.undo_buffer().is_empty());
    assert_eq!(history.undo_buffer().point_count(), 0);

    assert!(!history.forward());
    assert_eq!(history.canvas().len(), 2);
}

#[test]
fn test_commands_on_empty_collections_are_noops() {
    let mut history = History::new();
    assert!(!history.can_back());
    assert!(!history.can_forward());
    assert!(!history.apply(Command::HistoryBack));
    assert!(!history.apply(Command::HistoryForward));

    let mut builder = StrokeBuilder::new();
    assert!(!history.commit(&mut builder));
    assert!(history.canvas().is_empty());
}

#[test]
fn test_one_stroke_per_command() {
    let mut history = History::new();
    let mut builder = StrokeBuilder::new();
    for start in [0, 50, 100, 150] {
        draw(&mut history, &mut builder, start);
    }

    history.back();
    assert_eq!(history.canvas().len(), 3);
    assert_eq!(history.undo_buffer().len(), 1);
    assert_eq!(history.canvas().point_count(), 18);
}
