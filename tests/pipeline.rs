use camino::{Utf8Path, Utf8PathBuf};
use quadplot::config::{Calibration, MAX_POINT_2, STREAM_COUNT};
use quadplot::model::{Point, Relation};
use quadplot::parser::{FsSource, MemSource};
use quadplot::{PipelineContext, PlotError, compute_plot};
use std::io::Write;

fn assert_near(actual: Point, expected: (i32, i32)) {
    assert!(
        (actual.x - expected.0).abs() <= 1 && (actual.y - expected.1).abs() <= 1,
        "{actual:?} not within 1px of {expected:?}"
    );
}

#[test]
fn end_to_end_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "Alpha\tBeta\tGamma\tDelta").unwrap();
    writeln!(file, "10\t20\t30\t40").unwrap();
    writeln!(file, "20\t40\t60\t80").unwrap();
    file.flush().unwrap();
    let path = Utf8PathBuf::from_path_buf(file.path().to_path_buf()).expect("utf8 temp path");

    let plot = compute_plot(&mut FsSource, &path).expect("plot");

    for q in 0..STREAM_COUNT {
        assert_eq!(plot.polylines[q].len(), 2, "quadrant {q}");
        assert_eq!(plot.segment_count(q), 1);
    }
    // Same ratios as rows (1,2,3,4) and (2,4,6,8).
    assert_near(plot.polylines[0][0], (589, 67));
    assert_near(plot.polylines[0][1], (680, -165));
    assert_near(plot.polylines[1][0], (680, 426));
    assert_near(plot.polylines[1][1], (862, 553));
    assert_near(plot.polylines[2][0], (369, 468));
    assert_near(plot.polylines[2][1], (241, 638));
    assert_near(plot.polylines[3][0], (326, 183));
    assert_near(plot.polylines[3][1], (155, 67));
}

#[test]
fn stages_can_be_inspected() {
    let text = "a\tb\tc\td\n3\t1\t7\t5\n1\t2\t8\t6\n2\t3\t9\t4\n";
    let mut source = MemSource::new().with_file("in.txt", text);
    let mut ctx = PipelineContext::new(Calibration::default());

    ctx.load(&mut source, Utf8Path::new("in.txt")).unwrap();
    assert_eq!(ctx.streams.buffer(0), "a 3 1 2");
    assert_eq!(ctx.streams.buffer(3), "d 5 6 4");

    ctx.build_relations().unwrap();
    assert_eq!(ctx.relations.len(), 3);
    assert_eq!(ctx.relations.quadrant(3)[0], Relation::new(5.0, 3.0));

    let plot = ctx.map().unwrap();
    let a: Vec<f64> = ctx.relations.quadrant(0).iter().map(|r| r.a).collect();
    assert_eq!(a, vec![1.0, 2.0, 3.0]);
    assert_eq!(plot.max_values, [3.0, 3.0, 9.0, 6.0]);
    // Largest `a` of quadrant 1 lands on the right axis endpoint.
    assert_eq!(plot.polylines[1].last().unwrap().x, MAX_POINT_2.x);
}

#[test]
fn mixed_decimal_separators() {
    let text = "w\tx\ty\tz\n0,5\t1.5\t2,25\t4\n1\t3,0\t4.5\t8\n";
    let mut source = MemSource::new().with_file("in.txt", text);
    let plot = compute_plot(&mut source, Utf8Path::new("in.txt")).unwrap();
    assert_eq!(plot.max_values, [1.0, 3.0, 4.5, 8.0]);
}

#[test]
fn errors_surface_to_caller() {
    let missing = compute_plot(&mut FsSource, Utf8Path::new("/definitely/not/here.txt")).unwrap_err();
    assert!(matches!(missing, PlotError::Io { .. }));
    assert!(missing.to_string().contains("/definitely/not/here.txt"));

    let mut source = MemSource::new().with_file("bad.txt", "w\tx\ty\tz\n1\t2\t3,4,5\t4\n");
    let bad = compute_plot(&mut source, Utf8Path::new("bad.txt")).unwrap_err();
    assert!(matches!(bad, PlotError::Parse { ref token, .. } if token == "3,4,5"));
}

#[test]
fn plot_serializes_to_json() {
    let mut source = MemSource::new().with_file("in.txt", "w\tx\ty\tz\n1\t2\t3\t4\n2\t4\t6\t8\n");
    let plot = compute_plot(&mut source, Utf8Path::new("in.txt")).unwrap();
    let json = serde_json::to_value(&plot).unwrap();
    assert_eq!(json["polylines"][1][1]["x"], 862);
    assert_eq!(json["max_values"][3], 8.0);
}
