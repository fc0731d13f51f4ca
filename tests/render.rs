use quadplot::color::{DEFAULT_PALETTE, Rgba};
use quadplot::model::{Point, QuadrantPlot};
use quadplot::render::{Renderer, draw_plot};

#[derive(Default)]
struct RecordingRenderer {
    lines: Vec<(Point, Point, Rgba)>,
}

impl Renderer for RecordingRenderer {
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba) {
        self.lines.push((from, to, color));
    }
}

#[test]
fn polyline_draws_four_offset_lines_per_segment() {
    let mut r = RecordingRenderer::default();
    r.draw_polyline(&[Point::new(0, 0), Point::new(10, 5), Point::new(20, 0)], Rgba::RED);
    assert_eq!(r.lines.len(), 8);
    assert_eq!(r.lines[0], (Point::new(0, 0), Point::new(10, 5), Rgba::RED));
    assert_eq!(r.lines[3], (Point::new(1, 1), Point::new(11, 6), Rgba::RED));
    assert_eq!(r.lines[4].0, Point::new(10, 5));
}

#[test]
fn single_point_draws_nothing() {
    let mut r = RecordingRenderer::default();
    r.draw_polyline(&[Point::new(3, 3)], Rgba::BLUE);
    r.draw_polyline(&[], Rgba::BLUE);
    assert!(r.lines.is_empty());
}

#[test]
fn plot_uses_palette_per_quadrant() {
    let mut plot = QuadrantPlot::default();
    for (q, line) in plot.polylines.iter_mut().enumerate() {
        let q = q as i32;
        *line = vec![Point::new(q, 0), Point::new(q, 10)];
    }
    let mut r = RecordingRenderer::default();
    draw_plot(&mut r, &plot, &DEFAULT_PALETTE);
    assert_eq!(r.lines.len(), 16);
    let colors: Vec<Rgba> = r.lines.chunks(4).map(|c| c[0].2).collect();
    assert_eq!(colors, DEFAULT_PALETTE.to_vec());
}

#[test]
fn saturated_coordinates_draw_without_overflow() {
    let mut plot = QuadrantPlot::default();
    plot.polylines[3] = vec![Point::new(i32::MAX, 183), Point::new(i32::MAX, i32::MAX)];
    let mut r = RecordingRenderer::default();
    draw_plot(&mut r, &plot, &DEFAULT_PALETTE);
    assert_eq!(r.lines.len(), 4);
    assert_eq!(r.lines[1].0, Point::new(i32::MAX, 183));
    assert_eq!(r.lines[3].1, Point::new(i32::MAX, i32::MAX));
}

#[test]
fn extreme_left_axis_values_render() {
    use camino::Utf8Path;
    use quadplot::compute_plot;
    use quadplot::parser::MemSource;

    let text = "w\tx\ty\tz\n1\t1\t1\t-1000000000\n2\t2\t2\t0,001\n";
    let mut source = MemSource::new().with_file("in.txt", text);
    let plot = compute_plot(&mut source, Utf8Path::new("in.txt")).unwrap();
    assert_eq!(plot.polylines[3][0].x, i32::MAX);

    let mut r = RecordingRenderer::default();
    draw_plot(&mut r, &plot, &DEFAULT_PALETTE);
    assert_eq!(r.lines.len(), 16);
}
