//! Canvas drawing for the S-N plot
//!
//! Lays out a [`PlotScene`] for the current canvas size and turns it into
//! strokes and text. All geometry comes from `sn_core::plot`.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use sn_core::mapping::PlotArea;
use sn_core::plot::{
    build_scene, Label, PlotScene, Rgb, Segment, TextAnchor, AXIS_COLOR, BACKGROUND, CURVE_WIDTH,
    LABEL_COLOR, TICK_COLOR, TITLE_COLOR,
};
use sn_core::AppState;

use crate::Message;

const TICK_LABEL_SIZE: f32 = 10.0;
const TITLE_SIZE: f32 = 12.0;

/// Canvas program for the S-N plot
pub struct SnPlot<'a> {
    state: &'a AppState,
}

impl<'a> SnPlot<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

fn color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

fn point(p: sn_core::plot::ScenePoint) -> Point {
    Point::new(p.x as f32, p.y as f32)
}

fn stroke_segment(frame: &mut Frame, segment: &Segment, color: Color, width: f32) {
    let line = Path::line(point(segment.from), point(segment.to));
    frame.stroke(&line, Stroke::default().with_color(color).with_width(width));
}

fn fill_label(frame: &mut Frame, label: &Label, color: Color, size: f32) {
    let align_x = match label.anchor {
        TextAnchor::Left => iced::alignment::Horizontal::Left,
        TextAnchor::Center => iced::alignment::Horizontal::Center,
        TextAnchor::Right => iced::alignment::Horizontal::Right,
    };

    // Text is placed by its top edge; y-axis labels are centered on their tick
    let mut position = point(label.position);
    if label.anchor == TextAnchor::Right {
        position.y -= size / 2.0;
    }

    frame.fill_text(Text {
        content: label.text.clone(),
        position,
        color,
        size: iced::Pixels(size),
        align_x: align_x.into(),
        ..Text::default()
    });
}

fn draw_scene(frame: &mut Frame, scene: &PlotScene) {
    let tick_color = color(TICK_COLOR);
    let label_color = color(LABEL_COLOR);

    for tick in scene.x_ticks.iter().chain(&scene.y_ticks) {
        stroke_segment(frame, &tick.mark, tick_color, 1.0);
        if let Some(label) = &tick.label {
            fill_label(frame, label, label_color, TICK_LABEL_SIZE);
        }
    }

    let axis_color = color(AXIS_COLOR);
    stroke_segment(frame, &scene.x_axis, axis_color, 1.0);
    stroke_segment(frame, &scene.y_axis, axis_color, 1.0);

    let title_color = color(TITLE_COLOR);
    fill_label(frame, &scene.x_title, title_color, TITLE_SIZE);
    fill_label(frame, &scene.y_title, title_color, TITLE_SIZE);

    for curve in &scene.curves {
        let Some((first, rest)) = curve.points.split_first() else {
            continue;
        };
        let path = Path::new(|builder| {
            builder.move_to(point(*first));
            for p in rest {
                builder.line_to(point(*p));
            }
        });
        frame.stroke(
            &path,
            Stroke::default()
                .with_color(color(curve.color))
                .with_width(CURVE_WIDTH as f32),
        );
    }
}

impl canvas::Program<Message> for SnPlot<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), color(BACKGROUND));

        let area = PlotArea::new(bounds.width as f64, bounds.height as f64);
        let scene = build_scene(self.state, area);
        draw_scene(&mut frame, &scene);

        vec![frame.into_geometry()]
    }
}
