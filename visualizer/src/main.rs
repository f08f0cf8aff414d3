use echocore::prelude::{Region, SceneConfig, ScreenPoint};
use echocore::processing::{ColorCounts, ColorId, FrameReport, Scene};
use echocore::sensor::{generate_samples, GeneratorConfig};
use iced::{
    event, mouse, time,
    widget::{
        canvas::{self, path::Arc, Canvas, Frame, Geometry, Path, Stroke, Text},
        column, text, Container,
    },
    window, Color, Element, Event, Length, Pixels, Point, Radians, Rectangle, Renderer, Size,
    Subscription, Task, Theme,
};
use log::{error, info};
use std::time::Duration;

const FRAME_INTERVAL: Duration = Duration::from_millis(33);

fn main() -> iced::Result {
    env_logger::init();
    let config = SceneConfig::default();
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .window_size(Size::new(config.display_width, config.display_height))
        .run()
}

fn application_title(_: &Visualizer) -> String {
    "Echolocation cone demonstrator".into()
}

fn application_subscription(_: &Visualizer) -> Subscription<Message> {
    Subscription::batch([
        time::every(FRAME_INTERVAL).map(|_| Message::Tick),
        event::listen_with(pointer_event),
    ])
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Dark
}

fn pointer_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        _ => None,
    }
}

struct Visualizer {
    scene: Option<Scene>,
    report: FrameReport,
    pointer: Option<ScreenPoint>,
    status: String,
}

#[derive(Debug, Clone)]
enum Message {
    Tick,
    PointerMoved(Point),
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        let config = SceneConfig::default();
        let samples = generate_samples(&GeneratorConfig::default(), &config);
        let (scene, status) = match Scene::new(config, samples) {
            Ok(scene) => {
                let status = format!("{} samples seeded", scene.samples().len());
                info!("{}", status);
                (Some(scene), status)
            }
            Err(err) => {
                error!("scene rejected: {err}");
                (None, format!("Scene error: {err}"))
            }
        };

        (
            Visualizer {
                scene,
                report: FrameReport::default(),
                pointer: None,
                status,
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                if let Some(scene) = state.scene.as_mut() {
                    state.report = scene.tick(state.pointer);
                }
                Task::none()
            }
            Message::PointerMoved(position) => {
                state.pointer = Some(ScreenPoint::new(position.x, position.y));
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        match &state.scene {
            Some(scene) => Canvas::new(SceneView {
                scene,
                report: &state.report,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
            None => Container::new(column![text(&state.status).size(18)].padding(20))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        }
    }
}

/// Draws all four panels from the latest frame report.
struct SceneView<'a> {
    scene: &'a Scene,
    report: &'a FrameReport,
}

impl canvas::Program<Message> for SceneView<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::BLACK);

        self.draw_map(&mut frame);
        self.draw_first_person(&mut frame);
        self.draw_panels(&mut frame);
        self.draw_radar(&mut frame);

        vec![frame.into_geometry()]
    }
}

impl SceneView<'_> {
    fn draw_map(&self, frame: &mut Frame) {
        let config = self.scene.config();
        let center = to_point(config.map_origin());

        for ((&raw, radius), color) in config
            .distances
            .iter()
            .zip(config.scaled_thresholds())
            .zip(ColorId::ALL)
        {
            let ring = Path::circle(center, radius);
            frame.stroke(&ring, stroke(band_color(color), 2.0));
            frame.fill_text(label(
                format!("{}m", (raw / 10.0).floor()),
                Point::new(center.x + radius, center.y),
                band_color(color),
                16.0,
            ));
        }

        let cone = self.scene.cone();
        let (left, right) = cone.edges();
        let cone_path = Path::new(|builder| {
            builder.move_to(center);
            builder.line_to(to_point(left));
            builder.move_to(center);
            builder.line_to(to_point(right));
        });
        frame.stroke(&cone_path, stroke(Color::WHITE, 2.0));
        let arc = Path::new(|builder| {
            builder.arc(Arc {
                center,
                radius: cone.length(),
                start_angle: Radians(cone.orientation() - cone.half_width()),
                end_angle: Radians(cone.orientation() + cone.half_width()),
            })
        });
        frame.stroke(&arc, stroke(Color::WHITE, 2.0));

        for decision in &self.report.decisions {
            if decision.counted && decision.in_map_view {
                let dot = Path::circle(to_point(decision.sample.position()), 5.0);
                frame.fill(&dot, band_color(decision.color));
            }
        }
    }

    fn draw_first_person(&self, frame: &mut Frame) {
        let config = self.scene.config();
        let projector = self.scene.aggregator().projector();
        let ground = projector.ground_level();
        let panel_x = config.view_panel_x();

        let ground_line = Path::line(
            Point::new(panel_x, ground),
            Point::new(config.display_width, ground),
        );
        frame.stroke(&ground_line, stroke(Color::WHITE, 2.0));

        for decision in &self.report.decisions {
            if decision.projected.is_none() {
                continue;
            }
            let sample = decision.sample;
            let echo = projector.project_3d(
                sample.x(),
                sample.y(),
                sample.depth(),
                projector.viewer_distance(),
                1.0,
            );
            let faded = Color {
                a: 0.35,
                ..band_color(decision.color)
            };
            frame.fill(&Path::circle(to_point(echo), 3.0), faded);
        }

        for (color, projected) in self.report.projected_silhouettes() {
            draw_person(
                frame,
                to_point(projected.position),
                band_color(color),
                projected.scale as f32,
            );
        }

        for color in ColorId::ALL {
            let row = projector.counter_row(color);
            let left = self.report.left_exits.get(color);
            if left > 0 {
                draw_arrow(frame, Point::new(panel_x + 10.0, row), band_color(color), -1.0);
                frame.fill_text(label(
                    left.to_string(),
                    Point::new(panel_x + 44.0, row - 12.0),
                    band_color(color),
                    26.0,
                ));
            }
            let right = self.report.right_exits.get(color);
            if right > 0 {
                draw_arrow(
                    frame,
                    Point::new(config.display_width - 30.0, row),
                    band_color(color),
                    1.0,
                );
                frame.fill_text(label(
                    right.to_string(),
                    Point::new(config.display_width - 66.0, row - 12.0),
                    band_color(color),
                    26.0,
                ));
            }
        }
    }

    fn draw_panels(&self, frame: &mut Frame) {
        let config = self.scene.config();
        let divider = Path::line(
            Point::new(config.view_panel_x(), 0.0),
            Point::new(config.view_panel_x(), config.display_height),
        );
        frame.stroke(&divider, stroke(Color::WHITE, 2.0));

        let log_panel = config.log_panel();
        let info_panel = config.info_panel();
        for panel in [log_panel, info_panel] {
            frame.stroke(&region_path(panel), stroke(Color::WHITE, 2.0));
        }

        let titles = [
            ("Echo sensor (2D)", Point::new(10.0, 10.0)),
            (
                "First-person view",
                Point::new(config.view_panel_x() + 10.0, 10.0),
            ),
            ("Log:", Point::new(log_panel.left + 10.0, log_panel.top + 10.0)),
            (
                "Overview",
                Point::new(info_panel.left + 10.0, info_panel.top + 10.0),
            ),
        ];
        for (title, position) in titles {
            frame.fill_text(label(title.to_string(), position, Color::WHITE, 26.0));
        }

        draw_counts(
            frame,
            None,
            &self.report.silhouettes,
            Point::new(log_panel.left + 10.0, log_panel.top + 40.0),
        );
        draw_counts(
            frame,
            Some("General data:"),
            &self.report.map_points,
            Point::new(info_panel.left + 10.0, info_panel.top + 40.0),
        );
    }

    fn draw_radar(&self, frame: &mut Frame) {
        let radar = self.scene.radar();
        let center = to_point(radar.center());
        let rings = radar.rings();

        for (radius, color) in rings {
            frame.stroke(&Path::circle(center, radius), stroke(band_color(color), 2.0));
        }
        let outer = rings[rings.len() - 1].0;
        let cross = Path::new(|builder| {
            builder.move_to(Point::new(center.x, center.y - outer));
            builder.line_to(Point::new(center.x, center.y + outer));
            builder.move_to(Point::new(center.x - outer, center.y));
            builder.line_to(Point::new(center.x + outer, center.y));
        });
        frame.stroke(&cross, stroke(Color::WHITE, 1.0));

        for blip in radar.blips(self.scene.cone(), self.scene.samples()) {
            let position = to_point(blip.position);
            frame.fill_rectangle(
                Point::new(position.x - 5.0, position.y - 5.0),
                Size::new(10.0, 10.0),
                band_color(blip.color),
            );
        }
    }
}

fn draw_person(frame: &mut Frame, base: Point, color: Color, scale: f32) {
    let Point { x, y } = base;
    let limb = 10.0 * scale;

    frame.fill(&Path::circle(Point::new(x, y - 40.0 * scale), 10.0 * scale), color);
    let body = Path::new(|builder| {
        builder.move_to(Point::new(x, y - 30.0 * scale));
        builder.line_to(Point::new(x, y - 10.0 * scale));
        for direction in [-1.0, 1.0] {
            builder.move_to(Point::new(x, y - 25.0 * scale));
            builder.line_to(Point::new(x + direction * limb, y - 20.0 * scale));
            builder.move_to(Point::new(x, y - 10.0 * scale));
            builder.line_to(Point::new(x + direction * limb, y));
        }
    });
    frame.stroke(&body, stroke(color, 2.0));
}

/// `direction` is -1.0 for a left-pointing arrow and 1.0 for a right-pointing one.
fn draw_arrow(frame: &mut Frame, tip: Point, color: Color, direction: f32) {
    let arrow = Path::new(|builder| {
        builder.move_to(tip);
        builder.line_to(Point::new(tip.x - direction * 20.0, tip.y - 10.0));
        builder.line_to(Point::new(tip.x - direction * 20.0, tip.y + 10.0));
        builder.close();
    });
    frame.fill(&arrow, color);
}

fn draw_counts(frame: &mut Frame, heading: Option<&str>, counts: &ColorCounts, origin: Point) {
    let lines = heading
        .map(str::to_string)
        .into_iter()
        .chain(
            counts
                .non_zero()
                .map(|(color, count)| format!("{}: {}", color.name(), count)),
        );
    for (index, line) in lines.enumerate() {
        let position = Point::new(origin.x, origin.y + index as f32 * 22.0);
        frame.fill_text(label(line, position, Color::WHITE, 18.0));
    }
}

fn region_path(region: Region) -> Path {
    Path::rectangle(
        Point::new(region.left, region.top),
        Size::new(region.width(), region.height()),
    )
}

fn label(content: String, position: Point, color: Color, size: f32) -> Text {
    Text {
        content,
        position,
        color,
        size: Pixels(size),
        ..Text::default()
    }
}

fn stroke(color: Color, width: f32) -> Stroke<'static> {
    Stroke::default().with_color(color).with_width(width)
}

fn band_color(color: ColorId) -> Color {
    let (r, g, b) = color.rgb();
    Color::from_rgb8(r, g, b)
}

fn to_point(point: ScreenPoint) -> Point {
    Point::new(point.x, point.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use echocore::processing::Projector;

    #[test]
    fn band_colors_match_rgb_table() {
        assert_eq!(band_color(ColorId::White), Color::WHITE);
        assert_eq!(band_color(ColorId::Red), Color::from_rgb8(255, 0, 0));
    }

    #[test]
    fn silhouette_scale_reaches_the_canvas() {
        let config = SceneConfig::default();
        let projector = Projector::from_scene(&config);
        let projected = projector.project_silhouette(0.0, ColorId::White);
        assert_eq!(
            to_point(projected.position),
            Point::new(600.0, config.ground_level())
        );
    }
}
