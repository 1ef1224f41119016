// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas for smooth rotation.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Spinner drawn as a faint ring with a rotating half arc.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a new animated spinner with the given color, rotation angle and side length.
    #[must_use]
    pub fn new(color: Color, rotation: f32, size: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Advances a rotation angle by `step`, wrapping into `[0, TAU)`.
#[must_use]
pub fn advance(rotation: f32, step: f32) -> f32 {
    (rotation + step).rem_euclid(TAU)
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let line_width = (frame.width().min(frame.height()) / 8.0).max(1.5);
                let radius = frame.width().min(frame.height()) / 2.0 - line_width;

                let background_circle = Path::circle(center, radius);
                frame.stroke(
                    &background_circle,
                    Stroke::default().with_width(line_width).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // Arc from rotation angle to rotation + 180°, starting at the top
                let start_angle = self.rotation - PI / 2.0;
                let end_angle = start_angle + PI;

                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));

                let segments = 24;
                #[allow(clippy::cast_precision_loss)]
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + (end_angle - start_angle) * t;
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(line_width)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
