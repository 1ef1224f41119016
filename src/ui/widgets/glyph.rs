// SPDX-License-Identifier: MPL-2.0
//! Small line-art icons drawn on a Canvas.
//!
//! Every glyph is stroked on a square frame so it inherits the caller's color
//! and size; no image assets or icon fonts are involved.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};

/// Shapes available as glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Magnifying glass (submit button at rest).
    Search,
    /// Circle with a check mark (analysis items, success toasts).
    CheckCircle,
    /// Circle with an exclamation mark (warning and error toasts).
    Alert,
    /// Diagonal cross (dismiss buttons).
    Cross,
}

/// A single glyph, ready to be turned into an element.
pub struct Glyph {
    cache: Cache,
    kind: Kind,
    color: Color,
    size: f32,
}

impl Glyph {
    #[must_use]
    pub fn new(kind: Kind, color: Color, size: f32) -> Self {
        Self {
            cache: Cache::default(),
            kind,
            color,
            size,
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Shorthand for `Glyph::new(kind, color, size).into_element()`.
pub fn glyph<Message: 'static>(kind: Kind, color: Color, size: f32) -> Element<'static, Message> {
    Glyph::new(kind, color, size).into_element()
}

impl<Message> canvas::Program<Message> for Glyph {
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
                let side = frame.width().min(frame.height());
                let stroke = Stroke::default()
                    .with_width((side / 10.0).max(1.5))
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round)
                    .with_line_join(canvas::LineJoin::Round);
                let center = frame.center();
                let radius = side / 2.0 - stroke.width;
                // Points are given in a unit square centered on the glyph.
                let at = |x: f32, y: f32| Point::new(center.x + x * side, center.y + y * side);

                match self.kind {
                    Kind::Search => {
                        let lens_center = at(-0.08, -0.08);
                        let lens_radius = side * 0.28;
                        frame.stroke(&Path::circle(lens_center, lens_radius), stroke);
                        frame.stroke(&Path::line(at(0.13, 0.13), at(0.4, 0.4)), stroke);
                    }
                    Kind::CheckCircle => {
                        frame.stroke(&Path::circle(center, radius), stroke);
                        let check = Path::new(|builder| {
                            builder.move_to(at(-0.2, 0.0));
                            builder.line_to(at(-0.06, 0.14));
                            builder.line_to(at(0.2, -0.12));
                        });
                        frame.stroke(&check, stroke);
                    }
                    Kind::Alert => {
                        frame.stroke(&Path::circle(center, radius), stroke);
                        frame.stroke(&Path::line(at(0.0, -0.2), at(0.0, 0.04)), stroke);
                        frame.fill(&Path::circle(at(0.0, 0.18), stroke.width * 0.7), self.color);
                    }
                    Kind::Cross => {
                        frame.stroke(&Path::line(at(-0.3, -0.3), at(0.3, 0.3)), stroke);
                        frame.stroke(&Path::line(at(0.3, -0.3), at(-0.3, 0.3)), stroke);
                    }
                }
            });

        vec![geometry]
    }
}
