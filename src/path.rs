//! Path data builder
//!
//! Builds the value of a `<path>` element's `d` attribute one command at a
//! time. Commands are kept exactly in the order they were appended and
//! rendered in the compact form renderers expect, e.g. `M100,100 L300,100 z`.

use std::fmt;

use crate::number::{write_number, write_pair};

/// A 2-D coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// Whether a command's operands are absolute coordinates or offsets from the
/// current point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Absolute,
    Relative,
}

/// A single path command
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath (`M`/`m`)
    MoveTo(Position, Point),
    /// Straight line (`L`/`l`)
    LineTo(Position, Point),
    /// Horizontal line (`H`/`h`)
    HorizontalLineTo(Position, f64),
    /// Vertical line (`V`/`v`)
    VerticalLineTo(Position, f64),
    /// Cubic Bézier curve (`C`/`c`)
    CurveTo {
        position: Position,
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Smooth cubic Bézier curve (`S`/`s`); the first control point is the
    /// reflection of the previous curve's second one
    SmoothCurveTo {
        position: Position,
        control2: Point,
        end: Point,
    },
    /// Close the current subpath (`z`)
    ClosePath,
}

impl PathCommand {
    /// The command letter: upper case for absolute, lower case for relative.
    pub fn letter(&self) -> char {
        let (position, letter) = match self {
            PathCommand::MoveTo(position, _) => (position, 'M'),
            PathCommand::LineTo(position, _) => (position, 'L'),
            PathCommand::HorizontalLineTo(position, _) => (position, 'H'),
            PathCommand::VerticalLineTo(position, _) => (position, 'V'),
            PathCommand::CurveTo { position, .. } => (position, 'C'),
            PathCommand::SmoothCurveTo { position, .. } => (position, 'S'),
            PathCommand::ClosePath => return 'z',
        };
        match position {
            Position::Absolute => letter,
            Position::Relative => letter.to_ascii_lowercase(),
        }
    }

    /// Append this command's letter and operands to `out`
    fn write(&self, out: &mut String) {
        out.push(self.letter());
        match self {
            PathCommand::MoveTo(_, p) | PathCommand::LineTo(_, p) => write_pair(out, p.x, p.y),
            PathCommand::HorizontalLineTo(_, v) | PathCommand::VerticalLineTo(_, v) => {
                write_number(out, *v)
            }
            PathCommand::CurveTo {
                control1,
                control2,
                end,
                ..
            } => write_points(out, &[*control1, *control2, *end]),
            PathCommand::SmoothCurveTo { control2, end, .. } => {
                write_points(out, &[*control2, *end])
            }
            PathCommand::ClosePath => {}
        }
    }
}

fn write_points(out: &mut String, points: &[Point]) {
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_pair(out, p.x, p.y);
    }
}

/// An SVG path: an ordered, append-only list of commands
///
/// # Example
///
/// ```rust
/// use svgwrite::Path;
///
/// let d = Path::new()
///     .move_to_abs((100.0, 100.0))
///     .line_to_abs((300.0, 100.0))
///     .line_to_abs((200.0, 300.0))
///     .close_path();
///
/// assert_eq!(d.render(), "M100,100 L300,100 L200,300 z");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from an existing list of commands
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Append a command
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// The commands in the order they were appended
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn with(mut self, command: PathCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Append an absolute moveto (`M`)
    pub fn move_to_abs(self, p: impl Into<Point>) -> Self {
        self.with(PathCommand::MoveTo(Position::Absolute, p.into()))
    }

    /// Append a relative moveto (`m`)
    pub fn move_to_rel(self, p: impl Into<Point>) -> Self {
        self.with(PathCommand::MoveTo(Position::Relative, p.into()))
    }

    /// Append an absolute lineto (`L`)
    pub fn line_to_abs(self, p: impl Into<Point>) -> Self {
        self.with(PathCommand::LineTo(Position::Absolute, p.into()))
    }

    /// Append a relative lineto (`l`)
    pub fn line_to_rel(self, p: impl Into<Point>) -> Self {
        self.with(PathCommand::LineTo(Position::Relative, p.into()))
    }

    /// Append an absolute horizontal lineto (`H`)
    pub fn h_line_to_abs(self, x: f64) -> Self {
        self.with(PathCommand::HorizontalLineTo(Position::Absolute, x))
    }

    /// Append a relative horizontal lineto (`h`)
    pub fn h_line_to_rel(self, dx: f64) -> Self {
        self.with(PathCommand::HorizontalLineTo(Position::Relative, dx))
    }

    /// Append an absolute vertical lineto (`V`)
    pub fn v_line_to_abs(self, y: f64) -> Self {
        self.with(PathCommand::VerticalLineTo(Position::Absolute, y))
    }

    /// Append a relative vertical lineto (`v`)
    pub fn v_line_to_rel(self, dy: f64) -> Self {
        self.with(PathCommand::VerticalLineTo(Position::Relative, dy))
    }

    /// Append an absolute cubic curveto (`C`)
    pub fn curve_to_abs(
        self,
        control1: impl Into<Point>,
        control2: impl Into<Point>,
        end: impl Into<Point>,
    ) -> Self {
        self.with(PathCommand::CurveTo {
            position: Position::Absolute,
            control1: control1.into(),
            control2: control2.into(),
            end: end.into(),
        })
    }

    /// Append a relative cubic curveto (`c`)
    pub fn curve_to_rel(
        self,
        control1: impl Into<Point>,
        control2: impl Into<Point>,
        end: impl Into<Point>,
    ) -> Self {
        self.with(PathCommand::CurveTo {
            position: Position::Relative,
            control1: control1.into(),
            control2: control2.into(),
            end: end.into(),
        })
    }

    /// Append an absolute smooth curveto (`S`)
    pub fn smooth_curve_to_abs(self, control2: impl Into<Point>, end: impl Into<Point>) -> Self {
        self.with(PathCommand::SmoothCurveTo {
            position: Position::Absolute,
            control2: control2.into(),
            end: end.into(),
        })
    }

    /// Append a relative smooth curveto (`s`)
    pub fn smooth_curve_to_rel(self, control2: impl Into<Point>, end: impl Into<Point>) -> Self {
        self.with(PathCommand::SmoothCurveTo {
            position: Position::Relative,
            control2: control2.into(),
            end: end.into(),
        })
    }

    /// Append a closepath (`z`)
    pub fn close_path(self) -> Self {
        self.with(PathCommand::ClosePath)
    }

    /// Render as path data; an empty path renders as the empty string
    pub fn render(&self) -> String {
        let mut d = String::new();
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            command.write(&mut d);
        }
        d
    }
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl Extend<PathCommand> for Path {
    fn extend<I: IntoIterator<Item = PathCommand>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
