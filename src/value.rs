//! Typed attribute values
//!
//! Every attribute stored on an element is an [`AttrValue`]. Rendering a
//! value either yields its canonical text or the empty string, and the empty
//! string means "leave the attribute out". There is no separate notion of an
//! absent value: an empty string, a `false` boolean, a zero `Float`/`Int` and
//! an `Unknown` unit are all dropped from the output.

use std::fmt;

use crate::number::{write_integer, write_number, write_pair};
use crate::path::{Path, Point};

/// Angle units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    /// Not set; angles with this unit are omitted
    #[default]
    Unknown,
    /// A bare number
    Unspecified,
    Deg,
    Rad,
    Grad,
}

impl AngleUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            AngleUnit::Unknown | AngleUnit::Unspecified => "",
            AngleUnit::Deg => "deg",
            AngleUnit::Rad => "rad",
            AngleUnit::Grad => "grad",
        }
    }
}

/// An angle attribute value
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle {
    pub value: f64,
    pub unit: AngleUnit,
}

impl Angle {
    pub const fn new(value: f64, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    /// An angle without a unit suffix
    pub const fn unspecified(value: f64) -> Self {
        Self::new(value, AngleUnit::Unspecified)
    }

    pub const fn deg(deg: f64) -> Self {
        Self::new(deg, AngleUnit::Deg)
    }

    pub const fn rad(rad: f64) -> Self {
        Self::new(rad, AngleUnit::Rad)
    }

    pub const fn grad(grad: f64) -> Self {
        Self::new(grad, AngleUnit::Grad)
    }

    pub fn render(&self) -> String {
        if self.unit == AngleUnit::Unknown {
            return String::new();
        }
        let mut out = String::new();
        write_number(&mut out, self.value);
        out.push_str(self.unit.suffix());
        out
    }
}

/// Length units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    /// Not set; lengths with this unit are omitted
    #[default]
    Unknown,
    /// A unit-less number (user units)
    Number,
    Percent,
    Em,
    Ex,
    Px,
    Cm,
    Mm,
    In,
    Pt,
    Pc,
}

impl LengthUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Unknown | LengthUnit::Number => "",
            LengthUnit::Percent => "%",
            LengthUnit::Em => "em",
            LengthUnit::Ex => "ex",
            LengthUnit::Px => "px",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::In => "in",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
        }
    }
}

/// A length attribute value
///
/// Unlike [`AttrValue::Float`], a length of zero is rendered (`"0"`), so
/// use [`Length::number`] when an explicit zero matters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub const fn number(n: f64) -> Self {
        Self::new(n, LengthUnit::Number)
    }

    pub const fn percent(percentage: f64) -> Self {
        Self::new(percentage, LengthUnit::Percent)
    }

    pub const fn em(em: f64) -> Self {
        Self::new(em, LengthUnit::Em)
    }

    pub const fn ex(ex: f64) -> Self {
        Self::new(ex, LengthUnit::Ex)
    }

    pub const fn px(px: f64) -> Self {
        Self::new(px, LengthUnit::Px)
    }

    pub const fn cm(cm: f64) -> Self {
        Self::new(cm, LengthUnit::Cm)
    }

    pub const fn mm(mm: f64) -> Self {
        Self::new(mm, LengthUnit::Mm)
    }

    pub const fn inches(inches: f64) -> Self {
        Self::new(inches, LengthUnit::In)
    }

    pub const fn pt(pt: f64) -> Self {
        Self::new(pt, LengthUnit::Pt)
    }

    pub const fn pc(pc: f64) -> Self {
        Self::new(pc, LengthUnit::Pc)
    }

    pub fn render(&self) -> String {
        if self.unit == LengthUnit::Unknown {
            return String::new();
        }
        let mut out = String::new();
        write_number(&mut out, self.value);
        out.push_str(self.unit.suffix());
        out
    }
}

/// A bare number is a unit-less length
impl From<f64> for Length {
    fn from(n: f64) -> Self {
        Length::number(n)
    }
}

/// A list of points for `polygon` and `polyline`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Points(pub Vec<Point>);

impl Points {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point
    pub fn push(mut self, x: f64, y: f64) -> Self {
        self.0.push(Point::new(x, y));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            write_pair(&mut out, p.x, p.y);
        }
        out
    }
}

impl<P: Into<Point>> FromIterator<P> for Points {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Points(iter.into_iter().map(Into::into).collect())
    }
}

impl<P: Into<Point>, const N: usize> From<[P; N]> for Points {
    fn from(points: [P; N]) -> Self {
        points.into_iter().collect()
    }
}

/// The `viewBox` rectangle; always rendered, even when all zero
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub const fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, v) in [self.min_x, self.min_y, self.width, self.height]
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                out.push(' ');
            }
            write_number(&mut out, v);
        }
        out
    }
}

/// An attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Angle(Angle),
    Length(Length),
    /// `true` renders as `"true"`; `false` is omitted
    Bool(bool),
    /// Zero is omitted
    Float(f64),
    /// Zero is omitted
    Int(i64),
    /// Rendered verbatim; the empty string is omitted
    Str(String),
    Points(Points),
    ViewBox(ViewBox),
    /// Path data for the `d` attribute; an empty path is omitted
    Path(Path),
}

impl AttrValue {
    /// Render the value, or return the empty string if the attribute should
    /// be left out.
    pub fn render(&self) -> String {
        match self {
            AttrValue::Angle(angle) => angle.render(),
            AttrValue::Length(length) => length.render(),
            AttrValue::Bool(true) => "true".to_string(),
            AttrValue::Bool(false) => String::new(),
            AttrValue::Float(f) => {
                if *f == 0.0 {
                    String::new()
                } else {
                    let mut out = String::new();
                    write_number(&mut out, *f);
                    out
                }
            }
            AttrValue::Int(0) => String::new(),
            AttrValue::Int(i) => {
                let mut out = String::new();
                write_integer(&mut out, *i);
                out
            }
            AttrValue::Str(s) => s.clone(),
            AttrValue::Points(points) => points.render(),
            AttrValue::ViewBox(view_box) => view_box.render(),
            AttrValue::Path(path) => path.render(),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Angle> for AttrValue {
    fn from(angle: Angle) -> Self {
        AttrValue::Angle(angle)
    }
}

impl From<Length> for AttrValue {
    fn from(length: Length) -> Self {
        AttrValue::Length(length)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<f64> for AttrValue {
    fn from(f: f64) -> Self {
        AttrValue::Float(f)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Int(i)
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        AttrValue::Int(i64::from(i))
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<Points> for AttrValue {
    fn from(points: Points) -> Self {
        AttrValue::Points(points)
    }
}

impl From<ViewBox> for AttrValue {
    fn from(view_box: ViewBox) -> Self {
        AttrValue::ViewBox(view_box)
    }
}

impl From<Path> for AttrValue {
    fn from(path: Path) -> Self {
        AttrValue::Path(path)
    }
}
