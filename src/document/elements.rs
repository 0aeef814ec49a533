//! Typed element constructors and attribute setters
//!
//! One constructor per SVG element and one setter per attribute. Generic
//! presentation attributes take strings; geometry attributes take
//! [`Length`]s, where a bare `f64` means a unit-less number.
//!
//! ```rust
//! use svgwrite::elements::*;
//! use svgwrite::{LengthUnit, Path};
//!
//! let doc = svg()
//!     .width_height(4.0, 4.0, LengthUnit::Cm)
//!     .view_box(0.0, 0.0, 400.0, 400.0)
//!     .child(
//!         path()
//!             .d(Path::new().move_to_abs((100.0, 100.0)).line_to_abs((300.0, 100.0)).close_path())
//!             .fill("red"),
//!     );
//!
//! assert_eq!(
//!     doc.to_string(),
//!     r#"<svg height="4cm" version="1.1" viewBox="0 0 400 400" width="4cm" xmlns="http://www.w3.org/2000/svg"><path d="M100,100 L300,100 z" fill="red"></path></svg>"#
//! );
//! ```

use crate::document::Element;
use crate::path::Path;
use crate::value::{Angle, AttrValue, Length, LengthUnit, Points, ViewBox};

pub use crate::document::{char_data, comment};

/// SVG namespace URI
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Create an `<svg>` root element with `version` and `xmlns` already set
pub fn svg() -> Element {
    Element::new("svg")
        .attr("version", "1.1")
        .attr("xmlns", SVG_NAMESPACE)
}

macro_rules! element_constructors {
    ($($func:ident => $name:literal),* $(,)?) => {
        $(
            #[doc = concat!("Create a `<", $name, ">` element")]
            pub fn $func() -> Element {
                Element::new($name)
            }
        )*
    };
}

element_constructors! {
    circle => "circle",
    defs => "defs",
    desc => "desc",
    ellipse => "ellipse",
    foreign_object => "foreignObject",
    g => "g",
    image => "image",
    line => "line",
    linear_gradient => "linearGradient",
    marker => "marker",
    path => "path",
    pattern => "pattern",
    polygon => "polygon",
    polyline => "polyline",
    radial_gradient => "radialGradient",
    rect => "rect",
    stop => "stop",
    style => "style",
    switch => "switch",
    symbol => "symbol",
    text => "text",
    text_path => "textPath",
    title => "title",
    tspan => "tspan",
    use_ => "use",
}

/// Setters for attributes stored verbatim as strings
macro_rules! string_attrs {
    ($($method:ident => $name:literal),* $(,)?) => {
        impl Element {
            $(
                #[doc = concat!("Set the `", $name, "` attribute")]
                pub fn $method(self, value: impl Into<String>) -> Self {
                    self.attr($name, AttrValue::Str(value.into()))
                }
            )*
        }
    };
}

/// Setters for geometry attributes
macro_rules! length_attrs {
    ($($method:ident => $name:literal),* $(,)?) => {
        impl Element {
            $(
                #[doc = concat!("Set the `", $name, "` attribute")]
                pub fn $method(self, value: impl Into<Length>) -> Self {
                    self.attr($name, AttrValue::Length(value.into()))
                }
            )*
        }
    };
}

/// Setters for plain numbers; zero is treated as unset and not written
macro_rules! float_attrs {
    ($($method:ident => $name:literal),* $(,)?) => {
        impl Element {
            $(
                #[doc = concat!("Set the `", $name, "` attribute (omitted when zero)")]
                pub fn $method(self, value: f64) -> Self {
                    self.attr($name, AttrValue::Float(value))
                }
            )*
        }
    };
}

string_attrs! {
    class => "class",
    clip_path => "clip-path",
    dominant_baseline => "dominant-baseline",
    fill => "fill",
    fill_opacity => "fill-opacity",
    fill_rule => "fill-rule",
    font_family => "font-family",
    font_size => "font-size",
    font_style => "font-style",
    font_weight => "font-weight",
    gradient_units => "gradientUnits",
    href => "href",
    id => "id",
    marker_end => "marker-end",
    marker_mid => "marker-mid",
    marker_start => "marker-start",
    marker_units => "markerUnits",
    offset => "offset",
    orient => "orient",
    preserve_aspect_ratio => "preserveAspectRatio",
    required_extensions => "requiredExtensions",
    stop_color => "stop-color",
    stroke => "stroke",
    stroke_dasharray => "stroke-dasharray",
    stroke_linecap => "stroke-linecap",
    stroke_linejoin => "stroke-linejoin",
    stroke_opacity => "stroke-opacity",
    style => "style",
    text_anchor => "text-anchor",
    transform => "transform",
    type_ => "type",
    visibility => "visibility",
}

length_attrs! {
    cx => "cx",
    cy => "cy",
    dx => "dx",
    dy => "dy",
    fx => "fx",
    fy => "fy",
    height => "height",
    marker_height => "markerHeight",
    marker_width => "markerWidth",
    r => "r",
    ref_x => "refX",
    ref_y => "refY",
    rx => "rx",
    ry => "ry",
    stroke_width => "stroke-width",
    width => "width",
    x => "x",
    x1 => "x1",
    x2 => "x2",
    y => "y",
    y1 => "y1",
    y2 => "y2",
}

float_attrs! {
    opacity => "opacity",
    path_length => "pathLength",
    stroke_miterlimit => "stroke-miterlimit",
}

impl Element {
    /// Set `x` and `y` in the given unit
    pub fn xy(self, x: f64, y: f64, unit: LengthUnit) -> Self {
        self.x(Length::new(x, unit)).y(Length::new(y, unit))
    }

    /// Set `width` and `height` in the given unit
    pub fn width_height(self, width: f64, height: f64, unit: LengthUnit) -> Self {
        self.width(Length::new(width, unit))
            .height(Length::new(height, unit))
    }

    /// Set `x`, `y`, `width` and `height` in the given unit
    pub fn xy_width_height(self, x: f64, y: f64, width: f64, height: f64, unit: LengthUnit) -> Self {
        self.xy(x, y, unit).width_height(width, height, unit)
    }

    /// Set `cx`, `cy` and `r` in the given unit
    pub fn cx_cy_r(self, cx: f64, cy: f64, r: f64, unit: LengthUnit) -> Self {
        self.cx(Length::new(cx, unit))
            .cy(Length::new(cy, unit))
            .r(Length::new(r, unit))
    }

    /// Set `cx`, `cy`, `rx` and `ry` in the given unit
    pub fn cx_cy_rx_ry(self, cx: f64, cy: f64, rx: f64, ry: f64, unit: LengthUnit) -> Self {
        self.cx(Length::new(cx, unit))
            .cy(Length::new(cy, unit))
            .rx(Length::new(rx, unit))
            .ry(Length::new(ry, unit))
    }

    /// Set the end points of a `<line>` in user units
    pub fn x1_y1_x2_y2(self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        self.x1(x1).y1(y1).x2(x2).y2(y2)
    }

    /// Set a marker's `refX` and `refY` in user units
    pub fn ref_xy(self, ref_x: f64, ref_y: f64) -> Self {
        self.ref_x(ref_x).ref_y(ref_y)
    }

    /// Set a marker's `markerWidth` and `markerHeight` in user units
    pub fn marker_width_height(self, width: f64, height: f64) -> Self {
        self.marker_width(width).marker_height(height)
    }

    pub fn view_box(self, min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        self.attr("viewBox", ViewBox::new(min_x, min_y, width, height))
    }

    /// Set the `points` of a `<polygon>` or `<polyline>`
    pub fn points(self, points: impl Into<Points>) -> Self {
        self.attr("points", points.into())
    }

    /// Set a `<path>`'s data
    pub fn d(self, path: Path) -> Self {
        self.attr("d", path)
    }

    /// Set the `rotate` attribute of `<text>` and `<tspan>`
    pub fn rotate(self, angle: Angle) -> Self {
        self.attr("rotate", angle)
    }
}
