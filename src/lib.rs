//! svgwrite - Typed construction and serialization of SVG documents
//!
//! Documents are built as trees of [`Element`]s whose attributes are typed
//! values ([`Length`], [`Angle`], [`Points`], [`Path`], ...). Each value knows
//! its canonical text form and when it should be left out entirely, so an
//! unset value never reaches the output.
//!
//! # Example
//!
//! ```rust
//! use svgwrite::elements::*;
//! use svgwrite::{LengthUnit, Path};
//!
//! let triangle = svg()
//!     .width_height(4.0, 4.0, LengthUnit::Cm)
//!     .view_box(0.0, 0.0, 400.0, 400.0)
//!     .child(title().child(char_data("Example triangle01")))
//!     .child(
//!         path().d(Path::new()
//!             .move_to_abs((100.0, 100.0))
//!             .line_to_abs((300.0, 100.0))
//!             .line_to_abs((200.0, 300.0))
//!             .close_path()),
//!     );
//!
//! let mut out = Vec::new();
//! let written = triangle.write_to_indent(&mut out, "", "  ").unwrap();
//! assert_eq!(written, out.len() as u64);
//! assert!(String::from_utf8(out).unwrap().contains(r#"d="M100,100 L300,100 L200,300 z""#));
//! ```

#[cfg(feature = "clock")]
pub mod clock;
pub mod document;
pub mod error;
pub mod number;
pub mod path;
pub mod value;
pub mod writer;

pub use document::elements;
pub use document::{char_data, comment, Element, Node};
pub use error::{Error, Result};
pub use number::format_number;
pub use path::{Path, PathCommand, Point, Position};
pub use value::{Angle, AngleUnit, AttrValue, Length, LengthUnit, Points, ViewBox};
pub use writer::{write_document, WriteOptions};
