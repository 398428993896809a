//! PostgreSQL geometric text format.
//!
//! Rendering produces the literal syntax of the native column types:
//!
//! | Type | Column | Text |
//! |---|---|---|
//! | Point, Vector | `point` | `(x,y)` |
//! | Segment | `lseg` | `[(x1,y1),(x2,y2)]` |
//! | Box | `box` | `((x1,y1),(x2,y2))` |
//! | Circle | `circle` | `<(x,y),r>` |
//!
//! Decoding starts from the float sequence a driver extracts from a column
//! ([`DriverValue::Floats`]); this module only checks the count and assigns
//! the values by position.

use crate::error::{ArityError, PlanarError, Result, WireError};
use crate::format::format_float;
use crate::geometry::{Aabb, Circle, Path, Point, Polygon, Segment, Vector};

/// A loosely typed value as handed over by a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Floats(Vec<f64>),
}

impl DriverValue {
    /// Short name of the variant, for error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Floats(_) => "floats",
        }
    }
}

/// Checks that `src` is a float sequence of the expected size.
///
/// A positive `expected` demands exactly that many values. A negative
/// `expected` of `-k` demands a non-zero multiple of `k`, as used for
/// variable-length point lists. Zero accepts any length.
///
/// # Errors
///
/// Returns [`WireError::TypeMismatch`] if `src` is not a float sequence and
/// [`WireError::Arity`] if the count does not match.
pub fn expect_floats(src: &DriverValue, expected: isize) -> Result<&[f64]> {
    let DriverValue::Floats(floats) = src else {
        return Err(WireError::TypeMismatch { found: src.kind() }.into());
    };

    let actual = floats.len();
    let multiple = expected.unsigned_abs();
    if expected > 0 {
        if actual != multiple {
            return Err(WireError::from(ArityError::Exact {
                expected: multiple,
                actual,
            })
            .into());
        }
    } else if expected < 0 && (actual == 0 || actual % multiple != 0) {
        return Err(WireError::from(ArityError::Multiple { multiple, actual }).into());
    }

    Ok(floats)
}

/// Same as [`expect_floats`], with failures wrapped in
/// [`WireError::Scan`] naming the type being decoded.
fn scan<'a>(src: &'a DriverValue, expected: isize, target: &'static str) -> Result<&'a [f64]> {
    expect_floats(src, expected).map_err(|e| match e {
        PlanarError::Wire(source) => {
            tracing::debug!(target_type = target, error = %source, "rejecting driver value");
            WireError::Scan {
                target,
                source: Box::new(source),
            }
            .into()
        }
        other => other,
    })
}

/// Conversion between a geometry value and PostgreSQL's text format.
pub trait WireValue: Sized {
    /// Renders the value in PostgreSQL's literal syntax.
    fn to_wire(&self) -> String;

    /// Assigns the driver's float sequence to a new value.
    ///
    /// # Errors
    ///
    /// Returns an error if `src` is not a float sequence of the right size.
    fn from_driver(src: &DriverValue) -> Result<Self>;
}

impl WireValue for Point {
    fn to_wire(&self) -> String {
        let (x, y) = self.values();
        format!("({},{})", format_float(x), format_float(y))
    }

    fn from_driver(src: &DriverValue) -> Result<Self> {
        let f = scan(src, 2, "Point")?;
        Ok(Point::new(f[0], f[1]))
    }
}

impl WireValue for Vector {
    fn to_wire(&self) -> String {
        let (x, y) = self.values();
        format!("({},{})", format_float(x), format_float(y))
    }

    fn from_driver(src: &DriverValue) -> Result<Self> {
        let f = scan(src, 2, "Vector")?;
        Ok(Vector::new(f[0], f[1]))
    }
}

impl WireValue for Segment {
    fn to_wire(&self) -> String {
        let (start, end) = self.endpoints();
        format!("[{},{}]", start.to_wire(), end.to_wire())
    }

    fn from_driver(src: &DriverValue) -> Result<Self> {
        let f = scan(src, 4, "Segment")?;
        Ok(Segment::new(Point::new(f[0], f[1]), Point::new(f[2], f[3])))
    }
}

impl WireValue for Aabb {
    fn to_wire(&self) -> String {
        let (min, max) = self.corners();
        format!("({},{})", min.to_wire(), max.to_wire())
    }

    fn from_driver(src: &DriverValue) -> Result<Self> {
        let f = scan(src, 4, "Box")?;
        Ok(Aabb::new(Point::new(f[0], f[1]), Point::new(f[2], f[3])))
    }
}

impl WireValue for Circle {
    fn to_wire(&self) -> String {
        format!("<{},{}>", self.center().to_wire(), format_float(self.radius()))
    }

    fn from_driver(src: &DriverValue) -> Result<Self> {
        let f = scan(src, 3, "Circle")?;
        Ok(Circle::new(Point::new(f[0], f[1]), f[2]))
    }
}

/// Decodes a variable-length list of points from `x, y` pairs.
///
/// # Errors
///
/// Returns an error if `src` is not a non-empty float sequence of even
/// length.
pub fn decode_points(src: &DriverValue) -> Result<Vec<Point>> {
    let floats = scan(src, -2, "points")?;
    Ok(floats
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect())
}

/// Any value the wire format knows about.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    Vector(Vector),
    Segment(Segment),
    Box(Aabb),
    Circle(Circle),
    Path(Path),
    Polygon(Polygon),
}

macro_rules! impl_from_geometry {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Geometry {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_geometry! {
    Point => Point,
    Vector => Vector,
    Segment => Segment,
    Box => Aabb,
    Circle => Circle,
    Path => Path,
    Polygon => Polygon,
}

/// Renders any geometry value in PostgreSQL's literal syntax.
///
/// # Errors
///
/// Returns [`WireError::Unimplemented`] for paths and polygons.
pub fn to_wire_string(geometry: &Geometry) -> Result<String> {
    match geometry {
        Geometry::Point(p) => Ok(p.to_wire()),
        Geometry::Vector(v) => Ok(v.to_wire()),
        Geometry::Segment(s) => Ok(s.to_wire()),
        Geometry::Box(b) => Ok(b.to_wire()),
        Geometry::Circle(c) => Ok(c.to_wire()),
        Geometry::Path(_) => Err(WireError::Unimplemented("Path").into()),
        Geometry::Polygon(_) => Err(WireError::Unimplemented("Polygon").into()),
    }
}

/// Extracts the numbers from a geometric literal such as `<(1,2),3>`.
///
/// Brackets, parentheses, angle brackets, commas and whitespace are all
/// treated as separators, so any of the rendered forms above parses back to
/// its float sequence. Bracket balance and nesting are not checked: `"1 2"`
/// yields two floats and `"((("` yields none. The shape is validated later,
/// by the arity check in [`WireValue::from_driver`].
///
/// # Errors
///
/// Returns [`WireError::Syntax`] for a token that is not a number.
pub fn parse_geometric_text(text: &str) -> Result<DriverValue> {
    let floats = text
        .split(|c: char| matches!(c, '(' | ')' | '[' | ']' | '<' | '>' | ',') || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                PlanarError::from(WireError::Syntax {
                    token: token.to_owned(),
                })
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(DriverValue::Floats(floats))
}
