use serde_json::{json, Value};

use crate::error::Result;
use crate::geometry::{Aabb, Circle, Point, Segment, Vector};

use super::{array, field, number, numbers, object, FormatOptions, JsonCodec, Style};

fn xy_to_json(style: Style, x: f64, y: f64) -> Value {
    match style {
        Style::Object => json!({ "x": x, "y": y }),
        Style::Array | Style::Compound => json!([x, y]),
    }
}

fn xy_from_json(value: &Value, style: Style, target: &'static str) -> Result<(f64, f64)> {
    match style {
        Style::Object => {
            let map = object(value, target)?;
            Ok((
                number(field(map, target, "x")?, target)?,
                number(field(map, target, "y")?, target)?,
            ))
        }
        Style::Array | Style::Compound => {
            let [x, y] = numbers::<2>(value, target)?;
            Ok((x, y))
        }
    }
}

/// Shared layout of Segment and Box: a pair of points.
fn pair_to_json(style: Style, options: &FormatOptions, p1: Point, p2: Point) -> Value {
    match style {
        Style::Array => {
            let (x1, y1) = p1.values();
            let (x2, y2) = p2.values();
            json!([x1, y1, x2, y2])
        }
        Style::Object => json!({ "0": p1.to_json(options), "1": p2.to_json(options) }),
        Style::Compound => json!([p1.to_json(options), p2.to_json(options)]),
    }
}

fn pair_from_json(
    value: &Value,
    style: Style,
    options: &FormatOptions,
    target: &'static str,
) -> Result<(Point, Point)> {
    match style {
        Style::Array => {
            let [x1, y1, x2, y2] = numbers::<4>(value, target)?;
            Ok((Point::new(x1, y1), Point::new(x2, y2)))
        }
        Style::Object => {
            let map = object(value, target)?;
            Ok((
                Point::from_json(field(map, target, "0")?, options)?,
                Point::from_json(field(map, target, "1")?, options)?,
            ))
        }
        Style::Compound => {
            let items = array(value, target, 2)?;
            Ok((
                Point::from_json(&items[0], options)?,
                Point::from_json(&items[1], options)?,
            ))
        }
    }
}

impl JsonCodec for Point {
    const NAME: &'static str = "Point";

    fn to_json(&self, options: &FormatOptions) -> Value {
        let (x, y) = self.values();
        xy_to_json(options.point, x, y)
    }

    fn from_json(value: &Value, options: &FormatOptions) -> Result<Self> {
        let (x, y) = xy_from_json(value, options.point, Self::NAME)?;
        Ok(Point::new(x, y))
    }
}

impl JsonCodec for Vector {
    const NAME: &'static str = "Vector";

    fn to_json(&self, options: &FormatOptions) -> Value {
        let (x, y) = self.values();
        xy_to_json(options.vector, x, y)
    }

    fn from_json(value: &Value, options: &FormatOptions) -> Result<Self> {
        let (x, y) = xy_from_json(value, options.vector, Self::NAME)?;
        Ok(Vector::new(x, y))
    }
}

impl JsonCodec for Segment {
    const NAME: &'static str = "Segment";

    fn to_json(&self, options: &FormatOptions) -> Value {
        let (start, end) = self.endpoints();
        pair_to_json(options.segment, options, start, end)
    }

    fn from_json(value: &Value, options: &FormatOptions) -> Result<Self> {
        let (start, end) = pair_from_json(value, options.segment, options, Self::NAME)?;
        Ok(Segment::new(start, end))
    }
}

impl JsonCodec for Aabb {
    const NAME: &'static str = "Box";

    fn to_json(&self, options: &FormatOptions) -> Value {
        let (min, max) = self.corners();
        pair_to_json(options.aabb, options, min, max)
    }

    fn from_json(value: &Value, options: &FormatOptions) -> Result<Self> {
        let (p1, p2) = pair_from_json(value, options.aabb, options, Self::NAME)?;
        Ok(Aabb::new(p1, p2))
    }
}

impl JsonCodec for Circle {
    const NAME: &'static str = "Circle";

    fn to_json(&self, options: &FormatOptions) -> Value {
        let (x, y, r) = self.values();
        match options.circle {
            Style::Array => json!([x, y, r]),
            Style::Object => json!({ "c": self.center().to_json(options), "r": r }),
            Style::Compound => json!([self.center().to_json(options), r]),
        }
    }

    fn from_json(value: &Value, options: &FormatOptions) -> Result<Self> {
        match options.circle {
            Style::Array => {
                let [x, y, r] = numbers::<3>(value, Self::NAME)?;
                Ok(Circle::new(Point::new(x, y), r))
            }
            Style::Object => {
                let map = object(value, Self::NAME)?;
                let center = Point::from_json(field(map, Self::NAME, "c")?, options)?;
                let radius = number(field(map, Self::NAME, "r")?, Self::NAME)?;
                Ok(Circle::new(center, radius))
            }
            Style::Compound => {
                let items = array(value, Self::NAME, 2)?;
                let center = Point::from_json(&items[0], options)?;
                let radius = number(&items[1], Self::NAME)?;
                Ok(Circle::new(center, radius))
            }
        }
    }
}
