#![allow(clippy::unwrap_used)]

use planar::wire::parse_geometric_text;
use planar::{Aabb, Circle, FormatOptions, JsonCodec, Point, Segment, Style, Vector, WireValue};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const STYLES: [Style; 3] = [Style::Array, Style::Object, Style::Compound];

fn all_option_sets() -> Vec<FormatOptions> {
    let mut sets = Vec::new();
    for point in STYLES {
        for composite in STYLES {
            sets.push(FormatOptions {
                point,
                vector: point,
                segment: composite,
                aabb: composite,
                circle: composite,
            });
        }
    }
    sets
}

fn assert_json_roundtrip<T>(value: &T)
where
    T: JsonCodec + PartialEq + std::fmt::Debug,
{
    for options in all_option_sets() {
        let text = options.encode(value).unwrap();
        let back: T = options.decode(&text).unwrap();
        assert_eq!(&back, value, "{options:?} -> {text}");
    }
}

fn assert_wire_roundtrip<T>(value: &T)
where
    T: WireValue + PartialEq + std::fmt::Debug,
{
    let text = value.to_wire();
    let floats = parse_geometric_text(&text).unwrap();
    let back = T::from_driver(&floats).unwrap();
    assert_eq!(&back, value, "{text}");
}

#[test]
fn json_roundtrip_every_type_and_style() {
    init_tracing();
    let p1 = Point::new(1234.56789, -9876.54321);
    let p2 = Point::new(123_456_789_012_345.0, 0.123_456_789_012_345);

    assert_json_roundtrip(&Point::origin());
    assert_json_roundtrip(&p1);
    assert_json_roundtrip(&Vector::new(-8_451_394_857_194.0, 0.000_000_03));
    assert_json_roundtrip(&Segment::new(p1, p2));
    assert_json_roundtrip(&Aabb::new(p2, p1));
    assert_json_roundtrip(&Circle::new(p1, 0.25));
}

#[test]
fn wire_roundtrip_every_type() {
    init_tracing();
    let p1 = Point::new(1234.56789, -9876.54321);
    let p2 = Point::new(123_456_789_012_345.0, 0.123_456_789_012_345);

    assert_wire_roundtrip(&Point::new(0.0, 0.0));
    assert_wire_roundtrip(&Point::new(-1231.0, 3242.832));
    assert_wire_roundtrip(&Vector::new(1234.56789, -9876.54321));
    assert_wire_roundtrip(&Vector::new(123_456_789_012_345.0, 0.123_456_789_012_345));
    assert_wire_roundtrip(&Segment::new(p1, p2));
    assert_wire_roundtrip(&Aabb::new(p1, p2));
    assert_wire_roundtrip(&Circle::new(p2, 17.5));
}

#[test]
fn wire_text_keeps_non_finite_values() {
    init_tracing();
    let c = Circle::new(Point::new(f64::NEG_INFINITY, 1.0), f64::INFINITY);
    assert_eq!(c.to_wire(), "<(-Inf,1),+Inf>");
    assert_wire_roundtrip(&c);
}

#[test]
fn json_and_wire_agree_on_numbers() {
    init_tracing();
    let v = Vector::new(-8_451_394_857_194.0, 0.000_000_03);
    let json = FormatOptions::default().encode(&v).unwrap();
    assert_eq!(json, "[-8.451394857194e+12,3e-08]");
    assert_eq!(v.to_wire(), "(-8.451394857194e+12,3e-08)");
}

#[test]
fn configuration_drives_layout() {
    init_tracing();
    let options = FormatOptions::from_json_str(r#"{"point":"object","segment":"compound"}"#).unwrap();
    let s = Segment::new(Point::new(1.0, 2.0), Point::new(-1234.0, 5678.0));
    assert_eq!(
        options.encode(&s).unwrap(),
        r#"[{"x":1,"y":2},{"x":-1234,"y":5678}]"#
    );
    let back: Segment = options.decode(r#"[{"x":1,"y":2},{"x":-1234,"y":5678}]"#).unwrap();
    assert_eq!(back, s);
}
