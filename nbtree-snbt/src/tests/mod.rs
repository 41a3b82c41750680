use nbtree::{Compound, Element, List};

use crate::{from_str, to_string};


fn compound<const N: usize>(entries: [(&str, Element); N]) -> Compound {
    let mut c = Compound::new();
    for (k, v) in entries {
        c.insert(k, v).unwrap();
    }
    c
}

fn list<const N: usize>(elements: [Element; N]) -> List {
    List::try_from(Vec::from(elements)).unwrap()
}

fn round_trip(el: &Element) {
    let snbt = to_string(el).unwrap();
    let back = from_str(&snbt).unwrap_or_else(|e| panic!("{} failed to read: {}", snbt, e));
    assert_eq!(&back, el, "through {}", snbt);
}

#[test]
fn test_mixed() {
    let data = Element::Compound(compound([
        ("name", Element::from("Cool \"name\"")),
        ("ints", Element::IntArray(vec![-1, 3, 2000])),
        ("f", Element::Double(-5.0e-40)),
        (
            "collection",
            Element::List(list([
                Element::Byte(1),
                Element::Byte(0),
                Element::Byte(1),
            ])),
        ),
    ]));

    let serialized = to_string(&data).unwrap();
    assert_eq!(
        "{name:\"Cool \\\"name\\\"\",ints:[I;-1,3,2000],f:-5e-40d,collection:[1b,0b,1b]}",
        serialized
    );

    let deserialized = from_str(&serialized).unwrap();
    assert_eq!(deserialized, data);
}

#[test]
fn every_type_round_trips() {
    let every = Element::Compound(compound([
        ("byte", Element::Byte(i8::MIN)),
        ("short", Element::Short(i16::MAX)),
        ("int", Element::Int(-1)),
        ("long", Element::Long(i64::MAX)),
        ("float", Element::Float(f32::MIN_POSITIVE)),
        ("double", Element::Double(std::f64::consts::PI)),
        ("string", Element::from("ünïcödé ☃ \"'\\\n\t")),
        ("byteArray", Element::ByteArray(vec![i8::MIN, 0, i8::MAX])),
        ("intArray", Element::IntArray(vec![i32::MIN, 0])),
        ("longArray", Element::LongArray(vec![i64::MIN])),
        ("list", Element::List(list([Element::Byte(1)]))),
        ("empty", Element::Compound(Compound::new())),
    ]));
    let root = Element::List(list([every.clone(), every]));

    round_trip(&root);
}

#[test]
fn awkward_strings_round_trip() {
    for s in [
        "", "12", "1b", "-3", "1.5", "1e3", "+", ".", "true", "NaNd", "infd", "12abc", "a b",
        "{", "[B;1]", "minecraft:stone", "\r", "\u{0}",
    ] {
        round_trip(&Element::from(s));
        round_trip(&Element::Compound(compound([(s, Element::Int(1))])));
    }
}

#[test]
fn awkward_floats_round_trip() {
    for f in [0.0, -0.0, 1e-45, f32::MAX, f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
        round_trip(&Element::Float(f));
    }
    for d in [0.1, -0.0, 1e300, 5e-324, f64::INFINITY, f64::NAN] {
        round_trip(&Element::Double(d));
    }
}

#[test]
fn extreme_integers_round_trip() {
    round_trip(&Element::Byte(i8::MIN));
    round_trip(&Element::Short(i16::MIN));
    round_trip(&Element::Int(i32::MIN));
    round_trip(&Element::Long(i64::MIN));
    round_trip(&Element::LongArray(vec![i64::MIN, i64::MAX]));
}

#[test]
fn nested_lists_round_trip() {
    let inner = list([Element::from("a"), Element::from("b")]);
    let outer = list([Element::List(inner), Element::List(List::new())]);
    round_trip(&Element::List(outer));
}
