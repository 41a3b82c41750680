use crate::{
    error::ErrorKind, from_bytes, from_bytes_named, test::builder::Builder, to_bytes,
    to_bytes_named, to_writer, Compound, Element, List, Tag,
};

#[test]
fn simple_byte() {
    let expected = Builder::new().byte("", 23).build();
    assert_eq!(expected, to_bytes(&Element::Byte(23)).unwrap());
}

#[test]
fn every_scalar() {
    let mut compound = Compound::new();
    compound.insert("b", 1i8).unwrap();
    compound.insert("s", 2i16).unwrap();
    compound.insert("i", 3i32).unwrap();
    compound.insert("l", 4i64).unwrap();
    compound.insert("f", 1.5f32).unwrap();
    compound.insert("d", 2.5f64).unwrap();
    compound.insert("str", "hello").unwrap();

    let expected = Builder::new()
        .start_compound("")
        .byte("b", 1)
        .short("s", 2)
        .int("i", 3)
        .long("l", 4)
        .float("f", 1.5)
        .double("d", 2.5)
        .string("str", "hello")
        .end_compound()
        .build();

    assert_eq!(expected, to_bytes(&Element::Compound(compound)).unwrap());
}

#[test]
fn arrays() {
    let mut compound = Compound::new();
    compound.insert("b", vec![1i8, -1]).unwrap();
    compound.insert("i", vec![1i32, 2, 3]).unwrap();
    compound.insert("l", Vec::<i64>::new()).unwrap();

    let expected = Builder::new()
        .start_compound("")
        .byte_array("b", &[1, -1])
        .int_array("i", &[1, 2, 3])
        .long_array("l", &[])
        .end_compound()
        .build();

    assert_eq!(expected, to_bytes(&Element::Compound(compound)).unwrap());
}

#[test]
fn literal_vector() {
    let mut list = List::new();
    list.push("test").unwrap();
    let mut compound = Compound::new();
    compound.insert("test", list).unwrap();

    let expected = Builder::new()
        .start_compound("")
        .start_list("test", Tag::String, 1)
        .string_payload("test")
        .end_compound()
        .build();

    assert_eq!(expected, to_bytes(&Element::Compound(compound)).unwrap());
}

#[test]
fn list_payloads_are_untagged() {
    let mut inner = Compound::new();
    inner.insert("a", 1i32).unwrap();
    let mut list = List::new();
    list.push(inner).unwrap();
    list.push(Compound::new()).unwrap();

    let expected = Builder::new()
        .start_list("", Tag::Compound, 2)
        .start_anon_compound()
        .int("a", 1)
        .end_compound()
        .start_anon_compound()
        .end_compound()
        .build();

    assert_eq!(expected, to_bytes(&Element::List(list)).unwrap());
}

#[test]
fn untyped_empty_list_is_list_of_end() {
    let expected = Builder::new().start_list("", Tag::End, 0).build();
    assert_eq!(expected, to_bytes(&Element::List(List::new())).unwrap());
}

#[test]
fn typed_empty_list_keeps_subtype() {
    let list = List::with_subtype(Tag::Long);
    let expected = Builder::new().start_list("", Tag::Long, 0).build();
    assert_eq!(expected, to_bytes(&Element::List(list)).unwrap());
}

#[test]
fn compound_written_in_insertion_order() {
    let mut compound = Compound::new();
    compound.insert("z", 1i8).unwrap();
    compound.insert("a", 2i8).unwrap();

    let expected = Builder::new()
        .start_compound("")
        .byte("z", 1)
        .byte("a", 2)
        .end_compound()
        .build();

    assert_eq!(expected, to_bytes(&Element::Compound(compound)).unwrap());
}

#[test]
fn root_name() {
    let bytes = to_bytes_named("Level", &Element::Int(7)).unwrap();
    assert_eq!(bytes, Builder::new().int("Level", 7).build());

    let (name, value) = from_bytes_named(&bytes).unwrap();
    assert_eq!(name, "Level");
    assert_eq!(value, Element::Int(7));
}

#[test]
fn root_name_is_empty_for_any_root() {
    let roots = [
        Element::Byte(0),
        Element::String("x".into()),
        Element::List(List::new()),
        Element::Compound(Compound::new()),
    ];
    for root in &roots {
        let bytes = to_bytes(root).unwrap();
        assert_eq!(&bytes[1..3], &[0, 0]);
        assert_eq!(&from_bytes(&bytes).unwrap(), root);
    }
}

#[test]
fn end_root_is_refused() {
    let err = to_bytes(&Element::End).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnexpectedEndTag);
}

#[test]
fn string_too_long() {
    let long = "a".repeat(u16::MAX as usize + 1);
    let err = to_bytes(&Element::String(long)).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::StringTooLong(u16::MAX as usize + 1));
}

#[test]
fn string_at_limit() {
    let s = "a".repeat(u16::MAX as usize);
    let bytes = to_bytes(&Element::String(s.clone())).unwrap();
    assert_eq!(from_bytes(&bytes).unwrap(), Element::String(s));
}

#[test]
fn multibyte_string_length_is_in_bytes() {
    // Each snowman is three bytes of UTF-8.
    let long = "☃".repeat(u16::MAX as usize / 3 + 1);
    let err = to_bytes(&Element::String(long)).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::StringTooLong(_)));
}

#[test]
fn long_key_is_refused() {
    let mut compound = Compound::new();
    compound.insert("k".repeat(70_000), 1i8).unwrap();
    let err = to_bytes(&Element::Compound(compound)).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::StringTooLong(70_000));
}

#[test]
fn writer_untouched_on_failure() {
    let mut compound = Compound::new();
    compound.insert("fine", 1i32).unwrap();
    compound.insert("bad", "b".repeat(70_000)).unwrap();

    let mut out = Vec::new();
    let err = to_writer(&mut out, &Element::Compound(compound)).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::StringTooLong(70_000));
    assert!(out.is_empty());
}

#[test]
fn writer_gets_whole_document() {
    let mut out = Vec::new();
    to_writer(&mut out, &Element::Short(-2)).unwrap();
    assert_eq!(out, Builder::new().short("", -2).build());
}

#[test]
fn big_endian() {
    let bytes = to_bytes(&Element::Int(0x01020304)).unwrap();
    assert_eq!(&bytes[3..], &[1, 2, 3, 4]);

    let bytes = to_bytes(&Element::Double(1.0)).unwrap();
    assert_eq!(&bytes[3..], &1.0f64.to_be_bytes());
}
