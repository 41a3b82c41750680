#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtree::{from_bytes_with_opts, to_bytes, Compound, DeOpts, Element};

fuzz_target!(|v: Element| {
    let mut inner = Compound::new();
    inner.insert("", v).unwrap();
    let v = Element::Compound(inner);

    // Generated trees are not bounded by the default depth limit.
    let opts = DeOpts::new().max_depth(usize::MAX);

    // Fails only for strings too long for the binary format.
    if let Ok(bs) = to_bytes(&v) {
        assert_eq!(from_bytes_with_opts(&bs, opts).unwrap(), v);
    }

    let snbt = nbtree_snbt::to_string(&v).unwrap();
    assert_eq!(nbtree_snbt::from_str_with_opts(&snbt, opts).unwrap(), v);
});
