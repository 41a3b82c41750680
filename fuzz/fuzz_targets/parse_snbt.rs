#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(v) = nbtree_snbt::from_str(data) {
        let snbt = nbtree_snbt::to_string(&v).unwrap();
        assert_eq!(nbtree_snbt::from_str(&snbt).unwrap(), v);
    }
});
