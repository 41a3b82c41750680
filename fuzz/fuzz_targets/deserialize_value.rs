#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtree::{from_bytes, from_bytes_with_opts, to_bytes, DeOpts};

fuzz_target!(|data: &[u8]| {
    let value = from_bytes_with_opts(data, DeOpts::new().max_seq_len(100));
    if let Ok(v) = value {
        let bs = to_bytes(&v).unwrap();
        assert_eq!(from_bytes(&bs).unwrap(), v);
    }
});
