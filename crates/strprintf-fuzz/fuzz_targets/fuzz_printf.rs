#![no_main]
use libfuzzer_sys::fuzz_target;

use strprintf_core::{FnSink, fmt_args, str_printf, str_xprintf};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as the format string with a fixed argument pool.
    // Must never panic; directives past the pool report ERR_NO_ARGUMENT.
    let args = fmt_args![-1, u64::MAX, "str", 'c', 0, i64::MIN, "x", 255u32];

    let mut count = 0u32;
    let rc = str_xprintf(
        &mut FnSink(|_ch: u8| {
            count += 1;
            1
        }),
        data,
        &args,
    );
    if rc >= 0 {
        assert_eq!(rc as u32, count);
    }

    // Bounded rendering preserves the guard byte past the buffer and the
    // terminator inside it.
    let mut buf = [0xAAu8; 33];
    let rc = str_printf(&mut buf[..32], data, &args);
    assert_eq!(buf[32], 0xAA);
    assert!(buf[..32].contains(&0));
    assert!(rc >= -3 && rc < 32);
});
