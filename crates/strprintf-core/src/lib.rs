//! # strprintf-core
//!
//! Safe Rust implementation of a reentrant printf-style renderer. The
//! engine parses a `%[flags][width][.precision][l]type` format string and
//! pushes every output character, one at a time, through a caller-supplied
//! sink. No `unsafe` code is permitted at the crate level, no allocation is
//! performed, and all mutable state is stack-local to one call.
//!
//! Failure is communicated by the negative-return convention at every
//! layer: sinks answer each character with a non-negative accept or a
//! negative stop code, and the engine latches the first negative value as
//! its result.

#![deny(unsafe_code)]

pub mod args;
pub mod directive;
pub mod engine;
pub mod sink;

pub use args::{ArgList, FormatArg};
pub use directive::{Directive, FmtOptions, Precision, Width, parse_directive};
pub use engine::str_xprintf;
pub use sink::{BufferSink, CharSink, FnSink};

/// Bounded-buffer sink ran out of space.
pub const ERR_TRUNCATED: i32 = -1;
/// A directive needed an argument the list did not supply.
///
/// The C original left this undefined; reporting it is the documented
/// hardened replacement.
pub const ERR_NO_ARGUMENT: i32 = -2;
/// The next argument's kind did not fit the directive (an integer for
/// `%s`, a string for a numeric conversion).
pub const ERR_BAD_ARGUMENT: i32 = -3;

/// Render `fmt` with `args` into `buf`, NUL-terminating the result.
///
/// At most `buf.len() - 1` characters are written, plus the terminator.
/// `buf[0]` is terminated up front, so the buffer holds a valid C string
/// whenever `buf.len() >= 1`, whatever the outcome.
///
/// Returns the number of characters stored (excluding the terminator).
/// Truncation after at least one stored character returns the sink's
/// negative code ([`ERR_TRUNCATED`]); truncation before anything could be
/// stored returns `0`. An empty `buf` cannot hold even the terminator and
/// returns [`ERR_TRUNCATED`] without writing.
pub fn str_printf(buf: &mut [u8], fmt: &[u8], args: &[FormatArg]) -> i32 {
    if buf.is_empty() {
        return ERR_TRUNCATED;
    }
    buf[0] = 0;
    let mut sink = BufferSink::new(buf);
    let rc = str_xprintf(&mut sink, fmt, args);
    if rc < 0 && sink.stored() == 0 { 0 } else { rc }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_printf_basic() {
        let mut buf = [0xAAu8; 16];
        let rc = str_printf(&mut buf, b"n=%d", &fmt_args![7]);
        assert_eq!(rc, 3);
        assert_eq!(&buf[..4], b"n=7\0");
    }

    #[test]
    fn test_str_printf_truncation_midway_is_negative() {
        let mut buf = [0u8; 4];
        let rc = str_printf(&mut buf, b"hello", &fmt_args![]);
        assert_eq!(rc, ERR_TRUNCATED);
        assert_eq!(&buf, b"hel\0");
    }

    #[test]
    fn test_str_printf_one_byte_buffer() {
        let mut buf = [0xAAu8; 1];
        let rc = str_printf(&mut buf, b"X", &fmt_args![]);
        assert_eq!(rc, 0);
        assert_eq!(buf[0], 0);
    }

    #[test]
    fn test_str_printf_empty_buffer() {
        let mut buf = [0u8; 0];
        let rc = str_printf(&mut buf, b"X", &fmt_args![]);
        assert_eq!(rc, ERR_TRUNCATED);
    }

    #[test]
    fn test_str_printf_empty_format_terminates() {
        let mut buf = [0xAAu8; 4];
        let rc = str_printf(&mut buf, b"", &fmt_args![]);
        assert_eq!(rc, 0);
        assert_eq!(buf[0], 0);
    }
}
