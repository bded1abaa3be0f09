//! The reentrant render loop.
//!
//! Walks the format string, emits literal bytes as-is, and expands each
//! `%` directive through the caller's sink one character at a time. All
//! mutable state lives in a stack-local [`Emitter`] per call, so nested
//! calls on one logical thread never interfere and the engine touches no
//! process-wide state and performs no allocation.

use crate::args::{ArgList, FormatArg};
use crate::directive::{Directive, FmtOptions, Precision, Width, parse_directive};
use crate::sink::CharSink;
use crate::{ERR_BAD_ARGUMENT, ERR_NO_ARGUMENT};

/// Scratch capacity for digit generation: one character per bit of the
/// widest supported integer, plus one.
const DIGIT_SCRATCH: usize = u64::BITS as usize + 1;

/// Render `fmt` with `args` through `sink`.
///
/// Returns the number of characters the sink accepted, or the sink's
/// first negative code. Once the count goes negative it is latched: no
/// further characters are attempted and no later outcome can overwrite
/// the first failure. The format string is treated as a C string; a NUL
/// byte ends it early.
///
/// Two conditions the C original left undefined are reported instead:
/// a directive that exhausts the argument list returns
/// [`ERR_NO_ARGUMENT`] and an argument of the wrong kind (an integer for
/// `%s`, a string for `%d`) returns [`ERR_BAD_ARGUMENT`].
pub fn str_xprintf<S: CharSink + ?Sized>(sink: &mut S, fmt: &[u8], args: &[FormatArg]) -> i32 {
    let end = fmt.iter().position(|&b| b == 0).unwrap_or(fmt.len());
    let fmt = &fmt[..end];

    let mut em = Emitter { sink, written: 0 };
    let mut args = ArgList::new(args);

    let mut pos = 0;
    while pos < fmt.len() && !em.failed() {
        let ch = fmt[pos];
        pos += 1;
        if ch != b'%' {
            em.put(ch);
            continue;
        }

        let (dir, used) = parse_directive(&fmt[pos..]);
        pos += used;
        render_directive(&mut em, &dir, &mut args);
    }
    em.written
}

/// Per-call output state: the sink reference and the running count that
/// latches negative on the first failure.
struct Emitter<'s, S: ?Sized> {
    sink: &'s mut S,
    written: i32,
}

impl<S: CharSink + ?Sized> Emitter<'_, S> {
    fn put(&mut self, ch: u8) {
        if self.written >= 0 {
            let n = self.sink.put(ch);
            if n >= 0 {
                self.written += 1;
            } else {
                self.written = n;
            }
        }
    }

    fn fail(&mut self, code: i32) {
        if self.written >= 0 {
            self.written = code;
        }
    }

    fn failed(&self) -> bool {
        self.written < 0
    }
}

fn render_directive<S: CharSink + ?Sized>(em: &mut Emitter<S>, dir: &Directive, args: &mut ArgList) {
    let mut options = dir.options;

    let min_width = match dir.width {
        Width::None => 0,
        Width::Literal(w) => w,
        Width::FromArg => match take_i32(args) {
            Ok(w) => w,
            Err(code) => return em.fail(code),
        },
    };

    // A negative precision, literal or argument-supplied, behaves as if
    // no precision were given.
    let precision = match dir.precision {
        Precision::None => None,
        Precision::Literal(p) => Some(p).filter(|&p| p >= 0),
        Precision::FromArg => match take_i32(args) {
            Ok(p) => Some(p).filter(|&p| p >= 0),
            Err(code) => return em.fail(code),
        },
    };

    match dir.conversion {
        b'd' | b'u' | b'x' | b'X' | b'o' | b'b' => {
            let Some(arg) = args.next() else {
                return em.fail(ERR_NO_ARGUMENT);
            };
            let Some(raw) = arg.raw_bits() else {
                return em.fail(ERR_BAD_ARGUMENT);
            };
            let magnitude = if dir.conversion == b'd' {
                let value = if dir.long_arg {
                    raw as i64
                } else {
                    i64::from(raw as u32 as i32)
                };
                if value < 0 {
                    options.insert(FmtOptions::MINUS_SIGN);
                }
                value.unsigned_abs()
            } else if dir.long_arg {
                raw
            } else {
                u64::from(raw as u32)
            };

            let mut scratch = [0u8; DIGIT_SCRATCH];
            let digits = render_digits(magnitude, base_of(dir.conversion), &options, &mut scratch);
            let leading_zeros = match precision {
                Some(p) if p > digits.len() as i32 => p - digits.len() as i32,
                _ => 0,
            };
            output_field(em, options, min_width, leading_zeros, digits);
        }
        b'c' => {
            let Some(arg) = args.next() else {
                return em.fail(ERR_NO_ARGUMENT);
            };
            let Some(raw) = arg.raw_bits() else {
                return em.fail(ERR_BAD_ARGUMENT);
            };
            output_field(em, options, min_width, 0, &[raw as u8]);
        }
        b's' => {
            let Some(arg) = args.next() else {
                return em.fail(ERR_NO_ARGUMENT);
            };
            let Some(s) = arg.as_str() else {
                return em.fail(ERR_BAD_ARGUMENT);
            };
            // The string ends at the first NUL, the precision cap, or the
            // end of the slice, whichever comes first. Precision makes a
            // terminator unnecessary.
            let mut len = 0;
            while len < s.len() && s[len] != 0 {
                if let Some(p) = precision {
                    if len as i32 >= p {
                        break;
                    }
                }
                len += 1;
            }
            output_field(em, options, min_width, 0, &s[..len]);
        }
        0 => {
            // Format string ended mid-directive; nothing to emit.
        }
        other => {
            // Unknown directive: echo the character and consume nothing.
            // This is the backward-compatibility contract that makes %%
            // produce a literal percent sign.
            em.put(other);
        }
    }
}

fn take_i32(args: &mut ArgList) -> Result<i32, i32> {
    match args.next() {
        Some(arg) => arg.as_i32().ok_or(ERR_BAD_ARGUMENT),
        None => Err(ERR_NO_ARGUMENT),
    }
}

fn base_of(conversion: u8) -> u64 {
    match conversion {
        b'b' => 2,
        b'o' => 8,
        b'x' | b'X' => 16,
        _ => 10,
    }
}

/// Convert `value` to digits in `base` by repeated remainder/divide,
/// filling `scratch` from the end. Always produces at least one digit.
fn render_digits<'a>(
    mut value: u64,
    base: u64,
    options: &FmtOptions,
    scratch: &'a mut [u8; DIGIT_SCRATCH],
) -> &'a [u8] {
    let alpha = if options.contains(FmtOptions::CAPITAL_HEX) {
        b'A'
    } else {
        b'a'
    };
    let mut pos = scratch.len();
    loop {
        pos -= 1;
        let digit = (value % base) as u8;
        scratch[pos] = if digit < 10 {
            b'0' + digit
        } else {
            alpha + (digit - 10)
        };
        value /= base;
        if value == 0 {
            break;
        }
    }
    &scratch[pos..]
}

/// Emit one edited field with padding, sign, and leading zeros.
///
/// The ordering is a contract: with zero padding the sign precedes the
/// fill (`%05d` of -42 is `-0042`); with space padding the sign stays
/// glued to the digits (`%5d` of -42 is `  -42`). Trailing fill for
/// left-justified fields is always spaces.
fn output_field<S: CharSink + ?Sized>(
    em: &mut Emitter<S>,
    options: FmtOptions,
    min_width: i32,
    mut leading_zeros: i32,
    field: &[u8],
) {
    // Saturating: min_width can sit at either i32 bound after a `*`
    // argument, so plain subtraction could overflow.
    let mut pad_len = min_width
        .saturating_sub(leading_zeros)
        .saturating_sub(field.len() as i32);

    if options.contains(FmtOptions::MINUS_SIGN) {
        if options.contains(FmtOptions::ZERO_PAD) {
            em.put(b'-');
        }
        // The sign occupies a column either way.
        pad_len = pad_len.saturating_sub(1);
    }

    if options.contains(FmtOptions::RIGHT_JUSTIFY) {
        let fill = if options.contains(FmtOptions::ZERO_PAD) {
            b'0'
        } else {
            b' '
        };
        while pad_len > 0 && !em.failed() {
            em.put(fill);
            pad_len -= 1;
        }
    }

    if options.contains(FmtOptions::MINUS_SIGN) && !options.contains(FmtOptions::ZERO_PAD) {
        em.put(b'-');
    }

    while leading_zeros > 0 && !em.failed() {
        em.put(b'0');
        leading_zeros -= 1;
    }

    for &ch in field {
        em.put(ch);
    }

    // Left-justified trailing fill. pad_len is already zero or negative
    // when leading padding was emitted.
    while pad_len > 0 && !em.failed() {
        em.put(b' ');
        pad_len -= 1;
    }
}
