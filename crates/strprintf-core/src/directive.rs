//! Conversion-directive parser.
//!
//! Grammar, after a literal `%`: `[flags][width][.precision][l]type` with
//! flags in fixed order (`-` before `0`). There is no failure path: a type
//! character the engine does not recognize is echoed verbatim, so `%%`
//! produces `%` only because `%` is itself not a recognized type.

use bitflags::bitflags;

bitflags! {
    /// Active formatting options for one directive.
    ///
    /// `RIGHT_JUSTIFY` is set by default and cleared by the `-` flag.
    /// `c` and `s` conversions always clear `ZERO_PAD`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FmtOptions: u8 {
        /// A minus sign is pending for a negative `%d` value.
        const MINUS_SIGN = 0x01;
        /// Pad on the left so the field is right justified.
        const RIGHT_JUSTIFY = 0x02;
        /// Fill with `0` instead of spaces when right justifying.
        const ZERO_PAD = 0x04;
        /// Hex digits use `ABCDEF` (`%X`).
        const CAPITAL_HEX = 0x08;
    }
}

/// Minimum field width source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    None,
    /// Decimal literal in the format string, accumulated with saturation.
    Literal(i32),
    /// `*`: taken from the next argument as a signed integer.
    FromArg,
}

/// Precision source. Absence of the `.` is distinct from precision 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    None,
    Literal(i32),
    /// `.*`: taken from the next argument as a signed integer.
    FromArg,
}

/// One parsed `%...` directive. Lives only for the duration of rendering
/// the conversion it describes.
#[derive(Debug, Clone, Copy)]
pub struct Directive {
    pub options: FmtOptions,
    pub width: Width,
    pub precision: Precision,
    /// `l` marker: read the argument at 64-bit width instead of 32.
    pub long_arg: bool,
    /// Type character, or 0 if the format string ended mid-directive.
    pub conversion: u8,
}

/// Parse one directive. `fmt` points at the first byte after `%`.
///
/// Returns the directive and the number of bytes consumed, including the
/// type character. Never fails: an unrecognized type is still recorded in
/// `conversion` for the engine to echo, and a format string that ends
/// mid-directive yields `conversion == 0`.
///
/// Width and precision literals accumulate into `i32` with saturation.
/// The C original stored them in 16-bit fields that wrapped silently;
/// widening with saturation is the documented replacement for that wrap.
pub fn parse_directive(fmt: &[u8]) -> (Directive, usize) {
    let mut pos = 0;
    let mut options = FmtOptions::RIGHT_JUSTIFY;

    // Flags, fixed order: '-' then '0'.
    if fmt.get(pos) == Some(&b'-') {
        options.remove(FmtOptions::RIGHT_JUSTIFY);
        pos += 1;
    }
    if fmt.get(pos) == Some(&b'0') {
        options.insert(FmtOptions::ZERO_PAD);
        pos += 1;
    }

    // Width: '*' or a run of digits.
    let width = if fmt.get(pos) == Some(&b'*') {
        pos += 1;
        Width::FromArg
    } else {
        match scan_decimal(fmt, &mut pos) {
            Some(w) => Width::Literal(w),
            None => Width::None,
        }
    };

    // Precision, introduced by '.'. A bare '.' means precision 0.
    let precision = if fmt.get(pos) == Some(&b'.') {
        pos += 1;
        if fmt.get(pos) == Some(&b'*') {
            pos += 1;
            Precision::FromArg
        } else {
            Precision::Literal(scan_decimal(fmt, &mut pos).unwrap_or(0))
        }
    } else {
        Precision::None
    };

    // Size marker.
    let long_arg = if fmt.get(pos) == Some(&b'l') {
        pos += 1;
        true
    } else {
        false
    };

    // Type character terminates the directive.
    let conversion = match fmt.get(pos) {
        Some(&ch) => {
            pos += 1;
            ch
        }
        None => 0,
    };

    match conversion {
        b'X' => options.insert(FmtOptions::CAPITAL_HEX),
        // Character and string fields are never zero filled.
        b'c' | b's' => options.remove(FmtOptions::ZERO_PAD),
        _ => {}
    }

    (
        Directive {
            options,
            width,
            precision,
            long_arg,
            conversion,
        },
        pos,
    )
}

fn scan_decimal(fmt: &[u8], pos: &mut usize) -> Option<i32> {
    let start = *pos;
    let mut value: i32 = 0;
    while let Some(&ch) = fmt.get(*pos) {
        if !ch.is_ascii_digit() {
            break;
        }
        value = value
            .saturating_mul(10)
            .saturating_add(i32::from(ch - b'0'));
        *pos += 1;
    }
    if *pos > start { Some(value) } else { None }
}
