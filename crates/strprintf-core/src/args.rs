//! Typed argument values and the left-to-right argument cursor.
//!
//! The C original consumed a `va_list`; the safe Rust model replaces it with
//! a slice of [`FormatArg`] values walked by an [`ArgList`] cursor. Arguments
//! are consumed in order as conversions are encountered. Extra arguments are
//! silently ignored; a directive that finds the cursor exhausted is reported
//! by the engine as [`crate::ERR_NO_ARGUMENT`] instead of reading undefined
//! memory like the legacy contract allowed.

/// A single argument for one conversion specifier.
///
/// Integer-like variants carry the full 64-bit payload; the engine narrows
/// to 32 bits unless the `l` size marker was given, matching how the C
/// version pulled `int` vs `long` off the varargs list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg<'a> {
    /// Signed integer (`%d`, or any numeric conversion's bit source).
    Int(i64),
    /// Unsigned integer (`%u`, `%x`, `%X`, `%o`, `%b`).
    Uint(u64),
    /// Single character (`%c`).
    Char(u8),
    /// Byte string for `%s`. A NUL byte, or the end of the slice,
    /// terminates the string.
    Str(&'a [u8]),
}

impl FormatArg<'_> {
    /// Raw 64-bit payload for numeric conversions, `None` for strings.
    ///
    /// Signed values are bit-cast, not range-checked, so `Int(-1)` yields
    /// `0xFFFF_FFFF_FFFF_FFFF` exactly as a varargs read would.
    pub fn raw_bits(&self) -> Option<u64> {
        match *self {
            FormatArg::Int(v) => Some(v as u64),
            FormatArg::Uint(v) => Some(v),
            FormatArg::Char(c) => Some(u64::from(c)),
            FormatArg::Str(_) => None,
        }
    }

    /// Signed 32-bit view, used for `*` width and precision arguments.
    ///
    /// Values outside `i32` range saturate at the nearest bound rather
    /// than wrapping, matching how literal widths accumulate.
    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            FormatArg::Int(v) => Some(v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32),
            FormatArg::Uint(v) => Some(v.min(i32::MAX as u64) as i32),
            FormatArg::Char(c) => Some(i32::from(c)),
            FormatArg::Str(_) => None,
        }
    }

    /// String payload, `None` for numeric variants.
    pub fn as_str(&self) -> Option<&[u8]> {
        match *self {
            FormatArg::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i8> for FormatArg<'_> {
    fn from(v: i8) -> Self {
        FormatArg::Int(i64::from(v))
    }
}

impl From<i16> for FormatArg<'_> {
    fn from(v: i16) -> Self {
        FormatArg::Int(i64::from(v))
    }
}

impl From<i32> for FormatArg<'_> {
    fn from(v: i32) -> Self {
        FormatArg::Int(i64::from(v))
    }
}

impl From<i64> for FormatArg<'_> {
    fn from(v: i64) -> Self {
        FormatArg::Int(v)
    }
}

impl From<u16> for FormatArg<'_> {
    fn from(v: u16) -> Self {
        FormatArg::Uint(u64::from(v))
    }
}

impl From<u32> for FormatArg<'_> {
    fn from(v: u32) -> Self {
        FormatArg::Uint(u64::from(v))
    }
}

impl From<u64> for FormatArg<'_> {
    fn from(v: u64) -> Self {
        FormatArg::Uint(v)
    }
}

impl From<usize> for FormatArg<'_> {
    fn from(v: usize) -> Self {
        FormatArg::Uint(v as u64)
    }
}

impl From<char> for FormatArg<'_> {
    fn from(c: char) -> Self {
        // Truncates to the low byte; the engine is byte-oriented.
        FormatArg::Char(c as u8)
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(s: &'a str) -> Self {
        FormatArg::Str(s.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for FormatArg<'a> {
    fn from(s: &'a [u8]) -> Self {
        FormatArg::Str(s)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for FormatArg<'a> {
    fn from(s: &'a [u8; N]) -> Self {
        FormatArg::Str(s)
    }
}

/// Ordered, mutable cursor over an argument list.
#[derive(Debug)]
pub struct ArgList<'a> {
    items: &'a [FormatArg<'a>],
    next: usize,
}

impl<'a> ArgList<'a> {
    /// Create a cursor positioned at the first argument.
    pub fn new(items: &'a [FormatArg<'a>]) -> Self {
        Self { items, next: 0 }
    }

    /// Consume and return the next argument, or `None` when exhausted.
    pub fn next(&mut self) -> Option<FormatArg<'a>> {
        let arg = self.items.get(self.next).copied();
        if arg.is_some() {
            self.next += 1;
        }
        arg
    }
}

/// Builds a `[FormatArg; N]` array from mixed Rust values.
///
/// ```
/// use strprintf_core::{fmt_args, str_printf};
///
/// let mut buf = [0u8; 32];
/// let n = str_printf(&mut buf, b"%s=%d", &fmt_args!["answer", 42]);
/// assert_eq!(n, 9);
/// ```
#[macro_export]
macro_rules! fmt_args {
    () => {
        [$crate::FormatArg::Int(0); 0]
    };
    ($($value:expr),+ $(,)?) => {
        [$($crate::FormatArg::from($value)),+]
    };
}
