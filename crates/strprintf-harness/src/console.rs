//! Host-side console consumers.
//!
//! The original firmware's UART consumer translated `\n` to `\r\n` on the
//! way out ("cooked" output). That policy belongs to the consumer, never
//! to the renderer, so it lives here as a forwarding writer over any
//! `io::Write`.

use std::io::Write;

use strprintf_core::{CharSink, FormatArg, fmt_args, str_xprintf};

/// Sink failure code reported when the underlying writer errors.
pub const ERR_IO: i32 = -5;

/// Forwarding consumer that performs cooked line-ending translation.
#[derive(Debug)]
pub struct CookedWriter<W: Write> {
    inner: W,
}

impl<W: Write> CookedWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> CharSink for CookedWriter<W> {
    fn put(&mut self, ch: u8) -> i32 {
        if ch == b'\n' && self.inner.write_all(b"\r").is_err() {
            return ERR_IO;
        }
        match self.inner.write_all(&[ch]) {
            Ok(()) => 1,
            Err(_) => ERR_IO,
        }
    }
}

/// Render one formatted line through a cooked consumer.
pub fn cooked_printf<W: Write>(out: W, fmt: &[u8], args: &[FormatArg]) -> i32 {
    let mut sink = CookedWriter::new(out);
    str_xprintf(&mut sink, fmt, args)
}

/// Print the boot banner the original firmware emitted on both of its
/// serial channels.
pub fn banner<W: Write>(out: &mut W, channel: &str) -> i32 {
    let mut sink = CookedWriter::new(out);
    let mut written = 0;
    for fmt in [
        b"\n*****\n" as &[u8],
        b"***** Starting (%s) ...\n",
        b"*****\n",
    ] {
        let rc = str_xprintf(&mut sink, fmt, &[FormatArg::Str(channel.as_bytes())]);
        if rc < 0 {
            return rc;
        }
        written += rc;
    }
    written
}

/// Render the demo screen: banner plus a small register table through
/// the cooked consumer. Stops at the first sink failure and returns its
/// code.
pub fn demo<W: Write>(out: &mut W) -> i32 {
    let mut written = banner(out, "stdout");
    if written < 0 {
        return written;
    }
    let rc = cooked_printf(&mut *out, b"%-12s %6s %10s\n", &fmt_args!["name", "dec", "hex"]);
    if rc < 0 {
        return rc;
    }
    written += rc;
    for (name, value) in [("reload", 168_000u32), ("csr", 7), ("calib", 0x4001_0800)] {
        let rc = cooked_printf(
            &mut *out,
            b"%-12s %6u 0x%08X\n",
            &fmt_args![name, value, value],
        );
        if rc < 0 {
            return rc;
        }
        written += rc;
    }
    written
}
