//! Character sinks: where rendered output goes.
//!
//! A sink consumes one character at a time and answers with a non-negative
//! "accepted" value or a negative stop code that the engine propagates as
//! its return value. Two adapters cover the common cases: a bounded buffer
//! writer that NUL-terminates after every stored byte, and a forwarding
//! wrapper around any external byte consumer (a UART transmit routine, a
//! USB endpoint, a `Vec<u8>`). Line-ending translation
//! such as `\n` to `\r\n` belongs to the consumer, not to the adapter.

use crate::ERR_TRUNCATED;

/// Receives rendered characters one at a time.
///
/// Returning a value `>= 0` accepts the character; returning a negative
/// value stops rendering and becomes the engine's result. The engine never
/// calls `put` again after a negative return.
pub trait CharSink {
    fn put(&mut self, ch: u8) -> i32;
}

/// Forwarding adapter: wraps any `FnMut(u8) -> i32` byte consumer. The
/// closure's captures play the role of the C version's opaque context
/// pointer; the adapter itself buffers and transforms nothing.
pub struct FnSink<F>(pub F);

impl<F: FnMut(u8) -> i32> CharSink for FnSink<F> {
    fn put(&mut self, ch: u8) -> i32 {
        (self.0)(ch)
    }
}

/// Bounded-buffer sink. Reserves one byte for the terminator and writes a
/// NUL after every stored character, so the buffer holds a valid C string
/// at all times once at least one byte has been stored.
#[derive(Debug)]
pub struct BufferSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
    budget: usize,
}

impl<'a> BufferSink<'a> {
    /// Wrap `buf`. Capacity for characters is `buf.len() - 1`; an empty
    /// buffer accepts nothing.
    pub fn new(buf: &'a mut [u8]) -> Self {
        let budget = buf.len().saturating_sub(1);
        Self {
            buf,
            pos: 0,
            budget,
        }
    }

    /// Number of characters stored so far, excluding the terminator.
    pub fn stored(&self) -> usize {
        self.pos
    }
}

impl CharSink for BufferSink<'_> {
    fn put(&mut self, ch: u8) -> i32 {
        if self.budget == 0 {
            return ERR_TRUNCATED;
        }
        self.buf[self.pos] = ch;
        self.pos += 1;
        self.buf[self.pos] = 0;
        self.budget -= 1;
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_terminates_after_each_store() {
        let mut buf = [0xAAu8; 4];
        let mut sink = BufferSink::new(&mut buf);
        assert_eq!(sink.put(b'a'), 1);
        assert_eq!(sink.put(b'b'), 1);
        assert_eq!(sink.stored(), 2);
        assert_eq!(&buf[..3], b"ab\0");
    }

    #[test]
    fn test_buffer_sink_rejects_when_full() {
        let mut buf = [0u8; 3];
        let mut sink = BufferSink::new(&mut buf);
        assert_eq!(sink.put(b'x'), 1);
        assert_eq!(sink.put(b'y'), 1);
        assert_eq!(sink.put(b'z'), ERR_TRUNCATED);
        assert_eq!(sink.stored(), 2);
        assert_eq!(&buf, b"xy\0");
    }

    #[test]
    fn test_empty_buffer_rejects_immediately() {
        let mut buf = [0u8; 0];
        let mut sink = BufferSink::new(&mut buf);
        assert_eq!(sink.put(b'x'), ERR_TRUNCATED);
    }

    #[test]
    fn test_single_byte_buffer_only_holds_terminator() {
        let mut buf = [0xAAu8; 1];
        let mut sink = BufferSink::new(&mut buf);
        assert_eq!(sink.put(b'x'), ERR_TRUNCATED);
        assert_eq!(sink.stored(), 0);
    }

    #[test]
    fn test_fn_sink_forwards() {
        let mut out = Vec::new();
        let mut sink = FnSink(|ch: u8| {
            out.push(ch);
            1
        });
        assert_eq!(sink.put(b'q'), 1);
        drop(sink);
        assert_eq!(out, b"q");
    }

    #[test]
    fn test_fn_sink_failure_code_passes_through() {
        let mut sink = FnSink(|_ch: u8| -42);
        assert_eq!(sink.put(b'q'), -42);
    }
}
