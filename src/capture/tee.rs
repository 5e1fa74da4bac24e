//! Tee Writer Module
//!
//! Fans one stream of chunks out to the capture buffer and the real
//! output sink in a single pass.

use std::io::{self, Write};

use super::CaptureBuffer;

// == Tee Writer ==
/// Writer forwarding every chunk to a capture buffer and a primary sink.
///
/// Sink errors propagate immediately and abort the stream; capture writes
/// cannot fail, so a full capture buffer never disturbs delivery.
pub struct TeeWriter<'a, W> {
    capture: &'a mut CaptureBuffer,
    sink: &'a mut W,
}

impl<'a, W: Write> TeeWriter<'a, W> {
    /// Creates a tee over a capture buffer and a primary sink.
    pub fn new(capture: &'a mut CaptureBuffer, sink: &'a mut W) -> Self {
        Self { capture, sink }
    }
}

impl<W: Write> Write for TeeWriter<'_, W> {
    fn write(&mut self, chunk: &[u8]) -> io::Result<usize> {
        // capture cannot fail; the sink decides success
        let _ = self.capture.write(chunk);
        self.sink.write_all(chunk)?;
        Ok(chunk.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _chunk: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_tee_writes_both_destinations() {
        let mut capture = CaptureBuffer::new(16);
        let mut sink = Vec::new();

        {
            let mut tee = TeeWriter::new(&mut capture, &mut sink);
            tee.write_all(&[1, 2, 3]).unwrap();
            tee.write_all(&[4, 5]).unwrap();
            tee.flush().unwrap();
        }

        assert_eq!(sink, vec![1, 2, 3, 4, 5]);
        assert_eq!(capture.result().unwrap(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_tee_propagates_sink_error() {
        let mut capture = CaptureBuffer::new(16);
        let mut sink = FailingSink;

        let mut tee = TeeWriter::new(&mut capture, &mut sink);
        let err = tee.write(&[1, 2, 3]).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_tee_capture_overflow_does_not_error() {
        let mut capture = CaptureBuffer::new(2);
        let mut sink = Vec::new();

        {
            let mut tee = TeeWriter::new(&mut capture, &mut sink);
            tee.write_all(&[1, 2, 3, 4]).unwrap();
        }

        // delivery is unaffected, only the capture is lost
        assert_eq!(sink, vec![1, 2, 3, 4]);
        assert!(capture.result().is_none());
    }
}
