//! Incremental UTF-8 decoding.
//!
//! Chunk boundaries on the wire fall anywhere, including inside a
//! multi-byte character. [`Utf8StreamDecoder`] keeps an incomplete trailing
//! sequence until the bytes completing it arrive.

use std::char::REPLACEMENT_CHARACTER;

/// Streaming UTF-8 decoder.
///
/// ```
/// use sitechat_sdk::Utf8StreamDecoder;
///
/// let mut decoder = Utf8StreamDecoder::new();
/// // "é" is 0xC3 0xA9, split across two chunks.
/// assert_eq!(decoder.decode(b"caf\xC3"), "caf");
/// assert_eq!(decoder.decode(b"\xA9!"), "é!");
/// assert_eq!(decoder.finish(), "");
/// ```
#[derive(Debug, Default)]
pub struct Utf8StreamDecoder {
    pending: Vec<u8>,
}

impl Utf8StreamDecoder {
    /// A decoder with nothing buffered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `chunk`, prefixed by whatever was left over from the previous
    /// call.
    ///
    /// Invalid sequences become U+FFFD. An incomplete sequence at the end is
    /// held back for the next call.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        self.pending.extend_from_slice(chunk);

        let mut out = String::with_capacity(self.pending.len());
        let mut start = 0;
        while start < self.pending.len() {
            match std::str::from_utf8(&self.pending[start..]) {
                Ok(valid) => {
                    out.push_str(valid);
                    start = self.pending.len();
                }
                Err(err) => {
                    let valid_end = start + err.valid_up_to();
                    out.push_str(&String::from_utf8_lossy(&self.pending[start..valid_end]));
                    match err.error_len() {
                        Some(len) => {
                            out.push(REPLACEMENT_CHARACTER);
                            start = valid_end + len;
                        }
                        None => {
                            start = valid_end;
                            break;
                        }
                    }
                }
            }
        }

        self.pending.drain(..start);
        out
    }

    /// Flush the decoder at end of stream.
    ///
    /// A sequence still incomplete at this point can never be completed and
    /// is returned as U+FFFD.
    pub fn finish(&mut self) -> String {
        let tail = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        tail
    }

    /// Whether an incomplete sequence is buffered.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
