//! The cumulative text of one streamed answer.

use std::pin::Pin;

use bytes::Bytes;
use futures::{Stream, StreamExt};

use crate::decoder::Utf8StreamDecoder;
use crate::error::SdkError;

type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, SdkError>>>>;

/// One answer being received.
///
/// Pulls body chunks, decodes them and grows a single buffer. The stream is
/// finite and cannot be restarted: once [`next_snapshot`](Self::next_snapshot)
/// has returned `None` or an error, it keeps returning `None`.
pub struct AnswerStream {
    body: ByteStream,
    decoder: Utf8StreamDecoder,
    text: String,
    finished: bool,
}

impl AnswerStream {
    /// Wrap any stream of body chunks.
    pub fn from_chunks<S>(chunks: S) -> Self
    where
        S: Stream<Item = Result<Bytes, SdkError>> + 'static,
    {
        Self {
            body: Box::pin(chunks),
            decoder: Utf8StreamDecoder::new(),
            text: String::new(),
            finished: false,
        }
    }

    /// Wait for more text and return the whole answer received so far.
    ///
    /// Chunks that decode to nothing (half of a multi-byte character) do
    /// not produce a snapshot. At end of stream the decoder is flushed; if
    /// that adds text, one last snapshot is returned before `None`.
    pub async fn next_snapshot(&mut self) -> Option<Result<&str, SdkError>> {
        loop {
            if self.finished {
                return None;
            }
            match self.body.next().await {
                Some(Ok(chunk)) => {
                    let decoded = self.decoder.decode(&chunk);
                    if decoded.is_empty() {
                        continue;
                    }
                    self.text.push_str(&decoded);
                    return Some(Ok(&self.text));
                }
                Some(Err(err)) => {
                    self.finished = true;
                    return Some(Err(err));
                }
                None => {
                    self.finished = true;
                    let tail = self.decoder.finish();
                    if tail.is_empty() {
                        return None;
                    }
                    self.text.push_str(&tail);
                    return Some(Ok(&self.text));
                }
            }
        }
    }

    /// Text received so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the end of the stream (or an error) has been reached.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Drain the stream and return the complete text.
    pub async fn collect_text(mut self) -> Result<String, SdkError> {
        while let Some(snapshot) = self.next_snapshot().await {
            snapshot?;
        }
        Ok(self.text)
    }
}

impl std::fmt::Debug for AnswerStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnswerStream")
            .field("text", &self.text)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use futures::stream;

    use super::*;

    fn chunks(parts: &[&'static [u8]]) -> AnswerStream {
        AnswerStream::from_chunks(stream::iter(
            parts
                .iter()
                .map(|p| Ok(Bytes::from_static(p)))
                .collect::<Vec<_>>(),
        ))
    }

    fn snapshots(mut answer: AnswerStream) -> Vec<String> {
        block_on(async move {
            let mut out = Vec::new();
            while let Some(snapshot) = answer.next_snapshot().await {
                out.push(snapshot.unwrap().to_string());
            }
            out
        })
    }

    #[test]
    fn snapshots_are_cumulative() {
        assert_eq!(
            snapshots(chunks(&[b"```js\nconsole.log", b"(1)```"])),
            vec!["```js\nconsole.log", "```js\nconsole.log(1)```"]
        );
    }

    #[test]
    fn split_character_waits_for_completion() {
        assert_eq!(
            snapshots(chunks(&[b"caf", b"\xC3", b"\xA9"])),
            vec!["caf", "café"]
        );
    }

    #[test]
    fn dangling_sequence_is_flushed_at_end() {
        assert_eq!(
            snapshots(chunks(&[b"ok", b"\xE2\x98"])),
            vec!["ok", "ok\u{FFFD}"]
        );
    }

    #[test]
    fn empty_body_yields_nothing() {
        assert!(snapshots(chunks(&[])).is_empty());
    }

    #[test]
    fn error_is_terminal() {
        let mut answer = AnswerStream::from_chunks(stream::iter(vec![
            Ok(Bytes::from_static(b"partial")),
            Err(SdkError::NotStreaming),
            Ok(Bytes::from_static(b" never seen")),
        ]));
        block_on(async {
            assert_eq!(answer.next_snapshot().await.unwrap().unwrap(), "partial");
            assert!(answer.next_snapshot().await.unwrap().is_err());
            assert!(answer.next_snapshot().await.is_none());
        });
        assert!(answer.is_finished());
        assert_eq!(answer.text(), "partial");
    }

    #[test]
    fn collect_text_drains() {
        let text = block_on(chunks(&[b"a", b"b", b"c"]).collect_text()).unwrap();
        assert_eq!(text, "abc");
    }
}
