use crate::services::chat::types::MessageUpdate;
use serde_json::Value;

const DATA_PREFIX: &str = "data: ";
const DONE_SENTINEL: &str = "[DONE]";

/// Incrementally reassembles assistant text from a server-sent-event byte
/// stream.
///
/// Bytes arrive in arbitrary chunks; the assembler buffers them, consumes
/// complete lines, and emits one [`MessageUpdate`] per extracted delta. The
/// sequence of updates produced is independent of how the byte stream was
/// chunked.
#[derive(Debug, Default)]
pub struct DeltaAssembler {
    buffer: Vec<u8>,
    content: String,
    done: bool,
}

enum LineOutcome {
    /// A delta was extracted from a data line.
    Delta(String),
    /// Blank line, comment, non-data line, or a chunk carrying no content.
    Skip,
    /// The stream-end sentinel.
    Done,
    /// A data line whose JSON payload does not parse yet.
    Incomplete,
}

impl DeltaAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes a chunk of stream bytes and returns the updates produced by
    /// every complete line in it.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<MessageUpdate> {
        self.buffer.extend_from_slice(chunk);

        let mut updates = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let rest = self.buffer.split_off(pos + 1);
            let mut line_bytes = std::mem::replace(&mut self.buffer, rest);
            line_bytes.pop();
            if line_bytes.last() == Some(&b'\r') {
                line_bytes.pop();
            }

            let line = String::from_utf8_lossy(&line_bytes).into_owned();
            match self.process_line(&line) {
                LineOutcome::Delta(delta) => {
                    self.content.push_str(&delta);
                    updates.push(MessageUpdate {
                        delta,
                        content: self.content.clone(),
                    });
                }
                LineOutcome::Skip => {}
                LineOutcome::Done => {
                    self.done = true;
                }
                LineOutcome::Incomplete => {
                    // The payload has not fully arrived. Put the line back in
                    // front of the unconsumed bytes and wait for more input.
                    line_bytes.push(b'\n');
                    line_bytes.append(&mut self.buffer);
                    self.buffer = line_bytes;
                    break;
                }
            }
        }

        updates
    }

    /// Flushes the assembler at end of stream. A trailing data line missing
    /// its terminator is still parsed when possible; otherwise it is logged
    /// and dropped.
    pub fn finish(&mut self) -> Option<MessageUpdate> {
        if self.buffer.is_empty() {
            return None;
        }

        let line_bytes = std::mem::take(&mut self.buffer);
        let line = String::from_utf8_lossy(&line_bytes).into_owned();
        let line = line.trim_end_matches('\r');

        match self.process_line(line) {
            LineOutcome::Delta(delta) => {
                self.content.push_str(&delta);
                Some(MessageUpdate {
                    delta,
                    content: self.content.clone(),
                })
            }
            LineOutcome::Done => {
                self.done = true;
                None
            }
            LineOutcome::Skip => None,
            LineOutcome::Incomplete => {
                tracing::debug!(line = %line, "dropping unparseable trailing stream line");
                None
            }
        }
    }

    fn process_line(&self, line: &str) -> LineOutcome {
        if line.is_empty() || line.starts_with(':') {
            return LineOutcome::Skip;
        }

        let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
            return LineOutcome::Skip;
        };

        if payload.starts_with(DONE_SENTINEL) {
            return LineOutcome::Done;
        }

        if self.done {
            return LineOutcome::Skip;
        }

        match serde_json::from_str::<Value>(payload) {
            Ok(value) => match extract_delta(&value) {
                Some(delta) if !delta.is_empty() => LineOutcome::Delta(delta),
                _ => LineOutcome::Skip,
            },
            Err(_) => LineOutcome::Incomplete,
        }
    }

    /// Full assistant text accumulated so far.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the `[DONE]` sentinel has been seen.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

fn extract_delta(value: &Value) -> Option<String> {
    value
        .get("choices")?
        .get(0)?
        .get("delta")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}
