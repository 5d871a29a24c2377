//! Incremental decoding of the provider's server-sent events.

use serde_json::Value;

const DONE_MARKER: &str = "[DONE]";

/// Concatenated text of every `candidates[].content.parts[].text` in one
/// streamed JSON object.
pub fn extract_text(payload: &Value) -> Option<String> {
    let candidates = payload.get("candidates")?.as_array()?;
    let text: String = candidates
        .iter()
        .filter_map(|candidate| candidate.pointer("/content/parts"))
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    (!text.is_empty()).then_some(text)
}

/// Splits the byte stream into lines and yields the text carried by each
/// complete `data:` line. Partial lines (and partial UTF-8 sequences) wait
/// in the buffer for the next chunk.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> SseDecoder {
        SseDecoder::default()
    }

    fn decode_line(line: &[u8]) -> Option<String> {
        let line = String::from_utf8_lossy(line);
        let data = line.trim_end_matches('\r').strip_prefix("data:")?.trim();
        if data.is_empty() || data == DONE_MARKER {
            return None;
        }
        let payload: Value = serde_json::from_str(data).ok()?;
        extract_text(&payload)
    }

    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut texts: Vec<String> = Vec::new();
        while let Some(newline) = self.buffer.iter().position(|byte| *byte == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=newline).collect();
            if let Some(text) = SseDecoder::decode_line(&line[..line.len() - 1]) {
                texts.push(text);
            }
        }
        texts
    }

    /// Flushes a last line that arrived without a trailing newline.
    pub fn finish(&mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.buffer);
        SseDecoder::decode_line(&rest)
    }
}
