//! Splits a chunked byte stream into text lines.

/// Accumulates bytes until complete lines are available.
///
/// Chunk boundaries can fall anywhere, including inside a multi-byte
/// character, so decoding waits for the newline.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pending: Vec<u8>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a chunk and return every line it completed. Blank lines are dropped.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let raw: Vec<u8> = self.pending.drain(..=pos).collect();
            if let Some(line) = decode_line(&raw[..pos]) {
                lines.push(line);
            }
        }
        lines
    }

    /// Flush whatever is left once the stream has ended.
    pub fn finish(&mut self) -> Option<String> {
        let raw = std::mem::take(&mut self.pending);
        decode_line(&raw)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

fn decode_line(raw: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(raw);
    let line = text.trim_end_matches('\r');
    if line.trim().is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}
