/// Incremental JSON array assembly for range-query results.
///
/// Documents are appended left-to-right into a single growing buffer with a
/// separator between consecutive entries only — no separator before the
/// first or after the last. Zero pushes finish as a well-formed empty
/// array. On a mid-scan failure the caller simply drops the streamer,
/// discarding the partial buffer.
pub struct ArrayStreamer {
    buf: Vec<u8>,
    count: usize,
}

impl ArrayStreamer {
    /// Start a new array.
    pub fn new() -> Self {
        Self {
            buf: vec![b'['],
            count: 0,
        }
    }

    /// Append one already-serialized document.
    pub fn push(&mut self, document: &[u8]) {
        if self.count > 0 {
            self.buf.push(b',');
        }
        self.buf.extend_from_slice(document);
        self.count += 1;
    }

    /// Number of documents appended so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Close the array and return the serialized bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.buf.push(b']');
        self.buf
    }
}

impl Default for ArrayStreamer {
    fn default() -> Self {
        Self::new()
    }
}
