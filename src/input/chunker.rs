use std::io::{self, Read};

/// Default chunk size in characters (Unicode scalar values).
pub const DEFAULT_CHUNK_SIZE: usize = 2048;

/// Bytes pulled from the source per read.
const READ_BLOCK_SIZE: usize = 8192;

/// Splits a byte source into bounded text chunks at line boundaries.
///
/// Chunks are ordered, contiguous, and non-overlapping; concatenating them
/// reproduces the source exactly, line endings included. A chunk boundary
/// falls immediately after the last newline in the working buffer whenever
/// one is present; a mid-line split happens only when the buffer grows past
/// twice the chunk size without any newline, and then emits exactly
/// `chunk_size` characters. An empty source yields exactly one empty chunk.
///
/// The reader is lazy (nothing is read before the first `next()`), finite,
/// and fused after the final chunk or the first error. UTF-8 is decoded
/// incrementally, so a multi-byte character split across reads is handled;
/// genuinely invalid bytes end the iteration with an
/// [`io::ErrorKind::InvalidData`] error.
pub struct ChunkReader<R> {
    source: R,
    chunk_size: usize,
    /// Decoded text not yet emitted.
    buffer: String,
    /// Bytes of an incomplete UTF-8 sequence carried to the next read.
    pending: Vec<u8>,
    eof: bool,
    emitted_any: bool,
    finished: bool,
}

impl<R: Read> ChunkReader<R> {
    pub fn new(source: R) -> Self {
        Self::with_chunk_size(source, DEFAULT_CHUNK_SIZE)
    }

    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_chunk_size(source: R, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be positive");
        Self {
            source,
            chunk_size,
            buffer: String::new(),
            pending: Vec::new(),
            eof: false,
            emitted_any: false,
            finished: false,
        }
    }

    /// Reads one block and appends whatever complete UTF-8 it closes over.
    fn fill(&mut self) -> io::Result<()> {
        let mut block = [0u8; READ_BLOCK_SIZE];
        let read = self.source.read(&mut block)?;

        if read == 0 {
            self.eof = true;
            if !self.pending.is_empty() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "input ends inside a UTF-8 sequence",
                ));
            }
            return Ok(());
        }

        self.pending.extend_from_slice(&block[..read]);

        let valid = match std::str::from_utf8(&self.pending) {
            Ok(_) => self.pending.len(),
            // An incomplete trailing sequence stays pending for the next read.
            Err(err) if err.error_len().is_none() => err.valid_up_to(),
            Err(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "input is not valid UTF-8",
                ));
            }
        };

        let mut ready = std::mem::take(&mut self.pending);
        self.pending = ready.split_off(valid);
        match String::from_utf8(ready) {
            Ok(text) => self.buffer.push_str(&text),
            Err(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "input is not valid UTF-8",
                ));
            }
        }
        Ok(())
    }

    /// Splits off and returns `buffer[..end]`; `end` must sit on a char
    /// boundary.
    fn take_buffer(&mut self, end: usize) -> String {
        let rest = self.buffer.split_off(end);
        std::mem::replace(&mut self.buffer, rest)
    }

    /// Byte index just past the first `n` characters, present only when the
    /// buffer holds more than `n` characters.
    fn cut_at(&self, n: usize) -> Option<usize> {
        self.buffer.char_indices().nth(n).map(|(idx, _)| idx)
    }

    /// The forced-split point: the byte index ending the first `chunk_size`
    /// characters, present only when the buffer exceeds twice the chunk
    /// size.
    fn forced_cut(&self) -> Option<usize> {
        let mut indices = self.buffer.char_indices();
        let cut = indices.nth(self.chunk_size).map(|(idx, _)| idx)?;
        // Require a full chunk_size characters beyond the cut as well.
        indices.nth(self.chunk_size - 1)?;
        Some(cut)
    }
}

impl<R: Read> Iterator for ChunkReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            // A line boundary always wins: everything up to and including
            // the last newline currently buffered.
            if let Some(pos) = self.buffer.rfind('\n') {
                self.emitted_any = true;
                return Some(Ok(self.take_buffer(pos + 1)));
            }

            // No newline anywhere in the buffer: force a mid-line split
            // once it exceeds twice the chunk size.
            if let Some(cut) = self.forced_cut() {
                self.emitted_any = true;
                return Some(Ok(self.take_buffer(cut)));
            }

            if self.eof {
                // Drain the remainder at chunk-size granularity; the final
                // piece may be short.
                if !self.buffer.is_empty() {
                    self.emitted_any = true;
                    if let Some(cut) = self.cut_at(self.chunk_size) {
                        return Some(Ok(self.take_buffer(cut)));
                    }
                    self.finished = true;
                    return Some(Ok(std::mem::take(&mut self.buffer)));
                }
                self.finished = true;
                if self.emitted_any {
                    return None;
                }
                // An empty source still yields exactly one (empty) chunk.
                self.emitted_any = true;
                return Some(Ok(String::new()));
            }

            if let Err(err) = self.fill() {
                self.finished = true;
                return Some(Err(err));
            }
        }
    }
}
