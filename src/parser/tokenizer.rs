//! Split the data file into per-stream token buffers.
//!
//! Every line contributes one field to each of the [`STREAM_COUNT`] streams.
//! A stream's fields are joined into a single space-separated buffer, which
//! is then read token by token through a [`StreamCursor`].

use crate::config::STREAM_COUNT;
use crate::error::Result;
use crate::parser::source::ContentSource;
use camino::Utf8Path;

/// Space-joined field buffers, one per stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamBuffers {
    buffers: [String; STREAM_COUNT],
    lines: usize,
}

impl StreamBuffers {
    /// Read `path` from `source` and split it into stream buffers.
    pub fn load<S: ContentSource>(source: &mut S, path: &Utf8Path) -> Result<Self> {
        let text = source.read_to_string(path)?;
        let buffers = Self::from_text(&text);
        tracing::debug!("Read {} lines from {}", buffers.lines, path);
        Ok(buffers)
    }

    pub fn from_text(text: &str) -> Self {
        let mut out = Self::default();
        for line in text.lines() {
            out.push_line(line);
        }
        out
    }

    /// Append the fields of one line to the stream buffers.
    ///
    /// The first three fields end at the next tab, which is consumed. If no
    /// tab is left the rest of the line is used and kept, so a short line
    /// repeats its last field. The last field takes everything that remains.
    pub fn push_line(&mut self, line: &str) {
        let mut rest = line;
        for (i, buffer) in self.buffers.iter_mut().enumerate() {
            let field = if i + 1 == STREAM_COUNT {
                rest
            } else if let Some((field, tail)) = rest.split_once('\t') {
                rest = tail;
                field
            } else {
                rest
            };
            if !buffer.is_empty() {
                buffer.push(' ');
            }
            buffer.push_str(field);
        }
        self.lines += 1;
    }

    /// Number of lines read, header included.
    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Raw buffer of one stream.
    pub fn buffer(&self, stream: usize) -> &str {
        &self.buffers[stream]
    }

    /// A fresh read cursor positioned at the start of `stream`.
    pub fn cursor(&self, stream: usize) -> StreamCursor<'_> {
        StreamCursor::new(&self.buffers[stream])
    }

    /// One cursor per stream, each already past the header token.
    ///
    /// The first token is dropped even when it is the only one, so an empty
    /// header field never lets the first data row stand in for the header.
    pub fn data_cursors(&self) -> [StreamCursor<'_>; STREAM_COUNT] {
        std::array::from_fn(|i| {
            let mut cursor = self.cursor(i);
            cursor.next_token();
            cursor
        })
    }
}

/// Sequential reader over one stream buffer.
///
/// Tokens end at a single space. The stream is exhausted once the cursor
/// reaches the end of the buffer, so an empty buffer yields no tokens and a
/// buffer ending in a space yields no trailing empty token.
#[derive(Debug, Clone)]
pub struct StreamCursor<'a> {
    buffer: &'a str,
    pos: usize,
}

impl<'a> StreamCursor<'a> {
    pub fn new(buffer: &'a str) -> Self {
        Self { buffer, pos: 0 }
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.buffer.len()
    }

    /// Return the next token and advance past it and its separator.
    pub fn next_token(&mut self) -> Option<&'a str> {
        if self.is_exhausted() {
            return None;
        }
        let rest = &self.buffer[self.pos..];
        match rest.find(' ') {
            Some(end) => {
                self.pos += end + 1;
                Some(&rest[..end])
            }
            None => {
                self.pos = self.buffer.len();
                Some(rest)
            }
        }
    }

    /// The unread part of the buffer.
    pub fn remaining(&self) -> &'a str {
        &self.buffer[self.pos.min(self.buffer.len())..]
    }
}

impl<'a> Iterator for StreamCursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
