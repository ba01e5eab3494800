use std::io;

use bytes::BytesMut;
use thiserror::Error as ThisError;
use tokio_util::codec::{Decoder, Encoder};

use crate::response::Response;

pub const DEFAULT_MAX_LINE_LENGTH: usize = 8 * 1024;

/// Splits the inbound byte stream into request lines and serializes outbound responses.
///
/// Lines end with `\n`; a `\r` right before it is dropped. Invalid UTF-8 is replaced rather than
/// rejected, the tokenizer only cares about spaces and quotes.
#[derive(Debug)]
pub struct LineCodec {
    max_length: usize,
    // Where to resume looking for a newline, so a slowly arriving line is scanned only once.
    next_index: usize,
}

impl LineCodec {
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            next_index: 0,
        }
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_LENGTH)
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let newline = src[self.next_index..].iter().position(|b| *b == b'\n');

        let Some(offset) = newline else {
            // A trailing `\r` may still be waiting for its `\n`.
            let pending = match src.last() {
                Some(b'\r') => src.len() - 1,
                _ => src.len(),
            };
            if pending > self.max_length {
                return Err(CodecError::LineTooLong {
                    max: self.max_length,
                });
            }
            self.next_index = src.len();
            return Ok(None); // Not enough data to read a whole line.
        };

        let index = self.next_index + offset;
        self.next_index = 0;

        // Remove the line, newline included, from the buffer.
        let line = src.split_to(index + 1);
        let line = &line[..index];
        let line = line.strip_suffix(&b"\r"[..]).unwrap_or(line);

        if line.len() > self.max_length {
            return Err(CodecError::LineTooLong {
                max: self.max_length,
            });
        }

        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }

        if src.is_empty() {
            return Ok(None);
        }

        // The peer went away in the middle of a line, which is never handed to the parser.
        let pending = src.len();
        src.clear();
        self.next_index = 0;

        Err(CodecError::UnexpectedEof { pending })
    }
}

impl Encoder<Response> for LineCodec {
    type Error = CodecError;

    fn encode(&mut self, response: Response, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.extend_from_slice(&response.serialize());
        Ok(())
    }
}

#[derive(Debug, ThisError)]
pub enum CodecError {
    #[error("line exceeds the maximum length of {max} bytes")]
    LineTooLong { max: usize },
    #[error("connection closed with {pending} bytes of an unterminated line")]
    UnexpectedEof { pending: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}
