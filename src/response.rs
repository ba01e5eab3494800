// Server replies, see RFC 2229 section 2.4.

use std::fmt;

static CRLF: &[u8; 2] = b"\r\n";

static MIME_HEADER: &[u8] =
    b"Content-type: text/plain; charset=utf-8\r\nContent-transfer-encoding: 8bit\r\n\r\n";

#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    /// A single `<code> <message>` line.
    Status { code: u16, message: String },
    /// A dot-terminated text block, optionally preceded by the MIME header.
    Text { mime: bool, body: String },
}

impl Response {
    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Response::Status {
            code,
            message: message.into(),
        }
    }

    pub fn text(mime: bool, body: impl Into<String>) -> Self {
        Response::Text {
            mime,
            body: body.into(),
        }
    }

    pub fn serialize(&self) -> Vec<u8> {
        match self {
            Response::Status { code, message } => {
                let line = format!("{} {}", code, message);
                let mut bytes = Vec::with_capacity(line.len() + CRLF.len());
                bytes.extend_from_slice(line.as_bytes());
                bytes.extend_from_slice(CRLF);
                bytes
            }
            Response::Text { mime, body } => {
                let mut bytes = Vec::with_capacity(MIME_HEADER.len() + body.len() + 16);
                if *mime {
                    bytes.extend_from_slice(MIME_HEADER);
                }
                dot_stuff(body.as_bytes(), &mut bytes);
                bytes
            }
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Status { code, message } => write!(f, "{} {}", code, message),
            Response::Text { mime, body } => {
                write!(f, "<text block, {} bytes, mime: {}>", body.len(), mime)
            }
        }
    }
}

/// Writes `body` as a dot-terminated block.
///
/// Line endings become CRLF, a line starting with `.` gets a second one, an unfinished last line
/// is ended, and a lone `.` line closes the block.
fn dot_stuff(body: &[u8], dst: &mut Vec<u8>) {
    let mut line_start = true;
    let mut after_cr = false;

    for &byte in body {
        match byte {
            b'.' if line_start => dst.extend_from_slice(b".."),
            b'\n' if after_cr => dst.push(byte),
            b'\n' => dst.extend_from_slice(CRLF),
            byte => dst.push(byte),
        }
        line_start = byte == b'\n';
        after_cr = byte == b'\r';
    }

    if after_cr {
        dst.push(b'\n');
    } else if !line_start {
        dst.extend_from_slice(CRLF);
    }
    dst.extend_from_slice(b".");
    dst.extend_from_slice(CRLF);
}
