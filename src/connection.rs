use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio_util::codec::Framed;
use tracing::debug;
use uuid::Uuid;

use crate::codec::{CodecError, LineCodec};
use crate::response::Response;

/// Any byte stream a session can run on: a `TcpStream` in the server, an in-memory pipe in tests.
pub trait AsyncStream: AsyncRead + AsyncWrite + Send + Unpin {}

impl<T> AsyncStream for T where T: AsyncRead + AsyncWrite + Send + Unpin {}

pub struct Connection {
    pub id: Uuid,
    framed: Framed<Box<dyn AsyncStream>, LineCodec>,
    // Set once the server side hung up, after which no more lines are read.
    closed: bool,
}

impl Connection {
    pub fn new(stream: impl AsyncStream + 'static) -> Connection {
        Self::with_codec(stream, LineCodec::default())
    }

    pub fn with_codec(stream: impl AsyncStream + 'static, codec: LineCodec) -> Connection {
        let stream: Box<dyn AsyncStream> = Box::new(stream);

        Connection {
            id: Uuid::new_v4(),
            framed: Framed::new(stream, codec),
            closed: false,
        }
    }

    /// Reads the next line. `None` means the peer closed the stream or the connection was shut
    /// down on our side.
    pub async fn read_line(&mut self) -> Result<Option<String>, CodecError> {
        if self.closed {
            return Ok(None);
        }
        self.framed.next().await.transpose()
    }

    pub async fn write(&mut self, response: Response) -> Result<(), CodecError> {
        debug!("Sending response to client: {}", response);
        self.framed.send(response).await
    }

    /// Flushes pending responses and closes the write half of the stream.
    pub async fn shutdown(&mut self) -> Result<(), CodecError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        SinkExt::<Response>::flush(&mut self.framed).await?;
        self.framed.get_mut().shutdown().await?;
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
