// ABOUTME: TCP transport for the SMS gateway protocol: buffered frame writes and bounded response reads
// ABOUTME: One request/response exchange at a time; no correlation ids exist on this protocol

use crate::client::error::{GatewayError, GatewayResult};
use crate::codec::RESPONSE_LEN;
use bytes::{Bytes, BytesMut};
use std::io;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufWriter};
use tokio::net::TcpStream;
use tokio::time;

/// Frame-level I/O over a single gateway socket.
///
/// Requests are written whole and flushed. Responses are read by
/// [`read_response`](Connection::read_response), which waits for one
/// complete response frame within a deadline.
///
/// ## Exchange discipline
///
/// The gateway answers requests in order and its frames carry no sequence
/// number, so a response can only be attributed to a request when exactly
/// one request is outstanding. `Connection` does not enforce this itself;
/// the session keeps it behind an async mutex held for the whole exchange.
#[derive(Debug)]
pub struct Connection {
    // Buffered writes so each frame reaches the socket in one flush.
    stream: BufWriter<TcpStream>,

    // Inbound bytes not yet handed out as a response.
    buffer: BytesMut,

    // Set once the peer has closed its side of the socket.
    peer_closed: bool,
}

impl Connection {
    pub fn new(socket: TcpStream) -> Connection {
        Connection {
            stream: BufWriter::new(socket),
            buffer: BytesMut::with_capacity(RESPONSE_LEN * 2),
            peer_closed: false,
        }
    }

    /// Write one complete request frame and flush it to the socket.
    pub async fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.stream.write_all(frame).await?;
        self.stream.flush().await
    }

    /// Wait for the next response frame, bounded by `wait`.
    ///
    /// Reads until at least one full response frame is buffered and returns
    /// everything buffered, so a burst longer than one frame is handed to the
    /// decoder as-is and rejected there. If the peer closes mid-frame the
    /// partial bytes are returned; if it closes with nothing buffered the
    /// result is [`GatewayError::ConnectionClosed`].
    pub async fn read_response(&mut self, wait: Duration) -> GatewayResult<Bytes> {
        match time::timeout(wait, self.fill_response()).await {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout(wait)),
        }
    }

    async fn fill_response(&mut self) -> GatewayResult<Bytes> {
        loop {
            if self.buffer.len() >= RESPONSE_LEN {
                return Ok(self.buffer.split().freeze());
            }

            // `read_buf` is cancel safe, so a timeout never loses bytes that
            // were already received.
            if 0 == self.stream.read_buf(&mut self.buffer).await? {
                self.peer_closed = true;

                if self.buffer.is_empty() {
                    return Err(GatewayError::ConnectionClosed);
                }
                return Ok(self.buffer.split().freeze());
            }
        }
    }

    /// Move whatever the socket already holds into the buffer without
    /// waiting. End-of-stream or a socket error marks the peer closed.
    fn read_pending(&mut self) {
        while !self.peer_closed {
            match self.stream.get_ref().try_read_buf(&mut self.buffer) {
                Ok(0) => self.peer_closed = true,
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => return,
                Err(_) => self.peer_closed = true,
            }
        }
    }

    /// Check, without waiting, that the peer has not closed the socket
    pub fn check_alive(&mut self) -> bool {
        self.read_pending();
        !self.peer_closed
    }

    /// Drop any bytes received outside an exchange, e.g. a reply that
    /// arrived after its request timed out, including bytes still queued
    /// on the socket. Returns how many were dropped.
    pub fn discard_buffered(&mut self) -> usize {
        self.read_pending();
        let stale = self.buffer.len();
        self.buffer.clear();
        stale
    }

    /// True once a read has observed end-of-stream
    pub fn is_peer_closed(&self) -> bool {
        self.peer_closed
    }

    /// Flush pending writes and shut down the write side of the socket.
    pub async fn shutdown(&mut self) -> io::Result<()> {
        self.stream.shutdown().await
    }
}
