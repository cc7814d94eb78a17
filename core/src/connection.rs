//! A single blocking TCP connection, owned for the length of one request.
//!
//! # Design
//! `Connection` is returned by `connect` and passed by value; there is no
//! socket stored on the client. `close` consumes the connection, and an
//! early `?` return drops it, so the socket is released on every path.

use std::io::{self, ErrorKind, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};

use log::debug;

use crate::error::ClientError;

#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
}

impl Connection {
    /// Resolve `host` and connect to the first IPv4 address that accepts.
    pub fn connect(host: &str, port: u16) -> Result<Self, ClientError> {
        let connect_err = |source: io::Error| ClientError::Connect {
            host: host.to_string(),
            port,
            source,
        };

        let addrs: Vec<SocketAddr> = (host, port)
            .to_socket_addrs()
            .map_err(connect_err)?
            .filter(SocketAddr::is_ipv4)
            .collect();

        let mut last_err =
            io::Error::new(ErrorKind::AddrNotAvailable, "no IPv4 address for host");
        for addr in addrs {
            debug!("connecting to {host}:{port} via {addr}");
            match TcpStream::connect(addr) {
                Ok(stream) => return Ok(Self { stream }),
                Err(e) => {
                    debug!("connect to {addr} failed: {e}");
                    last_err = e;
                }
            }
        }
        Err(connect_err(last_err))
    }

    pub fn send(&mut self, bytes: &[u8]) -> Result<(), ClientError> {
        self.stream.write_all(bytes)?;
        self.stream.flush()?;
        debug!("sent {} bytes", bytes.len());
        Ok(())
    }

    /// Read `chunk_size` bytes at a time until the peer closes, then decode
    /// the whole buffer as UTF-8.
    pub fn read_to_close(&mut self, chunk_size: usize) -> Result<String, ClientError> {
        let mut received = Vec::new();
        let mut chunk = vec![0u8; chunk_size.max(1)];
        loop {
            match self.stream.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => received.extend_from_slice(&chunk[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        debug!("received {} bytes", received.len());
        Ok(String::from_utf8(received)?)
    }

    /// Shut the socket down and release it.
    pub fn close(self) {
        // The peer has usually closed already; NotConnected here is expected.
        if let Err(e) = self.stream.shutdown(Shutdown::Both) {
            debug!("shutdown: {e}");
        }
    }
}
