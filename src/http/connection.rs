use std::net::SocketAddr;

use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::{debug, trace};

use crate::config::StaticFilesConfig;
use crate::http::mime;
use crate::http::parser;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::server::static_files::{self, Resolution};

/// Size of the single receive; a request longer than this is cut short and
/// parsed as-is, exactly one read per connection.
pub const RECV_BUFFER_SIZE: usize = 1024;

pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    static_files: StaticFilesConfig,
    state: ConnectionState,
}

pub enum ConnectionState {
    Receiving,
    Parsing(BytesMut),
    Resolving(Request),
    Responding(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr, static_files: StaticFilesConfig) -> Self {
        Self {
            stream,
            peer,
            static_files,
            state: ConnectionState::Receiving,
        }
    }

    /// Drives the connection through its linear lifecycle:
    /// Receiving → Parsing → Resolving → Responding → Closed.
    ///
    /// A parse failure skips straight to Closed without writing a byte;
    /// resolution failures still go through Responding with the canned
    /// error response. The stream is dropped, and with it closed, on every
    /// exit path.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Receiving => {
                    let mut raw = BytesMut::with_capacity(RECV_BUFFER_SIZE);
                    let n = self.stream.read_buf(&mut raw).await?;

                    if n == 0 {
                        debug!("peer {} closed before sending a request", self.peer);
                        self.state = ConnectionState::Closed;
                    } else {
                        debug!("received {} bytes from {}", n, self.peer);
                        self.state = ConnectionState::Parsing(raw);
                    }
                }

                ConnectionState::Parsing(raw) => {
                    match parser::parse_request(&raw[..]) {
                        Ok(request) => {
                            debug!(
                                "{} {} with {} headers from {}",
                                request.method.as_str(),
                                request.path,
                                request.headers.len(),
                                self.peer
                            );
                            for header in &request.headers {
                                trace!("header {}: {}", header.name, header.value);
                            }
                            self.state = ConnectionState::Resolving(request);
                        }
                        Err(e) => {
                            // Malformed request → drop without a response
                            debug!("dropping request from {}: {:?}", self.peer, e);
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Resolving(request) => {
                    let response =
                        match static_files::resolve(&self.static_files, &request.path).await {
                            Resolution::Blocked => {
                                debug!(
                                    "blocked traversal attempt from {}: {}",
                                    self.peer, request.path
                                );
                                Response::traversal_blocked()
                            }
                            Resolution::NotFound => {
                                debug!("no file for {} requested by {}", request.path, self.peer);
                                Response::not_found()
                            }
                            Resolution::Found { file, path } => {
                                let contents = static_files::read_contents(file).await?;
                                Response::ok(mime::classify(&path), contents)
                            }
                        };

                    self.state = ConnectionState::Responding(ResponseWriter::new(&response));
                }

                ConnectionState::Responding(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }
}
