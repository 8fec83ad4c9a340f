//! HTTP protocol implementation.
//!
//! This module implements a one-request-per-connection HTTP/1.1 server core:
//! each accepted connection reads a single request, answers it, and closes.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The per-connection worker implementing the request-response state machine
//! - **`parser`**: Parses one raw request buffer into a structured request
//! - **`request`**: HTTP method table and request representation
//! - **`response`**: HTTP response representation with the canned error responses
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: Content-type classification for resolved file paths
//!
//! # Connection State Machine
//!
//! Each client connection goes through a linear state machine:
//!
//! ```text
//!        ┌──────────────┐
//!        │  Receiving   │ ← One read of the incoming request bytes
//!        └──────┬───────┘
//!               │ Bytes received
//!               ▼
//!        ┌──────────────┐
//!        │   Parsing    │ ← Tokenize request line and headers
//!        └──────┬───────┘     (failure → Closed, nothing written)
//!               │ Request parsed
//!               ▼
//!        ┌──────────────┐
//!        │  Resolving   │ ← Map the path onto the document root
//!        └──────┬───────┘     (traversal → 400, missing → 404)
//!               │ Response ready
//!               ▼
//!        ┌──────────────┐
//!        │  Responding  │ ← Send the complete response
//!        └──────┬───────┘
//!               │ Response sent
//!               ▼
//!            Closed
//! ```
//!
//! There are no retries and no backward transitions; the connection always
//! ends in `Closed` with its resources released.
//!
//! # Example
//!
//! ```ignore
//! use kiosk::config::StaticFilesConfig;
//! use kiosk::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let static_files = StaticFilesConfig { root: "./static".to_string() };
//!
//!     loop {
//!         let (socket, peer) = listener.accept().await?;
//!         let static_files = static_files.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, peer, static_files);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
