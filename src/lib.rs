//! Kiosk - Minimal Static File Server
//!
//! Core library for HTTP parsing and static file serving.

pub mod config;
pub mod http;
pub mod server;
