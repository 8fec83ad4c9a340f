//! Connection acceptance and static file serving.
//!
//! The listener owns the bound socket and spawns one worker task per
//! accepted connection; `static_files` maps request paths onto the document
//! root for those workers.

pub mod listener;
pub mod static_files;
