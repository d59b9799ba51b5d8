//! Folio application library
//!
//! Application modules registered with the folio kernel. The only module today is
//! `books`, an in-memory catalog served at `/books`.

pub mod modules;

pub use modules::*;
