//! HTTP server for the investments service. Exposed as a library so
//! integration tests can drive the router without binding a socket.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;
