//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - Text generation providers (Gemini, mock)
//! - `document` - Format exporters and local artifact storage
//! - `http` - Axum routes serving the page and downloads

pub mod ai;
pub mod document;
pub mod http;
