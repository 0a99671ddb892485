//! Topic Report - prompt-driven report generation
//!
//! Sends a prompt to Gemini, extracts the numbered topics from the answer and
//! exports them as DOCX, XLSX and PDF files served back over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
