//! Core library for Colombian identity-document scan parsing.
//!
//! This crate provides:
//! - Sanitization of raw scanner/OCR output (encoding noise, control characters)
//! - Format recognition for the digital (PubDSK) and legacy cedula encodings
//! - A dictionary-driven surname/given-name tokenizer
//! - Helpers for keyboard-wedge buffers and OCR-recognized text

pub mod error;
pub mod models;
pub mod ocr;
pub mod scan;
pub mod wedge;

pub use error::{CedulaError, Result};
pub use models::config::ScanConfig;
pub use models::record::{DocumentKind, DocumentRecord};
pub use scan::rules::{sanitize, scrub, SurnameDictionary};
pub use scan::{CedulaParser, ScanOutcome};
