//! WASM bindings for Colombian cedula scan parsing.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js:
//! the scanner UI hands raw decoded text over and receives a structured
//! record back.

use wasm_bindgen::prelude::*;

use cedula_core::{ocr, sanitize, wedge, CedulaParser, SurnameDictionary};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Parse one scan event into a structured record.
#[wasm_bindgen]
pub fn parse_scan(raw: &str) -> Result<JsValue, JsValue> {
    let record = CedulaParser::new().parse(raw);
    serde_wasm_bindgen::to_value(&record).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Normalize raw scanner output into the restricted character set.
#[wasm_bindgen]
pub fn sanitize_scan(raw: &str) -> String {
    sanitize(raw)
}

/// Strip keyboard-wedge control markers from a physical-scanner buffer.
#[wasm_bindgen]
pub fn clean_wedge_buffer(raw: &str) -> String {
    wedge::clean_buffer(raw)
}

/// Salvage a bare numeric code from OCR-recognized text.
#[wasm_bindgen]
pub fn extract_ocr_code(text: &str) -> Option<String> {
    ocr::extract_code(text)
}

/// Scanner class for browser use.
#[wasm_bindgen]
pub struct CedulaScanner {
    parser: CedulaParser,
}

#[wasm_bindgen]
impl CedulaScanner {
    /// Create a scanner with the built-in surname dictionary.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: CedulaParser::new(),
        }
    }

    /// Replace the surname dictionary; list order is the match priority.
    #[wasm_bindgen]
    pub fn set_surnames(&mut self, entries: Vec<String>) -> Result<(), JsValue> {
        let dictionary = SurnameDictionary::from_entries(entries)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.parser = CedulaParser::new().with_dictionary(dictionary);
        Ok(())
    }

    /// Parse a scan event.
    #[wasm_bindgen]
    pub fn parse(&self, raw: &str) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.parser.parse(raw))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Parse a scan event and include the sanitized text.
    #[wasm_bindgen]
    pub fn parse_with_sanitized(&self, raw: &str) -> Result<JsValue, JsValue> {
        #[derive(serde::Serialize)]
        struct Outcome {
            record: cedula_core::DocumentRecord,
            sanitized: String,
        }

        let outcome = self.parser.parse_outcome(raw);
        let output = Outcome {
            record: outcome.record,
            sanitized: outcome.sanitized,
        };

        serde_wasm_bindgen::to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for CedulaScanner {
    fn default() -> Self {
        Self::new()
    }
}
