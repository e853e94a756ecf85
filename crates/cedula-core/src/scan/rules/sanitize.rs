//! Raw scan text normalization.
//!
//! Scanner and OCR output arrives with barcode framing sequences, record
//! separators and mis-decoded symbols mixed into the useful characters.
//! Everything outside the useful set becomes a space so later patterns
//! can treat noise as a separator.

/// Characters the parser keeps verbatim: ASCII digits and letters, Ñ/ñ
/// and the space.
fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_alphabetic() || c == 'Ñ' || c == 'ñ' || c == ' '
}

/// Map every disallowed character to a single space.
///
/// One output character per input code point; character positions are
/// preserved, which the digital-payload anchor search relies on.
pub fn scrub(raw: &str) -> String {
    raw.chars()
        .map(|c| if is_allowed(c) { c } else { ' ' })
        .collect()
}

/// Collapse whitespace runs to one space and trim the ends.
pub(crate) fn collapse(scrubbed: &str) -> String {
    scrubbed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Fully normalize raw scan text: [`scrub`], then collapse and trim.
///
/// Total and idempotent: sanitizing already-sanitized text is a no-op.
pub fn sanitize(raw: &str) -> String {
    collapse(&scrub(raw))
}
