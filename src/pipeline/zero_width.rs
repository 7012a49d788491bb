use crate::pipeline::numeral::{
    decode_payload_lossy, encode_payload, is_marker, ZERO_WIDTH_SPACE,
};
use crate::text::contains_markers;

/// Visible and hidden halves recovered from combined text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub visible: String,
    pub hidden: String,
}

/// Insert a zero-width space after every scalar of `text`
pub fn split(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 4);
    for scalar in text.chars() {
        out.push(scalar);
        out.push(ZERO_WIDTH_SPACE);
    }
    out
}

/// Hide `hidden` inside `visible`, right after its first scalar.
///
/// Inputs that already contain reserved symbols will not round-trip; they
/// are passed through unchanged with a warning.
pub fn embed(visible: &str, hidden: &str) -> String {
    if contains_markers(visible) {
        log::warn!("carrier text already contains reserved zero-width symbols");
    }
    if contains_markers(hidden) {
        log::warn!("hidden text contains reserved zero-width symbols");
    }

    let payload = encode_payload(hidden);
    let mut scalars = visible.chars();
    let Some(first) = scalars.next() else {
        return payload;
    };

    let mut out = String::with_capacity(visible.len() + payload.len());
    out.push(first);
    out.push_str(&payload);
    out.extend(scalars);

    log::debug!(
        "embedded {} hidden scalars as {} markers",
        hidden.chars().count(),
        payload.chars().count()
    );
    out
}

/// Separate ordinary scalars from reserved markers and decode the markers.
///
/// Malformed marker groups (stray zero-width spaces, out-of-range values)
/// are dropped; the visible text is always returned.
pub fn extract(combined: &str) -> Extracted {
    let (markers, visible): (String, String) = combined.chars().partition(|&c| is_marker(c));
    let hidden = decode_payload_lossy(&markers);
    Extracted { visible, hidden }
}
