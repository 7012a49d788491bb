use crate::error::Result;
use crate::pipeline::numeral::{decode_groups, MARKERS};
use crate::text::reveal_invisible;
use std::path::Path;

const MARKER_NAMES: [&str; 6] = [
    "left-to-right mark",
    "right-to-left mark",
    "zero-width non-joiner",
    "zero-width joiner",
    "zero-width no-break space",
    "zero-width space",
];

/// Report on the reserved markers in a file, followed by its escaped text
pub fn show_inspection(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)?;

    let mut counts = [0usize; MARKERS.len()];
    let mut stream = String::new();
    let mut scalars = 0;
    for c in text.chars() {
        scalars += 1;
        if let Some(slot) = MARKERS.iter().position(|&m| m == c) {
            counts[slot] += 1;
            stream.push(c);
        }
    }
    let marker_total: usize = counts.iter().sum();

    let mut output = String::new();

    output.push_str("Zero-Width Inspection\n");
    output.push_str("=====================\n\n");

    output.push_str(&format!("File: {}\n", path.display()));
    output.push_str(&format!("Scalars: {}\n", scalars));
    output.push_str(&format!("Visible scalars: {}\n", scalars - marker_total));
    output.push_str(&format!("Reserved markers: {}\n", marker_total));
    for ((marker, name), count) in MARKERS.iter().zip(MARKER_NAMES).zip(counts) {
        output.push_str(&format!("  U+{:04X} {}: {}\n", *marker as u32, name, count));
    }
    output.push('\n');

    output.push_str("Hidden Payload:\n");
    let (decoded, malformed): (Vec<_>, Vec<_>) = decode_groups(&stream).partition(|g| g.is_ok());
    match decoded.len() {
        0 => output.push_str("  none\n"),
        n => output.push_str(&format!("  {} scalars\n", n)),
    }
    if let Some(Err(first)) = malformed.first() {
        output.push_str(&format!(
            "  {} malformed groups skipped (first: {})\n",
            malformed.len(),
            first
        ));
    }
    output.push('\n');

    output.push_str("Escaped Text:\n");
    output.push_str(&reveal_invisible(&text));
    if !text.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
