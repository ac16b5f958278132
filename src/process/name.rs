//! Name normalization: one display form and one search key per person.

use crate::process::layout;

/// Canonical display name: `First M. LastSuffix`.
///
/// Every field is trimmed first. First and last names get first-letter
/// capitalization, which flattens internal capitals ("McDonald" becomes
/// "Mcdonald", a quirk inherited from the source presentation and left
/// as-is). The middle initial appears only when present and not the `NA`
/// placeholder, uppercased with a trailing period. The suffix is appended
/// untouched, no separator.
pub fn display_name(first: &str, middle: &str, last: &str, suffix: &str) -> String {
    let mut name = capitalize(first.trim());

    let middle = middle.trim();
    if !middle.is_empty() && middle != layout::MISSING {
        name.push(' ');
        name.push_str(&middle.to_uppercase());
        name.push_str(". ");
    } else {
        name.push(' ');
    }

    name.push_str(&capitalize(last.trim()));

    let suffix = suffix.trim();
    if !suffix.is_empty() && suffix != layout::MISSING {
        name.push_str(suffix);
    }

    name
}

/// Canonical search key: lowercase `first last`, trimmed.
///
/// Doubles as the grouping key for cross-year aggregation, so two rows with
/// the same key are treated as the same person. Middle initial and suffix
/// never contribute.
pub fn search_key(first: &str, last: &str) -> String {
    format!(
        "{} {}",
        first.trim().to_lowercase(),
        last.trim().to_lowercase()
    )
}

/// First character uppercase, everything after it lowercase.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(head) => head
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
