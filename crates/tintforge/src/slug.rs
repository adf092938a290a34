//! Slug derivation for scheme names.
//!
//! A slug is the lowercase ASCII identifier (`[a-z0-9-]`) used in output file
//! names. Accented letters keep their base letter (`é` becomes `e`); any other
//! non-ASCII character is dropped.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Converts arbitrary text into a slug.
///
/// The text is decomposed (NFD), combining marks and remaining non-ASCII
/// characters are removed, spaces and hyphens each become `-`, other ASCII
/// punctuation is dropped and the result is lowercased. Applying `slugify` to
/// its own output returns it unchanged.
///
/// # Example
///
/// ```rust
/// use tintforge::slugify;
///
/// assert_eq!(slugify("Rosé Pine"), "rose-pine");
/// assert_eq!(slugify("Tomorrow Night (Eighties)"), "tomorrow-night-eighties");
/// ```
pub fn slugify(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(char::is_ascii)
        .filter_map(|c| match c {
            ' ' | '-' => Some('-'),
            c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
            _ => None,
        })
        .collect()
}
