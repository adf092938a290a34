//! Scheme discovery over a whole [`FileTree`].
//!
//! [`load_schemes`] loads every scheme file it can find and keeps going when
//! one is broken. Problems are reported together at the end, each prefixed with
//! the offending file's path, so a single run shows everything that needs
//! fixing.
//!
//! Two files that produce the same system and slug would write the same output
//! file. That is reported as a [`Conflict`](crate::Error::Conflict) rather than
//! resolved by letting one silently win.

use std::collections::HashMap;

use crate::error::{Error, ErrorList, Result};
use crate::scheme::{load_scheme, ColorScheme};
use crate::tree::FileTree;

/// Recognized scheme file extensions.
pub const SCHEME_EXTENSIONS: &[&str] = &[".yaml", ".yml"];

/// Loads every scheme file in `tree`.
///
/// Returns the schemes sorted by system, then slug. Fails if any file failed to
/// load or any two files conflict; in that case the error lists every problem
/// found.
pub fn load_schemes<T: FileTree + ?Sized>(tree: &T) -> Result<Vec<ColorScheme>> {
    let mut errors = ErrorList::new();
    let mut schemes = Vec::new();
    let mut claimed: HashMap<(String, String), String> = HashMap::new();

    for path in tree.files()? {
        if !SCHEME_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
            continue;
        }

        let scheme = match tree.read(&path).and_then(|data| load_scheme(&path, &data)) {
            Ok(scheme) => scheme,
            Err(err) => {
                errors.push_with_context(path, err);
                continue;
            }
        };

        let identity = (scheme.system().to_string(), scheme.slug().to_string());
        if let Some(first) = claimed.get(&identity) {
            errors.push(Error::Conflict {
                system: identity.0,
                slug: identity.1,
                first: first.clone(),
                second: path,
            });
            continue;
        }

        claimed.insert(identity, path);
        schemes.push(scheme);
    }

    errors.finish()?;

    schemes.sort_by(|a, b| (a.system(), a.slug()).cmp(&(b.system(), b.slug())));
    log::info!("found {} color schemes", schemes.len());
    Ok(schemes)
}
