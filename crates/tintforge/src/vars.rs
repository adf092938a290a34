//! The variables a template sees for one scheme.
//!
//! Scheme metadata:
//!
//! | Variable | Value |
//! |----------|-------|
//! | `scheme-name` | Display name |
//! | `scheme-author` | Author, may be empty |
//! | `scheme-slug` | `rose-pine-dawn` |
//! | `scheme-slug-underscored` | `rose_pine_dawn` |
//! | `scheme-system` | `base16`, `base24`, ... |
//! | `scheme-description` | Description, defaults to the name |
//! | `scheme-variant` | `light`, `dark`, or empty |
//! | `scheme-is-light-variant` | `true` when the variant is `light` |
//! | `scheme-is-dark-variant` | `true` when the variant is `dark` |
//! | `scheme-is-<variant>-variant` | `true` for the scheme's own variant |
//!
//! And for every palette key `K` (including aliases):
//!
//! | Variable | `#ff8000` |
//! |----------|-----------|
//! | `K-hex` | `ff8000` |
//! | `K-hex-bgr` | `0080ff` |
//! | `K-hex-r`, `K-hex-g`, `K-hex-b` | `ff`, `80`, `00` |
//! | `K-rgb-r`, `K-rgb-g`, `K-rgb-b` | `255`, `128`, `0` |
//! | `K-dec-r`, `K-dec-g`, `K-dec-b` | `1`, `0.5019608`, `0` |

use serde_json::{Map, Value};

use crate::color::{channel_decimal, channel_hex};
use crate::scheme::ColorScheme;

/// Builds the variable namespace for `scheme`.
///
/// # Example
///
/// ```rust
/// use tintforge::{load_scheme, template_variables, BASE16_KEYS};
///
/// let mut yaml = String::from("scheme: Mono\nauthor: Me\nvariant: dark\n");
/// for key in BASE16_KEYS {
///     yaml.push_str(&format!("{}: \"ff8000\"\n", key));
/// }
/// let scheme = load_scheme("mono.yaml", yaml.as_bytes()).unwrap();
///
/// let vars = template_variables(&scheme);
/// assert_eq!(vars["scheme-slug"], "mono");
/// assert_eq!(vars["scheme-is-dark-variant"], true);
/// assert_eq!(vars["base08-hex-bgr"], "0080ff");
/// assert_eq!(vars["base08-rgb-g"], 128);
/// ```
pub fn template_variables(scheme: &ColorScheme) -> Map<String, Value> {
    let mut vars = Map::new();

    let mut set = |key: String, value: Value| {
        vars.insert(key, value);
    };

    set("scheme-name".into(), scheme.name().into());
    set("scheme-author".into(), scheme.author().into());
    set("scheme-slug".into(), scheme.slug().into());
    set(
        "scheme-slug-underscored".into(),
        scheme.slug().replace('-', "_").into(),
    );
    set("scheme-system".into(), scheme.system().into());
    set("scheme-description".into(), scheme.description().into());
    set("scheme-variant".into(), scheme.variant().into());
    set(
        "scheme-is-light-variant".into(),
        (scheme.variant() == "light").into(),
    );
    set(
        "scheme-is-dark-variant".into(),
        (scheme.variant() == "dark").into(),
    );
    if !scheme.variant().is_empty() {
        set(format!("scheme-is-{}-variant", scheme.variant()), true.into());
    }

    for (key, color) in scheme.palette() {
        set(format!("{}-hex", key), color.hex().into());
        set(format!("{}-hex-bgr", key), color.hex_bgr().into());

        for (channel, value) in ["r", "g", "b"].into_iter().zip(color.channels()) {
            set(format!("{}-rgb-{}", key, channel), value.into());
            set(format!("{}-hex-{}", key, channel), channel_hex(value).into());
            // Rendered as text so templates get the shortest f32 spelling.
            set(
                format!("{}-dec-{}", key, channel),
                channel_decimal(value).to_string().into(),
            );
        }
    }

    vars
}
