//! Scheme file loading and normalization.
//!
//! Two scheme formats are accepted, told apart by the presence of a `system`
//! key:
//!
//! **Legacy** (flat, 16 or 24 colors):
//!
//! ```yaml
//! scheme: "Ocean"
//! author: "Chris Kempson"
//! base00: "2b303b"
//! # ... base01 through base0F, optionally base10 through base17
//! ```
//!
//! **Universal** (declared system, optional variant and aliases):
//!
//! ```yaml
//! system: base16
//! name: "Ocean"
//! author: "Chris Kempson"
//! variant: dark
//! palette:
//!   base00: "2b303b"
//!   # ...
//! mappings:
//!   background: base00
//! ```
//!
//! Both normalize into a [`ColorScheme`]. The format branch lives only in
//! [`SchemeSource`]; nothing downstream knows which format a scheme came from.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::color::Rgb;
use crate::error::{ErrorList, Result, ValidationError};
use crate::slug::slugify;

pub const BASE16: &str = "base16";
pub const BASE24: &str = "base24";

/// The 16 palette keys every base16 and base24 scheme defines.
pub const BASE16_KEYS: [&str; 16] = [
    "base00", "base01", "base02", "base03", "base04", "base05", "base06", "base07", "base08",
    "base09", "base0A", "base0B", "base0C", "base0D", "base0E", "base0F",
];

/// The 8 additional palette keys of base24.
pub const BASE24_EXTENDED_KEYS: [&str; 8] = [
    "base10", "base11", "base12", "base13", "base14", "base15", "base16", "base17",
];

/// A validated color scheme.
///
/// Schemes are immutable once loaded. The palette always holds every key the
/// scheme's system requires, plus any aliases from `mappings`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    name: String,
    slug: String,
    author: String,
    description: String,
    system: String,
    variant: String,
    palette: BTreeMap<String, Rgb>,
}

impl ColorScheme {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase ASCII identifier used in output file names.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The color system, e.g. `base16` or `base24`.
    pub fn system(&self) -> &str {
        &self.system
    }

    /// Free-form variant such as `light` or `dark`; may be empty.
    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn palette(&self) -> &BTreeMap<String, Rgb> {
        &self.palette
    }

    pub fn color(&self, key: &str) -> Option<Rgb> {
        self.palette.get(key).copied()
    }
}

/// Loads one scheme file.
///
/// `file_name` is used for log messages only. Every validation problem in the
/// file is reported together; malformed YAML fails immediately.
///
/// # Example
///
/// ```rust
/// use tintforge::{load_scheme, BASE16_KEYS};
///
/// let mut yaml = String::from("scheme: Mono\nauthor: Me\n");
/// for key in BASE16_KEYS {
///     yaml.push_str(&format!("{}: \"808080\"\n", key));
/// }
///
/// let scheme = load_scheme("mono.yaml", yaml.as_bytes()).unwrap();
/// assert_eq!(scheme.system(), "base16");
/// assert_eq!(scheme.slug(), "mono");
/// assert_eq!(scheme.description(), "Mono");
/// ```
pub fn load_scheme(file_name: &str, data: &[u8]) -> Result<ColorScheme> {
    let scheme = SchemeSource::parse(data)?.normalize(file_name)?;
    log::debug!(
        "loaded scheme {}/{} from {}",
        scheme.system,
        scheme.slug,
        file_name
    );
    Ok(scheme)
}

/// Only the `system` key, read first to pick a format.
#[derive(Debug, Deserialize)]
struct SystemProbe {
    #[serde(default, deserialize_with = "optional_text")]
    system: Option<String>,
}

/// A scheme file as written, before validation.
#[derive(Debug)]
enum SchemeSource {
    Legacy(LegacySchemeSource),
    Universal(UniversalSchemeSource),
}

#[derive(Debug, Default, Deserialize)]
struct LegacyFields {
    #[serde(default, deserialize_with = "optional_text")]
    scheme: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    author: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    description: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    variant: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    slug: Option<String>,
}

#[derive(Debug)]
struct LegacySchemeSource {
    fields: LegacyFields,
    /// Every top-level `base*` key, as raw text.
    colors: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct UniversalSchemeSource {
    #[serde(default, deserialize_with = "optional_text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    author: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    system: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    description: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    variant: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    slug: Option<String>,
    #[serde(default, deserialize_with = "optional_text_map")]
    palette: Option<BTreeMap<String, String>>,
    #[serde(default, deserialize_with = "optional_text_map")]
    mappings: Option<BTreeMap<String, String>>,
}

impl SchemeSource {
    fn parse(data: &[u8]) -> Result<Self> {
        let probe: SystemProbe = serde_yaml::from_slice(data)?;

        match probe.system.as_deref().map(str::trim) {
            None | Some("") => {
                let fields: LegacyFields = serde_yaml::from_slice(data)?;
                let everything: BTreeMap<String, serde_yaml::Value> =
                    serde_yaml::from_slice(data)?;
                let colors = everything
                    .into_iter()
                    .filter(|(key, _)| key.starts_with("base"))
                    .map(|(key, value)| (key, scalar_text(&value)))
                    .collect();
                Ok(SchemeSource::Legacy(LegacySchemeSource { fields, colors }))
            }
            Some(_) => Ok(SchemeSource::Universal(serde_yaml::from_slice(data)?)),
        }
    }

    fn normalize(self, file_name: &str) -> Result<ColorScheme> {
        match self {
            SchemeSource::Legacy(source) => source.normalize(file_name),
            SchemeSource::Universal(source) => source.normalize(file_name),
        }
    }
}

impl LegacySchemeSource {
    fn normalize(self, file_name: &str) -> Result<ColorScheme> {
        let mut problems = ErrorList::new();
        let fields = self.fields;

        let name = non_empty(fields.scheme);
        if name.is_empty() {
            problems.push(ValidationError::EmptySchemeName);
        }

        let palette = parse_palette(&self.colors, &mut problems);

        let missing = missing_keys(&self.colors, &BASE16_KEYS);
        let mut system = None;
        if !missing.is_empty() {
            problems.push(ValidationError::MissingColors {
                system: BASE16.to_string(),
                keys: missing,
            });
        } else {
            let extended_missing = missing_keys(&self.colors, &BASE24_EXTENDED_KEYS);
            // More than 16 colors means the extra ones must form a full base24 set.
            if self.colors.len() > BASE16_KEYS.len() && !extended_missing.is_empty() {
                problems.push(ValidationError::MissingColors {
                    system: BASE24.to_string(),
                    keys: extended_missing,
                });
            } else {
                match self.colors.len() {
                    16 => system = Some(BASE16),
                    24 => system = Some(BASE24),
                    n => problems.push(ValidationError::UnexpectedPaletteSize(n)),
                }
            }
        }

        let author = non_empty(fields.author);
        if author.is_empty() {
            log::warn!("{}: scheme author should not be empty", file_name);
        }

        let slug = resolve_slug(fields.slug, &name, &mut problems);
        problems.finish()?;

        let description = non_empty(fields.description);
        Ok(ColorScheme {
            description: if description.is_empty() {
                name.clone()
            } else {
                description
            },
            name,
            slug,
            author,
            system: system.unwrap_or(BASE16).to_string(),
            variant: non_empty(fields.variant),
            palette,
        })
    }
}

impl UniversalSchemeSource {
    fn normalize(self, file_name: &str) -> Result<ColorScheme> {
        let mut problems = ErrorList::new();

        let name = non_empty(self.name);
        if name.is_empty() {
            problems.push(ValidationError::EmptySchemeName);
        }

        let author = non_empty(self.author);
        if author.is_empty() {
            log::warn!("{}: scheme author should not be empty", file_name);
        }

        let raw_palette = self.palette.unwrap_or_default();
        let mut palette = parse_palette(&raw_palette, &mut problems);

        let mut aliases = BTreeMap::new();
        for (alias, target) in self.mappings.unwrap_or_default() {
            if raw_palette.contains_key(&alias) {
                problems.push(ValidationError::DuplicateAliasKey(alias));
                continue;
            }
            match palette.get(&target) {
                Some(color) => {
                    aliases.insert(alias, *color);
                }
                // Present but unparseable: already reported as an invalid color.
                None if raw_palette.contains_key(&target) => {}
                None => problems.push(ValidationError::UnresolvedAlias { alias, target }),
            }
        }
        palette.extend(aliases);

        let system = non_empty(self.system);
        let required: Vec<&str> = match system.as_str() {
            BASE16 => BASE16_KEYS.to_vec(),
            BASE24 => BASE16_KEYS
                .iter()
                .chain(BASE24_EXTENDED_KEYS.iter())
                .copied()
                .collect(),
            _ => Vec::new(),
        };
        let missing: Vec<String> = required
            .iter()
            .filter(|key| !palette.contains_key(**key) && !raw_palette.contains_key(**key))
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            problems.push(ValidationError::MissingColors {
                system: system.clone(),
                keys: missing,
            });
        }

        let slug = resolve_slug(self.slug, &name, &mut problems);
        problems.finish()?;

        let description = non_empty(self.description);
        Ok(ColorScheme {
            description: if description.is_empty() {
                name.clone()
            } else {
                description
            },
            name,
            slug,
            author,
            system,
            variant: non_empty(self.variant),
            palette,
        })
    }
}

fn non_empty(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Parses every color, recording the bad ones instead of stopping.
fn parse_palette(raw: &BTreeMap<String, String>, problems: &mut ErrorList) -> BTreeMap<String, Rgb> {
    let mut palette = BTreeMap::new();
    for (key, value) in raw {
        match Rgb::parse(value.trim()) {
            Ok(color) => {
                palette.insert(key.clone(), color);
            }
            Err(source) => problems.push(ValidationError::InvalidColor {
                key: key.clone(),
                source,
            }),
        }
    }
    palette
}

fn missing_keys(colors: &BTreeMap<String, String>, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|key| !colors.contains_key(**key))
        .map(|key| key.to_string())
        .collect()
}

fn resolve_slug(explicit: Option<String>, name: &str, problems: &mut ErrorList) -> String {
    let explicit = non_empty(explicit);
    if !explicit.is_empty() {
        return slugify(&explicit);
    }

    let slug = slugify(name);
    if slug.is_empty() && !name.is_empty() {
        problems.push(ValidationError::EmptySlug(name.to_string()));
    }
    slug
}

/// Reads a text field from any YAML scalar, so `name: 2077` is the name "2077".
fn optional_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(value.map(|v| scalar_text(&v)))
}

fn optional_text_map<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<BTreeMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = Option::<BTreeMap<String, serde_yaml::Value>>::deserialize(deserializer)?;
    Ok(map.map(|m| {
        m.into_iter()
            .map(|(key, value)| (key, scalar_text(&value)))
            .collect()
    }))
}

/// Text of a scalar YAML value.
fn scalar_text(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Null => String::new(),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn legacy_yaml(header: &str, keys: &[&str]) -> String {
        let mut yaml = String::from(header);
        for (i, key) in keys.iter().enumerate() {
            yaml.push_str(&format!("{}: \"{:06x}\"\n", key, i * 0x010101));
        }
        yaml
    }

    fn base24_keys() -> Vec<&'static str> {
        BASE16_KEYS
            .iter()
            .chain(BASE24_EXTENDED_KEYS.iter())
            .copied()
            .collect()
    }

    fn universal_yaml(system: &str, extra: &str) -> String {
        let keys: Vec<&str> = if system == BASE24 {
            base24_keys()
        } else {
            BASE16_KEYS.to_vec()
        };
        let mut yaml = format!("system: {}\nname: \"Test Scheme\"\nauthor: Someone\n", system);
        yaml.push_str(extra);
        yaml.push_str("palette:\n");
        for (i, key) in keys.iter().enumerate() {
            yaml.push_str(&format!("  {}: \"{:06x}\"\n", key, i * 0x010101));
        }
        yaml
    }

    // =========================================================================
    // Legacy format
    // =========================================================================

    #[test]
    fn test_legacy_base16() {
        let yaml = legacy_yaml("scheme: \"Ocean\"\nauthor: \"Chris\"\n", &BASE16_KEYS);
        let scheme = load_scheme("ocean.yaml", yaml.as_bytes()).unwrap();

        assert_eq!(scheme.name(), "Ocean");
        assert_eq!(scheme.author(), "Chris");
        assert_eq!(scheme.system(), BASE16);
        assert_eq!(scheme.slug(), "ocean");
        assert_eq!(scheme.description(), "Ocean");
        assert_eq!(scheme.variant(), "");
        assert_eq!(scheme.palette().len(), 16);
        assert_eq!(scheme.color("base01"), Some(Rgb::new(1, 1, 1)));
    }

    #[test]
    fn test_legacy_base24() {
        let yaml = legacy_yaml("scheme: \"Ocean 24\"\nauthor: \"Chris\"\n", &base24_keys());
        let scheme = load_scheme("ocean24.yaml", yaml.as_bytes()).unwrap();

        assert_eq!(scheme.system(), BASE24);
        assert_eq!(scheme.palette().len(), 24);
        assert_eq!(scheme.slug(), "ocean-24");
    }

    #[test]
    fn test_legacy_optional_fields() {
        let yaml = legacy_yaml(
            "scheme: \"Ocean\"\nauthor: \"Chris\"\ndescription: \"Deep blue\"\nvariant: dark\nslug: my-ocean\n",
            &BASE16_KEYS,
        );
        let scheme = load_scheme("ocean.yaml", yaml.as_bytes()).unwrap();

        assert_eq!(scheme.description(), "Deep blue");
        assert_eq!(scheme.variant(), "dark");
        assert_eq!(scheme.slug(), "my-ocean");
    }

    #[test]
    fn test_legacy_missing_canonical_key_is_named() {
        let keys: Vec<&str> = BASE16_KEYS.iter().copied().filter(|k| *k != "base0C").collect();
        let yaml = legacy_yaml("scheme: \"Ocean\"\nauthor: \"Chris\"\n", &keys);
        let err = load_scheme("ocean.yaml", yaml.as_bytes()).unwrap_err();

        assert_eq!(
            err.validation_errors(),
            vec![&ValidationError::MissingColors {
                system: BASE16.into(),
                keys: vec!["base0C".into()],
            }]
        );
    }

    #[test]
    fn test_legacy_collects_all_missing_keys() {
        let yaml = legacy_yaml("scheme: \"Ocean\"\n", &BASE16_KEYS[..14]);
        let err = load_scheme("ocean.yaml", yaml.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("base0E, base0F"));
    }

    #[test]
    fn test_legacy_partial_base24_is_invalid() {
        let mut keys = BASE16_KEYS.to_vec();
        keys.extend_from_slice(&BASE24_EXTENDED_KEYS[..3]);
        let yaml = legacy_yaml("scheme: \"Ocean\"\n", &keys);
        let err = load_scheme("ocean.yaml", yaml.as_bytes()).unwrap_err();

        match err.validation_errors().as_slice() {
            [ValidationError::MissingColors { system, keys }] => {
                assert_eq!(system, BASE24);
                assert_eq!(keys.len(), 5);
                assert_eq!(keys[0], "base13");
            }
            other => panic!("unexpected errors: {:?}", other),
        }
    }

    #[test]
    fn test_legacy_unexpected_palette_size() {
        let mut keys = base24_keys();
        keys.push("base18");
        let yaml = legacy_yaml("scheme: \"Ocean\"\n", &keys);
        let err = load_scheme("ocean.yaml", yaml.as_bytes()).unwrap_err();
        assert_eq!(
            err.validation_errors(),
            vec![&ValidationError::UnexpectedPaletteSize(25)]
        );
    }

    #[test]
    fn test_legacy_empty_name_and_bad_color_reported_together() {
        let mut yaml = legacy_yaml("author: \"Chris\"\n", &BASE16_KEYS[1..]);
        yaml.push_str("base00: \"not-a-color\"\n");
        let err = load_scheme("ocean.yaml", yaml.as_bytes()).unwrap_err();
        let errors = err.validation_errors();

        assert!(errors.contains(&&ValidationError::EmptySchemeName));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::InvalidColor { key, .. } if key == "base00")));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_legacy_accepts_hash_prefixed_colors() {
        let yaml = legacy_yaml("scheme: \"Ocean\"\n", &BASE16_KEYS).replace(": \"", ": \"#");
        let scheme = load_scheme("ocean.yaml", yaml.as_bytes()).unwrap();
        assert_eq!(scheme.color("base00"), Some(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn test_legacy_ignores_unrelated_keys() {
        let mut yaml = legacy_yaml("scheme: \"Ocean\"\n", &BASE16_KEYS);
        yaml.push_str("homepage: \"https://example.com\"\n");
        let scheme = load_scheme("ocean.yaml", yaml.as_bytes()).unwrap();
        assert_eq!(scheme.palette().len(), 16);
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = load_scheme("broken.yaml", b"scheme: [unterminated").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    // =========================================================================
    // Universal format
    // =========================================================================

    #[test]
    fn test_universal_base16() {
        let yaml = universal_yaml(BASE16, "variant: light\n");
        let scheme = load_scheme("test.yaml", yaml.as_bytes()).unwrap();

        assert_eq!(scheme.name(), "Test Scheme");
        assert_eq!(scheme.slug(), "test-scheme");
        assert_eq!(scheme.system(), BASE16);
        assert_eq!(scheme.variant(), "light");
        assert_eq!(scheme.description(), "Test Scheme");
    }

    #[test]
    fn test_universal_base24() {
        let yaml = universal_yaml(BASE24, "");
        let scheme = load_scheme("test.yaml", yaml.as_bytes()).unwrap();
        assert_eq!(scheme.system(), BASE24);
        assert_eq!(scheme.palette().len(), 24);
    }

    #[test]
    fn test_universal_slug_from_accented_name() {
        let yaml = universal_yaml(BASE16, "").replace("Test Scheme", "Rosé Pine Dawn");
        let scheme = load_scheme("rose.yaml", yaml.as_bytes()).unwrap();
        assert_eq!(scheme.slug(), "rose-pine-dawn");
    }

    #[test]
    fn test_universal_mapping_copies_color() {
        let yaml = universal_yaml(BASE16, "mappings:\n  background: base00\n  red: base08\n");
        let scheme = load_scheme("test.yaml", yaml.as_bytes()).unwrap();

        assert_eq!(scheme.color("background"), scheme.color("base00"));
        assert_eq!(scheme.color("red"), scheme.color("base08"));
        assert_eq!(scheme.palette().len(), 18);
    }

    #[test]
    fn test_universal_unresolved_alias() {
        let yaml = universal_yaml(BASE16, "mappings:\n  background: base99\n");
        let err = load_scheme("test.yaml", yaml.as_bytes()).unwrap_err();
        assert_eq!(
            err.validation_errors(),
            vec![&ValidationError::UnresolvedAlias {
                alias: "background".into(),
                target: "base99".into(),
            }]
        );
    }

    #[test]
    fn test_universal_mapping_errors_aggregate() {
        let yaml = universal_yaml(
            BASE16,
            "mappings:\n  base00: base01\n  fg: nope\n  bg: missing\n",
        );
        let err = load_scheme("test.yaml", yaml.as_bytes()).unwrap_err();
        let errors = err.validation_errors();

        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&&ValidationError::DuplicateAliasKey("base00".into())));
    }

    #[test]
    fn test_universal_custom_system_needs_no_fixed_keys() {
        let yaml = "system: ansi\nname: Tiny\nauthor: Me\npalette:\n  red: \"ff0000\"\n";
        let scheme = load_scheme("tiny.yaml", yaml.as_bytes()).unwrap();
        assert_eq!(scheme.system(), "ansi");
        assert_eq!(scheme.palette().len(), 1);
    }

    #[test]
    fn test_universal_declared_base16_requires_keys() {
        let yaml = universal_yaml(BASE16, "").replace("  base0F: \"0f0f0f\"\n", "");
        let err = load_scheme("test.yaml", yaml.as_bytes()).unwrap_err();
        assert_eq!(
            err.validation_errors(),
            vec![&ValidationError::MissingColors {
                system: BASE16.into(),
                keys: vec!["base0F".into()],
            }]
        );
    }

    #[test]
    fn test_universal_empty_name_fails() {
        let yaml = universal_yaml(BASE16, "").replace("name: \"Test Scheme\"\n", "");
        let err = load_scheme("test.yaml", yaml.as_bytes()).unwrap_err();
        assert_eq!(
            err.validation_errors(),
            vec![&ValidationError::EmptySchemeName]
        );
    }

    #[test]
    fn test_universal_missing_author_is_not_an_error() {
        let yaml = universal_yaml(BASE16, "").replace("author: Someone\n", "");
        let scheme = load_scheme("test.yaml", yaml.as_bytes()).unwrap();
        assert_eq!(scheme.author(), "");
    }

    #[test]
    fn test_unsluggable_name_needs_explicit_slug() {
        let yaml = universal_yaml(BASE16, "").replace("Test Scheme", "東京");
        let err = load_scheme("tokyo.yaml", yaml.as_bytes()).unwrap_err();
        assert_eq!(
            err.validation_errors(),
            vec![&ValidationError::EmptySlug("東京".into())]
        );

        let yaml = universal_yaml(BASE16, "slug: tokyo\n").replace("Test Scheme", "東京");
        let scheme = load_scheme("tokyo.yaml", yaml.as_bytes()).unwrap();
        assert_eq!(scheme.slug(), "tokyo");
    }

    #[test]
    fn test_numeric_names_are_text() {
        let yaml = legacy_yaml("scheme: 2077
author: 42
", &BASE16_KEYS);
        let scheme = load_scheme("2077.yaml", yaml.as_bytes()).unwrap();
        assert_eq!(scheme.name(), "2077");
        assert_eq!(scheme.author(), "42");
        assert_eq!(scheme.slug(), "2077");

        let yaml = universal_yaml(BASE16, "").replace("name: \"Test Scheme\"", "name: 1984");
        let scheme = load_scheme("1984.yaml", yaml.as_bytes()).unwrap();
        assert_eq!(scheme.name(), "1984");
        assert_eq!(scheme.description(), "1984");
    }

    #[test]
    fn test_unquoted_colors_load() {
        let yaml = legacy_yaml("scheme: Plain
author: Me
", &BASE16_KEYS)
            .replace("base00: \"000000\"", "base00: 000080")
            .replace("base01: \"010101\"", "base01: 123456");
        let scheme = load_scheme("plain.yaml", yaml.as_bytes()).unwrap();
        assert_eq!(scheme.color("base00"), Some(Rgb::new(0, 0, 0x80)));
        assert_eq!(scheme.color("base01"), Some(Rgb::new(0x12, 0x34, 0x56)));

        let yaml = universal_yaml(BASE16, "")
            .replace("base00: \"000000\"", "base00: 000080")
            .replace("base01: \"010101\"", "base01: 123456");
        let scheme = load_scheme("plain.yaml", yaml.as_bytes()).unwrap();
        assert_eq!(scheme.color("base00"), Some(Rgb::new(0, 0, 0x80)));
        assert_eq!(scheme.color("base01"), Some(Rgb::new(0x12, 0x34, 0x56)));
    }
}
