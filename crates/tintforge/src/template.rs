//! Template group configuration.
//!
//! A template group is a directory holding a `templates/` folder:
//!
//! ```text
//! my-app-theme/
//! └── templates/
//!     ├── config.yaml
//!     ├── default.mustache
//!     └── colors-256.mustache
//! ```
//!
//! `config.yaml` maps each template name to where its output goes:
//!
//! ```yaml
//! default:
//!   extension: .conf
//!   output: themes
//!   supported-systems: [base16, base24]
//! colors-256:
//!   filename: "colors/{{ scheme-slug }}-256.conf"
//! ```
//!
//! When `filename` is absent it is built from `output` and `extension` as
//! `"{output}/{{ scheme-system }}-{{ scheme-slug }}{extension}"`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::scheme::BASE16;

/// Folder inside a template group holding the config and template bodies.
pub const TEMPLATES_DIR: &str = "templates";

/// Name of the group configuration file inside [`TEMPLATES_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

/// Extension of template body files.
pub const TEMPLATE_EXTENSION: &str = ".mustache";

/// One template of a template group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    /// Template name; the body lives at `templates/<name>.mustache`.
    pub name: String,
    /// The template group directory.
    pub dir: PathBuf,
    /// Output path pattern, rendered with the scheme's variables and resolved
    /// relative to `dir`.
    pub filename: String,
    pub extension: Option<String>,
    pub output_dir: Option<String>,
    /// Color systems this template renders; schemes of other systems are skipped.
    pub supported_systems: Vec<String>,
}

impl TemplateDescriptor {
    /// Path of the template body.
    pub fn template_path(&self) -> PathBuf {
        self.dir
            .join(TEMPLATES_DIR)
            .join(format!("{}{}", self.name, TEMPLATE_EXTENSION))
    }

    /// The output directory, relative to the group directory when configured.
    pub fn output_path(&self) -> PathBuf {
        match &self.output_dir {
            Some(output) => self.dir.join(output),
            None => self.dir.clone(),
        }
    }

    pub fn supports(&self, system: &str) -> bool {
        self.supported_systems.iter().any(|s| s == system)
    }
}

/// A `config.yaml` entry as written.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct TemplateConfig {
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    extension: Option<String>,
    #[serde(default)]
    output: Option<String>,
    #[serde(default)]
    supported_systems: Option<Vec<String>>,
}

/// Reads `<dir>/templates/config.yaml` into descriptors, ordered by name.
///
/// # Errors
///
/// Fails if the config cannot be read or parsed, or if an entry has neither a
/// `filename` nor an `extension`.
pub fn load_template_group(dir: impl AsRef<Path>) -> Result<Vec<TemplateDescriptor>> {
    let dir = dir.as_ref();
    let config_path = dir.join(TEMPLATES_DIR).join(CONFIG_FILE);
    let data = std::fs::read(&config_path).map_err(|e| Error::io(&config_path, e))?;

    let entries: BTreeMap<String, Option<TemplateConfig>> = serde_yaml::from_slice(&data)
        .map_err(|e| Error::from(e).context(config_path.display().to_string()))?;

    entries
        .into_iter()
        .map(|(name, config)| descriptor(name, dir, config.unwrap_or_default()))
        .collect()
}

fn descriptor(name: String, dir: &Path, config: TemplateConfig) -> Result<TemplateDescriptor> {
    let extension = non_empty(config.extension);
    let mut output_dir = non_empty(config.output);

    let filename = match non_empty(config.filename) {
        Some(filename) => filename,
        None => {
            log::info!(
                "template {:?}: no filename configured, inferring from output and extension",
                name
            );
            let output = output_dir.get_or_insert_with(|| {
                log::warn!("template {:?}: no output directory configured, using \".\"", name);
                ".".to_string()
            });
            let extension = extension
                .as_deref()
                .ok_or_else(|| Error::MissingExtension {
                    template: name.clone(),
                })?;
            format!(
                "{}/{{{{ scheme-system }}}}-{{{{ scheme-slug }}}}{}",
                output, extension
            )
        }
    };

    let supported_systems = match config.supported_systems {
        Some(systems) if !systems.is_empty() => systems,
        _ => {
            log::warn!(
                "template {:?}: supported-systems not set, assuming {}",
                name,
                BASE16
            );
            vec![BASE16.to_string()]
        }
    };

    log::debug!("found template {:?} in {}", name, dir.display());

    Ok(TemplateDescriptor {
        name,
        dir: dir.to_path_buf(),
        filename,
        extension,
        output_dir,
        supported_systems,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
