//! Rendering one template against a set of schemes.
//!
//! For every scheme whose system the template supports, the template's
//! filename pattern and body are rendered with the same variables (see
//! [`crate::vars`]) and the body is written to the resulting path.
//!
//! Rendering is fail-fast: the first compile, render or write error ends the
//! template's pass. A broken template body breaks every scheme alike, so there
//! is nothing to gain from collecting one error per scheme.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::engine::{MustacheEngine, TemplateEngine};
use crate::error::{Error, Result};
use crate::scheme::ColorScheme;
use crate::template::TemplateDescriptor;
use crate::vars::template_variables;

const BODY_TEMPLATE: &str = "body";
const FILENAME_TEMPLATE: &str = "filename";

/// The outcome of rendering one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub template: String,
    /// Every file written, in scheme order.
    pub written: Vec<PathBuf>,
}

/// Renders `descriptor` for every compatible scheme with the default engine.
///
/// # Errors
///
/// - [`Error::Io`] if the template body cannot be read, a directory cannot be
///   created or an output file cannot be written.
/// - [`Error::Template`] if the body or filename pattern does not compile or
///   render.
/// - [`Error::OutputNotADirectory`] if the output path is a file.
/// - [`Error::NoCompatibleSchemes`] if no scheme has a supported system.
pub fn render_template(
    descriptor: &TemplateDescriptor,
    schemes: &[ColorScheme],
) -> Result<RenderSummary> {
    render_with_engine(MustacheEngine::new(), descriptor, schemes)
}

/// Like [`render_template`], with a caller-supplied engine.
pub fn render_with_engine<E: TemplateEngine>(
    mut engine: E,
    descriptor: &TemplateDescriptor,
    schemes: &[ColorScheme],
) -> Result<RenderSummary> {
    let body_path = descriptor.template_path();
    let body = fs::read_to_string(&body_path).map_err(|e| Error::io(&body_path, e))?;

    engine
        .add_template(BODY_TEMPLATE, &body)
        .map_err(|e| e.context(body_path.display().to_string()))?;
    engine
        .add_template(FILENAME_TEMPLATE, &descriptor.filename)
        .map_err(|e| e.context(format!("filename {:?}", descriptor.filename)))?;

    ensure_dir(&descriptor.output_path())?;

    let mut written = Vec::new();
    for scheme in schemes {
        if !descriptor.supports(scheme.system()) {
            continue;
        }

        let vars = Value::Object(template_variables(scheme));
        let file_name = engine.render_named(FILENAME_TEMPLATE, &vars)?;
        let path = descriptor.dir.join(file_name.trim());
        let content = engine.render_named(BODY_TEMPLATE, &vars)?;

        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        write_output(&path, content.as_bytes())?;

        log::debug!(
            "rendered {}/{} with template {:?} to {}",
            scheme.system(),
            scheme.slug(),
            descriptor.name,
            path.display()
        );
        written.push(path);
    }

    if written.is_empty() {
        return Err(Error::NoCompatibleSchemes {
            template: descriptor.name.clone(),
            systems: descriptor.supported_systems.clone(),
        });
    }

    log::info!(
        "template {:?}: wrote {} files",
        descriptor.name,
        written.len()
    );

    Ok(RenderSummary {
        template: descriptor.name.clone(),
        written,
    })
}

/// Creates `path` (and its parents) unless it already is a directory.
fn ensure_dir(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::OutputNotADirectory(path.to_path_buf())),
        Err(_) => {
            log::warn!("directory {} does not exist, creating it", path.display());
            fs::create_dir_all(path).map_err(|e| Error::io(path, e))
        }
    }
}

/// Writes `contents`, replacing any existing file. New files get mode `0o666`
/// (before umask): readable and writable, never executable.
fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o666);
    }

    let mut file = options.open(path).map_err(|e| Error::io(path, e))?;
    file.write_all(contents).map_err(|e| Error::io(path, e))
}
