//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait the renderer compiles and
//! renders through. The default implementation is [`MustacheEngine`], backed
//! by the `mustache` crate, so theme templates get full mustache semantics:
//! variables, sections and inverted sections keyed on the `scheme-is-*-variant`
//! flags, comments and set-delimiter tags. Hyphenated names such as
//! `{{base00-hex}}` resolve as plain variable names.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// A template engine that compiles named templates and renders them with data.
pub trait TemplateEngine {
    /// Compiles `source` and stores it under `name`.
    ///
    /// Syntax errors are reported here, before anything is rendered.
    fn add_template(&mut self, name: &str, source: &str) -> Result<()>;

    /// Renders a template previously added with [`add_template`](Self::add_template).
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String>;

    fn has_template(&self, name: &str) -> bool;
}

/// Mustache engine.
///
/// `{{name}}` output is HTML-escaped (`&`, `<`, `>`, `"` and `'` only);
/// `{{{name}}}` and `{{&name}}` insert the value verbatim. Unknown variables
/// render as empty text, `true` opens a section once and `false` skips it.
///
/// # Example
///
/// ```rust
/// use tintforge::{MustacheEngine, TemplateEngine};
/// use serde_json::json;
///
/// let mut engine = MustacheEngine::new();
/// engine
///     .add_template(
///         "line",
///         "bg = #{{base00-hex}}{{#scheme-is-dark-variant}} (dark){{/scheme-is-dark-variant}}",
///     )
///     .unwrap();
///
/// let data = json!({"base00-hex": "2b303b", "scheme-is-dark-variant": true});
/// assert_eq!(engine.render_named("line", &data).unwrap(), "bg = #2b303b (dark)");
/// ```
#[derive(Default)]
pub struct MustacheEngine {
    templates: HashMap<String, mustache::Template>,
}

impl MustacheEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateEngine for MustacheEngine {
    fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        let template = mustache::compile_str(source)?;
        self.templates.insert(name.to_string(), template);
        Ok(())
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| Error::Template(format!("template {:?} is not registered", name)))?;
        Ok(template.render_to_string(data)?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }
}
