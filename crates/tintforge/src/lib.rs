//! # Tintforge - Color Scheme Template Builder
//!
//! `tintforge` turns declarative color-scheme definitions into rendered theme
//! files. One scheme definition is fanned out across many templates, one per
//! target application or format.
//!
//! ## Core Concepts
//!
//! - [`ColorScheme`]: The canonical, validated scheme model. Both the flat
//!   legacy format and the universal format (systems, variants, aliases)
//!   normalize into it via [`load_scheme`].
//! - [`load_schemes`]: Loads every scheme file in a [`FileTree`], reporting all
//!   broken files and slug conflicts in one pass.
//! - [`TemplateDescriptor`]: One template of a template group, read from
//!   `templates/config.yaml` by [`load_template_group`].
//! - [`render_template`]: Renders every compatible scheme against one template.
//! - [`build`]: Renders a whole template group.
//!
//! ## Quick Start
//!
//! ```rust
//! use tintforge::{load_schemes, MemoryTree};
//!
//! let tree = MemoryTree::new().with_file(
//!     "ocean.yaml",
//!     r#"
//! system: base16
//! name: Ocean
//! author: Chris Kempson
//! palette:
//!   base00: "2b303b"
//!   base01: "343d46"
//!   base02: "4f5b66"
//!   base03: "65737e"
//!   base04: "a7adba"
//!   base05: "c0c5ce"
//!   base06: "dfe1e8"
//!   base07: "eff1f5"
//!   base08: "bf616a"
//!   base09: "d08770"
//!   base0A: "ebcb8b"
//!   base0B: "a3be8c"
//!   base0C: "96b5b4"
//!   base0D: "8fa1b3"
//!   base0E: "b48ead"
//!   base0F: "ab7967"
//! "#,
//! );
//!
//! let schemes = load_schemes(&tree).unwrap();
//! assert_eq!(schemes[0].slug(), "ocean");
//! assert_eq!(schemes[0].color("base08").unwrap().hex(), "bf616a");
//! ```
//!
//! ## Error Policy
//!
//! Scheme discovery aggregates: every malformed file and every slug conflict is
//! collected into an [`ErrorList`] before the load fails. Rendering is
//! fail-fast within a template, since a broken template body breaks every
//! scheme the same way.

pub mod build;
pub mod catalog;
pub mod color;
pub mod engine;
mod error;
pub mod render;
pub mod scheme;
pub mod slug;
pub mod template;
pub mod tree;
pub mod vars;

pub use build::{build, BuildOptions, BuildReport};
pub use catalog::{load_schemes, SCHEME_EXTENSIONS};
pub use color::{InvalidColorFormat, Rgb};
pub use engine::{MustacheEngine, TemplateEngine};
pub use error::{Error, ErrorList, Result, ValidationError};
pub use render::{render_template, render_with_engine, RenderSummary};
pub use scheme::{
    load_scheme, ColorScheme, BASE16, BASE16_KEYS, BASE24, BASE24_EXTENDED_KEYS,
};
pub use slug::slugify;
pub use template::{load_template_group, TemplateDescriptor};
pub use tree::{DirTree, FileTree, MemoryTree};
pub use vars::template_variables;
