//! Rendering a whole template group.
//!
//! [`build`] renders every template against the loaded schemes. Templates are
//! independent: one failing template does not stop the others, and the failures
//! are reported together, each prefixed with the template's name.
//!
//! With `jobs > 1` templates are spread over a pool of scoped worker threads.
//! Each template still renders its schemes in order on a single thread.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;

use crate::error::{Error, ErrorList, Result};
use crate::render::{render_template, RenderSummary};
use crate::scheme::ColorScheme;
use crate::template::TemplateDescriptor;

/// Options for [`build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Number of templates rendered concurrently. `0` is treated as `1`.
    pub jobs: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { jobs: 1 }
    }
}

/// What a successful [`build`] produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// One summary per template, in template order.
    pub rendered: Vec<RenderSummary>,
}

impl BuildReport {
    pub fn files_written(&self) -> usize {
        self.rendered.iter().map(|r| r.written.len()).sum()
    }
}

/// Renders every template in `templates` against `schemes`.
///
/// # Errors
///
/// Returns [`Error::Multiple`](crate::Error::Multiple) holding one entry per
/// failed template. Templates that succeeded have still written their files.
pub fn build(
    templates: &[TemplateDescriptor],
    schemes: &[ColorScheme],
    options: &BuildOptions,
) -> Result<BuildReport> {
    let jobs = options.jobs.clamp(1, templates.len().max(1));
    log::debug!(
        "rendering {} templates with {} schemes on {} threads",
        templates.len(),
        schemes.len(),
        jobs
    );

    let results: Vec<Result<RenderSummary>> = if jobs == 1 {
        templates
            .iter()
            .map(|t| render_template(t, schemes))
            .collect()
    } else {
        render_parallel(templates, schemes, jobs)
    };

    let mut errors = ErrorList::new();
    let mut rendered = Vec::new();
    for (template, result) in templates.iter().zip(results) {
        match result {
            Ok(summary) => rendered.push(summary),
            Err(err) => {
                log::error!("template {:?} failed: {}", template.name, err);
                errors.push_with_context(format!("template {:?}", template.name), err);
            }
        }
    }
    errors.finish()?;

    Ok(BuildReport { rendered })
}

/// Renders templates on `jobs` scoped workers pulling from a shared index.
/// Results come back in template order.
fn render_parallel(
    templates: &[TemplateDescriptor],
    schemes: &[ColorScheme],
    jobs: usize,
) -> Vec<Result<RenderSummary>> {
    let next = AtomicUsize::new(0);
    let slots: Vec<Mutex<Option<Result<RenderSummary>>>> =
        templates.iter().map(|_| Mutex::new(None)).collect();

    thread::scope(|scope| {
        for _ in 0..jobs {
            scope.spawn(|| loop {
                let index = next.fetch_add(1, Ordering::Relaxed);
                let Some(template) = templates.get(index) else {
                    break;
                };
                let result = render_template(template, schemes);
                if let Ok(mut slot) = slots[index].lock() {
                    *slot = Some(result);
                }
            });
        }
    });

    slots
        .into_iter()
        .zip(templates)
        .map(|(slot, template)| {
            slot.into_inner().ok().flatten().unwrap_or_else(|| {
                Err(Error::Template(format!(
                    "worker rendering {:?} did not finish",
                    template.name
                )))
            })
        })
        .collect()
}
