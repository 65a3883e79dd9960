// ABOUTME: Main template engine implementation using Handlebars
// ABOUTME: Parses a template body and renders it with the secret lookup helper in scope

use handlebars::Handlebars;
use tracing::debug;

use super::error::{Result, TemplateError};
use super::helpers;
use crate::secrets::SecretResolver;

/// Renders templates against a borrowed secret resolver.
///
/// The only data available to a template is the `get` helper; rendering
/// runs with a `null` data context.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine bound to a resolver
    pub fn new(resolver: &'a dyn SecretResolver) -> Self {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(false);

        // Output is configuration and scripts, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        helpers::register_helpers(&mut handlebars, resolver);

        Self { handlebars }
    }

    /// Make references to missing variables fail the render
    pub fn strict(mut self, strict: bool) -> Self {
        self.handlebars.set_strict_mode(strict);
        self
    }

    /// Parse and execute `body`, using `name` in diagnostics.
    ///
    /// Syntax and execution failures abort the render with no partial
    /// output. Failed lookups inside `get` do not; they are written in place.
    pub fn render(&mut self, name: &str, body: &str) -> Result<String> {
        self.handlebars
            .register_template_string(name, body)
            .map_err(|e| TemplateError::syntax(name, &e))?;

        debug!("Parsed template '{}' ({} bytes)", name, body.len());

        let rendered = self
            .handlebars
            .render(name, &())
            .map_err(|e| TemplateError::execution(&e));

        self.handlebars.unregister_template(name);
        rendered
    }
}

/// Render `body` once against `resolver`
pub fn render(name: &str, body: &str, resolver: &dyn SecretResolver) -> Result<String> {
    TemplateEngine::new(resolver).render(name, body)
}
