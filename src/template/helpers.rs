// ABOUTME: Handlebars helper exposing secret lookup to templates
// ABOUTME: Implements the `get` function and its inline-error argument validation

use handlebars::{Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext};
use serde_json::Value as JsonValue;
use tracing::debug;

use super::error::InlineError;
use crate::secrets::{parse_context, SecretResolver};

pub const GET_HELPER: &str = "get";

/// Resolve one `get` call from its raw template arguments.
///
/// The first argument names the secret, the rest are context key/value
/// pairs. Every argument must be a string.
pub fn lookup_secret(
    args: &[&JsonValue],
    resolver: &dyn SecretResolver,
) -> std::result::Result<String, InlineError> {
    let strings = args
        .iter()
        .map(|arg| match arg {
            JsonValue::String(s) => Ok(s.as_str()),
            other => Err(InlineError::InvalidString(other.to_string())),
        })
        .collect::<std::result::Result<Vec<&str>, _>>()?;

    let Some((name, context_args)) = strings.split_first() else {
        return Err(InlineError::TooFewArguments);
    };

    let context = parse_context(context_args)?;
    let value = resolver.resolve(name, &context)?;
    Ok(value)
}

/// The `get` helper, bound to a resolver for the lifetime of one engine
pub struct GetHelper<'a> {
    resolver: &'a dyn SecretResolver,
}

impl<'a> GetHelper<'a> {
    pub fn new(resolver: &'a dyn SecretResolver) -> Self {
        Self { resolver }
    }
}

impl HelperDef for GetHelper<'_> {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let args: Vec<&JsonValue> = h.params().iter().map(|p| p.value()).collect();

        // Context only comes from positional pairs; named arguments void the call
        let outcome = match h.hash().iter().next() {
            Some((key, value)) => Err(InlineError::InvalidArgument(format!(
                "{}={}",
                key,
                value.value()
            ))),
            None => lookup_secret(&args, self.resolver),
        };

        let text = match outcome {
            Ok(value) => value,
            Err(e) => {
                debug!("Placeholder degraded to inline error: {}", e);
                e.to_string()
            }
        };

        out.write(&text)?;
        Ok(())
    }
}

/// Register the secret lookup helper with a Handlebars instance
pub fn register_helpers<'a>(handlebars: &mut Handlebars<'a>, resolver: &'a dyn SecretResolver) {
    handlebars.register_helper(GET_HELPER, Box::new(GetHelper::new(resolver)));
}
