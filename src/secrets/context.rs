// ABOUTME: Encryption context parsing for secret lookups
// ABOUTME: Turns the key/value arguments of a placeholder into a lookup context

use indexmap::IndexMap;

use super::error::ContextError;

/// Tags that must match the stored credential for a lookup to succeed.
pub type LookupContext = IndexMap<String, String>;

/// Parse consecutive `key value` arguments into a lookup context.
///
/// Duplicate keys are last-write-wins; the key keeps its first position.
/// A dangling key (odd argument count) or an empty key is rejected.
pub fn parse_context<S: AsRef<str>>(args: &[S]) -> Result<LookupContext, ContextError> {
    let mut context = LookupContext::with_capacity(args.len() / 2);

    for pair in args.chunks(2) {
        let key = pair[0].as_ref();

        let value = match pair.get(1) {
            Some(value) => value.as_ref(),
            None => return Err(ContextError::invalid(key, "missing value")),
        };

        if key.is_empty() {
            return Err(ContextError::invalid(key, "empty key"));
        }

        context.insert(key.to_string(), value.to_string());
    }

    Ok(context)
}
