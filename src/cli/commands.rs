// ABOUTME: Command implementations for the credtmpl CLI
// ABOUTME: Reads a template source, renders it against the secret store and writes the result

use anyhow::Result;
use tokio::fs;
use tokio::io::{self, AsyncReadExt, AsyncWriteExt};
use tracing::{debug, info, warn};

use super::config::Config;
use super::error::CommandError;
use crate::secrets::{FileStore, StoreResolver};
use crate::template::TemplateEngine;

/// Template source name that selects standard input
pub const STDIN_SOURCE: &str = "-";

/// Require exactly one template source argument
pub fn template_source(sources: &[String]) -> std::result::Result<&str, CommandError> {
    match sources {
        [source] => Ok(source.as_str()),
        [] => Err(CommandError::ArgumentCount("too few arguments".to_string())),
        _ => Err(CommandError::ArgumentCount("too many arguments".to_string())),
    }
}

/// Read a template body from a file, or from stdin for `-`.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD.
pub async fn read_template(source: &str) -> std::result::Result<String, CommandError> {
    let read = if source == STDIN_SOURCE {
        let mut content = Vec::new();
        let result = io::stdin().read_to_end(&mut content).await;
        result.map(|_| content)
    } else {
        fs::read(source).await
    };

    let bytes = read.map_err(|e| CommandError::SourceRead {
        source_name: source.to_string(),
        source: e,
    })?;

    Ok(match String::from_utf8(bytes) {
        Ok(body) => body,
        Err(e) => {
            warn!("Template {} is not valid UTF-8; replacing invalid bytes", source);
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}

/// Render a template source against the configured secret store
pub async fn render_template(sources: &[String], config: &Config) -> Result<String> {
    let source = template_source(sources)?;
    let body = read_template(source).await?;
    debug!("Read template {} ({} bytes)", source, body.len());

    let store_path = config.store.as_ref().ok_or_else(|| {
        CommandError::Config(
            "no secret store configured; pass --store or set CREDTMPL_STORE".to_string(),
        )
    })?;
    let store = FileStore::load(store_path).await?;
    let resolver = StoreResolver::new(&store, config.table.clone());

    info!("Rendering {} against table '{}'", source, config.table);

    let rendered = TemplateEngine::new(&resolver)
        .strict(config.template.strict)
        .render(source, &body)?;

    Ok(rendered)
}

/// Execute the template command, writing the rendered text to stdout
pub async fn run_template(sources: Vec<String>, config: &Config) -> Result<()> {
    let rendered = render_template(&sources, config).await?;

    let mut stdout = io::stdout();
    stdout.write_all(rendered.as_bytes()).await?;
    stdout.flush().await?;

    Ok(())
}
