use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use mindcheck_core::models::report::Report;
use mindcheck_export::docx::generate_docx;
use mindcheck_export::render::{render_report, render_template};

use crate::config::MindcheckConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Docx,
}

/// Render `report` as text, using the configured template if there is one.
pub fn render_text(report: &Report, config: &MindcheckConfig) -> eyre::Result<String> {
    match &config.template_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| eyre::eyre!("failed to read template {}: {e}", path.display()))?;
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("custom");
            Ok(render_template(name, &content, report)?)
        }
        None => Ok(render_report(report)?),
    }
}

/// Write `report` in `format` to `out`, or to `stdout` when no path is given.
///
/// DOCX is binary and always needs a path.
pub fn write_report(
    report: &Report,
    format: OutputFormat,
    out: Option<&Path>,
    config: &MindcheckConfig,
    stdout: &mut impl Write,
) -> eyre::Result<()> {
    let bytes = match format {
        OutputFormat::Text => render_text(report, config)?.into_bytes(),
        OutputFormat::Json => {
            let mut json = serde_json::to_vec_pretty(report)?;
            json.push(b'\n');
            json
        }
        OutputFormat::Docx => {
            if out.is_none() {
                return Err(eyre::eyre!("DOCX output needs a file path (--out)"));
            }
            generate_docx(&render_text(report, config)?, &config.styles)?
        }
    };

    match out {
        Some(path) => {
            std::fs::write(path, &bytes)?;
            tracing::info!(path = %path.display(), ?format, "report written");
        }
        None => stdout.write_all(&bytes)?,
    }
    Ok(())
}
