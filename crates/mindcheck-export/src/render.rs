use serde::Serialize;
use tera::{Context, Tera};

use mindcheck_core::models::report::Report;
use mindcheck_instruments::recommend::{DISCLAIMER, NEXT_STEPS};
use mindcheck_instruments::risk;

use crate::error::ExportError;

pub const REPORT_TEMPLATE_NAME: &str = "report.md";

/// Built-in results template (Markdown-ish, see [`crate::docx::generate_docx`]).
pub const REPORT_TEMPLATE: &str = include_str!("../templates/report.md.tera");

/// Guidance rendered alongside every report.
#[derive(Debug, Clone, Serialize)]
struct Guidance<'a> {
    urgent_alert: Option<&'a str>,
    next_steps: &'a [&'a str],
    disclaimer: &'a str,
}

/// Render the built-in results template.
pub fn render_report(report: &Report) -> Result<String, ExportError> {
    render_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE, report)
}

/// Render a Tera template with a Report.
///
/// Every report field is a top-level context variable, alongside
/// `urgent_alert` (set only when the risk flag is raised), `next_steps`
/// and `disclaimer`.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &Report,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let mut context = Context::from_value(serde_json::to_value(report)?)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;
    context.extend(
        Context::from_serialize(Guidance {
            urgent_alert: risk::alert(report.risk_flag),
            next_steps: &NEXT_STEPS,
            disclaimer: DISCLAIMER,
        })
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?,
    );

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, report_id = %report.id, "report rendered");
    Ok(rendered)
}
