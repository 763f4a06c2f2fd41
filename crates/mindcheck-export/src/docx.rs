use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use mindcheck_core::models::report::Report;
use mindcheck_instruments::risk;

use crate::error::ExportError;
use crate::render::render_report;
use crate::styles::DocumentStyles;

const ALERT_COLOR: &str = "C00000";

/// Render `report` with the built-in template and convert it to DOCX.
pub fn report_docx(report: &Report, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    pack(report_document(report, styles)?)
}

/// The report as an unpacked document.
///
/// When the self-harm item was flagged, the urgent alert is set apart from
/// the body text as its own red, bold paragraph.
pub fn report_document(report: &Report, styles: &DocumentStyles) -> Result<Docx, ExportError> {
    let rendered = render_report(report)?;
    Ok(build_document(&rendered, styles, risk::alert(report.risk_flag)))
}

/// Generate a DOCX document from rendered Markdown-ish template output.
///
/// Supported subset:
/// - `# `, `## `, `### ` → Heading 1–3
/// - `- item` → bullet paragraph
/// - `**bold**` → bold run
/// - `---` → page break
/// - anything else → body paragraph
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    pack(build_document(rendered, styles, None))
}

fn build_document(rendered: &str, styles: &DocumentStyles, alert: Option<&str>) -> Docx {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
            continue;
        }

        if alert.is_some_and(|alert| trimmed.trim_matches('*') == alert) {
            docx = docx.add_paragraph(alert_paragraph(trimmed.trim_matches('*'), styles));
        } else if let Some(text) = trimmed.strip_prefix("### ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading3", styles));
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading2", styles));
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading1", styles));
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            docx = docx.add_paragraph(bullet_paragraph(text, styles));
        } else if trimmed == "---" {
            docx = docx.add_paragraph(
                Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            );
        } else {
            docx = docx.add_paragraph(body_paragraph(trimmed, styles));
        }
    }
    docx
}

fn pack(docx: Docx) -> Result<Vec<u8>, ExportError> {
    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn alert_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().align(AlignmentType::Left).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .color(ALERT_COLOR)
            .size(styles.heading3_size * 2)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run("\u{2022} ", styles));

    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Split `**bold**` segments into runs. An unclosed `**` is kept as text.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let before = &remaining[..start];
        if !before.is_empty() {
            runs.push(body_run(before, styles));
        }

        let after_start = &remaining[start + 2..];
        match after_start.find("**") {
            Some(end) => {
                runs.push(body_run(&after_start[..end], styles).bold());
                remaining = &after_start[end + 2..];
            }
            None => {
                runs.push(body_run(remaining, styles));
                return runs;
            }
        }
    }

    if !remaining.is_empty() {
        runs.push(body_run(remaining, styles));
    }
    runs
}
