//! Export of the edited newsletter.
//!
//! The HTML export is a standalone document with one `<section>` per content section, in
//! collection order. Section bodies are laid out according to their kind. The JSON dump is the
//! collection itself, for handing the work on to other tooling.

use crate::section::{ContentSection, SectionKind};
use std::path::Path;
use std::{fs, io};

const STYLE: &str = "body{font-family:Georgia,serif;max-width:48rem;margin:2rem auto;padding:0 1rem;color:#222}\
h1{color:#2f5233;border-bottom:2px solid #2f5233}\
h2{color:#2f5233}\
table{border-collapse:collapse}\
td{border:1px solid #ccc;padding:.25rem .5rem}";

#[must_use]
/// Escapes text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn body_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn strip_bullet(line: &str) -> &str {
    line.strip_prefix(['-', '*', '•'])
        .map_or(line, str::trim_start)
}

fn table_cells(line: &str) -> Vec<&str> {
    let separator = if line.contains('\t') { '\t' } else { '|' };
    let row = line.trim_matches('|');
    row.split(separator).map(str::trim).collect()
}

fn render_body(out: &mut String, section: &ContentSection) {
    match section.kind {
        SectionKind::Text => {
            for line in body_lines(&section.content) {
                out.push_str(&format!("<p>{}</p>\n", escape_html(line)));
            }
        }
        SectionKind::List => {
            out.push_str("<ul>\n");
            for line in body_lines(&section.content) {
                out.push_str(&format!("<li>{}</li>\n", escape_html(strip_bullet(line))));
            }
            out.push_str("</ul>\n");
        }
        SectionKind::Table => {
            out.push_str("<table>\n");
            for line in body_lines(&section.content) {
                out.push_str("<tr>");
                for cell in table_cells(line) {
                    out.push_str(&format!("<td>{}</td>", escape_html(cell)));
                }
                out.push_str("</tr>\n");
            }
            out.push_str("</table>\n");
        }
    }
}

#[must_use]
/// Renders the sections as a standalone HTML document.
pub fn render_html(title: &str, sections: &[ContentSection]) -> String {
    let title = escape_html(title);
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str(&format!("<style>{STYLE}</style>\n"));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));

    for section in sections {
        out.push_str(&format!(
            "<section id=\"{}\" class=\"section section-{}\">\n",
            section.id,
            section.kind.label()
        ));
        out.push_str(&format!("<h2>{}</h2>\n", escape_html(&section.title)));
        render_body(&mut out, section);
        out.push_str("</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

/// Writes the HTML rendering of the sections to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_html(path: &Path, title: &str, sections: &[ContentSection]) -> io::Result<()> {
    fs::write(path, render_html(title, sections))?;
    log::info!("Exported {} section(s) to {}", sections.len(), path.display());
    Ok(())
}

/// Serialises the section collection as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialisation fails.
pub fn render_json(sections: &[ContentSection]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(sections)
}

#[cfg(test)]
#[path = "tests/export.rs"]
mod tests;
