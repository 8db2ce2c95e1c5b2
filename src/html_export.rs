//! Static HTML report of a table, with pass/fail cells colored the way the
//! website check report colors them.

use anyhow::{Context, Result};
use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;

use crate::sorter::Mark;
use crate::table::Table;

pub const TABLE_ID: &str = "table";

fn mark_class(text: &str) -> Option<&'static str> {
    Mark::from_text(text.trim()).map(|mark| match mark {
        Mark::Check => "green",
        Mark::Cross => "red",
        Mark::Unknown => "orange",
    })
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Writes a complete page. `css` is embedded verbatim in a `<style>` block.
pub fn write_page<W: fmt::Write>(out: &mut W, table: &Table, css: Option<&str>) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "    <meta charset=\"utf-8\">")?;
    writeln!(out, "    <title>{}</title>", escape_html(&table.name))?;
    if let Some(css) = css {
        writeln!(out, "    <style>\n{}\n    </style>", css)?;
    }
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(
        out,
        "<table border=\"1\" class=\"dataframe mystyle\" id=\"{}\">",
        TABLE_ID
    )?;

    if let Some(header) = table.header() {
        out.write_str("  <thead>\n    <tr>\n")?;
        for cell in &header.cells {
            writeln!(out, "      <th>{}</th>", escape_html(&cell.value))?;
        }
        out.write_str("    </tr>\n  </thead>\n")?;
    }

    out.write_str("  <tbody>\n")?;
    for row in table.data_rows() {
        out.write_str("    <tr>")?;
        for cell in &row.cells {
            match mark_class(&cell.value) {
                Some(class) => write!(
                    out,
                    "<td class=\"{}\">{}</td>",
                    class,
                    escape_html(&cell.value)
                )?,
                None => write!(out, "<td>{}</td>", escape_html(&cell.value))?,
            }
        }
        out.write_str("</tr>\n")?;
    }
    out.write_str("  </tbody>\n</table>\n</body>\n</html>\n")
}

pub fn render_html(table: &Table, css: Option<&str>) -> Result<String> {
    let mut html = String::new();
    write_page(&mut html, table, css).context("Unable to render HTML report")?;
    Ok(html)
}

pub fn export_html(table: &Table, css_path: Option<&Path>, path: &Path) -> Result<()> {
    let css = css_path
        .map(|css_path| {
            fs::read_to_string(css_path)
                .with_context(|| format!("Unable to read stylesheet: {}", css_path.display()))
        })
        .transpose()?;

    let html = render_html(table, css.as_deref())?;
    fs::write(path, html).with_context(|| format!("Failed to write to file: {}", path.display()))
}
