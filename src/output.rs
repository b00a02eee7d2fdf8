//! Table and JSON presentation of a walk report
//!
//! The walker knows nothing about rendering; everything here consumes a
//! finished [`WalkReport`]. Console output is two plain-text tables (errors
//! first, when requested), JSON output is the whole report serialized.

use std::io::{self, Write};

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::walk::WalkReport;

const MB: f64 = 1024.0 * 1024.0;
const GB: f64 = MB * 1024.0;

/// MB/GB trailer rows below this value are noise and get dropped.
const TOTAL_ROW_THRESHOLD: f64 = 0.02;

/// How the report should be rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub use_color: bool,
    /// Render the error table (errors are collected either way).
    pub show_errors: bool,
    /// Append total-size trailer rows to the entry table.
    pub show_total: bool,
}

/// Print the report as tables on stdout.
pub fn print_report(report: &WalkReport, opts: &OutputOptions) -> io::Result<()> {
    let choice = if opts.use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    if opts.show_errors && !report.errors.is_empty() {
        write_error_table(&mut stdout, report)?;
        writeln!(stdout)?;
    }
    write_entry_table(&mut stdout, report, opts.show_total)
}

/// Print the report as pretty JSON on stdout.
pub fn print_json(report: &WalkReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}

fn write_error_table(out: &mut StandardStream, report: &WalkReport) -> io::Result<()> {
    let header = format!("Errors: {}", report.stats.error_count);
    let width = report
        .errors
        .iter()
        .map(|e| e.message.chars().count())
        .chain([header.chars().count()])
        .max()
        .unwrap_or(0);

    write_bold(out, &header)?;
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(width))?;
    for err in &report.errors {
        writeln!(out, "{}", err.message)?;
    }
    Ok(())
}

fn write_entry_table(
    out: &mut StandardStream,
    report: &WalkReport,
    show_total: bool,
) -> io::Result<()> {
    let headers = [
        "Size".to_string(),
        "Mod Time".to_string(),
        "Type".to_string(),
        format!(
            "Name (files: {}, dirs: {})",
            report.stats.file_count, report.stats.dir_count
        ),
    ];
    let rows = entry_rows(report, show_total);
    let widths = column_widths(&headers, &rows);

    write_bold(out, &format_row(&headers, &widths))?;
    writeln!(out)?;
    writeln!(out, "{}", separator(&widths))?;
    for row in &rows {
        writeln!(out, "{}", format_row(row, &widths))?;
    }
    Ok(())
}

fn write_bold(out: &mut StandardStream, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "{}", text)?;
    out.reset()
}

/// Turn the report's entries into display rows, in walk order, with
/// trailer rows appended when requested.
pub fn entry_rows(report: &WalkReport, show_total: bool) -> Vec<[String; 4]> {
    let mut rows: Vec<[String; 4]> = report
        .entries
        .iter()
        .map(|e| {
            [
                e.size.to_string(),
                e.modified.clone(),
                e.kind.label().to_string(),
                e.path.clone(),
            ]
        })
        .collect();
    if show_total {
        rows.extend(total_rows(report.stats.total_file_size));
    }
    rows
}

/// Synthetic trailer rows for the total file size.
///
/// The byte row is always emitted; MB and GB rows only when they carry a
/// value worth reading.
pub fn total_rows(total_bytes: u64) -> Vec<[String; 4]> {
    let mut rows = vec![[
        total_bytes.to_string(),
        String::new(),
        String::new(),
        "total bytes".to_string(),
    ]];

    let mb = total_bytes as f64 / MB;
    if mb > TOTAL_ROW_THRESHOLD {
        rows.push([
            format!("{:.2}", mb),
            String::new(),
            String::new(),
            "total MB".to_string(),
        ]);
    }

    let gb = total_bytes as f64 / GB;
    if gb > TOTAL_ROW_THRESHOLD {
        rows.push([
            format!("{:.2}", gb),
            String::new(),
            String::new(),
            "total GB".to_string(),
        ]);
    }

    rows
}

/// Widest cell per column, headers included. Character counts, not bytes.
pub fn column_widths(headers: &[String; 4], rows: &[[String; 4]]) -> [usize; 4] {
    let mut widths = [0usize; 4];
    for (i, h) in headers.iter().enumerate() {
        widths[i] = h.chars().count();
    }
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    widths
}

/// Lay out one row: size right-aligned, the rest left-aligned, the last
/// column unpadded.
pub fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    format!(
        "{}  {}  {}  {}",
        pad_left(&cells[0], widths[0]),
        pad_right(&cells[1], widths[1]),
        pad_right(&cells[2], widths[2]),
        cells[3],
    )
}

fn separator(widths: &[usize; 4]) -> String {
    widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("  ")
}

fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.chars().count());
    format!("{}{}", " ".repeat(fill), s)
}

fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.chars().count());
    format!("{}{}", s, " ".repeat(fill))
}
