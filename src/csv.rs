// src/csv.rs
use std::io::{self, Write};

use crate::model::{Role, Schedule};

/* ---------------- Rows ---------------- */

/// Export header line; the last column depends on whose schedule it is.
pub fn headers(role: Role) -> Vec<String> {
    ["Date", "Time", "Discipline", "Type", "Location", role.column_title()]
        .into_iter()
        .map(String::from)
        .collect()
}

/// One row per lesson, days in schedule order.
pub fn lesson_rows(schedule: &Schedule) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(schedule.lesson_count());
    for (label, lessons) in schedule.iter() {
        for lesson in lessons {
            let info = lesson.info();
            rows.push(vec![
                s!(label),
                info.time.to_string(),
                info.discipline.clone(),
                info.kind.clone(),
                info.location.clone(),
                s!(lesson.counterpart()),
            ]);
        }
    }
    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Whole delimited document, header line first when asked for.
pub fn to_export_string(
    headers: &[String],
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> io::Result<String> {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        write_row(&mut buf, headers, sep)?;
    }
    for r in rows {
        write_row(&mut buf, r, sep)?;
    }

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}
