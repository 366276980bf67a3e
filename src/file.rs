// src/file.rs

use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::NO_LESSONS;
use crate::config::options::{ExportFormat, ExportOptions};
use crate::core::sanitize::sanitize_filename;
use crate::csv::{headers, lesson_rows, to_export_string};
use crate::model::{Role, Schedule};
use crate::specs::location::looks_like_address;
use crate::{Error, Result};

/// Render a schedule in the chosen export format.
pub fn render(schedule: &Schedule, role: Role, export: &ExportOptions) -> Result<String> {
    match export.format {
        ExportFormat::Text => Ok(render_text(schedule)),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(schedule)? + "\n"),
        ExportFormat::Csv | ExportFormat::Tsv => {
            let sep = export.format.delim().unwrap_or(',');
            let rows = lesson_rows(schedule);
            Ok(to_export_string(&headers(role), &rows, export.include_headers, sep)?)
        }
    }
}

/// The listing a person reads: one block per day, one line per lesson,
/// details indented underneath.
pub fn render_text(schedule: &Schedule) -> String {
    if schedule.lesson_count() == 0 {
        return join!(NO_LESSONS, "\n");
    }

    let mut out = s!();
    for (ix, (label, lessons)) in schedule.iter().enumerate() {
        if ix > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{label}");
        if lessons.is_empty() {
            let _ = writeln!(out, "  {NO_LESSONS}");
            continue;
        }
        for lesson in lessons {
            let info = lesson.info();
            let _ = writeln!(out, "  {:<12} {}", info.time.to_string(), info.discipline);

            let details: Vec<&str> = [info.kind.as_str(), info.location.as_str(), lesson.counterpart()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect();
            if !details.is_empty() {
                let _ = writeln!(out, "               {}", details.join(" | "));
            }
            if let Some(addr) = looks_like_address(&info.location) {
                let _ = writeln!(out, "               map: {addr}");
            }
        }
    }
    out
}

/// Write `contents` to `path`, creating parent directories.
/// Returns the path written to.
pub fn write_export(path: &Path, contents: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    logf!("Wrote {}", path.display());
    Ok(path.to_path_buf())
}

/// `-o` may name a file or a directory (existing, or hinted with a trailing
/// separator). Directories get `default_filename` appended.
pub fn resolve_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf> {
    if user_o.is_empty() {
        return Ok(PathBuf::from(default_filename));
    }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(user_o) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

/// `РИ-280001` + csv → `РИ-280001.csv`; falls back to the id when the title has nothing usable.
pub fn default_filename(title: &str, id: u32, format: ExportFormat) -> String {
    format!("{}.{}", sanitize_filename(title, id), format.ext())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

fn looks_like_dir_hint(p: &str) -> bool {
    p.ends_with('/') || p.ends_with('\\')
}
