// src/specs/schedule.rs
//! The lessons page: endpoint, markup and parser.
//!
//! Endpoint: `{base}/{teacher|groups}/lessons/{id}/{YYYYMMDD}/`, an HTML
//! fragment of `<tr>` rows:
//!
//! ```text
//! <tr class="divide"><td>2 сентября, понедельник</td></tr>          date label
//! <tr class="shedule-weekday-row shedule-weekday-first-row">…</tr>   block header, no data
//! <tr class="shedule-weekday-row">                                  one lesson
//!   <td class="shedule-weekday-time">8:30 - 10:00</td>
//!   <td class="shedule-weekday-item">
//!     <dl>1. Discipline</dl>
//!     <dd><span>Type</span><span class="cabinet">Room</span><span>Преподаватель: Name</span></dd>
//!   </td>
//! </tr>
//! ```
//!
//! The "about" block (second child of the item) has 1-3 children. In the
//! student view the room and the teacher may come in either order; only the
//! `cabinet` class tells them apart.

use chrono::NaiveDate;

use crate::core::html::{self, Element};
use crate::core::net::Http;
use crate::core::sanitize::{strip_label, strip_ordinal};
use crate::dates::url_date;
use crate::error::RowError;
use crate::model::{Lesson, LessonInfo, Role, Schedule};
use crate::Result;

use super::time::parse_interval;

pub const DIVIDER: &str = "divide";
pub const WEEKDAY_ROW: &str = "shedule-weekday-row";
pub const WEEKDAY_FIRST_ROW: &str = "shedule-weekday-first-row";
pub const WEEKDAY_TIME: &str = "shedule-weekday-time";
pub const WEEKDAY_ITEM: &str = "shedule-weekday-item";
pub const CABINET: &str = "cabinet";

/// Where dropped rows are reported. Parsing carries on either way.
pub trait Diagnostics {
    /// `row` is the 0-based index in the input sequence.
    fn row_dropped(&mut self, _row: usize, _err: &RowError) {}
}

/// Log only.
pub struct LogDiagnostics;
impl Diagnostics for LogDiagnostics {}

/// Collects `(row index, error)` pairs, e.g. for tests or a summary line.
impl Diagnostics for Vec<(usize, RowError)> {
    fn row_dropped(&mut self, row: usize, err: &RowError) {
        self.push((row, err.clone()));
    }
}

/// GET one day's page and parse it.
pub fn fetch(http: &Http, id: u32, date: NaiveDate, role: Role) -> Result<Schedule> {
    let path = format!("{}/lessons/{}/{}/", role.api_segment(), id, url_date(date));
    let body = http.get_text(&path)?;
    let schedule = parse_html(&body, role);
    logd!("{} {} on {}: {} day(s), {} lesson(s)", role, id, date, schedule.len(), schedule.lesson_count());
    Ok(schedule)
}

/// Response body → schedule.
pub fn parse_html(body: &str, role: Role) -> Schedule {
    let doc = html::parse_document(body);
    parse_schedule(html::table_rows(&doc), role)
}

pub fn parse_schedule<E: Element>(rows: impl IntoIterator<Item = E>, role: Role) -> Schedule {
    parse_schedule_with(rows, role, &mut LogDiagnostics)
}

/// Walk the rows once, in order. Never fails: bad lesson rows are skipped,
/// logged and passed to `diag`.
pub fn parse_schedule_with<E: Element>(
    rows: impl IntoIterator<Item = E>,
    role: Role,
    diag: &mut dyn Diagnostics,
) -> Schedule {
    let mut schedule = Schedule::new();
    let mut current: Option<usize> = None;

    for (ix, row) in rows.into_iter().enumerate() {
        if row.has_class(DIVIDER) {
            let label = row.plain_text();
            if label.is_empty() {
                // Blank divider: keep the previous date and ignore the row entirely.
                continue;
            }
            current = Some(schedule.begin_day(&label));
        }

        if !row.has_class(WEEKDAY_ROW) || row.has_class(WEEKDAY_FIRST_ROW) {
            continue;
        }

        match parse_lesson_row(&row, role, current.is_some()) {
            Ok(lesson) => {
                if let Some(day) = current {
                    schedule.push(day, lesson);
                }
            }
            Err(err) => {
                logw!("Row {}: dropped ({}): {:?}", ix, err, row.plain_text());
                diag.row_dropped(ix, &err);
            }
        }
    }

    schedule
}

/// One lesson row → `Lesson`. `has_date` says whether a divider has been seen.
pub fn parse_lesson_row<E: Element>(row: &E, role: Role, has_date: bool) -> std::result::Result<Lesson, RowError> {
    let time_block = row.first_with_class(WEEKDAY_TIME).ok_or(RowError::MissingTime)?;
    let time = parse_interval(&time_block.plain_text());

    let item = row.first_with_class(WEEKDAY_ITEM).ok_or(RowError::MissingItem)?;
    let mut children = item.elements().into_iter();
    let discipline = children.next().ok_or(RowError::MissingDiscipline)?;
    let discipline = strip_ordinal(&discipline.plain_text());
    let about = children.next().ok_or(RowError::MissingAbout)?;

    if !has_date {
        return Err(RowError::LessonBeforeDate);
    }

    let info = about.elements();
    let label = role.counterpart_label();
    let text = |i: usize| info[i].plain_text();

    let (kind, location, counterpart) = match (role, info.len()) {
        (_, 1) => (text(0), s!(), s!()),
        (_, 2) => (text(0), text(1), s!()),
        (Role::Teacher, 3) => (text(0), text(1), s!(strip_label(&text(2), label))),
        (Role::Student, 3) if info[1].has_class(CABINET) => {
            (text(0), text(1), s!(strip_label(&text(2), label)))
        }
        (Role::Student, 3) => (text(0), text(2), s!(strip_label(&text(1), label))),
        (_, n) => return Err(RowError::InfoArity(n)),
    };

    let info = LessonInfo { time, discipline, kind, location };
    Ok(match role {
        Role::Teacher => Lesson::Teacher { info, group: counterpart },
        Role::Student => Lesson::Student { info, teacher: counterpart },
    })
}
