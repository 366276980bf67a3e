// src/model.rs
//
// Value types produced by the schedule parser.
// Everything here is rebuilt from scratch on each parse; nothing is mutated
// after construction except through `Schedule`'s own accumulation methods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::TimeError;

/* ---------------- Role ---------------- */

/// Whose schedule we are looking at. Decides the trailing lesson field
/// and which API branch serves the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Student,
}

impl Role {
    /// Path segment under the schedule API.
    pub fn api_segment(&self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Student => "groups",
        }
    }

    /// Label the site puts in front of the trailing field.
    pub fn counterpart_label(&self) -> &'static str {
        match self {
            Role::Teacher => "Группа: ",
            Role::Student => "Преподаватель: ",
        }
    }

    /// Export column title for the trailing field.
    pub fn column_title(&self) -> &'static str {
        match self {
            Role::Teacher => "Group",
            Role::Student => "Teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Teacher => "teacher",
            Role::Student => "student",
        })
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/* ---------------- Time ---------------- */

/// Wall-clock time as printed by the site. Not range-checked: `25:70` is kept as is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SimpleTime {
    pub hours: u32,
    pub minutes: u32,
}

impl SimpleTime {
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }
}

impl FromStr for SimpleTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(m), None) => Ok(Self::new(h.parse()?, m.parse()?)),
            _ => Err(TimeError::Shape(s!(s))),
        }
    }
}

impl fmt::Display for SimpleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}

/// A lesson's time slot: either a parsed interval or the site's text verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LessonTime {
    Interval { start: SimpleTime, end: SimpleTime },
    Fallback { raw: String },
}

impl fmt::Display for LessonTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LessonTime::Interval { start, end } => write!(f, "{}-{}", start, end),
            LessonTime::Fallback { raw } => f.write_str(raw),
        }
    }
}

/* ---------------- Lesson ---------------- */

/// Fields every lesson has, whatever the role.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LessonInfo {
    pub time: LessonTime,
    pub discipline: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
}

/// One scheduled lesson. The variant matches the `Role` the page was parsed for.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Lesson {
    Teacher {
        #[serde(flatten)]
        info: LessonInfo,
        group: String,
    },
    Student {
        #[serde(flatten)]
        info: LessonInfo,
        teacher: String,
    },
}

impl Lesson {
    pub fn info(&self) -> &LessonInfo {
        match self {
            Lesson::Teacher { info, .. } | Lesson::Student { info, .. } => info,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Lesson::Teacher { .. } => Role::Teacher,
            Lesson::Student { .. } => Role::Student,
        }
    }

    /// Group (teacher view) or teacher name (student view); may be empty.
    pub fn counterpart(&self) -> &str {
        match self {
            Lesson::Teacher { group, .. } => group,
            Lesson::Student { teacher, .. } => teacher,
        }
    }
}

/* ---------------- Schedule ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub label: String,
    pub lessons: Vec<Lesson>,
}

/// Date label → lessons, in first-seen label order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    days: Vec<Day>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) accumulation for `label` and return its index.
    /// A label seen before keeps its position but loses its lessons.
    pub fn begin_day(&mut self, label: &str) -> usize {
        if let Some(ix) = self.days.iter().position(|d| d.label == label) {
            self.days[ix].lessons.clear();
            return ix;
        }
        self.days.push(Day { label: s!(label), lessons: Vec::new() });
        self.days.len() - 1
    }

    /// Append to the day returned by `begin_day`.
    pub fn push(&mut self, day: usize, lesson: Lesson) {
        if let Some(d) = self.days.get_mut(day) {
            d.lessons.push(lesson);
        }
    }

    pub fn get(&self, label: &str) -> Option<&[Lesson]> {
        self.days
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.lessons.as_slice())
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Lesson])> {
        self.days.iter().map(|d| (d.label.as_str(), d.lessons.as_slice()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|d| d.label.as_str())
    }

    /// The day the app shows after loading a date.
    pub fn first_day(&self) -> Option<&Day> {
        self.days.first()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn lesson_count(&self) -> usize {
        self.days.iter().map(|d| d.lessons.len()).sum()
    }

    /// Fold another page in: same label replaces in place, new labels append.
    pub fn merge(&mut self, other: Schedule) {
        for day in other.days {
            match self.days.iter_mut().find(|d| d.label == day.label) {
                Some(existing) => existing.lessons = day.lessons,
                None => self.days.push(day),
            }
        }
    }
}

// Ordered object `{label: [lessons]}`; serde_json's own Map would sort the keys.
impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.days.iter().map(|d| (&d.label, &d.lessons)))
    }
}

/* ---------------- Suggestions ---------------- */

/// One autocomplete hit: display text + schedule id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub value: String,
    pub data: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    pub suggestions: Vec<SuggestionItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(discipline: &str) -> Lesson {
        Lesson::Student {
            info: LessonInfo {
                time: LessonTime::Fallback { raw: s!("TBD") },
                discipline: s!(discipline),
                kind: s!(),
                location: s!(),
            },
            teacher: s!(),
        }
    }

    #[test]
    fn simple_time_parse_and_display() {
        assert_eq!("9:05".parse::<SimpleTime>().unwrap(), SimpleTime::new(9, 5));
        assert_eq!(SimpleTime::new(9, 5).to_string(), "9:05");
        assert_eq!("25:70".parse::<SimpleTime>().unwrap(), SimpleTime::new(25, 70));
        assert!("930".parse::<SimpleTime>().is_err());
        assert!("9:30:00".parse::<SimpleTime>().is_err());
        assert!("9:".parse::<SimpleTime>().is_err());
    }

    #[test]
    fn begin_day_resets_but_keeps_position() {
        let mut s = Schedule::new();
        let a = s.begin_day("Mon");
        s.push(a, lesson("Math"));
        let b = s.begin_day("Tue");
        s.push(b, lesson("Physics"));
        let a2 = s.begin_day("Mon");
        assert_eq!(a, a2);
        assert_eq!(s.labels().collect::<Vec<_>>(), vec!["Mon", "Tue"]);
        assert!(s.get("Mon").unwrap().is_empty());
        assert_eq!(s.lesson_count(), 1);
    }

    #[test]
    fn merge_replaces_same_label() {
        let mut a = Schedule::new();
        let d = a.begin_day("Mon");
        a.push(d, lesson("Math"));

        let mut b = Schedule::new();
        let d = b.begin_day("Mon");
        b.push(d, lesson("Art"));
        b.begin_day("Tue");

        a.merge(b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.get("Mon").unwrap()[0].info().discipline, "Art");
    }

    #[test]
    fn schedule_serializes_in_label_order() {
        let mut s = Schedule::new();
        s.begin_day("Пятница");
        s.begin_day("Вторник");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"Пятница":[],"Вторник":[]}"#);
    }

    #[test]
    fn lesson_serializes_flat_with_role_tag() {
        let v = serde_json::to_value(lesson("Math")).unwrap();
        assert_eq!(v["role"], "student");
        assert_eq!(v["discipline"], "Math");
        assert_eq!(v["type"], "");
        assert_eq!(v["time"]["kind"], "fallback");
    }

    #[test]
    fn role_from_str() {
        assert_eq!("Teacher".parse::<Role>().unwrap(), Role::Teacher);
        assert_eq!(" student ".parse::<Role>().unwrap(), Role::Student);
        assert!("dean".parse::<Role>().is_err());
    }
}
