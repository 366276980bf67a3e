// tests/schedule_fixture.rs
use urfu_schedule::core::html;
use urfu_schedule::error::RowError;
use urfu_schedule::model::{Lesson, LessonTime, Role, SimpleTime};
use urfu_schedule::specs::schedule::{parse_html, parse_schedule_with};

const STUDENT: &str = include_str!("fixtures/student_day.html");
const TEACHER: &str = include_str!("fixtures/teacher_day.html");

fn at(h: u32, m: u32) -> SimpleTime {
    SimpleTime::new(h, m)
}

#[test]
fn student_page_parses_into_two_days() {
    let schedule = parse_html(STUDENT, Role::Student);

    let labels: Vec<&str> = schedule.labels().collect();
    assert_eq!(labels, ["2 сентября, понедельник", "3 сентября, вторник"]);

    let monday = schedule.get("2 сентября, понедельник").unwrap();
    assert_eq!(monday.len(), 3);

    let first = monday[0].info();
    assert_eq!(first.time, LessonTime::Interval { start: at(8, 30), end: at(10, 0) });
    assert_eq!(first.discipline, "Математика");
    assert_eq!(first.kind, "Лекция");
    assert_eq!(first.location, "Р-237 (ул. Софьи Ковалевской, 5)");
    assert_eq!(monday[0].counterpart(), "Иванов Иван Иванович");

    // teacher before the room, no cabinet class in second place
    let second = monday[1].info();
    assert_eq!(second.time, LessonTime::Interval { start: at(10, 15), end: at(11, 45) });
    assert_eq!(second.location, "И-420");
    assert_eq!(monday[1].counterpart(), "Петрова Анна Сергеевна");

    let third = monday[2].info();
    assert_eq!(third.time, LessonTime::Fallback { raw: "по договорённости".into() });
    assert_eq!(third.kind, "Практические занятия");
    assert_eq!(third.location, "");
    assert_eq!(monday[2].counterpart(), "");

    let tuesday = schedule.get("3 сентября, вторник").unwrap();
    assert_eq!(tuesday.len(), 1);
    assert!(matches!(&tuesday[0], Lesson::Student { teacher, .. } if teacher.is_empty()));
    assert_eq!(tuesday[0].info().location, "Т-1001");
}

#[test]
fn student_page_reports_the_broken_row() {
    let doc = html::parse_document(STUDENT);
    let mut dropped: Vec<(usize, RowError)> = Vec::new();
    let schedule = parse_schedule_with(html::table_rows(&doc), Role::Student, &mut dropped);

    assert_eq!(dropped, vec![(5, RowError::MissingItem)]);
    assert_eq!(schedule.lesson_count(), 4);
}

#[test]
fn teacher_fragment_without_table_wrapper() {
    let doc = html::parse_document(TEACHER);
    let mut dropped: Vec<(usize, RowError)> = Vec::new();
    let schedule = parse_schedule_with(html::table_rows(&doc), Role::Teacher, &mut dropped);

    // the lesson ahead of the first date has nowhere to go
    assert_eq!(dropped, vec![(0, RowError::LessonBeforeDate)]);

    // blank divider keeps "4 сентября, среда"
    assert_eq!(schedule.len(), 1);
    let wednesday = schedule.get("4 сентября, среда").unwrap();
    assert_eq!(wednesday.len(), 2);

    match &wednesday[0] {
        Lesson::Teacher { info, group } => {
            assert_eq!(info.discipline, "Базы данных");
            assert_eq!(info.location, "Р-044");
            assert_eq!(group, "РИ-280001, РИ-280002");
        }
        other => panic!("expected a teacher lesson, got {other:?}"),
    }
    assert_eq!(wednesday[1].info().kind, "Лабораторные занятия");
    assert_eq!(wednesday[1].counterpart(), "");
}

#[test]
fn role_only_changes_the_trailing_field() {
    let as_teacher = parse_html(STUDENT, Role::Teacher);
    let monday = as_teacher.get("2 сентября, понедельник").unwrap();
    // teacher view trusts position: second field is the room
    assert_eq!(monday[1].info().location, "Преподаватель: Петрова Анна Сергеевна");
    assert_eq!(monday[1].counterpart(), "И-420");
    assert!(monday.iter().all(|l| l.role() == Role::Teacher));
}

#[test]
fn json_keeps_page_order() {
    let schedule = parse_html(STUDENT, Role::Student);
    let json = serde_json::to_string(&schedule).unwrap();
    let mon = json.find("2 сентября").unwrap();
    let tue = json.find("3 сентября").unwrap();
    assert!(mon < tue);
    assert!(json.contains(r#""teacher":"Иванов Иван Иванович""#));
}
