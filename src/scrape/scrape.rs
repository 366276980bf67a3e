// src/scrape/scrape.rs
use std::{
    thread, time::Duration,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }}
};

use chrono::{Datelike, NaiveDate};

use crate::{
    config::options::FetchOptions,
    core::net::Http,
    model::{Role, Schedule, SuggestionItem},
    progress::Progress,
    specs::{schedule, suggest},
    Result,
};

/// Whose schedule to fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub id: u32,
    pub role: Role,
}

/// Outcome of one requested date. Errors are kept as text so one bad day
/// doesn't throw away the rest.
#[derive(Debug)]
pub struct DayResult {
    pub date: NaiveDate,
    pub outcome: std::result::Result<Schedule, String>,
}

pub fn collect_day(http: &Http, target: Target, date: NaiveDate) -> Result<Schedule> {
    schedule::fetch(http, target.id, date, target.role)
}

pub fn search(http: &Http, role: Role, query: &str) -> Result<Vec<SuggestionItem>> {
    suggest::fetch(http, role, query.trim())
}

/// One request per date over a small worker pool. Results come back sorted by date.
pub fn collect_days(
    http: &Http,
    fetch: &FetchOptions,
    target: Target,
    dates: &[NaiveDate],
    progress: Option<&mut dyn Progress>,
) -> Vec<DayResult> {
    let http = http.clone();
    collect_days_with(
        move |date| collect_day(&http, target, date),
        fetch,
        dates,
        progress,
    )
}

/// Worker pool over any day fetcher.
pub fn collect_days_with<F>(
    fetch_day: F,
    fetch: &FetchOptions,
    dates: &[NaiveDate],
    mut progress: Option<&mut dyn Progress>,
) -> Vec<DayResult>
where
    F: Fn(NaiveDate) -> Result<Schedule> + Send + Sync + 'static,
{
    if let Some(p) = progress.as_deref_mut() {
        p.begin(dates.len());
    }

    let dates_arc = Arc::new(dates.to_vec());
    let fetch_day = Arc::new(fetch_day);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<DayResult>();

    let workers = fetch.workers.min(dates.len()).max(1);
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {} day(s) with {} worker(s)…", dates.len(), workers));
    }
    let pause_ms = fetch.pause_ms;
    let jitter_ms = fetch.jitter_ms;

    for _ in 0..workers {
        let dates = Arc::clone(&dates_arc);
        let idx = Arc::clone(&counter);
        let fetch_day = Arc::clone(&fetch_day);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= dates.len() {
                    break;
                }
                let date = dates[i];
                let outcome = fetch_day(date).map_err(|e| e.to_string());
                if tx.send(DayResult { date, outcome }).is_err() {
                    break;
                }
                let jitter = if jitter_ms == 0 { 0 } else { date.num_days_from_ce() as u64 % jitter_ms };
                thread::sleep(Duration::from_millis(pause_ms + jitter));
            }
        });
    }
    drop(res_tx);

    let mut results: Vec<DayResult> = Vec::with_capacity(dates_arc.len());
    for _ in 0..dates_arc.len() {
        match res_rx.recv() {
            Ok(res) => {
                let label = res.date.to_string();
                match &res.outcome {
                    Ok(s) => {
                        logd!("{}: {} lesson(s)", label, s.lesson_count());
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_done(&label);
                        }
                    }
                    Err(msg) => {
                        loge!("{}: {}", label, msg);
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_failed(&label, msg);
                        }
                    }
                }
                results.push(res);
            }
            Err(_) => break, // a worker panicked; keep what we have
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    results.sort_by_key(|r| r.date);
    results
}
