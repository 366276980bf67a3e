// src/cli.rs
use std::path::PathBuf;

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{bail, Result, WrapErr};

use crate::config::consts::{DEFAULT_RANGE_DAYS, NO_LESSONS};
use crate::config::{AppOptions, ExportFormat};
use crate::core::net::Http;
use crate::dates::{self, DateWindow};
use crate::model::{Role, Schedule};
use crate::progress::Progress;
use crate::scrape::{self, Target};
use crate::specs::schedule::parse_html;
use crate::store::{self, Selection};
use crate::{file, log, Error};

/// UrFU class schedule: search, fetch, export
#[derive(Parser, Debug)]
#[command(name = "urfu_schedule")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: <config dir>/urfu_schedule/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Schedule API root (overrides config and env)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides config and env)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lessons for one date (default: today)
    Day(DayArgs),

    /// Lessons for consecutive dates
    Week(WeekArgs),

    /// Find a group or teacher id
    Search {
        #[arg(long, value_enum)]
        role: Role,
        query: String,
    },

    /// Remember whose schedule to show
    Select {
        #[arg(long, value_enum)]
        role: Role,
        id: u32,
        title: String,
    },

    /// Forget the saved selection
    Forget,

    /// Print the saved selection
    Show,

    /// Parse a saved lessons page instead of fetching
    Parse {
        file: PathBuf,
        #[arg(long, value_enum)]
        role: Role,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Args, Debug)]
struct TargetArgs {
    /// Group or teacher id (default: saved selection)
    #[arg(long, requires = "role")]
    id: Option<u32>,

    #[arg(long, value_enum, requires = "id")]
    role: Option<Role>,
}

#[derive(Args, Debug)]
struct OutputArgs {
    #[arg(long, value_enum)]
    format: Option<ExportFormat>,

    /// Header line for csv/tsv
    #[arg(long)]
    headers: bool,

    /// Output file or directory (default: stdout)
    #[arg(short, long)]
    out: Option<String>,
}

#[derive(Args, Debug)]
struct DayArgs {
    /// YYYY-MM-DD, YYYYMMDD, DD.MM.YYYY, today, tomorrow, +N, -N
    date: Option<String>,

    /// Allow dates outside the browsing window
    #[arg(long)]
    unbounded: bool,

    #[command(flatten)]
    target: TargetArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct WeekArgs {
    #[arg(long)]
    from: Option<String>,

    #[arg(long, default_value_t = DEFAULT_RANGE_DAYS)]
    days: u32,

    #[arg(long)]
    unbounded: bool,

    #[command(flatten)]
    target: TargetArgs,

    #[command(flatten)]
    output: OutputArgs,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    log::init(cli.verbose);

    let mut opts = AppOptions::load(cli.config.as_deref())
        .wrap_err("Failed to load configuration")?
        .with_env_overrides()?;
    if let Some(url) = cli.base_url {
        opts.net.base_url = s!(url.trim_end_matches('/'));
    }
    if let Some(t) = cli.timeout {
        opts.net.timeout_secs = t;
    }
    logd!("Options: {:?}", opts);

    let today = Local::now().date_naive();

    match cli.command {
        Commands::Day(args) => {
            let date = match &args.date {
                Some(text) => dates::parse_date(text, today)?,
                None => today,
            };
            let window = DateWindow::around(today, opts.fetch.window_days);
            if !args.unbounded {
                window.check(date)?;
            }
            let (target, title) = resolve_target(&args.target)?;
            let http = Http::new(&opts.net)?;
            let schedule = scrape::collect_day(&http, target, date)
                .wrap_err_with(|| format!("Failed to fetch {} {} on {}", target.role, target.id, date))?;
            emit(&schedule, target.role, &title, target.id, &args.output, &opts)?;
        }

        Commands::Week(args) => {
            let from = match &args.from {
                Some(text) => dates::parse_date(text, today)?,
                None => today,
            };
            let days = dates::range(from, args.days);
            if !args.unbounded {
                let window = DateWindow::around(today, opts.fetch.window_days);
                for d in &days {
                    window.check(*d)?;
                }
            }
            let (target, title) = resolve_target(&args.target)?;
            let http = Http::new(&opts.net)?;

            let mut progress = StderrProgress::default();
            let results = scrape::collect_days(&http, &opts.fetch, target, &days, Some(&mut progress));

            let mut merged = Schedule::new();
            let mut failed = 0;
            for r in results {
                match r.outcome {
                    Ok(s) => merged.merge(s),
                    Err(_) => failed += 1,
                }
            }
            if failed > 0 && failed == days.len() {
                bail!("All {} day(s) failed to load", failed);
            }
            emit(&merged, target.role, &title, target.id, &args.output, &opts)?;
        }

        Commands::Search { role, query } => {
            let http = Http::new(&opts.net)?;
            let items = scrape::search(&http, role, &query)?;
            if items.is_empty() {
                println!("No matches.");
            }
            for item in items {
                println!("{}\t{}", item.data, item.value);
            }
        }

        Commands::Select { role, id, title } => {
            let path = store::save_selection(&Selection { id, title, role })?;
            println!("Saved to {}", path.display());
        }

        Commands::Forget => {
            if store::clear_selection()? {
                println!("Selection cleared.");
            } else {
                println!("Nothing to clear.");
            }
        }

        Commands::Show => match store::load_selection()? {
            Some(sel) => println!("{} {} ({})", sel.role, sel.id, sel.title),
            None => println!("No schedule selected."),
        },

        Commands::Parse { file: path, role, output } => {
            let body = std::fs::read_to_string(&path)
                .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
            let schedule = parse_html(&body, role);
            let title = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
            emit(&schedule, role, &title, 0, &output, &opts)?;
        }

        Commands::Config => {
            print!("{}", toml::to_string_pretty(&opts)?);
            println!();
            match cli.config.or_else(AppOptions::default_config_path) {
                Some(p) if p.exists() => println!("# Config file: {}", p.display()),
                Some(p) => println!("# Config file: {} (not found - using defaults)", p.display()),
                None => println!("# No config directory on this platform"),
            }
        }
    }

    Ok(())
}

/// `--id/--role` if given, else the saved selection.
fn resolve_target(args: &TargetArgs) -> Result<(Target, String)> {
    if let (Some(id), Some(role)) = (args.id, args.role) {
        return Ok((Target { id, role }, id.to_string()));
    }
    match store::load_selection()? {
        Some(sel) => Ok((Target { id: sel.id, role: sel.role }, sel.title)),
        None => Err(Error::NoSelection.into()),
    }
}

fn emit(
    schedule: &Schedule,
    role: Role,
    title: &str,
    id: u32,
    output: &OutputArgs,
    opts: &AppOptions,
) -> Result<()> {
    let mut export = opts.export.clone();
    if let Some(f) = output.format {
        export.format = f;
    }
    export.include_headers |= output.headers;

    let contents = file::render(schedule, role, &export)?;
    match &output.out {
        Some(o) => {
            let path = file::resolve_out_path(o, &file::default_filename(title, id, export.format))?;
            let path = file::write_export(&path, &contents)?;
            println!("Wrote {}", path.display());
        }
        None if contents.is_empty() && export.format != ExportFormat::Json => println!("{NO_LESSONS}"),
        None => print!("{contents}"),
    }
    Ok(())
}

/// Status lines on stderr so stdout stays clean for piping.
#[derive(Default)]
struct StderrProgress {
    total: usize,
    seen: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, label: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] {}", self.seen, self.total, label);
    }
    fn item_failed(&mut self, label: &str, err: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] {} failed: {}", self.seen, self.total, label, err);
    }
}
