use chrono::Local;
use clap::{Parser, Subcommand};
use log::info;
use std::{
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
    time::Instant,
};
use typedash::{
    advise,
    config::{ConfigStore, FileConfigStore},
    history::format_timestamp,
    random_tip, select_passage,
    trend::{chart_series, summarize, summarize_by_difficulty, TrendSummary},
    CsvHistoryStore, Difficulty, HistoryStore, Session,
};

/// typing practice with scoring, coaching tips and session history
#[derive(Parser, Debug)]
#[clap(
    version,
    about,
    long_about = "Type a practice passage, get words per minute, accuracy and an error count, and track how you improve over time."
)]
pub struct Cli {
    /// history CSV to read and append to
    #[clap(long, global = true)]
    history: Option<PathBuf>,

    /// config file to read and update
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// type one passage and record the result
    Practice {
        /// passage tier, defaults to the configured one
        #[clap(short = 'd', long, value_enum)]
        difficulty: Option<Difficulty>,

        /// score the session without appending it to history
        #[clap(long)]
        no_save: bool,
    },
    /// list past sessions, newest first
    History {
        /// only show the last N sessions
        #[clap(short = 'n', long)]
        last: Option<usize>,
    },
    /// summarize progress overall and per tier
    Trend {
        /// number of recent sessions to chart
        #[clap(short = 'w', long)]
        window: Option<usize>,
    },
    /// print a random typing tip
    Tip,
    /// show or update stored settings
    Config {
        /// default passage tier
        #[clap(short = 'd', long, value_enum)]
        difficulty: Option<Difficulty>,

        /// number of recent sessions to chart
        #[clap(long)]
        chart_window: Option<usize>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config_store = cli
        .config
        .as_ref()
        .map(FileConfigStore::with_path)
        .unwrap_or_default();
    let mut config = config_store.load();
    let history = CsvHistoryStore::with_path(
        cli.history.clone().unwrap_or_else(|| config.history_path()),
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Practice {
            difficulty,
            no_save,
        } => {
            let difficulty = difficulty.unwrap_or(config.difficulty);
            practice(io::stdin().lock(), &mut out, difficulty, &history, no_save)?;
        }
        Command::History { last } => {
            let mut records = history.load_all();
            if records.is_empty() {
                writeln!(out, "No history yet.")?;
            } else {
                writeln!(
                    out,
                    "{:<32} {:>8} {:>9} {:>7}  difficulty",
                    "timestamp", "wpm", "accuracy", "errors"
                )?;
                // -n 0 still prints the header for a non-empty history
                if let Some(n) = last {
                    records = records.split_off(records.len().saturating_sub(n));
                }
                for r in records.iter().rev() {
                    writeln!(
                        out,
                        "{:<32} {:>8.2} {:>8}% {:>7}  {}",
                        format_timestamp(&r.timestamp),
                        r.wpm,
                        r.accuracy,
                        r.errors,
                        r.difficulty
                    )?;
                }
            }
        }
        Command::Trend { window } => {
            let records = history.load_all();
            match summarize(&records) {
                None => writeln!(out, "No history yet.")?,
                Some(overall) => {
                    write_summary(&mut out, "All tiers", &overall)?;
                    for (tier, summary) in summarize_by_difficulty(&records) {
                        write_summary(&mut out, &tier.to_string(), &summary)?;
                    }
                    let series = chart_series(&records, window.unwrap_or(config.chart_window));
                    writeln!(
                        out,
                        "\nLast {} sessions (scale 0-{:.0} wpm):",
                        series.points.len(),
                        series.y_max
                    )?;
                    for point in &series.points {
                        let width = ((point.wpm / series.y_max) * 40.0).round() as usize;
                        writeln!(
                            out,
                            "  {}  {:>7.2}  {}",
                            point.label,
                            point.wpm,
                            "#".repeat(width)
                        )?;
                    }
                }
            }
        }
        Command::Tip => writeln!(out, "{}", random_tip())?,
        Command::Config {
            difficulty,
            chart_window,
        } => {
            if difficulty.is_some() || chart_window.is_some() {
                if let Some(d) = difficulty {
                    config.difficulty = d;
                }
                if let Some(w) = chart_window {
                    config.chart_window = w;
                }
                config_store.save(&config)?;
                info!("saved config");
            }
            writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
        }
    }

    Ok(())
}

fn practice<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    difficulty: Difficulty,
    history: &CsvHistoryStore,
    no_save: bool,
) -> Result<(), Box<dyn Error>> {
    let passage = select_passage(difficulty);
    writeln!(out, "Difficulty: {difficulty}")?;
    writeln!(out, "Type the passage below and press Enter:\n")?;
    writeln!(out, "  {}\n", passage.text)?;
    out.flush()?;

    let session = Session::start(passage, Local::now());
    let clock = Instant::now();

    let mut typed = String::new();
    if input.read_line(&mut typed)? == 0 {
        return Err("no input received, session discarded".into());
    }
    let elapsed = clock.elapsed().as_secs_f64();
    let result = session.finish(typed.trim(), elapsed, Local::now());

    writeln!(out, "WPM: {}", result.wpm)?;
    writeln!(out, "Accuracy: {}%", result.accuracy)?;
    writeln!(out, "Errors: {}", result.errors)?;
    writeln!(out, "Tip: {}", advise(result.wpm, result.accuracy))?;

    if !no_save {
        history.append(&result)?;
        writeln!(out, "Saved to {}", history.path().display())?;
    }
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, title: &str, s: &TrendSummary) -> io::Result<()> {
    writeln!(
        out,
        "{title}: {} sessions, avg {:.2} wpm (best {:.2}, sd {:.2}), avg accuracy {:.1}%, {} errors",
        s.sessions, s.avg_wpm, s.best_wpm, s.wpm_std_dev, s.avg_accuracy, s.total_errors
    )
}
