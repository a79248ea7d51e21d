use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use triage_core::{AnalyzedTask, Strategy, TaskDescriptor, analyze_tasks};

mod state;

#[derive(Parser, Debug)]
#[command(name = "triage", version, about = "Rank tasks by computed priority")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score and rank a task list, saving the result for `suggest`
    Analyze {
        /// JSON file containing an array of task descriptors
        #[arg(long)]
        input: PathBuf,

        /// fastest_wins | high_impact | deadline_driven | smart_balance
        /// (unknown names fall back to smart_balance)
        #[arg(long, default_value = "smart_balance")]
        strategy: String,

        /// Reference date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Print the per-task explanation lines
        #[arg(long)]
        explain: bool,

        /// Emit the full JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the top suggestions from a fresh or saved analysis
    Suggest {
        /// Number of tasks to suggest
        #[arg(long, default_value_t = 3)]
        limit: usize,

        /// Optional task file; without it the last saved analysis is used
        #[arg(long)]
        input: Option<PathBuf>,

        /// Strategy for a fresh analysis (ignored with a saved one)
        #[arg(long, default_value = "smart_balance")]
        strategy: String,

        /// Reference date for a fresh analysis, YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Emit the full JSON response instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct AnalyzeResponse<'a> {
    strategy: &'a str,
    count: usize,
    tasks: &'a [AnalyzedTask],
}

#[derive(Debug, Serialize)]
struct SuggestResponse<'a> {
    strategy: &'a str,
    suggested_for_date: NaiveDate,
    tasks: &'a [AnalyzedTask],
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze {
            input,
            strategy,
            date,
            explain,
            json,
        } => {
            let descriptors = load_tasks(&input)?;
            let strategy = Strategy::from_name(&strategy);
            let today = date.unwrap_or_else(|| Local::now().date_naive());
            let analyzed = analyze_tasks(&descriptors, strategy, today);

            state::write_last_analysis(&state::LastAnalysis {
                strategy,
                analyzed_on: today,
                tasks: analyzed.clone(),
            })?;

            if json {
                let resp = AnalyzeResponse {
                    strategy: strategy.name(),
                    count: analyzed.len(),
                    tasks: &analyzed,
                };
                println!("{}", serde_json::to_string_pretty(&resp)?);
            } else {
                println!(
                    "Analyzed {} task(s) with strategy {strategy} (reference date {today})\n",
                    analyzed.len()
                );
                print_ranked(&analyzed, explain);
            }
        }

        Command::Suggest {
            limit,
            input,
            strategy,
            date,
            json,
        } => {
            let (strategy_name, suggested_for, ranked) = match input {
                Some(path) => {
                    let descriptors = load_tasks(&path)?;
                    let strategy = Strategy::from_name(&strategy);
                    let today = date.unwrap_or_else(|| Local::now().date_naive());
                    let analyzed = analyze_tasks(&descriptors, strategy, today);
                    (strategy.name(), today, analyzed)
                }
                None => {
                    let last = state::read_last_analysis()?
                        .filter(|l| !l.tasks.is_empty());
                    let Some(last) = last else {
                        bail!(
                            "no prior analysis found: run `triage analyze` first or pass --input"
                        );
                    };
                    (
                        last.strategy.name(),
                        Local::now().date_naive(),
                        last.tasks,
                    )
                }
            };

            let top: Vec<AnalyzedTask> = ranked.into_iter().take(limit).collect();

            if json {
                let resp = SuggestResponse {
                    strategy: strategy_name,
                    suggested_for_date: suggested_for,
                    tasks: &top,
                };
                println!("{}", serde_json::to_string_pretty(&resp)?);
            } else {
                println!(
                    "Top {} suggestion(s) for {suggested_for} (strategy {strategy_name})\n",
                    top.len()
                );
                print_ranked(&top, false);
            }
        }
    }

    Ok(())
}

/// Load and structurally validate a task file. Range problems in numeric
/// fields are left for the engine, which clamps and warns instead of
/// rejecting.
fn load_tasks(path: &Path) -> Result<Vec<TaskDescriptor>> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let tasks: Vec<TaskDescriptor> =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;

    for (i, task) in tasks.iter().enumerate() {
        if task.title.trim().is_empty() {
            bail!("task #{i}: title must not be empty");
        }
    }
    Ok(tasks)
}

fn print_ranked(tasks: &[AnalyzedTask], explain: bool) {
    for (rank, task) in tasks.iter().enumerate() {
        let due = task
            .due_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "no due date".to_string());
        println!(
            "{:>2}. [{:<6}] score={:.3} | {} | {} ({due})",
            rank + 1,
            task.priority_label.to_string(),
            task.score,
            task.id,
            task.title
        );
        for warning in &task.warnings {
            println!("      ! {warning}");
        }
        if explain {
            for line in task.explanation.lines() {
                println!("      {line}");
            }
        }
    }
}
