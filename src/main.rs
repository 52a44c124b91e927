// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use widget_calculators::logging::env_filter;
use widget_calculators::{Banner, ErrorBody, Form, WidgetKind};

/// Exit code for a submission rejected by validation
const EXIT_REJECTED: i32 = 2;

#[derive(Parser)]
#[command(name = "widget-calculators", version, about = "Grade, ticket price and triangle calculators")]
struct Cli {
    /// Print the outcome as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a numerical grade (0-100) to a letter grade
    Grade {
        #[arg(allow_hyphen_values = true)]
        score: String,
    },
    /// Price a ticket for the given age
    Ticket {
        #[arg(allow_hyphen_values = true)]
        age: String,
    },
    /// Identify a triangle from its three side lengths
    Triangle {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
        #[arg(allow_hyphen_values = true)]
        c: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Grade { score }) => run_once(WidgetKind::Grade, &[score.as_str()], cli.json),
        Some(Command::Ticket { age }) => run_once(WidgetKind::Ticket, &[age.as_str()], cli.json),
        Some(Command::Triangle { a, b, c }) => {
            run_once(WidgetKind::Triangle, &[a.as_str(), b.as_str(), c.as_str()], cli.json)
        }
        // UI mode (default)
        None => run_ui_mode(),
    }
}

/// Logs go to stderr so stdout stays clean for `--json`
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(tracing::Level::WARN))
        .with_writer(std::io::stderr)
        .init();
}

fn run_once(kind: WidgetKind, values: &[&str], json: bool) -> Result<()> {
    init_logging();
    tracing::debug!(widget = ?kind, "Evaluating one-shot submission");

    let mut form = Form::with_fields(kind, values);
    let banner = form.submit();

    if json {
        let text = match banner {
            Banner::Result(outcome) => serde_json::to_string_pretty(outcome),
            Banner::Error(err) => serde_json::to_string_pretty(&serde_json::json!({
                "error": ErrorBody::from(err),
            })),
        }
        .context("Failed to encode outcome as JSON")?;
        println!("{}", text);
    } else {
        match banner {
            Banner::Result(_) => println!("{}", banner.message()),
            Banner::Error(_) => eprintln!("{}", banner.message()),
        }
    }

    if matches!(banner, Banner::Error(_)) {
        std::process::exit(EXIT_REJECTED);
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    let mut app = ui::App::new();
    ui::run_ui(&mut app)
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use a subcommand: widget-calculators grade 85");
    std::process::exit(1);
}
