use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use mindcheck_cli::answers::load_answers;
use mindcheck_cli::config::{self, MindcheckConfig};
use mindcheck_cli::interactive::run_checkup;
use mindcheck_cli::output::{OutputFormat, write_report};
use mindcheck_core::models::report::Report;
use mindcheck_instruments::all_questionnaires;
use mindcheck_instruments::scoring::MissingPolicy;
use mindcheck_session::evaluate;

#[derive(Parser, Debug)]
#[command(
    name = "mindcheck",
    about = "PHQ-9, GAD-7 and WHO-5 wellness screening from the command line",
    version
)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Take the check-up interactively
    Take(ReportArgs),
    /// Score a JSON answers file
    Score {
        /// File with `depression`, `anxiety` and `wellbeing` response arrays
        answers: PathBuf,
        /// Count unanswered items as 0 instead of rejecting the file
        #[arg(long)]
        treat_missing_as_zero: bool,
        #[command(flatten)]
        report: ReportArgs,
    },
    /// List the questionnaires
    Instruments,
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the effective config
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Default)]
struct ReportArgs {
    /// Override the configured output format
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,
    /// Write the report to this file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Command::Take(args) => take(&config::load_config()?, args),
        Command::Score {
            answers,
            treat_missing_as_zero,
            report,
        } => {
            let config = config::load_config()?;
            let policy = if treat_missing_as_zero {
                MissingPolicy::TreatAsZero
            } else {
                config.missing_answers
            };
            let answers = load_answers(&answers)?;
            let result = evaluate(&answers, policy)?;
            emit(&result, &config, report)
        }
        Command::Instruments => {
            for q in all_questionnaires() {
                println!(
                    "{:<5} {:<6} {:<11} {} items, {} options",
                    q.id(),
                    q.name(),
                    q.domain(),
                    q.items().len(),
                    q.options().len(),
                );
            }
            Ok(())
        }
        Command::Config { command } => run_config(command),
    }
}

fn take(config: &MindcheckConfig, args: ReportArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut stdout = std::io::stdout();

    match run_checkup(&mut input, &mut stdout)? {
        Some(report) => {
            println!();
            emit(&report, config, args)
        }
        None => {
            println!(
                "\nCheck-up abandoned; no report was produced. Run `mindcheck take` to start again."
            );
            Ok(())
        }
    }
}

fn emit(report: &Report, config: &MindcheckConfig, args: ReportArgs) -> Result<()> {
    let format = args.output.unwrap_or(config.output);
    write_report(
        report,
        format,
        args.out.as_deref(),
        config,
        &mut std::io::stdout(),
    )
}

fn run_config(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let config = config::load_config()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Path => {
            println!("{}", config::config_path()?.display());
        }
        ConfigCommand::Init { force } => {
            let path = config::config_path()?;
            config::init_config_at(&path, force)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
