//! CLI entry point for the riskreg risk register.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use riskreg_core::{NewRisk, Risk, RiskId, RiskLevel, RiskPatch};
use riskreg_core::scoring::{default_likelihood, default_severity};
use riskreg_service::{ListParams, RiskService, ServiceError};
use riskreg_store::JsonRiskStore;

use riskreg_cli::config::load_config;
use riskreg_cli::csv::risks_to_csv;
use riskreg_cli::matrix::render_matrix;
use riskreg_cli::rating::{parse_likelihood, parse_severity};

#[derive(Parser)]
#[command(name = "riskreg")]
#[command(about = "Hazard risk register with derived scoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Override the register data directory.
    #[arg(long, global = true)]
    data_dir: Option<String>,

    /// Config file prefix (default: riskreg).
    #[arg(short, long, default_value = "riskreg", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Command {
    /// Record a new hazard.
    Add {
        /// Hazard description.
        hazard: String,
        /// Likelihood: 1–5 or a label such as "Remote".
        #[arg(short, long)]
        likelihood: Option<String>,
        /// Severity: 1–5 or a label such as "Minor injury".
        #[arg(short, long)]
        severity: Option<String>,
    },
    /// List risks, highest score first.
    List {
        /// Restrict to hazards containing this text (case-insensitive).
        #[arg(short, long)]
        query: Option<String>,
        /// Restrict to a level: low, medium, high, critical.
        #[arg(short, long)]
        level: Option<RiskLevel>,
    },
    /// Show a single risk.
    Show {
        /// Risk ID.
        id: RiskId,
    },
    /// Edit an existing risk. Omitted fields are unchanged.
    Edit {
        /// Risk ID.
        id: RiskId,
        /// New hazard description.
        #[arg(long)]
        hazard: Option<String>,
        /// New likelihood: 1–5 or a label.
        #[arg(short, long)]
        likelihood: Option<String>,
        /// New severity: 1–5 or a label.
        #[arg(short, long)]
        severity: Option<String>,
    },
    /// Remove a risk from the register.
    Remove {
        /// Risk ID.
        id: RiskId,
    },
    /// Print the 5×5 likelihood×severity matrix with entry counts.
    Matrix,
    /// Export the register as CSV.
    Export {
        /// Write to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }

    let store = JsonRiskStore::new(&config.data_dir)?;
    let service = RiskService::new(store);

    match cli.command {
        Command::Add {
            hazard,
            likelihood,
            severity,
        } => {
            let likelihood = match likelihood {
                Some(raw) => parse_likelihood(&raw)?,
                None => default_likelihood(),
            };
            let severity = match severity {
                Some(raw) => parse_severity(&raw)?,
                None => default_severity(),
            };

            let risk = service.create(NewRisk {
                hazard,
                likelihood,
                severity,
            })?;
            print_risk(&risk);
        }
        Command::List { query, level } => {
            let risks = service.list(&ListParams { q: query, level })?;
            if risks.is_empty() {
                println!("Register is empty (no matching risks).");
            }
            for risk in &risks {
                print_risk_line(risk);
            }
        }
        Command::Show { id } => match service.get(id)? {
            Some(risk) => print_risk(&risk),
            None => anyhow::bail!("No risk with id {id}"),
        },
        Command::Edit {
            id,
            hazard,
            likelihood,
            severity,
        } => {
            let patch = RiskPatch {
                hazard,
                likelihood: likelihood.as_deref().map(parse_likelihood).transpose()?,
                severity: severity.as_deref().map(parse_severity).transpose()?,
            };

            match service.update(id, patch) {
                Ok(risk) => print_risk(&risk),
                Err(ServiceError::NotFound(id)) => anyhow::bail!("No risk with id {id}"),
                Err(e) => return Err(e.into()),
            }
        }
        Command::Remove { id } => {
            service.delete(id)?;
            println!("Removed {id}");
        }
        Command::Matrix => {
            let risks = service.list(&ListParams::default())?;
            print!("{}", render_matrix(&risks));
        }
        Command::Export { output } => {
            let risks = service.list(&ListParams::default())?;
            let csv = risks_to_csv(&risks);
            match output {
                Some(path) => {
                    std::fs::write(&path, csv)?;
                    tracing::info!(path = %path.display(), rows = risks.len(), "Register exported");
                }
                None => println!("{csv}"),
            }
        }
    }

    Ok(())
}

fn print_risk(risk: &Risk) {
    println!("id:         {}", risk.id);
    println!("hazard:     {}", risk.hazard);
    println!("likelihood: {}", risk.likelihood);
    println!("severity:   {}", risk.severity);
    println!("score:      {}", risk.score);
    println!("level:      {}", risk.level);
    println!("created:    {}", risk.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("updated:    {}", risk.updated_at.format("%Y-%m-%d %H:%M:%S"));
}

fn print_risk_line(risk: &Risk) {
    println!(
        "{}  [{:>2}] {:<8} L{} S{}  {}",
        risk.id, risk.score, risk.level, risk.likelihood, risk.severity, risk.hazard
    );
}
