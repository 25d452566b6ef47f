use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use dashboard_client::{Dashboard, FetchError, HttpPatientSource, PatientSource, SelectionOutcome};
use dashboard_core::{filter_roster, DashboardConfig, PatientView};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "dashboard-cli",
    about = "Inspect patient dashboard data from the API or a local JSON file."
)]
struct Args {
    /// Read the patient list from this JSON file instead of the API.
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    #[arg(long, env = "DASHBOARD_API_URL", global = true)]
    base_url: Option<String>,

    #[arg(long, env = "DASHBOARD_API_USERNAME", global = true)]
    username: Option<String>,

    #[arg(long, env = "DASHBOARD_API_PASSWORD", global = true, hide_env_values = true)]
    password: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, env = "DASHBOARD_API_TIMEOUT", global = true)]
    timeout_secs: Option<u64>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List patients, optionally filtered by name.
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show the dashboard for one patient.
    Show {
        /// Patient name; defaults to the configured default patient.
        name: Option<String>,
        /// Print the view model as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Check that the API answers.
    Check,
}

impl Args {
    fn config(&self) -> DashboardConfig {
        let mut config = DashboardConfig::default();
        if let Some(url) = &self.base_url {
            config.api_base_url = url.clone();
        }
        if let Some(username) = &self.username {
            config.api_username = username.clone();
        }
        if let Some(password) = &self.password {
            config.api_password = password.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            config.request_timeout_secs = timeout;
        }
        config
    }
}

/// Serves a patient list read from disk.
struct FileSource {
    raw: Value,
}

#[async_trait]
impl PatientSource for FileSource {
    async fn fetch_all_patients(&self) -> Result<Value, FetchError> {
        Ok(self.raw.clone())
    }

    async fn fetch_patient(&self, _id: &str) -> Result<Option<Value>, FetchError> {
        Ok(None)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.config();
    match &args.input {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?;
            let raw = dashboard_payload::parse_payload(&data)
                .with_context(|| format!("{} is not a patient payload", path.display()))?;
            debug!(path = %path.display(), "using local patient file");
            run(Dashboard::new(FileSource { raw }, config), &args.command).await
        }
        None => {
            let source = HttpPatientSource::new(config.clone())
                .context("invalid API configuration")?;
            run(Dashboard::new(source, config), &args.command).await
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run<S: PatientSource>(dashboard: Dashboard<S>, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::List { search } => {
            let roster = dashboard.roster().await;
            for summary in filter_roster(&roster, search.as_deref().unwrap_or_default()) {
                println!("{}\t{}, {}", summary.name, summary.gender, summary.age);
            }
        }
        Command::Show { name, json } => {
            let outcome = match name {
                Some(name) => dashboard.select_patient(name).await,
                None => dashboard.select_default_patient().await,
            };
            if let SelectionOutcome::Superseded = outcome {
                anyhow::bail!("selection was superseded");
            }
            let view = dashboard.current_view().await;
            if *json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_view(&view);
            }
        }
        Command::Check => {
            if dashboard.check_connection().await {
                println!("API reachable");
            } else {
                anyhow::bail!("API unreachable");
            }
        }
    }
    Ok(())
}

fn print_view(view: &PatientView) {
    let profile = &view.profile;
    println!("{} ({}, {})", profile.name, profile.gender, profile.age);
    println!("Date of birth: {}", profile.date_of_birth);
    println!("Contact: {}", profile.phone_number);
    println!("Emergency contact: {}", profile.emergency_contact);
    println!("Insurance: {}", profile.insurance_type);

    println!();
    for card in &view.metric_cards {
        println!(
            "{}: {} {} ({})",
            card.label, card.display_value, card.unit, card.status_label
        );
    }

    let chart = &view.blood_pressure;
    println!();
    println!(
        "Blood pressure: {} {} | {} {}",
        chart.systolic.value,
        chart.systolic.trend_label,
        chart.diastolic.value,
        chart.diastolic.trend_label
    );
    for point in &chart.points {
        println!("  {:<8}{:>6} / {}", point.label, point.systolic, point.diastolic);
    }

    if !view.diagnostics.is_empty() {
        println!();
        for row in &view.diagnostics {
            println!("{}\t{}\t{}", row.problem, row.status, row.description);
        }
    }

    println!();
    for test in &view.lab_results {
        println!("Lab: {}", test.name);
    }
}
