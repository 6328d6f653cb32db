use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};
use tracing_subscriber::EnvFilter;

use ledger_report::config::{config_dir, load_config, Config, CONFIG_TEMPLATE};
use ledger_report::error::{ReportError, Result};
use ledger_report::ledger::{DateRange, HttpLedger, KeyPart, ReportType};
use ledger_report::report::{self, format_money, DueRow, ReportRow, Total};
use ledger_report::RequestContext;

#[derive(Parser)]
#[command(name = "ledger-report")]
#[command(version, about = "Financial statements from the ERP ledger backend", long_about = None)]
struct Cli {
    /// Path to config directory (default: ~/.ledger-report or XDG config)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    /// Log requests and intermediate results to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with a template config.toml
    Init,

    /// Show backend, context and account-head configuration
    Status,

    /// Print the balance sheet for a period
    BalanceSheet {
        #[command(flatten)]
        period: PeriodArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the income statement for a period
    IncomeStatement {
        #[command(flatten)]
        period: PeriodArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List invoices with an outstanding balance
    Receivables {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct PeriodArgs {
    /// Period start (YYYY-MM-DD, default: 1 January of this year)
    #[arg(long)]
    from: Option<String>,

    /// Period end (YYYY-MM-DD, default: today)
    #[arg(long)]
    to: Option<String>,
}

#[derive(Args)]
struct OutputArgs {
    /// Print rows as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Company id for this run (overrides config.toml)
    #[arg(long)]
    company: Option<u64>,

    /// User id for this run (overrides config.toml)
    #[arg(long)]
    user: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "ledger_report=debug"
    } else {
        "ledger_report=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    // Determine config directory
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Status => cmd_status(&cfg_dir),
        Commands::BalanceSheet { period, output } => cmd_balance_sheet(&cfg_dir, &period, &output),
        Commands::IncomeStatement { period, output } => {
            cmd_income_statement(&cfg_dir, &period, &output)
        }
        Commands::Receivables { output } => cmd_receivables(&cfg_dir, &output),
    }
}

/// Initialize config directory with template files
fn cmd_init(cfg_dir: &Path) -> Result<()> {
    use std::fs;

    if cfg_dir.exists() {
        return Err(ReportError::AlreadyInitialized(cfg_dir.to_path_buf()));
    }

    fs::create_dir_all(cfg_dir)?;
    fs::write(cfg_dir.join("config.toml"), CONFIG_TEMPLATE)?;

    println!("Initialized ledger-report config at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Point it at your backend:   $EDITOR {}/config.toml",
        cfg_dir.display()
    );
    println!("  2. Check the account heads:    ledger-report status");
    println!();
    println!("Then print your first report:");
    println!("  ledger-report balance-sheet --from 2026-01-01 --to 2026-12-31");

    Ok(())
}

/// Show the active configuration
fn cmd_status(cfg_dir: &Path) -> Result<()> {
    let config = load_config(cfg_dir)?;
    let today = chrono::Local::now().date_naive();
    let period = DateRange::year_to_date(today);

    println!("Ledger Report Status");
    println!("{}", "-".repeat(50));
    println!("Config directory: {}", cfg_dir.display());
    println!("Backend:          {}", config.backend.trimmed_base_url());
    println!(
        "API token:        {}",
        if config.backend.token.is_some() {
            "configured"
        } else {
            "none"
        }
    );
    println!("Company:          {}", format_id(config.context.company_id));
    println!("User:             {}", format_id(config.context.user_id));
    println!(
        "Default period:   {} to {}",
        period.start_param(),
        period.end_param()
    );

    println!();
    println!("Account heads:");
    for report_type in ReportType::BALANCE_SHEET
        .iter()
        .chain(ReportType::INCOME_STATEMENT.iter())
    {
        let group = config.heads.group(*report_type);
        println!(
            "  {:<20} account={} sub_account={}",
            report_type.segment(),
            group.account,
            group.sub_account
        );
    }

    Ok(())
}

fn format_id(id: Option<u64>) -> String {
    id.map_or_else(|| "-".to_string(), |id| id.to_string())
}

fn request_context(config: &Config, output: &OutputArgs) -> RequestContext {
    config.context.with_overrides(output.user, output.company)
}

fn parse_period(period: &PeriodArgs) -> Result<DateRange> {
    let today = chrono::Local::now().date_naive();
    DateRange::from_args(period.from.as_deref(), period.to.as_deref(), today)
}

fn cmd_balance_sheet(cfg_dir: &Path, period: &PeriodArgs, output: &OutputArgs) -> Result<()> {
    let config = load_config(cfg_dir)?;
    let range = parse_period(period)?;
    let ctx = request_context(&config, output);
    let source = HttpLedger::new(&config.backend);

    let sheet = report::balance_sheet(&source, &config.heads, &range, &ctx);

    if output.json {
        return print_json(&sheet.rows);
    }

    println!("Balance Sheet");
    println!("Period: {} to {}", range.start_param(), range.end_param());
    println!(
        "{}",
        statement_table(&sheet.rows, &config.report.currency_symbol)
    );
    Ok(())
}

fn cmd_income_statement(cfg_dir: &Path, period: &PeriodArgs, output: &OutputArgs) -> Result<()> {
    let config = load_config(cfg_dir)?;
    let range = parse_period(period)?;
    let ctx = request_context(&config, output);
    let source = HttpLedger::new(&config.backend);

    let statement = report::income_statement(&source, &config.heads, &range, &ctx);

    if output.json {
        return print_json(&statement.rows);
    }

    println!("Income Statement");
    println!("Period: {} to {}", range.start_param(), range.end_param());
    println!(
        "{}",
        statement_table(&statement.rows, &config.report.currency_symbol)
    );
    Ok(())
}

fn cmd_receivables(cfg_dir: &Path, output: &OutputArgs) -> Result<()> {
    let config = load_config(cfg_dir)?;
    let ctx = request_context(&config, output);
    let source = HttpLedger::new(&config.backend);

    let rows = report::receivables(&source, &ctx);

    if output.json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("No outstanding receivables.");
        return Ok(());
    }

    let symbol = &config.report.currency_symbol;
    let outstanding: f64 = rows.iter().map(|r| r.due_amount).sum();
    println!("{}", receivables_table(&rows, symbol));
    println!();
    println!(
        "Outstanding: {} across {} invoice(s)",
        format_money(outstanding, symbol),
        rows.len()
    );
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        ReportError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })?;
    println!("{json}");
    Ok(())
}

// Table row structs for tabled
#[derive(Tabled)]
struct StatementLine {
    #[tabled(rename = "DETAILS")]
    details: String,
    #[tabled(rename = "DEBIT")]
    debit: String,
    #[tabled(rename = "CREDIT")]
    credit: String,
    #[tabled(rename = "TOTAL")]
    total: String,
}

#[derive(Tabled)]
struct ReceivableLine {
    #[tabled(rename = "INVOICE")]
    invoice: String,
    #[tabled(rename = "CLIENT")]
    client: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
    #[tabled(rename = "DUE")]
    due: String,
}

fn statement_table(rows: &[ReportRow], currency_symbol: &str) -> String {
    let money = |value: Option<f64>| {
        value
            .map(|v| format_money(v, currency_symbol))
            .unwrap_or_default()
    };

    let lines: Vec<StatementLine> = rows
        .iter()
        .map(|row| StatementLine {
            details: if row.is_heading {
                row.details.to_uppercase()
            } else if row.total.is_some() {
                row.details.clone()
            } else {
                format!("  {}", row.details)
            },
            debit: money(row.amount1),
            credit: money(row.amount2),
            total: match &row.total {
                Some(Total::Amount(value)) => format_money(*value, currency_symbol),
                Some(Total::Formatted(text)) => text.clone(),
                None => String::new(),
            },
        })
        .collect();

    Table::new(lines).with(Style::rounded()).to_string()
}

fn receivables_table(rows: &[DueRow], currency_symbol: &str) -> String {
    let part = |value: &Option<KeyPart>| {
        value
            .as_ref()
            .map_or_else(|| "-".to_string(), |p| p.to_string())
    };

    let lines: Vec<ReceivableLine> = rows
        .iter()
        .map(|row| ReceivableLine {
            invoice: part(&row.entry.invoice),
            client: part(&row.entry.client),
            amount: format_money(row.entry.amount, currency_symbol),
            due: format_money(row.due_amount, currency_symbol),
        })
        .collect();

    Table::new(lines).with(Style::rounded()).to_string()
}
