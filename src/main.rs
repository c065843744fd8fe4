use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pharmamoney::{dto, format, money, AmountInput, FormatOptions};

#[derive(Parser)]
#[command(about = "Naira amount formatting and cent arithmetic")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format a value for display using locale digit grouping
    Format(FormatArgs),

    /// Convert a naira amount such as "2,500.00" to cents
    ToCents(ValueArgs),

    /// Render cents as a two decimal naira amount
    Amount(ValueArgs),

    /// Total the amountCents of the line items in a YAML file
    Sum(SumArgs),
}

#[derive(Parser)]
struct ValueArgs {
    /// Value to convert; omitted values count as missing
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,
}

#[derive(Debug, Parser, Default)]
struct DisplayArgs {
    /// YAML file with locale and fraction digit settings
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Locale name such as en-NG
    #[arg(long = "locale")]
    pub locale: Option<String>,

    /// Minimum number of fraction digits
    #[arg(long = "min-fraction")]
    pub minimum_fraction_digits: Option<u8>,

    /// Maximum number of fraction digits
    #[arg(long = "max-fraction")]
    pub maximum_fraction_digits: Option<u8>,
}

impl DisplayArgs {
    pub fn to_format_options(&self) -> Result<FormatOptions> {
        let mut options = match &self.config {
            Some(path) => dto::load_format_options(path)
                .with_context(|| format!("Loading format options from {:?}", path))?,
            None => FormatOptions::default(),
        };

        if let Some(locale) = &self.locale {
            options = options.with_locale(locale);
        }
        if let Some(digits) = self.minimum_fraction_digits {
            options = options.with_minimum_fraction_digits(digits);
        }
        if let Some(digits) = self.maximum_fraction_digits {
            options = options.with_maximum_fraction_digits(digits);
        }

        Ok(options)
    }
}

#[derive(Parser)]
struct FormatArgs {
    #[command(flatten)]
    pub value: ValueArgs,

    #[command(flatten)]
    pub display: DisplayArgs,
}

#[derive(Parser)]
struct SumArgs {
    /// YAML file holding a list of line items
    pub lines: PathBuf,

    /// Print the total as a formatted naira amount instead of cents
    #[arg(long = "formatted", default_value = "false")]
    pub formatted: bool,

    #[command(flatten)]
    pub display: DisplayArgs,
}

fn load_lines(path: &Path) -> Result<Vec<pharmamoney::LineItem>> {
    dto::load_line_items(path).with_context(|| format!("Loading line items from {:?}", path))
}

fn run_command(command: Command) -> Result<()> {
    match command {
        Command::Format(args) => {
            let options = args.display.to_format_options()?;
            let value = AmountInput::from(args.value.value);
            println!("{}", format::format_money(value, &options));
        }
        Command::ToCents(args) => {
            println!("{}", money::to_cents(args.value));
        }
        Command::Amount(args) => {
            println!("{}", money::cents_to_amount_string(args.value));
        }
        Command::Sum(args) => {
            let lines = load_lines(&args.lines)?;
            let total = money::sum_cents(Some(&lines));

            if args.formatted {
                let options = args.display.to_format_options()?;
                println!("{}", format::format_money(total as f64 / 100.0, &options));
            } else {
                println!("{}", total);
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    run_command(args.command)
}
