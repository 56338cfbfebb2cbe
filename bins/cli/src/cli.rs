//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use costline_shared::types::{LineId, ProductId};
use rust_decimal::Decimal;

/// Costs production reports against a factory snapshot.
#[derive(Parser, Debug)]
#[command(name = "costline", version, about)]
pub struct Cli {
    /// Snapshot JSON file (defaults to `input.snapshot_path` from configuration)
    #[arg(long, short = 's', global = true, env = "COSTLINE_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Base hourly rate, overriding the snapshot's labor settings
    #[arg(long, global = true)]
    pub hourly_rate: Option<Decimal>,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text columns.
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Costing operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Labor and indirect cost of every line for one day
    Lines(DayArgs),
    /// Labor and indirect cost of every product for one day
    Products(DayArgs),
    /// Cost of every report in a date range
    Reports(RangeArgs),
    /// Quantity-weighted average cost of a product
    Average(ProductArgs),
    /// Cost of a product per production line
    ByLine(ProductArgs),
    /// Cost-per-unit of a product per date
    History(ProductArgs),
    /// Cost per line per date
    Chart(ChartArgs),
    /// Preview the cost of a report before saving it
    Estimate(EstimateArgs),
    /// Whether a product's cost-per-unit is rising or falling
    Trend(TrendArgs),
}

/// A single production day.
#[derive(Args, Debug)]
pub struct DayArgs {
    /// Production date (YYYY-MM-DD)
    #[arg(long, short = 'd')]
    pub date: NaiveDate,
}

/// An inclusive date range; either end may be open.
#[derive(Args, Debug, Default)]
pub struct RangeArgs {
    /// First date included
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last date included
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

/// A product over a date range.
#[derive(Args, Debug)]
pub struct ProductArgs {
    /// Product ID
    #[arg(long, short = 'p')]
    pub product: ProductId,

    #[command(flatten)]
    pub range: RangeArgs,
}

/// Chart selection.
#[derive(Args, Debug)]
pub struct ChartArgs {
    /// Only this line
    #[arg(long, short = 'l')]
    pub line: Option<LineId>,

    /// Only this product
    #[arg(long, short = 'p')]
    pub product: Option<ProductId>,

    #[command(flatten)]
    pub range: RangeArgs,
}

/// Unsaved report values.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Line the report is for
    #[arg(long, short = 'l')]
    pub line: LineId,

    /// Report date; the current month is used when absent
    #[arg(long, short = 'd')]
    pub date: Option<NaiveDate>,

    /// Workers on the shift
    #[arg(long)]
    pub workers: Decimal,

    /// Hours worked per worker
    #[arg(long)]
    pub hours: Decimal,

    /// Units produced
    #[arg(long)]
    pub quantity: Decimal,

    /// Supervisor's own hourly rate
    #[arg(long)]
    pub supervisor_rate: Option<Decimal>,
}

/// Trend over a product's history.
#[derive(Args, Debug)]
pub struct TrendArgs {
    #[command(flatten)]
    pub product: ProductArgs,

    /// Change (percent) under which the trend counts as stable
    #[arg(long)]
    pub threshold: Option<Decimal>,
}
