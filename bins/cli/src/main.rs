//! Costline command-line tool
//!
//! Loads a factory snapshot (cost centers, monthly values, allocations,
//! production reports and labor settings) and runs one costing operation.

mod cli;
mod render;
mod snapshot;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use costline_core::CostContext;
use costline_core::calendar::month_key;
use costline_core::costing::{
    ChartFilter, LiveEstimateInput, cost_chart, line_cost_snapshots, live_estimate,
    product_average_cost, product_cost_by_line, product_cost_history, product_cost_snapshots,
    report_costs, trend_direction,
};
use costline_shared::{AppConfig, AppError};

use cli::{Cli, Command};
use render::render;
use snapshot::Snapshot;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            error!(error = %err, "costline failed");
            eprintln!("error: {err:#}");
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    // Load configuration
    let config = AppConfig::load().map_err(AppError::from)?;

    // Initialize tracing; stdout carries results only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = cli
        .snapshot
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.input.snapshot_path));
    let snapshot = Snapshot::load(&path)?;

    let book = snapshot.book();
    let overrides = snapshot.rate_overrides();
    let hourly_rate = snapshot.hourly_rate(cli.hourly_rate, config.costing.default_hourly_rate);
    let ctx = CostContext::with_hourly_rate(&book, hourly_rate).with_overrides(&overrides);
    let currency = config.costing.currency_symbol.as_str();
    debug!(%hourly_rate, overrides = overrides.len(), "costing context ready");

    match &cli.command {
        Command::Lines(args) => {
            let reports = snapshot.reports_on(args.date);
            let lines = snapshot.line_ids();
            let costs = line_cost_snapshots(&lines, &reports, &month_key(args.date), &ctx);
            render(cli.format, &costs, || {
                render::breakdown_table("line", &costs, currency)
            })
        }
        Command::Products(args) => {
            let reports = snapshot.reports_on(args.date);
            let products = snapshot.product_ids();
            let costs = product_cost_snapshots(&products, &reports, &month_key(args.date), &ctx);
            render(cli.format, &costs, || {
                render::breakdown_table("product", &costs, currency)
            })
        }
        Command::Reports(range) => {
            let reports = snapshot.reports_between(range.from, range.to);
            let costs = report_costs(&reports, &ctx);
            render(cli.format, &costs, || {
                render::report_costs_table(&costs, currency)
            })
        }
        Command::Average(args) => {
            snapshot.require_product(&args.product)?;
            let reports = snapshot.reports_between(args.range.from, args.range.to);
            let average = product_average_cost(&args.product, &reports, &ctx);
            render(cli.format, &average, || {
                render::breakdown_table("product", [(&args.product, &average)], currency)
            })
        }
        Command::ByLine(args) => {
            snapshot.require_product(&args.product)?;
            let reports = snapshot.reports_between(args.range.from, args.range.to);
            let rows = product_cost_by_line(&args.product, &reports, &ctx, |line| {
                snapshot.line_name(line)
            });
            render(cli.format, &rows, || render::line_rows_table(&rows, currency))
        }
        Command::History(args) => {
            snapshot.require_product(&args.product)?;
            let reports = snapshot.reports_between(args.range.from, args.range.to);
            let history = product_cost_history(&args.product, &reports, &ctx);
            render(cli.format, &history, || {
                render::history_table(&history, currency)
            })
        }
        Command::Chart(args) => {
            let filter = ChartFilter {
                line_id: args.line.clone(),
                product_id: args.product.clone(),
                from: args.range.from,
                to: args.range.to,
            };
            let points = cost_chart(&snapshot.production_reports, &filter, &ctx);
            render(cli.format, &points, || render::chart_table(&points, currency))
        }
        Command::Estimate(args) => {
            let input = LiveEstimateInput {
                line_id: args.line.clone(),
                report_date: args.date,
                workers_count: args.workers,
                work_hours: args.hours,
                quantity_produced: args.quantity,
                hourly_rate,
                supervisor_rate: args.supervisor_rate,
            };
            let estimate = live_estimate(&input, &book);
            render(cli.format, &estimate, || {
                render::estimate_table(&estimate, currency)
            })
        }
        Command::Trend(args) => {
            let product = &args.product;
            snapshot.require_product(&product.product)?;
            let reports = snapshot.reports_between(product.range.from, product.range.to);
            let history = product_cost_history(&product.product, &reports, &ctx);
            let threshold = args
                .threshold
                .unwrap_or(config.costing.trend_threshold_percent);
            let trend = trend_direction(&history, threshold);
            render(cli.format, &trend, || render::trend_table(&trend, currency))
        }
    }
}
