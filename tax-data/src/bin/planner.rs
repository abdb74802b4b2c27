use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tax_core::engine::CallerId;
use tax_core::{NewTaxpayer, TaxEngine};
use tax_data::{SeedLoader, catalog};
use tax_store_memory::MemoryStore;
use tracing_subscriber::EnvFilter;

/// One-shot tax summary over the embedded 2023 schedules.
///
/// Seeds an in-memory engine, registers a taxpayer with the given
/// profile, records the income and above-the-line deduction amounts, and
/// prints the resulting summary plus the optimization strategies.
#[derive(Parser, Debug)]
#[command(name = "tax-plan")]
#[command(version, about, long_about = None)]
struct Args {
    /// Filing status code: 1 Single, 2 MarriedJoint, 3 MarriedSeparate,
    /// 4 HeadOfHousehold
    #[arg(short = 'f', long, default_value_t = 1)]
    filing_status: u8,

    /// Taxpayer age
    #[arg(short, long, default_value_t = 40)]
    age: u32,

    /// Number of dependents
    #[arg(long, default_value_t = 0)]
    dependents: u32,

    /// Tax year (2020 or later)
    #[arg(short = 'y', long, default_value_t = 2023)]
    tax_year: i32,

    /// Taxable income amount; repeat for multiple items
    #[arg(short = 'i', long = "income", required = true)]
    incomes: Vec<Decimal>,

    /// Above-the-line deduction amount; repeat for multiple items
    #[arg(short = 'd', long = "deduction")]
    deductions: Vec<Decimal>,
}

const OWNER: CallerId = 0;
const TAXPAYER: i64 = 1;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let engine = TaxEngine::new(Arc::new(MemoryStore::new()), OWNER);

    let brackets = catalog::brackets_2023().context("Failed to parse embedded bracket catalog")?;
    let deductions = catalog::standard_deductions_2023()
        .context("Failed to parse embedded deduction catalog")?;
    SeedLoader::load(&engine, OWNER, &brackets, &deductions)
        .context("Failed to seed the rate tables")?;

    engine
        .register_taxpayer(NewTaxpayer {
            id: TAXPAYER,
            filing_status: args.filing_status,
            age: args.age,
            dependents: args.dependents,
            tax_year: args.tax_year,
        })
        .context("Registration failed")?;

    for amount in &args.incomes {
        engine
            .add_income(TAXPAYER, *amount, "income", true)
            .with_context(|| format!("Failed to record income of {amount}"))?;
    }
    for amount in &args.deductions {
        engine
            .add_deduction(TAXPAYER, *amount, "above-line", true)
            .with_context(|| format!("Failed to record deduction of {amount}"))?;
    }

    let summary = engine
        .get_tax_summary(TAXPAYER)
        .context("Failed to compute the tax summary")?;

    println!("Adjusted gross income:  {}", summary.agi);
    println!("Tax liability:          {}", summary.tax_liability);
    println!("Marginal cost / $1000:  {}", summary.marginal_rate);
    println!();
    println!("Optimization strategies:");

    let strategies = engine
        .generate_optimization_strategies(TAXPAYER)
        .context("Failed to generate optimization strategies")?;
    for strategy in strategies {
        println!(
            "  [{}] {} (complexity {}): estimated savings {}",
            strategy.id, strategy.name, strategy.complexity_level, strategy.potential_savings
        );
    }

    Ok(())
}
