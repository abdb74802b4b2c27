//! End-to-end tests: seed the embedded 2023 catalog into an engine over
//! the in-memory store, then exercise the full operation surface.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_core::engine::CallerId;
use tax_core::{EngineError, FilingStatus, NewTaxpayer, TaxEngine};
use tax_data::{SeedLoader, catalog};
use tax_store_memory::MemoryStore;

const OWNER: CallerId = 10;

fn seeded_engine() -> TaxEngine {
    let engine = TaxEngine::new(Arc::new(MemoryStore::new()), OWNER);
    let brackets = catalog::brackets_2023().expect("embedded catalog should parse");
    let deductions = catalog::standard_deductions_2023().expect("embedded catalog should parse");
    SeedLoader::load(&engine, OWNER, &brackets, &deductions).expect("seeding should succeed");
    engine
}

fn register_single_filer(engine: &TaxEngine) -> i64 {
    let id = 1;
    engine
        .register_taxpayer(NewTaxpayer {
            id,
            filing_status: 1,
            age: 30,
            dependents: 0,
            tax_year: 2023,
        })
        .expect("registration should succeed");
    engine
        .add_income(id, dec!(60000), "salary", true)
        .expect("income should record");
    engine
        .add_deduction(id, dec!(5000), "ira", true)
        .expect("deduction should record");
    id
}

#[test]
fn catalog_seeds_eleven_rows() {
    let engine = TaxEngine::new(Arc::new(MemoryStore::new()), OWNER);
    let brackets = catalog::brackets_2023().expect("embedded catalog should parse");
    let deductions = catalog::standard_deductions_2023().expect("embedded catalog should parse");

    let seeded =
        SeedLoader::load(&engine, OWNER, &brackets, &deductions).expect("seeding should succeed");

    // 7 bracket rows + 4 deduction rows.
    assert_eq!(seeded, 11);
}

#[test]
fn loading_twice_converges() {
    let engine = seeded_engine();
    let brackets = catalog::brackets_2023().expect("embedded catalog should parse");
    let deductions = catalog::standard_deductions_2023().expect("embedded catalog should parse");

    SeedLoader::load(&engine, OWNER, &brackets, &deductions).expect("re-seeding should succeed");

    assert_eq!(
        engine.calculate_tax_from_brackets(dec!(10000), FilingStatus::Single),
        Ok(dec!(1000))
    );
}

#[test]
fn bracket_tax_matches_the_documented_oracle() {
    let engine = seeded_engine();

    assert_eq!(
        engine.calculate_tax_from_brackets(dec!(0), FilingStatus::Single),
        Ok(dec!(0))
    );
    assert_eq!(
        engine.calculate_tax_from_brackets(dec!(10000), FilingStatus::Single),
        Ok(dec!(1000))
    );
    // 11000 × 10% + 39000 × 12% = 5780.
    assert_eq!(
        engine.calculate_tax_from_brackets(dec!(50000), FilingStatus::Single),
        Ok(dec!(5780))
    );
}

#[test]
fn standard_deductions_match_the_documented_oracle() {
    let engine = seeded_engine();

    assert_eq!(
        engine.get_standard_deduction(FilingStatus::Single, 40),
        Ok(dec!(13850))
    );
    assert_eq!(
        engine.get_standard_deduction(FilingStatus::Single, 65),
        Ok(dec!(14700))
    );
    assert_eq!(
        engine.get_standard_deduction(FilingStatus::MarriedJoint, 40),
        Ok(dec!(27700))
    );
    assert_eq!(
        engine.get_standard_deduction(FilingStatus::MarriedJoint, 70),
        Ok(dec!(28700))
    );
    // Fallback for the statuses with no explicit rows.
    assert_eq!(
        engine.get_standard_deduction(FilingStatus::MarriedSeparate, 40),
        Ok(dec!(13850))
    );
    assert_eq!(
        engine.get_standard_deduction(FilingStatus::HeadOfHousehold, 80),
        Ok(dec!(13850))
    );
}

#[test]
fn gap_statuses_surface_the_recoverable_bracket_error() {
    let engine = seeded_engine();

    assert_eq!(
        engine.calculate_tax_from_brackets(dec!(50000), FilingStatus::MarriedSeparate),
        Err(EngineError::BracketNotFound {
            status: FilingStatus::MarriedSeparate,
        })
    );
}

#[test]
fn single_filer_summary_over_the_catalog() {
    let engine = seeded_engine();
    let id = register_single_filer(&engine);

    let summary = engine.get_tax_summary(id).expect("summary should compose");

    // AGI 60000 - 5000 = 55000; taxable 41150 → 1100 + 30150 × 12% = 4718;
    // marginal: tax(56000) = 6500, minus 4718.
    assert_eq!(summary.agi, dec!(55000));
    assert_eq!(summary.tax_liability, dec!(4718));
    assert_eq!(summary.marginal_rate, dec!(1782));
}

#[test]
fn married_joint_liability_over_the_catalog() {
    let engine = seeded_engine();
    engine
        .register_taxpayer(NewTaxpayer {
            id: 2,
            filing_status: 2,
            age: 45,
            dependents: 2,
            tax_year: 2023,
        })
        .expect("registration should succeed");
    engine
        .add_income(2, dec!(100000), "salary", true)
        .expect("income should record");

    // Taxable 100000 - 27700 = 72300: 2200 + 50300 × 12% = 8236.
    assert_eq!(engine.calculate_tax_liability(2), Ok(dec!(8236)));
}

#[test]
fn income_above_the_top_band_is_truncated_by_default() {
    let engine = seeded_engine();

    let at_top = engine
        .calculate_tax_from_brackets(dec!(300000), FilingStatus::Single)
        .expect("schedule is seeded");
    let above_top = engine
        .calculate_tax_from_brackets(dec!(350000), FilingStatus::Single)
        .expect("schedule is seeded");

    assert_eq!(at_top, above_top);
}

#[test]
fn strategies_over_the_catalog() {
    let engine = seeded_engine();
    let id = register_single_filer(&engine);

    let strategies = engine
        .generate_optimization_strategies(id)
        .expect("generation should succeed");

    // marginal 1782: floor(22500 × 1782 / 10000) and friends.
    assert_eq!(strategies.len(), 3);
    assert_eq!(strategies[0].potential_savings, dec!(4009));
    assert_eq!(strategies[1].potential_savings, dec!(891));
    assert_eq!(strategies[2].potential_savings, dec!(356));

    let retirement = engine
        .get_optimization_strategy(id, 1)
        .expect("taxpayer is registered")
        .expect("strategy 1 was generated");
    assert_eq!(retirement.name, "Maximize 401k Contributions");
    assert!(retirement.is_legal);
}

#[test]
fn seeding_through_the_loader_respects_ownership() {
    let engine = TaxEngine::new(Arc::new(MemoryStore::new()), OWNER);
    let brackets = catalog::brackets_2023().expect("embedded catalog should parse");

    let err = SeedLoader::load(&engine, OWNER + 1, &brackets, &[])
        .expect_err("non-owner must be rejected");

    assert!(matches!(
        err,
        tax_data::SeedLoaderError::Engine(EngineError::Unauthorized)
    ));
}
