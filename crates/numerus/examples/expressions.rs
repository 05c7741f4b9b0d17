//! Expression Building, Evaluation and Collapse
//!
//! Demonstrates lazy evaluation, definition-set guards, rounding modes and
//! the explicit collapse pass.
//!
//! Run with: RUST_LOG=debug cargo run -p numerus --example expressions

use numerus::prelude::*;
use numerus::simplify::CollapseStats;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("╔══════════════════════════════════════════════════╗");
    println!("║        Numerus: Expressions and Evaluation       ║");
    println!("╚══════════════════════════════════════════════════╝\n");

    example_1_lazy_evaluation()?;
    example_2_guards();
    example_3_rounding()?;
    example_4_collapse()?;

    Ok(())
}

fn example_1_lazy_evaluation() -> Result<()> {
    println!("── Example 1: lazy evaluation ──");

    let sum = Number::from(24).add_all([42, 66])?;
    let nested = Number::from(24).add(Number::addition([42, 66])?)?;
    println!("  {sum} = {}", sum.value()?);
    println!("  {nested} = {}", nested.value()?);
    println!("  same value: {}", sum.equals(&nested)?);

    let first = sum.result()?;
    let again = sum.result()?;
    println!("  memoized: {}\n", Number::ptr_eq(&first, &again));
    Ok(())
}

fn example_2_guards() {
    println!("── Example 2: definition-set guards ──");

    let attempts = [
        ("4 ÷ 0", Number::from(4).divide_by(0)),
        ("lb(0)", Number::from(0).binary_logarithm()),
        ("(-1)!", Number::from(-1).factorial()),
        ("asin(2)", Number::from(2).arc_sine()),
    ];
    for (label, attempt) in attempts {
        match attempt {
            Ok(number) => println!("  {label}: built {number}"),
            Err(err) => println!("  {label}: rejected ({err})"),
        }
    }
    println!();
}

fn example_3_rounding() -> Result<()> {
    println!("── Example 3: rounding modes ──");

    let tie = Number::try_from(42.5)?;
    for mode in [
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::HalfOdd,
    ] {
        let rounded = tie.round(0, mode)?;
        println!("  {rounded} = {}", rounded.value()?);
    }
    println!();
    Ok(())
}

fn example_4_collapse() -> Result<()> {
    println!("── Example 4: explicit collapse ──");

    let x = Number::from(7);
    let chains = [
        x.square_root()?.power(2)?,
        x.natural_logarithm()?.exponential()?,
        Number::from(0).subtract(&x)?.absolute()?.absolute()?,
        x.floor()?.ceil()?.add(0)?,
    ];

    let collapser = Collapser::new();
    for chain in &chains {
        match collapser.collapse_with_stats(chain) {
            Ok((collapsed, stats)) => report(chain, &collapsed, &stats),
            Err(err) => println!("  {chain}: {err}"),
        }
    }
    Ok(())
}

fn report(before: &Number, after: &Number, stats: &CollapseStats) {
    println!(
        "  {before}  →  {after}   ({} iterations, {} classes)",
        stats.iterations, stats.egraph_classes
    );
}
