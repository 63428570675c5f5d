//! Demonstration driver for the argtype engine.
//!
//! Declares a small fixed argument set, parses the real process argv, and
//! prints the typed results. The integration tests drive this binary to
//! observe process-boundary behavior: help on stdout with exit 0, fatal
//! diagnostics on stderr with exit 1, non-fatal diagnostics on stderr
//! without terminating.

use anyhow::{Context, Result};
use argtype::{run, usage, ArgKind, ArgType, Registry};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut registry = Registry::new("argtype-demo");
    registry
        .declare(
            "number",
            ArgKind::Positional,
            true,
            "A number to echo back",
            ArgType::Int,
            "",
        )
        .context("declaring number")?;
    registry
        .declare(
            "--name",
            ArgKind::Optional,
            false,
            "A name to greet",
            ArgType::String,
            "world",
        )
        .context("declaring --name")?;
    registry
        .declare("--count", ArgKind::Optional, false, "Echo repetitions", ArgType::Int, "1")
        .context("declaring --count")?;
    registry
        .declare("--ratio", ArgKind::Optional, false, "A scaling ratio", ArgType::Double, "1.0")
        .context("declaring --ratio")?;
    registry
        .declare(
            "--verbose",
            ArgKind::Optional,
            false,
            "Dump the declarations",
            ArgType::Bool,
            "false",
        )
        .context("declaring --verbose")?;

    let tokens: Vec<String> = std::env::args().skip(1).collect();
    run(&mut registry, &tokens);

    let number: i64 = registry.get("number").context("reading number")?;
    let name: String = registry.get("--name").context("reading --name")?;
    let ratio: f64 = registry.get("--ratio").context("reading --ratio")?;
    let verbose: bool = registry.get("--verbose").context("reading --verbose")?;
    // A mistyped flag-style `--count` is non-fatal; fall back to one echo.
    let count: i64 = registry.get("--count").unwrap_or(1);

    if verbose {
        println!("{}", usage::render_json(&registry)?);
    }
    for _ in 0..count {
        println!("number={}", number);
    }
    println!("name={}", name);
    println!("ratio={}", ratio);
    Ok(())
}
