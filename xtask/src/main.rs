//! Development automation for the PetMatch workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! Output goes straight to the terminal, so `println!` and `eprintln!` are
//! used here instead of tracing.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::{Command, ExitCode};

use anyhow::{bail, Context};

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("test") => run_test(),
        Some("audit") => run_audit(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow::anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("PetMatch Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci        Run fmt, clippy, and test, then audit if cargo-audit is installed");
    println!("    fmt       Check Rust code formatting");
    println!("    clippy    Run Clippy lints on all targets");
    println!("    test      Run all workspace tests");
    println!("    audit     Audit dependencies for security vulnerabilities");
    println!("    help      Show this help message");
}

fn run_ci() -> anyhow::Result<()> {
    println!("==> Step 1/4: Checking Rust format...");
    run_fmt()?;

    println!("\n==> Step 2/4: Running Clippy...");
    run_clippy()?;

    println!("\n==> Step 3/4: Running tests...");
    run_test()?;

    println!("\n==> Step 4/4: Auditing dependencies...");
    if tool_available("audit") {
        run_audit()?;
    } else {
        println!("cargo-audit not installed, skipping");
    }

    println!("\n✓ All CI checks passed!");
    Ok(())
}

fn run_fmt() -> anyhow::Result<()> {
    cargo(&["fmt", "--all", "--", "--check"])
        .context("Format check failed. Run 'cargo fmt --all' to fix.")
}

fn run_clippy() -> anyhow::Result<()> {
    cargo(&["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])
        .context("Clippy reported problems")
}

fn run_test() -> anyhow::Result<()> {
    cargo(&["test", "--workspace"]).context("Tests failed")
}

fn run_audit() -> anyhow::Result<()> {
    if !tool_available("audit") {
        eprintln!("Install it with: cargo install cargo-audit");
        bail!("cargo-audit not found");
    }
    cargo(&["audit"]).context("cargo-audit found vulnerabilities")
}

/// Whether `cargo <subcommand> --version` runs.
fn tool_available(subcommand: &str) -> bool {
    Command::new("cargo")
        .args([subcommand, "--version"])
        .output()
        .is_ok_and(|output| output.status.success())
}

fn cargo(args: &[&str]) -> anyhow::Result<()> {
    let status = Command::new("cargo").args(args).status().context("failed to spawn cargo")?;
    if !status.success() {
        bail!("`cargo {}` exited with {status}", args.join(" "));
    }
    Ok(())
}
