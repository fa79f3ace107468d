//! Command-line front end: one invocation logs one message.
//!
//! Usage:
//!   patlog [OPTIONS] <LEVEL> <MESSAGE>...
//!
//! Examples:
//!   patlog info "service started"
//!   patlog --profile verbose --color red error "disk full"
//!   patlog --sub 0='>>' --pattern '&us0&lev&sep&msg&end' always hello

use clap::Parser;
use patlog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    run(Cli::parse())
}
