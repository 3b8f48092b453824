//! # Business Marts Storefront Entry Point
//!
//! Parses arguments and runs one ordering session. The setup lives in
//! lib.rs so it can be tested.

use std::process::ExitCode;

use clap::Parser;

use marts_storefront_lib::cli::Cli;

fn main() -> ExitCode {
    marts_storefront_lib::init_tracing();

    match marts_storefront_lib::run(Cli::parse()) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            match &err.notification {
                Some(notification) => eprintln!("{}", notification),
                None => eprintln!("{}", err),
            }
            ExitCode::FAILURE
        }
    }
}
