// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

mod core;
mod infra;
mod ioc;
mod pong;

use crate::infra::cli;
use std::process::ExitCode;
use tikv_jemallocator::Jemalloc;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() -> ExitCode {
    cli::troubleshooting::setup_troubleshooting();

    let task = match cli::parsing::parse_arguments() {
        Ok(task) => task,
        Err(error) => {
            cli::feedback::report_invalid_arguments(&error);
            return ExitCode::FAILURE;
        },
    };

    let pong = ioc::create_pong();

    match pong.execute(task) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            cli::feedback::report_launch_failure(&failure);
            ExitCode::FAILURE
        },
    }
}
