// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::models::{Difficulty, GameSettings, WindowSize};
use crate::infra::cli::feedback;
use crate::pong::PongTask;
use clap::Parser;
use std::str::FromStr;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = false)]
struct CliParser {
    /// Remove temporary files left behind by previous game sessions
    #[arg(short, long)]
    clean: bool,

    /// Start the game in fullscreen mode
    #[arg(short, long)]
    fullscreen: bool,

    /// AI difficulty, one of : easy, medium, hard
    #[arg(short, long, default_value = "medium")]
    difficulty: String,

    /// Window dimensions
    #[arg(short, long, num_args = 2, allow_hyphen_values = true, value_names = ["WIDTH", "HEIGHT"], default_values = ["800", "600"])]
    size: Vec<String>,
}

pub fn parse_arguments() -> anyhow::Result<PongTask> {
    build_task(CliParser::parse())
}

fn build_task(cli: CliParser) -> anyhow::Result<PongTask> {
    // Difficulty is fatal on mismatch, window size degrades to the default.
    let difficulty = Difficulty::from_str(&cli.difficulty)?;
    let size = checked_window_size(&cli.size);

    let task = if cli.clean {
        PongTask::CleanTemporaryFiles
    } else {
        PongTask::RunGame(GameSettings {
            fullscreen: cli.fullscreen,
            difficulty,
            size,
        })
    };

    Ok(task)
}

fn checked_window_size(raw: &[String]) -> WindowSize {
    let dimensions = raw.first().zip(raw.get(1)).and_then(|(width, height)| {
        Some(WindowSize::new(
            positive_dimension(width)?,
            positive_dimension(height)?,
        ))
    });

    match dimensions {
        Some(size) => size,
        None => {
            feedback::report_window_size_fallback(raw);
            WindowSize::default()
        },
    }
}

fn positive_dimension(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|parsed| *parsed > 0)
}
