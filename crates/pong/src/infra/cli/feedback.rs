// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

use crate::core::models::{GameError, GameSettings, LaunchFailure, WindowSize};
use crate::infra::game;
use console::style;

pub fn report_invalid_arguments(error: &anyhow::Error) {
    eprintln!("{} : {}", style("Invalid arguments").red().bold(), error);
}

pub fn report_window_size_fallback(raw: &[String]) {
    println!(
        "{} : invalid window size '{}', dimensions must be positive numbers. Using default {}.",
        style("Warning").yellow().bold(),
        raw.join(" "),
        WindowSize::default()
    );
}

pub fn report_cleaning_started() {
    println!("Cleaning temporary files ...");
}

pub fn report_cleaning_finished(removed: usize) {
    println!("Cleaning complete : {} files removed", removed);
}

pub fn report_game_starting(settings: &GameSettings) {
    let mode = if settings.fullscreen { ", fullscreen" } else { "" };
    println!(
        "Starting game (difficulty : {}, window : {}{})",
        style(settings.difficulty).cyan(),
        settings.size,
        mode
    );
}

pub fn report_game_finished() {
    println!("Game finished normally.");
}

pub fn report_launch_failure(failure: &LaunchFailure) {
    match failure {
        LaunchFailure::Cleanup(error) => {
            eprintln!("{} : {}", style("Cleaning failed").red().bold(), error);
        },
        LaunchFailure::Game(error) => {
            eprintln!("{} : {}", style("Game session failed").red().bold(), error);

            if let GameError::EngineNotFound { .. } = error {
                eprintln!(
                    "Point {} to the game engine executable and try again.",
                    style(game::PONG_ENGINE_ENV).bold()
                );
            }
        },
    }
}
