// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

pub(crate) mod cleaner;

use crate::core::interfaces::{GameSession, GraphicsStack};
use crate::core::models::{CleanupError, GameSettings, LaunchFailure};
use crate::infra::cli::feedback;
use cleaner::PongCleaner;

#[derive(Debug, PartialEq)]
pub enum PongTask {
    CleanTemporaryFiles,
    RunGame(GameSettings),
}

pub struct Pong<S, G>
where
    S: GameSession,
    G: GraphicsStack,
{
    cleaner: Option<PongCleaner>,
    session: S,
    graphics: G,
}

impl<S, G> Pong<S, G>
where
    S: GameSession,
    G: GraphicsStack,
{
    pub fn new(cleaner: Option<PongCleaner>, session: S, graphics: G) -> Self {
        Self {
            cleaner,
            session,
            graphics,
        }
    }

    pub fn execute(self, task: PongTask) -> Result<(), LaunchFailure> {
        let Pong {
            cleaner,
            session,
            mut graphics,
        } = self;

        match task {
            PongTask::CleanTemporaryFiles => {
                let cleaner = cleaner.ok_or(CleanupError::Unavailable)?;
                feedback::report_cleaning_started();
                let removed = cleaner.clean_temporary_files()?;
                feedback::report_cleaning_finished(removed);
                Ok(())
            },
            PongTask::RunGame(settings) => {
                feedback::report_game_starting(&settings);

                let outcome = graphics
                    .ensure_available()
                    .and_then(|()| session.run(&settings));

                // The game branch releases the graphics stack on every path.
                graphics.shutdown();

                outcome?;
                feedback::report_game_finished();
                Ok(())
            },
        }
    }
}
