//! This module contains the records the engine hands back to the presentation layer after every
//! roll and every submitted answer. They describe what happened; rendering it is up to the caller.

use std::num::ParseIntError;

use serde::Serialize;

use crate::engine::dice::DieFace;
use crate::engine::player::Player;
use crate::engine::problem::Problem;

/// This enum holds the reasons an answer may be rejected before it is checked. Rejected answers
/// leave the question open.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    /// The submitted text is not a 32-bit integer.
    #[error("Please enter a valid number.")]
    NotANumber(#[from] ParseIntError),
}

/// This enum holds what a single roll of the die did to the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RollEffect {
    /// A one, two or three opened a regular question worth `points`.
    Question {
        /// The points awarded for a correct answer.
        points: u32,
    },
    /// A four armed the double points bonus. The same player rolls again.
    DoublePoints,
    /// A five cost `skipped` the turn.
    TurnSkipped {
        /// The player who lost the turn.
        skipped: Player,
    },
    /// A six opened a question worth the whole jackpot.
    JackpotAttempt {
        /// The size of the jackpot at stake.
        jackpot: u32,
    },
}

/// This structure describes the result of a roll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RollOutcome {
    /// This field holds whether an answer can be submitted now.
    pub answering_enabled: bool,
    /// This field holds the face that came up.
    pub die: DieFace,
    /// This field holds what the face did.
    pub effect: RollEffect,
    /// This field holds the notification to show, empty when there is nothing to say.
    pub message: String,
    /// This field holds the question opened by the roll, if any.
    pub problem: Option<Problem>,
    /// This field holds whether the die can be rolled again now.
    pub rolling_enabled: bool,
}

impl RollOutcome {
    /// This function returns the text of the opened question, if the roll opened one.
    #[must_use]
    pub fn problem_text(&self) -> Option<String> {
        self.problem.as_ref().map(ToString::to_string)
    }
}

/// This enum holds the three ways a submitted answer can be judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// The answer was right and `points` went to the player. `jackpot` is set when the points were
    /// the jackpot.
    Correct {
        /// Whether the jackpot was won.
        jackpot: bool,
        /// The points awarded.
        points: u32,
    },
    /// The answer was wrong.
    Incorrect {
        /// The answer that was expected.
        correct_answer: i32,
    },
    /// The text could not be read as a number, so nothing changed.
    NotANumber,
}

/// This structure identifies who won a game and with how many points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Winner {
    /// This field holds the winning player.
    pub player: Player,
    /// This field holds the winning score.
    pub score: u32,
}

impl Winner {
    /// This function returns the line announcing the win.
    #[must_use]
    pub fn announcement(&self) -> String {
        format!("{} wins with {} points!", self.player, self.score)
    }
}

/// This structure describes the result of submitting an answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    /// This field holds the notification to show.
    pub message: String,
    /// This field holds how the answer was judged.
    pub verdict: Verdict,
    /// This field holds the winner when the answer ended the game. The state has already been reset
    /// by the time the caller sees it.
    pub winner: Option<Winner>,
}

impl AnswerOutcome {
    /// This function returns whether the answer was right, or `None` when it was not a number.
    #[must_use]
    pub const fn correct(&self) -> Option<bool> {
        match self.verdict {
            Verdict::Correct { .. } => Some(true),
            Verdict::Incorrect { .. } => Some(false),
            Verdict::NotANumber => None,
        }
    }
}
