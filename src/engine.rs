//! The engine module contains the whole of the game's rules, detached from any kind of rendering.
//!
//! It is driven by exactly two inputs, rolling the die and submitting an answer, and it reports
//! back with descriptive outcome records and a `GameView` snapshot. The state lives in a single
//! owned `GameState`; `GameEngine` bundles it with the random source it draws from.

mod dice;
mod outcome;
mod player;
mod problem;
mod view;

use fastrand::Rng;
use tracing::{debug, info};

pub use dice::{DieFace, RandomSource, ScriptedSource};
pub use outcome::{AnswerError, AnswerOutcome, RollEffect, RollOutcome, Verdict, Winner};
pub use player::Player;
pub use problem::{Operator, Problem, ADD_SUB_RANGE, MUL_RANGE};
pub use view::{GameView, Phase};

use player::Scoreboard;

/// The score a player has to reach to win the game.
pub const WIN_THRESHOLD: u32 = 20;

/// The size of the jackpot at the start of a game and after it has been won.
pub const STARTING_JACKPOT: u32 = 5;

/// This structure holds the complete state of a game in progress. It only changes through
/// `roll()`, `submit_answer()` and `reset()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// This field holds the player whose turn it is.
    current_player: Player,
    /// This field holds the last face rolled this game, `None` before the first roll.
    die: Option<DieFace>,
    /// This field holds whether the last roll was a four whose bonus is still waiting to be used.
    double_points: bool,
    /// This field holds the shared pool won by answering a jackpot question.
    jackpot: u32,
    /// This field holds the last notification for the players.
    notification: String,
    /// This field holds the question waiting for an answer, if any.
    pending_problem: Option<Problem>,
    /// This field holds the points riding on the pending question.
    points_for_this_turn: u32,
    /// This field holds the points of both players.
    scores: Scoreboard,
    /// This field holds whether the pending question was opened by a six.
    trying_for_jackpot: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            current_player: Player::One,
            die: None,
            double_points: false,
            jackpot: STARTING_JACKPOT,
            notification: String::new(),
            pending_problem: None,
            points_for_this_turn: 0,
            scores: Scoreboard::default(),
            trying_for_jackpot: false,
        }
    }
}

impl GameState {
    /// This function creates the state of a fresh game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// This function rolls the die for the current player and resolves the face that came up.
    ///
    /// Nothing happens, and `None` is returned, while a question is still waiting for an answer.
    pub fn roll<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<RollOutcome> {
        if self.pending_problem.is_some() {
            debug!(player = %self.current_player, "roll ignored while a question is open");
            return None;
        }

        let die = DieFace::roll(rng);
        let roller = self.current_player;
        self.die = Some(die);

        let effect = match die {
            DieFace::One | DieFace::Two | DieFace::Three => {
                let face = u32::from(die.value());
                self.points_for_this_turn = if self.double_points { face * 2 } else { face };
                self.double_points = false;
                self.notification.clear();
                self.open_problem(Operator::from_selector(i32::from(die.value())), rng);

                RollEffect::Question {
                    points: self.points_for_this_turn,
                }
            }
            DieFace::Four => {
                self.double_points = true;
                self.notification = "Roll again for double points!".to_owned();

                RollEffect::DoublePoints
            }
            DieFace::Five => {
                self.points_for_this_turn = 0;
                self.double_points = false;
                self.notification = format!("{roller} loses a turn!");
                self.change_turn();

                RollEffect::TurnSkipped { skipped: roller }
            }
            DieFace::Six => {
                self.points_for_this_turn = self.jackpot;
                self.double_points = false;
                self.trying_for_jackpot = true;
                let selector = rng.between(1, 3);
                self.open_problem(Operator::from_selector(selector), rng);
                self.notification = format!(
                    "Try for jackpot! Answer correctly to win {} points.",
                    self.jackpot
                );

                RollEffect::JackpotAttempt {
                    jackpot: self.jackpot,
                }
            }
        };

        debug!(
            player = %roller,
            die = die.value(),
            ?effect,
            double_points = self.double_points,
            "die rolled"
        );

        Some(RollOutcome {
            answering_enabled: self.awaiting_answer(),
            die,
            effect,
            message: self.notification.clone(),
            problem: self.pending_problem.clone(),
            rolling_enabled: !self.awaiting_answer(),
        })
    }

    /// This function checks `raw` against the open question and scores it.
    ///
    /// Nothing happens, and `None` is returned, when no question is open. Text that is not an
    /// integer is rejected with a `Verdict::NotANumber` outcome that leaves the question open.
    pub fn submit_answer(&mut self, raw: &str) -> Option<AnswerOutcome> {
        let Some(problem) = self.pending_problem.take() else {
            debug!("answer ignored while no question is open");
            return None;
        };

        let guess = match parse_answer(raw) {
            Ok(guess) => guess,
            Err(err) => {
                debug!(%raw, "answer is not a number");
                self.pending_problem = Some(problem);
                return Some(AnswerOutcome {
                    message: err.to_string(),
                    verdict: Verdict::NotANumber,
                    winner: None,
                });
            }
        };

        let player = self.current_player;
        let verdict = if guess == problem.answer() {
            // the doubled branch is only reachable if a four's bonus is still armed here
            let earned = if self.double_points {
                self.points_for_this_turn * 2
            } else {
                self.points_for_this_turn
            };

            let verdict = if self.trying_for_jackpot {
                let won = self.jackpot;
                self.scores.award(player, won);
                self.notification = format!("Correct! {player} won the jackpot!");
                self.jackpot = STARTING_JACKPOT;

                Verdict::Correct {
                    jackpot: true,
                    points: won,
                }
            } else {
                self.scores.award(player, earned);
                self.notification = format!("Correct! {player} earned {earned} points.");

                Verdict::Correct {
                    jackpot: false,
                    points: earned,
                }
            };
            self.trying_for_jackpot = false;
            self.double_points = false;

            verdict
        } else {
            self.notification = format!("Incorrect. The correct answer was {}.", problem.answer());
            if !self.trying_for_jackpot
                && !matches!(self.die, Some(DieFace::Four | DieFace::Five))
            {
                self.jackpot = self.jackpot.saturating_add(self.points_for_this_turn);
            }
            self.trying_for_jackpot = false;

            Verdict::Incorrect {
                correct_answer: problem.answer(),
            }
        };

        debug!(
            %player,
            %problem,
            guess,
            ?verdict,
            jackpot = self.jackpot,
            "answer resolved"
        );

        let message = self.notification.clone();
        if !self.double_points && self.scores.reached(WIN_THRESHOLD).is_none() {
            self.change_turn();
        }

        Some(AnswerOutcome {
            message,
            verdict,
            winner: self.check_winner(),
        })
    }

    /// This function puts every field back to the start of a new game.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// This function returns a snapshot of everything the players can see.
    #[must_use]
    pub fn snapshot(&self) -> GameView {
        GameView {
            answer_enabled: self.awaiting_answer(),
            current_player: self.current_player,
            die_value: self.die.map_or(0, DieFace::value),
            jackpot: self.jackpot,
            notification_text: self.notification.clone(),
            player_one_score: self.scores.get(Player::One),
            player_two_score: self.scores.get(Player::Two),
            question_text: self
                .pending_problem
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            roll_enabled: !self.awaiting_answer(),
        }
    }

    /// This function returns whether a question is waiting for an answer.
    #[must_use]
    pub const fn awaiting_answer(&self) -> bool {
        self.pending_problem.is_some()
    }

    /// This function returns the player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    /// This function returns the last face rolled this game.
    #[must_use]
    pub const fn die(&self) -> Option<DieFace> {
        self.die
    }

    /// This function returns whether a four's bonus is waiting for the next roll.
    #[must_use]
    pub const fn double_points(&self) -> bool {
        self.double_points
    }

    /// This function returns the size of the jackpot.
    #[must_use]
    pub const fn jackpot(&self) -> u32 {
        self.jackpot
    }

    /// This function returns the question waiting for an answer.
    #[must_use]
    pub const fn pending_problem(&self) -> Option<&Problem> {
        self.pending_problem.as_ref()
    }

    /// This function returns the phase of the current turn.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.awaiting_answer() {
            Phase::AwaitingAnswer
        } else {
            Phase::AwaitingRoll
        }
    }

    /// This function returns the points riding on the pending question.
    #[must_use]
    pub const fn points_for_this_turn(&self) -> u32 {
        self.points_for_this_turn
    }

    /// This function returns the points of the given player.
    #[must_use]
    pub const fn score(&self, player: Player) -> u32 {
        self.scores.get(player)
    }

    /// This function returns whether the pending question is a jackpot question.
    #[must_use]
    pub const fn trying_for_jackpot(&self) -> bool {
        self.trying_for_jackpot
    }

    /// This function hands the turn to the other player and closes any open question.
    fn change_turn(&mut self) {
        self.current_player = self.current_player.other();
        self.pending_problem = None;
    }

    /// This function ends the game if a player has reached the winning score. The state is reset
    /// before the winner is returned.
    fn check_winner(&mut self) -> Option<Winner> {
        let player = self.scores.reached(WIN_THRESHOLD)?;
        let winner = Winner {
            player,
            score: self.scores.get(player),
        };

        info!(player = %winner.player, score = winner.score, "game won");
        self.reset();
        Some(winner)
    }

    /// This function draws a question for `operator` and makes it the pending one.
    fn open_problem<R: RandomSource + ?Sized>(&mut self, operator: Operator, rng: &mut R) {
        self.pending_problem = Some(Problem::generate(operator, rng));
    }
}

/// This function reads a submitted answer as a signed integer. An optional leading sign is
/// accepted; surrounding whitespace is not.
fn parse_answer(raw: &str) -> Result<i32, AnswerError> {
    Ok(raw.parse()?)
}

/// This structure ties a `GameState` to the random source its rolls draw from. It is what a
/// presentation layer holds on to.
#[expect(
    clippy::module_name_repetitions,
    reason = "GameEngine reads better at the call site than engine::Game."
)]
#[derive(Debug)]
pub struct GameEngine<R = Rng> {
    /// This field holds the source of every random draw.
    rng: R,
    /// This field holds the game itself.
    state: GameState,
}

impl GameEngine<Rng> {
    /// This function creates an engine drawing from a generator seeded with `seed`, so that the same
    /// seed replays the same game for the same answers.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(Rng::with_seed(seed))
    }
}

impl Default for GameEngine<Rng> {
    fn default() -> Self {
        Self::new(Rng::new())
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// This function creates an engine for a fresh game drawing from `rng`.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            state: GameState::new(),
        }
    }

    /// This function rolls the die for the current player. See `GameState::roll()`.
    pub fn roll(&mut self) -> Option<RollOutcome> {
        self.state.roll(&mut self.rng)
    }

    /// This function submits an answer to the open question. See `GameState::submit_answer()`.
    pub fn submit_answer(&mut self, raw: &str) -> Option<AnswerOutcome> {
        self.state.submit_answer(raw)
    }

    /// This function abandons the current game and starts a new one.
    pub fn reset(&mut self) {
        info!("game reset");
        self.state.reset();
    }

    /// This function returns a snapshot of the board.
    #[must_use]
    pub fn snapshot(&self) -> GameView {
        self.state.snapshot()
    }

    /// This function returns the phase of the current turn.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// This function returns the underlying state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }
}
