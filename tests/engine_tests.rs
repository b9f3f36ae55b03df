//! Tests driving the public engine API through whole turns with scripted dice.

#![expect(
    unused_crate_dependencies,
    reason = "Only the library and proptest are used by the integration tests."
)]

use mathdice::engine::{
    GameEngine, GameState, Operator, Phase, Player, RollEffect, ScriptedSource, Verdict,
    ADD_SUB_RANGE, MUL_RANGE, STARTING_JACKPOT,
};
use proptest::prelude::*;

/// This function builds an engine that replays `draws` in order.
fn scripted<const N: usize>(draws: [i32; N]) -> GameEngine<ScriptedSource> {
    GameEngine::new(ScriptedSource::new(draws))
}

#[test]
fn correct_addition_scores_and_passes_the_turn() {
    let mut engine = scripted([1, 30, 15]);

    let roll = engine.roll().unwrap();
    assert_eq!(roll.effect, RollEffect::Question { points: 1 }, "one is worth a point");
    assert!(roll.answering_enabled && !roll.rolling_enabled, "question open");
    assert_eq!(roll.problem_text().as_deref(), Some("30 + 15"), "question text");

    let answer = engine.submit_answer("45").unwrap();
    assert_eq!(answer.correct(), Some(true), "right answer");
    assert_eq!(answer.message, "Correct! Player 1 earned 1 points.", "message");

    let view = engine.snapshot();
    assert_eq!(view.player_one_score, 1, "point awarded");
    assert_eq!(view.current_player, Player::Two, "turn passed");
    assert!(view.roll_enabled && !view.answer_enabled, "back to rolling");
    assert!(view.question_text.is_empty(), "question cleared");
}

#[test]
fn bonus_roll_doubles_the_stake() {
    let mut engine = scripted([4, 1, 30, 15]);

    let bonus = engine.roll().unwrap();
    assert_eq!(bonus.message, "Roll again for double points!", "bonus message");
    assert!(bonus.problem.is_none(), "no question on a four");
    assert!(engine.state().double_points(), "bonus armed");

    assert!(engine.roll().is_some(), "second roll");
    let answer = engine.submit_answer("45").unwrap();

    assert_eq!(
        answer.verdict,
        Verdict::Correct {
            jackpot: false,
            points: 2
        },
        "doubled"
    );
    assert_eq!(engine.snapshot().player_one_score, 2, "two points");
}

#[test]
fn five_skips_the_turn() {
    let mut engine = scripted([5, 5]);

    let skip = engine.roll().unwrap();
    assert_eq!(
        skip.effect,
        RollEffect::TurnSkipped {
            skipped: Player::One
        },
        "player one skipped"
    );
    assert_eq!(skip.message, "Player 1 loses a turn!", "message");
    assert!(skip.problem.is_none() && skip.rolling_enabled, "no question");
    assert_eq!(engine.snapshot().current_player, Player::Two, "turn passed");

    assert!(engine.roll().is_some(), "second skip");
    assert_eq!(engine.snapshot().current_player, Player::One, "turn back");
}

#[test]
fn five_discards_an_armed_bonus() {
    let mut engine = scripted([4, 5]);

    assert!(engine.roll().is_some(), "four");
    assert!(engine.roll().is_some(), "five");

    assert!(!engine.state().double_points(), "bonus lost with the turn");
    assert_eq!(engine.state().current_player(), Player::Two, "turn passed");
}

#[test]
fn jackpot_grows_then_gets_won() {
    // player one misses a multiplication, player two hits the jackpot
    let mut engine = scripted([3, 6, 7, 6, 2, 50, 20]);

    assert!(engine.roll().is_some(), "three");
    let miss = engine.submit_answer("41").unwrap();
    assert_eq!(miss.correct(), Some(false), "wrong");
    assert_eq!(engine.snapshot().jackpot, STARTING_JACKPOT + 3, "jackpot grew");

    let attempt = engine.roll().unwrap();
    assert_eq!(attempt.effect, RollEffect::JackpotAttempt { jackpot: 8 }, "six");
    assert_eq!(
        attempt.message,
        "Try for jackpot! Answer correctly to win 8 points.",
        "message"
    );
    assert_eq!(
        engine.state().pending_problem().map(|problem| problem.operator()),
        Some(Operator::Subtract),
        "operator drawn separately"
    );

    let hit = engine.submit_answer("30").unwrap();
    assert_eq!(
        hit.verdict,
        Verdict::Correct {
            jackpot: true,
            points: 8
        },
        "jackpot won"
    );

    let view = engine.snapshot();
    assert_eq!(view.player_two_score, 8, "whole jackpot awarded");
    assert_eq!(view.jackpot, STARTING_JACKPOT, "jackpot reset");
    assert_eq!(view.current_player, Player::One, "turn passed");
}

#[test]
fn not_a_number_changes_nothing() {
    let mut engine = scripted([2, 10, 4]);
    assert!(engine.roll().is_some(), "two");
    let before = engine.state().clone();

    let answer = engine.submit_answer("abc").unwrap();

    assert_eq!(answer.correct(), None, "parse failure");
    assert!(answer.winner.is_none(), "no winner");
    assert_eq!(engine.state(), &before, "state untouched");
    assert_eq!(engine.phase(), Phase::AwaitingAnswer, "still answering");
    assert_eq!(engine.submit_answer("6").unwrap().correct(), Some(true), "retry works");
}

#[test]
fn reaching_twenty_wins_and_resets() {
    // player one answers 2 * 3 on a three each turn, player two keeps rolling fives
    let mut draws = Vec::new();
    for _ in 0..7 {
        draws.extend([3, 2, 3, 5]);
    }
    let mut engine = GameEngine::new(ScriptedSource::new(draws));

    for turn in 1..=7_u32 {
        assert!(engine.roll().is_some(), "player one rolls");
        let answer = engine.submit_answer("6").unwrap();

        if turn < 7 {
            assert!(answer.winner.is_none(), "no winner at {} points", turn * 3);
            assert!(engine.roll().is_some(), "player two skips");
        } else {
            let winner = answer.winner.unwrap();
            assert_eq!(winner.player, Player::One, "player one wins");
            assert_eq!(winner.score, 21, "with 21 points");
        }
    }

    let view = engine.snapshot();
    assert_eq!(view, GameState::new().snapshot(), "board reset");
    assert_eq!(view.die_value, 0, "die cleared");
    assert_eq!(view.current_player, Player::One, "player one starts");
}

#[test]
fn explicit_reset_starts_over() {
    let mut engine = scripted([1, 1, 1]);
    assert!(engine.roll().is_some(), "question open");

    engine.reset();

    assert_eq!(engine.state(), &GameState::new(), "fresh game");
}

#[test]
fn same_seed_same_game() {
    let mut first = GameEngine::seeded(42);
    let mut second = GameEngine::seeded(42);

    for _ in 0..50 {
        assert_eq!(first.roll(), second.roll(), "same roll");
        assert_eq!(first.submit_answer("0"), second.submit_answer("0"), "same answer");
    }
}

proptest! {
    #[test]
    fn rolls_keep_every_invariant(seed in any::<u64>(), answers in prop::collection::vec(-50..450_i32, 1..60)) {
        let mut engine = GameEngine::seeded(seed);

        for answer in answers {
            let before = engine.state().clone();
            let outcome = engine.roll().unwrap();
            let state = engine.state();

            prop_assert_eq!(state.awaiting_answer(), state.pending_problem().is_some());
            prop_assert_eq!(outcome.answering_enabled, state.awaiting_answer());
            match outcome.die.value() {
                1..=3 | 6 => {
                    let problem = state.pending_problem().unwrap();
                    let range = match problem.operator() {
                        Operator::Multiply => MUL_RANGE,
                        Operator::Add | Operator::Subtract => ADD_SUB_RANGE,
                    };
                    prop_assert!(range.contains(&problem.left()) && range.contains(&problem.right()));
                    prop_assert_eq!(state.trying_for_jackpot(), outcome.die.value() == 6);
                    prop_assert!(!state.double_points());
                }
                4 => {
                    prop_assert!(state.double_points());
                    prop_assert_eq!(state.current_player(), before.current_player());
                    prop_assert!(outcome.problem.is_none());
                }
                _ => {
                    prop_assert_ne!(state.current_player(), before.current_player());
                    prop_assert!(outcome.problem.is_none());
                }
            }

            if engine.phase() == Phase::AwaitingAnswer {
                let before = engine.state().clone();
                let outcome = engine.submit_answer(&answer.to_string()).unwrap();
                let state = engine.state();

                prop_assert!(!state.trying_for_jackpot());
                prop_assert!(!state.awaiting_answer());
                if outcome.winner.is_none() {
                    match outcome.verdict {
                        Verdict::Incorrect { .. } if before.trying_for_jackpot() => {
                            prop_assert_eq!(state.jackpot(), before.jackpot());
                        }
                        Verdict::Incorrect { .. } => {
                            prop_assert_eq!(
                                state.jackpot(),
                                before.jackpot() + before.points_for_this_turn()
                            );
                        }
                        Verdict::Correct { jackpot: true, points } => {
                            prop_assert_eq!(points, before.jackpot());
                            prop_assert_eq!(state.jackpot(), STARTING_JACKPOT);
                        }
                        Verdict::Correct { .. } | Verdict::NotANumber => {}
                    }
                    prop_assert_ne!(state.current_player(), before.current_player());
                }
            }

            let view = engine.snapshot();
            prop_assert_eq!(&view, &engine.snapshot());
        }
    }
}
