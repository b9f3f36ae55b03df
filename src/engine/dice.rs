//! This module holds the die itself and the source of randomness behind every roll, operator draw
//! and operand draw the engine makes.
//!
//! The engine never reaches for a global generator. Anything implementing `RandomSource` can be
//! handed to it, which is how the binary plugs in a (possibly seeded) `fastrand::Rng` and how the
//! tests replay an exact sequence of draws through `ScriptedSource`.

use fastrand::Rng;
use serde::Serialize;

/// This trait abstracts over the uniform integer generator the engine draws from.
pub trait RandomSource {
    /// This function returns an integer drawn uniformly from `low..=high`. Callers always pass
    /// `low <= high`.
    fn between(&mut self, low: i32, high: i32) -> i32;
}

impl RandomSource for Rng {
    fn between(&mut self, low: i32, high: i32) -> i32 {
        self.i32(low..=high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn between(&mut self, low: i32, high: i32) -> i32 {
        (**self).between(low, high)
    }
}

/// This structure replays a fixed list of draws in order. Each value is clamped into the requested
/// range, and once the list runs out every further draw yields the lower bound of its range.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    /// This field holds the index of the next value to hand out.
    cursor: usize,
    /// This field holds the scripted draws, in the order they will be returned.
    values: Vec<i32>,
}

impl ScriptedSource {
    /// This function creates a new source that will return `values` in order.
    #[must_use]
    pub fn new<I: IntoIterator<Item = i32>>(values: I) -> Self {
        Self {
            cursor: 0,
            values: values.into_iter().collect(),
        }
    }

    /// This function returns how many scripted values have not been drawn yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len().saturating_sub(self.cursor)
    }
}

impl RandomSource for ScriptedSource {
    fn between(&mut self, low: i32, high: i32) -> i32 {
        let value = self.values.get(self.cursor).copied().unwrap_or(low);
        self.cursor = self.cursor.saturating_add(1);

        value.max(low).min(high)
    }
}

/// This enum holds the six faces of the die. Each face triggers a different effect once rolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum DieFace {
    /// An addition question worth one point.
    One,
    /// A subtraction question worth two points.
    Two,
    /// A multiplication question worth three points.
    Three,
    /// Roll again for double points.
    Four,
    /// The player loses the turn.
    Five,
    /// A question for the whole jackpot.
    Six,
}

impl DieFace {
    /// This function rolls the die once with the given source.
    pub(crate) fn roll<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::from_value(rng.between(1, 6))
    }

    /// This function maps a drawn value onto a face, saturating anything outside of `1..=6`.
    const fn from_value(value: i32) -> Self {
        match value {
            i32::MIN..=1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            _ => Self::Six,
        }
    }

    /// This function returns the number of pips on the face.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
        }
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> Self {
        face.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rng_only_rolls_real_faces() {
        let mut rng = Rng::with_seed(7);

        for _ in 0..1_000 {
            let face = DieFace::roll(&mut rng);
            assert!((1..=6).contains(&face.value()), "face out of range");
        }
    }

    #[test]
    fn scripted_source_clamps_and_runs_dry() {
        let mut source = ScriptedSource::new([9, -3, 4]);

        assert_eq!(source.between(1, 6), 6, "above range clamps to high");
        assert_eq!(source.between(1, 6), 1, "below range clamps to low");
        assert_eq!(source.remaining(), 1, "one draw left");
        assert_eq!(source.between(0, 20), 4, "in range passes through");
        assert_eq!(source.between(3, 9), 3, "exhausted source yields low");
        assert_eq!(source.remaining(), 0, "nothing left");
    }

    #[test]
    fn faces_serialize_as_pips() {
        let json = serde_json::to_string(&DieFace::Five).unwrap();

        assert_eq!(json, "5", "face should serialize as its value");
    }
}
