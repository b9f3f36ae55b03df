//! This module contains the arithmetic questions players answer after rolling a one, two, three or
//! six.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::trace;

use crate::engine::dice::RandomSource;

/// The range both operands of an addition or subtraction are drawn from.
pub const ADD_SUB_RANGE: RangeInclusive<i32> = 0..=99;

/// The range both operands of a multiplication are drawn from. It is narrower to keep the products
/// small enough to work out by hand.
pub const MUL_RANGE: RangeInclusive<i32> = 0..=20;

/// This enum holds the three operators a question can be built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Operator {
    /// This variant is used for questions of the form `a + b`.
    Add,
    /// This variant is used for questions of the form `a - b`. The answer may be negative.
    Subtract,
    /// This variant is used for questions of the form `a * b`.
    Multiply,
}

impl Operator {
    /// This function picks the operator for a selector in `1..=3`, which is either the face that was
    /// rolled or a value drawn on behalf of a jackpot roll.
    pub(crate) const fn from_selector(selector: i32) -> Self {
        match selector {
            i32::MIN..=1 => Self::Add,
            2 => Self::Subtract,
            _ => Self::Multiply,
        }
    }

    /// This function returns the range the operands of this operator are drawn from.
    #[must_use]
    pub const fn operand_range(self) -> RangeInclusive<i32> {
        match self {
            Self::Add | Self::Subtract => ADD_SUB_RANGE,
            Self::Multiply => MUL_RANGE,
        }
    }

    /// This function returns the symbol shown between the operands.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
        }
    }

    /// This function evaluates the operator on two operands.
    const fn apply(self, left: i32, right: i32) -> i32 {
        match self {
            Self::Add => left.wrapping_add(right),
            Self::Subtract => left.wrapping_sub(right),
            Self::Multiply => left.wrapping_mul(right),
        }
    }
}

/// This structure holds a single question along with its answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// This field holds the expected answer.
    answer: i32,
    /// This field holds the operand on the left of the operator.
    left: i32,
    /// This field holds the operator joining both operands.
    operator: Operator,
    /// This field holds the operand on the right of the operator.
    right: i32,
}

impl Problem {
    /// This function builds a question from two operands, working out its answer.
    #[must_use]
    pub const fn new(left: i32, operator: Operator, right: i32) -> Self {
        Self {
            answer: operator.apply(left, right),
            left,
            operator,
            right,
        }
    }

    /// This function draws both operands independently from the operator's range. The left operand
    /// is always drawn first.
    pub(crate) fn generate<R: RandomSource + ?Sized>(operator: Operator, rng: &mut R) -> Self {
        let range = operator.operand_range();
        let left = rng.between(*range.start(), *range.end());
        let right = rng.between(*range.start(), *range.end());
        let problem = Self::new(left, operator, right);

        trace!(%problem, answer = problem.answer, "generated problem");
        problem
    }

    /// This function returns the expected answer.
    #[must_use]
    pub const fn answer(&self) -> i32 {
        self.answer
    }

    /// This function returns the operand on the left of the operator.
    #[must_use]
    pub const fn left(&self) -> i32 {
        self.left
    }

    /// This function returns the operator of the question.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    /// This function returns the operand on the right of the operator.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.right
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {} {}", self.left, self.operator.symbol(), self.right)
    }
}
