//! This module holds the two players and the scoreboard tracking their points.

use std::fmt;

use serde::Serialize;

/// This enum identifies one of the two players taking turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum Player {
    /// The player who rolls first in every game.
    #[default]
    One,
    /// The player who rolls second.
    Two,
}

impl Player {
    /// This function returns the number the player is shown as.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    /// This function returns the opponent of the player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.number()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Player {}", self.number())
    }
}

/// This structure keeps the points of both players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Scoreboard {
    /// This field holds the points of the first player.
    one: u32,
    /// This field holds the points of the second player.
    two: u32,
}

impl Scoreboard {
    /// This function returns the points of the given player.
    pub(crate) const fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    /// This function adds points to the given player.
    pub(crate) fn award(&mut self, player: Player, points: u32) {
        match player {
            Player::One => self.one = self.one.saturating_add(points),
            Player::Two => self.two = self.two.saturating_add(points),
        }
    }

    /// This function returns the first player, in seating order, whose score reached `threshold`.
    pub(crate) const fn reached(&self, threshold: u32) -> Option<Player> {
        if self.one >= threshold {
            Some(Player::One)
        } else if self.two >= threshold {
            Some(Player::Two)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_alternate() {
        assert_eq!(Player::One.other(), Player::Two, "one hands over to two");
        assert_eq!(Player::Two.other(), Player::One, "two hands over to one");
        assert_eq!(Player::Two.to_string(), "Player 2", "display name");
    }

    #[test]
    fn scoreboard_reports_the_first_player_over_the_line() {
        let mut scores = Scoreboard::default();
        scores.award(Player::Two, 21);

        assert_eq!(scores.reached(20), Some(Player::Two), "two crossed");
        assert_eq!(scores.get(Player::One), 0, "one untouched");

        scores.award(Player::One, 20);
        assert_eq!(scores.reached(20), Some(Player::One), "one takes precedence");
    }
}
