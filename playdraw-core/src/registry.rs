use crate::{
    error::{PlayError, PlayResult},
    types::{Coordinate, Player, PlayerStats},
};

use serde::Serialize;

/// Parallel roster columns, indexed by player. Every column must have
/// as many entries as `names`.
#[derive(Debug, Clone, Copy)]
pub struct RosterColumns<'a, S: AsRef<str>> {
    pub names: &'a [S],
    pub images: &'a [S],
    pub heights: &'a [f64],
    pub gpgs: &'a [f64],
    pub apgs: &'a [f64],
    pub sogs: &'a [f64],
    /// `"x,y"` tokens.
    pub coords: &'a [S],
}

impl<S: AsRef<str>> RosterColumns<'_, S> {
    fn check_lengths(&self) -> PlayResult<()> {
        let expected = self.names.len();
        let lengths = [
            ("images", self.images.len()),
            ("heights", self.heights.len()),
            ("gpgs", self.gpgs.len()),
            ("apgs", self.apgs.len()),
            ("sogs", self.sogs.len()),
            ("coords", self.coords.len()),
        ];

        match lengths.into_iter().find(|(_, found)| *found != expected) {
            Some((column, found)) => Err(PlayError::IndexOutOfRange {
                column,
                expected,
                found,
            }),
            None => Ok(()),
        }
    }
}

/// The players of one team, in roster order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Registry {
    team: String,
    players: Vec<Player>,
}

impl Registry {
    pub fn new(team: impl Into<String>, players: Vec<Player>) -> Self {
        Registry {
            team: team.into(),
            players,
        }
    }

    /// Builds one [Player] per entry of `columns.names`, keeping roster
    /// order. Positions are parsed up front so a bad token fails here
    /// rather than at draw time.
    pub fn build<S: AsRef<str>>(team: &str, columns: &RosterColumns<'_, S>) -> PlayResult<Self> {
        columns.check_lengths()?;

        let players = columns
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let stats = PlayerStats {
                    gpg: columns.gpgs[i],
                    apg: columns.apgs[i],
                    sog: columns.sogs[i],
                };
                let position = Coordinate::parse(columns.coords[i].as_ref())?;

                Ok(Player::new(
                    name.as_ref(),
                    columns.images[i].as_ref(),
                    team,
                    columns.heights[i],
                    stats,
                    position,
                ))
            })
            .collect::<PlayResult<Vec<_>>>()?;

        Ok(Registry::new(team, players))
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// First player whose name matches exactly.
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name == name)
    }

    pub fn count_named(&self, name: &str) -> usize {
        self.players
            .iter()
            .filter(|player| player.name == name)
            .count()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}
