use crate::{
    algos::{PassResolver, ResolverConfig, describe_movement},
    error::PlayResult,
    registry::Registry,
    types::Player,
};

use std::fmt::{Display, Formatter};

use serde::Serialize;

const PLAYERS_INVOLVED_TITLE: &str = "Players Involved In Play";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Column {
    PlayerName,
    Image,
    TeamName,
    Height,
    GoalsPerGame,
    AssistsPerGame,
    ShotsOnGoal,
}

impl Column {
    fn cell(&self, player: &Player) -> String {
        match self {
            Column::PlayerName => player.name.clone(),
            Column::Image => player.image.clone(),
            Column::TeamName => player.team.clone(),
            Column::Height => player.height.to_string(),
            Column::GoalsPerGame => player.stats.gpg.to_string(),
            Column::AssistsPerGame => player.stats.apg.to_string(),
            Column::ShotsOnGoal => player.stats.sog.to_string(),
        }
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Column::PlayerName => write!(f, "Player Name"),
            Column::Image => write!(f, "Image"),
            Column::TeamName => write!(f, "Team Name"),
            Column::Height => write!(f, "Height"),
            Column::GoalsPerGame => write!(f, "Goals Per Game (GPG)"),
            Column::AssistsPerGame => write!(f, "Assists Per Game (APG)"),
            Column::ShotsOnGoal => write!(f, "Shots On Goal (SOG)"),
        }
    }
}

const SCOUTING_COLUMNS: [Column; 6] = [
    Column::PlayerName,
    Column::Image,
    Column::Height,
    Column::GoalsPerGame,
    Column::AssistsPerGame,
    Column::ShotsOnGoal,
];

const PLAY_COLUMNS: [Column; 7] = [
    Column::PlayerName,
    Column::Image,
    Column::TeamName,
    Column::Height,
    Column::GoalsPerGame,
    Column::AssistsPerGame,
    Column::ShotsOnGoal,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub title: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    fn from_players<'p>(
        title: String,
        columns: &[Column],
        players: impl IntoIterator<Item = &'p Player>,
    ) -> Self {
        let rows = players
            .into_iter()
            .map(|player| columns.iter().map(|column| column.cell(player)).collect())
            .collect();

        ReportTable {
            title,
            columns: columns.to_vec(),
            rows,
        }
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(Column::to_string).collect()
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers()
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or_default()
            })
            .collect()
    }
}

fn write_row(f: &mut Formatter<'_>, cells: &[String], widths: &[usize]) -> std::fmt::Result {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");

    writeln!(f, "{}", line.trim_end())
}

impl Display for ReportTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let widths = self.column_widths();

        writeln!(f, "{}", self.title)?;
        write_row(f, &self.headers(), &widths)?;

        let rule = widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-");
        writeln!(f, "{rule}")?;

        for row in self.rows.iter() {
            write_row(f, row, &widths)?;
        }

        Ok(())
    }
}

/// One row per registry entry, in roster order.
pub fn scouting_report(registry: &Registry) -> ReportTable {
    ReportTable::from_players(
        format!("Scouting Report for {}", registry.team()),
        &SCOUTING_COLUMNS,
        registry,
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayReport {
    pub movement: String,
    pub players_involved: ReportTable,
}

impl Display for PlayReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Ball movement information: {}", self.movement)?;
        writeln!(f)?;
        write!(f, "{}", self.players_involved)
    }
}

/// Describes the ball movement of `pass` and lists every player taking
/// part in it, once per touch, in pass order.
pub fn play_report<S: AsRef<str>>(
    registry: &Registry,
    pass: &[S],
    config: ResolverConfig,
) -> PlayResult<PlayReport> {
    let movement = describe_movement(pass)?;
    let players = PassResolver::new(registry, config).resolve_players(pass)?;

    Ok(PlayReport {
        movement,
        players_involved: players_involved(players),
    })
}

pub(crate) fn players_involved<'p>(players: impl IntoIterator<Item = &'p Player>) -> ReportTable {
    ReportTable::from_players(PLAYERS_INVOLVED_TITLE.to_owned(), &PLAY_COLUMNS, players)
}
