use crate::{
    constants::{
        GOAL_HEIGHT_DIVISOR, GOAL_LEFT_X, GOAL_RIGHT_INSET, GOAL_WIDTH, MARKER_SIZE_DIVISOR,
        PLAYER_SIZE_DIVISOR,
    },
    error::{PlayError, PlayResult},
    report::ReportTable,
    types::{Coordinate, Player},
};

use serde::{Deserialize, Serialize};

mod svg_surface;

pub use svg_surface::SvgSurface;

/// Primitive drawing operations a play can be rendered onto.
pub trait DrawingSurface {
    fn draw_rect(&mut self, at: Coordinate, width: f64, height: f64);

    fn draw_image(&mut self, href: &str, at: Coordinate, size: f64);

    /// Draws one connected line through `points`, in order.
    fn draw_line(&mut self, points: &[Coordinate]);

    fn render_table(&mut self, table: &ReportTable);

    fn draw_marker(&mut self, at: Coordinate, size: f64) {
        self.draw_rect(at, size, size);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Background {
    Colour(String),
    Image(String),
}

impl Default for Background {
    fn default() -> Self {
        Background::Colour("white".to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub play_name: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub background: Background,
}

impl CanvasConfig {
    pub fn new(
        play_name: impl Into<String>,
        width: u32,
        height: u32,
        background: Background,
    ) -> Self {
        CanvasConfig {
            play_name: play_name.into(),
            width,
            height,
            background,
        }
    }

    /// The surface identifier: the play name with every space removed.
    pub fn canvas_id(&self) -> String {
        self.play_name.replace(' ', "")
    }

    pub(crate) fn player_size(&self) -> f64 {
        (self.height as f64 / PLAYER_SIZE_DIVISOR).ceil()
    }

    pub(crate) fn marker_size(&self) -> f64 {
        (self.height as f64 / MARKER_SIZE_DIVISOR).ceil()
    }

    fn goal_height(&self) -> f64 {
        (self.height as f64 / GOAL_HEIGHT_DIVISOR).ceil()
    }
}

/// Draws each player's image at its position.
pub fn draw_players<'p>(
    surface: &mut impl DrawingSurface,
    config: &CanvasConfig,
    players: impl IntoIterator<Item = &'p Player>,
) {
    let size = config.player_size();

    for player in players {
        surface.draw_image(&player.image, player.position, size);
    }
}

/// Draws both goals and a plain square marker at every point, for plays
/// described without player records.
pub fn draw_markers(
    surface: &mut impl DrawingSurface,
    config: &CanvasConfig,
    points: &[Coordinate],
) {
    let goal_height = config.goal_height();
    let opposite_goal_x = config.width as f64 - GOAL_RIGHT_INSET;

    surface.draw_rect(
        Coordinate::new(GOAL_LEFT_X, goal_height),
        GOAL_WIDTH,
        goal_height,
    );
    surface.draw_rect(
        Coordinate::new(opposite_goal_x, goal_height),
        GOAL_WIDTH,
        goal_height,
    );

    let size = config.marker_size();
    for point in points {
        surface.draw_marker(*point, size);
    }
}

/// Draws the ball movement as a single line through `points`.
pub fn draw_pass(surface: &mut impl DrawingSurface, points: &[Coordinate]) -> PlayResult<()> {
    if points.len() < 2 {
        return Err(PlayError::InsufficientPathLength {
            found: points.len(),
        });
    }

    surface.draw_line(points);

    Ok(())
}
