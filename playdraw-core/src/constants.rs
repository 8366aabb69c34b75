pub(crate) const COORDINATE_SEPARATOR: char = ',';

// Player images are drawn as squares of side `canvas_height / PLAYER_SIZE_DIVISOR`.
pub(crate) const PLAYER_SIZE_DIVISOR: f64 = 11.0;
// Bare coordinate markers are half the size of a player image.
pub(crate) const MARKER_SIZE_DIVISOR: f64 = 22.0;

pub(crate) const GOAL_HEIGHT_DIVISOR: f64 = 3.0;
pub(crate) const GOAL_WIDTH: f64 = 2.0;
pub(crate) const GOAL_LEFT_X: f64 = 7.0;
pub(crate) const GOAL_RIGHT_INSET: f64 = 8.0;

pub(crate) const PASS_STROKE_WIDTH: u32 = 2;
pub(crate) const PASS_STROKE_COLOR: &str = "red";
pub(crate) const MARKER_COLOR: &str = "black";

pub(crate) const TABLE_ROW_HEIGHT: u32 = 20;
pub(crate) const TABLE_COLUMN_WIDTH: u32 = 140;
pub(crate) const TABLE_TEXT_COLOR: &str = "#202020";
