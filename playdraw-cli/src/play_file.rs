use playdraw_core::{
    Background, CanvasConfig, PlayResult, Registry, ResolverConfig, RosterColumns,
};

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

const DEFAULT_WIDTH: u32 = 600;
const DEFAULT_HEIGHT: u32 = 400;
const DEFAULT_BACKGROUND: &str = "#2e8b57";

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

/// Roster columns as they appear in a play file, one array per attribute.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct RosterFile {
    names: Vec<String>,
    images: Vec<String>,
    heights: Vec<f64>,
    gpgs: Vec<f64>,
    apgs: Vec<f64>,
    sogs: Vec<f64>,
    coords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PlayFile {
    name: String,
    team: String,
    #[serde(default = "default_width")]
    width: u32,
    #[serde(default = "default_height")]
    height: u32,
    background: Option<String>,
    background_image: Option<String>,
    pass: Option<Vec<String>>,
    pass_coords: Option<Vec<String>>,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    roster: RosterFile,
}

/// How the ball movement of a play is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PassSource<'a> {
    Names(&'a [String]),
    Coordinates(&'a [String]),
}

impl PlayFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read play file {}", path.display()))?;

        Self::parse(&raw).with_context(|| format!("Invalid play file {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn canvas_config(&self) -> Result<CanvasConfig> {
        let background = match (&self.background, &self.background_image) {
            (Some(_), Some(_)) => bail!("`background` and `background_image` are exclusive"),
            (_, Some(href)) => Background::Image(href.clone()),
            (Some(colour), None) => Background::Colour(colour.clone()),
            (None, None) => Background::Colour(DEFAULT_BACKGROUND.to_owned()),
        };

        Ok(CanvasConfig::new(
            self.name.clone(),
            self.width,
            self.height,
            background,
        ))
    }

    pub fn registry(&self) -> PlayResult<Registry> {
        let roster = &self.roster;

        Registry::build(
            &self.team,
            &RosterColumns {
                names: &roster.names,
                images: &roster.images,
                heights: &roster.heights,
                gpgs: &roster.gpgs,
                apgs: &roster.apgs,
                sogs: &roster.sogs,
                coords: &roster.coords,
            },
        )
    }

    pub fn pass(&self) -> Result<PassSource<'_>> {
        match (&self.pass, &self.pass_coords) {
            (Some(names), None) => Ok(PassSource::Names(names)),
            (None, Some(coords)) => Ok(PassSource::Coordinates(coords)),
            (Some(_), Some(_)) => bail!("`pass` and `pass_coords` are exclusive"),
            (None, None) => bail!("a play needs either `pass` or `pass_coords`"),
        }
    }
}
