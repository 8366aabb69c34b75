mod algos;
mod constants;
mod error;
mod registry;
mod report;
mod types;

use tracing::{Level, event, span};

pub use algos::{
    Background, CanvasConfig, DrawingSurface, DuplicatePolicy, NamePolicy, PassResolver,
    ResolverConfig, SvgSurface, describe_movement, draw_markers, draw_pass, draw_players,
    resolve_by_coordinates,
};
pub use error::{PlayError, PlayResult};
pub use registry::{Registry, RosterColumns};
pub use report::{Column, PlayReport, ReportTable, play_report, scouting_report};
pub use types::{Coordinate, Player, PlayerStats};

/// A play drawn onto an SVG document, with the report shown under it.
#[derive(Debug)]
pub struct DrawnPlay {
    pub document: svg::Document,
    pub report: PlayReport,
}

/// Draws a play whose participants are registry players referenced by
/// name: every registry player's image, the pass line through the
/// participants' positions and the "players involved" table below the
/// pitch.
pub fn draw_named_play<S: AsRef<str>>(
    canvas: &CanvasConfig,
    registry: &Registry,
    pass: &[S],
    config: ResolverConfig,
) -> PlayResult<DrawnPlay> {
    let span = span!(Level::DEBUG, "draw_named_play");
    let _guard = span.enter();

    let movement = describe_movement(pass)?;
    let players = PassResolver::new(registry, config).resolve_players(pass)?;
    let points = players
        .iter()
        .map(|player| player.position)
        .collect::<Vec<_>>();

    let mut surface = SvgSurface::new(canvas);
    draw_players(&mut surface, canvas, registry);
    draw_pass(&mut surface, &points)?;

    let report = PlayReport {
        movement,
        players_involved: report::players_involved(players),
    };
    surface.render_table(&report.players_involved);

    event!(
        Level::DEBUG,
        "Drew play {:?} through {} points",
        canvas.canvas_id(),
        points.len()
    );

    Ok(DrawnPlay {
        document: surface.into_document(),
        report,
    })
}

/// Draws a play given only as `"x,y"` tokens: goals, a marker per
/// token and the pass line between them.
pub fn draw_coordinate_play<S: AsRef<str>>(
    canvas: &CanvasConfig,
    tokens: &[S],
) -> PlayResult<svg::Document> {
    let span = span!(Level::DEBUG, "draw_coordinate_play");
    let _guard = span.enter();

    let points = resolve_by_coordinates(tokens)?;

    let mut surface = SvgSurface::new(canvas);
    draw_markers(&mut surface, canvas, &points);
    draw_pass(&mut surface, &points)?;

    event!(
        Level::DEBUG,
        "Drew play {:?} through {}",
        canvas.canvas_id(),
        points
            .iter()
            .map(|point| point.to_token())
            .collect::<Vec<_>>()
            .join(" ")
    );

    Ok(surface.into_document())
}

#[cfg(test)]
mod test {
    use super::*;

    fn registry() -> Registry {
        let names = ["Ana", "Bo", "Cy"];
        let images = ["ana.png", "bo.png", "cy.png"];
        let coords = ["100,100", "250,80", "400,200"];

        Registry::build(
            "Blue FC",
            &RosterColumns {
                names: &names,
                images: &images,
                heights: &[1.7, 1.8, 1.9],
                gpgs: &[0.1, 0.2, 0.3],
                apgs: &[0.3, 0.2, 0.1],
                sogs: &[1.0, 2.0, 3.0],
                coords: &coords,
            },
        )
        .unwrap()
    }

    fn canvas() -> CanvasConfig {
        CanvasConfig::new(
            "Give and go",
            600,
            400,
            Background::Image("pitch.png".to_owned()),
        )
    }

    #[test]
    fn test_draw_named_play() {
        let drawn = draw_named_play(
            &canvas(),
            &registry(),
            &["Ana", "Bo", "Ana"],
            ResolverConfig::strict(),
        )
        .unwrap();

        assert_eq!(drawn.report.movement, "Ana passes to Bo, Bo passes to Ana");
        assert_eq!(drawn.report.players_involved.rows.len(), 3);

        let rendered = drawn.document.to_string();
        assert!(rendered.contains(r#"id="Giveandgo""#));
        assert!(rendered.contains(r#"href="pitch.png""#));
        assert_eq!(rendered.matches(r#"href="ana.png""#).count(), 1);
        assert!(rendered.contains(r#"href="cy.png""#));
        assert_eq!(rendered.matches("<path").count(), 1);
        assert!(rendered.contains("Players Involved In Play"));
    }

    #[test]
    fn test_draw_named_play_errors() {
        let (canvas, registry) = (canvas(), registry());
        let draw = |pass: &[&str], config: ResolverConfig| {
            draw_named_play(&canvas, &registry, pass, config)
        };

        assert!(matches!(
            draw(&["Zed", "Ana"], ResolverConfig::permissive()),
            Err(PlayError::NameNotFound { name }) if name == "Zed"
        ));
        assert!(matches!(
            draw(&["Ana"], ResolverConfig::strict()),
            Err(PlayError::InsufficientPathLength { found: 1 })
        ));
        // Permissive skips leave a single point, which is not a pass.
        assert!(matches!(
            draw(&["Ana", "Zed"], ResolverConfig::permissive()),
            Err(PlayError::InsufficientPathLength { found: 1 })
        ));
    }

    #[test]
    fn test_draw_coordinate_play() {
        let canvas = CanvasConfig::new("Switch", 600, 400, Background::default());
        let document = draw_coordinate_play(&canvas, &["50,50", "300,200", "550,60"])
            .unwrap();
        let rendered = document.to_string();

        // Background, two goals and three markers
        assert_eq!(rendered.matches("<rect").count(), 6);
        assert_eq!(rendered.matches("<path").count(), 1);
    }

    #[test]
    fn test_draw_coordinate_play_errors() {
        let canvas = CanvasConfig::new("Switch", 600, 400, Background::default());

        assert!(matches!(
            draw_coordinate_play(&canvas, &["50,50", "300"]),
            Err(PlayError::MalformedCoordinate { .. })
        ));
        assert!(matches!(
            draw_coordinate_play(&canvas, &["50,50"]),
            Err(PlayError::InsufficientPathLength { found: 1 })
        ));
    }
}
