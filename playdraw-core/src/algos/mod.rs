mod movement;
mod pass_resolver;
mod play_drawer;

pub use movement::describe_movement;
pub use pass_resolver::{
    DuplicatePolicy, NamePolicy, PassResolver, ResolverConfig, resolve_by_coordinates,
};
pub use play_drawer::{
    Background, CanvasConfig, DrawingSurface, SvgSurface, draw_markers, draw_pass, draw_players,
};
