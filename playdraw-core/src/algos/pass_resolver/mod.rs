use crate::{
    error::{PlayError, PlayResult},
    registry::Registry,
    types::{Coordinate, Player},
};

use tracing::{Level, event};

mod resolver_config;

pub use resolver_config::{DuplicatePolicy, NamePolicy, ResolverConfig};

/// Parses every `"x,y"` token, keeping order. An empty input yields an
/// empty path.
pub fn resolve_by_coordinates<S: AsRef<str>>(tokens: &[S]) -> PlayResult<Vec<Coordinate>> {
    tokens
        .iter()
        .map(|token| Coordinate::parse(token.as_ref()))
        .collect()
}

/// Resolves pass participants by name against a [Registry].
pub struct PassResolver<'a> {
    registry: &'a Registry,
    config: ResolverConfig,
}

impl<'a> PassResolver<'a> {
    pub fn new(registry: &'a Registry, config: ResolverConfig) -> Self {
        PassResolver { registry, config }
    }

    /// Maps each name to the position of its player, in pass order.
    ///
    /// The first name must always resolve. Later misses either fail or
    /// are dropped from the result depending on [NamePolicy], which
    /// shortens the path by one per miss.
    pub fn resolve_by_names<S: AsRef<str>>(&self, names: &[S]) -> PlayResult<Vec<Coordinate>> {
        Ok(self
            .resolve_players(names)?
            .into_iter()
            .map(|player| player.position)
            .collect())
    }

    /// Same as [Self::resolve_by_names] but yields the matched records.
    pub fn resolve_players<S: AsRef<str>>(&self, names: &[S]) -> PlayResult<Vec<&'a Player>> {
        let mut players = Vec::with_capacity(names.len());

        for (i, name) in names.iter().enumerate() {
            let name = name.as_ref();

            match self.lookup(name)? {
                Some(player) => players.push(player),
                None if i == 0 || self.config.name_policy == NamePolicy::Strict => {
                    return Err(PlayError::NameNotFound {
                        name: name.to_owned(),
                    });
                }
                None => {
                    event!(
                        Level::WARN,
                        "Skipping unknown player {:?} at pass index {}",
                        name,
                        i
                    );
                }
            }
        }

        event!(
            Level::DEBUG,
            "Resolved {} of {} pass participants",
            players.len(),
            names.len()
        );

        Ok(players)
    }

    fn lookup(&self, name: &str) -> PlayResult<Option<&'a Player>> {
        if self.config.duplicate_policy == DuplicatePolicy::Reject
            && self.registry.count_named(name) > 1
        {
            return Err(PlayError::DuplicatePlayerName {
                name: name.to_owned(),
            });
        }

        Ok(self.registry.find(name))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::PlayerStats;

    fn player(name: &str, x: f64, y: f64) -> Player {
        Player::new(
            name,
            format!("{name}.png"),
            "Test XI",
            1.8,
            PlayerStats::default(),
            Coordinate::new(x, y),
        )
    }

    fn registry() -> Registry {
        Registry::new(
            "Test XI",
            vec![
                player("A", 1.0, 1.0),
                player("B", 2.0, 2.0),
                player("C", 3.0, 3.0),
            ],
        )
    }

    #[test]
    fn test_resolve_by_coordinates_keeps_order() {
        let path = resolve_by_coordinates(&["0,0", "10,20"]).unwrap();
        assert_eq!(
            path,
            vec![Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 20.0)]
        );
    }

    #[test]
    fn test_resolve_by_coordinates_empty() {
        let empty: [&str; 0] = [];
        assert_eq!(resolve_by_coordinates(&empty), Ok(vec![]));
    }

    #[test]
    fn test_resolve_by_coordinates_is_repeatable() {
        let tokens = ["5,5", "5,5", "7,1"];
        let first = resolve_by_coordinates(&tokens).unwrap();
        let second = resolve_by_coordinates(&tokens).unwrap();

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_by_coordinates_malformed() {
        assert!(matches!(
            resolve_by_coordinates(&["0,0", "1,2,3"]),
            Err(PlayError::MalformedCoordinate { .. })
        ));
    }

    #[test]
    fn test_resolve_by_names_strict() {
        let registry = registry();
        let resolver = PassResolver::new(&registry, ResolverConfig::strict());

        assert_eq!(
            resolver.resolve_by_names(&["A", "B"]),
            Ok(vec![Coordinate::new(1.0, 1.0), Coordinate::new(2.0, 2.0)])
        );
        assert_eq!(
            resolver.resolve_by_names(&["C", "A", "C"]),
            Ok(vec![
                Coordinate::new(3.0, 3.0),
                Coordinate::new(1.0, 1.0),
                Coordinate::new(3.0, 3.0),
            ])
        );
    }

    #[test]
    fn test_resolve_by_names_strict_unknown_later_name() {
        let registry = registry();
        let resolver = PassResolver::new(&registry, ResolverConfig::strict());

        assert_eq!(
            resolver.resolve_by_names(&["A", "Z", "B"]),
            Err(PlayError::NameNotFound {
                name: "Z".to_owned()
            })
        );
    }

    #[test]
    fn test_resolve_by_names_unknown_first_name_fails_in_both_modes() {
        let registry = registry();

        for config in [ResolverConfig::strict(), ResolverConfig::permissive()] {
            let resolver = PassResolver::new(&registry, config);
            assert_eq!(
                resolver.resolve_by_names(&["Z", "A"]),
                Err(PlayError::NameNotFound {
                    name: "Z".to_owned()
                })
            );
        }
    }

    #[test]
    fn test_resolve_by_names_permissive_skips_later_misses() {
        let registry = registry();
        let resolver = PassResolver::new(&registry, ResolverConfig::permissive());

        let path = resolver.resolve_by_names(&["A", "Z", "B", "Y"]).unwrap();
        assert_eq!(
            path,
            vec![Coordinate::new(1.0, 1.0), Coordinate::new(2.0, 2.0)]
        );
    }

    #[test]
    fn test_resolve_by_names_is_case_sensitive() {
        let registry = registry();
        let resolver = PassResolver::new(&registry, ResolverConfig::strict());

        assert!(resolver.resolve_by_names(&["a"]).is_err());
    }

    #[test]
    fn test_duplicate_names() {
        let registry = Registry::new(
            "Test XI",
            vec![
                player("A", 1.0, 1.0),
                player("A", 9.0, 9.0),
                player("B", 2.0, 2.0),
            ],
        );

        let first_match = PassResolver::new(&registry, ResolverConfig::strict());
        assert_eq!(
            first_match.resolve_by_names(&["A", "B"]),
            Ok(vec![Coordinate::new(1.0, 1.0), Coordinate::new(2.0, 2.0)])
        );

        let config = ResolverConfig::strict()
            .with_duplicate_policy(DuplicatePolicy::Reject);
        let rejecting = PassResolver::new(&registry, config);
        assert_eq!(
            rejecting.resolve_by_names(&["B", "A"]),
            Err(PlayError::DuplicatePlayerName {
                name: "A".to_owned()
            })
        );
        assert!(rejecting.resolve_by_names(&["B"]).is_ok());
    }

    #[test]
    fn test_resolve_players_returns_records() {
        let registry = registry();
        let resolver = PassResolver::new(&registry, ResolverConfig::strict());

        let players = resolver.resolve_players(&["B", "C"]).unwrap();
        let names: Vec<_> = players.iter().map(|player| player.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }
}
