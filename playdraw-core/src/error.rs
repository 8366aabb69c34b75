use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlayError {
    #[error(r#"malformed coordinate "{token}", expected "x,y""#)]
    MalformedCoordinate { token: String },
    #[error("roster column `{column}` has {found} entries, expected {expected}")]
    IndexOutOfRange {
        column: &'static str,
        expected: usize,
        found: usize,
    },
    #[error(r#"no player named "{name}" in the registry"#)]
    NameNotFound { name: String },
    #[error("a pass needs at least 2 points, got {found}")]
    InsufficientPathLength { found: usize },
    #[error(r#"player name "{name}" matches more than one registry entry"#)]
    DuplicatePlayerName { name: String },
}

pub type PlayResult<T> = Result<T, PlayError>;
