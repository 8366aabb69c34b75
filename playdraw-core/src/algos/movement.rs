use crate::error::{PlayError, PlayResult};

const PASS_VERB: &str = "passes to";
const PASS_SEPARATOR: &str = ", ";

/// Describes ball movement as `"A passes to B, B passes to C"`.
///
/// A path needs at least two participants to describe a pass.
pub fn describe_movement<S: AsRef<str>>(path: &[S]) -> PlayResult<String> {
    if path.len() < 2 {
        return Err(PlayError::InsufficientPathLength { found: path.len() });
    }

    let passes = path
        .windows(2)
        .map(|pair| format!("{} {} {}", pair[0].as_ref(), PASS_VERB, pair[1].as_ref()))
        .collect::<Vec<_>>();

    Ok(passes.join(PASS_SEPARATOR))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_describe_single_pass() {
        assert_eq!(describe_movement(&["A", "B"]).unwrap(), "A passes to B");
    }

    #[test]
    fn test_describe_chain() {
        assert_eq!(
            describe_movement(&["A", "B", "C"]).unwrap(),
            "A passes to B, B passes to C"
        );
        assert_eq!(
            describe_movement(&["A", "B", "A", "D"]).unwrap(),
            "A passes to B, B passes to A, A passes to D"
        );
    }

    #[test]
    fn test_describe_too_short() {
        let empty: [&str; 0] = [];

        assert_eq!(
            describe_movement(&["A"]),
            Err(PlayError::InsufficientPathLength { found: 1 })
        );
        assert_eq!(
            describe_movement(&empty),
            Err(PlayError::InsufficientPathLength { found: 0 })
        );
    }

    #[test]
    fn test_describe_coordinate_tokens() {
        assert_eq!(
            describe_movement(&["10,10".to_owned(), "40,80".to_owned()]).unwrap(),
            "10,10 passes to 40,80"
        );
    }
}
