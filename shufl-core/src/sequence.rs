pub const SEPARATOR: &str = "-";

/// Splits a dasherized sequence into its tokens. An empty string is a single
/// empty token, not an empty sequence.
pub fn from_dasherized(input: &str) -> Vec<String> {
    input.split(SEPARATOR).map(String::from).collect()
}

pub fn to_dasherized(items: &[String]) -> String {
    items.join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let items = from_dasherized("D-B-A-C");
        assert_eq!(items, vec!["D", "B", "A", "C"]);
        assert_eq!(to_dasherized(&items), "D-B-A-C");
    }

    #[test]
    fn test_empty_string_is_a_single_empty_token() {
        assert_eq!(from_dasherized(""), vec![String::new()]);
    }

    #[test]
    fn test_single_token_has_no_separator() {
        assert_eq!(from_dasherized("solo"), vec!["solo"]);
        assert_eq!(to_dasherized(&["solo".to_string()]), "solo");
    }
}
