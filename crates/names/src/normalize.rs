/// Case-fold, drop punctuation and collapse whitespace
///
/// `"  Hello,   WORLD! "` becomes `"hello world"`.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized text split into words
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello,   WORLD! "), "hello world");
        assert_eq!(normalize("O'Brien"), "obrien");
        assert_eq!(normalize("\tAda\nLovelace"), "ada lovelace");
        assert_eq!(normalize("?!"), "");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("My name is Ada."), vec!["my", "name", "is", "ada"]);
        assert!(tokenize("  ...  ").is_empty());
    }
}
