use log::debug;
use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use crate::error::{NameListError, NameListResult};
use crate::normalize::{normalize, tokenize};

/// Fixed set of known names, stored normalized
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    names: HashSet<String>,
}

impl NameList {
    /// Build from raw names; blank entries are skipped
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| normalize(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    /// Load one name per line; blank lines and `#` comments are ignored
    pub fn from_file(path: impl AsRef<Path>) -> NameListResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| NameListError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let list = Self::from_reader(std::io::BufReader::new(file)).map_err(|e| match e {
            NameListError::Io { error, .. } => NameListError::Io {
                path: path.display().to_string(),
                error,
            },
        })?;
        debug!("loaded {} names from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn from_reader(reader: impl BufRead) -> NameListResult<Self> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|e| NameListError::Io {
                path: "<reader>".to_string(),
                error: e.to_string(),
            })?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            lines.push(line.to_string());
        }
        Ok(Self::new(lines))
    }

    /// Add every name from another list
    pub fn merge(&mut self, other: NameList) {
        self.names.extend(other.names);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Exact membership after normalization
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&normalize(name))
    }

    /// Whether `text` mentions a known name
    pub fn matches(&self, text: &str) -> bool {
        !self.matched_names(text).is_empty()
    }

    /// Known names found in `text`, in order of appearance
    ///
    /// Multi-word names match as consecutive words; at each word the
    /// longest known name wins.
    pub fn matched_names(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        let longest = self.longest_name_words();
        let mut found: Vec<String> = Vec::new();

        let mut start = 0;
        while start < tokens.len() {
            let widest = longest.min(tokens.len() - start);
            let hit = (1..=widest)
                .rev()
                .map(|words| (words, tokens[start..start + words].join(" ")))
                .find(|(_, candidate)| self.names.contains(candidate));

            match hit {
                Some((words, name)) => {
                    if !found.contains(&name) {
                        found.push(name);
                    }
                    start += words;
                }
                None => start += 1,
            }
        }
        found
    }

    fn longest_name_words(&self) -> usize {
        self.names
            .iter()
            .map(|name| name.split(' ').count())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample() -> NameList {
        NameList::new(["Ada", "Grace", " Linus ", ""])
    }

    #[test]
    fn test_new_normalizes() {
        let list = sample();
        assert_eq!(list.len(), 3);
        assert!(list.contains("ADA"));
        assert!(list.contains("linus"));
        assert!(!list.contains("Alan"));
    }

    #[test]
    fn test_matches_any_token() {
        let list = sample();
        assert!(list.matches("Hi, I'm Grace!"));
        assert!(list.matches("my name is   ada"));
        assert!(!list.matches("Nobody here"));
        assert!(!list.matches(""));
    }

    #[test]
    fn test_matched_names_order_and_dedup() {
        let list = sample();
        assert_eq!(
            list.matched_names("linus, ada and Linus again"),
            vec!["linus", "ada"]
        );
    }

    #[test]
    fn test_multi_word_names() {
        let list = NameList::new(["Ada Lovelace", "Ada", "Grace Hopper"]);
        assert!(list.contains("ada  LOVELACE"));
        assert_eq!(
            list.matched_names("I'm Ada Lovelace, not Grace"),
            vec!["ada lovelace"]
        );
        assert_eq!(list.matched_names("just ada"), vec!["ada"]);
        assert!(list.matches("grace hopper here"));
        assert!(!list.matches("hopper"));
    }

    #[test]
    fn test_from_reader_skips_comments() {
        let input = "# known people\nAda\n\n  Grace  \n#Linus\n";
        let list = NameList::from_reader(Cursor::new(input)).unwrap();
        assert_eq!(list.len(), 2);
        assert!(!list.contains("linus"));
    }

    #[test]
    fn test_merge() {
        let mut list = sample();
        list.merge(NameList::new(["Alan", "ada"]));
        assert_eq!(list.len(), 4);
        assert!(list.contains("alan"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = NameList::from_file("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
