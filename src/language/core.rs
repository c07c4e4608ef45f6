use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::error::Error;

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

/// A word list embedded at build time
#[derive(Deserialize, Clone, Debug)]
pub struct Language {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Language {
    pub fn new(file_name: &str) -> Self {
        // embedded lists are checked by the tests below
        read_language_from_file(&format!("{file_name}.json")).expect("embedded word list is valid")
    }

    /// `num` words drawn independently, so repeats are possible.
    pub fn get_random(&self, num: usize) -> Vec<String> {
        let rng = &mut rand::thread_rng();

        (0..num)
            .filter_map(|_| self.words.choose(rng).cloned())
            .collect()
    }
}

fn read_language_from_file(file_name: &str) -> Result<Language, Box<dyn Error>> {
    let file = LANG_DIR
        .get_file(file_name)
        .ok_or_else(|| format!("word list {file_name} not found"))?;

    let file_as_str = file
        .contents_utf8()
        .ok_or_else(|| format!("word list {file_name} is not utf-8"))?;

    Ok(serde_json::from_str(file_as_str)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_new_english() {
        let lang = Language::new("english");

        assert_eq!(lang.name, "english");
        assert!(!lang.words.is_empty());
        assert_eq!(lang.size as usize, lang.words.len());
    }

    #[test]
    fn test_language_new_english_long() {
        let lang = Language::new("english_long");

        assert_eq!(lang.name, "english_long");
        assert_eq!(lang.size as usize, lang.words.len());
    }

    #[test]
    fn test_words_have_no_whitespace() {
        for name in ["english", "english_long"] {
            let lang = Language::new(name);
            assert!(lang
                .words
                .iter()
                .all(|w| !w.is_empty() && !w.contains(char::is_whitespace)));
        }
    }

    #[test]
    fn test_get_random_count() {
        let lang = Language::new("english");

        assert_eq!(lang.get_random(8).len(), 8);
        assert!(lang.get_random(0).is_empty());
    }

    #[test]
    fn test_get_random_allows_more_than_list_size() {
        let lang = Language {
            name: "tiny".to_string(),
            size: 2,
            words: vec!["a".to_string(), "b".to_string()],
        };

        assert_eq!(lang.get_random(5).len(), 5);
    }

    #[test]
    fn test_language_deserialization() {
        let json_data = r#"{ "name": "test", "size": 3, "words": ["hello", "world", "test"] }"#;

        let lang: Language = serde_json::from_str(json_data).unwrap();

        assert_eq!(lang.name, "test");
        assert_eq!(lang.words.len(), 3);
    }

    #[test]
    fn test_read_nonexistent_language_file() {
        assert!(read_language_from_file("nonexistent.json").is_err());
    }
}
