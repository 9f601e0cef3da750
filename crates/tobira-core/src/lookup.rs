/// Which endpoint a selection resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Single character
    Kanji,
    /// Short multi-character phrase
    Vocabulary,
}

impl Category {
    pub fn path_segment(self) -> &'static str {
        match self {
            Category::Kanji => "kanji",
            Category::Vocabulary => "vocabulary",
        }
    }
}

/// Builds lookup-page URLs for a configured host.
#[derive(Debug, Clone)]
pub struct LookupBuilder {
    host: String,
}

impl LookupBuilder {
    pub fn new(host: String) -> Self {
        Self { host }
    }

    /// Percent-encodes `text` as a single path component.
    pub fn url_for(&self, category: Category, text: &str) -> String {
        format!(
            "https://{}/{}/{}",
            self.host,
            category.path_segment(),
            urlencoding::encode(text)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> LookupBuilder {
        LookupBuilder::new("www.wanikani.com".to_string())
    }

    #[test]
    fn kanji_and_vocabulary_endpoints() {
        assert_eq!(
            builder().url_for(Category::Kanji, "提"),
            "https://www.wanikani.com/kanji/%E6%8F%90"
        );
        assert!(
            builder()
                .url_for(Category::Vocabulary, "日本語")
                .starts_with("https://www.wanikani.com/vocabulary/")
        );
    }

    #[test]
    fn spaces_and_reserved_chars_are_escaped() {
        let url = builder().url_for(Category::Vocabulary, "日本 語/?#");
        assert!(!url.contains(' '));
        let path = url.rsplit('/').next().unwrap();
        assert!(!path.contains('?'));
        assert!(!path.contains('#'));
    }

    #[test]
    fn encoding_round_trips() {
        let text = "お早うございます";
        let url = builder().url_for(Category::Vocabulary, text);
        let encoded = url.rsplit('/').next().unwrap();
        assert_eq!(urlencoding::decode(encoded).unwrap(), text);
    }
}
