/// Grammar-explanation verbosity chosen per user. Decoding anything
/// unrecognized falls back to Simple via `Default`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GrammarMode {
    #[default]
    Simple,
    BasicExplain,
    FullExplain,
}

impl GrammarMode {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "mode_simple" => Some(GrammarMode::Simple),
            "mode_basic" => Some(GrammarMode::BasicExplain),
            "mode_full" => Some(GrammarMode::FullExplain),
            _ => None,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            GrammarMode::Simple => "mode_simple",
            GrammarMode::BasicExplain => "mode_basic",
            GrammarMode::FullExplain => "mode_full",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GrammarMode::Simple => "Correction only",
            GrammarMode::BasicExplain => "Explain spelling & punctuation",
            GrammarMode::FullExplain => "Explain all errors",
        }
    }

    pub fn explains_surface(self) -> bool {
        !matches!(self, GrammarMode::Simple)
    }

    pub fn explains_deep(self) -> bool {
        matches!(self, GrammarMode::FullExplain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for mode in [
            GrammarMode::Simple,
            GrammarMode::BasicExplain,
            GrammarMode::FullExplain,
        ] {
            assert_eq!(GrammarMode::from_tag(mode.as_tag()), Some(mode));
        }
    }

    #[test]
    fn unknown_tag_falls_back_to_simple() {
        let mode = GrammarMode::from_tag("mode_bogus").unwrap_or_default();
        assert_eq!(mode, GrammarMode::Simple);
    }
}
