// All renderings share the same sentence list so their line counts always agree

use serde::{Deserialize, Serialize};

use crate::tokenizer::split_sentences;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListResult {
    pub bullets: String,
    pub numbered: String,
    pub checkboxes: String,
    pub arrows: String,
}

/// Render sentences as bullet, numbered, checkbox and arrow lists
pub fn format_lists(text: &str) -> ListResult {
    let sentences = split_sentences(text);
    let render = |prefix: &dyn Fn(usize) -> String| {
        sentences
            .iter()
            .map(|sentence| format!("{}{}", prefix(sentence.index), sentence.text))
            .collect::<Vec<_>>()
            .join("\n")
    };

    ListResult {
        bullets: render(&|_| "• ".to_string()),
        numbered: render(&|index| format!("{}. ", index + 1)),
        checkboxes: render(&|_| "☐ ".to_string()),
        arrows: render(&|_| "→ ".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_styles() {
        let lists = format_lists("Buy milk. Call mom! Ship it?");
        assert_eq!(lists.bullets, "• Buy milk\n• Call mom\n• Ship it");
        assert_eq!(lists.numbered, "1. Buy milk\n2. Call mom\n3. Ship it");
        assert_eq!(lists.checkboxes, "☐ Buy milk\n☐ Call mom\n☐ Ship it");
        assert_eq!(lists.arrows, "→ Buy milk\n→ Call mom\n→ Ship it");
    }

    #[test]
    fn test_empty_input_gives_empty_strings() {
        assert_eq!(format_lists(""), ListResult::default());
        assert_eq!(format_lists(" ... "), ListResult::default());
    }
}
