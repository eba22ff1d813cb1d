use super::rich_text::as_text;
use crate::constants::WORDS_PER_MINUTE;
use crate::model::ContentSection;

/// Estimated minutes to read a post's sections, rounded up, at least one.
pub fn reading_minutes(sections: &[ContentSection]) -> usize {
    let words: usize = sections
        .iter()
        .map(|section| word_count(&section.heading) + word_count(&as_text(&section.body)))
        .sum();

    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RichTextBlock;

    fn section(heading: &str, words: usize) -> ContentSection {
        ContentSection {
            heading: heading.to_string(),
            body: vec![RichTextBlock::paragraph(vec!["palavra"; words].join(" "))],
        }
    }

    #[test]
    fn test_rounds_up() {
        // 2 heading words + 399 body words = 401 words -> 3 minutes
        assert_eq!(reading_minutes(&[section("Duas palavras", 399)]), 3);
    }

    #[test]
    fn test_exact_multiple() {
        assert_eq!(reading_minutes(&[section("", 200), section("", 200)]), 2);
    }

    #[test]
    fn test_empty_post_is_one_minute() {
        assert_eq!(reading_minutes(&[]), 1);
    }
}
