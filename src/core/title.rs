//! Title casing for free-text product names.
//!
//! Names in the catalog are typed by hand and arrive in any casing. Every
//! report shows them through [`format_title`], which title-cases each word
//! with a few food-label exceptions: hyphenated words capitalize every
//! segment, known acronyms go upper-case, units stay lower-case, and short
//! minor words stay lower-case unless they open or close the title.

/// Words always rendered upper-case.
const ACRONYMS: &[&str] = &[
    "bbq", "blt", "usda", "gmo", "msg", "pb&j", "bpa", "id", "p/c/f", "usa",
];

/// Measurement units, always rendered lower-case.
const UNITS: &[&str] = &["oz", "fl", "ml", "g", "mg", "kcal"];

/// Articles, conjunctions and short prepositions kept lower-case mid-title.
const MINOR_WORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "for", "or", "nor", "so", "yet", "as", "at", "by", "in", "of",
    "on", "to", "up", "with", "from", "into", "onto", "upon", "via", "mid",
];

/// Formats free text as a display title.
///
/// Tokens are separated by whitespace and re-joined with single spaces.
/// Punctuation around a word (commas, parentheses) is kept in place while the
/// word itself is re-cased.
///
/// # Examples
/// ```
/// use food_log::core::title::format_title;
///
/// assert_eq!(format_title("bbq chicken"), "BBQ Chicken");
/// assert_eq!(format_title("protein bar of champions"), "Protein Bar of Champions");
/// ```
#[must_use]
pub fn format_title(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let last = words.len().saturating_sub(1);

    words
        .iter()
        .enumerate()
        .map(|(index, word)| format_word(word, index == 0 || index == last))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Same as [`format_title`] for optional text; `None` yields an empty string.
#[must_use]
pub fn format_optional_title(text: Option<&str>) -> String {
    text.map(format_title).unwrap_or_default()
}

fn format_word(word: &str, is_edge: bool) -> String {
    let (prefix, core, suffix) = split_core(word);
    let lowered = core.to_lowercase();

    let cased = if core.contains('-') {
        core.split('-').map(capitalize).collect::<Vec<_>>().join("-")
    } else if ACRONYMS.contains(&lowered.as_str()) {
        core.to_uppercase()
    } else if UNITS.contains(&lowered.as_str()) {
        lowered
    } else if is_edge {
        capitalize(core)
    } else if MINOR_WORDS.contains(&lowered.as_str()) {
        lowered
    } else {
        capitalize(core)
    };

    format!("{prefix}{cased}{suffix}")
}

/// Splits a token into leading punctuation, the alphanumeric-bounded core, and
/// trailing punctuation.
fn split_core(word: &str) -> (&str, &str, &str) {
    let Some(start) = word.find(char::is_alphanumeric) else {
        return (word, "", "");
    };
    let end = word
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map_or(word.len(), |(i, c)| i + c.len_utf8());

    (&word[..start], &word[start..end], &word[end..])
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(format_title(""), "");
        assert_eq!(format_title("   "), "");
        assert_eq!(format_optional_title(None), "");
    }

    #[test]
    fn test_acronym_upper_cased() {
        assert_eq!(format_title("bbq chicken"), "BBQ Chicken");
        assert_eq!(format_title("organic usda certified"), "Organic USDA Certified");
        assert_eq!(format_title("the pb&j sandwich"), "The PB&J Sandwich");
        assert_eq!(format_title("macros p/c/f"), "Macros P/C/F");
    }

    #[test]
    fn test_hyphenated_segments_each_capitalized() {
        assert_eq!(format_title("sugar-free vanilla"), "Sugar-Free Vanilla");
        assert_eq!(format_title("low-fat, high-PROTEIN"), "Low-Fat, High-Protein");
    }

    #[test]
    fn test_minor_words_lower_mid_title() {
        assert_eq!(format_title("protein bar of champions"), "Protein Bar of Champions");
        assert_eq!(format_title("PEANUT BUTTER AND JELLY"), "Peanut Butter and Jelly");
    }

    #[test]
    fn test_edge_words_capitalized_even_if_minor() {
        assert_eq!(format_title("the best of"), "The Best Of");
        assert_eq!(format_title("a"), "A");
    }

    #[test]
    fn test_units_stay_lower_even_at_edges() {
        assert_eq!(format_title("oz of almonds"), "oz of Almonds");
        assert_eq!(format_title("cold brew 12 FL OZ"), "Cold Brew 12 fl oz");
        assert_eq!(format_title("energy 100 kcal"), "Energy 100 kcal");
    }

    #[test]
    fn test_acronym_beats_edge_and_minor() {
        assert_eq!(format_title("id bar"), "ID Bar");
        assert_eq!(format_title("made in usa"), "Made in USA");
    }

    #[test]
    fn test_punctuation_preserved_around_core() {
        assert_eq!(format_title("chicken (bbq), grilled"), "Chicken (BBQ), Grilled");
        assert_eq!(format_title("\"cookies and cream\""), "\"Cookies and Cream\"");
        assert_eq!(format_title("rice (modified)"), "Rice (Modified)");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(format_title("  greek\tyogurt \n plain "), "Greek Yogurt Plain");
    }

    #[test]
    fn test_punctuation_only_token_untouched() {
        assert_eq!(format_title("salt & pepper"), "Salt & Pepper");
    }
}
