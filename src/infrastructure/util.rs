use crate::domain::slug::{SENTINEL_SLUG, SlugGenerator};
use deunicode::deunicode_char;

/// Unicode-aware slugifier with ASCII transliteration.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let mut separated = String::with_capacity(input.len());
        let mut in_gap = false;
        for c in input.chars() {
            if c.is_alphanumeric() {
                separated.push(c);
                in_gap = false;
            } else if !in_gap {
                separated.push('-');
                in_gap = true;
            }
        }

        let ascii: String = separated
            .chars()
            .filter_map(|c| if c == '-' { Some("-") } else { deunicode_char(c) })
            .flat_map(str::chars)
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();

        let mut slug = String::with_capacity(ascii.len());
        for part in ascii.split('-').filter(|part| !part.is_empty()) {
            if !slug.is_empty() {
                slug.push('-');
            }
            slug.push_str(part);
        }
        slug.make_ascii_lowercase();

        if slug.is_empty() {
            SENTINEL_SLUG.to_owned()
        } else {
            slug
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slug::Slug;

    fn slugify(input: &str) -> String {
        DefaultSlugGenerator.slugify(input)
    }

    #[test]
    fn punctuation_becomes_single_separator() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  a -- b__c  "), "a-b-c");
        assert_eq!(slugify("I ❤ Rust"), "i-rust");
    }

    #[test]
    fn empty_results_use_sentinel() {
        for input in ["", "   ", "!!!", "---", "❤"] {
            assert_eq!(slugify(input), SENTINEL_SLUG, "{input:?}");
        }
    }

    #[test]
    fn transliterates_to_ascii() {
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
        assert_eq!(slugify("Straße"), "strasse");
        assert_eq!(slugify("Ünïcödé 2024"), "unicode-2024");
    }

    #[test]
    fn output_is_canonical_and_idempotent() {
        let inputs = [
            "Hello, World!",
            "-Leading and trailing-",
            "Mixed_CASE and   spaces",
            "Ωμέγα / Δέλτα",
            "北京 2008",
            "tab\tand\nnewline",
        ];
        for input in inputs {
            let once = slugify(input);
            assert!(Slug::new(once.as_str()).is_ok(), "{input:?} -> {once:?}");
            assert_eq!(slugify(&once), once, "{input:?}");
        }
    }
}
