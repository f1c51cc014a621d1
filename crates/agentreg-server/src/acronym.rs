//! Short-form names derived from an agent name's capital letters.

/// Builds the acronym used as `short_name` on the max-sr listing.
///
/// A new segment starts at the beginning of the name and before every ASCII
/// uppercase letter. The first character of each segment is kept and the
/// result is upper-cased. Total over all strings: `""` yields `""`.
///
/// ```
/// use agentreg_server::acronym::derive_acronym;
///
/// assert_eq!(derive_acronym("myTestAgent"), "MTA");
/// assert_eq!(derive_acronym("agent"), "A");
/// ```
pub fn derive_acronym(name: &str) -> String {
    name.chars()
        .enumerate()
        .filter(|(idx, ch)| *idx == 0 || ch.is_ascii_uppercase())
        .flat_map(|(_, ch)| ch.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn lowercase_name_is_one_segment() {
        assert_eq!(derive_acronym("agent"), "A");
    }

    #[test]
    fn camel_case_boundaries() {
        assert_eq!(derive_acronym("johnSmith"), "JS");
        assert_eq!(derive_acronym("myTestAgent"), "MTA");
        assert_eq!(derive_acronym("SalesBot"), "SB");
    }

    #[test]
    fn all_caps_is_unchanged() {
        assert_eq!(derive_acronym("ABC"), "ABC");
    }

    #[test]
    fn empty_name() {
        assert_eq!(derive_acronym(""), "");
    }

    #[test]
    fn non_letter_leading_characters_are_kept() {
        assert_eq!(derive_acronym("2ndLine"), "2L");
        assert_eq!(derive_acronym(" agent"), " ");
    }

    #[test]
    fn only_ascii_capitals_split() {
        // 'É' is uppercase but not A-Z, so it does not start a segment.
        assert_eq!(derive_acronym("éclairÉtoile"), "É");
    }

    proptest! {
        #[test]
        fn one_initial_per_segment(name in "[a-zA-Z]{0,24}") {
            let expected = name
                .chars()
                .enumerate()
                .filter(|(i, c)| *i == 0 || c.is_ascii_uppercase())
                .count();
            let acronym = derive_acronym(&name);
            prop_assert_eq!(acronym.chars().count(), expected);
            prop_assert!(acronym.chars().all(|c| c.is_ascii_uppercase()));
        }

        #[test]
        fn never_panics(name in ".*") {
            let _ = derive_acronym(&name);
        }
    }
}
