//! Literal replacement pairs and the substitution pass.
//!
//! A starterkit tree marks the spots to customize with three placeholders:
//! the fixed label `"My theme"`, a description token `{token}_description`,
//! and the machine-name token itself (the basename of the kit's
//! `*.info.yml`). Generation rewrites all three, and drops the
//! `hidden: true` line that keeps the starterkit invisible to the host CMS.

/// Human-readable label placeholder used by every starterkit.
pub const LABEL_PLACEHOLDER: &str = "My theme";

/// The line that hides a starterkit from theme listings; removed on
/// generation.
pub const HIDDEN_LINE: &str = "\nhidden: true\n";

/// Build the ordered replacement pairs for one generation run.
///
/// `token` is the placeholder machine name discovered from the starterkit.
/// The description key is derived from it (`{token}_description`), so it
/// must be listed before the bare token would otherwise swallow its prefix —
/// [`translate`] prefers the longest match at each position, which keeps
/// this safe regardless of order, but the declared order mirrors the
/// substitution contract.
pub fn replacement_pairs(
    token: &str,
    name: &str,
    description: &str,
    machine_name: &str,
) -> Vec<(String, String)> {
    vec![
        (LABEL_PLACEHOLDER.to_string(), name.to_string()),
        (format!("{token}_description"), description.to_string()),
        (token.to_string(), machine_name.to_string()),
        (HIDDEN_LINE.to_string(), "\n".to_string()),
    ]
}

/// Apply literal replacement pairs in a single left-to-right pass.
///
/// At each position the longest matching key wins, the replacement is
/// emitted, and scanning resumes *after* it — replacement output is never
/// re-scanned. Empty keys are ignored.
pub fn translate(content: &str, pairs: &[(String, String)]) -> String {
    let mut out = String::with_capacity(content.len());
    let mut i = 0;
    while i < content.len() {
        let rest = &content[i..];
        let matched = pairs
            .iter()
            .filter(|(from, _)| !from.is_empty() && rest.starts_with(from.as_str()))
            .max_by_key(|(from, _)| from.len());
        match matched {
            Some((from, to)) => {
                out.push_str(to);
                i += from.len();
            }
            None => match rest.chars().next() {
                Some(c) => {
                    out.push(c);
                    i += c.len_utf8();
                }
                None => break,
            },
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(f, t)| (f.to_string(), t.to_string()))
            .collect()
    }

    #[test]
    fn longest_key_wins() {
        // "mytheme_description" must not be eaten by the shorter "mytheme".
        let p = pairs(&[
            ("mytheme_description", "A fine theme."),
            ("mytheme", "my_theme"),
        ]);
        assert_eq!(
            translate("description: mytheme_description\nname: mytheme\n", &p),
            "description: A fine theme.\nname: my_theme\n"
        );
    }

    #[test]
    fn replacements_are_not_rescanned() {
        // The output of one pair must not feed another.
        let p = pairs(&[("a", "b"), ("b", "c")]);
        assert_eq!(translate("ab", &p), "bc");
    }

    #[test]
    fn untouched_content_passes_through() {
        let p = pairs(&[("mytheme", "my_theme")]);
        assert_eq!(translate("nothing to see", &p), "nothing to see");
    }

    #[test]
    fn hidden_line_collapses() {
        let p = pairs(&[(HIDDEN_LINE, "\n")]);
        assert_eq!(
            translate("name: x\nhidden: true\ncore: 8.x\n", &p),
            "name: x\ncore: 8.x\n"
        );
    }

    #[test]
    fn multibyte_content_is_preserved() {
        let p = pairs(&[("mytheme", "my_theme")]);
        assert_eq!(translate("thème: mytheme ✓", &p), "thème: my_theme ✓");
    }

    #[test]
    fn full_pair_set_clears_all_placeholders() {
        let p = replacement_pairs("mytheme", "My Theme", "A theme.", "my_theme");
        let input = "name: My theme\ndescription: mytheme_description\nhidden: true\nlibraries:\n  - mytheme/global\n";
        let output = translate(input, &p);
        assert!(!output.contains("My theme"));
        assert!(!output.contains("mytheme_description"));
        assert!(!output.contains("mytheme"));
        assert!(!output.contains("hidden: true"));
        assert!(output.contains("name: My Theme"));
        assert!(output.contains("description: A theme."));
        assert!(output.contains("my_theme/global"));
    }
}
