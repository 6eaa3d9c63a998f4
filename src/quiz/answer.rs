/// Canonical form for comparing free-text answers: lowercased, whitespace
/// collapsed, trailing periods stripped.
pub fn normalize(text: &str) -> String {
    let collapsed = text
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    collapsed.trim_end_matches('.').trim_end().to_string()
}

/// Picks the option the user meant, either by its 1-based number or by its
/// text. Returns `None` when the input matches nothing.
pub fn select_option<'a>(input: &str, options: &'a [String]) -> Option<&'a String> {
    let digits = input.trim();
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(n) = digits.parse::<usize>() {
            if (1..=options.len()).contains(&n) {
                return Some(&options[n - 1]);
            }
        }
    }

    let wanted = normalize(input);
    options.iter().find(|option| normalize(option) == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn normalize_collapses_case_spacing_and_periods() {
        assert_eq!(normalize("  Central   Alley.. "), "central alley");
        assert_eq!(normalize("Ель\tи  сосна"), "ель и сосна");
        assert_eq!(normalize("..."), "");
    }

    #[test]
    fn number_selects_by_position() {
        let opts = options(&["A", "B", "C"]);
        assert_eq!(select_option(" 2 ", &opts), Some(&opts[1]));
        assert_eq!(select_option("2", &opts), select_option("b", &opts));
    }

    #[test]
    fn out_of_range_number_falls_back_to_text() {
        let opts = options(&["5", "7"]);
        assert_eq!(select_option("5", &opts), Some(&opts[0]));
        assert_eq!(select_option("0", &opts), None);
        assert_eq!(select_option("3", &opts), None);
    }

    #[test]
    fn only_plain_digits_select_by_position() {
        let opts = options(&["A", "B", "C"]);
        assert_eq!(select_option("+2", &opts), None);
        assert_eq!(select_option("-1", &opts), None);
        assert_eq!(select_option("2", &opts), Some(&opts[1]));

        let signed = options(&["+2", "3"]);
        assert_eq!(select_option("+2", &signed), Some(&signed[0]));
    }

    #[test]
    fn text_match_ignores_case_and_trailing_period() {
        let opts = options(&["London", "Paris"]);
        assert_eq!(select_option("paris.", &opts), Some(&opts[1]));
        assert_eq!(select_option("Berlin", &opts), None);
        assert_eq!(select_option("", &opts), None);
    }
}
