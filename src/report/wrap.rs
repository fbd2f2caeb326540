pub const RECOMMENDATION_WRAP_WIDTH: usize = 70;

/// Greedy word wrap measured in characters.
///
/// Words are appended to the current line until adding the next one would
/// push the line past `width`; that word then starts a new line. A word
/// longer than `width` is placed on a line of its own.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BudgetStatus;
    use proptest::prelude::{prop, prop_assert, prop_assert_eq, proptest};

    #[test]
    fn surplus_recommendation_wraps_into_five_lines() {
        let lines = wrap_words(
            BudgetStatus::Surplus.recommendation(),
            RECOMMENDATION_WRAP_WIDTH,
        );

        assert_eq!(
            lines,
            vec![
                "SELAMAT: Anggaran Anda mengalami SURPLUS! Disarankan untuk menambah",
                "alokasi pada Pos Dana Masa Depan dalam bentuk investasi yang AMAN dan",
                "MENGUNTUNGKAN. Hindari hanya menabung, gunakan instrumen investasi",
                "seperti reksa dana, obligasi, atau emas untuk mengoptimalkan dana",
                "surplus Anda.",
            ]
        );
    }

    #[test]
    fn deficit_recommendation_wraps_into_four_lines() {
        let lines = wrap_words(
            BudgetStatus::Deficit.recommendation(),
            RECOMMENDATION_WRAP_WIDTH,
        );

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[1],
            "pos-pos pengeluaran yang mungkin melebihi persentase yang disarankan."
        );
        assert_eq!(lines[3], "pemasukan.");
    }

    #[test]
    fn line_of_exactly_width_is_kept_whole() {
        let text = format!("{} {}", "a".repeat(5), "b".repeat(4));
        assert_eq!(wrap_words(&text, 10), vec!["aaaaa bbbb"]);
        assert_eq!(wrap_words(&text, 9), vec!["aaaaa", "bbbb"]);
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let long = "x".repeat(12);
        let text = format!("ab {long} cd");
        assert_eq!(wrap_words(&text, 10), vec!["ab".to_string(), long, "cd".to_string()]);
    }

    #[test]
    fn empty_and_blank_text_produce_no_lines() {
        assert!(wrap_words("", 70).is_empty());
        assert!(wrap_words("   \n\t ", 70).is_empty());
    }

    #[test]
    fn width_counts_characters_not_bytes() {
        let text = "éééé éééé";
        assert_eq!(wrap_words(text, 9), vec!["éééé éééé"]);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(128))]

        #[test]
        fn prop_wrapped_lines_fit_and_rejoin_to_input(
            words in prop::collection::vec("[a-zA-Z0-9.,!]{1,16}", 0..60),
        ) {
            let text = words.join(" ");
            let lines = wrap_words(&text, RECOMMENDATION_WRAP_WIDTH);

            for line in &lines {
                prop_assert!(line.chars().count() <= RECOMMENDATION_WRAP_WIDTH);
                prop_assert!(!line.is_empty());
            }
            prop_assert_eq!(lines.join(" "), text);
        }
    }
}
