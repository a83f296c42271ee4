/// OCR tokens used to build a search query.
pub const TEXT_QUERY_TOKENS: usize = 3;
/// Web entities used to build a search query.
pub const WEB_ENTITY_QUERY_TOKENS: usize = 2;

fn join_leading(tokens: &[String], count: usize) -> Option<String> {
    if tokens.is_empty() {
        return None;
    }
    let terms: Vec<&str> = tokens.iter().take(count).map(String::as_str).collect();
    Some(terms.join(" "))
}

/// Space-joins the first three OCR tokens. `None` when nothing was read.
pub fn text_query(tokens: &[String]) -> Option<String> {
    join_leading(tokens, TEXT_QUERY_TOKENS)
}

/// Space-joins the first two web entities. `None` when there are none.
pub fn web_entity_query(entities: &[String]) -> Option<String> {
    join_leading(entities, WEB_ENTITY_QUERY_TOKENS)
}

/// Builds `"{logo} {label}"` from the best logo and label, substituting an
/// empty string for a missing side. `None` when both are missing.
pub fn logo_label_query(logos: &[String], labels: &[String]) -> Option<String> {
    let logo = logos.first();
    let label = labels.first();
    if logo.is_none() && label.is_none() {
        return None;
    }
    Some(format!(
        "{} {}",
        logo.map(String::as_str).unwrap_or(""),
        label.map(String::as_str).unwrap_or("")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn should_use_first_three_text_tokens() {
        let tokens = strings(&["Oreo", "Original", "Cookies", "Extra"]);

        assert_eq!(text_query(&tokens).as_deref(), Some("Oreo Original Cookies"));
    }

    #[test]
    fn should_use_all_text_tokens_when_fewer_than_three() {
        let tokens = strings(&["Nutella"]);

        assert_eq!(text_query(&tokens).as_deref(), Some("Nutella"));
    }

    #[test]
    fn should_skip_text_query_when_no_tokens() {
        assert_eq!(text_query(&[]), None);
    }

    #[test]
    fn should_use_first_two_web_entities() {
        let entities = strings(&["Oreo", "Cookie", "Biscuit"]);

        assert_eq!(web_entity_query(&entities).as_deref(), Some("Oreo Cookie"));
    }

    #[test]
    fn should_keep_trailing_space_when_only_logo_present() {
        let logos = strings(&["Coca-Cola"]);

        assert_eq!(
            logo_label_query(&logos, &[]).as_deref(),
            Some("Coca-Cola ")
        );
    }

    #[test]
    fn should_keep_leading_space_when_only_label_present() {
        let labels = strings(&["Soft drink", "Bottle"]);

        assert_eq!(
            logo_label_query(&[], &labels).as_deref(),
            Some(" Soft drink")
        );
    }

    #[test]
    fn should_combine_first_logo_and_first_label() {
        let logos = strings(&["Heinz", "Other"]);
        let labels = strings(&["Ketchup", "Condiment"]);

        assert_eq!(
            logo_label_query(&logos, &labels).as_deref(),
            Some("Heinz Ketchup")
        );
    }

    #[test]
    fn should_skip_logo_label_query_when_both_missing() {
        assert_eq!(logo_label_query(&[], &[]), None);
    }

    proptest! {
        #[test]
        fn text_query_never_uses_more_than_three_tokens(
            tokens in proptest::collection::vec("[a-zA-Z]{1,8}", 1..10)
        ) {
            let query = text_query(&tokens).unwrap();
            let expected = tokens.iter().take(3).cloned().collect::<Vec<_>>().join(" ");
            prop_assert_eq!(query, expected);
        }

        #[test]
        fn web_entity_query_never_uses_more_than_two_entities(
            entities in proptest::collection::vec("[a-zA-Z]{1,8}", 1..10)
        ) {
            let query = web_entity_query(&entities).unwrap();
            prop_assert_eq!(query.split(' ').count(), entities.len().min(2));
        }
    }
}
