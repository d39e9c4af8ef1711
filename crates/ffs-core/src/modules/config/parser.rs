use crate::domain::{ParameterCard, ParameterDeck};

const COMMENT_MARKER: char = '#';

/// Reads `key value...` lines. Text after `#` is dropped, blank lines are
/// skipped, and cards keep their 1-based source line.
pub fn parse_parameter_deck<S: AsRef<str>>(lines: &[S]) -> ParameterDeck {
    let mut deck = ParameterDeck::default();

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let content = match line.find(COMMENT_MARKER) {
            Some(position) => &line[..position],
            None => line,
        };

        let mut tokens = content.split_whitespace();
        let Some(key) = tokens.next() else {
            continue;
        };
        let values = tokens.map(str::to_owned).collect::<Vec<_>>();
        deck.cards.push(ParameterCard::new(key, values, index + 1));
    }

    deck
}

#[cfg(test)]
mod tests {
    use super::parse_parameter_deck;

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let lines = [
            "# forward flux sampling parameters",
            "",
            "temperature 215",
            "   equilibrium   20000   # warm-up steps",
            "lambda 10 15 20 30 45",
        ];
        let deck = parse_parameter_deck(&lines);

        assert_eq!(deck.cards.len(), 3);
        let equilibrium = deck.last("equilibrium").expect("equilibrium card");
        assert_eq!(equilibrium.values, vec!["20000"]);
        assert_eq!(equilibrium.source_line, 4);

        let lambda = deck.last("lambda").expect("lambda card");
        assert_eq!(lambda.token_count(), 6);
    }

    #[test]
    fn key_without_values_is_kept() {
        let deck = parse_parameter_deck(&["water_group"]);
        let card = deck.last("water_group").expect("card should exist");
        assert!(card.values.is_empty());
    }
}
