//! Property tests for roster parsing (pure domain).
//!
//! Parse contract:
//! - every non-blank line is either accepted as a player or reported in
//!   the skip manifest, never both, never neither
//! - accepted players always carry non-empty trimmed name and CPF
//! - well-formed lines round-trip their fields

use proptest::prelude::*;

use crate::domain::roster::parse_roster;

/// Name fragments: letters and single spaces, no `-`, so they cannot
/// collide with the field delimiter.
fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,12}( [A-Za-z]{1,12})?"
}

fn cpf_strategy() -> impl Strategy<Value = String> {
    "[0-9]{3}\\.[0-9]{3}\\.[0-9]{3}-[0-9]{2}"
}

fn position_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z]{3,10}")
}

proptest! {
    /// Well-formed lines all parse and keep their fields.
    #[test]
    fn prop_well_formed_lines_round_trip(
        rows in prop::collection::vec(
            (name_strategy(), cpf_strategy(), position_strategy()),
            0..8,
        ),
    ) {
        let text = rows
            .iter()
            .map(|(name, cpf, position)| match position {
                Some(p) => format!("{name} - {cpf} - {p}"),
                None => format!("{name} - {cpf}"),
            })
            .collect::<Vec<_>>()
            .join("\n");

        let parse = parse_roster(&text);

        prop_assert_eq!(parse.skipped.len(), 0, "no well-formed line may be skipped");
        prop_assert_eq!(parse.players.len(), rows.len());
        for (player, (name, cpf, position)) in parse.players.iter().zip(&rows) {
            prop_assert_eq!(&player.name, name);
            prop_assert_eq!(&player.cpf, cpf);
            prop_assert_eq!(&player.position, position);
        }
    }

    /// Every non-blank line is accounted for exactly once.
    #[test]
    fn prop_lines_are_parsed_or_reported(
        lines in prop::collection::vec("[ -~]{0,30}", 0..10),
    ) {
        let text = lines.join("\n");
        let non_blank = text.lines().filter(|l| !l.trim().is_empty()).count();
        let parse = parse_roster(&text);

        prop_assert_eq!(parse.players.len() + parse.skipped.len(), non_blank);
    }

    /// Accepted players never have empty identity fields.
    #[test]
    fn prop_players_have_name_and_cpf(text in "[ a-zA-Z0-9.\\-\n]{0,200}") {
        let parse = parse_roster(&text);

        for player in &parse.players {
            prop_assert!(!player.name.trim().is_empty());
            prop_assert!(!player.cpf.trim().is_empty());
        }
    }
}
