use crate::domain::roster::{parse_roster, SkipReason};

#[test]
fn parses_name_cpf_and_optional_position() {
    let parse = parse_roster(
        "Maria Silva - 123.456.789-00\nAna Santos - 987.654.321-00 - Atacante\nbad line",
    );

    assert_eq!(parse.players.len(), 2);

    assert_eq!(parse.players[0].name, "Maria Silva");
    assert_eq!(parse.players[0].cpf, "123.456.789-00");
    assert_eq!(parse.players[0].position, None);

    assert_eq!(parse.players[1].name, "Ana Santos");
    assert_eq!(parse.players[1].cpf, "987.654.321-00");
    assert_eq!(parse.players[1].position, Some("Atacante".to_string()));

    assert_eq!(parse.skipped.len(), 1);
    assert_eq!(parse.skipped[0].line_no, 3);
    assert_eq!(parse.skipped[0].content, "bad line");
    assert_eq!(parse.skipped[0].reason, SkipReason::MissingCpf);
}

#[test]
fn blank_lines_are_discarded_not_reported() {
    let parse = parse_roster("\n\nMaria Silva - 111.111.111-11\n   \n\nbad line\n");

    assert_eq!(parse.players.len(), 1);
    assert_eq!(parse.skipped.len(), 1);
    // Numbering counts non-blank lines only.
    assert_eq!(parse.skipped[0].line_no, 2);
}

#[test]
fn empty_name_is_reported() {
    let parse = parse_roster(" - 123.456.789-00");

    assert!(parse.players.is_empty());
    assert_eq!(parse.skipped.len(), 1);
    assert_eq!(parse.skipped[0].reason, SkipReason::EmptyName);
}

#[test]
fn empty_cpf_is_reported() {
    let parse = parse_roster("Ana Santos - ");

    assert!(parse.players.is_empty());
    assert_eq!(parse.skipped.len(), 1);
    assert_eq!(parse.skipped[0].reason, SkipReason::EmptyCpf);
}

#[test]
fn fields_are_trimmed() {
    let parse = parse_roster("  Maria Silva  -  123.456.789-00  -  Meia  ");

    assert_eq!(parse.players.len(), 1);
    assert_eq!(parse.players[0].name, "Maria Silva");
    assert_eq!(parse.players[0].cpf, "123.456.789-00");
    assert_eq!(parse.players[0].position, Some("Meia".to_string()));
}

#[test]
fn extra_delimiters_stay_in_the_position_field() {
    // At most three fields: anything past the second " - " belongs to
    // the position text.
    let parse = parse_roster("Maria Silva - 123.456.789-00 - Meia - capitã");

    assert_eq!(parse.players.len(), 1);
    assert_eq!(parse.players[0].position, Some("Meia - capitã".to_string()));
}

#[test]
fn empty_position_field_is_none() {
    let parse = parse_roster("Maria Silva - 123.456.789-00 - ");

    assert_eq!(parse.players.len(), 1);
    assert_eq!(parse.players[0].position, None);
}

#[test]
fn parsed_players_receive_distinct_ids() {
    let parse = parse_roster("Maria - 111\nAna - 222\nBia - 333");

    assert_eq!(parse.players.len(), 3);
    assert_ne!(parse.players[0].id, parse.players[1].id);
    assert_ne!(parse.players[1].id, parse.players[2].id);
    assert_ne!(parse.players[0].id, parse.players[2].id);
}

#[test]
fn empty_text_yields_nothing() {
    let parse = parse_roster("");
    assert!(parse.players.is_empty());
    assert!(parse.skipped.is_empty());
}
