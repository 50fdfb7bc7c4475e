//! Bulk roster parsing from registration free text.
//!
//! The registration form accepts one player per line:
//!
//! ```text
//! Maria Silva - 123.456.789-00
//! Ana Santos - 987.654.321-00 - Atacante
//! ```
//!
//! The parse is lenient by design (user-entered free text): malformed
//! lines never fail the registration, they are reported in a skip
//! manifest so the form can warn the user.

use serde::{Deserialize, Serialize};

use crate::domain::player::Player;

/// Field delimiter within a roster line.
const DELIMITER: &str = " - ";

/// Why a non-blank roster line produced no player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The line has no `" - "` delimiter, so no CPF field exists.
    MissingCpf,
    /// The name field is empty after trimming.
    EmptyName,
    /// The CPF field is empty after trimming.
    EmptyCpf,
}

/// A non-blank line that was dropped, with its position and reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based position among the non-blank input lines.
    pub line_no: usize,
    pub content: String,
    pub reason: SkipReason,
}

/// Outcome of a roster parse: the players that were accepted plus a
/// manifest of the lines that were not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterParse {
    pub players: Vec<Player>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse a multi-line roster text block.
///
/// Blank lines are discarded silently. Each remaining line is split on
/// the literal `" - "` into at most three parts: name, CPF, optional
/// position (a further `" - "` stays glued to the position text). A line
/// yields a player only when both name and CPF are non-empty after
/// trimming; every player receives a fresh id.
pub fn parse_roster(text: &str) -> RosterParse {
    let mut parse = RosterParse::default();

    for (line_no, line) in text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| (i + 1, line))
    {
        let mut parts = line.splitn(3, DELIMITER);
        let name = parts.next().unwrap_or("").trim();
        let cpf = match parts.next() {
            Some(cpf) => cpf.trim(),
            None => {
                parse.skip(line_no, line, SkipReason::MissingCpf);
                continue;
            }
        };
        let position = parts.next().map(str::trim).filter(|p| !p.is_empty());

        if name.is_empty() {
            parse.skip(line_no, line, SkipReason::EmptyName);
        } else if cpf.is_empty() {
            parse.skip(line_no, line, SkipReason::EmptyCpf);
        } else {
            parse
                .players
                .push(Player::new(name, cpf, position.map(str::to_string)));
        }
    }

    parse
}

impl RosterParse {
    fn skip(&mut self, line_no: usize, content: &str, reason: SkipReason) {
        self.skipped.push(SkippedLine {
            line_no,
            content: content.trim().to_string(),
            reason,
        });
    }
}
