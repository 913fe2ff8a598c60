//! Play loop command parsing.

/// A line typed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    /// Click on a cell, given as `row col` or `row,col`.
    Cell { row: i32, col: i32 },
    /// Start over with the saved rules.
    Reset,
    /// Show the rules in effect.
    Rules,
    /// Show the command summary.
    Help,
    /// Leave the game.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else.
    Unknown(String),
}

impl PlayCommand {
    /// Parses one input line.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "" => PlayCommand::Empty,
            "reset" | "new" => PlayCommand::Reset,
            "rules" => PlayCommand::Rules,
            "help" | "?" => PlayCommand::Help,
            "quit" | "exit" | "q" => PlayCommand::Quit,
            _ => Self::parse_cell(input).unwrap_or_else(|| PlayCommand::Unknown(input.to_string())),
        }
    }

    fn parse_cell(input: &str) -> Option<Self> {
        let mut parts = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty());
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(PlayCommand::Cell { row, col })
    }
}
