//! Parsing of command-loop lines.

use hd_mechanics::{DiceError, DiceResult};

/// One instruction of the command loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<total> <hunger> [difficulty]`: set up a new pool and roll it.
    Roll {
        total: usize,
        hunger: usize,
        difficulty: u32,
    },
    /// `r <n>`: reroll the first `n` normal dice. Range is checked by the game.
    RerollCount(i64),
    /// `r - <idx>...`: reroll the dice at the given indexes.
    RerollIndexes(Vec<usize>),
    /// `bs`: blood surge, preceded by a rouse check.
    BloodSurge,
    /// `rc`: standalone rouse check.
    RouseCheck,
    /// `s` / `status`: show the current pool without rolling.
    Status,
    /// `help` / `?`.
    Help,
}

/// The line that ends the loop. Handled by the loop, never parsed.
pub const QUIT: &str = "q";

impl Command {
    /// Parse a line. Blank lines give `Ok(None)`. [`QUIT`] is not a command.
    pub fn parse(line: &str) -> DiceResult<Option<Self>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, rest)) = tokens.split_first() else {
            return Ok(None);
        };

        let cmd = match (head, rest) {
            ("bs", []) => Self::BloodSurge,
            ("rc", []) => Self::RouseCheck,
            ("s" | "status", []) => Self::Status,
            ("help" | "?", []) => Self::Help,
            ("r", ["-", indexes @ ..]) => {
                if indexes.is_empty() {
                    return Err(parse_error("no dice indexes given"));
                }
                let indexes = indexes
                    .iter()
                    .map(|t| t.parse::<usize>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| parse_error("can't fully convert input"))?;
                Self::RerollIndexes(indexes)
            }
            ("r", [count]) => Self::RerollCount(
                count
                    .parse()
                    .map_err(|_| parse_error(&format!("reroll count is NaN: '{count}'")))?,
            ),
            ("r", _) => return Err(parse_error("usage: r <count> | r - <index>...")),
            (total, [hunger]) => Self::Roll {
                total: number(total, "first value")?,
                hunger: number(hunger, "second value")?,
                difficulty: 0,
            },
            (total, [hunger, difficulty]) => Self::Roll {
                total: number(total, "first value")?,
                hunger: number(hunger, "second value")?,
                difficulty: number(difficulty, "difficulty value")?,
            },
            _ => return Err(parse_error("wrong input")),
        };
        Ok(Some(cmd))
    }
}

fn parse_error(msg: &str) -> DiceError {
    DiceError::Parse(msg.to_string())
}

fn number<T: std::str::FromStr>(token: &str, what: &str) -> DiceResult<T> {
    token
        .parse()
        .map_err(|_| parse_error(&format!("{what} is NaN: '{token}'")))
}
