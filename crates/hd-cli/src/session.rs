//! The interactive roll session: one game, driven line by line.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use hd_mechanics::{DiceResult, Game};

use crate::command::{Command, QUIT};

/// Printed before every handled line.
pub const ROLL_START: &str = "-------------ROLL START-------------";
/// Printed after every handled line.
pub const ROLL_END: &str = "-------------ROLL END---------------";

const ROUSE_START: &str = "-------------ROUSE CHECK-------------";
const ROUSE_END: &str = "-------------------------------------";

const HELP: &str = "\
<total> <hunger> [difficulty]  set up a pool and roll it
r <n>                          reroll the first n normal dice (1-3)
r - <idx> [idx...]             reroll normal dice by index
bs                             blood surge (rouse check, then +2 dice)
rc                             rouse check
s | status                     show the current pool
q                              quit
";

/// A session owning the game every command acts on.
pub struct Session {
    game: Game,
    json: bool,
}

impl Session {
    /// Create a session. With `json`, pools are printed as JSON snapshots.
    pub fn new(game: Game, json: bool) -> Self {
        Self { game, json }
    }

    /// The game this session drives.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run one parsed command and return what to print.
    pub fn execute(&mut self, cmd: Command) -> DiceResult<String> {
        match cmd {
            Command::Roll {
                total,
                hunger,
                difficulty,
            } => {
                self.game.setup(total, hunger, difficulty)?;
                self.game.roll();
                Ok(self.show(&self.game))
            }
            Command::RerollCount(count) => {
                self.game.reroll_count(count)?;
                Ok(self.show(&self.game))
            }
            Command::RerollIndexes(indexes) => {
                self.game.reroll_by_index(&indexes)?;
                Ok(self.show(&self.game))
            }
            Command::BloodSurge => {
                self.game.can_blood_surge()?;
                let check = self.game.rouse_check();
                self.game.blood_surge()?;
                Ok(format!(
                    "{ROUSE_START}\nRouse Check {}\n{ROUSE_END}\n{}",
                    self.show(&check),
                    self.show(&self.game)
                ))
            }
            Command::RouseCheck => {
                let check = self.game.rouse_check();
                Ok(self.show(&check))
            }
            Command::Status => Ok(self.show(&self.game)),
            Command::Help => Ok(HELP.to_string()),
        }
    }

    fn show(&self, game: &Game) -> String {
        if self.json {
            serde_json::to_string_pretty(&game.snapshot())
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .unwrap_or_else(|e| format!("snapshot error: {e}\n"))
        } else {
            game.render()
        }
    }
}

/// Read commands from `input` until `q` or end of input.
///
/// Errors in a command are printed and the loop goes on; only I/O failures
/// end it early.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut out: W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim() == QUIT {
            break;
        }
        let Some(cmd) = Command::parse(&line).transpose() else {
            continue;
        };

        writeln!(out, "{ROLL_START}")?;
        match cmd.and_then(|cmd| session.execute(cmd)) {
            Ok(text) => writeln!(out, "{text}")?,
            Err(e) => {
                tracing::debug!(error = %e, input = %line.trim(), "command rejected");
                writeln!(out, "{}", e.to_string().yellow())?;
            }
        }
        writeln!(out, "{ROLL_END}")?;
        out.flush()?;
    }

    writeln!(out, "Exit")?;
    out.flush()
}
