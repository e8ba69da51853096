use std::io::{BufRead, Write};

use color_eyre::eyre::{OptionExt, eyre};
use cube_core::{Color, CubeModel, CubeState, Face, MoveSequence};
use log::{debug, info};
use owo_colors::OwoColorize;

use crate::{
    config::{CliConfig, Palette},
    render,
};

const HELP: &str = "\
Commands:
  <moves>             apply a move sequence, e.g. R U' F2
  undo                undo the last move
  reset               return to the solved cube
  scramble [N]        reset and apply N random moves
  set FACE POS COLOR  paint one sticker, e.g. set F 0 Y
  validate            check that the stickers form a real cube
  history             list the moves since the last reset
  load FACELETS       replace every sticker with a facelet string
  show                draw the cube
  help                show this message
  exit                leave";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Moves(MoveSequence),
    Undo,
    Reset,
    Scramble(Option<usize>),
    Set {
        face: Face,
        position: usize,
        color: Color,
    },
    Validate,
    History,
    Load(CubeState),
    Show,
    Help,
    Exit,
}

impl Command {
    /// Parses one input line. Blank lines are `None`.
    fn parse(line: &str) -> color_eyre::Result<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(None);
        };
        let rest = words.collect::<Vec<_>>();

        let no_args = |command: Command| {
            if rest.is_empty() {
                Ok(command)
            } else {
                Err(eyre!("`{first}` takes no arguments"))
            }
        };

        let command = match first.to_ascii_lowercase().as_str() {
            "undo" => no_args(Command::Undo)?,
            "reset" => no_args(Command::Reset)?,
            "validate" => no_args(Command::Validate)?,
            "history" => no_args(Command::History)?,
            "show" => no_args(Command::Show)?,
            "help" => no_args(Command::Help)?,
            "exit" | "quit" => no_args(Command::Exit)?,
            "scramble" => match rest.as_slice() {
                [] => Command::Scramble(None),
                [length] => Command::Scramble(Some(
                    length
                        .parse()
                        .map_err(|_| eyre!("Scramble length must be a number, got `{length}`"))?,
                )),
                _ => return Err(eyre!("Usage: scramble [N]")),
            },
            "set" => {
                let [face, position, color] = rest.as_slice() else {
                    return Err(eyre!("Usage: set FACE POS COLOR"));
                };
                Command::Set {
                    face: face.parse()?,
                    position: position
                        .parse()
                        .map_err(|_| eyre!("Position must be a number, got `{position}`"))?,
                    color: color.parse()?,
                }
            }
            // Facelet strings may be split into per-face groups.
            "load" => {
                if rest.is_empty() {
                    return Err(eyre!("Usage: load FACELETS"));
                }
                Command::Load(rest.concat().parse()?)
            }
            _ => Command::Moves(line.parse()?),
        };

        Ok(Some(command))
    }
}

/// An interactive session over a single cube.
pub struct Repl<'a> {
    model: CubeModel,
    config: &'a CliConfig,
    palette: Palette,
    rng: fastrand::Rng,
}

impl<'a> Repl<'a> {
    pub fn new(config: &'a CliConfig, palette: Palette, rng: fastrand::Rng) -> Self {
        Repl {
            model: CubeModel::new(),
            config,
            palette,
            rng,
        }
    }

    #[cfg(test)]
    fn model(&self) -> &CubeModel {
        &self.model
    }

    /// Reads commands until `exit` or the end of `input`. Bad commands are
    /// reported to `output` and the session continues.
    pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> color_eyre::Result<()> {
        writeln!(output, "{}", self.net())?;
        writeln!(output, "Type `help` for a list of commands")?;

        let mut line = String::new();
        loop {
            write!(output, "> ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    self.error(&mut output, &e)?;
                    continue;
                }
            };
            debug!("Running {command:?}");

            if command == Command::Exit {
                break;
            }
            if let Err(e) = self.execute(command, &mut output) {
                self.error(&mut output, &e)?;
            }
        }

        info!("Leaving with {} moves in the history", self.model.history().len());
        Ok(())
    }

    fn execute(&mut self, command: Command, output: &mut impl Write) -> color_eyre::Result<()> {
        match command {
            Command::Moves(moves) => {
                self.model.apply_sequence(&moves);
                if let [mv] = moves.as_slice() {
                    writeln!(output, "{}", mv.describe())?;
                }
                self.show(output)?;
            }
            Command::Undo => {
                let mv = self.model.undo().ok_or_eyre("Nothing to undo")?;
                writeln!(output, "Undid {mv}")?;
                self.show(output)?;
            }
            Command::Reset => {
                self.model.reset();
                self.show(output)?;
            }
            Command::Scramble(length) => {
                let length = length.unwrap_or(self.config.scramble_length);
                let scramble = self.model.scramble(&mut self.rng, length);
                writeln!(output, "Scramble: {scramble}")?;
                self.show(output)?;
            }
            Command::Set {
                face,
                position,
                color,
            } => {
                self.model.set_sticker(face, position, color)?;
                self.show(output)?;
            }
            Command::Validate => {
                let report = self.model.validate();
                writeln!(output, "{}", render::report(&report, self.config.color))?;
            }
            Command::History => {
                writeln!(
                    output,
                    "{}",
                    render::history(self.model.history(), self.config.history_group)
                )?;
            }
            Command::Load(state) => {
                self.model.load(state);
                self.show(output)?;
            }
            Command::Show => self.show(output)?,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Exit => {}
        }
        Ok(())
    }

    fn net(&self) -> String {
        render::net(self.model.state(), &self.palette, self.config.color)
    }

    fn show(&self, output: &mut impl Write) -> color_eyre::Result<()> {
        writeln!(output, "{}", self.net())?;
        if self.model.is_solved() {
            writeln!(output, "Solved!")?;
        }
        Ok(())
    }

    fn error(&self, output: &mut impl Write, e: &color_eyre::Report) -> color_eyre::Result<()> {
        if self.config.color {
            writeln!(output, "{}", e.red())?;
        } else {
            writeln!(output, "{e}")?;
        }
        Ok(())
    }
}
