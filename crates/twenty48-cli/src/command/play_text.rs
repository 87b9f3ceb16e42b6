use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use anyhow::Context as _;
use twenty48_engine::{GameEngine, Grid, Move};

use crate::command::GameArgs;

const CELL_WIDTH: usize = 5;
const PROMPT: &str = "Please determine next move: (W/S/A/D)";

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayTextArg {
    #[clap(flatten)]
    game: GameArgs,
}

impl PlayTextArg {
    #[cfg(test)]
    pub(crate) fn game(&self) -> &GameArgs {
        &self.game
    }
}

pub(crate) fn run(arg: &PlayTextArg) -> anyhow::Result<()> {
    let engine = GameEngine::with_config(arg.game.to_config()?)?;
    let input = io::stdin().lock();
    let output = io::stdout().lock();
    TextSession::new(engine).run(input, output)
}

/// How the board is laid out, following the most recent move on each axis.
///
/// After a left move numbers hug the left edge of their cell until a right
/// move; after an up move the blank line of each row goes below the numbers
/// until a down move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct OrientationHint {
    left_aligned: bool,
    spacer_below: bool,
}

impl OrientationHint {
    fn observe(&mut self, mv: Move) {
        match mv {
            Move::Left => self.left_aligned = true,
            Move::Right => self.left_aligned = false,
            Move::Up => self.spacer_below = true,
            Move::Down => self.spacer_below = false,
        }
    }
}

/// Splits input into whitespace separated tokens across lines.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }
}

/// Accepts exactly one of the W/A/S/D keys, in either case.
fn parse_move_key(token: &str) -> Option<Move> {
    let mut chars = token.chars();
    let (Some(key), None) = (chars.next(), chars.next()) else {
        return None;
    };
    Move::ALL
        .into_iter()
        .find(|mv| mv.key().eq_ignore_ascii_case(&key))
}

struct TextSession {
    engine: GameEngine,
    hint: OrientationHint,
}

impl TextSession {
    fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            hint: OrientationHint::default(),
        }
    }

    fn run<R, W>(&mut self, input: R, mut output: W) -> anyhow::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut tokens = Tokens::new(input);

        writeln!(output, "|=== Enjoy a game of ===|")?;
        self.write_board(&mut output)?;

        while !self.engine.is_over() {
            let Some(mv) = prompt_move(&mut tokens, &mut output)? else {
                writeln!(output)?;
                output.flush()?;
                return Ok(());
            };
            self.engine.apply_move(mv);
            self.hint.observe(mv);
            self.write_board(&mut output)?;
        }

        writeln!(output)?;
        writeln!(output, "=======  Game Over  =======")?;
        writeln!(output, "Congrats! Your Score: {:>4}!", self.engine.score())?;
        writeln!(output, "===========================")?;
        output.flush().context("Failed to flush output")?;
        Ok(())
    }

    fn write_board<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let grid = self.engine.grid();
        let inner_width = grid.size() * (CELL_WIDTH + 1) + 1;
        let separator = format!("|{}|", "=".repeat(inner_width));

        if self.engine.score() == 0 {
            writeln!(output, "|{:=^inner_width$}|", "[  2048  ]")?;
        }
        writeln!(output, "{separator}")?;
        let stats = format!(
            "Score:{:>5}|Moves:{:>5}",
            self.engine.score(),
            self.engine.move_count()
        );
        writeln!(output, "||{stats:^w$}||", w = inner_width - 2)?;
        writeln!(output, "{separator}")?;

        let spacer = spacer_line(grid);
        for row in grid.rows() {
            if !self.hint.spacer_below {
                writeln!(output, "{spacer}")?;
            }
            write!(output, "|")?;
            for &value in row {
                match value {
                    0 => write!(output, "|{:CELL_WIDTH$}", "")?,
                    _ if self.hint.left_aligned => write!(output, "|{value:<CELL_WIDTH$}")?,
                    _ => write!(output, "|{value:>CELL_WIDTH$}")?,
                }
            }
            writeln!(output, "||")?;
            if self.hint.spacer_below {
                writeln!(output, "{spacer}")?;
            }
            writeln!(output, "{separator}")?;
        }
        output.flush()
    }
}

fn spacer_line(grid: &Grid) -> String {
    let cells: String = (0..grid.size())
        .map(|_| format!("|{:CELL_WIDTH$}", ""))
        .collect();
    format!("|{cells}||")
}

/// Prompts until a valid move is read. Returns `None` at end of input.
fn prompt_move<R, W>(tokens: &mut Tokens<R>, output: &mut W) -> io::Result<Option<Move>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        let Some(token) = tokens.next_token()? else {
            return Ok(None);
        };
        if let Some(mv) = parse_move_key(&token) {
            return Ok(Some(mv));
        }
    }
}
