//! The interactive turn loop.
//!
//! The session owns a board and a move policy and alternates turns: the
//! human types moves and commands, the machine picks from the engine's
//! legal-move list. Win and draw are queried from the board after every
//! placement; the session stops on the first positive answer.
//!
//! Rejected placements are rendered from their typed errors and the human is
//! prompted again - the engine guarantees the grid is unchanged.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use super::notation::{move_label, parse_move};
use crate::board::{Board, Mark};
use crate::policy::MovePolicy;

/// Save file used when a `save` or `load` command names none.
pub const DEFAULT_SAVE_FILE: &str = "board.txt";

/// Outcome of the human's turn.
enum TurnOutcome {
    Placed,
    Quit,
}

/// An interactive game over a board and an opponent policy.
pub struct Session<P> {
    board: Board,
    policy: P,
    save_file: String,
}

impl<P: MovePolicy> Session<P> {
    /// Create a session with the default save file.
    pub fn new(board: Board, policy: P) -> Self {
        Self {
            board,
            policy,
            save_file: DEFAULT_SAVE_FILE.to_string(),
        }
    }

    /// Use a different default save file.
    #[must_use]
    pub fn with_save_file(mut self, file: impl Into<String>) -> Self {
        self.save_file = file.into();
        self
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the game on stdin until win, draw, or quit.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let locked = stdin.lock();
        self.run_with(locked)
    }

    /// Run the game reading commands from `input`.
    pub fn run_with<R: BufRead>(&mut self, input: R) -> Result<()> {
        let mut lines = input.lines();

        if Path::new(&self.save_file).exists() {
            match self.board.load_from_file(&self.save_file) {
                Ok(()) => println!("Loaded '{}'.", self.save_file),
                Err(err) => println!("Could not load '{}' ({err}), starting fresh.", self.save_file),
            }
        } else {
            println!("No '{}' found, starting with an empty board.", self.save_file);
        }

        println!("Four in a row wins. You play x, the machine plays o.");
        println!("Commands: a move like b3, save [file], load [file], help, quit");
        print!("{}", render(&self.board));

        loop {
            match self.human_turn(&mut lines)? {
                TurnOutcome::Quit => break,
                TurnOutcome::Placed => {}
            }
            print!("{}", render(&self.board));
            if self.board.check_win(Mark::Human) {
                println!("Congratulations, you win!");
                break;
            }
            if self.board.is_full() {
                println!("The board is full. Draw.");
                break;
            }

            let legal = self.board.legal_moves();
            let Some(mv) = self.policy.choose(&legal) else {
                println!("No legal moves left. Draw.");
                break;
            };
            self.board.place(mv, Mark::Ai)?;
            println!("Machine plays {}.", move_label(mv));
            print!("{}", render(&self.board));
            if self.board.check_win(Mark::Ai) {
                println!("The machine wins. Better luck next time.");
                break;
            }
            if self.board.is_full() {
                println!("The board is full. Draw.");
                break;
            }
        }

        println!("Game over, thanks for playing!");
        Ok(())
    }

    /// Prompt until the human places a mark, quits, or input ends.
    fn human_turn(
        &mut self,
        lines: &mut impl Iterator<Item = io::Result<String>>,
    ) -> Result<TurnOutcome> {
        loop {
            print!("Your move (x): ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                // EOF counts as quit
                return Ok(TurnOutcome::Quit);
            };
            let line = line?;
            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            let mut words = input.split_whitespace();
            let command = words.next().unwrap_or_default().to_ascii_lowercase();
            match command.as_str() {
                "quit" => {
                    println!("Quitting.");
                    return Ok(TurnOutcome::Quit);
                }
                "help" => {
                    self.print_help();
                    continue;
                }
                "save" => {
                    let file = words.next().unwrap_or(&self.save_file).to_string();
                    match self.board.save_to_file(&file) {
                        Ok(()) => println!("Saved to '{file}'."),
                        Err(err) => println!("Save failed: {err}"),
                    }
                    continue;
                }
                "load" => {
                    let file = words.next().unwrap_or(&self.save_file).to_string();
                    match self.board.load_from_file(&file) {
                        Ok(()) => {
                            println!("Loaded '{file}'.");
                            print!("{}", render(&self.board));
                        }
                        Err(err) => println!("Load failed: {err}"),
                    }
                    continue;
                }
                _ => {}
            }

            let Some(coord) = parse_move(input) else {
                println!("Invalid input, expected something like b3. Type help for help.");
                continue;
            };
            match self.board.place(coord, Mark::Human) {
                Ok(()) => return Ok(TurnOutcome::Placed),
                Err(err) => {
                    println!("Illegal move: {err}");
                    continue;
                }
            }
        }
    }

    fn print_help(&self) {
        println!("Moves are a column letter plus a 1-based row number, like b3 or j10.");
        println!("The first mark must go on a center cell.");
        println!("Every later mark must touch an occupied cell in one of 8 directions.");
        println!("save [file] and load [file] default to '{}'.", self.save_file);
    }
}

/// Render the board with a column-letter header and 1-based row numbers.
#[must_use]
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for col in 0..board.cols() {
        out.push(char::from(b'a' + col as u8));
        out.push(' ');
    }
    out.push('\n');
    for row in 0..board.rows() {
        out.push_str(&format!("{:>2} ", row + 1));
        for col in 0..board.cols() {
            out.push(board.get(row, col).unwrap_or(Mark::Empty).to_char());
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
