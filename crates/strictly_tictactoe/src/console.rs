//! Line-oriented terminal interaction and the interactive move loop.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::player::Player;
use crate::position::Coordinates;

/// A prompt/answer channel over any buffered reader and writer.
///
/// Production code binds it to the process's stdin and stdout; tests bind it
/// to in-memory buffers.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Binds a console to standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` without a newline and reads one line of reply.
    ///
    /// The reply keeps its line terminator. Bytes that are not UTF-8 become
    /// U+FFFD so a garbled reply is rejected like any other bad answer. End of
    /// input is reported as [`io::ErrorKind::UnexpectedEof`].
    pub fn prompt(&mut self, text: &str) -> io::Result<String> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Returns the writer, e.g. to inspect what a test session printed.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl Board {
    /// Asks `player` for a position until a legal move is entered, then applies it.
    ///
    /// Non-numeric, out-of-range, and occupied positions are reported on the
    /// console and the prompt is repeated. The loop only ends early if the
    /// console fails or its input is exhausted.
    #[instrument(
        skip(self, player, console),
        fields(player = %player.name(), mark = %player.mark())
    )]
    pub fn make_move<R: BufRead, W: Write>(
        &mut self,
        player: &Player,
        console: &mut Console<R, W>,
    ) -> io::Result<Coordinates> {
        let prompt = format!(
            "{}, please enter the position (1-{}): ",
            player.name(),
            self.max_position()
        );

        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let raw = console.prompt(&prompt)?;
            match self.try_move(player, &raw) {
                Ok(coordinates) => {
                    info!(
                        row = coordinates.row,
                        column = coordinates.column,
                        attempts,
                        "Move accepted"
                    );
                    return Ok(coordinates);
                }
                Err(err) => {
                    debug!(error = %err, attempts, "Move rejected, asking again");
                    console.say(&err.to_string())?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardSize, Cell};
    use crate::mark::Mark;
    use std::io::Cursor;

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn test_prompt_reads_one_line() {
        let mut console = console("first\nsecond\n");
        assert_eq!(console.prompt("? ").unwrap(), "first\n");
        assert_eq!(console.prompt("? ").unwrap(), "second\n");
        assert_eq!(printed(&console), "? ? ");
    }

    #[test]
    fn test_prompt_replaces_invalid_utf8() {
        let mut console = Console::new(Cursor::new(vec![b'a', 0xff, b'\n']), Vec::new());
        assert_eq!(console.prompt("? ").unwrap(), "a\u{FFFD}\n");
    }

    #[test]
    fn test_prompt_reports_closed_input() {
        let mut console = console("");
        let err = console.prompt("? ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_make_move_first_try() {
        let mut board = Board::new(BoardSize::default());
        let player = Player::new(Mark::O, "Player 1");
        let mut console = console("1\n");

        let placed = board.make_move(&player, &mut console).unwrap();

        assert_eq!(placed, Coordinates::new(0, 0));
        assert_eq!(board.cell(0, 0), Some(Cell::Marked(Mark::O)));
        let prompt = "Player 1, please enter the position (1-9): ";
        assert_eq!(printed(&console), prompt);
    }

    #[test]
    fn test_make_move_retries_until_valid() {
        let mut board = Board::new(BoardSize::default());
        let player = Player::new(Mark::X, "Player 2");
        let mut console = console("10\nabc\n3\n");

        let placed = board.make_move(&player, &mut console).unwrap();

        assert_eq!(placed, Coordinates::new(0, 2));
        let prompt = "Player 2, please enter the position (1-9): ";
        let expected = format!(
            "{prompt}'10' is not a valid position. Please enter a number between 1 and 9.\n\
             {prompt}'abc' is not a valid position. Please enter a number between 1 and 9.\n\
             {prompt}"
        );
        assert_eq!(printed(&console), expected);
        assert_eq!(board.blank_count(), 8);
    }

    #[test]
    fn test_make_move_gives_up_when_input_ends() {
        let mut board = Board::new(BoardSize::default());
        let player = Player::new(Mark::X, "Player 2");
        let mut console = console("abc\n");

        let err = board.make_move(&player, &mut console).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(board.blank_count(), 9);
    }
}
