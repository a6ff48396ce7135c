//! Win and tie detection.

use std::collections::HashMap;

use tracing::{debug, instrument, warn};

use crate::board::{Board, Cell};
use crate::mark::Mark;
use crate::outcome::GameOutcome;
use crate::player::Player;

/// Evaluates the board for a completed line or a full-board tie.
///
/// Rows are scanned first, then columns, then the forward (`\`) and
/// backward (`/`) diagonals. Only one mark can complete a line in a legally
/// played game, so the order decides which equivalent check fires, not who
/// wins. Boards holding winning lines for both marks are not meaningful
/// input; the first line found is reported.
#[instrument(skip_all, fields(size = board.size()))]
pub fn check_for_winner(
    board: &Board,
    first_player: &Player,
    second_player: &Player,
) -> GameOutcome {
    let names: HashMap<Mark, &str> = [first_player, second_player]
        .into_iter()
        .map(|player| (player.mark(), player.name().as_str()))
        .collect();
    let winner = |mark: Mark| {
        let name = match names.get(&mark) {
            Some(name) => (*name).to_string(),
            None => {
                warn!(%mark, "Winning mark belongs to neither player");
                mark.to_string()
            }
        };
        debug!(%mark, %name, "Line completed");
        GameOutcome::Win(name)
    };

    let size = board.size();
    let rows: Vec<&[Cell]> = board.rows().collect();
    let mut open_cells = 0;
    let mut forward = Vec::with_capacity(size);
    let mut backward = Vec::with_capacity(size);
    let mut columns: Vec<Vec<Cell>> = Vec::with_capacity(size);

    for (index, row) in rows.iter().enumerate() {
        if let Some(mark) = line_owner(row) {
            return winner(mark);
        }

        open_cells += row.iter().filter(|cell| cell.is_blank()).count();
        forward.push(row[index]);
        backward.push(row[size - 1 - index]);
        columns.push(rows.iter().map(|r| r[index]).collect());
    }

    if let Some(mark) = columns.iter().find_map(|column| line_owner(column)) {
        return winner(mark);
    }
    if let Some(mark) = line_owner(&forward) {
        return winner(mark);
    }
    if let Some(mark) = line_owner(&backward) {
        return winner(mark);
    }

    if open_cells == 0 {
        debug!("Board full without a line");
        GameOutcome::Tie
    } else {
        GameOutcome::Ongoing
    }
}

/// Returns the mark filling every cell of `line`, if one does.
fn line_owner(line: &[Cell]) -> Option<Mark> {
    let mark = line.first()?.mark()?;
    line.iter()
        .all(|cell| *cell == Cell::Marked(mark))
        .then_some(mark)
}

impl Board {
    /// Evaluates this board. See [`check_for_winner`].
    pub fn check_for_winner(&self, first_player: &Player, second_player: &Player) -> GameOutcome {
        check_for_winner(self, first_player, second_player)
    }
}
