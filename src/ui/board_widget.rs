use crossterm::style::Stylize;

use crate::game::{Board, Cell, PlayerId, COLS};

/// Inner width of the console frame, between the two `|` borders.
pub const FRAME_WIDTH: usize = 39;

/// Marker for a participant's pieces.
pub fn symbol(player: PlayerId) -> &'static str {
    if player == PlayerId::FIRST {
        "X"
    } else {
        "O"
    }
}

/// Paint `text` in the participant's colors: red for the first seat, blue
/// for the second.
pub fn paint(text: &str, player: PlayerId, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    let styled = text.black();
    if player == PlayerId::FIRST {
        styled.on_red().to_string()
    } else {
        styled.on_blue().to_string()
    }
}

/// Render the grid rows followed by the 1-based column legend.
pub fn render_board(board: &Board, color: bool) -> Vec<String> {
    let mut lines = Vec::new();

    for row in board.rows() {
        let mut line = String::from("|    ");
        for cell in row {
            match cell {
                Cell::Empty => line.push('-'),
                Cell::Taken(player) => line.push_str(&paint(symbol(*player), *player, color)),
            }
            line.push_str("    ");
        }
        line.push('|');
        lines.push(line);
    }

    let rule = "-".repeat(FRAME_WIDTH + 2);
    lines.push(rule.clone());
    let mut legend = String::from("|    ");
    for col in 0..COLS {
        legend.push_str(&format!("{}    ", col + 1));
    }
    legend.push('|');
    lines.push(legend);
    lines.push(rule);

    lines
}
