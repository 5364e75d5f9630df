//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{BoardView, Position, Square, TicTacToePlayer as Player};

use crate::layout::ScreenLayout;

/// Renders the 3x3 grid, highlighting the winning line.
///
/// Once the game is `over`, every cell outside the winning line is dimmed.
pub fn draw_board(frame: &mut Frame, layout: &ScreenLayout, view: &BoardView<'_>, over: bool) {
    for pos in Position::ALL {
        draw_cell(frame, layout.cells[pos.to_index()], view, pos, over);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &BoardView<'_>, pos: Position, over: bool) {
    let (symbol, base_style) = match view.square(pos) {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let (style, border) = if view.is_winning(pos) {
        (
            base_style.bg(Color::Green).fg(Color::Black),
            Style::default().fg(Color::Green),
        )
    } else if over {
        (
            base_style.add_modifier(Modifier::DIM),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        )
    } else {
        (base_style, Style::default().fg(Color::DarkGray))
    };

    let cell = Paragraph::new(symbol)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(cell, area);
}
