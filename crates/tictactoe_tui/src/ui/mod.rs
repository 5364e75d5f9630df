//! Stateless UI rendering.

mod board;
mod moves;

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::layout::ScreenLayout;

/// Draws the whole screen for the current state of `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let game = app.game();
    let layout = ScreenLayout::new(frame.area(), game.history().len());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let status = Paragraph::new(game.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    board::draw_board(frame, &layout, &game.board_view(), game.status().is_over());
    moves::draw_moves(frame, &layout, game);

    let footer = Paragraph::new("Click a cell to play, a move to jump back. Press q to quit.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout.footer);
}
