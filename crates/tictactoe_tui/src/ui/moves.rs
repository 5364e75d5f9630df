//! Move list and order toggle rendering.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::Game;

use crate::layout::ScreenLayout;

/// Renders the order toggle and the numbered move list.
///
/// The current move is plain text; every other entry is styled as a link.
pub fn draw_moves(frame: &mut Frame, layout: &ScreenLayout, game: &Game) {
    let toggle = Paragraph::new(game.order_label())
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, layout.toggle);

    frame.render_widget(
        Block::default().borders(Borders::ALL).title("Moves"),
        layout.moves,
    );

    for ((slot, entry), area) in game.moves().iter().enumerate().zip(&layout.entries) {
        let style = if entry.is_current() {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::UNDERLINED)
        };
        let line = Line::from(vec![
            Span::raw(format!("{}. ", slot + 1)),
            Span::styled(entry.to_string(), style),
        ]);
        frame.render_widget(Paragraph::new(line), *area);
    }
}
