//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Both sides compute the same [`ScreenLayout`] from the terminal area, so a
//! click always lands on what was drawn there.

use ratatui::layout::{self, Constraint, Direction, Layout, Rect};
use tictactoe_core::Position;
use tracing::instrument;

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

const BOARD_PANEL_WIDTH: u16 = 3 * CELL_WIDTH + 4;

/// A clickable element of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// The move-list entry at this display slot (0 = top row).
    Entry(usize),
    /// The order toggle button.
    Toggle,
}

/// Rectangles of every drawn element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Status line box.
    pub status: Rect,
    /// Board cells in row-major order.
    pub cells: [Rect; 9],
    /// Order toggle button.
    pub toggle: Rect,
    /// Bordered box around the move list.
    pub moves: Rect,
    /// One row per visible move-list slot, top to bottom.
    pub entries: Vec<Rect>,
    /// Footer hint line.
    pub footer: Rect,
}

impl ScreenLayout {
    /// Computes the layout for `area` with `entries` move-list entries.
    #[instrument]
    pub fn new(area: Rect, entries: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BOARD_PANEL_WIDTH),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(rows[1]);

        let board_panel = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3 * CELL_HEIGHT),
                Constraint::Min(0),
            ])
            .split(body[0]);

        let info_panel = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(body[2]);

        let grid = center_horizontally(board_panel[2], 3 * CELL_WIDTH);
        let moves = info_panel[1];

        Self {
            title: rows[0],
            status: board_panel[0],
            cells: cell_rects(grid),
            toggle: info_panel[0],
            moves,
            entries: entry_rects(moves, entries),
            footer: rows[2],
        }
    }

    /// Finds the element under the terminal cell at (`column`, `row`).
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        let point = layout::Position::new(column, row);

        if let Some(pos) = Position::ALL
            .into_iter()
            .find(|pos| self.cells[pos.to_index()].contains(point))
        {
            return Some(Target::Cell(pos));
        }
        if self.toggle.contains(point) {
            return Some(Target::Toggle);
        }
        self.entries
            .iter()
            .position(|rect| rect.contains(point))
            .map(Target::Entry)
    }
}

fn cell_rects(grid: Rect) -> [Rect; 9] {
    Position::ALL.map(|pos| {
        let rect = Rect {
            x: grid.x + (pos.col() as u16 - 1) * CELL_WIDTH,
            y: grid.y + (pos.row() as u16 - 1) * CELL_HEIGHT,
            width: CELL_WIDTH,
            height: CELL_HEIGHT,
        };
        rect.intersection(grid)
    })
}

/// One-line rows inside the bordered move box; slots that do not fit are dropped.
fn entry_rects(moves: Rect, entries: usize) -> Vec<Rect> {
    let inner = Rect {
        x: moves.x.saturating_add(1),
        y: moves.y.saturating_add(1),
        width: moves.width.saturating_sub(2),
        height: moves.height.saturating_sub(2),
    };
    (0..entries.min(inner.height as usize))
        .map(|slot| Rect {
            x: inner.x,
            y: inner.y + slot as u16,
            width: inner.width,
            height: 1,
        })
        .collect()
}

fn center_horizontally(area: Rect, width: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area)[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 80, 30), 3)
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = screen();
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_hit_every_cell_center() {
        let layout = screen();
        for pos in Position::ALL {
            let rect = layout.cells[pos.to_index()];
            let hit = layout.hit(rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(hit, Some(Target::Cell(pos)));
        }
    }

    #[test]
    fn test_hit_toggle_and_entries() {
        let layout = screen();
        assert_eq!(
            layout.hit(layout.toggle.x + 2, layout.toggle.y + 1),
            Some(Target::Toggle)
        );
        assert_eq!(layout.entries.len(), 3);
        for (slot, rect) in layout.entries.iter().enumerate() {
            assert_eq!(layout.hit(rect.x, rect.y), Some(Target::Entry(slot)));
        }
    }

    #[test]
    fn test_hit_outside_everything() {
        let layout = screen();
        assert_eq!(layout.hit(layout.title.x, layout.title.y), None);
        assert_eq!(layout.hit(layout.footer.x, layout.footer.y), None);
        // Border row of the move box is not an entry.
        assert_eq!(layout.hit(layout.moves.x + 2, layout.moves.y), None);
    }

    #[test]
    fn test_entries_truncated_to_available_rows() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 12), 10);
        let inner_height = layout.moves.height.saturating_sub(2) as usize;
        assert_eq!(layout.entries.len(), inner_height.min(10));
        assert!(layout.entries.len() < 10);
    }
}
