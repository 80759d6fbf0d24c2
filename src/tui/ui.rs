//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::games::tictactoe::{Mark, Position, Square};
use crate::session::Snapshot;
use crate::theme::Theme;

/// Width of one board cell in terminal columns.
pub const CELL_WIDTH: u16 = 11;
/// Height of one board cell in terminal rows.
pub const CELL_HEIGHT: u16 = 3;

const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const HELP: &str = "Arrows: move | Enter/1-9/click: play | r: restart | t: theme | q: quit";

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Default text.
    pub foreground: Color,
    /// Separators, hints and empty cells.
    pub muted: Color,
    /// X marks.
    pub x: Color,
    /// O marks.
    pub o: Color,
    /// Background under the keyboard cursor.
    pub cursor: Color,
    /// Background of the winning line.
    pub highlight: Color,
    /// Title and status text.
    pub accent: Color,
}

impl Palette {
    /// Palette for `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(250, 250, 247),
                foreground: Color::Rgb(32, 32, 36),
                muted: Color::Rgb(150, 150, 150),
                x: Color::Rgb(25, 90, 200),
                o: Color::Rgb(200, 45, 45),
                cursor: Color::Rgb(222, 222, 230),
                highlight: Color::Rgb(255, 226, 140),
                accent: Color::Rgb(0, 110, 150),
            },
            Theme::Dark => Self {
                background: Color::Rgb(24, 24, 28),
                foreground: Color::Rgb(230, 230, 230),
                muted: Color::Rgb(100, 100, 110),
                x: Color::Rgb(110, 170, 255),
                o: Color::Rgb(255, 120, 120),
                cursor: Color::Rgb(58, 58, 70),
                highlight: Color::Rgb(110, 90, 20),
                accent: Color::Rgb(90, 210, 230),
            },
        }
    }

    fn mark(&self, mark: Mark) -> Color {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }
}

/// Renders a full frame: title, board, score, status and help.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot, cursor: Position) {
    let palette = Palette::for_theme(*snapshot.theme());
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        area,
    );

    let chunks = layout(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.muted)),
        );
    frame.render_widget(title, chunks[0]);

    draw_board(frame, board_area(area), snapshot, cursor, &palette);

    let score = snapshot.score();
    let score_line = Line::from(vec![
        Span::styled(
            format!("X: {}", score.wins(Mark::X)),
            Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("O: {}", score.wins(Mark::O)),
            Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
        ),
    ]);
    let score_widget = Paragraph::new(score_line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted))
            .title("Score"),
    );
    frame.render_widget(score_widget, chunks[2]);

    let status_color = snapshot
        .status()
        .winner()
        .map_or(palette.accent, |mark| palette.mark(mark));
    let status = Paragraph::new(snapshot.message().as_str())
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted)),
        );
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

/// Area occupied by the 3x3 grid inside a frame of size `area`.
pub fn board_area(area: Rect) -> Rect {
    center_rect(layout(area)[1], BOARD_WIDTH, BOARD_HEIGHT)
}

/// Area of one cell inside `board`, clipped to the board.
pub fn cell_rect(board: Rect, pos: Position) -> Rect {
    let col = pos.col() as u16;
    let row = pos.row() as u16;
    Rect::new(
        board.x + col * (CELL_WIDTH + 1),
        board.y + row * (CELL_HEIGHT + 1),
        CELL_WIDTH,
        CELL_HEIGHT,
    )
    .intersection(board)
}

/// Cell under the terminal coordinate (`column`, `row`), if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let board = board_area(area);
    Position::ALL.into_iter().find(|pos| {
        let cell = cell_rect(board, *pos);
        column >= cell.x
            && column < cell.x + cell.width
            && row >= cell.y
            && row < cell.y + cell.height
    })
}

fn layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),         // Title
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Score
            Constraint::Length(3),         // Status
            Constraint::Length(1),         // Help
        ])
        .split(area)
}

fn draw_board(
    frame: &mut Frame,
    board: Rect,
    snapshot: &Snapshot,
    cursor: Position,
    palette: &Palette,
) {
    let separator = Style::default().fg(palette.muted);

    for col in 1..3u16 {
        let x = board.x + col * (CELL_WIDTH + 1) - 1;
        let rect = Rect::new(x, board.y, 1, board.height).intersection(board);
        if rect.is_empty() {
            continue;
        }
        let lines: Vec<Line> = (0..rect.height).map(|_| Line::from("│")).collect();
        frame.render_widget(Paragraph::new(lines).style(separator), rect);
    }

    for row in 1..3u16 {
        let y = board.y + row * (CELL_HEIGHT + 1) - 1;
        let rect = Rect::new(board.x, y, board.width, 1).intersection(board);
        if rect.is_empty() {
            continue;
        }
        let line: String = (0..rect.width)
            .map(|i| if (i + 1) % (CELL_WIDTH + 1) == 0 { '┼' } else { '─' })
            .collect();
        frame.render_widget(Paragraph::new(line).style(separator), rect);
    }

    for pos in Position::ALL {
        draw_cell(frame, cell_rect(board, pos), snapshot, cursor, pos, palette);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    cursor: Position,
    pos: Position,
    palette: &Palette,
) {
    if area.is_empty() {
        return;
    }
    let (symbol, mut style) = match snapshot.board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(palette.muted),
        ),
        Square::Occupied(mark) => (
            mark.to_string(),
            Style::default().fg(palette.mark(mark)).add_modifier(Modifier::BOLD),
        ),
    };

    if snapshot.is_winning_cell(pos) {
        style = style.bg(palette.highlight).add_modifier(Modifier::BOLD);
    } else if pos == cursor && !snapshot.status().is_over() {
        style = style.bg(palette.cursor);
    }

    let text = vec![Line::from(""), Line::from(symbol), Line::from("")];
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
