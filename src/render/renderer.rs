use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Cell, GameState, GameStatus, ItemKind, ObstacleKind};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw the whole screen. `message` is the outcome of the last turn, if
    /// it is worth telling the player about.
    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        metrics: &GameMetrics,
        message: Option<&str>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Last message
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], state, metrics);
        frame.render_widget(stats, chunks[0]);

        if state.status == GameStatus::EnergyDepleted {
            let game_over = self.render_game_over(chunks[1], state);
            frame.render_widget(game_over, chunks[1]);
        } else {
            let grid = self.render_grid(chunks[1], state);
            frame.render_widget(grid, chunks[1]);
        }

        let message = self.render_message(state, message);
        frame.render_widget(message, chunks[2]);

        let controls = self.render_controls(chunks[3]);
        frame.render_widget(controls, chunks[3]);
    }

    fn render_grid(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let lines: Vec<Line> = state
            .grid
            .rows()
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|cell| Span::styled(format!("{} ", cell.symbol()), cell_style(cell)))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(format!(" Phase {} ", state.phase())),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, _area: Rect, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Energy: ", label),
            Span::styled(
                state.agent.energy().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Items: ", label),
            Span::styled(state.agent.collected().len().to_string(), value),
            Span::raw("    "),
            Span::styled("Score: ", label),
            Span::styled(
                state.agent.score().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Phase: ", label),
            Span::styled(state.phase().to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_message(&self, state: &GameState, message: Option<&str>) -> Paragraph<'_> {
        let line = if let Some(target) = state.pending_transposition {
            Line::from(Span::styled(
                format!("Radioactive at {target}: press G to transpose it, any direction to skip"),
                Style::default().fg(Color::Magenta),
            ))
        } else if let Some(message) = message {
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::LightRed),
            ))
        } else {
            Line::from("")
        };

        Paragraph::new(line).alignment(Alignment::Center)
    }

    fn render_game_over(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "OUT OF ENERGY",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Items collected: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.agent.collected().len().to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.agent.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Press any key to exit",
                Style::default().fg(Color::Gray),
            )]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("G", Style::default().fg(Color::Green)),
            Span::raw(" to interact | "),
            Span::styled("any other key", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Colour for a cell's display code
pub fn cell_style(cell: &Cell) -> Style {
    let fg = match cell {
        Cell::Empty => Color::DarkGray,
        Cell::Item(ItemKind::Red) => Color::Red,
        Cell::Item(ItemKind::Green) => Color::Green,
        Cell::Item(ItemKind::Blue) => Color::Blue,
        Cell::Obstacle(ObstacleKind::Water) => Color::Cyan,
        Cell::Obstacle(ObstacleKind::Tree) => Color::Yellow,
        Cell::Radioactive | Cell::Agent => Color::Magenta,
    };

    let style = Style::default().fg(fg);
    match cell {
        Cell::Agent | Cell::Radioactive => style.add_modifier(Modifier::BOLD),
        _ => style,
    }
}
