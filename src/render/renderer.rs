use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, canvas::Canvas},
};

use crate::game::{Drawable, GameConfig, GameState, RandomSource, Score};
use crate::metrics::SessionMetrics;

/// Draws the board in board coordinates, scoreboard strip on top
pub struct Renderer {
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    board_color: Color,
    background_color: Color,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        let half_width = config.half_width() as f64;
        let half_height = config.half_height() as f64;

        Self {
            x_bounds: [-half_width, half_width],
            // The scoreboard strip is drawn as the header, not on the canvas
            y_bounds: [
                -half_height,
                half_height - f64::from(config.scoreboard_height),
            ],
            board_color: named_color(&config.board_color),
            background_color: named_color(&config.background_color),
        }
    }

    pub fn render<R: RandomSource>(
        &self,
        frame: &mut Frame,
        state: &GameState<R>,
        metrics: &SessionMetrics,
        splash: bool,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Scoreboard
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let scoreboard = self.render_scoreboard(state.score(), metrics, splash);
        frame.render_widget(scoreboard, chunks[0]);

        self.render_board(frame, chunks[1], state);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_board<R: RandomSource>(&self, frame: &mut Frame, area: Rect, state: &GameState<R>) {
        let sprites = state.sprites();

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .style(Style::default().bg(self.background_color))
                    .title(" Snake "),
            )
            .background_color(self.board_color)
            .marker(Marker::Braille)
            .x_bounds(self.x_bounds)
            .y_bounds(self.y_bounds)
            .paint(move |ctx| {
                for sprite in &sprites {
                    let style = Style::default()
                        .fg(named_color(sprite.color))
                        .add_modifier(Modifier::BOLD);
                    ctx.print(
                        sprite.position.x,
                        sprite.position.y,
                        Span::styled(glyph(sprite.shape), style),
                    );
                }
            });

        frame.render_widget(canvas, area);
    }

    fn render_scoreboard(
        &self,
        score: Score,
        metrics: &SessionMetrics,
        splash: bool,
    ) -> Paragraph<'static> {
        let mut spans = vec![
            Span::styled("Score : ", Style::default().fg(Color::Yellow)),
            Span::styled(
                score.current().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("High Score : ", Style::default().fg(Color::Yellow)),
            Span::styled(
                score.best().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Crashes: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.crashes.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Food: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.food_eaten.to_string(), Style::default().fg(Color::White)),
        ];

        if splash {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                "+1",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM))
            .style(Style::default().bg(Color::Black))
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" to stop | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

/// Terminal colour for a colour name; unknown names fall back to white
pub fn named_color(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "limegreen" | "lime" => Color::LightGreen,
        "navyblue" | "navy" => Color::Blue,
        "" => Color::Reset,
        other => other.parse().unwrap_or(Color::White),
    }
}

/// Character drawn for a shape name
pub fn glyph(shape: &str) -> &'static str {
    match shape {
        "square" => "■",
        "circle" => "●",
        "triangle" => "▲",
        _ => "◆",
    }
}
