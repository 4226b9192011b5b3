use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::game::{GameConfig, GameState, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::Renderer;

/// How long the "+1" splash stays up after eating
const SPLASH_DURATION: Duration = Duration::from_millis(500);

pub struct HumanMode {
    state: GameState,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    splash_until: Option<Instant>,
}

impl HumanMode {
    pub fn new(config: &GameConfig) -> Result<Self> {
        let state = GameState::new(config).context("Invalid game configuration")?;

        Ok(Self {
            state,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(config),
            input_handler: InputHandler::new(),
            should_quit: false,
            splash_until: None,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            best = self.state.score().best(),
            crashes = self.metrics.crashes,
            food = self.metrics.food_eaten,
            "session ended"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // One tick at a time; a slow frame delays the next tick instead of bunching them
        let mut tick_timer = interval(self.state.delay());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_event(event) {
                                self.draw(terminal)?;
                            }
                        }
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick, redraw after every one
                _ = tick_timer.tick() => {
                    self.update_game();
                    self.draw(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Returns true when the screen needs a redraw
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return false;
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Steer(direction) => {
                        self.state.set_direction(direction);
                    }
                    KeyAction::Quit => {
                        self.should_quit = true;
                    }
                    KeyAction::None => {}
                }
                false
            }
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                true
            }
            _ => false,
        }
    }

    fn update_game(&mut self) -> TickOutcome {
        let outcome = self.state.tick();
        self.metrics.on_tick(&outcome);

        if outcome.ate_food {
            self.splash_until = Some(Instant::now() + SPLASH_DURATION);
        }
        if outcome.collision.is_some() {
            self.splash_until = None;
        }

        outcome
    }

    fn splash_visible(&self) -> bool {
        self.splash_until
            .is_some_and(|until| Instant::now() < until)
    }

    fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        self.metrics.update();
        let splash = self.splash_visible();
        terminal
            .draw(|frame| {
                self.renderer
                    .render(frame, &self.state, &self.metrics, splash);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
