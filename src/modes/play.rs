use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;

use crate::game::{GameClock, GameConfig, GameEngine, GameState};
use crate::input::{InputArbiter, InputHandler, KeyAction, SwipeTracker};
use crate::render::Renderer;
use crate::score::{HighScoreStore, SessionStats};

pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    clock: GameClock,
    arbiter: InputArbiter,
    stats: SessionStats,
    store: HighScoreStore,
    renderer: Renderer,
    input_handler: InputHandler,
    swipe: SwipeTracker,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig, store: HighScoreStore) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        let stats = SessionStats::new(store.load());

        Self {
            engine,
            state,
            clock: GameClock::new(),
            arbiter: InputArbiter::new(),
            stats,
            store,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            swipe: SwipeTracker::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Poll the game clock at 60 Hz; it decides when a tick is due
        // based on the current speed interval
        let mut frame_timer = interval(Duration::from_millis(16));

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Game clock frame
                _ = frame_timer.tick() => {
                    if self.clock.tick_due(Instant::now(), self.state.interval) {
                        self.update_game()?;
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    if self.state.is_running() {
                        self.stats.update();
                    }
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.stats);
                    }).context("Failed to draw frame")?;
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

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return Ok(());
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Move(direction) => {
                        self.arbiter.request_direction(direction, &self.state);
                    }
                    KeyAction::Restart => {
                        self.reset_game();
                    }
                    KeyAction::Quit => {
                        self.should_quit = true;
                    }
                    KeyAction::None => {}
                }
            }
            Event::Mouse(mouse) => {
                self.handle_mouse_event(mouse);
            }
            _ => {}
        }

        Ok(())
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(_) => {
                self.swipe.press(mouse.column as i32, mouse.row as i32);
            }
            MouseEventKind::Up(_) => {
                if let Some(direction) = self
                    .swipe
                    .release(mouse.column as i32, mouse.row as i32)
                {
                    self.arbiter.request_direction(direction, &self.state);
                }
            }
            _ => {}
        }
    }

    fn update_game(&mut self) -> Result<()> {
        let queued = self.arbiter.take();
        let result = self.engine.tick(&mut self.state, queued);

        // Persist the high score the moment it is beaten, not at game over
        if result.ate_food && self.stats.record_score(self.state.score) {
            self.store
                .save(self.stats.high_score)
                .context("Failed to persist high score")?;
        }

        Ok(())
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.arbiter.clear();
        self.stats.on_game_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
