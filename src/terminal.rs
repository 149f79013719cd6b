//! Terminal front end
//!
//! Plays the role of input source, render sink and fixed-tick scheduler for
//! the simulation. Draws the grid with crossterm; the top row is the highest
//! `y` so that `Up` moves the player up the screen.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{self, Color, Stylize},
    terminal::{self, ClearType},
};
use glam::IVec2;

use crate::hud;
use crate::settings::Settings;
use crate::sim::{Direction, GameEvent, GameState, Snapshot, solve, tick};

/// Ticks run back-to-back before the scheduler gives up catching up
pub const MAX_CATCHUP_TICKS: u32 = 8;

/// What occupies a cell, as drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Empty,
    Coin,
    Player,
    Zombie,
    /// Zombie standing on the player
    Caught,
}

impl CellView {
    pub fn glyph(self) -> char {
        match self {
            CellView::Empty => '.',
            CellView::Coin => '$',
            CellView::Player => '@',
            CellView::Zombie => 'Z',
            CellView::Caught => 'X',
        }
    }

    fn color(self) -> Color {
        match self {
            CellView::Empty => Color::DarkGreen,
            CellView::Coin => Color::Yellow,
            CellView::Player => Color::White,
            CellView::Zombie => Color::Red,
            CellView::Caught => Color::Magenta,
        }
    }
}

/// Resolve a cell. Zombies draw over the player, the player over coins.
pub fn cell_view(snap: &Snapshot, pos: IVec2) -> CellView {
    let zombie = snap.zombies.contains(&pos);
    let player = snap.player == pos;
    match (zombie, player) {
        (true, true) => CellView::Caught,
        (true, false) => CellView::Zombie,
        (false, true) => CellView::Player,
        (false, false) if snap.coins.contains(&pos) => CellView::Coin,
        _ => CellView::Empty,
    }
}

/// Cells row by row, top (highest `y`) first
pub fn cell_rows(snap: &Snapshot) -> Vec<Vec<CellView>> {
    (0..snap.grid_size)
        .rev()
        .map(|y| {
            (0..snap.grid_size)
                .map(|x| cell_view(snap, IVec2::new(x, y)))
                .collect()
        })
        .collect()
}

/// Grid rows top to bottom, cells separated by a space
pub fn render_rows(snap: &Snapshot) -> Vec<String> {
    cell_rows(snap)
        .iter()
        .map(|row| {
            row.iter()
                .map(|view| view.glyph().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Arrow keys and WASD
pub fn key_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(Direction::Up),
        KeyCode::Right | KeyCode::Char('d') => Some(Direction::Right),
        KeyCode::Down | KeyCode::Char('s') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') => Some(Direction::Left),
        _ => None,
    }
}

/// Result of handling a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Continue,
    Quit,
}

/// Interactive game session
struct TerminalApp {
    settings: Settings,
    state: GameState,
    tick_interval: Duration,
    next_tick: Instant,
    autopilot: bool,
    dirty: bool,
}

impl TerminalApp {
    fn new(settings: Settings, autopilot: bool) -> Self {
        let state = new_game(&settings);
        let tick_interval = settings.tick_interval();
        Self {
            settings,
            state,
            tick_interval,
            next_tick: Instant::now() + tick_interval,
            autopilot,
            dirty: true,
        }
    }

    /// Fresh run with a new seed (unless one is pinned in settings)
    fn restart(&mut self) {
        self.state = new_game(&self.settings);
        self.next_tick = Instant::now() + self.tick_interval;
        self.dirty = true;
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        if key.kind != KeyEventKind::Press {
            return KeyAction::Continue;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return KeyAction::Quit;
            }
            KeyCode::Char('r') if self.state.is_over() => self.restart(),
            code => {
                if let Some(dir) = key_direction(code) {
                    self.state.apply_input(Some(dir));
                    self.dirty = true;
                }
            }
        }
        KeyAction::Continue
    }

    /// Run any ticks that are due, at most `MAX_CATCHUP_TICKS` per call.
    /// Past the cap the schedule restarts from `now`.
    fn step_due(&mut self, now: Instant) {
        let mut steps = 0;
        while now >= self.next_tick {
            if steps == MAX_CATCHUP_TICKS {
                log::warn!("Fell behind by more than {} ticks, resyncing", MAX_CATCHUP_TICKS);
                self.next_tick = now + self.tick_interval;
                break;
            }
            steps += 1;
            self.next_tick += self.tick_interval;
            if self.state.is_over() {
                continue;
            }
            if self.autopilot {
                self.state.apply_input(solve(&self.state));
            }
            log_events(&tick(&mut self.state));
            self.dirty = true;
        }
    }

    fn draw(&mut self, out: &mut Stdout) -> Result<()> {
        let snap = self.state.snapshot();
        queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        for row in cell_rows(&snap) {
            for (x, view) in row.iter().enumerate() {
                if x > 0 {
                    queue!(out, style::Print(' '))?;
                }
                queue!(out, style::PrintStyledContent(view.glyph().with(view.color())))?;
            }
            queue!(out, style::Print("\r\n"))?;
        }

        queue!(out, style::Print("\r\n"))?;
        for line in hud::status_lines(&snap) {
            queue!(out, style::Print(line), style::Print("\r\n"))?;
        }
        let help = if snap.won || snap.lost {
            "r: new game   q: quit"
        } else {
            "arrows/wasd: move   q: quit"
        };
        queue!(
            out,
            style::Print("\r\n"),
            style::PrintStyledContent(help.dark_grey()),
            style::ResetColor
        )?;

        out.flush()?;
        self.dirty = false;
        Ok(())
    }
}

fn new_game(settings: &Settings) -> GameState {
    let seed = settings.resolve_seed();
    log::info!("New game with seed: {}", seed);
    GameState::initialize(&settings.world_config(), seed)
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::CoinCollected { pos } => log::debug!("Coin collected at {:?}", pos),
            GameEvent::Won => log::info!("Player won"),
            GameEvent::Caught => log::info!("Player caught"),
        }
    }
}

/// Play interactively until the user quits
pub fn run(settings: Settings, autopilot: bool) -> Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)
        .context("failed to enter alternate screen")?;

    let mut app = TerminalApp::new(settings, autopilot);
    let result = run_event_loop(&mut app, &mut stdout);

    if let Err(err) = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen) {
        log::error!("failed to leave alternate screen: {}", err);
    }
    if let Err(err) = terminal::disable_raw_mode() {
        log::error!("failed to disable raw mode: {}", err);
    }

    let snap = app.state.snapshot();
    log::info!("{}", hud::final_score(&snap));
    result
}

fn run_event_loop(app: &mut TerminalApp, out: &mut Stdout) -> Result<()> {
    loop {
        let now = Instant::now();
        app.step_due(now);

        if app.dirty {
            app.draw(out).context("failed to draw frame")?;
        }

        let timeout = app.next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout).context("failed to poll terminal events")? {
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) => {
                    if app.handle_key(key) == KeyAction::Quit {
                        return Ok(());
                    }
                }
                Event::Resize(..) => app.dirty = true,
                _ => {}
            }
        }
    }
}

/// Run without a terminal: tick until the game ends or `max_ticks` is hit
pub fn run_headless(settings: &Settings, max_ticks: u64, autopilot: bool) -> Snapshot {
    let mut state = new_game(settings);
    while !state.is_over() && state.time_ticks < max_ticks {
        if autopilot {
            state.apply_input(solve(&state));
        }
        log_events(&tick(&mut state));
    }

    let snap = state.snapshot();
    log::info!(
        "Headless run finished: {:?} after {} ticks",
        snap.phase(),
        snap.time_ticks
    );
    snap
}
