use std::time::{Duration, Instant};

use asciimate_core::{AnimationSpeed, ColorTheme};
use asciimate_effects::{EffectError, Player, Registry, seed_rng};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::{Rng, SeedableRng, rngs::StdRng};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{List, ListItem, ListState, Paragraph},
};
use tracing::{debug, warn};

/// Longest the event loop blocks while nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Startup settings for [`App`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    pub speed: AnimationSpeed,
    pub color_theme: ColorTheme,
    pub looping: bool,
    pub seed: Option<u64>,
}

#[derive(Debug)]
enum Screen {
    Menu,
    Playing { key: u32, player: Player },
}

/// The full-screen player: a menu of animations and a playback screen.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    registry: Registry,
    screen: Screen,
    menu: ListState,
    speed: AnimationSpeed,
    color_theme: ColorTheme,
    looping: bool,
    /// Source of per-run seeds and random picks.
    rng: StdRng,
    /// Quit instead of returning to the menu once playback ends.
    exit_after_playback: bool,
    /// Last error shown on the status line.
    status: Option<String>,
}

impl App {
    pub fn new(registry: Registry, settings: Settings) -> Self {
        let mut menu = ListState::default();
        if !registry.is_empty() {
            menu.select(Some(0));
        }
        Self {
            running: false,
            registry,
            screen: Screen::Menu,
            menu,
            speed: settings.speed,
            color_theme: settings.color_theme,
            looping: settings.looping,
            rng: seed_rng(settings.seed),
            exit_after_playback: false,
            status: None,
        }
    }

    /// Open straight into playback of `key` and quit when it ends.
    pub fn play_then_exit(mut self, key: u32) -> Result<Self, EffectError> {
        self.play(key)?;
        self.exit_after_playback = true;
        Ok(self)
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            self.on_tick(Instant::now());
        }
        Ok(())
    }

    fn play(&mut self, key: u32) -> Result<(), EffectError> {
        let entry = self.registry.get(key).ok_or(EffectError::UnknownKey(key))?;
        let run_rng = StdRng::seed_from_u64(self.rng.r#gen());
        let frames = entry.start(run_rng)?;
        let mut player = Player::new(&entry.name, frames, self.speed, Instant::now());
        if self.looping {
            player = player.looping(entry.generator(), StdRng::seed_from_u64(self.rng.r#gen()));
        }
        debug!(key, name = %entry.name, looping = self.looping, "playing");
        self.status = None;
        self.screen = Screen::Playing { key, player };
        Ok(())
    }

    fn play_or_report(&mut self, key: u32) {
        if let Err(err) = self.play(key) {
            warn!(key, %err, "failed to start animation");
            self.status = Some(err.to_string());
        }
    }

    fn play_selected(&mut self) {
        let key = self
            .menu
            .selected()
            .and_then(|i| self.registry.entries().get(i))
            .map(|e| e.key);
        if let Some(key) = key {
            self.play_or_report(key);
        }
    }

    fn play_random(&mut self) {
        let picked = self
            .registry
            .random_entry(&mut self.rng)
            .map(|e| (e.key, e.name.clone()));
        if let Some((key, name)) = picked {
            debug!(key, %name, "random pick");
            if let Some(index) = self.registry.entries().iter().position(|e| e.key == key) {
                self.menu.select(Some(index));
            }
            self.play_or_report(key);
        }
    }

    fn on_tick(&mut self, now: Instant) {
        if let Screen::Playing { player, .. } = &mut self.screen {
            player.tick(now);
            if player.is_finished() && self.exit_after_playback {
                self.quit();
            }
        }
    }

    /// How long to wait for input before the next frame is due.
    fn poll_timeout(&self, now: Instant) -> Duration {
        match &self.screen {
            Screen::Playing { player, .. } => player
                .time_until_next(now)
                .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL)),
            Screen::Menu => IDLE_POLL,
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacing
            Constraint::Fill(1),   // Body
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help text
        ])
        .split(area);

        let color = self.color_theme.color();
        let title = match &self.screen {
            Screen::Menu => "Animated ASCII Art Collection".to_string(),
            Screen::Playing { key, player } => format!("{key}: {}", player.name()),
        };
        frame.render_widget(
            Paragraph::new(title.bold().fg(color)).alignment(Alignment::Center),
            chunks[0],
        );

        match &self.screen {
            Screen::Menu => self.render_menu(frame, chunks[2]),
            Screen::Playing { player, .. } => render_player(frame, chunks[2], player, color),
        }

        frame.render_widget(
            Paragraph::new(self.status_line()).alignment(Alignment::Center),
            chunks[3],
        );
        frame.render_widget(self.help_line(), chunks[4]);
    }

    fn render_menu(&mut self, frame: &mut Frame, area: Rect) {
        let color = self.color_theme.color();
        let items: Vec<ListItem> = self
            .registry
            .entries()
            .iter()
            .map(|e| ListItem::new(format!("{:>3}: {}", e.key, e.name)))
            .collect();
        let list = List::new(items)
            .highlight_style(Style::new().fg(color).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(40),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_stateful_widget(list, column, &mut self.menu);
    }

    fn status_line(&self) -> Line<'static> {
        if let Some(status) = &self.status {
            return Line::from(status.clone().red());
        }
        let mut parts = vec![format!("speed: {}", self.speed.label())];
        match &self.screen {
            Screen::Menu if self.looping => parts.push("loop".to_string()),
            Screen::Menu => {}
            Screen::Playing { player, .. } => {
                if player.is_looping() {
                    parts.push("loop".to_string());
                }
                if player.is_finished() {
                    parts.push("finished".to_string());
                }
            }
        }
        Line::from(parts.join("  ").dark_gray())
    }

    fn help_line(&self) -> Line<'static> {
        let color = self.color_theme.color();
        let keys: &[(&'static str, &'static str)] = match self.screen {
            Screen::Menu => &[
                ("↑↓", " select  "),
                ("enter", " play  "),
                ("r", " random  "),
                ("L", " loop  "),
                ("s", " speed  "),
                ("c", " color  "),
                ("q", " quit"),
            ],
            Screen::Playing { .. } => &[
                ("esc", " back  "),
                ("enter", " replay  "),
                ("s", " speed  "),
                ("c", " color  "),
                ("ctrl-c", " quit"),
            ],
        };
        let spans: Vec<_> = keys
            .iter()
            .flat_map(|(key, label)| [key.bold().fg(color), label.dark_gray()])
            .collect();
        Line::from(spans).centered()
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits no longer than the time left on the current frame.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if let (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) =
            (key.modifiers, key.code)
        {
            self.quit();
            return;
        }
        match self.screen {
            Screen::Menu => self.on_menu_key(key.code),
            Screen::Playing { .. } => self.on_playing_key(key.code),
        }
    }

    fn on_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Up | KeyCode::Char('k') => self.menu.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.menu.select_next(),
            KeyCode::Home => self.menu.select_first(),
            KeyCode::End => self.menu.select_last(),
            KeyCode::Enter => self.play_selected(),
            KeyCode::Char('r') => self.play_random(),
            KeyCode::Char('L') => self.toggle_loop(),
            KeyCode::Char('s') => self.cycle_speed(),
            KeyCode::Char('c') => self.cycle_color_theme(),
            _ => {}
        }
    }

    fn on_playing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => self.back_to_menu(),
            KeyCode::Enter => {
                if let Screen::Playing { key, .. } = self.screen {
                    self.play_or_report(key);
                }
            }
            KeyCode::Char('s') => self.cycle_speed(),
            KeyCode::Char('c') => self.cycle_color_theme(),
            _ => {}
        }
    }

    fn back_to_menu(&mut self) {
        if self.exit_after_playback {
            self.quit();
        } else {
            self.screen = Screen::Menu;
        }
    }

    fn toggle_loop(&mut self) {
        self.looping = !self.looping;
    }

    fn cycle_speed(&mut self) {
        self.speed = self.speed.next();
        if let Screen::Playing { player, .. } = &mut self.screen {
            player.set_speed(self.speed);
        }
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.color_theme = self.color_theme.next();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Draw the current frame centred in `area`.
fn render_player(frame: &mut Frame, area: Rect, player: &Player, color: Color) {
    let Some(current) = player.current() else {
        return;
    };
    let grid = &current.grid;
    let width = u16::try_from(grid.width()).unwrap_or(u16::MAX);
    let height = u16::try_from(grid.height()).unwrap_or(u16::MAX);
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, cell, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(row);

    let lines: Vec<Line> = grid
        .lines()
        .into_iter()
        .map(|s| Line::from(s).style(Style::new().fg(color)))
        .collect();
    frame.render_widget(Paragraph::new(lines), cell);
}
