//! App state and main loop: input handling, poller lifecycle, and drawing.
//! The shell owns no polling or caching logic; it wires registry changes to
//! poller spawn/teardown and draws whatever the buffers currently hold.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Terminal,
};
use tokio::time::sleep;

use crate::connections::{self, Connection, ConnectionsFile};
use crate::heartbeat::Heartbeat;
use crate::poller::{spawn_poller, PollerHandle};
use crate::ui::{self, dialog::AddDialog};

pub struct App {
    heartbeat: Heartbeat,
    client: reqwest::Client,
    registry: ConnectionsFile,
    pollers: Vec<PollerHandle>,

    selected: usize,
    add_dialog: Option<AddDialog>,
    confirm_remove: Option<usize>,
    should_quit: bool,

    /// Demo mode runs with an in-memory registry that is never written back.
    persist: bool,
}

impl App {
    pub fn new(registry: ConnectionsFile, persist: bool) -> Self {
        let heartbeat = Heartbeat::start();
        let client = reqwest::Client::new();
        let pollers = registry
            .connections
            .iter()
            .cloned()
            .map(|connection| spawn_poller(client.clone(), connection, heartbeat.subscribe()))
            .collect();
        App {
            heartbeat,
            client,
            registry,
            pollers,
            selected: 0,
            add_dialog: None,
            confirm_remove: None,
            should_quit: false,
            persist,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let res = self.event_loop(&mut terminal).await;

        // Teardown
        disable_raw_mode()?;
        let backend = terminal.backend_mut();
        execute!(backend, LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        self.heartbeat.shutdown();

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
            if self.should_quit {
                break;
            }

            // Draw whatever the pollers have produced so far
            terminal.draw(|f| self.draw(f))?;

            // Redraw cadence; polling runs on the heartbeat, not this loop
            sleep(Duration::from_millis(250)).await;
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if let Some(dialog) = self.add_dialog.as_mut() {
            match key.code {
                KeyCode::Esc => self.add_dialog = None,
                KeyCode::Enter => match dialog.to_connection() {
                    Ok(connection) => {
                        self.add_dialog = None;
                        self.add_connection(connection);
                    }
                    Err(msg) => dialog.error = Some(msg),
                },
                KeyCode::Tab | KeyCode::Down => dialog.next_field(),
                KeyCode::BackTab | KeyCode::Up => dialog.prev_field(),
                KeyCode::Backspace => dialog.backspace(),
                KeyCode::Char(c) => dialog.insert(c),
                _ => {}
            }
            return;
        }

        if let Some(index) = self.confirm_remove {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    self.confirm_remove = None;
                    self.remove_connection(index);
                }
                KeyCode::Char('n') | KeyCode::Esc => self.confirm_remove = None,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('a') => self.add_dialog = Some(AddDialog::new()),
            KeyCode::Char('x') | KeyCode::Delete => {
                if !self.pollers.is_empty() {
                    self.confirm_remove = Some(self.selected);
                }
            }
            KeyCode::Left | KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => {
                if self.selected + 1 < self.pollers.len() {
                    self.selected += 1;
                }
            }
            _ => {}
        }
    }

    /// Register a connection: identity collisions replace the existing entry,
    /// tearing its poller down first. Safe while other pollers are mid-flight.
    fn add_connection(&mut self, connection: Connection) {
        self.pollers.retain(|p| !p.connection.same_identity(&connection));
        self.registry.add(connection.clone());
        if self.persist {
            let _ = connections::save_connections(&self.registry);
        }
        self.pollers.push(spawn_poller(
            self.client.clone(),
            connection,
            self.heartbeat.subscribe(),
        ));
    }

    /// Remove a connection and discard its history. A poll already in flight
    /// for it may still settle against the orphaned buffer; nothing reads it.
    fn remove_connection(&mut self, index: usize) {
        if index >= self.pollers.len() {
            return;
        }
        let handle = self.pollers.remove(index);
        self.registry.remove(&handle.connection);
        if self.persist {
            let _ = connections::save_connections(&self.registry);
        }
        drop(handle);
        if self.selected >= self.pollers.len() {
            self.selected = self.pollers.len().saturating_sub(1);
        }
    }

    fn draw(&mut self, f: &mut ratatui::Frame<'_>) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(f.area());

        ui::header::draw_header(f, rows[0], self.pollers.len());

        if self.pollers.is_empty() {
            f.render_widget(
                Paragraph::new("No servers registered. Press 'a' to add one."),
                rows[1],
            );
        } else {
            let columns = if self.pollers.len() == 1 { 1 } else { 2 };
            let row_count = self.pollers.len().div_ceil(columns);
            let vchunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
                .split(rows[1]);
            for (i, handle) in self.pollers.iter().enumerate() {
                let hchunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                    .split(vchunks[i / columns]);
                let focused = i == self.selected && self.add_dialog.is_none();
                ui::card::draw_card(f, hchunks[i % columns], handle, focused);
            }
        }

        if let Some(dialog) = &self.add_dialog {
            ui::dialog::draw_add_dialog(f, dialog);
        } else if let Some(index) = self.confirm_remove {
            if let Some(handle) = self.pollers.get(index) {
                ui::dialog::draw_confirm_remove(f, &handle.connection);
            }
        }
    }
}
