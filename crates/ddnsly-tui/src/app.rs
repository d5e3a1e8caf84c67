//! Application core — event loop, action dispatch, overlay management.
//!
//! The app owns the [`ClientRegistry`] directly: every mutation happens
//! synchronously inside action processing, then a fresh roster snapshot
//! fans out to the screen. Overlays (form, delete confirmation, help,
//! toasts) are managed here and capture input while visible.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tokio::sync::mpsc;
use tracing::{info, warn};

use ddnsly_core::{ClientRegistry, RegistryError, link};

use crate::action::{Action, ConfirmRemove, Notification, NotificationLevel};
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screens::dashboard::DashboardScreen;
use crate::widgets::client_form::ClientForm;
use crate::theme;
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App {
    /// The authoritative roster. Mutated only here, inside action processing.
    registry: ClientRegistry,
    /// The single dashboard screen.
    dashboard: DashboardScreen,
    /// Whether the app should keep running.
    running: bool,
    /// Help overlay visibility.
    help_visible: bool,
    /// Add/edit form overlay (captures input while open).
    form: Option<ClientForm>,
    /// Pending delete confirmation (captures input while active).
    pending_confirm: Option<ConfirmRemove>,
    /// Active notification toast with display timestamp.
    notification: Option<(Notification, Instant)>,
    /// Action sender — components can dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    /// Create the app around a seeded registry.
    pub fn new(registry: ClientRegistry) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            registry,
            dashboard: DashboardScreen::new(),
            running: true,
            help_visible: false,
            form: None,
            pending_confirm: None,
            notification: None,
            action_tx,
            action_rx,
        }
    }

    /// Run the main event loop. This is the heart of the TUI.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        self.dashboard.init(self.action_tx.clone())?;
        self.dashboard.set_focused(true);
        self.broadcast_roster()?;

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            // 1. Wait for the next event
            let Some(event) = events.next().await else {
                break;
            };

            // 2. Map event → action(s)
            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Overlays capture input first;
    /// remaining keys are delegated to the dashboard.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Ctrl+C always quits, whatever is on screen
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        // Form captures all input while open
        if let Some(form) = self.form.as_mut() {
            return Ok(form.handle_key_event(key));
        }

        // Confirmation dialog captures all input
        if self.pending_confirm.is_some() {
            return match key.code {
                KeyCode::Char('y' | 'Y') => Ok(Some(Action::ConfirmYes)),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Ok(Some(Action::ConfirmNo)),
                _ => Ok(None),
            };
        }

        if self.help_visible {
            // In help mode, Esc or ? closes help
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') => return Ok(Some(Action::Quit)),
            KeyCode::Char('?') => return Ok(Some(Action::ToggleHelp)),
            _ => {}
        }

        // Delegate to the dashboard
        self.dashboard.handle_key_event(key)
    }

    /// Process a single action — update app state and propagate.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::Resize(_, _) | Action::Render => {}

            Action::Tick => {
                // Auto-dismiss notifications after 3 seconds
                if let Some((_, created)) = &self.notification {
                    if created.elapsed() > Duration::from_secs(3) {
                        self.notification = None;
                    }
                }
            }

            // Roster snapshots go to the screen
            Action::RosterUpdated { .. } => {
                if let Some(follow_up) = self.dashboard.update(action)? {
                    self.action_tx.send(follow_up)?;
                }
            }

            // ── Forms ─────────────────────────────────────────────────
            Action::OpenAddForm => {
                self.form = Some(ClientForm::add());
            }

            Action::OpenEditForm(id) => {
                // Stale selections are silent no-ops
                if let Some(client) = self.registry.get(*id) {
                    self.form = Some(ClientForm::edit(client));
                } else {
                    warn!(%id, "edit requested for a client that no longer exists");
                }
            }

            Action::SubmitAdd(draft) => match self.registry.add(draft).map(|c| c.name.clone()) {
                Ok(name) => {
                    self.form = None;
                    self.broadcast_roster()?;
                    self.action_tx
                        .send(Action::Notify(Notification::success(format!(
                            "Added {name}"
                        ))))?;
                }
                Err(RegistryError::Invalid(errors)) => {
                    if let Some(form) = self.form.as_mut() {
                        form.set_errors(errors);
                    }
                }
                Err(err) => warn!(error = %err, "add rejected"),
            },

            Action::SubmitEdit(id, draft) => match self
                .registry
                .update(*id, draft)
                .map(|c| c.name.clone())
            {
                Ok(name) => {
                    self.form = None;
                    self.broadcast_roster()?;
                    self.action_tx
                        .send(Action::Notify(Notification::success(format!(
                            "Updated {name}"
                        ))))?;
                }
                Err(RegistryError::Invalid(errors)) => {
                    if let Some(form) = self.form.as_mut() {
                        form.set_errors(errors);
                    }
                }
                Err(RegistryError::NotFound { id }) => {
                    // The record vanished under the form — close silently
                    warn!(%id, "update targeted a client that no longer exists");
                    self.form = None;
                }
            },

            Action::CloseForm => {
                // Dropping the form also drops its error list
                self.form = None;
            }

            // ── Deletion (two-step confirm/commit) ────────────────────
            Action::RequestRemove(id) => {
                if let Some(client) = self.registry.get(*id) {
                    self.action_tx.send(Action::ShowConfirm(ConfirmRemove {
                        id: client.id,
                        name: client.name.clone(),
                        ddns_link: client.ddns_link.clone(),
                    }))?;
                }
            }

            Action::ShowConfirm(confirm) => {
                self.pending_confirm = Some(confirm.clone());
            }

            Action::ConfirmYes => {
                if let Some(confirm) = self.pending_confirm.take() {
                    if let Some(removed) = self.registry.remove(confirm.id) {
                        self.broadcast_roster()?;
                        self.action_tx
                            .send(Action::Notify(Notification::success(format!(
                                "Removed {}",
                                removed.name
                            ))))?;
                    }
                }
            }

            Action::ConfirmNo => {
                self.pending_confirm = None;
            }

            // ── External actions ──────────────────────────────────────
            Action::OpenLink(id) => {
                if let Some(client) = self.registry.get(*id) {
                    let url = link::normalize(&client.ddns_link);
                    match open::that(&url) {
                        Ok(()) => {
                            self.action_tx.send(Action::Notify(Notification::info(
                                format!("Opened {url}"),
                            )))?;
                        }
                        Err(err) => {
                            warn!(error = %err, %url, "failed to open link");
                            self.action_tx.send(Action::Notify(Notification::error(
                                format!("Could not open {url} — check the address"),
                            )))?;
                        }
                    }
                }
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            // Notifications
            Action::Notify(n) => {
                self.notification = Some((n.clone(), Instant::now()));
            }

            Action::DismissNotification => {
                self.notification = None;
            }
        }

        Ok(())
    }

    /// Send a fresh roster snapshot + statistics to the screen.
    fn broadcast_roster(&self) -> Result<()> {
        self.action_tx.send(Action::RosterUpdated {
            clients: self.registry.clients().to_vec(),
            stats: self.registry.statistics(),
        })?;
        Ok(())
    }

    // ── Rendering ─────────────────────────────────────────────────────

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Layout: [screen content] [status bar]
        let layout =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

        self.dashboard.render(frame, layout[0]);
        self.render_status_bar(frame, layout[1]);

        // Render overlays on top (order matters: last = topmost)
        if let Some((ref notif, _)) = self.notification {
            self.render_notification(frame, area, notif);
        }

        if let Some(ref confirm) = self.pending_confirm {
            self.render_confirm_dialog(frame, area, confirm);
        }

        if let Some(ref form) = self.form {
            form.render(frame, area);
        }

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    /// Render the bottom status bar with key hints.
    #[allow(clippy::unused_self)]
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("  a ", theme::key_hint_key()),
            Span::styled("add  ", theme::key_hint()),
            Span::styled("e ", theme::key_hint_key()),
            Span::styled("edit  ", theme::key_hint()),
            Span::styled("d ", theme::key_hint_key()),
            Span::styled("delete  ", theme::key_hint()),
            Span::styled("o ", theme::key_hint_key()),
            Span::styled("open link  ", theme::key_hint()),
            Span::styled("? ", theme::key_hint_key()),
            Span::styled("help  ", theme::key_hint()),
            Span::styled("q ", theme::key_hint_key()),
            Span::styled("quit", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Render a centered delete confirmation dialog.
    #[allow(clippy::unused_self)]
    fn render_confirm_dialog(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmRemove) {
        let width = 50u16.min(area.width.saturating_sub(4));
        let height = 6u16;

        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;
        let dialog_area = Rect::new(area.x + x, area.y + y, width, height);

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            dialog_area,
        );

        let block = Block::default()
            .title(" Confirm Deletion ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::ELECTRIC_YELLOW));

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let text = vec![
            Line::from(Span::styled(
                format!("  {confirm}"),
                Style::default().fg(theme::DIM_WHITE),
            )),
            Line::from(Span::styled(
                format!("  {}", confirm.ddns_link),
                Style::default().fg(theme::BORDER_GRAY),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  y ", theme::key_hint_key()),
                Span::styled("confirm    ", theme::key_hint()),
                Span::styled("n ", theme::key_hint_key()),
                Span::styled("cancel", theme::key_hint()),
            ]),
        ];
        frame.render_widget(Paragraph::new(text), inner);
    }

    /// Render a notification toast in the bottom-right corner.
    #[allow(clippy::unused_self)]
    fn render_notification(&self, frame: &mut Frame, area: Rect, notif: &Notification) {
        #[allow(clippy::cast_possible_truncation)]
        let msg_len = notif.message.len() as u16;
        let width = (msg_len + 6).clamp(20, 60);
        let height = 3u16;

        let x = area.width.saturating_sub(width + 1);
        let y = area.height.saturating_sub(height + 2); // above status bar
        let toast_area = Rect::new(area.x + x, area.y + y, width, height);

        let (border_color, icon) = match notif.level {
            NotificationLevel::Success => (theme::SUCCESS_GREEN, "✓"),
            NotificationLevel::Error => (theme::ERROR_RED, "✗"),
            NotificationLevel::Info => (theme::NEON_CYAN, "·"),
        };

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            toast_area,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(toast_area);
        frame.render_widget(block, toast_area);

        let line = Line::from(vec![
            Span::styled(format!(" {icon} "), Style::default().fg(border_color)),
            Span::styled(&notif.message, Style::default().fg(theme::DIM_WHITE)),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
    }

    /// Render the help overlay centered on screen.
    #[allow(clippy::unused_self)]
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_width = 46u16.min(area.width.saturating_sub(4));
        let help_height = 14u16.min(area.height.saturating_sub(4));

        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;

        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            help_area,
        );

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let help_text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  j/k ↑/↓   ", theme::key_hint_key()),
                Span::styled("Move up/down", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  g/G       ", theme::key_hint_key()),
                Span::styled("First / last client", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  a         ", theme::key_hint_key()),
                Span::styled("Add client", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  e / Enter ", theme::key_hint_key()),
                Span::styled("Edit selected client", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  d         ", theme::key_hint_key()),
                Span::styled("Delete (asks to confirm)", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  o         ", theme::key_hint_key()),
                Span::styled("Open DDNS link in browser", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  ?         ", theme::key_hint_key()),
                Span::styled("This help", theme::key_hint()),
            ]),
            Line::from(vec![
                Span::styled("  q         ", theme::key_hint_key()),
                Span::styled("Quit", theme::key_hint()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "                 Esc or ? to close",
                theme::key_hint(),
            )),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}
