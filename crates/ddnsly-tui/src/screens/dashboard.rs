//! Dashboard screen — stat cards over the client table, the whole app.
//!
//! Layout:
//! ┌─ Total Clients ─┐ ┌─ Equipment ─┐ ┌─ Distribution ──┐
//! │ big count        │ │ type count  │ │ per-vendor rows │
//! └─────────────────┘ └─────────────┘ └─────────────────┘
//! ┌─ Clients ───────────────────────────────────────────┐
//! │ Name │ DDNS Link │ Equipment                        │
//! └─────────────────────────────────────────────────────┘

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

use ddnsly_core::{Client, ClientId, Statistics};

use crate::action::Action;
use crate::component::Component;
use crate::theme;

pub struct DashboardScreen {
    focused: bool,
    clients: Vec<Client>,
    stats: Statistics,
    table_state: TableState,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            clients: Vec::new(),
            stats: Statistics::compute(&[]),
            table_state: TableState::default(),
        }
    }

    fn selected_index(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    fn selected_id(&self) -> Option<ClientId> {
        self.clients.get(self.selected_index()).map(|c| c.id)
    }

    fn select(&mut self, idx: usize) {
        let clamped = if self.clients.is_empty() {
            0
        } else {
            idx.min(self.clients.len() - 1)
        };
        self.table_state.select(Some(clamped));
    }

    #[allow(clippy::cast_sign_loss, clippy::as_conversions)]
    fn move_selection(&mut self, delta: isize) {
        if self.clients.is_empty() {
            return;
        }
        #[allow(clippy::cast_possible_wrap)]
        let current = self.selected_index() as isize;
        #[allow(clippy::cast_possible_wrap)]
        let next = (current + delta).clamp(0, self.clients.len() as isize - 1);
        self.select(next as usize);
    }

    // ── Stat cards ────────────────────────────────────────────────────

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        let cards = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

        self.render_count_card(
            frame,
            cards[0],
            " Total Clients ",
            self.stats.total_clients,
            "DDNS links configured",
        );
        self.render_count_card(
            frame,
            cards[1],
            " Equipment ",
            self.stats.unique_equipments,
            "distinct vendor types",
        );
        self.render_distribution_card(frame, cards[2]);
    }

    #[allow(clippy::unused_self)]
    fn render_count_card(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &'static str,
        count: usize,
        caption: &'static str,
    ) {
        let block = Block::default()
            .title(title)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {count}"),
                Style::default()
                    .fg(theme::ELECTRIC_PURPLE)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("  {caption}"),
                Style::default().fg(theme::BORDER_GRAY),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_distribution_card(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Distribution ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.stats.equipment_distribution.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "  no clients yet",
                    Style::default().fg(theme::BORDER_GRAY),
                ))),
                inner,
            );
            return;
        }

        let lines: Vec<Line> = self
            .stats
            .equipment_distribution
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        "  ● ",
                        Style::default().fg(theme::equipment_color(entry.equipment)),
                    ),
                    Span::styled(
                        format!("{:<10}", entry.equipment.label()),
                        Style::default().fg(theme::DIM_WHITE),
                    ),
                    Span::styled(
                        entry.count.to_string(),
                        Style::default().fg(theme::CORAL),
                    ),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    // ── Client table ──────────────────────────────────────────────────

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" Clients ({}) ", self.clients.len()))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.clients.is_empty() {
            let empty = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  No clients yet",
                    Style::default()
                        .fg(theme::DIM_WHITE)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled("  Press ", theme::key_hint()),
                    Span::styled("a", theme::key_hint_key()),
                    Span::styled(" to add one", theme::key_hint()),
                ]),
            ];
            frame.render_widget(Paragraph::new(empty), inner);
            return;
        }

        let header = Row::new(vec![
            Cell::from("Name").style(theme::table_header()),
            Cell::from("DDNS Link").style(theme::table_header()),
            Cell::from("Equipment").style(theme::table_header()),
        ]);

        let selected_idx = self.selected_index();
        let rows: Vec<Row> = self
            .clients
            .iter()
            .enumerate()
            .map(|(i, client)| {
                let is_selected = i == selected_idx;
                let prefix = if is_selected { "▸ " } else { "  " };

                let name_style = Style::default()
                    .fg(theme::NEON_CYAN)
                    .add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    });

                let row_style = if is_selected {
                    Style::default().bg(theme::BG_HIGHLIGHT)
                } else {
                    theme::table_row()
                };

                Row::new(vec![
                    Cell::from(format!("{prefix}{}", client.name)).style(name_style),
                    Cell::from(client.ddns_link.clone())
                        .style(Style::default().fg(theme::CORAL)),
                    Cell::from(client.equipment.label())
                        .style(Style::default().fg(theme::equipment_color(client.equipment))),
                ])
                .style(row_style)
            })
            .collect();

        let widths = [
            Constraint::Fill(2),
            Constraint::Fill(3),
            Constraint::Length(12),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(theme::table_selected());

        let mut state = self.table_state.clone();
        frame.render_stateful_widget(table, inner, &mut state);
    }
}

impl Component for DashboardScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(1);
                Ok(None)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-1);
                Ok(None)
            }
            KeyCode::Char('g') => {
                self.select(0);
                Ok(None)
            }
            KeyCode::Char('G') => {
                if !self.clients.is_empty() {
                    self.select(self.clients.len() - 1);
                }
                Ok(None)
            }
            KeyCode::Char('a') => Ok(Some(Action::OpenAddForm)),
            KeyCode::Char('e') | KeyCode::Enter => {
                Ok(self.selected_id().map(Action::OpenEditForm))
            }
            KeyCode::Char('d') => Ok(self.selected_id().map(Action::RequestRemove)),
            KeyCode::Char('o') => Ok(self.selected_id().map(Action::OpenLink)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::RosterUpdated { clients, stats } = action {
            self.clients.clone_from(clients);
            self.stats = stats.clone();
            if !self.clients.is_empty() && self.selected_index() >= self.clients.len() {
                self.select(self.clients.len() - 1);
            }
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([
            Constraint::Length(7), // stat cards
            Constraint::Min(1),    // client table
        ])
        .split(area);

        self.render_cards(frame, layout[0]);
        self.render_table(frame, layout[1]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &'static str {
        "Dashboard"
    }
}
