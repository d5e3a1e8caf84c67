//! Add/edit client form overlay.
//!
//! Two text inputs (name, DDNS link) plus an equipment selector cycling
//! the four known vendors. Submitting hands a `ClientDraft` back to the
//! app loop; the registry decides whether it is acceptable, and the
//! violation list renders inside the form until it is.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use ddnsly_core::{Client, ClientDraft, ClientId, Equipment, ValidationError};

use crate::action::Action;
use crate::theme;

/// Whether the form creates a new client or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(ClientId),
}

/// Which field currently has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FormField {
    #[default]
    Name,
    Link,
    Equipment,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            Self::Name => Self::Link,
            Self::Link => Self::Equipment,
            Self::Equipment => Self::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Name => Self::Equipment,
            Self::Link => Self::Name,
            Self::Equipment => Self::Link,
        }
    }
}

pub struct ClientForm {
    mode: FormMode,
    name: Input,
    link: Input,
    equipment: Option<Equipment>,
    field: FormField,
    errors: Vec<ValidationError>,
}

impl ClientForm {
    /// Blank form for a new client.
    pub fn add() -> Self {
        Self {
            mode: FormMode::Add,
            name: Input::default(),
            link: Input::default(),
            equipment: None,
            field: FormField::default(),
            errors: Vec::new(),
        }
    }

    /// Form pre-filled from an existing record.
    pub fn edit(client: &Client) -> Self {
        Self {
            mode: FormMode::Edit(client.id),
            name: Input::new(client.name.clone()),
            link: Input::new(client.ddns_link.clone()),
            equipment: Some(client.equipment),
            field: FormField::default(),
            errors: Vec::new(),
        }
    }

    /// Violations from the last rejected submit, shown until the next one.
    pub fn set_errors(&mut self, errors: Vec<ValidationError>) {
        self.errors = errors;
    }

    /// The candidate as currently entered.
    pub fn draft(&self) -> ClientDraft {
        ClientDraft::new(self.name.value(), self.link.value(), self.equipment)
    }

    fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => " Add Client ",
            FormMode::Edit(_) => " Edit Client ",
        }
    }

    fn submit_action(&self) -> Action {
        match self.mode {
            FormMode::Add => Action::SubmitAdd(self.draft()),
            FormMode::Edit(id) => Action::SubmitEdit(id, self.draft()),
        }
    }

    /// Handle a key while the form is open. The form captures all input.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::CloseForm),
            KeyCode::Enter => Some(self.submit_action()),
            KeyCode::Tab | KeyCode::Down => {
                self.field = self.field.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.field = self.field.prev();
                None
            }
            _ => {
                match self.field {
                    FormField::Name => {
                        self.name.handle_event(&CrosstermEvent::Key(key));
                    }
                    FormField::Link => {
                        self.link.handle_event(&CrosstermEvent::Key(key));
                    }
                    FormField::Equipment => match key.code {
                        KeyCode::Left | KeyCode::Char('h') => self.cycle_equipment(false),
                        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                            self.cycle_equipment(true);
                        }
                        _ => {}
                    },
                }
                None
            }
        }
    }

    /// Step the equipment selector through the fixed enumeration order.
    fn cycle_equipment(&mut self, forward: bool) {
        let len = Equipment::ALL.len();
        let idx = self
            .equipment
            .and_then(|e| Equipment::ALL.iter().position(|&x| x == e));
        let next = match (idx, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.equipment = Some(Equipment::ALL[next]);
    }

    // ── Rendering ─────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        #[allow(clippy::cast_possible_truncation)]
        let height = (11 + self.errors.len() as u16).min(area.height.saturating_sub(2));
        let width = 56u16.min(area.width.saturating_sub(4));
        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;
        let dialog_area = Rect::new(area.x + x, area.y + y, width, height);

        // Clear the background behind the dialog
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            dialog_area,
        );

        let block = Block::default()
            .title(self.title())
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        #[allow(clippy::cast_possible_truncation)]
        let layout = Layout::vertical([
            Constraint::Length(self.errors.len() as u16), // validation errors
            Constraint::Length(1),                        // spacer
            Constraint::Length(2),                        // name
            Constraint::Length(2),                        // link
            Constraint::Length(2),                        // equipment
            Constraint::Min(0),
            Constraint::Length(1), // hints
        ])
        .split(inner);

        // Validation errors, every one at once
        let error_lines: Vec<Line> = self
            .errors
            .iter()
            .map(|e| {
                Line::from(vec![
                    Span::styled("  ✗ ", Style::default().fg(theme::ERROR_RED)),
                    Span::styled(e.to_string(), Style::default().fg(theme::ERROR_RED)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(error_lines), layout[0]);

        self.render_input(frame, layout[2], "Name", &self.name, FormField::Name);
        self.render_input(frame, layout[3], "DDNS Link", &self.link, FormField::Link);
        self.render_equipment(frame, layout[4]);

        let hints = Line::from(vec![
            Span::styled("  Enter ", theme::key_hint_key()),
            Span::styled("save  ", theme::key_hint()),
            Span::styled("Tab ", theme::key_hint_key()),
            Span::styled("next field  ", theme::key_hint()),
            Span::styled("←/→ ", theme::key_hint_key()),
            Span::styled("equipment  ", theme::key_hint()),
            Span::styled("Esc ", theme::key_hint_key()),
            Span::styled("cancel", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[6]);
    }

    fn render_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &'static str,
        input: &Input,
        field: FormField,
    ) {
        let focused = self.field == field;
        let label_style = if focused {
            Style::default().fg(theme::NEON_CYAN)
        } else {
            Style::default().fg(theme::DIM_WHITE)
        };

        let mut spans = vec![
            Span::styled(format!("  {label:<11}"), label_style),
            Span::styled(input.value().to_owned(), Style::default().fg(theme::DIM_WHITE)),
        ];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(theme::NEON_CYAN)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_equipment(&self, frame: &mut Frame, area: Rect) {
        let focused = self.field == FormField::Equipment;
        let label_style = if focused {
            Style::default().fg(theme::NEON_CYAN)
        } else {
            Style::default().fg(theme::DIM_WHITE)
        };

        let (value, value_style) = match self.equipment {
            Some(equipment) => (
                format!("◂ {} ▸", equipment.label()),
                Style::default().fg(theme::equipment_color(equipment)),
            ),
            None => (
                "◂ select ▸".into(),
                Style::default().fg(theme::BORDER_GRAY),
            ),
        };

        let line = Line::from(vec![
            Span::styled("  Equipment  ", label_style),
            Span::styled(value, value_style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(form: &mut ClientForm, text: &str) {
        for c in text.chars() {
            form.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_fills_the_focused_field() {
        let mut form = ClientForm::add();
        type_str(&mut form, "Acme");
        form.handle_key_event(key(KeyCode::Tab));
        type_str(&mut form, "acme.ddns.net");

        let draft = form.draft();
        assert_eq!(draft.name, "Acme");
        assert_eq!(draft.ddns_link, "acme.ddns.net");
        assert_eq!(draft.equipment, None);
    }

    #[test]
    fn equipment_cycles_through_the_fixed_order() {
        let mut form = ClientForm::add();
        form.handle_key_event(key(KeyCode::Tab));
        form.handle_key_event(key(KeyCode::Tab)); // focus equipment

        form.handle_key_event(key(KeyCode::Right));
        assert_eq!(form.draft().equipment, Some(Equipment::Fortigate));
        form.handle_key_event(key(KeyCode::Right));
        assert_eq!(form.draft().equipment, Some(Equipment::Mikrotik));
        form.handle_key_event(key(KeyCode::Left));
        assert_eq!(form.draft().equipment, Some(Equipment::Fortigate));
        form.handle_key_event(key(KeyCode::Left));
        assert_eq!(form.draft().equipment, Some(Equipment::Unifi));
    }

    #[test]
    fn enter_submits_the_current_draft() {
        let mut form = ClientForm::add();
        type_str(&mut form, "Acme");
        let action = form.handle_key_event(key(KeyCode::Enter));
        match action {
            Some(Action::SubmitAdd(draft)) => assert_eq!(draft.name, "Acme"),
            other => panic!("expected SubmitAdd, got {other:?}"),
        }
    }

    #[test]
    fn edit_form_is_prefilled_and_submits_with_the_same_id() {
        let client = {
            let mut registry = ddnsly_core::ClientRegistry::new();
            registry
                .add(&ClientDraft::new(
                    "Acme",
                    "acme.ddns.net",
                    Some(Equipment::Unifi),
                ))
                .expect("valid draft")
                .clone()
        };

        let mut form = ClientForm::edit(&client);
        assert_eq!(form.draft().name, "Acme");
        assert_eq!(form.draft().equipment, Some(Equipment::Unifi));

        let action = form.handle_key_event(key(KeyCode::Enter));
        match action {
            Some(Action::SubmitEdit(id, draft)) => {
                assert_eq!(id, client.id);
                assert_eq!(draft.ddns_link, "acme.ddns.net");
            }
            other => panic!("expected SubmitEdit, got {other:?}"),
        }
    }

    #[test]
    fn escape_closes_the_form() {
        let mut form = ClientForm::add();
        assert!(matches!(
            form.handle_key_event(key(KeyCode::Esc)),
            Some(Action::CloseForm)
        ));
    }
}
