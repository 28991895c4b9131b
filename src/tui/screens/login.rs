//! Login and sign-up.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tracing::debug;

use crate::i18n::Strings;
use crate::model::{LoginForm, Nationality, Screen, SignupForm};
use crate::state::AppState;
use crate::tui::action::Action;
use crate::tui::input::TextField;
use crate::tui::widgets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    FullName,
    Phone,
    Nationality,
    IdNumber,
    Passport,
    Email,
    Password,
    Submit,
    SwitchMode,
}

pub struct LoginScreen {
    mode: Mode,
    focus: Field,
    full_name: TextField,
    phone: TextField,
    nationality: Option<Nationality>,
    id_number: TextField,
    passport: TextField,
    email: TextField,
    password: TextField,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            mode: Mode::Login,
            focus: Field::Email,
            full_name: TextField::new(),
            phone: TextField::new(),
            nationality: None,
            id_number: TextField::new(),
            passport: TextField::new(),
            email: TextField::new(),
            password: TextField::new().masked(),
        }
    }

    /// Fields in focus order for the current mode.
    fn fields(&self) -> Vec<Field> {
        match self.mode {
            Mode::Login => vec![Field::Email, Field::Password, Field::Submit, Field::SwitchMode],
            Mode::Signup => {
                let mut fields = vec![Field::FullName, Field::Phone, Field::Nationality];
                match self.nationality {
                    Some(Nationality::Djiboutian) => fields.push(Field::IdNumber),
                    Some(Nationality::Foreign) => fields.push(Field::Passport),
                    None => {}
                }
                fields.extend([Field::Email, Field::Password, Field::Submit, Field::SwitchMode]);
                fields
            }
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (index + 1).min(fields.len() - 1)
        } else {
            index.saturating_sub(1)
        };
        self.focus = fields[next];
    }

    fn text_field(&mut self, field: Field) -> Option<&mut TextField> {
        match field {
            Field::FullName => Some(&mut self.full_name),
            Field::Phone => Some(&mut self.phone),
            Field::IdNumber => Some(&mut self.id_number),
            Field::Passport => Some(&mut self.passport),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::Nationality | Field::Submit | Field::SwitchMode => None,
        }
    }

    fn cycle_nationality(&mut self, forward: bool) {
        self.nationality = match (self.nationality, forward) {
            (None, true) | (Some(Nationality::Foreign), false) => Some(Nationality::Djiboutian),
            (Some(Nationality::Djiboutian), true) | (None, false) => Some(Nationality::Foreign),
            (Some(Nationality::Djiboutian), false) | (Some(Nationality::Foreign), true) => None,
        };
    }

    fn switch_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Login => Mode::Signup,
            Mode::Signup => Mode::Login,
        };
        self.focus = self.fields()[0];
    }

    fn submit(&self, s: &Strings) -> Vec<Action> {
        match self.mode {
            Mode::Login => {
                let form = LoginForm {
                    email: self.email.value().to_string(),
                    password: self.password.value().to_string(),
                };
                match form.submit() {
                    Ok(user) => vec![Action::SetUser(user), Action::navigate(Screen::Home)],
                    Err(e) => {
                        debug!(error = %e, "login rejected");
                        vec![Action::alert(e.message(s))]
                    }
                }
            }
            Mode::Signup => {
                let form = SignupForm {
                    full_name: self.full_name.value().to_string(),
                    phone: self.phone.value().to_string(),
                    nationality: self.nationality,
                    id_number: self.id_number.value().to_string(),
                    passport_number: self.passport.value().to_string(),
                    email: self.email.value().to_string(),
                    password: self.password.value().to_string(),
                };
                match form.submit() {
                    Ok(user) => vec![Action::BeginSignup(user), Action::navigate(Screen::Otp)],
                    Err(e) => {
                        debug!(error = %e, "sign-up rejected");
                        vec![Action::alert(e.message(s))]
                    }
                }
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('l') {
            return vec![Action::ToggleLanguage];
        }
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            KeyCode::Left if self.focus == Field::Nationality => self.cycle_nationality(false),
            KeyCode::Right if self.focus == Field::Nationality => self.cycle_nationality(true),
            KeyCode::Enter => match self.focus {
                Field::Submit => return self.submit(state.strings()),
                Field::SwitchMode => self.switch_mode(),
                _ => self.move_focus(true),
            },
            _ => {
                if let Some(field) = self.text_field(self.focus) {
                    field.handle_key(key);
                }
            }
        }
        Vec::new()
    }

    fn nationality_label(&self, s: &Strings) -> &'static str {
        match self.nationality {
            None => s.choose_nationality,
            Some(Nationality::Djiboutian) => s.djiboutian,
            Some(Nationality::Foreign) => s.foreigner,
        }
    }

    fn field_row(&self, field: Field, s: &Strings) -> Line<'static> {
        let focused = self.focus == field;
        match field {
            Field::FullName => widgets::field_line(s.full_name, &self.full_name.display(), focused),
            Field::Phone => widgets::field_line(s.phone, &self.phone.display(), focused),
            Field::Nationality => widgets::field_line(
                s.nationality,
                &format!("‹ {} ›", self.nationality_label(s)),
                focused,
            ),
            Field::IdNumber => widgets::field_line(s.id_number, &self.id_number.display(), focused),
            Field::Passport => {
                widgets::field_line(s.passport_number, &self.passport.display(), focused)
            }
            Field::Email => widgets::field_line(s.email, &self.email.display(), focused),
            Field::Password => widgets::field_line(s.password, &self.password.display(), focused),
            Field::Submit => {
                let label = match self.mode {
                    Mode::Login => s.sign_in,
                    Mode::Signup => s.create_account,
                };
                widgets::button_line(label, focused)
            }
            Field::SwitchMode => {
                let label = match self.mode {
                    Mode::Login => s.no_account_sign_up,
                    Mode::Signup => s.have_account_sign_in,
                };
                widgets::button_line(label, focused)
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let s = state.strings();
        let chunks = widgets::frame3(area);
        let heading = match self.mode {
            Mode::Login => s.login_title,
            Mode::Signup => s.signup_title,
        };
        widgets::title(frame, chunks.title, heading, Some(s.brand_name));

        let mut lines = Vec::new();
        for field in self.fields() {
            if matches!(field, Field::Submit) {
                lines.push(Line::default());
            }
            lines.push(self.field_row(field, s));
        }
        frame.render_widget(Paragraph::new(lines).block(widgets::padded()), chunks.body);

        widgets::help(
            frame,
            chunks.help,
            &format!("↑↓ {}  ←→ {}  ⏎ {}  ^L {}", s.move_hint, s.change_hint, s.confirm_hint, s.language_toggle_hint),
        );
    }
}
