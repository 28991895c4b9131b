//! Application loop and screen routing.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{DefaultTerminal, Frame};
use tracing::{error, info};

use crate::state::AppState;
use crate::storage;

use super::action::Action;
use super::screens::{Sidebar, SidebarOutcome, View};
use super::widgets;

/// Upper bound on a poll when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Runs the TUI event loop until the user quits.
pub fn run(state: AppState) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, Runtime::new(state, Instant::now()));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, mut runtime: Runtime) -> io::Result<()> {
    while !runtime.quit {
        terminal.draw(|frame| runtime.render(frame))?;

        let now = Instant::now();
        let timeout = runtime
            .state
            .next_deadline()
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(now).min(IDLE_POLL));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    runtime.handle_key(key, Instant::now());
                }
            }
        }
        runtime.tick(Instant::now());
    }
    info!("quit");
    Ok(())
}

/// Current view plus the overlays drawn on top of it.
pub struct Runtime {
    state: AppState,
    view: View,
    sidebar: Option<Sidebar>,
    alert: Option<String>,
    /// Bumped whenever the view is replaced.
    generation: u64,
    quit: bool,
}

impl Runtime {
    /// Shows whatever screen `state` is on.
    pub fn new(state: AppState, now: Instant) -> Self {
        let view = View::build(&state);
        let mut runtime = Self {
            state,
            view,
            sidebar: None,
            alert: None,
            generation: 0,
            quit: false,
        };
        let actions = runtime.view.on_enter(&runtime.state);
        runtime.apply(actions, now);
        runtime
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'q'))
        {
            self.quit = true;
            return;
        }

        // Alerts swallow the key that dismisses them.
        if self.alert.take().is_some() {
            return;
        }

        if let Some(sidebar) = &mut self.sidebar {
            match sidebar.on_key(key) {
                SidebarOutcome::Stay(actions) => self.apply(actions, now),
                SidebarOutcome::Close(actions) => {
                    self.sidebar = None;
                    self.apply(actions, now);
                }
            }
            return;
        }

        let authenticated = self.state.prefs().is_authenticated();
        if authenticated {
            if key.code == KeyCode::F(9) {
                self.sidebar = Some(Sidebar::new());
                return;
            }
            if let KeyCode::F(n) = key.code {
                if self.state.screen().shows_bottom_nav() {
                    if let Some((screen, _)) = widgets::TABS.get(usize::from(n).wrapping_sub(1)) {
                        self.apply(vec![Action::navigate(*screen)], now);
                        return;
                    }
                }
            }
        }

        let actions = self.view.on_key(key, &self.state);
        self.apply(actions, now);
    }

    /// Fires due timers at the current view.
    pub fn tick(&mut self, now: Instant) {
        let generation = self.generation;
        for event in self.state.take_due_timers(now) {
            // Timers of a replaced view are stale.
            if self.generation != generation {
                break;
            }
            let actions = self.view.on_timer(event, &self.state);
            self.apply(actions, now);
        }
    }

    /// Applies actions in order, stopping at the first failed save so the
    /// view stays put for a retry.
    fn apply(&mut self, actions: Vec<Action>, now: Instant) {
        for action in actions {
            if let Err(e) = self.apply_one(action, now) {
                error!(error = %e, "could not save preferences");
                self.alert = Some(self.state.strings().save_failed.to_string());
                break;
            }
        }
    }

    fn apply_one(&mut self, action: Action, now: Instant) -> storage::Result<()> {
        match action {
            Action::Navigate { screen, payload } => {
                self.state.navigate(screen, payload);
                self.rebuild(now);
            }
            Action::SetLanguage(language) => self.state.set_language(language)?,
            Action::ToggleLanguage => self.state.toggle_language()?,
            Action::SetCurrency(currency) => self.state.set_currency(currency)?,
            Action::ToggleCurrency => self.state.toggle_currency()?,
            Action::SetUser(user) => self.state.sign_in(user)?,
            Action::BeginSignup(user) => self.state.begin_signup(user),
            Action::CompleteSignup => {
                self.state.complete_signup()?;
            }
            Action::SignOut => {
                self.state.sign_out()?;
                self.rebuild(now);
            }
            Action::Schedule { delay, event } => self.state.schedule(now, delay, event),
            Action::CancelTimer(event) => self.state.cancel_timer(event),
            Action::Alert(message) => self.alert = Some(message),
        }
        Ok(())
    }

    /// Replaces the view after a screen change.
    fn rebuild(&mut self, now: Instant) {
        self.view = View::build(&self.state);
        self.generation += 1;
        let actions = self.view.on_enter(&self.state);
        self.apply(actions, now);
    }

    fn render(&self, frame: &mut Frame) {
        let s = self.state.strings();
        let area = frame.area();
        let show_nav =
            self.state.prefs().is_authenticated() && self.state.screen().shows_bottom_nav();

        if show_nav {
            let [body, nav] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(area);
            self.view.render(frame, body, &self.state);
            widgets::bottom_nav(frame, nav, self.state.screen(), s);
        } else {
            self.view.render(frame, area, &self.state);
        }

        if let Some(sidebar) = &self.sidebar {
            sidebar.render(frame, area, &self.state);
        }
        if let Some(message) = &self.alert {
            widgets::alert(frame, message, s);
        }
    }
}
