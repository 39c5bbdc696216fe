use std::time::Duration;

use blockfall_engine::{Game, GameState};
use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use crate::{
    tui::{App, Tui},
    view::widgets::GameDisplay,
};

#[derive(Debug)]
pub struct PlayApp {
    game: Game,
    tick_interval: Duration,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(game: Game, tick_interval: Duration) -> Self {
        Self {
            game,
            tick_interval,
            is_exiting: false,
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_interval(Some(self.tick_interval));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        if matches!(event, Event::FocusLost) {
            self.game.pause();
            return;
        }

        let is_running = self.game.state().is_running();
        let is_paused = self.game.state().is_paused();

        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Left if is_running => _ = self.game.move_left(),
                KeyCode::Right if is_running => _ = self.game.move_right(),
                KeyCode::Down if is_running => self.game.one_line_down(),
                KeyCode::Char('z') if is_running => _ = self.game.rotate_left(),
                KeyCode::Char('x') if is_running => _ = self.game.rotate_right(),
                KeyCode::Char(' ') | KeyCode::PageDown if is_running => self.game.hard_drop(),
                KeyCode::Char('p') | KeyCode::Enter if is_running => self.game.pause(),
                KeyCode::Char('p') | KeyCode::Enter if is_paused => self.game.resume(),
                KeyCode::Char('s' | 'c') => self.game.start(),
                KeyCode::Char('q') => self.is_exiting = true,
                _ => {}
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let game_display = GameDisplay::new(&self.game);
        let help_text = match self.game.state() {
            GameState::Running => {
                "Controls: ← → (Move) | ↓ (Soft Drop) | Space (Hard Drop) | Z X (Rotate) | P (Pause) | S (Restart) | Q (Quit)"
            }
            GameState::Paused => "Controls: P (Resume) | S (Restart) | Q (Quit)",
            GameState::GameOver => "Controls: S (Restart) | Q (Quit)",
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(24), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(game_display, main_area);
        frame.render_widget(help_text, help_area);
    }

    fn update(&mut self, _tui: &mut Tui) {
        if self.game.state().is_running() {
            self.game.tick();
        }
    }
}
