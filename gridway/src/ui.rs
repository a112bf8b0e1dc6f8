//! Crossterm front-end: renders the board and turns input into session
//! intents.
//!
//! Each cell is two terminal columns wide. Left click (or drag) paints,
//! right click erases, and everything else is a key binding. Positions are
//! translated from terminal columns to board cells here; the session only
//! ever sees cell positions.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind},
    execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use gridway_core::{CellState, Point};

use crate::session::{Session, SessionError};

/// Board dimensions for the interactive app.
pub const BOARD_WIDTH: i32 = 30;
pub const BOARD_HEIGHT: i32 = 20;

/// Terminal columns per board cell; mouse columns divide by this.
pub const CELL_WIDTH: i32 = 2;

const HELP: &str =
    "left click paint / right click erase | [s]tart [e]nd [r]un [c]lear [d]iagonal [x] reset [q]uit";

/// Background color for each cell state: white floor, black walls, red
/// start, green end, light blue path.
fn cell_color(state: CellState) -> Color {
    match state {
        CellState::Empty => Color::White,
        CellState::Blocked => Color::Black,
        CellState::Start => Color::Red,
        CellState::End => Color::Green,
        CellState::Path => Color::Cyan,
    }
}

/// Run the interactive loop until the user quits.
pub fn run(session: Session) -> Result<(), Box<dyn std::error::Error>> {
    let mut ui = Ui::new(session);
    ui.init()?;
    let result = ui.event_loop();
    ui.close();
    result
}

struct Ui {
    session: Session,
    message: String,
    dirty: bool,
}

impl Ui {
    fn new(session: Session) -> Self {
        Self {
            session,
            message: String::new(),
            dirty: false,
        }
    }

    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, event::DisableMouseCapture);
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }

    fn event_loop(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.draw()?;
        loop {
            if !event::poll(Duration::from_millis(16))? {
                continue;
            }
            match event::read()? {
                Event::Key(KeyEvent { code, .. }) => {
                    if !self.handle_key(code) {
                        return Ok(());
                    }
                }
                Event::Mouse(me) => self.handle_mouse(me),
                Event::Resize(..) => self.dirty = true,
                _ => {}
            }
            if self.dirty {
                self.draw()?;
                self.dirty = false;
            }
        }
    }

    /// Returns false when the user asked to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('s') => {
                let outcome = self.session.place_start_mode();
                self.report(outcome, "placing start");
            }
            KeyCode::Char('e') => {
                let outcome = self.session.place_end_mode();
                self.report(outcome, "placing end");
            }
            KeyCode::Char('r') | KeyCode::Enter => self.run_search(),
            KeyCode::Char('c') => {
                self.session.clear_path();
                self.set_message("path cleared");
            }
            KeyCode::Char('d') => {
                let on = self.session.toggle_diagonal();
                self.set_message(if on {
                    "diagonal movement on"
                } else {
                    "diagonal movement off"
                });
            }
            KeyCode::Char('x') => {
                self.session.reset();
                self.set_message("board reset");
            }
            _ => {}
        }
        true
    }

    fn handle_mouse(&mut self, me: MouseEvent) {
        let p = Point::new(i32::from(me.column) / CELL_WIDTH, i32::from(me.row));
        match me.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                // A rejected paint is silent but may still have cleared a
                // drawn path, so redraw either way.
                let _ = self.session.primary_action(p);
                self.dirty = true;
            }
            MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
                let _ = self.session.secondary_action(p);
                self.dirty = true;
            }
            _ => {}
        }
    }

    fn run_search(&mut self) {
        match self.session.run() {
            Ok(path) => {
                let steps = path.len().saturating_sub(1);
                self.set_message(&format!("path found ({steps} steps)"));
            }
            Err(err) => self.set_message(&err.to_string()),
        }
    }

    fn report(&mut self, outcome: Result<(), SessionError>, ok: &str) {
        match outcome {
            Ok(()) => self.set_message(ok),
            Err(err) => self.set_message(&err.to_string()),
        }
    }

    fn set_message(&mut self, msg: &str) {
        self.message.clear();
        self.message.push_str(msg);
        self.dirty = true;
    }

    fn draw(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout();
        execute!(stdout, terminal::Clear(ClearType::All))?;

        for (p, cell) in self.session.board().iter() {
            execute!(
                stdout,
                cursor::MoveTo((p.x * CELL_WIDTH) as u16, p.y as u16),
                SetBackgroundColor(cell_color(cell)),
                Print("  ")
            )?;
        }

        let (mode, mode_color) = if self.session.is_placing_start() {
            ("placing start", Color::Red)
        } else if self.session.is_placing_end() {
            ("placing end", Color::Green)
        } else {
            ("painting walls", Color::Reset)
        };
        let diagonal = if self.session.is_diagonal_enabled() {
            "diagonal on"
        } else {
            "diagonal off"
        };

        let status_row = BOARD_HEIGHT as u16;
        execute!(
            stdout,
            ResetColor,
            cursor::MoveTo(0, status_row),
            SetForegroundColor(mode_color),
            Print(mode),
            ResetColor,
            Print(format!(" | {diagonal}")),
            cursor::MoveTo(0, status_row + 1),
            Print(&self.message),
            cursor::MoveTo(0, status_row + 2),
            SetForegroundColor(Color::DarkGrey),
            Print(HELP),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
