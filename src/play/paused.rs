use crate::command::Command;
use crate::consts;
use crate::util::EnumExt;
use crossterm::event::Event;
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// A widget for displaying a pause menu pop-up
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Paused {
    /// The currently-selected item in the pause menu
    selection: PauseOpt,
}

impl Paused {
    /// The height that should be used for the `Rect` passed to
    /// `Paused::render()`
    #[allow(clippy::cast_possible_truncation)]
    pub(super) const HEIGHT: u16 = (PauseOpt::LENGTH as u16) + 2;

    /// The width that should be used for the `Rect` passed to
    /// `Paused::render()`
    pub(super) const WIDTH: u16 = 18;

    pub(super) fn new() -> Paused {
        Paused {
            selection: PauseOpt::min(),
        }
    }

    /// Handle an input event.  Returns `Some` if the user made a choice.
    pub(super) fn handle_event(&mut self, event: Event) -> Option<PauseOpt> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Esc => return Some(PauseOpt::Resume),
            Command::R => return Some(PauseOpt::Restart),
            Command::Q | Command::Quit => return Some(PauseOpt::Quit),
            Command::Enter => return Some(self.selection),
            Command::Up => {
                if let Some(opt) = self.selection.prev() {
                    self.selection = opt;
                }
            }
            Command::Down => {
                if let Some(opt) = self.selection.next() {
                    self.selection = opt;
                }
            }
            Command::Next => self.selection = self.selection.next().unwrap_or_else(PauseOpt::min),
            Command::Prev => self.selection = self.selection.prev().unwrap_or_else(PauseOpt::max),
            Command::Home => self.selection = PauseOpt::min(),
            Command::End => self.selection = PauseOpt::max(),
            _ => (),
        }
        None
    }
}

/// The choices in the pause menu
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(super) enum PauseOpt {
    /// Unpause/resume the game
    Resume,

    /// Abandon the round and start a new one
    Restart,

    /// Quit the application
    Quit,
}

impl PauseOpt {
    /// Render the option as a `Line` for display in the pause menu.  If
    /// `selected` is `true`, this option is the currently-selected one.
    fn to_line(self, selected: bool) -> Line<'static> {
        let mut line = Line::default();
        if selected {
            line.push_span("» ");
        } else {
            line.push_span("  ");
        }
        let (label, key) = match self {
            PauseOpt::Resume => ("Resume (", "Esc"),
            PauseOpt::Restart => ("Restart (", "r"),
            PauseOpt::Quit => ("Quit (", "q"),
        };
        line.push_span(label);
        line.push_span(Span::styled(key, consts::KEY_STYLE));
        line.push_span(")");
        if selected {
            line = line.style(consts::MENU_SELECTION_STYLE);
        }
        line
    }
}

impl Widget for Paused {
    /*
     * ┌──── PAUSED ────┐
     * │ » Resume (Esc) │
     * │   Restart (r)  │
     * │   Quit (q)     │
     * └────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" PAUSED ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        for (opt, row) in PauseOpt::iter().zip(inner.rows()) {
            opt.to_line(self.selection == opt).render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    fn press(paused: &mut Paused, code: KeyCode) -> Option<PauseOpt> {
        paused.handle_event(Event::Key(code.into()))
    }

    #[test]
    fn shortcuts() {
        let mut paused = Paused::new();
        assert_eq!(press(&mut paused, KeyCode::Esc), Some(PauseOpt::Resume));
        assert_eq!(press(&mut paused, KeyCode::Char('r')), Some(PauseOpt::Restart));
        assert_eq!(press(&mut paused, KeyCode::Char('q')), Some(PauseOpt::Quit));
        assert_eq!(press(&mut paused, KeyCode::Char('x')), None);
    }

    #[test]
    fn navigate_and_choose() {
        let mut paused = Paused::new();
        assert_eq!(press(&mut paused, KeyCode::Up), None);
        assert_eq!(paused.selection, PauseOpt::Resume);
        assert_eq!(press(&mut paused, KeyCode::Down), None);
        assert_eq!(press(&mut paused, KeyCode::Enter), Some(PauseOpt::Restart));
        assert_eq!(press(&mut paused, KeyCode::End), None);
        assert_eq!(paused.selection, PauseOpt::Quit);
        assert_eq!(press(&mut paused, KeyCode::Down), None);
        assert_eq!(paused.selection, PauseOpt::Quit);
        assert_eq!(press(&mut paused, KeyCode::Tab), None);
        assert_eq!(paused.selection, PauseOpt::Resume);
        assert_eq!(press(&mut paused, KeyCode::BackTab), None);
        assert_eq!(paused.selection, PauseOpt::Quit);
        assert_eq!(press(&mut paused, KeyCode::Home), None);
        assert_eq!(press(&mut paused, KeyCode::Enter), Some(PauseOpt::Resume));
    }

    #[test]
    fn render() {
        let area = Rect::new(0, 0, Paused::WIDTH, Paused::HEIGHT);
        let mut buffer = Buffer::empty(area);
        Paused::new().render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "┌──── PAUSED ────┐",
            "│ » Resume (Esc) │",
            "│   Restart (r)  │",
            "│   Quit (q)     │",
            "└────────────────┘",
        ]);
        expected.set_style(area, Style::reset());
        expected.set_style(Rect::new(2, 1, 14, 1), consts::MENU_SELECTION_STYLE);
        expected.set_style(Rect::new(12, 1, 3, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(13, 2, 1, 1), consts::KEY_STYLE);
        expected.set_style(Rect::new(10, 3, 1, 1), consts::KEY_STYLE);
        assert_eq!(buffer, expected);
    }
}
