pub mod report;

pub use report::{
    format_complexity_report, format_line_report, format_todo_report, group_thousands,
    COMPLEXITY_ROW_LIMIT, NO_TODOS_MESSAGE, TODO_GROUP_LIMIT,
};

use anyhow::Result;
use std::io::Write;
use termimad::crossterm::style::Color as CrosstermColor;
use termimad::*;

/// Prints markdown reports to the terminal, styled or raw.
pub struct MarkdownRenderer {
    mad_skin: MadSkin,
    styled: bool,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MarkdownRenderer {
    pub fn new(styled: bool) -> Self {
        let mut mad_skin = MadSkin::default();

        mad_skin.set_headers_fg(CrosstermColor::Cyan);
        mad_skin.bold.set_fg(CrosstermColor::White);
        mad_skin.italic.set_fg(CrosstermColor::Yellow);
        mad_skin.bullet = StyledChar::from_fg_char(CrosstermColor::Green, '•');

        Self { mad_skin, styled }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = std::io::stdout();
        if self.styled {
            self.mad_skin.print_text(markdown);
        } else {
            writeln!(stdout, "{markdown}")?;
        }
        stdout.flush()?;
        Ok(())
    }
}
