//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.table.set_fg(Color::Grey);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for block in blocks(markdown) {
                match block {
                    Block::Header(line) => println!("\x1b[34m{line}\x1b[0m"),
                    Block::Line(line) => {
                        self.skin.print_inline(line);
                        println!();
                    }
                    // Tables only lay out when rendered as one text block.
                    Block::Table(rows) => self.skin.print_text(&rows.join("\n")),
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[derive(Debug, PartialEq)]
enum Block<'a> {
    Header(&'a str),
    Line(&'a str),
    Table(Vec<&'a str>),
}

/// Split markdown into headers, plain lines and runs of table rows.
fn blocks(markdown: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    for line in markdown.lines() {
        if line.starts_with('|') {
            if let Some(Block::Table(rows)) = blocks.last_mut() {
                rows.push(line);
                continue;
            }
            blocks.push(Block::Table(vec![line]));
        } else if line.starts_with('#') {
            blocks.push(Block::Header(line));
        } else {
            blocks.push(Block::Line(line));
        }
    }
    blocks
}
