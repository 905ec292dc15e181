//! Paints a [`Screen`] onto a terminal.
//!
//! Styling goes through crossterm and can be switched off, in which case the
//! same layout is written as plain text.

use crate::types::DisplayMode;
use crate::view::{FormView, Row, RowBody, Screen};
use crossterm::queue;
use crossterm::style::{Attribute, Color, PrintStyledContent, Stylize};
use std::io::{self, Write};

/// Colours for one display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    text: Color,
    accent: Color,
    muted: Color,
    background: Option<Color>,
}

impl Palette {
    const fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => Self {
                text: Color::Black,
                accent: Color::DarkBlue,
                muted: Color::DarkGrey,
                background: None,
            },
            DisplayMode::Dark => Self {
                text: Color::White,
                accent: Color::Cyan,
                muted: Color::Grey,
                background: Some(Color::Black),
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Tone {
    Text,
    Accent,
    Muted,
}

/// Writes screens to an output, styled or plain
pub struct Painter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Painter<W> {
    /// Creates a painter; `color` toggles crossterm styling
    pub const fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// The underlying writer
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consumes the painter, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Paints a full screen and flushes
    ///
    /// # Errors
    ///
    /// Propagates write errors from the underlying output.
    pub fn paint(&mut self, screen: &Screen) -> io::Result<()> {
        let palette = Palette::for_mode(screen.display);

        self.span(&palette, Tone::Accent, false, &format!("=== {} ===", screen.heading))?;
        writeln!(self.out)?;

        let controls: Vec<String> = screen
            .controls
            .iter()
            .map(|control| format!("[{}]", control.label))
            .collect();
        self.span(&palette, Tone::Text, false, &controls.join(" "))?;
        writeln!(self.out)?;

        if let Some(form) = &screen.form {
            self.paint_form(&palette, form)?;
        }

        writeln!(self.out)?;
        if screen.rows.is_empty() {
            self.span(&palette, Tone::Muted, false, "(no notes)")?;
            writeln!(self.out)?;
        }
        for row in &screen.rows {
            self.paint_row(&palette, row)?;
        }

        self.out.flush()
    }

    fn paint_form(&mut self, palette: &Palette, form: &FormView) -> io::Result<()> {
        writeln!(self.out)?;
        self.span(palette, Tone::Accent, false, &format!("-- {} --", form.heading))?;
        writeln!(self.out)?;
        self.span(palette, Tone::Text, false, &format!("Title: {}", form.title))?;
        writeln!(self.out)?;
        self.span(
            palette,
            Tone::Text,
            false,
            &format!("Description: {}", form.description),
        )?;
        writeln!(self.out)?;
        self.span(palette, Tone::Muted, false, "[Submit] [Cancel]")?;
        writeln!(self.out)
    }

    fn paint_row(&mut self, palette: &Palette, row: &Row) -> io::Result<()> {
        match &row.body {
            RowBody::Editing { title, description } => {
                self.span(palette, Tone::Accent, false, &format!("{:>3}. [editing]", row.number))?;
                writeln!(self.out)?;
                self.span(palette, Tone::Text, false, &format!("     Title: {title}"))?;
                writeln!(self.out)?;
                self.span(
                    palette,
                    Tone::Text,
                    false,
                    &format!("     Description: {description}"),
                )?;
                writeln!(self.out)?;
                self.span(palette, Tone::Muted, false, "     [Save] [Cancel]")?;
                writeln!(self.out)
            },
            RowBody::ReadOnly {
                title,
                description,
                completed,
                completed_on,
            } => {
                let check = if *completed { "[x]" } else { "[ ]" };
                self.span(palette, Tone::Text, false, &format!("{:>3}. {check} ", row.number))?;
                self.span(palette, Tone::Text, *completed, title)?;
                writeln!(self.out)?;
                self.span(palette, Tone::Text, false, "     ")?;
                self.span(palette, Tone::Text, *completed, description)?;
                writeln!(self.out)?;
                if let Some(completed_on) = completed_on {
                    self.span(palette, Tone::Muted, false, &format!("     {completed_on}"))?;
                    writeln!(self.out)?;
                }
                self.span(palette, Tone::Muted, false, "     [Edit] [Delete]")?;
                writeln!(self.out)
            },
        }
    }

    fn span(&mut self, palette: &Palette, tone: Tone, struck: bool, text: &str) -> io::Result<()> {
        if !self.color {
            return write!(self.out, "{text}");
        }

        let color = match tone {
            Tone::Text => palette.text,
            Tone::Accent => palette.accent,
            Tone::Muted => palette.muted,
        };
        let mut content = text.with(color);
        if let Some(background) = palette.background {
            content = content.on(background);
        }
        if struck {
            content = content.attribute(Attribute::CrossedOut);
        }
        queue!(self.out, PrintStyledContent(content))
    }
}
