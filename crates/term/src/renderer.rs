//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first flush repaints everything; later flushes diff against the
//! previous frame and only print changed runs. Queued bells are written in
//! the same flush.

use std::io::{self, Write};

use anyhow::Result;
use log::warn;

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    terminal, QueueableCommand,
};

use crate::fb::FrameBuffer;
use crate::types::Emphasis;

const BELL: char = '\x07';

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    active: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            active: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Terminal size as `(rows, columns)`.
    pub fn size(&self) -> Result<(u16, u16)> {
        let (columns, rows) = terminal::size()?;
        Ok((rows, columns))
    }

    /// Flush a framebuffer and any bells it has queued.
    ///
    /// The framebuffer is left untouched apart from draining its bells, so
    /// tasks keep drawing on top of the current picture.
    pub fn draw(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                let mut out = Vec::new();
                encode_diff_into(&prev, fb, &mut out)?;
                self.stdout.write_all(&out)?;
                prev.clone_from(fb);
                self.last = Some(prev);
            }
            _ => {
                let mut out = Vec::new();
                encode_full_into(fb, &mut out)?;
                self.stdout.write_all(&out)?;
                self.last = Some(fb.clone());
            }
        }

        for _ in 0..fb.take_bells() {
            self.stdout.queue(Print(BELL))?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Err(err) = self.exit() {
            warn!("failed to restore terminal: {err:#}");
        }
    }
}

/// Encode a full repaint of `fb`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut impl Write) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current: Option<Emphasis> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current != Some(cell.emphasis) {
                apply_emphasis(out, cell.emphasis)?;
                current = Some(cell.emphasis);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the cells of `next` that differ from `prev`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut impl Write) -> Result<()> {
    let mut current: Option<Emphasis> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        // Cursor move per run, then print cells in the run.
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current != Some(cell.emphasis) {
                apply_emphasis(out, cell.emphasis)?;
                current = Some(cell.emphasis);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    if current.is_some() {
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn apply_emphasis(out: &mut impl Write, emphasis: Emphasis) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match emphasis {
        Emphasis::Normal => {}
        Emphasis::Dim => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        Emphasis::Bold => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
    }
    Ok(())
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
