//! Diffing terminal output for a cell [`FrameBuffer`].
//!
//! Each draw compares the new frame with the one flushed before it and only
//! emits the changed runs. Frames of a walking view change a handful of
//! columns at a time, so the diff is usually a small fraction of a full
//! repaint.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Unchanged cells between two dirty runs that are cheaper to reprint than
/// to skip with a cursor move.
const RUN_MERGE_GAP: u16 = 3;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into any byte sink; `enter`/`exit` still drive the real tty.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Undo [`TerminalRenderer::enter`]. Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Next draw repaints everything (terminal resized or clobbered).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush `fb` and keep it as the diff baseline.
    ///
    /// The previous baseline is swapped back into `fb`, so the caller keeps
    /// reusing two allocations. Its contents are stale; clear before drawing.
    /// Returns the number of bytes written.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<usize> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        let written = self.buf.len();
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(written)
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Tracks the style last sent so runs of equal styles emit no escapes.
struct StyleState(Option<CellStyle>);

impl StyleState {
    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if self.0 == Some(style) {
            return Ok(());
        }
        out.queue(SetAttribute(Attribute::Reset))?
            .queue(SetForegroundColor(to_color(style.fg)))?
            .queue(SetBackgroundColor(to_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.0 = Some(style);
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn encode_run(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    style: &mut StyleState,
    out: &mut Vec<u8>,
) -> Result<()> {
    let Some(row) = fb.row(y) else {
        return Ok(());
    };
    let end = (x as usize + len as usize).min(row.len());
    for cell in &row[(x as usize).min(end)..end] {
        style.apply(out, cell.style)?;
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

/// Clear the screen and print every cell of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = StyleState(None);
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        encode_run(fb, 0, y, fb.width(), &mut style, out)?;
    }
    out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Print only the cells of `next` that differ from `prev` into `out`.
///
/// Both buffers must have the same size; a size change needs a full redraw.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = StyleState(None);
    let mut any = false;
    for_each_changed_run(prev, next, |x, y, len| {
        any = true;
        out.queue(cursor::MoveTo(x, y))?;
        encode_run(next, x, y, len, &mut style, out)
    })?;
    if any {
        out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Call `f(x, y, len)` for each run of differing cells, row by row.
///
/// Runs separated by at most [`RUN_MERGE_GAP`] equal cells are merged.
/// Mismatched sizes report every row as one run.
pub fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    for y in 0..next.height() {
        let (Some(a), Some(b)) = (prev.row(y), next.row(y)) else {
            continue;
        };
        let mut run: Option<(usize, usize)> = None;
        for (x, (pa, pb)) in a.iter().zip(b).enumerate() {
            if pa == pb {
                continue;
            }
            run = match run {
                Some((start, end)) if x - end <= RUN_MERGE_GAP as usize => Some((start, x + 1)),
                Some((start, end)) => {
                    f(start as u16, y, (end - start) as u16)?;
                    Some((x, x + 1))
                }
                None => Some((x, x + 1)),
            };
        }
        if let Some((start, end)) = run {
            f(start as u16, y, (end - start) as u16)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::{Cell, CellStyle};

    fn runs(a: &FrameBuffer, b: &FrameBuffer) -> Vec<(u16, u16, u16)> {
        let mut out = Vec::new();
        for_each_changed_run(a, b, |x, y, len| {
            out.push((x, y, len));
            Ok(())
        })
        .unwrap();
        out
    }

    fn mark(fb: &mut FrameBuffer, x: u16, y: u16) {
        fb.set(x, y, CellStyle::default().into_cell('#'));
    }

    #[test]
    fn adjacent_changes_form_one_run() {
        let a = FrameBuffer::new(6, 2);
        let mut b = a.clone();
        for x in 1..=3 {
            mark(&mut b, x, 1);
        }
        assert_eq!(runs(&a, &b), vec![(1, 1, 3)]);
    }

    #[test]
    fn short_gaps_merge_and_long_gaps_split() {
        let a = FrameBuffer::new(20, 1);
        let mut b = a.clone();
        mark(&mut b, 0, 0);
        mark(&mut b, 4, 0); // gap of 3
        mark(&mut b, 12, 0); // gap of 7
        assert_eq!(runs(&a, &b), vec![(0, 0, 5), (12, 0, 1)]);
    }

    #[test]
    fn size_mismatch_is_all_dirty() {
        let a = FrameBuffer::new(3, 1);
        let b = FrameBuffer::new(4, 2);
        assert_eq!(runs(&a, &b), vec![(0, 0, 4), (0, 1, 4)]);
    }

    #[test]
    fn identical_frames_encode_nothing() {
        let a = FrameBuffer::new(8, 4);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn draw_swap_diffs_after_first_frame() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(10, 3);
        fb.clear(Cell::default());
        let full = term.draw_swap(&mut fb).unwrap();
        assert!(full > 0);

        fb.clear(Cell::default());
        let unchanged = term.draw_swap(&mut fb).unwrap();
        assert_eq!(unchanged, 0);

        fb.clear(Cell::default());
        mark(&mut fb, 2, 2);
        let small = term.draw_swap(&mut fb).unwrap();
        assert!(small > 0 && small < full);
        assert_eq!(term.writer().len(), full + small);
    }
}
