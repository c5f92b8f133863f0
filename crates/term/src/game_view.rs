//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The grid is drawn with a dimmed wrap margin on every side showing the
//! letters a drag would reach by running off that edge. The returned
//! [`GridLayout`] is what the input layer uses to map mouse positions back
//! to cells, so the two always agree.

use crate::core::{GameSnapshot, OracleStatus};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GridLayout, InteractionMode, ResolutionEvent, WRAP_MARGIN};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Presentation-only state drawn alongside the snapshot.
#[derive(Debug, Clone, Default)]
pub struct HudView<'a> {
    /// Keyboard focus cursor.
    pub focus: Option<(usize, usize)>,
    /// Word currently being announced by cascade playback.
    pub announce: Option<&'a ResolutionEvent>,
    /// Recently resolved words, newest first.
    pub history: Vec<&'a ResolutionEvent>,
}

const PANEL_W: u16 = 26;

const BG: Rgb = Rgb::new(0, 0, 0);
const GRID_BG: Rgb = Rgb::new(30, 30, 40);
const LETTER: CellStyle = CellStyle::new(Rgb::new(235, 235, 235), GRID_BG).bold();
const MARGIN: CellStyle = CellStyle::new(Rgb::new(110, 110, 120), GRID_BG).dim();
const CANDIDATE: CellStyle = CellStyle::new(Rgb::new(240, 240, 240), Rgb::new(40, 90, 60)).bold();
const SELECTED: CellStyle = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(240, 200, 80)).bold();
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BG);
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BG);
const ACCENT: CellStyle = CellStyle::new(Rgb::new(240, 200, 80), BG).bold();

/// Terminal renderer for the letter grid.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    margin: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps cells roughly square and gives the mouse a usable target.
        Self {
            cell_w: 4,
            cell_h: 2,
            margin: WRAP_MARGIN,
        }
    }
}

impl GameView {
    /// Where a grid of `grid_size` lands in `viewport`.
    pub fn layout(&self, grid_size: usize, viewport: Viewport) -> GridLayout {
        let (frame_w, frame_h) = self.frame_size(grid_size);
        let total_w = frame_w + 2 + PANEL_W;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;
        GridLayout {
            origin_x: start_x + 1 + self.margin * self.cell_w,
            origin_y: start_y + 1 + self.margin * self.cell_h,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            size: grid_size as u16,
            margin: self.margin,
        }
    }

    fn frame_size(&self, grid_size: usize) -> (u16, u16) {
        let cells = grid_size as u16 + 2 * self.margin;
        (cells * self.cell_w + 2, cells * self.cell_h + 2)
    }

    /// Render into an existing framebuffer and return the grid layout used.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> GridLayout {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(VALUE.fg, BG).into_cell(' '));

        let size = snap.grid.size();
        let layout = self.layout(size, viewport);
        let (frame_w, frame_h) = self.frame_size(size);
        let start_x = layout.origin_x - 1 - self.margin * self.cell_w;
        let start_y = layout.origin_y - 1 - self.margin * self.cell_h;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        let m = self.margin as isize;
        let n = size as isize;
        for vr in -m..n + m {
            for vc in -m..n + m {
                let cell = snap.grid.cell_wrapped(vr, vc);
                let on_grid = (0..n).contains(&vr) && (0..n).contains(&vc);
                let selected = snap.is_selected(cell.row, cell.col);
                let style = match (on_grid, selected) {
                    (true, true) => SELECTED,
                    (true, false) if snap.is_highlighted(cell.row, cell.col) => CANDIDATE,
                    (true, false) => LETTER,
                    (false, true) => SELECTED.dim(),
                    (false, false) => MARGIN,
                };

                let px = (layout.origin_x as isize + vc * self.cell_w as isize) as u16;
                let py = (layout.origin_y as isize + vr * self.cell_h as isize) as u16;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                fb.put_char(
                    px + (self.cell_w - 1) / 2,
                    py + (self.cell_h - 1) / 2,
                    cell.letter.as_char(),
                    style,
                );

                if on_grid && hud.focus == Some((cell.row, cell.col)) && self.cell_w >= 3 {
                    let y = py + (self.cell_h - 1) / 2;
                    fb.put_char(px, y, '[', style);
                    fb.put_char(px + self.cell_w - 1, y, ']', style);
                }
            }
        }

        match &snap.oracle {
            OracleStatus::Ready => {}
            OracleStatus::Loading => {
                self.draw_footer(fb, start_x, start_y + frame_h, frame_w, "loading words...")
            }
            OracleStatus::Failed(_) => {
                self.draw_footer(fb, start_x, start_y + frame_h, frame_w, "no dictionary")
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, start_x + frame_w + 2, start_y);
        layout
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        fb.put_str(x + w.saturating_sub(text_w) / 2, y, text, ACCENT);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = start_y;
        for (label, value) in [
            ("SCORE", snap.score),
            ("COMBO", snap.combo),
            ("WORDS", snap.words_found),
        ] {
            let end = fb.put_str(panel_x, y, label, LABEL);
            fb.put_u32(end + 1, y, value, VALUE);
            y += 1;
        }

        y += 1;
        let end = fb.put_str(panel_x, y, "MODE", LABEL);
        fb.put_str(end + 1, y, snap.mode.as_str(), VALUE);
        y += 1;
        let end = fb.put_str(panel_x, y, "DICT", LABEL);
        let dict = match &snap.oracle {
            OracleStatus::Loading => "loading",
            OracleStatus::Ready => "ready",
            OracleStatus::Failed(_) => "failed",
        };
        fb.put_str(end + 1, y, dict, VALUE);
        y += 2;

        let word = snap.selection_word().to_uppercase();
        if !word.is_empty() {
            fb.put_str(panel_x, y, &word, ACCENT);
        }
        y += 1;

        if let Some(event) = hud.announce {
            let end = fb.put_str(panel_x, y, &format!("+{} ", event.points), ACCENT);
            let end = fb.put_str(end, y, &event.word.to_uppercase(), ACCENT);
            if event.cascade_depth > 0 {
                fb.put_str(end + 1, y, &format!("chain {}", event.cascade_depth), VALUE);
            }
        }
        y += 2;

        for event in hud.history.iter().take(6) {
            if y >= viewport.height {
                return;
            }
            let end = fb.put_str(panel_x, y, &event.word.to_uppercase(), VALUE.dim());
            fb.put_u32(end + 1, y, event.points, VALUE.dim());
            y += 1;
        }

        y += 1;
        let help: &[&str] = match snap.mode {
            InteractionMode::Drag => &["drag or enter to select", "arrows shift, m mode"],
            InteractionMode::Click => &["click word, click again", "arrows shift, m mode"],
        };
        for line in help.iter().chain(["r reset, q quit"].iter()) {
            if y >= viewport.height {
                return;
            }
            fb.put_str(panel_x, y, line, VALUE.dim());
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, GameConfig, GameState, SequenceLetters, StripStore};

    fn game() -> GameState<SequenceLetters> {
        let rows = [
            "CATQQQQQQQ",
            "QQQQQQQQQQ",
            "QQQQQQQQQQ",
            "QQQQQQQQQQ",
            "QQQQQQQQQZ",
        ];
        let strips = StripStore::from_rows(5, &rows).unwrap();
        GameState::with_parts(GameConfig::default(), strips, SequenceLetters::new("Q"))
    }

    fn style_at(fb: &FrameBuffer, layout: &GridLayout, row: isize, col: isize) -> (char, CellStyle) {
        let x = layout.origin_x as isize + col * layout.cell_w as isize + (layout.cell_w as isize - 1) / 2;
        let y = layout.origin_y as isize + row * layout.cell_h as isize + (layout.cell_h as isize - 1) / 2;
        let cell = fb.get(x as u16, y as u16).unwrap();
        (cell.ch, cell.style)
    }

    #[test]
    fn layout_round_trips_through_cell_at() {
        let view = GameView::default();
        let layout = view.layout(5, Viewport::new(100, 40));
        assert_eq!(layout.cell_at(layout.origin_x, layout.origin_y), Some((0, 0)));
        assert_eq!(
            layout.cell_at(layout.origin_x + 4 * 4 + 3, layout.origin_y + 4 * 2 + 1),
            Some((4, 4))
        );
    }

    #[test]
    fn layout_centers_frame_in_viewport() {
        let view = GameView::default();
        let (frame_w, frame_h) = view.frame_size(5);
        let layout = view.layout(5, Viewport::new(100, 40));
        let top = layout.origin_y - 1 - layout.margin * layout.cell_h;
        let left = layout.origin_x - 1 - layout.margin * layout.cell_w;
        assert_eq!(top, (40 - frame_h) / 2);
        assert_eq!(left, (100 - (frame_w + 2 + PANEL_W)) / 2);

        // A viewport shorter than the frame pins it to the top.
        let short = view.layout(5, Viewport::new(100, 4));
        assert_eq!(short.origin_y, 1 + short.margin * short.cell_h);
    }

    #[test]
    fn draws_letters_and_wrap_margin() {
        let view = GameView::default();
        let snap = game().snapshot();
        let mut fb = FrameBuffer::new(100, 40);
        let layout = view.render_into(&snap, &HudView::default(), Viewport::new(100, 40), &mut fb);

        assert_eq!(style_at(&fb, &layout, 0, 0).0, 'C');
        assert_eq!(style_at(&fb, &layout, 0, 2).0, 'T');
        // Left margin of row 0 previews the end of the row.
        let (ch, style) = style_at(&fb, &layout, 0, -1);
        assert_eq!(ch, 'Q');
        assert!(style.dim);
        // Above row 0 shows row 4.
        assert_eq!(style_at(&fb, &layout, -1, 0).0, 'Q');
        assert_eq!(style_at(&fb, &layout, 5, 1).0, 'A');
    }

    #[test]
    fn highlights_selection_and_candidates() {
        let view = GameView::default();
        let mut g = game().with_oracle(Dictionary::from_words(["cat"], 3, 5));
        let snap = g.snapshot();
        let mut fb = FrameBuffer::new(100, 40);
        let layout = view.render_into(&snap, &HudView::default(), Viewport::new(100, 40), &mut fb);
        assert_eq!(style_at(&fb, &layout, 0, 1).1, CANDIDATE);
        assert_eq!(style_at(&fb, &layout, 1, 1).1, LETTER);

        g.pointer_down(0, 0);
        g.pointer_enter(0, 1);
        let snap = g.snapshot();
        let layout = view.render_into(&snap, &HudView::default(), Viewport::new(100, 40), &mut fb);
        assert_eq!(style_at(&fb, &layout, 0, 1).1, SELECTED);
        assert_eq!(style_at(&fb, &layout, 0, 2).1, CANDIDATE);
    }

    #[test]
    fn panel_shows_score_mode_and_loading() {
        let view = GameView::default();
        let snap = game().snapshot();
        let fb = view.render(&snap, &HudView::default(), Viewport::new(100, 40));
        let text: String = (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect();
        assert!(text.contains("SCORE 0"));
        assert!(text.contains("MODE drag"));
        assert!(text.contains("DICT loading"));
        assert!(text.contains("loading words..."));
    }

    #[test]
    fn panel_announces_cascade_words() {
        let view = GameView::default();
        let snap = game().snapshot();
        let event = ResolutionEvent {
            word: "emu".into(),
            points: 20,
            cascade_depth: 2,
            cells: Vec::new(),
        };
        let hud = HudView {
            focus: Some((2, 2)),
            announce: Some(&event),
            history: vec![&event],
        };
        let fb = view.render(&snap, &hud, Viewport::new(100, 40));
        let text: String = (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect();
        assert!(text.contains("+20 EMU chain 2"));
        assert!(text.contains("[Q ]"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let snap = game().snapshot();
        let fb = view.render(&snap, &HudView::default(), Viewport::new(10, 5));
        assert_eq!(fb.width(), 10);
    }
}
