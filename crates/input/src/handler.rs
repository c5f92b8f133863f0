//! Pointer and focus tracking for terminal environments.
//!
//! Turns mouse button events and keyboard commands into engine
//! [`InputEvent`]s. The terminal has no hover, so a drag is the left button
//! held while moving; a pointer that moves past the grid and its wrap margin
//! leaves the grid. The keyboard offers the same drag through a focus
//! cursor: activate to press, move to extend, activate again to release.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::map::KeyCommand;
use crate::types::{GridLayout, InputEvent, InteractionMode, ShiftTarget};

#[derive(Debug, Clone)]
pub struct InputHandler {
    grid_size: usize,
    /// Focus cursor in virtual coordinates; wrapped onto the grid while idle.
    focus: (isize, isize),
    keyboard_drag: bool,
    mouse_drag: bool,
    /// Last cell reported to the engine during a mouse drag.
    last_cell: Option<(isize, isize)>,
}

impl InputHandler {
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size: grid_size.max(1),
            focus: (0, 0),
            keyboard_drag: false,
            mouse_drag: false,
            last_cell: None,
        }
    }

    /// Focused cell on the grid.
    pub fn focus(&self) -> (usize, usize) {
        let n = self.grid_size as isize;
        (
            self.focus.0.rem_euclid(n) as usize,
            self.focus.1.rem_euclid(n) as usize,
        )
    }

    pub fn is_dragging(&self) -> bool {
        self.keyboard_drag || self.mouse_drag
    }

    /// Forget any drag in progress (mode change, reset).
    pub fn cancel(&mut self) {
        self.keyboard_drag = false;
        self.mouse_drag = false;
        self.last_cell = None;
        self.normalize_focus();
    }

    fn normalize_focus(&mut self) {
        let (row, col) = self.focus();
        self.focus = (row as isize, col as isize);
    }

    /// Resolve a keyboard command against the focus cursor.
    ///
    /// `ToggleMode` and `Reset` are game-level commands and yield `None`.
    pub fn on_key(&mut self, command: KeyCommand, mode: InteractionMode) -> Option<InputEvent> {
        match command {
            KeyCommand::Focus { drow, dcol } => {
                self.focus = (self.focus.0 + drow, self.focus.1 + dcol);
                if self.keyboard_drag {
                    Some(InputEvent::PointerEnter {
                        row: self.focus.0,
                        col: self.focus.1,
                    })
                } else {
                    self.normalize_focus();
                    None
                }
            }
            KeyCommand::ShiftRow(direction) => Some(InputEvent::Shift {
                target: ShiftTarget::Row(self.focus().0),
                direction,
            }),
            KeyCommand::ShiftColumn(direction) => Some(InputEvent::Shift {
                target: ShiftTarget::Column(self.focus().1),
                direction,
            }),
            KeyCommand::Activate => {
                let (row, col) = self.focus();
                match mode {
                    InteractionMode::Click => Some(InputEvent::Click { row, col }),
                    InteractionMode::Drag if self.keyboard_drag => {
                        self.keyboard_drag = false;
                        self.normalize_focus();
                        Some(InputEvent::PointerUp)
                    }
                    InteractionMode::Drag => {
                        self.keyboard_drag = true;
                        Some(InputEvent::PointerDown { row, col })
                    }
                }
            }
            KeyCommand::Cancel => {
                if self.keyboard_drag {
                    self.cancel();
                    Some(InputEvent::PointerLeave)
                } else {
                    None
                }
            }
            KeyCommand::ToggleMode | KeyCommand::Reset => None,
        }
    }

    /// Map a mouse event through the current grid layout.
    pub fn on_mouse(
        &mut self,
        event: MouseEvent,
        layout: &GridLayout,
        mode: InteractionMode,
    ) -> Option<InputEvent> {
        let cell = layout.cell_at(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let (row, col) = cell.filter(|&(r, c)| layout.is_on_grid(r, c))?;
                self.focus = (row, col);
                let (row, col) = (row as usize, col as usize);
                match mode {
                    InteractionMode::Click => Some(InputEvent::Click { row, col }),
                    InteractionMode::Drag => {
                        self.keyboard_drag = false;
                        self.mouse_drag = true;
                        self.last_cell = Some((row as isize, col as isize));
                        Some(InputEvent::PointerDown { row, col })
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.mouse_drag => match cell {
                Some(cell) if Some(cell) == self.last_cell => None,
                Some((row, col)) => {
                    self.last_cell = Some((row, col));
                    Some(InputEvent::PointerEnter { row, col })
                }
                None => {
                    self.mouse_drag = false;
                    self.last_cell = None;
                    Some(InputEvent::PointerLeave)
                }
            },
            MouseEventKind::Up(MouseButton::Left) if self.mouse_drag => {
                self.mouse_drag = false;
                self.last_cell = None;
                Some(InputEvent::PointerUp)
            }
            _ => None,
        }
    }
}
