//! Repaint governor.
//!
//! egui repaints whenever asked; an idle app should not be asked. The
//! controller brackets `update()`: [`begin_frame`] classifies why the frame
//! is running, [`end_frame`] schedules a follow-up paint only if the app
//! marked its state dirty during the frame. With no input and nothing
//! dirty, egui sleeps until the next event.
//!
//! There is no timed/continuous mode here: the apps this serves are fully
//! input-driven.
//!
//! [`begin_frame`]: RepaintController::begin_frame
//! [`end_frame`]: RepaintController::end_frame

/// Why the current frame is being painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepaintReason {
    /// First frame.
    Init,
    /// User input (pointer, key, scroll).
    Input,
    /// The app marked state dirty outside an input event.
    StateChange,
}

/// Controls when the egui context requests repaints.
pub struct RepaintController {
    needs_repaint: bool,
    frame: u64,
    reason: RepaintReason,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            needs_repaint: false,
            frame: 0,
            reason: RepaintReason::Init,
        }
    }

    /// Request one repaint at the next opportunity.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Why the current frame is being painted (valid after `begin_frame`).
    pub fn reason(&self) -> RepaintReason {
        self.reason
    }

    /// Current frame counter.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Call at the start of your `update()` method.
    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        let had_input = ctx.input(|i| {
            !i.events.is_empty()
                || i.pointer.any_pressed()
                || i.pointer.any_released()
                || i.pointer.is_moving()
        });

        self.reason = if self.frame == 0 {
            RepaintReason::Init
        } else if had_input {
            RepaintReason::Input
        } else {
            // No input, so the only thing that can have woken us is our
            // own request from the previous frame.
            RepaintReason::StateChange
        };

        self.needs_repaint = false;
    }

    /// Call at the end of your `update()` method.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        self.frame += 1;
        if self.needs_repaint {
            ctx.request_repaint();
        }
        // else: no scheduled repaint; egui sleeps until the next event.
    }
}
