//! Blocking event loop: read, handle, paint.
//!
//! One event is fully dispatched, reclamped and painted before the next is
//! read. A failed keystroke is logged and abandoned; only input or surface
//! failures end the loop with an error.

use anyhow::{Context, Result};
use core_actions::Session;
use core_events::{InputEvent, InputSource};
use core_render::{RenderSurface, paint_frame};
use tracing::{error, info, trace};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub events: u64,
    pub errors: u64,
}

pub fn run<I, S>(session: &mut Session, input: &mut I, surface: &mut S) -> Result<RunSummary>
where
    I: InputSource + ?Sized,
    S: RenderSurface + ?Sized,
{
    let mut summary = RunSummary::default();
    paint_frame(surface, &session.frame()).context("initial paint")?;
    loop {
        let event = input.next_event()?;
        summary.events += 1;
        if let InputEvent::Resize(cols, rows) = event {
            surface.resize(cols, rows);
        }
        match session.handle(&event) {
            Ok(result) if result.quit => {
                info!(target: "runtime", events = summary.events, "quit");
                return Ok(summary);
            }
            Ok(result) => {
                trace!(target: "runtime", dirty = result.dirty, "event_handled");
            }
            Err(e) => {
                summary.errors += 1;
                error!(target: "runtime", error = %e, "keystroke_failed");
            }
        }
        paint_frame(surface, &session.frame())?;
    }
}
