use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag for a self-rescheduling frame loop.
///
/// Clones observe the same flag, so a handle kept by the page can end a loop
/// whose closure owns another clone.
#[derive(Clone, Debug, Default)]
pub struct LoopToken {
    stopped: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

impl LoopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.set(true);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }

    /// Count one frame and report whether the loop may schedule another.
    #[inline]
    pub fn tick(&self) -> bool {
        if self.is_stopped() {
            return false;
        }
        self.frames.set(self.frames.get() + 1);
        true
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames.get()
    }
}

/// Seconds elapsed since the clock was created; drives the opacity pulse.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    start: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn elapsed_sec(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
