// Deferred state application
// Tick-driven replacements for frame callbacks: open/close debouncing and
// column scroll animation, both pure state machines

/// At-most-one pending open/close request, applied on the next tick.
///
/// A new request replaces the pending one rather than queueing behind it,
/// so rapid toggling settles on the last request. Cancelling drops the
/// pending request without applying it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameScheduler {
    pending: Option<bool>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        FrameScheduler::default()
    }

    /// Request the panel to be open or closed on the next tick.
    pub fn request(&mut self, open: bool) {
        self.pending = Some(open);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<bool> {
        self.pending
    }

    /// Take the pending state, if any. The caller applies it.
    pub fn tick(&mut self) -> Option<bool> {
        self.pending.take()
    }
}

/// Proportional scroll animation toward a target offset.
///
/// Each tick receives the offset actually observed since the last one and
/// returns the next offset to apply. If the observed offset moved *away*
/// from the target, something other than the animation scrolled the column
/// and the animation cancels itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnScroll {
    target: f32,
    last_distance: f32,
    active: bool,
}

const SCROLL_FACTOR: f32 = 0.3;
const SCROLL_MIN_STEP: f32 = 1.0;
const SCROLL_SNAP: f32 = 0.5;

impl ColumnScroll {
    pub fn start(from: f32, target: f32) -> Self {
        ColumnScroll {
            target,
            last_distance: (target - from).abs(),
            active: (target - from).abs() > SCROLL_SNAP,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Advance one tick. Returns the offset to apply next, `None` once the
    /// animation has finished or cancelled itself.
    pub fn tick(&mut self, observed: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        let remaining = self.target - observed;
        let distance = remaining.abs();
        // tolerance of one step covers rounding by the renderer
        if distance > self.last_distance + SCROLL_MIN_STEP {
            self.active = false;
            return None;
        }
        if distance <= SCROLL_SNAP {
            self.active = false;
            return Some(self.target);
        }
        let step = (distance * SCROLL_FACTOR).max(SCROLL_MIN_STEP).min(distance);
        self.last_distance = distance;
        Some(observed + step.copysign(remaining))
    }
}
