/// Quiet period before a free-text search is sent.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Generation-tagged pending value. Every `submit` supersedes the previous
/// ticket, so only the timer armed by the latest input can `fire`.
#[derive(Debug, Clone)]
pub struct DebounceGate<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> DebounceGate<T> {
    pub const fn new() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }

    pub fn submit(&mut self, value: T) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        self.generation
    }

    pub fn fire(&mut self, ticket: u64) -> Option<T> {
        if ticket != self.generation {
            return None;
        }
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }
}

impl<T> Default for DebounceGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Monotonic request counter: only the newest request may apply its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn begin(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }

    /// Drop interest in every outstanding request.
    pub fn invalidate(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}
