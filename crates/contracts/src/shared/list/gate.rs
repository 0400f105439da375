/// Busy-flag guarding the list fetch: at most one request in flight per
/// orchestrator instance. A trigger arriving while a fetch is outstanding is
/// dropped, not queued; the next trigger after the fetch settles sees the
/// latest state.
///
/// No request-generation tokens: whichever fetch completes last wins.
#[derive(Debug, Default)]
pub struct FetchGate {
    in_flight: bool,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the caller may start a fetch. Refuses while one
    /// is already running.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_refused_until_finish() {
        let mut gate = FetchGate::new();
        assert!(gate.try_begin());
        assert!(gate.is_in_flight());
        assert!(!gate.try_begin());
        assert!(!gate.try_begin());
        gate.finish();
        assert!(!gate.is_in_flight());
        assert!(gate.try_begin());
    }

    #[test]
    fn finish_without_begin_is_harmless() {
        let mut gate = FetchGate::new();
        gate.finish();
        assert!(gate.try_begin());
    }
}
