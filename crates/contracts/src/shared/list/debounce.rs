use std::collections::BTreeSet;

/// What to do with one keystroke's worth of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceDecision {
    /// Apply right now, skipping the timer.
    Immediate,
    /// Apply after the debounce delay.
    Deferred,
    /// Drop the keystroke entirely (below the minimum search length).
    Suppress,
}

impl DebounceDecision {
    /// Whether this decision must disarm an already armed timer. Only a
    /// deferral keeps one: a suppressed keystroke that left an earlier,
    /// longer term pending would otherwise apply text the input no longer
    /// shows.
    pub fn disarms_timer(&self) -> bool {
        !matches!(self, DebounceDecision::Deferred)
    }
}

/// Pure debounce policy shared by the search box and the filter inputs.
///
/// Rules:
/// - clearing the input to empty always flushes immediately, so an emptied
///   search restores the full list without waiting;
/// - a designated numeric-identifier key (e.g. a phone filter) bypasses the
///   timer and applies on every keystroke, after non-digits are stripped;
/// - otherwise terms shorter than `min_length` are suppressed and the rest
///   are deferred by the timer.
#[derive(Debug, Clone, Default)]
pub struct DebouncePolicy {
    pub min_length: usize,
    bypass_keys: BTreeSet<String>,
}

pub const DEFAULT_MIN_SEARCH_LENGTH: usize = 3;
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

impl DebouncePolicy {
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            bypass_keys: BTreeSet::new(),
        }
    }

    pub fn with_bypass_key(mut self, key: &str) -> Self {
        self.bypass_keys.insert(key.to_string());
        self
    }

    pub fn is_bypass_key(&self, key: Option<&str>) -> bool {
        key.map(|k| self.bypass_keys.contains(k)).unwrap_or(false)
    }

    /// Decide how to dispatch `value` typed into the input identified by
    /// `key` (`None` for the module-wide search box).
    pub fn decide(&self, key: Option<&str>, value: &str) -> DebounceDecision {
        if self.is_bypass_key(key) {
            return DebounceDecision::Immediate;
        }
        if value.is_empty() {
            return DebounceDecision::Immediate;
        }
        if value.chars().count() < self.min_length {
            return DebounceDecision::Suppress;
        }
        DebounceDecision::Deferred
    }

    /// Canonical form of the value that gets applied: bypass keys keep only
    /// their digits, everything else passes through untouched.
    pub fn normalize(&self, key: Option<&str>, value: &str) -> String {
        if self.is_bypass_key(key) {
            value.chars().filter(|c| c.is_ascii_digit()).collect()
        } else {
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> DebouncePolicy {
        DebouncePolicy::new(DEFAULT_MIN_SEARCH_LENGTH).with_bypass_key("phone")
    }

    #[test]
    fn cleared_input_flushes_immediately() {
        assert_eq!(policy().decide(None, ""), DebounceDecision::Immediate);
        assert_eq!(policy().decide(Some("status"), ""), DebounceDecision::Immediate);
    }

    #[test]
    fn short_terms_are_suppressed() {
        let p = policy();
        assert_eq!(p.decide(None, "a"), DebounceDecision::Suppress);
        assert_eq!(p.decide(None, "ab"), DebounceDecision::Suppress);
        assert_eq!(p.decide(None, "abc"), DebounceDecision::Deferred);
    }

    #[test]
    fn numeric_key_bypasses_the_timer() {
        let p = policy();
        assert_eq!(p.decide(Some("phone"), "5"), DebounceDecision::Immediate);
        assert_eq!(p.decide(Some("phone"), ""), DebounceDecision::Immediate);
        // Non-bypass filter keys follow the search rules.
        assert_eq!(p.decide(Some("status"), "ac"), DebounceDecision::Suppress);
    }

    #[test]
    fn bypass_values_keep_digits_only() {
        let p = policy();
        assert_eq!(p.normalize(Some("phone"), "(555) 01-23"), "5550123");
        assert_eq!(p.normalize(Some("status"), "(a)"), "(a)");
        assert_eq!(p.normalize(None, "abc"), "abc");
    }

    #[test]
    fn suppressed_keystroke_disarms_a_pending_timer() {
        let p = policy();
        // "abc" arms the timer; backspacing to "ab" must drop it so the
        // stale longer term never applies.
        assert_eq!(p.decide(None, "abc"), DebounceDecision::Deferred);
        assert_eq!(p.decide(None, "ab"), DebounceDecision::Suppress);
        assert!(DebounceDecision::Suppress.disarms_timer());
        assert!(DebounceDecision::Immediate.disarms_timer());
        assert!(!DebounceDecision::Deferred.disarms_timer());
    }

    #[test]
    fn length_is_counted_in_characters() {
        assert_eq!(policy().decide(None, "ab\u{e9}"), DebounceDecision::Deferred);
    }
}
