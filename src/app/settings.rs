use std::time::Duration;

/// Runtime knobs the coordinator needs, resolved from configuration at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub preview_limit: u32,
    /// Cycled by the preview limit key
    pub preview_limits: Vec<u32>,
    pub query_limit: u32,
    pub search_debounce: Duration,
}

impl Settings {
    pub const DEFAULT_PREVIEW_LIMIT: u32 = 10;
    pub const DEFAULT_QUERY_LIMIT: u32 = 100;
    pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

    /// Next limit after `current`, wrapping. A limit not in the list restarts the cycle.
    pub fn next_preview_limit(&self, current: u32) -> u32 {
        match self.preview_limits.iter().position(|&l| l == current) {
            Some(idx) => self.preview_limits[(idx + 1) % self.preview_limits.len()],
            None => self.preview_limits.first().copied().unwrap_or(current),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preview_limit: Self::DEFAULT_PREVIEW_LIMIT,
            preview_limits: vec![10, 25, 50, 100],
            query_limit: Self::DEFAULT_QUERY_LIMIT,
            search_debounce: Self::DEFAULT_SEARCH_DEBOUNCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10, 25)]
    #[case(50, 100)]
    #[case(100, 10)]
    #[case(7, 10)]
    fn next_preview_limit_cycles(#[case] current: u32, #[case] expected: u32) {
        assert_eq!(Settings::default().next_preview_limit(current), expected);
    }

    #[test]
    fn empty_cycle_keeps_current_limit() {
        let settings = Settings {
            preview_limits: vec![],
            ..Default::default()
        };
        assert_eq!(settings.next_preview_limit(42), 42);
    }
}
