use super::focused_pane::FocusedPane;
use super::input_mode::InputMode;

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focused_pane: FocusedPane,
    pub input_mode: InputMode,
    /// Row 0 is the "All Namespaces" entry
    pub namespace_cursor: usize,
    pub table_cursor: usize,
    /// First visible line of the detail body
    pub detail_scroll: u16,
}

impl UiState {
    pub fn move_cursor(cursor: &mut usize, len: usize, delta: isize) {
        if len == 0 {
            *cursor = 0;
            return;
        }
        let max = len - 1;
        *cursor = cursor.saturating_add_signed(delta).min(max);
    }

    pub fn clamp_table_cursor(&mut self, len: usize) {
        self.table_cursor = self.table_cursor.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 3, 1, 1)]
    #[case(2, 3, 1, 2)]
    #[case(0, 3, -1, 0)]
    #[case(5, 0, 1, 0)]
    #[case(1, 3, isize::MAX, 2)]
    fn move_cursor_stays_in_bounds(
        #[case] start: usize,
        #[case] len: usize,
        #[case] delta: isize,
        #[case] expected: usize,
    ) {
        let mut cursor = start;
        UiState::move_cursor(&mut cursor, len, delta);
        assert_eq!(cursor, expected);
    }
}
