#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPane {
    #[default]
    Namespaces,
    Tables,
    Detail,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            Self::Namespaces => Self::Tables,
            Self::Tables => Self::Detail,
            Self::Detail => Self::Namespaces,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Namespaces => Self::Detail,
            Self::Tables => Self::Namespaces,
            Self::Detail => Self::Tables,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_is_namespaces() {
        assert_eq!(FocusedPane::default(), FocusedPane::Namespaces);
    }

    #[rstest]
    #[case(FocusedPane::Namespaces, FocusedPane::Tables)]
    #[case(FocusedPane::Tables, FocusedPane::Detail)]
    #[case(FocusedPane::Detail, FocusedPane::Namespaces)]
    fn next_cycles_panes(#[case] from: FocusedPane, #[case] expected: FocusedPane) {
        assert_eq!(from.next(), expected);
        assert_eq!(expected.prev(), from);
    }
}
