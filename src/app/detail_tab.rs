#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Info,
    Schema,
    Preview,
    Query,
    Statistics,
}

impl DetailTab {
    pub fn next(self) -> Self {
        match self {
            Self::Info => Self::Schema,
            Self::Schema => Self::Preview,
            Self::Preview => Self::Query,
            Self::Query => Self::Statistics,
            Self::Statistics => Self::Info,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Info => Self::Statistics,
            Self::Schema => Self::Info,
            Self::Preview => Self::Schema,
            Self::Query => Self::Preview,
            Self::Statistics => Self::Query,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Schema => "Schema",
            Self::Preview => "Preview",
            Self::Query => "Query",
            Self::Statistics => "Statistics",
        }
    }

    pub fn from_digit(key: char) -> Option<Self> {
        match key {
            '1' => Some(Self::Info),
            '2' => Some(Self::Schema),
            '3' => Some(Self::Preview),
            '4' => Some(Self::Query),
            '5' => Some(Self::Statistics),
            _ => None,
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::Info,
            Self::Schema,
            Self::Preview,
            Self::Query,
            Self::Statistics,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn next_wraps_from_last_to_first() {
        assert_eq!(DetailTab::Statistics.next(), DetailTab::Info);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        assert_eq!(DetailTab::Info.prev(), DetailTab::Statistics);
    }

    #[test]
    fn next_visits_every_tab_once() {
        let mut tab = DetailTab::Info;
        let mut seen = vec![tab];
        for _ in 1..DetailTab::all().len() {
            tab = tab.next();
            seen.push(tab);
        }
        assert_eq!(seen, DetailTab::all());
    }

    #[rstest]
    #[case('1', Some(DetailTab::Info))]
    #[case('3', Some(DetailTab::Preview))]
    #[case('5', Some(DetailTab::Statistics))]
    #[case('6', None)]
    fn from_digit_maps_number_keys(#[case] key: char, #[case] expected: Option<DetailTab>) {
        assert_eq!(DetailTab::from_digit(key), expected);
    }
}
