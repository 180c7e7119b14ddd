/// Backend health as shown in the header.
///
/// - Checking → Connected (status call answered `connected: true`)
/// - Checking → Disconnected (answered `connected: false`, with the backend's reason)
/// - Checking → CheckFailed (the status call itself failed)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionIndicator {
    #[default]
    Checking,
    Connected,
    Disconnected(Option<String>),
    CheckFailed,
}

impl ConnectionIndicator {
    pub fn is_checking(&self) -> bool {
        matches!(self, Self::Checking)
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Checking => "Checking...",
            Self::Connected => "Connected",
            Self::Disconnected(_) => "Disconnected",
            Self::CheckFailed => "Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn default_is_checking() {
        assert!(ConnectionIndicator::default().is_checking());
    }

    #[rstest]
    #[case(ConnectionIndicator::Checking, "Checking...", false)]
    #[case(ConnectionIndicator::Connected, "Connected", true)]
    #[case(ConnectionIndicator::Disconnected(Some("no route".into())), "Disconnected", false)]
    #[case(ConnectionIndicator::CheckFailed, "Error", false)]
    fn label_and_predicate(
        #[case] indicator: ConnectionIndicator,
        #[case] label: &str,
        #[case] connected: bool,
    ) {
        assert_eq!(indicator.label(), label);
        assert_eq!(indicator.is_connected(), connected);
    }
}
