//! Display-agnostic view tree produced by the projections in this module.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Secondary,
    Danger,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellView {
    Text(String),
    Strong(String),
    Code(String),
    /// Rendered as `null`, never as an empty string
    Null,
    /// First 100 characters of a longer value, rendered with a trailing `...`
    Truncated(String),
    Badge(Badge),
    /// Muted stand-in for a missing value
    Placeholder(String),
}

impl CellView {
    pub const NULL_MARKER: &'static str = "null";

    pub fn display_text(&self) -> String {
        match self {
            Self::Text(s) | Self::Strong(s) | Self::Code(s) | Self::Placeholder(s) => s.clone(),
            Self::Null => Self::NULL_MARKER.to_string(),
            Self::Truncated(s) => format!("{s}..."),
            Self::Badge(badge) => badge.label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowView {
    Cells(Vec<CellView>),
    /// `lead` in the first column, `message` across all remaining columns
    Spanning { lead: CellView, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: CellView,
}

impl Field {
    pub fn new(label: impl Into<String>, value: CellView) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub label: String,
    pub detail: Option<String>,
    /// Matches the current selection
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Heading(String),
    Text(String),
    Muted(String),
    Alert { tone: Tone, message: String },
    Loading(String),
    Fields(Vec<Field>),
    Table(TableView),
    /// Preformatted text shown verbatim
    Pre(String),
    List(Vec<ListEntry>),
    Input {
        label: String,
        value: String,
        focused: bool,
    },
    Button {
        label: String,
        enabled: bool,
    },
}

impl ViewNode {
    pub fn alert(tone: Tone, message: impl Into<String>) -> Self {
        Self::Alert {
            tone,
            message: message.into(),
        }
    }

    pub fn loading() -> Self {
        Self::Loading("Loading...".to_string())
    }
}

/// A titled region with an optional list cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub title: String,
    pub nodes: Vec<ViewNode>,
    pub cursor: Option<usize>,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub tabs: Vec<TabView>,
    pub body: Vec<ViewNode>,
    pub scroll: u16,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub label: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub title: String,
    pub status: StatusView,
    /// e.g. `Namespaces: 3 | Tables: 12`
    pub summary: Option<String>,
    pub endpoints: Vec<Field>,
    pub refreshing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub value: String,
    pub editing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub title: String,
    pub message: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub description: &'static str,
}

/// Everything one frame shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub header: HeaderView,
    pub namespaces: PanelView,
    pub tables: PanelView,
    pub search: SearchView,
    pub detail: DetailView,
    pub inline_error: Option<String>,
    pub toasts: Vec<ToastView>,
    pub footer: Vec<KeyHint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CellView::Null, "null")]
    #[case(CellView::Truncated("abc".into()), "abc...")]
    #[case(CellView::Badge(Badge { label: "Required".into(), tone: Tone::Success }), "Required")]
    #[case(CellView::Placeholder("No description".into()), "No description")]
    fn display_text_by_variant(#[case] cell: CellView, #[case] expected: &str) {
        assert_eq!(cell.display_text(), expected);
    }
}
