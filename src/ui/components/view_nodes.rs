//! Turns view-tree nodes into styled terminal lines.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::atoms::spinner_char;
use super::text_utils::{column_widths, fit_to_width};
use lakeview_app::view::{CellView, Field, ListEntry, RowView, TableView, Tone, ViewNode};
use crate::theme::Theme;

const COLUMN_GAP: &str = "  ";

/// Lines for a node sequence, plus the line index of the list entry at `cursor`.
pub fn node_lines(
    nodes: &[ViewNode],
    cursor: Option<usize>,
    time_ms: u128,
) -> (Vec<Line<'static>>, Option<usize>) {
    let mut lines = Vec::new();
    let mut cursor_line = None;

    for node in nodes {
        match node {
            ViewNode::List(entries) => {
                let start = lines.len();
                for (idx, entry) in entries.iter().enumerate() {
                    let selected = cursor == Some(idx);
                    if selected {
                        cursor_line = Some(start + idx);
                    }
                    lines.push(list_entry_line(entry, selected));
                }
            }
            other => lines.extend(single_node_lines(other, time_ms)),
        }
    }

    (lines, cursor_line)
}

fn single_node_lines(node: &ViewNode, time_ms: u128) -> Vec<Line<'static>> {
    match node {
        ViewNode::Heading(text) => vec![
            Line::from(Span::styled(
                text.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ],
        ViewNode::Text(text) => vec![Line::from(text.clone())],
        ViewNode::Muted(text) => vec![Line::from(Span::styled(
            text.clone(),
            Style::default()
                .fg(Theme::TEXT_MUTED)
                .add_modifier(Modifier::ITALIC),
        ))],
        ViewNode::Alert { tone, message } => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Theme::tone(*tone)),
        ))],
        ViewNode::Loading(label) => vec![Line::from(Span::styled(
            format!("{} {label}", spinner_char(time_ms)),
            Style::default().fg(Theme::tone(Tone::Info)),
        ))],
        ViewNode::Fields(fields) => fields.iter().map(field_line).collect(),
        ViewNode::Table(table) => table_lines(table),
        ViewNode::Pre(text) => text
            .lines()
            .map(|line| {
                Line::from(Span::styled(
                    line.to_string(),
                    Style::default().fg(Theme::TEXT_CODE),
                ))
            })
            .collect(),
        ViewNode::List(entries) => entries.iter().map(|e| list_entry_line(e, false)).collect(),
        ViewNode::Input {
            label,
            value,
            focused,
        } => {
            let mut spans = vec![
                Span::styled(format!("{label}: "), Style::default().fg(Theme::TEXT_ACCENT)),
                Span::raw(value.clone()),
            ];
            if *focused {
                spans.push(Span::styled(
                    "█",
                    Style::default().fg(Theme::FOCUS_BORDER),
                ));
            } else if value.is_empty() {
                spans.push(Span::styled(
                    "(press i to edit)",
                    Style::default().fg(Theme::TEXT_MUTED),
                ));
            }
            vec![Line::from(spans)]
        }
        ViewNode::Button { label, enabled } => {
            let style = if *enabled {
                Style::default()
                    .fg(Theme::TEXT_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::TEXT_MUTED)
            };
            vec![Line::from(Span::styled(format!("[ {label} ]"), style))]
        }
    }
}

fn list_entry_line(entry: &ListEntry, selected: bool) -> Line<'static> {
    let marker = if selected { "› " } else { "  " };
    let mut label_style = Style::default();
    if entry.active {
        label_style = label_style
            .fg(Theme::ACTIVE_ENTRY)
            .add_modifier(Modifier::BOLD);
    }

    let mut spans = vec![
        Span::raw(marker),
        Span::styled(entry.label.clone(), label_style),
    ];
    if let Some(detail) = &entry.detail {
        spans.push(Span::styled(
            format!(" ({detail})"),
            Style::default().fg(Theme::TEXT_MUTED),
        ));
    }

    let line = Line::from(spans);
    if selected {
        line.style(Style::default().bg(Theme::CURSOR_BG))
    } else {
        line
    }
}

fn field_line(field: &Field) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", field.label),
            Style::default().fg(Theme::TEXT_ACCENT),
        ),
        cell_span(&field.value, None),
    ])
}

pub fn cell_style(cell: &CellView) -> Style {
    match cell {
        CellView::Text(_) | CellView::Truncated(_) => Style::default(),
        CellView::Strong(_) => Style::default().add_modifier(Modifier::BOLD),
        CellView::Code(_) => Style::default().fg(Theme::TEXT_CODE),
        CellView::Null | CellView::Placeholder(_) => Style::default()
            .fg(Theme::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC),
        CellView::Badge(badge) => Style::default().fg(Theme::tone(badge.tone)),
    }
}

fn cell_span(cell: &CellView, width: Option<usize>) -> Span<'static> {
    let text = cell.display_text();
    let text = match width {
        Some(width) => fit_to_width(&text, width),
        None => text,
    };
    Span::styled(text, cell_style(cell))
}

fn table_lines(table: &TableView) -> Vec<Line<'static>> {
    let texts: Vec<Vec<String>> = table
        .rows
        .iter()
        .filter_map(|row| match row {
            RowView::Cells(cells) => Some(cells.iter().map(CellView::display_text).collect()),
            RowView::Spanning { lead, .. } => Some(vec![lead.display_text()]),
        })
        .collect();
    let widths = column_widths(&table.headers, &texts);

    let mut lines = Vec::with_capacity(table.rows.len() + 1);

    let header_spans: Vec<Span<'static>> = table
        .headers
        .iter()
        .zip(&widths)
        .enumerate()
        .flat_map(|(idx, (header, width))| {
            let gap = (idx > 0).then(|| Span::raw(COLUMN_GAP));
            gap.into_iter().chain(std::iter::once(Span::styled(
                fit_to_width(header, *width),
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .bg(Theme::TABLE_HEADER_BG),
            )))
        })
        .collect();
    lines.push(Line::from(header_spans));

    for row in &table.rows {
        match row {
            RowView::Cells(cells) => {
                let mut spans = Vec::with_capacity(cells.len() * 2);
                for (idx, (cell, width)) in cells.iter().zip(&widths).enumerate() {
                    if idx > 0 {
                        spans.push(Span::raw(COLUMN_GAP));
                    }
                    spans.push(cell_span(cell, Some(*width)));
                }
                lines.push(Line::from(spans));
            }
            RowView::Spanning { lead, message } => {
                let lead_width = widths.first().copied().unwrap_or(0);
                lines.push(Line::from(vec![
                    cell_span(lead, Some(lead_width)),
                    Span::raw(COLUMN_GAP),
                    Span::styled(
                        message.clone(),
                        Style::default().fg(Theme::tone(Tone::Danger)),
                    ),
                ]));
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn list_cursor_line_accounts_for_preceding_nodes() {
        let nodes = vec![
            ViewNode::Muted("hint".to_string()),
            ViewNode::List(vec![
                ListEntry {
                    label: "a".to_string(),
                    detail: None,
                    active: false,
                },
                ListEntry {
                    label: "b".to_string(),
                    detail: Some("3".to_string()),
                    active: true,
                },
            ]),
        ];

        let (lines, cursor_line) = node_lines(&nodes, Some(1), 0);

        assert_eq!(cursor_line, Some(2));
        assert_eq!(plain(&lines[2]), "› b (3)");
    }

    #[test]
    fn spanning_row_keeps_lead_and_message() {
        let table = TableView {
            headers: vec!["Column".to_string(), "Count".to_string()],
            rows: vec![
                RowView::Cells(vec![
                    CellView::Strong("name".to_string()),
                    CellView::Text("1,200".to_string()),
                ]),
                RowView::Spanning {
                    lead: CellView::Strong("age".to_string()),
                    message: "Error: unsupported type".to_string(),
                },
            ],
        };

        let lines = table_lines(&table);

        assert_eq!(plain(&lines[0]), "Column  Count");
        assert_eq!(plain(&lines[1]), "name    1,200");
        assert_eq!(plain(&lines[2]), "age     Error: unsupported type");
    }

    #[test]
    fn null_cells_render_marker() {
        let table = TableView {
            headers: vec!["v".to_string()],
            rows: vec![RowView::Cells(vec![CellView::Null])],
        };

        let lines = table_lines(&table);

        assert_eq!(plain(&lines[1]), "null");
    }

    #[test]
    fn loading_node_shows_spinner() {
        let (lines, _) = node_lines(&[ViewNode::loading()], None, 0);

        assert_eq!(plain(&lines[0]), "◐ Loading...");
    }
}
