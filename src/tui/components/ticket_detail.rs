//! Detail pane for the selected ticket
//!
//! Shows the ticket header, the AI-extracted fields, the sanitized body and
//! the editable draft reply.

use iocraft::prelude::*;

use crate::dashboard::model::DetailViewModel;
use crate::tui::theme::theme;
use crate::types::TicketId;

use super::text_editor::TextEditor;

/// Lines of the body shown above the draft editor
const BODY_LINES: usize = 12;

/// Props for the TicketDetail component
#[derive(Default, Props)]
pub struct TicketDetailProps {
    pub detail: Option<DetailViewModel>,
    /// The draft editor has focus
    pub editing: bool,
    /// Called with `(ticket id, full draft text)` after each edit
    pub on_draft_change: Option<Handler<(TicketId, String)>>,
}

#[component]
pub fn TicketDetail(props: &TicketDetailProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(detail) = props.detail.clone() else {
        return element! {
            View(
                width: 100pct,
                height: 100pct,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(content: "No ticket selected", color: theme.text_dimmed)
            }
        };
    };

    let border_color = if props.editing {
        theme.border_focused
    } else {
        theme.border
    };

    let body_lines: Vec<String> = detail.body.lines().take(BODY_LINES).map(str::to_string).collect();
    let body_truncated = detail.body.lines().count() > BODY_LINES;

    let fields = [
        ("Priority", detail.priority.to_string(), theme.priority_color(detail.priority)),
        ("Sentiment", detail.sentiment.to_string(), theme.sentiment_color(detail.sentiment)),
        ("Phone", detail.phone.clone(), theme.text),
        ("Alt email", detail.alt_email.clone(), theme.text),
        ("Needs", detail.requirements.clone(), theme.text),
    ];

    let draft_title = match (detail.draft_edited, detail.approved) {
        (true, _) => "Draft reply (edited)",
        (false, true) => "Draft reply (approved)",
        (false, false) => "Draft reply",
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
        ) {
            // Title block
            View(flex_direction: FlexDirection::Row, gap: 1, flex_shrink: 0.0) {
                Text(content: format!("#{}", detail.id), color: theme.id_color, weight: Weight::Bold)
                Text(
                    content: format!("[{}]", detail.status_label),
                    color: theme.status_color(detail.status),
                )
                Text(content: detail.subject.clone(), color: theme.text, weight: Weight::Bold)
            }
            View(flex_direction: FlexDirection::Row, gap: 1, flex_shrink: 0.0) {
                Text(content: format!("From: {}", detail.sender), color: theme.text_dimmed)
                #(detail.received.clone().map(|received| element! {
                    Text(content: format!("at {}", received), color: theme.text_dimmed)
                }))
            }

            // Extracted fields
            View(
                flex_direction: FlexDirection::Column,
                flex_shrink: 0.0,
                margin_top: 1,
            ) {
                #(fields.into_iter().map(|(label, value, color)| element! {
                    View(flex_direction: FlexDirection::Row, height: 1) {
                        View(width: 11, flex_shrink: 0.0) {
                            Text(content: format!("{}:", label), color: theme.text_dimmed)
                        }
                        View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                            Text(content: value, color: color)
                        }
                    }
                }))
            }

            // Body
            View(
                flex_direction: FlexDirection::Column,
                flex_shrink: 1.0,
                margin_top: 1,
                overflow: Overflow::Hidden,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: theme.border,
            ) {
                #(body_lines.into_iter().map(|line| element! {
                    Text(content: line, color: theme.text)
                }))
                #(body_truncated.then(|| element! {
                    Text(content: "...", color: theme.text_dimmed)
                }))
            }

            // Draft editor
            View(
                flex_direction: FlexDirection::Column,
                flex_grow: 1.0,
                min_height: 5,
                margin_top: 1,
                border_style: BorderStyle::Round,
                border_color: border_color,
                padding_left: 1,
            ) {
                Text(
                    content: draft_title,
                    color: if props.editing { theme.border_focused } else { theme.text_dimmed },
                )
                TextEditor(
                    ticket_id: detail.id.clone(),
                    value: detail.draft.clone(),
                    has_focus: props.editing,
                    on_change: props.on_draft_change.clone(),
                )
            }

            // Actions available for this ticket
            View(flex_direction: FlexDirection::Row, gap: 2, flex_shrink: 0.0) {
                Text(content: "[a] Save & Approve", color: theme.highlight)
                #(detail.can_resolve.then(|| element! {
                    Text(content: "[x] Mark Resolved", color: theme.status_resolved)
                }))
                Text(content: "[D] Regenerate draft", color: theme.text_dimmed)
            }
        }
    }
}
