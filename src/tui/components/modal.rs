//! Modal overlays: result notices and the key reference.

use iocraft::prelude::*;

use crate::dashboard::{Notice, NoticeLevel};
use crate::tui::theme::theme;

/// Backdrop behind every modal
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

/// Every key the dashboard understands, in help order
pub const KEY_REFERENCE: &[(&str, &str)] = &[
    ("j / Down", "Next ticket"),
    ("k / Up", "Previous ticket"),
    ("g / G", "First / last ticket"),
    ("PgUp / PgDn", "Page up / down"),
    ("1 2 3 4", "Filter: All / Urgent / Pending / Resolved"),
    ("f / Tab", "Cycle filter"),
    ("e / Enter", "Edit draft reply"),
    ("Esc", "Stop editing"),
    ("Ctrl+S", "Save & Approve while editing"),
    ("a", "Save & Approve"),
    ("x", "Mark Resolved"),
    ("D", "Regenerate draft"),
    ("r", "Refresh"),
    ("S", "Seed demo data"),
    ("F", "Fetch mailbox"),
    ("?", "Toggle this help"),
    ("q", "Quit"),
];

/// Props for the ModalOverlay component
#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    pub children: Vec<AnyElement<'a>>,
}

/// Full-screen positioning layer that centers its children over a backdrop
#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: MODAL_BACKDROP,
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}

fn notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Success => theme().success,
        NoticeLevel::Error => theme().error,
    }
}

/// Props for the NoticeModal component
#[derive(Default, Props)]
pub struct NoticeModalProps {
    pub notice: Option<Notice>,
}

/// Blocking result dialog, dismissed with Enter or Esc
#[component]
pub fn NoticeModal(props: &NoticeModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(notice) = props.notice.clone() else {
        return element!(View).into_any();
    };
    let color = notice_color(notice.level);

    element! {
        ModalOverlay {
            View(
                width: 60,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Double,
                border_color: color,
                background_color: MODAL_BACKDROP,
                padding: 1,
            ) {
                Text(content: notice.title, color: color, weight: Weight::Bold)
                View(margin_top: 1) {
                    Text(content: notice.message, color: theme.text)
                }
                View(margin_top: 1) {
                    Text(content: "Press Enter or Esc to dismiss", color: theme.text_dimmed)
                }
            }
        }
    }
    .into_any()
}

/// Key reference dialog
#[component]
pub fn HelpModal() -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        ModalOverlay {
            View(
                width: 60,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Double,
                border_color: theme.border_focused,
                background_color: MODAL_BACKDROP,
                padding_left: 1,
                padding_right: 1,
            ) {
                View(margin_bottom: 1) {
                    Text(content: "Keyboard Shortcuts", color: theme.text, weight: Weight::Bold)
                }
                #(KEY_REFERENCE.iter().map(|(key, action)| element! {
                    View(flex_direction: FlexDirection::Row, height: 1) {
                        View(width: 14, flex_shrink: 0.0) {
                            Text(content: *key, color: theme.highlight, weight: Weight::Bold)
                        }
                        Text(content: *action, color: theme.text)
                    }
                }))
                View(margin_top: 1) {
                    Text(content: "Press Esc or ? to close", color: theme.text_dimmed)
                }
            }
        }
    }
}
