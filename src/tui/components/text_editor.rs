//! Multi-line draft editor component
//!
//! Wraps iocraft's TextInput in multiline mode. The text is owned by the
//! dashboard state; every edit is reported through `on_change` together with
//! the ticket it belongs to.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::TicketId;

/// Props for the TextEditor component
#[derive(Default, Props)]
pub struct TextEditorProps {
    /// Ticket the draft belongs to
    pub ticket_id: TicketId,

    /// Current text
    pub value: String,

    /// Whether the editor has focus
    pub has_focus: bool,

    /// Called with `(ticket id, full text)` after each edit
    pub on_change: Option<Handler<(TicketId, String)>>,
}

/// Multi-line text editor with full cursor support
#[component]
pub fn TextEditor(props: &TextEditorProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    // Handle for imperative cursor control
    let mut handle = hooks.use_ref_default::<TextInputHandle>();

    // Start with the cursor at the beginning; () runs once after first render
    hooks.use_effect(move || handle.write().set_cursor_offset(0), ());

    let on_change = props.on_change.clone();
    let ticket_id = props.ticket_id.clone();

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            overflow: Overflow::Hidden,
        ) {
            TextInput(
                has_focus: props.has_focus,
                value: props.value.clone(),
                on_change: move |new_value: String| {
                    if let Some(ref handler) = on_change {
                        handler((ticket_id.clone(), new_value));
                    }
                },
                multiline: true,
                cursor_color: Some(theme.highlight),
                color: Some(if props.has_focus { theme.text } else { theme.text_dimmed }),
                handle,
            )
        }
    }
}
