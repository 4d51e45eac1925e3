//! App header bar component
//!
//! Displays the application title, the API endpoint and the load state.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// API base URL the dashboard talks to
    pub endpoint: Option<String>,

    /// Number of loaded tickets
    pub ticket_count: Option<usize>,

    /// A reload is in flight
    pub loading: bool,
}

/// App header bar showing title, endpoint and ticket count
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let title = match props.endpoint.as_deref() {
        Some(endpoint) => format!("Support Dashboard - {}", endpoint),
        None => "Support Dashboard".to_string(),
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: title,
                color: theme.text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, gap: 1) {
                #(props.loading.then(|| element! {
                    Text(content: "Loading...", color: Color::Yellow)
                }))
                #(props.ticket_count.map(|count| element! {
                    Text(
                        content: format!("{} tickets", count),
                        color: theme.text,
                    )
                }))
            }
        }
    }
}
