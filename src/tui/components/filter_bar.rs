//! Filter tabs above the ticket list

use iocraft::prelude::*;

use crate::dashboard::FilterMode;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct FilterBarProps {
    pub active: FilterMode,
    /// Every mode with the number of tickets it matches
    pub counts: Vec<(FilterMode, usize)>,
}

#[component]
pub fn FilterBar(props: &FilterBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let active = props.active;

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            column_gap: 2,
            padding_left: 1,
        ) {
            #(props.counts.iter().enumerate().map(|(index, &(mode, count))| {
                let is_active = mode == active;
                let label = format!("{} {} ({})", index + 1, mode.label(), count);
                element! {
                    Text(
                        content: if is_active { format!("[{}]", label) } else { format!(" {} ", label) },
                        color: if is_active { theme.highlight } else { theme.text_dimmed },
                        weight: if is_active { Weight::Bold } else { Weight::Normal },
                    )
                }
            }))
        }
    }
}
