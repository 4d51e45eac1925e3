//! Dashboard state: filtering, sentiment aggregation, the reducer-driven
//! interaction model and the reload/mutation orchestration behind it.

pub mod filter;
pub mod model;
pub mod sentiment;
pub mod sync;

pub use filter::{FilterMode, filter_tickets};
pub use model::{
    DashboardAction, DashboardState, DashboardViewModel, Effect, Mutation, Notice, NoticeLevel,
    action_effect, compute_dashboard_view_model, key_to_action, reduce_dashboard_state,
};
pub use sentiment::{SentimentBar, SentimentCounts, aggregate_sentiment, sentiment_bars};
