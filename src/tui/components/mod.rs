//! Dashboard UI components
//!
//! Each component renders one region of the dashboard from view-model data;
//! none of them hold dashboard state of their own.

pub mod empty_state;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod modal;
pub mod stats;
pub mod text_editor;
pub mod ticket_detail;
pub mod ticket_list;
pub mod toast;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use filter_bar::{FilterBar, FilterBarProps};
pub use footer::{Footer, FooterProps, Shortcut};
pub use header::{Header, HeaderProps};
pub use modal::{HelpModal, ModalOverlay, ModalOverlayProps, NoticeModal, NoticeModalProps};
pub use stats::{StatsPanel, StatsPanelProps};
pub use text_editor::{TextEditor, TextEditorProps};
pub use ticket_detail::{TicketDetail, TicketDetailProps};
pub use ticket_list::{TicketList, TicketListProps, TicketListRow, TicketListRowProps};
pub use toast::{Toast, ToastLevel, render_toast};
