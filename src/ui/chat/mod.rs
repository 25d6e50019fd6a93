//! Chat-specific UI components.
//!
//! Every component here reads the shared
//! [`ChatContext`](crate::ui::state::ChatContext); none of them mutate it.

mod header;
mod history_panel;
mod input_area;
mod interface;
mod message;
mod message_list;
mod window;

pub use header::ChatHeader;
pub use history_panel::ConversationHistoryPanel;
pub use input_area::UserInput;
pub use interface::ChatInterface;
pub use message::ChatMessage;
pub use message_list::MessageList;
pub use window::ChatWindow;
