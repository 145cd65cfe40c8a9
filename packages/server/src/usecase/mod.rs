//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod dispatcher;
pub mod error;
pub mod event_sink;
pub mod join_chat;
pub mod leave_chat;
pub mod send_message;

pub use dispatcher::EventDispatcher;
pub use error::ChatError;
pub use event_sink::EventSink;
pub use join_chat::{JoinChatUseCase, JoinedChat};
pub use leave_chat::LeaveChatUseCase;
pub use send_message::{ChatBroadcast, SendMessageUseCase};
