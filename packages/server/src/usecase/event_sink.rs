//! 送信側トランスポートの抽象化

use async_trait::async_trait;

use crate::{domain::ConnectionId, infrastructure::dto::websocket::ServerEvent};

/// イベントの送信先
///
/// ベストエフォートで配送し、失敗しても呼び出し側には返しません。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventSink: Send + Sync {
    /// `recipients` の全員に `event` を送信する
    async fn send(&self, recipients: &[ConnectionId], event: ServerEvent);
}
