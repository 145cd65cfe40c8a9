//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 送信者の参加確認、本文の検証、ブロードキャスト対象の選定
//!
//! ### なぜこのテストが必要か
//! - 未参加の接続からのメッセージを拒否する
//! - 送信者本人を含むルーム全員がブロードキャスト対象になることを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：メッセージ送信とブロードキャスト
//! - 異常系：未参加での送信、空のメッセージ
//! - エッジケース：送信者のみが参加している場合

use std::sync::Arc;

use crate::domain::{ConnectionId, DisplayName, MessageText, PresenceRepository};

use super::error::ChatError;

/// ブロードキャストするメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatBroadcast {
    /// 送信者のユーザー名
    pub from: DisplayName,
    /// トリム済みの本文
    pub text: MessageText,
    /// ブロードキャスト対象（送信者を含む）
    pub recipients: Vec<ConnectionId>,
}

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn PresenceRepository>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(repository: Arc<dyn PresenceRepository>) -> Self {
        Self { repository }
    }

    /// メッセージ送信を実行
    ///
    /// 参加確認を本文の検証より先に行います。
    ///
    /// # Returns
    ///
    /// * `Ok(ChatBroadcast)` - ブロードキャスト内容と対象
    /// * `Err(ChatError)` - 送信失敗
    pub async fn execute(
        &self,
        from: &ConnectionId,
        raw_text: &str,
    ) -> Result<ChatBroadcast, ChatError> {
        let membership = self
            .repository
            .membership(from)
            .await
            .ok_or(ChatError::NotJoined)?;

        let text = MessageText::parse(raw_text).map_err(|_| ChatError::EmptyMessage)?;

        Ok(ChatBroadcast {
            from: membership.name,
            text,
            recipients: membership.members,
        })
    }
}
