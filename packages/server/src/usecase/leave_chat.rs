//! UseCase: チャット退出処理
//!
//! 明示的な leave イベントと、トランスポートの切断の両方がこの処理を通ります。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - LeaveChatUseCase::execute() メソッド
//! - 参加者の削除と、通知対象（残りのメンバー）の選定
//!
//! ### なぜこのテストが必要か
//! - 退出時に残りの参加者へ通知されることを保証する
//! - 2 回目の切断が何もしない（二重通知しない）ことを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加者の退出と通知
//! - エッジケース：最後の参加者の退出、二重の切断
//! - 異常系：未参加の接続の切断

use std::sync::Arc;

use crate::domain::{ConnectionId, Departure, PresenceRepository};

/// チャット退出のユースケース
pub struct LeaveChatUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn PresenceRepository>,
}

impl LeaveChatUseCase {
    /// 新しい LeaveChatUseCase を作成
    pub fn new(repository: Arc<dyn PresenceRepository>) -> Self {
        Self { repository }
    }

    /// 退出を実行
    ///
    /// # Returns
    ///
    /// * `Some(Departure)` - 退出者と残りのメンバー
    /// * `None` - 未参加（何もしない）
    pub async fn execute(&self, connection_id: &ConnectionId) -> Option<Departure> {
        self.repository.leave(connection_id).await
    }
}
