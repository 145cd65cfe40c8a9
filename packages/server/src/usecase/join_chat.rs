//! UseCase: チャット参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinChatUseCase::execute() メソッド
//! - ユーザー名の検証（空白のみ、重複）とレジストリへの登録
//!
//! ### なぜこのテストが必要か
//! - ルーム内でユーザー名が一意であることを保証する
//! - 参加直後のメンバー一覧がブロードキャストに使われるため、その内容を確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規ユーザーの参加
//! - 異常系：空のユーザー名、重複したユーザー名、参加済み接続からの再参加

use std::sync::Arc;

use crate::domain::{
    ConnectionId, DisplayName, PresenceRepository, RegistryError, RoomName, RoomSnapshot,
};

use super::error::ChatError;

/// 参加成功時の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedChat {
    /// トリム済みのユーザー名
    pub name: DisplayName,
    /// 参加直後のルームの状態（本人を含む）
    pub room: RoomSnapshot,
}

/// チャット参加のユースケース
pub struct JoinChatUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn PresenceRepository>,
}

impl JoinChatUseCase {
    /// 新しい JoinChatUseCase を作成
    pub fn new(repository: Arc<dyn PresenceRepository>) -> Self {
        Self { repository }
    }

    /// グローバルルームへの参加を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 参加する接続の ID
    /// * `raw_name` - クライアントから受け取ったユーザー名（未トリム）
    ///
    /// # Returns
    ///
    /// * `Ok(JoinedChat)` - 参加成功
    /// * `Err(ChatError)` - 参加失敗（レジストリは変更されない）
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        raw_name: &str,
    ) -> Result<JoinedChat, ChatError> {
        let name = DisplayName::parse(raw_name).map_err(|_| ChatError::EmptyUsername)?;

        let room = self
            .repository
            .join(connection_id, name.clone(), RoomName::global())
            .await
            .map_err(|e| match e {
                RegistryError::NameTaken { .. } => ChatError::DuplicateUsername,
                RegistryError::AlreadyJoined { .. } => ChatError::AlreadyJoined,
            })?;

        Ok(JoinedChat { name, room })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::InMemoryPresenceRepository;

    fn create_test_repository() -> Arc<InMemoryPresenceRepository> {
        Arc::new(InMemoryPresenceRepository::new())
    }

    fn conn(id: &str) -> ConnectionId {
        ConnectionId::new(id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_join_chat_success() {
        // テスト項目: 新規ユーザーが参加でき、トリム済みの名前が登録される
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = JoinChatUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(conn("c1"), "  alice ").await;

        // then (期待する結果):
        let joined = result.unwrap();
        assert_eq!(joined.name.as_str(), "alice");
        assert_eq!(joined.room.room, RoomName::global());
        assert_eq!(joined.room.members, vec![conn("c1")]);
        assert_eq!(repository.count_connections().await, 1);
    }

    #[tokio::test]
    async fn test_join_chat_empty_username() {
        // テスト項目: 空白のみのユーザー名はエラーになる
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = JoinChatUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(conn("c1"), "   ").await;

        // then (期待する結果):
        assert_eq!(result, Err(ChatError::EmptyUsername));
        assert_eq!(repository.count_connections().await, 0);
    }

    #[tokio::test]
    async fn test_join_chat_duplicate_username() {
        // テスト項目: 同じユーザー名（トリム後）での参加はエラーになる
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = JoinChatUseCase::new(repository.clone());
        usecase.execute(conn("c1"), "alice").await.unwrap();

        // when (操作):
        let result = usecase.execute(conn("c2"), " alice").await;

        // then (期待する結果):
        assert_eq!(result, Err(ChatError::DuplicateUsername));
        assert_eq!(repository.count_connections().await, 1);
    }

    #[tokio::test]
    async fn test_join_chat_already_joined() {
        // テスト項目: 参加済みの接続が別名で参加しようとするとエラーになる
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = JoinChatUseCase::new(repository.clone());
        usecase.execute(conn("c1"), "alice").await.unwrap();

        // when (操作):
        let result = usecase.execute(conn("c1"), "alicia").await;

        // then (期待する結果):
        assert_eq!(result, Err(ChatError::AlreadyJoined));
        let snapshot = repository.snapshot(&RoomName::global()).await;
        assert_eq!(snapshot.names.len(), 1);
        assert_eq!(snapshot.names[0].as_str(), "alice");
    }
}
