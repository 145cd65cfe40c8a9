//! Repository trait (データアクセス層の抽象化)
//!
//! ドメイン層が定義し、インフラ層が実装します（依存性の逆転）。
//! 各メソッドは 1 回のロック区間で完結し、ブロードキャスト内容の計算に使う
//! 読み取りも変更と同じスナップショットから行います。

use async_trait::async_trait;

use super::{
    error::RegistryError,
    value_object::{ConnectionId, DisplayName, RoomName},
};

/// ある時点でのルームの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSnapshot {
    pub room: RoomName,
    /// 参加者の接続 ID（`names` と同じ順序）
    pub members: Vec<ConnectionId>,
    /// 参加者名（辞書順）
    pub names: Vec<DisplayName>,
}

/// 退出した参加者と、退出後のルームの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub name: DisplayName,
    pub room: RoomName,
    pub remaining: RoomSnapshot,
}

/// 参加中の接続の所属情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub name: DisplayName,
    pub room: RoomName,
    /// 送信者自身を含むルームの全参加者
    pub members: Vec<ConnectionId>,
}

/// Presence Repository trait
#[async_trait]
pub trait PresenceRepository: Send + Sync {
    /// 参加者を登録し、登録直後のルームの状態を返す
    async fn join(
        &self,
        connection_id: ConnectionId,
        name: DisplayName,
        room: RoomName,
    ) -> Result<RoomSnapshot, RegistryError>;

    /// 参加者を削除する。未登録なら `None`
    async fn leave(&self, connection_id: &ConnectionId) -> Option<Departure>;

    /// 接続の所属情報を取得する。未参加なら `None`
    async fn membership(&self, connection_id: &ConnectionId) -> Option<Membership>;

    /// ルームの現在の状態を取得する
    async fn snapshot(&self, room: &RoomName) -> RoomSnapshot;
}
