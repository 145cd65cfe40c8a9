//! InMemory Presence Repository 実装
//!
//! ドメイン層が定義する PresenceRepository trait の具体的な実装。
//! `PresenceRegistry` を 1 つの Mutex で包み、全ての変更を直列化します。
//! ロック中に I/O は行いません。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ConnectionId, Departure, DisplayName, Membership, PresenceRegistry, PresenceRepository,
    RegistryError, RoomName, RoomSnapshot,
};

/// インメモリ Presence Repository 実装
pub struct InMemoryPresenceRepository {
    /// プロセス全体で 1 つのレジストリ
    registry: Mutex<PresenceRegistry>,
}

impl InMemoryPresenceRepository {
    /// 空のレジストリ（グローバルルームのみ）で作成
    pub fn new() -> Self {
        Self::with_registry(PresenceRegistry::new())
    }

    /// 既存のレジストリから作成
    pub fn with_registry(registry: PresenceRegistry) -> Self {
        Self {
            registry: Mutex::new(registry),
        }
    }

    /// 登録中の接続数
    pub async fn count_connections(&self) -> usize {
        self.registry.lock().await.len()
    }

    /// ルームが存在するか
    pub async fn room_exists(&self, room: &RoomName) -> bool {
        self.registry.lock().await.room_exists(room)
    }
}

impl Default for InMemoryPresenceRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn snapshot_of(registry: &PresenceRegistry, room: &RoomName) -> RoomSnapshot {
    RoomSnapshot {
        room: room.clone(),
        members: registry.members(room),
        names: registry.list_names(room),
    }
}

#[async_trait]
impl PresenceRepository for InMemoryPresenceRepository {
    async fn join(
        &self,
        connection_id: ConnectionId,
        name: DisplayName,
        room: RoomName,
    ) -> Result<RoomSnapshot, RegistryError> {
        let mut registry = self.registry.lock().await;
        registry.add_user(name, connection_id, &room)?;
        Ok(snapshot_of(&registry, &room))
    }

    async fn leave(&self, connection_id: &ConnectionId) -> Option<Departure> {
        let mut registry = self.registry.lock().await;
        let (name, room) = registry.remove_user(connection_id)?;
        let remaining = snapshot_of(&registry, &room);
        Some(Departure {
            name,
            room,
            remaining,
        })
    }

    async fn membership(&self, connection_id: &ConnectionId) -> Option<Membership> {
        let registry = self.registry.lock().await;
        let room = registry.room_of(connection_id)?.clone();
        let name = registry.get_name(connection_id, &room)?.clone();
        let members = registry.members(&room);
        Some(Membership {
            name,
            room,
            members,
        })
    }

    async fn snapshot(&self, room: &RoomName) -> RoomSnapshot {
        let registry = self.registry.lock().await;
        snapshot_of(&registry, room)
    }
}
