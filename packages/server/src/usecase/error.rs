//! UseCase 層のエラー定義
//!
//! `Display` の文字列はそのままクライアントへ `error` イベントとして送られます。

use thiserror::Error;

/// チャット操作のエラー
///
/// どのエラーもその 1 イベントだけを失敗させ、接続やレジストリには影響しません。
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChatError {
    /// 空白のみのユーザー名で参加しようとした
    #[error("Username is required.")]
    EmptyUsername,

    /// ルーム内で既に使われているユーザー名
    #[error("This username is already taken.")]
    DuplicateUsername,

    /// 参加済みの接続が再度参加しようとした
    #[error("You have already joined the chat.")]
    AlreadyJoined,

    /// 参加前にメッセージを送信した
    #[error("You must join before sending messages.")]
    NotJoined,

    /// 空白のみのメッセージ
    #[error("Cannot send an empty message.")]
    EmptyMessage,
}
