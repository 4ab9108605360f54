//! ドメイン層のエラー型

use thiserror::Error;

/// 値オブジェクト生成時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// 空文字列は ID として使えない
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// メッセージ送信（通知）時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    /// 送信先のクライアントが登録されていない
    #[error("Client '{0}' not found")]
    ClientNotFound(String),

    /// チャンネルへの送信に失敗（受信側がすでに閉じている）
    #[error("Failed to push message: {0}")]
    PushFailed(String),

    /// 通知のシリアライズに失敗
    #[error("Failed to serialize notification: {0}")]
    Serialization(String),
}
