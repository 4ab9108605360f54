//! 値オブジェクト

use std::fmt;

use uuid::Uuid;

use super::error::ValueObjectError;

/// Number of characters shown when a connection is announced to others.
const SHORT_ID_LEN: usize = 5;

/// 接続 ID
///
/// トランスポート層が接続ごとに払い出す不透明なトークン。
/// 接続が開いている間だけ存在し、再利用されない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// 既存の文字列から ConnectionId を作成（空文字列は不可）
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::Empty("ConnectionId"));
        }
        Ok(Self(value))
    }

    /// 新しい一意な ConnectionId を生成（UUID v4）
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// 接続通知で使う先頭 5 文字
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_ID_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl TryFrom<String> for ConnectionId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
