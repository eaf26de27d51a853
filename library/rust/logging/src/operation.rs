use serde::{Deserialize, Serialize};

/// OperationType は操作ログに記録する操作種別。
///
/// ワイヤ上は SCREAMING_SNAKE_CASE の名前で表現する。
/// 宣言順に意味はない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    /// 新規作成
    Add,
    /// 更新
    Update,
    /// 削除
    Delete,
    /// 参照・検索
    Query,
}

impl OperationType {
    /// 全種別（網羅列挙用）。
    pub const ALL: [OperationType; 4] = [Self::Add, Self::Update, Self::Delete, Self::Query];

    /// ワイヤ名を返す。
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Query => "QUERY",
        }
    }

    /// ワイヤ名から種別を復元する。未知の名前は None。
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ADD" => Some(Self::Add),
            "UPDATE" => Some(Self::Update),
            "DELETE" => Some(Self::Delete),
            "QUERY" => Some(Self::Query),
            _ => None,
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
