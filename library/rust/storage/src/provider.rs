use serde::{Deserialize, Serialize};

/// UploadProvider はアップロードファイルの保存先を識別する。
///
/// ワイヤ上は SCREAMING_SNAKE_CASE の名前で表現する。
/// 宣言順に意味はない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UploadProvider {
    /// ローカルディスク
    Local,
    /// Alibaba Cloud OSS
    Ali,
    /// Huawei Cloud OBS
    Huawei,
    /// 七牛云 Kodo
    QiNiu,
}

impl UploadProvider {
    /// 全保存先（網羅列挙用）。
    pub const ALL: [UploadProvider; 4] = [Self::Local, Self::Ali, Self::Huawei, Self::QiNiu];

    /// ワイヤ名を返す。
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "LOCAL",
            Self::Ali => "ALI",
            Self::Huawei => "HUAWEI",
            Self::QiNiu => "QI_NIU",
        }
    }

    /// ワイヤ名から保存先を復元する。未知の名前は None。
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "LOCAL" => Some(Self::Local),
            "ALI" => Some(Self::Ali),
            "HUAWEI" => Some(Self::Huawei),
            "QI_NIU" => Some(Self::QiNiu),
            _ => None,
        }
    }

    /// オブジェクトストレージ（ネットワーク越しの保存先）かどうか。
    pub fn is_remote(&self) -> bool {
        !matches!(self, Self::Local)
    }
}

impl std::fmt::Display for UploadProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
