//! b4se-logging: 操作ログと構造化ログ初期化。
//!
//! 監査対象の操作を種別（ADD / UPDATE / DELETE / QUERY）付きで記録する
//! レコードと、tracing-subscriber の初期化を提供する。
//!
//! # 使用例
//!
//! ```ignore
//! use b4se_logging::{init_logging, LoggingConfig, OperationLog, OperationType};
//!
//! init_logging(&LoggingConfig::new("dev", "text"));
//!
//! let log = OperationLog::new(
//!     OperationType::Add,
//!     "フォーム作成",
//!     "テンプレートからフォームを作成した",
//!     request_info,
//!     serde_json::json!({"form_id": 42}),
//! );
//! log.emit();
//! ```

pub mod logger;
pub mod operation;
pub mod record;

pub use logger::{init_logging, LoggingConfig};
pub use operation::OperationType;
pub use record::OperationLog;
