//! # Weave Core
//!
//! 核心資料模型與類型定義

pub mod fabric;
pub mod machine;
pub mod result;
pub mod tables;
pub mod worker;

// Re-export 主要類型
pub use fabric::{EndUse, FabricSpec, Material, QualityPriority, WeaveType, YarnType};
pub use machine::{MachineProfile, MachineType, PowerUsage, SpeedClass, StrengthHandling};
pub use result::{
    CompatibilityCategory, CompatibilityResult, FactoryConstraints, Recommendation, WorkerImpact,
};
pub use tables::{
    lookup_band, Band, ClassificationTables, GsmCategory, WeaveFactor, WeaveFactors, YarnCategory,
};
pub use worker::WorkerProfile;

/// 織造推薦錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum WeaveError {
    #[error("無效的輸入: {0}")]
    InvalidInput(String),

    #[error("無效的分類表配置: {0}")]
    InvalidConfig(String),

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WeaveError>;
