//! # Weave Catalog
//!
//! 參考知識庫：機型檔案、參考織機與參考擋車工。

pub mod knowledge;
pub mod machines;
pub mod workers;

// Re-export 主要類型
pub use knowledge::{archetype, MachineArchetype};
pub use machines::reference_machines;
pub use workers::reference_workers;
