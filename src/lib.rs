//! # Weave Alloc
//!
//! 布料 → 織機 / 擋車工推薦引擎。
//!
//! 依布料規格評估每台織機的相容性，挑出最適合的織機，再為該織機
//! 挑出最適合的擋車工，最後附上工廠約束與文字說明。

pub use weave_calc as calc;
pub use weave_catalog as catalog;
pub use weave_core as types;

pub use weave_calc::{BaselineMatcher, Recommender, WorkerCandidate};
pub use weave_core::{
    ClassificationTables, CompatibilityCategory, CompatibilityResult, FabricSpec,
    FactoryConstraints, MachineProfile, Recommendation, Result, WeaveError, WorkerProfile,
};

/// 以預設分類表與規則進行推薦
pub fn recommend(
    fabric: &FabricSpec,
    machines: &[MachineProfile],
    workers: &[WorkerProfile],
) -> Result<Option<Recommendation>> {
    Recommender::default().recommend(fabric, machines, workers)
}

/// 以參考織機與參考擋車工進行推薦
pub fn recommend_with_catalog(fabric: &FabricSpec) -> Result<Option<Recommendation>> {
    recommend(
        fabric,
        &weave_catalog::reference_machines(),
        &weave_catalog::reference_workers(),
    )
}
