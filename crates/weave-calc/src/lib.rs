//! # Weave Calculation Engine
//!
//! 織機與擋車工推薦引擎：布料分類、紗線行為、相容性評分、
//! 擋車工影響、工廠約束與說明產生。

pub mod baseline;
pub mod classifier;
pub mod compatibility;
pub mod constraints;
pub mod explanation;
pub mod recommender;
pub mod worker_impact;
pub mod yarn_behavior;

// Re-export 主要類型
pub use baseline::BaselineMatcher;
pub use classifier::{Density, FabricClass, FabricClassifier};
pub use compatibility::{
    CompatibilityScorer, NamedRule, RuleOutcome, ScoringContext, ScoringRule, DEFAULT_RULES,
};
pub use constraints::FactoryConstraintResolver;
pub use explanation::{ExplanationGenerator, ExplanationInput};
pub use recommender::{Recommender, WorkerCandidate};
pub use worker_impact::WorkerImpactModel;
pub use yarn_behavior::{MachineSuitability, YarnBehavior, YarnBehaviorModel};
