//! 工廠約束
//!
//! 以擋車工影響係數按比例衰減織機與布料不匹配帶來的風險，
//! 熟練工能降低但不會完全消除風險。

use rust_decimal::Decimal;
use weave_core::{CompatibilityResult, FactoryConstraints, WorkerImpact};

use crate::compatibility::clamp_percent;

/// 工廠約束解析器
pub struct FactoryConstraintResolver;

impl FactoryConstraintResolver {
    /// 解析工廠約束
    pub fn resolve(compatibility: &CompatibilityResult, impact: &WorkerImpact) -> FactoryConstraints {
        let speed_reduction =
            compatibility.speed_reduction * (Decimal::ONE - impact.speed_increase);
        let quality_risk = compatibility.quality_risk * (Decimal::ONE - impact.defect_reduction);
        let cost_penalty = compatibility.cost_penalty * (Decimal::ONE - impact.efficiency_bonus);

        let weighted = speed_reduction * Decimal::new(4, 1)
            + quality_risk * Decimal::new(4, 1)
            + cost_penalty * Decimal::new(2, 1);
        let feasibility_score = Decimal::ONE_HUNDRED - weighted;

        FactoryConstraints {
            speed_reduction: clamp_percent(speed_reduction),
            quality_risk: clamp_percent(quality_risk),
            cost_penalty: clamp_percent(cost_penalty),
            feasibility_score: clamp_percent(feasibility_score),
        }
    }
}
