//! 評分與推薦結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{MachineProfile, WorkerProfile};

/// 相容性等級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityCategory {
    /// 理想（≥80）
    Ideal,
    /// 可接受（≥60）
    Acceptable,
    /// 有風險（≥40）
    Risky,
    /// 避免（<40）
    Avoid,
}

impl CompatibilityCategory {
    /// 依分數門檻分級
    pub fn from_score(score: Decimal) -> Self {
        if score >= Decimal::from(80) {
            CompatibilityCategory::Ideal
        } else if score >= Decimal::from(60) {
            CompatibilityCategory::Acceptable
        } else if score >= Decimal::from(40) {
            CompatibilityCategory::Risky
        } else {
            CompatibilityCategory::Avoid
        }
    }

    /// 非「避免」即可進入後續選擇
    pub fn is_feasible(&self) -> bool {
        *self != CompatibilityCategory::Avoid
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompatibilityCategory::Ideal => "ideal",
            CompatibilityCategory::Acceptable => "acceptable",
            CompatibilityCategory::Risky => "risky",
            CompatibilityCategory::Avoid => "avoid",
        }
    }
}

/// 單台織機對布料的相容性結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// 被評估的織機
    pub machine: MachineProfile,

    /// 分數 [0, 100]
    pub score: Decimal,

    /// 等級
    pub category: CompatibilityCategory,

    /// 觸發規則的說明（依規則順序）
    pub reasons: Vec<String>,

    /// 降速幅度 [0, 100]
    pub speed_reduction: Decimal,

    /// 品質風險 [0, 100]
    pub quality_risk: Decimal,

    /// 成本懲罰 [0, 100]
    pub cost_penalty: Decimal,
}

/// 擋車工對織機的影響係數
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkerImpact {
    /// 效率加成 [0, 0.5]
    pub efficiency_bonus: Decimal,
    /// 疵點降低 [0, 0.5]
    pub defect_reduction: Decimal,
    /// 速度提升 [0, 0.3]
    pub speed_increase: Decimal,
    /// 上機時間縮減 [0, 0.5]
    pub setup_time_reduction: Decimal,
}

/// 工廠約束（已計入擋車工衰減）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactoryConstraints {
    pub speed_reduction: Decimal,
    pub quality_risk: Decimal,
    pub cost_penalty: Decimal,
    /// 可行性 [0, 100]
    pub feasibility_score: Decimal,
}

/// 最終推薦結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 推薦織機
    pub machine: MachineProfile,

    /// 推薦擋車工
    pub worker: WorkerProfile,

    /// 綜合適配分數 [0, 100]
    pub suitability_score: u8,

    /// 說明文字
    pub explanation: String,

    /// 推薦織機的相容性結果
    pub compatibility: CompatibilityResult,

    /// 工廠約束
    pub factory_constraints: FactoryConstraints,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100, CompatibilityCategory::Ideal)]
    #[case(80, CompatibilityCategory::Ideal)]
    #[case(79, CompatibilityCategory::Acceptable)]
    #[case(60, CompatibilityCategory::Acceptable)]
    #[case(59, CompatibilityCategory::Risky)]
    #[case(40, CompatibilityCategory::Risky)]
    #[case(39, CompatibilityCategory::Avoid)]
    #[case(0, CompatibilityCategory::Avoid)]
    fn test_category_thresholds(#[case] score: i64, #[case] expected: CompatibilityCategory) {
        assert_eq!(CompatibilityCategory::from_score(Decimal::from(score)), expected);
    }

    #[test]
    fn test_category_just_below_threshold() {
        let score = Decimal::new(7999, 2);

        assert_eq!(
            CompatibilityCategory::from_score(score),
            CompatibilityCategory::Acceptable
        );
        assert!(CompatibilityCategory::Risky.is_feasible());
        assert!(!CompatibilityCategory::Avoid.is_feasible());
    }
}
