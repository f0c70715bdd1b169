//! 推薦主流程

use rayon::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use weave_core::{
    ClassificationTables, CompatibilityResult, FabricSpec, MachineProfile, Recommendation,
    WeaveError, WorkerImpact, WorkerProfile,
};

use crate::classifier::{FabricClass, FabricClassifier};
use crate::compatibility::{CompatibilityScorer, NamedRule, ScoringContext, DEFAULT_RULES};
use crate::constraints::FactoryConstraintResolver;
use crate::explanation::{ExplanationGenerator, ExplanationInput};
use crate::worker_impact::WorkerImpactModel;
use crate::yarn_behavior::{YarnBehavior, YarnBehaviorModel};

/// 擋車工候選評分
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerCandidate {
    pub worker: WorkerProfile,
    /// 技能等級 + 20×專長 + 10×偏好 + 50×效率加成
    pub score: Decimal,
    pub impact: WorkerImpact,
}

/// 推薦器
///
/// 分三段執行，不回頭：
/// 1. 逐台評估織機相容性，剔除「避免」，取最高分
/// 2. 只針對選中的織機評估所有擋車工，取最高分
/// 3. 解析工廠約束、計算綜合分數並產生說明
///
/// 同分時保留輸入順序中的第一個。
pub struct Recommender<'r> {
    tables: ClassificationTables,
    rules: &'r [NamedRule],
}

impl Default for Recommender<'static> {
    fn default() -> Self {
        Self::new(ClassificationTables::default())
    }
}

impl Recommender<'static> {
    /// 以指定分類表創建推薦器
    pub fn new(tables: ClassificationTables) -> Self {
        Self {
            tables,
            rules: DEFAULT_RULES,
        }
    }
}

impl<'r> Recommender<'r> {
    /// 建構器模式：替換相容性規則清單
    pub fn with_rules<'s>(self, rules: &'s [NamedRule]) -> Recommender<'s> {
        Recommender {
            tables: self.tables,
            rules,
        }
    }

    /// 獲取分類表引用
    pub fn tables(&self) -> &ClassificationTables {
        &self.tables
    }

    /// 主推薦入口
    ///
    /// 沒有任何織機通過篩選時回傳 `Ok(None)`；擋車工清單為空屬於輸入錯誤。
    pub fn recommend(
        &self,
        fabric: &FabricSpec,
        machines: &[MachineProfile],
        workers: &[WorkerProfile],
    ) -> weave_core::Result<Option<Recommendation>> {
        tracing::info!(
            "開始推薦計算：織機 {} 台，擋車工 {} 人",
            machines.len(),
            workers.len()
        );

        if workers.is_empty() {
            return Err(WeaveError::InvalidInput("擋車工清單不可為空".to_string()));
        }

        let start_time = std::time::Instant::now();

        let class = FabricClassifier::new(&self.tables).classify(fabric);
        let behavior = YarnBehaviorModel::analyze(fabric);
        tracing::debug!(
            "布料分類: 克重 {:?}，紗支 {:?}，複雜度 {}，花式紗 {}",
            class.gsm_category,
            class.yarn_category,
            class.complexity.complexity,
            class.has_fancy_yarn
        );

        // Step 1: 織機選擇
        tracing::debug!("Step 1: 織機選擇");
        let Some(best) = self.select_machine(fabric, machines, &class, &behavior) else {
            tracing::info!("沒有可用織機，無推薦結果");
            return Ok(None);
        };
        tracing::debug!(
            "選中織機 {}（{}），分數 {}",
            best.machine.id,
            best.machine.machine_type,
            best.score
        );

        // Step 2: 擋車工選擇
        tracing::debug!("Step 2: 擋車工選擇");
        let candidate = self
            .rank_workers_with_class(&best.machine, workers, &class)
            .into_iter()
            .next()
            .ok_or_else(|| WeaveError::InvalidInput("擋車工清單不可為空".to_string()))?;

        // Step 3: 約束與輸出
        tracing::debug!("Step 3: 工廠約束與輸出");
        let constraints = FactoryConstraintResolver::resolve(&best, &candidate.impact);
        let suitability_score =
            Self::suitability_score(best.score, candidate.score, constraints.feasibility_score);

        let explanation = ExplanationGenerator::render(&ExplanationInput {
            compatibility: &best,
            worker: &candidate.worker,
            fabric,
            class: &class,
            behavior: &behavior,
            constraints: &constraints,
        });

        tracing::info!(
            "推薦完成，耗時 {:?}：織機 {}，擋車工 {}，綜合分數 {}",
            start_time.elapsed(),
            best.machine.name,
            candidate.worker.name,
            suitability_score
        );

        Ok(Some(Recommendation {
            machine: best.machine.clone(),
            worker: candidate.worker,
            suitability_score,
            explanation,
            compatibility: best,
            factory_constraints: constraints,
        }))
    }

    /// 評估所有織機（按輸入順序，不過濾）
    pub fn evaluate_machines(
        &self,
        fabric: &FabricSpec,
        machines: &[MachineProfile],
    ) -> Vec<CompatibilityResult> {
        let class = FabricClassifier::new(&self.tables).classify(fabric);
        let behavior = YarnBehaviorModel::analyze(fabric);
        self.evaluate_with(fabric, machines, &class, &behavior)
    }

    /// 評估擋車工並依分數排序（同分保留輸入順序）
    pub fn rank_workers(
        &self,
        fabric: &FabricSpec,
        machine: &MachineProfile,
        workers: &[WorkerProfile],
    ) -> Vec<WorkerCandidate> {
        let class = FabricClassifier::new(&self.tables).classify(fabric);
        self.rank_workers_with_class(machine, workers, &class)
    }

    fn evaluate_with(
        &self,
        fabric: &FabricSpec,
        machines: &[MachineProfile],
        class: &FabricClass,
        behavior: &YarnBehavior,
    ) -> Vec<CompatibilityResult> {
        let scorer = CompatibilityScorer::new(self.rules);

        // collect 保持輸入順序
        machines
            .par_iter()
            .map(|machine| {
                scorer.score(&ScoringContext {
                    machine,
                    fabric,
                    class,
                    behavior,
                })
            })
            .collect()
    }

    fn select_machine(
        &self,
        fabric: &FabricSpec,
        machines: &[MachineProfile],
        class: &FabricClass,
        behavior: &YarnBehavior,
    ) -> Option<CompatibilityResult> {
        let mut feasible = self.evaluate_with(fabric, machines, class, behavior);
        for result in &feasible {
            tracing::debug!(
                "織機 {} 分數 {}，等級 {}",
                result.machine.id,
                result.score,
                result.category.as_str()
            );
        }
        feasible.retain(|result| result.category.is_feasible());
        tracing::debug!("可用織機: {} / {}", feasible.len(), machines.len());

        // sort_by 為穩定排序
        feasible.sort_by(|a, b| b.score.cmp(&a.score));
        feasible.into_iter().next()
    }

    fn rank_workers_with_class(
        &self,
        machine: &MachineProfile,
        workers: &[WorkerProfile],
        class: &FabricClass,
    ) -> Vec<WorkerCandidate> {
        let mut candidates: Vec<WorkerCandidate> = workers
            .iter()
            .map(|worker| {
                let impact = WorkerImpactModel::evaluate(worker, machine, class);
                let score = Self::worker_score(worker, machine, &impact);
                tracing::debug!("擋車工 {} 分數 {}", worker.id, score);
                WorkerCandidate {
                    worker: worker.clone(),
                    score,
                    impact,
                }
            })
            .collect();

        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        candidates
    }

    /// 擋車工分數：擋車工不會被淘汰，只會排序
    pub fn worker_score(
        worker: &WorkerProfile,
        machine: &MachineProfile,
        impact: &WorkerImpact,
    ) -> Decimal {
        let mut score = Decimal::from(worker.skill_level);
        if worker.specializes_in(machine.machine_type) {
            score += Decimal::from(20);
        }
        if worker.prefers(machine.machine_type) {
            score += Decimal::TEN;
        }
        score + impact.efficiency_bonus * Decimal::from(50)
    }

    /// 綜合分數 = round(0.6×相容性 + 0.3×擋車工 + 0.1×(100 - 可行性))
    pub fn suitability_score(
        compatibility_score: Decimal,
        worker_score: Decimal,
        feasibility_score: Decimal,
    ) -> u8 {
        let raw = compatibility_score * Decimal::new(6, 1)
            + worker_score * Decimal::new(3, 1)
            + (Decimal::ONE_HUNDRED - feasibility_score) * Decimal::new(1, 1);

        raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
            .to_u8()
            .unwrap_or(0)
    }
}
