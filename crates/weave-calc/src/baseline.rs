//! 基準配對器
//!
//! 較早期的簡化配對：先以材質與紗線強度篩選織機，再窮舉
//! 織機 × 擋車工的所有組合取總分最高者。保留作為與知識引擎的對照，
//! 不參與 [`crate::Recommender`] 的推薦。

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use weave_core::{
    CompatibilityCategory, CompatibilityResult, FabricSpec, FactoryConstraints, MachineProfile,
    MachineType, PowerUsage, QualityPriority, Recommendation, SpeedClass, StrengthHandling,
    WeaveError, WorkerProfile,
};

/// 基準配對器
pub struct BaselineMatcher;

impl BaselineMatcher {
    /// 窮舉配對
    pub fn recommend(
        fabric: &FabricSpec,
        machines: &[MachineProfile],
        workers: &[WorkerProfile],
    ) -> weave_core::Result<Option<Recommendation>> {
        if workers.is_empty() {
            return Err(WeaveError::InvalidInput("擋車工清單不可為空".to_string()));
        }

        let mut best: Option<(&MachineProfile, &WorkerProfile, u32)> = None;

        for machine in machines.iter().filter(|m| Self::is_eligible(m, fabric)) {
            let machine_score = Self::machine_score(machine, fabric);
            for worker in workers {
                let total = machine_score + Self::worker_score(worker, machine, fabric);
                // 嚴格大於：同分保留先出現的組合
                if best.map_or(true, |(_, _, score)| total > score) {
                    best = Some((machine, worker, total));
                }
            }
        }

        let Some((machine, worker, total)) = best else {
            tracing::debug!("基準配對：沒有符合材質與強度條件的織機");
            return Ok(None);
        };

        let suitability_score = (Decimal::from(total) / Decimal::from(120) * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .min(Decimal::ONE_HUNDRED);

        tracing::debug!(
            "基準配對：織機 {}，擋車工 {}，總分 {}",
            machine.id,
            worker.id,
            total
        );

        Ok(Some(Recommendation {
            machine: machine.clone(),
            worker: worker.clone(),
            suitability_score: suitability_score.to_u8().unwrap_or(100),
            explanation: Self::explain(machine, worker, fabric),
            compatibility: CompatibilityResult {
                machine: machine.clone(),
                score: Decimal::from(Self::machine_score(machine, fabric)),
                category: CompatibilityCategory::Acceptable,
                reasons: Vec::new(),
                speed_reduction: Decimal::ZERO,
                quality_risk: Decimal::ZERO,
                cost_penalty: Decimal::ZERO,
            },
            factory_constraints: FactoryConstraints {
                speed_reduction: Decimal::ZERO,
                quality_risk: Decimal::ZERO,
                cost_penalty: Decimal::ZERO,
                feasibility_score: suitability_score,
            },
        }))
    }

    /// 材質需在適用清單內；細支（>40）不可用 thin，粗支（<20）不可用 thick
    pub fn is_eligible(machine: &MachineProfile, fabric: &FabricSpec) -> bool {
        if !machine.supports_material(fabric.material) {
            return false;
        }

        let avg_count = fabric.average_yarn_count();
        if avg_count > Decimal::from(40) && machine.strength_handling < StrengthHandling::Medium {
            return false;
        }
        if avg_count < Decimal::from(20) && machine.strength_handling > StrengthHandling::Medium {
            return false;
        }
        true
    }

    pub fn machine_score(machine: &MachineProfile, fabric: &FabricSpec) -> u32 {
        let mut score = 0;

        if machine.supports_material(fabric.material) {
            score += 30;
        }

        score += match (fabric.quality_priority, machine.max_speed) {
            (QualityPriority::Premium, speed) if speed <= SpeedClass::Medium => 20,
            (QualityPriority::Low, speed) if speed >= SpeedClass::Medium => 20,
            (QualityPriority::Balanced, SpeedClass::Medium) => 15,
            _ => 0,
        };

        let gsm = fabric.gsm;
        let strength_fits = match machine.strength_handling {
            StrengthHandling::Thick => gsm > Decimal::from(200),
            StrengthHandling::Thin => gsm < Decimal::from(150),
            StrengthHandling::Medium => gsm >= Decimal::from(150) && gsm <= Decimal::from(200),
        };
        if strength_fits {
            score += 15;
        }

        match (fabric.quality_priority, machine.power_usage) {
            (QualityPriority::Low, PowerUsage::Low) | (QualityPriority::Premium, PowerUsage::High) => {
                score += 10
            }
            _ => {}
        }

        score
    }

    pub fn worker_score(worker: &WorkerProfile, machine: &MachineProfile, fabric: &FabricSpec) -> u32 {
        let mut score = u32::from(worker.skill_level) * 5;

        if worker.specializes_in(machine.machine_type) {
            score += 20;
        }
        if worker.prefers(machine.machine_type) {
            score += 15;
        }

        match fabric.quality_priority {
            QualityPriority::Premium if worker.skill_level >= 8 => score += 10,
            QualityPriority::Low if worker.skill_level >= 5 => score += 10,
            _ => {}
        }

        score
    }

    fn explain(machine: &MachineProfile, worker: &WorkerProfile, fabric: &FabricSpec) -> String {
        let mut reasons = Vec::new();
        let avg_count = fabric.average_yarn_count();
        let fine = avg_count > Decimal::from(40);

        if fine && machine.machine_type == MachineType::Airjet {
            reasons.push(format!(
                "Airjet machines were avoided due to high breakage risk with fine yarn ({} count)",
                avg_count.normalize()
            ));
        }
        if fine && machine.machine_type == MachineType::Rapier {
            reasons.push(format!(
                "Rapier loom handles fine yarn ({} count) with lower breakage risk",
                avg_count.normalize()
            ));
        }
        if fabric.gsm > Decimal::from(200) && machine.strength_handling == StrengthHandling::Thick {
            reasons.push(format!(
                "Heavy fabric ({} GSM) requires {} yarn handling capability",
                fabric.gsm, machine.strength_handling
            ));
        }
        if fabric.quality_priority == QualityPriority::Premium && machine.max_speed != SpeedClass::High {
            reasons.push(format!(
                "Premium quality requires controlled speed ({}) for better fabric consistency",
                machine.max_speed
            ));
        }
        if worker.specializes_in(machine.machine_type) {
            reasons.push(format!(
                "{} specializes in {} knotting, reducing stoppage risk",
                worker.name, machine.machine_type
            ));
        }
        if worker.skill_level >= 8 && fabric.quality_priority == QualityPriority::Premium {
            reasons.push(format!(
                "High skill level ({}/10) ensures premium quality standards",
                worker.skill_level
            ));
        }
        if worker.prefers(machine.machine_type) {
            reasons.push(format!(
                "Worker preference for {} machines improves productivity and quality",
                machine.machine_type
            ));
        }

        if reasons.is_empty() {
            return format!(
                "{} with {} provides the best balance of capabilities for this fabric type and quality requirements.",
                machine.name, worker.name
            );
        }
        format!("{}.", reasons.join(". "))
    }
}
