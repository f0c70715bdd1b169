//! 擋車工影響模型

use rust_decimal::Decimal;
use weave_core::{MachineProfile, MachineType, SpeedClass, WorkerImpact, WorkerProfile};

use crate::classifier::FabricClass;

/// 擋車工影響計算器
pub struct WorkerImpactModel;

impl WorkerImpactModel {
    /// 計算擋車工在指定織機與布料上的影響係數
    ///
    /// 各項加成獨立判斷後累加，最後截斷：
    /// 效率與疵點降低上限 0.5，速度提升上限 0.3，上機時間縮減上限 0.5。
    pub fn evaluate(
        worker: &WorkerProfile,
        machine: &MachineProfile,
        class: &FabricClass,
    ) -> WorkerImpact {
        let machine_type = machine.machine_type;
        let mut impact = WorkerImpact::default();

        // 接頭專長
        if worker.specializes_in(machine_type) {
            impact.efficiency_bonus += Decimal::new(15, 2);
            impact.defect_reduction += Decimal::new(2, 1);
            impact.speed_increase += Decimal::new(1, 1);
        }

        // 偏好機型
        if worker.prefers(machine_type) {
            impact.efficiency_bonus += Decimal::new(1, 1);
            impact.setup_time_reduction += Decimal::new(2, 1);
        }

        let skill = Decimal::from(worker.skill_level) / Decimal::TEN;
        impact.efficiency_bonus += skill * Decimal::new(1, 1);
        impact.defect_reduction += skill * Decimal::new(15, 2);

        match machine_type {
            MachineType::Airjet if worker.air_jet_tuning >= 8 => {
                impact.speed_increase += Decimal::new(15, 2);
                impact.defect_reduction += Decimal::new(15, 2);
            }
            MachineType::Rapier if worker.rapier_setup >= 8 => {
                impact.setup_time_reduction += Decimal::new(3, 1);
                impact.defect_reduction += Decimal::new(1, 1);
            }
            _ => {}
        }

        if class.has_fancy_yarn && worker.fancy_yarn_handling >= 7 {
            impact.defect_reduction += Decimal::new(25, 2);
            impact.efficiency_bonus += Decimal::new(2, 1);
        }

        if machine.max_speed == SpeedClass::High && worker.high_speed_troubleshooting >= 7 {
            impact.speed_increase += Decimal::new(1, 1);
            impact.defect_reduction += Decimal::new(1, 1);
        }

        let half = Decimal::new(5, 1);
        WorkerImpact {
            efficiency_bonus: impact.efficiency_bonus.clamp(Decimal::ZERO, half),
            defect_reduction: impact.defect_reduction.clamp(Decimal::ZERO, half),
            speed_increase: impact.speed_increase.clamp(Decimal::ZERO, Decimal::new(3, 1)),
            setup_time_reduction: impact.setup_time_reduction.clamp(Decimal::ZERO, half),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::FabricClassifier;
    use rstest::rstest;
    use weave_catalog::{reference_machines, reference_workers};
    use weave_core::{ClassificationTables, FabricSpec, Material, WeaveType, YarnType};

    fn class(fancy: bool) -> FabricClass {
        let tables = ClassificationTables::default();
        let yarn = if fancy { YarnType::Fancy } else { YarnType::Filament };
        let fabric = FabricSpec::new(
            Material::Polyester,
            40,
            40,
            Decimal::from(180),
            Decimal::from(160),
            WeaveType::Plain,
        )
        .with_yarn_types(yarn, YarnType::Filament);
        FabricClassifier::new(&tables).classify(&fabric)
    }

    fn machine(machine_type: MachineType) -> MachineProfile {
        reference_machines()
            .into_iter()
            .find(|m| m.machine_type == machine_type)
            .unwrap()
    }

    fn worker(name: &str) -> WorkerProfile {
        reference_workers().into_iter().find(|w| w.name == name).unwrap()
    }

    #[test]
    fn test_unrelated_worker_gets_only_skill_scaling() {
        let operator = WorkerProfile::new("W-X".to_string(), "Novice".to_string(), 5)
            .with_skills(1, 1, 1, 1);
        let impact = WorkerImpactModel::evaluate(&operator, &machine(MachineType::Shuttle), &class(false));

        assert_eq!(impact.efficiency_bonus, Decimal::new(5, 2));
        assert_eq!(impact.defect_reduction, Decimal::new(75, 3));
        assert_eq!(impact.speed_increase, Decimal::ZERO);
        assert_eq!(impact.setup_time_reduction, Decimal::ZERO);
    }

    #[test]
    fn test_airjet_expert_is_clamped() {
        // Maria Silva：噴氣專長 + 偏好 + 調校 9 + 高速 8
        let impact = WorkerImpactModel::evaluate(
            &worker("Maria Silva"),
            &machine(MachineType::Airjet),
            &class(false),
        );

        // 0.15 + 0.1 + 0.08
        assert_eq!(impact.efficiency_bonus, Decimal::new(33, 2));
        // 0.2 + 0.12 + 0.15 + 0.1 = 0.57 → 0.5
        assert_eq!(impact.defect_reduction, Decimal::new(5, 1));
        // 0.1 + 0.15 + 0.1 = 0.35 → 0.3
        assert_eq!(impact.speed_increase, Decimal::new(3, 1));
        assert_eq!(impact.setup_time_reduction, Decimal::new(2, 1));
    }

    #[test]
    fn test_rapier_setup_and_fancy_handling() {
        // Rajesh Kumar：劍桿專長 + 偏好 + 上機 9 + 花式紗 8
        let impact = WorkerImpactModel::evaluate(
            &worker("Rajesh Kumar"),
            &machine(MachineType::Rapier),
            &class(true),
        );

        // 0.15 + 0.1 + 0.09 + 0.2 = 0.54 → 0.5
        assert_eq!(impact.efficiency_bonus, Decimal::new(5, 1));
        assert_eq!(impact.defect_reduction, Decimal::new(5, 1));
        assert_eq!(impact.speed_increase, Decimal::new(1, 1));
        // 0.2 + 0.3
        assert_eq!(impact.setup_time_reduction, Decimal::new(5, 1));
    }

    #[test]
    fn test_fancy_bonus_requires_fancy_fabric() {
        let rajesh = worker("Rajesh Kumar");
        let shuttle = machine(MachineType::Shuttle);

        let plain = WorkerImpactModel::evaluate(&rajesh, &shuttle, &class(false));
        let fancy = WorkerImpactModel::evaluate(&rajesh, &shuttle, &class(true));

        assert_eq!(fancy.defect_reduction - plain.defect_reduction, Decimal::new(25, 2));
        assert_eq!(fancy.efficiency_bonus - plain.efficiency_bonus, Decimal::new(2, 1));
    }

    #[test]
    fn test_high_speed_bonus_needs_high_speed_machine() {
        let operator = WorkerProfile::new("W-Y".to_string(), "Fixer".to_string(), 1)
            .with_skills(1, 1, 1, 9);

        let waterjet = WorkerImpactModel::evaluate(&operator, &machine(MachineType::Waterjet), &class(false));
        let projectile =
            WorkerImpactModel::evaluate(&operator, &machine(MachineType::Projectile), &class(false));

        assert_eq!(waterjet.speed_increase, Decimal::new(1, 1));
        assert_eq!(projectile.speed_increase, Decimal::ZERO);
    }

    fn specialist(skills: (u8, u8, u8, u8)) -> WorkerProfile {
        WorkerProfile::new("W-T".to_string(), "Threshold".to_string(), 1)
            .with_skills(skills.0, skills.1, skills.2, skills.3)
    }

    #[rstest]
    #[case(8, Decimal::new(15, 2))]
    #[case(7, Decimal::ZERO)]
    fn test_air_jet_tuning_threshold(#[case] tuning: u8, #[case] expected: Decimal) {
        let impact = WorkerImpactModel::evaluate(
            &specialist((tuning, 1, 1, 1)),
            &machine(MachineType::Airjet),
            &class(false),
        );

        assert_eq!(impact.speed_increase, expected);
    }

    #[rstest]
    #[case(8, Decimal::new(3, 1))]
    #[case(7, Decimal::ZERO)]
    fn test_rapier_setup_threshold(#[case] setup: u8, #[case] expected: Decimal) {
        let impact = WorkerImpactModel::evaluate(
            &specialist((1, setup, 1, 1)),
            &machine(MachineType::Rapier),
            &class(false),
        );

        assert_eq!(impact.setup_time_reduction, expected);
    }

    #[rstest]
    #[case(7, Decimal::new(21, 2))]
    #[case(6, Decimal::new(1, 2))]
    fn test_fancy_yarn_handling_threshold(#[case] handling: u8, #[case] expected: Decimal) {
        // 技能 1 → 0.01 基礎效率
        let impact = WorkerImpactModel::evaluate(
            &specialist((1, 1, handling, 1)),
            &machine(MachineType::Shuttle),
            &class(true),
        );

        assert_eq!(impact.efficiency_bonus, expected);
    }

    #[rstest]
    #[case(7, Decimal::new(1, 1))]
    #[case(6, Decimal::ZERO)]
    fn test_high_speed_troubleshooting_threshold(#[case] troubleshooting: u8, #[case] expected: Decimal) {
        let impact = WorkerImpactModel::evaluate(
            &specialist((1, 1, 1, troubleshooting)),
            &machine(MachineType::Waterjet),
            &class(false),
        );

        assert_eq!(impact.speed_increase, expected);
    }
}
