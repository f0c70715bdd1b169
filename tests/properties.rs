//! 性質測試：對任意布料與人員組合皆成立的不變式

use proptest::prelude::*;
use rust_decimal::Decimal;
use weave_alloc::calc::{
    CompatibilityScorer, FabricClassifier, FactoryConstraintResolver, ScoringContext,
    WorkerImpactModel, YarnBehaviorModel,
};
use weave_alloc::catalog::{reference_machines, reference_workers};
use weave_alloc::types::{
    EndUse, MachineType, Material, QualityPriority, WeaveType, YarnType,
};
use weave_alloc::{
    ClassificationTables, CompatibilityCategory, CompatibilityResult, FabricSpec, MachineProfile,
    Recommender, WorkerProfile,
};

fn material() -> impl Strategy<Value = Material> {
    prop::sample::select(Material::ALL.to_vec())
}

fn machine_type() -> impl Strategy<Value = MachineType> {
    prop::sample::select(MachineType::ALL.to_vec())
}

fn yarn_type() -> impl Strategy<Value = YarnType> {
    prop_oneof![
        Just(YarnType::Spun),
        Just(YarnType::Filament),
        Just(YarnType::Fancy),
    ]
}

fn quality_priority() -> impl Strategy<Value = QualityPriority> {
    prop_oneof![
        Just(QualityPriority::Low),
        Just(QualityPriority::Balanced),
        Just(QualityPriority::Premium),
    ]
}

fn end_use() -> impl Strategy<Value = EndUse> {
    prop_oneof![
        Just(EndUse::Apparel),
        Just(EndUse::HomeTextile),
        Just(EndUse::Denim),
        Just(EndUse::Industrial),
    ]
}

prop_compose! {
    fn fabric()(
        material in material(),
        warp in 5u32..120,
        weft in 5u32..120,
        gsm in 30i64..1200,
        width in 20i64..700,
        weave in prop::sample::select(WeaveType::ALL.to_vec()),
        priority in quality_priority(),
        end_use in end_use(),
        warp_type in yarn_type(),
        weft_type in yarn_type(),
        density in prop::option::of((20u32..150, 20u32..150)),
    ) -> FabricSpec {
        let fabric = FabricSpec::new(
            material,
            warp,
            weft,
            Decimal::from(gsm),
            Decimal::from(width),
            weave,
        )
        .with_quality_priority(priority)
        .with_end_use(end_use)
        .with_yarn_types(warp_type, weft_type);

        match density {
            Some((epi, ppi)) => fabric.with_density(epi, ppi),
            None => fabric,
        }
    }
}

prop_compose! {
    fn worker()(
        skill in 1u8..=10,
        skills in (0u8..=10, 0u8..=10, 0u8..=10, 0u8..=10),
        specialization in prop::collection::vec(machine_type(), 0..3),
        preferences in prop::collection::vec(machine_type(), 0..3),
    ) -> WorkerProfile {
        WorkerProfile::new("W-P".to_string(), "Operator".to_string(), skill)
            .with_skills(skills.0, skills.1, skills.2, skills.3)
            .with_specialization(specialization)
            .with_preferences(preferences)
    }
}

/// 包絡寬鬆的織機，排除克重與門幅扣分
fn open_envelope(machine_type: MachineType) -> MachineProfile {
    MachineProfile::new("M-P".to_string(), "Open Loom".to_string(), machine_type)
        .with_limits(500, Decimal::from(5000))
        .with_width_range(Decimal::ZERO, Decimal::from(1000))
}

fn score(machine: &MachineProfile, fabric: &FabricSpec) -> CompatibilityResult {
    let tables = ClassificationTables::default();
    let class = FabricClassifier::new(&tables).classify(fabric);
    let behavior = YarnBehaviorModel::analyze(fabric);
    CompatibilityScorer::default().score(&ScoringContext {
        machine,
        fabric,
        class: &class,
        behavior: &behavior,
    })
}

proptest! {
    #[test]
    fn prop_compatibility_within_bounds(fabric in fabric()) {
        for machine in reference_machines() {
            let result = score(&machine, &fabric);
            let hundred = Decimal::ONE_HUNDRED;

            prop_assert!(result.score >= Decimal::ZERO && result.score <= hundred);
            prop_assert!(result.speed_reduction >= Decimal::ZERO && result.speed_reduction <= hundred);
            prop_assert!(result.quality_risk >= Decimal::ZERO && result.quality_risk <= hundred);
            prop_assert_eq!(result.category, CompatibilityCategory::from_score(result.score));
        }
    }

    #[test]
    fn prop_waterjet_rejects_hydrophilic(
        fabric in fabric(),
        material in prop_oneof![Just(Material::Cotton), Just(Material::Viscose)],
    ) {
        let fabric = FabricSpec { material, ..fabric };
        let result = score(&open_envelope(MachineType::Waterjet), &fabric);

        prop_assert_eq!(result.score, Decimal::ZERO);
        prop_assert_eq!(result.category, CompatibilityCategory::Avoid);
    }

    #[test]
    fn prop_fancy_yarn_favours_rapier_and_shuttle(fabric in fabric()) {
        let weft = fabric.weft_yarn_type;
        let fabric = fabric.with_yarn_types(YarnType::Fancy, weft);

        let routed = [MachineType::Rapier, MachineType::Shuttle]
            .map(|t| score(&open_envelope(t), &fabric).score);
        let others = [MachineType::Airjet, MachineType::Waterjet, MachineType::Projectile]
            .map(|t| score(&open_envelope(t), &fabric).score);

        let worst_routed = routed.iter().min().copied().unwrap_or_default();
        let best_other = others.iter().max().copied().unwrap_or_default();
        prop_assert!(worst_routed >= best_other + Decimal::from(40));
    }

    #[test]
    fn prop_specialization_never_lowers_worker_score(
        fabric in fabric(),
        worker in worker(),
        machine_index in 0usize..5,
    ) {
        let machines = reference_machines();
        let machine = &machines[machine_index];
        let tables = ClassificationTables::default();
        let class = FabricClassifier::new(&tables).classify(&fabric);

        let mut without = worker.clone();
        without.knot_specialization.retain(|t| *t != machine.machine_type);
        let mut with = without.clone();
        with.knot_specialization.push(machine.machine_type);

        let with_score = Recommender::worker_score(
            &with,
            machine,
            &WorkerImpactModel::evaluate(&with, machine, &class),
        );
        let without_score = Recommender::worker_score(
            &without,
            machine,
            &WorkerImpactModel::evaluate(&without, machine, &class),
        );

        prop_assert!(with_score >= without_score);
    }

    #[test]
    fn prop_worker_impact_clamped(fabric in fabric(), worker in worker(), machine_index in 0usize..5) {
        let machines = reference_machines();
        let machine = &machines[machine_index];
        let tables = ClassificationTables::default();
        let class = FabricClassifier::new(&tables).classify(&fabric);
        let impact = WorkerImpactModel::evaluate(&worker, machine, &class);
        let half = Decimal::new(5, 1);

        prop_assert!(impact.efficiency_bonus >= Decimal::ZERO && impact.efficiency_bonus <= half);
        prop_assert!(impact.defect_reduction >= Decimal::ZERO && impact.defect_reduction <= half);
        prop_assert!(impact.speed_increase >= Decimal::ZERO && impact.speed_increase <= Decimal::new(3, 1));
        prop_assert!(impact.setup_time_reduction >= Decimal::ZERO && impact.setup_time_reduction <= half);
    }

    #[test]
    fn prop_feasibility_within_bounds(fabric in fabric(), worker in worker(), machine_index in 0usize..5) {
        let machines = reference_machines();
        let machine = &machines[machine_index];
        let tables = ClassificationTables::default();
        let class = FabricClassifier::new(&tables).classify(&fabric);
        let compatibility = score(machine, &fabric);
        let impact = WorkerImpactModel::evaluate(&worker, machine, &class);

        let constraints = FactoryConstraintResolver::resolve(&compatibility, &impact);

        prop_assert!(constraints.feasibility_score >= Decimal::ZERO);
        prop_assert!(constraints.feasibility_score <= Decimal::ONE_HUNDRED);
        prop_assert!(constraints.speed_reduction <= compatibility.speed_reduction);
        prop_assert!(constraints.quality_risk <= compatibility.quality_risk);
    }

    #[test]
    fn prop_recommend_is_idempotent(fabric in fabric()) {
        let recommender = Recommender::default();
        let machines = reference_machines();
        let workers = reference_workers();

        let first = recommender.recommend(&fabric, &machines, &workers).unwrap();
        let second = recommender.recommend(&fabric, &machines, &workers).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_suitability_within_bounds(fabric in fabric(), worker in worker()) {
        let result = Recommender::default()
            .recommend(&fabric, &reference_machines(), &[worker])
            .unwrap();

        if let Some(recommendation) = result {
            prop_assert!(recommendation.suitability_score <= 100);
            prop_assert!(recommendation.compatibility.category.is_feasible());
            prop_assert!(recommendation.explanation.ends_with('.'));
        }
    }
}
