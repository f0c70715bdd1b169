//! 織機相容性評分
//!
//! 每條規則是獨立的純函式，回傳分數增減、風險累加與說明。
//! 評分器自基準分 50 起依序折疊規則清單；所有項目皆為加法，
//! 順序只影響說明文字的排列。

use rust_decimal::Decimal;
use weave_core::{
    CompatibilityCategory, CompatibilityResult, FabricSpec, MachineProfile, MachineType, Material,
};

use crate::classifier::FabricClass;
use crate::yarn_behavior::YarnBehavior;

/// 規則評估所需的輸入
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub machine: &'a MachineProfile,
    pub fabric: &'a FabricSpec,
    pub class: &'a FabricClass,
    pub behavior: &'a YarnBehavior,
}

impl ScoringContext<'_> {
    fn machine_type(&self) -> MachineType {
        self.machine.machine_type
    }

    fn suitability(&self) -> Decimal {
        self.behavior.machine_suitability.get(self.machine_type())
    }
}

/// 單條規則的結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOutcome {
    pub score_delta: Decimal,
    pub speed_reduction: Decimal,
    pub quality_risk: Decimal,
    pub cost_penalty: Decimal,
    pub reason: Option<String>,
}

impl RuleOutcome {
    pub fn score(delta: Decimal) -> Self {
        Self {
            score_delta: delta,
            ..Self::default()
        }
    }

    pub fn with_speed_reduction(mut self, value: i64) -> Self {
        self.speed_reduction += Decimal::from(value);
        self
    }

    pub fn with_quality_risk(mut self, value: i64) -> Self {
        self.quality_risk += Decimal::from(value);
        self
    }

    pub fn with_reason(mut self, reason: String) -> Self {
        self.reason = Some(reason);
        self
    }
}

/// 評分規則
pub type ScoringRule = fn(&ScoringContext<'_>) -> Option<RuleOutcome>;

/// 具名規則
#[derive(Clone, Copy)]
pub struct NamedRule {
    pub name: &'static str,
    pub apply: ScoringRule,
}

impl std::fmt::Debug for NamedRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamedRule").field("name", &self.name).finish()
    }
}

/// 預設規則清單（順序即說明文字順序）
pub const DEFAULT_RULES: &[NamedRule] = &[
    NamedRule { name: "gsm_envelope", apply: gsm_envelope },
    NamedRule { name: "width_envelope", apply: width_envelope },
    NamedRule { name: "yarn_suitability", apply: yarn_suitability },
    NamedRule { name: "yarn_suitability_extremes", apply: yarn_suitability_extremes },
    NamedRule { name: "weave_complexity", apply: weave_complexity },
    NamedRule { name: "hydrophilic_waterjet", apply: hydrophilic_waterjet },
    NamedRule { name: "airjet_polyester", apply: airjet_polyester },
    NamedRule { name: "heavy_airjet", apply: heavy_airjet },
    NamedRule { name: "fancy_yarn_routing", apply: fancy_yarn_routing },
];

/// 克重超出或接近織機上限
pub fn gsm_envelope(ctx: &ScoringContext<'_>) -> Option<RuleOutcome> {
    let gsm = ctx.fabric.gsm;
    let max_gsm = ctx.machine.max_gsm;

    if gsm > max_gsm {
        Some(
            RuleOutcome::score(Decimal::from(-30))
                .with_speed_reduction(40)
                .with_quality_risk(25)
                .with_reason(format!(
                    "GSM {} exceeds machine limit {}",
                    gsm.normalize(),
                    max_gsm.normalize()
                )),
        )
    } else if gsm > max_gsm * Decimal::new(8, 1) {
        Some(
            RuleOutcome::score(Decimal::from(-10))
                .with_speed_reduction(20)
                .with_reason("High GSM requires speed reduction".to_string()),
        )
    } else {
        None
    }
}

/// 門幅不在 [min_width, max_width]
pub fn width_envelope(ctx: &ScoringContext<'_>) -> Option<RuleOutcome> {
    let machine = ctx.machine;
    if machine.width_range_contains(ctx.fabric.width) {
        return None;
    }

    Some(RuleOutcome::score(Decimal::from(-50)).with_reason(format!(
        "Fabric width {}cm incompatible with machine range {}-{}cm",
        ctx.fabric.width.normalize(),
        machine.min_width.normalize(),
        machine.max_width.normalize()
    )))
}

/// 紗線適配基礎項：(適配係數 - 0.5) × 40，恆套用且不產生說明
pub fn yarn_suitability(ctx: &ScoringContext<'_>) -> Option<RuleOutcome> {
    let delta = (ctx.suitability() - Decimal::new(5, 1)) * Decimal::from(40);
    Some(RuleOutcome::score(delta))
}

/// 紗線適配極端值：過低加風險，過高加分
pub fn yarn_suitability_extremes(ctx: &ScoringContext<'_>) -> Option<RuleOutcome> {
    let suitability = ctx.suitability();

    if suitability < Decimal::new(3, 1) {
        Some(
            RuleOutcome::default()
                .with_quality_risk(30)
                .with_speed_reduction(30)
                .with_reason(format!("Yarn type poorly suited for {}", ctx.machine_type())),
        )
    } else if suitability > Decimal::new(8, 1) {
        Some(
            RuleOutcome::score(Decimal::from(15))
                .with_reason(format!("Yarn type ideal for {}", ctx.machine_type())),
        )
    } else {
        None
    }
}

/// 高複雜度織紋（>3）：噴氣扣分，劍桿加分
pub fn weave_complexity(ctx: &ScoringContext<'_>) -> Option<RuleOutcome> {
    if ctx.class.complexity.complexity <= 3 {
        return None;
    }

    let weave = ctx.fabric.weave_type;
    match ctx.machine_type() {
        MachineType::Airjet => Some(
            RuleOutcome::score(Decimal::from(-20))
                .with_speed_reduction(25)
                .with_reason(format!("Complex weave {} challenging for airjet", weave)),
        ),
        MachineType::Rapier => Some(
            RuleOutcome::score(Decimal::TEN)
                .with_reason(format!("Rapier handles complex {} well", weave)),
        ),
        _ => None,
    }
}

/// 噴水織機禁用親水纖維，以 -100 將結果壓到「避免」
pub fn hydrophilic_waterjet(ctx: &ScoringContext<'_>) -> Option<RuleOutcome> {
    let material = ctx.fabric.material;
    if ctx.machine_type() != MachineType::Waterjet || !material.is_hydrophilic() {
        return None;
    }

    Some(
        RuleOutcome::score(Decimal::from(-100))
            .with_reason(format!("Waterjet cannot process {} fibers", material)),
    )
}

pub fn airjet_polyester(ctx: &ScoringContext<'_>) -> Option<RuleOutcome> {
    if ctx.machine_type() != MachineType::Airjet || ctx.fabric.material != Material::Polyester {
        return None;
    }

    Some(
        RuleOutcome::score(Decimal::from(15))
            .with_reason(format!("Airjet excellent for polyester {}", ctx.fabric.end_use)),
    )
}

/// 重磅布上噴氣：不扣分，只累加可行性風險
pub fn heavy_airjet(ctx: &ScoringContext<'_>) -> Option<RuleOutcome> {
    if !ctx.class.is_heavy || ctx.machine_type() != MachineType::Airjet {
        return None;
    }

    Some(
        RuleOutcome::default()
            .with_speed_reduction(30)
            .with_quality_risk(20)
            .with_reason(format!(
                "Heavy fabric {}GSM challenges airjet",
                ctx.fabric.gsm.normalize()
            )),
    )
}

/// 花式紗只能走劍桿或有梭
pub fn fancy_yarn_routing(ctx: &ScoringContext<'_>) -> Option<RuleOutcome> {
    if !ctx.class.has_fancy_yarn || ctx.machine_type().handles_fancy_yarn() {
        return None;
    }

    Some(
        RuleOutcome::score(Decimal::from(-40))
            .with_quality_risk(35)
            .with_reason("Fancy yarn requires rapier or shuttle".to_string()),
    )
}

/// 相容性評分器
pub struct CompatibilityScorer<'r> {
    rules: &'r [NamedRule],
}

impl Default for CompatibilityScorer<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_RULES)
    }
}

impl<'r> CompatibilityScorer<'r> {
    /// 以指定規則清單創建評分器
    pub fn new(rules: &'r [NamedRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[NamedRule] {
        self.rules
    }

    /// 計算單台織機的相容性
    pub fn score(&self, ctx: &ScoringContext<'_>) -> CompatibilityResult {
        let mut score = Decimal::from(50);
        let mut speed_reduction = Decimal::ZERO;
        let mut quality_risk = Decimal::ZERO;
        let mut cost_penalty = Decimal::ZERO;
        let mut reasons = Vec::new();

        for rule in self.rules {
            let Some(outcome) = (rule.apply)(ctx) else {
                continue;
            };

            tracing::trace!(
                "規則 {} 命中 {}: 分數變動 {}",
                rule.name,
                ctx.machine.id,
                outcome.score_delta
            );

            score += outcome.score_delta;
            speed_reduction += outcome.speed_reduction;
            quality_risk += outcome.quality_risk;
            cost_penalty += outcome.cost_penalty;
            if let Some(reason) = outcome.reason {
                reasons.push(reason);
            }
        }

        let score = clamp_percent(score);

        CompatibilityResult {
            machine: ctx.machine.clone(),
            score,
            category: CompatibilityCategory::from_score(score),
            reasons,
            speed_reduction: clamp_percent(speed_reduction),
            quality_risk: clamp_percent(quality_risk),
            cost_penalty: clamp_percent(cost_penalty),
        }
    }
}

/// 截斷到 [0, 100]
pub(crate) fn clamp_percent(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}
