//! 紗線行為模型
//!
//! 依紗支、紗線結構與纖維材質推估各機型適配係數與斷紗風險。
//! 規則依固定順序套用：細支、粗支、花式紗（覆寫）、親水纖維（禁用噴水）、聚酯（加成）。

use rust_decimal::Decimal;
use serde::Serialize;
use weave_core::{FabricSpec, MachineType, Material};

/// 各機型適配係數 [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MachineSuitability {
    pub airjet: Decimal,
    pub rapier: Decimal,
    pub waterjet: Decimal,
    pub projectile: Decimal,
    pub shuttle: Decimal,
}

impl MachineSuitability {
    pub fn get(&self, machine_type: MachineType) -> Decimal {
        match machine_type {
            MachineType::Airjet => self.airjet,
            MachineType::Rapier => self.rapier,
            MachineType::Waterjet => self.waterjet,
            MachineType::Projectile => self.projectile,
            MachineType::Shuttle => self.shuttle,
        }
    }

    fn clamped(self) -> Self {
        let clamp = |v: Decimal| v.clamp(Decimal::ZERO, Decimal::ONE);
        Self {
            airjet: clamp(self.airjet),
            rapier: clamp(self.rapier),
            waterjet: clamp(self.waterjet),
            projectile: clamp(self.projectile),
            shuttle: clamp(self.shuttle),
        }
    }
}

impl Default for MachineSuitability {
    /// 基準值
    fn default() -> Self {
        Self {
            airjet: Decimal::new(7, 1),
            rapier: Decimal::new(8, 1),
            waterjet: Decimal::new(5, 1),
            projectile: Decimal::new(6, 1),
            shuttle: Decimal::new(7, 1),
        }
    }
}

/// 紗線行為分析結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YarnBehavior {
    /// 相對斷紗風險，不做上限截斷（可能大於 1）
    pub breakage_risk: Decimal,
    pub machine_suitability: MachineSuitability,
    /// 平均支數 > 60
    pub is_fine: bool,
    /// 平均支數 < 30
    pub is_coarse: bool,
    pub has_fancy_yarn: bool,
}

/// 紗線行為模型
pub struct YarnBehaviorModel;

impl YarnBehaviorModel {
    /// 分析紗線行為
    pub fn analyze(fabric: &FabricSpec) -> YarnBehavior {
        let avg_count = fabric.average_yarn_count();
        let is_fine = avg_count > Decimal::from(60);
        let is_coarse = avg_count < Decimal::from(30);
        let has_fancy_yarn = fabric.has_fancy_yarn();

        let mut breakage_risk = Decimal::new(3, 1);
        let mut s = MachineSuitability::default();

        // 細支紗
        if is_fine {
            breakage_risk += Decimal::new(4, 1);
            s.airjet -= Decimal::new(5, 1);
            s.rapier -= Decimal::new(2, 1);
        }

        // 粗支紗
        if is_coarse {
            s.airjet -= Decimal::new(7, 1);
            s.rapier -= Decimal::new(1, 1);
            s.projectile -= Decimal::new(2, 1);
        }

        // 花式紗：直接覆寫前兩步對同一機型的調整
        if has_fancy_yarn {
            s.airjet = Decimal::new(1, 1);
            s.waterjet = Decimal::new(1, 1);
            s.projectile = Decimal::new(3, 1);
            s.rapier = Decimal::new(9, 1);
            s.shuttle = Decimal::new(8, 1);
            breakage_risk += Decimal::new(3, 1);
        }

        // 親水纖維不可上噴水織機
        if fabric.material.is_hydrophilic() {
            s.waterjet = Decimal::ZERO;
        }

        if fabric.material == Material::Polyester {
            s.waterjet += Decimal::new(3, 1);
            s.airjet += Decimal::new(2, 1);
        }

        YarnBehavior {
            breakage_risk,
            machine_suitability: s.clamped(),
            is_fine,
            is_coarse,
            has_fancy_yarn,
        }
    }
}
