//! 織機檔案模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Material;

/// 引緯方式（織機類型）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineType {
    /// 劍桿
    Rapier,
    /// 噴氣
    Airjet,
    /// 片梭
    Projectile,
    /// 噴水
    Waterjet,
    /// 有梭
    Shuttle,
}

impl MachineType {
    pub const ALL: [MachineType; 5] = [
        MachineType::Rapier,
        MachineType::Airjet,
        MachineType::Projectile,
        MachineType::Waterjet,
        MachineType::Shuttle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MachineType::Rapier => "rapier",
            MachineType::Airjet => "airjet",
            MachineType::Projectile => "projectile",
            MachineType::Waterjet => "waterjet",
            MachineType::Shuttle => "shuttle",
        }
    }

    /// 能處理花式紗的機型
    pub fn handles_fancy_yarn(&self) -> bool {
        matches!(self, MachineType::Rapier | MachineType::Shuttle)
    }
}

impl fmt::Display for MachineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 速度等級
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedClass {
    Low,
    Medium,
    High,
}

impl fmt::Display for SpeedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpeedClass::Low => "low",
            SpeedClass::Medium => "medium",
            SpeedClass::High => "high",
        };
        f.write_str(label)
    }
}

/// 紗線強度處理能力
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthHandling {
    Thin,
    Medium,
    Thick,
}

impl fmt::Display for StrengthHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthHandling::Thin => "thin",
            StrengthHandling::Medium => "medium",
            StrengthHandling::Thick => "thick",
        };
        f.write_str(label)
    }
}

/// 耗電等級
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUsage {
    Low,
    Medium,
    High,
}

/// 織機檔案（推薦期間唯讀）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineProfile {
    /// 織機ID
    pub id: String,

    /// 名稱
    pub name: String,

    /// 織機類型
    pub machine_type: MachineType,

    /// 最高速度等級
    pub max_speed: SpeedClass,

    /// 適用材質
    pub suitable_fabrics: Vec<Material>,

    /// 紗線強度處理能力
    pub strength_handling: StrengthHandling,

    /// 耗電等級
    pub power_usage: PowerUsage,

    /// 最高轉速
    pub max_rpm: u32,

    /// 最大克重
    pub max_gsm: Decimal,

    /// 最小門幅（cm）
    pub min_width: Decimal,

    /// 最大門幅（cm）
    pub max_width: Decimal,

    /// 能源效率（1-10）
    pub energy_efficiency: u8,

    /// 維護複雜度（1-10）
    pub maintenance_complexity: u8,

    /// 上機時間（小時）
    pub setup_time: Decimal,

    /// 實務限制（僅供顯示）
    pub real_world_limitations: Vec<String>,

    /// 優勢（僅供顯示）
    pub strengths: Vec<String>,

    /// 理想用途（僅供顯示）
    pub ideal_use_cases: Vec<String>,
}

impl MachineProfile {
    /// 創建新的織機檔案
    ///
    /// 門幅範圍預設 150-340cm，最大克重預設 300。
    pub fn new(id: String, name: String, machine_type: MachineType) -> Self {
        Self {
            id,
            name,
            machine_type,
            max_speed: SpeedClass::Medium,
            suitable_fabrics: Material::ALL.to_vec(),
            strength_handling: StrengthHandling::Medium,
            power_usage: PowerUsage::Medium,
            max_rpm: 500,
            max_gsm: Decimal::from(300),
            min_width: Decimal::from(150),
            max_width: Decimal::from(340),
            energy_efficiency: 5,
            maintenance_complexity: 5,
            setup_time: Decimal::TWO,
            real_world_limitations: Vec::new(),
            strengths: Vec::new(),
            ideal_use_cases: Vec::new(),
        }
    }

    /// 建構器模式：設置速度等級
    pub fn with_max_speed(mut self, speed: SpeedClass) -> Self {
        self.max_speed = speed;
        self
    }

    /// 建構器模式：設置適用材質
    pub fn with_suitable_fabrics(mut self, materials: Vec<Material>) -> Self {
        self.suitable_fabrics = materials;
        self
    }

    /// 建構器模式：設置強度處理能力
    pub fn with_strength_handling(mut self, strength: StrengthHandling) -> Self {
        self.strength_handling = strength;
        self
    }

    /// 建構器模式：設置耗電等級
    pub fn with_power_usage(mut self, power: PowerUsage) -> Self {
        self.power_usage = power;
        self
    }

    /// 建構器模式：設置轉速與克重上限
    pub fn with_limits(mut self, max_rpm: u32, max_gsm: Decimal) -> Self {
        self.max_rpm = max_rpm;
        self.max_gsm = max_gsm;
        self
    }

    /// 建構器模式：設置門幅範圍
    pub fn with_width_range(mut self, min_width: Decimal, max_width: Decimal) -> Self {
        self.min_width = min_width;
        self.max_width = max_width;
        self
    }

    /// 建構器模式：設置運維指標
    pub fn with_operations(
        mut self,
        energy_efficiency: u8,
        maintenance_complexity: u8,
        setup_time: Decimal,
    ) -> Self {
        self.energy_efficiency = energy_efficiency;
        self.maintenance_complexity = maintenance_complexity;
        self.setup_time = setup_time;
        self
    }

    /// 建構器模式：設置顯示用文字
    pub fn with_descriptions(
        mut self,
        real_world_limitations: Vec<String>,
        strengths: Vec<String>,
        ideal_use_cases: Vec<String>,
    ) -> Self {
        self.real_world_limitations = real_world_limitations;
        self.strengths = strengths;
        self.ideal_use_cases = ideal_use_cases;
        self
    }

    /// 檢查是否適用該材質
    pub fn supports_material(&self, material: Material) -> bool {
        self.suitable_fabrics.contains(&material)
    }

    /// 檢查門幅是否落在 [min_width, max_width]
    pub fn width_range_contains(&self, width: Decimal) -> bool {
        width >= self.min_width && width <= self.max_width
    }
}
