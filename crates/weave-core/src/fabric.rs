//! 布料規格模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Result, WeaveError};

/// 纖維材質
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    /// 棉
    Cotton,
    /// 聚酯
    Polyester,
    /// 黏膠
    Viscose,
    /// 亞麻
    Linen,
    /// 混紡
    Blend,
}

impl Material {
    pub const ALL: [Material; 5] = [
        Material::Cotton,
        Material::Polyester,
        Material::Viscose,
        Material::Linen,
        Material::Blend,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Cotton => "cotton",
            Material::Polyester => "polyester",
            Material::Viscose => "viscose",
            Material::Linen => "linen",
            Material::Blend => "blend",
        }
    }

    /// 親水性纖維（噴水織機禁用）
    pub fn is_hydrophilic(&self) -> bool {
        matches!(self, Material::Cotton | Material::Viscose)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 織紋組織
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaveType {
    /// 平紋
    Plain,
    /// 斜紋
    Twill,
    /// 緞紋
    Satin,
    /// 針織平紋
    Jersey,
    /// 多臂
    Dobby,
    /// 提花
    Jacquard,
}

impl WeaveType {
    pub const ALL: [WeaveType; 6] = [
        WeaveType::Plain,
        WeaveType::Twill,
        WeaveType::Satin,
        WeaveType::Jersey,
        WeaveType::Dobby,
        WeaveType::Jacquard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeaveType::Plain => "plain",
            WeaveType::Twill => "twill",
            WeaveType::Satin => "satin",
            WeaveType::Jersey => "jersey",
            WeaveType::Dobby => "dobby",
            WeaveType::Jacquard => "jacquard",
        }
    }
}

impl fmt::Display for WeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 品質優先級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityPriority {
    Low,
    Balanced,
    Premium,
}

/// 最終用途
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndUse {
    /// 成衣
    Apparel,
    /// 家紡
    HomeTextile,
    /// 牛仔布
    Denim,
    /// 產業用
    Industrial,
}

impl EndUse {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndUse::Apparel => "apparel",
            EndUse::HomeTextile => "home_textile",
            EndUse::Denim => "denim",
            EndUse::Industrial => "industrial",
        }
    }
}

impl fmt::Display for EndUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndUse::HomeTextile => f.write_str("home textile"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// 紗線結構類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YarnType {
    /// 短纖紗
    Spun,
    /// 長絲
    Filament,
    /// 花式紗
    Fancy,
}

/// 布料規格（單次推薦期間不可變）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FabricSpec {
    /// 材質
    pub material: Material,

    /// 經紗支數
    pub warp_yarn_count: u32,

    /// 緯紗支數
    pub weft_yarn_count: u32,

    /// 克重（g/m²）
    pub gsm: Decimal,

    /// 門幅（cm）
    pub width: Decimal,

    /// 織紋組織
    pub weave_type: WeaveType,

    /// 品質優先級
    pub quality_priority: QualityPriority,

    /// 最終用途
    pub end_use: EndUse,

    /// 經紗類型
    pub warp_yarn_type: YarnType,

    /// 緯紗類型
    pub weft_yarn_type: YarnType,

    /// 經密（根/英寸），未填時由分類表提供預設值
    pub epi: Option<u32>,

    /// 緯密（根/英寸）
    pub ppi: Option<u32>,
}

impl FabricSpec {
    /// 創建新的布料規格
    pub fn new(
        material: Material,
        warp_yarn_count: u32,
        weft_yarn_count: u32,
        gsm: Decimal,
        width: Decimal,
        weave_type: WeaveType,
    ) -> Self {
        Self {
            material,
            warp_yarn_count,
            weft_yarn_count,
            gsm,
            width,
            weave_type,
            quality_priority: QualityPriority::Balanced,
            end_use: EndUse::Apparel,
            warp_yarn_type: YarnType::Spun,
            weft_yarn_type: YarnType::Spun,
            epi: None,
            ppi: None,
        }
    }

    /// 建構器模式：設置品質優先級
    pub fn with_quality_priority(mut self, priority: QualityPriority) -> Self {
        self.quality_priority = priority;
        self
    }

    /// 建構器模式：設置最終用途
    pub fn with_end_use(mut self, end_use: EndUse) -> Self {
        self.end_use = end_use;
        self
    }

    /// 建構器模式：同時設置經緯紗類型
    pub fn with_yarn_types(mut self, warp: YarnType, weft: YarnType) -> Self {
        self.warp_yarn_type = warp;
        self.weft_yarn_type = weft;
        self
    }

    /// 建構器模式：設置經密與緯密
    pub fn with_density(mut self, epi: u32, ppi: u32) -> Self {
        self.epi = Some(epi);
        self.ppi = Some(ppi);
        self
    }

    /// 建構器模式：設置克重
    pub fn with_gsm(mut self, gsm: Decimal) -> Self {
        self.gsm = gsm;
        self
    }

    /// 建構器模式：設置門幅
    pub fn with_width(mut self, width: Decimal) -> Self {
        self.width = width;
        self
    }

    /// 經緯紗平均支數
    pub fn average_yarn_count(&self) -> Decimal {
        (Decimal::from(self.warp_yarn_count) + Decimal::from(self.weft_yarn_count)) / Decimal::TWO
    }

    /// 經紗或緯紗任一為花式紗
    pub fn has_fancy_yarn(&self) -> bool {
        self.warp_yarn_type == YarnType::Fancy || self.weft_yarn_type == YarnType::Fancy
    }

    pub fn epi_or(&self, default: u32) -> u32 {
        self.epi.unwrap_or(default)
    }

    pub fn ppi_or(&self, default: u32) -> u32 {
        self.ppi.unwrap_or(default)
    }

    /// 輸入端的契約檢查（引擎本身不呼叫）
    pub fn validate(&self) -> Result<()> {
        if self.warp_yarn_count == 0 || self.weft_yarn_count == 0 {
            return Err(WeaveError::InvalidInput("紗線支數必須為正數".to_string()));
        }
        if self.gsm <= Decimal::ZERO {
            return Err(WeaveError::InvalidInput(format!("克重必須為正數: {}", self.gsm)));
        }
        if self.width <= Decimal::ZERO {
            return Err(WeaveError::InvalidInput(format!("門幅必須為正數: {}", self.width)));
        }
        if self.epi == Some(0) || self.ppi == Some(0) {
            return Err(WeaveError::InvalidInput("經緯密度必須為正數".to_string()));
        }
        Ok(())
    }
}
