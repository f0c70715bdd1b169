//! 布料分類表配置
//!
//! 克重分級、紗支分級與織紋複雜度係數。引擎只讀取這些資料，
//! 可由 JSON 載入替換，不需改動評分邏輯。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Result, WeaveError, WeaveType};

/// 克重等級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GsmCategory {
    VeryLight,
    Light,
    Medium,
    Heavy,
    VeryHeavy,
}

impl GsmCategory {
    pub fn label(&self) -> &'static str {
        match self {
            GsmCategory::VeryLight => "Very Light",
            GsmCategory::Light => "Light",
            GsmCategory::Medium => "Medium",
            GsmCategory::Heavy => "Heavy",
            GsmCategory::VeryHeavy => "Very Heavy",
        }
    }
}

/// 紗支粗細等級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YarnCategory {
    Fine,
    Medium,
    Coarse,
}

impl YarnCategory {
    pub fn label(&self) -> &'static str {
        match self {
            YarnCategory::Fine => "Fine",
            YarnCategory::Medium => "Medium",
            YarnCategory::Coarse => "Coarse",
        }
    }
}

/// 區間 [min, max)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band<C> {
    pub category: C,
    pub min: Decimal,
    pub max: Decimal,
}

impl<C: Copy> Band<C> {
    pub fn new(category: C, min: i64, max: i64) -> Self {
        Self {
            category,
            min: Decimal::from(min),
            max: Decimal::from(max),
        }
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value < self.max
    }
}

/// 依序找第一個命中的區間，全部未命中時回傳 fallback
pub fn lookup_band<C: Copy>(bands: &[Band<C>], value: Decimal, fallback: C) -> C {
    bands
        .iter()
        .find(|band| band.contains(value))
        .map(|band| band.category)
        .unwrap_or(fallback)
}

/// 織紋複雜度係數
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaveFactor {
    /// 複雜度（1-5）
    pub complexity: u8,
    /// 速度係數
    pub speed_factor: Decimal,
    /// 上機時間（小時）
    pub setup_time: Decimal,
}

impl WeaveFactor {
    pub fn new(complexity: u8, speed_factor: Decimal, setup_time: Decimal) -> Self {
        Self {
            complexity,
            speed_factor,
            setup_time,
        }
    }
}

/// 六種織紋的係數表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaveFactors {
    pub plain: WeaveFactor,
    pub twill: WeaveFactor,
    pub satin: WeaveFactor,
    pub jersey: WeaveFactor,
    pub dobby: WeaveFactor,
    pub jacquard: WeaveFactor,
}

impl WeaveFactors {
    pub fn get(&self, weave_type: WeaveType) -> &WeaveFactor {
        match weave_type {
            WeaveType::Plain => &self.plain,
            WeaveType::Twill => &self.twill,
            WeaveType::Satin => &self.satin,
            WeaveType::Jersey => &self.jersey,
            WeaveType::Dobby => &self.dobby,
            WeaveType::Jacquard => &self.jacquard,
        }
    }
}

impl Default for WeaveFactors {
    fn default() -> Self {
        Self {
            plain: WeaveFactor::new(1, Decimal::ONE, Decimal::ONE),
            twill: WeaveFactor::new(2, Decimal::new(9, 1), Decimal::new(15, 1)),
            satin: WeaveFactor::new(3, Decimal::new(8, 1), Decimal::TWO),
            jersey: WeaveFactor::new(2, Decimal::new(85, 2), Decimal::new(15, 1)),
            dobby: WeaveFactor::new(4, Decimal::new(7, 1), Decimal::from(3)),
            jacquard: WeaveFactor::new(5, Decimal::new(6, 1), Decimal::from(4)),
        }
    }
}

/// 布料分類表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationTables {
    /// 克重分級（依序比對）
    pub gsm_bands: Vec<Band<GsmCategory>>,

    /// 克重全部未命中時的等級
    pub gsm_fallback: GsmCategory,

    /// 紗支分級（以經緯平均支數比對）
    pub yarn_bands: Vec<Band<YarnCategory>>,

    /// 紗支全部未命中時的等級
    pub yarn_fallback: YarnCategory,

    /// 織紋係數
    pub weave_factors: WeaveFactors,

    /// 經密或緯密超過此值視為高密度
    pub dense_threshold: u32,

    /// 未填經緯密時的預設值
    pub default_thread_density: u32,
}

impl Default for ClassificationTables {
    fn default() -> Self {
        Self {
            gsm_bands: vec![
                Band::new(GsmCategory::VeryLight, 0, 100),
                Band::new(GsmCategory::Light, 100, 150),
                Band::new(GsmCategory::Medium, 150, 250),
                Band::new(GsmCategory::Heavy, 250, 350),
                Band::new(GsmCategory::VeryHeavy, 350, 1000),
            ],
            gsm_fallback: GsmCategory::VeryHeavy,
            yarn_bands: vec![
                Band::new(YarnCategory::Fine, 60, 200),
                Band::new(YarnCategory::Medium, 30, 60),
                Band::new(YarnCategory::Coarse, 10, 30),
            ],
            yarn_fallback: YarnCategory::Coarse,
            weave_factors: WeaveFactors::default(),
            dense_threshold: 80,
            default_thread_density: 60,
        }
    }
}

impl ClassificationTables {
    /// 從 JSON 載入並校驗
    pub fn from_json_str(json: &str) -> Result<Self> {
        let tables: Self = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// 輸出為 JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 校驗區間與係數
    pub fn validate(&self) -> Result<()> {
        validate_bands("gsm_bands", &self.gsm_bands)?;
        validate_bands("yarn_bands", &self.yarn_bands)?;

        for weave_type in WeaveType::ALL {
            let factor = self.weave_factors.get(weave_type);
            if !(1..=5).contains(&factor.complexity) {
                return Err(WeaveError::InvalidConfig(format!(
                    "織紋 {} 複雜度需介於 1-5，實際為 {}",
                    weave_type, factor.complexity
                )));
            }
        }

        if self.default_thread_density == 0 {
            return Err(WeaveError::InvalidConfig("預設經緯密必須為正數".to_string()));
        }

        Ok(())
    }
}

fn validate_bands<C: std::fmt::Debug>(name: &str, bands: &[Band<C>]) -> Result<()> {
    if bands.is_empty() {
        return Err(WeaveError::InvalidConfig(format!("{} 不可為空", name)));
    }
    for band in bands {
        if band.min >= band.max {
            return Err(WeaveError::InvalidConfig(format!(
                "{} 區間 {:?} 下限 {} 須小於上限 {}",
                name, band.category, band.min, band.max
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, GsmCategory::VeryLight)]
    #[case(99, GsmCategory::VeryLight)]
    #[case(100, GsmCategory::Light)]
    #[case(180, GsmCategory::Medium)]
    #[case(250, GsmCategory::Heavy)]
    #[case(350, GsmCategory::VeryHeavy)]
    #[case(1000, GsmCategory::VeryHeavy)]
    #[case(2400, GsmCategory::VeryHeavy)]
    fn test_gsm_band_lookup(#[case] gsm: i64, #[case] expected: GsmCategory) {
        let tables = ClassificationTables::default();
        let category = lookup_band(&tables.gsm_bands, Decimal::from(gsm), tables.gsm_fallback);

        assert_eq!(category, expected);
    }

    #[rstest]
    #[case(Decimal::from(80), YarnCategory::Fine)]
    #[case(Decimal::from(60), YarnCategory::Fine)]
    #[case(Decimal::new(595, 1), YarnCategory::Medium)]
    #[case(Decimal::from(30), YarnCategory::Medium)]
    #[case(Decimal::from(12), YarnCategory::Coarse)]
    // 低於最細區間下限與超過上限都歸為粗支
    #[case(Decimal::from(6), YarnCategory::Coarse)]
    #[case(Decimal::from(240), YarnCategory::Coarse)]
    fn test_yarn_band_lookup(#[case] count: Decimal, #[case] expected: YarnCategory) {
        let tables = ClassificationTables::default();
        let category = lookup_band(&tables.yarn_bands, count, tables.yarn_fallback);

        assert_eq!(category, expected);
    }

    #[test]
    fn test_weave_factor_lookup() {
        let factors = WeaveFactors::default();

        assert_eq!(factors.get(WeaveType::Plain).complexity, 1);
        assert_eq!(factors.get(WeaveType::Satin).complexity, 3);
        assert_eq!(factors.get(WeaveType::Jacquard).complexity, 5);
        assert_eq!(factors.get(WeaveType::Jersey).speed_factor, Decimal::new(85, 2));
    }

    #[test]
    fn test_default_tables_are_valid() {
        assert!(ClassificationTables::default().validate().is_ok());
    }

    #[test]
    fn test_json_round_trip_keeps_tables() {
        let tables = ClassificationTables::default();
        let json = tables.to_json_string().unwrap();
        let loaded = ClassificationTables::from_json_str(&json).unwrap();

        assert_eq!(loaded, tables);
    }

    #[test]
    fn test_invalid_band_rejected() {
        let mut tables = ClassificationTables::default();
        tables.gsm_bands[1].max = tables.gsm_bands[1].min;

        let err = tables.validate().unwrap_err();
        assert!(matches!(err, WeaveError::InvalidConfig(_)));
    }

    #[test]
    fn test_invalid_complexity_rejected() {
        let mut tables = ClassificationTables::default();
        tables.weave_factors.dobby.complexity = 9;

        assert!(tables.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = ClassificationTables::from_json_str("{ not json").unwrap_err();

        assert!(matches!(err, WeaveError::Serialization(_)));
    }
}
