//! 布料分類

use rust_decimal::Decimal;
use serde::Serialize;
use weave_core::{lookup_band, ClassificationTables, FabricSpec, GsmCategory, WeaveFactor, YarnCategory};

/// 經緯密度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Density {
    pub epi: u32,
    pub ppi: u32,
    pub total: u32,
}

/// 布料分類結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FabricClass {
    pub gsm_category: GsmCategory,
    pub yarn_category: YarnCategory,
    pub complexity: WeaveFactor,
    pub density: Density,
    /// 克重 > 250
    pub is_heavy: bool,
    /// 經密或緯密超過高密門檻
    pub is_dense: bool,
    /// 織紋複雜度 > 2
    pub is_complex: bool,
    pub has_fancy_yarn: bool,
}

/// 布料分類器
pub struct FabricClassifier<'a> {
    tables: &'a ClassificationTables,
}

impl<'a> FabricClassifier<'a> {
    pub fn new(tables: &'a ClassificationTables) -> Self {
        Self { tables }
    }

    /// 分類布料
    pub fn classify(&self, fabric: &FabricSpec) -> FabricClass {
        let tables = self.tables;

        let gsm_category = lookup_band(&tables.gsm_bands, fabric.gsm, tables.gsm_fallback);
        let yarn_category = lookup_band(
            &tables.yarn_bands,
            fabric.average_yarn_count(),
            tables.yarn_fallback,
        );
        let complexity = *tables.weave_factors.get(fabric.weave_type);

        let epi = fabric.epi_or(tables.default_thread_density);
        let ppi = fabric.ppi_or(tables.default_thread_density);

        FabricClass {
            gsm_category,
            yarn_category,
            complexity,
            density: Density {
                epi,
                ppi,
                total: epi + ppi,
            },
            is_heavy: fabric.gsm > Decimal::from(250),
            is_dense: epi > tables.dense_threshold || ppi > tables.dense_threshold,
            is_complex: complexity.complexity > 2,
            has_fancy_yarn: fabric.has_fancy_yarn(),
        }
    }
}
