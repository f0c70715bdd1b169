//! 機型知識庫（僅供顯示，不參與評分）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use weave_core::{MachineType, PowerUsage};

/// 機型檔案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineArchetype {
    pub machine_type: MachineType,
    pub strengths: Vec<String>,
    pub limitations: Vec<String>,
    /// 實務經驗法則
    pub real_world_rules: Vec<String>,
    pub energy_profile: PowerUsage,
    /// 維護複雜度（1-10）
    pub maintenance_complexity: u8,
    /// 上機時間（小時）
    pub setup_time: Decimal,
}

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// 查詢機型檔案
pub fn archetype(machine_type: MachineType) -> MachineArchetype {
    match machine_type {
        MachineType::Airjet => MachineArchetype {
            machine_type,
            strengths: texts(&[
                "High speed production",
                "Best for medium-count yarns",
                "Excellent for plain & simple twill",
                "Low labor requirement",
                "Consistent insertion",
            ]),
            limitations: texts(&[
                "Poor with coarse yarns",
                "High air consumption with heavy fabrics",
                "Not suitable for hairy yarns",
                "High energy cost",
                "Sensitive to yarn quality variations",
                "Cannot handle fancy yarns",
            ]),
            real_world_rules: texts(&[
                "IF yarn count < 30 → avoid airjet",
                "IF GSM > 250 → reduce speed 40%",
                "IF yarn hairiness high → avoid airjet",
                "IF fabric has fancy yarn → forbidden",
                "IF polyester filament → excellent choice",
            ]),
            energy_profile: PowerUsage::High,
            maintenance_complexity: 6,
            setup_time: Decimal::TWO,
        },
        MachineType::Rapier => MachineArchetype {
            machine_type,
            strengths: texts(&[
                "Most flexible machine",
                "Handles all yarn types",
                "Excellent for fancy yarns",
                "Multiple colors possible",
                "High GSM capability",
                "Complex weave patterns",
            ]),
            limitations: texts(&[
                "Slower than airjet",
                "Higher selvedge waste",
                "Longer setup time",
                "Higher maintenance",
                "More moving parts",
            ]),
            real_world_rules: texts(&[
                "IF fabric complexity high → prefer rapier",
                "IF order quantity small → rapier acceptable",
                "IF yarn delicate → rapier preferred",
                "IF multiple colors → rapier ideal",
                "IF GSM > 300 → rapier recommended",
            ]),
            energy_profile: PowerUsage::Medium,
            maintenance_complexity: 7,
            setup_time: Decimal::from(4),
        },
        MachineType::Waterjet => MachineArchetype {
            machine_type,
            strengths: texts(&[
                "Very energy efficient",
                "Extremely high speed",
                "Perfect for polyester filament",
                "Low maintenance",
                "Quiet operation",
            ]),
            limitations: texts(&[
                "Only hydrophobic fibers",
                "Cannot handle cotton/viscose",
                "Not suitable for fancy yarns",
                "Water treatment required",
                "Limited fabric types",
            ]),
            real_world_rules: texts(&[
                "IF yarn hydrophilic → waterjet forbidden",
                "IF polyester filament → waterjet preferred",
                "IF fabric is technical → waterjet ideal",
                "IF moisture sensitive → avoid waterjet",
            ]),
            energy_profile: PowerUsage::Low,
            maintenance_complexity: 3,
            setup_time: Decimal::new(15, 1),
        },
        MachineType::Projectile => MachineArchetype {
            machine_type,
            strengths: texts(&[
                "Very wide fabrics possible",
                "Heavy fabric capability",
                "Stable insertion",
                "Constant energy regardless of width",
                "Good for technical fabrics",
            ]),
            limitations: texts(&[
                "High maintenance cost",
                "Lower speed than jets",
                "Not suitable for delicate yarns",
                "Projectile wear issues",
                "Higher noise levels",
            ]),
            real_world_rules: texts(&[
                "IF fabric width > 300cm → projectile preferred",
                "IF GSM > 400 → projectile allowed",
                "IF technical fabric → projectile good",
                "IF delicate yarn → avoid projectile",
            ]),
            energy_profile: PowerUsage::Medium,
            maintenance_complexity: 8,
            setup_time: Decimal::from(3),
        },
        MachineType::Shuttle => MachineArchetype {
            machine_type,
            strengths: texts(&[
                "Real selvedge formation",
                "Denim heritage fabrics",
                "Very low tension",
                "Excellent for heavy fabrics",
                "Traditional fabric quality",
            ]),
            limitations: texts(&[
                "Very low speed",
                "High labor dependency",
                "High noise levels",
                "Limited to simple patterns",
                "High maintenance",
            ]),
            real_world_rules: texts(&[
                "IF selvedge value important → shuttle allowed",
                "IF denim heritage fabric → shuttle preferred",
                "IF speed not critical → shuttle acceptable",
                "IF traditional quality required → shuttle ideal",
            ]),
            energy_profile: PowerUsage::High,
            maintenance_complexity: 9,
            setup_time: Decimal::from(6),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_archetype() {
        for machine_type in MachineType::ALL {
            let profile = archetype(machine_type);

            assert_eq!(profile.machine_type, machine_type);
            assert!(!profile.strengths.is_empty());
            assert!(!profile.limitations.is_empty());
            assert!((1..=10).contains(&profile.maintenance_complexity));
        }
    }

    #[test]
    fn test_waterjet_is_low_energy() {
        let waterjet = archetype(MachineType::Waterjet);

        assert_eq!(waterjet.energy_profile, PowerUsage::Low);
        assert_eq!(waterjet.setup_time, Decimal::new(15, 1));
    }
}
