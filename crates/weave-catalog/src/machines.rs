//! 參考織機清單

use rust_decimal::Decimal;
use weave_core::{
    MachineProfile, MachineType, Material, PowerUsage, SpeedClass, StrengthHandling,
};

use crate::knowledge::archetype;

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// 五台參考織機（依 ID 排序）
pub fn reference_machines() -> Vec<MachineProfile> {
    vec![
        MachineProfile::new(
            "1".to_string(),
            "Picanol OmniPlus 800 Airjet".to_string(),
            MachineType::Airjet,
        )
        .with_max_speed(SpeedClass::High)
        .with_suitable_fabrics(vec![Material::Polyester, Material::Blend])
        .with_strength_handling(StrengthHandling::Thin)
        .with_power_usage(PowerUsage::High)
        .with_limits(800, Decimal::from(250))
        .with_width_range(Decimal::from(140), Decimal::from(340))
        .with_operations(4, 6, Decimal::TWO)
        .with_descriptions(
            texts(&[
                "Cannot handle yarns coarser than 30s",
                "High air consumption with GSM > 200",
                "Not suitable for hairy cotton",
                "Fancy yarns cause frequent stoppages",
            ]),
            archetype(MachineType::Airjet).strengths,
            texts(&[
                "Polyester filament fabrics",
                "Medium weight apparel fabrics",
                "High volume production runs",
                "Simple weave patterns",
            ]),
        ),
        MachineProfile::new(
            "2".to_string(),
            "Dornier LWV 6/S Rapier".to_string(),
            MachineType::Rapier,
        )
        .with_max_speed(SpeedClass::Medium)
        .with_suitable_fabrics(Material::ALL.to_vec())
        .with_strength_handling(StrengthHandling::Medium)
        .with_power_usage(PowerUsage::Medium)
        .with_limits(550, Decimal::from(500))
        .with_width_range(Decimal::from(140), Decimal::from(360))
        .with_operations(6, 7, Decimal::from(4))
        .with_descriptions(
            texts(&[
                "Slower than airjet for simple fabrics",
                "Higher selvedge waste (2-3cm)",
                "Complex setup for fancy yarns",
                "More moving parts = more downtime",
            ]),
            archetype(MachineType::Rapier).strengths,
            texts(&[
                "Fancy yarn fabrics",
                "Multiple color patterns",
                "High GSM home textiles",
                "Complex weave structures",
                "Small batch production",
            ]),
        ),
        MachineProfile::new(
            "3".to_string(),
            "Tsudakoma ZW8100 Waterjet".to_string(),
            MachineType::Waterjet,
        )
        .with_max_speed(SpeedClass::High)
        .with_suitable_fabrics(vec![Material::Polyester])
        .with_strength_handling(StrengthHandling::Thin)
        .with_power_usage(PowerUsage::Low)
        .with_limits(850, Decimal::from(200))
        .with_width_range(Decimal::from(150), Decimal::from(340))
        .with_operations(9, 3, Decimal::new(15, 1))
        .with_descriptions(
            texts(&[
                "Only hydrophobic fibers",
                "Cannot process cotton/viscose",
                "Water treatment system required",
                "Limited to polyester filament",
            ]),
            archetype(MachineType::Waterjet).strengths,
            texts(&[
                "Polyester filament fabrics",
                "Technical textiles",
                "High speed production",
                "Energy conscious production",
            ]),
        ),
        MachineProfile::new(
            "4".to_string(),
            "Gütermann Deimatic 8 Projectile".to_string(),
            MachineType::Projectile,
        )
        .with_max_speed(SpeedClass::Low)
        .with_suitable_fabrics(vec![
            Material::Cotton,
            Material::Polyester,
            Material::Linen,
            Material::Blend,
        ])
        .with_strength_handling(StrengthHandling::Thick)
        .with_power_usage(PowerUsage::Medium)
        .with_limits(350, Decimal::from(600))
        .with_width_range(Decimal::from(180), Decimal::from(540))
        .with_operations(5, 8, Decimal::from(3))
        .with_descriptions(
            texts(&[
                "High projectile wear cost",
                "Not suitable for fine yarns",
                "Lower speed than competitors",
                "Regular projectile replacement needed",
            ]),
            archetype(MachineType::Projectile).strengths,
            texts(&[
                "Very wide fabrics",
                "Heavy technical textiles",
                "Industrial fabrics",
                "High GSM upholstery",
            ]),
        ),
        MachineProfile::new(
            "5".to_string(),
            "Toyota JAT710 Shuttle".to_string(),
            MachineType::Shuttle,
        )
        .with_max_speed(SpeedClass::Low)
        .with_suitable_fabrics(vec![Material::Cotton, Material::Linen, Material::Blend])
        .with_strength_handling(StrengthHandling::Thick)
        .with_power_usage(PowerUsage::High)
        .with_limits(180, Decimal::from(700))
        .with_width_range(Decimal::from(150), Decimal::from(280))
        .with_operations(3, 9, Decimal::from(6))
        .with_descriptions(
            texts(&[
                "Very low speed",
                "High labor requirement",
                "Limited to simple patterns",
                "High noise levels",
            ]),
            archetype(MachineType::Shuttle).strengths,
            texts(&[
                "Denim fabrics",
                "Traditional selvedge fabrics",
                "Heritage textiles",
                "High quality home textiles",
            ]),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_one_machine_per_type() {
        let machines = reference_machines();
        let types: Vec<_> = machines.iter().map(|m| m.machine_type).collect();

        assert_eq!(machines.len(), 5);
        for machine_type in MachineType::ALL {
            assert!(types.contains(&machine_type));
        }
    }

    #[test]
    fn test_envelopes_are_consistent() {
        for machine in reference_machines() {
            assert!(machine.min_width <= machine.max_width, "{}", machine.name);
            assert!(!machine.suitable_fabrics.is_empty());
            assert!(!machine.strengths.is_empty());
        }
    }

    #[test]
    fn test_shuttle_has_highest_gsm_tolerance() {
        let machines = reference_machines();
        let max = machines.iter().max_by_key(|m| m.max_gsm).unwrap();

        assert_eq!(max.machine_type, MachineType::Shuttle);
        assert_eq!(max.max_gsm, Decimal::from(700));
    }

    #[rstest]
    #[case(MachineType::Airjet, 800, 250)]
    #[case(MachineType::Rapier, 550, 500)]
    #[case(MachineType::Waterjet, 850, 200)]
    #[case(MachineType::Projectile, 350, 600)]
    #[case(MachineType::Shuttle, 180, 700)]
    fn test_machine_limits(#[case] machine_type: MachineType, #[case] rpm: u32, #[case] gsm: i64) {
        let machine = reference_machines()
            .into_iter()
            .find(|m| m.machine_type == machine_type)
            .unwrap();

        assert_eq!(machine.max_rpm, rpm);
        assert_eq!(machine.max_gsm, Decimal::from(gsm));
    }
}
