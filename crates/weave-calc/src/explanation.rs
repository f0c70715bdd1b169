//! 推薦說明產生

use rust_decimal::Decimal;
use weave_core::{
    CompatibilityCategory, CompatibilityResult, FabricSpec, FactoryConstraints, MachineType,
    Material, WorkerProfile,
};

use crate::classifier::FabricClass;
use crate::yarn_behavior::YarnBehavior;

/// 說明產生所需的輸入
#[derive(Debug, Clone, Copy)]
pub struct ExplanationInput<'a> {
    pub compatibility: &'a CompatibilityResult,
    pub worker: &'a WorkerProfile,
    pub fabric: &'a FabricSpec,
    pub class: &'a FabricClass,
    pub behavior: &'a YarnBehavior,
    pub constraints: &'a FactoryConstraints,
}

/// 說明產生器
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// 產生完整說明：句子以 ". " 串接並以句號結尾
    pub fn render(input: &ExplanationInput<'_>) -> String {
        let mut sentences = Self::sentences(input);
        if sentences.is_empty() {
            sentences.push(format!(
                "{} with {} provides the best balance of capabilities for this fabric type and quality requirements",
                input.compatibility.machine.name, input.worker.name
            ));
        }
        format!("{}.", sentences.join(". "))
    }

    /// 依優先順序列出條件句：等級總評、機型理由、擋車工、約束、可行性
    pub fn sentences(input: &ExplanationInput<'_>) -> Vec<String> {
        let mut sentences = Vec::new();
        Self::headline(input, &mut sentences);
        Self::machine_reasoning(input, &mut sentences);
        Self::worker_reasoning(input, &mut sentences);
        Self::constraint_reasoning(input, &mut sentences);
        sentences
    }

    fn headline(input: &ExplanationInput<'_>, out: &mut Vec<String>) {
        let machine = &input.compatibility.machine;
        let fabric = input.fabric;

        match input.compatibility.category {
            CompatibilityCategory::Ideal => out.push(format!(
                "{} provides ideal match for this {} {} fabric",
                machine.name, fabric.material, fabric.end_use
            )),
            CompatibilityCategory::Acceptable => out.push(format!(
                "{} can handle this fabric with some adjustments",
                machine.name
            )),
            CompatibilityCategory::Risky => out.push(format!(
                "{} is risky but may be necessary if no alternatives",
                machine.name
            )),
            CompatibilityCategory::Avoid => {}
        }
    }

    fn machine_reasoning(input: &ExplanationInput<'_>, out: &mut Vec<String>) {
        let fabric = input.fabric;
        let class = input.class;

        match input.compatibility.machine.machine_type {
            MachineType::Airjet => {
                if input.behavior.machine_suitability.airjet > Decimal::new(7, 1) {
                    out.push(format!(
                        "Airjet selected for high-speed production capability with {}",
                        fabric.material
                    ));
                } else {
                    out.push(
                        "Airjet chosen despite limitations due to production requirements"
                            .to_string(),
                    );
                }
            }
            MachineType::Rapier => {
                if class.has_fancy_yarn || class.is_complex {
                    let handled = if class.has_fancy_yarn {
                        "fancy yarns"
                    } else {
                        "complex weave patterns"
                    };
                    out.push(format!("Rapier essential for handling {}", handled));
                }
                if fabric.gsm > Decimal::from(300) {
                    out.push(format!(
                        "Rapier better suited for heavy {}GSM fabric",
                        fabric.gsm.normalize()
                    ));
                }
            }
            MachineType::Waterjet => {
                if fabric.material == Material::Polyester {
                    out.push(format!(
                        "Waterjet chosen for energy efficiency with polyester {}",
                        fabric.end_use
                    ));
                }
            }
            MachineType::Projectile => {
                if fabric.width > Decimal::from(300) {
                    out.push(format!(
                        "Projectile required for wide {}cm fabric",
                        fabric.width.normalize()
                    ));
                }
                if fabric.gsm > Decimal::from(400) {
                    out.push(format!(
                        "Projectile handles very heavy {}GSM fabric well",
                        fabric.gsm.normalize()
                    ));
                }
            }
            MachineType::Shuttle => {}
        }
    }

    fn worker_reasoning(input: &ExplanationInput<'_>, out: &mut Vec<String>) {
        let worker = input.worker;
        let machine_type = input.compatibility.machine.machine_type;

        if worker.specializes_in(machine_type) {
            out.push(format!(
                "{}'s {} specialization reduces setup time and defect risk",
                worker.name, machine_type
            ));
        }
        if worker.skill_level >= 8 {
            out.push(format!(
                "Worker's high skill level ({}/10) allows optimal machine performance",
                worker.skill_level
            ));
        }
    }

    fn constraint_reasoning(input: &ExplanationInput<'_>, out: &mut Vec<String>) {
        let constraints = input.constraints;

        if constraints.speed_reduction > Decimal::from(20) {
            out.push(
                "Speed reduction required due to fabric complexity and machine limitations"
                    .to_string(),
            );
        }
        if constraints.quality_risk > Decimal::from(30) {
            out.push("Higher quality risk accepted due to production constraints".to_string());
        }
        if constraints.feasibility_score > Decimal::from(70) {
            out.push("Overall feasibility is good with proper setup and monitoring".to_string());
        }
    }
}
