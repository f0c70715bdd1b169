//! 推薦計算示例

use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;
use weave_alloc::catalog::{reference_machines, reference_workers};
use weave_alloc::types::{Material, QualityPriority, WeaveType, YarnType};
use weave_alloc::{FabricSpec, Recommender};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== 織機 / 擋車工推薦示例 ===\n");

    let fabric = FabricSpec::new(
        Material::Polyester,
        40,
        40,
        Decimal::from(180),
        Decimal::from(150),
        WeaveType::Plain,
    )
    .with_yarn_types(YarnType::Filament, YarnType::Filament)
    .with_quality_priority(QualityPriority::Balanced);

    println!(
        "布料: {}，{}/{} 支，{} GSM，幅寬 {} cm，{}",
        fabric.material,
        fabric.warp_yarn_count,
        fabric.weft_yarn_count,
        fabric.gsm,
        fabric.width,
        fabric.weave_type
    );

    let machines = reference_machines();
    let workers = reference_workers();
    let recommender = Recommender::default();

    println!("\n織機相容性:");
    for result in recommender.evaluate_machines(&fabric, &machines) {
        println!(
            "  - {:<32} 分數 {}  {}",
            result.machine.name,
            result.score,
            result.category.as_str()
        );
    }

    match recommender.recommend(&fabric, &machines, &workers)? {
        Some(recommendation) => {
            println!("\n推薦結果:");
            println!("  織機: {}", recommendation.machine.name);
            println!("  擋車工: {}", recommendation.worker.name);
            println!("  綜合分數: {}", recommendation.suitability_score);
            println!(
                "  可行性: {}",
                recommendation.factory_constraints.feasibility_score
            );
            println!("  說明: {}", recommendation.explanation);
        }
        None => println!("\n沒有可用織機"),
    }

    Ok(())
}
