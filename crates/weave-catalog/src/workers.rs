//! 參考擋車工清單

use weave_core::{MachineType, WorkerProfile};

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// 五位參考擋車工
pub fn reference_workers() -> Vec<WorkerProfile> {
    use MachineType::*;

    vec![
        WorkerProfile::new("1".to_string(), "Rajesh Kumar".to_string(), 9)
            .with_specialization(vec![Rapier, Projectile])
            .with_preferences(vec![Rapier])
            .with_skills(4, 9, 8, 6)
            .with_experience(15)
            .with_certifications(texts(&["Advanced Rapier Setup", "Fancy Yarn Handling"])),
        WorkerProfile::new("2".to_string(), "Maria Silva".to_string(), 8)
            .with_specialization(vec![Airjet, Waterjet])
            .with_preferences(vec![Airjet])
            .with_skills(9, 5, 4, 8)
            .with_experience(12)
            .with_certifications(texts(&["Airjet Optimization", "High Speed Operations"])),
        WorkerProfile::new("3".to_string(), "Ahmed Hassan".to_string(), 7)
            .with_specialization(vec![Rapier, Waterjet])
            .with_preferences(vec![Waterjet, Rapier])
            .with_skills(6, 7, 6, 5)
            .with_experience(10)
            .with_certifications(texts(&["Waterjet Operations", "Polyester Specialist"])),
        WorkerProfile::new("4".to_string(), "Li Wei".to_string(), 6)
            .with_specialization(vec![Projectile])
            .with_preferences(vec![Projectile])
            .with_skills(3, 4, 5, 4)
            .with_experience(8)
            .with_certifications(texts(&["Projectile Maintenance", "Wide Fabric Specialist"])),
        WorkerProfile::new("5".to_string(), "John Smith".to_string(), 8)
            .with_specialization(vec![Shuttle, Rapier])
            .with_preferences(vec![Shuttle])
            .with_skills(2, 7, 6, 3)
            .with_experience(20)
            .with_certifications(texts(&[
                "Traditional Weaving",
                "Denim Specialist",
                "Selvedge Expert",
            ])),
    ]
}
