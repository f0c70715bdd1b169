//! 擋車工檔案模型

use serde::{Deserialize, Serialize};

use crate::MachineType;

/// 擋車工檔案（推薦期間唯讀）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfile {
    /// 工號
    pub id: String,

    /// 姓名
    pub name: String,

    /// 綜合技能等級（1-10）
    pub skill_level: u8,

    /// 接頭專長機型
    pub knot_specialization: Vec<MachineType>,

    /// 偏好機型
    pub preferred_machine_types: Vec<MachineType>,

    /// 噴氣調校（1-10）
    pub air_jet_tuning: u8,

    /// 劍桿上機（1-10）
    pub rapier_setup: u8,

    /// 花式紗處理（1-10）
    pub fancy_yarn_handling: u8,

    /// 高速故障排除（1-10）
    pub high_speed_troubleshooting: u8,

    /// 年資
    pub experience: u32,

    /// 證照（僅供顯示）
    pub certifications: Vec<String>,
}

impl WorkerProfile {
    /// 創建新的擋車工檔案，四項專項技能預設為 5
    pub fn new(id: String, name: String, skill_level: u8) -> Self {
        Self {
            id,
            name,
            skill_level: skill_level.clamp(1, 10),
            knot_specialization: Vec::new(),
            preferred_machine_types: Vec::new(),
            air_jet_tuning: 5,
            rapier_setup: 5,
            fancy_yarn_handling: 5,
            high_speed_troubleshooting: 5,
            experience: 0,
            certifications: Vec::new(),
        }
    }

    /// 建構器模式：設置接頭專長
    pub fn with_specialization(mut self, types: Vec<MachineType>) -> Self {
        self.knot_specialization = types;
        self
    }

    /// 建構器模式：設置偏好機型
    pub fn with_preferences(mut self, types: Vec<MachineType>) -> Self {
        self.preferred_machine_types = types;
        self
    }

    /// 建構器模式：設置四項專項技能
    ///
    /// 順序：噴氣調校、劍桿上機、花式紗處理、高速故障排除
    pub fn with_skills(
        mut self,
        air_jet_tuning: u8,
        rapier_setup: u8,
        fancy_yarn_handling: u8,
        high_speed_troubleshooting: u8,
    ) -> Self {
        self.air_jet_tuning = air_jet_tuning.min(10);
        self.rapier_setup = rapier_setup.min(10);
        self.fancy_yarn_handling = fancy_yarn_handling.min(10);
        self.high_speed_troubleshooting = high_speed_troubleshooting.min(10);
        self
    }

    /// 建構器模式：設置年資
    pub fn with_experience(mut self, years: u32) -> Self {
        self.experience = years;
        self
    }

    /// 建構器模式：設置證照
    pub fn with_certifications(mut self, certifications: Vec<String>) -> Self {
        self.certifications = certifications;
        self
    }

    pub fn specializes_in(&self, machine_type: MachineType) -> bool {
        self.knot_specialization.contains(&machine_type)
    }

    pub fn prefers(&self, machine_type: MachineType) -> bool {
        self.preferred_machine_types.contains(&machine_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_worker() {
        let worker = WorkerProfile::new("W-01".to_string(), "Operator".to_string(), 7);

        assert_eq!(worker.skill_level, 7);
        assert_eq!(worker.air_jet_tuning, 5);
        assert!(!worker.specializes_in(MachineType::Airjet));
    }

    #[test]
    fn test_worker_builder() {
        let worker = WorkerProfile::new("W-02".to_string(), "Operator".to_string(), 12)
            .with_specialization(vec![MachineType::Rapier])
            .with_preferences(vec![MachineType::Shuttle])
            .with_skills(2, 9, 11, 4)
            .with_experience(15);

        // 等級上限為 10
        assert_eq!(worker.skill_level, 10);
        assert_eq!(worker.fancy_yarn_handling, 10);
        assert!(worker.specializes_in(MachineType::Rapier));
        assert!(worker.prefers(MachineType::Shuttle));
        assert!(!worker.prefers(MachineType::Rapier));
    }
}
