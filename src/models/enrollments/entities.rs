use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 选课模式
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub enum EnrollmentMode {
    Honor, // 荣誉模式（默认）
    Audit, // 旁听模式
}

impl<'de> Deserialize<'de> for EnrollmentMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "honor" => Ok(EnrollmentMode::Honor),
            "audit" => Ok(EnrollmentMode::Audit),
            _ => Err(serde::de::Error::custom(format!(
                "无效的选课模式: '{s}'. 支持的模式: honor, audit"
            ))),
        }
    }
}

impl std::fmt::Display for EnrollmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentMode::Honor => write!(f, "honor"),
            EnrollmentMode::Audit => write!(f, "audit"),
        }
    }
}

impl std::str::FromStr for EnrollmentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "honor" => Ok(EnrollmentMode::Honor),
            "audit" => Ok(EnrollmentMode::Audit),
            _ => Err(format!("Invalid enrollment mode: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub mode: EnrollmentMode,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}
