use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "types/user.ts")]
pub enum UserRole {
    User,   // 普通员工
    Leader, // 主管
    Admin,  // 管理员
}

impl UserRole {
    pub const USER: &'static str = "user";
    pub const LEADER: &'static str = "leader";
    pub const ADMIN: &'static str = "admin";

    /// 可修改共享配置（薪资、课程、学生名单）的角色
    pub fn elevated_roles() -> &'static [&'static UserRole] {
        &[&Self::Leader, &Self::Admin]
    }

    pub fn is_elevated(&self) -> bool {
        Self::elevated_roles().contains(&self)
    }

    /// 解析角色字符串，未知值一律视为最低权限
    pub fn parse_or_user(s: &str) -> Self {
        s.parse().unwrap_or(UserRole::User)
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(UserRole::parse_or_user(&s))
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::User => write!(f, "{}", UserRole::USER),
            UserRole::Leader => write!(f, "{}", UserRole::LEADER),
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::USER => Ok(UserRole::User),
            UserRole::LEADER => Ok(UserRole::Leader),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 岗位（用于按岗位筛选员工）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "types/user.ts")]
pub enum JobPosition {
    Teacher,
    #[serde(rename = "TA")]
    Ta,
}

impl JobPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobPosition::Teacher => "Teacher",
            JobPosition::Ta => "TA",
        }
    }
}

impl std::fmt::Display for JobPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Teacher" => Ok(JobPosition::Teacher),
            "TA" => Ok(JobPosition::Ta),
            _ => Err(format!("Invalid job position: {s}. Supported: Teacher, TA")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "types/user.ts")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub role: UserRole,
    pub job_position: Option<String>,
    pub full_name: String,
    pub gender: Option<String>,
    pub dob: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 新建用户（已校验、已哈希）
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub job_position: Option<String>,
    pub full_name: String,
    pub gender: Option<String>,
    pub dob: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
}

/// 个人资料更新（只覆盖这四个字段）
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub email: String,
    pub dob: NaiveDate,
    pub full_name: String,
    pub gender: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_falls_back_to_user() {
        let role: UserRole = serde_json::from_str("\"superuser\"").unwrap();
        assert_eq!(role, UserRole::User);
        assert_eq!(UserRole::parse_or_user("leader"), UserRole::Leader);
        assert!("Admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn elevated_roles() {
        assert!(UserRole::Admin.is_elevated());
        assert!(UserRole::Leader.is_elevated());
        assert!(!UserRole::User.is_elevated());
    }

    #[test]
    fn job_position_is_exact_match() {
        assert_eq!("TA".parse::<JobPosition>().unwrap(), JobPosition::Ta);
        assert_eq!(
            "Teacher".parse::<JobPosition>().unwrap(),
            JobPosition::Teacher
        );
        assert!("teacher".parse::<JobPosition>().is_err());
        assert!("Manager".parse::<JobPosition>().is_err());
    }
}
