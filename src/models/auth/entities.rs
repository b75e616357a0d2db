use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 已认证用户
///
/// 用户账号由外部身份服务管理，本服务只持有校验通过的
/// JWT Claims 中的身份信息。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct AuthUser {
    pub id: i64,
    pub role: String,
}
