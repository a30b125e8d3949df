//! 接口协议定义
//!
//! 每个后端接口对应一个请求类型，通过 [`ApiRequest`] 绑定路径与响应类型。
//! 后端约定所有接口（包括只读查询）都以 POST + JSON 请求体调用。

use crate::{
    ConfigItem, Forward, LoginData, Node, SpeedLimit, Timestamp, Tunnel, User, UserPackage,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// 描述一个接口的请求-响应关系与元数据
pub trait ApiRequest: Serialize {
    /// 响应信封中 `data` 的类型
    type Response: DeserializeOwned;
    /// 相对 `<base>/api/v1/` 的路径，如 `user/login`
    const PATH: &'static str;
}

macro_rules! api_request {
    ($ty:ty => $resp:ty, $path:literal) => {
        impl ApiRequest for $ty {
            type Response = $resp;
            const PATH: &'static str = $path;
        }
    };
}

/// 写操作的响应：后端可能在 `data` 中附带任意提示内容，一律忽略
pub type Ack = serde::de::IgnoredAny;

/// 按 id 操作的请求体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdTarget {
    pub id: i64,
}

// =========================================================
// 认证与验证码
// =========================================================

/// 检查当前是否需要验证码，`data == 0` 表示不需要
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CaptchaCheckRequest {}

api_request!(CaptchaCheckRequest => i32, "captcha/check");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_id: Option<String>,
}

api_request!(LoginRequest => LoginData, "user/login");

/// 当前用户套餐与统计
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UserPackageRequest {}

api_request!(UserPackageRequest => UserPackage, "user/package");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub new_username: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

api_request!(UpdatePasswordRequest => Ack, "user/updatePassword");

// =========================================================
// 用户管理
// =========================================================

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListUsersRequest {}

api_request!(ListUsersRequest => Vec<User>, "user/list");

/// 创建与更新共用的用户表单，更新时携带 `id`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pwd: Option<String>,
    pub status: i32,
    pub flow: i64,
    pub num: i32,
    pub exp_time: Option<Timestamp>,
    pub flow_reset_time: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateUserRequest(pub UserForm);

api_request!(CreateUserRequest => Ack, "user/create");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdateUserRequest(pub UserForm);

api_request!(UpdateUserRequest => Ack, "user/update");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeleteUserRequest(pub IdTarget);

api_request!(DeleteUserRequest => Ack, "user/delete");

// =========================================================
// 节点管理
// =========================================================

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListNodesRequest {}

api_request!(ListNodesRequest => Vec<Node>, "node/list");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateNodeRequest(pub Node);

api_request!(CreateNodeRequest => Ack, "node/create");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdateNodeRequest(pub Node);

api_request!(UpdateNodeRequest => Ack, "node/update");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeleteNodeRequest(pub IdTarget);

api_request!(DeleteNodeRequest => Ack, "node/delete");

// =========================================================
// 隧道管理
// =========================================================

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListTunnelsRequest {}

api_request!(ListTunnelsRequest => Vec<Tunnel>, "tunnel/list");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateTunnelRequest(pub Tunnel);

api_request!(CreateTunnelRequest => Ack, "tunnel/create");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdateTunnelRequest(pub Tunnel);

api_request!(UpdateTunnelRequest => Ack, "tunnel/update");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeleteTunnelRequest(pub IdTarget);

api_request!(DeleteTunnelRequest => Ack, "tunnel/delete");

// =========================================================
// 转发管理
// =========================================================

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListForwardsRequest {}

api_request!(ListForwardsRequest => Vec<Forward>, "forward/list");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateForwardRequest(pub Forward);

api_request!(CreateForwardRequest => Ack, "forward/create");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdateForwardRequest(pub Forward);

api_request!(UpdateForwardRequest => Ack, "forward/update");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeleteForwardRequest(pub IdTarget);

api_request!(DeleteForwardRequest => Ack, "forward/delete");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PauseForwardRequest(pub IdTarget);

api_request!(PauseForwardRequest => Ack, "forward/pause");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeForwardRequest(pub IdTarget);

api_request!(ResumeForwardRequest => Ack, "forward/resume");

// =========================================================
// 限速管理
// =========================================================

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListSpeedLimitsRequest {}

api_request!(ListSpeedLimitsRequest => Vec<SpeedLimit>, "speed-limit/list");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateSpeedLimitRequest(pub SpeedLimit);

api_request!(CreateSpeedLimitRequest => Ack, "speed-limit/create");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdateSpeedLimitRequest(pub SpeedLimit);

api_request!(UpdateSpeedLimitRequest => Ack, "speed-limit/update");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeleteSpeedLimitRequest(pub IdTarget);

api_request!(DeleteSpeedLimitRequest => Ack, "speed-limit/delete");

// =========================================================
// 网站配置
// =========================================================

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListConfigsRequest {}

api_request!(ListConfigsRequest => Vec<ConfigItem>, "config/list");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateConfigsRequest {
    pub configs: Vec<ConfigItem>,
}

api_request!(UpdateConfigsRequest => Ack, "config/update");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_request_serializes_as_object() {
        let body = serde_json::to_value(CaptchaCheckRequest {}).unwrap();
        assert_eq!(body, json!({}));
    }

    #[test]
    fn test_login_request_omits_missing_captcha() {
        let req = LoginRequest {
            username: "admin".into(),
            password: "secret".into(),
            captcha_id: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"username": "admin", "password": "secret"})
        );
    }

    #[test]
    fn test_id_wrappers_are_transparent() {
        let req = PauseForwardRequest(IdTarget { id: 7 });
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"id": 7}));
        assert_eq!(PauseForwardRequest::PATH, "forward/pause");
    }
}
