use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

pub use date::Timestamp;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 后端约定的成功状态码
pub const CODE_SUCCESS: i32 = 0;
/// 客户端侧失败（未配置、网络错误、超时、解析失败）统一使用的状态码
pub const CODE_CLIENT_ERROR: i32 = -1;
/// 传输失败且无法提供更具体原因时的提示
pub const DEFAULT_NETWORK_ERROR: &str = "网络请求失败";

// =========================================================
// 响应信封 (Response Envelope)
// =========================================================

/// 统一响应信封 `{code, msg, data}`
///
/// 所有网络操作（无论传输成功、业务失败还是传输失败）都归一化为此结构。
/// 调用方通过 [`ApiResponse::into_result`] 收窄到成功数据。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<T>,
}

/// 收窄后的失败结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub code: i32,
    pub msg: String,
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.msg)
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: CODE_SUCCESS,
            msg: String::new(),
            data: Some(data),
        }
    }

    pub fn failure(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
        }
    }

    /// 客户端侧失败，`code = -1`
    ///
    /// 空消息会被替换为默认网络错误提示，保证 `msg` 非空。
    pub fn client_error(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        let msg = if msg.trim().is_empty() {
            DEFAULT_NETWORK_ERROR.to_string()
        } else {
            msg
        };
        Self::failure(CODE_CLIENT_ERROR, msg)
    }

    pub fn is_success(&self) -> bool {
        self.code == CODE_SUCCESS
    }

    /// `code == 0` 时返回数据（后端可能返回 `data: null`），否则返回失败信息
    pub fn into_result(self) -> Result<Option<T>, ApiFailure> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ApiFailure {
                code: self.code,
                msg: self.msg,
            })
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            code: self.code,
            msg: self.msg,
            data: self.data.map(f),
        }
    }
}

// =========================================================
// 面板地址 (WebView 宿主推送)
// =========================================================

/// 候选后端地址，由 WebView 宿主推送
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelAddress {
    pub name: String,
    pub address: String,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 登录成功返回的数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub role_id: i32,
    pub name: String,
    #[serde(rename = "requirePasswordChange", default)]
    pub require_password_change: bool,
}

/// 用户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: i64,
    /// 登录名
    pub user: String,
    pub name: String,
    pub role_id: i32,
    pub status: i32,
    /// 流量配额（GB）
    pub flow: i64,
    /// 已用入站流量（字节）
    pub in_flow: i64,
    /// 已用出站流量（字节）
    pub out_flow: i64,
    /// 转发数量上限
    pub num: i32,
    pub exp_time: Option<Timestamp>,
    /// 每月流量重置日，0 表示不重置
    pub flow_reset_time: i32,
    pub created_time: Option<Timestamp>,
}

/// 节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Node {
    pub id: i64,
    pub name: String,
    /// 入口 IP（可为多个，逗号分隔）
    pub ip: String,
    pub server_ip: String,
    pub port_sta: u16,
    pub port_end: u16,
    /// 1 在线，0 离线
    pub status: i32,
    pub version: Option<String>,
}

/// 隧道
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Tunnel {
    pub id: i64,
    pub name: String,
    pub in_node_id: i64,
    pub out_node_id: Option<i64>,
    /// 1 端口转发，2 隧道转发
    #[serde(rename = "type")]
    pub tunnel_type: i32,
    /// 流量计费方式：1 单向，2 双向
    pub flow: i32,
    pub protocol: Option<String>,
    pub traffic_ratio: f64,
    pub status: i32,
}

/// 端口转发
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Forward {
    pub id: i64,
    pub name: String,
    pub tunnel_id: i64,
    pub tunnel_name: Option<String>,
    pub in_port: Option<u16>,
    /// 目标地址（多个以逗号分隔）
    pub remote_addr: String,
    pub strategy: Option<String>,
    pub status: i32,
    pub in_flow: i64,
    pub out_flow: i64,
    pub user_name: Option<String>,
    /// 排序序号
    pub inx: Option<i32>,
}

/// 限速规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeedLimit {
    pub id: i64,
    pub name: String,
    /// Mbps
    pub speed: i64,
    pub tunnel_id: i64,
    pub tunnel_name: Option<String>,
    pub status: i32,
}

/// 网站配置项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigItem {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// 用户的隧道权限
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TunnelPermission {
    pub id: i64,
    pub tunnel_id: i64,
    pub tunnel_name: String,
    pub flow: i64,
    pub in_flow: i64,
    pub out_flow: i64,
    pub num: i32,
    pub exp_time: Option<Timestamp>,
}

/// 当前用户套餐信息（仪表板数据）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPackage {
    pub user_info: User,
    pub tunnel_permissions: Vec<TunnelPermission>,
    pub forwards: Vec<Forward>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_missing_data_is_none() {
        let resp: ApiResponse<i32> = serde_json::from_value(json!({"code": 0, "msg": "ok"})).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.into_result(), Ok(None));
    }

    #[test]
    fn test_envelope_failure_narrows_to_err() {
        let resp: ApiResponse<i32> =
            serde_json::from_value(json!({"code": 500, "msg": "用户不存在", "data": null})).unwrap();
        let failure = resp.into_result().unwrap_err();
        assert_eq!(failure.code, 500);
        assert_eq!(failure.msg, "用户不存在");
    }

    #[test]
    fn test_client_error_never_empty() {
        let resp = ApiResponse::<()>::client_error("  ");
        assert_eq!(resp.code, CODE_CLIENT_ERROR);
        assert_eq!(resp.msg, DEFAULT_NETWORK_ERROR);
    }

    #[test]
    fn test_login_data_wire_names() {
        let data: LoginData = serde_json::from_value(json!({
            "token": "abc",
            "role_id": 0,
            "name": "Admin",
            "requirePasswordChange": true
        }))
        .unwrap();
        assert_eq!(data.role_id, 0);
        assert!(data.require_password_change);
    }

    #[test]
    fn test_panel_address_is_active_defaults_false() {
        let addr: PanelAddress =
            serde_json::from_value(json!({"name": "home", "address": "http://10.0.0.1:6365"})).unwrap();
        assert!(!addr.is_active);
    }

    #[test]
    fn test_tunnel_type_field_rename() {
        let tunnel: Tunnel =
            serde_json::from_value(json!({"id": 3, "name": "t", "type": 2, "inNodeId": 1})).unwrap();
        assert_eq!(tunnel.tunnel_type, 2);
        assert_eq!(tunnel.in_node_id, 1);
    }
}
