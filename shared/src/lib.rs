use serde::{Deserialize, Serialize};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

mod filters;
mod listing;
mod pagination;
pub mod protocol;

pub use filters::{FilterDraft, FilterState, SortKey, SortOrder};
pub use listing::{CategoryList, ListingState};
pub use pagination::{DEFAULT_LIMIT, PAGE_SIZES, PageItem, Pagination};

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 商品记录
///
/// 从 API 获取后不可变，仅作为只读数据向下传递给展示组件。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    /// 评分，0 到 5 的连续值
    pub rating: f64,
    pub stock: u32,
    #[serde(default)]
    pub brand: String,
    pub category: String,
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// 当前登录用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// 提交前的数据整理：去除首尾空白，邮箱统一小写
    pub fn sanitized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            username: self.username.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// 持久化会话快照
///
/// 令牌与用户记录作为一条记录写入本地存储，读写两端共用
/// 同一个结构，避免两个键各自失配。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub token: String,
    pub user: User,
}

impl SessionSnapshot {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProfileData {
    pub user: User,
}

// =========================================================
// 响应信封 (Response Envelopes)
// =========================================================

/// 成功响应信封 `{ message, data? }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

/// 错误响应信封 `{ error, code?, details? }`
///
/// 缺少此结构的错误响应回退为通用的传输层错误。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_envelope_parses() {
        let body = r#"{
            "message": "login successful",
            "data": {
                "token": "tok-123",
                "user": {
                    "id": "u-1",
                    "name": "Ada",
                    "username": "ada",
                    "email": "ada@example.com",
                    "created_at": "2025-01-01T00:00:00Z",
                    "updated_at": "2025-01-01T00:00:00Z"
                }
            }
        }"#;

        let parsed: SuccessResponse<AuthResponse> = serde_json::from_str(body).unwrap();
        let auth = parsed.data.unwrap();
        assert_eq!(auth.token, "tok-123");
        assert_eq!(auth.user.username, "ada");
    }

    #[test]
    fn envelope_without_data_is_none() {
        let parsed: SuccessResponse<AuthResponse> =
            serde_json::from_str(r#"{"message": "logged out"}"#).unwrap();
        assert!(parsed.data.is_none());
    }

    #[test]
    fn error_body_optional_fields() {
        let parsed: ErrorBody =
            serde_json::from_str(r#"{"error": "invalid credentials"}"#).unwrap();
        assert_eq!(parsed.error, "invalid credentials");
        assert!(parsed.code.is_none());
        assert!(parsed.details.is_none());
    }

    #[test]
    fn product_defaults_for_missing_optionals() {
        let parsed: Product = serde_json::from_str(
            r#"{
                "id": 7,
                "title": "Phone",
                "description": "A phone",
                "price": 199.9,
                "rating": 4.2,
                "stock": 3,
                "category": "smartphones",
                "thumbnail": "t.png"
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.brand, "");
        assert!(parsed.images.is_empty());
    }

    #[test]
    fn session_snapshot_round_trips() {
        let snapshot = SessionSnapshot::new(
            "tok-123",
            User {
                id: "u-1".into(),
                name: "Ada".into(),
                username: "ada".into(),
                email: "ada@example.com".into(),
                created_at: String::new(),
                updated_at: String::new(),
            },
        );

        let stored = serde_json::to_string(&snapshot).unwrap();
        let restored: SessionSnapshot = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, snapshot);
        assert_eq!(restored.token, "tok-123");
        assert_eq!(restored.user.username, "ada");
    }

    #[test]
    fn register_sanitized_trims_and_lowercases_email() {
        let req = RegisterRequest {
            name: "  Ada Lovelace ".into(),
            username: " ada ".into(),
            email: " Ada@Example.COM ".into(),
            password: "secret1".into(),
        };
        let clean = req.sanitized();
        assert_eq!(clean.name, "Ada Lovelace");
        assert_eq!(clean.username, "ada");
        assert_eq!(clean.email, "ada@example.com");
        assert_eq!(clean.password, "secret1");
    }
}
