//! API 客户端模块
//!
//! 所有出站请求的唯一通道：拼接基础 URL、附加 Bearer 头、
//! 规范化错误响应体。任何请求收到 401 都会清除本地会话并
//! 强制跳转到登录页，与调用方无关。

use gloo_net::http::Request;
use leptos::prelude::use_context;

use mobileshop_shared::protocol::{
    ApiRequest, CheckoutRequest, HttpMethod, ListCategoriesRequest, ListProductsRequest,
    LogoutRequest, ProfileRequest, products_query,
};
use mobileshop_shared::{
    AuthResponse, BEARER_PREFIX, ErrorBody, FilterState, HEADER_AUTHORIZATION, LoginRequest,
    Pagination, ProductsResponse, RegisterRequest, SuccessResponse, User,
};

use crate::session;

/// 编译期可配置的 API 基础路径
const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// API 错误
///
/// 网络失败、结构化 API 错误与解析失败分开表示；
/// 401 由客户端全局处理后仍会让调用方观察到被拒绝的调用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 网络/传输失败（无响应）
    Network(String),
    /// API 返回的结构化错误 `{ error, code?, details? }`
    Api {
        status: u16,
        message: String,
        code: Option<String>,
    },
    /// 非 2xx 且响应体不符合错误信封
    Status(u16),
    /// 响应解析失败
    Parse(String),
    /// 未认证，会话已被全局清理
    Unauthorized,
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Api { message, .. } => write!(f, "{}", message),
            ApiError::Status(status) => write!(f, "Request failed with status {}", status),
            ApiError::Parse(msg) => write!(f, "Unexpected response: {}", msg),
            ApiError::Unauthorized => write!(f, "Your session has expired, please sign in again"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopApi {
    base_url: String,
}

impl Default for ShopApi {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopApi {
    pub fn new() -> Self {
        let base = option_env!("MOBILESHOP_API_BASE").unwrap_or(DEFAULT_BASE_URL);
        Self::with_base_url(base.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送一个协议定义的请求
    ///
    /// GET 不携带请求体；POST 序列化 `req` 为 JSON。
    async fn send<R: ApiRequest>(
        &self,
        req: &R,
        query: Option<&str>,
    ) -> Result<R::Response, ApiError> {
        let mut url = self.url(R::PATH);
        if let Some(query) = query {
            url.push('?');
            url.push_str(query);
        }

        let mut builder = match R::METHOD {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
        }
        .header("Content-Type", "application/json");

        if R::AUTH {
            if let Some(token) = session::token() {
                let value = format!("{}{}", BEARER_PREFIX, token);
                builder = builder.header(HEADER_AUTHORIZATION, &value);
            }
        }

        let response = match R::METHOD {
            HttpMethod::Get => builder.send().await,
            HttpMethod::Post => {
                builder
                    .json(req)
                    .map_err(|e| ApiError::Parse(e.to_string()))?
                    .send()
                    .await
            }
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();

        // 401 全局拦截：清会话、硬跳转登录页，独立于调用方
        if status == 401 {
            handle_unauthorized();
            return Err(ApiError::Unauthorized);
        }

        if !response.ok() {
            if let Ok(body) = response.json::<ErrorBody>().await {
                return Err(ApiError::Api {
                    status,
                    message: body.error,
                    code: body.code,
                });
            }
            return Err(ApiError::Status(status));
        }

        response
            .json::<R::Response>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// 登录
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let envelope = self.send(credentials, None).await?;
        require_data(envelope)
    }

    /// 注册新账户
    pub async fn register(&self, details: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let envelope = self.send(details, None).await?;
        require_data(envelope)
    }

    /// 结束会话（本地清理由调用方负责，远端失败不阻塞）
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(&LogoutRequest, None).await?;
        Ok(())
    }

    /// 获取当前用户
    pub async fn profile(&self) -> Result<User, ApiError> {
        let envelope = self.send(&ProfileRequest, None).await?;
        require_data(envelope).map(|data| data.user)
    }

    /// 按当前分页与规范筛选状态拉取商品列表
    pub async fn products(
        &self,
        pagination: &Pagination,
        filters: &FilterState,
    ) -> Result<ProductsResponse, ApiError> {
        let query = products_query(pagination, filters);
        self.send(&ListProductsRequest, Some(&query)).await
    }

    /// 拉取分类标签
    pub async fn categories(&self) -> Result<Vec<String>, ApiError> {
        let response = self.send(&ListCategoriesRequest, None).await?;
        Ok(response.categories)
    }

    /// 结算占位接口
    pub async fn checkout(&self) -> Result<String, ApiError> {
        let envelope = self.send(&CheckoutRequest, None).await?;
        Ok(envelope.message)
    }
}

fn require_data<T>(envelope: SuccessResponse<T>) -> Result<T, ApiError> {
    envelope
        .data
        .ok_or_else(|| ApiError::Parse("response envelope is missing data".to_string()))
}

/// 401 清理：清除持久化会话并硬跳转到登录页
fn handle_unauthorized() {
    session::purge();
    web_sys::console::log_1(&"[Api] 401 received. Session purged, redirecting to sign-in.".into());
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(crate::SIGN_IN_PATH);
    }
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> ShopApi {
    use_context::<ShopApi>().expect("ShopApi should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = ShopApi::with_base_url("https://shop.example.com/api/".into());
        assert_eq!(api.url("/products"), "https://shop.example.com/api/products");
        assert_eq!(api.url("products"), "https://shop.example.com/api/products");
    }

    #[test]
    fn error_display_prefers_api_message() {
        let err = ApiError::Api {
            status: 409,
            message: "username already taken".into(),
            code: Some("CONFLICT".into()),
        };
        assert_eq!(err.to_string(), "username already taken");
    }

    #[test]
    fn status_error_fallback_mentions_code() {
        assert_eq!(
            ApiError::Status(502).to_string(),
            "Request failed with status 502"
        );
    }

    #[test]
    fn missing_envelope_data_is_a_parse_error() {
        let envelope: SuccessResponse<AuthResponse> = SuccessResponse {
            message: "ok".into(),
            data: None,
        };
        assert!(matches!(require_data(envelope), Err(ApiError::Parse(_))));
    }
}
