//! API 协议定义模块
//!
//! 每个端点是一个实现 [`ApiRequest`] 的请求类型，携带
//! 路径、方法、是否附加令牌以及响应类型等元数据；
//! 客户端据此做统一的发送与解析，不再逐端点手写。

use crate::{
    AuthResponse, CategoriesResponse, FilterState, LoginRequest, Pagination, ProductsResponse,
    ProfileData, RegisterRequest, SuccessResponse,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// 请求使用的 HTTP 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// 定义一个 API 端点的请求-响应关系与元数据
pub trait ApiRequest: Serialize {
    /// 该请求对应的响应类型
    type Response: DeserializeOwned;
    /// URL 路径（基础路径之后的部分）
    const PATH: &'static str;
    /// HTTP 方法
    const METHOD: HttpMethod;
    /// 令牌存在时是否附加 Bearer 头
    const AUTH: bool = true;
}

// =========================================================
// 请求定义 (Request Definitions)
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = SuccessResponse<AuthResponse>;
    const PATH: &'static str = "/login";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTH: bool = false;
}

impl ApiRequest for RegisterRequest {
    type Response = SuccessResponse<AuthResponse>;
    const PATH: &'static str = "/register";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTH: bool = false;
}

/// 结束当前会话
#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutRequest;

impl ApiRequest for LogoutRequest {
    type Response = SuccessResponse<()>;
    const PATH: &'static str = "/logout";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTH: bool = false;
}

/// 获取当前登录用户
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileRequest;

impl ApiRequest for ProfileRequest {
    type Response = SuccessResponse<ProfileData>;
    const PATH: &'static str = "/profile";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// 商品列表（查询串由 [`products_query`] 构造）
#[derive(Debug, Serialize, Deserialize)]
pub struct ListProductsRequest;

impl ApiRequest for ListProductsRequest {
    type Response = ProductsResponse;
    const PATH: &'static str = "/products";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// 分类标签列表
#[derive(Debug, Serialize, Deserialize)]
pub struct ListCategoriesRequest;

impl ApiRequest for ListCategoriesRequest {
    type Response = CategoriesResponse;
    const PATH: &'static str = "/categories";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// 结算占位接口
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutRequest;

impl ApiRequest for CheckoutRequest {
    type Response = SuccessResponse<()>;
    const PATH: &'static str = "/checkout";
    const METHOD: HttpMethod = HttpMethod::Post;
}

// =========================================================
// 查询串 (Query String)
// =========================================================

/// 由分页与规范筛选状态构造 `/products` 的查询串
///
/// `limit` 与 `skip` 始终存在；筛选字段遵循
/// [`FilterState::query_params`] 的省略规则，取值做百分号编码。
pub fn products_query(pagination: &Pagination, filters: &FilterState) -> String {
    let mut query = format!("limit={}&skip={}", pagination.limit, pagination.skip());
    for (key, value) in filters.query_params() {
        query.push('&');
        query.push_str(key);
        query.push('=');
        query.push_str(&urlencoding::encode(&value));
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SortKey, SortOrder};

    #[test]
    fn query_always_carries_limit_and_skip() {
        let pagination = Pagination::default();
        let query = products_query(&pagination, &FilterState::default());
        assert_eq!(query, "limit=12&skip=0");
    }

    #[test]
    fn query_reflects_page_offset() {
        let mut pagination = Pagination::default();
        pagination.set_limit(20);
        pagination.set_page(3);
        let query = products_query(&pagination, &FilterState::default());
        assert_eq!(query, "limit=20&skip=40");
    }

    #[test]
    fn search_text_is_percent_encoded() {
        let mut filters = FilterState::default();
        filters.search = "wireless charger 20W".into();
        let query = products_query(&Pagination::default(), &filters);
        assert_eq!(query, "limit=12&skip=0&search=wireless%20charger%2020W");
    }

    #[test]
    fn full_filter_set_serializes_in_order() {
        let mut filters = FilterState::default();
        filters.search = "pro".into();
        filters.category = "laptops".into();
        filters.sort_by = SortKey::Price;
        filters.sort_order = SortOrder::Desc;
        filters.price_min = Some(100.0);
        filters.price_max = Some(2000.0);

        let query = products_query(&Pagination::default(), &filters);
        assert_eq!(
            query,
            "limit=12&skip=0&search=pro&category=laptops&sortBy=price&sortOrder=desc\
             &priceMin=100&priceMax=2000"
        );
    }

    #[test]
    fn inverted_range_never_reaches_the_wire() {
        let mut filters = FilterState::default();
        filters.price_min = Some(900.0);
        filters.price_max = Some(10.0);
        let query = products_query(&Pagination::default(), &filters);
        assert!(!query.contains("priceMin"));
        assert!(!query.contains("priceMax"));
    }

    #[test]
    fn method_and_path_constants() {
        assert_eq!(
            <LoginRequest as ApiRequest>::METHOD.as_str(),
            "POST"
        );
        assert_eq!(<ListProductsRequest as ApiRequest>::PATH, "/products");
        assert!(!<LoginRequest as ApiRequest>::AUTH);
        assert!(!<LogoutRequest as ApiRequest>::AUTH);
        assert!(<ListProductsRequest as ApiRequest>::AUTH);
        assert!(<ProfileRequest as ApiRequest>::AUTH);
    }
}
