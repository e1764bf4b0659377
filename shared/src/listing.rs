//! 商品列表加载周期
//!
//! 状态机：idle -> loading -> {success, error}，任何依赖
//! （页码、每页数量、筛选参数）变化都会重新进入 loading。
//!
//! 商品请求与分类请求刻意不对称：商品请求失败会清空列表并
//! 展示阻断性错误；分类请求失败只是降级为空的筛选选项，不报错。
//!
//! 并发：新请求会取代但不会取消进行中的旧请求，谁后完成谁生效。
//! 慢的旧请求可能覆盖新数据，这是沿用的既有行为。

use crate::Product;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingState {
    pub products: Vec<Product>,
    /// 与 products 同时原子更新，否则总页数计算会失真
    pub total: u32,
    pub loading: bool,
    pub error: Option<String>,
    /// 是否完成过至少一次加载（区分全页加载与后台刷新）
    pub loaded_once: bool,
}

impl ListingState {
    /// 进入 loading：清除旧错误，保留旧列表直到新响应到达
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// 成功：列表与总数一起替换
    pub fn resolve_ok(&mut self, products: Vec<Product>, total: u32) {
        self.products = products;
        self.total = total;
        self.loading = false;
        self.loaded_once = true;
    }

    /// 失败：清空列表、归零总数并记录错误
    pub fn resolve_err(&mut self, message: impl Into<String>) {
        self.products.clear();
        self.total = 0;
        self.error = Some(message.into());
        self.loading = false;
        self.loaded_once = true;
    }

    /// 首次加载中（显示全页加载态而不是内联指示器）
    pub fn is_initial_load(&self) -> bool {
        self.loading && !self.loaded_once
    }
}

/// 分类筛选选项
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryList {
    pub items: Vec<String>,
}

impl CategoryList {
    pub fn resolve_ok(&mut self, items: Vec<String>) {
        self.items = items;
    }

    /// 失败降级：空选项集，不产生阻断性错误
    pub fn resolve_err(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests;
