//! 筛选状态模块
//!
//! 两类输入在这里汇合为一个规范状态 (canonical state)：
//! - 即时搜索文本：由界面防抖后提交
//! - 高级筛选（分类 / 价格区间 / 排序）：先暂存在 [`FilterDraft`]，
//!   用户确认后才一次性写入 [`FilterState`]
//!
//! 规范状态是当前商品查询的唯一依据，派生出发往 API 的查询参数。

use serde::{Deserialize, Serialize};

/// 排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Title,
    Price,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Title, SortKey::Price, SortKey::Rating];

    /// API 查询参数中的取值
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Price => "price",
            SortKey::Rating => "rating",
        }
    }

    /// 界面显示名称
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Title => "Name",
            SortKey::Price => "Price",
            SortKey::Rating => "Rating",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "price" => SortKey::Price,
            "rating" => SortKey::Rating,
            _ => SortKey::Title,
        }
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// 规范筛选状态
///
/// 默认值即"已清空"状态：空搜索、空分类、按名称升序、无价格区间。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub search: String,
    /// 分类标签，空字符串表示不过滤
    pub category: String,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl FilterState {
    /// 活跃筛选数量，用于界面角标显示
    ///
    /// 只基于规范状态计算，与暂存中的草稿无关。
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.category.is_empty() {
            count += 1;
        }
        if self.price_min.is_some() || self.price_max.is_some() {
            count += 1;
        }
        if self.sort_by != SortKey::default() {
            count += 1;
        }
        if self.sort_order != SortOrder::default() {
            count += 1;
        }
        count
    }

    pub fn has_price_range(&self) -> bool {
        self.price_min.is_some() || self.price_max.is_some()
    }

    /// 是否有生效的搜索文本
    ///
    /// 搜索不计入 [`active_count`](Self::active_count)，但它的标签
    /// 与其他筛选标签同行展示，所以需要单独判断。
    pub fn has_search(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// 派生 API 查询参数
    ///
    /// 空值和默认值一律省略。价格区间策略：两端都设置时，只有
    /// min <= max 才会发送，否则两端都静默丢弃；只设置一端则单独发送。
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        if !self.category.is_empty() {
            params.push(("category", self.category.clone()));
        }
        if self.sort_by != SortKey::default() {
            params.push(("sortBy", self.sort_by.as_str().to_string()));
        }
        if self.sort_order != SortOrder::default() {
            params.push(("sortOrder", self.sort_order.as_str().to_string()));
        }

        match (self.price_min, self.price_max) {
            (Some(min), Some(max)) => {
                if min <= max {
                    params.push(("priceMin", format_price(min)));
                    params.push(("priceMax", format_price(max)));
                }
                // min > max：无效区间，两端都不发送
            }
            (Some(min), None) => params.push(("priceMin", format_price(min))),
            (None, Some(max)) => params.push(("priceMax", format_price(max))),
            (None, None) => {}
        }

        params
    }
}

fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as u64)
    } else {
        format!("{value}")
    }
}

/// 高级筛选草稿（暂存状态）
///
/// 价格字段保留原始输入文本，应用时才解析；解析失败或为负的
/// 输入按未设置处理。搜索文本不属于草稿，应用时原样保留。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterDraft {
    pub category: String,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    pub price_min: String,
    pub price_max: String,
}

impl FilterDraft {
    /// 从当前规范状态初始化草稿（打开高级筛选面板时）
    pub fn from_state(state: &FilterState) -> Self {
        Self {
            category: state.category.clone(),
            sort_by: state.sort_by,
            sort_order: state.sort_order,
            price_min: state.price_min.map(format_price).unwrap_or_default(),
            price_max: state.price_max.map(format_price).unwrap_or_default(),
        }
    }

    /// 将草稿应用到规范状态，返回新状态
    ///
    /// 搜索文本保持不变，由防抖提交单独维护。
    pub fn apply_to(&self, current: &FilterState) -> FilterState {
        FilterState {
            search: current.search.clone(),
            category: self.category.clone(),
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            price_min: parse_price(&self.price_min),
            price_max: parse_price(&self.price_max),
        }
    }

    /// 界面校验：两端都有效且 min > max
    pub fn price_conflict(&self) -> bool {
        match (parse_price(&self.price_min), parse_price(&self.price_max)) {
            (Some(min), Some(max)) => min > max,
            _ => false,
        }
    }

    /// 草稿是否与规范状态存在差异（用于"应用"按钮的待定提示）
    pub fn differs_from(&self, state: &FilterState) -> bool {
        self.category != state.category
            || self.sort_by != state.sort_by
            || self.sort_order != state.sort_order
            || parse_price(&self.price_min) != state.price_min
            || parse_price(&self.price_max) != state.price_max
    }
}

/// 解析价格输入：空白返回 None，负数和非法输入也按未设置处理
fn parse_price(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
