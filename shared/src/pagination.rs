//! 分页状态模块
//!
//! 页码从 1 开始，总数只有在一次成功请求后才是权威值。
//! 总页数等派生值全部由这里计算，界面不做分页算术。

/// 可选的每页数量
pub const PAGE_SIZES: [u32; 4] = [10, 20, 30, 50];

/// 首次加载的默认每页数量
pub const DEFAULT_LIMIT: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 当前页，1-based
    pub page: u32,
    pub limit: u32,
    /// 商品总数，来自最近一次成功响应
    pub total: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            total: 0,
        }
    }
}

impl Pagination {
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// 修改每页数量，同时把页码重置回第 1 页
    ///
    /// 结果集粒度变了，旧页码没有意义。
    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit.max(1);
        self.page = 1;
    }

    /// 规范筛选状态变化后调用：回到第 1 页，保留每页数量
    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// 请求偏移量
    pub fn skip(&self) -> u32 {
        (self.page - 1) * self.limit
    }

    /// 总页数 = ceil(total / limit)，total 为 0 时为 0
    pub fn total_pages(&self) -> u32 {
        self.total.div_ceil(self.limit)
    }

    /// 是否显示分页控件
    pub fn show_controls(&self) -> bool {
        self.total_pages() > 1
    }

    /// 当前页展示区间 (start, end)，1-based 闭区间
    pub fn item_range(&self) -> (u32, u32) {
        let start = self.skip() + 1;
        let end = (self.page * self.limit).min(self.total);
        (start, end)
    }

    /// 页码按钮序列：首尾各保留 1 页，当前页两侧各保留 1 页，
    /// 中间断档用省略号占位。总页数不超过 7 时全部列出。
    pub fn page_items(&self) -> Vec<PageItem> {
        let total = self.total_pages();
        if total <= 7 {
            return (1..=total).map(PageItem::Page).collect();
        }

        let current = self.page.min(total);
        let left_sibling = current.saturating_sub(1).max(1);
        let right_sibling = (current + 1).min(total);
        let show_left_dots = left_sibling > 3;
        let show_right_dots = right_sibling < total - 2;

        let mut items = Vec::new();
        match (show_left_dots, show_right_dots) {
            (false, true) => {
                items.extend((1..=5).map(PageItem::Page));
                items.push(PageItem::Dots);
                items.push(PageItem::Page(total));
            }
            (true, false) => {
                items.push(PageItem::Page(1));
                items.push(PageItem::Dots);
                items.extend((total - 4..=total).map(PageItem::Page));
            }
            _ => {
                items.push(PageItem::Page(1));
                items.push(PageItem::Dots);
                items.extend((left_sibling..=right_sibling).map(PageItem::Page));
                items.push(PageItem::Dots);
                items.push(PageItem::Page(total));
            }
        }
        items
    }
}

/// 页码条中的一个位置：具体页码或省略号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Dots,
}

#[cfg(test)]
mod tests;
