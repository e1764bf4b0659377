//! 防抖定时器封装模块
//!
//! 基于 `gloo-timers` 的一次性定时器。重新调度会先取消未触发的
//! 回调，因此一串快速输入最终只提交最后一次的值；drop 时同样取消。

use gloo_timers::callback::Timeout;

/// 延迟提交控制器
pub struct Debounce {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// 调度回调，取消任何未触发的前次调度
    pub fn schedule<F>(&mut self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(Timeout::new(self.delay_ms, callback));
    }

    /// 取消未触发的回调
    pub fn cancel(&mut self) {
        if let Some(timeout) = self.pending.take() {
            timeout.cancel();
        }
    }
}
