//! 会话持久化模块
//!
//! 会话以单条 [`SessionSnapshot`] 记录存放在浏览器 LocalStorage，
//! 令牌与用户记录要么同时存在要么都不存在。写入方有两个：
//! 登录成功（auth 模块）与 401 清理（api 模块的拦截逻辑），
//! 两者在实践中互斥，后写者生效。

use gloo_storage::{LocalStorage, Storage};
use mobileshop_shared::{SessionSnapshot, User};

const SESSION_KEY: &str = "mobileshop_session";

fn snapshot() -> Option<SessionSnapshot> {
    LocalStorage::get(SESSION_KEY).ok()
}

/// 读取持久化的令牌
pub fn token() -> Option<String> {
    snapshot().map(|s| s.token)
}

/// 读取持久化的用户记录
pub fn user() -> Option<User> {
    snapshot().map(|s| s.user)
}

/// 登录/注册成功后保存会话
pub fn store(token: &str, user: &User) {
    let _ = LocalStorage::set(SESSION_KEY, SessionSnapshot::new(token, user.clone()));
}

/// 清除会话（注销或 401）
pub fn purge() {
    LocalStorage::delete(SESSION_KEY);
}
