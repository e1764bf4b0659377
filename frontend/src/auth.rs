//! 认证模块
//!
//! 管理进程级会话状态，与路由系统解耦。
//! 初始状态从持久化存储水合：令牌存在即乐观标记为已认证，
//! 不向服务器复验；过期会话会在下一次 API 调用的 401 处被纠正。

use leptos::prelude::*;
use mobileshop_shared::{LoginRequest, RegisterRequest, User};

use crate::api::{ApiError, ShopApi};
use crate::session;

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 当前用户（仅在认证成功后存在）
    pub user: Option<User>,
    /// 是否已认证
    pub is_authenticated: bool,
    /// 是否正在初始化
    pub is_loading: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文，初始为加载中
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            is_loading: true,
            ..AuthState::default()
        });
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由守卫注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从 LocalStorage 读取令牌与用户记录；令牌存在即视为已认证。
pub fn init_auth(ctx: &AuthContext) {
    let token = session::token();
    let user = session::user();
    ctx.set_state.update(|state| {
        state.is_authenticated = token.is_some();
        state.user = user;
        state.is_loading = false;
    });
}

/// 登录并持久化会话
pub async fn login(
    ctx: &AuthContext,
    api: &ShopApi,
    credentials: &LoginRequest,
) -> Result<(), ApiError> {
    let auth = api.login(credentials).await?;
    session::store(&auth.token, &auth.user);
    ctx.set_state.update(|state| {
        state.user = Some(auth.user);
        state.is_authenticated = true;
    });
    Ok(())
}

/// 注册新账户并持久化会话
pub async fn register(
    ctx: &AuthContext,
    api: &ShopApi,
    details: &RegisterRequest,
) -> Result<(), ApiError> {
    let auth = api.register(&details.sanitized()).await?;
    session::store(&auth.token, &auth.user);
    ctx.set_state.update(|state| {
        state.user = Some(auth.user);
        state.is_authenticated = true;
    });
    Ok(())
}

/// 注销
///
/// 远端调用失败也无条件清除本地会话与内存状态。
pub async fn logout(ctx: &AuthContext, api: &ShopApi) {
    let _ = api.logout().await;
    session::purge();
    ctx.set_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
    });
}
