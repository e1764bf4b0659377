//! 首页：商品浏览
//!
//! 规范筛选状态与分页在这里汇合，任何一者变化都触发重新拉取。
//! 进行中的旧请求不取消，谁后完成谁生效。
//! 分类列表只在挂载时拉取一次，失败静默降级为空选项。

use leptos::prelude::*;
use leptos::task::spawn_local;
use mobileshop_shared::{CategoryList, FilterState, ListingState, Pagination};

use crate::api::use_api;
use crate::components::hero::HeroSection;
use crate::components::pagination::PaginationControls;
use crate::components::product_card::ProductCard;
use crate::components::product_filters::ProductFilters;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();
    let listing = RwSignal::new(ListingState::default());
    let categories = RwSignal::new(CategoryList::default());
    let filters = RwSignal::new(FilterState::default());
    // 只承载 page/limit；权威 total 在 listing 里，展示时合并
    let pagination = RwSignal::new(Pagination::default());

    let display_pagination = Signal::derive(move || {
        let mut merged = pagination.get();
        merged.total = listing.get().total;
        merged
    });

    // 商品拉取：跟踪 filters 与 pagination
    let products_api = api.clone();
    Effect::new(move |_| {
        let current_filters = filters.get();
        let current_page = pagination.get();
        let api = products_api.clone();
        listing.update(ListingState::begin);
        spawn_local(async move {
            match api.products(&current_page, &current_filters).await {
                Ok(response) => {
                    listing.update(|state| state.resolve_ok(response.products, response.total));
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[Shop] Product fetch failed: {err}").into(),
                    );
                    listing.update(|state| state.resolve_err(err.to_string()));
                }
            }
        });
    });

    // 分类只在挂载时拉取一次
    let categories_api = api.clone();
    spawn_local(async move {
        match categories_api.categories().await {
            Ok(items) => categories.update(|list| list.resolve_ok(items)),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("[Shop] Category fetch failed, filter options degraded: {err}")
                        .into(),
                );
                categories.update(CategoryList::resolve_err);
            }
        }
    });

    let on_filters_change = Callback::new(move |next: FilterState| {
        if filters.get_untracked() == next {
            return;
        }
        pagination.update(Pagination::reset_page);
        filters.set(next);
    });

    let on_page = Callback::new(move |page: u32| {
        pagination.update(|p| p.set_page(page));
        scroll_to_products();
    });

    let on_limit = Callback::new(move |limit: u32| {
        pagination.update(|p| p.set_limit(limit));
        scroll_to_products();
    });

    let category_options = Signal::derive(move || categories.get().items);
    let result_total = Signal::derive(move || listing.get().total);

    view! {
        <HeroSection />

        <section id="products-section" class="max-w-7xl mx-auto px-4 py-8 space-y-6">
            <div class="flex items-baseline justify-between">
                <h2 class="text-2xl font-bold">"Our Products"</h2>
                <Show when=move || {
                    let state = listing.get();
                    state.loading && state.loaded_once
                }>
                    <span class="loading loading-spinner loading-sm text-primary"></span>
                </Show>
            </div>

            <ProductFilters
                filters=filters.into()
                categories=category_options
                total=result_total
                on_change=on_filters_change
            />

            <Show
                when=move || !listing.get().is_initial_load()
                fallback=|| {
                    view! {
                        <div class="flex items-center justify-center py-24">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                }
            >
                <ProductGrid listing=listing.into() />
            </Show>

            <Show when=move || display_pagination.get().show_controls()>
                <PaginationControls pagination=display_pagination on_page=on_page on_limit=on_limit />
            </Show>
        </section>
    }
}

/// 列表主体：错误告警、空态或商品网格
#[component]
fn ProductGrid(listing: Signal<ListingState>) -> impl IntoView {
    let has_error = move || listing.get().error.is_some();
    let is_empty = move || {
        let state = listing.get();
        state.error.is_none() && !state.loading && state.products.is_empty()
    };

    view! {
        <Show when=has_error>
            <div class="alert alert-error">
                <span>{move || listing.get().error.unwrap_or_default()}</span>
            </div>
        </Show>

        <Show when=is_empty>
            <div class="text-center py-16 space-y-2">
                <p class="text-lg font-medium">"No products found"</p>
                <p class="text-sm text-base-content/60">
                    "Try adjusting your search or filters."
                </p>
            </div>
        </Show>

        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
            <For
                each=move || listing.get().products
                key=|product| product.id
                let:product
            >
                <ProductCard product=product />
            </For>
        </div>
    }
}

/// 翻页后回到商品区域顶部
fn scroll_to_products() {
    if let Some(section) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("products-section"))
    {
        section.scroll_into_view();
    }
}
