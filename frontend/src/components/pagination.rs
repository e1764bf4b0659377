//! 分页控件
//!
//! 展示区间文案、每页数量选择器和窗口化页码条。
//! 页码算术都在共享层，这里只做渲染和事件转发。

use leptos::prelude::*;
use mobileshop_shared::{PAGE_SIZES, PageItem, Pagination};

#[component]
pub fn PaginationControls(
    pagination: Signal<Pagination>,
    on_page: Callback<u32>,
    on_limit: Callback<u32>,
) -> impl IntoView {
    let range_label = move || {
        let p = pagination.get();
        let (start, end) = p.item_range();
        format!("Showing {start}-{end} of {} products", p.total)
    };

    let on_limit_change = move |ev: leptos::ev::Event| {
        if let Ok(limit) = event_target_value(&ev).parse::<u32>() {
            on_limit.run(limit);
        }
    };

    view! {
        <div class="flex flex-col sm:flex-row items-center justify-between gap-4 py-6">
            <p class="text-sm text-base-content/60">{range_label}</p>

            <div class="join">
                <button
                    class="join-item btn btn-sm"
                    disabled=move || pagination.get().page <= 1
                    on:click=move |_| {
                        let p = pagination.get_untracked();
                        on_page.run(p.page - 1);
                    }
                >
                    "«"
                </button>
                {move || {
                    let p = pagination.get();
                    p.page_items()
                        .into_iter()
                        .map(|item| match item {
                            PageItem::Page(page) => {
                                let active = page == p.page;
                                view! {
                                    <button
                                        class="join-item btn btn-sm"
                                        class:btn-primary=active
                                        on:click=move |_| on_page.run(page)
                                    >
                                        {page}
                                    </button>
                                }
                                    .into_any()
                            }
                            PageItem::Dots => {
                                view! {
                                    <button class="join-item btn btn-sm btn-disabled">
                                        "…"
                                    </button>
                                }
                                    .into_any()
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="join-item btn btn-sm"
                    disabled=move || {
                        let p = pagination.get();
                        p.page >= p.total_pages()
                    }
                    on:click=move |_| {
                        let p = pagination.get_untracked();
                        on_page.run(p.page + 1);
                    }
                >
                    "»"
                </button>
            </div>

            <label class="flex items-center gap-2 text-sm">
                <span class="text-base-content/60">"Per page"</span>
                <select
                    class="select select-bordered select-sm"
                    prop:value=move || pagination.get().limit.to_string()
                    on:change=on_limit_change
                >
                    {PAGE_SIZES
                        .into_iter()
                        .map(|size| {
                            view! {
                                <option value=size.to_string()>{size}</option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}
