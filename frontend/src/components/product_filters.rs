//! 筛选工具栏
//!
//! 搜索框防抖提交；高级筛选在弹层里编辑草稿，确认后一次性应用。
//! 工具栏下方列出活跃筛选标签，可单独移除。

use leptos::prelude::*;
use mobileshop_shared::{FilterDraft, FilterState, SortKey, SortOrder};

use crate::components::icons::{Adjustments, Close, Search};
use crate::debounce::Debounce;

/// 搜索输入的防抖窗口
const SEARCH_DEBOUNCE_MS: u32 = 500;

#[component]
pub fn ProductFilters(
    filters: Signal<FilterState>,
    categories: Signal<Vec<String>>,
    total: Signal<u32>,
    on_change: Callback<FilterState>,
) -> impl IntoView {
    let (search_input, set_search_input) = signal(String::new());
    let debounce = StoredValue::new_local(Debounce::new(SEARCH_DEBOUNCE_MS));

    let (modal_open, set_modal_open) = signal(false);
    let draft = RwSignal::new(FilterDraft::default());
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if modal_open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_search_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        set_search_input.set(value.clone());
        debounce.update_value(|timer| {
            timer.schedule(move || {
                let mut next = filters.get_untracked();
                next.search = value;
                on_change.run(next);
            });
        });
    };

    let open_modal = move |_| {
        draft.set(FilterDraft::from_state(&filters.get_untracked()));
        set_modal_open.set(true);
    };

    let apply_draft = move |_| {
        on_change.run(draft.get_untracked().apply_to(&filters.get_untracked()));
        set_modal_open.set(false);
    };

    // 清空同时覆盖搜索文本，未触发的防抖提交一并作废
    let clear_all = move || {
        debounce.update_value(Debounce::cancel);
        set_search_input.set(String::new());
        on_change.run(FilterState::default());
    };

    // 移除搜索标签：提交空搜索并还原输入框，其余筛选保持不变
    let clear_search = move || {
        debounce.update_value(Debounce::cancel);
        set_search_input.set(String::new());
        let mut next = filters.get_untracked();
        next.search = String::new();
        on_change.run(next);
    };

    let active_count = move || filters.get().active_count();

    view! {
        <div class="space-y-3">
            <div class="flex flex-col sm:flex-row gap-3">
                <label class="input input-bordered flex items-center gap-2 flex-1">
                    <Search class="h-4 w-4 opacity-60" />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search products..."
                        prop:value=search_input
                        on:input=on_search_input
                    />
                </label>

                <button class="btn btn-outline gap-2" on:click=open_modal>
                    <Adjustments class="h-4 w-4" />
                    "Filters"
                    <Show when=move || { active_count() > 0 }>
                        <span class="badge badge-primary badge-sm">{active_count}</span>
                    </Show>
                </button>

                <span class="badge badge-ghost badge-lg self-center whitespace-nowrap">
                    {move || format!("{} products", total.get())}
                </span>
            </div>

            <ActiveFilterTags
                filters=filters
                on_change=on_change
                on_clear_search=Callback::new(move |()| clear_search())
                on_clear_all=Callback::new(move |()| clear_all())
            />
        </div>

        <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_modal_open.set(false)>
            <div class="modal-box max-w-md">
                <h3 class="font-bold text-lg mb-4">"Advanced Filters"</h3>

                <div class="form-control mb-3">
                    <label class="label"><span class="label-text">"Category"</span></label>
                    <select
                        class="select select-bordered w-full"
                        prop:value=move || draft.get().category
                        on:change=move |ev| {
                            draft.update(|d| d.category = event_target_value(&ev));
                        }
                    >
                        <option value="">"All categories"</option>
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|category| {
                                    view! {
                                        <option value=category.clone()>{category.clone()}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="grid grid-cols-2 gap-3 mb-3">
                    <div class="form-control">
                        <label class="label"><span class="label-text">"Sort by"</span></label>
                        <select
                            class="select select-bordered w-full"
                            prop:value=move || draft.get().sort_by.as_str().to_string()
                            on:change=move |ev| {
                                let key = SortKey::parse(&event_target_value(&ev));
                                draft.update(|d| d.sort_by = key);
                            }
                        >
                            {SortKey::ALL
                                .into_iter()
                                .map(|key| {
                                    view! {
                                        <option value=key.as_str()>{key.label()}</option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">"Order"</span></label>
                        <select
                            class="select select-bordered w-full"
                            prop:value=move || draft.get().sort_order.as_str().to_string()
                            on:change=move |ev| {
                                let order = match event_target_value(&ev).as_str() {
                                    "desc" => SortOrder::Desc,
                                    _ => SortOrder::Asc,
                                };
                                draft.update(|d| d.sort_order = order);
                            }
                        >
                            <option value="asc">"Ascending"</option>
                            <option value="desc">"Descending"</option>
                        </select>
                    </div>
                </div>

                <div class="form-control mb-1">
                    <label class="label"><span class="label-text">"Price range"</span></label>
                    <div class="grid grid-cols-2 gap-3">
                        <input
                            type="number"
                            min="0"
                            placeholder="Min"
                            class="input input-bordered w-full"
                            prop:value=move || draft.get().price_min
                            on:input=move |ev| {
                                draft.update(|d| d.price_min = event_target_value(&ev));
                            }
                        />
                        <input
                            type="number"
                            min="0"
                            placeholder="Max"
                            class="input input-bordered w-full"
                            prop:value=move || draft.get().price_max
                            on:input=move |ev| {
                                draft.update(|d| d.price_max = event_target_value(&ev));
                            }
                        />
                    </div>
                </div>
                <Show when=move || draft.get().price_conflict()>
                    <p class="text-warning text-xs mb-2">
                        "Minimum price exceeds maximum; the range will be ignored."
                    </p>
                </Show>

                <div class="modal-action">
                    <button
                        class="btn btn-ghost"
                        on:click=move |_| {
                            clear_all();
                            set_modal_open.set(false);
                        }
                    >
                        "Clear All"
                    </button>
                    <button
                        class="btn btn-primary"
                        class:btn-outline=move || !draft.get().differs_from(&filters.get())
                        on:click=apply_draft
                    >
                        "Apply"
                    </button>
                </div>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}

/// 活跃筛选标签行，每个标签可单独移除
///
/// 搜索标签不计入活跃数量，但同样出现在这一行。
#[component]
fn ActiveFilterTags(
    filters: Signal<FilterState>,
    on_change: Callback<FilterState>,
    on_clear_search: Callback<()>,
    on_clear_all: Callback<()>,
) -> impl IntoView {
    let remove_category = move |_| {
        let mut next = filters.get_untracked();
        next.category = String::new();
        on_change.run(next);
    };
    let remove_price = move |_| {
        let mut next = filters.get_untracked();
        next.price_min = None;
        next.price_max = None;
        on_change.run(next);
    };
    let remove_sort_by = move |_| {
        let mut next = filters.get_untracked();
        next.sort_by = SortKey::default();
        on_change.run(next);
    };
    let remove_sort_order = move |_| {
        let mut next = filters.get_untracked();
        next.sort_order = SortOrder::default();
        on_change.run(next);
    };

    let price_label = move || {
        let state = filters.get();
        match (state.price_min, state.price_max) {
            (Some(min), Some(max)) => format!("Price: {min} - {max}"),
            (Some(min), None) => format!("Price: from {min}"),
            (None, Some(max)) => format!("Price: up to {max}"),
            (None, None) => String::new(),
        }
    };

    view! {
        <Show when=move || {
            let state = filters.get();
            state.has_search() || state.active_count() > 0
        }>
            <div class="flex flex-wrap items-center gap-2">
                <Show when=move || filters.get().has_search()>
                    <span class="badge badge-outline gap-1">
                        {move || format!("\"{}\"", filters.get().search.trim())}
                        <button class="inline-flex" on:click=move |_| on_clear_search.run(())>
                            <Close class="h-3 w-3" />
                        </button>
                    </span>
                </Show>
                <Show when=move || !filters.get().category.is_empty()>
                    <span class="badge badge-outline gap-1">
                        {move || format!("Category: {}", filters.get().category)}
                        <button class="inline-flex" on:click=remove_category>
                            <Close class="h-3 w-3" />
                        </button>
                    </span>
                </Show>
                <Show when=move || filters.get().has_price_range()>
                    <span class="badge badge-outline gap-1">
                        {price_label}
                        <button class="inline-flex" on:click=remove_price>
                            <Close class="h-3 w-3" />
                        </button>
                    </span>
                </Show>
                <Show when=move || filters.get().sort_by != SortKey::default()>
                    <span class="badge badge-outline gap-1">
                        {move || format!("Sort: {}", filters.get().sort_by.label())}
                        <button class="inline-flex" on:click=remove_sort_by>
                            <Close class="h-3 w-3" />
                        </button>
                    </span>
                </Show>
                <Show when=move || filters.get().sort_order != SortOrder::default()>
                    <span class="badge badge-outline gap-1">
                        "Order: Descending"
                        <button class="inline-flex" on:click=remove_sort_order>
                            <Close class="h-3 w-3" />
                        </button>
                    </span>
                </Show>
                <button class="link link-hover text-xs" on:click=move |_| on_clear_all.run(())>
                    "Clear all"
                </button>
            </div>
        </Show>
    }
}
