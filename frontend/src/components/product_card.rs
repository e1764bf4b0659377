//! 商品卡片与详情弹层
//!
//! 卡片展示缩略信息；详情弹层带图片选择器与完整字段。
//! "立即购买"按认证状态路由到结算页或登录页。

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use mobileshop_shared::Product;

use crate::auth::use_auth;
use crate::components::icons::{Eye, ShoppingCart};

/// 库存分级文案
fn stock_text(stock: u32) -> &'static str {
    if stock > 50 {
        "In Stock"
    } else if stock > 20 {
        "Limited Stock"
    } else if stock > 0 {
        "Low Stock"
    } else {
        "Out of Stock"
    }
}

/// 库存分级对应的徽章样式
fn stock_badge_class(stock: u32) -> &'static str {
    if stock > 50 {
        "badge badge-success badge-outline"
    } else if stock > 20 {
        "badge badge-warning badge-outline"
    } else if stock > 0 {
        "badge badge-warning"
    } else {
        "badge badge-error"
    }
}

fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// 0-5 连续评分渲染为五格星串
fn star_row(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(5 - filled));
    stars
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (modal_open, set_modal_open) = signal(false);
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

    let out_of_stock = product.stock == 0;
    let on_buy_now = move |_| {
        let target = if auth.state.get_untracked().is_authenticated {
            "/checkout"
        } else {
            crate::SIGN_IN_PATH
        };
        navigate(target, Default::default());
    };
    let on_buy_now_modal = on_buy_now.clone();

    let card_product = product.clone();
    let modal_product = product;

    view! {
        <div class="card bg-base-100 shadow-sm hover:shadow-lg transition-shadow h-full">
            <figure class="h-48 overflow-hidden">
                <img
                    src=card_product.thumbnail.clone()
                    alt=card_product.title.clone()
                    class="object-cover w-full h-full"
                />
            </figure>
            <div class="card-body p-4 gap-2">
                <div class="flex items-start justify-between gap-2">
                    <h3 class="font-medium text-sm line-clamp-2">{card_product.title.clone()}</h3>
                    <button
                        class="btn btn-ghost btn-xs btn-circle text-primary"
                        aria-label="View details"
                        on:click=move |_| set_modal_open.set(true)
                    >
                        <Eye class="h-4 w-4" />
                    </button>
                </div>

                <div class="flex items-center justify-between">
                    <div>
                        <p class="text-lg font-bold text-primary">
                            {format_price(card_product.price)}
                        </p>
                        <p class="text-xs text-base-content/60">
                            <span class="text-warning">{star_row(card_product.rating)}</span>
                            " (" {format!("{:.1}", card_product.rating)} ")"
                        </p>
                    </div>
                    <span class=stock_badge_class(card_product.stock)>
                        {stock_text(card_product.stock)}
                    </span>
                </div>

                <p class="text-xs text-base-content/60 line-clamp-2">
                    {card_product.description.clone()}
                </p>

                <button
                    class="btn btn-primary btn-sm mt-auto gap-2"
                    disabled=out_of_stock
                    on:click=on_buy_now
                >
                    <ShoppingCart class="h-4 w-4" />
                    "Buy Now"
                </button>
            </div>
        </div>

        // 详情弹层
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_modal_open.set(false)>
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg mb-4">{modal_product.title.clone()}</h3>

                <ProductGallery
                    title=modal_product.title.clone()
                    thumbnail=modal_product.thumbnail.clone()
                    images=modal_product.images.clone()
                />

                <div class="divider"></div>

                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <p class="text-sm text-base-content/60">"Price"</p>
                        <p class="text-xl font-bold text-primary">
                            {format_price(modal_product.price)}
                        </p>
                    </div>
                    <div>
                        <p class="text-sm text-base-content/60">"Stock"</p>
                        <span class=stock_badge_class(modal_product.stock)>
                            {format!("{} units left", modal_product.stock)}
                        </span>
                    </div>
                    <div>
                        <p class="text-sm text-base-content/60">"Rating"</p>
                        <p>
                            <span class="text-warning">{star_row(modal_product.rating)}</span>
                            " " {format!("{:.1}/5", modal_product.rating)}
                        </p>
                    </div>
                    <div>
                        <p class="text-sm text-base-content/60">"Brand"</p>
                        <p class="text-sm font-medium">
                            {if modal_product.brand.is_empty() {
                                "Generic".to_string()
                            } else {
                                modal_product.brand.clone()
                            }}
                        </p>
                    </div>
                </div>

                <div class="divider"></div>

                <p class="text-sm text-base-content/60 mb-1">"Description"</p>
                <p class="text-sm whitespace-pre-wrap">{modal_product.description.clone()}</p>

                <div class="flex items-center gap-2 mt-4">
                    <span class="text-sm text-base-content/60">"Category:"</span>
                    <span class="badge badge-outline">{modal_product.category.clone()}</span>
                </div>

                <div class="modal-action">
                    <button
                        class="btn btn-primary flex-1 gap-2"
                        disabled=out_of_stock
                        on:click=on_buy_now_modal
                    >
                        <ShoppingCart class="h-4 w-4" />
                        "Buy Now"
                    </button>
                    <button class="btn btn-ghost" on:click=move |_| set_modal_open.set(false)>
                        "Close"
                    </button>
                </div>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}

/// 详情弹层的图片选择器
#[component]
fn ProductGallery(title: String, thumbnail: String, images: Vec<String>) -> impl IntoView {
    let (current_index, set_current_index) = signal(0usize);

    let gallery = images.clone();
    let current_src = move || {
        gallery
            .get(current_index.get())
            .cloned()
            .unwrap_or_else(|| thumbnail.clone())
    };

    view! {
        <div>
            <figure class="h-72 flex items-center justify-center bg-base-200 rounded-box overflow-hidden">
                <img src=current_src alt=title class="object-contain max-h-full" />
            </figure>
            <Show when={
                let count = images.len();
                move || count > 1
            }>
                <div class="flex justify-center gap-2 mt-2">
                    {images
                        .iter()
                        .enumerate()
                        .map(|(index, image)| {
                            let image = image.clone();
                            view! {
                                <button
                                    class="btn btn-square btn-xs p-0 overflow-hidden"
                                    class:btn-primary=move || current_index.get() == index
                                    on:click=move |_| set_current_index.set(index)
                                >
                                    <img src=image class="object-cover w-full h-full" />
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
