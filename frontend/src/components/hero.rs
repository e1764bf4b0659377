//! 首页横幅

use leptos::prelude::*;

use crate::components::icons::ShoppingCart;

#[component]
pub fn HeroSection() -> impl IntoView {
    // 滚动到商品区域；区域还没渲染时退到一屏高度
    let on_shop_now = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(section) = window
                .document()
                .and_then(|doc| doc.get_element_by_id("products-section"))
            {
                section.scroll_into_view();
            } else {
                window.scroll_by_with_x_and_y(0.0, window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(800.0));
            }
        }
    };

    view! {
        <section class="hero bg-gradient-to-br from-primary to-secondary text-primary-content">
            <div class="hero-content max-w-7xl w-full flex-col md:flex-row gap-8 py-16">
                <div class="flex-1 space-y-6 text-center">
                    <h1 class="text-4xl md:text-6xl font-extrabold leading-tight">
                        "Discover"
                        <span class="block text-warning">"Various Products"</span>
                    </h1>
                    <p class="text-lg opacity-90 max-w-xl mx-auto">
                        "Explore our extensive marketplace featuring everything from electronics \
                         and furniture to home essentials and lifestyle products from trusted \
                         sellers worldwide."
                    </p>
                    <button class="btn btn-lg rounded-full bg-base-100 text-base-content shadow-xl gap-2" on:click=on_shop_now>
                        <ShoppingCart class="h-5 w-5" />
                        "Shop Now"
                    </button>
                </div>
                <div class="flex-1 flex justify-center">
                    <img
                        src="/featured.png"
                        alt="Featured Products"
                        class="w-full max-w-md drop-shadow-2xl"
                    />
                </div>
            </div>
        </section>
    }
}
