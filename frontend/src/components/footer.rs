//! 页脚

use leptos::prelude::*;

use crate::components::icons::{Mail, MapPin, Phone};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-neutral text-neutral-content mt-auto">
            <div class="max-w-7xl mx-auto px-4 py-10 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8">
                <div class="space-y-3">
                    <p class="text-lg font-bold">"MobileShop"</p>
                    <p class="text-sm opacity-70">
                        "Your trusted destination for the latest mobile phones and accessories. \
                         Discover premium quality products at unbeatable prices."
                    </p>
                    <div class="flex items-center gap-2 text-xs opacity-70">
                        <MapPin class="h-4 w-4" />
                        "Jakarta, Indonesia"
                    </div>
                </div>

                <div class="space-y-3">
                    <p class="font-semibold">"Quick Links"</p>
                    <ul class="space-y-1 text-sm opacity-70">
                        <li><a class="link link-hover">"Home"</a></li>
                        <li><a class="link link-hover">"About Us"</a></li>
                        <li><a class="link link-hover">"Products"</a></li>
                        <li><a class="link link-hover">"Contact"</a></li>
                    </ul>
                </div>

                <div class="space-y-3">
                    <p class="font-semibold">"Customer Service"</p>
                    <ul class="space-y-1 text-sm opacity-70">
                        <li><a class="link link-hover">"Help Center"</a></li>
                        <li><a class="link link-hover">"Shipping Info"</a></li>
                        <li><a class="link link-hover">"Returns & Exchanges"</a></li>
                        <li><a class="link link-hover">"Size Guide"</a></li>
                    </ul>
                </div>

                <div class="space-y-3">
                    <p class="font-semibold">"Contact Us"</p>
                    <div class="flex items-center gap-2 text-sm opacity-70">
                        <Phone class="h-4 w-4" />
                        "+62 21 1234 5678"
                    </div>
                    <div class="flex items-center gap-2 text-sm opacity-70">
                        <Mail class="h-4 w-4" />
                        "support@mobileshop.com"
                    </div>
                </div>
            </div>

            <div class="border-t border-neutral-content/10">
                <div class="max-w-7xl mx-auto px-4 py-4 text-xs opacity-60">
                    "© 2025 MobileShop. All rights reserved."
                </div>
            </div>
        </footer>
    }
}
