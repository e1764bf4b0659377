//! 内联 SVG 图标组件
//!
//! 线条风格，统一 24x24 viewBox，颜色跟随 `currentColor`。

use leptos::prelude::*;

macro_rules! icon {
    ($name:ident, $($path:expr),+ $(,)?) => {
        #[component]
        pub fn $name(#[prop(optional, into)] class: String) -> impl IntoView {
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class=class
                >
                    $(<path d=$path></path>)+
                </svg>
            }
        }
    };
}

icon!(Search, "M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "M21 21l-4.35-4.35");
icon!(Close, "M18 6L6 18", "M6 6l12 12");
icon!(
    Adjustments,
    "M4 6h16",
    "M4 12h16",
    "M4 18h16",
    "M8 4v4",
    "M16 10v4",
    "M10 16v4"
);
icon!(Eye, "M2 12s3.5-7 10-7 10 7 10 7-3.5 7-10 7-10-7-10-7z", "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z");
icon!(
    ShoppingCart,
    "M6 6h15l-1.5 9h-12z",
    "M6 6L5 2H2",
    "M9 20a1 1 0 1 0 0-2 1 1 0 0 0 0 2z",
    "M18 20a1 1 0 1 0 0-2 1 1 0 0 0 0 2z"
);
icon!(Lock, "M5 11h14v10H5z", "M8 11V7a4 4 0 0 1 8 0v4");
icon!(Home, "M3 10l9-7 9 7", "M5 9v12h14V9", "M9 21v-8h6v8");
icon!(Wrench, "M14.7 6.3a4.5 4.5 0 0 0-6.4 5.4L3 17v4h4l5.3-5.3a4.5 4.5 0 0 0 5.4-6.4l-3 3-2.7-2.7 3-3z");
icon!(LogOut, "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "M16 17l5-5-5-5", "M21 12H9");
icon!(ChevronDown, "M6 9l6 6 6-6");
icon!(User, "M20 21a8 8 0 1 0-16 0", "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z");
icon!(MapPin, "M12 21s7-5.1 7-11a7 7 0 1 0-14 0c0 5.9 7 11 7 11z", "M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z");
icon!(Mail, "M4 5h16v14H4z", "M4 7l8 6 8-6");
icon!(Phone, "M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3A19.5 19.5 0 0 1 5.1 13 19.8 19.8 0 0 1 2 4.2 2 2 0 0 1 4 2h3a2 2 0 0 1 2 1.7c.1 1 .4 2 .7 2.9a2 2 0 0 1-.5 2.1L8 9.9a16 16 0 0 0 6 6l1.2-1.2a2 2 0 0 1 2.1-.5c1 .3 2 .6 3 .7a2 2 0 0 1 1.7 2z");
icon!(Storefront, "M3 9l1.5-5h15L21 9", "M3 9h18v2a2.5 2.5 0 0 1-5 0 2.5 2.5 0 0 1-5 0 2.5 2.5 0 0 1-5 0A2.5 2.5 0 0 1 3 11z", "M5 13v8h14v-8", "M9 21v-5h6v5");
