use dioxus::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn ChartSkeleton(height: i32) -> Element {
    rsx! {
        div { class: "animate-pulse bg-gray-100 rounded-xl w-full", style: "height:{height}px" }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn LoadFailed() -> Element {
    rsx! {
        div { class: "text-center text-gray-500 py-10",
            p { class: "text-lg", "데이터를 불러오지 못했습니다." }
        }
    }
}
