use dioxus::prelude::*;

use crate::shared::types::AppView;

// (label, target view); entries without a view are placeholders
const NAV_ITEMS: [(&str, Option<AppView>); 4] = [
    ("홈", Some(AppView::Dashboard)),
    ("발전소 현황", Some(AppView::PowerPlant)),
    ("데이터 분석", None),
    ("설정", None),
];

#[allow(non_snake_case)]
#[component]
pub fn Header(active: AppView, on_navigate: EventHandler<AppView>) -> Element {
    rsx! {
        header { class: "bg-white border-b border-gray-200 px-6 py-4",
            div { class: "max-w-7xl mx-auto flex items-center justify-between",
                div { class: "flex items-center gap-3",
                    div { class: "w-10 h-10 bg-teal-500 rounded-full flex items-center justify-center",
                        span { class: "text-white font-bold text-lg", "Logo" }
                    }
                    h1 { class: "text-xl font-semibold text-gray-900", "에너지 모니터링 시스템" }
                }
                nav { class: "flex gap-8",
                    {
                        NAV_ITEMS.iter().map(|&(label, target)| {
                            let cls = if target == Some(active) {
                                "text-teal-500 font-semibold"
                            } else {
                                "text-gray-600 hover:text-gray-900"
                            };
                            rsx! {
                                button {
                                    key: "{label}",
                                    class: "{cls}",
                                    onclick: move |_| {
                                        if let Some(view) = target {
                                            on_navigate.call(view);
                                        }
                                    },
                                    "{label}"
                                }
                            }
                        })
                    }
                }
            }
        }
    }
}
