use dioxus::prelude::*;

use dioxus::logger::tracing::debug;

use crate::shared::plant_list::{self, ViewState, PAGE_SIZE};
use crate::shared::types::PlantRecord;
use crate::utils::format::{format_megawatts, format_percent};

const COLUMNS: [&str; 6] = ["발전소명", "위치", "유형", "설비용량", "가동률", "상태"];

#[allow(non_snake_case)]
#[component]
pub fn PlantListView(plants: Vec<PlantRecord>) -> Element {
    let mut state = use_signal(ViewState::default);

    // Re-derived on every render from (plants, state)
    let current = state.read().clone();
    let page = plant_list::derive(&plants, &current, PAGE_SIZE);
    let page_count = page.page_count;
    let has_prev = page.has_prev();
    let has_next = page.has_next();

    rsx! {
        div { class: "bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden",
            div { class: "flex items-center justify-between p-6 border-b border-gray-200",
                h3 { class: "text-lg font-semibold text-gray-900", "발전소 상세 목록" }
                div { class: "flex items-center gap-3",
                    input {
                        r#type: "text",
                        placeholder: "발전소명 검색",
                        value: "{current.search_term}",
                        class: "pl-4 pr-4 py-2 border border-gray-200 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-teal-500",
                        oninput: move |evt: FormEvent| {
                            let next = state.read().clone().on_search_change(evt.value());
                            debug!("[plant_table] search {:?}", next.search_term);
                            state.set(next);
                        },
                    }
                    button { class: "flex items-center gap-2 px-4 py-2 border border-gray-200 rounded-lg text-sm hover:bg-gray-50", "필터" }
                }
            }

            div { class: "overflow-x-auto",
                table { class: "w-full",
                    thead {
                        tr { class: "border-b border-gray-200",
                            for col in COLUMNS {
                                th { key: "{col}", class: "text-left py-3 px-4 text-sm font-semibold text-gray-600", "{col}" }
                            }
                        }
                    }
                    tbody {
                        for plant in page.items.iter() {
                            PlantRow { key: "{plant.id}", plant: (*plant).clone() }
                        }
                    }
                }
                if page.items.is_empty() {
                    div { class: "py-10 text-center text-sm text-gray-500", "검색 결과가 없습니다" }
                }
            }

            // Pagination
            div { class: "flex items-center justify-between mt-6 p-6",
                div { class: "text-sm text-gray-600",
                    "총 {page.total_count}개 중 {page.range_start}-{page.range_end}개 표시"
                }
                div { class: "flex items-center gap-2",
                    button {
                        class: "p-2 border border-gray-200 rounded-lg text-sm hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: !has_prev,
                        onclick: move |_| {
                            let next = state.read().clone().on_page_change(-1, page_count);
                            state.set(next);
                        },
                        "‹"
                    }
                    span { class: "px-4 py-2 text-sm text-gray-600", "{page.page} / {page_count}" }
                    button {
                        class: "p-2 border border-gray-200 rounded-lg text-sm hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: !has_next,
                        onclick: move |_| {
                            let next = state.read().clone().on_page_change(1, page_count);
                            state.set(next);
                        },
                        "›"
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn PlantRow(plant: PlantRecord) -> Element {
    let type_class = plant.plant_type.badge_class();
    let status_class = if plant.is_operating() {
        "bg-green-50 text-green-600"
    } else {
        "bg-yellow-50 text-yellow-600"
    };
    rsx! {
        tr { class: "border-b border-gray-100 hover:bg-gray-50",
            td { class: "py-4 px-4",
                div { class: "font-medium text-gray-900", "{plant.name}" }
                div { class: "text-xs text-gray-500", "운영사: {plant.operator}" }
            }
            td { class: "py-4 px-4 text-sm text-gray-600", "{plant.location}" }
            td { class: "py-4 px-4",
                span { class: "px-3 py-1 rounded-full text-xs font-medium {type_class}", "{plant.plant_type.label()}" }
            }
            td { class: "py-4 px-4 text-sm font-medium text-gray-900", "{format_megawatts(plant.capacity_mw)}" }
            td { class: "py-4 px-4 text-sm font-medium text-gray-900", "{format_percent(plant.utilization_pct)}" }
            td { class: "py-4 px-4",
                span { class: "px-3 py-1 rounded-full text-xs font-medium {status_class}", "{plant.status}" }
            }
        }
    }
}
