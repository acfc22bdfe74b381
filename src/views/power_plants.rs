use dioxus::prelude::*;

use crate::api::list_power_plants;
use crate::components::{
    ChartSkeleton, Header, LoadFailed, PieChart, PlantListView, SummaryCard, Tone,
};
use crate::shared::categories::{share_slices, CATEGORY_SHARES};
use crate::shared::types::{AppView, PlantType};

#[allow(non_snake_case)]
#[component]
pub fn PowerPlantOverview(on_navigate: EventHandler<AppView>) -> Element {
    // ssr data (server waits)
    let plants = use_server_future(list_power_plants)?;
    let plants_v = plants.read_unchecked();

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            Header { active: AppView::PowerPlant, on_navigate }

            div { class: "max-w-7xl mx-auto px-6 py-8",
                div { class: "mb-8",
                    h2 { class: "text-3xl font-bold text-gray-900 mb-2", "제주도 발전소 현황" }
                    p { class: "text-gray-600", "제주도 지역의 모든 발전소 정보와 설비용량을 확인하세요" }
                }

                // Headline figures
                div { class: "grid grid-cols-3 gap-6 mb-8",
                    SummaryCard { title: "전체 발전소", value: "47개소", delta: "+3개소 전년 대비", tone: Tone::Blue, glyph: "#" }
                    SummaryCard { title: "총 설비용량", value: "1,847 MW", delta: "+147 MW 전년 대비", tone: Tone::Green, glyph: "↗" }
                    SummaryCard { title: "평균 가동률", value: "87.4%", delta: "+2.1% 전월 대비", tone: Tone::Orange, glyph: "◷" }
                }

                // Energy type cards
                div { class: "grid grid-cols-4 gap-6 mb-8",
                    for share in CATEGORY_SHARES {
                        EnergyTypeCard {
                            key: "{share.plant_type.label()}",
                            plant_type: share.plant_type,
                            plant_count: share.plant_count,
                            capacity_mw: share.capacity_mw,
                            share_pct: share.share_pct,
                        }
                    }
                }

                // Map placeholder + share chart
                div { class: "grid grid-cols-2 gap-6 mb-8",
                    div { class: "bg-white rounded-xl p-6 shadow-sm border border-gray-200",
                        h3 { class: "text-lg font-semibold text-gray-900 mb-4", "발전소 위치 현황" }
                        div { class: "bg-gray-100 rounded-lg h-80 flex items-center justify-center relative",
                            div { class: "absolute top-4 left-4 bg-white px-4 py-2 rounded-lg shadow-sm",
                                div { class: "text-sm font-semibold", "제주도 발전소 분포" }
                                div { class: "text-xs text-gray-600", "총 47개소" }
                            }
                            span { class: "text-sm text-gray-400", "지도 영역" }
                            div { class: "absolute bottom-4 right-4 flex gap-4 text-xs",
                                for t in PlantType::ALL {
                                    div { key: "{t.label()}", class: "flex items-center gap-2",
                                        div { class: "w-3 h-3 rounded-full {t.dot_class()}" }
                                        span { "{t.label()}" }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "bg-white rounded-xl p-6 shadow-sm border border-gray-200",
                        h3 { class: "text-lg font-semibold text-gray-900 mb-4", "에너지원별 점유율" }
                        div { class: "flex items-center justify-center h-80",
                            PieChart { slices: share_slices(), size: 260 }
                        }
                    }
                }

                {
                    match &*plants_v {
                        Some(Ok(list)) => rsx! { PlantListView { plants: list.clone() } },
                        Some(Err(_e)) => rsx! { LoadFailed {} },
                        None => rsx! { ChartSkeleton { height: 420 } },
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn EnergyTypeCard(plant_type: PlantType, plant_count: u32, capacity_mw: u32, share_pct: f64) -> Element {
    let badge = plant_type.badge_class();
    let share_class = plant_type.text_class();
    rsx! {
        div { class: "bg-white rounded-xl p-6 shadow-sm border border-gray-200",
            div { class: "flex items-center gap-3 mb-4",
                div { class: "w-12 h-12 rounded-full flex items-center justify-center {badge}",
                    div { class: "w-3 h-3 rounded-full {plant_type.dot_class()}" }
                }
                div {
                    div { class: "text-sm text-gray-600", "{plant_type.label()}" }
                    div { class: "text-xs text-gray-500", "{plant_type.english_label()}" }
                }
            }
            div { class: "space-y-2",
                div { class: "flex justify-between text-sm",
                    span { class: "text-gray-600", "발전소 수" }
                    span { class: "font-semibold", "{plant_count}개소" }
                }
                div { class: "flex justify-between text-sm",
                    span { class: "text-gray-600", "설비용량" }
                    span { class: "font-semibold", "{capacity_mw} MW" }
                }
                div { class: "flex justify-between text-sm",
                    span { class: "text-gray-600", "점유율" }
                    span { class: "font-semibold {share_class}", "{share_pct}%" }
                }
            }
        }
    }
}
