use dioxus::prelude::*;

use crate::api::{get_daily_trend, get_hourly_output};
use crate::components::{
    AreaChart, BarChart, ChartSkeleton, Header, LiveClock, LoadFailed, StatCard, Tone,
};
use crate::shared::types::AppView;

// (label, value, text class)
const CONDITIONS: [(&str, &str, &str); 4] = [
    ("일조량", "850 W/m²", "text-yellow-600"),
    ("기온", "24°C", "text-blue-600"),
    ("구름량", "15%", "text-gray-600"),
    ("패널 각도", "35°", "text-green-600"),
];

const PLANT_INFO: [(&str, &str); 4] = [
    ("발전소명", "경기 김포 태양광 1호기"),
    ("위치", "경기도 김포시 월곶면"),
    ("총 설치 용량", "3,500 kW"),
    ("가동 시작일", "2023년 3월 15일"),
];

#[allow(non_snake_case)]
#[component]
pub fn SolarDashboard(on_navigate: EventHandler<AppView>) -> Element {
    // ssr data (server waits)
    let hourly = use_server_future(get_hourly_output)?;
    let daily = use_server_future(get_daily_trend)?;
    let hourly_v = hourly.read_unchecked();
    let daily_v = daily.read_unchecked();
    let trend_days = match &*daily_v {
        Some(Ok(points)) if !points.is_empty() => points.len(),
        _ => 30,
    };

    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-blue-50 via-white to-green-50",
            Header { active: AppView::Dashboard, on_navigate }

            div { class: "max-w-7xl mx-auto p-4 space-y-8",
                // Hero
                div { class: "bg-gradient-to-r from-blue-600 to-blue-400 rounded-3xl p-8",
                    h2 { class: "text-4xl font-bold text-white mb-4", "실시간 태양광 발전 모니터링" }
                    p { class: "text-blue-100 text-lg mb-8",
                        "청정 에너지 생산 현황을 실시간으로 확인하고 발전 효율을 최적화하세요"
                    }
                    div { class: "flex gap-16",
                        div {
                            p { class: "text-blue-100 mb-1", "현재 발전량" }
                            p { class: "text-5xl font-bold text-white", "2,847 " span { class: "text-2xl", "kW" } }
                        }
                        div {
                            p { class: "text-blue-100 mb-1", "발전 효율" }
                            p { class: "text-5xl font-bold text-white", "94.2" span { class: "text-2xl", "%" } }
                        }
                    }
                }

                // Main stats
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6",
                    StatCard { title: "현재 발전량", value: "2,847", unit: "kW", change: 5.2, tone: Tone::Green, glyph: "☀" }
                    StatCard { title: "오늘 누적 발전량", value: "68,420", unit: "kWh", change: 12.8, tone: Tone::Blue, glyph: "⚡" }
                    StatCard { title: "발전 효율", value: "94.2", unit: "%", change: 2.1, tone: Tone::Purple, glyph: "%" }
                    div { class: "bg-white rounded-2xl p-6 shadow-sm space-y-4",
                        for (label, value, cls) in CONDITIONS {
                            div { key: "{label}", class: "flex items-center justify-between",
                                span { class: "text-sm text-gray-600", "{label}" }
                                span { class: "font-semibold {cls}", "{value}" }
                            }
                        }
                    }
                }

                // Charts
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-8",
                    div { class: "bg-white rounded-2xl p-6 shadow-sm",
                        div { class: "flex items-center justify-between mb-6",
                            h3 { class: "text-lg font-bold text-gray-900", "시간별 발전량" }
                            span { class: "px-3 py-1 bg-green-100 text-green-600 rounded-full text-sm font-medium", "오늘" }
                        }
                        {
                            match &*hourly_v {
                                Some(Ok(points)) => rsx! {
                                    AreaChart { points: points.clone(), color: "#10b981", unit: "kW" }
                                },
                                Some(Err(_e)) => rsx! { LoadFailed {} },
                                None => rsx! { ChartSkeleton { height: 300 } },
                            }
                        }
                    }

                    div { class: "bg-white rounded-2xl p-6 shadow-sm",
                        h3 { class: "text-lg font-bold text-gray-900 mb-6", "발전소 정보" }
                        div { class: "space-y-4",
                            for (label, value) in PLANT_INFO {
                                div { key: "{label}", class: "flex justify-between items-center p-4 bg-gray-50 rounded-xl",
                                    span { class: "text-gray-600", "{label}" }
                                    span { class: "font-semibold", "{value}" }
                                }
                            }
                            div { class: "flex justify-between items-center p-4 bg-green-50 rounded-xl",
                                span { class: "text-green-700", "현재 상태" }
                                div { class: "flex items-center gap-2",
                                    div { class: "w-2 h-2 bg-green-500 rounded-full animate-pulse" }
                                    span { class: "font-semibold text-green-700", "정상" }
                                }
                            }
                        }
                    }
                }

                // Daily trend
                div { class: "bg-white rounded-2xl p-6 shadow-sm",
                    div { class: "flex items-center justify-between mb-6",
                        h3 { class: "text-lg font-bold text-gray-900", "일별 발전량 트렌드 (최근 {trend_days}일)" }
                        div { class: "flex gap-4",
                            div { class: "flex items-center gap-2",
                                div { class: "w-3 h-3 bg-blue-500 rounded" }
                                span { class: "text-sm text-gray-600", "일별 발전량" }
                            }
                            div { class: "flex items-center gap-2",
                                div { class: "w-3 h-3 bg-green-500 rounded" }
                                span { class: "text-sm text-gray-600", "평균 발전량" }
                            }
                        }
                    }
                    {
                        match &*daily_v {
                            Some(Ok(points)) => rsx! { BarChart { points: points.clone() } },
                            Some(Err(_e)) => rsx! { LoadFailed {} },
                            None => rsx! { ChartSkeleton { height: 250 } },
                        }
                    }
                }

                // Footer
                div { class: "flex items-center justify-between text-sm text-gray-500 pb-4",
                    div { class: "flex items-center gap-2",
                        div { class: "w-2 h-2 bg-green-500 rounded-full animate-pulse" }
                        span { "시스템 정상" }
                    }
                    LiveClock {}
                    span { "기술 지원: 1588-1234 | © 2025 에너지 모니터링 시스템" }
                }
            }
        }
    }
}
