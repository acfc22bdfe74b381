use dioxus::prelude::*;

use crate::shared::types::DailyTrendPoint;
use crate::utils::format::{format_kwh, format_thousands};
use crate::utils::geometry::{nice_max, Frame};

const ACTUAL_COLOR: &str = "#3b82f6";
const TODAY_COLOR: &str = "#1d4ed8";
const AVERAGE_COLOR: &str = "#10b981";

#[allow(non_snake_case)]
#[component]
pub fn BarChart(points: Vec<DailyTrendPoint>) -> Element {
    // Hovered day index (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);

    // Visual params
    let height = 250.0f32;
    let bar_w = 8.0f32;
    let pair_gap = 1.0f32;
    let day_gap = 10.0f32;
    let left = 56.0f32;
    let n = points.len().max(1) as f32;
    let day_w = bar_w * 2.0 + pair_gap + day_gap;
    let width = (left + n * day_w + 16.0).ceil();
    let frame = Frame {
        left,
        top: 10.0,
        width: width - left - 16.0,
        height: height - 10.0 - 30.0,
    };
    let peak = points
        .iter()
        .map(|p| p.actual_kwh.max(p.average_kwh))
        .max()
        .unwrap_or(0);
    let max = nice_max(peak as f64);
    let view_box = format!("0 0 {width} {height}");
    let ticks: Vec<f64> = (0..=4).map(|i| max * (i as f64) / 4.0).collect();
    let day_x = move |i: usize| frame.left + (i as f32) * day_w + day_gap / 2.0;

    rsx! {
        div { class: "w-full overflow-x-auto",
            svg { class: "block min-w-full", view_box: "{view_box}", width: "100%", height: "{height}",
                {
                    ticks.iter().enumerate().map(|(i, t)| {
                        let y = frame.y_for(*t, max);
                        let label = format_thousands(t.round() as i64);
                        rsx! {
                            g { key: "tick-{i}",
                                line { x1: "{frame.left}", y1: "{y}", x2: "{frame.right()}", y2: "{y}", stroke: "#f0f0f0", stroke_dasharray: "3 3" }
                                text { x: "{frame.left - 6.0}", y: "{y + 4.0}", text_anchor: "end", class: "fill-current text-gray-400 text-[11px]", "{label}" }
                            }
                        }
                    })
                }
                {
                    points.iter().enumerate().map(|(i, p)| {
                        let x = day_x(i);
                        let actual_y = frame.y_for(p.actual_kwh as f64, max);
                        let average_y = frame.y_for(p.average_kwh as f64, max);
                        let actual_fill = if p.is_today { TODAY_COLOR } else { ACTUAL_COLOR };
                        rsx! {
                            g { key: "day-{i}",
                                onmouseenter: move |_| *hovered.write() = Some(i),
                                onmouseleave: move |_| *hovered.write() = None,
                                ontouchstart: move |_| *hovered.write() = Some(i),
                                ontouchend: move |_| *hovered.write() = None,
                                rect { x: "{x}", y: "{actual_y}", width: "{bar_w}", height: "{frame.bottom() - actual_y}", fill: "{actual_fill}", rx: "2" }
                                rect { x: "{x + bar_w + pair_gap}", y: "{average_y}", width: "{bar_w}", height: "{frame.bottom() - average_y}", fill: "{AVERAGE_COLOR}", rx: "2" }
                                text {
                                    x: "{x + bar_w}", y: "{frame.bottom() + 16.0}", text_anchor: "middle",
                                    class: "fill-current text-gray-400 text-[10px]",
                                    "{p.date_label}"
                                }
                            }
                        }
                    })
                }
                {
                    match *hovered.read() {
                        Some(i) if i < points.len() => {
                            let p = &points[i];
                            let x = day_x(i) + bar_w;
                            let actual_label = format!("일별 {}", format_kwh(p.actual_kwh as f64));
                            let average_label = format!("평균 {}", format_kwh(p.average_kwh as f64));
                            let cw = 7.0f32; // approx char width at 11px
                            let tip_w = (actual_label.chars().count().max(average_label.chars().count()) as f32) * cw + 16.0;
                            let tip_h = 50.0f32;
                            let tip_x = (x - tip_w / 2.0).min(frame.right() - tip_w).max(frame.left);
                            let tip_y = frame.top + 4.0;
                            rsx! { g { key: "tooltip",
                                rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "8", fill: "white", stroke: "#e5e7eb", stroke_width: "1" }
                                text { x: "{tip_x + 8.0}", y: "{tip_y + 15.0}", class: "fill-current text-[11px] font-bold text-gray-900", "{p.date_label}" }
                                text { x: "{tip_x + 8.0}", y: "{tip_y + 29.0}", class: "fill-current text-[11px] text-blue-600", "{actual_label}" }
                                text { x: "{tip_x + 8.0}", y: "{tip_y + 43.0}", class: "fill-current text-[11px] text-green-600", "{average_label}" }
                            }}
                        }
                        _ => rsx! { Fragment {} }
                    }
                }
            }
        }
    }
}
