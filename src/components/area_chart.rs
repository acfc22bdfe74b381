use dioxus::prelude::*;

use crate::shared::types::ChartPoint;
use crate::utils::format::format_thousands;
use crate::utils::geometry::{area_path, line_path, nice_max, Frame};

#[allow(non_snake_case)]
#[component]
pub fn AreaChart(points: Vec<ChartPoint>, color: String, unit: String) -> Element {
    // Hovered point index (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);

    // Visual params
    let width = 560.0f32;
    let height = 300.0f32;
    let frame = Frame {
        left: 48.0,
        top: 12.0,
        width: width - 48.0 - 16.0,
        height: height - 12.0 - 28.0,
    };
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let max = nice_max(values.iter().cloned().fold(0.0, f64::max));
    let n = points.len();
    let view_box = format!("0 0 {width} {height}");
    let area_d = area_path(&frame, &values, max);
    let line_d = line_path(&frame, &values, max);
    let ticks: Vec<f64> = (0..=4).map(|i| max * (i as f64) / 4.0).collect();

    rsx! {
        svg { class: "block w-full", view_box: "{view_box}", width: "100%", height: "{height}",
            defs {
                linearGradient { id: "area-fill", x1: "0", y1: "0", x2: "0", y2: "1",
                    stop { offset: "5%", stop_color: "{color}", stop_opacity: "0.3" }
                    stop { offset: "95%", stop_color: "{color}", stop_opacity: "0" }
                }
            }
            // Grid + y labels
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
            path { d: "{area_d}", fill: "url(#area-fill)" }
            path { d: "{line_d}", fill: "none", stroke: "{color}", stroke_width: "3", stroke_linejoin: "round" }
            // X labels and hover targets
            {
                points.iter().enumerate().map(|(i, p)| {
                    let x = frame.x_at(i, n);
                    let slot = if n > 1 { frame.width / ((n - 1) as f32) } else { frame.width };
                    rsx! {
                        g { key: "pt-{i}",
                            text { x: "{x}", y: "{frame.bottom() + 18.0}", text_anchor: "middle", class: "fill-current text-gray-400 text-[11px]", "{p.label}" }
                            rect {
                                x: "{x - slot / 2.0}", y: "{frame.top}", width: "{slot}", height: "{frame.height}", fill: "transparent",
                                onmouseenter: move |_| *hovered.write() = Some(i),
                                onmouseleave: move |_| *hovered.write() = None,
                                ontouchstart: move |_| *hovered.write() = Some(i),
                                ontouchend: move |_| *hovered.write() = None,
                            }
                        }
                    }
                })
            }
            {
                match *hovered.read() {
                    Some(i) if i < n => {
                        let p = &points[i];
                        let x = frame.x_at(i, n);
                        let y = frame.y_for(p.value, max);
                        let value_label = format!("{} {}", format_thousands(p.value.round() as i64), unit);
                        let cw = 7.0f32; // approx char width at 11px
                        let tip_w = (value_label.chars().count().max(p.label.len()) as f32) * cw + 16.0;
                        let tip_h = 36.0f32;
                        let tip_x = (x - tip_w / 2.0).min(frame.right() - tip_w).max(frame.left);
                        let tip_y = (y - 12.0 - tip_h).max(2.0);
                        rsx! { g { key: "tooltip",
                            line { x1: "{x}", y1: "{frame.top}", x2: "{x}", y2: "{frame.bottom()}", stroke: "#e5e7eb", stroke_width: "1" }
                            circle { cx: "{x}", cy: "{y}", r: "4", fill: "{color}" }
                            rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "8", fill: "white", stroke: "#e5e7eb", stroke_width: "1" }
                            text { x: "{tip_x + 8.0}", y: "{tip_y + 15.0}", class: "fill-current text-[11px] font-bold text-gray-900", "{p.label}" }
                            text { x: "{tip_x + 8.0}", y: "{tip_y + 29.0}", class: "fill-current text-[11px] text-gray-600", "{value_label}" }
                        }}
                    }
                    _ => rsx! { Fragment {} }
                }
            }
        }
    }
}
