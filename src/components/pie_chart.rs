use dioxus::prelude::*;

use crate::shared::types::PieSlice;
use crate::utils::geometry::{polar, slice_arcs, slice_path};

#[allow(non_snake_case)]
#[component]
pub fn PieChart(slices: Vec<PieSlice>, size: i32) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    let c = (size as f32) / 2.0;
    let r = c - 8.0;
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let arcs = slice_arcs(&values);
    let view_box = format!("0 0 {size} {size}");

    rsx! {
        div { class: "relative", style: "width:{size}px;height:{size}px",
            svg { width: "{size}", height: "{size}", view_box: "{view_box}",
                {
                    arcs.iter().zip(slices.iter()).enumerate().map(|(i, (arc, s))| {
                        let d = slice_path(c, c, r, arc);
                        let opacity = match *hovered.read() {
                            Some(h) if h != i => "0.6",
                            _ => "1",
                        };
                        rsx! {
                            path {
                                key: "slice-{i}",
                                d: "{d}", fill: "{s.color}", stroke: "white", stroke_width: "2", fill_opacity: "{opacity}",
                                onmouseenter: move |_| *hovered.write() = Some(i),
                                onmouseleave: move |_| *hovered.write() = None,
                                ontouchstart: move |_| *hovered.write() = Some(i),
                                ontouchend: move |_| *hovered.write() = None,
                            }
                        }
                    })
                }
            }
            {
                match *hovered.read() {
                    Some(i) if i < arcs.len() && i < slices.len() => {
                        let s = &slices[i];
                        // Anchor the tooltip halfway out along the slice bisector
                        let (x, y) = polar(c, c, r * 0.55, arcs[i].mid_deg());
                        rsx! {
                            div {
                                class: "absolute pointer-events-none -translate-x-1/2 -translate-y-1/2 bg-white border border-gray-200 rounded-lg px-3 py-1 text-sm shadow-sm whitespace-nowrap",
                                style: "left:{x}px;top:{y}px",
                                span { class: "font-semibold", "{s.label}" }
                                span { class: "ml-2 text-gray-600", "{s.value}%" }
                            }
                        }
                    }
                    _ => rsx! { Fragment {} }
                }
            }
        }
    }
}
