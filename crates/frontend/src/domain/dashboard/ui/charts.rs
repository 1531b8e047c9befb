use contracts::domain::dashboard::{
    CategoryRisk, HealthSlice, HEALTH_SLICE_RIESGO, HEALTH_SLICE_SALUDABLE,
};
use contracts::shared::format::format_currency;
use leptos::prelude::*;

fn slice_color(name: &str) -> &'static str {
    if name == HEALTH_SLICE_SALUDABLE {
        "#34D399"
    } else {
        "#EF4444"
    }
}

/// Inventory-health donut. Only the healthy/at-risk slices are drawn, but
/// the center total still sums every slice the endpoint returned.
#[component]
pub fn DonutChart(slices: Vec<HealthSlice>) -> impl IntoView {
    let grand_total: f64 = slices.iter().map(|s| s.value).sum();
    let drawn: Vec<HealthSlice> = slices
        .into_iter()
        .filter(|s| s.name == HEALTH_SLICE_SALUDABLE || s.name == HEALTH_SLICE_RIESGO)
        .collect();
    let total: f64 = drawn.iter().map(|s| s.value).sum();

    if total <= 0.0 {
        return view! {
            <div style="display: flex; align-items: center; justify-content: center; height: 200px; color: #6B7280;">
                "No hay datos para mostrar"
            </div>
        }
        .into_any();
    }

    let mut accumulated = 0.0;
    let circles = drawn
        .iter()
        .map(|s| {
            let pct = s.value / total * 100.0;
            let dasharray = format!("{} {}", pct, 100.0 - pct);
            let dashoffset = format!("{}", -accumulated);
            accumulated += pct;
            let tooltip = format!("{}: {}", s.name, format_currency(Some(s.value)));
            view! {
                <circle
                    cx="18"
                    cy="18"
                    r="15.9155"
                    fill="transparent"
                    stroke=slice_color(&s.name)
                    stroke-width="3"
                    stroke-dasharray=dasharray
                    stroke-dashoffset=dashoffset
                    transform="rotate(-90 18 18)"
                >
                    <title>{tooltip}</title>
                </circle>
            }
        })
        .collect_view();

    let legend = drawn
        .iter()
        .map(|s| {
            view! {
                <div style="display: flex; align-items: center;">
                    <span style=format!("width: 12px; height: 12px; border-radius: 50%; margin-right: 8px; background: {};", slice_color(&s.name))></span>
                    <span>{s.name.clone()}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div style="display: flex; flex-direction: column; align-items: center;">
            <div style="position: relative; width: 160px; height: 160px;">
                <svg style="width: 100%; height: 100%;" viewBox="0 0 36 36">{circles}</svg>
                <div style="position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center;">
                    <span style="font-size: 22px; font-weight: 700; color: #1F2937;">
                        {format_currency(Some(grand_total))}
                    </span>
                    <span style="font-size: 12px; color: #6B7280;">"Total"</span>
                </div>
            </div>
            <div style="margin-top: 16px; display: flex; flex-wrap: wrap; justify-content: center; gap: 16px; font-size: 14px; color: #34495E;">
                {legend}
            </div>
        </div>
    }
    .into_any()
}

/// Top categories by capital at risk, linearly scaled to the largest bar.
#[component]
pub fn HorizontalBarChart(rows: Vec<CategoryRisk>) -> impl IntoView {
    if rows.is_empty() {
        return view! {
            <div style="display: flex; align-items: center; justify-content: center; height: 200px; color: #6B7280;">
                "No hay datos de riesgo para mostrar"
            </div>
        }
        .into_any();
    }

    let max_value = rows.iter().map(|r| r.valor).fold(1.0, f64::max);
    let bars = rows
        .into_iter()
        .map(|r| {
            let width = r.valor / max_value * 100.0;
            view! {
                <div style="width: 100%; margin-bottom: 12px;">
                    <div style="display: flex; justify-content: space-between; margin-bottom: 4px; font-size: 14px;">
                        <span style="font-weight: 500; color: #6B7280;">{r.categoria.clone()}</span>
                        <span style="font-weight: 600; color: #1F2937;">{format_currency(Some(r.valor))}</span>
                    </div>
                    <div style="width: 100%; background: #E5E7EB; border-radius: 9999px; height: 10px;">
                        <div style=format!("background: #EF4444; height: 10px; border-radius: 9999px; width: {width}%;")></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! { <div>{bars}</div> }.into_any()
}
