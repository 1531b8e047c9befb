use contracts::domain::monitoring::{CapitalBreakdown, VelocitySeries};
use contracts::shared::format::{format_currency, log_bar_height};
use leptos::prelude::*;

/// Stacked per-category bars of trapped vs. released capital. Bar heights
/// are log-scaled so small categories stay visible next to outliers; the
/// red/green split inside each bar stays linear.
#[component]
pub fn CapitalChart(data: CapitalBreakdown) -> impl IntoView {
    let linear_max = data
        .categorias
        .iter()
        .enumerate()
        .map(|(i, _)| {
            data.atrapado.get(i).copied().unwrap_or(0.0)
                + data.liberado.get(i).copied().unwrap_or(0.0)
        })
        .fold(1.0, f64::max);

    let bars = data
        .categorias
        .iter()
        .enumerate()
        .map(|(i, categoria)| {
            let atrapado = data.atrapado.get(i).copied().unwrap_or(0.0);
            let liberado = data.liberado.get(i).copied().unwrap_or(0.0);
            let total = atrapado + liberado;
            let total_height = log_bar_height(total, linear_max);
            let liberado_pct = if total > 0.0 { liberado / total * 100.0 } else { 0.0 };
            let atrapado_pct = 100.0 - liberado_pct;
            view! {
                <div style="flex: 1; display: flex; flex-direction: column-reverse; align-items: center;">
                    <p style="margin: 8px 0 0; font-size: 12px; font-weight: 600; color: #6B7280; text-align: center; width: 100%; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                        {categoria.clone()}
                    </p>
                    <div style="font-size: 12px; font-weight: 600; color: #374151; margin-bottom: 4px;">
                        {format_currency(Some(total))}
                    </div>
                    <div style="width: 100%; height: 200px; display: flex; flex-direction: column-reverse;">
                        <div style=format!("width: 100%; display: flex; flex-direction: column-reverse; height: {total_height}%; min-height: 2px;")>
                            <div
                                style=format!("width: 100%; background: #22C55E; height: {liberado_pct}%;")
                                title=format!("Liberado: {}", format_currency(Some(liberado)))
                            ></div>
                            <div
                                style=format!("width: 100%; background: #EF4444; border-radius: 6px 6px 0 0; height: {atrapado_pct}%;")
                                title=format!("Atrapado: {}", format_currency(Some(atrapado)))
                            ></div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div>
            <div style="height: 260px; display: flex; align-items: flex-end; gap: 16px;">{bars}</div>
            <div style="display: flex; justify-content: center; gap: 16px; margin-top: 16px; font-size: 12px; color: #374151;">
                <div style="display: flex; align-items: center;">
                    <span style="width: 12px; height: 12px; background: #22C55E; margin-right: 4px; border-radius: 3px;"></span>
                    "Liberado"
                </div>
                <div style="display: flex; align-items: center;">
                    <span style="width: 12px; height: 12px; background: #EF4444; margin-right: 4px; border-radius: 3px;"></span>
                    "Atrapado"
                </div>
            </div>
        </div>
    }
}

fn polyline_points(values: &[f64], max: f64) -> String {
    const WIDTH: f64 = 300.0;
    const HEIGHT: f64 = 100.0;
    if values.len() == 1 {
        return format!("{},{}", WIDTH / 2.0, HEIGHT - values[0] / max * HEIGHT);
    }
    let step = WIDTH / (values.len().max(2) - 1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{},{}", i as f64 * step, HEIGHT - v / max * HEIGHT))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Real vs. target liquidation velocity as two polylines, with the gap
/// between them shaded red.
#[component]
pub fn VelocityChart(data: VelocitySeries) -> impl IntoView {
    let max = data
        .velocidad_real
        .iter()
        .chain(data.velocidad_meta.iter())
        .fold(100.0, |acc, v| f64::max(acc, *v));

    let real_points = polyline_points(&data.velocidad_real, max);
    let meta_points = polyline_points(&data.velocidad_meta, max);
    let reversed_real: String = real_points
        .split(' ')
        .rev()
        .collect::<Vec<_>>()
        .join(" ");
    let gap_polygon = format!("{meta_points} {reversed_real}");

    let dots = |values: &[f64], color: &'static str, label: &'static str| {
        let count = values.len();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let cx = if count > 1 {
                    300.0 / (count - 1) as f64 * i as f64
                } else {
                    150.0
                };
                let cy = 100.0 - v / max * 100.0;
                view! {
                    <circle cx=cx cy=cy r="4" fill=color>
                        <title>{format!("{label}: {v}%")}</title>
                    </circle>
                }
            })
            .collect_view()
    };
    let real_dots = dots(&data.velocidad_real, "#EF4444", "Real");
    let meta_dots = dots(&data.velocidad_meta, "#10B981", "Meta");

    let labels = data
        .categorias
        .iter()
        .map(|c| {
            view! {
                <span style="flex: 1; text-align: center; font-weight: 500; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; padding: 0 4px;">
                    {c.clone()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div>
            <div style="height: 260px; position: relative;">
                <svg style="width: 100%; height: 100%;" viewBox="0 0 300 100" preserveAspectRatio="none">
                    <polygon fill="rgba(239, 68, 68, 0.15)" stroke="none" points=gap_polygon />
                    <polyline fill="none" stroke="#10B981" stroke-width="2" points=meta_points />
                    <polyline fill="none" stroke="#EF4444" stroke-width="2.5" points=real_points />
                    {real_dots}
                    {meta_dots}
                </svg>
                <div style="position: absolute; top: 0; right: 0; font-size: 12px; color: #374151;">
                    <div style="display: flex; align-items: center; margin-bottom: 4px;">
                        <span style="width: 12px; height: 12px; background: #EF4444; margin-right: 8px; border-radius: 50%;"></span>
                        "Real"
                    </div>
                    <div style="display: flex; align-items: center;">
                        <span style="width: 12px; height: 12px; background: #10B981; margin-right: 8px; border-radius: 50%;"></span>
                        "Meta"
                    </div>
                </div>
            </div>
            <div style="display: flex; justify-content: space-between; font-size: 12px; color: #6B7280; margin-top: 8px;">
                {labels}
            </div>
        </div>
    }
}
