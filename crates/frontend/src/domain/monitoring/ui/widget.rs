use std::collections::HashSet;

use contracts::domain::filters::ListFilter;
use contracts::domain::monitoring::{MonitoringCharts, SalesRow, SalesStatus};
use contracts::shared::selection;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::charts::{CapitalChart, VelocityChart};
use crate::shared::api;
use crate::shared::filter_bar::FilterBar;
use crate::shared::icons::icon;

fn status_tag(status: SalesStatus) -> impl IntoView {
    let (bg, fg) = match status {
        SalesStatus::Alertar => ("#FFEDD5", "#9A3412"),
        SalesStatus::Mantener => ("#DBEAFE", "#1E40AF"),
        SalesStatus::Oportunidad => ("#F3E8FF", "#6B21A8"),
    };
    view! {
        <span style=format!("padding: 4px 12px; font-size: 13px; font-weight: 600; border-radius: 9999px; background: {bg}; color: {fg};")>
            {status.label()}
        </span>
    }
}

fn avance_style(row: &SalesRow) -> &'static str {
    match row.avance_pct() {
        Some(pct) if pct >= 80 => "color: #16A34A; font-weight: 700;",
        Some(pct) if pct < 50 => "color: #DC2626; font-weight: 700;",
        _ => "color: #374151;",
    }
}

/// "Monitoreo y Optimización": sell-through table over `/analisis-ventas`
/// (loaded unfiltered on entry, re-queried per search) plus the two
/// liquidation charts from `/dashboard-charts`. The status checkboxes
/// filter client-side only.
#[component]
pub fn SalesMonitor() -> impl IntoView {
    let rows = RwSignal::new(Vec::<SalesRow>::new());
    let selected = RwSignal::new(HashSet::<String>::new());
    let show_adjust_only = RwSignal::new(false);
    let show_opportunities = RwSignal::new(false);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let last_filter = RwSignal::new(ListFilter::default());
    let generation = RwSignal::new(0u64);

    let charts = RwSignal::new(None::<MonitoringCharts>);
    let charts_loading = RwSignal::new(true);
    let charts_error = RwSignal::new(None::<String>);

    let run_search = move |filter: ListFilter| {
        loading.set(true);
        error.set(None);
        last_filter.set(filter.clone());

        let current = generation.get_untracked() + 1;
        generation.set(current);
        spawn_local(async move {
            let query = api::query_string(&filter.query_pairs());
            let result = api::get_list::<SalesRow>(&format!("/analisis-ventas{query}")).await;
            if generation.get_untracked() != current {
                return;
            }
            match result {
                Ok(list) => rows.set(list),
                Err(e) => {
                    log::error!("loading sales analysis: {e}");
                    error.set(Some("Error al obtener los datos de productos.".to_string()));
                    rows.set(Vec::new());
                }
            }
            loading.set(false);
        });
    };
    run_search(ListFilter::default());

    spawn_local(async move {
        match api::get_json::<MonitoringCharts>("/dashboard-charts").await {
            Ok(data) => charts.set(Some(data)),
            Err(e) => {
                log::error!("loading liquidation charts: {e}");
                charts_error.set(Some(
                    "No se pudieron cargar los datos de las gráficas.".to_string(),
                ));
            }
        }
        charts_loading.set(false);
    });

    let charts_section = move || {
        if charts_loading.get() {
            return view! {
                <div style="display: flex; gap: 24px;">
                    <div style="flex: 1; height: 320px; border: 1px solid #E5E7EB; border-radius: 8px; background: #F9FAFB;"></div>
                    <div style="flex: 1; height: 320px; border: 1px solid #E5E7EB; border-radius: 8px; background: #F9FAFB;"></div>
                </div>
            }
            .into_any();
        }
        if let Some(err) = charts_error.get() {
            return view! {
                <div style="text-align: center; padding: 40px; color: #DC2626; background: #FEF2F2; border: 1px solid #FECACA; border-radius: 8px;">
                    {err}
                </div>
            }
            .into_any();
        }
        let Some(data) = charts.get() else {
            return ().into_any();
        };
        view! {
            <div style="display: flex; gap: 24px; flex-wrap: wrap;">
                <div style="flex: 1; min-width: 380px; padding: 24px; border: 1px solid #E5E7EB; border-radius: 8px; background: white;">
                    <h4 style="margin: 0 0 16px; font-weight: 700; color: #34495E;">"Capital en Liquidación: Atrapado vs. Liberado (Top 5)"</h4>
                    <CapitalChart data=data.capital_atrapado />
                </div>
                <div style="flex: 1; min-width: 380px; padding: 24px; border: 1px solid #E5E7EB; border-radius: 8px; background: white;">
                    <h4 style="margin: 0 0 16px; font-weight: 700; color: #34495E;">"Velocidad de Liquidación: Real vs. Meta (Top 5)"</h4>
                    <VelocityChart data=data.velocidad_liquidacion />
                </div>
            </div>
        }
        .into_any()
    };

    let table_section = move || {
        if loading.get() {
            return view! {
                <div style="text-align: center; padding: 64px; color: #6B7280;">"Cargando productos..."</div>
            }
            .into_any();
        }
        if let Some(err) = error.get() {
            return view! {
                <div style="text-align: center; padding: 64px;">
                    <p style="color: #DC2626; font-weight: 600;">{err}</p>
                    <button
                        style="margin-top: 16px; padding: 8px 24px; border: none; border-radius: 6px; background: #D9534F; color: white; font-weight: 600; cursor: pointer;"
                        on:click=move |_| run_search(last_filter.get_untracked())
                    >
                        "Reintentar"
                    </button>
                </div>
            }
            .into_any();
        }
        if rows.get().is_empty() {
            return view! {
                <div style="text-align: center; padding: 64px; color: #6B7280;">
                    {icon("inbox")}
                    <h4 style="margin: 16px 0 0; font-size: 18px; font-weight: 600; color: #34495E;">"No se encontraron productos"</h4>
                    <p style="margin: 8px 0 0; font-size: 14px;">"Intente ajustar los filtros de búsqueda."</p>
                </div>
            }
            .into_any();
        }

        let displayed: Vec<SalesRow> = rows
            .get()
            .into_iter()
            .filter(|r| !show_adjust_only.get() || r.estado == SalesStatus::Alertar)
            .filter(|r| !show_opportunities.get() || r.estado == SalesStatus::Oportunidad)
            .collect();
        let displayed_ids: Vec<String> = displayed.iter().map(|r| r.sku_id.clone()).collect();
        let all_selected = selection::all_displayed_selected(&selected.get(), &displayed_ids);
        let toggle_ids = displayed_ids.clone();

        let body = displayed
            .into_iter()
            .map(|row| {
                let sku_id = row.sku_id.clone();
                let check_id = sku_id.clone();
                let tooltip = row.justification();
                let suggestion_color = if row.sugerencia_ia > row.descuento_actual {
                    "#2563EB"
                } else if row.sugerencia_ia < row.descuento_actual {
                    "#F97316"
                } else {
                    "#374151"
                };
                view! {
                    <tr style="border-bottom: 1px solid #F3F4F6;">
                        <td style="padding: 16px;">
                            <input
                                type="checkbox"
                                prop:checked=selected.get().contains(&sku_id)
                                on:change=move |_| selected.update(|s| selection::toggle(s, check_id.clone()))
                            />
                        </td>
                        <td style="padding: 16px;">
                            <p style="margin: 0; font-weight: 500; color: #1F2937;">{row.producto.clone()}</p>
                            <p style="margin: 4px 0 0; font-size: 12px; color: #6B7280; font-family: monospace;">
                                {format!("SKU: {}", row.sku_id)}
                            </p>
                        </td>
                        <td style="padding: 16px; text-align: center; color: #374151;">{row.meta_venta.clone()}</td>
                        <td style=format!("padding: 16px; text-align: center; {}", avance_style(&row))>{row.avance_actual.clone()}</td>
                        <td style="padding: 16px; text-align: center; color: #374151;">{row.sell_through.clone()}</td>
                        <td style="padding: 16px; text-align: center;">
                            <div style="cursor: help;" title=tooltip>
                                <span style="color: #6B7280;">{format!("{}%", row.descuento_actual)}</span>
                                <span style="margin: 0 4px; color: #9CA3AF;">"→"</span>
                                <span style=format!("font-weight: 700; border-bottom: 1px dotted #9CA3AF; color: {suggestion_color};")>
                                    {format!("{}%", row.sugerencia_ia)}
                                </span>
                            </div>
                        </td>
                        <td style="padding: 16px;">{status_tag(row.estado)}</td>
                    </tr>
                }
            })
            .collect_view();

        view! {
            <div style="overflow-x: auto;">
                <table style="width: 100%; text-align: left; border-collapse: collapse;">
                    <thead style="background: #F9FAFB;">
                        <tr style="border-bottom: 2px solid #E5E7EB;">
                            <th style="padding: 16px; width: 48px;">
                                <input
                                    type="checkbox"
                                    prop:checked=all_selected
                                    on:change=move |_| selected.update(|s| selection::toggle_all_displayed(s, &toggle_ids))
                                />
                            </th>
                            <th style="padding: 16px; font-size: 12px; font-weight: 700; color: #6B7280; text-transform: uppercase;">"Producto"</th>
                            <th style="padding: 16px; font-size: 12px; font-weight: 700; color: #6B7280; text-transform: uppercase; text-align: center;">"Meta Venta"</th>
                            <th style="padding: 16px; font-size: 12px; font-weight: 700; color: #6B7280; text-transform: uppercase; text-align: center;">"Avance Actual"</th>
                            <th style="padding: 16px; font-size: 12px; font-weight: 700; color: #6B7280; text-transform: uppercase; text-align: center;">"Sell-Through"</th>
                            <th style="padding: 16px; font-size: 12px; font-weight: 700; color: #6B7280; text-transform: uppercase; text-align: center;">"Sugerencia IA (%)"</th>
                            <th style="padding: 16px; font-size: 12px; font-weight: 700; color: #6B7280; text-transform: uppercase;">"Estado"</th>
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        }
        .into_any()
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 24px;">
            <p style="margin: 0; color: #7F8C8D;">
                "Visualice el rendimiento de sus estrategias con gráficos evolutivos y tablas de métricas. Reciba nuevas sugerencias para ajustar descuentos y maximizar el sell-through."
            </p>
            {charts_section}
            <FilterBar on_search=Callback::new(run_search) />
            <div style="background: white; padding: 24px; border-radius: 8px; border: 1px solid #E5E7EB;">
                <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; padding-bottom: 16px; border-bottom: 1px solid #E5E7EB;">
                    <div style="display: flex; align-items: center; gap: 24px;">
                        <label style="display: flex; align-items: center; gap: 8px; color: #34495E; font-size: 14px; font-weight: 500; cursor: pointer;">
                            <input
                                type="checkbox"
                                prop:checked=move || show_adjust_only.get()
                                on:change=move |ev| show_adjust_only.set(event_target_checked(&ev))
                            />
                            <span>"Mostrar solo SKUs a ajustar"</span>
                        </label>
                        <label style="display: flex; align-items: center; gap: 8px; color: #34495E; font-size: 14px; font-weight: 500; cursor: pointer;">
                            <input
                                type="checkbox"
                                prop:checked=move || show_opportunities.get()
                                on:change=move |ev| show_opportunities.set(event_target_checked(&ev))
                            />
                            <span>"Ver oportunidades de margen"</span>
                        </label>
                    </div>
                    <div style="display: flex; align-items: center; gap: 16px;">
                        <button style="display: flex; align-items: center; gap: 8px; padding: 8px 16px; background: white; border: 1px solid #D1D5DB; color: #374151; font-weight: 600; border-radius: 6px; font-size: 14px; cursor: pointer;">
                            {icon("download")}
                            "Descargar"
                        </button>
                        {move || {
                            let none_selected = selected.get().is_empty();
                            view! {
                                <button
                                    style=format!(
                                        "padding: 8px 16px; border: none; border-radius: 6px; color: white; font-weight: 600; font-size: 14px; {}",
                                        if none_selected {
                                            "background: #9CA3AF; cursor: not-allowed;"
                                        } else {
                                            "background: #D9534F; cursor: pointer;"
                                        }
                                    )
                                    disabled=none_selected
                                >
                                    "Aplicar y Enviar a Pricing"
                                </button>
                            }
                        }}
                    </div>
                </div>
                {table_section}
            </div>
        </div>
    }
}
