use contracts::domain::alerts::{CategoryAlert, RiskLevel};
use contracts::domain::dashboard::{HomeCharts, KpiSummary};
use contracts::shared::format::format_currency;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::charts::{DonutChart, HorizontalBarChart};
use crate::layout::global_context::{AppGlobalContext, View};
use crate::shared::api;

fn risk_badge(risk: RiskLevel) -> impl IntoView {
    let (bg, fg) = match risk {
        RiskLevel::Alto => ("#FEE2E2", "#991B1B"),
        RiskLevel::Medio => ("#FFEDD5", "#9A3412"),
        RiskLevel::Bajo => ("#D1FAE5", "#065F46"),
    };
    view! {
        <span style=format!("padding: 4px 12px; font-size: 13px; font-weight: 600; border-radius: 9999px; background: {bg}; color: {fg};")>
            {risk.label()}
        </span>
    }
}

#[component]
fn KpiCard(
    title: &'static str,
    value: String,
    subtitle: &'static str,
    accent: &'static str,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let clickable = on_click.is_some();
    view! {
        <div
            style=format!(
                "flex: 1; min-width: 220px; padding: 24px; background: white; border-radius: 12px; border-left: 4px solid {accent}; box-shadow: 0 1px 4px rgba(0,0,0,0.1); {}",
                if clickable { "cursor: pointer;" } else { "" }
            )
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <p style="margin: 0; font-size: 14px; font-weight: 500; color: #6B7280;">{title}</p>
            <p style=format!("margin: 8px 0 0; font-size: 28px; font-weight: 700; color: {accent};")>{value}</p>
            <p style="margin: 8px 0 0; font-size: 12px; color: #9CA3AF;">{subtitle}</p>
        </div>
    }
}

/// Home view. KPIs, the two overview charts and the urgent-alerts table are
/// fetched jointly; if any of the three calls fails the whole view shows a
/// single retryable error.
#[component]
pub fn HomeDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let data = RwSignal::new(None::<(KpiSummary, HomeCharts, Vec<CategoryAlert>)>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let (kpis, charts, alerts) = futures::join!(
                api::get_json::<KpiSummary>("/dashboard-kpis"),
                api::get_json::<HomeCharts>("/inicio-charts"),
                api::get_list::<CategoryAlert>("/alertas?limit=10"),
            );
            let joined = kpis.and_then(|k| charts.and_then(|c| alerts.map(|a| (k, c, a))));
            match joined {
                Ok(loaded) => data.set(Some(loaded)),
                Err(e) => {
                    log::error!("loading dashboard: {e}");
                    error.set(Some(
                        "No se pudo conectar con el servidor para cargar el dashboard.".to_string(),
                    ));
                }
            }
            loading.set(false);
        });
    };
    load();

    view! {
        {move || {
            if loading.get() {
                return view! {
                    <div style="text-align: center; padding: 40px; font-weight: 600; color: #6B7280;">
                        "Cargando dashboard de mando..."
                    </div>
                }
                .into_any();
            }
            if let Some(err) = error.get() {
                return view! {
                    <div style="text-align: center; padding: 40px;">
                        <p style="color: #DC2626; font-weight: 600;">{err}</p>
                        <button
                            style="margin-top: 16px; padding: 8px 24px; border: none; border-radius: 6px; background: #D9534F; color: white; font-weight: 600; cursor: pointer;"
                            on:click=move |_| load()
                        >
                            "Reintentar"
                        </button>
                    </div>
                }
                .into_any();
            }
            let Some((kpis, charts, alerts)) = data.get() else {
                return ().into_any();
            };

            let alert_rows = if alerts.is_empty() {
                view! {
                    <tr>
                        <td colspan="4" style="text-align: center; padding: 32px; color: #6B7280;">
                            "No hay alertas urgentes por el momento."
                        </td>
                    </tr>
                }
                .into_any()
            } else {
                alerts
                    .into_iter()
                    .map(|alert| {
                        let categoria = alert.categoria.clone();
                        view! {
                            <tr
                                style="border-bottom: 1px solid #F3F4F6; cursor: pointer;"
                                on:click=move |_| ctx.open_obsoletos_for(categoria.clone())
                            >
                                <td style="padding: 16px; font-weight: 500; color: #34495E;">{alert.categoria.clone()}</td>
                                <td style="padding: 16px; text-align: center; color: #6B7280;">{alert.skus_potencial_obsoleto}</td>
                                <td style="padding: 16px; text-align: center; color: #6B7280;">{alert.skus_por_revisar}</td>
                                <td style="padding: 16px;">{risk_badge(alert.riesgo)}</td>
                            </tr>
                        }
                    })
                    .collect_view()
                    .into_any()
            };

            view! {
                <div style="display: flex; flex-direction: column; gap: 32px;">
                    <div style="text-align: center;">
                        <h2 style="margin: 0; font-size: 32px; font-weight: 700; color: #1F2937;">
                            "Bienvenido a " <span style="color: #DC2626;">"Smart Clear IA"</span>
                        </h2>
                        <p style="margin: 8px auto 0; max-width: 760px; font-size: 17px; color: #6B7280;">
                            "La solución inteligente para la gestión de inventario y optimización de precios. Transforme el sobrestock en oportunidades de venta con el poder de la inteligencia artificial."
                        </p>
                    </div>
                    <hr style="border: none; border-top: 1px solid #E5E7EB;" />
                    <div style="display: flex; gap: 24px; flex-wrap: wrap;">
                        <KpiCard
                            title="Valor en Riesgo (Potencial)"
                            value=format_currency(kpis.valor_en_riesgo)
                            subtitle="Inventario 'activo' con riesgo"
                            accent="#EF4444"
                        />
                        <KpiCard
                            title="Capital en Liquidación (Actual)"
                            value=format_currency(kpis.capital_en_liquidacion)
                            subtitle="Valor de stock actual en descuento"
                            accent="#F97316"
                        />
                        <KpiCard
                            title="Acción Requerida"
                            value=format!("{} SKUs", kpis.skus_accion_requerida)
                            subtitle="En 'Gestión de Descuentos'"
                            accent="#3B82F6"
                            on_click=Callback::new(move |_| ctx.activate(View::GestionDescuentos))
                        />
                        <KpiCard
                            title="Capital Recuperado (Total)"
                            value=format_currency(kpis.capital_recuperado_total)
                            subtitle="Ventas recuperadas de liquidaciones"
                            accent="#22C55E"
                        />
                    </div>
                    <div style="display: flex; gap: 24px; flex-wrap: wrap;">
                        <div style="flex: 1; min-width: 300px; padding: 24px; border: 1px solid #E5E7EB; border-radius: 8px; background: white;">
                            <h4 style="margin: 0 0 16px; text-align: center; font-weight: 700; color: #34495E;">"Salud Global del Inventario"</h4>
                            <DonutChart slices=charts.salud_global />
                        </div>
                        <div style="flex: 2; min-width: 400px; padding: 24px; border: 1px solid #E5E7EB; border-radius: 8px; background: white;">
                            <h4 style="margin: 0 0 16px; font-weight: 700; color: #34495E;">"Top 5 Categorías con Capital en Riesgo"</h4>
                            <HorizontalBarChart rows=charts.top_riesgo_categoria />
                        </div>
                    </div>
                    <div style="background: white; padding: 24px; border-radius: 12px; border: 1px solid #E5E7EB;">
                        <h3 style="margin: 0 0 16px; font-size: 20px; font-weight: 700; color: #34495E;">"Acciones Urgentes (Resumen de Alertas)"</h3>
                        <div style="overflow-x: auto;">
                            <table style="width: 100%; text-align: left; border-collapse: collapse;">
                                <thead style="border-bottom: 2px solid #E5E7EB; background: #F9FAFB;">
                                    <tr>
                                        <th style="padding: 16px; font-size: 12px; font-weight: 700; color: #6B7280; text-transform: uppercase;">"Categoría"</th>
                                        <th style="padding: 16px; font-size: 12px; font-weight: 700; color: #6B7280; text-transform: uppercase; text-align: center;">"SKUs Potencial a Obsoletos"</th>
                                        <th style="padding: 16px; font-size: 12px; font-weight: 700; color: #6B7280; text-transform: uppercase; text-align: center;">"SKUs con Descuento por Revisar"</th>
                                        <th style="padding: 16px; font-size: 12px; font-weight: 700; color: #6B7280; text-transform: uppercase;">"Riesgo"</th>
                                    </tr>
                                </thead>
                                <tbody>{alert_rows}</tbody>
                            </table>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}
