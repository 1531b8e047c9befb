use std::collections::HashSet;

use contracts::domain::alerts::{CategoryAlert, DispatchSummary, RiskLevel, SendAlertRequest};
use contracts::shared::selection;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::modal_service::{sync_action, ModalContent, ModalService};
use crate::shared::api;

const RISK_ALL: &str = "Todos";

fn risk_tag(risk: RiskLevel) -> impl IntoView {
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

/// "Alertas": the per-category risk summaries, fetched once. The risk
/// select filters client-side; selected categories are dispatched as
/// independent concurrent requests and tallied after all settle, so a
/// partial failure reports exact counts.
#[component]
pub fn AlertCenter() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let alerts = RwSignal::new(Vec::<CategoryAlert>::new());
    let selected = RwSignal::new(HashSet::<String>::new());
    let risk_filter = RwSignal::new(RISK_ALL.to_string());
    let loading = RwSignal::new(true);
    let sending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match api::get_list::<CategoryAlert>("/alertas").await {
            Ok(list) => alerts.set(list),
            Err(e) => {
                log::error!("loading alerts: {e}");
                error.set(Some("No se pudo conectar con el servidor.".to_string()));
            }
        }
        loading.set(false);
    });

    let on_send = move |_| {
        if sending.get_untracked() {
            return;
        }
        sending.set(true);
        let picked = selected.get_untracked();
        let to_send: Vec<SendAlertRequest> = alerts
            .get_untracked()
            .iter()
            .filter(|a| picked.contains(&a.categoria))
            .map(SendAlertRequest::for_alert)
            .collect();

        spawn_local(async move {
            let results: Vec<bool> =
                futures::future::join_all(to_send.into_iter().map(|req| async move {
                    api::post_status("/enviar-alerta", &req).await.is_ok()
                }))
                .await;
            sending.set(false);

            let summary = DispatchSummary::tally(&results);
            if summary.all_sent() {
                modal.open(ModalContent::success(
                    "Alerta Enviada",
                    summary.message(),
                    "OK",
                    sync_action(move || {
                        selected.set(HashSet::new());
                        modal.close();
                    }),
                ));
            } else {
                modal.open(ModalContent::confirm(
                    "Error al Enviar Alertas",
                    summary.message(),
                    "OK",
                    sync_action(move || modal.close()),
                ));
            }
        });
    };

    let table_body = move || {
        if loading.get() {
            return view! {
                <tr><td colspan="5" style="text-align: center; padding: 32px; color: #6B7280;">"Cargando alertas..."</td></tr>
            }
            .into_any();
        }
        if let Some(err) = error.get() {
            return view! {
                <tr><td colspan="5" style="text-align: center; padding: 32px; color: #DC2626; font-weight: 600;">{err}</td></tr>
            }
            .into_any();
        }

        let tier = risk_filter.get();
        let displayed: Vec<CategoryAlert> = alerts
            .get()
            .into_iter()
            .filter(|a| tier == RISK_ALL || a.riesgo.label() == tier)
            .collect();
        if displayed.is_empty() {
            return view! {
                <tr><td colspan="5" style="text-align: center; padding: 32px; color: #6B7280;">"No se encontraron alertas para el filtro seleccionado."</td></tr>
            }
            .into_any();
        }

        displayed
            .into_iter()
            .map(|alert| {
                let categoria = alert.categoria.clone();
                view! {
                    <tr style="border-bottom: 1px solid #ECF0F1;">
                        <td style="padding: 16px;">
                            <input
                                type="checkbox"
                                prop:checked=selected.get().contains(&alert.categoria)
                                on:change=move |_| selected.update(|s| selection::toggle(s, categoria.clone()))
                            />
                        </td>
                        <td style="padding: 16px; color: #34495E; font-weight: 500;">{alert.categoria.clone()}</td>
                        <td style="padding: 16px; text-align: center; color: #34495E;">
                            <div style="font-weight: 600;">{alert.skus_potencial_obsoleto}</div>
                            <div style="font-size: 12px; color: #6B7280;">
                                {format!("(Por Revisar: {})", alert.skus_por_revisar)}
                            </div>
                        </td>
                        <td style="padding: 16px; text-align: center; color: #34495E; font-weight: 500;">
                            {format!("{:.1}%", alert.porcentaje_riesgo * 100.0)}
                        </td>
                        <td style="padding: 16px;">{risk_tag(alert.riesgo)}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    let select_all = move |_| {
        let tier = risk_filter.get_untracked();
        let displayed_ids: Vec<String> = alerts
            .get_untracked()
            .iter()
            .filter(|a| tier == RISK_ALL || a.riesgo.label() == tier)
            .map(|a| a.categoria.clone())
            .collect();
        selected.update(|s| selection::toggle_all_displayed(s, &displayed_ids));
    };

    let all_displayed_selected = move || {
        let tier = risk_filter.get();
        let displayed_ids: Vec<String> = alerts
            .get()
            .iter()
            .filter(|a| tier == RISK_ALL || a.riesgo.label() == tier)
            .map(|a| a.categoria.clone())
            .collect();
        selection::all_displayed_selected(&selected.get(), &displayed_ids)
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 24px;">
            <div style="display: flex; justify-content: space-between; align-items: center; background: white; padding: 16px; border-radius: 8px; border: 1px solid #ECF0F1;">
                <select
                    style="padding: 8px 12px; border: 1px solid #ECF0F1; border-radius: 6px; color: #34495E;"
                    on:change=move |ev| risk_filter.set(event_target_value(&ev))
                >
                    <option value=RISK_ALL>"Filtrar por Riesgo: Todos"</option>
                    <option value="Alto">"Alto"</option>
                    <option value="Medio">"Medio"</option>
                    <option value="Bajo">"Bajo"</option>
                </select>
                {move || {
                    let count = selected.get().len();
                    let disabled = count == 0 || sending.get();
                    let text = if sending.get() {
                        "Enviando...".to_string()
                    } else if count > 0 {
                        format!("Alertar a ({count}) Categorías")
                    } else {
                        "Seleccione categorías".to_string()
                    };
                    view! {
                        <button
                            style=format!(
                                "padding: 8px 16px; border: none; border-radius: 6px; color: white; font-weight: 600; {}",
                                if disabled {
                                    "background: #D1D5DB; cursor: not-allowed;"
                                } else {
                                    "background: #D9534F; cursor: pointer;"
                                }
                            )
                            disabled=disabled
                            on:click=on_send
                        >
                            {text}
                        </button>
                    }
                }}
            </div>
            <div style="background: white; padding: 16px; border-radius: 8px; border: 1px solid #ECF0F1;">
                <div style="overflow-x: auto;">
                    <table style="width: 100%; text-align: left; border-collapse: collapse;">
                        <thead style="border-bottom: 2px solid #ECF0F1;">
                            <tr>
                                <th style="padding: 16px; width: 48px;">
                                    <input
                                        type="checkbox"
                                        prop:checked=all_displayed_selected
                                        on:change=select_all
                                    />
                                </th>
                                <th style="padding: 16px; color: #34495E; font-weight: 700;">"CATEGORÍA"</th>
                                <th style="padding: 16px; color: #34495E; font-weight: 700; text-align: center;">"SKUs AFECTADOS"</th>
                                <th style="padding: 16px; color: #34495E; font-weight: 700; text-align: center;">"% SKUS EN RIESGO"</th>
                                <th style="padding: 16px; color: #34495E; font-weight: 700;">"RIESGO"</th>
                            </tr>
                        </thead>
                        <tbody>{table_body}</tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
