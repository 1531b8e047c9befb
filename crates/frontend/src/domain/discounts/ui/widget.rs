use contracts::domain::discounts::{
    DiscountSuggestion, HistoryEntry, HistoryRecord, PricingResponse, SubmissionStatus,
};
use contracts::domain::filters::ListFilter;
use contracts::shared::format::format_money;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::state::{create_state, DiscountBoard};
use crate::layout::modal_service::{async_action, sync_action, ModalContent, ModalService};
use crate::shared::api;
use crate::shared::filter_bar::FilterBar;
use crate::shared::icons::icon;

fn status_tag(status: SubmissionStatus) -> impl IntoView {
    let (bg, fg) = match status {
        SubmissionStatus::Procesado => ("#D1FAE5", "#065F46"),
        SubmissionStatus::Pendiente => ("#FEF9C3", "#854D0E"),
        SubmissionStatus::Rechazado => ("#FEE2E2", "#991B1B"),
    };
    view! {
        <span style=format!("padding: 2px 8px; font-size: 12px; font-weight: 600; border-radius: 9999px; background: {bg}; color: {fg};")>
            {status.label()}
        </span>
    }
}

/// "Gestión de Descuentos": the discount-simulation table.
///
/// A search fetches the AI suggestions and the matching submission history
/// in one joint request pair; either failing fails the search. Rows are
/// edited locally (final discount, derived price/margin/warning) and the
/// selected batch goes to pricing through the confirm modal. Only a
/// successful response removes the rows and prepends them to the history.
#[component]
pub fn DiscountManager() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let board = create_state();
    let history = RwSignal::new(Vec::<HistoryEntry>::new());
    let history_loading = RwSignal::new(true);
    let has_searched = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let last_filter = RwSignal::new(ListFilter::default());
    let generation = RwSignal::new(0u64);

    // Full history on entry, before any search narrows it.
    spawn_local(async move {
        match api::get_list::<HistoryRecord>("/ver-descuentos").await {
            Ok(records) => history.set(records.into_iter().map(HistoryEntry::from).collect()),
            Err(e) => log::error!("loading initial pricing history: {e}"),
        }
        history_loading.set(false);
    });

    let run_search = move |filter: ListFilter| {
        has_searched.set(true);
        loading.set(true);
        error.set(None);
        last_filter.set(filter.clone());

        let current = generation.get_untracked() + 1;
        generation.set(current);
        spawn_local(async move {
            // History ignores the SKU constraint; it filters by category/brand only.
            let history_filter = ListFilter {
                sku: String::new(),
                ..filter.clone()
            };
            let merma_query = api::query_string(&filter.query_pairs());
            let history_query = api::query_string(&history_filter.query_pairs());
            let merma_path = format!("/mostrar-merma{merma_query}");
            let history_path = format!("/ver-descuentos{history_query}");
            let (suggestions, records) = futures::join!(
                api::get_list::<DiscountSuggestion>(&merma_path),
                api::get_list::<HistoryRecord>(&history_path),
            );
            if generation.get_untracked() != current {
                return;
            }
            match suggestions.and_then(|s| records.map(|r| (s, r))) {
                Ok((s, r)) => {
                    board.update(|b| b.load(s));
                    history.set(r.into_iter().map(HistoryEntry::from).collect());
                }
                Err(e) => {
                    log::error!("searching discount suggestions: {e}");
                    error.set(Some(
                        "No se pudo conectar con el servidor. Por favor, intente más tarde."
                            .to_string(),
                    ));
                    board.update(|b| b.clear());
                    history.set(Vec::new());
                }
            }
            loading.set(false);
        });
    };

    let on_send = move |_| {
        let count = board.get_untracked().selected.len();
        modal.open(ModalContent::confirm(
            "Confirmar Envío a Pricing",
            format!(
                "Estás a punto de enviar {count} producto(s) con los descuentos finales configurados. ¿Deseas continuar?"
            ),
            "Confirmar y Enviar",
            async_action(move || async move {
                let request = board.get_untracked().pricing_request();
                match api::post_json::<_, PricingResponse>("/enviar-a-pricing", &request).await {
                    Ok(resp) => {
                        let entries = board
                            .try_update(DiscountBoard::commit_submission)
                            .unwrap_or_default();
                        history.update(|h| {
                            h.splice(0..0, entries);
                        });
                        modal.open(ModalContent::success(
                            "Envío Exitoso",
                            format!(
                                "Se enviaron {} producto(s) a pricing. Omitidos: {}.",
                                resp.productos_actualizados, resp.productos_omitidos
                            ),
                            "OK",
                            sync_action(move || modal.close()),
                        ));
                        Ok(())
                    }
                    Err(e) => {
                        modal.open(ModalContent::confirm(
                            "Error de Envío",
                            format!("No se pudieron enviar los productos. {e}"),
                            "Entendido",
                            sync_action(move || modal.close()),
                        ));
                        Err(e)
                    }
                }
            }),
        ));
    };

    let suggestions_section = move || {
        if !has_searched.get() {
            return view! {
                <p style="text-align: center; color: #95A5A6; padding: 80px 0;">
                    "Utilice los filtros y haga clic en Buscar para ver las sugerencias de descuento."
                </p>
            }
            .into_any();
        }
        if loading.get() {
            return view! {
                <p style="text-align: center; color: #34495E; font-weight: 600; padding: 80px 0;">"Buscando sugerencias..."</p>
            }
            .into_any();
        }
        if let Some(err) = error.get() {
            return view! {
                <div style="text-align: center; padding: 80px 0;">
                    <p style="color: #E74C3C; font-weight: 600;">{err}</p>
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

        let snapshot = board.get();
        if snapshot.candidates.is_empty() {
            return view! {
                <div style="text-align: center; padding: 80px 0; color: #95A5A6;">
                    "No se encontraron productos para liquidación con los filtros seleccionados."
                </div>
            }
            .into_any();
        }

        let total = snapshot.candidates.len();
        let selected_count = snapshot.selected.len();
        let all_selected = snapshot.all_selected();

        let rows = snapshot
            .candidates
            .iter()
            .map(|c| {
                let sku_id = c.sku_id;
                let suggestion_tooltip = format!(
                    "Justificación IA:\n{}. Con este dcto. se estima liquidar el stock en 35 días.",
                    c.justificacion
                );
                let input_border = if c.has_warning { "#EF4444" } else { "#ECF0F1" };
                let note = if c.has_warning {
                    view! {
                        <p style="margin: 4px 0 0; font-size: 12px; color: #DC2626; display: flex; align-items: center; gap: 4px;">
                            {icon("warning")}
                            "Descuento genera margen negativo."
                        </p>
                    }
                    .into_any()
                } else {
                    view! {
                        <p style="margin: 4px 0 0; font-size: 12px; color: #6B7280;">{c.forecast.text()}</p>
                    }
                    .into_any()
                };
                let margin_color = if c.margin_impact >= 0.0 { "#16A34A" } else { "#DC2626" };
                let margin_sign = if c.margin_impact >= 0.0 { "+" } else { "" };
                let is_row_selected = snapshot.selected.contains(&sku_id);
                view! {
                    <tr style="border-bottom: 1px solid #ECF0F1;">
                        <td style="padding: 16px;">
                            <input
                                type="checkbox"
                                prop:checked=is_row_selected
                                on:change=move |_| board.update(|b| b.toggle_select(sku_id))
                            />
                        </td>
                        <td style="padding: 16px;">
                            <p style="margin: 0; font-weight: 500; color: #34495E;">{c.producto.clone()}</p>
                            <p style="margin: 4px 0 0; font-size: 13px; color: #7F8C8D;">{sku_id}</p>
                        </td>
                        <td style="padding: 16px; color: #34495E;">{format_money(c.p_regular)}</td>
                        <td style="padding: 16px; text-align: center; color: #34495E;">{c.stock}</td>
                        <td style="padding: 16px; text-align: center; color: #2563EB; font-weight: 600;">
                            <span
                                style="display: inline-flex; align-items: center; gap: 4px; cursor: help;"
                                title=suggestion_tooltip
                            >
                                {format!("{}%", c.dto_sugerido)}
                                {icon("sparkle")}
                            </span>
                        </td>
                        <td style="padding: 16px; min-width: 220px;">
                            <div style="display: flex; align-items: center; gap: 8px;">
                                <input
                                    type="number"
                                    style=format!("width: 90px; border: 1px solid {input_border}; border-radius: 6px; padding: 4px 8px; text-align: center; font-weight: 600; color: #34495E;")
                                    prop:value=c.dto_final
                                    on:input=move |ev| {
                                        let raw = event_target_value(&ev);
                                        board.update(|b| b.edit_discount(sku_id, &raw));
                                    }
                                />
                                <button
                                    title="Aplicar sugerencia"
                                    style="padding: 4px; border: none; background: transparent; color: #9CA3AF; cursor: pointer;"
                                    on:click=move |_| board.update(|b| b.apply_suggestion(sku_id))
                                >
                                    {icon("refresh")}
                                </button>
                            </div>
                            {note}
                        </td>
                        <td style="padding: 16px; font-weight: 700; color: #F97316;">
                            {format_money(c.p_liquidacion)}
                            <p style=format!("margin: 2px 0 0; font-size: 12px; font-weight: 400; color: {margin_color};")>
                                {format!("(Margen: {margin_sign}{})", format_money(c.margin_impact))}
                            </p>
                        </td>
                    </tr>
                }
            })
            .collect_view();

        view! {
            <div style="background: white; padding: 24px; border-radius: 8px; border: 1px solid #ECF0F1; display: flex; flex-direction: column; gap: 16px;">
                <h3 style="margin: 0; font-size: 20px; font-weight: 700; color: #34495E;">"SKUs Pendientes de Aprobación"</h3>
                <div style="display: flex; justify-content: space-between; align-items: center;">
                    <p style="margin: 0; color: #34495E; font-weight: 600;">
                        {format!("{selected_count} de {total} seleccionados")}
                    </p>
                    <div style="display: flex; align-items: center; gap: 16px;">
                        <button style="display: flex; align-items: center; gap: 8px; padding: 8px 16px; background: white; border: 1px solid #BDC3C7; color: #34495E; font-weight: 600; border-radius: 6px; cursor: pointer;">
                            {icon("download")}
                            "Descargar SKUs"
                        </button>
                        <button
                            style=format!(
                                "padding: 8px 16px; border: none; border-radius: 6px; color: white; font-weight: 600; {}",
                                if selected_count == 0 {
                                    "background: #9CA3AF; cursor: not-allowed;"
                                } else {
                                    "background: #3498DB; cursor: pointer;"
                                }
                            )
                            disabled=selected_count == 0
                            on:click=on_send
                        >
                            "Enviar a Pricing"
                        </button>
                    </div>
                </div>
                <div style="overflow-x: auto;">
                    <table style="width: 100%; text-align: left; border-collapse: collapse; white-space: nowrap;">
                        <thead style="border-bottom: 2px solid #ECF0F1;">
                            <tr>
                                <th style="padding: 16px; width: 48px;">
                                    <input
                                        type="checkbox"
                                        prop:checked=all_selected
                                        on:change=move |_| board.update(|b| b.toggle_select_all())
                                    />
                                </th>
                                <th style="padding: 16px; color: #34495E; font-weight: 700;">"Producto"</th>
                                <th style="padding: 16px; color: #34495E; font-weight: 700;">"P. Regular"</th>
                                <th style="padding: 16px; color: #34495E; font-weight: 700;">"Stock"</th>
                                <th style="padding: 16px; color: #34495E; font-weight: 700;">"Dto. Sugerido"</th>
                                <th style="padding: 16px; color: #34495E; font-weight: 700;">"Dto. Final (%)"</th>
                                <th style="padding: 16px; color: #34495E; font-weight: 700;">"P. Liquidación"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </div>
        }
        .into_any()
    };

    let history_section = move || {
        let body = if history_loading.get() {
            view! {
                <tr><td colspan="6" style="text-align: center; padding: 32px; color: #95A5A6;">"Cargando historial..."</td></tr>
            }
            .into_any()
        } else if history.get().is_empty() {
            let empty_text = if has_searched.get() {
                "Aún no se han enviado productos a Pricing con estos filtros."
            } else {
                "Aún no se han enviado productos a Pricing."
            };
            view! {
                <tr><td colspan="6" style="text-align: center; padding: 32px; color: #95A5A6;">{empty_text}</td></tr>
            }
            .into_any()
        } else {
            history
                .get()
                .into_iter()
                .map(|h| {
                    view! {
                        <tr style="border-bottom: 1px solid #ECF0F1; background: #F9FAFB;">
                            <td style="padding: 16px; color: #7F8C8D;">{h.sku_id}</td>
                            <td style="padding: 16px; color: #34495E;">{h.producto.clone()}</td>
                            <td style="padding: 16px; color: #34495E;">{format_money(h.p_regular)}</td>
                            <td style="padding: 16px; color: #34495E; font-weight: 600; text-align: center;">{format!("{}%", h.dto_final)}</td>
                            <td style="padding: 16px; color: #34495E; font-weight: 700;">{format_money(h.p_liquidacion)}</td>
                            <td style="padding: 16px;">{status_tag(h.estado)}</td>
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        };

        view! {
            <div style="background: white; padding: 24px; border-radius: 8px; border: 1px solid #ECF0F1;">
                <h3 style="margin: 0 0 16px; font-size: 20px; font-weight: 700; color: #34495E;">"Historial de Envíos a Pricing"</h3>
                <div style="overflow-x: auto;">
                    <table style="width: 100%; text-align: left; border-collapse: collapse;">
                        <thead style="border-bottom: 2px solid #ECF0F1;">
                            <tr>
                                <th style="padding: 16px; color: #34495E; font-weight: 700;">"SKU"</th>
                                <th style="padding: 16px; color: #34495E; font-weight: 700;">"PRODUCTO"</th>
                                <th style="padding: 16px; color: #34495E; font-weight: 700;">"P. REGULAR"</th>
                                <th style="padding: 16px; color: #34495E; font-weight: 700;">"DTO. FINAL (%)"</th>
                                <th style="padding: 16px; color: #34495E; font-weight: 700;">"P. LIQUIDACIÓN"</th>
                                <th style="padding: 16px; color: #34495E; font-weight: 700;">"ESTADO"</th>
                            </tr>
                        </thead>
                        <tbody>{body}</tbody>
                    </table>
                </div>
            </div>
        }
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 24px;">
            <p style="margin: 0; color: #7F8C8D;">
                "Reciba sugerencias de descuento generadas por IA para cada producto obsoleto. Ajuste los precios, confirme las acciones y envíe la información directamente al equipo de pricing."
            </p>
            <FilterBar on_search=Callback::new(run_search) />
            {suggestions_section}
            <hr style="border: none; border-top: 1px solid #E5E7EB;" />
            {history_section}
        </div>
    }
}
