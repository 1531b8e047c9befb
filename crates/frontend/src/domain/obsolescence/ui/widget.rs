use std::collections::HashSet;

use contracts::domain::filters::ListFilter;
use contracts::domain::obsolescence::{
    MarkObsoleteRequest, MarkObsoleteResponse, ObsoleteProduct, Semaforo,
};
use contracts::shared::selection;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::modal_service::{async_action, sync_action, ModalContent, ModalService};
use crate::shared::api;
use crate::shared::filter_bar::FilterBar;
use crate::shared::icons::icon;

#[derive(Clone, Copy, PartialEq, Eq)]
enum QuickFilter {
    Todos,
    Riesgo,
    Saludable,
}

fn status_pill(semaforo: Semaforo) -> impl IntoView {
    let (bg, fg, dot) = if semaforo.is_risk() {
        ("#FEE2E2", "#991B1B", "#EF4444")
    } else {
        ("#D1FAE5", "#065F46", "#22C55E")
    };
    view! {
        <span style=format!("display: inline-flex; align-items: center; padding: 4px 12px; font-size: 13px; font-weight: 600; border-radius: 9999px; background: {bg}; color: {fg};")>
            <span style=format!("width: 8px; height: 8px; margin-right: 8px; border-radius: 50%; background: {dot};")></span>
            {semaforo.label()}
        </span>
    }
}

/// "Gestión de Obsoletos": search-driven candidate list with quick risk
/// filters, displayed-subset select-all and the mark-as-obsolete flow.
///
/// Every search carries a generation number; a response that arrives after
/// a newer search started is dropped instead of overwriting fresher rows.
#[component]
pub fn ObsoleteManager() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let products = RwSignal::new(Vec::<ObsoleteProduct>::new());
    let selected = RwSignal::new(HashSet::<i64>::new());
    let quick = RwSignal::new(QuickFilter::Todos);
    let has_searched = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let last_filter = RwSignal::new(ListFilter::default());
    let generation = RwSignal::new(0u64);

    let run_search = move |filter: ListFilter| {
        has_searched.set(true);
        loading.set(true);
        error.set(None);
        quick.set(QuickFilter::Todos);
        last_filter.set(filter.clone());

        let current = generation.get_untracked() + 1;
        generation.set(current);
        spawn_local(async move {
            let query = api::query_string(&filter.query_pairs());
            let result =
                api::get_list::<ObsoleteProduct>(&format!("/gestion-obsoletos{query}")).await;
            if generation.get_untracked() != current {
                return;
            }
            match result {
                Ok(list) => products.set(list),
                Err(e) => {
                    log::error!("searching obsolete candidates: {e}");
                    error.set(Some(
                        "No se pudo conectar con el servidor. Por favor, intente más tarde."
                            .to_string(),
                    ));
                    products.set(Vec::new());
                }
            }
            loading.set(false);
        });
    };

    // Category handed over from a dashboard alert row: pre-filter and search.
    let initial = ctx.take_pending_category().map(|categoria| ListFilter {
        categoria,
        ..ListFilter::default()
    });
    if let Some(filter) = initial.clone() {
        run_search(filter);
    }

    let on_mark = move |_| {
        let count = selected.get_untracked().len();
        modal.open(ModalContent::confirm(
            "Confirmar Acción",
            format!(
                "¿Estás seguro que deseas marcar {count} producto(s) como obsoleto? Esta acción los moverá al módulo de gestión de descuentos."
            ),
            "Confirmar",
            async_action(move || async move {
                let sku_ids: Vec<i64> = selected.get_untracked().iter().copied().collect();
                match api::post_json::<_, MarkObsoleteResponse>(
                    "/marcar-obsoleto",
                    &MarkObsoleteRequest { sku_ids },
                )
                .await
                {
                    Ok(resp) => {
                        modal.open(ModalContent::success(
                            "Acción Exitosa",
                            format!(
                                "Se marcaron {} producto(s) como obsoletos.",
                                resp.skus_actualizados
                            ),
                            "OK",
                            sync_action(move || modal.close()),
                        ));
                        selected.set(HashSet::new());
                        run_search(last_filter.get_untracked());
                        Ok(())
                    }
                    Err(e) => {
                        modal.open(ModalContent::confirm(
                            "Error",
                            "No se pudieron marcar los productos como obsoletos. Por favor, intente de nuevo.",
                            "OK",
                            sync_action(move || modal.close()),
                        ));
                        Err(e)
                    }
                }
            }),
        ));
    };

    let quick_button = move |label: &'static str, count: usize, value: QuickFilter| {
        let active = quick.get() == value;
        view! {
            <button
                style=format!(
                    "display: flex; align-items: center; gap: 6px; padding: 8px 16px; border: none; border-radius: 8px; font-size: 14px; cursor: pointer; {}",
                    if active {
                        "background: #FEF2F2; color: #D9534F; font-weight: 600;"
                    } else {
                        "background: transparent; color: #6B7280;"
                    }
                )
                on:click=move |_| quick.set(value)
            >
                {label}
                <span style=format!(
                    "font-size: 12px; padding: 2px 8px; border-radius: 9999px; {}",
                    if active { "background: #D9534F; color: white;" } else { "background: #E5E7EB; color: #4B5563;" }
                )>
                    {count}
                </span>
            </button>
        }
    };

    view! {
        <div style="display: flex; flex-direction: column; gap: 24px;">
            <p style="margin: 0; color: #7F8C8D;">
                "Identifique productos con riesgo de volverse obsoletos. Utilice los filtros para analizar el inventario y marque los productos que requieran acción para enviarlos a la gestión de descuentos."
            </p>
            <FilterBar on_search=Callback::new(run_search) initial=initial.unwrap_or_default() />
            {move || {
                if !has_searched.get() {
                    return view! {
                        <div style="text-align: center; background: white; padding: 80px; border-radius: 8px; border: 1px solid #E5E7EB; color: #9CA3AF;">
                            {icon("inbox")}
                            <h3 style="margin: 16px 0 0; font-size: 18px; font-weight: 600; color: #34495E;">"Realice una búsqueda para empezar"</h3>
                            <p style="margin: 8px 0 0; font-size: 14px; color: #95A5A6;">"Utilice los filtros para encontrar productos y evaluar su estado de inventario."</p>
                        </div>
                    }
                    .into_any();
                }
                if loading.get() {
                    return view! {
                        <div style="text-align: center; padding: 80px; font-weight: 600; color: #34495E;">"Buscando productos..."</div>
                    }
                    .into_any();
                }
                if let Some(err) = error.get() {
                    return view! {
                        <div style="text-align: center; padding: 80px;">
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

                let all = products.get();
                let risk_count = all.iter().filter(|p| p.semaforo.is_risk()).count();
                let healthy_count = all.len() - risk_count;
                let displayed: Vec<ObsoleteProduct> = match quick.get() {
                    QuickFilter::Todos => all.clone(),
                    QuickFilter::Riesgo => all.iter().filter(|p| p.semaforo.is_risk()).cloned().collect(),
                    QuickFilter::Saludable => all.iter().filter(|p| !p.semaforo.is_risk()).cloned().collect(),
                };
                let displayed_ids: Vec<i64> = displayed.iter().map(|p| p.sku_id).collect();
                let all_selected = selection::all_displayed_selected(&selected.get(), &displayed_ids);
                let selected_count = selected.get().len();
                let toggle_ids = displayed_ids.clone();

                let body = if displayed.is_empty() {
                    view! {
                        <div style="text-align: center; padding: 64px; color: #6B7280;">
                            {icon("inbox")}
                            <h4 style="margin: 16px 0 0; font-size: 18px; font-weight: 600; color: #34495E;">"No hay productos que coincidan"</h4>
                            <p style="margin: 8px 0 0; font-size: 14px;">"Intente ajustar los filtros de búsqueda o el filtro rápido."</p>
                        </div>
                    }
                    .into_any()
                } else {
                    let rows = displayed
                        .into_iter()
                        .map(|p| {
                            let sku_id = p.sku_id;
                            let risk_cell = "padding: 16px; text-align: center; color: #DC2626; font-weight: 700;";
                            let plain_cell = "padding: 16px; text-align: center; color: #34495E; font-weight: 500;";
                            let inventory_style = if p.semaforo.is_risk() && p.high_inventory() { risk_cell } else { plain_cell };
                            let ratio_style = if p.semaforo.is_risk() && p.high_ratio() { risk_cell } else { plain_cell };
                            view! {
                                <tr style="border-bottom: 1px solid #F3F4F6;">
                                    <td style="padding: 16px;">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || selected.get().contains(&sku_id)
                                            on:change=move |_| selected.update(|s| selection::toggle(s, sku_id))
                                        />
                                    </td>
                                    <td style="padding: 16px;">
                                        <p style="margin: 0; font-weight: 500; color: #34495E;">{p.product_name.clone()}</p>
                                        <p style="margin: 4px 0 0; font-size: 13px; color: #6B7280;">
                                            {format!("SKU: {} | Marca: {}", p.sku_id, p.brand)}
                                        </p>
                                    </td>
                                    <td style=inventory_style>{p.dias_inventario}</td>
                                    <td style=ratio_style>{format!("{:.2}", p.ratio_stock_venta)}</td>
                                    <td style="padding: 16px;">{status_pill(p.semaforo)}</td>
                                </tr>
                            }
                        })
                        .collect_view();
                    view! {
                        <div style="overflow-x: auto;">
                            <table style="width: 100%; text-align: left; border-collapse: collapse;">
                                <thead style="border-bottom: 2px solid #E5E7EB; background: #F9FAFB;">
                                    <tr>
                                        <th style="padding: 16px; width: 48px;">
                                            <input
                                                type="checkbox"
                                                prop:checked=all_selected
                                                on:change=move |_| selected.update(|s| selection::toggle_all_displayed(s, &toggle_ids))
                                            />
                                        </th>
                                        <th style="padding: 16px; font-size: 12px; font-weight: 700; color: #6B7280; text-transform: uppercase;">"Producto"</th>
                                        <th style="padding: 16px; font-size: 12px; font-weight: 700; color: #6B7280; text-transform: uppercase;">"Días Inventario"</th>
                                        <th style="padding: 16px; font-size: 12px; font-weight: 700; color: #6B7280; text-transform: uppercase;">"Ratio Stock/Venta"</th>
                                        <th style="padding: 16px; font-size: 12px; font-weight: 700; color: #6B7280; text-transform: uppercase;">"Estado"</th>
                                    </tr>
                                </thead>
                                <tbody>{rows}</tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                };

                view! {
                    <div style="background: white; padding: 24px; border-radius: 8px; border: 1px solid #E5E7EB;">
                        <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px; padding-bottom: 16px; border-bottom: 1px solid #E5E7EB;">
                            <div style="display: flex; align-items: center; gap: 8px;">
                                {quick_button("Todos", all.len(), QuickFilter::Todos)}
                                {quick_button("En Riesgo", risk_count, QuickFilter::Riesgo)}
                                {quick_button("Saludables", healthy_count, QuickFilter::Saludable)}
                            </div>
                            <button
                                style=format!(
                                    "padding: 8px 16px; border: none; border-radius: 6px; color: white; font-weight: 600; {}",
                                    if selected_count == 0 {
                                        "background: #9CA3AF; cursor: not-allowed;"
                                    } else {
                                        "background: #D9534F; cursor: pointer;"
                                    }
                                )
                                disabled=selected_count == 0
                                on:click=on_mark
                            >
                                {format!("Marcar ({selected_count}) como Obsoletos")}
                            </button>
                        </div>
                        {body}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
