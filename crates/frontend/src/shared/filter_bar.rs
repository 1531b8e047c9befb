use contracts::domain::filters::{ListFilter, ALL_OPTION};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlSelectElement;

use super::api;
use super::icons::icon;

const SELECT_STYLE: &str = "padding: 8px 12px; border: 1px solid #D1D5DB; border-radius: 6px; background: white; color: #34495E; min-width: 160px;";
const LABEL_STYLE: &str = "font-size: 12px; font-weight: 600; color: #6B7280; display: block; margin-bottom: 4px;";

/// Shared category / brand / SKU filter row.
///
/// Categories load once. Changing the category refetches the brand list for
/// that category and resets the brand selection; a stale brand response
/// (superseded by a newer category pick) is discarded via a generation
/// counter. The `on_search` callback only fires on the explicit button.
#[component]
pub fn FilterBar(
    on_search: Callback<ListFilter>,
    /// Pre-seeded filter, e.g. a category handed over from another view.
    #[prop(optional)]
    initial: Option<ListFilter>,
) -> impl IntoView {
    let categories = RwSignal::new(Vec::<String>::new());
    let categories_error = RwSignal::new(None::<String>);
    let categories_loading = RwSignal::new(true);

    let brands = RwSignal::new(Vec::<String>::new());
    let brand_generation = RwSignal::new(0u64);

    let filter = RwSignal::new(initial.unwrap_or_default());

    let load_categories = move || {
        categories_loading.set(true);
        categories_error.set(None);
        spawn_local(async move {
            match api::get_list::<String>("/categorias").await {
                Ok(list) => categories.set(list),
                Err(e) => {
                    log::error!("loading categories: {e}");
                    categories_error.set(Some(e));
                }
            }
            categories_loading.set(false);
        });
    };
    load_categories();

    let load_brands = move |categoria: String| {
        let generation = brand_generation.get_untracked() + 1;
        brand_generation.set(generation);
        spawn_local(async move {
            let query = if categoria == ALL_OPTION {
                String::new()
            } else {
                api::query_string(&[("categoria", categoria)])
            };
            match api::get_list::<String>(&format!("/marcas{query}")).await {
                Ok(list) if brand_generation.get_untracked() == generation => brands.set(list),
                Ok(_) => {}
                Err(e) => log::error!("loading brands: {e}"),
            }
        });
    };
    load_brands(filter.get_untracked().categoria);

    let on_category_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        filter.update(|f| {
            f.categoria = value.clone();
            f.marca = ALL_OPTION.to_string();
        });
        load_brands(value);
    };

    view! {
        <div style="background: #F9FAFB; border: 1px solid #ECF0F1; border-radius: 8px; padding: 16px; margin-bottom: 24px;">
            {move || {
                if categories_loading.get() {
                    return view! {
                        <p style="margin: 0; color: #6B7280;">"Cargando filtros..."</p>
                    }
                    .into_any();
                }
                if let Some(err) = categories_error.get() {
                    return view! {
                        <div style="display: flex; align-items: center; gap: 12px;">
                            <span style="color: #E74C3C;">{format!("Error al cargar filtros: {err}")}</span>
                            <button
                                style="padding: 6px 12px; border: 1px solid #E74C3C; border-radius: 6px; background: white; color: #E74C3C; cursor: pointer;"
                                on:click=move |_| load_categories()
                            >
                                "Reintentar Carga"
                            </button>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div style="display: flex; align-items: flex-end; gap: 16px; flex-wrap: wrap;">
                        <div>
                            <label style=LABEL_STYLE>"Categoría"</label>
                            <select
                                style=SELECT_STYLE
                                prop:value=move || filter.get().categoria
                                on:change=on_category_change
                            >
                                <option value=ALL_OPTION>{ALL_OPTION}</option>
                                {categories.get().into_iter().map(|c| {
                                    view! { <option value=c.clone()>{c.clone()}</option> }
                                }).collect_view()}
                            </select>
                        </div>
                        <div>
                            <label style=LABEL_STYLE>"Marca"</label>
                            <select
                                style=SELECT_STYLE
                                prop:value=move || filter.get().marca
                                on:change=move |ev| {
                                    let select: HtmlSelectElement = event_target(&ev);
                                    filter.update(|f| f.marca = select.value());
                                }
                            >
                                <option value=ALL_OPTION>{ALL_OPTION}</option>
                                {move || brands.get().into_iter().map(|b| {
                                    view! { <option value=b.clone()>{b.clone()}</option> }
                                }).collect_view()}
                            </select>
                        </div>
                        <div>
                            <label style=LABEL_STYLE>"SKU"</label>
                            <input
                                type="text"
                                placeholder="Buscar por SKU..."
                                style="padding: 8px 12px; border: 1px solid #D1D5DB; border-radius: 6px; min-width: 200px;"
                                prop:value=move || filter.get().sku
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    filter.update(|f| f.sku = value);
                                }
                            />
                        </div>
                        <button
                            style="display: flex; align-items: center; gap: 8px; padding: 9px 20px; border: none; border-radius: 6px; background: #D9534F; color: white; font-weight: 600; cursor: pointer;"
                            on:click=move |_| on_search.run(filter.get_untracked())
                        >
                            {icon("search")}
                            "Buscar"
                        </button>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
