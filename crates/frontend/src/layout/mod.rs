pub mod global_context;
pub mod header;
pub mod modal_service;
pub mod sidebar;

use global_context::{AppGlobalContext, View};
use header::Header;
use leptos::prelude::*;
use modal_service::ModalHost;
use sidebar::Sidebar;

use crate::domain::alerts::ui::AlertCenter;
use crate::domain::dashboard::ui::HomeDashboard;
use crate::domain::discounts::ui::DiscountManager;
use crate::domain::monitoring::ui::SalesMonitor;
use crate::domain::obsolescence::ui::ObsoleteManager;

/// Main application shell.
///
/// ```text
/// +---------+--------------------------+
/// |         |         Header           |
/// | Sidebar +--------------------------+
/// |         |     Content (scroll)     |
/// +---------+--------------------------+
/// ```
///
/// Each view section owns its own data and error state; a failing section
/// never takes the shell down with it.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div style="display: flex; height: 100vh; width: 100%; background: white; font-family: sans-serif;">
            <Sidebar />
            <div style="flex: 1; display: flex; flex-direction: column; overflow: hidden;">
                <Header />
                <main style="flex: 1; overflow-y: auto; background: white; padding: 32px;">
                    {move || match ctx.active_view.get() {
                        View::Inicio => view! { <HomeDashboard /> }.into_any(),
                        View::GestionObsoletos => view! { <ObsoleteManager /> }.into_any(),
                        View::GestionDescuentos => view! { <DiscountManager /> }.into_any(),
                        View::Monitoreo => view! { <SalesMonitor /> }.into_any(),
                        View::Alertas => view! { <AlertCenter /> }.into_any(),
                    }}
                </main>
            </div>
            <ModalHost />
        </div>
    }
}
