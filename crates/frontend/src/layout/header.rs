use leptos::prelude::*;

use super::global_context::AppGlobalContext;
use crate::shared::icons::icon;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <header style="display: flex; height: 80px; align-items: center; justify-content: space-between; border-bottom: 1px solid #ECF0F1; background: white; padding: 0 32px; flex-shrink: 0;">
            <h2 style="margin: 0; font-size: 20px; font-weight: 600; color: #34495E;">
                {move || ctx.active_view.get().header_title()}
            </h2>
            <div style="display: flex; align-items: center; gap: 24px; color: #6B7280;">
                {icon("refresh")}
                <div style="display: flex; align-items: center; gap: 12px;">
                    <span style="font-weight: 500; color: #34495E;">"Admin User"</span>
                    <div style="height: 40px; width: 40px; border-radius: 50%; background: #E5E7EB; display: flex; align-items: center; justify-content: center;">
                        {icon("avatar")}
                    </div>
                </div>
            </div>
        </header>
    }
}
