use leptos::prelude::*;

use super::global_context::{AppGlobalContext, View};
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <aside style="width: 20%; max-width: 320px; flex-shrink: 0; background: #FEF5F5; padding: 24px; display: flex; flex-direction: column;">
            <div style="margin-bottom: 48px; display: flex; align-items: center; height: 40px;">
                <span style="font-size: 32px; font-weight: 800; color: #E74C3C; letter-spacing: -1px;">"plaza"</span>
                <svg style="height: 44px; width: 32px; margin: 0 -8px 0 -4px;" viewBox="0 0 30 40">
                    <path d="M5 15 C 10 30, 15 38, 25 40" stroke="#F1C40F" stroke-width="6" fill="none" stroke-linecap="round" />
                </svg>
                <span style="font-size: 32px; font-weight: 800; color: #E74C3C; letter-spacing: -1px;">"ea"</span>
            </div>
            <nav>
                <ul style="list-style: none; margin: 0; padding: 0;">
                    {View::ALL.into_iter().map(|view| {
                        view! {
                            <li
                                style=move || format!(
                                    "display: flex; align-items: center; gap: 14px; padding: 12px; margin: 6px 0; border-radius: 8px; cursor: pointer; font-weight: 500; {}",
                                    if ctx.active_view.get() == view {
                                        "background: #D9534F; color: white;"
                                    } else {
                                        "color: #34495E;"
                                    }
                                )
                                on:click=move |_| ctx.activate(view)
                            >
                                {icon(view.icon_name())}
                                <span>{view.title()}</span>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>
        </aside>
    }
}
