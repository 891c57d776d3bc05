use settlo_shared::{Lead, LeadFilter, LeadStatus, count_by_status};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::{UseAsyncOptions, use_async_with_options};
use yew_router::prelude::*;

use crate::components::auth::AuthContext;
use crate::components::layout::Route;
use crate::components::lead_card::LeadCard;
use crate::components::toast::{Notice, Toast};
use crate::services;

#[function_component(LeadsPage)]
pub fn leads_page() -> Html {
    let auth_ctx = use_context::<AuthContext>().expect("AuthContext not found");
    let filter = use_state(LeadFilter::default);
    let notice = use_state(|| None::<Notice>);

    // Full re-fetch on mount and after every mutation; no incremental
    // patching at this scale.
    let leads_query = {
        let session = auth_ctx.session.clone();
        use_async_with_options(
            async move {
                services::leads::list(session.as_ref()).await.map_err(|err| {
                    gloo::console::error!("failed to load leads:", err.to_string());
                    err.to_string()
                })
            },
            UseAsyncOptions::enable_auto(),
        )
    };

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filter.set(LeadFilter {
                query: input.value(),
                status: filter.status,
            });
        })
    };

    let on_changed = {
        let leads_query = leads_query.clone();
        Callback::from(move |_: ()| leads_query.run())
    };

    let on_refresh = {
        let leads_query = leads_query.clone();
        Callback::from(move |_: MouseEvent| leads_query.run())
    };

    let on_notice = {
        let notice = notice.clone();
        Callback::from(move |n: Notice| notice.set(Some(n)))
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    let all_leads: &[Lead] = leads_query.data.as_deref().unwrap_or_default();
    let visible = filter.apply(all_leads);

    // Badge counts run over the full set so they stay put while typing.
    let status_tab = |status: Option<LeadStatus>| -> Html {
        let label = status.map_or("All", |s| s.label());
        let count = match status {
            None => all_leads.len(),
            Some(s) => count_by_status(all_leads, s),
        };
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| {
                filter.set(LeadFilter {
                    query: filter.query.clone(),
                    status,
                });
            })
        };
        html! {
            <FilterTab
                label={label.to_string()}
                {count}
                active={filter.status == status}
                {onclick}
            />
        }
    };

    html! {
        <div class="p-6 space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-white">{"All Leads"}</h1>
                    if leads_query.data.is_some() {
                        <p class="text-gray-400">
                            {format!(
                                "{} {} in your pipeline",
                                all_leads.len(),
                                if all_leads.len() == 1 { "lead" } else { "leads" }
                            )}
                        </p>
                    }
                </div>
                <button
                    onclick={on_refresh}
                    class="flex items-center space-x-2 px-3 py-1.5 rounded-lg text-sm font-medium text-gray-300 bg-gray-800 border border-gray-700 hover:bg-gray-700"
                >
                    <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15"/>
                    </svg>
                    <span>{"Refresh"}</span>
                </button>
            </div>

            <div class="bg-gray-800 rounded-lg border border-gray-700 p-4 space-y-4">
                <div class="relative">
                    <svg class="absolute left-3 top-1/2 transform -translate-y-1/2 w-4 h-4 text-gray-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"/>
                    </svg>
                    <input
                        type="text"
                        placeholder="Search by name, phone, course, location, qualification..."
                        value={filter.query.clone()}
                        oninput={on_search}
                        class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg pl-10 pr-4 py-2 text-sm focus:ring-blue-500 focus:border-blue-500"
                    />
                </div>

                <div class="flex flex-wrap gap-2">
                    {status_tab(None)}
                    { for LeadStatus::ALL.into_iter().map(|status| status_tab(Some(status)))}
                </div>
            </div>

            if leads_query.loading && leads_query.data.is_none() {
                <div class="flex justify-center items-center h-64">
                    <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-500"></div>
                </div>
            } else if leads_query.error.is_some() {
                <div class="bg-gray-800 rounded-lg border border-red-700 p-6 text-center">
                    <p class="text-red-400">{"Failed to load leads. Please try again."}</p>
                </div>
            } else if all_leads.is_empty() {
                <div class="rounded-lg border-2 border-dashed border-gray-700 bg-gray-800/50 p-12 text-center">
                    <svg class="mx-auto h-12 w-12 text-gray-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z"/>
                    </svg>
                    <h3 class="mt-4 text-lg font-medium text-white">{"No leads yet"}</h3>
                    <p class="mt-2 text-gray-400">
                        {"Start adding leads from the home page to see them here."}
                    </p>
                    <Link<Route> to={Route::Home} classes="inline-block mt-4 px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg text-sm font-medium">
                        {"Add your first lead"}
                    </Link<Route>>
                </div>
            } else if visible.is_empty() {
                // There are leads; the active filters just match none of them.
                <div class="bg-gray-800 rounded-lg border border-gray-700 p-12 text-center">
                    <svg class="mx-auto h-12 w-12 text-gray-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"/>
                    </svg>
                    <h3 class="mt-4 text-lg font-medium text-white">{"No leads match your search"}</h3>
                    <p class="mt-2 text-gray-400">{"Try adjusting your search or status filter."}</p>
                </div>
            } else {
                <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                    { for visible.iter().map(|lead| html! {
                        <LeadCard
                            key={lead.id.to_string()}
                            lead={(*lead).clone()}
                            on_changed={on_changed.clone()}
                            on_notice={on_notice.clone()}
                        />
                    })}
                </div>
            }

            if let Some(notice) = (*notice).clone() {
                <Toast {notice} {on_dismiss} />
            }
        </div>
    }
}

// ===== Status Tab =====

#[derive(Properties, PartialEq)]
struct FilterTabProps {
    label: String,
    count: usize,
    active: bool,
    onclick: Callback<MouseEvent>,
}

#[function_component(FilterTab)]
fn filter_tab(props: &FilterTabProps) -> Html {
    let classes = if props.active {
        "bg-blue-600 text-white"
    } else {
        "bg-gray-700 text-gray-300 hover:bg-gray-600"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            class={format!("flex items-center space-x-2 px-3 py-1.5 rounded-lg text-sm font-medium {classes}")}
        >
            <span>{&props.label}</span>
            <span class="px-1.5 py-0.5 text-xs rounded bg-gray-900/40">{props.count}</span>
        </button>
    }
}
