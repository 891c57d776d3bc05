use settlo_shared::{Lead, LeadDraft, LeadStatus};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::auth::AuthContext;
use super::lead_form::{edit_area, edit_field};
use super::toast::Notice;
use crate::services;

fn status_badge(status: LeadStatus) -> &'static str {
    match status {
        LeadStatus::OnProcess => "bg-yellow-600/20 text-yellow-400",
        LeadStatus::Positive => "bg-green-600/20 text-green-400",
        LeadStatus::Completed => "bg-blue-600/20 text-blue-400",
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadCardProps {
    pub lead: Lead,
    /// A mutation went through; the list should re-fetch.
    pub on_changed: Callback<()>,
    pub on_notice: Callback<Notice>,
}

#[function_component(LeadCard)]
pub fn lead_card(props: &LeadCardProps) -> Html {
    let auth_ctx = use_context::<AuthContext>().expect("AuthContext not found");
    let editing = use_state(|| false);
    let confirming_delete = use_state(|| false);
    let deleting = use_state(|| false);

    let lead = &props.lead;

    // Inline status change: wholesale update with only the status swapped.
    // No confirmation; on failure the card stays as-is until the next reload.
    let on_status_change = {
        let lead = props.lead.clone();
        let session = auth_ctx.session.clone();
        let on_changed = props.on_changed.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let Some(status) = LeadStatus::parse(&select.value()) else {
                return;
            };
            if status == lead.status {
                return;
            }
            let lead = lead.clone();
            let session = session.clone();
            let on_changed = on_changed.clone();
            let on_notice = on_notice.clone();
            spawn_local(async move {
                let update = lead.with_status(status);
                match services::leads::update(session.as_ref(), lead.id, &update).await {
                    Ok(()) => {
                        on_notice.emit(Notice::success("Status updated"));
                        on_changed.emit(());
                    }
                    Err(err) => {
                        gloo::console::error!("failed to update status:", err.to_string());
                        on_notice.emit(Notice::error("Failed to update status. Please try again."));
                    }
                }
            });
        })
    };

    let open_editor = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(true))
    };
    let close_editor = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(false))
    };
    let on_saved = {
        let editing = editing.clone();
        let on_changed = props.on_changed.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |_| {
            editing.set(false);
            on_notice.emit(Notice::success("Lead updated successfully!"));
            on_changed.emit(());
        })
    };

    let open_delete = {
        let confirming_delete = confirming_delete.clone();
        Callback::from(move |_: MouseEvent| confirming_delete.set(true))
    };
    let cancel_delete = {
        let confirming_delete = confirming_delete.clone();
        Callback::from(move |_: MouseEvent| confirming_delete.set(false))
    };
    let confirm_delete = {
        let id = props.lead.id;
        let session = auth_ctx.session.clone();
        let on_changed = props.on_changed.clone();
        let on_notice = props.on_notice.clone();
        let confirming_delete = confirming_delete.clone();
        let deleting = deleting.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            let on_changed = on_changed.clone();
            let on_notice = on_notice.clone();
            let confirming_delete = confirming_delete.clone();
            let deleting = deleting.clone();
            deleting.set(true);
            spawn_local(async move {
                match services::leads::delete(session.as_ref(), id).await {
                    Ok(()) => {
                        on_notice.emit(Notice::success("Lead deleted successfully!"));
                        on_changed.emit(());
                    }
                    Err(err) => {
                        gloo::console::error!("failed to delete lead:", err.to_string());
                        on_notice.emit(Notice::error("Failed to delete lead. Please try again."));
                    }
                }
                deleting.set(false);
                confirming_delete.set(false);
            });
        })
    };

    html! {
        <div class="bg-gray-800 rounded-lg border border-gray-700 flex flex-col">
            <div class="p-4 flex items-start justify-between">
                <div class="flex items-center space-x-3">
                    <div class="w-10 h-10 rounded-full bg-blue-600 flex items-center justify-center">
                        <span class="text-white font-medium">
                            {lead.name.chars().next().unwrap_or('?')}
                        </span>
                    </div>
                    <div>
                        <h3 class="font-semibold text-white">{&lead.name}</h3>
                        <p class="text-sm text-gray-400">{format!("Age: {}", lead.age)}</p>
                    </div>
                </div>
                <span class={format!("px-2 py-0.5 text-xs rounded font-medium {}", status_badge(lead.status))}>
                    {lead.status.label()}
                </span>
            </div>

            <div class="px-4 pb-4 space-y-2 flex-1">
                if let Some(location) = &lead.location {
                    <div class="flex items-center space-x-2 text-sm text-gray-300">
                        <svg class="w-4 h-4 text-gray-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z"/>
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 11a3 3 0 11-6 0 3 3 0 016 0z"/>
                        </svg>
                        <span>{location}</span>
                    </div>
                }

                if let Some(course) = &lead.course_preferred {
                    <div class="flex items-center space-x-2 text-sm text-gray-300">
                        <svg class="w-4 h-4 text-gray-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 6.253v13m0-13C10.832 5.477 9.246 5 7.5 5S4.168 5.477 3 6.253v13C4.168 18.477 5.754 18 7.5 18s3.332.477 4.5 1.253m0-13C13.168 5.477 14.754 5 16.5 5c1.747 0 3.332.477 4.5 1.253v13C19.832 18.477 18.247 18 16.5 18c-1.746 0-3.332.477-4.5 1.253"/>
                        </svg>
                        <span>{course}</span>
                    </div>
                }

                if let Some(qualification) = &lead.qualification {
                    <div class="flex items-center space-x-2 text-sm text-gray-300">
                        <svg class="w-4 h-4 text-gray-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 14l9-5-9-5-9 5 9 5zm0 0l6.16-3.422a12.083 12.083 0 01.665 6.479A11.952 11.952 0 0012 20.055a11.952 11.952 0 00-6.824-2.998 12.078 12.078 0 01.665-6.479L12 14z"/>
                        </svg>
                        <span>{qualification}</span>
                    </div>
                }

                <div class="flex items-center space-x-2 text-sm text-gray-300">
                    <svg class="w-4 h-4 text-gray-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z"/>
                    </svg>
                    <span>{&lead.phone_no}</span>
                </div>

                if let Some(fees) = &lead.fees {
                    <div class="flex items-center space-x-2 text-sm text-gray-300">
                        <svg class="w-4 h-4 text-gray-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 8c-1.657 0-3 .895-3 2s1.343 2 3 2 3 .895 3 2-1.343 2-3 2m0-8c1.11 0 2.08.402 2.599 1M12 8V7m0 1v8m0 0v1m0-1c-1.11 0-2.08-.402-2.599-1M21 12a9 9 0 11-18 0 9 9 0 0118 0z"/>
                        </svg>
                        <span>{fees}</span>
                    </div>
                }

                <div class="flex items-center space-x-2 text-sm text-gray-300">
                    <svg class="w-4 h-4 text-gray-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z"/>
                    </svg>
                    <span>{lead.date.format("%b %d, %Y").to_string()}</span>
                </div>

                if let Some(queries) = &lead.queries {
                    <div class="mt-3 text-sm">
                        <span class="text-gray-400 font-medium">{"Queries:"}</span>
                        <p class="text-gray-300 mt-1">{queries}</p>
                    </div>
                }
            </div>

            <div class="px-4 py-3 border-t border-gray-700 space-y-3">
                <select
                    onchange={on_status_change}
                    class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 text-sm focus:ring-blue-500 focus:border-blue-500"
                >
                    { for LeadStatus::ALL.into_iter().map(|status| html! {
                        <option value={status.as_str()} selected={status == lead.status}>
                            {status.label()}
                        </option>
                    })}
                </select>

                <div class="flex gap-2">
                    <button
                        onclick={open_editor}
                        class="flex-1 flex items-center justify-center space-x-2 px-3 py-1.5 rounded-lg text-sm bg-gray-700 text-gray-200 hover:bg-gray-600"
                    >
                        <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z"/>
                        </svg>
                        <span>{"Edit"}</span>
                    </button>
                    <button
                        onclick={open_delete}
                        class="flex-1 flex items-center justify-center space-x-2 px-3 py-1.5 rounded-lg text-sm bg-gray-700 text-red-400 hover:bg-red-900/40"
                    >
                        <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16"/>
                        </svg>
                        <span>{"Delete"}</span>
                    </button>
                </div>
            </div>

            if *editing {
                <EditLeadModal
                    lead={props.lead.clone()}
                    on_close={close_editor}
                    on_saved={on_saved}
                    on_notice={props.on_notice.clone()}
                />
            }

            if *confirming_delete {
                <div class="fixed inset-0 z-50 overflow-y-auto">
                    <div class="flex min-h-full items-center justify-center p-4">
                        <div class="fixed inset-0 bg-black/50" onclick={cancel_delete.clone()}></div>

                        <div class="relative bg-gray-800 rounded-lg shadow-xl border border-gray-700 w-full max-w-md">
                            <div class="p-6">
                                <h3 class="text-lg font-medium text-white">{"Are you sure?"}</h3>
                                <p class="mt-2 text-sm text-gray-400">
                                    {"This will permanently delete this lead. This action cannot be undone."}
                                </p>
                            </div>
                            <div class="px-6 py-4 border-t border-gray-700 flex justify-end space-x-3">
                                <button
                                    onclick={cancel_delete}
                                    class="px-4 py-2 text-gray-300 hover:text-white"
                                >
                                    {"Cancel"}
                                </button>
                                <button
                                    onclick={confirm_delete}
                                    disabled={*deleting}
                                    class="px-4 py-2 bg-red-600 hover:bg-red-700 text-white rounded-lg disabled:opacity-50"
                                >
                                    if *deleting {
                                        {"Deleting..."}
                                    } else {
                                        {"Delete"}
                                    }
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}

// ===== Edit Modal =====

#[derive(Properties, PartialEq)]
struct EditLeadModalProps {
    lead: Lead,
    on_close: Callback<MouseEvent>,
    on_saved: Callback<()>,
    on_notice: Callback<Notice>,
}

#[function_component(EditLeadModal)]
fn edit_lead_modal(props: &EditLeadModalProps) -> Html {
    let auth_ctx = use_context::<AuthContext>().expect("AuthContext not found");
    let draft = use_state(|| LeadDraft::from_lead(&props.lead));
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let on_save = {
        let id = props.lead.id;
        let draft = draft.clone();
        let error = error.clone();
        let saving = saving.clone();
        let session = auth_ctx.session.clone();
        let on_saved = props.on_saved.clone();
        let on_notice = props.on_notice.clone();

        Callback::from(move |_: MouseEvent| {
            let update = match draft.parse() {
                Ok(lead) => lead,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };

            let error = error.clone();
            let saving = saving.clone();
            let session = session.clone();
            let on_saved = on_saved.clone();
            let on_notice = on_notice.clone();

            saving.set(true);
            error.set(None);

            spawn_local(async move {
                // Wholesale overwrite, not a partial patch.
                match services::leads::update(session.as_ref(), id, &update).await {
                    Ok(()) => {
                        saving.set(false);
                        on_saved.emit(());
                    }
                    Err(err) => {
                        gloo::console::error!("failed to update lead:", err.to_string());
                        saving.set(false);
                        on_notice.emit(Notice::error("Failed to update lead. Please try again."));
                    }
                }
            });
        })
    };

    html! {
        <div class="fixed inset-0 z-50 overflow-y-auto">
            <div class="flex min-h-full items-center justify-center p-4">
                <div class="fixed inset-0 bg-black/50" onclick={props.on_close.clone()}></div>

                <div class="relative bg-gray-800 rounded-lg shadow-xl border border-gray-700 w-full max-w-2xl">
                    <div class="px-6 py-4 border-b border-gray-700 flex items-center justify-between">
                        <h3 class="text-lg font-medium text-white">{"Edit Lead"}</h3>
                        <button onclick={props.on_close.clone()} class="text-gray-400 hover:text-white">
                            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                            </svg>
                        </button>
                    </div>

                    <div class="p-6 space-y-4 max-h-[70vh] overflow-y-auto">
                        <div class="grid gap-4 md:grid-cols-2">
                            <div>
                                <label class="block text-sm font-medium text-gray-300 mb-1">{"Name"}</label>
                                <input
                                    type="text"
                                    value={draft.name.clone()}
                                    oninput={edit_field(&draft, |d, v| d.name = v)}
                                    class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                                />
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-300 mb-1">{"Age"}</label>
                                <input
                                    type="number"
                                    min="0"
                                    value={draft.age.clone()}
                                    oninput={edit_field(&draft, |d, v| d.age = v)}
                                    class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                                />
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-300 mb-1">{"Location"}</label>
                                <input
                                    type="text"
                                    value={draft.location.clone()}
                                    oninput={edit_field(&draft, |d, v| d.location = v)}
                                    class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                                />
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-300 mb-1">{"Course Preferred"}</label>
                                <input
                                    type="text"
                                    value={draft.course_preferred.clone()}
                                    oninput={edit_field(&draft, |d, v| d.course_preferred = v)}
                                    class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                                />
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-300 mb-1">{"Qualification"}</label>
                                <input
                                    type="text"
                                    value={draft.qualification.clone()}
                                    oninput={edit_field(&draft, |d, v| d.qualification = v)}
                                    class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                                />
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-300 mb-1">{"Phone Number"}</label>
                                <input
                                    type="tel"
                                    value={draft.phone_no.clone()}
                                    oninput={edit_field(&draft, |d, v| d.phone_no = v)}
                                    class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                                />
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-300 mb-1">{"Fees"}</label>
                                <input
                                    type="text"
                                    value={draft.fees.clone()}
                                    oninput={edit_field(&draft, |d, v| d.fees = v)}
                                    class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                                />
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-300 mb-1">{"Date"}</label>
                                <input
                                    type="date"
                                    value={draft.date.clone()}
                                    oninput={edit_field(&draft, |d, v| d.date = v)}
                                    class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                                />
                            </div>
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-300 mb-1">{"Queries"}</label>
                            <textarea
                                rows="4"
                                value={draft.queries.clone()}
                                oninput={edit_area(&draft, |d, v| d.queries = v)}
                                class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                            ></textarea>
                        </div>

                        if let Some(error) = (*error).clone() {
                            <div class="bg-red-900/30 border border-red-700 text-red-400 px-4 py-3 rounded">
                                {error}
                            </div>
                        }
                    </div>

                    <div class="px-6 py-4 border-t border-gray-700 flex justify-end space-x-3">
                        <button
                            onclick={props.on_close.clone()}
                            class="px-4 py-2 text-gray-300 hover:text-white"
                        >
                            {"Cancel"}
                        </button>
                        <button
                            onclick={on_save}
                            disabled={*saving}
                            class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg disabled:opacity-50"
                        >
                            if *saving {
                                {"Saving..."}
                            } else {
                                {"Save Changes"}
                            }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
