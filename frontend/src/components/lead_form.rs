use chrono::NaiveDate;
use settlo_shared::LeadDraft;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::auth::AuthContext;
use crate::services;

/// UTC calendar date, the same default the date input starts with.
pub fn today() -> NaiveDate {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .unwrap_or_default()
}

pub(crate) fn edit_field(
    draft: &UseStateHandle<LeadDraft>,
    apply: fn(&mut LeadDraft, String),
) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

pub(crate) fn edit_area(
    draft: &UseStateHandle<LeadDraft>,
    apply: fn(&mut LeadDraft, String),
) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub on_created: Callback<()>,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let auth_ctx = use_context::<AuthContext>().expect("AuthContext not found");
    let draft = use_state(|| LeadDraft::new(today()));
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let onsubmit = {
        let draft = draft.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let session = auth_ctx.session.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Validation failures block submission; no store call is made.
            let new_lead = match draft.parse() {
                Ok(lead) => lead,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };

            let draft = draft.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let session = session.clone();
            let on_created = on_created.clone();

            submitting.set(true);
            error.set(None);

            spawn_local(async move {
                match services::leads::create(session.as_ref(), &new_lead).await {
                    Ok(_) => {
                        draft.set(LeadDraft::new(today()));
                        submitting.set(false);
                        on_created.emit(());
                    }
                    Err(err) => {
                        gloo::console::error!("failed to add lead:", err.to_string());
                        error.set(Some("Failed to add lead. Please try again.".to_string()));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="bg-gray-800 rounded-lg border border-gray-700">
            <div class="px-6 py-4 border-b border-gray-700">
                <h2 class="text-xl font-semibold text-white">{"Add New Lead"}</h2>
                <p class="text-sm text-gray-400">{"Fill in the details to add a new lead to your pipeline"}</p>
            </div>

            <form {onsubmit} class="p-6 space-y-6">
                <div class="grid gap-6 md:grid-cols-2">
                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-1">{"Name *"}</label>
                        <input
                            type="text"
                            value={draft.name.clone()}
                            oninput={edit_field(&draft, |d, v| d.name = v)}
                            placeholder="John Doe"
                            class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-1">{"Age *"}</label>
                        <input
                            type="number"
                            min="0"
                            value={draft.age.clone()}
                            oninput={edit_field(&draft, |d, v| d.age = v)}
                            placeholder="25"
                            class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-1">{"Location"}</label>
                        <input
                            type="text"
                            value={draft.location.clone()}
                            oninput={edit_field(&draft, |d, v| d.location = v)}
                            placeholder="New York, USA"
                            class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-1">{"Course Preferred"}</label>
                        <input
                            type="text"
                            value={draft.course_preferred.clone()}
                            oninput={edit_field(&draft, |d, v| d.course_preferred = v)}
                            placeholder="Web Development"
                            class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-1">{"Qualification"}</label>
                        <input
                            type="text"
                            value={draft.qualification.clone()}
                            oninput={edit_field(&draft, |d, v| d.qualification = v)}
                            placeholder="B.Sc Computer Science"
                            class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-1">{"Phone Number *"}</label>
                        <input
                            type="tel"
                            value={draft.phone_no.clone()}
                            oninput={edit_field(&draft, |d, v| d.phone_no = v)}
                            placeholder="+1 234 567 8900"
                            class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500"
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-1">{"Fees"}</label>
                        <input
                            type="text"
                            value={draft.fees.clone()}
                            oninput={edit_field(&draft, |d, v| d.fees = v)}
                            placeholder="15,000 negotiable"
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
                        placeholder="Any specific questions or requirements..."
                        class="w-full bg-gray-700 border border-gray-600 text-white rounded-lg px-3 py-2 focus:ring-blue-500 focus:border-blue-500 resize-none"
                    ></textarea>
                </div>

                if let Some(error) = (*error).clone() {
                    <div class="bg-red-900/30 border border-red-700 text-red-400 px-4 py-3 rounded">
                        {error}
                    </div>
                }

                <button
                    type="submit"
                    disabled={*submitting}
                    class="w-full flex justify-center items-center space-x-2 px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 4v16m8-8H4"/>
                    </svg>
                    <span>
                        if *submitting {
                            {"Adding..."}
                        } else {
                            {"Add Lead"}
                        }
                    </span>
                </button>
            </form>
        </div>
    }
}
