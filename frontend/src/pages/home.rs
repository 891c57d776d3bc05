use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::components::toast::{Notice, Toast};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let notice = use_state(|| None::<Notice>);

    let on_created = {
        let notice = notice.clone();
        Callback::from(move |_| {
            notice.set(Some(Notice::success("Lead added successfully!")));
        })
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_| notice.set(None))
    };

    html! {
        <div class="p-6">
            <div class="max-w-4xl mx-auto space-y-8">
                <div class="text-center space-y-2">
                    <h1 class="text-3xl font-bold text-white">{"Lead Management System"}</h1>
                    <p class="text-lg text-gray-400">{"Capture and organize your leads efficiently"}</p>
                </div>

                <LeadForm {on_created} />
            </div>

            if let Some(notice) = (*notice).clone() {
                <Toast {notice} {on_dismiss} />
            }
        </div>
    }
}
