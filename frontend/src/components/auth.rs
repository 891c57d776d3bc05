use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::{self, Session};

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_login: Callback<Session>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error_message = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_login = props.on_login.clone();
    let email_clone = email.clone();
    let password_clone = password.clone();
    let error_clone = error_message.clone();
    let loading_clone = loading.clone();

    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();

        let email = (*email_clone).clone();
        let password = (*password_clone).clone();
        let on_login = on_login.clone();
        let error_message = error_clone.clone();
        let loading = loading_clone.clone();

        if email.is_empty() || password.is_empty() {
            error_message.set(Some("Please fill in all fields".to_string()));
            return;
        }

        loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match services::auth::sign_in(&email, &password).await {
                Ok(session) => {
                    loading.set(false);
                    on_login.emit(session);
                }
                Err(err) => {
                    gloo::console::error!("sign-in failed:", err.to_string());
                    loading.set(false);
                    error_message.set(Some("Invalid email or password".to_string()));
                }
            }
        });
    });

    let email_oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let password_oninput = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <div class="mx-auto w-12 h-12 bg-blue-500 rounded-lg flex items-center justify-center">
                        <span class="text-white font-bold text-2xl">{"S"}</span>
                    </div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-white">
                        {"Sign in to Settlo"}
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-400">
                        {"Lead Management System"}
                    </p>
                </div>

                <form class="mt-8 space-y-6" {onsubmit}>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="email-address" class="sr-only">{"Email address"}</label>
                            <input
                                id="email-address"
                                name="email"
                                type="email"
                                autocomplete="email"
                                required=true
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-600 bg-gray-800 placeholder-gray-500 text-white rounded-t-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 focus:z-10 sm:text-sm"
                                placeholder="Email address"
                                value={(*email).clone()}
                                oninput={email_oninput}
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">{"Password"}</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                required=true
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-gray-600 bg-gray-800 placeholder-gray-500 text-white rounded-b-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 focus:z-10 sm:text-sm"
                                placeholder="Password"
                                value={(*password).clone()}
                                oninput={password_oninput}
                            />
                        </div>
                    </div>

                    if let Some(error) = (*error_message).clone() {
                        <div class="bg-red-900/30 border border-red-700 text-red-400 px-4 py-3 rounded relative">
                            {error}
                        </div>
                    }

                    <div>
                        <button
                            type="submit"
                            disabled={*loading}
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50 disabled:cursor-not-allowed"
                        >
                            if *loading {
                                {"Signing in..."}
                            } else {
                                {"Sign in"}
                            }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

// Auth context for managing the signed-in session across the app
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub session: Option<Session>,
    pub login: Callback<Session>,
    pub logout: Callback<()>,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self {
            session: None,
            login: Callback::noop(),
            logout: Callback::noop(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    // Restore a previously stored session so a reload stays signed in.
    let session = use_state(services::auth::load_session);

    let login = {
        let session = session.clone();
        Callback::from(move |new_session: Session| {
            session.set(Some(new_session));
        })
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |_| {
            let current = (*session).clone();
            spawn_local(async move {
                services::auth::sign_out(current.as_ref()).await;
            });
            session.set(None);
        })
    };

    let context = AuthContext {
        session: (*session).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<AuthContext> {context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
