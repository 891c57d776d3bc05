use wasm_bindgen::UnwrapThrowExt;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
mod services;

use components::auth::{AuthContext, AuthProvider, LoginForm};
use components::layout::{Layout, Route};
use pages::{home::HomePage, leads::LeadsPage};

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Leads => html! { <LeadsPage /> },
        // Only reachable while signed in; the gate renders the login form.
        Route::Login => html! { <Redirect<Route> to={Route::Home} /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-900">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-white">{"404"}</h1>
                    <p class="text-xl mt-4 text-gray-400">{"Page Not Found"}</p>
                </div>
            </div>
        },
    }
}

#[function_component(AppRouter)]
fn app_router() -> Html {
    let auth_ctx = use_context::<AuthContext>().expect("AuthContext not found");

    // Route guard: without a session nothing but the login form renders.
    if auth_ctx.session.is_none() {
        return html! { <LoginForm on_login={auth_ctx.login.clone()} /> };
    }

    html! {
        <BrowserRouter>
            <Layout>
                <Switch<Route> render={switch} />
            </Layout>
        </BrowserRouter>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <AuthProvider>
            <AppRouter />
        </AuthProvider>
    }
}

fn main() {
    let document = web_sys::window()
        .expect_throw("no window")
        .document()
        .expect_throw("no document");
    let head = document.head().expect_throw("no document head");

    // Load Tailwind CSS
    let tailwind = document.create_element("link").expect_throw("create link");
    tailwind
        .set_attribute(
            "href",
            "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css",
        )
        .expect_throw("set href");
    tailwind
        .set_attribute("rel", "stylesheet")
        .expect_throw("set rel");
    head.append_child(&tailwind).expect_throw("append link");

    // Load Google Fonts (Inter)
    let fonts = document.create_element("link").expect_throw("create link");
    fonts
        .set_attribute(
            "href",
            "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap",
        )
        .expect_throw("set href");
    fonts
        .set_attribute("rel", "stylesheet")
        .expect_throw("set rel");
    head.append_child(&fonts).expect_throw("append link");

    yew::Renderer::<App>::new().render();
}
