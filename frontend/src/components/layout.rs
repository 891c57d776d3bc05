use yew::prelude::*;
use yew_router::prelude::*;

use super::auth::AuthContext;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/leads")]
    Leads,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

/// Page chrome: brand header, Home/Leads navigation, sign-out. Only rendered
/// once a session exists; the auth gate lives in the router.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let auth_ctx = use_context::<AuthContext>().expect("AuthContext not found");
    let current_route = use_route::<Route>().unwrap_or(Route::Home);

    let on_sign_out = {
        let logout = auth_ctx.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let email = auth_ctx
        .session
        .as_ref()
        .map(|s| s.user.email.clone())
        .unwrap_or_default();

    html! {
        <div class="min-h-screen bg-gray-900 flex flex-col">
            <header class="bg-gray-800 border-b border-gray-700 h-14 flex-shrink-0 z-50">
                <div class="h-full flex items-center justify-between px-4">
                    <div class="flex items-center space-x-6">
                        <div class="flex items-center space-x-2">
                            <div class="w-8 h-8 bg-blue-500 rounded flex items-center justify-center">
                                <span class="text-white font-bold text-lg">{"S"}</span>
                            </div>
                            <span class="text-white font-semibold text-lg">{"Settlo"}</span>
                        </div>

                        <nav class="flex items-center space-x-1">
                            <NavTab route={Route::Home} label="Home" current={current_route.clone()} />
                            <NavTab route={Route::Leads} label="Leads" current={current_route.clone()} />
                        </nav>
                    </div>

                    <div class="flex items-center space-x-4">
                        <span class="hidden sm:block text-sm text-gray-400">{email}</span>
                        <button
                            onclick={on_sign_out}
                            class="flex items-center space-x-2 px-3 py-1.5 rounded-lg text-sm font-medium text-gray-300 hover:bg-gray-700 hover:text-white"
                        >
                            <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 16l4-4m0 0l-4-4m4 4H7m6 4v1a3 3 0 01-3 3H6a3 3 0 01-3-3V7a3 3 0 013-3h4a3 3 0 013 3v1"/>
                            </svg>
                            <span>{"Sign Out"}</span>
                        </button>
                    </div>
                </div>
            </header>

            <main class="flex-1 overflow-y-auto">
                {props.children.clone()}
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavTabProps {
    route: Route,
    label: &'static str,
    current: Route,
}

#[function_component(NavTab)]
fn nav_tab(props: &NavTabProps) -> Html {
    let classes = if props.route == props.current {
        "bg-blue-600 text-white"
    } else {
        "text-gray-300 hover:bg-gray-700 hover:text-white"
    };

    html! {
        <Link<Route>
            to={props.route.clone()}
            classes={Classes::from(format!("px-3 py-1.5 rounded-lg text-sm font-medium transition-colors {classes}"))}
        >
            {props.label}
        </Link<Route>>
    }
}
