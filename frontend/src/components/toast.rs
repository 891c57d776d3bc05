use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient user-facing notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Notice,
    pub on_dismiss: Callback<()>,
}

/// Bottom-right toast, auto-dismissed after a few seconds. The timer resets
/// whenever a new notice replaces the current one.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.notice.clone(), move |_| {
            let timer = Timeout::new(4_000, move || on_dismiss.emit(()));
            move || drop(timer)
        });
    }

    let (border, accent, symbol) = match props.notice.kind {
        NoticeKind::Success => ("border-green-700", "text-green-400", "✓"),
        NoticeKind::Error => ("border-red-700", "text-red-400", "!"),
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div class={format!("fixed bottom-6 right-6 z-50 flex items-center space-x-3 bg-gray-800 border {border} rounded-lg shadow-xl px-4 py-3")}>
            <span class={format!("font-bold {accent}")}>{symbol}</span>
            <span class="text-sm text-gray-200">{&props.notice.text}</span>
            <button {onclick} class="text-gray-500 hover:text-white text-sm">{"✕"}</button>
        </div>
    }
}
