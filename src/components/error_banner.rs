use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorBannerProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
    /// Bumped on every report so a repeated message reappears after dismissal.
    #[prop_or_default]
    pub serial: u32,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let dismissed = use_state(|| false);
    {
        let dismissed = dismissed.clone();
        use_effect_with(props.serial, move |_| {
            dismissed.set(false);
            || ()
        });
    }
    let Some(message) = props.message.clone() else {
        return html! {};
    };
    if *dismissed {
        return html! {};
    }
    let on_dismiss = {
        let dismissed = dismissed.clone();
        Callback::from(move |_: MouseEvent| dismissed.set(true))
    };
    html! {
        <div class="nav-error" role="alert" style="position:fixed; left:50%; bottom:16px; transform:translateX(-50%); display:flex; align-items:center; gap:12px; background:rgba(90,35,32,0.95); color:#fff; border:1px solid #a80032; border-radius:8px; padding:8px 14px; font-size:14px; box-shadow:0 6px 18px rgba(0,0,0,0.4); z-index:1000;">
            <span>{ message }</span>
            <button onclick={on_dismiss} aria-label="Dismiss">{"×"}</button>
        </div>
    }
}
