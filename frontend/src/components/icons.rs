use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Zap,
    Menu,
    Close,
    ArrowRight,
    ShieldCheck,
    CreditCard,
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

// Stroke icons on a 24x24 grid.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let shapes = match props.kind {
        IconKind::Zap => html! {
            <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" />
        },
        IconKind::Menu => html! {
            <>
                <line x1="4" y1="6" x2="20" y2="6" />
                <line x1="4" y1="12" x2="20" y2="12" />
                <line x1="4" y1="18" x2="20" y2="18" />
            </>
        },
        IconKind::Close => html! {
            <>
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </>
        },
        IconKind::ArrowRight => html! {
            <>
                <path d="M5 12h14" />
                <path d="m12 5 7 7-7 7" />
            </>
        },
        IconKind::ShieldCheck => html! {
            <>
                <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10" />
                <path d="m9 12 2 2 4-4" />
            </>
        },
        IconKind::CreditCard => html! {
            <>
                <rect x="2" y="5" width="20" height="14" rx="2" />
                <line x1="2" y1="10" x2="22" y2="10" />
            </>
        },
    };

    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { shapes }
        </svg>
    }
}
