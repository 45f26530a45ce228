//! Small styled building blocks shared by every page.

use stylist::yew::styled_component;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[styled_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let style = css!(
        r#"
        max-width: 1100px;
        margin: 0 auto;
        padding: 4rem 1.5rem;

        & > h2 {
            font-size: 2rem;
            margin-bottom: 0.5rem;
            text-align: center;
        }

        & > .section-subtitle {
            color: #5b6472;
            text-align: center;
            margin-bottom: 2.5rem;
        }
        "#
    );

    html! {
        <section id={props.id.clone()} class={classes!(style, props.class.clone())}>
            if let Some(title) = &props.title {
                <h2>{title}</h2>
            }
            if let Some(subtitle) = &props.subtitle {
                <p class="section-subtitle">{subtitle}</p>
            }
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub highlighted: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[styled_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let style = css!(
        r#"
        background: #ffffff;
        border: 1px solid #e3e7ee;
        border-radius: 14px;
        padding: 1.75rem;
        box-shadow: 0 6px 18px rgba(17, 24, 39, 0.06);
        display: flex;
        flex-direction: column;
        gap: 0.75rem;

        &.highlighted {
            border: 2px solid #f5a623;
            box-shadow: 0 10px 28px rgba(245, 166, 35, 0.25);
        }
        "#
    );

    html! {
        <div class={classes!(style, props.highlighted.then_some("highlighted"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
        }
    }
}

fn button_style() -> stylist::StyleSource {
    stylist::css!(
        r#"
        display: inline-block;
        border: none;
        border-radius: 999px;
        padding: 0.8rem 1.8rem;
        font-weight: 600;
        font-size: 1rem;
        cursor: pointer;
        text-decoration: none;
        transition: transform 0.15s ease, box-shadow 0.15s ease;

        &:hover { transform: translateY(-1px); }
        &:disabled { opacity: 0.6; cursor: wait; transform: none; }

        &.btn-primary { background: #f5a623; color: #1b1f27; }
        &.btn-secondary { background: transparent; color: #1d3557; border: 2px solid #1d3557; }
        "#
    )
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::Static("button"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let style = button_style();
    html! {
        <button
            type={props.kind.clone()}
            class={classes!(style, props.variant.class())}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct LinkButtonProps {
    pub to: Route,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LinkButton)]
pub fn link_button(props: &LinkButtonProps) -> Html {
    let style = button_style();
    html! {
        <Link<Route> to={props.to.clone()} classes={classes!(style, props.variant.class())}>
            { for props.children.iter() }
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct PriceTagProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: Option<AttrValue>,
}

#[function_component(PriceTag)]
pub fn price_tag(props: &PriceTagProps) -> Html {
    html! {
        <p class="price-tag">
            <span class="price-amount">{&props.label}</span>
            if let Some(suffix) = &props.suffix {
                <span class="price-suffix">{suffix}</span>
            }
        </p>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaBannerProps {
    pub title: AttrValue,
    pub text: AttrValue,
    #[prop_or(Route::Booking)]
    pub to: Route,
    #[prop_or(AttrValue::Static("Book a lesson"))]
    pub action: AttrValue,
}

#[styled_component(CtaBanner)]
pub fn cta_banner(props: &CtaBannerProps) -> Html {
    let style = css!(
        r#"
        background: linear-gradient(120deg, #1d3557, #274c77);
        color: #ffffff;
        text-align: center;
        padding: 3.5rem 1.5rem;

        & h2 { font-size: 1.9rem; margin-bottom: 0.75rem; }
        & p { max-width: 640px; margin: 0 auto 1.75rem; opacity: 0.9; }
        "#
    );

    html! {
        <section class={style}>
            <h2>{&props.title}</h2>
            <p>{&props.text}</p>
            <LinkButton to={props.to.clone()}>{props.action.clone()}</LinkButton>
        </section>
    }
}
