use web_sys::js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;
use yew::prelude::*;

use crate::booking::script_loader::{ensure_stylesheet, load_library, ScriptError};

const CALENDLY_JS: &str = "https://assets.calendly.com/assets/external/widget.js";
const CALENDLY_CSS: &str = "https://assets.calendly.com/assets/external/widget.css";

/// The loaded Calendly library. Components receive this explicitly instead
/// of reaching for `window.Calendly`.
#[derive(Clone, PartialEq)]
pub struct CalendlyHandle(JsValue);

impl CalendlyHandle {
    pub async fn load() -> Result<Self, ScriptError> {
        if let Err(e) = ensure_stylesheet(CALENDLY_CSS) {
            log::warn!("Calendly stylesheet not added: {}", e);
        }
        load_library(CALENDLY_JS, "Calendly").await.map(Self)
    }

    /// Mounts an inline scheduler for `url` into `container`, replacing
    /// whatever was mounted there before.
    pub fn init_inline(&self, url: &str, container: &Element) -> Result<(), JsValue> {
        container.set_inner_html("");
        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("url"), &JsValue::from_str(url))?;
        Reflect::set(&options, &JsValue::from_str("parentElement"), container)?;
        let init: Function = Reflect::get(&self.0, &JsValue::from_str("initInlineWidget"))?.dyn_into()?;
        init.call1(&self.0, &options)?;
        Ok(())
    }
}

#[derive(Properties, PartialEq)]
pub struct CalendlyWidgetProps {
    pub url: AttrValue,
    pub handle: Option<CalendlyHandle>,
}

#[function_component(CalendlyWidget)]
pub fn calendly_widget(props: &CalendlyWidgetProps) -> Html {
    let container = use_node_ref();

    {
        let container = container.clone();
        use_effect_with_deps(
            move |(url, handle)| {
                if let (Some(handle), Some(element)) = (handle, container.cast::<Element>()) {
                    if let Err(e) = handle.init_inline(url, &element) {
                        log::error!("Calendly widget failed to initialise: {:?}", e);
                    }
                }
                || ()
            },
            (props.url.clone(), props.handle.clone()),
        );
    }

    html! {
        <div class="calendly-widget">
            if props.handle.is_none() {
                <div class="widget-loading">{"Loading available times..."}</div>
            }
            <div ref={container} class="calendly-inline" style="min-width: 320px; height: 700px;"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SuperSaasEmbedProps {
    pub schedule_url: AttrValue,
    #[prop_or(AttrValue::Static("Availability"))]
    pub title: AttrValue,
}

#[function_component(SuperSaasEmbed)]
pub fn supersaas_embed(props: &SuperSaasEmbedProps) -> Html {
    html! {
        <iframe
            class="supersaas-embed"
            src={props.schedule_url.clone()}
            title={props.title.clone()}
            loading="lazy"
            width="100%"
            height="600"
        />
    }
}
