//! Loads third-party widget libraries and hands back the object they install.

use std::fmt;

use web_sys::js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Document, Element, HtmlScriptElement};

const LOADED_ATTR: &str = "data-loaded";
const FAILED_ATTR: &str = "data-failed";

/// What to do with a `<script>` tag already in the document for a given src.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExistingScript {
    Missing,
    Loaded,
    Pending,
    // a failed tag never fires again, so it is replaced
    Failed,
}

fn classify(present: bool, loaded: Option<&str>, failed: Option<&str>) -> ExistingScript {
    match (present, loaded, failed) {
        (false, _, _) => ExistingScript::Missing,
        (true, _, Some("true")) => ExistingScript::Failed,
        (true, Some("true"), _) => ExistingScript::Loaded,
        _ => ExistingScript::Pending,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptError {
    NoDocument,
    Inject(String),
    Load(String),
    MissingGlobal(&'static str),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::NoDocument => write!(f, "no document available"),
            ScriptError::Inject(e) => write!(f, "could not add script: {}", e),
            ScriptError::Load(src) => write!(f, "failed to load {}", src),
            ScriptError::MissingGlobal(name) => write!(f, "{} did not initialise", name),
        }
    }
}

fn js_error(e: JsValue) -> ScriptError {
    ScriptError::Inject(format!("{:?}", e))
}

fn document() -> Result<Document, ScriptError> {
    window().and_then(|w| w.document()).ok_or(ScriptError::NoDocument)
}

fn global(name: &'static str) -> Option<JsValue> {
    let window = window()?;
    Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Adds `<link rel="stylesheet">` for `href` unless it is already present.
pub fn ensure_stylesheet(href: &str) -> Result<(), ScriptError> {
    let document = document()?;
    let selector = format!("link[href=\"{}\"]", href);
    if document.query_selector(&selector).ok().flatten().is_some() {
        return Ok(());
    }
    let link = document.create_element("link").map_err(js_error)?;
    link.set_attribute("rel", "stylesheet").map_err(js_error)?;
    link.set_attribute("href", href).map_err(js_error)?;
    let head = document.head().ok_or(ScriptError::NoDocument)?;
    head.append_child(&link).map_err(js_error)?;
    Ok(())
}

/// Resolves once the script at `src` has loaded and `global_name` exists on
/// `window`, injecting the script tag if no page has added it yet.
pub async fn load_library(src: &str, global_name: &'static str) -> Result<JsValue, ScriptError> {
    if let Some(library) = global(global_name) {
        return Ok(library);
    }

    let document = document()?;
    let selector = format!("script[src=\"{}\"]", src);
    let mut existing: Option<Element> = document.query_selector(&selector).ok().flatten();

    let state = classify(
        existing.is_some(),
        existing.as_ref().and_then(|e| e.get_attribute(LOADED_ATTR)).as_deref(),
        existing.as_ref().and_then(|e| e.get_attribute(FAILED_ATTR)).as_deref(),
    );
    if state == ExistingScript::Failed {
        if let Some(stale) = existing.take() {
            stale.remove();
        }
    }

    let script: HtmlScriptElement = match existing {
        Some(element) => element
            .dyn_into::<HtmlScriptElement>()
            .map_err(|_| ScriptError::Inject(format!("{} is not a script", selector)))?,
        None => {
            let element = document
                .create_element("script")
                .map_err(js_error)?
                .dyn_into::<HtmlScriptElement>()
                .map_err(|_| ScriptError::Inject("script element".to_string()))?;
            element.set_src(src);
            element.set_async(true);
            element
        }
    };

    if state != ExistingScript::Loaded {
        let loaded = Promise::new(&mut |resolve: Function, reject: Function| {
            let marked = script.clone();
            let on_load = Closure::once_into_js(move |_: web_sys::Event| {
                let _ = marked.set_attribute(LOADED_ATTR, "true");
                let _ = resolve.call0(&JsValue::NULL);
            });
            // drop the dead tag so the next mount injects a fresh one
            let failed = script.clone();
            let on_error = Closure::once_into_js(move |_: web_sys::Event| {
                let _ = failed.set_attribute(FAILED_ATTR, "true");
                failed.remove();
                let _ = reject.call0(&JsValue::NULL);
            });
            let _ = script.add_event_listener_with_callback("load", on_load.unchecked_ref());
            let _ = script.add_event_listener_with_callback("error", on_error.unchecked_ref());
        });

        if matches!(state, ExistingScript::Missing | ExistingScript::Failed) {
            let head = document.head().ok_or(ScriptError::NoDocument)?;
            head.append_child(&script).map_err(js_error)?;
        }

        JsFuture::from(loaded)
            .await
            .map_err(|_| ScriptError::Load(src.to_string()))?;
    }

    global(global_name).ok_or(ScriptError::MissingGlobal(global_name))
}
