use yew::prelude::*;
use web_sys::window;

/// Sets the document title and meta description while the page is mounted.
#[hook]
pub fn use_page_meta(title: String, description: String) {
    use_effect_with_deps(
        |(title, description)| {
            if let Some(document) = window().and_then(|w| w.document()) {
                document.set_title(title);
                if let Ok(Some(meta)) = document.query_selector("meta[name=\"description\"]") {
                    let _ = meta.set_attribute("content", description);
                }
            }
            || ()
        },
        (title, description),
    );
}

/// Adds `<meta name="keywords">` for the page and removes it on unmount.
#[hook]
pub fn use_page_keywords(keywords: String) {
    use_effect_with_deps(
        |keywords| {
            let document = window().and_then(|w| w.document());
            let meta = document.as_ref().and_then(|document| {
                let meta = match document.query_selector("meta[name=\"keywords\"]") {
                    Ok(Some(meta)) => meta,
                    _ => {
                        let meta = document.create_element("meta").ok()?;
                        meta.set_attribute("name", "keywords").ok()?;
                        document.head()?.append_child(&meta).ok()?;
                        meta
                    }
                };
                meta.set_attribute("content", keywords).ok()?;
                Some(meta)
            });
            move || {
                if let Some(meta) = meta {
                    meta.remove();
                }
            }
        },
        keywords,
    );
}
