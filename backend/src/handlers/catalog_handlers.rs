use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use clearway_common::{select_package, site, Package, PACKAGES};
use serde_json::{json, Value};

use crate::AppState;

pub async fn list_packages() -> Json<&'static [Package]> {
    Json(PACKAGES)
}

/// Same lookup the booking pages use: unknown ids resolve to the default package.
pub async fn get_package(Path(package_id): Path<String>) -> Json<Value> {
    let selection = select_package(&package_id);
    Json(json!({
        "package": selection.package,
        "matched": selection.matched,
        "schedulingUrl": selection.scheduling_url(),
    }))
}

pub async fn sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml")],
        render_sitemap(&state.settings.frontend_url),
    )
}

fn render_sitemap(base_url: &str) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for path in site::sitemap_paths() {
        xml.push_str(&format!("  <url><loc>{}{}</loc></url>\n", base_url, path));
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use clearway_common::LOCATIONS;

    #[tokio::test]
    async fn unknown_package_reports_fallback() {
        let Json(body) = get_package(Path("nope".to_string())).await;
        assert_eq!(body["matched"], false);
        assert_eq!(body["package"]["id"], "payg");
        assert_eq!(
            body["schedulingUrl"],
            "https://calendly.com/clearway-driving/pay-as-you-go"
        );
    }

    #[tokio::test]
    async fn known_package_serializes_camel_case() {
        let Json(body) = get_package(Path("mocktest".to_string())).await;
        assert_eq!(body["matched"], true);
        assert_eq!(body["package"]["pricePence"], 6500);
        assert_eq!(body["package"]["lessonMinutes"], 90);
    }

    #[test]
    fn sitemap_includes_every_location() {
        let xml = render_sitemap("https://clearwaydriving.co.uk");
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://clearwaydriving.co.uk/</loc>"));
        for location in LOCATIONS {
            assert!(xml.contains(&format!(
                "<loc>https://clearwaydriving.co.uk/driving-lessons/{}</loc>",
                location.slug
            )));
        }
    }
}
