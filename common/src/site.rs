use crate::locations::LOCATIONS;
use crate::packages::PACKAGES;

pub const SCHOOL_NAME: &str = "Clearway Driving School";
pub const PHONE: &str = "0117 496 0123";
pub const EMAIL: &str = "hello@clearwaydriving.co.uk";

/// Client-side routes that are always present.
pub const STATIC_PATHS: &[&str] = &["/", "/about", "/services", "/blog", "/contact", "/booking"];

/// Every public path worth listing in a sitemap.
pub fn sitemap_paths() -> Vec<String> {
    let mut paths: Vec<String> = STATIC_PATHS.iter().map(|p| p.to_string()).collect();
    paths.extend(PACKAGES.iter().map(|p| format!("/booking/{}", p.slug)));
    paths.extend(LOCATIONS.iter().map(|l| l.path()));
    paths
}
