use serde::Serialize;

const CALENDLY_BASE: &str = "https://calendly.com/clearway-driving";

/// Id of the package used whenever a requested id is not in the catalog.
pub const DEFAULT_PACKAGE_ID: &str = "payg";

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: &'static str,
    pub slug: &'static str, // used in /booking/{slug}
    pub name: &'static str,
    pub price_pence: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub calendly_url: &'static str,
    pub lesson_minutes: u32, // length of one booked slot
}

impl Package {
    pub fn price_label(&self) -> String {
        format_gbp(self.price_pence as i64)
    }

    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_PACKAGE_ID
    }
}

pub static PACKAGES: &[Package] = &[
    Package {
        id: "payg",
        slug: "payg",
        name: "Pay As You Go",
        price_pence: 3800,
        description: "Book single lessons whenever suits you, no commitment.",
        features: &[
            "1-hour lessons",
            "Dual-control car",
            "Pick-up from home, work or college",
        ],
        calendly_url: "https://calendly.com/clearway-driving/pay-as-you-go",
        lesson_minutes: 60,
    },
    Package {
        id: "6hour",
        slug: "6-hour",
        name: "6-Hour Package",
        price_pence: 21600,
        description: "Three 2-hour lessons to build confidence on busy roads.",
        features: &[
            "3 x 2-hour lessons",
            "Progress report after every lesson",
            "Ideal refresher before a test",
        ],
        calendly_url: "https://calendly.com/clearway-driving/6-hour-package",
        lesson_minutes: 120,
    },
    Package {
        id: "10hour",
        slug: "10-hour",
        name: "10-Hour Package",
        price_pence: 35000,
        description: "Our most popular bundle for learners starting from scratch.",
        features: &[
            "5 x 2-hour lessons",
            "Save £30 on the hourly rate",
            "Free theory test resources",
        ],
        calendly_url: "https://calendly.com/clearway-driving/10-hour-package",
        lesson_minutes: 120,
    },
    Package {
        id: "mocktest",
        slug: "mock-test",
        name: "Mock Driving Test",
        price_pence: 6500,
        description: "A full test-conditions drive around local test routes.",
        features: &[
            "40-minute mock test on real routes",
            "Examiner-style marking sheet",
            "Debrief with your instructor",
        ],
        calendly_url: "https://calendly.com/clearway-driving/mock-test",
        lesson_minutes: 90,
    },
    Package {
        id: "testrental",
        slug: "test-rental",
        name: "Test Day Car Rental",
        price_pence: 12000,
        description: "Use our dual-control car for your practical test.",
        features: &[
            "1-hour warm-up lesson before the test",
            "Instructor car for the test itself",
            "Pick-up and drop-off included",
        ],
        calendly_url: "https://calendly.com/clearway-driving/test-day-rental",
        lesson_minutes: 120,
    },
];

/// Result of resolving a requested package id against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageSelection {
    pub package: &'static Package,
    /// `false` when the requested id was unknown and the default was used.
    pub matched: bool,
}

impl PackageSelection {
    pub fn scheduling_url(&self) -> &'static str {
        self.package.calendly_url
    }
}

impl Default for PackageSelection {
    fn default() -> Self {
        Self {
            package: default_package(),
            matched: true,
        }
    }
}

pub fn default_package() -> &'static Package {
    PACKAGES
        .iter()
        .find(|p| p.id == DEFAULT_PACKAGE_ID)
        .unwrap_or(&PACKAGES[0])
}

/// Looks a package up by its id or its URL slug.
pub fn find_package(id: &str) -> Option<&'static Package> {
    PACKAGES.iter().find(|p| p.id == id || p.slug == id)
}

/// Resolves `id` to a package, silently falling back to the default package
/// when nothing matches.
pub fn select_package(id: &str) -> PackageSelection {
    match find_package(id) {
        Some(package) => PackageSelection {
            package,
            matched: true,
        },
        None => {
            log::debug!("unknown package id '{}', using {}", id, DEFAULT_PACKAGE_ID);
            PackageSelection {
                package: default_package(),
                matched: false,
            }
        }
    }
}

/// Calendly base every scheduling link lives under.

pub fn format_gbp(pence: i64) -> String {
    let sign = if pence < 0 { "-" } else { "" };
    let pence = pence.abs();
    if pence % 100 == 0 {
        format!("{}£{}", sign, pence / 100)
    } else {
        format!("{}£{}.{:02}", sign, pence / 100, pence % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_catalog_id_selects_its_own_url() {
        for package in PACKAGES {
            let selection = select_package(package.id);
            assert!(selection.matched);
            assert_eq!(selection.scheduling_url(), package.calendly_url);
        }
    }

    #[test]
    fn slugs_resolve_like_ids() {
        assert_eq!(select_package("6-hour").package.id, "6hour");
        assert_eq!(select_package("test-rental").package.id, "testrental");
    }

    #[test]
    fn unknown_id_falls_back_to_payg() {
        for id in ["", "20hour", "PAYG", "../etc"] {
            let selection = select_package(id);
            assert!(!selection.matched, "{id} should not match");
            assert_eq!(selection.package.id, "payg");
            assert_eq!(
                selection.scheduling_url(),
                "https://calendly.com/clearway-driving/pay-as-you-go"
            );
        }
    }

    #[test]
    fn scheduling_urls_are_distinct_and_not_clones() {
        let urls: HashSet<_> = PACKAGES.iter().map(|p| p.calendly_url).collect();
        assert_eq!(urls.len(), PACKAGES.len());
        assert!(PACKAGES.iter().all(|p| !p.calendly_url.contains("clone")));
        assert!(PACKAGES.iter().all(|p| p.calendly_url.starts_with(CALENDLY_BASE)));

        let ten = find_package("10hour").unwrap();
        assert!(ten.calendly_url.ends_with("10-hour-package"));
        let mock = find_package("mocktest").unwrap();
        assert!(mock.calendly_url.ends_with("mock-test"));
    }

    #[test]
    fn default_selection_is_payg() {
        let selection = PackageSelection::default();
        assert!(selection.package.is_default());
    }

    #[test]
    fn formats_prices() {
        assert_eq!(format_gbp(3800), "£38");
        assert_eq!(format_gbp(21650), "£216.50");
        assert_eq!(format_gbp(-505), "-£5.05");
        assert_eq!(find_package("10hour").unwrap().price_label(), "£350");
    }

    #[test]
    fn ten_hour_block_saves_thirty_pounds_over_payg() {
        let payg = find_package("payg").unwrap();
        let block = find_package("10hour").unwrap();
        assert_eq!(payg.price_pence * 10 - block.price_pence, 3000);
    }
}
