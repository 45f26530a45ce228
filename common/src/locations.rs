use serde::Serialize;

/// A neighbourhood we run a landing page for.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub slug: &'static str,
    pub area: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
    pub test_centre: &'static str,
    pub postcodes: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

impl Location {
    pub fn path(&self) -> String {
        format!("/driving-lessons/{}", self.slug)
    }

    pub fn page_title(&self) -> String {
        format!("Driving Lessons in {} | Clearway Driving School", self.area)
    }

    /// Content for the page's `<meta name="keywords">` tag.
    pub fn meta_keywords(&self) -> String {
        self.keywords.join(", ")
    }
}

pub static LOCATIONS: &[Location] = &[
    Location {
        slug: "clifton",
        area: "Clifton",
        headline: "Driving lessons in Clifton, from your front door",
        intro: "Hill starts on Constitution Hill, tight Georgian terraces and the Portway: learn the roads Clifton drivers actually face.",
        test_centre: "Avonmouth",
        postcodes: &["BS8"],
        keywords: &["driving lessons Clifton", "driving instructor BS8", "automatic lessons Clifton"],
    },
    Location {
        slug: "bedminster",
        area: "Bedminster",
        headline: "Friendly, patient instructors in Bedminster",
        intro: "From East Street to the A38, we build confidence around busy junctions, bus lanes and the Bedminster Parade gyratory.",
        test_centre: "Avonmouth",
        postcodes: &["BS3"],
        keywords: &["driving lessons Bedminster", "driving school BS3", "intensive course Bedminster"],
    },
    Location {
        slug: "southville",
        area: "Southville",
        headline: "Learn to drive in Southville",
        intro: "Narrow residential streets and the Cumberland Road approach make Southville a great place to master clutch control and awareness.",
        test_centre: "Avonmouth",
        postcodes: &["BS3"],
        keywords: &["driving lessons Southville", "driving instructor Southville"],
    },
    Location {
        slug: "fishponds",
        area: "Fishponds",
        headline: "Pass first time with lessons in Fishponds",
        intro: "Our Fishponds lessons cover the Kingswood test routes, the ring road and the roundabouts around Eastgate.",
        test_centre: "Kingswood",
        postcodes: &["BS16"],
        keywords: &["driving lessons Fishponds", "driving school BS16", "Kingswood test routes"],
    },
    Location {
        slug: "horfield",
        area: "Horfield",
        headline: "Driving lessons in Horfield and Lockleaze",
        intro: "Gloucester Road traffic, school-run streets and the M32 slip roads: practise them all with a local instructor.",
        test_centre: "Avonmouth",
        postcodes: &["BS7"],
        keywords: &["driving lessons Horfield", "driving instructor BS7"],
    },
    Location {
        slug: "bishopston",
        area: "Bishopston",
        headline: "Learner-friendly lessons in Bishopston",
        intro: "Start in quiet side streets, then graduate to Gloucester Road and the Arches once you're ready.",
        test_centre: "Avonmouth",
        postcodes: &["BS7"],
        keywords: &["driving lessons Bishopston", "driving school Bishopston"],
    },
    Location {
        slug: "kingswood",
        area: "Kingswood",
        headline: "Lessons on the Kingswood test routes",
        intro: "Live nearby? Practise on the exact roads examiners use out of the Kingswood test centre.",
        test_centre: "Kingswood",
        postcodes: &["BS15"],
        keywords: &["driving lessons Kingswood", "Kingswood driving test", "driving instructor BS15"],
    },
    Location {
        slug: "filton",
        area: "Filton",
        headline: "Driving lessons in Filton and Patchway",
        intro: "Dual carriageways, the A38 and the Aztec West roundabouts give Filton learners plenty of variety.",
        test_centre: "Avonmouth",
        postcodes: &["BS34"],
        keywords: &["driving lessons Filton", "driving school BS34", "Patchway driving lessons"],
    },
];

pub fn find_location(slug: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|l| l.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = LOCATIONS.iter().map(|l| l.slug).collect();
        assert_eq!(slugs.len(), LOCATIONS.len());
    }

    #[test]
    fn finds_by_slug() {
        let loc = find_location("fishponds").unwrap();
        assert_eq!(loc.test_centre, "Kingswood");
        assert_eq!(loc.path(), "/driving-lessons/fishponds");
        assert!(find_location("Fishponds").is_none());
    }

    #[test]
    fn every_location_has_its_own_keywords() {
        for loc in LOCATIONS {
            let keywords = loc.meta_keywords();
            assert!(!loc.keywords.is_empty(), "{} has no keywords", loc.slug);
            assert!(keywords.contains(loc.area), "{}: {}", loc.slug, keywords);
        }
        let clifton = find_location("clifton").unwrap();
        assert_eq!(
            clifton.meta_keywords(),
            "driving lessons Clifton, driving instructor BS8, automatic lessons Clifton"
        );
    }
}
