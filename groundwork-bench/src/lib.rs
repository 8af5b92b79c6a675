//! Shared fixtures for Groundwork benchmarks.

/// Sample intake descriptions spanning every building category, as
/// (building key, description) pairs.
pub fn sample_descriptions() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "restaurant",
            "Ground-up quick service restaurant with a drive-thru, outdoor seating, \
             and a walk-in cooler behind the kitchen line.",
        ),
        (
            "restaurant",
            "Fine dining concept featuring a wine cellar, open kitchen, full bar, \
             and a private dining room for events.",
        ),
        (
            "hospitality",
            "Select service hotel with an indoor pool, fitness room, and 4,000 SF \
             of conference space off the lobby.",
        ),
        (
            "hospitality",
            "Resort renovation adding a full-service spa, rooftop bar, and a porte \
             cochere at the arrival court.",
        ),
        (
            "retail",
            "Grocery anchor with refrigerated cases, a pharmacy with rx counter, \
             prepared foods, and two loading docks.",
        ),
        (
            "office",
            "Class A office tower with structured parking, a tenant fitness center, \
             a rooftop terrace, and an upgraded lobby.",
        ),
        (
            "educational",
            "New high school with a gymnasium, auditorium, science labs, and an \
             athletic field behind the main building.",
        ),
        (
            "educational",
            "Community college campus expansion with a student center and \
             vocational shops.",
        ),
        (
            "civic",
            "New central public library with maker space, a community room, and a \
             children's wing.",
        ),
        (
            "civic",
            "Two-bay fire station with apparatus bay exhaust capture, a decon \
             suite, and crew dormitory.",
        ),
        (
            "specialty",
            "Climate-controlled self storage with covered loading and gated access \
             security system.",
        ),
        (
            "healthcare",
            "Outpatient clinic with an MRI suite, radiology, procedure rooms, and \
             a clinical lab.",
        ),
    ]
}
