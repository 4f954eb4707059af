use devhub::domain::{Catalog, Developer, Identified, Project};
use devhub::filter::{facet_options, filter_listing, FilterCriteria, Listing, ListingState};

const FIVE_DEVELOPERS: &str = r#"[
    {"id": 1, "name": "Ada", "username": "ada", "bio": "Compilers", "skills": ["OCaml", "Rust"]},
    {"id": 2, "name": "Brian", "username": "bk", "bio": "Unix tools", "skills": ["C"]},
    {"id": 3, "name": "Chloe", "username": "chloe", "bio": "Web things", "skills": ["TypeScript"]},
    {"id": 4, "name": "Dmitri", "username": "dm", "bio": "Storage engines", "skills": ["Rust", "Go"]},
    {"id": 5, "name": "Erin", "username": "erin", "bio": "Design systems", "skills": ["CSS"]}
]"#;

fn five_developers() -> Vec<Developer> {
    Catalog::from_json(FIVE_DEVELOPERS, "[]", "[]")
        .unwrap()
        .developers()
        .to_vec()
}

fn ids<T: Identified>(records: &[T]) -> Vec<u32> {
    records.iter().map(Identified::id).collect()
}

#[test]
fn rust_facet_selects_two_of_five_in_order() {
    let mut page = ListingState::new(five_developers());
    assert!(page.select_facet("Rust"));
    assert_eq!(page.visible_ids(), vec![1, 4]);
    assert_eq!(page.summary(), "Showing 2 developers");
}

#[test]
fn identity_criteria_return_whole_dataset() {
    let developers = five_developers();
    assert_eq!(filter_listing(&developers, &FilterCriteria::default()), developers);

    let projects = Catalog::embedded().unwrap().projects().to_vec();
    assert_eq!(filter_listing(&projects, &FilterCriteria::default()), projects);
}

#[test]
fn results_keep_dataset_order() {
    let projects = Catalog::embedded().unwrap().projects().to_vec();
    for query in ["a", "e", "s", "rust", ""] {
        let found = ids(&filter_listing(&projects, &FilterCriteria::new(query, "All")));
        let positions: Vec<usize> = found
            .iter()
            .map(|id| projects.iter().position(|p| p.id == *id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "order broken for {query:?}");
    }
}

#[test]
fn facet_matches_exact_values_only() {
    let developers = five_developers();
    for facet in ["Rus", "rust", "RUST", "Rust "] {
        assert!(filter_listing(&developers, &FilterCriteria::new("", facet)).is_empty());
    }
    for found in filter_listing(&developers, &FilterCriteria::new("", "Go")) {
        assert!(found.skills.iter().any(|s| s == "Go"));
    }
}

#[test]
fn query_and_facet_combine() {
    let developers = five_developers();
    let found = filter_listing(&developers, &FilterCriteria::new("STORAGE", "Rust"));
    assert_eq!(ids(&found), vec![4]);

    let found = filter_listing(&developers, &FilterCriteria::new("storage", "CSS"));
    assert!(found.is_empty());
}

#[test]
fn facet_options_are_sorted_and_unique() {
    let options = facet_options(&five_developers(), Developer::facet_field());
    assert_eq!(options, ["All", "C", "CSS", "Go", "OCaml", "Rust", "TypeScript"]);
}

#[test]
fn project_search_covers_title_and_description_only() {
    let projects: Vec<Project> = Catalog::embedded().unwrap().projects().to_vec();
    let found = filter_listing(&projects, &FilterCriteria::new("devops", "All"));
    for project in &found {
        let text = format!("{} {}", project.title, project.description).to_lowercase();
        assert!(text.contains("devops"));
    }
}

#[test]
fn empty_result_reports_empty_state() {
    let mut page = ListingState::new(five_developers());
    page.set_query("quantum");
    assert!(page.is_empty_result());
    assert_eq!(page.summary(), "Showing 0 developers");

    page.set_query("");
    assert_eq!(page.visible().len(), 5);
}
