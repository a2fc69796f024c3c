use folio_core::{
    Alignment, ContentBundle, ContentError, ContentRepository, ContentStore, DetailView,
    GallerySurface, ProjectValidationError,
};
use serde_json::json;

fn bundle_json(ids: &[&str]) -> serde_json::Value {
    let projects = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Project {id}"),
                "category": "Test",
                "thumbnail": format!("projects/{id}.png"),
                "description": "desc",
                "details": { "story": "story", "tech": [], "gallery": [] }
            })
        })
        .collect::<Vec<_>>();

    json!({
        "profile": {
            "name": "Ada Lovelace",
            "title": "Engineer",
            "tagline": "Analytical engines.",
            "location": "London",
            "email": "ada@example.com",
            "phone": "555-0100",
            "github": "https://example.com/ada",
            "about": "Bio",
            "skills": ["Math", "Notes"]
        },
        "projects": projects
    })
}

fn store_from(value: serde_json::Value) -> Result<ContentStore, ContentError> {
    let bundle = ContentBundle::from_json_str(value.to_string().as_str())?;
    ContentStore::from_bundle(bundle)
}

#[test]
fn lookup_resolves_known_ids_and_misses_unknown() {
    let store = store_from(bundle_json(&["a", "b"])).expect("bundle should load");

    assert_eq!(store.project_ids(), vec!["a", "b"]);
    assert_eq!(store.project("b").map(|p| p.title.as_str()), Some("Project b"));
    assert!(store.project("c").is_none());
    assert!(store.project("").is_none());
}

#[test]
fn duplicate_ids_are_rejected_at_load() {
    let err = store_from(bundle_json(&["a", "b", "a"])).expect_err("duplicate id must fail");
    assert!(matches!(err, ContentError::DuplicateProjectId(ref id) if id == "a"));
    assert!(err.to_string().contains("duplicate project id"));
}

#[test]
fn malformed_ids_are_rejected_at_load() {
    let err = store_from(bundle_json(&["Not A Slug"])).expect_err("bad id must fail");
    assert!(matches!(
        err,
        ContentError::Validation(ProjectValidationError::InvalidId(_))
    ));
}

#[test]
fn empty_project_list_is_valid() {
    let store = store_from(bundle_json(&[])).expect("empty list should load");
    assert!(store.projects().is_empty());
    assert_eq!(store.profile().skills, vec!["Math", "Notes"]);
}

#[test]
fn gallery_items_accept_original_field_names_and_blank_optionals() {
    let mut value = bundle_json(&["a"]);
    value["projects"][0]["details"]["gallery"] = json!([
        {
            "type": "Step 1",
            "title": "",
            "align": "center",
            "visualType": "text-card",
            "visualContent": "response",
            "text": "short",
            "textContent": null
        },
        {
            "type": "Step 2",
            "image": "step2.png",
            "text": "short"
        }
    ]);

    let store = store_from(value).expect("bundle should load");
    let gallery = &store.project("a").expect("project a").details.gallery;
    assert_eq!(gallery.len(), 2);
    assert!(gallery[0].is_text_card());
    assert_eq!(gallery[0].title, None);
    assert_eq!(gallery[0].text_content(), None);
    assert_eq!(gallery[0].visual_content(), Some("response"));
    assert_eq!(gallery[1].image.as_deref(), Some("step2.png"));
    assert_eq!(gallery[1].align, None);
}

#[test]
fn unknown_tags_fall_back_to_parity_and_image_surface() {
    let mut value = bundle_json(&["a"]);
    value["projects"][0]["details"]["gallery"] = json!([
        { "type": "Step 1", "text": "short", "visualType": "video", "image": "one.png" },
        { "type": "Step 2", "text": "short", "align": "justify" },
        { "type": "Step 3", "text": "short", "align": "center", "visualType": "" }
    ]);

    let store = store_from(value).expect("unknown tags should not fail the bundle");
    let gallery = &store.project("a").expect("project a").details.gallery;
    assert!(!gallery[0].is_text_card());
    assert_eq!(gallery[0].visual_type, None);
    assert_eq!(gallery[1].align, None);
    assert_eq!(gallery[1].alignment_at(1), Alignment::Right);
    assert_eq!(gallery[2].alignment_at(2), Alignment::Center);

    let view = DetailView::resolve(&store, "a");
    let blocks = &view.page().expect("a should resolve").blocks;
    assert!(matches!(blocks[0].surface, GallerySurface::Image { .. }));
    assert_eq!(blocks[1].surface, GallerySurface::Placeholder);
}

#[test]
fn bundle_file_errors_carry_the_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("content.json");
    let err = ContentStore::from_json_path(&missing).expect_err("missing file must fail");
    assert!(matches!(err, ContentError::Io { ref path, .. } if path == &missing));
}

#[test]
fn bundle_file_round_trip_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("content.json");
    std::fs::write(&path, bundle_json(&["a"]).to_string()).expect("write bundle");

    let store = ContentStore::from_json_path(&path).expect("bundle file should load");
    assert_eq!(store.profile().name, "Ada Lovelace");
    assert_eq!(store.profile().link, "https://example.com/ada");
}
