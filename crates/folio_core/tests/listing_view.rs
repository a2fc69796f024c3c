use folio_core::{
    render_page, ContentBundle, ContentRepository, ContentStore, ListingView, Page,
    RenderOptions, Route, Site,
};

fn options() -> RenderOptions {
    RenderOptions {
        site_title: None,
        stylesheet: "/index.css".to_string(),
        asset_prefix: "/assets".to_string(),
        copyright_year: 2026,
    }
}

#[test]
fn rows_follow_store_order_and_link_to_detail_paths() {
    let store = ContentStore::builtin();
    let view = ListingView::build(&store);

    let ids = view.rows.iter().map(|row| row.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, store.project_ids());
    assert_eq!(view.project_count(), store.projects().len());
    for row in &view.rows {
        assert_eq!(row.href, format!("/project/{}", row.id));
        assert_eq!(Route::parse(&row.href), Route::Project(row.id.clone()));
    }
}

#[test]
fn selecting_a_row_navigates_to_its_project() {
    let store = ContentStore::builtin();
    let view = ListingView::build(&store);
    let route = view.select(1).expect("second row should exist");
    assert_eq!(route, Route::Project("viral-automation".to_string()));
    assert!(view.select(99).is_none());

    let site = Site::new(&store);
    let Page::Detail(detail) = site.open_route(&route) else {
        panic!("row route should open a detail page");
    };
    assert_eq!(
        detail.page().map(|page| page.title.as_str()),
        Some("Viral Automation Workflow")
    );
}

#[test]
fn profile_fields_are_rendered() {
    let store = ContentStore::builtin();
    let html = render_page(&Site::new(&store).open("/"), &options());
    let profile = store.profile();

    assert!(html.contains(r#"<h1 class="swiss-title">JACOB MOHAN</h1>"#));
    assert!(html.contains(&profile.title));
    assert!(html.contains(&profile.phone));
    assert!(html.contains(r#"href="mailto:jacobdmohan@gmail.com""#));
    assert!(html.contains(r#"href="https://github.com/Codingtheblocks""#));
    for skill in &profile.skills {
        assert!(html.contains(&format!(
            r#"<span class="swiss-tech-tag">{}</span>"#,
            skill
        )));
    }
    assert!(html.contains(r#"<span class="section-count">(3)</span>"#));
    assert!(html.contains("&copy; 2026 Jacob Mohan."));
}

#[test]
fn rows_render_thumbnail_under_asset_prefix() {
    let store = ContentStore::builtin();
    let html = render_page(&Site::new(&store).open("/"), &options());
    assert!(html.contains(r#"src="/assets/projects/t2i/dashbaord_final.JPG""#));
    assert!(html.contains(r#"<span class="project-category">Fintech / UI Design</span>"#));
    assert_eq!(html.matches(r#"class="project-row""#).count(), 3);
}

#[test]
fn empty_project_list_renders_zero_rows() {
    let mut bundle: ContentBundle = ContentStore::builtin().to_bundle();
    bundle.projects.clear();
    let store = ContentStore::from_bundle(bundle).expect("empty list is valid");

    let view = ListingView::build(&store);
    assert!(view.rows.is_empty());

    let html = render_page(&Page::Listing(view), &options());
    assert!(html.contains(r#"<span class="section-count">(0)</span>"#));
    assert!(!html.contains("project-row"));
}

#[test]
fn unknown_paths_render_page_not_found() {
    let store = ContentStore::builtin();
    let page = Site::new(&store).open("/about");
    assert!(matches!(page, Page::Missing(ref path) if path == "/about"));
    let html = render_page(&page, &options());
    assert!(html.contains("Page not found"));
}
