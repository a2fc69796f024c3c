use folio_core::render::page::render_overlay;
use folio_core::{
    ContentRepository, ContentStore, DetailView, OverlayState, SiteBuilder, SiteConfig,
    SiteError,
};
use std::path::Path;

fn config_for(out_dir: &Path) -> SiteConfig {
    SiteConfig {
        out_dir: out_dir.to_path_buf(),
        copyright_year: Some(2026),
        ..SiteConfig::default()
    }
}

#[test]
fn build_writes_index_projects_and_not_found_page() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = ContentStore::builtin();
    let config = config_for(dir.path());

    let report = SiteBuilder::new(&config)
        .build(&store)
        .expect("build should succeed");

    let overlay_pages = store
        .project_ids()
        .into_iter()
        .map(|id| DetailView::resolve(&store, id).overlay_targets().len())
        .sum::<usize>();
    assert!(overlay_pages > 0);
    assert_eq!(
        report.page_count(),
        store.projects().len() + 2 + overlay_pages
    );
    assert!(dir.path().join("index.html").is_file());
    assert!(dir.path().join("404.html").is_file());
    for id in store.project_ids() {
        let file = dir.path().join("project").join(id).join("index.html");
        let html = std::fs::read_to_string(&file).expect("project page should exist");
        let title = &store.project(id).expect("project").title;
        assert!(html.contains(title.as_str()));
        assert!(!html.contains("modal-overlay"));
    }
    assert_eq!(
        report.total_bytes(),
        report.pages.iter().map(|page| page.bytes).sum::<usize>()
    );
}

#[test]
fn report_lists_routes_in_navigation_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = ContentStore::builtin();
    let config = config_for(dir.path());

    let report = SiteBuilder::new(&config).build(&store).expect("build");
    let routes = report
        .pages
        .iter()
        .map(|page| page.route.clone())
        .filter(|route| !route.as_deref().is_some_and(|path| path.contains("/view/")))
        .collect::<Vec<_>>();
    assert_eq!(
        routes,
        vec![
            Some("/".to_string()),
            Some("/project/t2i-dashboard".to_string()),
            Some("/project/viral-automation".to_string()),
            Some("/project/specs-ai".to_string()),
            None,
        ]
    );
}

#[test]
fn build_into_a_file_path_reports_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").expect("write blocker");

    let config = config_for(&blocker);
    let err = SiteBuilder::new(&config)
        .build(&ContentStore::builtin())
        .expect_err("writing below a file must fail");
    assert!(matches!(err, SiteError::Io { .. }));
    assert!(err.to_string().contains("blocker"));
}

#[test]
fn builtin_text_cards_render_escaped_previews() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = config_for(dir.path());
    SiteBuilder::new(&config)
        .build(&ContentStore::builtin())
        .expect("build");

    let html = std::fs::read_to_string(dir.path().join("project/specs-ai/index.html"))
        .expect("specs page");
    assert_eq!(html.matches(r#"class="text-card-preview""#).count(), 4);
    assert_eq!(html.matches("Read Full Response").count(), 4);
    assert_eq!(html.matches("Read Full Prompt").count(), 3);
    assert!(!html.contains("# Synthetic"));
}

#[test]
fn full_responses_and_prompts_are_written_as_overlay_pages() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = ContentStore::builtin();
    SiteBuilder::new(&config_for(dir.path()))
        .build(&store)
        .expect("build");

    let project = store.project("specs-ai").expect("specs-ai");
    for (index, item) in project.details.gallery.iter().enumerate() {
        let response = item.visual_content().expect("text cards carry a response");
        let html = std::fs::read_to_string(
            dir.path()
                .join(format!("project/specs-ai/view/{index}/response/index.html")),
        )
        .expect("response page should exist");
        let overlay = render_overlay(
            &OverlayState::Open {
                content: response.to_string(),
                title: "Full Model Response".to_string(),
            },
            "/project/specs-ai",
        );
        assert!(html.contains(&overlay), "response {index} should be complete");
        assert!(html.trim_end().ends_with(&format!("{overlay}</body></html>")));

        if let Some(prompt) = item.text_content() {
            let html = std::fs::read_to_string(
                dir.path()
                    .join(format!("project/specs-ai/view/{index}/prompt/index.html")),
            )
            .expect("prompt page should exist");
            let title = format!("Full Prompt: {}", item.display_title());
            assert!(html.contains(&render_overlay(
                &OverlayState::Open {
                    content: prompt.to_string(),
                    title,
                },
                "/project/specs-ai",
            )));
        }
    }
}

#[test]
fn every_overlay_link_on_a_detail_page_resolves_to_a_written_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = ContentStore::builtin();
    SiteBuilder::new(&config_for(dir.path()))
        .build(&store)
        .expect("build");

    for id in store.project_ids() {
        let html = std::fs::read_to_string(dir.path().join(format!("project/{id}/index.html")))
            .expect("detail page");
        let prefix = format!(r#"href="/project/{id}/view/"#);
        let links = html
            .match_indices(prefix.as_str())
            .map(|(start, _)| {
                let rest = &html[start + r#"href=""#.len()..];
                let end = rest.find('"').expect("closing quote");
                rest[..end].to_string()
            })
            .collect::<Vec<_>>();
        let expected = DetailView::resolve(&store, id).overlay_targets().len();
        assert_eq!(links.len(), expected, "project {id}");

        for link in links {
            let file = dir
                .path()
                .join(link.trim_start_matches('/'))
                .join("index.html");
            let page = std::fs::read_to_string(&file).expect("overlay page should exist");
            assert!(page.contains(r#"class="modal-overlay""#));
            assert!(page.contains(&format!(r#"class="modal-close" href="/project/{id}""#)));
        }
    }
}
