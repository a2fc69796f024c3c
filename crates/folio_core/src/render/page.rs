//! Page documents.
//!
//! Markup mirrors the class names the site stylesheet targets
//! (`project-row`, `gallery-block`, `modal-overlay`, ...).
//!
//! Overlay triggers are plain links to overlay routes and the overlay's
//! backdrop and close control link back to the detail route, so every open
//! state is reachable without scripts.

use crate::render::html::{asset_url, escape_html};
use crate::render::RenderOptions;
use crate::route::Route;
use crate::site::Page;
use crate::view::detail::{
    DetailState, DetailView, GalleryBlock, GallerySurface, OverlayTarget, NOT_FOUND_NOTICE,
};
use crate::view::listing::ListingView;
use crate::view::overlay::OverlayState;

/// Notice for paths the site does not serve.
pub const PAGE_NOT_FOUND_NOTICE: &str = "Page not found";

const ARROW_RIGHT_SVG: &str = r#"<svg width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"><path d="M5 12h14M12 5l7 7-7 7"/></svg>"#;
const ARROW_LEFT_SVG: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M19 12H5M12 19l-7-7 7-7"/></svg>"#;

/// Renders any page as a full document.
pub fn render_page(page: &Page<'_>, options: &RenderOptions) -> String {
    match page {
        Page::Listing(view) => render_listing(view, options),
        Page::Detail(view) => render_detail(view, options),
        Page::Missing(_) => render_missing(options),
    }
}

/// Renders the listing (home) document.
pub fn render_listing(view: &ListingView, options: &RenderOptions) -> String {
    let profile = &view.profile;
    let mut body = String::new();

    body.push_str(r#"<div class="home-page">"#);
    body.push_str(r#"<section class="hero-swiss"><div class="container">"#);
    body.push_str(&format!(
        r#"<div class="swiss-header"><h1 class="swiss-title">{}</h1></div><div class="swiss-separator"></div>"#,
        escape_html(&profile.heading)
    ));
    body.push_str(r#"<div class="swiss-grid">"#);
    body.push_str(&labeled_column("Role", &profile.role));
    body.push_str(&labeled_column("Focus", &profile.tagline));
    body.push_str(&labeled_column("Location", &profile.location));
    body.push_str(&format!(
        concat!(
            r#"<div class="swiss-col"><span class="swiss-label">Contact</span>"#,
            r#"<span class="swiss-value">{phone}</span>"#,
            r#"<a href="{mailto}" class="swiss-link">{email}</a>"#,
            r#"<a href="{link}" target="_blank" rel="noopener noreferrer" class="swiss-link">GitHub Profile</a>"#,
            "</div>"
        ),
        phone = escape_html(&profile.phone),
        mailto = escape_html(&profile.mailto),
        email = escape_html(&profile.email),
        link = escape_html(&profile.link),
    ));
    body.push_str("</div>");

    body.push_str(r#"<div class="swiss-bio-section">"#);
    body.push_str(&format!(
        r#"<p class="swiss-bio">{}</p>"#,
        escape_html(&profile.bio)
    ));
    body.push_str(r#"<div class="swiss-tech-cloud">"#);
    for skill in &profile.skills {
        body.push_str(&format!(
            r#"<span class="swiss-tech-tag">{}</span>"#,
            escape_html(skill)
        ));
    }
    body.push_str("</div></div></div></section>");

    body.push_str(r#"<section class="projects-section container">"#);
    body.push_str(&format!(
        r#"<div class="section-header"><span class="section-label">Selected Works</span><span class="section-count">({})</span></div>"#,
        view.project_count()
    ));
    body.push_str(r#"<div class="projects-list">"#);
    for row in &view.rows {
        body.push_str(&format!(
            concat!(
                r#"<a href="{href}" class="project-row">"#,
                r#"<div class="project-image-wrapper"><img src="{thumb}" alt="{title}" class="project-thumb" loading="lazy"></div>"#,
                r#"<div class="project-meta"><span class="project-category">{category}</span>"#,
                r#"<h2 class="project-title">{title}</h2><p class="project-desc">{description}</p></div>"#,
                r#"<div class="project-arrow">{arrow}</div></a>"#
            ),
            href = escape_html(&row.href),
            thumb = escape_html(&asset_url(&options.asset_prefix, &row.thumbnail)),
            title = escape_html(&row.title),
            category = escape_html(&row.category),
            description = escape_html(&row.description),
            arrow = ARROW_RIGHT_SVG,
        ));
    }
    body.push_str("</div></section>");

    body.push_str(&format!(
        r#"<footer class="footer container"><div class="footer-content"><p class="footer-text">&copy; {} {}.</p></div></footer>"#,
        options.copyright_year,
        escape_html(&profile.name)
    ));
    body.push_str("</div>");

    document(&document_title(None, &profile.name, options), &body, options)
}

/// Renders the detail document, including the overlay when open.
pub fn render_detail(view: &DetailView<'_>, options: &RenderOptions) -> String {
    let page = match view.state() {
        DetailState::Resolved(page) => page,
        DetailState::NotFound { .. } => {
            let body = format!(r#"<div class="container not-found">{NOT_FOUND_NOTICE}</div>"#);
            return document(
                &document_title(Some(NOT_FOUND_NOTICE), "", options),
                &body,
                options,
            );
        }
    };

    let mut body = String::new();
    body.push_str(r#"<div class="project-page">"#);
    body.push_str(&format!(
        r#"<nav class="project-nav container"><a href="{}" class="back-link">{}<span>Back</span></a></nav>"#,
        Route::Home.path(),
        ARROW_LEFT_SVG
    ));

    body.push_str(r#"<header class="project-header container">"#);
    body.push_str(&format!(
        r#"<div class="header-meta"><span class="project-category-badge">{}</span></div>"#,
        escape_html(&page.category)
    ));
    body.push_str(&format!(
        r#"<h1 class="project-headline">{}</h1><div class="project-story"><p>{}</p></div>"#,
        escape_html(&page.title),
        escape_html(&page.story)
    ));
    body.push_str(r#"<div class="tech-stack-list"><span class="tech-label">Technologies:</span>"#);
    for tech in &page.tech {
        body.push_str(&format!(
            r#"<span class="tech-item">{}</span>"#,
            escape_html(tech)
        ));
    }
    body.push_str("</div></header>");

    body.push_str(r#"<div class="project-content container">"#);
    for block in &page.blocks {
        body.push_str(&render_block(&page.id, block, options));
    }
    body.push_str("</div>");

    body.push_str(&format!(
        r#"<footer class="project-footer container"><a href="{}" class="back-home-btn">View All Projects</a></footer>"#,
        Route::Home.path()
    ));
    body.push_str("</div>");

    // Top layer: after all page content.
    let close_href = Route::Project(page.id.clone()).path();
    body.push_str(&render_overlay(view.overlay(), &close_href));

    document(
        &document_title(Some(&page.title), "", options),
        &body,
        options,
    )
}

/// Renders the document for unserved paths.
pub fn render_missing(options: &RenderOptions) -> String {
    let body = format!(
        r#"<div class="container not-found">{PAGE_NOT_FOUND_NOTICE} <a href="{}" class="back-link">View All Projects</a></div>"#,
        Route::Home.path()
    );
    document(
        &document_title(Some(PAGE_NOT_FOUND_NOTICE), "", options),
        &body,
        options,
    )
}

/// Renders the overlay markup; empty when closed.
///
/// Both the backdrop and the close control link to `close_href`.
pub fn render_overlay(overlay: &OverlayState, close_href: &str) -> String {
    match overlay {
        OverlayState::Closed => String::new(),
        OverlayState::Open { content, title } => format!(
            concat!(
                r#"<div class="modal-overlay" role="dialog" aria-modal="true">"#,
                r#"<a class="modal-backdrop" href="{close}" aria-label="Close"></a>"#,
                r#"<div class="modal-content">"#,
                r#"<a class="modal-close" href="{close}" aria-label="Close">&times;</a>"#,
                r#"<h3 class="modal-title">{title}</h3>"#,
                r#"<div class="modal-body"><pre class="modal-text">{content}</pre></div>"#,
                "</div></div>"
            ),
            close = escape_html(close_href),
            title = escape_html(title),
            content = escape_html(content),
        ),
    }
}

fn overlay_href(project_id: &str, index: usize, target: OverlayTarget) -> String {
    Route::Overlay {
        id: project_id.to_string(),
        index,
        target,
    }
    .path()
}

fn render_block(project_id: &str, block: &GalleryBlock, options: &RenderOptions) -> String {
    let mut html = format!(
        r#"<div class="gallery-block {}" data-index="{}">"#,
        block.alignment.css_class(),
        block.index
    );

    let visual_tag = if block.clickable {
        html.push_str(&format!(
            r#"<a class="gallery-visual is-clickable" href="{}">"#,
            escape_html(&overlay_href(project_id, block.index, OverlayTarget::Visual))
        ));
        "a"
    } else {
        html.push_str(r#"<div class="gallery-visual">"#);
        "div"
    };
    match &block.surface {
        GallerySurface::TextCard { preview } => html.push_str(&format!(
            concat!(
                r#"<div class="text-card-preview"><div class="text-card-content">{}</div>"#,
                r#"<div class="text-card-overlay"><span class="text-card-badge">Click to Expand</span></div></div>"#
            ),
            escape_html(preview)
        )),
        GallerySurface::Image {
            src,
            alt,
            detail_hint,
        } => {
            html.push_str(&format!(
                r#"<div class="image-wrapper-clickable"><img src="{}" alt="{}" loading="lazy">"#,
                escape_html(&asset_url(&options.asset_prefix, src)),
                escape_html(alt)
            ));
            if *detail_hint {
                html.push_str(r#"<div class="image-overlay-hint">View Details</div>"#);
            }
            html.push_str("</div>");
        }
        GallerySurface::Placeholder => {
            html.push_str(r#"<div class="placeholder-visual">No Image Available</div>"#)
        }
    }
    html.push_str(&format!("</{visual_tag}>"));

    html.push_str(r#"<div class="gallery-text">"#);
    html.push_str(&format!(
        r#"<span class="step-type">{}</span>"#,
        escape_html(&block.step_label)
    ));
    if let Some(title) = &block.title {
        html.push_str(&format!("<h3>{}</h3>", escape_html(title)));
    }
    html.push_str(&format!("<p>{}</p>", escape_html(&block.text)));
    html.push_str(r#"<div class="text-actions">"#);
    for action in &block.actions {
        html.push_str(&format!(
            r#"<a class="read-more-btn" href="{}">{}</a>"#,
            escape_html(&overlay_href(project_id, block.index, (*action).into())),
            action.label()
        ));
    }
    html.push_str("</div></div></div>");
    html
}

fn labeled_column(label: &str, value: &str) -> String {
    format!(
        r#"<div class="swiss-col"><span class="swiss-label">{}</span><span class="swiss-value">{}</span></div>"#,
        escape_html(label),
        escape_html(value)
    )
}

fn document_title(page: Option<&str>, fallback: &str, options: &RenderOptions) -> String {
    let site = options.site_title.as_deref().unwrap_or(fallback);
    match (page, site.is_empty()) {
        (Some(page), false) => format!("{page} | {site}"),
        (Some(page), true) => page.to_string(),
        (None, _) => site.to_string(),
    }
}

fn document(title: &str, body: &str, options: &RenderOptions) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title>",
            r#"<link rel="stylesheet" href="{stylesheet}">"#,
            "</head><body>{body}</body></html>\n"
        ),
        title = escape_html(title),
        stylesheet = escape_html(&options.stylesheet),
        body = body,
    )
}
