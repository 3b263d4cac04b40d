use crate::board::BoardView;
use crate::domain::pagination::NavLink;
use crate::domain::{FilterState, PageWindow};
use crate::templates::components::filter_href;
use maud::{html, Markup};

pub fn results_summary(view: &BoardView) -> Markup {
    html! {
        div class="d-flex px-2 justify-content-between align-items-center mb-3" {
            small class="text-muted mb-0" {
                "Total Events: " strong { (view.total) }
            }
            @if let Some(window) = &view.pagination {
                small class="text-muted" {
                    "Showing page " (window.current_page) " of " (window.total_pages)
                }
            }
        }
    }
}

/// First/previous, numbered pages, next/last. Nothing is rendered for a
/// single page of results.
pub fn pagination_nav(view: &BoardView) -> Markup {
    let Some(window) = view.pagination.as_ref().filter(|w| w.has_multiple_pages()) else {
        return html! {};
    };
    let filter = &view.filter;

    html! {
        nav aria-label="Event pagination" {
            ul class="pagination justify-content-center" {
                (nav_item(filter, window.first, "fa-angle-double-left", "First page"))
                (nav_item(filter, window.previous, "fa-angle-left", "Previous page"))
                @for &page in &window.page_numbers {
                    (page_item(filter, window, page))
                }
                (nav_item(filter, window.next, "fa-angle-right", "Next page"))
                (nav_item(filter, window.last, "fa-angle-double-right", "Last page"))
            }
        }
    }
}

fn page_item(filter: &FilterState, window: &PageWindow, page: usize) -> Markup {
    let active = page == window.current_page;

    html! {
        li.page-item.active[active] {
            @if active {
                span class="page-link text-white bg-primary" aria-current="page" { (page) }
            } @else {
                (page_link(filter, page, "page-link text-primary", html! { (page) }, None))
            }
        }
    }
}

fn nav_item(filter: &FilterState, link: NavLink, icon: &str, title: &str) -> Markup {
    let body = html! { i class=(format!("fas {icon}")) {} };

    html! {
        li.page-item.disabled[!link.enabled] {
            @if link.enabled {
                (page_link(filter, link.page, "page-link text-primary", body, Some(title)))
            } @else {
                span class="page-link text-primary" title=(title) { (body) }
            }
        }
    }
}

fn page_link(
    filter: &FilterState,
    page: usize,
    class: &str,
    body: Markup,
    title: Option<&str>,
) -> Markup {
    html! {
        a
            class=(class)
            href=(filter_href("/", filter, Some(page)))
            hx-get=(filter_href("/events", filter, Some(page)))
            hx-target="#results"
            hx-push-url=(filter_href("/", filter, Some(page)))
            title=[title]
        {
            (body)
        }
    }
}
