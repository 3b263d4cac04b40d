// templates/pages/events.rs

use crate::board::{BoardView, LoadStatus};
use crate::templates::components::{
    area_select, event_card, filter_form, pagination_nav, results_summary,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

const PAGE_TITLE: &str = "Daftar Event";

pub fn events_page(view: &BoardView) -> Markup {
    desktop_layout(
        PAGE_TITLE,
        html! {
            main class="container pb-5" {
                (status_banner(&view.status))
                (filter_form(view))
                div id="results" {
                    (results(view))
                }
            }
        },
    )
}

/// The `#results` contents, plus the area select swapped out-of-band.
pub fn results_fragment(view: &BoardView) -> Markup {
    html! {
        (results(view))
        (area_select(view, true))
    }
}

fn results(view: &BoardView) -> Markup {
    html! {
        div id="total-events-container" {
            (results_summary(view))
        }
        div id="card-container" class="row g-3 mb-4" {
            @if view.is_no_data() {
                div class="col-12" {
                    div class="alert alert-secondary text-center" role="alert" {
                        "Belum ada data event"
                    }
                }
            } @else if view.is_no_results() {
                div class="col-12" {
                    div class="alert alert-info text-center" role="alert" {
                        "Tidak ada event yang ditemukan"
                    }
                }
            } @else {
                @for event in &view.events {
                    (event_card(event))
                }
            }
        }
        div id="pagination-container" {
            (pagination_nav(view))
        }
    }
}

fn status_banner(status: &LoadStatus) -> Markup {
    html! {
        @match status {
            LoadStatus::Loaded { at, .. } => {
                p class="text-muted small text-end mb-2" {
                    "Terakhir diperbarui: " (at.format("%d %b %Y %H:%M UTC").to_string())
                    (refresh_button("btn btn-link btn-sm"))
                }
            }
            LoadStatus::Failed { message, .. } => {
                div class="alert alert-warning d-flex justify-content-between align-items-center" role="alert" {
                    span { "Gagal memuat data: " (message) }
                    (refresh_button("btn btn-outline-dark btn-sm"))
                }
            }
            LoadStatus::Empty => {
                div class="alert alert-secondary d-flex justify-content-between align-items-center" role="alert" {
                    span { "Data belum dimuat." }
                    (refresh_button("btn btn-outline-dark btn-sm"))
                }
            }
        }
    }
}

fn refresh_button(class: &str) -> Markup {
    html! {
        form method="post" action="/refresh" class="d-inline" {
            button type="submit" class=(class) {
                i class="fas fa-rotate me-1" {}
                "Muat ulang"
            }
        }
    }
}
