use crate::board::BoardView;
use crate::domain::FacetOption;
use crate::templates::components::filter_href;
use maud::{html, Markup};

const ALL_MONTHS: &str = "Semua Bulan";
const ALL_AREAS: &str = "Semua Area";

/// Search box plus month and area selects. Each control re-renders the
/// results through htmx; without JavaScript the form submits to `/`.
pub fn filter_form(view: &BoardView) -> Markup {
    let filter = &view.filter;

    html! {
        form id="filters" class="row g-2 mb-3" method="get" action="/" {
            div class="col-md-6" {
                input
                    type="search"
                    class="form-control"
                    id="searchInput"
                    name="q"
                    placeholder="Cari nama acara, lokasi, atau area..."
                    value=(filter.search_text)
                    hx-get="/events"
                    hx-trigger="input changed delay:300ms, search"
                    hx-target="#results"
                    hx-include="#filters";
            }
            div class="col-md-3" {
                select
                    class="form-select"
                    id="monthFilter"
                    name="month"
                    hx-get="/events"
                    hx-trigger="change"
                    hx-target="#results"
                    hx-include="#filters"
                {
                    option value="" { (ALL_MONTHS) }
                    (facet_options(&view.month_options, filter.selected_month.as_deref()))
                }
            }
            div class="col-md-3" {
                (area_select(view, false))
            }
            noscript {
                div class="col-12" {
                    button type="submit" class="btn btn-primary btn-sm" { "Terapkan" }
                }
            }
            div class="col-12 text-end" {
                @if !filter.is_unfiltered() {
                    a class="btn btn-link btn-sm" href="/" { "Reset filter" }
                }
                a class="btn btn-link btn-sm" href=(filter_href("/events/export", filter, None)) {
                    i class="fas fa-file-excel me-1" {}
                    "Unduh XLSX"
                }
            }
        }
    }
}

/// The area select. Rendered out-of-band in result fragments so its
/// options follow the selected month.
pub fn area_select(view: &BoardView, out_of_band: bool) -> Markup {
    let selected = view.filter.selected_area.as_deref();
    // A selected area the current month has no events in still shows as chosen.
    let unlisted = selected
        .filter(|area| !view.area_options.iter().any(|opt| opt.value == *area))
        .map(|area| FacetOption::new(area, 0));

    html! {
        select
            class="form-select"
            id="areaFilter"
            name="area"
            form="filters"
            hx-get="/events"
            hx-trigger="change"
            hx-target="#results"
            hx-include="#filters"
            hx-swap-oob=[out_of_band.then_some("true")]
        {
            option value="" { (ALL_AREAS) }
            @if let Some(opt) = &unlisted {
                option value=(opt.value) selected { (opt.label()) }
            }
            (facet_options(&view.area_options, selected))
        }
    }
}

fn facet_options(options: &[FacetOption], selected: Option<&str>) -> Markup {
    html! {
        @for opt in options {
            option value=(opt.value) selected[selected == Some(opt.value.as_str())] {
                (opt.label())
            }
        }
    }
}
