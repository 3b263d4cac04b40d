use crate::domain::EventRecord;
use maud::{html, Markup};
use url::Url;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// Google Maps search link for a free-text location.
pub fn maps_search_url(location: &str) -> String {
    Url::parse_with_params(MAPS_SEARCH_URL, &[("api", "1"), ("query", location)])
        .map(String::from)
        .unwrap_or_else(|_| MAPS_SEARCH_URL.to_string())
}

pub fn event_card(event: &EventRecord) -> Markup {
    html! {
        div class="col-md-6 col-lg-4" {
            div class="card event-card h-100" {
                div class="card-body" {
                    div class="d-flex justify-content-between align-items-start mb-3" {
                        h5 class="card-title mb-0" { (event.title) }
                        span class="badge bg-success" { (event.area) }
                    }
                    p class="card-text text-muted small mb-1" {
                        i class="fas fa-calendar me-1" {}
                        (event.date)
                        @if event.time != crate::domain::event::MISSING {
                            " · " (event.time)
                        }
                    }
                    p class="card-text text-muted small mb-3" {
                        i class="fas fa-map-marker-alt me-1" {}
                        (event.location)
                    }
                    div class="d-flex gap-2 mb-2" {
                        @if event.has_link() {
                            a href=(event.link) class="btn btn-primary btn-sm" target="_blank" rel="noopener" {
                                i class="fas fa-calendar-check me-1" {}
                                "Lihat Acara"
                            }
                        } @else {
                            span class="btn btn-secondary btn-sm disabled" { "Link belum tersedia" }
                        }
                        a href=(maps_search_url(&event.location)) class="btn btn-outline-secondary btn-sm" target="_blank" rel="noopener" {
                            i class="fas fa-map-location-dot me-1" {}
                            "Lihat Lokasi"
                        }
                    }
                    @if event.last_update != crate::domain::event::MISSING {
                        p class="card-text text-muted small mb-0" { "Update: " (event.last_update) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_url_encodes_location() {
        assert_eq!(
            maps_search_url("Gedung Sate, Bandung"),
            "https://www.google.com/maps/search/?api=1&query=Gedung+Sate%2C+Bandung"
        );
    }
}
