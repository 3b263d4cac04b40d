use crate::domain::{EventRecord, FilterState};
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 8] = [
    "Tanggal",
    "Bulan",
    "Jam",
    "Lokasi",
    "Area",
    "Nama Acara",
    "Last Update",
    "Link Acara",
];

/// Writes the filtered events to a single-sheet workbook, one row per event.
pub fn build_events_workbook(events: &[EventRecord]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, event) in events.iter().enumerate() {
        let r = (i + 1) as u32;
        let cells = [
            event.date.as_str(),
            event.month().unwrap_or(""),
            event.time.as_str(),
            event.location.as_str(),
            event.area.as_str(),
            event.title.as_str(),
            event.last_update.as_str(),
            event.link.as_str(),
        ];

        for (col, value) in cells.iter().enumerate() {
            worksheet.write_string(r, col as u16, *value).map_err(|e| {
                ServerError::XlsxError(format!(
                    "Failed to write {} for row {}: {}",
                    HEADERS[col], r, e
                ))
            })?;
        }
    }

    worksheet.autofit();

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_events_xlsx(events: &[EventRecord], filter: &FilterState) -> ResultResp {
    let buffer = build_events_workbook(events)?;
    xlsx_response(buffer, &export_filename(filter))
}

/// `events.xlsx`, narrowed by the selected month and area when set.
pub fn export_filename(filter: &FilterState) -> String {
    let mut parts = vec!["events".to_string()];
    parts.extend(filter.selected_month.iter().cloned());
    parts.extend(filter.selected_area.iter().cloned());

    let stem: String = parts
        .join("_")
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '-' })
        .collect();
    format!("{stem}.xlsx")
}
