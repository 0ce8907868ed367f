use crate::app::SiemAtlasApp;
use crate::model::{LogId, classify_status, classify_threat, format_action};
use eframe::egui;

pub fn filter_header(ui: &mut egui::Ui, app: &mut SiemAtlasApp) {
    let title = match app.view.category {
        Some(c) => format!("{} Logs", c.label()),
        None => "All Logs".to_string(),
    };
    let total = app.current_page().map(|p| p.total).unwrap_or(0);

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(title).strong().size(16.0));
        if app.view.category.is_some() && ui.small_button("Clear filter").clicked() {
            app.view.clear_filter();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("{total} records found"))
                    .small()
                    .weak(),
            );
        });
    });
}

pub fn logs_table(ui: &mut egui::Ui, app: &mut SiemAtlasApp) {
    let mut clicked: Option<LogId> = None;

    let empty = match app.current_page() {
        Some(page) if !page.logs.is_empty() => {
            egui::Grid::new("logs_table")
                .num_columns(7)
                .striped(true)
                .min_col_width(60.0)
                .show(ui, |ui| {
                    for heading in ["Timestamp", "Source IP", "User", "Action", "Status", "Score", ""]
                    {
                        ui.label(egui::RichText::new(heading).small().weak());
                    }
                    ui.end_row();

                    for log in &page.logs {
                        ui.monospace(crate::util::format_timestamp(&log.timestamp));
                        ui.monospace(&log.ip);
                        ui.label(&log.email);

                        let badge = classify_threat(log.threat_score, Some(&log.action));
                        ui.colored_label(crate::ui::badge_color(badge), format_action(&log.action));

                        let status_badge = classify_status(Some(&log.status));
                        ui.colored_label(crate::ui::badge_color(status_badge), &log.status);

                        match log.threat_score {
                            Some(score) => ui.monospace(format!("{score:.0}")),
                            None => ui.monospace("-"),
                        };

                        if ui.small_button("Details").clicked() {
                            clicked = Some(log.id);
                        }
                        ui.end_row();
                    }
                });
            false
        }
        _ => true,
    };

    if empty {
        ui.add_space(30.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("No logs found").weak());
        });
        ui.add_space(30.0);
    }

    if let Some(id) = clicked {
        app.open_detail(id);
    }
}

/// Pagination controls only make sense with something to page through; a
/// single page (or no response yet) hides them entirely.
fn pagination_visible(total_pages: u32) -> bool {
    total_pages > 1
}

pub fn pagination(ui: &mut egui::Ui, app: &mut SiemAtlasApp) {
    let total_pages = app.current_page().map(|p| p.total_pages).unwrap_or(1);
    if !pagination_visible(total_pages) {
        return;
    }

    let page = app.view.page;
    ui.horizontal(|ui| {
        if ui.add_enabled(page > 1, egui::Button::new("< Prev")).clicked() {
            app.view.set_page(page - 1);
        }
        ui.label(format!("Page {page} of {total_pages}"));
        if ui
            .add_enabled(page < total_pages, egui::Button::new("Next >"))
            .clicked()
        {
            app.view.set_page(page + 1);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LogsPage;

    #[test]
    fn pagination_hidden_at_one_page_or_none() {
        assert!(!pagination_visible(0));
        assert!(!pagination_visible(1));
        assert!(pagination_visible(2));
    }

    #[test]
    fn empty_listing_hides_pagination() {
        // `/logs?tipo=maliciosos&page=1&limit=20` returning an empty page:
        // nothing to page through, controls stay hidden.
        let body = r#"{"logs": [], "total": 0, "page": 1, "totalPages": 1}"#;
        let page: LogsPage = serde_json::from_str(body).unwrap();
        assert!(page.logs.is_empty());
        assert!(!pagination_visible(page.total_pages));
    }
}
