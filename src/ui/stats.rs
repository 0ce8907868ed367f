use crate::app::{Category, SiemAtlasApp};
use crate::model::Badge;
use eframe::egui;

/// The three clickable counter cards. Clicking a card filters the listing to
/// that category; the active filter's card gets a highlight stroke.
pub fn stats_row(ui: &mut egui::Ui, app: &mut SiemAtlasApp) {
    let stats = app.current_stats().copied();
    let (total, suspicious, malicious) = match stats {
        Some(s) => (s.total_logs, s.suspicious, s.malicious),
        // Absent or failing stats render zeros, never an error message.
        None => (0, 0, 0),
    };

    let mut clicked: Option<Category> = None;
    ui.horizontal_wrapped(|ui| {
        let cards = [
            (
                Category::Collected,
                "Collected Logs",
                total,
                "Total logs processed",
                Badge::Info,
            ),
            (
                Category::Suspicious,
                "Suspicious Logs",
                suspicious,
                "Needs attention",
                Badge::Warning,
            ),
            (
                Category::Malicious,
                "Malicious Logs",
                malicious,
                "Threats detected",
                Badge::Critical,
            ),
        ];
        for (category, title, value, subtitle, badge) in cards {
            let selected = app.view.category == Some(category);
            if stat_card(ui, title, value, subtitle, crate::ui::badge_color(badge), selected)
                .clicked()
            {
                clicked = Some(category);
            }
        }
    });

    if let Some(category) = clicked {
        app.view.select_category(category);
    }
}

fn stat_card(
    ui: &mut egui::Ui,
    title: &str,
    value: u64,
    subtitle: &str,
    color: egui::Color32,
    selected: bool,
) -> egui::Response {
    let mut frame = egui::Frame::group(ui.style()).inner_margin(12.0);
    if selected {
        frame = frame.stroke(egui::Stroke::new(2.0, color));
    }

    let response = frame
        .show(ui, |ui| {
            ui.set_min_width(200.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(title).small().weak());
                ui.label(egui::RichText::new(value.to_string()).heading().color(color));
                ui.label(egui::RichText::new(subtitle).small().weak());
            });
        })
        .response;

    response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
