mod detail;
mod stats;
mod table;

use crate::app::SiemAtlasApp;
use crate::model::Badge;
use eframe::egui;

pub fn render_app(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut SiemAtlasApp) {
    top_bar(ctx, frame, app);

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_source("dashboard_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                header(ui);
                ui.add_space(10.0);
                stats::stats_row(ui, app);
                ui.add_space(14.0);
                table::filter_header(ui, app);
                ui.add_space(6.0);
                table::logs_table(ui, app);
                ui.add_space(10.0);
                table::pagination(ui, app);
            });
    });

    detail::detail_window(ctx, app);
    about_window(ctx, app);
    status_bar(ctx, app);
}

fn header(ui: &mut egui::Ui) {
    ui.heading("SIEM Dashboard");
    ui.label(
        egui::RichText::new("Security monitoring and log analysis")
            .small()
            .weak(),
    );
}

fn top_bar(ctx: &egui::Context, frame: &mut eframe::Frame, app: &mut SiemAtlasApp) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    let _ = frame; // keep signature stable if we later use frame APIs
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Refresh now").clicked() {
                    app.refresh_now();
                    ui.close_menu();
                }
                if ui.button("Reset zoom").clicked() {
                    ctx.set_zoom_factor(1.0);
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    app.show_about = true;
                    ui.close_menu();
                }
            });
        });
    });
}

fn about_window(ctx: &egui::Context, app: &mut SiemAtlasApp) {
    if !app.show_about {
        return;
    }

    egui::Window::new("About SIEM Atlas")
        .open(&mut app.show_about)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("Desktop dashboard for a SIEM log collection API.");
            ui.label("Counters, listing, and analysis come from the backend; this app only renders them.");
        });
}

fn status_bar(ctx: &egui::Context, app: &mut SiemAtlasApp) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let total = app.current_page().map(|p| p.total).unwrap_or(0);
            ui.label(format!("Logs: {total}"));
            ui.separator();
            ui.label(format!("Backend: {}", app.config.api.base_url));
            if let Some(id) = app.view.selected {
                ui.separator();
                ui.label(format!("Selected: {id}"));
            }
            if let Some(err) = app.logs.error(&app.listing_url()) {
                ui.separator();
                ui.colored_label(
                    egui::Color32::from_rgb(255, 70, 70),
                    format!("Fetch error: {err}"),
                );
            }
        });
    });
}

pub fn badge_color(badge: Badge) -> egui::Color32 {
    match badge {
        Badge::Neutral => egui::Color32::from_rgb(150, 150, 150),
        Badge::Info => egui::Color32::from_rgb(90, 160, 255),
        Badge::Ok => egui::Color32::from_rgb(80, 190, 120),
        Badge::Warning => egui::Color32::from_rgb(255, 170, 0),
        Badge::Critical => egui::Color32::from_rgb(255, 70, 70),
    }
}
