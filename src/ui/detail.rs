use crate::app::SiemAtlasApp;
use crate::model::{LogAnalysis, LogDetail, classify_severity, classify_status, classify_threat, format_action};
use eframe::egui;

/// Modal-style window for the selected entry. Closing it clears the
/// selection, which in turn drops the derived detail request key.
pub fn detail_window(ctx: &egui::Context, app: &mut SiemAtlasApp) {
    let Some(url) = app.view.detail_url(&app.config.api.base_url) else {
        return;
    };

    let mut open = true;
    egui::Window::new("Log Details")
        .open(&mut open)
        .default_width(640.0)
        .max_height(540.0)
        .collapsible(false)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("detail_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| match app.detail.value(&url) {
                    Some(detail) => detail_body(ui, detail),
                    None => {
                        if app.detail.error(&url).is_some() {
                            ui.label("Could not load this entry.");
                        } else {
                            ui.label("Loading details...");
                        }
                    }
                });
        });

    if !open {
        app.view.close_detail();
    }
}

fn detail_body(ui: &mut egui::Ui, detail: &LogDetail) {
    let log = &detail.summary;

    egui::Grid::new("detail_basic")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Timestamp").strong());
            ui.monospace(crate::util::format_timestamp(&log.timestamp));
            ui.end_row();

            ui.label(egui::RichText::new("Source IP").strong());
            ui.monospace(&log.ip);
            ui.end_row();

            ui.label(egui::RichText::new("User").strong());
            ui.label(&log.email);
            ui.end_row();

            ui.label(egui::RichText::new("Action").strong());
            let badge = classify_threat(log.threat_score, Some(&log.action));
            ui.colored_label(crate::ui::badge_color(badge), format_action(&log.action));
            ui.end_row();

            ui.label(egui::RichText::new("Status").strong());
            let status_badge = classify_status(Some(&log.status));
            ui.colored_label(crate::ui::badge_color(status_badge), &log.status);
            ui.end_row();

            if let Some(method) = &log.method {
                ui.label(egui::RichText::new("Method").strong());
                ui.monospace(method);
                ui.end_row();
            }
            if let Some(protocol) = &log.protocol {
                ui.label(egui::RichText::new("Protocol").strong());
                ui.monospace(protocol);
                ui.end_row();
            }
            if let Some(user_id) = detail.user_id {
                ui.label(egui::RichText::new("User id").strong());
                ui.monospace(user_id.to_string());
                ui.end_row();
            }
            if let Some(size) = detail.request_size {
                ui.label(egui::RichText::new("Request size").strong());
                ui.monospace(format!("{size} B"));
                ui.end_row();
            }
            if let Some(ms) = detail.response_time {
                ui.label(egui::RichText::new("Response time").strong());
                ui.monospace(format!("{ms:.0} ms"));
                ui.end_row();
            }
        });

    if let Some(ua) = &log.user_agent {
        ui.add_space(10.0);
        ui.label(egui::RichText::new("User Agent").strong());
        ui.add(egui::Label::new(egui::RichText::new(ua).monospace()).wrap(true));
    }

    if let Some(reason) = &detail.reason {
        ui.add_space(10.0);
        ui.label(egui::RichText::new("Reason").strong());
        ui.label(reason);
    }

    if let Some(headers) = &detail.headers {
        ui.add_space(10.0);
        ui.label(egui::RichText::new("Headers").strong());
        let rendered = serde_json::to_string_pretty(headers).unwrap_or_else(|_| headers.to_string());
        ui.add(egui::Label::new(egui::RichText::new(rendered).monospace().small()).wrap(true));
    }

    if let Some(body) = &detail.request_body {
        ui.add_space(10.0);
        ui.label(egui::RichText::new("Request Body").strong());
        ui.add(egui::Label::new(egui::RichText::new(body).monospace().small()).wrap(true));
    }

    if let Some(msg) = &detail.error_message {
        ui.add_space(10.0);
        ui.label(egui::RichText::new("Error").strong());
        ui.colored_label(egui::Color32::from_rgb(255, 70, 70), msg);
    }

    if let Some(analysis) = &detail.analysis {
        ui.add_space(12.0);
        ui.separator();
        analysis_section(ui, analysis);
    }
}

fn analysis_section(ui: &mut egui::Ui, analysis: &LogAnalysis) {
    ui.label(egui::RichText::new("Analysis").strong().size(15.0));
    ui.add_space(4.0);

    egui::Grid::new("detail_analysis")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            ui.label(egui::RichText::new("Threat score").strong());
            let badge = classify_threat(Some(analysis.threat_score), None);
            ui.colored_label(
                crate::ui::badge_color(badge),
                format!("{:.0}", analysis.threat_score),
            );
            ui.end_row();

            ui.label(egui::RichText::new("Confidence").strong());
            ui.label(&analysis.confidence);
            ui.end_row();

            ui.label(egui::RichText::new("Detection rule").strong());
            ui.monospace(&analysis.detection_rule);
            ui.end_row();

            ui.label(egui::RichText::new("Priority").strong());
            let priority_badge = classify_severity(Some(&analysis.priority));
            ui.colored_label(crate::ui::badge_color(priority_badge), &analysis.priority);
            ui.end_row();
        });

    if !analysis.mitre_matches.is_empty() {
        ui.add_space(8.0);
        ui.label(egui::RichText::new("MITRE ATT&CK").strong());
        for m in &analysis.mitre_matches {
            let line = ui.horizontal(|ui| {
                ui.monospace(&m.technique_id);
                ui.label(&m.technique_name);
                ui.label(egui::RichText::new(format!("({})", m.tactic)).small().weak());
            });
            if let Some(rationale) = &m.rationale {
                line.response.on_hover_text(rationale);
            }
        }
    }

    if !analysis.recommended_actions.is_empty() {
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Recommended actions").strong());
        for action in &analysis.recommended_actions {
            ui.label(format!("• {action}"));
        }
    }

    if let Some(notes) = &analysis.notes {
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Notes").strong());
        ui.label(notes);
    }
}
