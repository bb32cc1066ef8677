use std::sync::Arc;

use chrono::{Local, NaiveDate};
use eframe::egui::{self, Color32, Rounding, Stroke};
use news_core::{
    run_search, AppConfig, Credentials, Dashboard, DateRange, Insight, RenderedEntry, ResultView,
    SearchClient, SearchForm, Severity, ThemeConfig, Variant,
};
use tokio::runtime::Runtime;
use tracing::warn;
use url::Url;

use crate::chart::trend_chart;

pub struct AppInit {
    pub runtime: Arc<Runtime>,
    pub client: SearchClient,
    pub config: AppConfig,
}

#[derive(Debug, Clone)]
enum Notice {
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
}

const INFO_COLOR: Color32 = Color32::from_rgb(66, 165, 245);

impl Notice {
    fn color(&self) -> Color32 {
        match self {
            Notice::Success(_) => Color32::from_rgb(67, 160, 71),
            Notice::Info(_) => INFO_COLOR,
            Notice::Warning(_) => Color32::from_rgb(255, 179, 0),
            Notice::Error(_) => Color32::from_rgb(229, 57, 53),
        }
    }

    fn text(&self) -> &str {
        match self {
            Notice::Success(s) | Notice::Info(s) | Notice::Warning(s) | Notice::Error(s) => s,
        }
    }
}

pub struct NewsBoardApp {
    runtime: Arc<Runtime>,
    client: SearchClient,
    theme: ThemeConfig,
    font_size: f32,
    // Session-only. Never written to disk.
    client_id: String,
    client_secret: String,
    keyword: String,
    variant: Variant,
    start_date: NaiveDate,
    end_date: NaiveDate,
    notice: Option<Notice>,
    dashboard: Option<Dashboard>,
}

impl NewsBoardApp {
    pub fn new(init: AppInit) -> Self {
        let range = DateRange::last_week(Local::now().date_naive());
        Self {
            runtime: init.runtime,
            client: init.client,
            theme: init.config.theme,
            font_size: init.config.ui.font_size,
            client_id: String::new(),
            client_secret: String::new(),
            keyword: String::new(),
            variant: init.config.ui.default_variant,
            start_date: range.start,
            end_date: range.end,
            notice: None,
            dashboard: None,
        }
    }

    fn setup_dark_theme(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let bg_color = self.theme.background_color32();
        let panel_color = self.theme.panel_color32();
        let border_color = self.theme.border_color32();
        let text_color = self.theme.text_color32();
        let accent_color = self.theme.accent_color32();

        style.visuals.dark_mode = true;
        style.visuals.panel_fill = panel_color;
        style.visuals.window_fill = bg_color;
        style.visuals.extreme_bg_color = Color32::from_rgb(25, 25, 25);
        style.visuals.faint_bg_color = Color32::from_rgb(45, 45, 45);
        style.visuals.override_text_color = Some(text_color);

        style.visuals.widgets.noninteractive.bg_fill = panel_color;
        style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, border_color);
        style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(50, 50, 50);
        style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, border_color);
        style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, accent_color);
        style.visuals.widgets.active.bg_fill = accent_color;
        style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
        style.visuals.selection.stroke = Stroke::new(1.0, accent_color);

        for widgets in [
            &mut style.visuals.widgets.noninteractive,
            &mut style.visuals.widgets.inactive,
            &mut style.visuals.widgets.hovered,
            &mut style.visuals.widgets.active,
        ] {
            widgets.rounding = Rounding::same(3.0);
        }

        if let Some(body) = style.text_styles.get_mut(&egui::TextStyle::Body) {
            body.size = self.font_size;
        }
        style.spacing.item_spacing = egui::vec2(10.0, 8.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);

        ctx.set_style(style);
    }

    fn form(&self) -> SearchForm {
        SearchForm {
            credentials: Credentials::new(self.client_id.trim(), self.client_secret.trim()),
            keyword: self.keyword.clone(),
            variant: self.variant,
            date_range: DateRange {
                start: self.start_date,
                end: self.end_date,
            },
        }
    }

    fn submit(&mut self) {
        let form = self.form();
        let today = Local::now().date_naive();
        let outcome = self
            .runtime
            .block_on(run_search(&self.client, &form, today));

        match outcome {
            Ok(board) => {
                self.notice = Some(if board.results.is_empty() {
                    Notice::Info(board.headline.clone())
                } else {
                    Notice::Success(board.headline.clone())
                });
                self.dashboard = Some(board);
            }
            Err(err) => {
                warn!(error = %err, "search failed");
                self.dashboard = None;
                self.notice = Some(match err.severity() {
                    Severity::Warning => Notice::Warning(format!("🔍 {}", err)),
                    Severity::Error => Notice::Error(format!("❌ {}", err)),
                });
            }
        }
    }

    fn draw_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("settings_panel")
            .min_width(240.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.label(egui::RichText::new("🔑 API settings").strong().size(16.0));
                ui.separator();

                ui.label("Naver Client ID");
                ui.add(egui::TextEdit::singleline(&mut self.client_id).password(true));
                ui.label("Naver Client Secret");
                ui.add(egui::TextEdit::singleline(&mut self.client_secret).password(true));
                ui.label(
                    egui::RichText::new("Use the keys issued by the Naver Developers center.")
                        .weak()
                        .size(12.0),
                );

                ui.add_space(10.0);
                ui.label(egui::RichText::new("🗂 Board").strong().size(16.0));
                ui.separator();
                let before = self.variant;
                ui.radio_value(&mut self.variant, Variant::Basic, "News search");
                ui.radio_value(&mut self.variant, Variant::Trends, "News & trends");
                if before != self.variant {
                    self.dashboard = None;
                    self.notice = None;
                }

                if self.variant == Variant::Trends {
                    ui.add_space(10.0);
                    ui.label(egui::RichText::new("📅 Date range").strong().size(16.0));
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label("Start");
                        ui.add(egui_extras::DatePickerButton::new(&mut self.start_date).id_source("start_date"));
                    });
                    ui.horizontal(|ui| {
                        ui.label("End");
                        ui.add(egui_extras::DatePickerButton::new(&mut self.end_date).id_source("end_date"));
                    });
                    ui.label(
                        egui::RichText::new("News is ordered by date or relevance; the range is informational.")
                            .weak()
                            .size(12.0),
                    );
                }
            });
    }

    fn draw_main_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading(egui::RichText::new(self.variant.title()).size(22.0));
                    match self.variant {
                        Variant::Basic => {
                            ui.label("Enter a keyword to fetch up to 10 related news articles.");
                        }
                        Variant::Trends => {
                            ui.label(format!(
                                "Analysing data from {} to {}.",
                                self.start_date, self.end_date
                            ));
                        }
                    }
                    ui.add_space(6.0);

                    let mut submitted = false;
                    ui.horizontal(|ui| {
                        let field = ui.add(
                            egui::TextEdit::singleline(&mut self.keyword)
                                .hint_text("e.g. 인공지능, 테슬라, 삼성전자")
                                .desired_width(ui.available_width() - 160.0),
                        );
                        let enter = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                        let label = match self.variant {
                            Variant::Basic => "Search news",
                            Variant::Trends => "Start analysis",
                        };
                        if ui.button(label).clicked() || enter {
                            submitted = true;
                        }
                    });
                    if submitted {
                        self.submit();
                    }

                    if let Some(notice) = &self.notice {
                        ui.add_space(4.0);
                        ui.label(egui::RichText::new(notice.text()).color(notice.color()));
                    }

                    if let Some(board) = self.dashboard.clone() {
                        if let Some(insight) = &board.insight {
                            self.draw_insight(ui, &board.keyword, insight);
                        }
                        self.draw_results(ui, &board);
                    }

                    ui.add_space(12.0);
                    ui.separator();
                    ui.label(
                        egui::RichText::new("Powered by the Naver Search API & egui")
                            .weak()
                            .size(12.0),
                    );
                });
        });
    }

    fn draw_insight(&self, ui: &mut egui::Ui, keyword: &str, insight: &Insight) {
        ui.add_space(10.0);
        ui.columns(insight.tiles.len(), |cols| {
            for (col, tile) in cols.iter_mut().zip(&insight.tiles) {
                egui::Frame::group(col.style()).show(col, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(&tile.label).weak().size(12.0));
                    ui.label(egui::RichText::new(&tile.value).strong().size(24.0));
                    ui.label(
                        egui::RichText::new(&tile.delta)
                            .color(self.theme.accent_color32())
                            .size(12.0),
                    );
                });
            }
        });

        ui.add_space(8.0);
        ui.separator();
        ui.label(egui::RichText::new("📈 Weekly interest").strong().size(17.0));
        ui.label(
            egui::RichText::new(format!("News mentions of '{}'", keyword))
                .weak()
                .size(12.0),
        );
        trend_chart(
            ui,
            &insight.trend,
            self.theme.accent_color32(),
            self.theme.border_color32(),
        );
        ui.separator();
        ui.label(egui::RichText::new("📰 Related news").strong().size(17.0));
    }

    fn draw_results(&self, ui: &mut egui::Ui, board: &Dashboard) {
        ui.add_space(6.0);
        match &board.results {
            ResultView::Empty => {
                ui.label(
                    egui::RichText::new(format!("📭 {}", board.headline)).color(INFO_COLOR),
                );
            }
            ResultView::Entries(entries) => {
                for entry in entries {
                    self.draw_entry(ui, entry);
                }
            }
        }
    }

    fn draw_entry(&self, ui: &mut egui::Ui, entry: &RenderedEntry) {
        egui::CollapsingHeader::new(egui::RichText::new(&entry.label).strong())
            .id_source(("news_entry", entry.index, &entry.link))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(format!("📅 Published: {}", entry.published_at))
                        .color(self.theme.secondary_text_color32())
                        .size(12.0),
                );
                ui.label(format!("📝 {}", entry.summary));
                if ui.small_button("🔗 Read the original article").on_hover_text(&entry.link).clicked() {
                    if let Err(e) = open_link(&entry.link) {
                        warn!(link = %entry.link, error = %e, "could not open article");
                    }
                }
            });
    }
}

fn is_openable_link(link: &str) -> bool {
    Url::parse(link)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn open_link(link: &str) -> Result<(), String> {
    if !is_openable_link(link) {
        return Err("only http(s) links can be opened".to_string());
    }
    webbrowser::open(link).map_err(|e| e.to_string())
}

impl eframe::App for NewsBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.setup_dark_theme(ctx);
        self.draw_side_panel(ctx);
        self.draw_main_content(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_web_links_open() {
        assert!(is_openable_link("https://n.news.naver.com/article/1"));
        assert!(is_openable_link("http://example.com"));
        assert!(!is_openable_link("file:///etc/passwd"));
        assert!(!is_openable_link(""));
    }
}
