mod app;
mod chart;

use std::sync::Arc;

use eframe::{egui, NativeOptions};
use news_core::{AppConfig, SearchClient};
use reqwest::ClientBuilder;
use tokio::runtime::Runtime;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::app::{AppInit, NewsBoardApp};

fn main() -> eframe::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let runtime = Arc::new(Runtime::new().expect("failed to initialise Tokio runtime"));
    let http = ClientBuilder::new()
        .user_agent(config.api.user_agent.clone())
        .build()
        .expect("failed to build HTTP client");
    let client = SearchClient::with_endpoint(http, config.api.endpoint.clone());

    let viewport = egui::ViewportBuilder::default()
        .with_title("News Board")
        .with_inner_size([config.ui.window_width, config.ui.window_height])
        .with_min_inner_size([720.0, 560.0]);

    let init = AppInit {
        runtime,
        client,
        config,
    };

    eframe::run_native(
        "News Board",
        NativeOptions {
            viewport,
            ..Default::default()
        },
        Box::new(move |cc| {
            install_cjk_fonts(&cc.egui_ctx);
            Box::new(NewsBoardApp::new(init))
        }),
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Appends system fonts that cover Hangul and emoji as fallbacks; egui's
/// bundled fonts cover neither.
fn install_cjk_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();

    let candidates = [
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        "C:\\Windows\\Fonts\\malgun.ttf",
        "/usr/share/fonts/truetype/noto/NotoColorEmoji.ttf",
        "/usr/share/fonts/truetype/noto/NotoEmoji-Regular.ttf",
    ];

    let mut added: Vec<String> = Vec::new();
    for path in candidates.iter() {
        if let Ok(bytes) = std::fs::read(path) {
            let name = format!("fallback-{}", added.len());
            fonts.font_data.insert(name.clone(), egui::FontData::from_owned(bytes));
            for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                fonts.families.entry(family).or_default().push(name.clone());
            }
            debug!(path, "loaded fallback font");
            added.push(name);
        }
    }

    if !added.is_empty() {
        ctx.set_fonts(fonts);
    }
}
