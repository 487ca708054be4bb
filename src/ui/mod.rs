//! Small egui helpers shared by the 2D and 3D views.

use eframe::egui;
use egui::{Color32, Pos2};

use amidakuji::render::color::Rgba;

// ─── Fonts ────────────────────────────────────────────────────────────────────

/// System fonts that carry the Japanese labels (macOS, Windows, Linux).
const JAPANESE_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/HiraginoSans-W3.otf",
    "C:\\Windows\\Fonts\\meiryo.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
];

/// Register the first Japanese font found as a fallback for every family.
pub fn install_japanese_font(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let Some((path, data)) = JAPANESE_FONT_PATHS
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|data| (*path, data)))
    else {
        log::warn!("No Japanese font found; labels may render as boxes");
        return;
    };

    fonts
        .font_data
        .insert("japanese".to_owned(), egui::FontData::from_owned(data));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        if let Some(list) = fonts.families.get_mut(&family) {
            list.push("japanese".to_owned());
        }
    }
    ctx.set_fonts(fonts);
    log::info!("Loaded Japanese font from {}", path);
}

// ─── Conversions ──────────────────────────────────────────────────────────────

#[inline]
pub fn color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

#[inline]
pub fn pos2(p: [f32; 2]) -> Pos2 {
    Pos2::new(p[0], p[1])
}

/// Fade a color towards transparent by `alpha` (0.0 → 1.0).
pub fn faded(c: Rgba, alpha: f32) -> Color32 {
    let a = (c.a as f32 * alpha.clamp(0.0, 1.0)).round() as u8;
    color32(c.with_alpha(a))
}

// ─── Text ─────────────────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` characters, appending "..." if cut.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}
