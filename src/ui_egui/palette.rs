use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

/// Highlighted-range fill
const STEEL_BLUE: Color32 = Color32::from_rgb(70, 130, 180);

#[derive(Debug, Clone, Copy)]
pub(crate) struct DayCellPalette {
    pub text: Color32,
    pub weak_text: Color32,
    pub selected_bg: Color32,
    pub selected_text: Color32,
    pub today_text: Color32,
    pub today_border: Color32,
    pub highlighted_bg: Color32,
    pub event_dot: Color32,
    pub focus_ring: Color32,
}

impl DayCellPalette {
    pub fn from_visuals(visuals: &egui::Visuals) -> Self {
        let accent = visuals.selection.bg_fill;
        let text = visuals.text_color();
        Self {
            text,
            weak_text: visuals.weak_text_color(),
            selected_bg: accent,
            selected_text: visuals.selection.stroke.color,
            today_text: if visuals.dark_mode {
                Color32::from_rgb(120, 200, 120)
            } else {
                Color32::from_rgb(50, 150, 50)
            },
            today_border: blend(accent, text, 0.25),
            highlighted_bg: with_alpha(STEEL_BLUE, if visuals.dark_mode { 140 } else { 110 }),
            event_dot: blend(accent, Color32::from_rgb(220, 80, 60), 0.6),
            focus_ring: with_alpha(accent, 200),
        }
    }
}
