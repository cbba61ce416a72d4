use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub primary: Color,
    pub accent: Color,
    pub background: Color,
    pub panel: Color,
    pub gauge_track: Color,

    // Specific components
    pub title: Style,
    pub instructions: Style,
    pub button: Style,
    pub button_disabled: Style,
    pub loading: Style,
    pub counter: Style,
    pub footer: Style,
    pub popup_title: Style,
    pub popup_border: Style,
    pub popup_text: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let primary = Color::Rgb(63, 81, 181);
        let text_secondary = Color::Rgb(117, 117, 117);
        Self {
            primary,
            accent: Color::Rgb(255, 64, 129),
            background: Color::Rgb(250, 250, 250),
            panel: Color::White,
            gauge_track: Color::Rgb(224, 224, 224),

            title: Style::default().fg(Color::Rgb(33, 33, 33)).add_modifier(Modifier::BOLD),
            instructions: Style::default().fg(text_secondary),
            button: Style::default().fg(Color::White).bg(primary).add_modifier(Modifier::BOLD),
            button_disabled: Style::default().fg(Color::Rgb(189, 189, 189)).bg(Color::Rgb(238, 238, 238)),
            loading: Style::default().fg(text_secondary),
            counter: Style::default().fg(text_secondary),
            footer: Style::default().fg(text_secondary).add_modifier(Modifier::DIM),
            popup_title: Style::default().fg(primary).add_modifier(Modifier::BOLD),
            popup_border: Style::default().fg(primary).bg(Color::White),
            popup_text: Style::default().fg(Color::Rgb(33, 33, 33)),
        }
    }
}

impl Theme {
    /// Colour of the drawn name at `opacity`, blended over the panel.
    pub fn result_color(&self, opacity: f32) -> Color {
        blend(self.panel, self.primary, opacity)
    }
}

/// Linear mix from `from` (opacity 0) to `to` (opacity 1). Non-RGB colours
/// snap at the halfway point.
pub fn blend(from: Color, to: Color, opacity: f32) -> Color {
    let t = opacity.clamp(0.0, 1.0);
    match (rgb(from), rgb(to)) {
        (Some((r0, g0, b0)), Some((r1, g1, b1))) => {
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

fn rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        Color::White => Some((255, 255, 255)),
        Color::Black => Some((0, 0, 0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let theme = Theme::default();
        assert_eq!(theme.result_color(0.0), Color::Rgb(255, 255, 255));
        assert_eq!(theme.result_color(1.0), theme.primary);
        assert_eq!(theme.result_color(7.0), theme.primary);
    }

    #[test]
    fn test_blend_midpoint() {
        assert_eq!(blend(Color::Rgb(0, 0, 0), Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(blend(Color::Cyan, Color::Red, 0.2), Color::Cyan);
    }
}
