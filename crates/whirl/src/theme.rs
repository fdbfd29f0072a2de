use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub panel_background: Color32,
    pub wheel_rim: Color32,
    pub hub: Color32,
    pub pointer: Color32,
    pub slice_label: Color32,
    pub title_size: f32,
    pub body_size: f32,
    pub label_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x12, 0x12, 0x16),
            foreground: Color32::from_rgb(0xC8, 0xC8, 0xCE),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x34, 0xD3, 0x99),
            panel_background: Color32::from_rgb(0x1B, 0x1B, 0x21),
            wheel_rim: Color32::from_rgb(0x3A, 0x3A, 0x44),
            hub: Color32::from_rgb(0x0C, 0x0C, 0x10),
            pointer: Color32::from_rgb(0xE5, 0x48, 0x4D),
            slice_label: Color32::from_rgb(0xD8, 0xD8, 0xDE),
            title_size: 30.0,
            body_size: 16.0,
            label_size: 14.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xFA, 0xFA, 0xF8),
            foreground: Color32::from_rgb(0x2A, 0x2A, 0x32),
            heading_color: Color32::from_rgb(0x16, 0x21, 0x3E),
            accent: Color32::from_rgb(0x0F, 0x8A, 0x5F),
            panel_background: Color32::from_rgb(0xEF, 0xEF, 0xEC),
            wheel_rim: Color32::from_rgb(0xB8, 0xB8, 0xC0),
            hub: Color32::WHITE,
            pointer: Color32::from_rgb(0xC7, 0x2C, 0x31),
            slice_label: Color32::from_rgb(0x20, 0x20, 0x28),
            title_size: 30.0,
            body_size: 16.0,
            label_size: 14.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }

    /// Return a palette of muted fills for the slice wedges, cycled by index.
    /// Chosen to stay readable under the horizontal slice labels.
    pub fn slice_palette(&self) -> Vec<Color32> {
        if self.name == "dark" {
            vec![
                Color32::from_rgb(0x23, 0x2A, 0x3A), // slate blue
                Color32::from_rgb(0x33, 0x24, 0x2C), // plum
                Color32::from_rgb(0x1F, 0x30, 0x2B), // pine
                Color32::from_rgb(0x35, 0x2E, 0x20), // umber
                Color32::from_rgb(0x2A, 0x24, 0x38), // violet
                Color32::from_rgb(0x1E, 0x2F, 0x35), // teal
                Color32::from_rgb(0x36, 0x22, 0x22), // brick
                Color32::from_rgb(0x2A, 0x31, 0x1F), // olive
            ]
        } else {
            vec![
                Color32::from_rgb(0xDC, 0xE6, 0xF5), // sky
                Color32::from_rgb(0xF2, 0xDE, 0xE6), // rose
                Color32::from_rgb(0xDC, 0xEF, 0xE2), // mint
                Color32::from_rgb(0xF4, 0xEA, 0xD2), // sand
                Color32::from_rgb(0xE8, 0xDF, 0xF4), // lilac
                Color32::from_rgb(0xD9, 0xEE, 0xF0), // aqua
                Color32::from_rgb(0xF4, 0xDD, 0xD6), // coral
                Color32::from_rgb(0xE8, 0xEE, 0xD4), // sage
            ]
        }
    }

    /// Confetti colors, shared between themes.
    pub fn confetti_palette() -> Vec<Color32> {
        vec![
            Color32::from_rgb(0x5C, 0xB8, 0xFF),
            Color32::from_rgb(0xFF, 0x7E, 0x67),
            Color32::from_rgb(0x5C, 0xDB, 0x95),
            Color32::from_rgb(0xE8, 0xA8, 0x38),
            Color32::from_rgb(0xC0, 0x7E, 0xF1),
            Color32::from_rgb(0x4E, 0xD4, 0xD4),
            Color32::from_rgb(0xF0, 0x6E, 0xAA),
        ]
    }
}
