use serde::{Deserialize, Serialize};

/// RGBA color as handed to the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_is_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
        assert_eq!(Color::GREEN.a, 255);
        assert_ne!(Color::GREEN, Color::RED);
    }
}
