// File: crates/chart-core/src/palette.rs
// Summary: Categorical color palettes for assigning distinct series colors.

use skia_safe as skia;

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    colors: Vec<skia::Color>,
}

impl Palette {
    fn from_hex(name: &'static str, hex: &[u32]) -> Self {
        let colors = hex
            .iter()
            .map(|&h| skia::Color::from_rgb((h >> 16) as u8, (h >> 8) as u8, h as u8))
            .collect();
        Self { name, colors }
    }

    /// ColorBrewer "Set2" qualitative palette.
    pub fn set2() -> Self {
        Self::from_hex(
            "Set2",
            &[0x66C2A5, 0xFC8D62, 0x8DA0CB, 0xE78AC3, 0xA6D854, 0xFFD92F, 0xE5C494, 0xB3B3B3],
        )
    }

    pub fn deep() -> Self {
        Self::from_hex(
            "deep",
            &[
                0x4C72B0, 0xDD8452, 0x55A868, 0xC44E52, 0x8172B3,
                0x937860, 0xDA8BC3, 0x8C8C8C, 0xCCB974, 0x64B5CD,
            ],
        )
    }

    pub fn tab10() -> Self {
        Self::from_hex(
            "tab10",
            &[
                0x1F77B4, 0xFF7F0E, 0x2CA02C, 0xD62728, 0x9467BD,
                0x8C564B, 0xE377C2, 0x7F7F7F, 0xBCBD22, 0x17BECF,
            ],
        )
    }

    pub fn len(&self) -> usize { self.colors.len() }
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }
    pub fn colors(&self) -> &[skia::Color] { &self.colors }

    /// Color for the `index`-th series; wraps around.
    pub fn color(&self, index: usize) -> skia::Color {
        if self.colors.is_empty() {
            return skia::Color::BLACK;
        }
        self.colors[index % self.colors.len()]
    }

    pub fn by_name(name: &str) -> Option<Self> {
        [Self::set2(), Self::deep(), Self::tab10()]
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

impl Default for Palette {
    fn default() -> Self { Self::deep() }
}
