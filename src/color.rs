// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    /// CSS `rgba(...)` string for canvas fill and stroke styles. The alpha
    /// comes from the caller because every draw site ramps it independently
    /// of the base color.
    pub fn css(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}
