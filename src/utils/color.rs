/// RGB color value with 8-bit components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Rgb {
    /// Create a color from its components
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a 24-bit `0xRRGGBB` integer
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Pack into a 24-bit `0xRRGGBB` integer
    pub fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Dissimilarity metric over two RGB colors
///
/// Implementations must be symmetric and return zero exactly when the two
/// colors are identical component-wise.
pub trait ColorDistance {
    /// Non-negative distance between two colors
    fn distance(&self, a: Rgb, b: Rgb) -> f64;
}

/// Euclidean distance in RGB space: `sqrt(dr^2 + dg^2 + db^2)`
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanDistance;

impl ColorDistance for EuclideanDistance {
    fn distance(&self, a: Rgb, b: Rgb) -> f64 {
        let dr = a.r as f64 - b.r as f64;
        let dg = a.g as f64 - b.g as f64;
        let db = a.b as f64 - b.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}
