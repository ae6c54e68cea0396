use glam::Vec3;

/// sRGB-encoded RGB color with channels in [0, 1] as parsed from config
/// strings. Convert through `to_linear` before handing values to the GPU so
/// an sRGB surface re-encodes them back to the authored appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Named colors the scene config accepts, alongside `#rrggbb` hex.
const NAMED_COLORS: [(&str, Color); 8] = [
    ("black", Color::new(0.0, 0.0, 0.0)),
    ("white", Color::new(1.0, 1.0, 1.0)),
    ("red", Color::new(1.0, 0.0, 0.0)),
    ("green", Color::new(0.0, 0.5019608, 0.0)),
    ("blue", Color::new(0.0, 0.0, 1.0)),
    ("yellow", Color::new(1.0, 1.0, 0.0)),
    ("hotpink", Color::new(1.0, 0.4117647, 0.7058824)),
    ("gray", Color::new(0.5019608, 0.5019608, 0.5019608)),
];

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` hex or one of the named colors.
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        let name = s.trim().to_ascii_lowercase();

        if let Some(hex) = name.strip_prefix('#') {
            anyhow::ensure!(
                hex.len() == 6,
                "hex color `{s}` must have exactly six digits"
            );
            let channel = |range: std::ops::Range<usize>| -> anyhow::Result<f32> {
                let byte = u8::from_str_radix(&hex[range], 16)
                    .map_err(|_| anyhow::anyhow!("hex color `{s}` has non-hex digits"))?;
                Ok(byte as f32 / 255.0)
            };
            return Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }

        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, color)| *color)
            .ok_or_else(|| anyhow::anyhow!("unknown color `{s}`"))
    }

    /// Gamma-expands every channel for linear-space blending and upload.
    pub fn to_linear(self) -> Self {
        Self::new(
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        )
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    pub fn to_array4(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

/// Gamma-expands one sRGB channel to linear.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
