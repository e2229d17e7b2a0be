use crate::foundation::error::{StickgenError, StickgenResult};

pub use kurbo::{Point, Vec2};

/// Index of one frame within an action's sequence (0-based).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u32);

/// Pixel dimensions of a single animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl Default for FrameSize {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
        }
    }
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> StickgenResult<Self> {
        if width == 0 || height == 0 {
            return Err(StickgenError::validation("FrameSize must be non-zero"));
        }
        Ok(Self { width, height })
    }

    /// Raster surfaces are u16-addressed; anything larger is a hard error.
    pub fn to_u16(self) -> StickgenResult<(u16, u16)> {
        let w = self
            .width
            .try_into()
            .map_err(|_| StickgenError::render("frame width exceeds u16"))?;
        let h = self
            .height
            .try_into()
            .map_err(|_| StickgenError::render("frame height exceeds u16"))?;
        Ok((w, h))
    }

    pub fn byte_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}
