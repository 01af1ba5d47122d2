/// Fixed on-screen size every catalogued image is fitted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySize {
    pub width: u32,
    pub height: u32,
}

impl DisplaySize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Decoded image ready for blitting; pixels are packed as `0x00RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

impl RenderedImage {
    pub const PLACEHOLDER_COLOR: u32 = 0x303030;

    pub fn placeholder(size: DisplaySize) -> Self {
        Self {
            width: size.width,
            height: size.height,
            pixels: vec![Self::PLACEHOLDER_COLOR; size.pixel_count()],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}
