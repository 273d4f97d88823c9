use std::path::Path;

use log::debug;

/// A 2D texture for texture mapping.
///
/// Pixels are stored row by row, top row first, as ARGB8888.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    data: Vec<u32>, // The pixel data of the texture in ARGB format.
    width: u32,     // The width of the texture in pixels.
    height: u32,    // The height of the texture in pixels.
}

impl Texture {
    /// Wrap an already decoded ARGB pixel buffer.
    ///
    /// # Panics
    /// Panics if the buffer is empty or its length doesn't match `width * height`.
    pub fn from_pixels(data: Vec<u32>, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "texture must not be empty");
        assert_eq!(
            data.len(),
            (width * height) as usize,
            "texture data doesn't match dimensions"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Load a texture from an image file (PNG, JPG, etc.)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, image::ImageError> {
        let path = path.as_ref();
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();

        // Convert RGBA bytes to ARGB u32
        let data: Vec<u32> = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
            })
            .collect();

        debug!("loaded texture {} ({}x{})", path.display(), width, height);

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Sample the texture at UV coordinates using nearest-texel lookup.
    ///
    /// The texel is `(|floor(width * u)| mod width, |floor(height * v)| mod height)`,
    /// so coordinates outside [0, 1] tile instead of being rejected. `v = 0`
    /// addresses the top row; callers working in OBJ convention flip V first.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> u32 {
        let x = wrap_texel(u, self.width);
        let y = wrap_texel(v, self.height);

        // Sample from flat array: index = y * width + x
        self.data[(y * self.width + x) as usize]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.data
    }
}

#[inline]
fn wrap_texel(coord: f32, size: u32) -> u32 {
    ((size as f32 * coord).floor() as i32).unsigned_abs() % size
}
