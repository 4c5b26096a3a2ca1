use embedded_graphics::{
    image::ImageDrawable,
    pixelcolor::{Rgb888, raw::RawU24},
    prelude::{DrawTarget, OriginDimensions, Point, Size},
    primitives::Rectangle,
};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// One contiguous range of pixels sharing a palette color.
///
/// Field order is the flashed table layout: three u16, nothing else.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct Run {
    /// Inclusive starting linear pixel index.
    pub start: u16,
    /// Number of pixels covered.
    pub count: u16,
    /// Palette slot holding this run's color.
    pub palette: u16,
}

impl Run {
    pub const fn new(start: u16, count: u16, palette: u16) -> Self {
        Self {
            start,
            count,
            palette,
        }
    }
}

/// A run-length compressed, palette indexed image.
///
/// Borrows read-only run and palette tables, typically statics generated
/// by `img2run`, and answers single pixel queries without ever decoding
/// the full bitmap. Palette entries are packed `0x00RRGGBB`; slot 0 is
/// the background color.
#[derive(Debug, Clone, Copy)]
pub struct RunImage<'a> {
    runs: &'a [Run],
    palette: &'a [u32],
    width: u16,
    height: u16,
}

impl<'a> RunImage<'a> {
    pub const fn new(runs: &'a [Run], palette: &'a [u32], width: u16, height: u16) -> Self {
        Self {
            runs,
            palette,
            width,
            height,
        }
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn runs(&self) -> &'a [Run] {
        self.runs
    }

    pub const fn palette(&self) -> &'a [u32] {
        self.palette
    }

    /// The color painted wherever no run applies, palette slot 0.
    ///
    /// An empty palette yields 0; the generator never emits one.
    pub fn background(&self) -> u32 {
        self.palette.first().copied().unwrap_or(0)
    }

    /// Color of the pixel at (x, y).
    ///
    /// Out of bounds coordinates, pixel indices no run covers and runs
    /// pointing at a missing palette slot all resolve to the background
    /// color. Never allocates, never fails, safe to call from an
    /// interrupt handler.
    pub fn get_pixel(&self, x: u16, y: u16) -> u32 {
        if x >= self.width || y >= self.height {
            return self.background();
        }
        let pixel_index = y as u32 * self.width as u32 + x as u32;

        // Walk the table back to front: a later patch run shadows any
        // earlier run covering the same index.
        for run in self.runs.iter().rev() {
            let start = run.start as u32;
            if pixel_index >= start && pixel_index < start + run.count as u32 {
                return self
                    .palette
                    .get(run.palette as usize)
                    .copied()
                    .unwrap_or_else(|| self.background());
            }
        }

        self.background()
    }
}

impl OriginDimensions for RunImage<'_> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl ImageDrawable for RunImage<'_> {
    type Color = Rgb888;

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        self.draw_sub_image(target, &Rectangle::new(Point::zero(), self.size()))
    }

    fn draw_sub_image<D>(&self, target: &mut D, area: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let img = *self;
        let x0 = area.top_left.x.max(0) as u16;
        let y0 = area.top_left.y.max(0) as u16;
        let w = area.size.width as u16;
        let h = area.size.height as u16;
        target.fill_contiguous(
            &Rectangle::new(Point::zero(), area.size),
            (0..h).flat_map(move |y| {
                (0..w).map(move |x| Rgb888::from(RawU24::new(img.get_pixel(x0 + x, y0 + y))))
            }),
        )
    }
}
