//! Turns a raw pixel buffer into the run + palette tables.
//!
//! This is the offline half of the format, shared by the host tools and
//! the tests. Unlike the query path it may allocate and log.

use alloc::vec::Vec;
use log::info;

use crate::image::{Run, RunImage};

/// Colors are stored as packed `0x00RRGGBB`; anything above bit 23 is
/// alpha noise from the source image and gets masked off.
pub const COLOR_MASK: u32 = 0x00FF_FFFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The image does not fit the u16 table fields.
    TooLarge,
    /// Pixel buffer length does not match width * height.
    SizeMismatch,
}

/// An owned run table plus palette, ready for code generation.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub runs: Vec<Run>,
    pub palette: Vec<u32>,
    pub width: u16,
    pub height: u16,
}

impl EncodedImage {
    pub fn as_image(&self) -> RunImage<'_> {
        RunImage::new(&self.runs, &self.palette, self.width, self.height)
    }

    /// Flash footprint of the generated tables in bytes.
    pub fn table_bytes(&self) -> usize {
        self.runs.len() * core::mem::size_of::<Run>()
            + self.palette.len() * core::mem::size_of::<u32>()
    }
}

struct Segment {
    start: u32,
    count: u32,
    color: u32,
}

/// Encode a row major `0x00RRGGBB` pixel buffer.
///
/// The color owning the most segments becomes the background, palette
/// slot 0, and its runs are dropped entirely: the decoder paints the
/// background wherever no run matches, so they carry no information.
/// Remaining colors enter the palette in order of first appearance.
pub fn encode(pixels: &[u32], width: u16, height: u16) -> Result<EncodedImage, EncodeError> {
    let pixel_count = width as usize * height as usize;
    if pixel_count != pixels.len() {
        return Err(EncodeError::SizeMismatch);
    }
    // The last linear index has to fit the u16 start field.
    if pixel_count > u16::MAX as usize + 1 {
        return Err(EncodeError::TooLarge);
    }

    // Split the pixel stream into maximal same color segments. Row seams
    // are not breaks, a color continuing into the next row extends its
    // segment.
    let mut segments: Vec<Segment> = Vec::new();
    for (index, &pixel) in pixels.iter().enumerate() {
        let color = pixel & COLOR_MASK;
        match segments.last_mut() {
            Some(segment) if segment.color == color => segment.count += 1,
            _ => segments.push(Segment {
                start: index as u32,
                count: 1,
                color,
            }),
        }
    }

    // Pick the background: the color owning the most segments. The first
    // color to reach the top count keeps it on a tie.
    let mut background = 0u32;
    let mut highest = 0usize;
    let mut counts: Vec<(u32, usize)> = Vec::new();
    for segment in &segments {
        let slot = match counts.iter().position(|&(color, _)| color == segment.color) {
            Some(slot) => slot,
            None => {
                counts.push((segment.color, 0));
                counts.len() - 1
            }
        };
        counts[slot].1 += 1;
        if counts[slot].1 > highest {
            highest = counts[slot].1;
            background = counts[slot].0;
        }
    }

    let mut palette: Vec<u32> = Vec::with_capacity(counts.len());
    palette.push(background);

    let mut runs: Vec<Run> = Vec::new();
    for segment in &segments {
        let slot = match palette.iter().position(|&color| color == segment.color) {
            Some(slot) => slot,
            None => {
                palette.push(segment.color);
                palette.len() - 1
            }
        };
        if slot == 0 {
            continue;
        }
        runs.push(Run::new(
            segment.start as u16,
            segment.count.try_into().map_err(|_| EncodeError::TooLarge)?,
            slot as u16,
        ));
    }

    info!(
        "Encoded {}x{}: {} segments, {} runs kept, {} palette entries",
        width,
        height,
        segments.len(),
        runs.len(),
        palette.len()
    );

    Ok(EncodedImage {
        runs,
        palette,
        width,
        height,
    })
}
