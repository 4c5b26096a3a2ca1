// Auto-generated image table
// Source: arrow.png
// Size: 16x16

use crate::image::{Run, RunImage};

pub static ARROW: RunImage<'static> = RunImage::new(&RUNS, &PALETTE, 16, 16);

static PALETTE: [u32; 2] = [
    0x00000000,
    0x00FFFFFF,
];

static RUNS: [Run; 9] = [
    Run::new(52, 4, 1),
    Run::new(68, 5, 1),
    Run::new(84, 6, 1),
    Run::new(100, 7, 1),
    Run::new(116, 8, 1),
    Run::new(132, 7, 1),
    Run::new(148, 6, 1),
    Run::new(164, 5, 1),
    Run::new(180, 4, 1),
];
