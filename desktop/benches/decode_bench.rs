use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pixrun_core::image::{Run, RunImage};

const WIDTH: u16 = 64;
const HEIGHT: u16 = 64;

static PALETTE: [u32; 4] = [0x00000000, 0x00FF0000, 0x0000FF00, 0x000000FF];

fn synthetic_runs(run_count: usize) -> Vec<Run> {
    let total = WIDTH as u32 * HEIGHT as u32;
    let span = total / run_count as u32;
    (0..run_count)
        .map(|i| {
            Run::new(
                (i as u32 * span) as u16,
                span as u16,
                1 + (i % 3) as u16,
            )
        })
        .collect()
}

fn full_frame_sweep(c: &mut Criterion) {
    for run_count in [16usize, 64, 256] {
        let runs = synthetic_runs(run_count);
        let image = RunImage::new(&runs, &PALETTE, WIDTH, HEIGHT);
        c.bench_function(&format!("sweep 64x64, {} runs", run_count), |b| {
            b.iter(|| {
                let mut acc = 0u64;
                for y in 0..HEIGHT {
                    for x in 0..WIDTH {
                        acc = acc.wrapping_add(image.get_pixel(black_box(x), y) as u64);
                    }
                }
                acc
            })
        });
    }
}

criterion_group!(benches, full_frame_sweep);
criterion_main!(benches);
