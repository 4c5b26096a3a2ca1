use argh::FromArgs;
use log::info;
use pixrun_core::encode;

/// Preview options
#[derive(FromArgs)]
struct Args {
    /// input image path
    #[argh(option, short = 'i')]
    input: String,

    /// window scale factor (1, 2, 4 or 8)
    #[argh(option, short = 's', default = "4")]
    scale: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let scale = match args.scale {
        1 => minifb::Scale::X1,
        2 => minifb::Scale::X2,
        4 => minifb::Scale::X4,
        8 => minifb::Scale::X8,
        other => panic!("Unsupported scale factor: {}", other),
    };

    let source = image::open(&args.input).expect("Failed to open input image");
    let width = source.width();
    let height = source.height();
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        panic!("Input image is too large (max {0}x{0})", u16::MAX);
    }

    let rgb = source.into_rgb8();
    let pixels: Vec<u32> = rgb
        .pixels()
        .map(|p| u32::from_be_bytes([0, p[0], p[1], p[2]]))
        .collect();

    let encoded = encode::encode(&pixels, width as u16, height as u16)
        .expect("Input image does not fit the u16 table fields");
    let image = encoded.as_image();
    info!(
        "Previewing {}: {} runs, {} palette entries, {} table bytes",
        args.input,
        encoded.runs.len(),
        encoded.palette.len(),
        encoded.table_bytes()
    );

    let width = width as usize;
    let height = height as usize;
    let mut buffer = vec![0u32; width * height];

    let options = minifb::WindowOptions {
        resize: false,
        scale,
        ..minifb::WindowOptions::default()
    };
    let mut window = minifb::Window::new("pixrun preview", width, height, options)
        .unwrap_or_else(|e| {
            panic!("Unable to open window: {}", e);
        });
    window.set_target_fps(30);

    while window.is_open() && !window.is_key_down(minifb::Key::Escape) {
        // Full frame sweep, one query per pixel, same as the device
        // refresh path.
        for y in 0..height {
            for x in 0..width {
                buffer[y * width + x] = image.get_pixel(x as u16, y as u16);
            }
        }
        window
            .update_with_buffer(&buffer, width, height)
            .unwrap();
    }
}
