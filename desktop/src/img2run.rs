use std::path::Path;

use argh::FromArgs;
use log::info;
use pixrun_core::encode::{self, EncodedImage};

/// Conversion options
#[derive(FromArgs)]
struct Args {
    /// input image path
    #[argh(option, short = 'i')]
    input: String,

    /// output Rust module path
    #[argh(positional)]
    output: String,

    /// name for the generated static, defaults to the input file stem
    #[argh(option)]
    name: Option<String>,

    /// tables only, without the module header
    #[argh(switch, short = 'd')]
    data_only: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let image = image::open(&args.input).expect("Failed to open input image");
    let width = image.width();
    let height = image.height();
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        panic!("Input image is too large (max {0}x{0})", u16::MAX);
    }

    let rgb = image.into_rgb8();
    let pixels: Vec<u32> = rgb
        .pixels()
        .map(|p| u32::from_be_bytes([0, p[0], p[1], p[2]]))
        .collect();

    let encoded = encode::encode(&pixels, width as u16, height as u16)
        .expect("Input image does not fit the u16 table fields");

    info!("Runs: {}", encoded.runs.len());
    info!("Palette entries: {}", encoded.palette.len());
    info!(
        "Table size: {} bytes (raw bitmap {} bytes)",
        encoded.table_bytes(),
        width as usize * height as usize * 3
    );

    let source = Path::new(&args.input)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.clone());
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| static_name(&args.input));

    let code = generate_module(&encoded, &name, &source, args.data_only);
    std::fs::write(&args.output, code).expect("Failed to write output module");
    info!("Generated {} as {}", args.output, name.to_ascii_uppercase());
}

/// Derive a Rust identifier from the input file stem.
fn static_name(input: &str) -> String {
    let stem = Path::new(input)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("image"));
    let mut name: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if name.chars().next().is_none_or(|c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

fn generate_module(encoded: &EncodedImage, name: &str, source: &str, data_only: bool) -> String {
    let upper = name.to_ascii_uppercase();
    let mut code = String::new();
    if !data_only {
        code.push_str("// Auto-generated image table\n");
        code.push_str(&format!("// Source: {}\n", source));
        code.push_str(&format!("// Size: {}x{}\n\n", encoded.width, encoded.height));
        code.push_str("use crate::image::{Run, RunImage};\n\n");
    }
    code.push_str(&format!(
        "pub static {}: RunImage<'static> = RunImage::new(&RUNS, &PALETTE, {}, {});\n\n",
        upper, encoded.width, encoded.height
    ));
    code.push_str(&format!("static PALETTE: [u32; {}] = [\n", encoded.palette.len()));
    for color in &encoded.palette {
        code.push_str(&format!("    0x{:08X},\n", color));
    }
    code.push_str("];\n\n");
    code.push_str(&format!("static RUNS: [Run; {}] = [\n", encoded.runs.len()));
    for run in &encoded.runs {
        code.push_str(&format!(
            "    Run::new({}, {}, {}),\n",
            run.start, run.count, run.palette
        ));
    }
    code.push_str("];\n");
    code
}
