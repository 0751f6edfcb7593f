use argh::FromArgs;
use std::path::{Path, PathBuf};

use chromascope::image::{ColorSpace, ImageSize};
use chromascope::io::functional as F;
use chromascope::{
    ChannelFilter, DisplayMode, DisplaySelection, ImageStore, SaveMode, ViewerConfig,
};

#[derive(FromArgs)]
/// Inspect an image channel by channel in RGB, CIELab and HSV
struct Args {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Info(InfoArgs),
    Convert(ConvertArgs),
    Render(RenderArgs),
    Probe(ProbeArgs),
}

#[derive(FromArgs)]
/// Load an image and print its size
#[argh(subcommand, name = "info")]
struct InfoArgs {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to a JSON viewer configuration
    #[argh(option)]
    config: Option<PathBuf>,
}

#[derive(FromArgs)]
/// Convert an image and save the result
#[argh(subcommand, name = "convert")]
struct ConvertArgs {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// target color space: rgb, lab or hsv
    #[argh(option, short = 's')]
    space: ColorSpace,

    /// path of the output image
    #[argh(option, short = 'o')]
    output_path: PathBuf,

    /// write the encoded channel bytes instead of converting back to RGB
    #[argh(switch)]
    raw: bool,

    /// path to a JSON viewer configuration
    #[argh(option)]
    config: Option<PathBuf>,
}

#[derive(FromArgs)]
/// Render a channel view into a canvas and save it
#[argh(subcommand, name = "render")]
struct RenderArgs {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// color space: rgb, lab or hsv
    #[argh(option, short = 's')]
    space: ColorSpace,

    /// channel to show, `all` or a channel name such as L or H
    #[argh(option, short = 'c', default = "String::from(\"all\")")]
    channel: String,

    /// stretch raw channel values instead of converting back to RGB
    #[argh(switch)]
    raw: bool,

    /// viewport width
    #[argh(option, short = 'W')]
    width: Option<usize>,

    /// viewport height
    #[argh(option, short = 'H')]
    height: Option<usize>,

    /// path of the output image
    #[argh(option, short = 'o')]
    output_path: PathBuf,

    /// path to a JSON viewer configuration
    #[argh(option)]
    config: Option<PathBuf>,
}

#[derive(FromArgs)]
/// Print the value under a viewport coordinate
#[argh(subcommand, name = "probe")]
struct ProbeArgs {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// color space: rgb, lab or hsv
    #[argh(option, short = 's')]
    space: ColorSpace,

    /// channel to read, `all` or a channel name such as L or H
    #[argh(option, short = 'c', default = "String::from(\"all\")")]
    channel: String,

    /// viewport column
    #[argh(option, short = 'x')]
    x: f64,

    /// viewport row
    #[argh(option, short = 'y')]
    y: f64,

    /// viewport width
    #[argh(option, short = 'W')]
    width: Option<usize>,

    /// viewport height
    #[argh(option, short = 'H')]
    height: Option<usize>,

    /// print the value as JSON
    #[argh(switch)]
    json: bool,

    /// path to a JSON viewer configuration
    #[argh(option)]
    config: Option<PathBuf>,
}

/// Load the configuration and the image into a fresh store.
fn open_store(
    config: Option<&Path>,
    image_path: &Path,
) -> Result<ImageStore, Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => ViewerConfig::from_json_file(path)?,
        None => ViewerConfig::default(),
    };

    let mut store = ImageStore::new(config);
    store.load(image_path)?;

    Ok(store)
}

// dimensions that are not given fall back to the configured default viewport
fn viewport(width: Option<usize>, height: Option<usize>) -> ImageSize {
    ImageSize {
        width: width.unwrap_or(0),
        height: height.unwrap_or(0),
    }
}

fn display_mode(raw: bool) -> DisplayMode {
    if raw {
        DisplayMode::Raw
    } else {
        DisplayMode::Converted
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    match args.command {
        Command::Info(args) => {
            let store = open_store(args.config.as_deref(), &args.image_path)?;
            let size = store.buffer(ColorSpace::Rgb)?.size();
            println!("{}", store.status());
            println!("Size: {}x{}", size.width, size.height);
        }
        Command::Convert(args) => {
            let mut store = open_store(args.config.as_deref(), &args.image_path)?;
            store.convert(args.space)?;

            let mode = if args.raw {
                SaveMode::Raw
            } else {
                SaveMode::Converted
            };
            let written = store.save(args.space, &args.output_path, mode)?;
            println!("Saved {} image to {}", args.space, written.display());
        }
        Command::Render(args) => {
            let mut store = open_store(args.config.as_deref(), &args.image_path)?;
            store.convert(args.space)?;

            let selection = DisplaySelection::new(args.space)
                .with_channel(ChannelFilter::parse(args.space, &args.channel)?)
                .with_mode(display_mode(args.raw));

            if selection.is_raw_composite() {
                println!("{}", DisplayMode::RAW_NOTICE);
            }

            let canvas = store.compose(&selection, viewport(args.width, args.height))?;
            let output_path = store.config().with_default_extension(&args.output_path);
            F::write_image_any_rgb8(&output_path, &canvas)?;

            log::info!(
                "wrote {}x{} canvas to {}",
                canvas.width(),
                canvas.height(),
                output_path.display()
            );
            println!(
                "Rendered {} {} view to {}",
                args.space,
                selection.channel.label(args.space),
                output_path.display()
            );
        }
        Command::Probe(args) => {
            let mut store = open_store(args.config.as_deref(), &args.image_path)?;
            store.convert(args.space)?;

            let selection = DisplaySelection::new(args.space)
                .with_channel(ChannelFilter::parse(args.space, &args.channel)?);
            let viewport = viewport(args.width, args.height);

            if args.json {
                let value = store.pixel_at(&selection, args.x, args.y, viewport)?;
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", store.readout(&selection, args.x, args.y, viewport));
            }
        }
    }

    Ok(())
}
