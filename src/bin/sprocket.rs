use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use sprocket::{
    CpuSurface, EngineHost, FaceConfig, SurfaceBounds, TimeSource, WallTime, WatchFaceEngine,
};

#[derive(Parser, Debug)]
#[command(name = "sprocket", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single face frame as a PNG.
    Frame(FrameArgs),
    /// Drive the engine through the host contract and write a PNG sequence.
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Wall time to render, `HH:MM:SS.mmm`.
    #[arg(long, default_value = "10:09:30.000")]
    time: String,

    /// Display mode.
    #[arg(long, value_enum, default_value_t = ModeChoice::Interactive)]
    mode: ModeChoice,

    /// Surface size in pixels (square face).
    #[arg(long, default_value_t = 320)]
    size: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Face configuration JSON (defaults to the built-in face).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory ornament file paths are resolved against.
    #[arg(long)]
    assets_root: Option<PathBuf>,

    /// Simulate a low-bit-color device (forces aliased ambient rendering).
    #[arg(long)]
    low_bit: bool,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Wall time of the first frame, `HH:MM:SS.mmm`.
    #[arg(long, default_value = "10:09:30.000")]
    time: String,

    /// Number of frames to render.
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Simulated display refresh rate in frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Surface size in pixels (square face).
    #[arg(long, default_value_t = 320)]
    size: u32,

    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Face configuration JSON (defaults to the built-in face).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory ornament file paths are resolved against.
    #[arg(long)]
    assets_root: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Interactive,
    Ambient,
}

/// Clock whose millisecond-of-day is advanced by the driver loop.
#[derive(Clone)]
struct SteppedClock(Rc<Cell<u64>>);

impl SteppedClock {
    fn new(start: WallTime) -> Self {
        let ms = u64::from(start.hour) * 3_600_000
            + u64::from(start.minute) * 60_000
            + u64::from(start.second) * 1000
            + u64::from(start.millisecond);
        Self(Rc::new(Cell::new(ms)))
    }

    fn advance_ms(&self, delta: u64) {
        self.0.set(self.0.get() + delta);
    }
}

impl TimeSource for SteppedClock {
    fn now(&self) -> WallTime {
        let ms = self.0.get() % 86_400_000;
        WallTime {
            hour: (ms / 3_600_000) as u8,
            minute: (ms / 60_000 % 60) as u8,
            second: (ms / 1000 % 60) as u8,
            millisecond: (ms % 1000) as u16,
        }
    }
}

/// Host stand-in: records redraw requests; the CLI has no real time-update
/// notification to subscribe to.
#[derive(Debug, Default)]
struct CliHost {
    redraw_requested: bool,
}

impl CliHost {
    fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

impl EngineHost for CliHost {
    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    fn subscribe_time_updates(&mut self) {}

    fn unsubscribe_time_updates(&mut self) {}
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let bounds = SurfaceBounds::new(args.size, args.size)?;
    let clock = SteppedClock::new(parse_wall_time(&args.time)?);

    let mut engine = WatchFaceEngine::create(
        &config,
        args.assets_root.as_deref(),
        bounds,
        Box::new(clock),
    )?;

    let mut host = CliHost::default();
    engine.on_properties_changed(args.low_bit);
    engine.on_visibility_changed(true, &mut host);
    engine.on_ambient_mode_changed(matches!(args.mode, ModeChoice::Ambient), &mut host);

    let mut surface = CpuSurface::new(bounds)?;
    engine.on_draw(&mut surface, bounds, &mut host);

    write_png(&mut surface, &args.out)?;
    println!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    let bounds = SurfaceBounds::new(args.size, args.size)?;
    let fps = args.fps.max(1);
    let clock = SteppedClock::new(parse_wall_time(&args.time)?);

    let mut engine = WatchFaceEngine::create(
        &config,
        args.assets_root.as_deref(),
        bounds,
        Box::new(clock.clone()),
    )?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    // Interactive and visible: the transition itself requests the first frame,
    // each drawn frame requests the next.
    let mut host = CliHost::default();
    engine.on_visibility_changed(true, &mut host);

    let mut written = 0u32;
    for index in 0..args.frames {
        if !host.take_redraw_request() {
            break;
        }
        let mut surface = CpuSurface::new(bounds)?;
        engine.on_draw(&mut surface, bounds, &mut host);
        let out = args.out_dir.join(format!("frame_{index:04}.png"));
        write_png(&mut surface, &out)?;
        written += 1;
        clock.advance_ms(u64::from(1000 / fps));
    }

    println!(
        "wrote {written} frames to {} ({} redraws scheduled)",
        args.out_dir.display(),
        engine.scheduler().frames_scheduled()
    );
    Ok(())
}

fn read_config(path: Option<&Path>) -> anyhow::Result<FaceConfig> {
    let Some(path) = path else {
        return Ok(FaceConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read face config '{}'", path.display()))?;
    Ok(FaceConfig::from_json_str(&json)?)
}

fn parse_wall_time(s: &str) -> anyhow::Result<WallTime> {
    let (hms, millis) = match s.split_once('.') {
        Some((hms, ms)) => (hms, ms.parse::<u16>().context("parse milliseconds")?),
        None => (s, 0),
    };
    let mut parts = hms.split(':');
    let mut next = |what: &str| -> anyhow::Result<u8> {
        parts
            .next()
            .with_context(|| format!("missing {what} in time '{s}'"))?
            .parse::<u8>()
            .with_context(|| format!("parse {what} in time '{s}'"))
    };
    let hour = next("hour")?;
    let minute = next("minute")?;
    let second = next("second")?;
    Ok(WallTime::new(hour, minute, second, millis)?)
}

fn write_png(surface: &mut CpuSurface, path: &Path) -> anyhow::Result<()> {
    let frame = surface.finish()?;
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.to_straight_rgba8())
        .context("frame buffer size mismatch")?;
    img.save(path)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
