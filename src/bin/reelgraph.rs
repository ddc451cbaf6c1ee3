use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reelgraph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile one scene's animation settings into a `-vf` chain.
    Scene(SceneArgs),
    /// Compile a multi-frame job into a `-filter_complex` graph.
    Timeline(TimelineArgs),
    /// Join finished scene videos into one story video.
    Merge(MergeArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Animation settings JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Clip duration in seconds (usually the narration length).
    #[arg(long)]
    duration: Option<f64>,

    /// Output size.
    #[arg(long, value_enum, default_value_t = PresetChoice::Hd720)]
    preset: PresetChoice,

    /// Output width, overriding the preset.
    #[arg(long)]
    width: Option<u32>,

    /// Output height, overriding the preset.
    #[arg(long)]
    height: Option<u32>,

    /// Output frame rate.
    #[arg(long, default_value_t = 25)]
    fps: u32,

    /// Directory holding `<scene>.png` and `<scene>.mp3`.
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Scene identifier used to derive file names.
    #[arg(long)]
    scene_id: Option<String>,

    /// Print the full ffmpeg command instead of the filter chain.
    #[arg(long)]
    command: bool,

    /// Run ffmpeg (requires `ffmpeg` on PATH).
    #[arg(long)]
    run: bool,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Multi-frame job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Primary image, overriding the job's `image`.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Narration audio, overriding the job's `audio`.
    #[arg(long)]
    audio: Option<PathBuf>,

    /// Output video, overriding the job's `output`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output width, overriding the job's `width`.
    #[arg(long)]
    width: Option<u32>,

    /// Output height, overriding the job's `height`.
    #[arg(long)]
    height: Option<u32>,

    /// Output frame rate, overriding the job's `fps`.
    #[arg(long)]
    fps: Option<u32>,

    /// Directory holding scene media; with `--scene-id`, fills in missing paths.
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Scene identifier used to derive file names.
    #[arg(long)]
    scene_id: Option<String>,

    /// Print the compiled timeline as JSON.
    #[arg(long)]
    json: bool,

    /// Run ffmpeg (requires `ffmpeg` on PATH).
    #[arg(long)]
    run: bool,
}

#[derive(Parser, Debug)]
struct MergeArgs {
    /// Scene videos, in story order.
    #[arg(required = true)]
    videos: Vec<PathBuf>,

    /// Concat list file to write.
    #[arg(long, default_value = "concat_list.txt")]
    list: PathBuf,

    /// Output video.
    #[arg(long)]
    out: PathBuf,

    /// Re-encode each scene to a common codec layout before joining.
    #[arg(long)]
    normalize: bool,

    /// Join scenes as they are, even when narration outlasts the picture.
    #[arg(long)]
    no_audio_completion: bool,

    /// Run ffmpeg (requires `ffmpeg` on PATH).
    #[arg(long)]
    run: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    Hd720,
    FullHd1080,
    Square1080,
    Portrait1080,
}

impl From<PresetChoice> for reelgraph::ResolutionPreset {
    fn from(p: PresetChoice) -> Self {
        match p {
            PresetChoice::Hd720 => Self::Hd720,
            PresetChoice::FullHd1080 => Self::FullHd1080,
            PresetChoice::Square1080 => Self::Square1080,
            PresetChoice::Portrait1080 => Self::Portrait1080,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Scene(args) => cmd_scene(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Merge(args) => cmd_merge(args),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    let value = serde_json::from_reader(r).with_context(|| format!("parse {what} JSON"))?;
    Ok(value)
}

fn scene_files(dir: Option<PathBuf>, scene_id: Option<String>) -> Option<reelgraph::SceneFiles> {
    scene_id.map(|id| reelgraph::SceneFiles::new(dir.unwrap_or_default(), id))
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let raw: reelgraph::RawAnimationSpec = read_json(&args.in_path, "animation settings")?;

    let files = scene_files(args.dir, args.scene_id);

    let preset = reelgraph::ResolutionPreset::from(args.preset).canvas();
    let canvas = reelgraph::Canvas::new(
        args.width.unwrap_or(preset.width),
        args.height.unwrap_or(preset.height),
    )?;
    let default_duration = reelgraph::RenderParams::DEFAULT_DURATION;
    // Settings that carry their own duration override this base anyway.
    let duration = args.duration.unwrap_or_else(|| match &files {
        Some(files) if raw.duration.is_none() => {
            reelgraph::media_duration_or(&files.narration(), default_duration)
        }
        _ => default_duration,
    });
    let base = reelgraph::RenderParams {
        duration,
        canvas,
        fps: reelgraph::Fps::new(args.fps)?,
    };
    let params = raw.render_params(base);
    let filter = reelgraph::compile_scene_filter(&raw, &params).value;

    if !args.command && !args.run {
        match &filter {
            Some(chain) => println!("{chain}"),
            None => eprintln!("no animation applied"),
        }
        return Ok(());
    }

    let files = files.context("--scene-id is required to build the scene command")?;
    let cmd = reelgraph::FfmpegCommand::single_scene(
        files.primary_image(),
        files.narration(),
        filter,
        params.fps,
        files.video(),
    );
    println!("{}", cmd.to_shell_line());

    if args.run {
        reelgraph::run(&cmd)?;
        eprintln!("wrote {}", cmd.output.display());
    }
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let mut job: reelgraph::RawTimeline = read_json(&args.in_path, "timeline job")?;
    let files = scene_files(args.dir, args.scene_id);
    job.width = args.width.or(job.width);
    job.height = args.height.or(job.height);
    job.fps = args.fps.or(job.fps);

    let path_string = |p: PathBuf| p.display().to_string();
    if let Some(image) = args.image {
        job.image = Some(path_string(image));
    } else if job.image.is_none()
        && let Some(files) = &files
    {
        job.image = Some(path_string(files.primary_image()));
    }
    let audio = args
        .audio
        .or_else(|| job.audio.as_ref().map(PathBuf::from))
        .or_else(|| files.as_ref().map(|f| f.narration()));
    let out = args
        .out
        .or_else(|| job.output.as_ref().map(PathBuf::from))
        .or_else(|| files.as_ref().map(|f| f.multiframe_video()));

    if job.total_duration.is_none()
        && let Some(audio) = &audio
    {
        match reelgraph::media_duration(audio) {
            Ok(secs) => job.total_duration = Some(secs),
            Err(err) => tracing::warn!(
                path = %audio.display(),
                %err,
                "cannot read narration duration; using the segment sum"
            ),
        }
    }

    let timeline = reelgraph::Timeline::from_raw(&job);
    for d in &timeline.diagnostics {
        tracing::warn!(kind = ?d.kind, segment = ?d.segment, "{}", d.message);
    }
    let compiled = reelgraph::compile_timeline(&timeline.value, audio.is_some())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&compiled)?);
    }

    let Some(out) = out else {
        if !args.json {
            println!("{}", compiled.graph);
        }
        anyhow::ensure!(!args.run, "--out is required with --run");
        return Ok(());
    };

    let cmd = reelgraph::FfmpegCommand::for_timeline(
        &compiled,
        audio.as_deref(),
        out,
        reelgraph::EncodeSettings::timeline(),
    )?;
    if !args.json {
        println!("{}", cmd.to_shell_line());
    }

    if args.run {
        reelgraph::run(&cmd)?;
        eprintln!("wrote {}", cmd.output.display());
    }
    Ok(())
}

fn cmd_merge(args: MergeArgs) -> anyhow::Result<()> {
    let work_dir = args
        .list
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let mut normalize = Vec::new();
    let videos: Vec<PathBuf> = if args.normalize {
        args.videos
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let normalized = work_dir.join(format!("normalized_{i}.mp4"));
                normalize.push(reelgraph::normalize_command(v, normalized.clone()));
                normalized
            })
            .collect()
    } else {
        args.videos.clone()
    };

    // Stream lengths survive normalization, so the source files are measured.
    let mut complete = Vec::new();
    let videos: Vec<PathBuf> = if args.no_audio_completion {
        videos
    } else {
        videos
            .into_iter()
            .zip(&args.videos)
            .enumerate()
            .map(|(i, (video, source))| {
                let Some(length) = reelgraph::completion_length(source) else {
                    return video;
                };
                let processed = work_dir.join(format!("processed_{i}.mp4"));
                complete.push(reelgraph::complete_audio_command(
                    &video,
                    length,
                    processed.clone(),
                ));
                processed
            })
            .collect()
    };

    let plan = reelgraph::MergePlan::new(&videos, &args.list, &args.out)?;
    for cmd in normalize.iter().chain(&complete) {
        println!("{}", cmd.to_shell_line());
    }
    println!("{}", plan.command.to_shell_line());

    if args.run {
        for cmd in normalize.iter().chain(&complete) {
            reelgraph::run(cmd)?;
        }
        plan.write_list()?;
        reelgraph::run(&plan.command)?;
        eprintln!("wrote {}", args.out.display());
    }
    Ok(())
}
