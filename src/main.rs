use clap::{Parser, Subcommand};
use gliderail::output::TraceStep;
use gliderail::script::Command as ScriptCommand;
use gliderail::state::CarouselState;
use gliderail::theme::ThemeMode;
use gliderail::types::SlideManifest;
use gliderail::viewport::Breakpoint;
use gliderail::widget::CarouselWidget;
use gliderail::{config, html, output, script, view};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

/// Shared flags for commands that take the external render inputs.
#[derive(clap::Args, Clone)]
struct FrameArgs {
    /// Color mode: light or dark (unrecognized values fall back to light)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Breakpoint label: mobile or tablet (unrecognized values fall back
    /// to below-tablet)
    #[arg(long, default_value = "tablet")]
    breakpoint: String,

    /// Viewport width in px; overrides --breakpoint by classifying against
    /// the configured tablet threshold
    #[arg(long)]
    width: Option<u32>,

    /// Active slide index to render at
    #[arg(long, default_value_t = 0)]
    index: usize,
}

impl FrameArgs {
    fn breakpoint(&self, cfg: &config::WidgetConfig) -> Breakpoint {
        match self.width {
            Some(w) => Breakpoint::classify(w, cfg.viewport.tablet_min_width),
            None => Breakpoint::from_label(&self.breakpoint),
        }
    }

    fn theme(&self) -> ThemeMode {
        ThemeMode::from_label(&self.theme)
    }
}

#[derive(Parser)]
#[command(name = "gliderail")]
#[command(about = "Headless carousel widget engine and demo renderer")]
#[command(long_about = "\
Headless carousel widget engine and demo renderer

The slide manifest is the data source: a slides.json listing media
sources, alt text, and captions in display order. The engine owns the
carousel's behavior (wrap-around navigation, coalescing queue, bullet
state, breakpoint-gated chrome); the CLI projects it into view-model
JSON, simulation traces, or a standalone HTML demo page.

Manifest structure:

  {
    \"slides\": [
      { \"src\": \"dawn.avif\", \"alt\": \"Dawn\", \"caption\": \"Dawn over the bay\" },
      { \"src\": \"mountains.avif\" }
    ]
  }

Run 'gliderail gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Slide manifest file
    #[arg(long, default_value = "slides.json", global = true)]
    slides: PathBuf,

    /// Directory containing config.toml (falls back to stock defaults)
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Output directory for rendered pages
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a standalone HTML demo page for one carousel frame
    Render(FrameArgs),
    /// Print the view-model JSON for one carousel frame
    View(FrameArgs),
    /// Replay a script of carousel events and print the state trace
    Simulate {
        /// Script text, e.g. "next; next; tick 400; goto 2"
        #[arg(long, conflicts_with = "script_file")]
        script: Option<String>,

        /// File containing one script command per line
        #[arg(long)]
        script_file: Option<PathBuf>,
    },
    /// Validate the slide manifest and config without rendering
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render(frame) => {
            let manifest = SlideManifest::load(&cli.slides)?;
            let cfg = config::load_config(&cli.config_dir)?;
            let v = frame_view(&manifest, &cfg, &frame)?;
            let page = html::render_demo_page(
                &v,
                &cfg.fade_palette(),
                &cfg.timing(),
                frame.theme(),
            );
            std::fs::create_dir_all(&cli.output)?;
            let out_path = cli.output.join("index.html");
            std::fs::write(&out_path, page.into_string())?;
            output::print_render_output(manifest.slides.len(), &out_path.display().to_string());
        }
        Command::View(frame) => {
            let manifest = SlideManifest::load(&cli.slides)?;
            let cfg = config::load_config(&cli.config_dir)?;
            let v = frame_view(&manifest, &cfg, &frame)?;
            println!("{}", serde_json::to_string_pretty(&v)?);
        }
        Command::Simulate {
            script: inline,
            script_file,
        } => {
            let text = match (inline, script_file) {
                (Some(s), _) => s,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => return Err("simulate needs --script or --script-file".into()),
            };
            let commands = script::parse_script(&text)?;
            let manifest = SlideManifest::load(&cli.slides)?;
            let cfg = config::load_config(&cli.config_dir)?;
            let trace = run_simulation(&manifest, &cfg, &commands);
            output::print_trace(&trace);
        }
        Command::Check => {
            let manifest = SlideManifest::load(&cli.slides)?;
            let cfg = config::load_config(&cli.config_dir)?;
            output::print_check_output(&manifest, &cfg);
            println!();
            println!("Manifest and config are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Build the frame's view model: a state positioned at the requested
/// index, projected through the pure render function.
fn frame_view(
    manifest: &SlideManifest,
    cfg: &config::WidgetConfig,
    frame: &FrameArgs,
) -> Result<view::CarouselView, Box<dyn std::error::Error>> {
    let mut state = CarouselState::new(manifest.slides.len());
    if frame.index > 0 {
        state.go_to_index(frame.index)?;
        state.settle();
    }
    Ok(view::render(
        &state,
        &manifest.slides,
        frame.breakpoint(cfg),
        frame.theme(),
        &cfg.fade_palette(),
    ))
}

/// Replay a parsed script against a mounted widget on a simulated clock.
///
/// `settle` is shorthand for letting the current transition run out:
/// it advances the clock by the full transition duration.
fn run_simulation(
    manifest: &SlideManifest,
    cfg: &config::WidgetConfig,
    commands: &[ScriptCommand],
) -> Vec<TraceStep> {
    let mut widget = CarouselWidget::mount(
        manifest.slides.clone(),
        cfg.fade_palette(),
        cfg.timing(),
        None,
        0,
    );
    let mut now: u64 = 0;
    let mut trace = Vec::with_capacity(commands.len());

    for &command in commands {
        let mut rejected = false;
        match command {
            ScriptCommand::Next => widget.next(now),
            ScriptCommand::Previous => widget.previous(now),
            ScriptCommand::GoTo(index) => {
                rejected = widget.go_to(index, now).is_err();
            }
            ScriptCommand::Settle => {
                now += cfg.motion.transition_ms;
                widget.advance_to(now);
            }
            ScriptCommand::Tick(ms) => {
                now += ms;
                widget.advance_to(now);
            }
            ScriptCommand::Unmount => widget.unmount(),
        }
        trace.push(TraceStep::capture(command, widget.state(), rejected));
    }
    trace
}
