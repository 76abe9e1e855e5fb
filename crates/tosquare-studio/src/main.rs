mod args;
mod icons;

use anyhow::Result;
use clap::Parser;

use tosquare_engine::assets::FileImageProvider;
use tosquare_engine::controller::{AnimatorConfig, IconAnimator, Phase};
use tosquare_engine::coords::Rect;
use tosquare_engine::logging::{LoggingConfig, init_logging};
use tosquare_engine::pdc::Color8;
use tosquare_engine::render::Canvas;
use tosquare_engine::runtime::{RunLoop, SurfaceConfig};
use tosquare_engine::time::FrameClock;

use args::StudioArgs;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args = StudioArgs::parse();
    if let Some(dir) = &args.export_dir {
        return icons::export(dir);
    }

    let config = AnimatorConfig::default();
    let animator = match args.icons() {
        Some([a, b]) => {
            let provider = FileImageProvider::new(".");
            let (a, b) = (a.to_string_lossy(), b.to_string_lossy());
            IconAnimator::from_provider(&provider, [&*a, &*b], config)
        }
        None => IconAnimator::new([Some(icons::heavy_rain()), Some(icons::document())], config),
    };

    // Startup banner, printed before the first frame.
    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          TOSQUARE STUDIO v0.1          ║");
    println!("  ║   144x168 screen  ·  attract-to-square ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let surface = SurfaceConfig::default();
    let mut run_loop = RunLoop::new(surface, animator);
    let mut canvas = Canvas::new(surface.screen);
    let mut clock = FrameClock::fixed(args.frame());

    run_loop.load();

    let mut phase = run_loop.handler().state().phase();
    let mut switches = 0u64;
    let mut drawn = 0u64;
    while switches < args.phase_switches() {
        let ft = clock.tick();
        if run_loop.step(ft.dt, &mut canvas) {
            if drawn % args.print_every == 0 {
                print_frame(&canvas, surface, &run_loop);
            }
            drawn += 1;
        }

        let now = run_loop.handler().state().phase();
        if now != phase {
            log::info!("frame {}: {:?} -> {:?}", ft.frame_index, phase, now);
            phase = now;
            switches += 1;
        }
    }

    run_loop.unload();
    Ok(())
}

fn print_frame(canvas: &Canvas, surface: SurfaceConfig, run_loop: &RunLoop<IconAnimator>) {
    let state = run_loop.handler().state();
    let direction = match state.phase() {
        Phase::ToSquare => "to square",
        Phase::FromSquare => "from square",
    };
    let pct = u64::from(state.progress().value()) * 100 / u64::from(state.progress().max());

    // Icon layer plus a two-pixel margin of background.
    let f = surface.icon_frame;
    let region = Rect::new(f.origin.x - 2, f.origin.y - 2, f.size.w + 4, f.size.h + 4);
    let text = canvas.to_ascii_with(region, |c| match c {
        c if c == surface.background => '.',
        Color8::CLEAR => ' ',
        Color8::BLACK => '#',
        Color8::WHITE => 'o',
        _ => '+',
    });

    println!("── {direction} {pct:>3}% ─────────────────────────────────────");
    println!("{text}");
    println!();
}
