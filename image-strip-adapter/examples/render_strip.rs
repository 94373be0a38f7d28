// Example: load image files, simulate a drag across the strip, and write each frame as a PNG.
//
// cargo run -p image-strip-adapter --example render_strip --features tracing -- out/ a.jpg b.png c.png
use std::path::PathBuf;

use image_strip::SliderOptions;
use image_strip_adapter::{FsSource, HostEvent, RasterController};
use tracing_subscriber::EnvFilter;

const CANVAS_WIDTH: u32 = 640;
const CANVAS_HEIGHT: u32 = 400;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let Some(out_dir) = args.next().map(PathBuf::from) else {
        eprintln!("usage: render_strip <out-dir> <image>...");
        return;
    };
    let images: Vec<String> = args.collect();
    if images.is_empty() {
        eprintln!("usage: render_strip <out-dir> <image>...");
        return;
    }

    let options = SliderOptions::new(images, CANVAS_WIDTH, CANVAS_HEIGHT);
    let mut c = match RasterController::raster(options, FsSource::new()) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return;
        }
    };

    c.load().await;
    if let Some(text) = c.status_text() {
        eprintln!("{text}");
        return;
    }

    std::fs::create_dir_all(&out_dir).expect("create output directory");

    // Drag right-to-left in 160px steps, saving a frame each time the strip moves.
    let mut x = CANVAS_WIDTH as f64;
    c.handle(&HostEvent::MouseDown { client_x: x });
    let mut frame = 0usize;
    save(&c, &out_dir, frame);
    loop {
        x -= 160.0;
        if !c.handle(&HostEvent::MouseMove { client_x: x }) {
            break;
        }
        frame += 1;
        println!(
            "frame={frame} offset={} visible={:?}",
            c.slider().offset(),
            c.slider().visible_range()
        );
        save(&c, &out_dir, frame);
    }
    c.handle(&HostEvent::MouseUp);
}

fn save(c: &RasterController, out_dir: &std::path::Path, frame: usize) {
    let path = out_dir.join(format!("frame_{frame:03}.png"));
    if let Err(err) = c.surface().save_png(&path) {
        eprintln!("failed to write {}: {err}", path.display());
    }
}
