use crate::*;

use std::path::Path;

use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use image_strip::{
    AssetSource, CursorHint, ImageSlider, LoadOutcome, LoadStatus, PointerSample, Rect, Rgb,
    SliderOptions, Surface,
};
use tempfile::tempdir;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
const GREY: Rgba<u8> = Rgba([242, 242, 242, 255]);

fn write_png(dir: &Path, name: &str, width: u32, height: u32, color: Rgba<u8>) {
    RgbaImage::from_pixel(width, height, color)
        .save(dir.join(name))
        .expect("write test image");
}

#[tokio::test]
async fn fs_source_reads_dimensions() {
    let dir = tempdir().unwrap();
    write_png(dir.path(), "wide.png", 6, 2, RED);

    let source = FsSource::with_root(dir.path());
    let asset = source.resolve("/wide.png").await.unwrap();
    assert_eq!(asset.identifier, "/wide.png");
    assert_eq!((asset.intrinsic_width, asset.intrinsic_height), (6, 2));
    assert_eq!(asset.pixels.get_pixel(0, 0), &RED);
}

#[test]
fn fs_source_path_mapping() {
    let rooted = FsSource::with_root("/srv/public");
    assert_eq!(
        rooted.path_for("/slider-images/image1.jpg"),
        Path::new("/srv/public/slider-images/image1.jpg")
    );
    assert_eq!(FsSource::new().path_for("a/b.png"), Path::new("a/b.png"));
    assert!(FsSource::new().root().is_none());
}

#[tokio::test]
async fn fs_source_reports_missing_and_corrupt_files() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("junk.png"), b"not an image").unwrap();
    let source = FsSource::with_root(dir.path());

    let missing = source.resolve("nope.png").await.unwrap_err();
    assert_eq!(missing.identifier, "nope.png");

    let corrupt = source.resolve("junk.png").await.unwrap_err();
    assert_eq!(corrupt.identifier, "junk.png");
    assert!(!corrupt.reason.is_empty());
}

#[test]
fn raster_fill_is_clipped() {
    let mut surface = RasterSurface::new(4, 4);
    surface.fill_rect(
        Rect {
            x: -2.0,
            y: 2.0,
            width: 4.0,
            height: 10.0,
        },
        Rgb::new(1, 2, 3),
    );

    let img = surface.image();
    assert_eq!(img.get_pixel(0, 2), &Rgba([1, 2, 3, 255]));
    assert_eq!(img.get_pixel(1, 3), &Rgba([1, 2, 3, 255]));
    assert_eq!(img.get_pixel(2, 2), &Rgba([0, 0, 0, 0]));
    assert_eq!(img.get_pixel(0, 1), &Rgba([0, 0, 0, 0]));
}

#[test]
fn raster_draw_scales_and_clips() {
    let mut surface = RasterSurface::new(8, 8).with_filter(FilterType::Nearest);
    let src = RgbaImage::from_pixel(8, 4, BLUE);

    surface.draw_image(
        &src,
        Rect {
            x: 1.0,
            y: 1.0,
            width: 4.0,
            height: 2.0,
        },
    );
    let img = surface.image();
    assert_eq!(img.get_pixel(1, 1), &BLUE);
    assert_eq!(img.get_pixel(4, 2), &BLUE);
    assert_eq!(img.get_pixel(5, 1), &Rgba([0, 0, 0, 0]));
    assert_eq!(img.get_pixel(1, 3), &Rgba([0, 0, 0, 0]));

    // Partly off the left edge.
    surface.draw_image(
        &RgbaImage::from_pixel(4, 1, RED),
        Rect {
            x: -2.0,
            y: 6.0,
            width: 4.0,
            height: 1.0,
        },
    );
    let img = surface.image();
    assert_eq!(img.get_pixel(0, 6), &RED);
    assert_eq!(img.get_pixel(1, 6), &RED);
    assert_eq!(img.get_pixel(2, 6), &Rgba([0, 0, 0, 0]));
}

#[test]
fn raster_draw_off_canvas_is_a_no_op() {
    let mut surface = RasterSurface::new(4, 4);
    let before = surface.image().clone();
    let src = RgbaImage::from_pixel(4, 4, RED);

    for x in [4.0, -4.0, 100.0] {
        surface.draw_image(
            &src,
            Rect {
                x,
                y: 0.0,
                width: 4.0,
                height: 4.0,
            },
        );
    }
    assert_eq!(surface.image(), &before);
}

#[test]
fn host_event_sample_uses_first_touch() {
    let ev = HostEvent::TouchMove {
        touches: vec![12.0, 400.0],
    };
    assert_eq!(ev.sample(), Some(PointerSample::new(12.0)));
    assert_eq!(HostEvent::TouchStart { touches: vec![] }.sample(), None);
    assert_eq!(HostEvent::MouseLeave.sample(), None);
}

#[test]
fn dispatch_drives_the_drag_state_machine() {
    let mut slider = ImageSlider::<()>::new(SliderOptions::new(["a", "b", "c"], 100, 50)).unwrap();
    let ticket = slider.start_load();
    let completion = image_strip::LoadCompletion {
        generation: ticket.generation(),
        result: Ok(image_strip::AssetSet::new(
            ticket
                .identifiers()
                .iter()
                .map(|id| image_strip::ImageAsset::new(id.as_str(), (), 100, 50))
                .collect(),
        )),
    };
    assert_eq!(slider.complete_load(completion), LoadOutcome::Ready { count: 3 });

    assert!(!dispatch(&mut slider, &HostEvent::MouseMove { client_x: 0.0 }));
    dispatch(&mut slider, &HostEvent::MouseDown { client_x: 80.0 });
    assert!(dispatch(&mut slider, &HostEvent::MouseMove { client_x: 50.0 }));
    assert_eq!(slider.offset(), 30.0);
    dispatch(&mut slider, &HostEvent::MouseLeave);
    assert!(!slider.is_dragging());

    dispatch(
        &mut slider,
        &HostEvent::TouchStart {
            touches: vec![90.0, 5.0],
        },
    );
    assert!(slider.is_dragging());
    assert!(dispatch(
        &mut slider,
        &HostEvent::TouchMove {
            touches: vec![70.0, 900.0],
        }
    ));
    assert_eq!(slider.offset(), 50.0);
    assert!(!dispatch(&mut slider, &HostEvent::TouchMove { touches: vec![] }));
    dispatch(&mut slider, &HostEvent::TouchEnd);
    assert!(!slider.is_dragging());

    dispatch(&mut slider, &HostEvent::MouseDown { client_x: 0.0 });
    dispatch(&mut slider, &HostEvent::MouseUp);
    assert!(!slider.is_dragging());
    assert_eq!(slider.offset(), 50.0);
}

#[tokio::test]
async fn controller_loads_and_redraws_on_drag() {
    let dir = tempdir().unwrap();
    write_png(dir.path(), "r.png", 8, 4, RED);
    write_png(dir.path(), "g.png", 8, 4, GREEN);
    write_png(dir.path(), "b.png", 4, 2, BLUE);

    let options = SliderOptions::new(["/r.png", "/g.png", "/b.png"], 8, 4);
    let mut c = RasterController::raster(options, FsSource::with_root(dir.path())).unwrap();
    assert_eq!(c.status_text().as_deref(), Some("Loading images..."));

    assert_eq!(c.load().await, LoadOutcome::Ready { count: 3 });
    assert_eq!(c.status(), &LoadStatus::Ready);
    assert_eq!(c.status_text(), None);
    assert_eq!(c.surface().image().get_pixel(0, 0), &RED);
    assert_eq!(c.surface().image().get_pixel(7, 3), &RED);

    assert!(!c.handle(&HostEvent::MouseDown { client_x: 8.0 }));
    assert_eq!(c.cursor(), CursorHint::Grabbing);
    assert!(c.handle(&HostEvent::MouseMove { client_x: 4.0 }));
    assert_eq!(c.slider().offset(), 4.0);
    assert_eq!(c.surface().image().get_pixel(3, 0), &RED);
    assert_eq!(c.surface().image().get_pixel(4, 0), &GREEN);

    // Drag to the end: the small blue image sits centered on the grey background.
    assert!(c.handle(&HostEvent::MouseMove { client_x: -100.0 }));
    assert_eq!(c.slider().offset(), 16.0);
    let img = c.surface().image();
    assert_eq!(img.get_pixel(0, 0), &GREY);
    assert_eq!(img.get_pixel(2, 1), &BLUE);
    assert_eq!(img.get_pixel(5, 2), &BLUE);
    assert_eq!(img.get_pixel(6, 3), &GREY);

    c.handle(&HostEvent::MouseLeave);
    assert_eq!(c.cursor(), CursorHint::Grab);
}

#[tokio::test]
async fn controller_reports_failed_loads() {
    let dir = tempdir().unwrap();
    write_png(dir.path(), "ok.png", 2, 2, RED);

    let options = SliderOptions::new(["ok.png", "missing.png"], 2, 2);
    let mut c = RasterController::raster(options, FsSource::with_root(dir.path())).unwrap();

    let outcome = c.load().await;
    assert!(matches!(outcome, LoadOutcome::Failed(ref e) if e.identifier == "missing.png"));
    let text = c.status_text().unwrap();
    assert!(text.starts_with("Error loading images: failed to load image: missing.png"));

    // Nothing was drawn and drags are ignored.
    assert_eq!(c.surface().image().get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
    assert!(!c.handle(&HostEvent::MouseDown { client_x: 1.0 }));
    assert!(!c.slider().is_dragging());

    // Retrying with a fixed list recovers.
    let outcome = c.set_identifiers(["ok.png"]).await.unwrap();
    assert_eq!(outcome, LoadOutcome::Ready { count: 1 });
    assert_eq!(c.surface().image().get_pixel(1, 1), &RED);
    assert_eq!(c.redraw(), 1);
}

#[tokio::test]
async fn raster_surface_saves_png() {
    let dir = tempdir().unwrap();
    let mut surface = RasterSurface::new(3, 2);
    surface.fill_rect(
        Rect {
            x: 0.0,
            y: 0.0,
            width: 3.0,
            height: 2.0,
        },
        Rgb::default(),
    );
    let out = dir.path().join("frame.png");
    surface.save_png(&out).unwrap();

    let reloaded = image::open(&out).unwrap().to_rgba8();
    assert_eq!(reloaded.dimensions(), (3, 2));
    assert_eq!(reloaded.get_pixel(2, 1), &GREY);
}
