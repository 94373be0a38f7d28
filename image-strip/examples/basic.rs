// Example: load a strip from an in-memory source, drag it, and print the frame plan.
use std::future::{Future, ready};

use image_strip::{
    AssetLoadError, AssetSource, ImageAsset, ImageSlider, PointerSample, SliderOptions,
};

struct FixedSizes;

impl AssetSource for FixedSizes {
    type Pixels = ();

    fn resolve(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<ImageAsset<()>, AssetLoadError>> {
        ready(Ok(ImageAsset::new(identifier, (), 1280, 800)))
    }
}

fn main() {
    let ids = ["one.png", "two.png", "three.png", "four.png", "five.png"];
    let mut slider = ImageSlider::new(SliderOptions::new(ids, 640, 400)).unwrap();

    let outcome = futures::executor::block_on(slider.load_with(&FixedSizes));
    println!("outcome={outcome:?} status={:?}", slider.status());
    println!("visible_range={:?}", slider.visible_range());

    slider.pointer_down(PointerSample::new(300.0));
    for x in [250.0, 100.0, -200.0] {
        slider.pointer_move(PointerSample::new(x));
        println!(
            "x={x} offset={} cursor={}",
            slider.offset(),
            slider.cursor().as_str()
        );
    }
    slider.pointer_up();

    for cmd in slider.frame_plan() {
        println!("draw index={} at {:?} size {:?}", cmd.index, cmd.position, cmd.size);
    }
}
