use dominance::image::io::Reader as ImageReader;

// merging within a distance of 20 folds most JPEG compression noise into the
// colors it surrounds
const THRESHOLD: f64 = 20.0;

fn main() {
    let path = std::env::args().nth(1).expect("usage: grouped <image>");
    let reader = ImageReader::open(path).unwrap();
    let img = reader.decode().unwrap();
    let buf = img.to_rgba8();

    let palette = dominance::PaletteBuilder::from_image(buf)
        .threshold(THRESHOLD)
        .generate()
        .unwrap();

    for entry in palette.entries() {
        println!(
            "{} {} ({} pixels, {} merged)",
            entry.hex, entry.percentage, entry.count, entry.merged_colors
        );
    }
}
