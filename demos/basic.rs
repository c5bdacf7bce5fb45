use dominance::image::io::Reader as ImageReader;

fn main() {
    let path = std::env::args().nth(1).expect("usage: basic <image>");
    let reader = ImageReader::open(path).unwrap();
    let img = reader.decode().unwrap();
    let buf = img.to_rgba8();

    let palette = dominance::PaletteBuilder::from_image(buf).generate().unwrap();

    println!("{:#?}", palette);
}
