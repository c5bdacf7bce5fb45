use dominance::{analyze_colors, AnalyzeError, Palette};
use rand::{rngs::StdRng, Rng, SeedableRng};

// the 2x2 image worked through below: two black pixels, one near-black, one
// white. distance from black to (10, 10, 10) is sqrt(300) ~ 17.32
const PIXELS_2X2: [u8; 16] = [
    0, 0, 0, 255, //
    0, 0, 0, 255, //
    10, 10, 10, 255, //
    255, 255, 255, 255,
];

/// A deterministic noise buffer with channels restricted to multiples of 32,
/// so neighboring colors actually fall within reachable merge distances.
fn noise_rgba(width: u32, height: u32, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..width as usize * height as usize)
        .flat_map(|_| {
            [
                rng.gen_range(0..8u8) * 32,
                rng.gen_range(0..8u8) * 32,
                rng.gen_range(0..8u8) * 32,
                rng.gen(),
            ]
        })
        .collect()
}

#[test]
fn grouped_scenario() {
    let entries = analyze_colors(&PIXELS_2X2, 2, 2, 20.0).unwrap();

    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].hex, "#000000");
    assert_eq!(entries[0].rgb, "rgb(0, 0, 0)");
    assert_eq!(entries[0].count, 3);
    assert_eq!(entries[0].percentage, "75.00%");
    assert_eq!(entries[0].merged_colors, 1);

    assert_eq!(entries[1].hex, "#FFFFFF");
    assert_eq!(entries[1].count, 1);
    assert_eq!(entries[1].percentage, "25.00%");
    assert_eq!(entries[1].merged_colors, 0);
}

#[test]
fn ungrouped_scenario() {
    let entries = analyze_colors(&PIXELS_2X2, 2, 2, 0.0).unwrap();

    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].hex, "#000000");
    assert_eq!(entries[0].count, 2);
    assert_eq!(entries[0].percentage, "50.00%");

    // single-pixel colors tie on count and keep first-observed order
    assert_eq!(entries[1].hex, "#0A0A0A");
    assert_eq!(entries[1].percentage, "25.00%");
    assert_eq!(entries[2].hex, "#FFFFFF");
    assert_eq!(entries[2].percentage, "25.00%");

    assert!(entries.iter().all(|entry| entry.merged_colors == 0));
}

#[test]
fn counts_are_conserved() {
    for threshold in [0.0, 12.0, 33.0, 100.0] {
        let pixels = noise_rgba(48, 48, 7);
        let entries = analyze_colors(&pixels, 48, 48, threshold).unwrap();

        let total: u64 = entries.iter().map(|entry| entry.count as u64).sum();
        assert_eq!(total, 48 * 48);
    }
}

#[test]
fn zero_threshold_is_a_no_op() {
    let pixels = noise_rgba(32, 32, 11);
    let entries = analyze_colors(&pixels, 32, 32, 0.0).unwrap();

    let mut distinct: Vec<(u8, u8, u8)> = pixels
        .chunks_exact(4)
        .map(|px| (px[0], px[1], px[2]))
        .collect();
    distinct.sort_unstable();
    distinct.dedup();

    assert_eq!(entries.len(), distinct.len());
    assert!(entries.iter().all(|entry| entry.merged_colors == 0));
}

#[test]
fn raising_the_threshold_never_adds_groups() {
    // eight grays 32 apart, populations strictly decreasing with brightness,
    // so the count ranking follows the gray ramp. neighboring grays sit
    // 32 * sqrt(3) ~ 55.43 apart
    let mut pixels = Vec::new();
    for step in 0..8u32 {
        let gray = (step * 32) as u8;
        for _ in 0..(16 - step) {
            pixels.extend_from_slice(&[gray, gray, gray, 255]);
        }
    }
    let width = pixels.len() as u32 / 4;

    let mut previous = usize::MAX;
    for (threshold, expected) in [
        (0.0, 8),
        (10.0, 8),
        (56.0, 4),
        (111.0, 3),
        (167.0, 2),
        (388.0, 1),
    ] {
        let entries = analyze_colors(&pixels, width, 1, threshold).unwrap();

        assert_eq!(entries.len(), expected);
        assert!(entries.len() <= previous);
        previous = entries.len();
    }
}

#[test]
fn groups_partition_the_distinct_colors() {
    let pixels = noise_rgba(40, 40, 19);
    let distinct = analyze_colors(&pixels, 40, 40, 0.0).unwrap().len();

    for threshold in [5.0, 33.0, 96.0] {
        let entries = analyze_colors(&pixels, 40, 40, threshold).unwrap();

        let covered: usize = entries
            .iter()
            .map(|entry| 1 + entry.merged_colors as usize)
            .sum();
        assert_eq!(covered, distinct);
    }
}

#[test]
fn identical_inputs_give_identical_output() {
    let pixels = noise_rgba(64, 64, 23);

    let first = analyze_colors(&pixels, 64, 64, 25.0).unwrap();
    let second = analyze_colors(&pixels, 64, 64, 25.0).unwrap();

    assert_eq!(first, second);
}

#[test]
fn empty_image_yields_empty_palette() {
    assert!(analyze_colors(&[], 0, 0, 10.0).unwrap().is_empty());
    assert!(analyze_colors(&[], 0, 17, 10.0).unwrap().is_empty());
}

#[test]
fn invalid_inputs_are_rejected() {
    assert_eq!(
        analyze_colors(&PIXELS_2X2, 2, 2, -1.0),
        Err(AnalyzeError::InvalidThreshold(-1.0))
    );
    assert!(matches!(
        analyze_colors(&PIXELS_2X2, 2, 2, f64::NAN),
        Err(AnalyzeError::InvalidThreshold(_))
    ));
    assert_eq!(
        analyze_colors(&[0, 0, 0, 255, 1, 1], 2, 1, 0.0),
        Err(AnalyzeError::RaggedPixelBuffer(6))
    );
    assert_eq!(
        analyze_colors(&PIXELS_2X2, 3, 2, 0.0),
        Err(AnalyzeError::DimensionMismatch {
            actual: 16,
            expected: 24,
            width: 3,
            height: 2,
        })
    );
}

#[test]
fn builder_matches_raw_buffer_analysis() {
    let pixels = noise_rgba(24, 24, 5);
    let image = image::RgbaImage::from_raw(24, 24, pixels.clone()).unwrap();

    let palette = Palette::from_image(image).threshold(20.0).generate().unwrap();
    let entries = analyze_colors(&pixels, 24, 24, 20.0).unwrap();

    assert_eq!(palette.entries(), entries.as_slice());
    assert_eq!(palette.total_pixels(), 24 * 24);
    assert_eq!(palette.distinct_colors(), analyze_colors(&pixels, 24, 24, 0.0).unwrap().len());
}

#[test]
fn builder_accepts_images_without_alpha() {
    let image = image::RgbImage::from_fn(2, 2, |x, _| {
        if x == 0 {
            image::Rgb([0, 0, 0])
        } else {
            image::Rgb([255, 255, 255])
        }
    });

    let palette = Palette::from_image(image).generate().unwrap();

    assert_eq!(palette.entries().len(), 2);
    assert_eq!(palette.dominant_color(), Some((0, 0, 0)));
    assert_eq!(palette.entries()[0].percentage, "50.00%");
}
