use wardrobe_domain::{ImageSequence, Outfit};

pub fn present_catalog(sequence: &ImageSequence) -> Vec<String> {
    sequence
        .images()
        .iter()
        .enumerate()
        .map(|(index, image)| format!("{}\t{}\t{}", sequence.category().label(), index, image))
        .collect()
}

pub fn present_outfit(outfit: &Outfit) -> String {
    format!("outfit: top={} bottom={}", outfit.top, outfit.bottom)
}
