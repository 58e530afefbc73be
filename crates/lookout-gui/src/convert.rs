use lookout_core::session::LoadedImage;

/// Convert a decoded screenshot (RGBA8) to an egui ColorImage.
pub fn loaded_to_color_image(image: &LoadedImage) -> egui::ColorImage {
    let pixels = image
        .rgba
        .chunks_exact(4)
        .map(|px| egui::Color32::from_rgba_unmultiplied(px[0], px[1], px[2], px[3]))
        .collect();

    egui::ColorImage {
        size: [image.width, image.height],
        pixels,
        source_size: Default::default(),
    }
}
