use crate::QrStyle;

/// Public link to a wedding page. Prefers the short share ID and falls back
/// to the wedding ID for records created before share IDs existed.
pub fn share_url(origin: &str, shareable_id: Option<&str>, wedding_id: &str) -> String {
    let origin = origin.trim_end_matches('/');

    match shareable_id.filter(|id| !id.is_empty()) {
        Some(id) => format!("{}/share/{}", origin, id),
        None => format!("{}/wedding/{}", origin, wedding_id),
    }
}

/// `wedding-qr-{style}-{name1}-{name2}-{millis}.png` with lowercased names,
/// substituting `wedding` and `card` for missing names
pub fn download_filename(style: QrStyle, name_1: &str, name_2: &str, millis: i64) -> String {
    let name_1 = lowercase_or(name_1, "wedding");
    let name_2 = lowercase_or(name_2, "card");

    format!("wedding-qr-{}-{}-{}-{}.png", style, name_1, name_2, millis)
}

/// Downloads are upscaled 2x from the preview
pub fn download_dimensions(width: u32, height: u32) -> (u32, u32) {
    (width.saturating_mul(2), height.saturating_mul(2))
}

fn lowercase_or(name: &str, fallback: &str) -> String {
    if name.is_empty() {
        fallback.to_string()
    } else {
        name.to_lowercase()
    }
}
