use super::*;

#[test]
fn sniff_detects_png_jpeg_gif_webp() {
    assert_eq!(sniff_image_mime(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A]), "image/png");
    assert_eq!(sniff_image_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
    assert_eq!(sniff_image_mime(b"GIF89a"), "image/gif");
    assert_eq!(sniff_image_mime(b"RIFF\x00\x00\x00\x00WEBPVP8 "), "image/webp");
}

#[test]
fn sniff_defaults_to_png_for_unknown_or_short_input() {
    assert_eq!(sniff_image_mime(&[]), "image/png");
    assert_eq!(sniff_image_mime(&[0x00, 0x01]), "image/png");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_bytes_fails_outside_browser() {
    assert!(ObjectUrl::from_bytes(&[1, 2, 3], "image/png").is_err());
}
