//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

// Square viewBox, three bars inside a speech bubble (window/taskbar icon)
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256"><path fill="#18181b" stroke="#2dd4bf" stroke-width="10" d="M40 28h176c12 0 20 8 20 20v120c0 12-8 20-20 20H112l-48 44v-44H40c-12 0-20-8-20-20V48c0-12 8-20 20-20z"/><rect x="64" y="100" width="32" height="60" rx="4" fill="#34d399"/><rect x="112" y="72" width="32" height="88" rx="4" fill="#a1a1aa"/><rect x="160" y="124" width="32" height="36" rx="4" fill="#f87171"/></svg>"##;

/// Rasterize the icon SVG to a square RGBA image (for window/taskbar icons).
/// Returns `None` if the SVG cannot be parsed or the size is zero.
pub fn rasterize_icon_square(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Per-user data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Format a proportion score (pos/neu/neg) with three decimals
pub fn format_proportion(value: f64) -> String {
    format!("{:.3}", value)
}

/// Format a compound score with an explicit sign and four decimals
pub fn format_compound(value: f64) -> String {
    format!("{:+.4}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_scores() {
        assert_eq!(format_proportion(0.5), "0.500");
        assert_eq!(format_proportion(0.1234), "0.123");
        assert_eq!(format_compound(0.6249), "+0.6249");
        assert_eq!(format_compound(-0.05), "-0.0500");
        assert_eq!(format_compound(0.0), "+0.0000");
    }

    #[test]
    fn icon_rasterizes_to_requested_size() {
        let (rgba, w, h) = rasterize_icon_square(64).unwrap();
        assert_eq!((w, h), (64, 64));
        assert_eq!(rgba.len(), 64 * 64 * 4);
        assert!(rgba.chunks(4).any(|px| px[3] > 0));
    }

    #[test]
    fn zero_size_icon_is_none() {
        assert!(rasterize_icon_square(0).is_none());
    }

    #[test]
    fn data_dir_ends_with_app_name() {
        assert!(get_data_dir().ends_with(APP_NAME));
    }
}
