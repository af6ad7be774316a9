// Iconsmith - core/raster.rs
//
// SVG rasterisation behind a small trait so the build step does not care
// whether rendering support was compiled in.
//
// With the `render` feature, `ResvgRasterizer` parses via usvg and draws with
// resvg onto a tiny-skia pixmap. Without it, `MissingRasterizer` reports
// `CapabilityUnavailable` on first use.

use crate::core::model::RasterImage;
use crate::util::error::{IconError, Result};
use std::path::Path;

/// Turns an SVG document into square bitmaps.
pub trait Rasterizer {
    /// Parsed, render-ready form of a document.
    type Document;

    /// Fail early when this rasteriser cannot run at all.
    fn check_available(&self) -> Result<()> {
        Ok(())
    }

    /// Parse `svg`. `origin` is the file it came from, used to resolve
    /// relative references and for error messages.
    fn load(&self, svg: &str, origin: &Path) -> Result<Self::Document>;

    /// Intrinsic width and height of the document in user units.
    fn intrinsic_size(&self, doc: &Self::Document) -> (f32, f32);

    /// Render `doc` stretched to exactly `size` x `size` pixels.
    fn render(&self, doc: &Self::Document, size: u32) -> Result<RasterImage>;
}

/// The rasteriser selected by the crate's feature set.
#[cfg(feature = "render")]
pub type DefaultRasterizer = ResvgRasterizer;

/// The rasteriser selected by the crate's feature set.
#[cfg(not(feature = "render"))]
pub type DefaultRasterizer = MissingRasterizer;

// =============================================================================
// Missing capability
// =============================================================================

/// Stand-in used when the binary was built without rendering support.
#[derive(Debug, Default, Clone, Copy)]
pub struct MissingRasterizer;

impl MissingRasterizer {
    fn unavailable() -> IconError {
        IconError::CapabilityUnavailable {
            capability: "SVG rendering",
            feature: "render",
        }
    }
}

impl Rasterizer for MissingRasterizer {
    type Document = ();

    fn check_available(&self) -> Result<()> {
        Err(Self::unavailable())
    }

    fn load(&self, _svg: &str, _origin: &Path) -> Result<()> {
        Err(Self::unavailable())
    }

    fn intrinsic_size(&self, _doc: &()) -> (f32, f32) {
        (0.0, 0.0)
    }

    fn render(&self, _doc: &(), _size: u32) -> Result<RasterImage> {
        Err(Self::unavailable())
    }
}

// =============================================================================
// resvg
// =============================================================================

#[cfg(feature = "render")]
pub use self::resvg_impl::ResvgRasterizer;

#[cfg(feature = "render")]
mod resvg_impl {
    use super::Rasterizer;
    use crate::core::model::RasterImage;
    use crate::util::error::{IconError, Result};
    use resvg::{tiny_skia, usvg};
    use std::path::Path;
    use std::sync::Arc;

    /// resvg-backed rasteriser.
    #[derive(Debug, Clone)]
    pub struct ResvgRasterizer {
        /// Load system fonts so `<text>` elements render. Off in tests,
        /// where the fixtures contain no text and font scanning is slow.
        pub load_system_fonts: bool,
    }

    impl Default for ResvgRasterizer {
        fn default() -> Self {
            Self {
                load_system_fonts: true,
            }
        }
    }

    impl ResvgRasterizer {
        /// A rasteriser that skips system font discovery.
        pub fn without_fonts() -> Self {
            Self {
                load_system_fonts: false,
            }
        }
    }

    impl Rasterizer for ResvgRasterizer {
        type Document = usvg::Tree;

        fn load(&self, svg: &str, origin: &Path) -> Result<usvg::Tree> {
            // usvg 0.44: fontdb lives inside Options as an Arc<Database>.
            let mut opt = usvg::Options {
                resources_dir: origin.parent().map(Path::to_path_buf),
                ..usvg::Options::default()
            };
            if self.load_system_fonts {
                Arc::make_mut(&mut opt.fontdb).load_system_fonts();
            }

            let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| IconError::SourceParse {
                path: origin.to_path_buf(),
                reason: e.to_string(),
            })?;

            tracing::debug!(
                path = %origin.display(),
                width = tree.size().width(),
                height = tree.size().height(),
                "SVG parsed"
            );
            Ok(tree)
        }

        fn intrinsic_size(&self, doc: &usvg::Tree) -> (f32, f32) {
            (doc.size().width(), doc.size().height())
        }

        fn render(&self, doc: &usvg::Tree, size: u32) -> Result<RasterImage> {
            let mut pixmap =
                tiny_skia::Pixmap::new(size, size).ok_or_else(|| IconError::Rasterize {
                    size,
                    reason: "cannot allocate pixmap".to_string(),
                })?;

            let (svg_w, svg_h) = self.intrinsic_size(doc);
            let transform =
                tiny_skia::Transform::from_scale(size as f32 / svg_w, size as f32 / svg_h);
            resvg::render(doc, transform, &mut pixmap.as_mut());

            // tiny-skia stores premultiplied alpha; encoders expect straight alpha.
            let mut rgba = Vec::with_capacity(RasterImage::expected_len(size));
            for px in pixmap.pixels() {
                let c = px.demultiply();
                rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
            }

            tracing::trace!(size, "Rendered raster");
            Ok(RasterImage { size, rgba })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::error::ErrorTier;

    #[test]
    fn missing_rasterizer_reports_capability() {
        let r = MissingRasterizer;
        assert!(r.check_available().is_err());
        let err = r.load("<svg/>", Path::new("icon.svg")).unwrap_err();
        assert_eq!(err.tier(), ErrorTier::EnvironmentUnavailable);
        assert!(r.render(&(), 16).is_err());
    }

    #[cfg(feature = "render")]
    mod resvg_tests {
        use super::super::*;

        const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
            <rect x="0" y="0" width="10" height="10" fill="#ff0000"/>
        </svg>"##;

        const WIDE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50">
            <rect x="0" y="0" width="50" height="50" fill="#0000ff"/>
        </svg>"##;

        #[test]
        fn renders_exact_size_opaque_fill() {
            let r = ResvgRasterizer::without_fonts();
            let doc = r.load(SQUARE, Path::new("square.svg")).unwrap();
            let img = r.render(&doc, 32).unwrap();
            assert_eq!(img.size, 32);
            assert_eq!(img.rgba.len(), RasterImage::expected_len(32));
            assert_eq!(img.pixel(16, 16), Some([255, 0, 0, 255]));
        }

        #[test]
        fn non_square_source_is_stretched_to_square() {
            let r = ResvgRasterizer::without_fonts();
            let doc = r.load(WIDE, Path::new("wide.svg")).unwrap();
            assert_eq!(r.intrinsic_size(&doc), (100.0, 50.0));
            let img = r.render(&doc, 64).unwrap();
            assert_eq!(img.size, 64);
            // Left half blue, right half empty.
            assert_eq!(img.pixel(10, 32), Some([0, 0, 255, 255]));
            assert_eq!(img.pixel(54, 32).map(|p| p[3]), Some(0));
        }

        #[test]
        fn malformed_markup_is_a_parse_error() {
            let r = ResvgRasterizer::without_fonts();
            let err = r.load("<svg", Path::new("broken.svg")).unwrap_err();
            assert!(matches!(err, IconError::SourceParse { .. }), "got {err:?}");
        }

        #[test]
        fn zero_size_is_a_rasterize_error() {
            let r = ResvgRasterizer::without_fonts();
            let doc = r.load(SQUARE, Path::new("square.svg")).unwrap();
            let err = r.render(&doc, 0).unwrap_err();
            assert!(matches!(err, IconError::Rasterize { size: 0, .. }), "got {err:?}");
        }
    }
}
