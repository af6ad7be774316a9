// Iconsmith - app/build.rs
//
// The icon build step: read the SVG, render every container size, write the
// ICO, render the reference size, write the PNG. Strictly sequential.
//
// Progress is reported through a caller-supplied callback so the binary can
// print console lines and tests can record the event stream.

use crate::core::container;
use crate::core::model::{BuildPlan, BuildProgress, BuildReport, RasterImage};
use crate::core::raster::Rasterizer;
use crate::core::reference;
use crate::platform::fs;
use crate::util::error::Result;

/// Run the full build described by `plan`.
///
/// Stops at the first failure. An ICO written before a later failure is left
/// on disk; the returned error names the step that failed.
pub fn run_build<R, F>(
    plan: &BuildPlan,
    rasterizer: &R,
    mut on_progress: F,
) -> Result<BuildReport>
where
    R: Rasterizer,
    F: FnMut(BuildProgress),
{
    rasterizer.check_available()?;
    plan.validate()?;

    tracing::info!(
        source = %plan.source_path.display(),
        sizes = ?plan.sizes.as_slice(),
        reference_size = plan.reference_size,
        "Icon build starting"
    );
    on_progress(BuildProgress::Started {
        source: plan.source_path.clone(),
    });

    let svg = fs::read_source(&plan.source_path)?;
    let doc = rasterizer.load(&svg, &plan.source_path)?;
    drop(svg);

    let (width, height) = rasterizer.intrinsic_size(&doc);
    tracing::debug!(width, height, "SVG intrinsic size");
    on_progress(BuildProgress::SourceLoaded { width, height });

    // --- Container ---
    let ico_bytes = {
        let mut frames: Vec<RasterImage> = Vec::with_capacity(plan.sizes.len());
        for &size in plan.sizes.as_slice() {
            frames.push(rasterizer.render(&doc, size)?);
            on_progress(BuildProgress::SizeRendered { size });
        }
        container::encode_ico(&frames, &plan.ico_path)?
    };
    fs::write_output(&plan.ico_path, &ico_bytes)?;
    tracing::info!(
        path = %plan.ico_path.display(),
        bytes = ico_bytes.len(),
        "ICO written"
    );
    on_progress(BuildProgress::ContainerWritten {
        path: plan.ico_path.clone(),
        sizes: plan.sizes.as_slice().to_vec(),
    });

    // --- Reference bitmap ---
    let png_bytes = {
        let raster = rasterizer.render(&doc, plan.reference_size)?;
        reference::encode_png(&raster, &plan.png_path)?
    };
    fs::write_output(&plan.png_path, &png_bytes)?;
    tracing::info!(
        path = %plan.png_path.display(),
        size = plan.reference_size,
        bytes = png_bytes.len(),
        "Reference PNG written"
    );
    on_progress(BuildProgress::ReferenceWritten {
        path: plan.png_path.clone(),
        size: plan.reference_size,
    });

    Ok(BuildReport {
        ico_path: plan.ico_path.clone(),
        ico_sizes: plan.sizes.as_slice().to_vec(),
        ico_bytes: ico_bytes.len(),
        png_path: plan.png_path.clone(),
        png_size: plan.reference_size,
        png_bytes: png_bytes.len(),
    })
}
