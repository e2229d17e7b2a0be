use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use image::imageops;

use crate::{
    animation::action::Action,
    foundation::error::{StickgenError, StickgenResult},
    output::metadata::{ActionMetadata, DEFAULT_SHEET_FPS, METADATA_FILE, SheetMetadata},
};

/// Outcome of a packing run over the configured action list.
#[derive(Clone, Debug, Default)]
pub struct PackSummary {
    pub completed: Vec<SheetMetadata>,
    pub skipped: Vec<Action>,
}

/// Pack one action's frame directory into `<output_root>/<action>_sprite.png`
/// plus its metadata descriptor.
///
/// Returns `Ok(None)`, after a warning and with no files written, when the
/// source directory is missing or holds no PNG frames; those are the only
/// recoverable conditions. Decode and write failures propagate.
///
/// `defaults` (typically the generator's record) contributes only `fps` and
/// `description`; every count/dimension field is measured from disk, so the
/// descriptor stays geometrically accurate even against stale defaults.
#[tracing::instrument(skip(defaults))]
pub fn pack_action(
    action: Action,
    assets_root: &Path,
    output_root: &Path,
    defaults: Option<&ActionMetadata>,
) -> StickgenResult<Option<SheetMetadata>> {
    let action_dir = assets_root.join(action.name());
    if !action_dir.is_dir() {
        tracing::warn!(dir = %action_dir.display(), "skipping action: no frame directory");
        return Ok(None);
    }

    let paths = frame_paths(&action_dir)?;
    if paths.is_empty() {
        tracing::warn!(dir = %action_dir.display(), "skipping action: no frame images");
        return Ok(None);
    }

    let mut frames = Vec::with_capacity(paths.len());
    for path in &paths {
        let img = image::open(path)
            .map_err(|e| StickgenError::pack(format!("decode frame '{}': {e}", path.display())))?;
        frames.push(img.to_rgba8());
    }

    // The first frame fixes the cell size for the whole strip.
    let frame_width = frames[0].width();
    let frame_height = frames[0].height();
    let frame_count = frames.len() as u32;
    let sheet_width = frame_width * frame_count;

    let mut sheet = image::RgbaImage::new(sheet_width, frame_height);
    for (i, frame) in frames.iter().enumerate() {
        imageops::replace(&mut sheet, frame, i as i64 * i64::from(frame_width), 0);
    }

    fs::create_dir_all(output_root).map_err(|e| {
        StickgenError::pack(format!("create output dir '{}': {e}", output_root.display()))
    })?;
    let sheet_path = output_root.join(format!("{}_sprite.png", action.name()));
    image::save_buffer_with_format(
        &sheet_path,
        sheet.as_raw(),
        sheet_width,
        frame_height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| StickgenError::pack(format!("write sheet '{}': {e}", sheet_path.display())))?;

    let meta = SheetMetadata {
        action: action.name().to_string(),
        frame_count,
        frame_width,
        frame_height,
        sheet_width,
        sheet_height: frame_height,
        fps: defaults.map_or(DEFAULT_SHEET_FPS, |d| d.fps),
        description: defaults.and_then(|d| d.description.clone()),
    };
    let json = serde_json::to_string_pretty(&meta)
        .map_err(|e| StickgenError::serde(format!("encode sheet metadata: {e}")))?;
    let json_path = output_root.join(format!("{}_sprite.json", action.name()));
    fs::write(&json_path, json)
        .map_err(|e| StickgenError::pack(format!("write '{}': {e}", json_path.display())))?;

    tracing::debug!(frames = frame_count, sheet_width, "wrote sprite sheet");
    Ok(Some(meta))
}

/// Run the packing stage over the full action catalog, reading the
/// generator's `metadata.json` for defaults when present.
///
/// Skipped actions never abort the run; the summary reports who made it.
pub fn pack_all(assets_root: &Path, output_root: &Path) -> StickgenResult<PackSummary> {
    let defaults = read_generator_metadata(assets_root)?;

    let mut summary = PackSummary::default();
    for action in Action::ALL {
        match pack_action(action, assets_root, output_root, defaults.get(action.name()))? {
            Some(meta) => summary.completed.push(meta),
            None => summary.skipped.push(action),
        }
    }

    tracing::info!(
        completed = summary.completed.len(),
        skipped = summary.skipped.len(),
        "packing stage complete"
    );
    Ok(summary)
}

fn read_generator_metadata(assets_root: &Path) -> StickgenResult<BTreeMap<String, ActionMetadata>> {
    let path = assets_root.join(METADATA_FILE);
    if !path.is_file() {
        return Ok(BTreeMap::new());
    }
    let bytes = fs::read(&path)
        .map_err(|e| StickgenError::pack(format!("read '{}': {e}", path.display())))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| StickgenError::serde(format!("parse '{}': {e}", path.display())))
}

/// All PNG frames in `action_dir`, lexicographically sorted. Zero-padded
/// frame numbers make this the playback order.
fn frame_paths(action_dir: &Path) -> StickgenResult<Vec<PathBuf>> {
    let entries = fs::read_dir(action_dir)
        .map_err(|e| StickgenError::pack(format!("read dir '{}': {e}", action_dir.display())))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| StickgenError::pack(format!("read dir '{}': {e}", action_dir.display())))?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("png") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
#[path = "../../tests/unit/output/sheet.rs"]
mod tests;
