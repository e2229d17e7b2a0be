use std::{collections::BTreeMap, fs, path::Path};

use crate::{
    animation::{action::Action, pose::Figure},
    foundation::core::{FrameIndex, FrameSize},
    foundation::error::{StickgenError, StickgenResult},
    output::metadata::{ActionMetadata, METADATA_FILE},
    render::figure::{Palette, Renderer},
};

/// Render every frame of `action` into `<assets_root>/<action>/frame_<NN>.png`
/// and return the action's metadata record.
///
/// Frame numbers are 1-based and zero-padded to two digits so lexicographic
/// filename order is playback order. Any I/O or encode failure propagates
/// immediately; the generation stage has no partial-completion story.
#[tracing::instrument(skip(figure, renderer))]
pub fn write_action_frames(
    figure: &Figure,
    renderer: &mut Renderer,
    action: Action,
    assets_root: &Path,
) -> StickgenResult<ActionMetadata> {
    let config = action.config();
    let action_dir = assets_root.join(action.name());
    fs::create_dir_all(&action_dir).map_err(|e| {
        StickgenError::render(format!("create action dir '{}': {e}", action_dir.display()))
    })?;

    for i in 0..config.frames {
        let pose = figure.pose(action, i, config.frames);
        let frame = renderer.render(&pose, FrameIndex(i))?;
        let path = action_dir.join(format!("frame_{:02}.png", i + 1));
        image::save_buffer_with_format(
            &path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| StickgenError::render(format!("write frame '{}': {e}", path.display())))?;
    }
    tracing::debug!(frames = config.frames, fps = config.fps, "wrote frame sequence");

    let size = renderer.frame_size();
    Ok(ActionMetadata {
        action: action.name().to_string(),
        frame_count: config.frames,
        frame_width: size.width,
        frame_height: size.height,
        fps: config.fps,
        description: Some(config.description.to_string()),
    })
}

/// Run the generation stage over the full action catalog, writing every
/// frame sequence plus the combined `metadata.json` under `assets_root`.
///
/// The metadata map is keyed by action name and emitted in sorted-key order
/// so reruns are byte-identical.
pub fn generate_all(
    assets_root: &Path,
    size: FrameSize,
    palette: Palette,
) -> StickgenResult<BTreeMap<String, ActionMetadata>> {
    let figure = Figure::new(size);
    let mut renderer = Renderer::new(size, palette);

    let mut all = BTreeMap::new();
    for action in Action::ALL {
        let meta = write_action_frames(&figure, &mut renderer, action, assets_root)?;
        all.insert(action.name().to_string(), meta);
    }

    let json = serde_json::to_string_pretty(&all)
        .map_err(|e| StickgenError::serde(format!("encode metadata map: {e}")))?;
    let path = assets_root.join(METADATA_FILE);
    fs::write(&path, json)
        .map_err(|e| StickgenError::render(format!("write '{}': {e}", path.display())))?;

    tracing::info!(
        actions = all.len(),
        root = %assets_root.display(),
        "generation stage complete"
    );
    Ok(all)
}
