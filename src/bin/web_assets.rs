//! Writes the web app manifest and the offline precache list into the
//! directory given as the first argument, `dist` by default.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), whiteboard::WhiteboardError> {
    use whiteboard::export::DirectorySink;
    use whiteboard::manifest::AppManifest;
    use whiteboard::precache::PrecacheManifest;

    env_logger::init();

    let dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| "dist".into(), std::path::PathBuf::from);
    let mut sink = DirectorySink::new(dir);
    whiteboard::web_assets::write_web_assets(&mut sink, &AppManifest::default(), &PrecacheManifest::default())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
