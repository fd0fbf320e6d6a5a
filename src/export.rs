use crate::error::WhiteboardResult;

/// Something that can save an exported file on the user's behalf
pub trait ExportSink {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> WhiteboardResult<()>;
}

/// Keeps exported files in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub files: Vec<(String, Vec<u8>)>,
}

impl ExportSink for MemorySink {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> WhiteboardResult<()> {
        self.files.push((file_name.to_owned(), bytes.to_vec()));
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::DirectorySink;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use super::ExportSink;
    use crate::error::WhiteboardResult;

    /// Writes exports into a directory, overwriting files of the same name
    #[derive(Debug, Clone)]
    pub struct DirectorySink {
        dir: PathBuf,
    }

    impl DirectorySink {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        /// The working directory the app was started from
        pub fn current_dir() -> Self {
            Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
        }
    }

    impl ExportSink for DirectorySink {
        fn save(&mut self, file_name: &str, bytes: &[u8]) -> WhiteboardResult<()> {
            std::fs::create_dir_all(&self.dir)?;
            let path = self.dir.join(file_name);
            std::fs::write(&path, bytes)?;
            log::info!("Saved {}", path.display());
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::BrowserDownload;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use super::ExportSink;
    use crate::error::{WhiteboardError, WhiteboardResult};

    /// Triggers a client-side download through a temporary object URL
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserDownload;

    /// How long the object URL outlives the click that started the download
    const REVOKE_DELAY_MS: i32 = 1_000;

    fn js_error(err: JsValue) -> WhiteboardError {
        WhiteboardError::Download(format!("{:?}", err))
    }

    impl ExportSink for BrowserDownload {
        fn save(&mut self, file_name: &str, bytes: &[u8]) -> WhiteboardResult<()> {
            let window = web_sys::window().ok_or_else(|| WhiteboardError::Download("no window".to_owned()))?;
            let document = window
                .document()
                .ok_or_else(|| WhiteboardError::Download("no document".to_owned()))?;

            let parts = js_sys::Array::new();
            parts.push(&js_sys::Uint8Array::from(bytes));
            let options = web_sys::BlobPropertyBag::new();
            options.set_type("image/png");
            let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
                .map_err(js_error)?;
            let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

            let anchor = document
                .create_element("a")
                .map_err(js_error)?
                .dyn_into::<web_sys::HtmlAnchorElement>()
                .map_err(|_| WhiteboardError::Download("not an anchor element".to_owned()))?;
            anchor.set_href(&url);
            anchor.set_download(file_name);
            anchor.click();

            // Revoking right away can cancel the download in some browsers
            let revoke_url = url.clone();
            let revoke = Closure::once_into_js(move || {
                web_sys::Url::revoke_object_url(&revoke_url).ok();
            });
            if let Err(err) =
                window.set_timeout_with_callback_and_timeout_and_arguments_0(revoke.unchecked_ref(), REVOKE_DELAY_MS)
            {
                log::warn!("Could not schedule object URL cleanup: {:?}", err);
                web_sys::Url::revoke_object_url(&url).ok();
            }
            Ok(())
        }
    }
}
