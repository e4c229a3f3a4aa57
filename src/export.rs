use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::{PaintError, Result};

/// Writes canvas snapshots as PNG files: to disk natively, as a download on the web.
#[derive(Debug, Clone)]
pub struct Exporter {
    directory: PathBuf,
    file_stem: String,
}

impl Exporter {
    pub fn new(directory: impl Into<PathBuf>, file_stem: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_stem: file_stem.into(),
        }
    }

    /// Where the next export will be written.
    pub fn target_path(&self) -> PathBuf {
        self.directory.join(format!("{}.png", self.file_stem))
    }

    /// Save `pixels` to [`Exporter::target_path`], replacing any previous export.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, pixels: &RgbaImage) -> Result<PathBuf> {
        let path = self.target_path();
        if !self.directory.as_os_str().is_empty() {
            std::fs::create_dir_all(&self.directory)?;
        }
        write_png(pixels, &path)?;
        log::info!("Saved painting to {}", path.display());
        Ok(path)
    }

    /// Offer `pixels` to the browser as a `<file_stem>.png` download.
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self, pixels: &RgbaImage) -> Result<PathBuf> {
        let file_name = format!("{}.png", self.file_stem);
        let bytes = encode_png(pixels)?;
        download(&bytes, &file_name)?;
        log::info!("Downloaded painting as {}", file_name);
        Ok(PathBuf::from(file_name))
    }
}

/// Encode `pixels` as PNG in memory.
pub fn encode_png(pixels: &RgbaImage) -> Result<Vec<u8>> {
    if pixels.width() == 0 || pixels.height() == 0 {
        return Err(PaintError::EmptyCanvas);
    }
    let mut bytes = Vec::new();
    pixels.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encode `pixels` as PNG at `path`.
pub fn write_png(pixels: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_png(pixels)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn download(bytes: &[u8], file_name: &str) -> Result<()> {
    use eframe::wasm_bindgen::{JsCast as _, JsValue};
    use web_sys::js_sys::{Array, Uint8Array};

    let js_err = |err: JsValue| PaintError::Download(format!("{err:?}"));

    let parts = Array::of1(&Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| PaintError::Download("no document to attach the download to".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| PaintError::Download("<a> is not an anchor element".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)
}
