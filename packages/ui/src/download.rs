//! Handing downloaded files to the user.
//!
//! - **Web**: a Blob object URL clicked through a temporary anchor, so the
//!   browser shows its usual save prompt.
//! - **Native**: written to the platform download directory.

/// How long the object URL outlives the click that starts the download.
pub const REVOKE_DELAY_MS: u32 = 60_000;

pub fn pdf_filename(id: &str) -> String {
    format!("deliverynote_{id}.pdf")
}

#[cfg(target_arch = "wasm32")]
pub fn save_bytes(filename: &str, bytes: &[u8]) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    fn js_err(err: wasm_bindgen::JsValue) -> String {
        format!("{err:?}")
    }

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no document body")?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor).map_err(js_err)?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    gloo_timers::callback::Timeout::new(REVOKE_DELAY_MS, move || {
        let _ = web_sys::Url::revoke_object_url(&url);
    })
    .forget();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_bytes(filename: &str, bytes: &[u8]) -> Result<(), String> {
    let dir = dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    save_bytes_in(&dir, filename, bytes).map(|_| ())
}

#[cfg(not(target_arch = "wasm32"))]
fn save_bytes_in(
    dir: &std::path::Path,
    filename: &str,
    bytes: &[u8],
) -> Result<std::path::PathBuf, String> {
    let path = dir.join(filename);
    std::fs::create_dir_all(dir).map_err(|e| format!("{}: {e}", dir.display()))?;
    std::fs::write(&path, bytes).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_filename() {
        assert_eq!(pdf_filename("65ab12"), "deliverynote_65ab12.pdf");
    }

    #[test]
    fn test_revoke_waits_past_the_click() {
        assert!(REVOKE_DELAY_MS >= 1_000);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_save_bytes_in_dir() {
        let dir = std::env::temp_dir().join(format!("bildy_download_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let path = save_bytes_in(&dir, &pdf_filename("n1"), b"%PDF-1.4").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4");
        assert!(path.ends_with("deliverynote_n1.pdf"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
