use tsudoi_client::api::Error;
use wasm_bindgen_futures::JsFuture;

/// Reads a locally selected file into a `data:<mime>;base64,...` URL.
///
/// Suspends until the browser hands over the bytes; an unreadable file
/// resolves to `AttachmentUnreadable` so the composer can surface a
/// recoverable failure instead of staying silently stuck.
pub async fn read_as_data_url(file: web_sys::File) -> Result<String, Error> {
    let buf = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| Error::AttachmentUnreadable(format!("{e:?}")))?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();
    Ok(format!(
        "data:{};base64,{}",
        file.type_(),
        base64::encode(&bytes)
    ))
}
