use contracts::usecases::u102_ask_question::{ChatResponse, CHAT_PATH, FIELD_IMAGE};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use super::attachment::ImageAttachment;
use super::submission::ChatSubmission;
use crate::shared::api_utils::{api_url, form_data, read_response};
use crate::shared::error::ChatError;

/// POST a question and/or image as multipart form
pub async fn ask(base_url: &str, submission: &ChatSubmission) -> Result<ChatResponse, ChatError> {
    let form = form_data(&submission.text_fields())?;
    if let Some(image) = &submission.image {
        append_image(&form, image)?;
    }

    let response = Request::post(&api_url(base_url, CHAT_PATH))
        .body(form)
        .map_err(|e| ChatError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ChatError::Transport(e.to_string()))?;
    read_response(response).await
}

fn append_image(form: &FormData, image: &ImageAttachment) -> Result<(), ChatError> {
    let to_err = |e: JsValue| ChatError::File(format!("{:?}", e));

    let bytes = js_sys::Uint8Array::from(image.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&image.mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(to_err)?;

    form.append_with_blob_and_filename(FIELD_IMAGE, &blob, &image.name)
        .map_err(to_err)
}
