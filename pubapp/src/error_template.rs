use http::status::StatusCode;
use leptos::{logging::log, prelude::*};

use crate::error::AppError;

#[component]
pub fn ErrorTemplate(error: AppError) -> impl IntoView {
    log!("Error: {error:?}");
    let error_code = error.status_code();
    let error_string = (error_code == StatusCode::INTERNAL_SERVER_ERROR)
        .then(|| format!("Error: {error}"));
    view! {
        <h1>{error_code.to_string()}</h1>
        <p>{error_string}</p>
    }
}
