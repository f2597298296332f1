use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wayfinder_shared::error::LocateError;
use wayfinder_shared::geo::LatLng;

/// Ask the browser for the device position once.
///
/// Resolves to `Unsupported` when the platform has no geolocation at all and
/// to `Unavailable` on permission denial, timeout or any other failure.
pub async fn current_position() -> Result<LatLng, LocateError> {
    let navigator = web_sys::window()
        .ok_or(LocateError::Unsupported)?
        .navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false);
    if !supported {
        return Err(LocateError::Unsupported);
    }
    let geolocation = navigator
        .geolocation()
        .map_err(|_| LocateError::Unsupported)?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    let position: web_sys::Position = JsFuture::from(promise)
        .await
        .map_err(|e| LocateError::Unavailable(describe(&e)))?
        .unchecked_into();
    let coords = position.coords();
    Ok(LatLng::new(coords.latitude(), coords.longitude()))
}

fn describe(error: &JsValue) -> String {
    // Browsers name the class `GeolocationPositionError`, so no instanceof check
    let error: &web_sys::PositionError = error.unchecked_ref();
    match js_sys::Reflect::has(error, &JsValue::from_str("message")) {
        Ok(true) => error.message(),
        _ => format!("{:?}", error),
    }
}
