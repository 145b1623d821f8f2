use bcpool_std::err::{AmountErr, INVALID_AMOUNT_MSG};
use wasm_bindgen::{intern, JsError};

pub(crate) fn no_valid_pda_err() -> JsError {
    JsError::new(intern("no valid PDA found"))
}

/// All amount errs are shown to the user the same way
pub(crate) fn amount_err(_e: AmountErr) -> JsError {
    JsError::new(intern(INVALID_AMOUNT_MSG))
}
