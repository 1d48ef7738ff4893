use base64::{
    alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
    Engine,
};

/// Standard padded alphabet that tolerates non-zero trailing bits, as the
/// framework's own decoder does.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decodes `value` when it is valid standard base64, otherwise returns it as-is.
///
/// Line breaks are ignored while decoding, so wrapped output of `base64 file`
/// is accepted. Plain text that happens to be valid base64 gets decoded too.
/// Callers rely on this, so it stays.
pub(crate) fn string_support_base64(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let unwrapped: String = value.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();

    match LENIENT_STANDARD.decode(unwrapped) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => value.to_string(),
    }
}
