use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use business::domain::product::errors::LookupError;

/// Decodes an uploaded image, tolerating a `data:image/...;base64,` prefix
/// and embedded whitespace.
pub fn decode_image_base64(raw: &str) -> Result<Vec<u8>, LookupError> {
    let stripped = regex::Regex::new(r"^data:image/[a-zA-Z0-9.+-]+;base64,")
        .map(|re| re.replace(raw.trim_start(), "").to_string())
        .unwrap_or_else(|_| raw.to_string());
    let clean: String = stripped.chars().filter(|c| !c.is_whitespace()).collect();

    if clean.is_empty() {
        return Err(LookupError::ImageEmpty);
    }

    STANDARD
        .decode(clean)
        .map_err(|_| LookupError::ImageInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_plain_base64() {
        let bytes = decode_image_base64("iVBORw==").unwrap();

        assert_eq!(bytes, b"\x89PNG");
    }

    #[test]
    fn should_strip_data_url_prefix_and_whitespace() {
        let bytes = decode_image_base64("data:image/png;base64,iVBO\nRw==").unwrap();

        assert_eq!(bytes, b"\x89PNG");
    }

    #[test]
    fn should_reject_empty_payload() {
        let result = decode_image_base64("data:image/jpeg;base64,");

        assert!(matches!(result.unwrap_err(), LookupError::ImageEmpty));
    }

    #[test]
    fn should_reject_invalid_base64() {
        let result = decode_image_base64("not base64!");

        assert!(matches!(result.unwrap_err(), LookupError::ImageInvalid));
    }
}
