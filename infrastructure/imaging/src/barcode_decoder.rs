use std::collections::{HashMap, HashSet};
use std::panic::{AssertUnwindSafe, catch_unwind};

use rxing::helpers::detect_multiple_in_luma_with_hints;
use rxing::{BarcodeFormat, DecodeHintType, DecodeHintValue, Exceptions};

use business::domain::errors::BarcodeError;
use business::domain::product::services::BarcodeDecoderService;
use business::domain::product::value_objects::LumaBuffer;

/// Symbologies printed on retail food packaging.
const PRODUCT_FORMATS: [BarcodeFormat; 6] = [
    BarcodeFormat::EAN_13,
    BarcodeFormat::EAN_8,
    BarcodeFormat::UPC_A,
    BarcodeFormat::UPC_E,
    BarcodeFormat::CODE_128,
    BarcodeFormat::QR_CODE,
];

/// Barcode decoder backed by `rxing`, restricted to product symbologies.
///
/// The 2D detectors outside this set (MaxiCode in particular) panic or never
/// return on narrow images, so they are never enabled.
pub struct BarcodeDecoderRxing;

impl BarcodeDecoderService for BarcodeDecoderRxing {
    fn decode(&self, image: &LumaBuffer) -> Result<Vec<Vec<u8>>, BarcodeError> {
        let mut hints = HashMap::from([(
            DecodeHintType::POSSIBLE_FORMATS,
            DecodeHintValue::PossibleFormats(HashSet::from(PRODUCT_FORMATS)),
        )]);

        let detected = catch_unwind(AssertUnwindSafe(|| {
            detect_multiple_in_luma_with_hints(
                image.as_bytes().to_vec(),
                image.width(),
                image.height(),
                &mut hints,
            )
        }))
        .map_err(|_| BarcodeError::Decoder("decoder panicked".to_string()))?;

        match detected {
            Ok(results) => Ok(results
                .iter()
                .map(|r| r.getText().as_bytes().to_vec())
                .collect()),
            Err(Exceptions::NotFoundException(..)) => Ok(Vec::new()),
            Err(err) => Err(BarcodeError::Decoder(err.to_string())),
        }
    }
}
