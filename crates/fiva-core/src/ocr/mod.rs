//! Text recognition capability.
//!
//! The pipeline only ever sees recognized text; the OCR engine behind
//! it is an injected collaborator. Implementations wrap whatever engine
//! is available (a local model, a service, a browser runtime) and
//! report hard failures through [`OcrError`] before the pipeline runs.

use crate::error::OcrError;

/// Progress report from a recognition run.
#[derive(Debug, Clone)]
pub struct RecognizeProgress {
    /// Engine-defined stage label, e.g. "recognizing text".
    pub stage: String,
    /// Completion ratio in `[0, 1]`.
    pub ratio: f32,
}

/// A recognizer that turns an image into raw text.
pub trait TextRecognizer {
    /// Recognize text in an encoded image, reporting progress along the
    /// way.
    fn recognize(
        &self,
        image: &[u8],
        progress: &mut dyn FnMut(RecognizeProgress),
    ) -> Result<String, OcrError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Canned recognizer for pipeline tests.
    struct FixedRecognizer(&'static str);

    impl TextRecognizer for FixedRecognizer {
        fn recognize(
            &self,
            _image: &[u8],
            progress: &mut dyn FnMut(RecognizeProgress),
        ) -> Result<String, OcrError> {
            progress(RecognizeProgress {
                stage: "recognizing text".to_string(),
                ratio: 1.0,
            });
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_recognizer_reports_progress_and_text() {
        let recognizer = FixedRecognizer("Total: 10,00");
        let mut stages = Vec::new();

        let text = recognizer
            .recognize(b"png bytes", &mut |p| stages.push(p.stage))
            .unwrap();

        assert_eq!(text, "Total: 10,00");
        assert_eq!(stages, vec!["recognizing text".to_string()]);
    }
}
