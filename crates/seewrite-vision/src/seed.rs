use seewrite_core::truncate_with_ellipsis;

/// Labels below this confidence are dropped
pub const MIN_CONFIDENCE: f32 = 70.0;
/// Maximum labels kept in a seed
pub const MAX_LABELS: usize = 10;
/// Labels named in the seed description
pub const SUMMARY_LABELS: usize = 5;
/// Characters of extracted text kept in a seed
pub const MAX_TEXT_CHARS: usize = 200;
/// Seed description when neither labels nor text were found
pub const EMPTY_SEED_DESCRIPTION: &str = "An educational image or diagram";

/// A labeled object with confidence in `[0, 100]`
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedObject {
    pub name: String,
    pub confidence: f32,
}

impl DetectedObject {
    pub fn new(name: impl Into<String>, confidence: f32) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// Raw visual signals for one image, already filtered and capped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualSignalSeed {
    objects: Vec<DetectedObject>,
    extracted_text: String,
}

impl VisualSignalSeed {
    /// Build a seed from detector output
    ///
    /// Keeps labels with confidence of at least [`MIN_CONFIDENCE`], ranked by
    /// confidence with ties left in detector order, capped at [`MAX_LABELS`].
    /// Text is cut to [`MAX_TEXT_CHARS`] characters.
    pub fn new(objects: Vec<DetectedObject>, extracted_text: &str) -> Self {
        let mut objects: Vec<DetectedObject> = objects
            .into_iter()
            .filter(|object| object.confidence >= MIN_CONFIDENCE)
            .collect();

        // stable: equal confidences keep detector order
        objects.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        objects.truncate(MAX_LABELS);

        Self {
            objects,
            extracted_text: truncate_with_ellipsis(extracted_text, MAX_TEXT_CHARS).into_owned(),
        }
    }

    pub fn objects(&self) -> &[DetectedObject] {
        &self.objects
    }

    pub fn extracted_text(&self) -> &str {
        &self.extracted_text
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.extracted_text.is_empty()
    }

    /// Fold the seed into a single sentence for the model prompt
    pub fn describe(&self) -> String {
        let mut clauses = Vec::with_capacity(2);

        if !self.objects.is_empty() {
            let names: Vec<&str> = self
                .objects
                .iter()
                .take(SUMMARY_LABELS)
                .map(|object| object.name.as_str())
                .collect();
            clauses.push(format!("This image contains: {}", names.join(", ")));
        }

        if !self.extracted_text.is_empty() {
            clauses.push(format!("Text content includes: {}", self.extracted_text));
        }

        if clauses.is_empty() {
            return EMPTY_SEED_DESCRIPTION.to_owned();
        }

        clauses.join(". ")
    }
}
