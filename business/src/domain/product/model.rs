/// Sentinel for any field the product database does not provide.
pub const UNKNOWN: &str = "Unknown";

/// Recognition method that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionMethod {
    Barcode,
    Text,
    WebEntities,
    LogoLabel,
}

impl std::fmt::Display for RecognitionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecognitionMethod::Barcode => write!(f, "barcode"),
            RecognitionMethod::Text => write!(f, "text"),
            RecognitionMethod::WebEntities => write!(f, "web_entities"),
            RecognitionMethod::LogoLabel => write!(f, "logo_label"),
        }
    }
}

/// Output of a single recognition call, ordered best first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionResult {
    Barcode(String),
    TextTokens(Vec<String>),
    WebEntities(Vec<String>),
    Logos(Vec<String>),
    Labels(Vec<String>),
}

impl RecognitionResult {
    pub fn is_empty(&self) -> bool {
        match self {
            RecognitionResult::Barcode(code) => code.is_empty(),
            RecognitionResult::TextTokens(items)
            | RecognitionResult::WebEntities(items)
            | RecognitionResult::Logos(items)
            | RecognitionResult::Labels(items) => items.is_empty(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        match self {
            RecognitionResult::Barcode(code) => std::slice::from_ref(code),
            RecognitionResult::TextTokens(items)
            | RecognitionResult::WebEntities(items)
            | RecognitionResult::Logos(items)
            | RecognitionResult::Labels(items) => items,
        }
    }
}

impl std::fmt::Display for RecognitionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecognitionResult::Barcode(code) => write!(f, "barcode {}", code),
            RecognitionResult::TextTokens(items) => write!(f, "{} text tokens", items.len()),
            RecognitionResult::WebEntities(items) => write!(f, "{} web entities", items.len()),
            RecognitionResult::Logos(items) => write!(f, "{} logos", items.len()),
            RecognitionResult::Labels(items) => write!(f, "{} labels", items.len()),
        }
    }
}

/// Nutrition values per 100 g, rendered as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionFacts {
    pub energy_kcal_100g: String,
    pub fat_100g: String,
    pub sugars_100g: String,
}

impl Default for NutritionFacts {
    fn default() -> Self {
        Self {
            energy_kcal_100g: UNKNOWN.to_string(),
            fat_100g: UNKNOWN.to_string(),
            sugars_100g: UNKNOWN.to_string(),
        }
    }
}

/// A product exactly as the product database returned it (untranslated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogProduct {
    pub product_name: String,
    pub brands: String,
    pub categories: String,
    pub ingredients_text: String,
    pub allergens: String,
    pub nutrition: NutritionFacts,
}

impl Default for CatalogProduct {
    fn default() -> Self {
        Self {
            product_name: UNKNOWN.to_string(),
            brands: UNKNOWN.to_string(),
            categories: UNKNOWN.to_string(),
            ingredients_text: UNKNOWN.to_string(),
            allergens: UNKNOWN.to_string(),
            nutrition: NutritionFacts::default(),
        }
    }
}

/// Identifying information shown to the user.
///
/// `nutrition` is only filled on the barcode path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub method: RecognitionMethod,
    pub product_name: String,
    pub brands: String,
    pub categories: String,
    pub ingredients: String,
    pub allergens: String,
    pub nutrition: Option<NutritionFacts>,
}

impl ProductRecord {
    /// Display labels and values in presentation order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Product Name", self.product_name.clone()),
            ("Brands", self.brands.clone()),
            ("Categories", self.categories.clone()),
            ("Ingredients", self.ingredients.clone()),
        ];
        if let Some(nutrition) = &self.nutrition {
            fields.push(("Energy (kcal/100g)", nutrition.energy_kcal_100g.clone()));
            fields.push(("Fat (g/100g)", nutrition.fat_100g.clone()));
            fields.push(("Sugars (g/100g)", nutrition.sugars_100g.clone()));
        }
        fields.push(("Allergens", self.allergens.clone()));
        fields
    }
}

/// Result of one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(ProductRecord),
    NotFound,
}

impl LookupOutcome {
    pub fn record(&self) -> Option<&ProductRecord> {
        match self {
            LookupOutcome::Found(record) => Some(record),
            LookupOutcome::NotFound => None,
        }
    }
}
