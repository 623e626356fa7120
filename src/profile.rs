use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback placeholders used when an optional field is left empty.
pub const NOT_PROVIDED: &str = "Not provided";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const NONE_SPECIFIED: &str = "None specified";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrandType {
    TechStartup,
    FashionLabel,
    HealthWellness,
    FoodBeverage,
    Education,
    NonProfit,
    Finance,
    PersonalBrand,
    Other,
}

impl BrandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrandType::TechStartup => "Tech Startup",
            BrandType::FashionLabel => "Fashion Label",
            BrandType::HealthWellness => "Health & Wellness",
            BrandType::FoodBeverage => "Food & Beverage",
            BrandType::Education => "Education",
            BrandType::NonProfit => "Non-Profit",
            BrandType::Finance => "Finance",
            BrandType::PersonalBrand => "Personal Brand",
            BrandType::Other => "Other",
        }
    }

    pub fn options() -> &'static [BrandType] {
        &[
            BrandType::TechStartup,
            BrandType::FashionLabel,
            BrandType::HealthWellness,
            BrandType::FoodBeverage,
            BrandType::Education,
            BrandType::NonProfit,
            BrandType::Finance,
            BrandType::PersonalBrand,
            BrandType::Other,
        ]
    }
}

impl Default for BrandType {
    fn default() -> Self {
        BrandType::TechStartup
    }
}

impl fmt::Display for BrandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogoStyle {
    Minimalist,
    Vintage,
    BoldGeometric,
    Playful,
    ElegantLuxurious,
    ModernTechy,
    HandDrawn,
    MascotBased,
    Symbolic,
    Typographic,
}

impl LogoStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogoStyle::Minimalist => "Minimalist",
            LogoStyle::Vintage => "Vintage",
            LogoStyle::BoldGeometric => "Bold & Geometric",
            LogoStyle::Playful => "Playful",
            LogoStyle::ElegantLuxurious => "Elegant & Luxurious",
            LogoStyle::ModernTechy => "Modern & Techy",
            LogoStyle::HandDrawn => "Hand-drawn",
            LogoStyle::MascotBased => "Mascot-based",
            LogoStyle::Symbolic => "Symbolic",
            LogoStyle::Typographic => "Typographic",
        }
    }

    pub fn options() -> &'static [LogoStyle] {
        &[
            LogoStyle::Minimalist,
            LogoStyle::Vintage,
            LogoStyle::BoldGeometric,
            LogoStyle::Playful,
            LogoStyle::ElegantLuxurious,
            LogoStyle::ModernTechy,
            LogoStyle::HandDrawn,
            LogoStyle::MascotBased,
            LogoStyle::Symbolic,
            LogoStyle::Typographic,
        ]
    }
}

impl fmt::Display for LogoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorPalette {
    Blues,
    Greens,
    Reds,
    Monochrome,
    Pastels,
    EarthTones,
    NeonHighContrast,
    MutedNeutrals,
}

impl ColorPalette {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorPalette::Blues => "Blues",
            ColorPalette::Greens => "Greens",
            ColorPalette::Reds => "Reds",
            ColorPalette::Monochrome => "Monochrome",
            ColorPalette::Pastels => "Pastels",
            ColorPalette::EarthTones => "Earth tones",
            ColorPalette::NeonHighContrast => "Neon/High contrast",
            ColorPalette::MutedNeutrals => "Muted neutrals",
        }
    }

    pub fn options() -> &'static [ColorPalette] {
        &[
            ColorPalette::Blues,
            ColorPalette::Greens,
            ColorPalette::Reds,
            ColorPalette::Monochrome,
            ColorPalette::Pastels,
            ColorPalette::EarthTones,
            ColorPalette::NeonHighContrast,
            ColorPalette::MutedNeutrals,
        ]
    }
}

impl fmt::Display for ColorPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogoComposition {
    SymbolOnly,
    TextOnly,
    Combination,
}

impl LogoComposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogoComposition::SymbolOnly => "Symbol-only",
            LogoComposition::TextOnly => "Text-only",
            LogoComposition::Combination => "Combination of symbol and text",
        }
    }

    pub fn options() -> &'static [LogoComposition] {
        &[
            LogoComposition::SymbolOnly,
            LogoComposition::TextOnly,
            LogoComposition::Combination,
        ]
    }
}

impl Default for LogoComposition {
    fn default() -> Self {
        LogoComposition::SymbolOnly
    }
}

impl fmt::Display for LogoComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrandTone {
    Professional,
    Friendly,
    Innovative,
    Trustworthy,
    Luxury,
    Adventurous,
    Minimal,
}

impl BrandTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrandTone::Professional => "Professional",
            BrandTone::Friendly => "Friendly",
            BrandTone::Innovative => "Innovative",
            BrandTone::Trustworthy => "Trustworthy",
            BrandTone::Luxury => "Luxury",
            BrandTone::Adventurous => "Adventurous",
            BrandTone::Minimal => "Minimal",
        }
    }

    pub fn options() -> &'static [BrandTone] {
        &[
            BrandTone::Professional,
            BrandTone::Friendly,
            BrandTone::Innovative,
            BrandTone::Trustworthy,
            BrandTone::Luxury,
            BrandTone::Adventurous,
            BrandTone::Minimal,
        ]
    }
}

impl Default for BrandTone {
    fn default() -> Self {
        BrandTone::Professional
    }
}

impl fmt::Display for BrandTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsageContext {
    Website,
    MobileApp,
    Packaging,
    BusinessCards,
    SocialMedia,
    Merchandise,
    AllOfTheAbove,
}

impl UsageContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageContext::Website => "Website",
            UsageContext::MobileApp => "Mobile App",
            UsageContext::Packaging => "Packaging",
            UsageContext::BusinessCards => "Business Cards",
            UsageContext::SocialMedia => "Social Media",
            UsageContext::Merchandise => "Merchandise",
            UsageContext::AllOfTheAbove => "All of the above",
        }
    }

    pub fn options() -> &'static [UsageContext] {
        &[
            UsageContext::Website,
            UsageContext::MobileApp,
            UsageContext::Packaging,
            UsageContext::BusinessCards,
            UsageContext::SocialMedia,
            UsageContext::Merchandise,
            UsageContext::AllOfTheAbove,
        ]
    }
}

impl fmt::Display for UsageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submission of the branding questionnaire. Created fresh per "Generate"
/// action and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandingProfile {
    pub brand_name: String,
    pub brand_type: BrandType,
    pub tagline: Option<String>,
    pub target_audience: Option<String>,
    pub logo_styles: Vec<LogoStyle>,
    pub color_palettes: Vec<ColorPalette>,
    pub composition: LogoComposition,
    pub icon_elements: Option<String>,
    pub brand_tone: BrandTone,
    pub usage_contexts: Vec<UsageContext>,
    pub competitor_references: Option<String>,
    pub unique_aspects: Option<String>,
}

impl BrandingProfile {
    pub fn new(brand_name: impl Into<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
            brand_type: BrandType::default(),
            tagline: None,
            target_audience: None,
            logo_styles: Vec::new(),
            color_palettes: Vec::new(),
            composition: LogoComposition::default(),
            icon_elements: None,
            brand_tone: BrandTone::default(),
            usage_contexts: Vec::new(),
            competitor_references: None,
            unique_aspects: None,
        }
    }

    /// Renders the profile as the text block consumed by prompt synthesis.
    /// Field order is fixed; empty optional fields render as their placeholder.
    pub fn to_profile_text(&self) -> String {
        format!(
            "**Brand Basics:**\n\
             - Brand Name: {}\n\
             - Brand Type: {}\n\
             - Tagline: {}\n\
             - Target Audience: {}\n\
             \n\
             **Visual Style Preferences:**\n\
             - Logo Style: {}\n\
             - Color Palette: {}\n\
             - Logo Composition: {}\n\
             - Icon Elements: {}\n\
             \n\
             **Tone & Purpose:**\n\
             - Brand Tone: {}\n\
             - Usage Context: {}\n\
             - Competitor References: {}\n\
             - Unique Aspects: {}\n",
            self.brand_name,
            self.brand_type,
            text_or(&self.tagline, NOT_PROVIDED),
            text_or(&self.target_audience, NOT_SPECIFIED),
            join_or(&self.logo_styles, NOT_SPECIFIED),
            join_or(&self.color_palettes, NOT_SPECIFIED),
            self.composition,
            text_or(&self.icon_elements, NONE_SPECIFIED),
            self.brand_tone,
            join_or(&self.usage_contexts, NOT_SPECIFIED),
            text_or(&self.competitor_references, NONE_SPECIFIED),
            text_or(&self.unique_aspects, NONE_SPECIFIED),
        )
    }
}

fn text_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    match value.as_deref() {
        Some(text) if !text.trim().is_empty() => text,
        _ => fallback,
    }
}

fn join_or<T: fmt::Display>(values: &[T], fallback: &str) -> String {
    if values.is_empty() {
        fallback.to_string()
    } else {
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_lists_are_complete() {
        assert_eq!(BrandType::options().len(), 9);
        assert_eq!(LogoStyle::options().len(), 10);
        assert_eq!(ColorPalette::options().len(), 8);
        assert_eq!(LogoComposition::options().len(), 3);
        assert_eq!(BrandTone::options().len(), 7);
        assert_eq!(UsageContext::options().len(), 7);
    }

    #[test]
    fn defaults_select_the_first_option() {
        assert_eq!(BrandType::default(), BrandType::TechStartup);
        assert_eq!(LogoComposition::default(), LogoComposition::SymbolOnly);
        assert_eq!(BrandTone::default(), BrandTone::Professional);
    }

    #[test]
    fn empty_profile_uses_every_placeholder() {
        let text = BrandingProfile::new("GreenBloom").to_profile_text();

        assert!(text.contains("- Brand Name: GreenBloom"));
        assert!(text.contains("- Brand Type: Tech Startup"));
        assert!(text.contains("- Tagline: Not provided"));
        assert!(text.contains("- Target Audience: Not specified"));
        assert!(text.contains("- Logo Style: Not specified"));
        assert!(text.contains("- Color Palette: Not specified"));
        assert!(text.contains("- Logo Composition: Symbol-only"));
        assert!(text.contains("- Icon Elements: None specified"));
        assert!(text.contains("- Brand Tone: Professional"));
        assert!(text.contains("- Usage Context: Not specified"));
        assert!(text.contains("- Competitor References: None specified"));
        assert!(text.contains("- Unique Aspects: None specified"));
    }

    #[test]
    fn filled_profile_contains_every_value_verbatim() {
        let mut profile = BrandingProfile::new("Luxoride");
        profile.brand_type = BrandType::FashionLabel;
        profile.tagline = Some("Drive Freely. Live Boldly.".into());
        profile.target_audience = Some("Urban millennials".into());
        profile.logo_styles = vec![LogoStyle::ElegantLuxurious, LogoStyle::Typographic];
        profile.color_palettes = vec![ColorPalette::Monochrome];
        profile.composition = LogoComposition::Combination;
        profile.icon_elements = Some("winged wheel".into());
        profile.brand_tone = BrandTone::Luxury;
        profile.usage_contexts = vec![UsageContext::Website, UsageContext::Packaging];
        profile.competitor_references = Some("Tesla, Patagonia".into());
        profile.unique_aspects = Some("Community-first model".into());

        let text = profile.to_profile_text();

        assert!(text.contains("- Brand Name: Luxoride"));
        assert!(text.contains("- Brand Type: Fashion Label"));
        assert!(text.contains("- Tagline: Drive Freely. Live Boldly."));
        assert!(text.contains("- Logo Style: Elegant & Luxurious, Typographic"));
        assert!(text.contains("- Color Palette: Monochrome"));
        assert!(text.contains("- Logo Composition: Combination of symbol and text"));
        assert!(text.contains("- Icon Elements: winged wheel"));
        assert!(text.contains("- Brand Tone: Luxury"));
        assert!(text.contains("- Usage Context: Website, Packaging"));
        assert!(text.contains("- Competitor References: Tesla, Patagonia"));
        assert!(text.contains("- Unique Aspects: Community-first model"));
    }

    #[test]
    fn whitespace_only_fields_fall_back() {
        let mut profile = BrandingProfile::new("Acme");
        profile.tagline = Some("   ".into());
        let text = profile.to_profile_text();
        assert!(text.contains("- Tagline: Not provided"));
    }

    #[test]
    fn serialization_is_deterministic() {
        let profile = BrandingProfile::new("Acme");
        assert_eq!(profile.to_profile_text(), profile.to_profile_text());
    }
}
