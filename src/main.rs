use logoforge::logger::StageTimer;
use logoforge::{
    BrandTone, BrandType, BrandingProfile, ColorPalette, LogoComposition, LogoSession, LogoStyle,
    OpenAiConfig, UsageContext,
};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    logoforge::logger::init_with_config(
        logoforge::logger::LoggerConfig::development()
            .with_level(logoforge::logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking OpenAI environment...");

    match env::var("OPENAI_API_KEY") {
        Ok(key) => {
            log::info!("✅ OpenAI API key found in environment");
            log::debug!("API key starts with: {}...", &key[..7.min(key.len())]);
        }
        Err(_) => {
            log::warn!("⚠️  No OPENAI_API_KEY set");
            log::error!("❌ Generation will be blocked until a key is provided");
        }
    }

    if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
        log::info!("OPENAI_BASE_URL: {}", base_url);
    }

    let config = OpenAiConfig::from_env();
    log::info!("🤖 Text model: {}", config.text_model());
    log::info!("🎨 Image model: {}", config.image_model());

    let mut session = LogoSession::new(config);

    // Sample questionnaire submission.
    let mut profile = BrandingProfile::new("GreenBloom");
    profile.brand_type = BrandType::HealthWellness;
    profile.tagline = Some("Grow well. Live well.".to_string());
    profile.target_audience = Some("Urban millennials and small wellness studios".to_string());
    profile.logo_styles = vec![LogoStyle::Minimalist, LogoStyle::Symbolic];
    profile.color_palettes = vec![ColorPalette::Greens, ColorPalette::EarthTones];
    profile.composition = LogoComposition::Combination;
    profile.icon_elements = Some("leaf".to_string());
    profile.brand_tone = BrandTone::Friendly;
    profile.usage_contexts = vec![UsageContext::Website, UsageContext::Packaging];
    profile.unique_aspects = Some("Sustainability-first sourcing".to_string());

    log::info!("📋 Branding profile:");
    for line in profile.to_profile_text().lines() {
        log::info!("   {}", line);
    }

    log::info!("🎨 Generating logo...");
    let timer = StageTimer::new("logo generation");

    match session.generate(&profile).await {
        Ok(artifact) => {
            drop(timer);
            log::info!("✅ Logo generated successfully!");
            log::info!("🔗 Source URL: {}", artifact.url);
            log::info!("💾 Saved to: {}", artifact.path.display());
            log::info!(
                "📥 Offer for download as '{}' ({}, {} bytes)",
                artifact.download_file_name(),
                artifact.mime_type(),
                artifact.bytes.len()
            );
        }
        Err(e) => {
            log::error!("❌ Logo generation failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
