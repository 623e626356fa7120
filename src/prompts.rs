//! Instruction blocks for the two remote stages.
//!
//! Both stages enforce the same visual constraints on the final logo. The
//! constraint list is declared once and rendered into each instruction block,
//! so the synthesis prompt and the design prompt cannot drift apart.

/// Visual constraints every generated logo must satisfy. Shared by the prompt
/// synthesis instructions and the image design instructions.
pub const LOGO_CONSTRAINTS: &[&str] = &[
    "The output must contain exactly one logo design, not a badge sheet, multi-option layout, or mockup",
    "The background must be pure white or transparent, with no gradients, textures, or scene context",
    "The logo must be perfectly centered, with no surrounding borders, framing lines, or alignment guides",
    "The style must be a clean, flat, vector-style logo suitable for professional branding, scalable and not photorealistic",
    "Use the brand name exactly as provided, with no abbreviation, substitution, or spelling errors",
    "Do not invent placeholder words, filler labels, taglines, or numeric/alphabetic codes",
    "Do not generate rows of alternate icons, variant marks, or real-world mockups such as signs or T-shirts",
];

/// Warning clause appended verbatim to every synthesized logo prompt.
pub const PROMPT_WARNING: &str = "Design must include only one centered logo. Do not \
include multiple versions, extra icons, mockups, or decorative borders. Use a white \
or transparent background only. Do not include any placeholder or filler text. All \
spelling must be correct.";

fn constraint_lines() -> String {
    LOGO_CONSTRAINTS
        .iter()
        .map(|c| format!("- {}.", c))
        .collect::<Vec<_>>()
        .join("\n")
}

/// System instructions for the prompt-synthesis stage. The chat model turns a
/// branding profile into a single plain-text image-generation prompt.
pub fn synthesis_instructions() -> String {
    format!(
        "You are a branding assistant that transforms a detailed branding profile \
         into a highly specific prompt for generating a professional logo with an \
         image generation model.\n\
         \n\
         Strictly follow these visual and technical constraints for the logo design:\n\
         {constraints}\n\
         \n\
         From the branding profile, extract and use the following:\n\
         - Brand Name (use it exactly as provided)\n\
         - Brand Type and Target Audience (guide tone and aesthetic)\n\
         - Logo Style and Color Palette\n\
         - Logo Composition Preference (symbol-only, text-only, or combination)\n\
         - Icon Elements (only those explicitly mentioned; avoid clutter)\n\
         - Brand Tone\n\
         - Unique Aspects (for visual metaphor inspiration)\n\
         - Competitor References (for differentiation)\n\
         - Usage Context (ensure legibility across print, digital, and small-size use)\n\
         \n\
         At the end of the logo prompt you generate, append this warning block \
         verbatim: {warning}\n\
         \n\
         Return only the final logo prompt as a plain string. Do not include JSON, \
         markdown, or explanations.",
        constraints = constraint_lines(),
        warning = PROMPT_WARNING,
    )
}

/// Instruction block prepended to the synthesized prompt for the image stage.
pub fn design_instructions() -> String {
    format!(
        "You are a visual identity assistant generating a single, professional, \
         brand-focused logo design. Produce a clean, high-resolution, centered, \
         presentation-ready logo.\n\
         \n\
         Strict output requirements:\n\
         {constraints}\n\
         - All text must be accurately spelled, including capitalization, spacing, \
         and punctuation.\n\
         \n\
         Create a crisp, minimal, high-quality logo image suitable for brand \
         guidelines, websites, packaging, or app use. Nothing else.",
        constraints = constraint_lines(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_blocks_carry_every_shared_constraint() {
        let synthesis = synthesis_instructions();
        let design = design_instructions();
        for constraint in LOGO_CONSTRAINTS {
            assert!(synthesis.contains(constraint), "synthesis missing: {}", constraint);
            assert!(design.contains(constraint), "design missing: {}", constraint);
        }
    }

    #[test]
    fn synthesis_appends_the_warning_clause() {
        assert!(synthesis_instructions().contains(PROMPT_WARNING));
    }

    #[test]
    fn synthesis_requests_plain_string_output() {
        let synthesis = synthesis_instructions();
        assert!(synthesis.contains("plain string"));
        assert!(synthesis.contains("Do not include JSON"));
    }
}
