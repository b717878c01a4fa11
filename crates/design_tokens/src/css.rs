//! CSS renderings of the token catalogue.

use std::fmt::Write;

use crate::{catalogue, Token, TokenCatalogue};

fn property_name(prefix: &str, name: &str) -> String {
    format!("--{prefix}-{}", name.replace('.', "_"))
}

fn push_tokens(out: &mut String, prefix: &str, tokens: &[Token]) {
    for token in tokens {
        let _ = writeln!(out, "  {}: {};", property_name(prefix, &token.name), token.value);
    }
}

fn render_custom_properties(catalogue: &TokenCatalogue) -> String {
    let mut out = String::from(":root {\n");
    for scale in &catalogue.colors {
        push_tokens(&mut out, &format!("color-{}", scale.name), &scale.tokens);
    }
    push_tokens(&mut out, "font-family", &catalogue.typography.font_family);
    for size in &catalogue.typography.font_size {
        let _ = writeln!(out, "  {}: {};", property_name("font-size", &size.name), size.size);
        let _ = writeln!(
            out,
            "  {}: {};",
            property_name("line-height", &size.name),
            size.line_height
        );
    }
    push_tokens(&mut out, "font-weight", &catalogue.typography.font_weight);
    push_tokens(&mut out, "letter-spacing", &catalogue.typography.letter_spacing);
    push_tokens(&mut out, "radius", &catalogue.border_radius);
    push_tokens(&mut out, "spacing", &catalogue.spacing);
    push_tokens(&mut out, "shadow", &catalogue.shadows);
    push_tokens(&mut out, "opacity", &catalogue.opacity);
    push_tokens(&mut out, "z", &catalogue.z_index);
    push_tokens(&mut out, "duration", &catalogue.animation.duration);
    push_tokens(&mut out, "ease", &catalogue.animation.easing);
    push_tokens(&mut out, "blur", &catalogue.blur);
    for preset in &catalogue.glass {
        let prefix = format!("glass-{}", preset.name);
        let _ = writeln!(out, "  --{prefix}-background: {};", preset.background);
        let _ = writeln!(out, "  --{prefix}-blur: {};", preset.blur);
        let _ = writeln!(out, "  --{prefix}-border: {};", preset.border);
    }
    push_tokens(&mut out, "gradient", &catalogue.gradients);
    push_tokens(&mut out, "breakpoint", &catalogue.breakpoints);
    out.push_str("}\n");
    out
}

fn render_keyframes(catalogue: &TokenCatalogue) -> String {
    let mut out = String::new();
    for frames in &catalogue.animation.keyframes {
        let _ = writeln!(out, "@keyframes {} {{", frames.name);
        for step in &frames.steps {
            let declarations = step
                .declarations
                .iter()
                .map(|decl| format!("{}: {};", decl.name, decl.value))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(out, "  {} {{ {declarations} }}", step.at);
        }
        out.push_str("}\n");
    }
    out
}

/// Renders every scalar token as a CSS custom property inside a `:root` block.
///
/// Property names are `--{group}-{name}`; dots in names become underscores
/// (`spacing.0.5` → `--spacing-0_5`).
pub fn css_custom_properties() -> String {
    render_custom_properties(catalogue())
}

/// Renders every keyframes token as an `@keyframes` rule.
pub fn keyframes_css() -> String {
    render_keyframes(catalogue())
}

/// Custom properties followed by keyframes, ready for a `<style>` element.
pub fn stylesheet() -> String {
    let mut css = css_custom_properties();
    css.push_str(&keyframes_css());
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_properties_cover_each_group() {
        let css = css_custom_properties();
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --color-primary-500: hsl(226, 100%, 54%);\n"));
        assert!(css.contains("  --spacing-0_5: 0.125rem;\n"));
        assert!(css.contains("  --line-height-2xl: 2rem;\n"));
        assert!(css.contains("  --ease-ease-in-out: cubic-bezier(0.4, 0, 0.2, 1);\n"));
        assert!(css.contains("  --glass-dark-border: rgba(255, 255, 255, 0.125);\n"));
        assert!(css.contains("  --breakpoint-lg: 1024px;\n"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn keyframes_render_selector_blocks_in_order() {
        let css = keyframes_css();
        assert!(css.contains(
            "@keyframes fade-in {\n  from { opacity: 0; }\n  to { opacity: 1; }\n}\n"
        ));
        assert!(css.contains("  0% { background-position: -200% 0; }\n"));
        assert!(css.contains("@keyframes indeterminate {"));
    }

    #[test]
    fn stylesheet_concatenates_both_sections() {
        let css = stylesheet();
        let root = css.find(":root").expect(":root block");
        let frames = css.find("@keyframes").expect("keyframes");
        assert!(root < frames);
    }
}
