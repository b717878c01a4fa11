use design_tokens::{catalogue, Token, TokenScale};
use leptos::*;
use prism_ui::prelude::*;

use crate::{DemoBlock, SectionHeading};

/// Custom property name a swatch documents, matching the exported stylesheet.
pub(crate) fn swatch_variable(scale: &str, step: &str) -> String {
    format!("--color-{scale}-{}", step.replace('.', "_"))
}

/// Pretty JSON of the whole catalogue, or `None` when serialization fails.
pub(crate) fn export_catalogue() -> Option<String> {
    match serde_json::to_string_pretty(catalogue()) {
        Ok(json) => Some(json),
        Err(err) => {
            logging::warn!("token catalogue export failed: {err}");
            None
        }
    }
}

#[component]
fn ColorRamp(scale: &'static TokenScale) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <h4 class="text-sm font-semibold capitalize text-foreground">{scale.name.as_str()}</h4>
            <div class="grid grid-cols-3 gap-3 sm:grid-cols-6 lg:grid-cols-11">
                {scale
                    .tokens
                    .iter()
                    .map(|token| view! { <Swatch scale=scale.name.as_str() token /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Swatch(scale: &'static str, token: &'static Token) -> impl IntoView {
    view! {
        <div class="group" data-ui-kind="swatch">
            <div
                class="h-14 rounded-lg border border-border/50 shadow-sm transition-transform group-hover:scale-105"
                style=format!("background-color: {}", token.value)
            ></div>
            <div class="mt-2 text-xs">
                <p class="font-medium text-foreground">{token.name.as_str()}</p>
                <p class="truncate font-mono text-muted-foreground" title=token.value.as_str()>
                    {swatch_variable(scale, &token.name)}
                </p>
            </div>
        </div>
    }
}

#[component]
fn TokenRow(label: String, value: String, #[prop(optional, into)] demo: Option<ViewFn>) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 rounded-lg bg-muted/50 p-2">
            <span class="w-24 font-mono text-xs text-muted-foreground">{label}</span>
            <span class="flex-1 truncate text-sm">{value}</span>
            {demo.map(|demo| demo.run())}
        </div>
    }
}

#[component]
pub(crate) fn TokensSection() -> impl IntoView {
    let tokens = catalogue();
    let export_open = create_rw_signal(false);
    let exported = create_memo(move |_| export_open.get().then(export_catalogue).flatten());

    view! {
        <section id="design-tokens" class="scroll-mt-32 space-y-8">
            <SectionHeading
                id="design-tokens"
                title="Design Tokens"
                summary="Colors, typography, spacing, radius, shadows and motion, rendered from the token catalogue."
            />

            <Card title="Color Palette" description="Brand ramps and semantic colors">
                <div class="space-y-8">
                    {tokens
                        .colors
                        .iter()
                        .map(|scale| view! { <ColorRamp scale /> })
                        .collect_view()}
                </div>
            </Card>

            <Card title="Typography Scale" description="Font sizes with their line heights">
                <div class="space-y-4">
                    {tokens
                        .typography
                        .font_size
                        .iter()
                        .map(|size| {
                            view! {
                                <div class="flex items-baseline justify-between gap-4 border-b border-border pb-2">
                                    <span class="w-20 font-mono text-xs text-muted-foreground">{size.name.as_str()}</span>
                                    <span
                                        class="flex-1 truncate"
                                        style=format!("font-size: {}; line-height: {}", size.size, size.line_height)
                                    >
                                        "The quick brown fox"
                                    </span>
                                    <span class="text-xs text-muted-foreground">{size.size.as_str()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Card>

            <div class="grid gap-6 md:grid-cols-3">
                <Card title="Spacing">
                    <div class="space-y-2">
                        {tokens
                            .spacing
                            .iter()
                            .map(|token| {
                                let width = format!("width: {}", token.value);
                                view! {
                                    <div class="flex items-center gap-3">
                                        <span class="w-8 font-mono text-xs text-muted-foreground">{token.name.as_str()}</span>
                                        <div class="h-3 rounded bg-primary/20" style=width></div>
                                        <span class="text-xs text-muted-foreground">{token.value.as_str()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Card>

                <Card title="Shadows">
                    <div class="space-y-4">
                        {tokens
                            .shadows
                            .iter()
                            .map(|token| {
                                view! {
                                    <div
                                        class="rounded-lg bg-background p-3"
                                        style=format!("box-shadow: {}", token.value)
                                    >
                                        <span class="font-mono text-xs">{token.name.as_str()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Card>

                <Card title="Border Radius">
                    <div class="space-y-3">
                        {tokens
                            .border_radius
                            .iter()
                            .map(|token| {
                                view! {
                                    <div class="flex items-center gap-3">
                                        <div
                                            class="h-10 w-10 border-2 border-primary bg-primary/20"
                                            style=format!("border-radius: {}", token.value)
                                        ></div>
                                        <span class="font-mono text-xs">{token.name.as_str()}</span>
                                        <span class="text-xs text-muted-foreground">{token.value.as_str()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Card>
            </div>

            <div class="grid gap-6 md:grid-cols-3">
                <Card title="Motion">
                    <div class="space-y-2">
                        {tokens
                            .animation
                            .duration
                            .iter()
                            .chain(tokens.animation.easing.iter())
                            .map(|token| view! { <TokenRow label=token.name.clone() value=token.value.clone() /> })
                            .collect_view()}
                    </div>
                </Card>

                <Card title="Keyframes">
                    <div class="flex flex-wrap gap-2">
                        {tokens
                            .animation
                            .keyframes
                            .iter()
                            .map(|frames| {
                                let style = format!("animation: {} 1.5s ease-in-out infinite alternate", frames.name);
                                view! {
                                    <span
                                        class="rounded-md border border-border px-2 py-1 font-mono text-xs"
                                        style=style
                                    >
                                        {frames.name.as_str()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </Card>

                <Card title="Layers and Opacity">
                    <div class="space-y-2">
                        {tokens
                            .z_index
                            .iter()
                            .map(|token| view! { <TokenRow label=format!("z-{}", token.name) value=token.value.clone() /> })
                            .collect_view()}
                        {tokens
                            .opacity
                            .iter()
                            .map(|token| {
                                let style = format!("opacity: {}", token.value);
                                view! {
                                    <TokenRow
                                        label=format!("opacity-{}", token.name)
                                        value=token.value.clone()
                                        demo=move || view! { <div class="h-6 w-6 rounded bg-primary" style=style.clone()></div> }
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                </Card>
            </div>

            <Card title="Glass Presets" description="Translucent surfaces over the hero gradient">
                <div class="grid gap-6 md:grid-cols-4">
                    {tokens
                        .glass
                        .iter()
                        .map(|preset| {
                            let style = format!(
                                "background: {}; backdrop-filter: blur({}); border: {}",
                                preset.background, preset.blur, preset.border
                            );
                            view! {
                                <div class="relative h-32 rounded-xl bg-gradient-to-br from-primary to-accent p-4">
                                    <div
                                        class="absolute inset-2 flex items-center justify-center rounded-lg text-sm font-medium text-white"
                                        style=style
                                    >
                                        {preset.name.as_str()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Card>

            <Card title="Export" description="The catalogue as JSON for other toolchains">
                <DemoBlock title="Catalogue JSON">
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        leading_icon=IconName::FileText
                        on_click=Callback::new(move |_| export_open.update(|open| *open = !*open))
                    >
                        {move || if export_open.get() { "Hide JSON" } else { "Show JSON" }}
                    </Button>
                    {move || match (export_open.get(), exported.get()) {
                        (true, Some(json)) => view! {
                            <pre class="scrollbar-thin max-h-96 overflow-auto rounded-lg bg-muted/50 p-4 font-mono text-xs">{json}</pre>
                        }
                        .into_view(),
                        (true, None) => view! {
                            <InlineAlert variant=InlineAlertVariant::Error>"The catalogue could not be exported."</InlineAlert>
                        }
                        .into_view(),
                        (false, _) => ().into_view(),
                    }}
                </DemoBlock>
            </Card>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn swatch_variables_follow_the_stylesheet_naming() {
        assert_eq!(swatch_variable("primary", "500"), "--color-primary-500");
        assert_eq!(swatch_variable("success", "main"), "--color-success-main");
        let css = design_tokens::css_custom_properties();
        for scale in &catalogue().colors {
            for token in &scale.tokens {
                assert!(css.contains(&swatch_variable(&scale.name, &token.name)));
            }
        }
    }

    #[test]
    fn export_round_trips_through_the_catalogue_types() {
        let json = export_catalogue().expect("catalogue serializes");
        let parsed: design_tokens::TokenCatalogue = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(&parsed, catalogue());
    }
}
