use std::sync::Arc;

use crate::content::domain::entities::WebsiteSettings;
use crate::theme::style_sink::StyleSink;

/// Style variable names consumed by the rendered page.
pub mod variables {
    pub const COLOR_PRIMARY: &str = "--color-primary";
    pub const COLOR_SECONDARY: &str = "--color-secondary";
    pub const COLOR_BACKGROUND: &str = "--color-background";
    pub const COLOR_TEXT_PRIMARY: &str = "--color-text-primary";
    pub const COLOR_TEXT_SECONDARY: &str = "--color-text-secondary";
    pub const COLOR_ACCENT: &str = "--color-accent";

    pub const FONT_HEADING: &str = "--font-heading";
    pub const FONT_BODY: &str = "--font-body";
    pub const FONT_MONO: &str = "--font-mono";

    pub const ANIMATIONS_ENABLED: &str = "--animations-enabled";
    pub const ANIMATION_SPEED_FACTOR: &str = "--animation-speed-factor";
    pub const ANIMATION_INTENSITY_FACTOR: &str = "--animation-intensity-factor";

    pub const LAYOUT_MAX_WIDTH: &str = "--layout-max-width";
    pub const SPACING_FACTOR: &str = "--spacing-factor";
}

/// One-way projector from website settings into style variables.
///
/// Re-run on every settings change; pure apart from writing the sink, with
/// no error path — a projection, not a transaction.
#[derive(Clone)]
pub struct ThemeBridge {
    sink: Arc<dyn StyleSink>,
}

impl ThemeBridge {
    pub fn new(sink: Arc<dyn StyleSink>) -> Self {
        Self { sink }
    }

    pub fn apply(&self, settings: &WebsiteSettings) {
        let colors = &settings.color_theme;
        self.sink.set_variable(variables::COLOR_PRIMARY, &colors.primary);
        self.sink.set_variable(variables::COLOR_SECONDARY, &colors.secondary);
        self.sink.set_variable(variables::COLOR_BACKGROUND, &colors.background);
        self.sink.set_variable(variables::COLOR_TEXT_PRIMARY, &colors.text_primary);
        self.sink.set_variable(variables::COLOR_TEXT_SECONDARY, &colors.text_secondary);
        self.sink.set_variable(variables::COLOR_ACCENT, &colors.accent);

        let fonts = &settings.fonts;
        self.sink.set_variable(variables::FONT_HEADING, &fonts.heading);
        self.sink.set_variable(variables::FONT_BODY, &fonts.body);
        self.sink.set_variable(variables::FONT_MONO, &fonts.code);

        let animations = &settings.animations;
        if !animations.enabled {
            // Animations are suppressed globally, not per element; the
            // factor variables are withdrawn entirely.
            self.sink.set_variable(variables::ANIMATIONS_ENABLED, "none");
            self.sink.clear_variable(variables::ANIMATION_SPEED_FACTOR);
            self.sink.clear_variable(variables::ANIMATION_INTENSITY_FACTOR);
        } else {
            self.sink.set_variable(variables::ANIMATIONS_ENABLED, "all");
            self.sink.set_variable(
                variables::ANIMATION_SPEED_FACTOR,
                &animations.speed.speed_factor().to_string(),
            );
            self.sink.set_variable(
                variables::ANIMATION_INTENSITY_FACTOR,
                &animations.intensity.intensity_factor().to_string(),
            );
        }

        let layout = &settings.layout;
        self.sink.set_variable(variables::LAYOUT_MAX_WIDTH, &layout.max_width);
        self.sink.set_variable(
            variables::SPACING_FACTOR,
            &layout.spacing.spacing_factor().to_string(),
        );
    }
}
