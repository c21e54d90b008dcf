//! Macros to reduce boilerplate in layer implementations
//!
//! Every overlay carries an extra option map and an event map, and the vector
//! shapes additionally share a [`PathStyle`](crate::layers::vector::PathStyle).
//! These macros generate the matching builder methods and accessors.

/// Macro to implement option/event builders and accessors
///
/// This generates:
/// - with_option(), with_options(), with_event()
/// - options(), events(), set_option(), add_event()
///
/// Usage:
/// ```ignore
/// impl MyLayer {
///     impl_layer_extras!(options, events);
/// }
/// ```
#[macro_export]
macro_rules! impl_layer_extras {
    ($options_field:ident, $events_field:ident) => {
        /// Adds an extra option, overriding any styling default with the same key
        pub fn with_option(
            mut self,
            key: impl Into<String>,
            value: impl Into<serde_json::Value>,
        ) -> Self {
            self.$options_field.insert(key.into(), value.into());
            self
        }

        pub fn with_options(mut self, options: $crate::Options) -> Self {
            self.$options_field.extend(options);
            self
        }

        pub fn with_event(
            mut self,
            name: impl Into<String>,
            action: impl Into<String>,
            params: Option<serde_json::Value>,
        ) -> Self {
            self.$events_field.insert(name, action, params);
            self
        }

        pub fn options(&self) -> &$crate::Options {
            &self.$options_field
        }

        pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
            self.$options_field.insert(key.into(), value.into());
        }

        pub fn events(&self) -> &$crate::input::events::Events {
            &self.$events_field
        }

        pub fn add_event(
            &mut self,
            name: impl Into<String>,
            action: impl Into<String>,
            params: Option<serde_json::Value>,
        ) {
            self.$events_field.insert(name, action, params);
        }
    };
}

/// Macro to implement the shared path styling builders
#[macro_export]
macro_rules! impl_path_style {
    ($style_field:ident) => {
        pub fn with_style(mut self, style: $crate::layers::vector::PathStyle) -> Self {
            self.$style_field = style;
            self
        }

        pub fn with_color(mut self, color: impl Into<String>) -> Self {
            self.$style_field.color = color.into();
            self
        }

        pub fn with_weight(mut self, weight: f64) -> Self {
            self.$style_field.weight = weight;
            self
        }

        pub fn with_opacity(mut self, opacity: f64) -> Self {
            self.$style_field.opacity = opacity;
            self
        }

        pub fn with_fill_color(mut self, fill_color: impl Into<String>) -> Self {
            self.$style_field.fill_color = fill_color.into();
            self
        }

        pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
            self.$style_field.fill_opacity = fill_opacity;
            self
        }

        pub fn style(&self) -> &$crate::layers::vector::PathStyle {
            &self.$style_field
        }
    };
}
