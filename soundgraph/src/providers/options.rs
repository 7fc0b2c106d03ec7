//! Options for text generation requests.

/// Generation options forwarded to the text model.
///
/// Unset fields are omitted from the request, leaving the provider's
/// defaults in effect.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerateOptions {
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Nucleus sampling threshold.
    pub top_p: Option<f32>,
    /// Maximum number of output tokens.
    pub max_output_tokens: Option<u32>,
}

impl GenerateOptions {
    /// Create new default generate options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            temperature: None,
            top_p: None,
            max_output_tokens: None,
        }
    }

    /// Set temperature.
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set top-p sampling.
    #[must_use]
    pub const fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Set the output token limit.
    #[must_use]
    pub const fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = GenerateOptions::new()
            .with_temperature(0.7)
            .with_top_p(0.9)
            .with_max_output_tokens(200);
        assert_eq!(options.temperature, Some(0.7));
        assert_eq!(options.top_p, Some(0.9));
        assert_eq!(options.max_output_tokens, Some(200));
    }

    #[test]
    fn test_options_default_is_unset() {
        let options = GenerateOptions::new();
        assert_eq!(options, GenerateOptions::default());
        assert!(options.temperature.is_none());
        assert!(options.top_p.is_none());
        assert!(options.max_output_tokens.is_none());
    }
}
