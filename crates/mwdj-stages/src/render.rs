use mwdj_core::{ConversionContext, ConverterConfig, Stage};

/// Appended to every result, in both display modes
pub const NBSP: char = '\u{00A0}';

/// Between the original and converted notation in dual mode
pub const SOURCE_SEPARATOR: &str = " | ";

/// Format a converted transcription for display.
pub fn render(source: &str, converted: &str, config: &ConverterConfig) -> String {
    if config.show_source {
        format!("{}{}{}{}", source, SOURCE_SEPARATOR, converted, NBSP)
    } else {
        format!("{}{}", converted, NBSP)
    }
}

/// Final stage: output formatting from the context's source and config
#[derive(Default)]
pub struct RenderStage;

impl Stage for RenderStage {
    fn id(&self) -> &'static str {
        "render.display.v1"
    }

    fn run(&self, input: &str, ctx: &ConversionContext) -> String {
        render(&ctx.source, input, &ctx.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dual_mode() {
        let out = render("ˈbī", "ˈbaɪ", &ConverterConfig::default());
        assert_eq!(out, "ˈbī | ˈbaɪ\u{a0}");
    }

    #[test]
    fn test_target_only_mode() {
        let out = render("ˈbī", "ˈbaɪ", &ConverterConfig::target_only());
        assert_eq!(out, "ˈbaɪ\u{a0}");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render("", "", &ConverterConfig::target_only()), "\u{a0}");
        assert_eq!(render("", "", &ConverterConfig::default()), " | \u{a0}");
    }

    #[test]
    fn test_stage_reads_context() {
        let ctx = ConversionContext::new(ConverterConfig::default(), "ō");
        assert_eq!(RenderStage.run("oʊ", &ctx), "ō | oʊ\u{a0}");
    }
}
