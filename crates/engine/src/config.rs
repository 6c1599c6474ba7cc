use crate::options::{OutputFormat, Section};
use crate::word::{DEFAULT_MAX_WORD_LENGTH, WORD_LENGTH_LIMIT};
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    /// Work files, analyzed and reported in this order.
    #[builder(default)]
    pub works: Vec<PathBuf>,
    #[builder(default)]
    pub stopwords: Option<PathBuf>,
    #[builder(default = "DEFAULT_MAX_WORD_LENGTH")]
    pub max_word_length: usize,

    /// Worker threads; `0` lets rayon decide.
    #[builder(default)]
    pub jobs: usize,
    /// Abort on the first failing work instead of skipping it.
    #[builder(default)]
    pub strict: bool,

    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
    #[builder(default = "Section::ALL.to_vec()")]
    pub sections: Vec<Section>,
    #[builder(default)]
    pub top_words: usize,
    #[builder(default)]
    pub output_path: Option<PathBuf>,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(max) = self.max_word_length
            && !(1..=WORD_LENGTH_LIMIT).contains(&max)
        {
            return Err(format!(
                "max_word_length must be between 1 and {WORD_LENGTH_LIMIT}, got {max}"
            ));
        }
        if matches!(&self.sections, Some(sections) if sections.is_empty()) {
            return Err("at least one section is required".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            works: vec![],
            stopwords: None,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            jobs: 0,
            strict: false,
            format: OutputFormat::Table,
            sections: Section::ALL.to_vec(),
            top_words: 0,
            output_path: None,
        }
    }
}
