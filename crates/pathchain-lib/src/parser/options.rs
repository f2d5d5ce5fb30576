use pathchain_core::DEFAULT_PATH_FIELD;

/// Settings applied while turning a path expression into a chain.
#[derive(Clone, Debug)]
pub struct ParseOptions {
    pub(crate) path_field: String,
    pub(crate) repeats: bool,
    pub(crate) strip_descendant_suffix: bool,
    pub(crate) max_steps: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            path_field: DEFAULT_PATH_FIELD.to_owned(),
            repeats: false,
            strip_descendant_suffix: true,
            max_steps: 1024,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field holding the tokenized path text (default: `PATH`).
    pub fn path_field(mut self, field: impl Into<String>) -> Self {
        self.path_field = field.into();
        self
    }

    /// Let descendant axes match zero or more levels in the matcher.
    pub fn repeats(mut self, repeats: bool) -> Self {
        self.repeats = repeats;
        self
    }

    /// Drop trailing `//` and `.` steps after parsing (default: true).
    pub fn strip_descendant_suffix(mut self, strip: bool) -> Self {
        self.strip_descendant_suffix = strip;
        self
    }

    /// Maximum number of steps in one expression (default: 1,024).
    pub fn max_steps(mut self, limit: usize) -> Self {
        self.max_steps = limit;
        self
    }

    pub fn get_path_field(&self) -> &str {
        &self.path_field
    }
    pub fn get_repeats(&self) -> bool {
        self.repeats
    }
    pub fn get_strip_descendant_suffix(&self) -> bool {
        self.strip_descendant_suffix
    }
    pub fn get_max_steps(&self) -> usize {
        self.max_steps
    }
}
