use crate::error::ConvertError;

#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// 1-based line number in the batch input.
    pub line: usize,
    pub input: String,
    pub output: Result<String, ConvertError>,
}

impl ConversionResult {
    pub fn is_ok(&self) -> bool {
        self.output.is_ok()
    }

    pub fn error_message(&self) -> Option<String> {
        self.output.as_ref().err().map(|e| e.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub results: Vec<ConversionResult>,
    n_failed: usize,
}

impl BatchResult {
    pub fn from_results(results: Vec<ConversionResult>) -> Self {
        let n_failed = results.iter().filter(|r| !r.is_ok()).count();
        Self { results, n_failed }
    }

    pub fn n_total(&self) -> usize {
        self.results.len()
    }

    pub fn n_ok(&self) -> usize {
        self.results.len() - self.n_failed
    }

    pub fn n_failed(&self) -> usize {
        self.n_failed
    }
}
