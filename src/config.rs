/// Switches for the split-component extraction.
///
/// Both are on by default. SPQR trees always canonicalize, whatever the
/// options say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecompositionOptions {
    /// Merge adjacent Series/Series and Parallel/Parallel components.
    pub canonicalize: bool,
    /// Check component shapes and virtual edge pairing before returning.
    pub verify: bool,
}

impl Default for DecompositionOptions {
    fn default() -> Self {
        Self {
            canonicalize: true,
            verify: true,
        }
    }
}

impl DecompositionOptions {
    pub fn with_canonicalize(mut self, canonicalize: bool) -> Self {
        self.canonicalize = canonicalize;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}
