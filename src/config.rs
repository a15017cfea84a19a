/// Options for a single run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Print every elaborated declaration to stderr before processing it
    pub dump_ast: bool,
}
