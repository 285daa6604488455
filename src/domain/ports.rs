use crate::utils::error::Result;

/// Line-oriented operator console.
pub trait Console {
    /// Next input line without its line terminator, or `None` once input is closed.
    fn read_line(&mut self) -> Result<Option<String>>;
    fn write(&mut self, text: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}
