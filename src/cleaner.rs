// Common seam for every Markdown pipeline
pub trait TextCleaner: Send + Sync {
    fn clean(&self, text: &str) -> String;
}
