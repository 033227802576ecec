/// File name offered to clients downloading the result list.
pub const EXPORT_FILE_NAME: &str = "palavras_encontradas.txt";

/// Plain-text export: one word per line, no trailing newline.
pub fn export_text(words: &[String]) -> String {
    words.join("\n")
}
