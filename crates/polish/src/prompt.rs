/// Fixed editing instruction sent to the cleanup model
///
/// The wording is deliberately stable: the extension relies on the model
/// returning only the cleaned text, with no framing phrases.
const CLEANUP_INSTRUCTIONS: &str = "\
You are an expert AI editor. Your task is to take the following raw, transcribed text and clean it up.
1. Remove all filler words (like \"um\", \"uh\", \"like\", \"you know\", \"so\", \"well\", etc.).
2. Correct any grammatical mistakes and improve sentence structure.
3. Fix any false starts or repeated phrases.
4. Ensure the final text flows naturally and professionally, but KEEP THE ORIGINAL TONE AND MEANING.
5. Do not add any extra information or introductory phrases like \"Here is the cleaned-up text:\". Just provide the cleaned text directly.";

/// Build the cleanup prompt with the raw transcript embedded verbatim
pub fn cleanup_prompt(transcript: &str) -> String {
    format!("{CLEANUP_INSTRUCTIONS}\n\nRaw Text: \"{transcript}\"\n\nCleaned Text:")
}
