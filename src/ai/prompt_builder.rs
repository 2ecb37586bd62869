/// Maximum summary length, in characters, requested from the completion model.
///
/// The bound is only stated in the instruction text. Nothing truncates or
/// re-prompts when the model overshoots.
pub const SUMMARY_CHAR_LIMIT: usize = 1600;

/// Sampling temperature for summaries. Zero selects greedy decoding.
pub const SUMMARY_TEMPERATURE: f32 = 0.0;

/// Builds the summarization instruction with the transcript in its single slot.
///
/// # Examples
///
/// ```
/// use yt_summarizer::ai::prompt_builder::build_summary_prompt;
///
/// let prompt = build_summary_prompt("Welcome to the show.");
/// assert!(prompt.ends_with("Video transcript: Welcome to the show."));
/// ```
#[must_use]
pub fn build_summary_prompt(video_transcript: &str) -> String {
    let limit = SUMMARY_CHAR_LIMIT;
    format!(
        "Read through the entire transcript carefully.\n\
         Provide a concise summary of the video's main topic and purpose.\n\
         Extract and list the five most interesting or important points from the transcript.\n\
         For each point: State the key idea in a clear and concise manner.\n\
         \n\
         - Ensure your summary and key points capture the essence of the video without including unnecessary details.\n\
         - Use clear, engaging language that is accessible to a general audience.\n\
         - If the transcript includes any statistical data, expert opinions, or unique insights, prioritize including these in your summary or key points.\n\
         \n\
         VERY IMPORTANT: make sure that your response is within {limit} characters.\n\
         \n\
         Video transcript: {video_transcript}"
    )
}
