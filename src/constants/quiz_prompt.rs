pub const QUIZ_SYSTEM_PROMPT: &str = "You are an expert quiz author who writes accurate, unambiguous multiple-choice questions for learners.

You always answer with a raw JSON array and nothing else:
- no markdown code fences
- no commentary before or after the array
- no trailing commas";

/// User prompt asking for one batch of `count` questions on `topic`, with ids
/// numbered from `starting_id`.
pub fn quiz_batch_prompt(topic: &str, count: u32, starting_id: u64) -> String {
    let last_id = starting_id + u64::from(count.saturating_sub(1));

    format!(
        "Generate exactly {count} multiple-choice questions about \"{topic}\".

Return ONLY a JSON array. Each element must have this shape:
{{
  \"id\": <integer, starting at {starting_id} and ending at {last_id}>,
  \"question\": \"<question text>\",
  \"options\": [\"<option 1>\", \"<option 2>\", \"<option 3>\", \"<option 4>\"],
  \"correctAnswers\": [<zero-based index of each correct option>],
  \"multipleChoice\": <true if more than one option is correct, otherwise false>,
  \"difficulty\": \"easy\" | \"medium\" | \"hard\",
  \"explanation\": \"<one or two sentences on why the answer is correct>\",
  \"category\": \"<subtopic of {topic}>\"
}}

Rules:
1. Every question has exactly 4 options.
2. Spread difficulty across the batch: roughly 30% easy, 50% medium and 20% hard.
3. Vary the position of the correct option; do not always use index 0.
4. Keep explanations short.
5. Do not wrap the array in ```json fences or any other markdown."
    )
}
